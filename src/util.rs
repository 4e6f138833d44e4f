//! Miscellaneous helper functions.

/// Driver logging. Goes out over RTT with the `rtt` feature, otherwise it is compiled away.
#[cfg(feature = "rtt")]
macro_rules! rprintln {
    ($($arg:tt)*) => {
        rtt_target::rprintln!($($arg)*)
    };
}

#[cfg(not(feature = "rtt"))]
macro_rules! rprintln {
    ($($arg:tt)*) => {{
        if false {
            let _ = core::format_args!($($arg)*);
        }
    }};
}

/// Split a 16-bit quantity into the (high, low) byte pair the sensors expect on the wire.
pub(crate) fn split_u16(val: u16) -> (u8, u8) {
    let [hi, lo] = val.to_be_bytes();
    (hi, lo)
}

/// Round `val` up to the next multiple of `align`, which must be a power of two.
pub(crate) fn align_up(val: u32, align: u32) -> u32 {
    val.saturating_add(align - 1) & !(align - 1)
}
