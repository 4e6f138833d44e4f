//! Vendor register tables for the OV2710.

use crate::table::{reg, wait_ms, RegEntry};

/// 1920x1080, 10-bit raw over MIPI. Soft reset (0x3008) with settle time up front.
pub(crate) static MODE_1920X1080_10BIT: &[RegEntry] = &[
    reg(0x3103, 0x93),
    reg(0x3008, 0x82),
    wait_ms(5),
    reg(0x3008, 0x02),
    wait_ms(5),
    reg(0x3017, 0x7f),
    reg(0x3018, 0xfc),
    reg(0x3706, 0x61),
    reg(0x3712, 0x0c),
    reg(0x3630, 0x6d),
    reg(0x3801, 0xb4),
    reg(0x3621, 0x04),
    reg(0x3604, 0x60),
    reg(0x3603, 0xa7),
    reg(0x3631, 0x26),
    reg(0x3600, 0x04),
    reg(0x3620, 0x37),
    reg(0x3623, 0x00),
    reg(0x3702, 0x9e),
    reg(0x3703, 0x5c),
    reg(0x3704, 0x40),
    reg(0x370d, 0x0f),
    reg(0x3713, 0x9f),
    reg(0x3714, 0x4c),
    reg(0x3710, 0x9e),
    reg(0x3801, 0xc4),
    reg(0x3605, 0x05),
    reg(0x3606, 0x3f),
    reg(0x302d, 0x90),
    reg(0x370b, 0x40),
    reg(0x3716, 0x31),
    reg(0x380d, 0x74),
    reg(0x5181, 0x20),
    reg(0x518f, 0x00),
    reg(0x4301, 0xff),
    reg(0x4303, 0x00),
    reg(0x3a00, 0x78),
    reg(0x300f, 0x88),
    reg(0x3011, 0x28),
    reg(0x3a1a, 0x06),
    reg(0x3a18, 0x00),
    reg(0x3a19, 0x7a),
    reg(0x3a13, 0x54),
    reg(0x382e, 0x0f),
    reg(0x381a, 0x1a),
    reg(0x401d, 0x02),
    reg(0x5688, 0x03),
    reg(0x5684, 0x07),
    reg(0x5685, 0xa0),
    reg(0x5686, 0x04),
    reg(0x5687, 0x43),
    reg(0x3011, 0x0a),
    reg(0x300f, 0x8a),
    reg(0x3017, 0x00),
    reg(0x3018, 0x00),
    reg(0x300e, 0x04),
    reg(0x4801, 0x0f),
    reg(0x300f, 0xc3),
    reg(0x3a0f, 0x40),
    reg(0x3a10, 0x38),
    reg(0x3a1b, 0x48),
    reg(0x3a1e, 0x30),
    reg(0x3a11, 0x90),
    reg(0x3a1f, 0x10),
];

/// 1280x720, 10-bit raw over MIPI.
#[cfg(feature = "ov2710-720p")]
pub(crate) static MODE_1280X720: &[RegEntry] = &[
    reg(0x3103, 0x93),
    reg(0x3008, 0x82),
    wait_ms(5),
    reg(0x3008, 0x02),
    wait_ms(5),
    reg(0x3017, 0x7f),
    reg(0x3018, 0xfc),
    reg(0x3706, 0x61),
    reg(0x3712, 0x0c),
    reg(0x3630, 0x6d),
    reg(0x3801, 0xb4),
    reg(0x3621, 0x04),
    reg(0x3604, 0x60),
    reg(0x3603, 0xa7),
    reg(0x3631, 0x26),
    reg(0x3600, 0x04),
    reg(0x3620, 0x37),
    reg(0x3623, 0x00),
    reg(0x3702, 0x9e),
    reg(0x3703, 0x5c),
    reg(0x3704, 0x40),
    reg(0x370d, 0x0f),
    reg(0x3713, 0x9f),
    reg(0x3714, 0x4c),
    reg(0x3710, 0x9e),
    reg(0x3801, 0xc4),
    reg(0x3605, 0x05),
    reg(0x3606, 0x3f),
    reg(0x302d, 0x90),
    reg(0x370b, 0x40),
    reg(0x3716, 0x31),
    reg(0x380d, 0x74),
    reg(0x5181, 0x20),
    reg(0x518f, 0x00),
    reg(0x4301, 0xff),
    reg(0x4303, 0x00),
    reg(0x3a00, 0x78),
    reg(0x300f, 0x88),
    reg(0x3011, 0x28),
    reg(0x3a1a, 0x06),
    reg(0x3a18, 0x00),
    reg(0x3a19, 0x7a),
    reg(0x3a13, 0x54),
    reg(0x382e, 0x0f),
    reg(0x381a, 0x1a),
    reg(0x401d, 0x02),
    reg(0x5688, 0x03),
    reg(0x5684, 0x07),
    reg(0x5685, 0xa0),
    reg(0x5686, 0x04),
    reg(0x5687, 0x43),
    reg(0x3a0f, 0x40),
    reg(0x3a10, 0x38),
    reg(0x3a1b, 0x48),
    reg(0x3a1e, 0x30),
    reg(0x3a11, 0x90),
    reg(0x3a1f, 0x10),
    reg(0x3010, 0x20),
    reg(0x503d, 0xa0),
];
