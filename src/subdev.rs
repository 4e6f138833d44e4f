//! Abstraction layer between image sensor drivers and the capture host.

use crate::format::{ChipIdent, CropCap, FrameFormat, PixelCode, Rect};
use crate::sccb::SccbError;
use bitflags::bitflags;

bitflags! {
    /// Parallel bus capabilities of a sensor.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct BusFlags: u32 {
        const MASTER = 1 << 0;
        const SLAVE = 1 << 1;
        const HSYNC_ACTIVE_HIGH = 1 << 2;
        const HSYNC_ACTIVE_LOW = 1 << 3;
        const VSYNC_ACTIVE_HIGH = 1 << 4;
        const VSYNC_ACTIVE_LOW = 1 << 5;
        const PCLK_SAMPLE_RISING = 1 << 6;
        const PCLK_SAMPLE_FALLING = 1 << 7;
        const DATA_ACTIVE_HIGH = 1 << 8;
        const DATA_ACTIVE_LOW = 1 << 9;
        const DATAWIDTH_8 = 1 << 10;
        const DATAWIDTH_10 = 1 << 11;
    }
}

bitflags! {
    /// Signal inversions introduced by the board between sensor and host.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct LinkFlags: u32 {
        const INVERT_HSYNC = 1 << 0;
        const INVERT_VSYNC = 1 << 1;
        const INVERT_PCLK = 1 << 2;
    }
}

/// Adjust sensor bus flags for the board link: where the sensor offers only one polarity of an
/// inverted signal, the host sees the opposite one.
pub fn apply_sensor_flags(link: LinkFlags, mut flags: BusFlags) -> BusFlags {
    let pairs = [
        (
            LinkFlags::INVERT_HSYNC,
            BusFlags::HSYNC_ACTIVE_HIGH | BusFlags::HSYNC_ACTIVE_LOW,
        ),
        (
            LinkFlags::INVERT_VSYNC,
            BusFlags::VSYNC_ACTIVE_HIGH | BusFlags::VSYNC_ACTIVE_LOW,
        ),
        (
            LinkFlags::INVERT_PCLK,
            BusFlags::PCLK_SAMPLE_RISING | BusFlags::PCLK_SAMPLE_FALLING,
        ),
    ];

    for (invert, both) in pairs.iter() {
        if !link.contains(*invert) {
            continue;
        }
        let supported = flags & *both;
        if !supported.is_empty() && supported != *both {
            flags ^= *both;
        }
    }

    flags
}

/// Additional camera capabilities exposed as controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    VFlip,
    HFlip,
}

/// Description of a control for the host's query interface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlInfo {
    pub id: Control,
    pub name: &'static str,
    pub minimum: i32,
    pub maximum: i32,
    pub step: i32,
    pub default_value: i32,
}

/// Sensor errors.
#[derive(Debug, Eq, PartialEq)]
pub enum SensorError<E> {
    /// Bus transfer failed.
    Sccb(SccbError<E>),
    /// Chip on the bus is not the one the driver handles.
    ChipId { expected: u16, found: u16 },
    /// Pixel code not produced by this sensor.
    InvalidFormat(PixelCode),
    /// No mode table for this frame size.
    UnsupportedResolution { width: u32, height: u32 },
    /// Raw register address or value out of range.
    InvalidRegister,
    /// Chip ident query addressed to a different device.
    NoDevice,
    /// Unknown control or match type.
    InvalidArgument,
    /// Operation not offered by this sensor.
    Unsupported,
}

impl<E> From<SccbError<E>> for SensorError<E> {
    fn from(e: SccbError<E>) -> Self {
        SensorError::Sccb(e)
    }
}

/// Validate a raw register address coming from a debug interface.
#[cfg(feature = "adv-debug")]
pub(crate) fn raw_register<E>(reg: u32) -> Result<u16, SensorError<E>> {
    if reg & !0xffff != 0 {
        return Err(SensorError::InvalidRegister);
    }
    Ok(reg as u16)
}

/// Validate a raw register value coming from a debug interface.
#[cfg(feature = "adv-debug")]
pub(crate) fn raw_value<E>(val: u64) -> Result<u8, SensorError<E>> {
    if val & !0xff != 0 {
        return Err(SensorError::InvalidRegister);
    }
    Ok(val as u8)
}

/// Any image sensor that implements this trait can be driven by `Camera`.
pub trait Sensor {
    type Error;

    /// Identify the chip on the bus.
    fn probe(&mut self) -> Result<ChipIdent, Self::Error>;

    /// Adjust `mf` to the nearest format the sensor supports.
    fn try_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), Self::Error>;

    /// Select the format the sensor will capture in.
    fn set_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), Self::Error>;

    /// Currently selected format.
    fn get_fmt(&self) -> FrameFormat;

    /// The `index`th supported pixel code, `None` past the end.
    fn enum_fmt(&self, index: usize) -> Option<PixelCode>;

    fn crop(&self) -> Rect;

    fn cropcap(&self) -> CropCap;

    fn set_power(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Start or stop the video stream. Sensors that stream as soon as they are powered don't
    /// need to override this.
    fn set_stream(&mut self, _enable: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn query_bus_param(&self, link: LinkFlags) -> BusFlags;

    fn set_bus_param(&mut self, flags: BusFlags) -> Result<(), Self::Error>;
}

/// Handle for a probed sensor.
pub struct Camera<S> {
    /// Sensor driver.
    sensor: S,
    /// Identification read during probe.
    ident: ChipIdent,
    /// Streaming state.
    streaming: bool,
}

impl<S, E> Camera<S>
where
    S: Sensor<Error = E>,
{
    /// Probe the sensor and take ownership of it.
    pub fn new(mut sensor: S) -> Result<Self, E> {
        let ident = sensor.probe()?;
        Ok(Camera {
            sensor,
            ident,
            streaming: false,
        })
    }

    pub fn ident(&self) -> ChipIdent {
        self.ident
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Pixel codes the sensor offers.
    pub fn formats(&self) -> impl Iterator<Item = PixelCode> + '_ {
        let mut index = 0;
        core::iter::from_fn(move || {
            let code = self.sensor.enum_fmt(index)?;
            index += 1;
            Some(code)
        })
    }

    /// Let the sensor adjust `requested`, then select the result.
    pub fn negotiate(&mut self, requested: FrameFormat) -> Result<FrameFormat, E> {
        let mut mf = requested;
        self.sensor.try_fmt(&mut mf)?;
        self.sensor.set_fmt(&mut mf)?;
        Ok(mf)
    }

    /// Power the sensor up and start streaming.
    pub fn start(&mut self) -> Result<(), E> {
        self.sensor.set_power(true)?;
        self.sensor.set_stream(true)?;
        self.streaming = true;
        Ok(())
    }

    /// Stop streaming and power the sensor down.
    pub fn stop(&mut self) -> Result<(), E> {
        self.sensor.set_stream(false)?;
        self.streaming = false;
        self.sensor.set_power(false)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    /// Give the sensor driver back.
    pub fn release(self) -> S {
        self.sensor
    }
}
