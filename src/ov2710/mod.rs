//! OV2710 device driver.
//!
//! The OV2710 only produces 10-bit raw Bayer. Selecting a format just records it; the mode
//! table goes out over the bus when the sensor is powered up.

mod tables;

#[cfg(feature = "adv-debug")]
use crate::format::DbgRegister;
use crate::format::{
    ChipIdent, ChipMatch, ChipModel, ColorSpace, CropCap, DataFmt, Field, FrameFormat, PixelCode,
    Rect,
};
use crate::sccb::{Config, Sccb};
#[cfg(feature = "adv-debug")]
use crate::subdev::{raw_register, raw_value};
use crate::subdev::{BusFlags, LinkFlags, Sensor, SensorError};
use crate::table::RegEntry;
use embedded_hal::blocking::{delay::DelayMs, i2c};

/// Device address is 0x6C, however the I2C driver will left-shift the provided address by 1
pub const OV2710_ADDRESS: u8 = 0x36;

/// Expected product ID
const OV2710_PROD_ID: u16 = 0x2710;

/// Size of the pixel array.
pub const MAX_WIDTH: u32 = 1920;
pub const MAX_HEIGHT: u32 = 1080;

/// Device register addresses.
struct Register;

impl Register {
    // Product ID registers
    pub const PID_H: u16 = 0x300A;
    pub const PID_L: u16 = 0x300B;
}

/// Formats the sensor can output, the first one is the default.
static COLOUR_FMTS: [DataFmt; 1] = [DataFmt {
    code: PixelCode::Sbggr10_1x10,
    colorspace: ColorSpace::Srgb,
}];

/// Find a data format by its pixel code.
fn find_datafmt(code: PixelCode) -> Option<&'static DataFmt> {
    COLOUR_FMTS.iter().find(|fmt| fmt.code == code)
}

/// Sensor output modes, each backed by a vendor register table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// 1920x1080
    Fhd,
    /// 1280x720
    #[cfg(feature = "ov2710-720p")]
    Hd,
}

impl Mode {
    /// Output frame size.
    pub fn size(self) -> (u32, u32) {
        match self {
            Mode::Fhd => (MAX_WIDTH, MAX_HEIGHT),
            #[cfg(feature = "ov2710-720p")]
            Mode::Hd => (1280, 720),
        }
    }

    /// The mode producing exactly `width` x `height`.
    pub fn from_size(width: u32, height: u32) -> Option<Mode> {
        match (width, height) {
            (MAX_WIDTH, MAX_HEIGHT) => Some(Mode::Fhd),
            #[cfg(feature = "ov2710-720p")]
            (1280, 720) => Some(Mode::Hd),
            _ => None,
        }
    }

    /// The mode to offer for a requested size.
    fn nearest(_width: u32, _height: u32) -> Mode {
        #[cfg(feature = "ov2710-720p")]
        {
            if _width <= 1280 && _height <= 720 {
                return Mode::Hd;
            }
        }
        Mode::Fhd
    }

    fn table(self) -> &'static [RegEntry] {
        match self {
            Mode::Fhd => tables::MODE_1920X1080_10BIT,
            #[cfg(feature = "ov2710-720p")]
            Mode::Hd => tables::MODE_1280X720,
        }
    }
}

/// OV2710 driver.
pub struct Ov2710<I2C, D> {
    i2c: I2C,
    delay: D,
    sccb: Sccb<I2C>,
    /// Selected output format.
    fmt: DataFmt,
    mode: Mode,
    /// Product ID read during probe.
    product_id: Option<u16>,
}

impl<I2C, D, E> Ov2710<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u16>,
{
    /// Creates a driver for an OV2710 at its default address.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::new(OV2710_ADDRESS))
    }

    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        let sccb = Sccb::new(&i2c, config);
        Ov2710 {
            i2c,
            delay,
            sccb,
            fmt: COLOUR_FMTS[0],
            mode: Mode::Fhd,
            product_id: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Product ID found by the last `probe`.
    pub fn product_id(&self) -> Option<u16> {
        self.product_id
    }

    /// Chip identification, only answered when addressed by our I2C address.
    pub fn chip_ident(&self, chip: ChipMatch) -> Result<ChipIdent, SensorError<E>> {
        match chip {
            ChipMatch::I2cAddr(addr) if addr == self.sccb.address() => Ok(ChipIdent {
                model: ChipModel::Ov2710,
                revision: 0,
            }),
            ChipMatch::I2cAddr(_) => Err(SensorError::NoDevice),
            _ => Err(SensorError::InvalidArgument),
        }
    }

    /// Read a raw register.
    #[cfg(feature = "adv-debug")]
    pub fn get_register(&mut self, reg: u32) -> Result<DbgRegister, SensorError<E>> {
        let addr = raw_register(reg)?;
        let val = self.sccb.read_register(&mut self.i2c, addr)?;
        Ok(DbgRegister {
            reg,
            size: 1,
            val: val.into(),
        })
    }

    /// Write a raw register.
    #[cfg(feature = "adv-debug")]
    pub fn set_register(&mut self, reg: &DbgRegister) -> Result<(), SensorError<E>> {
        let addr = raw_register(reg.reg)?;
        let val = raw_value(reg.val)?;
        self.sccb
            .write_register(&mut self.i2c, &mut self.delay, addr, val)?;
        Ok(())
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D, E> Sensor for Ov2710<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u16>,
{
    type Error = SensorError<E>;

    fn probe(&mut self) -> Result<ChipIdent, SensorError<E>> {
        let id_high: u16 = self.sccb.read_register(&mut self.i2c, Register::PID_H)?.into();
        let id_low: u16 = self.sccb.read_register(&mut self.i2c, Register::PID_L)?.into();
        let id = (id_high << 8) | id_low;
        self.product_id = Some(id);

        rprintln!("ov2710: chip ID 0x{:04x} detected", id);

        if id != OV2710_PROD_ID {
            return Err(SensorError::ChipId {
                expected: OV2710_PROD_ID,
                found: id,
            });
        }

        Ok(ChipIdent {
            model: ChipModel::Ov2710,
            revision: 0,
        })
    }

    fn try_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), SensorError<E>> {
        let (width, height) = Mode::nearest(mf.width, mf.height).size();
        let fmt = COLOUR_FMTS[0];

        mf.width = width;
        mf.height = height;
        mf.code = fmt.code;
        mf.colorspace = fmt.colorspace;
        mf.field = Field::None;

        self.set_fmt(mf)
    }

    fn set_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), SensorError<E>> {
        // The CSI host could have changed the format, double-check
        let fmt = *find_datafmt(mf.code).ok_or(SensorError::InvalidFormat(mf.code))?;
        let mode = Mode::from_size(mf.width, mf.height).ok_or(
            SensorError::UnsupportedResolution {
                width: mf.width,
                height: mf.height,
            },
        )?;

        rprintln!("ov2710: set_fmt {:?} {}x{}", mf.code, mf.width, mf.height);

        mf.colorspace = fmt.colorspace;
        mf.field = Field::None;
        self.fmt = fmt;
        self.mode = mode;
        Ok(())
    }

    fn get_fmt(&self) -> FrameFormat {
        let (width, height) = self.mode.size();
        FrameFormat {
            width,
            height,
            code: self.fmt.code,
            field: Field::None,
            colorspace: self.fmt.colorspace,
        }
    }

    fn enum_fmt(&self, index: usize) -> Option<PixelCode> {
        COLOUR_FMTS.get(index).map(|fmt| fmt.code)
    }

    fn crop(&self) -> Rect {
        Rect::full(MAX_WIDTH, MAX_HEIGHT)
    }

    fn cropcap(&self) -> CropCap {
        CropCap::full(MAX_WIDTH, MAX_HEIGHT)
    }

    fn set_power(&mut self, on: bool) -> Result<(), SensorError<E>> {
        if on {
            rprintln!("ov2710: power on, {:?} mode", self.mode);
            self.sccb
                .write_table(&mut self.i2c, &mut self.delay, self.mode.table())?;
        }
        Ok(())
    }

    /// The MIPI CSI-2 host owns the bus settings.
    fn query_bus_param(&self, _link: LinkFlags) -> BusFlags {
        BusFlags::empty()
    }

    fn set_bus_param(&mut self, _flags: BusFlags) -> Result<(), SensorError<E>> {
        Err(SensorError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, MockDelay};
    use crate::subdev::Camera;

    fn ov2710() -> Ov2710<MockBus, MockDelay> {
        let bus = MockBus::with_regs(OV2710_ADDRESS, &[(0x300a, 0x27), (0x300b, 0x10)]);
        Ov2710::new(bus, MockDelay::default())
    }

    fn table_writes(table: &[RegEntry]) -> usize {
        table
            .iter()
            .filter(|e| matches!(e, RegEntry::Write { .. }))
            .count()
    }

    #[test]
    fn probe_accepts_ov2710() {
        let mut sensor = ov2710();
        assert_eq!(
            sensor.probe(),
            Ok(ChipIdent {
                model: ChipModel::Ov2710,
                revision: 0
            })
        );
        assert_eq!(sensor.product_id(), Some(0x2710));
    }

    #[test]
    fn probe_rejects_other_chip() {
        let bus = MockBus::with_regs(OV2710_ADDRESS, &[(0x300a, 0x56), (0x300b, 0x42)]);
        let mut sensor = Ov2710::new(bus, MockDelay::default());
        assert_eq!(
            sensor.probe(),
            Err(SensorError::ChipId {
                expected: 0x2710,
                found: 0x5642
            })
        );
    }

    #[cfg(not(feature = "ov2710-720p"))]
    #[test]
    fn try_fmt_forces_full_hd_raw() {
        let mut sensor = ov2710();
        let mut mf = FrameFormat::new(640, 480, PixelCode::Yuyv8_2x8);

        sensor.try_fmt(&mut mf).unwrap();

        assert_eq!(mf.width, 1920);
        assert_eq!(mf.height, 1080);
        assert_eq!(mf.code, PixelCode::Sbggr10_1x10);
        assert_eq!(mf.colorspace, ColorSpace::Srgb);
        assert_eq!(mf.field, Field::None);
        assert_eq!(sensor.get_fmt(), mf);
    }

    #[cfg(feature = "ov2710-720p")]
    #[test]
    fn try_fmt_picks_720p_for_small_requests() {
        let mut sensor = ov2710();
        let mut mf = FrameFormat::new(640, 480, PixelCode::Sbggr10_1x10);
        sensor.try_fmt(&mut mf).unwrap();
        assert_eq!((mf.width, mf.height), (1280, 720));
        assert_eq!(sensor.mode(), Mode::Hd);

        let mut mf = FrameFormat::new(1920, 1080, PixelCode::Sbggr10_1x10);
        sensor.try_fmt(&mut mf).unwrap();
        assert_eq!(sensor.mode(), Mode::Fhd);
    }

    #[test]
    fn set_fmt_validates_without_bus_traffic() {
        let mut sensor = ov2710();

        let mut yuv = FrameFormat::new(1920, 1080, PixelCode::Yuyv8_2x8);
        assert_eq!(
            sensor.set_fmt(&mut yuv),
            Err(SensorError::InvalidFormat(PixelCode::Yuyv8_2x8))
        );

        let mut odd = FrameFormat::new(800, 600, PixelCode::Sbggr10_1x10);
        assert_eq!(
            sensor.set_fmt(&mut odd),
            Err(SensorError::UnsupportedResolution {
                width: 800,
                height: 600
            })
        );

        let mut mf = FrameFormat::new(1920, 1080, PixelCode::Sbggr10_1x10);
        sensor.set_fmt(&mut mf).unwrap();
        assert_eq!(mf.field, Field::None);

        let (bus, _) = sensor.release();
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn power_on_uploads_mode_table() {
        let mut sensor = ov2710();
        sensor.set_power(true).unwrap();

        let (bus, delay) = sensor.release();
        // Two 5 ms waits around the soft reset
        assert_eq!(delay.calls, vec![5, 5]);
        assert_eq!(delay.total_ms(), 10);
        assert_eq!(bus.writes_to(0x3008), vec![0x82, 0x02]);
        assert_eq!(bus.reg(0x3103), 0x93);
        assert_eq!(bus.reg(0x3a1f), 0x10);
        // Runs of consecutive registers went out together
        assert!(bus.writes.len() < table_writes(tables::MODE_1920X1080_10BIT));
    }

    #[test]
    fn power_off_is_silent() {
        let mut sensor = ov2710();
        sensor.set_power(false).unwrap();
        let (bus, delay) = sensor.release();
        assert!(bus.writes.is_empty());
        assert!(delay.calls.is_empty());
    }

    #[test]
    fn chip_ident_checks_address() {
        let sensor = ov2710();
        assert!(sensor.chip_ident(ChipMatch::I2cAddr(OV2710_ADDRESS)).is_ok());
        assert_eq!(
            sensor.chip_ident(ChipMatch::I2cAddr(0x10)),
            Err(SensorError::NoDevice)
        );
        assert_eq!(
            sensor.chip_ident(ChipMatch::I2cDriver),
            Err(SensorError::InvalidArgument)
        );
    }

    #[test]
    fn fixed_geometry() {
        let sensor = ov2710();
        assert_eq!(sensor.enum_fmt(0), Some(PixelCode::Sbggr10_1x10));
        assert_eq!(sensor.enum_fmt(1), None);
        assert_eq!(sensor.crop(), Rect::full(1920, 1080));
        assert_eq!(sensor.cropcap().pixel_aspect.denominator, 1);
        assert_eq!(sensor.query_bus_param(LinkFlags::all()), BusFlags::empty());
    }

    #[test]
    fn bus_params_are_owned_by_host() {
        let mut sensor = ov2710();
        assert_eq!(
            sensor.set_bus_param(BusFlags::MASTER),
            Err(SensorError::Unsupported)
        );
    }

    #[cfg(feature = "adv-debug")]
    #[test]
    fn raw_register_access() {
        let mut sensor = ov2710();
        let dbg = sensor.get_register(0x300a).unwrap();
        assert_eq!(dbg.val, 0x27);
        assert_eq!(dbg.size, 1);

        sensor
            .set_register(&DbgRegister {
                reg: 0x3a1a,
                size: 1,
                val: 0x06,
            })
            .unwrap();
        assert_eq!(sensor.get_register(0x3a1a).unwrap().val, 0x06);

        let too_wide = DbgRegister {
            reg: 0x3a1a,
            size: 1,
            val: 0x106,
        };
        assert_eq!(
            sensor.set_register(&too_wide),
            Err(SensorError::InvalidRegister)
        );
        assert!(sensor.get_register(0x1_0000).is_err());
    }

    #[test]
    fn camera_bring_up() {
        let mut camera = Camera::new(ov2710()).unwrap();
        assert_eq!(camera.ident().model, ChipModel::Ov2710);

        let mf = camera
            .negotiate(FrameFormat::new(1920, 1080, PixelCode::Sbggr10_1x10))
            .unwrap();
        assert_eq!(mf.code, PixelCode::Sbggr10_1x10);
        assert_eq!(camera.formats().count(), 1);

        camera.start().unwrap();
        assert!(camera.is_streaming());

        let (bus, _) = camera.release().release();
        assert_eq!(bus.reg(0x3008), 0x02);
    }
}
