//! OV9740 device driver.
//!
//! Unlike the OV2710, selecting a format programs the sensor right away: the mode table first,
//! then the crop window and scaler for the exact output size. Streaming is switched separately
//! and picks up the flip controls each time.

mod tables;

#[cfg(feature = "adv-debug")]
use crate::format::DbgRegister;
use crate::format::{
    ChipIdent, ChipModel, ColorSpace, CropCap, Field, FrameFormat, PixelCode, Rect,
};
use crate::sccb::{Config, RegMap, Sccb};
#[cfg(feature = "adv-debug")]
use crate::subdev::{raw_register, raw_value};
use crate::subdev::{
    apply_sensor_flags, BusFlags, Control, ControlInfo, LinkFlags, Sensor, SensorError,
};
use crate::table::RegEntry;
use crate::util::{align_up, split_u16};
use embedded_hal::blocking::{delay::DelayMs, i2c};

/// Device address is 0x20, however the I2C driver will left-shift the provided address by 1
pub const OV9740_ADDRESS: u8 = 0x10;

/// Expected model ID
const OV9740_MODEL_ID: u16 = 0x9740;

/// Size of the pixel array.
pub const MAX_WIDTH: u32 = 1280;
pub const MAX_HEIGHT: u32 = 720;

/// Device register addresses.
struct Register;

impl Register {
    // General status
    pub const MODEL_ID_HI: u16 = 0x0000;
    pub const REVISION_NUMBER: u16 = 0x0002;
    pub const MANUFACTURER_ID: u16 = 0x0003;
    pub const SMIA_VERSION: u16 = 0x0004;

    // General setup
    pub const MODE_SELECT: u16 = 0x0100;
    pub const IMAGE_ORT: u16 = 0x0101;
    pub const SOFTWARE_RESET: u16 = 0x0103;

    // Output size and window
    pub const X_ADDR_START_HI: u16 = 0x0344;
    pub const X_ADDR_START_LO: u16 = 0x0345;
    pub const Y_ADDR_START_HI: u16 = 0x0346;
    pub const Y_ADDR_START_LO: u16 = 0x0347;
    pub const X_ADDR_END_HI: u16 = 0x0348;
    pub const X_ADDR_END_LO: u16 = 0x0349;
    pub const Y_ADDR_END_HI: u16 = 0x034a;
    pub const Y_ADDR_END_LO: u16 = 0x034b;
    pub const X_OUTPUT_SIZE_HI: u16 = 0x034c;
    pub const X_OUTPUT_SIZE_LO: u16 = 0x034d;
    pub const Y_OUTPUT_SIZE_HI: u16 = 0x034e;
    pub const Y_OUTPUT_SIZE_LO: u16 = 0x034f;

    // VFIFO
    pub const VFIFO_READ_START_HI: u16 = 0x4608;
    pub const VFIFO_READ_START_LO: u16 = 0x4609;

    // ISP
    pub const ISP_CTRL00: u16 = 0x5000;
    pub const ISP_CTRL01: u16 = 0x5001;
    pub const ISP_CTRL03: u16 = 0x5003;
    pub const ISP_CTRL1E: u16 = 0x501e;
    pub const ISP_CTRL1F: u16 = 0x501f;
    pub const ISP_CTRL20: u16 = 0x5020;
    pub const ISP_CTRL21: u16 = 0x5021;
}

/// IMAGE_ORT bits.
const ORT_HFLIP: u8 = 0x1;
const ORT_VFLIP: u8 = 0x2;

/// ISP_CTRL01 bit enabling the scaler.
const ISP_SCALE_EN: u8 = 0x10;

/// Pixel codes the sensor can output.
const CODES: [PixelCode; 2] = [PixelCode::Yuyv8_2x8, PixelCode::Sbggr8_1x8];

static CONTROLS: [ControlInfo; 2] = [
    ControlInfo {
        id: Control::VFlip,
        name: "Flip Vertically",
        minimum: 0,
        maximum: 1,
        step: 1,
        default_value: 0,
    },
    ControlInfo {
        id: Control::HFlip,
        name: "Flip Horizontally",
        minimum: 0,
        maximum: 1,
        step: 1,
        default_value: 0,
    },
];

/// Bus settings of the parallel port before any board inversions.
const BUS_FLAGS: BusFlags = BusFlags::from_bits_truncate(
    BusFlags::PCLK_SAMPLE_RISING.bits()
        | BusFlags::MASTER.bits()
        | BusFlags::VSYNC_ACTIVE_HIGH.bits()
        | BusFlags::HSYNC_ACTIVE_HIGH.bits()
        | BusFlags::DATA_ACTIVE_HIGH.bits()
        | BusFlags::DATAWIDTH_8.bits(),
);

/// Select the nearest supported size at or above the request: width aligned to 4 pixels,
/// capped at 720p.
pub fn round_up(width: u32, height: u32) -> (u32, u32) {
    (
        align_up(width, 4).min(MAX_WIDTH),
        height.min(MAX_HEIGHT),
    )
}

/// Output modes with a vendor table behind them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// 640x360 binned at 60 fps.
    Wide360,
    /// 640x480 at 30 fps.
    Vga,
    /// 1280x720 at 30 fps.
    Hd,
}

impl Mode {
    pub fn from_size(width: u32, height: u32) -> Option<Mode> {
        match (width, height) {
            (640, 360) => Some(Mode::Wide360),
            (640, 480) => Some(Mode::Vga),
            (1280, 720) => Some(Mode::Hd),
            _ => None,
        }
    }

    fn table(self) -> &'static [RegEntry] {
        match self {
            Mode::Wide360 => tables::MIPI_2LANE_640X360_60,
            Mode::Vga => tables::MIPI_2LANE_640X480_30,
            Mode::Hd => tables::MIPI_1LANE_1280X720_30,
        }
    }
}

/// Area of the pixel array feeding the scaler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
    /// Scaler input size.
    pub scale_x: u32,
    pub scale_y: u32,
    pub scaling: bool,
}

impl Window {
    /// Use as much of the array as the output's aspect ratio allows: the full width, the full
    /// height, or both for 16:9. The window is centred.
    pub fn for_output(width: u32, height: u32) -> Option<Window> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return None;
        }

        let (scale_x, scale_y) = if MAX_WIDTH * height > MAX_HEIGHT * width {
            ((MAX_HEIGHT * width) / height, MAX_HEIGHT)
        } else {
            (MAX_WIDTH, (MAX_WIDTH * height) / width)
        };

        let x_start = (MAX_WIDTH - scale_x) / 2;
        let y_start = (MAX_HEIGHT - scale_y) / 2;

        Some(Window {
            x_start,
            y_start,
            x_end: x_start + scale_x - 1,
            y_end: y_start + scale_y - 1,
            scale_x,
            scale_y,
            scaling: width != MAX_WIDTH || height != MAX_HEIGHT,
        })
    }

    /// Register values producing a `width` x `height` output from this window.
    fn registers(&self, width: u32, height: u32) -> RegMap {
        let split = |val: u32| split_u16(val as u16);
        let (x_start_hi, x_start_lo) = split(self.x_start);
        let (y_start_hi, y_start_lo) = split(self.y_start);
        let (x_end_hi, x_end_lo) = split(self.x_end);
        let (y_end_hi, y_end_lo) = split(self.y_end);
        let (width_hi, width_lo) = split(width);
        let (height_hi, height_lo) = split(height);
        let (scale_x_hi, scale_x_lo) = split(self.scale_x);
        let (scale_y_hi, scale_y_lo) = split(self.scale_y);
        let (vfifo_hi, vfifo_lo) = split(self.scale_x - width);
        let scale_en = if self.scaling { ISP_SCALE_EN } else { 0 };

        let values = [
            (Register::X_ADDR_START_HI, x_start_hi),
            (Register::X_ADDR_START_LO, x_start_lo),
            (Register::Y_ADDR_START_HI, y_start_hi),
            (Register::Y_ADDR_START_LO, y_start_lo),
            (Register::X_ADDR_END_HI, x_end_hi),
            (Register::X_ADDR_END_LO, x_end_lo),
            (Register::Y_ADDR_END_HI, y_end_hi),
            (Register::Y_ADDR_END_LO, y_end_lo),
            (Register::X_OUTPUT_SIZE_HI, width_hi),
            (Register::X_OUTPUT_SIZE_LO, width_lo),
            (Register::Y_OUTPUT_SIZE_HI, height_hi),
            (Register::Y_OUTPUT_SIZE_LO, height_lo),
            (Register::ISP_CTRL1E, scale_x_hi),
            (Register::ISP_CTRL1F, scale_x_lo),
            (Register::ISP_CTRL20, scale_y_hi),
            (Register::ISP_CTRL21, scale_y_lo),
            (Register::VFIFO_READ_START_HI, vfifo_hi),
            (Register::VFIFO_READ_START_LO, vfifo_lo),
            (Register::ISP_CTRL00, 0xff),
            (Register::ISP_CTRL01, 0xef | scale_en),
            (Register::ISP_CTRL03, 0xff),
        ];

        let mut map = RegMap::new();
        for (reg, val) in values.iter() {
            // 21 entries, always fits
            let _ = map.insert(*reg, *val);
        }
        map
    }
}

/// Identification registers read during probe.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChipInfo {
    pub model: u16,
    pub revision: u8,
    pub manufacturer: u8,
    pub smia_version: u8,
}

/// OV9740 driver.
pub struct Ov9740<I2C, D> {
    i2c: I2C,
    delay: D,
    sccb: Sccb<I2C>,
    info: Option<ChipInfo>,
    vflip: bool,
    hflip: bool,
    /// Kept for restoring the sensor after a power cycle.
    current_mf: FrameFormat,
    current_enable: bool,
}

impl<I2C, D, E> Ov9740<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u16>,
{
    /// Creates a driver for an OV9740 at its default address.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::new(OV9740_ADDRESS))
    }

    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        let sccb = Sccb::new(&i2c, config);
        Ov9740 {
            i2c,
            delay,
            sccb,
            info: None,
            vflip: false,
            hflip: false,
            current_mf: FrameFormat {
                width: MAX_WIDTH,
                height: MAX_HEIGHT,
                code: PixelCode::Sbggr8_1x8,
                field: Field::None,
                colorspace: ColorSpace::Srgb,
            },
            current_enable: false,
        }
    }

    /// Identification found by the last successful `probe`.
    pub fn chip_info(&self) -> Option<ChipInfo> {
        self.info
    }

    pub fn chip_ident(&self) -> Option<ChipIdent> {
        self.info.map(|info| ChipIdent {
            model: ChipModel::Ov9740,
            revision: info.revision,
        })
    }

    /// Whether the host last asked for streaming.
    pub fn is_enabled(&self) -> bool {
        self.current_enable
    }

    /// Controls this sensor offers.
    pub fn controls(&self) -> &'static [ControlInfo] {
        &CONTROLS
    }

    pub fn get_control(&self, control: Control) -> i32 {
        match control {
            Control::VFlip => self.vflip.into(),
            Control::HFlip => self.hflip.into(),
        }
    }

    /// Change a control. Takes effect on the next stream start or stop.
    pub fn set_control(&mut self, control: Control, value: i32) -> Result<(), SensorError<E>> {
        let info = CONTROLS
            .iter()
            .find(|info| info.id == control)
            .ok_or(SensorError::InvalidArgument)?;
        if value < info.minimum || value > info.maximum {
            return Err(SensorError::InvalidArgument);
        }

        match control {
            Control::VFlip => self.vflip = value != 0,
            Control::HFlip => self.hflip = value != 0,
        }
        Ok(())
    }

    /// Program the crop window, output size and scaler for `width` x `height`.
    fn set_res(&mut self, width: u32, height: u32) -> Result<(), SensorError<E>> {
        let window = Window::for_output(width, height)
            .ok_or(SensorError::UnsupportedResolution { width, height })?;
        let map = window.registers(width, height);
        self.sccb
            .apply_config(&mut self.i2c, &mut self.delay, &map, false)?;
        Ok(())
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

impl<I2C, D, E> Sensor for Ov9740<I2C, D>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
    D: DelayMs<u16>,
{
    type Error = SensorError<E>;

    fn probe(&mut self) -> Result<ChipIdent, SensorError<E>> {
        let info = ChipInfo {
            model: self
                .sccb
                .read_register_pair(&mut self.i2c, Register::MODEL_ID_HI)?,
            revision: self
                .sccb
                .read_register(&mut self.i2c, Register::REVISION_NUMBER)?,
            manufacturer: self
                .sccb
                .read_register(&mut self.i2c, Register::MANUFACTURER_ID)?,
            smia_version: self
                .sccb
                .read_register(&mut self.i2c, Register::SMIA_VERSION)?,
        };

        if info.model != OV9740_MODEL_ID {
            return Err(SensorError::ChipId {
                expected: OV9740_MODEL_ID,
                found: info.model,
            });
        }

        rprintln!(
            "ov9740: model ID 0x{:04x}, revision 0x{:02x}, manufacturer 0x{:02x}, SMIA version 0x{:02x}",
            info.model,
            info.revision,
            info.manufacturer,
            info.smia_version
        );

        self.info = Some(info);
        Ok(ChipIdent {
            model: ChipModel::Ov9740,
            revision: info.revision,
        })
    }

    fn try_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), SensorError<E>> {
        let (width, height) = round_up(mf.width, mf.height);
        mf.width = width;
        mf.height = height;
        mf.field = Field::None;
        mf.code = PixelCode::Sbggr8_1x8;
        mf.colorspace = ColorSpace::Srgb;
        Ok(())
    }

    fn set_fmt(&mut self, mf: &mut FrameFormat) -> Result<(), SensorError<E>> {
        let (width, height) = round_up(mf.width, mf.height);
        mf.width = width;
        mf.height = height;

        let colorspace = match mf.code {
            PixelCode::Yuyv8_2x8 => ColorSpace::Jpeg,
            PixelCode::Sbggr8_1x8 => ColorSpace::Srgb,
            code => return Err(SensorError::InvalidFormat(code)),
        };
        let mode = Mode::from_size(width, height)
            .ok_or(SensorError::UnsupportedResolution { width, height })?;

        self.sccb
            .write_table(&mut self.i2c, &mut self.delay, mode.table())?;
        self.set_res(width, height)?;

        mf.colorspace = colorspace;
        mf.field = Field::None;
        self.current_mf = *mf;
        Ok(())
    }

    fn get_fmt(&self) -> FrameFormat {
        self.current_mf
    }

    fn enum_fmt(&self, index: usize) -> Option<PixelCode> {
        CODES.get(index).copied()
    }

    fn crop(&self) -> Rect {
        Rect::full(MAX_WIDTH, MAX_HEIGHT)
    }

    fn cropcap(&self) -> CropCap {
        CropCap::full(MAX_WIDTH, MAX_HEIGHT)
    }

    /// Restore the last format and stream state on power up, stop streaming on power down.
    /// Nothing happens if the sensor was never streaming.
    fn set_power(&mut self, on: bool) -> Result<(), SensorError<E>> {
        if !self.current_enable {
            return Ok(());
        }

        if on {
            let mut mf = self.current_mf;
            self.set_fmt(&mut mf)?;
            self.set_stream(true)
        } else {
            let ret = self.set_stream(false);
            // Resume streaming on the next power up
            self.current_enable = true;
            ret
        }
    }

    fn set_stream(&mut self, enable: bool) -> Result<(), SensorError<E>> {
        // Program orientation register
        let mut set = 0;
        if self.vflip {
            set |= ORT_VFLIP;
        }
        if self.hflip {
            set |= ORT_HFLIP;
        }
        let unset = (ORT_VFLIP | ORT_HFLIP) & !set;
        self.sccb.modify_register(
            &mut self.i2c,
            &mut self.delay,
            Register::IMAGE_ORT,
            set,
            unset,
        )?;

        let ret = if enable {
            rprintln!("ov9740: enabling streaming");
            self.sccb
                .write_register(&mut self.i2c, &mut self.delay, Register::MODE_SELECT, 0x01)
        } else {
            rprintln!("ov9740: disabling streaming");
            // Software reset, then standby
            self.sccb
                .write_register(&mut self.i2c, &mut self.delay, Register::SOFTWARE_RESET, 0x01)
                .and_then(|_| {
                    self.sccb.write_register(
                        &mut self.i2c,
                        &mut self.delay,
                        Register::MODE_SELECT,
                        0x00,
                    )
                })
        };

        self.current_enable = enable;
        ret.map_err(SensorError::from)
    }

    fn query_bus_param(&self, link: LinkFlags) -> BusFlags {
        apply_sensor_flags(link, BUS_FLAGS)
    }

    fn set_bus_param(&mut self, _flags: BusFlags) -> Result<(), SensorError<E>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBus, MockDelay};
    use crate::subdev::Camera;

    const ID_REGS: [(u16, u8); 5] = [
        (0x0000, 0x97),
        (0x0001, 0x40),
        (0x0002, 0x02),
        (0x0003, 0x7f),
        (0x0004, 0x10),
    ];

    fn ov9740() -> Ov9740<MockBus, MockDelay> {
        let bus = MockBus::with_regs(OV9740_ADDRESS, &ID_REGS);
        Ov9740::new(bus, MockDelay::default())
    }

    fn reg16(bus: &MockBus, hi: u16) -> u16 {
        u16::from_be_bytes([bus.reg(hi), bus.reg(hi + 1)])
    }

    #[test]
    fn round_up_aligns_and_clamps() {
        assert_eq!(round_up(638, 400), (640, 400));
        assert_eq!(round_up(640, 480), (640, 480));
        assert_eq!(round_up(1279, 720), (1280, 720));
        assert_eq!(round_up(1920, 1080), (1280, 720));
    }

    #[test]
    fn window_for_4_3_uses_full_height() {
        let window = Window::for_output(640, 480).unwrap();
        assert_eq!(
            window,
            Window {
                x_start: 160,
                y_start: 0,
                x_end: 1119,
                y_end: 719,
                scale_x: 960,
                scale_y: 720,
                scaling: true,
            }
        );
    }

    #[test]
    fn window_for_16_9_uses_whole_array() {
        let small = Window::for_output(640, 360).unwrap();
        assert_eq!((small.x_start, small.y_start), (0, 0));
        assert_eq!((small.x_end, small.y_end), (1279, 719));
        assert!(small.scaling);

        let full = Window::for_output(1280, 720).unwrap();
        assert_eq!((full.scale_x, full.scale_y), (1280, 720));
        assert!(!full.scaling);
    }

    #[test]
    fn window_rejects_degenerate_sizes() {
        assert_eq!(Window::for_output(0, 480), None);
        assert_eq!(Window::for_output(640, 0), None);
        assert_eq!(Window::for_output(1284, 720), None);
    }

    #[test]
    fn probe_reads_identification() {
        let mut sensor = ov9740();
        let ident = sensor.probe().unwrap();
        assert_eq!(ident.model, ChipModel::Ov9740);
        assert_eq!(ident.revision, 0x02);
        assert_eq!(
            sensor.chip_info(),
            Some(ChipInfo {
                model: 0x9740,
                revision: 0x02,
                manufacturer: 0x7f,
                smia_version: 0x10,
            })
        );
        assert_eq!(sensor.chip_ident(), Some(ident));
    }

    #[test]
    fn probe_rejects_other_chip() {
        let bus = MockBus::with_regs(OV9740_ADDRESS, &[(0x0000, 0x26), (0x0001, 0x40)]);
        let mut sensor = Ov9740::new(bus, MockDelay::default());
        assert_eq!(
            sensor.probe(),
            Err(SensorError::ChipId {
                expected: 0x9740,
                found: 0x2640
            })
        );
        assert_eq!(sensor.chip_ident(), None);
    }

    #[test]
    fn set_fmt_vga_programs_window_and_scaler() {
        let mut sensor = ov9740();
        let mut mf = FrameFormat::new(640, 480, PixelCode::Yuyv8_2x8);

        sensor.set_fmt(&mut mf).unwrap();
        assert_eq!(mf.colorspace, ColorSpace::Jpeg);
        assert_eq!(sensor.get_fmt(), mf);

        let (bus, _) = sensor.release();
        assert_eq!(reg16(&bus, 0x0344), 160);
        assert_eq!(reg16(&bus, 0x0348), 1119);
        assert_eq!(reg16(&bus, 0x034c), 640);
        assert_eq!(reg16(&bus, 0x034e), 480);
        assert_eq!(reg16(&bus, 0x501e), 960);
        assert_eq!(reg16(&bus, 0x5020), 720);
        assert_eq!(reg16(&bus, 0x4608), 320);
        assert_eq!(bus.reg(0x5000), 0xff);
        assert_eq!(bus.reg(0x5001), 0xff);
        assert_eq!(bus.reg(0x5003), 0xff);
    }

    #[test]
    fn set_fmt_720p_disables_scaler() {
        let mut sensor = ov9740();
        let mut mf = FrameFormat::new(1280, 720, PixelCode::Sbggr8_1x8);

        sensor.set_fmt(&mut mf).unwrap();
        assert_eq!(mf.colorspace, ColorSpace::Srgb);

        let (bus, _) = sensor.release();
        assert_eq!(bus.reg(0x5001), 0xef);
        assert_eq!(reg16(&bus, 0x4608), 0);
        assert_eq!(reg16(&bus, 0x034c), 1280);
    }

    #[test]
    fn set_fmt_rejects_unknown_code_and_size() {
        let mut sensor = ov9740();

        let mut raw10 = FrameFormat::new(640, 480, PixelCode::Sbggr10_1x10);
        assert_eq!(
            sensor.set_fmt(&mut raw10),
            Err(SensorError::InvalidFormat(PixelCode::Sbggr10_1x10))
        );

        let mut svga = FrameFormat::new(800, 600, PixelCode::Yuyv8_2x8);
        assert_eq!(
            sensor.set_fmt(&mut svga),
            Err(SensorError::UnsupportedResolution {
                width: 800,
                height: 600
            })
        );

        let (bus, _) = sensor.release();
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn try_fmt_rounds_and_forces_raw() {
        let mut sensor = ov9740();
        let mut mf = FrameFormat::new(1920, 1080, PixelCode::Yuyv8_2x8);
        sensor.try_fmt(&mut mf).unwrap();
        assert_eq!((mf.width, mf.height), (1280, 720));
        assert_eq!(mf.code, PixelCode::Sbggr8_1x8);
        assert_eq!(mf.field, Field::None);
    }

    #[test]
    fn stream_applies_flips() {
        let mut sensor = ov9740();
        sensor.i2c.regs.insert(0x0101, 0x01);
        sensor.set_control(Control::VFlip, 1).unwrap();

        sensor.set_stream(true).unwrap();
        assert!(sensor.is_enabled());
        assert_eq!(sensor.i2c.reg(0x0101), 0x02);
        assert_eq!(sensor.i2c.reg(0x0100), 0x01);

        sensor.set_control(Control::VFlip, 0).unwrap();
        sensor.set_control(Control::HFlip, 1).unwrap();
        sensor.set_stream(false).unwrap();
        assert!(!sensor.is_enabled());
        assert_eq!(sensor.i2c.reg(0x0101), 0x01);
        assert_eq!(sensor.i2c.writes_to(0x0103), vec![0x01]);
        assert_eq!(sensor.i2c.reg(0x0100), 0x00);
    }

    #[test]
    fn controls_are_range_checked() {
        let mut sensor = ov9740();
        assert_eq!(sensor.controls().len(), 2);
        assert_eq!(sensor.get_control(Control::HFlip), 0);

        sensor.set_control(Control::HFlip, 1).unwrap();
        assert_eq!(sensor.get_control(Control::HFlip), 1);
        assert_eq!(
            sensor.set_control(Control::VFlip, 2),
            Err(SensorError::InvalidArgument)
        );
        assert_eq!(sensor.get_control(Control::VFlip), 0);
    }

    #[test]
    fn power_is_ignored_until_streaming() {
        let mut sensor = ov9740();
        sensor.set_power(true).unwrap();
        sensor.set_power(false).unwrap();
        let (bus, _) = sensor.release();
        assert!(bus.writes.is_empty());
    }

    #[test]
    fn power_cycle_restores_stream() {
        let mut sensor = ov9740();
        let mut mf = FrameFormat::new(640, 360, PixelCode::Yuyv8_2x8);
        sensor.set_fmt(&mut mf).unwrap();
        sensor.set_stream(true).unwrap();

        sensor.set_power(false).unwrap();
        assert_eq!(sensor.i2c.reg(0x0100), 0x00);
        assert!(sensor.is_enabled());

        sensor.i2c.writes.clear();
        sensor.set_power(true).unwrap();
        assert_eq!(sensor.i2c.reg(0x0100), 0x01);
        assert_eq!(reg16(&sensor.i2c, 0x034e), 360);
        assert!(!sensor.i2c.writes.is_empty());
        assert_eq!(sensor.get_fmt(), mf);
    }

    #[test]
    fn bus_params_follow_link_inversions() {
        let sensor = ov9740();
        assert_eq!(sensor.query_bus_param(LinkFlags::empty()), BUS_FLAGS);

        let flags = sensor.query_bus_param(LinkFlags::INVERT_PCLK);
        assert!(flags.contains(BusFlags::PCLK_SAMPLE_FALLING));
        assert!(!flags.contains(BusFlags::PCLK_SAMPLE_RISING));
        assert!(flags.contains(BusFlags::DATAWIDTH_8));
    }

    #[cfg(feature = "adv-debug")]
    #[test]
    fn raw_register_access() {
        let mut sensor = ov9740();
        assert_eq!(sensor.get_register(0x0000).unwrap().val, 0x97);
        sensor
            .set_register(&DbgRegister {
                reg: 0x0101,
                size: 1,
                val: 0x03,
            })
            .unwrap();
        assert_eq!(sensor.i2c.reg(0x0101), 0x03);
        assert_eq!(
            sensor.get_register(0xdead_beef),
            Err(SensorError::InvalidRegister)
        );
    }

    #[test]
    fn camera_negotiates_and_streams() {
        let mut camera = Camera::new(ov9740()).unwrap();
        let codes: std::vec::Vec<PixelCode> = camera.formats().collect();
        assert_eq!(codes, vec![PixelCode::Yuyv8_2x8, PixelCode::Sbggr8_1x8]);

        let mf = camera
            .negotiate(FrameFormat::new(640, 480, PixelCode::Yuyv8_2x8))
            .unwrap();
        assert_eq!(mf.code, PixelCode::Sbggr8_1x8);
        assert_eq!((mf.width, mf.height), (640, 480));

        camera.start().unwrap();
        assert!(camera.sensor().is_enabled());
        assert_eq!(camera.sensor().i2c.reg(0x0100), 0x01);

        camera.stop().unwrap();
        assert!(!camera.is_streaming());
        assert_eq!(camera.sensor().i2c.reg(0x0100), 0x00);
    }
}
