//! Media bus formats and the other descriptive types exchanged with a capture host.

/// Pixel layout on the media bus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelCode {
    /// 8-bit raw Bayer, BGGR order.
    Sbggr8_1x8,
    /// 10-bit raw Bayer, BGGR order.
    Sbggr10_1x10,
    /// YUV 4:2:2, two 8-bit samples per pixel, Y first.
    Yuyv8_2x8,
    /// YUV 4:2:2, two 8-bit samples per pixel, U first.
    Uyvy8_2x8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    Srgb,
    Jpeg,
}

/// Interlacing. The sensors here are progressive only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    None,
    Any,
}

/// A pixel code together with the colorspace a sensor produces it in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DataFmt {
    pub code: PixelCode,
    pub colorspace: ColorSpace,
}

/// Frame format negotiated between a sensor and its host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: PixelCode,
    pub field: Field,
    pub colorspace: ColorSpace,
}

impl FrameFormat {
    /// A request for `width` x `height` in `code`; the sensor fills in the rest.
    pub fn new(width: u32, height: u32, code: PixelCode) -> Self {
        FrameFormat {
            width,
            height,
            code,
            field: Field::Any,
            colorspace: ColorSpace::Srgb,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// The whole pixel array of a `width` x `height` sensor.
    pub const fn full(width: u32, height: u32) -> Self {
        Rect {
            left: 0,
            top: 0,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

/// Cropping capabilities.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CropCap {
    pub bounds: Rect,
    pub defrect: Rect,
    pub pixel_aspect: Fraction,
}

impl CropCap {
    /// Crop bounds covering the full array, square pixels.
    pub const fn full(width: u32, height: u32) -> Self {
        CropCap {
            bounds: Rect::full(width, height),
            defrect: Rect::full(width, height),
            pixel_aspect: Fraction {
                numerator: 1,
                denominator: 1,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChipModel {
    Ov2710,
    Ov9740,
}

/// Chip identification returned to the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChipIdent {
    pub model: ChipModel,
    pub revision: u8,
}

/// How a host addresses a chip-ident query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChipMatch {
    I2cAddr(u8),
    I2cDriver,
}

/// Raw register access for debugging.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DbgRegister {
    pub reg: u32,
    /// Width of the value in bytes.
    pub size: u8,
    pub val: u64,
}
