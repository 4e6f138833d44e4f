//! Drivers for the OmniVision OV2710 and OV9740 image sensors.
//!
//! Both chips are configured over SCCB (I2C with 16-bit register addresses) by streaming vendor
//! register tables at them. Any bus implementing the embedded-hal I2C traits will do.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod util;

pub mod format;
pub mod sccb;
pub mod subdev;
pub mod table;

/// Driver for the OV2710 1080p raw Bayer sensor.
#[cfg(feature = "ov2710")]
pub mod ov2710;

/// Driver for the OV9740 720p YUV sensor.
#[cfg(feature = "ov9740")]
pub mod ov9740;

#[cfg(test)]
mod mock;

pub use format::{ChipIdent, ChipModel, FrameFormat, PixelCode};
pub use sccb::{Config, Sccb, SccbError};
pub use subdev::{Camera, Sensor, SensorError};
pub use table::{reg, wait_ms, RegEntry};
