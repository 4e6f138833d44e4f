//! Vendor register tables for the OV9740. 24 MHz input clock in every mode.

use crate::table::{reg, RegEntry};

/// 640x360 binned, 60 fps, two MIPI lanes.
pub(crate) static MIPI_2LANE_640X360_60: &[RegEntry] = &[
    reg(0x0103, 0x01),
    reg(0x0101, 0x01),
    reg(0x3104, 0x20),
    reg(0x0305, 0x03),
    reg(0x0307, 0x4c),
    reg(0x0303, 0x01),
    reg(0x0301, 0x08),
    reg(0x3010, 0x01),
    reg(0x300e, 0x12),
    reg(0x0340, 0x01),
    reg(0x0341, 0x84),
    reg(0x0342, 0x06),
    reg(0x0343, 0x62),
    reg(0x0344, 0x00),
    reg(0x0345, 0x08),
    reg(0x0346, 0x00),
    reg(0x0347, 0x04),
    reg(0x0348, 0x04),
    reg(0x0349, 0xff),
    reg(0x034a, 0x02),
    reg(0x034b, 0xd8),
    reg(0x034c, 0x02),
    reg(0x034d, 0x80),
    reg(0x034e, 0x01),
    reg(0x034f, 0x68),
    reg(0x0383, 0x01),
    reg(0x0387, 0x01),
    reg(0x3002, 0x00),
    reg(0x3004, 0x00),
    reg(0x3005, 0x00),
    reg(0x3012, 0x70),
    reg(0x3013, 0x60),
    reg(0x3014, 0x01),
    reg(0x301f, 0x43),
    reg(0x3026, 0x00),
    reg(0x3027, 0x00),
    reg(0x3601, 0x40),
    reg(0x3602, 0x16),
    reg(0x3603, 0xaa),
    reg(0x3604, 0x0c),
    reg(0x3610, 0xa1),
    reg(0x3612, 0x24),
    reg(0x3620, 0x66),
    reg(0x3621, 0xc0),
    reg(0x3622, 0x9f),
    reg(0x3630, 0xd2),
    reg(0x3631, 0x5e),
    reg(0x3632, 0x27),
    reg(0x3633, 0x50),
    reg(0x3703, 0x42),
    reg(0x3704, 0x10),
    reg(0x3705, 0x45),
    reg(0x3707, 0x13),
    reg(0x3833, 0x04),
    reg(0x3835, 0x04),
    reg(0x3819, 0x6e),
    reg(0x3817, 0x94),
    reg(0x3831, 0x40),
    reg(0x381a, 0x44),
    reg(0x3837, 0x01),
    reg(0x3503, 0x10),
    reg(0x3a18, 0x01),
    reg(0x3a19, 0xb5),
    reg(0x3a1a, 0x05),
    reg(0x3a11, 0x90),
    reg(0x3a1b, 0x4a),
    reg(0x3a0f, 0x48),
    reg(0x3a10, 0x44),
    reg(0x3a1e, 0x42),
    reg(0x3a1f, 0x22),
    reg(0x3a08, 0x00),
    reg(0x3a09, 0xe8),
    reg(0x3a0e, 0x01),
    reg(0x3a14, 0x07),
    reg(0x3a15, 0x40),
    reg(0x3a0a, 0x00),
    reg(0x3a0b, 0xc0),
    reg(0x3a0d, 0x02),
    reg(0x3a02, 0x0c),
    reg(0x3a03, 0x00),
    reg(0x3c0a, 0x9c),
    reg(0x3c0b, 0x3f),
    reg(0x4002, 0x45),
    reg(0x4005, 0x08),
    reg(0x4601, 0x16),
    reg(0x4605, 0x00),
    reg(0x4608, 0x01),
    reg(0x4609, 0x99),
    reg(0x460e, 0x82),
    reg(0x4702, 0x04),
    reg(0x4704, 0x00),
    reg(0x4706, 0x08),
    reg(0x4800, 0x44),
    reg(0x4801, 0x0f),
    reg(0x4803, 0x05),
    reg(0x4805, 0x10),
    reg(0x4837, 0x20),
    reg(0x5000, 0xff),
    reg(0x5001, 0xff),
    reg(0x5002, 0xcf),
    reg(0x5003, 0xff),
    reg(0x5180, 0xf0),
    reg(0x5181, 0x00),
    reg(0x5182, 0x41),
    reg(0x5183, 0x42),
    reg(0x5184, 0x80),
    reg(0x5185, 0x68),
    reg(0x5186, 0x93),
    reg(0x5187, 0xa8),
    reg(0x5188, 0x17),
    reg(0x5189, 0x45),
    reg(0x518a, 0x27),
    reg(0x518b, 0x41),
    reg(0x518c, 0x2d),
    reg(0x518d, 0xf0),
    reg(0x518e, 0x10),
    reg(0x518f, 0xff),
    reg(0x5190, 0x00),
    reg(0x5191, 0xff),
    reg(0x5192, 0x00),
    reg(0x5193, 0xff),
    reg(0x5194, 0x00),
    reg(0x529a, 0x02),
    reg(0x529b, 0x08),
    reg(0x529c, 0x0a),
    reg(0x529d, 0x10),
    reg(0x529e, 0x10),
    reg(0x529f, 0x28),
    reg(0x52a0, 0x32),
    reg(0x52a2, 0x00),
    reg(0x52a3, 0x02),
    reg(0x52a4, 0x00),
    reg(0x52a5, 0x04),
    reg(0x52a6, 0x00),
    reg(0x52a7, 0x08),
    reg(0x52a8, 0x00),
    reg(0x52a9, 0x10),
    reg(0x52aa, 0x00),
    reg(0x52ab, 0x38),
    reg(0x52ac, 0x00),
    reg(0x52ad, 0x3c),
    reg(0x52ae, 0x00),
    reg(0x52af, 0x4c),
    reg(0x530d, 0x06),
    reg(0x5380, 0x01),
    reg(0x5381, 0x00),
    reg(0x5382, 0x00),
    reg(0x5383, 0x0d),
    reg(0x5384, 0x00),
    reg(0x5385, 0x2f),
    reg(0x5386, 0x00),
    reg(0x5387, 0x00),
    reg(0x5388, 0x00),
    reg(0x5389, 0xd3),
    reg(0x538a, 0x00),
    reg(0x538b, 0x0f),
    reg(0x538c, 0x00),
    reg(0x538d, 0x00),
    reg(0x538e, 0x00),
    reg(0x538f, 0x32),
    reg(0x5390, 0x00),
    reg(0x5391, 0x94),
    reg(0x5392, 0x00),
    reg(0x5393, 0xa4),
    reg(0x5394, 0x18),
    reg(0x5401, 0x2c),
    reg(0x5403, 0x28),
    reg(0x5404, 0x06),
    reg(0x5405, 0xe0),
    reg(0x5480, 0x04),
    reg(0x5481, 0x12),
    reg(0x5482, 0x27),
    reg(0x5483, 0x49),
    reg(0x5484, 0x57),
    reg(0x5485, 0x66),
    reg(0x5486, 0x75),
    reg(0x5487, 0x81),
    reg(0x5488, 0x8c),
    reg(0x5489, 0x95),
    reg(0x548a, 0xa5),
    reg(0x548b, 0xb2),
    reg(0x548c, 0xc8),
    reg(0x548d, 0xd9),
    reg(0x548e, 0xec),
    reg(0x5490, 0x01),
    reg(0x5491, 0xc0),
    reg(0x5492, 0x03),
    reg(0x5493, 0x00),
    reg(0x5494, 0x03),
    reg(0x5495, 0xe0),
    reg(0x5496, 0x03),
    reg(0x5497, 0x10),
    reg(0x5498, 0x02),
    reg(0x5499, 0xac),
    reg(0x549a, 0x02),
    reg(0x549b, 0x75),
    reg(0x549c, 0x02),
    reg(0x549d, 0x44),
    reg(0x549e, 0x02),
    reg(0x549f, 0x20),
    reg(0x54a0, 0x02),
    reg(0x54a1, 0x07),
    reg(0x54a2, 0x01),
    reg(0x54a3, 0xec),
    reg(0x54a4, 0x01),
    reg(0x54a5, 0xc0),
    reg(0x54a6, 0x01),
    reg(0x54a7, 0x9b),
    reg(0x54a8, 0x01),
    reg(0x54a9, 0x63),
    reg(0x54aa, 0x01),
    reg(0x54ab, 0x2b),
    reg(0x54ac, 0x01),
    reg(0x54ad, 0x22),
    reg(0x5501, 0x1c),
    reg(0x5502, 0x00),
    reg(0x5503, 0x40),
    reg(0x5504, 0x00),
    reg(0x5505, 0x80),
    reg(0x5800, 0x1c),
    reg(0x5801, 0x16),
    reg(0x5802, 0x15),
    reg(0x5803, 0x16),
    reg(0x5804, 0x18),
    reg(0x5805, 0x1a),
    reg(0x5806, 0x0c),
    reg(0x5807, 0x0a),
    reg(0x5808, 0x08),
    reg(0x5809, 0x08),
    reg(0x580a, 0x0a),
    reg(0x580b, 0x0b),
    reg(0x580c, 0x05),
    reg(0x580d, 0x02),
    reg(0x580e, 0x00),
    reg(0x580f, 0x00),
    reg(0x5810, 0x02),
    reg(0x5811, 0x05),
    reg(0x5812, 0x04),
    reg(0x5813, 0x01),
    reg(0x5814, 0x00),
    reg(0x5815, 0x00),
    reg(0x5816, 0x02),
    reg(0x5817, 0x03),
    reg(0x5818, 0x0a),
    reg(0x5819, 0x07),
    reg(0x581a, 0x05),
    reg(0x581b, 0x05),
    reg(0x581c, 0x08),
    reg(0x581d, 0x0b),
    reg(0x581e, 0x15),
    reg(0x581f, 0x14),
    reg(0x5820, 0x14),
    reg(0x5821, 0x13),
    reg(0x5822, 0x17),
    reg(0x5823, 0x16),
    reg(0x5824, 0x46),
    reg(0x5825, 0x4c),
    reg(0x5826, 0x6c),
    reg(0x5827, 0x4c),
    reg(0x5828, 0x80),
    reg(0x5829, 0x2e),
    reg(0x582a, 0x48),
    reg(0x582b, 0x46),
    reg(0x582c, 0x2a),
    reg(0x582d, 0x68),
    reg(0x582e, 0x08),
    reg(0x582f, 0x26),
    reg(0x5830, 0x44),
    reg(0x5831, 0x46),
    reg(0x5832, 0x62),
    reg(0x5833, 0x0c),
    reg(0x5834, 0x28),
    reg(0x5835, 0x46),
    reg(0x5836, 0x28),
    reg(0x5837, 0x88),
    reg(0x5838, 0x0e),
    reg(0x5839, 0x0e),
    reg(0x583a, 0x2c),
    reg(0x583b, 0x2e),
    reg(0x583c, 0x46),
    reg(0x583d, 0xca),
    reg(0x583e, 0xf0),
    reg(0x5842, 0x02),
    reg(0x5843, 0x5e),
    reg(0x5844, 0x04),
    reg(0x5845, 0x32),
    reg(0x5846, 0x03),
    reg(0x5847, 0x29),
    reg(0x5848, 0x02),
    reg(0x5849, 0xcc),
    reg(0x0100, 0x01),
];

/// 640x480, 30 fps, two MIPI lanes.
pub(crate) static MIPI_2LANE_640X480_30: &[RegEntry] = &[
    reg(0x0103, 0x01),
    reg(0x0101, 0x01),
    reg(0x3104, 0x20),
    reg(0x0305, 0x03),
    reg(0x0307, 0x4c),
    reg(0x0303, 0x01),
    reg(0x0301, 0x08),
    reg(0x3010, 0x01),
    reg(0x300e, 0x12),
    reg(0x0340, 0x03),
    reg(0x0341, 0x07),
    reg(0x0342, 0x06),
    reg(0x0343, 0x62),
    reg(0x0344, 0x00),
    reg(0x0345, 0xa8),
    reg(0x0346, 0x00),
    reg(0x0347, 0x04),
    reg(0x0348, 0x04),
    reg(0x0349, 0x67),
    reg(0x034a, 0x02),
    reg(0x034b, 0xd8),
    reg(0x034c, 0x02),
    reg(0x034d, 0x80),
    reg(0x034e, 0x01),
    reg(0x034f, 0xe0),
    reg(0x3002, 0x00),
    reg(0x3004, 0x00),
    reg(0x3005, 0x00),
    reg(0x3012, 0x70),
    reg(0x3013, 0x60),
    reg(0x3014, 0x01),
    reg(0x301f, 0x43),
    reg(0x3026, 0x00),
    reg(0x3027, 0x00),
    reg(0x3601, 0x40),
    reg(0x3602, 0x16),
    reg(0x3603, 0xaa),
    reg(0x3604, 0x0c),
    reg(0x3610, 0xa1),
    reg(0x3612, 0x24),
    reg(0x3620, 0x66),
    reg(0x3621, 0xc0),
    reg(0x3622, 0x9f),
    reg(0x3630, 0xca),
    reg(0x3631, 0x52),
    reg(0x3632, 0x2f),
    reg(0x3633, 0x50),
    reg(0x3703, 0x42),
    reg(0x3704, 0x10),
    reg(0x3705, 0x45),
    reg(0x3707, 0x11),
    reg(0x3833, 0x04),
    reg(0x3835, 0x04),
    reg(0x3819, 0x6e),
    reg(0x3817, 0x94),
    reg(0x3831, 0x40),
    reg(0x3837, 0x01),
    reg(0x3503, 0x10),
    reg(0x3a18, 0x01),
    reg(0x3a19, 0xb5),
    reg(0x3a1a, 0x05),
    reg(0x3a11, 0x90),
    reg(0x3a1b, 0x4a),
    reg(0x3a0f, 0x48),
    reg(0x3a10, 0x44),
    reg(0x3a1e, 0x42),
    reg(0x3a1f, 0x22),
    reg(0x3a08, 0x00),
    reg(0x3a09, 0xe8),
    reg(0x3a0e, 0x03),
    reg(0x3a14, 0x15),
    reg(0x3a15, 0xc6),
    reg(0x3a0a, 0x00),
    reg(0x3a0b, 0xc0),
    reg(0x3a0d, 0x04),
    reg(0x3a02, 0x18),
    reg(0x3a03, 0x20),
    reg(0x3c0a, 0x9c),
    reg(0x3c0b, 0x3f),
    reg(0x4002, 0x45),
    reg(0x4005, 0x18),
    reg(0x4601, 0x16),
    reg(0x4608, 0x02),
    reg(0x4609, 0x70),
    reg(0x460e, 0x82),
    reg(0x4702, 0x04),
    reg(0x4704, 0x00),
    reg(0x4706, 0x08),
    reg(0x4800, 0x44),
    reg(0x4801, 0x0f),
    reg(0x4803, 0x05),
    reg(0x4805, 0x10),
    reg(0x4837, 0x20),
    reg(0x5000, 0xff),
    reg(0x5001, 0xff),
    reg(0x5003, 0xff),
    reg(0x501e, 0x03),
    reg(0x501f, 0xc0),
    reg(0x5020, 0x02),
    reg(0x5021, 0xd0),
    reg(0x5180, 0xf0),
    reg(0x5181, 0x00),
    reg(0x5182, 0x41),
    reg(0x5183, 0x42),
    reg(0x5184, 0x80),
    reg(0x5185, 0x68),
    reg(0x5186, 0x93),
    reg(0x5187, 0xa8),
    reg(0x5188, 0x17),
    reg(0x5189, 0x45),
    reg(0x518a, 0x27),
    reg(0x518b, 0x41),
    reg(0x518c, 0x2d),
    reg(0x518d, 0xf0),
    reg(0x518e, 0x10),
    reg(0x518f, 0xff),
    reg(0x5190, 0x00),
    reg(0x5191, 0xff),
    reg(0x5192, 0x00),
    reg(0x5193, 0xff),
    reg(0x5194, 0x00),
    reg(0x529a, 0x02),
    reg(0x529b, 0x08),
    reg(0x529c, 0x0a),
    reg(0x529d, 0x10),
    reg(0x529e, 0x10),
    reg(0x529f, 0x28),
    reg(0x52a0, 0x32),
    reg(0x52a2, 0x00),
    reg(0x52a3, 0x02),
    reg(0x52a4, 0x00),
    reg(0x52a5, 0x04),
    reg(0x52a6, 0x00),
    reg(0x52a7, 0x08),
    reg(0x52a8, 0x00),
    reg(0x52a9, 0x10),
    reg(0x52aa, 0x00),
    reg(0x52ab, 0x38),
    reg(0x52ac, 0x00),
    reg(0x52ad, 0x3c),
    reg(0x52ae, 0x00),
    reg(0x52af, 0x4c),
    reg(0x530d, 0x06),
    reg(0x5380, 0x01),
    reg(0x5381, 0x00),
    reg(0x5382, 0x00),
    reg(0x5383, 0x0d),
    reg(0x5384, 0x00),
    reg(0x5385, 0x2f),
    reg(0x5386, 0x00),
    reg(0x5387, 0x00),
    reg(0x5388, 0x00),
    reg(0x5389, 0xd3),
    reg(0x538a, 0x00),
    reg(0x538b, 0x0f),
    reg(0x538c, 0x00),
    reg(0x538d, 0x00),
    reg(0x538e, 0x00),
    reg(0x538f, 0x32),
    reg(0x5390, 0x00),
    reg(0x5391, 0x94),
    reg(0x5392, 0x00),
    reg(0x5393, 0xa4),
    reg(0x5394, 0x18),
    reg(0x5401, 0x2c),
    reg(0x5403, 0x28),
    reg(0x5404, 0x06),
    reg(0x5405, 0xe0),
    reg(0x5480, 0x04),
    reg(0x5481, 0x12),
    reg(0x5482, 0x27),
    reg(0x5483, 0x49),
    reg(0x5484, 0x57),
    reg(0x5485, 0x66),
    reg(0x5486, 0x75),
    reg(0x5487, 0x81),
    reg(0x5488, 0x8c),
    reg(0x5489, 0x95),
    reg(0x548a, 0xa5),
    reg(0x548b, 0xb2),
    reg(0x548c, 0xc8),
    reg(0x548d, 0xd9),
    reg(0x548e, 0xec),
    reg(0x5490, 0x01),
    reg(0x5491, 0xc0),
    reg(0x5492, 0x03),
    reg(0x5493, 0x00),
    reg(0x5494, 0x03),
    reg(0x5495, 0xe0),
    reg(0x5496, 0x03),
    reg(0x5497, 0x10),
    reg(0x5498, 0x02),
    reg(0x5499, 0xac),
    reg(0x549a, 0x02),
    reg(0x549b, 0x75),
    reg(0x549c, 0x02),
    reg(0x549d, 0x44),
    reg(0x549e, 0x02),
    reg(0x549f, 0x20),
    reg(0x54a0, 0x02),
    reg(0x54a1, 0x07),
    reg(0x54a2, 0x01),
    reg(0x54a3, 0xec),
    reg(0x54a4, 0x01),
    reg(0x54a5, 0xc0),
    reg(0x54a6, 0x01),
    reg(0x54a7, 0x9b),
    reg(0x54a8, 0x01),
    reg(0x54a9, 0x63),
    reg(0x54aa, 0x01),
    reg(0x54ab, 0x2b),
    reg(0x54ac, 0x01),
    reg(0x54ad, 0x22),
    reg(0x5501, 0x1c),
    reg(0x5502, 0x00),
    reg(0x5503, 0x40),
    reg(0x5504, 0x00),
    reg(0x5505, 0x80),
    reg(0x5800, 0x1c),
    reg(0x5801, 0x16),
    reg(0x5802, 0x15),
    reg(0x5803, 0x16),
    reg(0x5804, 0x18),
    reg(0x5805, 0x1a),
    reg(0x5806, 0x0c),
    reg(0x5807, 0x0a),
    reg(0x5808, 0x08),
    reg(0x5809, 0x08),
    reg(0x580a, 0x0a),
    reg(0x580b, 0x0b),
    reg(0x580c, 0x05),
    reg(0x580d, 0x02),
    reg(0x580e, 0x00),
    reg(0x580f, 0x00),
    reg(0x5810, 0x02),
    reg(0x5811, 0x05),
    reg(0x5812, 0x04),
    reg(0x5813, 0x01),
    reg(0x5814, 0x00),
    reg(0x5815, 0x00),
    reg(0x5816, 0x02),
    reg(0x5817, 0x03),
    reg(0x5818, 0x0a),
    reg(0x5819, 0x07),
    reg(0x581a, 0x05),
    reg(0x581b, 0x05),
    reg(0x581c, 0x08),
    reg(0x581d, 0x0b),
    reg(0x581e, 0x15),
    reg(0x581f, 0x14),
    reg(0x5820, 0x14),
    reg(0x5821, 0x13),
    reg(0x5822, 0x17),
    reg(0x5823, 0x16),
    reg(0x5824, 0x46),
    reg(0x5825, 0x4c),
    reg(0x5826, 0x6c),
    reg(0x5827, 0x4c),
    reg(0x5828, 0x80),
    reg(0x5829, 0x2e),
    reg(0x582a, 0x48),
    reg(0x582b, 0x46),
    reg(0x582c, 0x2a),
    reg(0x582d, 0x68),
    reg(0x582e, 0x08),
    reg(0x582f, 0x26),
    reg(0x5830, 0x44),
    reg(0x5831, 0x46),
    reg(0x5832, 0x62),
    reg(0x5833, 0x0c),
    reg(0x5834, 0x28),
    reg(0x5835, 0x46),
    reg(0x5836, 0x28),
    reg(0x5837, 0x88),
    reg(0x5838, 0x0e),
    reg(0x5839, 0x0e),
    reg(0x583a, 0x2c),
    reg(0x583b, 0x2e),
    reg(0x583c, 0x46),
    reg(0x583d, 0xca),
    reg(0x583e, 0xf0),
    reg(0x5842, 0x02),
    reg(0x5843, 0x5e),
    reg(0x5844, 0x04),
    reg(0x5845, 0x32),
    reg(0x5846, 0x03),
    reg(0x5847, 0x29),
    reg(0x5848, 0x02),
    reg(0x5849, 0xcc),
    reg(0x0100, 0x01),
];

/// 1280x720, 30 fps, single MIPI lane.
pub(crate) static MIPI_1LANE_1280X720_30: &[RegEntry] = &[
    reg(0x0103, 0x01),
    reg(0x0101, 0x10),
    reg(0x3104, 0x20),
    reg(0x0305, 0x03),
    reg(0x0307, 0x4c),
    reg(0x0303, 0x01),
    reg(0x0301, 0x08),
    reg(0x3010, 0x01),
    reg(0x4300, 0x30),
    reg(0x0340, 0x03),
    reg(0x0341, 0x07),
    reg(0x0342, 0x06),
    reg(0x0343, 0x62),
    reg(0x0344, 0x00),
    reg(0x0345, 0x08),
    reg(0x0346, 0x00),
    reg(0x0347, 0x04),
    reg(0x0348, 0x05),
    reg(0x0349, 0x0c),
    reg(0x034a, 0x02),
    reg(0x034b, 0xd8),
    reg(0x034c, 0x05),
    reg(0x034d, 0x00),
    reg(0x034e, 0x02),
    reg(0x034f, 0xd0),
    reg(0x3002, 0x00),
    reg(0x3004, 0x00),
    reg(0x3005, 0x00),
    reg(0x3012, 0x70),
    reg(0x3013, 0x60),
    reg(0x3014, 0x01),
    reg(0x301f, 0x43),
    reg(0x3026, 0x00),
    reg(0x3027, 0x00),
    reg(0x3601, 0x40),
    reg(0x3602, 0x16),
    reg(0x3603, 0xaa),
    reg(0x3604, 0x0c),
    reg(0x3610, 0xa1),
    reg(0x3612, 0x24),
    reg(0x3620, 0x66),
    reg(0x3621, 0xc0),
    reg(0x3622, 0x9f),
    reg(0x3630, 0xd2),
    reg(0x3631, 0x5e),
    reg(0x3632, 0x27),
    reg(0x3633, 0x50),
    reg(0x3703, 0x42),
    reg(0x3704, 0x10),
    reg(0x3705, 0x45),
    reg(0x3707, 0x11),
    reg(0x3817, 0x94),
    reg(0x3819, 0x6e),
    reg(0x3831, 0x40),
    reg(0x3833, 0x04),
    reg(0x3835, 0x04),
    reg(0x3837, 0x01),
    reg(0x3503, 0x10),
    reg(0x3a18, 0x01),
    reg(0x3a19, 0xb5),
    reg(0x3a1a, 0x05),
    reg(0x3a11, 0x90),
    reg(0x3a1b, 0x4a),
    reg(0x3a0f, 0x48),
    reg(0x3a10, 0x44),
    reg(0x3a1e, 0x42),
    reg(0x3a1f, 0x22),
    reg(0x3a08, 0x00),
    reg(0x3a09, 0xe8),
    reg(0x3a0e, 0x03),
    reg(0x3a14, 0x15),
    reg(0x3a15, 0xc6),
    reg(0x3a0a, 0x00),
    reg(0x3a0b, 0xc0),
    reg(0x3a0d, 0x04),
    reg(0x3a02, 0x18),
    reg(0x3a03, 0x20),
    reg(0x3c0a, 0x9c),
    reg(0x3c0b, 0x3f),
    reg(0x3c01, 0x80),
    reg(0x3c0c, 0x00),
    reg(0x4002, 0x45),
    reg(0x4005, 0x18),
    reg(0x4601, 0x16),
    reg(0x460e, 0x82),
    reg(0x4702, 0x04),
    reg(0x4704, 0x00),
    reg(0x4706, 0x08),
    reg(0x4800, 0x44),
    reg(0x4801, 0x0f),
    reg(0x4803, 0x05),
    reg(0x4805, 0x10),
    reg(0x4837, 0x20),
    reg(0x5000, 0xff),
    reg(0x5001, 0xff),
    reg(0x5003, 0xff),
    reg(0x501a, 0x00),
    reg(0x0601, 0x00),
    reg(0x5180, 0xf0),
    reg(0x5181, 0x00),
    reg(0x5182, 0x41),
    reg(0x5183, 0x42),
    reg(0x5184, 0x80),
    reg(0x5185, 0x68),
    reg(0x5186, 0x93),
    reg(0x5187, 0xa8),
    reg(0x5188, 0x17),
    reg(0x5189, 0x45),
    reg(0x518a, 0x27),
    reg(0x518b, 0x41),
    reg(0x518c, 0x2d),
    reg(0x518d, 0xf0),
    reg(0x518e, 0x10),
    reg(0x518f, 0xff),
    reg(0x5190, 0x00),
    reg(0x5191, 0xff),
    reg(0x5192, 0x00),
    reg(0x5193, 0xff),
    reg(0x5194, 0x00),
    reg(0x529a, 0x02),
    reg(0x529b, 0x08),
    reg(0x529c, 0x0a),
    reg(0x529d, 0x10),
    reg(0x529e, 0x10),
    reg(0x529f, 0x28),
    reg(0x52a0, 0x32),
    reg(0x52a2, 0x00),
    reg(0x52a3, 0x02),
    reg(0x52a4, 0x00),
    reg(0x52a5, 0x04),
    reg(0x52a6, 0x00),
    reg(0x52a7, 0x08),
    reg(0x52a8, 0x00),
    reg(0x52a9, 0x10),
    reg(0x52aa, 0x00),
    reg(0x52ab, 0x38),
    reg(0x52ac, 0x00),
    reg(0x52ad, 0x3c),
    reg(0x52ae, 0x00),
    reg(0x52af, 0x4c),
    reg(0x530d, 0x06),
    reg(0x5380, 0x01),
    reg(0x5381, 0x00),
    reg(0x5382, 0x00),
    reg(0x5383, 0x0d),
    reg(0x5384, 0x00),
    reg(0x5385, 0x2f),
    reg(0x5386, 0x00),
    reg(0x5387, 0x00),
    reg(0x5388, 0x00),
    reg(0x5389, 0xd3),
    reg(0x538a, 0x00),
    reg(0x538b, 0x0f),
    reg(0x538c, 0x00),
    reg(0x538d, 0x00),
    reg(0x538e, 0x00),
    reg(0x538f, 0x32),
    reg(0x5390, 0x00),
    reg(0x5391, 0x94),
    reg(0x5392, 0x00),
    reg(0x5393, 0xa4),
    reg(0x5394, 0x18),
    reg(0x5401, 0x2c),
    reg(0x5403, 0x28),
    reg(0x5404, 0x06),
    reg(0x5405, 0xe0),
    reg(0x5480, 0x04),
    reg(0x5481, 0x12),
    reg(0x5482, 0x27),
    reg(0x5483, 0x49),
    reg(0x5484, 0x57),
    reg(0x5485, 0x66),
    reg(0x5486, 0x75),
    reg(0x5487, 0x81),
    reg(0x5488, 0x8c),
    reg(0x5489, 0x95),
    reg(0x548a, 0xa5),
    reg(0x548b, 0xb2),
    reg(0x548c, 0xc8),
    reg(0x548d, 0xd9),
    reg(0x548e, 0xec),
    reg(0x5490, 0x01),
    reg(0x5491, 0xc0),
    reg(0x5492, 0x03),
    reg(0x5493, 0x00),
    reg(0x5494, 0x03),
    reg(0x5495, 0xe0),
    reg(0x5496, 0x03),
    reg(0x5497, 0x10),
    reg(0x5498, 0x02),
    reg(0x5499, 0xac),
    reg(0x549a, 0x02),
    reg(0x549b, 0x75),
    reg(0x549c, 0x02),
    reg(0x549d, 0x44),
    reg(0x549e, 0x02),
    reg(0x549f, 0x20),
    reg(0x54a0, 0x02),
    reg(0x54a1, 0x07),
    reg(0x54a2, 0x01),
    reg(0x54a3, 0xec),
    reg(0x54a4, 0x01),
    reg(0x54a5, 0xc0),
    reg(0x54a6, 0x01),
    reg(0x54a7, 0x9b),
    reg(0x54a8, 0x01),
    reg(0x54a9, 0x63),
    reg(0x54aa, 0x01),
    reg(0x54ab, 0x2b),
    reg(0x54ac, 0x01),
    reg(0x54ad, 0x22),
    reg(0x5501, 0x1c),
    reg(0x5502, 0x00),
    reg(0x5503, 0x40),
    reg(0x5504, 0x00),
    reg(0x5505, 0x80),
    reg(0x5800, 0x1c),
    reg(0x5801, 0x16),
    reg(0x5802, 0x15),
    reg(0x5803, 0x16),
    reg(0x5804, 0x18),
    reg(0x5805, 0x1a),
    reg(0x5806, 0x0c),
    reg(0x5807, 0x0a),
    reg(0x5808, 0x08),
    reg(0x5809, 0x08),
    reg(0x580a, 0x0a),
    reg(0x580b, 0x0b),
    reg(0x580c, 0x05),
    reg(0x580d, 0x02),
    reg(0x580e, 0x00),
    reg(0x580f, 0x00),
    reg(0x5810, 0x02),
    reg(0x5811, 0x05),
    reg(0x5812, 0x04),
    reg(0x5813, 0x01),
    reg(0x5814, 0x00),
    reg(0x5815, 0x00),
    reg(0x5816, 0x02),
    reg(0x5817, 0x03),
    reg(0x5818, 0x0a),
    reg(0x5819, 0x07),
    reg(0x581a, 0x05),
    reg(0x581b, 0x05),
    reg(0x581c, 0x08),
    reg(0x581d, 0x0b),
    reg(0x581e, 0x15),
    reg(0x581f, 0x14),
    reg(0x5820, 0x14),
    reg(0x5821, 0x13),
    reg(0x5822, 0x17),
    reg(0x5823, 0x16),
    reg(0x5824, 0x46),
    reg(0x5825, 0x4c),
    reg(0x5826, 0x6c),
    reg(0x5827, 0x4c),
    reg(0x5828, 0x80),
    reg(0x5829, 0x2e),
    reg(0x582a, 0x48),
    reg(0x582b, 0x46),
    reg(0x582c, 0x2a),
    reg(0x582d, 0x68),
    reg(0x582e, 0x08),
    reg(0x582f, 0x26),
    reg(0x5830, 0x44),
    reg(0x5831, 0x46),
    reg(0x5832, 0x62),
    reg(0x5833, 0x0c),
    reg(0x5834, 0x28),
    reg(0x5835, 0x46),
    reg(0x5836, 0x28),
    reg(0x5837, 0x88),
    reg(0x5838, 0x0e),
    reg(0x5839, 0x0e),
    reg(0x583a, 0x2c),
    reg(0x583b, 0x2e),
    reg(0x583c, 0x46),
    reg(0x583d, 0xca),
    reg(0x583e, 0xf0),
    reg(0x5842, 0x02),
    reg(0x5843, 0x5e),
    reg(0x5844, 0x04),
    reg(0x5845, 0x32),
    reg(0x5846, 0x03),
    reg(0x5847, 0x29),
    reg(0x5848, 0x02),
    reg(0x5849, 0xcc),
    reg(0x5019, 0x02),
];
