use crate::registers::*;

// Control registers only accept writes while the device is in standby.
pub const CONFIG_STANDBY: &[RegBlock] = &[RegBlock {
    start: Reg::CtrlReg1,
    values: &[0x00],
}];

// Hybrid accelerometer + magnetometer sampling, 400 Hz single / 200 Hz
// hybrid, ±4 g, data-ready interrupt on INT2. Leaves ACTIVE clear.
pub const CONFIG_HYBRID_400HZ: &[RegBlock] = &[
    RegBlock {
        start: Reg::CtrlReg1,
        values: &[
            (DataRate::Hz400 as u8) << CTRL1_DR_LOC, // 200 Hz effective in hybrid mode
            (OversampleMode::LowPower as u8) << CTRL2_SMODS_LOC
                | (OversampleMode::Normal as u8) << CTRL2_MODS_LOC, // no auto sleep
            0x00, // interrupts active low, push-pull
            CtrlReg4Flags::INT_EN_DRDY.bits(),
            0x00, // data ready routed to INT2
        ],
    },
    RegBlock {
        start: Reg::XyzDataCfg,
        values: &[(AccelFullScale::G4 as u8) << XYZ_FS_LOC],
    },
    RegBlock {
        start: Reg::MCtrlReg1,
        values: &[
            MCtrlReg1Flags::M_ACAL.bits()
                | (MagOversample::Osr7 as u8) << M_CTRL1_OS_LOC
                | (HybridMode::Hybrid as u8) << M_CTRL1_HMS_LOC,
            MCtrlReg2Flags::HYB_AUTOINC.bits(), // burst reads run through magn into accel data
            (MagOversample::Osr7 as u8) << M_CTRL3_ASLP_OS_LOC, // calibrated output, sleep oversampling
        ],
    },
];
