use bitflags::bitflags;

macro_rules! registers {
    (
        $enum_name:ident, $slice_name:ident {
            $($name:ident = $val:expr),* $(,)?
        }
    ) => {
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum $enum_name {
            $($name = $val),*
        }

        pub const $slice_name: &[$enum_name] = &[
            $($enum_name::$name),*
        ];

        impl $enum_name {
            pub fn addr(self) -> u8 {
                self as u8
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $($enum_name::$name => stringify!($name),)*
                }
            }
        }

        impl From<$enum_name> for u8 {
            fn from(r: $enum_name) -> u8 {
                r as u8
            }
        }
    };
}

// A run of consecutive registers, written through the device's
// auto-increment pointer in a single bus transaction
pub struct RegBlock {
    pub start: Reg,
    pub values: &'static [u8],
}

registers! {
    Reg, REGS {
        Status      = 0x00,
        OutXMsb     = 0x01,
        WhoAmI      = 0x0D,
        XyzDataCfg  = 0x0E,
        CtrlReg1    = 0x2A,
        CtrlReg2    = 0x2B,
        CtrlReg3    = 0x2C,
        CtrlReg4    = 0x2D,
        CtrlReg5    = 0x2E,
        MOutXMsb    = 0x34,
        MCtrlReg1   = 0x5B,
        MCtrlReg2   = 0x5C,
        MCtrlReg3   = 0x5D,
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const ZYXOW = 1 << 7;
        const ZOW   = 1 << 6;
        const YOW   = 1 << 5;
        const XOW   = 1 << 4;
        const ZYXDR = 1 << 3;
        const ZDR   = 1 << 2;
        const YDR   = 1 << 1;
        const XDR   = 1 << 0;
    }
}

/* CTRL_REG1
 * B7    B6    B5  B4  B3  B2     B1     B0
 * ASLP1 ASLP0 DR2 DR1 DR0 LNOISE F_READ ACTIVE
*/
bitflags! {
    pub struct CtrlReg1Flags: u8 {
        const ACTIVE = 1 << 0;
        const F_READ = 1 << 1;
        const LNOISE = 1 << 2;
    }
}

pub const CTRL1_DR_LOC: u8 = 3;
// Rates halve when hybrid sampling is on
#[repr(u8)]
pub enum DataRate {
    Hz800    = 0,
    Hz400    = 1,
    Hz200    = 2,
    Hz100    = 3,
    Hz50     = 4,
    Hz12_5   = 5,
    Hz6_25   = 6,
    Hz1_5625 = 7,
}

pub const CTRL1_ASLP_RATE_LOC: u8 = 6;
#[repr(u8)]
pub enum SleepRate {
    Hz50     = 0,
    Hz12_5   = 1,
    Hz6_25   = 2,
    Hz1_5625 = 3,
}

/* CTRL_REG2
 * B7 B6  B5 B4     B3     B2   B1    B0
 * ST RST 0  SMODS1 SMODS0 SLPE MODS1 MODS0
*/
bitflags! {
    pub struct CtrlReg2Flags: u8 {
        const SLPE = 1 << 2;
        const RST  = 1 << 6;
        const ST   = 1 << 7;
    }
}

pub const CTRL2_MODS_LOC: u8 = 0;
pub const CTRL2_SMODS_LOC: u8 = 3;
// Shared by the wake (MODS) and sleep (SMODS) fields
#[repr(u8)]
pub enum OversampleMode {
    Normal           = 0,
    LowNoiseLowPower = 1,
    HighResolution   = 2,
    LowPower         = 3,
}

/* CTRL_REG3
 * B7        B6         B5          B4         B3        B2        B1   B0
 * FIFO_GATE WAKE_TRANS WAKE_LNDPRT WAKE_PULSE WAKE_FFMT WAKE_A_VM IPOL PP_OD
*/
bitflags! {
    pub struct CtrlReg3Flags: u8 {
        const PP_OD = 1 << 0;
        const IPOL  = 1 << 1;
    }
}

/* CTRL_REG4: per-source interrupt enables */
bitflags! {
    pub struct CtrlReg4Flags: u8 {
        const INT_EN_DRDY = 1 << 0;
        const INT_EN_A_VM = 1 << 1;
        const INT_EN_ASLP = 1 << 7;
    }
}

/* CTRL_REG5: interrupt routing, set bit routes to INT1, clear to INT2 */
bitflags! {
    pub struct CtrlReg5Flags: u8 {
        const INT_CFG_DRDY = 1 << 0;
    }
}

/* XYZ_DATA_CFG
 * B7 B6 B5 B4      B3 B2 B1  B0
 * 0  0  0  HPF_OUT 0  0  FS1 FS0
*/
bitflags! {
    pub struct XyzDataCfgFlags: u8 {
        const HPF_OUT = 1 << 4;
    }
}

pub const XYZ_FS_LOC: u8 = 0;
pub const XYZ_FS_MASK: u8 = 0x03;
// The fourth field encoding is reserved
#[repr(u8)]
pub enum AccelFullScale {
    G2 = 0,
    G4 = 1,
    G8 = 2,
}

/* M_CTRL_REG1
 * B7     B6    B5    B4   B3   B2   B1    B0
 * M_ACAL M_RST M_OST M_OS2 M_OS1 M_OS0 M_HMS1 M_HMS0
*/
bitflags! {
    pub struct MCtrlReg1Flags: u8 {
        const M_OST  = 1 << 5;
        const M_RST  = 1 << 6;
        const M_ACAL = 1 << 7;
    }
}

pub const M_CTRL1_HMS_LOC: u8 = 0;
#[repr(u8)]
pub enum HybridMode {
    AccelOnly = 0,
    MagOnly   = 1,
    Hybrid    = 3,
}

pub const M_CTRL1_OS_LOC: u8 = 2;
// Osr7 is the maximum at every data rate; also used for the sleep-mode
// M_ASLP_OS field of M_CTRL_REG3
#[repr(u8)]
pub enum MagOversample {
    Osr0 = 0,
    Osr1 = 1,
    Osr2 = 2,
    Osr3 = 3,
    Osr4 = 4,
    Osr5 = 5,
    Osr6 = 6,
    Osr7 = 7,
}

/* M_CTRL_REG2
 * B7 B6 B5              B4           B3               B2           B1        B0
 * 0  0  HYB_AUTOINC     M_MAXMIN_DIS M_MAXMIN_DIS_THS M_MAXMIN_RST M_RST_CNT M_RST_CNT
*/
bitflags! {
    pub struct MCtrlReg2Flags: u8 {
        const M_MAXMIN_RST = 1 << 2;
        const M_MAXMIN_DIS = 1 << 4;
        const HYB_AUTOINC  = 1 << 5;
    }
}

/* M_CTRL_REG3
 * B7    B6        B5        B4        B3 B2 B1 B0
 * M_RAW M_ASLP_OS2 M_ASLP_OS1 M_ASLP_OS0 (frequency/threshold bits)
*/
bitflags! {
    pub struct MCtrlReg3Flags: u8 {
        const M_RAW = 1 << 7;
    }
}

pub const M_CTRL3_ASLP_OS_LOC: u8 = 4;
