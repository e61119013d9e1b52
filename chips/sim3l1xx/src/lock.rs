// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! SiM3L1xx peripheral lock bits.
//!
//! PERIPHLOCK0 bits 23-26 and 31 are reserved. The encoder/decoder is the
//! only module in PERIPHLOCK1.

use si32::lock::{LockBit, LockLayout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum LockModule {
    Usart = 0,
    Spi = 1,
    I2c = 2,
    Pca = 3,
    Timer = 4,
    SarAdc = 5,
    Comparator = 6,
    Aes = 7,
    Crc = 8,
    Rtc = 9,
    ResetSource = 10,
    ClockControl = 11,
    Vmon = 12,
    Idac = 13,
    DmaCtrl = 14,
    DmaXbar = 15,
    Lpt = 16,
    Ldo = 17,
    Pll = 18,
    ExtOsc = 19,
    Pvt = 20,
    LpOsc = 21,
    Acctr = 22,
    Pmu = 27,
    Dtm = 28,
    Lcd = 29,
    Dcdc = 30,
    EncDec,
}

pub struct Sim3l1xxLockLayout;

impl LockLayout for Sim3l1xxLockLayout {
    type Module = LockModule;

    const PERIPHLOCK0_ALL: u32 = 0x787F_FFFF;
    const PERIPHLOCK1_ALL: u32 = 0x1;

    fn bit(module: LockModule) -> LockBit {
        match module {
            LockModule::EncDec => LockBit::Periphlock1(0),
            other => LockBit::Periphlock0(other as u32),
        }
    }
}

pub type Lock = si32::lock::Lock<Sim3l1xxLockLayout>;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LockModule; 28] = [
        LockModule::Usart,
        LockModule::Spi,
        LockModule::I2c,
        LockModule::Pca,
        LockModule::Timer,
        LockModule::SarAdc,
        LockModule::Comparator,
        LockModule::Aes,
        LockModule::Crc,
        LockModule::Rtc,
        LockModule::ResetSource,
        LockModule::ClockControl,
        LockModule::Vmon,
        LockModule::Idac,
        LockModule::DmaCtrl,
        LockModule::DmaXbar,
        LockModule::Lpt,
        LockModule::Ldo,
        LockModule::Pll,
        LockModule::ExtOsc,
        LockModule::Pvt,
        LockModule::LpOsc,
        LockModule::Acctr,
        LockModule::Pmu,
        LockModule::Dtm,
        LockModule::Lcd,
        LockModule::Dcdc,
        LockModule::EncDec,
    ];

    #[test]
    fn masks_cover_every_module_once() {
        let (mut pl0, mut pl1) = (0u32, 0u32);
        for module in ALL {
            match Sim3l1xxLockLayout::bit(module) {
                LockBit::Periphlock0(bit) => {
                    assert_eq!(pl0 & (1 << bit), 0, "{:?} shares a bit", module);
                    pl0 |= 1 << bit;
                }
                LockBit::Periphlock1(bit) => {
                    assert_eq!(pl1 & (1 << bit), 0, "{:?} shares a bit", module);
                    pl1 |= 1 << bit;
                }
            }
        }
        assert_eq!(pl0, Sim3l1xxLockLayout::PERIPHLOCK0_ALL);
        assert_eq!(pl1, Sim3l1xxLockLayout::PERIPHLOCK1_ALL);
    }

    #[test]
    fn encdec_lives_in_second_register() {
        assert_eq!(
            Sim3l1xxLockLayout::bit(LockModule::EncDec),
            LockBit::Periphlock1(0)
        );
        assert_eq!(
            Sim3l1xxLockLayout::bit(LockModule::Dtm),
            LockBit::Periphlock0(28)
        );
    }
}
