// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! SiM3U1xx peripheral lock bits.

use si32::lock::{LockBit, LockLayout};

/// Modules with a bit in the SiM3U1xx lock registers. A bit covers every
/// instance of its module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum LockModule {
    Usart = 0,
    Spi = 1,
    I2c = 2,
    Pca = 3,
    Timer = 4,
    Usb = 5,
    SarAdc = 6,
    Ssg = 7,
    Comparator = 8,
    CapSense = 9,
    Emif = 10,
    Aes = 11,
    Crc = 12,
    Rtc = 13,
    ClockReset = 14,
    Vmon = 15,
    Idac = 16,
    DmaCtrl = 17,
    DmaXbar = 18,
    Lpt = 19,
    Vref = 20,
    I2s = 21,
    Pll = 22,
    ExtOsc = 23,
    Vreg = 24,
    LpOsc = 25,
    Evreg = 26,
    Ivc = 28,
    Pmu,
}

pub struct Sim3u1xxLockLayout;

impl LockLayout for Sim3u1xxLockLayout {
    type Module = LockModule;

    const PERIPHLOCK0_ALL: u32 = 0x17FF_FFFF;
    const PERIPHLOCK1_ALL: u32 = 0x1;

    fn bit(module: LockModule) -> LockBit {
        match module {
            LockModule::Pmu => LockBit::Periphlock1(0),
            other => LockBit::Periphlock0(other as u32),
        }
    }
}

pub type Lock = si32::lock::Lock<Sim3u1xxLockLayout>;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [LockModule; 29] = [
        LockModule::Usart,
        LockModule::Spi,
        LockModule::I2c,
        LockModule::Pca,
        LockModule::Timer,
        LockModule::Usb,
        LockModule::SarAdc,
        LockModule::Ssg,
        LockModule::Comparator,
        LockModule::CapSense,
        LockModule::Emif,
        LockModule::Aes,
        LockModule::Crc,
        LockModule::Rtc,
        LockModule::ClockReset,
        LockModule::Vmon,
        LockModule::Idac,
        LockModule::DmaCtrl,
        LockModule::DmaXbar,
        LockModule::Lpt,
        LockModule::Vref,
        LockModule::I2s,
        LockModule::Pll,
        LockModule::ExtOsc,
        LockModule::Vreg,
        LockModule::LpOsc,
        LockModule::Evreg,
        LockModule::Ivc,
        LockModule::Pmu,
    ];

    #[test]
    fn masks_cover_every_module_once() {
        let (mut pl0, mut pl1) = (0u32, 0u32);
        for module in ALL {
            match Sim3u1xxLockLayout::bit(module) {
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
        assert_eq!(pl0, Sim3u1xxLockLayout::PERIPHLOCK0_ALL);
        assert_eq!(pl1, Sim3u1xxLockLayout::PERIPHLOCK1_ALL);
    }

    #[test]
    fn known_positions() {
        assert_eq!(Sim3u1xxLockLayout::bit(LockModule::Usb), LockBit::Periphlock0(5));
        assert_eq!(Sim3u1xxLockLayout::bit(LockModule::Pll), LockBit::Periphlock0(22));
        assert_eq!(Sim3u1xxLockLayout::bit(LockModule::Evreg), LockBit::Periphlock0(26));
        assert_eq!(Sim3u1xxLockLayout::bit(LockModule::Ivc), LockBit::Periphlock0(28));
        assert_eq!(Sim3u1xxLockLayout::bit(LockModule::Pmu), LockBit::Periphlock1(0));
    }
}
