// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! SiM3C1xx peripheral lock bits. Bit 5 of PERIPHLOCK0 is reserved on
//! this part.

use si32::lock::{LockBit, LockLayout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum LockModule {
    Usart = 0,
    Spi = 1,
    I2c = 2,
    Pca = 3,
    Timer = 4,
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

pub struct Sim3c1xxLockLayout;

impl LockLayout for Sim3c1xxLockLayout {
    type Module = LockModule;

    const PERIPHLOCK0_ALL: u32 = 0x17FF_FFDF;
    const PERIPHLOCK1_ALL: u32 = 0x1;

    fn bit(module: LockModule) -> LockBit {
        match module {
            LockModule::Pmu => LockBit::Periphlock1(0),
            other => LockBit::Periphlock0(other as u32),
        }
    }
}

pub type Lock = si32::lock::Lock<Sim3c1xxLockLayout>;
