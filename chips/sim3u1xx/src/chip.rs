// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral instances of a SiM3U1xx.

use crate::memory_map::{
    EMIF0_BASE, EMIF0_IF0_BASE, EMIF0_IF1_BASE, IDAC0_BASE, IDAC1_BASE, LOCK0_BASE, PBHD4_BASE,
    PCA0_BASE, PCA0_CH0_BASE, PCA0_CH1_BASE, PCA1_BASE, PCA1_CH0_BASE, PCA1_CH1_BASE, PLL0_BASE,
    SSG0_BASE, USART0_BASE, USART1_BASE,
};
use si32::emif::{Emif, EmifInterfaceBlock};
use si32::idac::Idac;
use si32::pbhd::Pbhd;
use si32::pca::{Pca, PcaChannel};
use si32::pll::Pll;
use si32::ssg::Ssg;
use si32::usart::Usart;

use crate::lock::Lock;

pub struct Sim3u1xxDefaultPeripherals {
    pub usart0: Usart,
    pub usart1: Usart,
    pub pca0: Pca,
    pub pca0_channels: [PcaChannel; 2],
    pub pca1: Pca,
    pub pca1_channels: [PcaChannel; 2],
    pub ssg0: Ssg,
    pub emif0: Emif,
    pub emif0_interfaces: [EmifInterfaceBlock; 2],
    pub pbhd4: Pbhd,
    pub idac0: Idac,
    pub idac1: Idac,
    pub pll0: Pll,
    pub lock0: Lock,
}

impl Sim3u1xxDefaultPeripherals {
    pub const fn new() -> Self {
        Self {
            usart0: Usart::new(USART0_BASE),
            usart1: Usart::new(USART1_BASE),
            pca0: Pca::new(PCA0_BASE),
            pca0_channels: [
                PcaChannel::new(PCA0_CH0_BASE),
                PcaChannel::new(PCA0_CH1_BASE),
            ],
            pca1: Pca::new(PCA1_BASE),
            pca1_channels: [
                PcaChannel::new(PCA1_CH0_BASE),
                PcaChannel::new(PCA1_CH1_BASE),
            ],
            ssg0: Ssg::new(SSG0_BASE),
            emif0: Emif::new(EMIF0_BASE),
            emif0_interfaces: [
                EmifInterfaceBlock::new(EMIF0_IF0_BASE),
                EmifInterfaceBlock::new(EMIF0_IF1_BASE),
            ],
            pbhd4: Pbhd::new(PBHD4_BASE),
            idac0: Idac::new(IDAC0_BASE),
            idac1: Idac::new(IDAC1_BASE),
            pll0: Pll::new(PLL0_BASE),
            lock0: Lock::new(LOCK0_BASE),
        }
    }
}

