// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral instances of a SiM3L1xx.

use crate::memory_map::{
    DMAXBAR0_BASE, DTM0_BASE, DTM1_BASE, DTM2_BASE, IDAC0_BASE, LOCK0_BASE, PLL0_BASE,
};
use si32::dmaxbar::DmaXbar;
use si32::dtm::Dtm;
use si32::idac::Idac;
use si32::pll::Pll;

use crate::lock::Lock;

pub struct Sim3l1xxDefaultPeripherals {
    pub idac0: Idac,
    pub dmaxbar0: DmaXbar,
    pub pll0: Pll,
    pub lock0: Lock,
    pub dtm: [Dtm; 3],
}

impl Sim3l1xxDefaultPeripherals {
    pub const fn new() -> Self {
        Self {
            idac0: Idac::new(IDAC0_BASE),
            dmaxbar0: DmaXbar::new(DMAXBAR0_BASE),
            pll0: Pll::new(PLL0_BASE),
            lock0: Lock::new(LOCK0_BASE),
            dtm: [
                Dtm::new(DTM0_BASE),
                Dtm::new(DTM1_BASE),
                Dtm::new(DTM2_BASE),
            ],
        }
    }
}
