// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

use kernel::utilities::StaticRef;
use si32::dmaxbar::DmaXbarRegisters;
use si32::dtm::DtmRegisters;
use si32::idac::IdacRegisters;
use si32::lock::LockRegisters;
use si32::pll::PllRegisters;

pub const IDAC0_BASE: StaticRef<IdacRegisters> =
    unsafe { StaticRef::new(0x4003_1000 as *const IdacRegisters) };

pub const DMAXBAR0_BASE: StaticRef<DmaXbarRegisters> =
    unsafe { StaticRef::new(0x4003_7000 as *const DmaXbarRegisters) };

pub const PLL0_BASE: StaticRef<PllRegisters> =
    unsafe { StaticRef::new(0x4003_B000 as *const PllRegisters) };

pub const LOCK0_BASE: StaticRef<LockRegisters> =
    unsafe { StaticRef::new(0x4004_9000 as *const LockRegisters) };

pub const DTM0_BASE: StaticRef<DtmRegisters> =
    unsafe { StaticRef::new(0x4004_A000 as *const DtmRegisters) };
pub const DTM1_BASE: StaticRef<DtmRegisters> =
    unsafe { StaticRef::new(0x4004_B000 as *const DtmRegisters) };
pub const DTM2_BASE: StaticRef<DtmRegisters> =
    unsafe { StaticRef::new(0x4004_C000 as *const DtmRegisters) };
