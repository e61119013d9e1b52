// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Base addresses of the SiM3U1xx peripherals driven by this crate.

use kernel::utilities::StaticRef;
use si32::emif::{EmifInterfaceRegisters, EmifRegisters};
use si32::idac::IdacRegisters;
use si32::lock::LockRegisters;
use si32::pbhd::PbhdRegisters;
use si32::pca::{PcaChannelRegisters, PcaRegisters};
use si32::pll::PllRegisters;
use si32::ssg::SsgRegisters;
use si32::usart::UsartRegisters;

pub const USART0_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x4000_0000 as *const UsartRegisters) };
pub const USART1_BASE: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(0x4000_1000 as *const UsartRegisters) };

pub const PCA0_BASE: StaticRef<PcaRegisters> =
    unsafe { StaticRef::new(0x4000_F180 as *const PcaRegisters) };
pub const PCA0_CH0_BASE: StaticRef<PcaChannelRegisters> =
    unsafe { StaticRef::new(0x4000_F000 as *const PcaChannelRegisters) };
pub const PCA0_CH1_BASE: StaticRef<PcaChannelRegisters> =
    unsafe { StaticRef::new(0x4000_F040 as *const PcaChannelRegisters) };
pub const PCA1_BASE: StaticRef<PcaRegisters> =
    unsafe { StaticRef::new(0x4001_0180 as *const PcaRegisters) };
pub const PCA1_CH0_BASE: StaticRef<PcaChannelRegisters> =
    unsafe { StaticRef::new(0x4001_0000 as *const PcaChannelRegisters) };
pub const PCA1_CH1_BASE: StaticRef<PcaChannelRegisters> =
    unsafe { StaticRef::new(0x4001_0040 as *const PcaChannelRegisters) };

pub const SSG0_BASE: StaticRef<SsgRegisters> =
    unsafe { StaticRef::new(0x4001_E000 as *const SsgRegisters) };

pub const EMIF0_BASE: StaticRef<EmifRegisters> =
    unsafe { StaticRef::new(0x4002_6000 as *const EmifRegisters) };
pub const EMIF0_IF0_BASE: StaticRef<EmifInterfaceRegisters> =
    unsafe { StaticRef::new(0x4002_6080 as *const EmifInterfaceRegisters) };
pub const EMIF0_IF1_BASE: StaticRef<EmifInterfaceRegisters> =
    unsafe { StaticRef::new(0x4002_6100 as *const EmifInterfaceRegisters) };

pub const PBHD4_BASE: StaticRef<PbhdRegisters> =
    unsafe { StaticRef::new(0x4002_A3C0 as *const PbhdRegisters) };

pub const IDAC0_BASE: StaticRef<IdacRegisters> =
    unsafe { StaticRef::new(0x4003_1000 as *const IdacRegisters) };
pub const IDAC1_BASE: StaticRef<IdacRegisters> =
    unsafe { StaticRef::new(0x4003_2000 as *const IdacRegisters) };

pub const PLL0_BASE: StaticRef<PllRegisters> =
    unsafe { StaticRef::new(0x4003_B000 as *const PllRegisters) };

pub const LOCK0_BASE: StaticRef<LockRegisters> =
    unsafe { StaticRef::new(0x4004_9000 as *const LockRegisters) };
