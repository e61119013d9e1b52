// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral implementations shared by the SiM3 family of microcontrollers.
//!
//! Each module overlays a register block on a peripheral and exposes thin
//! accessors for it. The per-part crates (`sim3u1xx`, `sim3c1xx`,
//! `sim3l1xx`) provide base addresses and the few layouts that differ
//! between parts, such as the bits of the peripheral lock registers.

#![cfg_attr(not(test), no_std)]

mod bounds;
pub mod config;

pub mod dmaxbar;
pub mod dtm;
pub mod emif;
pub mod idac;
pub mod lock;
pub mod pbhd;
pub mod pca;
pub mod pll;
pub mod ssg;
pub mod usart;

#[cfg(test)]
pub(crate) mod test_regs;
