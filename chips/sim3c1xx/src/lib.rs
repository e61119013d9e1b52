// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral drivers and memory map for the SiM3C1xx family.
//!
//! The SiM3C1xx shares the SiM3U1xx peripheral map without the USB
//! block, and adds a DMA crossbar routing table of its own.

#![cfg_attr(not(test), no_std)]

pub use si32::{dmaxbar, emif, idac, pbhd, pca, pll, ssg, usart};

pub mod chip;
pub mod dma_select;
pub mod lock;
pub mod memory_map;
