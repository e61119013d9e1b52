// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral drivers and memory map for the SiM3L1xx family.

#![cfg_attr(not(test), no_std)]

pub use si32::{dmaxbar, dtm, idac, pll};

pub mod chip;
pub mod dma_select;
pub mod lock;
pub mod memory_map;
