// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral drivers and memory map for the SiM3U1xx family.

#![cfg_attr(not(test), no_std)]

pub use si32::{emif, idac, pbhd, pca, pll, ssg, usart};

pub mod chip;
pub mod lock;
pub mod memory_map;
