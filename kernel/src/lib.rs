// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Core support crate shared by the SiM3 chip crates.
//!
//! This crate holds the pieces every peripheral driver needs regardless of
//! which SiM3 part it runs on:
//!
//! - [`ErrorCode`], the error type returned by driver operations that can
//!   reject their arguments.
//! - [`utilities::StaticRef`] and the register interface re-exports used to
//!   overlay register blocks on memory-mapped peripherals.
//! - The [`debug!`] macro, which formats messages to a board-provided
//!   [`debug::IoWrite`] sink.

#![cfg_attr(not(test), no_std)]

pub mod debug;
pub mod errorcode;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
