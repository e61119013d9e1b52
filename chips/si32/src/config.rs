// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Compile-time configuration for the SiM3 peripheral drivers.
//!
//! Values are fixed through Cargo features of this crate. Keeping them in a
//! typed `const` means the disabled paths are still type-checked and then
//! folded away by the compiler.

/// Data structure holding compile-time configuration options.
pub struct Config {
    /// Whether the lock controller should print every key sequence it runs.
    ///
    /// If enabled, each protected write to a peripheral lock register is
    /// reported on the debug output, including which register was written
    /// and with which bit mask.
    pub trace_lock_sequence: bool,

    /// Whether drivers should report arguments they reject.
    ///
    /// If enabled, every operation that returns `ErrorCode::INVAL` because a
    /// value does not fit its register field prints the argument name, the
    /// offending value and the accepted maximum.
    pub debug_rejected_arguments: bool,
}

/// The unique instance of `Config`. This is the only place in this crate
/// where `cfg!(feature = ...)` is consulted.
pub const CONFIG: Config = Config {
    trace_lock_sequence: cfg!(feature = "trace_lock_sequence"),
    debug_rejected_arguments: cfg!(feature = "debug_rejected_arguments"),
};
