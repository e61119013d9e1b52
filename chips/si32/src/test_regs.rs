// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Zeroed memory standing in for a peripheral's register block in tests.

use core::mem::size_of;
use kernel::utilities::StaticRef;
use std::cell::RefCell;

/// A leaked, word-aligned, zeroed block sized for `T`.
pub(crate) struct FakeRegs<T> {
    words: *mut u32,
    pub(crate) regs: StaticRef<T>,
}

impl<T> FakeRegs<T> {
    pub(crate) fn new() -> Self {
        let len = size_of::<T>().div_ceil(4);
        let words = Box::leak(vec![0u32; len].into_boxed_slice()).as_mut_ptr();
        FakeRegs {
            words,
            regs: unsafe { StaticRef::new(words as *const T) },
        }
    }

    /// The raw word at byte `offset`, including write-only alias slots.
    pub(crate) fn word(&self, offset: usize) -> u32 {
        unsafe { core::ptr::read_volatile(self.words.add(offset / 4)) }
    }

    /// Store a raw word at byte `offset`, as hardware would.
    pub(crate) fn poke(&self, offset: usize, value: u32) {
        unsafe { core::ptr::write_volatile(self.words.add(offset / 4), value) }
    }
}

thread_local! {
    static JOURNAL: RefCell<Vec<(&'static str, u32)>> = const { RefCell::new(Vec::new()) };
}

/// Note a register write that a later write to the same word would hide.
pub(crate) fn journal(what: &'static str, value: u32) {
    JOURNAL.with(|j| j.borrow_mut().push((what, value)));
}

/// Everything noted on this thread since the last call.
pub(crate) fn take_journal() -> Vec<(&'static str, u32)> {
    JOURNAL.with(|j| j.take())
}
