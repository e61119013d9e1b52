// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral lock controller (LOCK_A)
//!
//! A set bit in PERIPHLOCK0/1 blocks writes to the matching module's
//! registers. The lock registers themselves only accept a write right after
//! the two unlock keys have been written to KEY, and writing the lock key
//! afterwards closes them again.
//!
//! The register block is the same on every part, but which module sits on
//! which bit is not. Each chip crate describes its layout by implementing
//! [`LockLayout`].

use core::marker::PhantomData;

use kernel::debug;
use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, Aliased, FieldValue, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::config::CONFIG;

register_structs! {
    pub LockRegisters {
        (0x00 => key: Aliased<u32, KEYSTATUS::Register, KEY::Register>),
        (0x04 => _reserved0),
        (0x20 => periphlock0: ReadWrite<u32>),
        (0x24 => periphlock0_set: WriteOnly<u32>),
        (0x28 => periphlock0_clr: WriteOnly<u32>),
        (0x2C => _reserved1),
        (0x40 => periphlock1: ReadWrite<u32>),
        (0x44 => periphlock1_set: WriteOnly<u32>),
        (0x48 => periphlock1_clr: WriteOnly<u32>),
        (0x4C => @END),
    }
}

register_bitfields![u32,
    KEY [
        KEY OFFSET(0) NUMBITS(8) [
            Unlock1 = 0xA5,
            Unlock2 = 0xF1,
            Lock = 0x5A
        ]
    ],
    KEYSTATUS [
        STATUS OFFSET(0) NUMBITS(2) [
            Locked = 0,
            Intermediate = 1,
            Unlocked = 2
        ]
    ]
];

/// Where KEY's state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStatus {
    Locked,
    /// The first unlock key was written.
    Intermediate,
    Unlocked,
}

/// A module's lock bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockBit {
    Periphlock0(u32),
    Periphlock1(u32),
}

/// The per-part assignment of modules to lock bits.
pub trait LockLayout {
    type Module: Copy;

    /// Every implemented bit of PERIPHLOCK0.
    const PERIPHLOCK0_ALL: u32;
    /// Every implemented bit of PERIPHLOCK1.
    const PERIPHLOCK1_ALL: u32;

    fn bit(module: Self::Module) -> LockBit;
}

pub struct Lock<L: LockLayout> {
    registers: StaticRef<LockRegisters>,
    _layout: PhantomData<L>,
}

impl<L: LockLayout> Lock<L> {
    pub const fn new(base: StaticRef<LockRegisters>) -> Self {
        Self {
            registers: base,
            _layout: PhantomData,
        }
    }

    /// Write both unlock keys. The next write to a lock register goes
    /// through.
    pub fn unlock_peripheral_locking_registers(&self) {
        self.write_key(KEY::KEY::Unlock1);
        self.write_key(KEY::KEY::Unlock2);
    }

    pub fn lock_peripheral_locking_registers(&self) {
        self.write_key(KEY::KEY::Lock);
    }

    fn write_key(&self, key: FieldValue<u32, KEY::Register>) {
        self.registers.key.write(key);
        #[cfg(test)]
        crate::test_regs::journal("key", self.registers.key.get());
    }

    pub fn key_status(&self) -> KeyStatus {
        match self.registers.key.read_as_enum(KEYSTATUS::STATUS) {
            Some(KEYSTATUS::STATUS::Value::Unlocked) => KeyStatus::Unlocked,
            Some(KEYSTATUS::STATUS::Value::Intermediate) => KeyStatus::Intermediate,
            _ => KeyStatus::Locked,
        }
    }

    /// Run `write` between the unlock keys and the lock key.
    fn protected(&self, what: &'static str, mask: u32, write: impl FnOnce(&LockRegisters)) {
        if CONFIG.trace_lock_sequence {
            debug!("lock: {} {:#010x}", what, mask);
        }
        self.unlock_peripheral_locking_registers();
        write(&*self.registers);
        #[cfg(test)]
        crate::test_regs::journal(what, mask);
        self.lock_peripheral_locking_registers();
    }

    fn check_periphlock1(value: u32) -> Result<(), ErrorCode> {
        if value & !L::PERIPHLOCK1_ALL != 0 {
            if CONFIG.debug_rejected_arguments {
                debug!("lock: rejected periphlock1 = {:#x}", value);
            }
            return Err(ErrorCode::INVAL);
        }
        Ok(())
    }

    /// Neither register is written if `periphlock1` is rejected.
    pub fn initialize(&self, periphlock0: u32, periphlock1: u32) -> Result<(), ErrorCode> {
        Self::check_periphlock1(periphlock1)?;
        self.write_periphlock0(periphlock0);
        self.write_periphlock1(periphlock1)
    }

    pub fn write_periphlock0(&self, value: u32) {
        self.protected("periphlock0 =", value, |r| r.periphlock0.set(value));
    }

    pub fn read_periphlock0(&self) -> u32 {
        self.registers.periphlock0.get()
    }

    /// Fails with `INVAL` if `value` sets a bit the part does not implement.
    pub fn write_periphlock1(&self, value: u32) -> Result<(), ErrorCode> {
        Self::check_periphlock1(value)?;
        self.protected("periphlock1 =", value, |r| r.periphlock1.set(value));
        Ok(())
    }

    pub fn read_periphlock1(&self) -> u32 {
        self.registers.periphlock1.get()
    }

    pub fn lock_module(&self, module: L::Module) {
        match L::bit(module) {
            LockBit::Periphlock0(bit) => {
                self.protected("periphlock0 set", 1 << bit, |r| {
                    r.periphlock0_set.set(1 << bit)
                });
            }
            LockBit::Periphlock1(bit) => {
                self.protected("periphlock1 set", 1 << bit, |r| {
                    r.periphlock1_set.set(1 << bit)
                });
            }
        }
    }

    pub fn unlock_module(&self, module: L::Module) {
        match L::bit(module) {
            LockBit::Periphlock0(bit) => {
                self.protected("periphlock0 clr", 1 << bit, |r| {
                    r.periphlock0_clr.set(1 << bit)
                });
            }
            LockBit::Periphlock1(bit) => {
                self.protected("periphlock1 clr", 1 << bit, |r| {
                    r.periphlock1_clr.set(1 << bit)
                });
            }
        }
    }

    pub fn is_module_locked(&self, module: L::Module) -> bool {
        match L::bit(module) {
            LockBit::Periphlock0(bit) => self.registers.periphlock0.get() & (1 << bit) != 0,
            LockBit::Periphlock1(bit) => self.registers.periphlock1.get() & (1 << bit) != 0,
        }
    }

    pub fn lock_all_modules(&self) {
        self.protected("periphlock0 set", L::PERIPHLOCK0_ALL, |r| {
            r.periphlock0_set.set(L::PERIPHLOCK0_ALL)
        });
        self.protected("periphlock1 set", L::PERIPHLOCK1_ALL, |r| {
            r.periphlock1_set.set(L::PERIPHLOCK1_ALL)
        });
    }

    pub fn unlock_all_modules(&self) {
        self.protected("periphlock0 clr", L::PERIPHLOCK0_ALL, |r| {
            r.periphlock0_clr.set(L::PERIPHLOCK0_ALL)
        });
        self.protected("periphlock1 clr", L::PERIPHLOCK1_ALL, |r| {
            r.periphlock1_clr.set(L::PERIPHLOCK1_ALL)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::{take_journal, FakeRegs};

    const KEY_OFF: usize = 0x00;
    const PL0: usize = 0x20;
    const PL0_SET: usize = 0x24;
    const PL0_CLR: usize = 0x28;
    const PL1: usize = 0x40;
    const PL1_SET: usize = 0x44;

    #[derive(Clone, Copy)]
    enum Module {
        Uart,
        Timer,
        Pmu,
    }

    struct TestLayout;

    impl LockLayout for TestLayout {
        type Module = Module;
        const PERIPHLOCK0_ALL: u32 = 0b1_0011;
        const PERIPHLOCK1_ALL: u32 = 0b1;

        fn bit(module: Module) -> LockBit {
            match module {
                Module::Uart => LockBit::Periphlock0(0),
                Module::Timer => LockBit::Periphlock0(4),
                Module::Pmu => LockBit::Periphlock1(0),
            }
        }
    }

    #[test]
    fn module_bits_go_to_the_right_register() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);

        lock.lock_module(Module::Timer);
        assert_eq!(fake.word(PL0_SET), 1 << 4);
        lock.unlock_module(Module::Uart);
        assert_eq!(fake.word(PL0_CLR), 1);
        lock.lock_module(Module::Pmu);
        assert_eq!(fake.word(PL1_SET), 1);
    }

    #[test]
    fn every_write_ends_locked() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);

        lock.unlock_peripheral_locking_registers();
        assert_eq!(fake.word(KEY_OFF), 0xF1);
        lock.write_periphlock0(0x13);
        assert_eq!(fake.word(KEY_OFF), 0x5A);
        assert_eq!(lock.read_periphlock0(), 0x13);
    }

    #[test]
    fn protected_writes_sit_between_unlock_and_lock_keys() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);
        take_journal();

        lock.write_periphlock0(0x13);
        assert_eq!(
            take_journal(),
            [("key", 0xA5), ("key", 0xF1), ("periphlock0 =", 0x13), ("key", 0x5A)]
        );

        lock.lock_module(Module::Timer);
        assert_eq!(
            take_journal(),
            [("key", 0xA5), ("key", 0xF1), ("periphlock0 set", 1 << 4), ("key", 0x5A)]
        );

        lock.unlock_all_modules();
        assert_eq!(
            take_journal(),
            [
                ("key", 0xA5),
                ("key", 0xF1),
                ("periphlock0 clr", 0b1_0011),
                ("key", 0x5A),
                ("key", 0xA5),
                ("key", 0xF1),
                ("periphlock1 clr", 0b1),
                ("key", 0x5A),
            ]
        );
    }

    #[test]
    fn rejected_initialize_leaves_registers_alone() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);
        take_journal();

        assert_eq!(lock.initialize(0x13, 0b10), Err(ErrorCode::INVAL));
        assert_eq!(lock.read_periphlock0(), 0);
        assert_eq!(lock.read_periphlock1(), 0);
        assert_eq!(fake.word(KEY_OFF), 0);
        assert!(take_journal().is_empty());
    }

    #[test]
    fn periphlock1_width_is_checked() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);

        assert_eq!(lock.write_periphlock1(0b10), Err(ErrorCode::INVAL));
        assert_eq!(fake.word(KEY_OFF), 0);
        assert_eq!(lock.initialize(0x10, 1), Ok(()));
        assert_eq!(lock.read_periphlock1(), 1);
    }

    #[test]
    fn lock_state_reads() {
        let fake = FakeRegs::<LockRegisters>::new();
        let lock = Lock::<TestLayout>::new(fake.regs);

        fake.poke(PL0, 1 << 4);
        assert!(lock.is_module_locked(Module::Timer));
        assert!(!lock.is_module_locked(Module::Uart));
        fake.poke(PL1, 1);
        assert!(lock.is_module_locked(Module::Pmu));

        lock.lock_all_modules();
        assert_eq!(fake.word(PL0_SET), 0b1_0011);
        assert_eq!(fake.word(PL1_SET), 1);

        fake.poke(KEY_OFF, 2);
        assert_eq!(lock.key_status(), KeyStatus::Unlocked);
        fake.poke(KEY_OFF, 1);
        assert_eq!(lock.key_status(), KeyStatus::Intermediate);
        fake.poke(KEY_OFF, 0);
        assert_eq!(lock.key_status(), KeyStatus::Locked);
    }
}
