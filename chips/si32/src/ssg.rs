// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Spread-spectrum and phase generator (SSG_A)
//!
//! Drives up to four outputs (EX0-EX3) from a free-running phase generator
//! and pulse generator.

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    pub SsgRegisters {
        (0x00 => config: ReadWrite<u32, CONFIG::Register>),
        (0x04 => _reserved0),
        (0x10 => control: ReadWrite<u32, CONTROL::Register>),
        (0x14 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x18 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    CONFIG [
        /// Conversion count in pulse generator mode
        COUNT OFFSET(0) NUMBITS(12) [],
        SSEL OFFSET(12) NUMBITS(1) [
            Normal = 0,
            Double = 1
        ],
        /// Phase generator free-run
        PHGFREN OFFSET(13) NUMBITS(1) [],
        /// Pulse generator free-run
        PUGFREN OFFSET(14) NUMBITS(1) []
    ],
    CONTROL [
        EX0INVEN OFFSET(0) NUMBITS(1) [],
        EX1INVEN OFFSET(1) NUMBITS(1) [],
        EX2INVEN OFFSET(2) NUMBITS(1) [],
        EX3INVEN OFFSET(3) NUMBITS(1) [],
        EX0EN OFFSET(4) NUMBITS(1) [],
        EX1EN OFFSET(5) NUMBITS(1) [],
        EX2EN OFFSET(6) NUMBITS(1) [],
        EX3EN OFFSET(7) NUMBITS(1) [],
        STATUS OFFSET(8) NUMBITS(1) []
    ]
];

/// One of the four SSG outputs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExOutput {
    Ex0,
    Ex1,
    Ex2,
    Ex3,
}

impl ExOutput {
    fn enable_field(self) -> FieldValue<u32, CONTROL::Register> {
        match self {
            ExOutput::Ex0 => CONTROL::EX0EN::SET,
            ExOutput::Ex1 => CONTROL::EX1EN::SET,
            ExOutput::Ex2 => CONTROL::EX2EN::SET,
            ExOutput::Ex3 => CONTROL::EX3EN::SET,
        }
    }

    fn inversion_field(self) -> FieldValue<u32, CONTROL::Register> {
        match self {
            ExOutput::Ex0 => CONTROL::EX0INVEN::SET,
            ExOutput::Ex1 => CONTROL::EX1INVEN::SET,
            ExOutput::Ex2 => CONTROL::EX2INVEN::SET,
            ExOutput::Ex3 => CONTROL::EX3INVEN::SET,
        }
    }
}

pub struct Ssg {
    registers: StaticRef<SsgRegisters>,
}

impl Ssg {
    pub const fn new(base: StaticRef<SsgRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, config: u32, control: u32) {
        self.registers.config.set(config);
        self.registers.control.set(control);
    }

    pub fn write_config(&self, config: u32) {
        self.registers.config.set(config);
    }

    pub fn read_config(&self) -> u32 {
        self.registers.config.get()
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn set_conversion_count(&self, count: u32) -> Result<(), ErrorCode> {
        bounds::fits("ssg conversion count", count, 12)?;
        self.registers.config.modify(CONFIG::COUNT.val(count));
        Ok(())
    }

    pub fn select_speed_normal(&self) {
        self.registers.config.modify(CONFIG::SSEL::Normal);
    }

    pub fn select_speed_double(&self) {
        self.registers.config.modify(CONFIG::SSEL::Double);
    }

    pub fn start_phase_generator_free_run(&self) {
        self.registers.config.modify(CONFIG::PHGFREN::SET);
    }

    pub fn stop_phase_generator_free_run(&self) {
        self.registers.config.modify(CONFIG::PHGFREN::CLEAR);
    }

    pub fn start_pulse_generator_free_run(&self) {
        self.registers.config.modify(CONFIG::PUGFREN::SET);
    }

    pub fn stop_pulse_generator_free_run(&self) {
        self.registers.config.modify(CONFIG::PUGFREN::CLEAR);
    }

    pub fn enable_output(&self, output: ExOutput) {
        self.registers.control_set.write(output.enable_field());
    }

    pub fn disable_output(&self, output: ExOutput) {
        self.registers.control_clr.write(output.enable_field());
    }

    pub fn enable_output_inversion(&self, output: ExOutput) {
        self.registers.control_set.write(output.inversion_field());
    }

    pub fn disable_output_inversion(&self, output: ExOutput) {
        self.registers.control_clr.write(output.inversion_field());
    }

    pub fn is_active(&self) -> bool {
        self.registers.control.is_set(CONTROL::STATUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    #[test]
    fn outputs_use_set_and_clear_aliases() {
        let fake = FakeRegs::<SsgRegisters>::new();
        let ssg = Ssg::new(fake.regs);
        ssg.enable_output(ExOutput::Ex2);
        assert_eq!(fake.word(0x14), 1 << 6);
        ssg.disable_output_inversion(ExOutput::Ex3);
        assert_eq!(fake.word(0x18), 1 << 3);
        ssg.enable_output_inversion(ExOutput::Ex0);
        assert_eq!(fake.word(0x14), 1 << 0);
    }

    #[test]
    fn config_fields() {
        let fake = FakeRegs::<SsgRegisters>::new();
        let ssg = Ssg::new(fake.regs);
        ssg.set_conversion_count(0x123).unwrap();
        ssg.select_speed_double();
        ssg.start_pulse_generator_free_run();
        assert_eq!(ssg.read_config(), 0x123 | (1 << 12) | (1 << 14));
        ssg.stop_pulse_generator_free_run();
        ssg.select_speed_normal();
        assert_eq!(ssg.read_config(), 0x123);
        assert_eq!(ssg.set_conversion_count(0x1000), Err(ErrorCode::INVAL));
    }

    #[test]
    fn status_reports_activity() {
        let fake = FakeRegs::<SsgRegisters>::new();
        let ssg = Ssg::new(fake.regs);
        assert!(!ssg.is_active());
        fake.poke(0x10, 1 << 8);
        assert!(ssg.is_active());
    }
}
