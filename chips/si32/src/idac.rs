// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Current-mode digital-to-analog converter (IDAC_A)
//!
//! Samples are written to DATA and queued in a four-entry FIFO. They move to
//! the output either on every write or on a selected trigger.

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, ReadOnly, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    /// Current-mode DAC
    pub IdacRegisters {
        (0x00 => control: ReadWrite<u32, CONTROL::Register>),
        (0x04 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x08 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x0C => _reserved0),
        /// Sample input, format depends on INFMT
        (0x10 => data: ReadWrite<u32>),
        (0x14 => _reserved1),
        (0x20 => bufstatus: ReadWrite<u32, BUFSTATUS::Register>),
        (0x24 => bufstatus_set: WriteOnly<u32, BUFSTATUS::Register>),
        (0x28 => bufstatus_clr: WriteOnly<u32, BUFSTATUS::Register>),
        (0x2C => _reserved2),
        (0x30 => buffer10: ReadOnly<u32, BUFFER10::Register>),
        (0x34 => _reserved3),
        (0x40 => buffer32: ReadOnly<u32, BUFFER32::Register>),
        (0x44 => _reserved4),
        (0x50 => gainadj: ReadWrite<u32, GAINADJ::Register>),
        (0x54 => @END),
    }
}

register_bitfields![u32,
    CONTROL [
        /// Output update trigger source
        OUPDT OFFSET(0) NUMBITS(3) [],
        /// External trigger channel
        ETRIG OFFSET(3) NUMBITS(3) [],
        OUTMD OFFSET(6) NUMBITS(2) [
            HalfMilliamp = 0,
            OneMilliamp = 1,
            TwoMilliamp = 2
        ],
        INFMT OFFSET(8) NUMBITS(2) [
            OneTenBit = 0,
            TwoTenBit = 1,
            FourEightBit = 2
        ],
        DMARUN OFFSET(10) NUMBITS(1) [],
        JSEL OFFSET(11) NUMBITS(1) [
            Right = 0,
            Left = 1
        ],
        BUFRESET OFFSET(12) NUMBITS(1) [],
        TRIGINH OFFSET(13) NUMBITS(1) [],
        WRAPEN OFFSET(16) NUMBITS(1) [],
        ORIEN OFFSET(20) NUMBITS(1) [],
        URIEN OFFSET(21) NUMBITS(1) [],
        WEIEN OFFSET(22) NUMBITS(1) [],
        DBGMD OFFSET(29) NUMBITS(1) [
            Run = 0,
            Halt = 1
        ],
        LOADEN OFFSET(30) NUMBITS(1) [],
        IDACEN OFFSET(31) NUMBITS(1) []
    ],
    BUFSTATUS [
        LEVEL OFFSET(0) NUMBITS(3) [],
        /// Overrun
        ORI OFFSET(4) NUMBITS(1) [],
        /// Underrun
        URI OFFSET(5) NUMBITS(1) [],
        /// Went empty
        WEI OFFSET(6) NUMBITS(1) []
    ],
    BUFFER10 [
        BUFFER0 OFFSET(0) NUMBITS(16) [],
        BUFFER1 OFFSET(16) NUMBITS(16) []
    ],
    BUFFER32 [
        BUFFER2 OFFSET(0) NUMBITS(16) [],
        BUFFER3 OFFSET(16) NUMBITS(16) []
    ],
    GAINADJ [
        GAINADJ OFFSET(0) NUMBITS(5) []
    ]
];

/// Output full-scale current
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullScale {
    HalfMilliamp,
    OneMilliamp,
    TwoMilliamp,
}

/// How DATA writes are split into samples
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One 10-bit sample per write
    OneTenBit,
    /// Two 10-bit samples per write
    TwoTenBit,
    /// Four 8-bit samples per write
    FourEightBit,
}

/// FIFO status conditions that can raise an interrupt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferInterrupt {
    Overrun,
    Underrun,
    WentEmpty,
}

impl BufferInterrupt {
    fn enable_field(self) -> FieldValue<u32, CONTROL::Register> {
        match self {
            BufferInterrupt::Overrun => CONTROL::ORIEN::SET,
            BufferInterrupt::Underrun => CONTROL::URIEN::SET,
            BufferInterrupt::WentEmpty => CONTROL::WEIEN::SET,
        }
    }

    fn flag_field(self) -> FieldValue<u32, BUFSTATUS::Register> {
        match self {
            BufferInterrupt::Overrun => BUFSTATUS::ORI::SET,
            BufferInterrupt::Underrun => BUFSTATUS::URI::SET,
            BufferInterrupt::WentEmpty => BUFSTATUS::WEI::SET,
        }
    }
}

pub struct Idac {
    registers: StaticRef<IdacRegisters>,
}

impl Idac {
    pub const fn new(base: StaticRef<IdacRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn set_output_update_trigger(&self, trigger: u32) -> Result<(), ErrorCode> {
        bounds::fits("idac update trigger", trigger, 3)?;
        self.registers.control_clr.write(CONTROL::OUPDT::SET);
        self.registers.control_set.write(CONTROL::OUPDT.val(trigger));
        Ok(())
    }

    pub fn set_external_trigger_channel(&self, channel: u32) -> Result<(), ErrorCode> {
        bounds::fits("idac trigger channel", channel, 3)?;
        self.registers.control_clr.write(CONTROL::ETRIG::SET);
        self.registers.control_set.write(CONTROL::ETRIG.val(channel));
        Ok(())
    }

    pub fn select_output_fullscale(&self, scale: FullScale) {
        self.registers.control_clr.write(CONTROL::OUTMD::SET);
        match scale {
            FullScale::HalfMilliamp => {}
            FullScale::OneMilliamp => self.registers.control_set.write(CONTROL::OUTMD::OneMilliamp),
            FullScale::TwoMilliamp => self.registers.control_set.write(CONTROL::OUTMD::TwoMilliamp),
        }
    }

    pub fn select_input_format(&self, format: InputFormat) {
        self.registers.control_clr.write(CONTROL::INFMT::SET);
        match format {
            InputFormat::OneTenBit => {}
            InputFormat::TwoTenBit => self.registers.control_set.write(CONTROL::INFMT::TwoTenBit),
            InputFormat::FourEightBit => {
                self.registers.control_set.write(CONTROL::INFMT::FourEightBit)
            }
        }
    }

    pub fn start_dma_operation(&self) {
        self.registers.control_set.write(CONTROL::DMARUN::SET);
    }

    pub fn is_dma_operation_in_progress(&self) -> bool {
        self.registers.control.is_set(CONTROL::DMARUN)
    }

    pub fn select_left_justification(&self) {
        self.registers.control_set.write(CONTROL::JSEL::Left);
    }

    pub fn select_right_justification(&self) {
        self.registers.control_clr.write(CONTROL::JSEL::SET);
    }

    pub fn reset_buffer(&self) {
        self.registers.control_set.write(CONTROL::BUFRESET::SET);
    }

    pub fn enable_trigger(&self) {
        self.registers.control_clr.write(CONTROL::TRIGINH::SET);
    }

    pub fn disable_trigger(&self) {
        self.registers.control_set.write(CONTROL::TRIGINH::SET);
    }

    pub fn enable_buffer_wrap(&self) {
        self.registers.control_set.write(CONTROL::WRAPEN::SET);
    }

    pub fn disable_buffer_wrap(&self) {
        self.registers.control_clr.write(CONTROL::WRAPEN::SET);
    }

    pub fn enable_interrupt(&self, interrupt: BufferInterrupt) {
        self.registers.control_set.write(interrupt.enable_field());
    }

    pub fn disable_interrupt(&self, interrupt: BufferInterrupt) {
        self.registers.control_clr.write(interrupt.enable_field());
    }

    pub fn is_interrupt_enabled(&self, interrupt: BufferInterrupt) -> bool {
        self.registers.control.matches_all(interrupt.enable_field())
    }

    pub fn is_interrupt_pending(&self, interrupt: BufferInterrupt) -> bool {
        self.registers.bufstatus.matches_all(interrupt.flag_field())
    }

    pub fn clear_interrupt(&self, interrupt: BufferInterrupt) {
        self.registers.bufstatus_clr.write(interrupt.flag_field());
    }

    pub fn is_any_interrupt_pending(&self) -> bool {
        let status = self.registers.bufstatus.extract();
        status.is_set(BUFSTATUS::ORI) || status.is_set(BUFSTATUS::URI) || status.is_set(BUFSTATUS::WEI)
    }

    pub fn clear_all_interrupts(&self) {
        self.registers
            .bufstatus_clr
            .write(BUFSTATUS::ORI::SET + BUFSTATUS::URI::SET + BUFSTATUS::WEI::SET);
    }

    /// Halt the converter while the core is halted by a debugger.
    pub fn enable_stall_in_debug_mode(&self) {
        self.registers.control_set.write(CONTROL::DBGMD::Halt);
    }

    pub fn disable_stall_in_debug_mode(&self) {
        self.registers.control_clr.write(CONTROL::DBGMD::SET);
    }

    pub fn enable_load_resistor(&self) {
        self.registers.control_set.write(CONTROL::LOADEN::SET);
    }

    pub fn disable_load_resistor(&self) {
        self.registers.control_clr.write(CONTROL::LOADEN::SET);
    }

    pub fn enable_module(&self) {
        self.registers.control_set.write(CONTROL::IDACEN::SET);
    }

    pub fn disable_module(&self) {
        self.registers.control_clr.write(CONTROL::IDACEN::SET);
    }

    pub fn write_data(&self, data: u32) {
        self.registers.data.set(data);
    }

    pub fn read_data(&self) -> u32 {
        self.registers.data.get()
    }

    pub fn write_bufstatus(&self, bufstatus: u32) {
        self.registers.bufstatus.set(bufstatus);
    }

    pub fn read_bufstatus(&self) -> u32 {
        self.registers.bufstatus.get()
    }

    /// Number of samples waiting in the FIFO.
    pub fn buffer_level(&self) -> u32 {
        self.registers.bufstatus.read(BUFSTATUS::LEVEL)
    }

    /// One of the four FIFO entries, `0..=3`.
    pub fn buffer_entry(&self, entry: usize) -> Result<u16, ErrorCode> {
        let value = match entry {
            0 => self.registers.buffer10.read(BUFFER10::BUFFER0),
            1 => self.registers.buffer10.read(BUFFER10::BUFFER1),
            2 => self.registers.buffer32.read(BUFFER32::BUFFER2),
            3 => self.registers.buffer32.read(BUFFER32::BUFFER3),
            _ => return Err(ErrorCode::INVAL),
        };
        Ok(value as u16)
    }

    pub fn write_gainadj(&self, gainadj: u32) {
        self.registers.gainadj.set(gainadj);
    }

    pub fn read_gainadj(&self) -> u32 {
        self.registers.gainadj.get()
    }

    pub fn set_output_fullscale_adjust(&self, adjust: u32) -> Result<(), ErrorCode> {
        bounds::fits("idac fullscale adjust", adjust, 5)?;
        self.registers.gainadj.modify(GAINADJ::GAINADJ.val(adjust));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const CONTROL_SET: usize = 0x04;
    const CONTROL_CLR: usize = 0x08;
    const BUFSTATUS_OFF: usize = 0x20;
    const BUFSTATUS_CLR: usize = 0x28;

    fn idac() -> (FakeRegs<IdacRegisters>, Idac) {
        let fake = FakeRegs::new();
        let idac = Idac::new(fake.regs);
        (fake, idac)
    }

    #[test]
    fn trigger_and_format_selects() {
        let (fake, idac) = idac();
        idac.set_external_trigger_channel(5).unwrap();
        assert_eq!(fake.word(CONTROL_CLR), 0b111 << 3);
        assert_eq!(fake.word(CONTROL_SET), 5 << 3);

        idac.select_output_fullscale(FullScale::TwoMilliamp);
        assert_eq!(fake.word(CONTROL_CLR), 0b11 << 6);
        assert_eq!(fake.word(CONTROL_SET), 2 << 6);

        idac.select_input_format(InputFormat::FourEightBit);
        assert_eq!(fake.word(CONTROL_CLR), 0b11 << 8);
        assert_eq!(fake.word(CONTROL_SET), 2 << 8);

        assert_eq!(idac.set_output_update_trigger(8), Err(ErrorCode::INVAL));
    }

    #[test]
    fn trigger_inhibit_is_inverted() {
        let (fake, idac) = idac();
        idac.enable_trigger();
        assert_eq!(fake.word(CONTROL_CLR), 1 << 13);
        idac.disable_trigger();
        assert_eq!(fake.word(CONTROL_SET), 1 << 13);
    }

    #[test]
    fn interrupts_are_cleared_through_bufstatus_alias() {
        let (fake, idac) = idac();
        fake.poke(BUFSTATUS_OFF, (1 << 5) | 3);
        assert!(idac.is_interrupt_pending(BufferInterrupt::Underrun));
        assert!(!idac.is_interrupt_pending(BufferInterrupt::Overrun));
        assert!(idac.is_any_interrupt_pending());
        assert_eq!(idac.buffer_level(), 3);

        idac.clear_interrupt(BufferInterrupt::WentEmpty);
        assert_eq!(fake.word(BUFSTATUS_CLR), 1 << 6);
        idac.clear_all_interrupts();
        assert_eq!(fake.word(BUFSTATUS_CLR), 0b111 << 4);

        fake.poke(BUFSTATUS_OFF, 2);
        assert!(!idac.is_any_interrupt_pending());
    }

    #[test]
    fn buffer_entries() {
        let (fake, idac) = idac();
        fake.poke(0x30, 0x2222_1111);
        fake.poke(0x40, 0x4444_3333);
        assert_eq!(idac.buffer_entry(0), Ok(0x1111));
        assert_eq!(idac.buffer_entry(1), Ok(0x2222));
        assert_eq!(idac.buffer_entry(3), Ok(0x4444));
        assert_eq!(idac.buffer_entry(4), Err(ErrorCode::INVAL));
    }

    #[test]
    fn gain_adjust() {
        let (_fake, idac) = idac();
        idac.set_output_fullscale_adjust(31).unwrap();
        assert_eq!(idac.read_gainadj(), 31);
        assert_eq!(idac.set_output_fullscale_adjust(32), Err(ErrorCode::INVAL));
    }
}
