// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA transfer matrix (DTM_A)
//!
//! A DTM walks a table of state words stored in RAM. Each state names the
//! DMA channel and the source and destination modules to connect, how many
//! transfers to run, and which state comes next. The module fetches the
//! table from the address written to STATEADDR.
//!
//! State words are built with [`DtmState`]:
//!
//! ```rust,ignore
//! static mut STATES: [u32; 2] = [0; 2];
//! STATES[0] = DtmState::new(DtmChannel::A, DtmSource::Memory, DtmDestination::Usart0, 1, DONE, 8)?
//!     .with(StateFlag::PrimaryStateInterrupt)
//!     .word();
//! dtm.write_state_address(addr_of!(STATES) as u32);
//! dtm.enable_module();
//! ```

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, LocalRegisterCopy, ReadOnly, ReadWrite,
    WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    /// DMA transfer matrix
    pub DtmRegisters {
        (0x00 => control: ReadWrite<u32, CONTROL::Register>),
        (0x04 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x08 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x0C => _reserved0),
        (0x10 => timeout: ReadWrite<u32, TIMEOUT::Register>),
        (0x14 => _reserved1),
        /// Master transfer count
        (0x20 => mstcount: ReadWrite<u32, MSTCOUNT::Register>),
        (0x24 => _reserved2),
        /// Address of the state table
        (0x30 => stateaddr: ReadWrite<u32, STATEADDR::Register>),
        (0x34 => _reserved3),
        /// Active state word
        (0x40 => state: ReadOnly<u32, STATE::Register>),
        (0x44 => @END),
    }
}

register_bitfields![u32,
    CONTROL [
        STCOUNT OFFSET(0) NUMBITS(8) [],
        ST OFFSET(8) NUMBITS(4) [],
        LASTST OFFSET(12) NUMBITS(4) [],
        INHSSEL OFFSET(16) NUMBITS(4) [],
        DBGMD OFFSET(23) NUMBITS(1) [
            Run = 0,
            Halt = 1
        ],
        INHF OFFSET(24) NUMBITS(1) [],
        DSTREQF OFFSET(25) NUMBITS(1) [],
        SRCREQF OFFSET(26) NUMBITS(1) [],
        DTMINH OFFSET(27) NUMBITS(1) [],
        TOERRI OFFSET(28) NUMBITS(1) [],
        DMAERRI OFFSET(29) NUMBITS(1) [],
        DTMI OFFSET(30) NUMBITS(1) [],
        DTMEN OFFSET(31) NUMBITS(1) []
    ],
    TIMEOUT [
        TORELOAD OFFSET(0) NUMBITS(16) [],
        TOCOUNT OFFSET(16) NUMBITS(16) []
    ],
    MSTCOUNT [
        MSTCOUNT OFFSET(0) NUMBITS(16) []
    ],
    STATEADDR [
        STATEADDR OFFSET(2) NUMBITS(30) []
    ],
    pub STATE [
        STRELOAD OFFSET(0) NUMBITS(8) [],
        SECST OFFSET(8) NUMBITS(4) [],
        PRIST OFFSET(12) NUMBITS(4) [],
        DSTMOD OFFSET(16) NUMBITS(4) [],
        SRCMOD OFFSET(20) NUMBITS(4) [],
        DTMCHSEL OFFSET(24) NUMBITS(2) [
            ChannelA = 0,
            ChannelB = 1,
            ChannelC = 2,
            ChannelD = 3
        ],
        INHSPOL OFFSET(26) NUMBITS(1) [],
        DTMINH OFFSET(27) NUMBITS(1) [],
        MSTDECEN OFFSET(28) NUMBITS(1) [],
        TOERRIEN OFFSET(29) NUMBITS(1) [],
        SECSTIEN OFFSET(30) NUMBITS(1) [],
        PRISTIEN OFFSET(31) NUMBITS(1) []
    ]
];

/// Next-state value that ends the transfer sequence.
pub const DONE: u32 = 15;

/// DMA channel slot of a DTM, mapped to a real channel by the DMA crossbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DtmChannel {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// Module that supplies data in a DTM state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DtmSource {
    Spi0 = 0,
    Spi1 = 1,
    Aes0 = 2,
    Usart0 = 4,
    I2c0 = 6,
    SarAdc0 = 7,
    Epca0 = 8,
    EncDec0 = 9,
    Dma0Trigger0 = 13,
    Dma0Trigger1 = 14,
    Memory = 15,
}

/// Module that consumes data in a DTM state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DtmDestination {
    Spi0 = 0,
    Spi1 = 1,
    Aes0 = 2,
    Aes0Xor = 3,
    Usart0 = 4,
    I2c0 = 6,
    Idac0 = 7,
    Epca0 = 8,
    EncDec0 = 9,
    Dma0Trigger0 = 13,
    Dma0Trigger1 = 14,
    Memory = 15,
}

/// Single-bit options of a state word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateFlag {
    InhibitSignalActiveHigh,
    ModuleInhibit,
    MasterCountDecrement,
    TimeoutErrorInterrupt,
    SecondaryStateInterrupt,
    PrimaryStateInterrupt,
}

impl StateFlag {
    fn field(self) -> FieldValue<u32, STATE::Register> {
        match self {
            StateFlag::InhibitSignalActiveHigh => STATE::INHSPOL::SET,
            StateFlag::ModuleInhibit => STATE::DTMINH::SET,
            StateFlag::MasterCountDecrement => STATE::MSTDECEN::SET,
            StateFlag::TimeoutErrorInterrupt => STATE::TOERRIEN::SET,
            StateFlag::SecondaryStateInterrupt => STATE::SECSTIEN::SET,
            StateFlag::PrimaryStateInterrupt => STATE::PRISTIEN::SET,
        }
    }
}

/// One entry of a DTM state table.
#[derive(Clone, Copy)]
pub struct DtmState(LocalRegisterCopy<u32, STATE::Register>);

impl DtmState {
    /// Build a state moving `reload` transfers from `source` to
    /// `destination` on `channel`, then moving to `primary` (or
    /// `secondary`). Next states are `0..=15`, with [`DONE`] ending the
    /// sequence.
    pub fn new(
        channel: DtmChannel,
        source: DtmSource,
        destination: DtmDestination,
        primary: u32,
        secondary: u32,
        reload: u8,
    ) -> Result<Self, ErrorCode> {
        bounds::at_most("dtm primary state", primary, DONE)?;
        bounds::at_most("dtm secondary state", secondary, DONE)?;
        let mut word = LocalRegisterCopy::new(0);
        word.write(
            STATE::DTMCHSEL.val(channel as u32)
                + STATE::SRCMOD.val(source as u32)
                + STATE::DSTMOD.val(destination as u32)
                + STATE::PRIST.val(primary)
                + STATE::SECST.val(secondary)
                + STATE::STRELOAD.val(reload as u32),
        );
        Ok(DtmState(word))
    }

    pub fn with(mut self, flag: StateFlag) -> Self {
        self.0.modify(flag.field());
        self
    }

    pub fn has(&self, flag: StateFlag) -> bool {
        self.0.matches_all(flag.field())
    }

    pub fn primary_state(&self) -> u32 {
        self.0.read(STATE::PRIST)
    }

    pub fn secondary_state(&self) -> u32 {
        self.0.read(STATE::SECST)
    }

    pub fn reload(&self) -> u8 {
        self.0.read(STATE::STRELOAD) as u8
    }

    pub fn channel(&self) -> DtmChannel {
        match self.0.read(STATE::DTMCHSEL) {
            0 => DtmChannel::A,
            1 => DtmChannel::B,
            2 => DtmChannel::C,
            _ => DtmChannel::D,
        }
    }

    /// The raw word as stored in a state table.
    pub fn word(&self) -> u32 {
        self.0.get()
    }
}

impl From<LocalRegisterCopy<u32, STATE::Register>> for DtmState {
    fn from(state: LocalRegisterCopy<u32, STATE::Register>) -> Self {
        DtmState(state)
    }
}

pub struct Dtm {
    registers: StaticRef<DtmRegisters>,
}

impl Dtm {
    pub const fn new(base: StaticRef<DtmRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, control: u32, timeout: u32, mstcount: u32, stateaddr: u32) {
        self.registers.control.set(control);
        self.registers.timeout.set(timeout);
        self.registers.mstcount.set(mstcount);
        self.registers.stateaddr.set(stateaddr);
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn set_active_state_counter(&self, count: u8) {
        self.registers.control_clr.write(CONTROL::STCOUNT::SET);
        self.registers.control_set.write(CONTROL::STCOUNT.val(count as u32));
    }

    pub fn active_state_counter(&self) -> u8 {
        self.registers.control.read(CONTROL::STCOUNT) as u8
    }

    pub fn set_active_state(&self, state: u32) -> Result<(), ErrorCode> {
        bounds::fits("dtm active state", state, 4)?;
        self.registers.control_clr.write(CONTROL::ST::SET);
        self.registers.control_set.write(CONTROL::ST.val(state));
        Ok(())
    }

    pub fn active_state(&self) -> u32 {
        self.registers.control.read(CONTROL::ST)
    }

    pub fn last_state(&self) -> u32 {
        self.registers.control.read(CONTROL::LASTST)
    }

    pub fn set_inhibit_signal_selection(&self, signal: u32) -> Result<(), ErrorCode> {
        bounds::fits("dtm inhibit signal", signal, 4)?;
        self.registers.control_clr.write(CONTROL::INHSSEL::SET);
        self.registers.control_set.write(CONTROL::INHSSEL.val(signal));
        Ok(())
    }

    pub fn inhibit_signal_selection(&self) -> u32 {
        self.registers.control.read(CONTROL::INHSSEL)
    }

    pub fn read_inhibit_signal_status(&self) -> bool {
        self.registers.control.is_set(CONTROL::INHF)
    }

    pub fn enable_stall_in_debug_mode(&self) {
        self.registers.control_set.write(CONTROL::DBGMD::Halt);
    }

    pub fn disable_stall_in_debug_mode(&self) {
        self.registers.control_clr.write(CONTROL::DBGMD::SET);
    }

    pub fn read_destination_dma_request_status(&self) -> bool {
        self.registers.control.is_set(CONTROL::DSTREQF)
    }

    pub fn read_source_dma_request_status(&self) -> bool {
        self.registers.control.is_set(CONTROL::SRCREQF)
    }

    pub fn enable_module_inhibit(&self) {
        self.registers.control_set.write(CONTROL::DTMINH::SET);
    }

    pub fn disable_module_inhibit(&self) {
        self.registers.control_clr.write(CONTROL::DTMINH::SET);
    }

    pub fn clear_timeout_error_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TOERRI::SET);
    }

    pub fn is_timeout_error_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::TOERRI)
    }

    pub fn clear_dma_error_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::DMAERRI::SET);
    }

    pub fn is_dma_error_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::DMAERRI)
    }

    pub fn clear_module_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::DTMI::SET);
    }

    pub fn is_module_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::DTMI)
    }

    pub fn clear_all_interrupts(&self) {
        self.registers
            .control_clr
            .write(CONTROL::TOERRI::SET + CONTROL::DMAERRI::SET + CONTROL::DTMI::SET);
    }

    pub fn is_any_interrupt_pending(&self) -> bool {
        let control = self.registers.control.extract();
        control.is_set(CONTROL::TOERRI)
            || control.is_set(CONTROL::DMAERRI)
            || control.is_set(CONTROL::DTMI)
    }

    pub fn enable_module(&self) {
        self.registers.control_set.write(CONTROL::DTMEN::SET);
    }

    pub fn disable_module(&self) {
        self.registers.control_clr.write(CONTROL::DTMEN::SET);
    }

    pub fn write_timeout(&self, timeout: u32) {
        self.registers.timeout.set(timeout);
    }

    pub fn read_timeout(&self) -> u32 {
        self.registers.timeout.get()
    }

    pub fn set_timeout_counter_reload(&self, reload: u16) {
        self.registers.timeout.modify(TIMEOUT::TORELOAD.val(reload as u32));
    }

    pub fn timeout_counter_reload(&self) -> u16 {
        self.registers.timeout.read(TIMEOUT::TORELOAD) as u16
    }

    pub fn timeout_count(&self) -> u16 {
        self.registers.timeout.read(TIMEOUT::TOCOUNT) as u16
    }

    pub fn set_master_count(&self, count: u16) {
        self.registers.mstcount.modify(MSTCOUNT::MSTCOUNT.val(count as u32));
    }

    pub fn master_count(&self) -> u16 {
        self.registers.mstcount.read(MSTCOUNT::MSTCOUNT) as u16
    }

    /// Point the module at a state table. The low two address bits are
    /// dropped.
    pub fn write_state_address(&self, addr: u32) {
        self.registers.stateaddr.set(addr & !0b11);
    }

    pub fn read_state_address(&self) -> u32 {
        self.registers.stateaddr.get()
    }

    pub fn read_state(&self) -> LocalRegisterCopy<u32, STATE::Register> {
        self.registers.state.extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const CONTROL_OFF: usize = 0x00;
    const CONTROL_SET: usize = 0x04;
    const CONTROL_CLR: usize = 0x08;

    #[test]
    fn state_word_packs_fields() {
        let state = DtmState::new(
            DtmChannel::C,
            DtmSource::Memory,
            DtmDestination::Usart0,
            1,
            DONE,
            0x20,
        )
        .unwrap()
        .with(StateFlag::PrimaryStateInterrupt)
        .with(StateFlag::MasterCountDecrement);

        assert_eq!(
            state.word(),
            (1 << 31) | (1 << 28) | (2 << 24) | (15 << 20) | (4 << 16) | (1 << 12) | (15 << 8) | 0x20
        );
        assert_eq!(state.channel(), DtmChannel::C);
        assert_eq!(state.secondary_state(), DONE);
        assert!(state.has(StateFlag::PrimaryStateInterrupt));
        assert!(!state.has(StateFlag::ModuleInhibit));
    }

    #[test]
    fn state_word_rejects_bad_next_state() {
        assert!(DtmState::new(DtmChannel::A, DtmSource::Spi0, DtmDestination::Idac0, 16, 0, 1).is_err());
        assert!(DtmState::new(DtmChannel::A, DtmSource::Spi0, DtmDestination::Idac0, 0, 16, 1).is_err());
    }

    #[test]
    fn control_fields_clear_then_set() {
        let fake = FakeRegs::<DtmRegisters>::new();
        let dtm = Dtm::new(fake.regs);
        dtm.set_active_state(9).unwrap();
        assert_eq!(fake.word(CONTROL_CLR), 0xF << 8);
        assert_eq!(fake.word(CONTROL_SET), 9 << 8);
        dtm.set_active_state_counter(0xAB);
        assert_eq!(fake.word(CONTROL_CLR), 0xFF);
        assert_eq!(fake.word(CONTROL_SET), 0xAB);
        assert_eq!(dtm.set_inhibit_signal_selection(16), Err(ErrorCode::INVAL));
    }

    #[test]
    fn interrupts() {
        let fake = FakeRegs::<DtmRegisters>::new();
        let dtm = Dtm::new(fake.regs);
        assert!(!dtm.is_any_interrupt_pending());
        fake.poke(CONTROL_OFF, 1 << 29);
        assert!(dtm.is_dma_error_interrupt_pending());
        assert!(dtm.is_any_interrupt_pending());
        dtm.clear_all_interrupts();
        assert_eq!(fake.word(CONTROL_CLR), 0b111 << 28);
    }

    #[test]
    fn counters_and_state_address() {
        let fake = FakeRegs::<DtmRegisters>::new();
        let dtm = Dtm::new(fake.regs);
        dtm.set_timeout_counter_reload(0x1234);
        fake.poke(0x10, fake.word(0x10) | (0x0042 << 16));
        assert_eq!(dtm.timeout_counter_reload(), 0x1234);
        assert_eq!(dtm.timeout_count(), 0x42);

        dtm.set_master_count(0xBEEF);
        assert_eq!(dtm.master_count(), 0xBEEF);

        dtm.write_state_address(0x2000_0103);
        assert_eq!(dtm.read_state_address(), 0x2000_0100);

        fake.poke(0x40, 0x8000_0000 | (3 << 24));
        let state = DtmState::from(dtm.read_state());
        assert_eq!(state.channel(), DtmChannel::D);
        assert!(state.has(StateFlag::PrimaryStateInterrupt));
    }
}
