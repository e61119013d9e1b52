// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! External memory interface (EMIF_A) and its per-chip-select interface
//! blocks (EMIFIF_A)
//!
//! The EMIF block switches the two interfaces on and off and reports bus
//! state. Each interface block holds the bus width, multiplexing, timing
//! and the strobe levels used in each phase of a read or write cycle.
//!
//! # Usage
//!
//! ```rust,ignore
//! emif_if0.select_16bit_mode();
//! emif_if0.select_nonmuxed_mode();
//! emif_if0.set_read_timing(1, 1, 0, 4)?;
//! emif_if0.set_write_timing(1, 1, 1, 4)?;
//! emif.enable_interface(EmifInterface::Interface0);
//! ```

use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, ReadOnly, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    /// External memory interface controller
    pub EmifRegisters {
        (0x00 => control: ReadWrite<u32, CONTROL::Register>),
        (0x04 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x08 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x0C => _reserved0),
        (0x20 => status: ReadOnly<u32, STATUS::Register>),
        (0x24 => @END),
    },

    /// External memory interface, one per chip select
    pub EmifInterfaceRegisters {
        (0x00 => config: ReadWrite<u32, CONFIG::Register>),
        (0x04 => config_set: WriteOnly<u32, CONFIG::Register>),
        (0x08 => config_clr: WriteOnly<u32, CONFIG::Register>),
        (0x0C => _reserved0),
        /// Read timing
        (0x10 => ifrt: ReadWrite<u32, TIMING::Register>),
        (0x14 => _reserved1),
        /// Write timing
        (0x20 => ifwt: ReadWrite<u32, TIMING::Register>),
        (0x24 => _reserved2),
        /// Read control states
        (0x30 => ifrcst: ReadWrite<u32, CONTROL_STATES::Register>),
        (0x34 => _reserved3),
        /// Write control states
        (0x40 => ifwcst: ReadWrite<u32, CONTROL_STATES::Register>),
        (0x44 => @END),
    }
}

register_bitfields![u32,
    CONTROL [
        IF0EN OFFSET(0) NUMBITS(1) [],
        IF1EN OFFSET(1) NUMBITS(1) [],
        OFFSTEN OFFSET(4) NUMBITS(1) []
    ],
    STATUS [
        OFFSTS OFFSET(0) NUMBITS(1) [],
        IDLESTS OFFSET(1) NUMBITS(1) []
    ],
    CONFIG [
        BUSWIDTH OFFSET(0) NUMBITS(1) [
            EightBit = 0,
            SixteenBit = 1
        ],
        MUXMD OFFSET(2) NUMBITS(1) [],
        ASEN OFFSET(3) NUMBITS(1) [],
        ROEN OFFSET(4) NUMBITS(1) [],
        /// Write data hold inhibit
        WDHINH OFFSET(8) NUMBITS(1) [],
        DELAYOE OFFSET(12) NUMBITS(1) [],
        KLREN OFFSET(16) NUMBITS(1) []
    ],
    TIMING [
        ADDR_SETUP OFFSET(0) NUMBITS(4) [],
        ADDR_HOLD OFFSET(4) NUMBITS(4) [],
        DATA_HOLD OFFSET(8) NUMBITS(4) [],
        DATA_WAIT OFFSET(16) NUMBITS(6) []
    ],
    // Each nibble holds the strobe level in the address setup, address
    // hold, data wait and data hold phases, lowest bit first.
    CONTROL_STATES [
        CS OFFSET(0) NUMBITS(4) [],
        OE OFFSET(4) NUMBITS(4) [],
        WR OFFSET(8) NUMBITS(4) [],
        ALE OFFSET(12) NUMBITS(4) []
    ]
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmifInterface {
    Interface0,
    Interface1,
}

impl EmifInterface {
    fn enable_field(self) -> FieldValue<u32, CONTROL::Register> {
        match self {
            EmifInterface::Interface0 => CONTROL::IF0EN::SET,
            EmifInterface::Interface1 => CONTROL::IF1EN::SET,
        }
    }
}

pub struct Emif {
    registers: StaticRef<EmifRegisters>,
}

impl Emif {
    pub const fn new(base: StaticRef<EmifRegisters>) -> Self {
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

    pub fn enable_interface(&self, interface: EmifInterface) {
        self.registers.control_set.write(interface.enable_field());
    }

    pub fn disable_interface(&self, interface: EmifInterface) {
        self.registers.control_clr.write(interface.enable_field());
    }

    pub fn is_interface_active(&self, interface: EmifInterface) -> bool {
        self.registers.control.matches_all(interface.enable_field())
    }

    pub fn enable_off_state(&self) {
        self.registers.control_set.write(CONTROL::OFFSTEN::SET);
    }

    pub fn disable_off_state(&self) {
        self.registers.control_clr.write(CONTROL::OFFSTEN::SET);
    }

    pub fn is_off(&self) -> bool {
        self.registers.status.is_set(STATUS::OFFSTS)
    }

    pub fn is_idle(&self) -> bool {
        self.registers.status.is_set(STATUS::IDLESTS)
    }

    /// Neither idle nor in the off state.
    pub fn is_running(&self) -> bool {
        let status = self.registers.status.extract();
        !status.is_set(STATUS::OFFSTS) && !status.is_set(STATUS::IDLESTS)
    }
}

pub struct EmifInterfaceBlock {
    registers: StaticRef<EmifInterfaceRegisters>,
}

impl EmifInterfaceBlock {
    pub const fn new(base: StaticRef<EmifInterfaceRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, config: u32, ifrt: u32, ifwt: u32, ifrcst: u32, ifwcst: u32) {
        self.registers.config.set(config);
        self.registers.ifrt.set(ifrt);
        self.registers.ifwt.set(ifwt);
        self.registers.ifrcst.set(ifrcst);
        self.registers.ifwcst.set(ifwcst);
    }

    pub fn write_config(&self, config: u32) {
        self.registers.config.set(config);
    }

    pub fn read_config(&self) -> u32 {
        self.registers.config.get()
    }

    pub fn select_8bit_mode(&self) {
        self.registers.config_clr.write(CONFIG::BUSWIDTH::SET);
    }

    pub fn select_16bit_mode(&self) {
        self.registers.config_set.write(CONFIG::BUSWIDTH::SixteenBit);
    }

    pub fn select_muxed_mode(&self) {
        self.registers.config_set.write(CONFIG::MUXMD::SET);
    }

    pub fn select_nonmuxed_mode(&self) {
        self.registers.config_clr.write(CONFIG::MUXMD::SET);
    }

    pub fn enable_address_shift(&self) {
        self.registers.config_set.write(CONFIG::ASEN::SET);
    }

    pub fn disable_address_shift(&self) {
        self.registers.config_clr.write(CONFIG::ASEN::SET);
    }

    pub fn enable_read_only(&self) {
        self.registers.config_set.write(CONFIG::ROEN::SET);
    }

    pub fn disable_read_only(&self) {
        self.registers.config_clr.write(CONFIG::ROEN::SET);
    }

    pub fn enable_write_data_hold(&self) {
        self.registers.config_clr.write(CONFIG::WDHINH::SET);
    }

    pub fn disable_write_data_hold(&self) {
        self.registers.config_set.write(CONFIG::WDHINH::SET);
    }

    pub fn enable_oeb_delay(&self) {
        self.registers.config_set.write(CONFIG::DELAYOE::SET);
    }

    pub fn disable_oeb_delay(&self) {
        self.registers.config_clr.write(CONFIG::DELAYOE::SET);
    }

    pub fn enable_keep_value(&self) {
        self.registers.config_set.write(CONFIG::KLREN::SET);
    }

    pub fn disable_keep_value(&self) {
        self.registers.config_clr.write(CONFIG::KLREN::SET);
    }

    pub fn write_ifrt(&self, ifrt: u32) {
        self.registers.ifrt.set(ifrt);
    }

    pub fn read_ifrt(&self) -> u32 {
        self.registers.ifrt.get()
    }

    pub fn write_ifwt(&self, ifwt: u32) {
        self.registers.ifwt.set(ifwt);
    }

    pub fn read_ifwt(&self) -> u32 {
        self.registers.ifwt.get()
    }

    pub fn write_ifrcst(&self, ifrcst: u32) {
        self.registers.ifrcst.set(ifrcst);
    }

    pub fn read_ifrcst(&self) -> u32 {
        self.registers.ifrcst.get()
    }

    pub fn write_ifwcst(&self, ifwcst: u32) {
        self.registers.ifwcst.set(ifwcst);
    }

    pub fn read_ifwcst(&self) -> u32 {
        self.registers.ifwcst.get()
    }

    fn timing(
        addr_setup: u32,
        addr_hold: u32,
        data_hold: u32,
        data_wait: u32,
    ) -> Result<FieldValue<u32, TIMING::Register>, ErrorCode> {
        bounds::fits("emif address setup", addr_setup, 4)?;
        bounds::fits("emif address hold", addr_hold, 4)?;
        bounds::fits("emif data hold", data_hold, 4)?;
        bounds::fits("emif data wait", data_wait, 6)?;
        Ok(TIMING::ADDR_SETUP.val(addr_setup)
            + TIMING::ADDR_HOLD.val(addr_hold)
            + TIMING::DATA_HOLD.val(data_hold)
            + TIMING::DATA_WAIT.val(data_wait))
    }

    /// Replace the read cycle timing, in EMIF clocks.
    pub fn set_read_timing(
        &self,
        addr_setup: u32,
        addr_hold: u32,
        data_hold: u32,
        data_wait: u32,
    ) -> Result<(), ErrorCode> {
        let timing = Self::timing(addr_setup, addr_hold, data_hold, data_wait)?;
        self.registers.ifrt.write(timing);
        Ok(())
    }

    /// Replace the write cycle timing, in EMIF clocks.
    pub fn set_write_timing(
        &self,
        addr_setup: u32,
        addr_hold: u32,
        data_hold: u32,
        data_wait: u32,
    ) -> Result<(), ErrorCode> {
        let timing = Self::timing(addr_setup, addr_hold, data_hold, data_wait)?;
        self.registers.ifwt.write(timing);
        Ok(())
    }

    fn control_states(
        cs: u32,
        oe: u32,
        wr: u32,
        ale: u32,
    ) -> Result<FieldValue<u32, CONTROL_STATES::Register>, ErrorCode> {
        bounds::fits("emif cs states", cs, 4)?;
        bounds::fits("emif oe states", oe, 4)?;
        bounds::fits("emif wr states", wr, 4)?;
        bounds::fits("emif ale states", ale, 4)?;
        Ok(CONTROL_STATES::CS.val(cs)
            + CONTROL_STATES::OE.val(oe)
            + CONTROL_STATES::WR.val(wr)
            + CONTROL_STATES::ALE.val(ale))
    }

    pub fn set_read_control_states(&self, cs: u32, oe: u32, wr: u32, ale: u32) -> Result<(), ErrorCode> {
        let states = Self::control_states(cs, oe, wr, ale)?;
        self.registers.ifrcst.write(states);
        Ok(())
    }

    pub fn set_write_control_states(&self, cs: u32, oe: u32, wr: u32, ale: u32) -> Result<(), ErrorCode> {
        let states = Self::control_states(cs, oe, wr, ale)?;
        self.registers.ifwcst.write(states);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    #[test]
    fn interface_enables() {
        let fake = FakeRegs::<EmifRegisters>::new();
        let emif = Emif::new(fake.regs);
        emif.enable_interface(EmifInterface::Interface1);
        assert_eq!(fake.word(0x04), 1 << 1);
        emif.disable_interface(EmifInterface::Interface0);
        assert_eq!(fake.word(0x08), 1 << 0);

        fake.poke(0x00, 1 << 1);
        assert!(emif.is_interface_active(EmifInterface::Interface1));
        assert!(!emif.is_interface_active(EmifInterface::Interface0));
    }

    #[test]
    fn running_means_neither_idle_nor_off() {
        let fake = FakeRegs::<EmifRegisters>::new();
        let emif = Emif::new(fake.regs);
        assert!(emif.is_running());
        fake.poke(0x20, 1 << 1);
        assert!(emif.is_idle());
        assert!(!emif.is_running());
        fake.poke(0x20, 1 << 0);
        assert!(emif.is_off());
        assert!(!emif.is_running());
    }

    #[test]
    fn timing_packs_all_four_fields() {
        let fake = FakeRegs::<EmifInterfaceRegisters>::new();
        let emif_if = EmifInterfaceBlock::new(fake.regs);
        emif_if.set_read_timing(0x1, 0x2, 0x3, 0x3F).unwrap();
        assert_eq!(emif_if.read_ifrt(), 0x003F_0321);
        assert_eq!(emif_if.set_write_timing(0, 0, 0, 64), Err(ErrorCode::INVAL));
        assert_eq!(emif_if.read_ifwt(), 0);

        emif_if.set_write_control_states(0xA, 0xB, 0xC, 0xD).unwrap();
        assert_eq!(emif_if.read_ifwcst(), 0xDCBA);
        assert_eq!(emif_if.set_read_control_states(16, 0, 0, 0), Err(ErrorCode::INVAL));
    }

    #[test]
    fn write_data_hold_is_an_inhibit_bit() {
        let fake = FakeRegs::<EmifInterfaceRegisters>::new();
        let emif_if = EmifInterfaceBlock::new(fake.regs);
        emif_if.enable_write_data_hold();
        assert_eq!(fake.word(0x08), 1 << 8);
        emif_if.select_16bit_mode();
        assert_eq!(fake.word(0x04), 1);
    }
}
