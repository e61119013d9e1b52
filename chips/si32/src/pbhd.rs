// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! High-drive port bank (PBHD_A)
//!
//! Six pins with adjustable drive strength, current limiting and a safe
//! state that a kill signal can force. Pin arguments are bit masks over
//! pins 0 to 5; any higher bit is rejected.

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, Field, ReadOnly, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

/// Pins in the bank.
pub const NUM_PINS: u32 = 6;

register_structs! {
    pub PbhdRegisters {
        (0x00 => pb: ReadWrite<u32, PB::Register>),
        (0x04 => pb_set: WriteOnly<u32, PB::Register>),
        (0x08 => pb_clr: WriteOnly<u32, PB::Register>),
        /// Upper half selects which bits of the lower half are written
        (0x0C => pb_msk: WriteOnly<u32>),
        (0x10 => pbpin: ReadOnly<u32, PB::Register>),
        (0x14 => _reserved0),
        (0x20 => pbmdsel: ReadWrite<u32, PB::Register>),
        (0x24 => pbmdsel_set: WriteOnly<u32, PB::Register>),
        (0x28 => pbmdsel_clr: WriteOnly<u32, PB::Register>),
        (0x2C => _reserved1),
        (0x30 => pbden: ReadWrite<u32, PBDEN::Register>),
        (0x34 => pbden_set: WriteOnly<u32, PBDEN::Register>),
        (0x38 => pbden_clr: WriteOnly<u32, PBDEN::Register>),
        (0x3C => _reserved2),
        (0x40 => pbdrv: ReadWrite<u32, PBDRV::Register>),
        (0x44 => pbdrv_set: WriteOnly<u32, PBDRV::Register>),
        (0x48 => pbdrv_clr: WriteOnly<u32, PBDRV::Register>),
        (0x4C => _reserved3),
        (0x50 => pbilimit: ReadWrite<u32, PBILIMIT::Register>),
        (0x54 => pbilimit_set: WriteOnly<u32, PBILIMIT::Register>),
        (0x58 => pbilimit_clr: WriteOnly<u32, PBILIMIT::Register>),
        (0x5C => _reserved4),
        (0x70 => pbfsel: ReadWrite<u32, PBFSEL::Register>),
        (0x74 => _reserved5),
        (0x80 => pbss: ReadWrite<u32, PBSS::Register>),
        (0x84 => pbss_set: WriteOnly<u32, PBSS::Register>),
        (0x88 => pbss_clr: WriteOnly<u32, PBSS::Register>),
        (0x8C => _reserved6),
        (0x90 => pblock: ReadWrite<u32, PB::Register>),
        (0x94 => @END),
    }
}

register_bitfields![u32,
    PB [
        PINS OFFSET(0) NUMBITS(6) []
    ],
    PBDEN [
        PBNDEN OFFSET(0) NUMBITS(6) [],
        PBPDEN OFFSET(16) NUMBITS(6) []
    ],
    PBDRV [
        PBDRV OFFSET(0) NUMBITS(6) [],
        PBPUEN OFFSET(16) NUMBITS(1) [],
        PBLVMD OFFSET(17) NUMBITS(1) [],
        PBSLEW OFFSET(18) NUMBITS(2) [
            Fastest = 0,
            Faster = 1,
            Slower = 2,
            Slowest = 3
        ],
        PBBIASEN OFFSET(21) NUMBITS(1) [],
        PBDRVEN OFFSET(22) NUMBITS(1) [],
        PBVTRKEN OFFSET(23) NUMBITS(1) []
    ],
    PBILIMIT [
        PBILEN OFFSET(0) NUMBITS(6) [],
        NILIMIT OFFSET(16) NUMBITS(4) [],
        PILIMIT OFFSET(20) NUMBITS(4) []
    ],
    PBFSEL [
        PB0SEL OFFSET(0) NUMBITS(2) [],
        PB1SEL OFFSET(2) NUMBITS(2) [],
        PB2SEL OFFSET(4) NUMBITS(2) [],
        PB3SEL OFFSET(6) NUMBITS(2) [],
        PB4SEL OFFSET(8) NUMBITS(2) [],
        PB5SEL OFFSET(10) NUMBITS(3) []
    ],
    PBSS [
        PB0SSSEL OFFSET(0) NUMBITS(2) [],
        PB1SSSEL OFFSET(2) NUMBITS(2) [],
        PB2SSSEL OFFSET(4) NUMBITS(2) [],
        PB3SSSEL OFFSET(6) NUMBITS(2) [],
        PB4SSSEL OFFSET(8) NUMBITS(2) [],
        PB5SSSEL OFFSET(10) NUMBITS(2) [],
        SSMDEN OFFSET(16) NUMBITS(1) [],
        PBSSSMD OFFSET(17) NUMBITS(1) []
    ]
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlewRate {
    Fastest = 0,
    Faster = 1,
    Slower = 2,
    Slowest = 3,
}

/// What a pin is driven to while the port is in its safe state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SafeState {
    HighImpedance = 0,
    High = 1,
    Low = 2,
    /// The pin keeps its normal function.
    Disabled = 3,
}

fn check_mask(mask: u32) -> Result<(), ErrorCode> {
    bounds::fits("pbhd pin mask", mask, NUM_PINS)
}

fn function_field(pin: u32) -> Result<Field<u32, PBFSEL::Register>, ErrorCode> {
    match pin {
        0 => Ok(PBFSEL::PB0SEL),
        1 => Ok(PBFSEL::PB1SEL),
        2 => Ok(PBFSEL::PB2SEL),
        3 => Ok(PBFSEL::PB3SEL),
        4 => Ok(PBFSEL::PB4SEL),
        5 => Ok(PBFSEL::PB5SEL),
        _ => Err(ErrorCode::INVAL),
    }
}

fn safe_state_field(pin: u32) -> Result<Field<u32, PBSS::Register>, ErrorCode> {
    match pin {
        0 => Ok(PBSS::PB0SSSEL),
        1 => Ok(PBSS::PB1SSSEL),
        2 => Ok(PBSS::PB2SSSEL),
        3 => Ok(PBSS::PB3SSSEL),
        4 => Ok(PBSS::PB4SSSEL),
        5 => Ok(PBSS::PB5SSSEL),
        _ => Err(ErrorCode::INVAL),
    }
}

pub struct Pbhd {
    registers: StaticRef<PbhdRegisters>,
}

impl Pbhd {
    pub const fn new(base: StaticRef<PbhdRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(
        &self,
        pb: u32,
        pbmdsel: u32,
        pbden: u32,
        pbdrv: u32,
        pbilimit: u32,
        pbfsel: u32,
        pbss: u32,
        pblock: u32,
    ) {
        let regs = &*self.registers;
        regs.pb.set(pb);
        regs.pbmdsel.set(pbmdsel);
        regs.pbden.set(pbden);
        regs.pbdrv.set(pbdrv);
        regs.pbilimit.set(pbilimit);
        regs.pbfsel.set(pbfsel);
        regs.pbss.set(pbss);
        regs.pblock.set(pblock);
    }

    pub fn write_pb(&self, pb: u32) {
        self.registers.pb.set(pb);
    }

    pub fn read_pb(&self) -> u32 {
        self.registers.pb.get()
    }

    pub fn write_pins_high(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pb_set.set(mask);
        Ok(())
    }

    pub fn write_pins_low(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pb_clr.set(mask);
        Ok(())
    }

    /// Drive the pins in `mask` to the matching bits of `value`, leaving
    /// the rest untouched.
    pub fn write_pins_masked(&self, value: u32, mask: u32) -> Result<(), ErrorCode> {
        check_mask(value)?;
        check_mask(mask)?;
        self.registers.pb_msk.set((mask << 16) | value);
        Ok(())
    }

    pub fn toggle_pins(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        let inverted = !self.registers.pb.get() & 0xFFFF;
        self.registers.pb_msk.set((mask << 16) | inverted);
        Ok(())
    }

    pub fn read_pins(&self) -> u32 {
        self.registers.pbpin.get()
    }

    pub fn read_pin(&self, pin: u32) -> Result<bool, ErrorCode> {
        bounds::at_most("pbhd pin", pin, NUM_PINS - 1)?;
        Ok((self.registers.pbpin.get() >> pin) & 1 == 1)
    }

    pub fn write_pbmdsel(&self, pbmdsel: u32) {
        self.registers.pbmdsel.set(pbmdsel);
    }

    pub fn read_pbmdsel(&self) -> u32 {
        self.registers.pbmdsel.get()
    }

    pub fn set_pins_push_pull_output(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbmdsel_set.set(mask);
        self.registers.pbden_set.write(PBDEN::PBNDEN.val(mask));
        self.registers.pbden_set.write(PBDEN::PBPDEN.val(mask));
        Ok(())
    }

    /// Open-drain input: N-channel driver on, P-channel off, output high.
    pub fn set_pins_digital_input(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbmdsel_set.set(mask);
        self.registers.pbden_set.write(PBDEN::PBNDEN.val(mask));
        self.registers.pbden_clr.write(PBDEN::PBPDEN.val(mask));
        self.registers.pb_set.set(mask);
        Ok(())
    }

    pub fn set_pins_analog(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbmdsel_clr.set(mask);
        self.registers.pbden_clr.write(PBDEN::PBNDEN.val(mask));
        self.registers.pbden_clr.write(PBDEN::PBPDEN.val(mask));
        Ok(())
    }

    pub fn set_pins_weak_pulldown(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbmdsel_set.set(mask);
        self.registers.pbden_set.write(PBDEN::PBPDEN.val(mask));
        self.registers.pbden_clr.write(PBDEN::PBNDEN.val(mask));
        self.registers.pb_clr.set(mask);
        Ok(())
    }

    pub fn write_pbden(&self, pbden: u32) {
        self.registers.pbden.set(pbden);
    }

    pub fn read_pbden(&self) -> u32 {
        self.registers.pbden.get()
    }

    pub fn enable_n_channel_drivers(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        let enabled = self.registers.pbden.read(PBDEN::PBNDEN);
        self.registers.pbden.modify(PBDEN::PBNDEN.val(enabled | mask));
        Ok(())
    }

    pub fn disable_n_channel_drivers(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        let enabled = self.registers.pbden.read(PBDEN::PBNDEN);
        self.registers.pbden.modify(PBDEN::PBNDEN.val(enabled & !mask));
        Ok(())
    }

    pub fn enable_p_channel_drivers(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        let enabled = self.registers.pbden.read(PBDEN::PBPDEN);
        self.registers.pbden.modify(PBDEN::PBPDEN.val(enabled | mask));
        Ok(())
    }

    pub fn disable_p_channel_drivers(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        let enabled = self.registers.pbden.read(PBDEN::PBPDEN);
        self.registers.pbden.modify(PBDEN::PBPDEN.val(enabled & !mask));
        Ok(())
    }

    pub fn write_pbdrv(&self, pbdrv: u32) {
        self.registers.pbdrv.set(pbdrv);
    }

    pub fn read_pbdrv(&self) -> u32 {
        self.registers.pbdrv.get()
    }

    pub fn set_pins_high_drive_strength(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbdrv_set.write(PBDRV::PBDRV.val(mask));
        Ok(())
    }

    pub fn set_pins_low_drive_strength(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbdrv_clr.write(PBDRV::PBDRV.val(mask));
        Ok(())
    }

    pub fn enable_pullup_resistors(&self) {
        self.registers.pbdrv_set.write(PBDRV::PBPUEN::SET);
    }

    pub fn disable_pullup_resistors(&self) {
        self.registers.pbdrv_clr.write(PBDRV::PBPUEN::SET);
    }

    pub fn select_low_power_port_mode(&self) {
        self.registers.pbdrv_set.write(PBDRV::PBLVMD::SET);
    }

    pub fn select_normal_power_port_mode(&self) {
        self.registers.pbdrv_clr.write(PBDRV::PBLVMD::SET);
    }

    pub fn select_slew_rate(&self, rate: SlewRate) {
        self.registers.pbdrv_clr.write(PBDRV::PBSLEW::SET);
        self.registers.pbdrv_set.write(match rate {
            SlewRate::Fastest => PBDRV::PBSLEW::Fastest,
            SlewRate::Faster => PBDRV::PBSLEW::Faster,
            SlewRate::Slower => PBDRV::PBSLEW::Slower,
            SlewRate::Slowest => PBDRV::PBSLEW::Slowest,
        });
    }

    pub fn enable_bias(&self) {
        self.registers.pbdrv_set.write(PBDRV::PBBIASEN::SET);
    }

    pub fn disable_bias(&self) {
        self.registers.pbdrv_clr.write(PBDRV::PBBIASEN::SET);
    }

    pub fn enable_drivers(&self) {
        self.registers.pbdrv_set.write(PBDRV::PBDRVEN::SET);
    }

    pub fn disable_drivers(&self) {
        self.registers.pbdrv_clr.write(PBDRV::PBDRVEN::SET);
    }

    pub fn enable_vddhd_tracking(&self) {
        self.registers.pbdrv_set.write(PBDRV::PBVTRKEN::SET);
    }

    pub fn disable_vddhd_tracking(&self) {
        self.registers.pbdrv_clr.write(PBDRV::PBVTRKEN::SET);
    }

    pub fn write_pbilimit(&self, pbilimit: u32) {
        self.registers.pbilimit.set(pbilimit);
    }

    pub fn read_pbilimit(&self) -> u32 {
        self.registers.pbilimit.get()
    }

    /// Current limiting is enabled on exactly the pins in `mask`.
    pub fn enable_pin_current_limit(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbilimit_clr.write(PBILIMIT::PBILEN::SET);
        self.registers.pbilimit_set.write(PBILIMIT::PBILEN.val(mask));
        Ok(())
    }

    pub fn disable_pin_current_limit(&self, mask: u32) -> Result<(), ErrorCode> {
        check_mask(mask)?;
        self.registers.pbilimit_clr.write(PBILIMIT::PBILEN.val(mask));
        Ok(())
    }

    pub fn select_nchannel_current_limit(&self, limit: u32) -> Result<(), ErrorCode> {
        bounds::fits("pbhd n-channel current limit", limit, 4)?;
        self.registers.pbilimit_clr.write(PBILIMIT::NILIMIT::SET);
        self.registers.pbilimit_set.write(PBILIMIT::NILIMIT.val(limit));
        Ok(())
    }

    pub fn select_pchannel_current_limit(&self, limit: u32) -> Result<(), ErrorCode> {
        bounds::fits("pbhd p-channel current limit", limit, 4)?;
        self.registers.pbilimit_clr.write(PBILIMIT::PILIMIT::SET);
        self.registers.pbilimit_set.write(PBILIMIT::PILIMIT.val(limit));
        Ok(())
    }

    pub fn write_pbfsel(&self, pbfsel: u32) {
        self.registers.pbfsel.set(pbfsel);
    }

    pub fn read_pbfsel(&self) -> u32 {
        self.registers.pbfsel.get()
    }

    /// Pin 5 has eight functions, the others four.
    pub fn select_pin_function(&self, pin: u32, function: u32) -> Result<(), ErrorCode> {
        let field = function_field(pin)?;
        bounds::at_most("pbhd pin function", function, field.mask)?;
        self.registers.pbfsel.modify(field.val(function));
        Ok(())
    }

    pub fn write_pbss(&self, pbss: u32) {
        self.registers.pbss.set(pbss);
    }

    pub fn read_pbss(&self) -> u32 {
        self.registers.pbss.get()
    }

    pub fn select_pin_safe_state(&self, pin: u32, state: SafeState) -> Result<(), ErrorCode> {
        let field = safe_state_field(pin)?;
        self.registers.pbss_clr.write(field.val(field.mask));
        self.registers.pbss_set.write(field.val(state as u32));
        Ok(())
    }

    pub fn enter_safe_state(&self) {
        self.registers.pbss_set.write(PBSS::SSMDEN::SET);
    }

    pub fn exit_safe_state(&self) {
        self.registers.pbss_clr.write(PBSS::SSMDEN::SET);
    }

    pub fn is_port_in_safe_state(&self) -> bool {
        self.registers.pbss.is_set(PBSS::SSMDEN)
    }

    pub fn enable_kill_signal_deglitch(&self) {
        self.registers.pbss_clr.write(PBSS::PBSSSMD::SET);
    }

    pub fn disable_kill_signal_deglitch(&self) {
        self.registers.pbss_set.write(PBSS::PBSSSMD::SET);
    }

    pub fn write_pblock(&self, pblock: u32) {
        self.registers.pblock.set(pblock);
    }

    pub fn read_pblock(&self) -> u32 {
        self.registers.pblock.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const PB: usize = 0x00;
    const PB_SET: usize = 0x04;
    const PB_CLR: usize = 0x08;
    const PB_MSK: usize = 0x0C;
    const PBPIN: usize = 0x10;
    const PBMDSEL_CLR: usize = 0x28;
    const PBDEN_SET: usize = 0x34;
    const PBDEN_CLR: usize = 0x38;
    const PBILIMIT_SET: usize = 0x54;
    const PBILIMIT_CLR: usize = 0x58;
    const PBSS_SET: usize = 0x84;
    const PBSS_CLR: usize = 0x88;

    #[test]
    fn pin_output() {
        let fake = FakeRegs::<PbhdRegisters>::new();
        let pbhd = Pbhd::new(fake.regs);

        pbhd.write_pins_high(0b10_0001).unwrap();
        assert_eq!(fake.word(PB_SET), 0b10_0001);
        pbhd.write_pins_low(0b100).unwrap();
        assert_eq!(fake.word(PB_CLR), 0b100);
        assert_eq!(pbhd.write_pins_high(0x40), Err(ErrorCode::INVAL));

        pbhd.write_pins_masked(0b01, 0b11).unwrap();
        assert_eq!(fake.word(PB_MSK), (0b11 << 16) | 0b01);

        fake.poke(PB, 0b11_0000);
        pbhd.toggle_pins(0b11_0001).unwrap();
        assert_eq!(fake.word(PB_MSK), (0b11_0001 << 16) | 0xFFCF);
    }

    #[test]
    fn pin_input() {
        let fake = FakeRegs::<PbhdRegisters>::new();
        let pbhd = Pbhd::new(fake.regs);
        fake.poke(PBPIN, 0b10_0100);
        assert_eq!(pbhd.read_pins(), 0b10_0100);
        assert_eq!(pbhd.read_pin(2), Ok(true));
        assert_eq!(pbhd.read_pin(3), Ok(false));
        assert_eq!(pbhd.read_pin(6), Err(ErrorCode::INVAL));
    }

    #[test]
    fn pin_modes() {
        let fake = FakeRegs::<PbhdRegisters>::new();
        let pbhd = Pbhd::new(fake.regs);

        pbhd.set_pins_weak_pulldown(0b11).unwrap();
        assert_eq!(fake.word(PBDEN_SET), 0b11 << 16);
        assert_eq!(fake.word(PBDEN_CLR), 0b11);
        assert_eq!(fake.word(PB_CLR), 0b11);

        pbhd.set_pins_analog(0b100).unwrap();
        assert_eq!(fake.word(PBMDSEL_CLR), 0b100);
        assert_eq!(fake.word(PBDEN_CLR), 0b100 << 16);

        pbhd.enable_n_channel_drivers(0b0101).unwrap();
        pbhd.enable_n_channel_drivers(0b1000).unwrap();
        pbhd.disable_n_channel_drivers(0b0001).unwrap();
        pbhd.enable_p_channel_drivers(0b10).unwrap();
        assert_eq!(pbhd.read_pbden(), (0b10 << 16) | 0b1100);
    }

    #[test]
    fn current_limits() {
        let fake = FakeRegs::<PbhdRegisters>::new();
        let pbhd = Pbhd::new(fake.regs);

        pbhd.enable_pin_current_limit(0b1010).unwrap();
        assert_eq!(fake.word(PBILIMIT_CLR), 0x3F);
        assert_eq!(fake.word(PBILIMIT_SET), 0b1010);

        pbhd.select_pchannel_current_limit(9).unwrap();
        assert_eq!(fake.word(PBILIMIT_CLR), 0xF << 20);
        assert_eq!(fake.word(PBILIMIT_SET), 9 << 20);
        assert_eq!(pbhd.select_nchannel_current_limit(16), Err(ErrorCode::INVAL));
    }

    #[test]
    fn functions_and_safe_state() {
        let fake = FakeRegs::<PbhdRegisters>::new();
        let pbhd = Pbhd::new(fake.regs);

        pbhd.select_pin_function(5, 4).unwrap();
        pbhd.select_pin_function(1, 3).unwrap();
        assert_eq!(pbhd.read_pbfsel(), (4 << 10) | (3 << 2));
        assert_eq!(pbhd.select_pin_function(0, 4), Err(ErrorCode::INVAL));
        assert_eq!(pbhd.select_pin_function(6, 0), Err(ErrorCode::INVAL));

        pbhd.select_pin_safe_state(3, SafeState::Low).unwrap();
        assert_eq!(fake.word(PBSS_CLR), 0b11 << 6);
        assert_eq!(fake.word(PBSS_SET), 2 << 6);

        pbhd.enable_kill_signal_deglitch();
        assert_eq!(fake.word(PBSS_CLR), 1 << 17);
        pbhd.enter_safe_state();
        assert_eq!(fake.word(PBSS_SET), 1 << 16);
    }
}
