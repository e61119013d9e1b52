// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Programmable counter array (PCA_A) and its capture/compare channels
//! (PCACH_A)
//!
//! A PCA is one 16-bit counter shared by two channel blocks. The counter
//! block carries the pending flags for both channels; each channel block
//! carries its own mode, enables and capture registers.

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, FieldValue, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

/// Number of capture/compare channels attached to one PCA.
pub const NUM_CHANNELS: usize = 2;

register_structs! {
    /// PCA counter/timer
    pub PcaRegisters {
        (0x00 => mode: ReadWrite<u32, MODE::Register>),
        (0x04 => _reserved0),
        (0x10 => control: ReadWrite<u32, CONTROL::Register>),
        (0x14 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x18 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x1C => _reserved1),
        (0x20 => status: ReadWrite<u32, STATUS::Register>),
        (0x24 => status_set: WriteOnly<u32, STATUS::Register>),
        (0x28 => status_clr: WriteOnly<u32, STATUS::Register>),
        (0x2C => _reserved2),
        (0x30 => counter: ReadWrite<u32, COUNTER::Register>),
        (0x34 => _reserved3),
        (0x40 => limit: ReadWrite<u32, LIMIT::Register>),
        (0x44 => @END),
    },

    /// PCA capture/compare channel
    pub PcaChannelRegisters {
        (0x00 => mode: ReadWrite<u32, CHMODE::Register>),
        (0x04 => _reserved0),
        (0x10 => control: ReadWrite<u32, CHCONTROL::Register>),
        (0x14 => control_set: WriteOnly<u32, CHCONTROL::Register>),
        (0x18 => control_clr: WriteOnly<u32, CHCONTROL::Register>),
        (0x1C => _reserved1),
        /// Capture/compare value
        (0x20 => ccapv: ReadWrite<u32, CCAPV::Register>),
        (0x24 => _reserved2),
        /// Capture/compare update value
        (0x30 => ccapvupd: ReadWrite<u32, CCAPV::Register>),
        (0x34 => @END),
    }
}

register_bitfields![u32,
    MODE [
        CLKDIV OFFSET(0) NUMBITS(10) [],
        CLKSEL OFFSET(10) NUMBITS(3) [
            Apb = 0,
            Timer0 = 1,
            HighToLowEci = 2,
            ExtOsc = 3,
            Eci = 4
        ]
    ],
    CONTROL [
        OVFIEN OFFSET(0) NUMBITS(1) [],
        DBGMD OFFSET(6) NUMBITS(1) [
            Halt = 0,
            Run = 1
        ],
        DIVST OFFSET(21) NUMBITS(1) [],
        DIV OFFSET(22) NUMBITS(10) []
    ],
    STATUS [
        C0CCI OFFSET(0) NUMBITS(1) [],
        C1CCI OFFSET(1) NUMBITS(1) [],
        RUN OFFSET(6) NUMBITS(1) [],
        OVFI OFFSET(7) NUMBITS(1) [],
        C0IOVFI OFFSET(10) NUMBITS(1) [],
        C1IOVFI OFFSET(11) NUMBITS(1) []
    ],
    COUNTER [
        COUNTER OFFSET(0) NUMBITS(16) []
    ],
    LIMIT [
        LIMIT OFFSET(0) NUMBITS(16) []
    ],
    CHMODE [
        COSEL OFFSET(0) NUMBITS(2) [
            Toggle = 0,
            Set = 1,
            Clear = 2,
            NoChange = 3
        ],
        /// N-bit PWM width
        PWMMD OFFSET(2) NUMBITS(4) [],
        CMD OFFSET(8) NUMBITS(3) [
            EdgePwm = 0,
            CenterPwm = 1,
            HighFrequencySquareWave = 2,
            TimerCapture = 3,
            NBitPwm = 4
        ]
    ],
    CHCONTROL [
        COUTST OFFSET(0) NUMBITS(1) [],
        CPCAPEN OFFSET(1) NUMBITS(1) [],
        CNCAPEN OFFSET(2) NUMBITS(1) [],
        CUPDCF OFFSET(3) NUMBITS(1) [],
        CCIEN OFFSET(8) NUMBITS(1) [],
        CIOVFIEN OFFSET(11) NUMBITS(1) []
    ],
    CCAPV [
        VALUE OFFSET(0) NUMBITS(18) []
    ]
];

/// Counter clock input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockSource {
    Apb,
    Timer0Overflow,
    EciHighToLow,
    ExternalOscillator,
    Eci,
}

/// Channel output action on a compare match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Toggle,
    Set,
    Clear,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatingMode {
    EdgeAlignedPwm,
    CenterAlignedPwm,
    HighFrequencySquareWave,
    TimerCapture,
    NBitEdgeAlignedPwm,
}

pub struct Pca {
    registers: StaticRef<PcaRegisters>,
}

impl Pca {
    pub const fn new(base: StaticRef<PcaRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, mode: u32, control: u32, status: u32, counter: u32, limit: u32) {
        self.registers.mode.set(mode);
        self.registers.control.set(control);
        self.registers.status.set(status);
        self.registers.counter.set(counter);
        self.registers.limit.set(limit);
    }

    pub fn write_mode(&self, mode: u32) {
        self.registers.mode.set(mode);
    }

    pub fn read_mode(&self) -> u32 {
        self.registers.mode.get()
    }

    /// Input clock prescaler, `0..=1023`.
    pub fn select_input_clock_divisor(&self, divisor: u32) -> Result<(), ErrorCode> {
        bounds::fits("pca input clock divisor", divisor, 10)?;
        self.registers.mode.modify(MODE::CLKDIV.val(divisor));
        Ok(())
    }

    pub fn select_input_clock(&self, source: ClockSource) {
        self.registers.mode.modify(match source {
            ClockSource::Apb => MODE::CLKSEL::Apb,
            ClockSource::Timer0Overflow => MODE::CLKSEL::Timer0,
            ClockSource::EciHighToLow => MODE::CLKSEL::HighToLowEci,
            ClockSource::ExternalOscillator => MODE::CLKSEL::ExtOsc,
            ClockSource::Eci => MODE::CLKSEL::Eci,
        });
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn enable_counter_overflow_interrupt(&self) {
        self.registers.control_set.write(CONTROL::OVFIEN::SET);
    }

    pub fn disable_counter_overflow_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::OVFIEN::SET);
    }

    pub fn is_counter_overflow_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::OVFIEN)
    }

    /// Halt the counter while the core is halted by a debugger.
    pub fn enable_stall_in_debug_mode(&self) {
        self.registers.control_clr.write(CONTROL::DBGMD::SET);
    }

    pub fn disable_stall_in_debug_mode(&self) {
        self.registers.control_set.write(CONTROL::DBGMD::Run);
    }

    pub fn is_clock_divider_in_phase_2(&self) -> bool {
        self.registers.control.is_set(CONTROL::DIVST)
    }

    pub fn select_clock_divider_state_phase_1(&self) {
        self.registers.control_clr.write(CONTROL::DIVST::SET);
    }

    pub fn select_clock_divider_state_phase_2(&self) {
        self.registers.control_set.write(CONTROL::DIVST::SET);
    }

    pub fn clock_divider(&self) -> u32 {
        self.registers.control.read(CONTROL::DIV)
    }

    pub fn set_clock_divider(&self, divider: u32) -> Result<(), ErrorCode> {
        bounds::fits("pca clock divider", divider, 10)?;
        self.registers.control.modify(CONTROL::DIV.val(divider));
        Ok(())
    }

    pub fn write_status(&self, status: u32) {
        self.registers.status.set(status);
    }

    pub fn read_status(&self) -> u32 {
        self.registers.status.get()
    }

    pub fn start_counter_timer(&self) {
        self.registers.status_set.write(STATUS::RUN::SET);
    }

    pub fn stop_counter_timer(&self) {
        self.registers.status_clr.write(STATUS::RUN::SET);
    }

    pub fn is_counter_timer_overflow_interrupt_pending(&self) -> bool {
        self.registers.status.is_set(STATUS::OVFI)
    }

    pub fn set_counter_timer_overflow_interrupt(&self) {
        self.registers.status_set.write(STATUS::OVFI::SET);
    }

    pub fn clear_counter_timer_overflow_interrupt(&self) {
        self.registers.status_clr.write(STATUS::OVFI::SET);
    }

    fn capture_compare_flag(channel: usize) -> Result<FieldValue<u32, STATUS::Register>, ErrorCode> {
        match channel {
            0 => Ok(STATUS::C0CCI::SET),
            1 => Ok(STATUS::C1CCI::SET),
            _ => Err(ErrorCode::INVAL),
        }
    }

    fn intermediate_overflow_flag(
        channel: usize,
    ) -> Result<FieldValue<u32, STATUS::Register>, ErrorCode> {
        match channel {
            0 => Ok(STATUS::C0IOVFI::SET),
            1 => Ok(STATUS::C1IOVFI::SET),
            _ => Err(ErrorCode::INVAL),
        }
    }

    pub fn is_channel_capture_compare_interrupt_pending(
        &self,
        channel: usize,
    ) -> Result<bool, ErrorCode> {
        let flag = Self::capture_compare_flag(channel)?;
        Ok(self.registers.status.matches_all(flag))
    }

    pub fn set_channel_capture_compare_interrupt(&self, channel: usize) -> Result<(), ErrorCode> {
        self.registers
            .status_set
            .write(Self::capture_compare_flag(channel)?);
        Ok(())
    }

    pub fn clear_channel_capture_compare_interrupt(&self, channel: usize) -> Result<(), ErrorCode> {
        self.registers
            .status_clr
            .write(Self::capture_compare_flag(channel)?);
        Ok(())
    }

    pub fn is_channel_intermediate_overflow_interrupt_pending(
        &self,
        channel: usize,
    ) -> Result<bool, ErrorCode> {
        let flag = Self::intermediate_overflow_flag(channel)?;
        Ok(self.registers.status.matches_all(flag))
    }

    pub fn set_channel_intermediate_overflow_interrupt(
        &self,
        channel: usize,
    ) -> Result<(), ErrorCode> {
        self.registers
            .status_set
            .write(Self::intermediate_overflow_flag(channel)?);
        Ok(())
    }

    pub fn clear_channel_intermediate_overflow_interrupt(
        &self,
        channel: usize,
    ) -> Result<(), ErrorCode> {
        self.registers
            .status_clr
            .write(Self::intermediate_overflow_flag(channel)?);
        Ok(())
    }

    pub fn write_counter(&self, counter: u16) {
        self.registers.counter.write(COUNTER::COUNTER.val(counter as u32));
    }

    pub fn read_counter(&self) -> u16 {
        self.registers.counter.read(COUNTER::COUNTER) as u16
    }

    pub fn write_limit(&self, limit: u16) {
        self.registers.limit.write(LIMIT::LIMIT.val(limit as u32));
    }

    pub fn read_limit(&self) -> u16 {
        self.registers.limit.read(LIMIT::LIMIT) as u16
    }
}

pub struct PcaChannel {
    registers: StaticRef<PcaChannelRegisters>,
}

impl PcaChannel {
    pub const fn new(base: StaticRef<PcaChannelRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, mode: u32, control: u32, ccapv: u32, ccapvupd: u32) {
        self.registers.mode.set(mode);
        self.registers.control.set(control);
        self.registers.ccapv.set(ccapv);
        self.registers.ccapvupd.set(ccapvupd);
    }

    pub fn write_mode(&self, mode: u32) {
        self.registers.mode.set(mode);
    }

    pub fn read_mode(&self) -> u32 {
        self.registers.mode.get()
    }

    pub fn select_output_mode(&self, mode: OutputMode) {
        self.registers.mode.modify(match mode {
            OutputMode::Toggle => CHMODE::COSEL::Toggle,
            OutputMode::Set => CHMODE::COSEL::Set,
            OutputMode::Clear => CHMODE::COSEL::Clear,
            OutputMode::None => CHMODE::COSEL::NoChange,
        });
    }

    /// Counter width used in N-bit edge-aligned PWM mode.
    pub fn set_width_for_n_bit_pwm_mode(&self, nbits: u32) -> Result<(), ErrorCode> {
        bounds::fits("pca channel pwm width", nbits, 4)?;
        self.registers.mode.modify(CHMODE::PWMMD.val(nbits));
        Ok(())
    }

    pub fn select_operating_mode(&self, mode: OperatingMode) {
        self.registers.mode.modify(match mode {
            OperatingMode::EdgeAlignedPwm => CHMODE::CMD::EdgePwm,
            OperatingMode::CenterAlignedPwm => CHMODE::CMD::CenterPwm,
            OperatingMode::HighFrequencySquareWave => CHMODE::CMD::HighFrequencySquareWave,
            OperatingMode::TimerCapture => CHMODE::CMD::TimerCapture,
            OperatingMode::NBitEdgeAlignedPwm => CHMODE::CMD::NBitPwm,
        });
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn clear_output_state(&self) {
        self.registers.control_clr.write(CHCONTROL::COUTST::SET);
    }

    pub fn set_output_state(&self) {
        self.registers.control_set.write(CHCONTROL::COUTST::SET);
    }

    pub fn output_state(&self) -> bool {
        self.registers.control.is_set(CHCONTROL::COUTST)
    }

    pub fn enable_positive_edge_input_capture(&self) {
        self.registers.control_set.write(CHCONTROL::CPCAPEN::SET);
    }

    pub fn disable_positive_edge_input_capture(&self) {
        self.registers.control_clr.write(CHCONTROL::CPCAPEN::SET);
    }

    pub fn enable_negative_edge_input_capture(&self) {
        self.registers.control_set.write(CHCONTROL::CNCAPEN::SET);
    }

    pub fn disable_negative_edge_input_capture(&self) {
        self.registers.control_clr.write(CHCONTROL::CNCAPEN::SET);
    }

    /// A CCAPVUPD write is still waiting to be latched into CCAPV.
    pub fn is_register_update_busy(&self) -> bool {
        self.registers.control.is_set(CHCONTROL::CUPDCF)
    }

    pub fn enable_capture_compare_interrupt(&self) {
        self.registers.control_set.write(CHCONTROL::CCIEN::SET);
    }

    pub fn disable_capture_compare_interrupt(&self) {
        self.registers.control_clr.write(CHCONTROL::CCIEN::SET);
    }

    pub fn is_capture_compare_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CHCONTROL::CCIEN)
    }

    pub fn enable_intermediate_overflow_interrupt(&self) {
        self.registers.control_set.write(CHCONTROL::CIOVFIEN::SET);
    }

    pub fn disable_intermediate_overflow_interrupt(&self) {
        self.registers.control_clr.write(CHCONTROL::CIOVFIEN::SET);
    }

    pub fn is_intermediate_overflow_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CHCONTROL::CIOVFIEN)
    }

    pub fn write_ccapv(&self, ccapv: u32) -> Result<(), ErrorCode> {
        bounds::fits("pca channel ccapv", ccapv, 18)?;
        self.registers.ccapv.write(CCAPV::VALUE.val(ccapv));
        Ok(())
    }

    pub fn read_ccapv(&self) -> u32 {
        self.registers.ccapv.read(CCAPV::VALUE)
    }

    pub fn write_ccapvupd(&self, ccapvupd: u32) -> Result<(), ErrorCode> {
        bounds::fits("pca channel ccapvupd", ccapvupd, 18)?;
        self.registers.ccapvupd.write(CCAPV::VALUE.val(ccapvupd));
        Ok(())
    }

    pub fn read_ccapvupd(&self) -> u32 {
        self.registers.ccapvupd.read(CCAPV::VALUE)
    }
}
