// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Phase-locked loop (PLL_A)
//!
//! The PLL multiplies a reference clock by `N / M`. The hardware stores both
//! terms minus one, so [`Pll::set_numerator`] and [`Pll::set_denominator`]
//! take the ratio as written on paper and subtract one before storing it.
//! The getters add the one back.
//!
//! The DCO output stays off until an output mode is selected. A usual bring-up
//! picks a reference, programs the ratio, then enters phase-lock mode and
//! waits for the lock flag.
//!
//! # Usage
//!
//! ```rust,ignore
//! // 20 MHz external crystal, 80 MHz output
//! pll.select_reference_clock_source(ReferenceClock::ExtOsc0);
//! pll.set_output_frequency_range(OutputFrequencyRange::Range3);
//! pll.set_numerator(4)?;
//! pll.set_denominator(1)?;
//! pll.select_dco_phase_lock_mode();
//! while !pll.is_locked() {}
//! ```

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{register_bitfields, register_structs, ReadWrite, WriteOnly};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    /// Phase-locked loop
    pub PllRegisters {
        /// Divider terms
        (0x00 => divider: ReadWrite<u32, DIVIDER::Register>),
        (0x04 => _reserved0),
        /// Mode, reference and interrupt control
        (0x10 => control: ReadWrite<u32, CONTROL::Register>),
        (0x14 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x18 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x1C => _reserved1),
        /// Spectrum spreading parameters
        (0x20 => sspr: ReadWrite<u32, SSPR::Register>),
        (0x24 => _reserved2),
        /// DCO calibration
        (0x30 => calconfig: ReadWrite<u32, CALCONFIG::Register>),
        (0x34 => @END),
    }
}

register_bitfields![u32,
    DIVIDER [
        /// Reference divider, stored minus one
        M OFFSET(0) NUMBITS(12) [],
        /// Multiplier, stored minus one
        N OFFSET(16) NUMBITS(12) []
    ],
    CONTROL [
        /// Low-limit saturation flag
        LLMTF OFFSET(0) NUMBITS(1) [],
        /// High-limit saturation flag
        HLMTF OFFSET(1) NUMBITS(1) [],
        /// Locked flag
        LCKI OFFSET(2) NUMBITS(1) [],
        LMTIEN OFFSET(9) NUMBITS(1) [],
        LCKIEN OFFSET(10) NUMBITS(1) [],
        /// Lock interrupt polarity
        LCKPOL OFFSET(11) NUMBITS(1) [
            ActiveLow = 0,
            ActiveHigh = 1
        ],
        REFSEL OFFSET(16) NUMBITS(3) [
            Rtc0Osc = 0,
            LpOsc0Div = 1,
            ExtOsc0 = 2,
            UsbOsc0 = 3,
            LpOsc0 = 4
        ],
        LOCKTH OFFSET(20) NUMBITS(2) [],
        STALL OFFSET(26) NUMBITS(1) [],
        DITHEN OFFSET(28) NUMBITS(1) [],
        EDGSEL OFFSET(29) NUMBITS(1) [
            FallingEdge = 0,
            RisingEdge = 1
        ],
        OUTMD OFFSET(30) NUMBITS(2) [
            Off = 0,
            Dco = 1,
            Fll = 2,
            Pll = 3
        ]
    ],
    SSPR [
        SSAMP OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Setting1 = 1,
            Setting2 = 2,
            Setting3 = 3,
            Setting4 = 4,
            Setting5 = 5
        ],
        /// Update interval, 4 * TDCO * (SSUINV + 1)
        SSUINV OFFSET(8) NUMBITS(5) []
    ],
    CALCONFIG [
        DITHER OFFSET(0) NUMBITS(4) [],
        CAL OFFSET(4) NUMBITS(12) [],
        RANGE OFFSET(16) NUMBITS(3) [
            Range0 = 0,
            Range1 = 1,
            Range2 = 2,
            Range3 = 3,
            Range4 = 4
        ]
    ]
];

/// Reference clock feeding the PLL
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceClock {
    Rtc0Osc,
    LpOsc0Div,
    ExtOsc0,
    UsbOsc0,
    LpOsc0,
}

/// Spread-spectrum amplitude, relative to the DCO period
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpreadingAmplitude {
    Disabled,
    /// +/- 0.1%
    Setting1,
    /// +/- 0.2%
    Setting2,
    /// +/- 0.4%
    Setting3,
    /// +/- 0.8%
    Setting4,
    /// +/- 1.6%
    Setting5,
}

/// DCO output frequency band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFrequencyRange {
    /// 23 to 37 MHz
    Range0,
    /// 33 to 54 MHz
    Range1,
    /// 45 to 71 MHz
    Range2,
    /// 53 to 82 MHz
    Range3,
    /// 73 MHz to maximum SYSCLK
    Range4,
}

/// Largest value accepted for either divider term.
pub const MAX_DIVIDER_TERM: u32 = 1 << 12;

pub struct Pll {
    registers: StaticRef<PllRegisters>,
}

impl Pll {
    pub const fn new(base: StaticRef<PllRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, divider: u32, control: u32, sspr: u32, calconfig: u32) {
        self.registers.divider.set(divider);
        self.registers.control.set(control);
        self.registers.sspr.set(sspr);
        self.registers.calconfig.set(calconfig);
    }

    pub fn write_divider(&self, divider: u32) {
        self.registers.divider.set(divider);
    }

    pub fn read_divider(&self) -> u32 {
        self.registers.divider.get()
    }

    /// Set the multiplier `N` of the output ratio, `1..=4096`.
    pub fn set_numerator(&self, n: u32) -> Result<(), ErrorCode> {
        bounds::within("pll numerator", n, 1, MAX_DIVIDER_TERM)?;
        self.registers.divider.modify(DIVIDER::N.val(n - 1));
        Ok(())
    }

    pub fn numerator(&self) -> u32 {
        self.registers.divider.read(DIVIDER::N) + 1
    }

    /// Set the reference divider `M` of the output ratio, `1..=4096`.
    pub fn set_denominator(&self, m: u32) -> Result<(), ErrorCode> {
        bounds::within("pll denominator", m, 1, MAX_DIVIDER_TERM)?;
        self.registers.divider.modify(DIVIDER::M.val(m - 1));
        Ok(())
    }

    pub fn denominator(&self) -> u32 {
        self.registers.divider.read(DIVIDER::M) + 1
    }

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn select_dco_free_running_mode(&self) {
        self.registers.control_clr.write(CONTROL::OUTMD::SET);
        self.registers.control_set.write(CONTROL::OUTMD::Dco);
    }

    pub fn select_dco_frequency_lock_mode(&self) {
        self.registers.control_clr.write(CONTROL::OUTMD::SET);
        self.registers.control_set.write(CONTROL::OUTMD::Fll);
    }

    /// Phase-lock mode sets every OUTMD bit, so no clear is needed first.
    pub fn select_dco_phase_lock_mode(&self) {
        self.registers.control_set.write(CONTROL::OUTMD::Pll);
    }

    pub fn select_disable_dco_output(&self) {
        self.registers.control_clr.write(CONTROL::OUTMD::SET);
    }

    pub fn lock_on_rising_edge(&self) {
        self.registers.control_set.write(CONTROL::EDGSEL::SET);
    }

    pub fn lock_on_falling_edge(&self) {
        self.registers.control_clr.write(CONTROL::EDGSEL::SET);
    }

    pub fn enable_dither(&self) {
        self.registers.control_set.write(CONTROL::DITHEN::SET);
    }

    pub fn disable_dither(&self) {
        self.registers.control_clr.write(CONTROL::DITHEN::SET);
    }

    pub fn enable_dco_update_stall(&self) {
        self.registers.control_set.write(CONTROL::STALL::SET);
    }

    pub fn disable_dco_update_stall(&self) {
        self.registers.control_clr.write(CONTROL::STALL::SET);
    }

    /// Number of matching reference edges required to report lock, `0..=3`.
    pub fn set_lock_threshold_value(&self, threshold: u32) -> Result<(), ErrorCode> {
        bounds::fits("pll lock threshold", threshold, 2)?;
        self.registers.control.modify(CONTROL::LOCKTH.val(threshold));
        Ok(())
    }

    pub fn lock_threshold_value(&self) -> u32 {
        self.registers.control.read(CONTROL::LOCKTH)
    }

    pub fn select_reference_clock_source(&self, source: ReferenceClock) {
        // RTC0OSC is the all-zero encoding.
        self.registers.control_clr.write(CONTROL::REFSEL::SET);
        match source {
            ReferenceClock::Rtc0Osc => {}
            ReferenceClock::LpOsc0Div => self.registers.control_set.write(CONTROL::REFSEL::LpOsc0Div),
            ReferenceClock::ExtOsc0 => self.registers.control_set.write(CONTROL::REFSEL::ExtOsc0),
            ReferenceClock::UsbOsc0 => self.registers.control_set.write(CONTROL::REFSEL::UsbOsc0),
            ReferenceClock::LpOsc0 => self.registers.control_set.write(CONTROL::REFSEL::LpOsc0),
        }
    }

    pub fn reference_clock_source(&self) -> ReferenceClock {
        match self.registers.control.read_as_enum(CONTROL::REFSEL) {
            Some(CONTROL::REFSEL::Value::Rtc0Osc) => ReferenceClock::Rtc0Osc,
            Some(CONTROL::REFSEL::Value::LpOsc0Div) => ReferenceClock::LpOsc0Div,
            Some(CONTROL::REFSEL::Value::ExtOsc0) => ReferenceClock::ExtOsc0,
            Some(CONTROL::REFSEL::Value::UsbOsc0) => ReferenceClock::UsbOsc0,
            Some(CONTROL::REFSEL::Value::LpOsc0) => ReferenceClock::LpOsc0,
            // Reserved encodings behave as the RTC oscillator.
            None => ReferenceClock::Rtc0Osc,
        }
    }

    /// Raise the locked interrupt while the PLL is locked.
    pub fn select_locked_interrupt_on_locked_mode(&self) {
        self.registers.control_set.write(CONTROL::LCKPOL::ActiveHigh);
    }

    /// Raise the locked interrupt while the PLL is unlocked.
    pub fn select_locked_interrupt_on_unlocked_mode(&self) {
        self.registers.control_clr.write(CONTROL::LCKPOL::SET);
    }

    pub fn enable_locked_interrupt(&self) {
        self.registers.control_set.write(CONTROL::LCKIEN::SET);
    }

    pub fn disable_locked_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::LCKIEN::SET);
    }

    pub fn is_locked_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::LCKIEN)
    }

    pub fn enable_saturation_interrupt(&self) {
        self.registers.control_set.write(CONTROL::LMTIEN::SET);
    }

    pub fn disable_saturation_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::LMTIEN::SET);
    }

    pub fn is_saturation_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::LMTIEN)
    }

    pub fn is_locked(&self) -> bool {
        self.registers.control.is_set(CONTROL::LCKI)
    }

    /// The locked interrupt is pending when the lock flag matches the
    /// selected polarity.
    pub fn is_locked_interrupt_pending(&self) -> bool {
        let control = self.registers.control.extract();
        control.is_set(CONTROL::LCKI) == control.is_set(CONTROL::LCKPOL)
    }

    /// Saturated high: the output range should be decreased.
    pub fn is_saturation_high_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::HLMTF)
    }

    /// Saturated low: the output range should be increased.
    pub fn is_saturation_low_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::LLMTF)
    }

    pub fn write_sspr(&self, sspr: u32) {
        self.registers.sspr.set(sspr);
    }

    pub fn read_sspr(&self) -> u32 {
        self.registers.sspr.get()
    }

    pub fn set_spectrum_spreading_update_interval(&self, interval: u32) -> Result<(), ErrorCode> {
        bounds::fits("pll spreading interval", interval, 5)?;
        self.registers.sspr.modify(SSPR::SSUINV.val(interval));
        Ok(())
    }

    pub fn set_spectrum_spreading_amplitude(&self, amplitude: SpreadingAmplitude) {
        self.registers.sspr.modify(match amplitude {
            SpreadingAmplitude::Disabled => SSPR::SSAMP::Disabled,
            SpreadingAmplitude::Setting1 => SSPR::SSAMP::Setting1,
            SpreadingAmplitude::Setting2 => SSPR::SSAMP::Setting2,
            SpreadingAmplitude::Setting3 => SSPR::SSAMP::Setting3,
            SpreadingAmplitude::Setting4 => SSPR::SSAMP::Setting4,
            SpreadingAmplitude::Setting5 => SSPR::SSAMP::Setting5,
        });
    }

    pub fn write_calconfig(&self, calconfig: u32) {
        self.registers.calconfig.set(calconfig);
    }

    pub fn read_calconfig(&self) -> u32 {
        self.registers.calconfig.get()
    }

    pub fn set_output_frequency_range(&self, range: OutputFrequencyRange) {
        self.registers.calconfig.modify(match range {
            OutputFrequencyRange::Range0 => CALCONFIG::RANGE::Range0,
            OutputFrequencyRange::Range1 => CALCONFIG::RANGE::Range1,
            OutputFrequencyRange::Range2 => CALCONFIG::RANGE::Range2,
            OutputFrequencyRange::Range3 => CALCONFIG::RANGE::Range3,
            OutputFrequencyRange::Range4 => CALCONFIG::RANGE::Range4,
        });
    }

    pub fn set_frequency_adjuster_value(&self, adjust: u32) -> Result<(), ErrorCode> {
        bounds::fits("pll frequency adjuster", adjust, 12)?;
        self.registers.calconfig.modify(CALCONFIG::CAL.val(adjust));
        Ok(())
    }

    pub fn frequency_adjuster_value(&self) -> u32 {
        self.registers.calconfig.read(CALCONFIG::CAL)
    }

    pub fn set_dithering_value(&self, dither: u32) -> Result<(), ErrorCode> {
        bounds::fits("pll dithering value", dither, 4)?;
        self.registers.calconfig.modify(CALCONFIG::DITHER.val(dither));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const DIVIDER_OFF: usize = 0x00;
    const CONTROL_OFF: usize = 0x10;
    const CONTROL_SET: usize = 0x14;
    const CONTROL_CLR: usize = 0x18;
    const CALCONFIG_OFF: usize = 0x30;

    fn pll() -> (FakeRegs<PllRegisters>, Pll) {
        let fake = FakeRegs::new();
        let pll = Pll::new(fake.regs);
        (fake, pll)
    }

    #[test]
    fn divider_terms_are_stored_minus_one() {
        let (fake, pll) = pll();
        pll.set_numerator(4).unwrap();
        pll.set_denominator(1).unwrap();
        assert_eq!(fake.word(DIVIDER_OFF), 3 << 16);
        assert_eq!(pll.numerator(), 4);
        assert_eq!(pll.denominator(), 1);

        pll.set_denominator(4096).unwrap();
        assert_eq!(fake.word(DIVIDER_OFF), (3 << 16) | 0xFFF);
    }

    #[test]
    fn divider_terms_out_of_range_leave_hardware_untouched() {
        let (fake, pll) = pll();
        fake.poke(DIVIDER_OFF, 0x0005_0007);
        assert_eq!(pll.set_numerator(0), Err(ErrorCode::INVAL));
        assert_eq!(pll.set_numerator(4097), Err(ErrorCode::INVAL));
        assert_eq!(pll.set_denominator(0), Err(ErrorCode::INVAL));
        assert_eq!(fake.word(DIVIDER_OFF), 0x0005_0007);
    }

    #[test]
    fn mode_selects_clear_field_then_set() {
        let (fake, pll) = pll();
        pll.select_dco_frequency_lock_mode();
        assert_eq!(fake.word(CONTROL_CLR), 0b11 << 30);
        assert_eq!(fake.word(CONTROL_SET), 0b10 << 30);

        pll.select_reference_clock_source(ReferenceClock::UsbOsc0);
        assert_eq!(fake.word(CONTROL_CLR), 0b111 << 16);
        assert_eq!(fake.word(CONTROL_SET), 3 << 16);
    }

    #[test]
    fn locked_interrupt_pending_follows_polarity() {
        let (fake, pll) = pll();
        // unlocked, active low
        fake.poke(CONTROL_OFF, 0);
        assert!(pll.is_locked_interrupt_pending());
        // locked, active low
        fake.poke(CONTROL_OFF, 1 << 2);
        assert!(pll.is_locked());
        assert!(!pll.is_locked_interrupt_pending());
        // locked, active high
        fake.poke(CONTROL_OFF, (1 << 2) | (1 << 11));
        assert!(pll.is_locked_interrupt_pending());
    }

    #[test]
    fn calibration_fields_are_written_in_place() {
        let (fake, pll) = pll();
        pll.set_output_frequency_range(OutputFrequencyRange::Range3);
        pll.set_dithering_value(0x9).unwrap();
        pll.set_frequency_adjuster_value(0xABC).unwrap();
        assert_eq!(fake.word(CALCONFIG_OFF), (3 << 16) | (0xABC << 4) | 0x9);
        assert_eq!(pll.frequency_adjuster_value(), 0xABC);
        assert_eq!(pll.set_dithering_value(16), Err(ErrorCode::INVAL));
        assert_eq!(pll.set_frequency_adjuster_value(0x1000), Err(ErrorCode::INVAL));
    }

    #[test]
    fn lock_threshold_and_spreading() {
        let (fake, pll) = pll();
        pll.set_lock_threshold_value(2).unwrap();
        assert_eq!(pll.lock_threshold_value(), 2);
        assert_eq!(pll.set_lock_threshold_value(4), Err(ErrorCode::INVAL));

        pll.set_spectrum_spreading_amplitude(SpreadingAmplitude::Setting5);
        pll.set_spectrum_spreading_update_interval(31).unwrap();
        assert_eq!(pll.read_sspr(), (31 << 8) | 5);
        assert_eq!(pll.set_spectrum_spreading_update_interval(32), Err(ErrorCode::INVAL));
        assert_eq!(fake.word(0x20), (31 << 8) | 5);
    }
}
