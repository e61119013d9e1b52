// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA crossbar (DMAXBAR_A)
//!
//! Routes one peripheral request line to each DMA channel. Channels 0-7
//! are selected in DMAXBAR0 and channels 8-15 in DMAXBAR1, four bits per
//! channel. Which peripheral a selector value means differs per channel
//! and per part, so each chip crate publishes its table of
//! [`DmaSelection`] constants.

use kernel::utilities::registers::interfaces::{Readable, Writeable};
use kernel::utilities::registers::{register_structs, ReadWrite, WriteOnly};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    pub DmaXbarRegisters {
        (0x00 => dmaxbar0: ReadWrite<u32>),
        (0x04 => dmaxbar0_set: WriteOnly<u32>),
        (0x08 => dmaxbar0_clr: WriteOnly<u32>),
        (0x0C => _reserved0),
        (0x10 => dmaxbar1: ReadWrite<u32>),
        (0x14 => dmaxbar1_set: WriteOnly<u32>),
        (0x18 => dmaxbar1_clr: WriteOnly<u32>),
        (0x1C => @END),
    }
}

/// Channels the crossbar can route.
pub const MAX_CHANNELS: u32 = 16;

/// Selector value that leaves a channel unconnected.
pub const NO_PERIPHERAL: u32 = 0xF;

/// A channel and the peripheral it is routed to, packed as
/// `channel << 4 | peripheral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DmaSelection(u8);

impl DmaSelection {
    pub const fn new(raw: u8) -> Self {
        DmaSelection(raw)
    }

    pub const fn channel(self) -> u32 {
        (self.0 >> 4) as u32
    }

    pub const fn peripheral(self) -> u32 {
        (self.0 & 0xF) as u32
    }
}

pub struct DmaXbar {
    registers: StaticRef<DmaXbarRegisters>,
}

impl DmaXbar {
    pub const fn new(base: StaticRef<DmaXbarRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(&self, dmaxbar0: u32, dmaxbar1: u32) {
        self.registers.dmaxbar0.set(dmaxbar0);
        self.registers.dmaxbar1.set(dmaxbar1);
    }

    pub fn write_dmaxbar0(&self, value: u32) {
        self.registers.dmaxbar0.set(value);
    }

    pub fn read_dmaxbar0(&self) -> u32 {
        self.registers.dmaxbar0.get()
    }

    pub fn write_dmaxbar1(&self, value: u32) {
        self.registers.dmaxbar1.set(value);
    }

    pub fn read_dmaxbar1(&self) -> u32 {
        self.registers.dmaxbar1.get()
    }

    fn route(&self, channel: u32, peripheral: u32) {
        let shift = (channel & 7) * 4;
        let (set, clr) = if channel >= 8 {
            (&self.registers.dmaxbar1_set, &self.registers.dmaxbar1_clr)
        } else {
            (&self.registers.dmaxbar0_set, &self.registers.dmaxbar0_clr)
        };
        clr.set(0xF << shift);
        set.set(peripheral << shift);
    }

    /// Route the selection's peripheral to its channel. Returns the
    /// channel so the caller can go on to configure it.
    pub fn select_channel_peripheral(&self, selection: DmaSelection) -> u32 {
        self.route(selection.channel(), selection.peripheral());
        selection.channel()
    }

    pub fn disconnect_channel(&self, channel: u32) -> Result<(), ErrorCode> {
        bounds::at_most("dmaxbar channel", channel, MAX_CHANNELS - 1)?;
        self.route(channel, NO_PERIPHERAL);
        Ok(())
    }

    /// The selector value currently routed to `channel`.
    pub fn channel_peripheral(&self, channel: u32) -> Result<u32, ErrorCode> {
        bounds::at_most("dmaxbar channel", channel, MAX_CHANNELS - 1)?;
        let word = if channel >= 8 {
            self.registers.dmaxbar1.get()
        } else {
            self.registers.dmaxbar0.get()
        };
        Ok((word >> ((channel & 7) * 4)) & 0xF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const XBAR0_SET: usize = 0x04;
    const XBAR0_CLR: usize = 0x08;
    const XBAR1: usize = 0x10;
    const XBAR1_SET: usize = 0x14;
    const XBAR1_CLR: usize = 0x18;

    #[test]
    fn selection_fields() {
        let sel = DmaSelection::new(0xB3);
        assert_eq!(sel.channel(), 11);
        assert_eq!(sel.peripheral(), 3);
    }

    #[test]
    fn low_channels_use_first_register() {
        let fake = FakeRegs::<DmaXbarRegisters>::new();
        let xbar = DmaXbar::new(fake.regs);
        assert_eq!(xbar.select_channel_peripheral(DmaSelection::new(0x52)), 5);
        assert_eq!(fake.word(XBAR0_CLR), 0xF << 20);
        assert_eq!(fake.word(XBAR0_SET), 2 << 20);
        assert_eq!(fake.word(XBAR1_SET), 0);
    }

    #[test]
    fn high_channels_use_second_register() {
        let fake = FakeRegs::<DmaXbarRegisters>::new();
        let xbar = DmaXbar::new(fake.regs);
        assert_eq!(xbar.select_channel_peripheral(DmaSelection::new(0xE4)), 14);
        assert_eq!(fake.word(XBAR1_CLR), 0xF << 24);
        assert_eq!(fake.word(XBAR1_SET), 4 << 24);

        xbar.disconnect_channel(8).unwrap();
        assert_eq!(fake.word(XBAR1_SET), 0xF);
        assert_eq!(xbar.disconnect_channel(16), Err(ErrorCode::INVAL));
    }

    #[test]
    fn reads_back_routing() {
        let fake = FakeRegs::<DmaXbarRegisters>::new();
        let xbar = DmaXbar::new(fake.regs);
        fake.poke(XBAR1, 0x0000_7000);
        assert_eq!(xbar.channel_peripheral(11), Ok(7));
        assert_eq!(xbar.channel_peripheral(3), Ok(0));
    }
}
