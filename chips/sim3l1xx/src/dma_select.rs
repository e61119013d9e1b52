// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA crossbar selections of the SiM3L1xx.
//!
//! Each constant routes one peripheral request to one DMA channel and is
//! passed to [`si32::dmaxbar::DmaXbar::select_channel_peripheral`].
//! `CHn_NONE` disconnects channel `n`.

use si32::dmaxbar::DmaSelection;

/// DMA channels on this part.
pub const NUM_CHANNELS: u32 = 10;

pub const CH0_DTM0_A: DmaSelection = DmaSelection::new(0x00);
pub const CH0_SPI0_TX: DmaSelection = DmaSelection::new(0x01);
pub const CH0_AES0_TX: DmaSelection = DmaSelection::new(0x02);
pub const CH0_USART0_RX: DmaSelection = DmaSelection::new(0x03);
pub const CH0_I2C0_RX: DmaSelection = DmaSelection::new(0x04);
pub const CH0_I2C0_TX: DmaSelection = DmaSelection::new(0x05);
pub const CH0_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x06);
pub const CH0_TIMER0L: DmaSelection = DmaSelection::new(0x07);
pub const CH0_TIMER0H: DmaSelection = DmaSelection::new(0x08);
pub const CH0_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x09);
pub const CH0_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x0A);
pub const CH0_NONE: DmaSelection = DmaSelection::new(0x0F);

pub const CH1_DTM0_B: DmaSelection = DmaSelection::new(0x10);
pub const CH1_SPI0_RX: DmaSelection = DmaSelection::new(0x11);
pub const CH1_AES0_RX: DmaSelection = DmaSelection::new(0x12);
pub const CH1_USART0_TX: DmaSelection = DmaSelection::new(0x13);
pub const CH1_SARADC0: DmaSelection = DmaSelection::new(0x14);
pub const CH1_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x15);
pub const CH1_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x16);
pub const CH1_TIMER1L: DmaSelection = DmaSelection::new(0x17);
pub const CH1_TIMER1H: DmaSelection = DmaSelection::new(0x18);
pub const CH1_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x19);
pub const CH1_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x1A);
pub const CH1_NONE: DmaSelection = DmaSelection::new(0x1F);

pub const CH2_DTM0_C: DmaSelection = DmaSelection::new(0x20);
pub const CH2_DTM2_A: DmaSelection = DmaSelection::new(0x21);
pub const CH2_ENCDEC0_TX: DmaSelection = DmaSelection::new(0x22);
pub const CH2_AES0_XOR: DmaSelection = DmaSelection::new(0x23);
pub const CH2_SPI1_TX: DmaSelection = DmaSelection::new(0x24);
pub const CH2_USART0_RX: DmaSelection = DmaSelection::new(0x25);
pub const CH2_I2C0_RX: DmaSelection = DmaSelection::new(0x26);
pub const CH2_IDAC0: DmaSelection = DmaSelection::new(0x27);
pub const CH2_TIMER0L: DmaSelection = DmaSelection::new(0x28);
pub const CH2_TIMER0H: DmaSelection = DmaSelection::new(0x29);
pub const CH2_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x2A);
pub const CH2_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x2B);
pub const CH2_NONE: DmaSelection = DmaSelection::new(0x2F);

pub const CH3_DTM0_D: DmaSelection = DmaSelection::new(0x30);
pub const CH3_DTM2_B: DmaSelection = DmaSelection::new(0x31);
pub const CH3_ENCDEC0_RX: DmaSelection = DmaSelection::new(0x32);
pub const CH3_SPI1_RX: DmaSelection = DmaSelection::new(0x33);
pub const CH3_USART0_TX: DmaSelection = DmaSelection::new(0x34);
pub const CH3_I2C0_RX: DmaSelection = DmaSelection::new(0x35);
pub const CH3_I2C0_TX: DmaSelection = DmaSelection::new(0x36);
pub const CH3_TIMER1L: DmaSelection = DmaSelection::new(0x37);
pub const CH3_TIMER1H: DmaSelection = DmaSelection::new(0x38);
pub const CH3_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x39);
pub const CH3_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x3A);
pub const CH3_NONE: DmaSelection = DmaSelection::new(0x3F);

pub const CH4_DTM1_A: DmaSelection = DmaSelection::new(0x40);
pub const CH4_DTM2_C: DmaSelection = DmaSelection::new(0x41);
pub const CH4_SPI0_TX: DmaSelection = DmaSelection::new(0x42);
pub const CH4_AES0_TX: DmaSelection = DmaSelection::new(0x43);
pub const CH4_SARADC0: DmaSelection = DmaSelection::new(0x44);
pub const CH4_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x45);
pub const CH4_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x46);
pub const CH4_TIMER0L: DmaSelection = DmaSelection::new(0x47);
pub const CH4_TIMER0H: DmaSelection = DmaSelection::new(0x48);
pub const CH4_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x49);
pub const CH4_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x4A);
pub const CH4_NONE: DmaSelection = DmaSelection::new(0x4F);

pub const CH5_DTM1_B: DmaSelection = DmaSelection::new(0x50);
pub const CH5_DTM2_D: DmaSelection = DmaSelection::new(0x51);
pub const CH5_SPI0_RX: DmaSelection = DmaSelection::new(0x52);
pub const CH5_AES0_RX: DmaSelection = DmaSelection::new(0x53);
pub const CH5_USART0_RX: DmaSelection = DmaSelection::new(0x54);
pub const CH5_I2C0_RX: DmaSelection = DmaSelection::new(0x55);
pub const CH5_IDAC0: DmaSelection = DmaSelection::new(0x56);
pub const CH5_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x57);
pub const CH5_TIMER1L: DmaSelection = DmaSelection::new(0x58);
pub const CH5_TIMER1H: DmaSelection = DmaSelection::new(0x59);
pub const CH5_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x5A);
pub const CH5_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x5B);
pub const CH5_NONE: DmaSelection = DmaSelection::new(0x5F);

pub const CH6_DTM1_C: DmaSelection = DmaSelection::new(0x60);
pub const CH6_DTM2_A: DmaSelection = DmaSelection::new(0x61);
pub const CH6_ENCDEC0_TX: DmaSelection = DmaSelection::new(0x62);
pub const CH6_AES0_XOR: DmaSelection = DmaSelection::new(0x63);
pub const CH6_USART0_TX: DmaSelection = DmaSelection::new(0x64);
pub const CH6_I2C0_RX: DmaSelection = DmaSelection::new(0x65);
pub const CH6_I2C0_TX: DmaSelection = DmaSelection::new(0x66);
pub const CH6_SARADC0: DmaSelection = DmaSelection::new(0x67);
pub const CH6_TIMER0L: DmaSelection = DmaSelection::new(0x68);
pub const CH6_TIMER0H: DmaSelection = DmaSelection::new(0x69);
pub const CH6_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x6A);
pub const CH6_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x6B);
pub const CH6_NONE: DmaSelection = DmaSelection::new(0x6F);

pub const CH7_DTM1_D: DmaSelection = DmaSelection::new(0x70);
pub const CH7_DTM2_B: DmaSelection = DmaSelection::new(0x71);
pub const CH7_ENCDEC0_RX: DmaSelection = DmaSelection::new(0x72);
pub const CH7_SPI1_TX: DmaSelection = DmaSelection::new(0x73);
pub const CH7_USART0_RX: DmaSelection = DmaSelection::new(0x74);
pub const CH7_IDAC0: DmaSelection = DmaSelection::new(0x75);
pub const CH7_TIMER1L: DmaSelection = DmaSelection::new(0x76);
pub const CH7_TIMER1H: DmaSelection = DmaSelection::new(0x77);
pub const CH7_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x78);
pub const CH7_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x79);
pub const CH7_NONE: DmaSelection = DmaSelection::new(0x7F);

pub const CH8_DTM2_C: DmaSelection = DmaSelection::new(0x80);
pub const CH8_SPI0_TX: DmaSelection = DmaSelection::new(0x81);
pub const CH8_SPI1_RX: DmaSelection = DmaSelection::new(0x82);
pub const CH8_USART0_TX: DmaSelection = DmaSelection::new(0x83);
pub const CH8_I2C0_RX: DmaSelection = DmaSelection::new(0x84);
pub const CH8_SARADC0: DmaSelection = DmaSelection::new(0x85);
pub const CH8_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x86);
pub const CH8_TIMER0L: DmaSelection = DmaSelection::new(0x87);
pub const CH8_TIMER0H: DmaSelection = DmaSelection::new(0x88);
pub const CH8_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x89);
pub const CH8_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x8A);
pub const CH8_NONE: DmaSelection = DmaSelection::new(0x8F);

pub const CH9_DTM2_D: DmaSelection = DmaSelection::new(0x90);
pub const CH9_SPI0_RX: DmaSelection = DmaSelection::new(0x91);
pub const CH9_I2C0_RX: DmaSelection = DmaSelection::new(0x92);
pub const CH9_I2C0_TX: DmaSelection = DmaSelection::new(0x93);
pub const CH9_IDAC0: DmaSelection = DmaSelection::new(0x94);
pub const CH9_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x95);
pub const CH9_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x96);
pub const CH9_TIMER1L: DmaSelection = DmaSelection::new(0x97);
pub const CH9_TIMER1H: DmaSelection = DmaSelection::new(0x98);
pub const CH9_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x99);
pub const CH9_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x9A);
pub const CH9_NONE: DmaSelection = DmaSelection::new(0x9F);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DmaSelection; 122] = [
        CH0_DTM0_A,
        CH0_SPI0_TX,
        CH0_AES0_TX,
        CH0_USART0_RX,
        CH0_I2C0_RX,
        CH0_I2C0_TX,
        CH0_EPCA0_CAPTURE,
        CH0_TIMER0L,
        CH0_TIMER0H,
        CH0_DMA0T0_RISE,
        CH0_DMA0T0_FALL,
        CH0_NONE,
        CH1_DTM0_B,
        CH1_SPI0_RX,
        CH1_AES0_RX,
        CH1_USART0_TX,
        CH1_SARADC0,
        CH1_EPCA0_CAPTURE,
        CH1_EPCA0_CONTROL,
        CH1_TIMER1L,
        CH1_TIMER1H,
        CH1_DMA0T1_RISE,
        CH1_DMA0T1_FALL,
        CH1_NONE,
        CH2_DTM0_C,
        CH2_DTM2_A,
        CH2_ENCDEC0_TX,
        CH2_AES0_XOR,
        CH2_SPI1_TX,
        CH2_USART0_RX,
        CH2_I2C0_RX,
        CH2_IDAC0,
        CH2_TIMER0L,
        CH2_TIMER0H,
        CH2_DMA0T0_RISE,
        CH2_DMA0T0_FALL,
        CH2_NONE,
        CH3_DTM0_D,
        CH3_DTM2_B,
        CH3_ENCDEC0_RX,
        CH3_SPI1_RX,
        CH3_USART0_TX,
        CH3_I2C0_RX,
        CH3_I2C0_TX,
        CH3_TIMER1L,
        CH3_TIMER1H,
        CH3_DMA0T1_RISE,
        CH3_DMA0T1_FALL,
        CH3_NONE,
        CH4_DTM1_A,
        CH4_DTM2_C,
        CH4_SPI0_TX,
        CH4_AES0_TX,
        CH4_SARADC0,
        CH4_EPCA0_CAPTURE,
        CH4_EPCA0_CONTROL,
        CH4_TIMER0L,
        CH4_TIMER0H,
        CH4_DMA0T0_RISE,
        CH4_DMA0T0_FALL,
        CH4_NONE,
        CH5_DTM1_B,
        CH5_DTM2_D,
        CH5_SPI0_RX,
        CH5_AES0_RX,
        CH5_USART0_RX,
        CH5_I2C0_RX,
        CH5_IDAC0,
        CH5_EPCA0_CONTROL,
        CH5_TIMER1L,
        CH5_TIMER1H,
        CH5_DMA0T1_RISE,
        CH5_DMA0T1_FALL,
        CH5_NONE,
        CH6_DTM1_C,
        CH6_DTM2_A,
        CH6_ENCDEC0_TX,
        CH6_AES0_XOR,
        CH6_USART0_TX,
        CH6_I2C0_RX,
        CH6_I2C0_TX,
        CH6_SARADC0,
        CH6_TIMER0L,
        CH6_TIMER0H,
        CH6_DMA0T0_RISE,
        CH6_DMA0T0_FALL,
        CH6_NONE,
        CH7_DTM1_D,
        CH7_DTM2_B,
        CH7_ENCDEC0_RX,
        CH7_SPI1_TX,
        CH7_USART0_RX,
        CH7_IDAC0,
        CH7_TIMER1L,
        CH7_TIMER1H,
        CH7_DMA0T1_RISE,
        CH7_DMA0T1_FALL,
        CH7_NONE,
        CH8_DTM2_C,
        CH8_SPI0_TX,
        CH8_SPI1_RX,
        CH8_USART0_TX,
        CH8_I2C0_RX,
        CH8_SARADC0,
        CH8_EPCA0_CAPTURE,
        CH8_TIMER0L,
        CH8_TIMER0H,
        CH8_DMA0T0_RISE,
        CH8_DMA0T0_FALL,
        CH8_NONE,
        CH9_DTM2_D,
        CH9_SPI0_RX,
        CH9_I2C0_RX,
        CH9_I2C0_TX,
        CH9_IDAC0,
        CH9_EPCA0_CAPTURE,
        CH9_EPCA0_CONTROL,
        CH9_TIMER1L,
        CH9_TIMER1H,
        CH9_DMA0T1_RISE,
        CH9_DMA0T1_FALL,
        CH9_NONE,
    ];

    #[test]
    fn every_selection_targets_an_existing_channel() {
        for sel in ALL {
            assert!(sel.channel() < NUM_CHANNELS, "{:?}", sel);
        }
    }

    #[test]
    fn selections_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
