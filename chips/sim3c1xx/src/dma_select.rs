// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! DMA crossbar selections of the SiM3C1xx.
//!
//! Each constant routes one peripheral request to one DMA channel and is
//! passed to [`si32::dmaxbar::DmaXbar::select_channel_peripheral`].
//! `CHn_NONE` disconnects channel `n`.

use si32::dmaxbar::DmaSelection;

/// DMA channels on this part.
pub const NUM_CHANNELS: u32 = 16;

pub const CH0_SPI1_RX: DmaSelection = DmaSelection::new(0x01);
pub const CH0_USART0_RX: DmaSelection = DmaSelection::new(0x02);
pub const CH0_I2C0_TX: DmaSelection = DmaSelection::new(0x03);
pub const CH0_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x04);
pub const CH0_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x05);
pub const CH0_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x06);
pub const CH0_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x07);
pub const CH0_TIMER0L: DmaSelection = DmaSelection::new(0x08);
pub const CH0_TIMER0H: DmaSelection = DmaSelection::new(0x09);
pub const CH0_TIMER1L: DmaSelection = DmaSelection::new(0x0A);
pub const CH0_TIMER1H: DmaSelection = DmaSelection::new(0x0B);
pub const CH0_NONE: DmaSelection = DmaSelection::new(0x0F);

pub const CH1_SPI0_RX: DmaSelection = DmaSelection::new(0x11);
pub const CH1_USART1_RX: DmaSelection = DmaSelection::new(0x12);
pub const CH1_I2C0_RX: DmaSelection = DmaSelection::new(0x13);
pub const CH1_IDAC1: DmaSelection = DmaSelection::new(0x14);
pub const CH1_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x15);
pub const CH1_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x16);
pub const CH1_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x17);
pub const CH1_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x18);
pub const CH1_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x19);
pub const CH1_TIMER0L: DmaSelection = DmaSelection::new(0x1A);
pub const CH1_TIMER1L: DmaSelection = DmaSelection::new(0x1B);
pub const CH1_TIMER1H: DmaSelection = DmaSelection::new(0x1C);
pub const CH1_NONE: DmaSelection = DmaSelection::new(0x1F);

pub const CH2_SPI0_TX: DmaSelection = DmaSelection::new(0x21);
pub const CH2_USART0_TX: DmaSelection = DmaSelection::new(0x22);
pub const CH2_SARADC0: DmaSelection = DmaSelection::new(0x23);
pub const CH2_IDAC1: DmaSelection = DmaSelection::new(0x24);
pub const CH2_I2S0_TX: DmaSelection = DmaSelection::new(0x25);
pub const CH2_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0x26);
pub const CH2_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x27);
pub const CH2_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x28);
pub const CH2_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x29);
pub const CH2_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x2A);
pub const CH2_NONE: DmaSelection = DmaSelection::new(0x2F);

pub const CH3_SARADC1: DmaSelection = DmaSelection::new(0x31);
pub const CH3_IDAC0: DmaSelection = DmaSelection::new(0x32);
pub const CH3_I2S0_TX: DmaSelection = DmaSelection::new(0x33);
pub const CH3_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x34);
pub const CH3_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x35);
pub const CH3_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x36);
pub const CH3_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x37);
pub const CH3_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x38);
pub const CH3_TIMER1H: DmaSelection = DmaSelection::new(0x39);
pub const CH3_NONE: DmaSelection = DmaSelection::new(0x3F);

pub const CH4_SPI1_TX: DmaSelection = DmaSelection::new(0x41);
pub const CH4_USART0_TX: DmaSelection = DmaSelection::new(0x42);
pub const CH4_SARADC0: DmaSelection = DmaSelection::new(0x43);
pub const CH4_I2S0_RX: DmaSelection = DmaSelection::new(0x44);
pub const CH4_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x45);
pub const CH4_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x46);
pub const CH4_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x47);
pub const CH4_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x48);
pub const CH4_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x49);
pub const CH4_TIMER0H: DmaSelection = DmaSelection::new(0x4A);
pub const CH4_NONE: DmaSelection = DmaSelection::new(0x4F);

pub const CH5_AES0_TX: DmaSelection = DmaSelection::new(0x51);
pub const CH5_USART1_TX: DmaSelection = DmaSelection::new(0x52);
pub const CH5_SARADC0: DmaSelection = DmaSelection::new(0x53);
pub const CH5_I2S0_RX: DmaSelection = DmaSelection::new(0x54);
pub const CH5_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x55);
pub const CH5_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x56);
pub const CH5_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x57);
pub const CH5_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x58);
pub const CH5_NONE: DmaSelection = DmaSelection::new(0x5F);

pub const CH6_AES0_RX: DmaSelection = DmaSelection::new(0x61);
pub const CH6_USART0_RX: DmaSelection = DmaSelection::new(0x62);
pub const CH6_I2C0_RX: DmaSelection = DmaSelection::new(0x63);
pub const CH6_IDAC0: DmaSelection = DmaSelection::new(0x64);
pub const CH6_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x65);
pub const CH6_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x66);
pub const CH6_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x67);
pub const CH6_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x68);
pub const CH6_TIMER0H: DmaSelection = DmaSelection::new(0x69);
pub const CH6_NONE: DmaSelection = DmaSelection::new(0x6F);

pub const CH7_AES0_XOR: DmaSelection = DmaSelection::new(0x71);
pub const CH7_SPI1_TX: DmaSelection = DmaSelection::new(0x72);
pub const CH7_USART0_TX: DmaSelection = DmaSelection::new(0x73);
pub const CH7_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x74);
pub const CH7_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x75);
pub const CH7_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x76);
pub const CH7_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x77);
pub const CH7_TIMER0L: DmaSelection = DmaSelection::new(0x78);
pub const CH7_TIMER1L: DmaSelection = DmaSelection::new(0x79);
pub const CH7_TIMER1H: DmaSelection = DmaSelection::new(0x7A);
pub const CH7_NONE: DmaSelection = DmaSelection::new(0x7F);

pub const CH8_USART1_RX: DmaSelection = DmaSelection::new(0x81);
pub const CH8_SPI1_RX: DmaSelection = DmaSelection::new(0x82);
pub const CH8_USART0_RX: DmaSelection = DmaSelection::new(0x83);
pub const CH8_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x84);
pub const CH8_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x85);
pub const CH8_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x86);
pub const CH8_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x87);
pub const CH8_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x88);
pub const CH8_NONE: DmaSelection = DmaSelection::new(0x8F);

pub const CH9_USART1_TX: DmaSelection = DmaSelection::new(0x91);
pub const CH9_I2C0_TX: DmaSelection = DmaSelection::new(0x92);
pub const CH9_EPCA0_CAPTURE: DmaSelection = DmaSelection::new(0x93);
pub const CH9_DMA0T0_RISE: DmaSelection = DmaSelection::new(0x94);
pub const CH9_DMA0T0_FALL: DmaSelection = DmaSelection::new(0x95);
pub const CH9_DMA0T1_RISE: DmaSelection = DmaSelection::new(0x96);
pub const CH9_DMA0T1_FALL: DmaSelection = DmaSelection::new(0x97);
pub const CH9_TIMER0H: DmaSelection = DmaSelection::new(0x98);
pub const CH9_NONE: DmaSelection = DmaSelection::new(0x9F);

pub const CH10_AES0_TX: DmaSelection = DmaSelection::new(0xA1);
pub const CH10_SARADC1: DmaSelection = DmaSelection::new(0xA2);
pub const CH10_I2S0_RX: DmaSelection = DmaSelection::new(0xA3);
pub const CH10_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xA4);
pub const CH10_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xA5);
pub const CH10_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xA6);
pub const CH10_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xA7);
pub const CH10_TIMER1H: DmaSelection = DmaSelection::new(0xA8);
pub const CH10_NONE: DmaSelection = DmaSelection::new(0xAF);

pub const CH11_AES0_RX: DmaSelection = DmaSelection::new(0xB1);
pub const CH11_USART1_RX: DmaSelection = DmaSelection::new(0xB2);
pub const CH11_USART0_RX: DmaSelection = DmaSelection::new(0xB3);
pub const CH11_I2C0_RX: DmaSelection = DmaSelection::new(0xB4);
pub const CH11_I2S0_RX: DmaSelection = DmaSelection::new(0xB5);
pub const CH11_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xB6);
pub const CH11_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xB7);
pub const CH11_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xB8);
pub const CH11_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xB9);
pub const CH11_TIMER0H: DmaSelection = DmaSelection::new(0xBA);
pub const CH11_NONE: DmaSelection = DmaSelection::new(0xBF);

pub const CH12_AES0_XOR: DmaSelection = DmaSelection::new(0xC1);
pub const CH12_USART1_TX: DmaSelection = DmaSelection::new(0xC2);
pub const CH12_SPI1_TX: DmaSelection = DmaSelection::new(0xC3);
pub const CH12_IDAC1: DmaSelection = DmaSelection::new(0xC4);
pub const CH12_I2S0_TX: DmaSelection = DmaSelection::new(0xC5);
pub const CH12_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xC6);
pub const CH12_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xC7);
pub const CH12_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xC8);
pub const CH12_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xC9);
pub const CH12_TIMER0L: DmaSelection = DmaSelection::new(0xCA);
pub const CH12_TIMER1L: DmaSelection = DmaSelection::new(0xCB);
pub const CH12_TIMER1H: DmaSelection = DmaSelection::new(0xCC);
pub const CH12_NONE: DmaSelection = DmaSelection::new(0xCF);

pub const CH13_SPI0_RX: DmaSelection = DmaSelection::new(0xD1);
pub const CH13_USART0_RX: DmaSelection = DmaSelection::new(0xD2);
pub const CH13_IDAC1: DmaSelection = DmaSelection::new(0xD3);
pub const CH13_I2S0_TX: DmaSelection = DmaSelection::new(0xD4);
pub const CH13_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xD5);
pub const CH13_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xD6);
pub const CH13_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xD7);
pub const CH13_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xD8);
pub const CH13_TIMER0H: DmaSelection = DmaSelection::new(0xD9);
pub const CH13_NONE: DmaSelection = DmaSelection::new(0xDF);

pub const CH14_SPI0_TX: DmaSelection = DmaSelection::new(0xE1);
pub const CH14_USART0_TX: DmaSelection = DmaSelection::new(0xE2);
pub const CH14_IDAC0: DmaSelection = DmaSelection::new(0xE3);
pub const CH14_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0xE4);
pub const CH14_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xE5);
pub const CH14_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xE6);
pub const CH14_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xE7);
pub const CH14_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xE8);
pub const CH14_TIMER0L: DmaSelection = DmaSelection::new(0xE9);
pub const CH14_TIMER1L: DmaSelection = DmaSelection::new(0xEA);
pub const CH14_NONE: DmaSelection = DmaSelection::new(0xEF);

pub const CH15_SARADC1: DmaSelection = DmaSelection::new(0xF1);
pub const CH15_IDAC0: DmaSelection = DmaSelection::new(0xF2);
pub const CH15_EPCA0_CONTROL: DmaSelection = DmaSelection::new(0xF3);
pub const CH15_DMA0T0_RISE: DmaSelection = DmaSelection::new(0xF4);
pub const CH15_DMA0T0_FALL: DmaSelection = DmaSelection::new(0xF5);
pub const CH15_DMA0T1_RISE: DmaSelection = DmaSelection::new(0xF6);
pub const CH15_DMA0T1_FALL: DmaSelection = DmaSelection::new(0xF7);
pub const CH15_TIMER0H: DmaSelection = DmaSelection::new(0xF8);
pub const CH15_TIMER1H: DmaSelection = DmaSelection::new(0xF9);
pub const CH15_NONE: DmaSelection = DmaSelection::new(0xFF);

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DmaSelection; 169] = [
        CH0_SPI1_RX,
        CH0_USART0_RX,
        CH0_I2C0_TX,
        CH0_DMA0T0_RISE,
        CH0_DMA0T0_FALL,
        CH0_DMA0T1_RISE,
        CH0_DMA0T1_FALL,
        CH0_TIMER0L,
        CH0_TIMER0H,
        CH0_TIMER1L,
        CH0_TIMER1H,
        CH0_NONE,
        CH1_SPI0_RX,
        CH1_USART1_RX,
        CH1_I2C0_RX,
        CH1_IDAC1,
        CH1_EPCA0_CONTROL,
        CH1_DMA0T0_RISE,
        CH1_DMA0T0_FALL,
        CH1_DMA0T1_RISE,
        CH1_DMA0T1_FALL,
        CH1_TIMER0L,
        CH1_TIMER1L,
        CH1_TIMER1H,
        CH1_NONE,
        CH2_SPI0_TX,
        CH2_USART0_TX,
        CH2_SARADC0,
        CH2_IDAC1,
        CH2_I2S0_TX,
        CH2_EPCA0_CONTROL,
        CH2_DMA0T0_RISE,
        CH2_DMA0T0_FALL,
        CH2_DMA0T1_RISE,
        CH2_DMA0T1_FALL,
        CH2_NONE,
        CH3_SARADC1,
        CH3_IDAC0,
        CH3_I2S0_TX,
        CH3_EPCA0_CAPTURE,
        CH3_DMA0T0_RISE,
        CH3_DMA0T0_FALL,
        CH3_DMA0T1_RISE,
        CH3_DMA0T1_FALL,
        CH3_TIMER1H,
        CH3_NONE,
        CH4_SPI1_TX,
        CH4_USART0_TX,
        CH4_SARADC0,
        CH4_I2S0_RX,
        CH4_EPCA0_CAPTURE,
        CH4_DMA0T0_RISE,
        CH4_DMA0T0_FALL,
        CH4_DMA0T1_RISE,
        CH4_DMA0T1_FALL,
        CH4_TIMER0H,
        CH4_NONE,
        CH5_AES0_TX,
        CH5_USART1_TX,
        CH5_SARADC0,
        CH5_I2S0_RX,
        CH5_DMA0T0_RISE,
        CH5_DMA0T0_FALL,
        CH5_DMA0T1_RISE,
        CH5_DMA0T1_FALL,
        CH5_NONE,
        CH6_AES0_RX,
        CH6_USART0_RX,
        CH6_I2C0_RX,
        CH6_IDAC0,
        CH6_DMA0T0_RISE,
        CH6_DMA0T0_FALL,
        CH6_DMA0T1_RISE,
        CH6_DMA0T1_FALL,
        CH6_TIMER0H,
        CH6_NONE,
        CH7_AES0_XOR,
        CH7_SPI1_TX,
        CH7_USART0_TX,
        CH7_DMA0T0_RISE,
        CH7_DMA0T0_FALL,
        CH7_DMA0T1_RISE,
        CH7_DMA0T1_FALL,
        CH7_TIMER0L,
        CH7_TIMER1L,
        CH7_TIMER1H,
        CH7_NONE,
        CH8_USART1_RX,
        CH8_SPI1_RX,
        CH8_USART0_RX,
        CH8_EPCA0_CAPTURE,
        CH8_DMA0T0_RISE,
        CH8_DMA0T0_FALL,
        CH8_DMA0T1_RISE,
        CH8_DMA0T1_FALL,
        CH8_NONE,
        CH9_USART1_TX,
        CH9_I2C0_TX,
        CH9_EPCA0_CAPTURE,
        CH9_DMA0T0_RISE,
        CH9_DMA0T0_FALL,
        CH9_DMA0T1_RISE,
        CH9_DMA0T1_FALL,
        CH9_TIMER0H,
        CH9_NONE,
        CH10_AES0_TX,
        CH10_SARADC1,
        CH10_I2S0_RX,
        CH10_DMA0T0_RISE,
        CH10_DMA0T0_FALL,
        CH10_DMA0T1_RISE,
        CH10_DMA0T1_FALL,
        CH10_TIMER1H,
        CH10_NONE,
        CH11_AES0_RX,
        CH11_USART1_RX,
        CH11_USART0_RX,
        CH11_I2C0_RX,
        CH11_I2S0_RX,
        CH11_DMA0T0_RISE,
        CH11_DMA0T0_FALL,
        CH11_DMA0T1_RISE,
        CH11_DMA0T1_FALL,
        CH11_TIMER0H,
        CH11_NONE,
        CH12_AES0_XOR,
        CH12_USART1_TX,
        CH12_SPI1_TX,
        CH12_IDAC1,
        CH12_I2S0_TX,
        CH12_DMA0T0_RISE,
        CH12_DMA0T0_FALL,
        CH12_DMA0T1_RISE,
        CH12_DMA0T1_FALL,
        CH12_TIMER0L,
        CH12_TIMER1L,
        CH12_TIMER1H,
        CH12_NONE,
        CH13_SPI0_RX,
        CH13_USART0_RX,
        CH13_IDAC1,
        CH13_I2S0_TX,
        CH13_DMA0T0_RISE,
        CH13_DMA0T0_FALL,
        CH13_DMA0T1_RISE,
        CH13_DMA0T1_FALL,
        CH13_TIMER0H,
        CH13_NONE,
        CH14_SPI0_TX,
        CH14_USART0_TX,
        CH14_IDAC0,
        CH14_EPCA0_CONTROL,
        CH14_DMA0T0_RISE,
        CH14_DMA0T0_FALL,
        CH14_DMA0T1_RISE,
        CH14_DMA0T1_FALL,
        CH14_TIMER0L,
        CH14_TIMER1L,
        CH14_NONE,
        CH15_SARADC1,
        CH15_IDAC0,
        CH15_EPCA0_CONTROL,
        CH15_DMA0T0_RISE,
        CH15_DMA0T0_FALL,
        CH15_DMA0T1_RISE,
        CH15_DMA0T1_FALL,
        CH15_TIMER0H,
        CH15_TIMER1H,
        CH15_NONE,
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
