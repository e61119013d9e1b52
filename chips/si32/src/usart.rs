// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Universal synchronous/asynchronous receiver-transmitter (USART_A)
//!
//! Receiver and transmitter share most of their frame format options, so
//! those are exposed once and take a [`Direction`]. Everything else keeps
//! separate rx and tx methods because the two halves of CONTROL and FIFOCN
//! do not line up.

use core::ptr;

use kernel::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use kernel::utilities::registers::{
    register_bitfields, register_structs, Field, FieldValue, ReadWrite, WriteOnly,
};
use kernel::utilities::StaticRef;
use kernel::ErrorCode;

use crate::bounds;

register_structs! {
    pub UsartRegisters {
        (0x00 => config: ReadWrite<u32, CONFIG::Register>),
        (0x04 => config_set: WriteOnly<u32, CONFIG::Register>),
        (0x08 => config_clr: WriteOnly<u32, CONFIG::Register>),
        (0x0C => _reserved0),
        (0x10 => mode: ReadWrite<u32, MODE::Register>),
        (0x14 => mode_set: WriteOnly<u32, MODE::Register>),
        (0x18 => mode_clr: WriteOnly<u32, MODE::Register>),
        (0x1C => _reserved1),
        (0x20 => flowcn: ReadWrite<u32, FLOWCN::Register>),
        (0x24 => flowcn_set: WriteOnly<u32, FLOWCN::Register>),
        (0x28 => flowcn_clr: WriteOnly<u32, FLOWCN::Register>),
        (0x2C => _reserved2),
        (0x30 => control: ReadWrite<u32, CONTROL::Register>),
        (0x34 => control_set: WriteOnly<u32, CONTROL::Register>),
        (0x38 => control_clr: WriteOnly<u32, CONTROL::Register>),
        (0x3C => _reserved3),
        (0x40 => ipdelay: ReadWrite<u32, IPDELAY::Register>),
        (0x44 => _reserved4),
        (0x50 => baudrate: ReadWrite<u32, BAUDRATE::Register>),
        (0x54 => _reserved5),
        (0x60 => fifocn: ReadWrite<u32, FIFOCN::Register>),
        (0x64 => fifocn_set: WriteOnly<u32, FIFOCN::Register>),
        (0x68 => fifocn_clr: WriteOnly<u32, FIFOCN::Register>),
        (0x6C => _reserved6),
        (0x70 => data: ReadWrite<u32>),
        (0x74 => @END),
    }
}

register_bitfields![u32,
    CONFIG [
        RSTRTEN OFFSET(0) NUMBITS(1) [],
        RPAREN OFFSET(1) NUMBITS(1) [],
        RSTPEN OFFSET(2) NUMBITS(1) [],
        RSTPMD OFFSET(3) NUMBITS(2) [],
        RPARMD OFFSET(5) NUMBITS(2) [],
        RDATLN OFFSET(8) NUMBITS(3) [],
        RSCEN OFFSET(12) NUMBITS(1) [],
        RIRDAEN OFFSET(13) NUMBITS(1) [],
        RINVEN OFFSET(14) NUMBITS(1) [],
        RSYNCEN OFFSET(15) NUMBITS(1) [],
        TSTRTEN OFFSET(16) NUMBITS(1) [],
        TPAREN OFFSET(17) NUMBITS(1) [],
        TSTPEN OFFSET(18) NUMBITS(1) [],
        TSTPMD OFFSET(19) NUMBITS(2) [],
        TPARMD OFFSET(21) NUMBITS(2) [],
        TDATLN OFFSET(24) NUMBITS(3) [],
        TSYNCEN OFFSET(27) NUMBITS(1) [],
        TSCEN OFFSET(28) NUMBITS(1) [],
        TIRDAEN OFFSET(29) NUMBITS(1) [],
        TINVEN OFFSET(30) NUMBITS(1) []
    ],
    MODE [
        CLKESEL OFFSET(0) NUMBITS(1) [
            Falling = 0,
            Rising = 1
        ],
        CLKIDLE OFFSET(1) NUMBITS(1) [
            IdleLow = 0,
            IdleHigh = 1
        ],
        DBGMD OFFSET(16) NUMBITS(1) [
            Run = 0,
            Halt = 1
        ],
        LBMD OFFSET(18) NUMBITS(2) [
            None = 0,
            RxOnly = 1,
            TxOnly = 2,
            Both = 3
        ],
        STRTSTCLK OFFSET(24) NUMBITS(1) [],
        STPSTCLK OFFSET(25) NUMBITS(1) [],
        ISTCLK OFFSET(26) NUMBITS(1) [],
        DUPLEXMD OFFSET(27) NUMBITS(1) [
            FullDuplex = 0,
            HalfDuplex = 1
        ],
        ITSEN OFFSET(30) NUMBITS(1) [],
        OPMD OFFSET(31) NUMBITS(1) [
            Slave = 0,
            Master = 1
        ]
    ],
    FLOWCN [
        RTS OFFSET(0) NUMBITS(1) [],
        RX OFFSET(1) NUMBITS(1) [],
        RTSINVEN OFFSET(5) NUMBITS(1) [],
        RTSTH OFFSET(6) NUMBITS(1) [
            Full = 0,
            OneByteFree = 1
        ],
        RTSEN OFFSET(7) NUMBITS(1) [],
        CTS OFFSET(16) NUMBITS(1) [],
        TX OFFSET(17) NUMBITS(1) [],
        UCLK OFFSET(18) NUMBITS(1) [],
        CTSINVEN OFFSET(21) NUMBITS(1) [],
        CTSEN OFFSET(23) NUMBITS(1) [],
        TIRDAPW OFFSET(28) NUMBITS(2) []
    ],
    CONTROL [
        RFRMERI OFFSET(0) NUMBITS(1) [],
        RPARERI OFFSET(1) NUMBITS(1) [],
        ROREI OFFSET(2) NUMBITS(1) [],
        RDREQI OFFSET(3) NUMBITS(1) [],
        RERIEN OFFSET(5) NUMBITS(1) [],
        RDREQIEN OFFSET(6) NUMBITS(1) [],
        MATMD OFFSET(8) NUMBITS(2) [
            Off = 0,
            StoreByte = 1,
            FrameError = 2,
            StoreBit = 3
        ],
        RABDEN OFFSET(10) NUMBITS(1) [],
        RBUSYF OFFSET(11) NUMBITS(1) [],
        RBIT OFFSET(12) NUMBITS(1) [],
        ROSEN OFFSET(13) NUMBITS(1) [],
        RINH OFFSET(14) NUMBITS(1) [],
        REN OFFSET(15) NUMBITS(1) [],
        TSCERI OFFSET(16) NUMBITS(1) [],
        TUREI OFFSET(17) NUMBITS(1) [],
        TDREQI OFFSET(18) NUMBITS(1) [],
        TCPTI OFFSET(19) NUMBITS(1) [],
        TCPTTH OFFSET(20) NUMBITS(1) [
            EndOfTransmission = 0,
            SetOnEmpty = 1
        ],
        TERIEN OFFSET(21) NUMBITS(1) [],
        TDREQIEN OFFSET(22) NUMBITS(1) [],
        TCPTIEN OFFSET(23) NUMBITS(1) [],
        TBUSYF OFFSET(27) NUMBITS(1) [],
        TBIT OFFSET(28) NUMBITS(1) [],
        TINH OFFSET(30) NUMBITS(1) [],
        TEN OFFSET(31) NUMBITS(1) []
    ],
    IPDELAY [
        IPDELAY OFFSET(16) NUMBITS(8) []
    ],
    BAUDRATE [
        RBAUD OFFSET(0) NUMBITS(16) [],
        TBAUD OFFSET(16) NUMBITS(16) []
    ],
    FIFOCN [
        RCNT OFFSET(0) NUMBITS(3) [],
        RFTH OFFSET(4) NUMBITS(2) [
            One = 0,
            Two = 1,
            Four = 2
        ],
        RDMAEN OFFSET(6) NUMBITS(1) [],
        RFIFOFL OFFSET(8) NUMBITS(1) [],
        RFERI OFFSET(9) NUMBITS(1) [],
        RSRFULLF OFFSET(10) NUMBITS(1) [],
        TCNT OFFSET(16) NUMBITS(3) [],
        TFTH OFFSET(20) NUMBITS(2) [
            One = 0,
            Two = 1,
            Four = 2
        ],
        TDMAEN OFFSET(22) NUMBITS(1) [],
        TFIFOFL OFFSET(24) NUMBITS(1) [],
        TFERI OFFSET(25) NUMBITS(1) [],
        TSRFULLF OFFSET(26) NUMBITS(1) []
    ]
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Rx,
    Tx,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopBits {
    Half = 0,
    One = 1,
    OneAndHalf = 2,
    Two = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Odd = 0,
    Even = 1,
    Mark = 2,
    Space = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataLength {
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    /// Nine bits with the ninth bit held in RBIT/TBIT
    NineFixed = 10,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loopback {
    Disabled,
    RxOnly,
    TxOnly,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    Off,
    StoreByte,
    GenerateFrameError,
    StoreBit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoThreshold {
    One,
    Two,
    Four,
}

/// IrDA transmit pulse width, as a fraction of a bit period
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IrdaPulseWidth {
    OneSixteenth = 0,
    OneEighth = 1,
    ThreeSixteenths = 2,
    OneQuarter = 3,
}

impl Direction {
    fn pick(
        self,
        rx: FieldValue<u32, CONFIG::Register>,
        tx: FieldValue<u32, CONFIG::Register>,
    ) -> FieldValue<u32, CONFIG::Register> {
        match self {
            Direction::Rx => rx,
            Direction::Tx => tx,
        }
    }

    fn stop_mode(self) -> Field<u32, CONFIG::Register> {
        match self {
            Direction::Rx => CONFIG::RSTPMD,
            Direction::Tx => CONFIG::TSTPMD,
        }
    }

    fn parity_mode(self) -> Field<u32, CONFIG::Register> {
        match self {
            Direction::Rx => CONFIG::RPARMD,
            Direction::Tx => CONFIG::TPARMD,
        }
    }

    fn data_length(self) -> Field<u32, CONFIG::Register> {
        match self {
            Direction::Rx => CONFIG::RDATLN,
            Direction::Tx => CONFIG::TDATLN,
        }
    }
}

pub struct Usart {
    registers: StaticRef<UsartRegisters>,
}

impl Usart {
    pub const fn new(base: StaticRef<UsartRegisters>) -> Self {
        Self { registers: base }
    }

    pub fn initialize(
        &self,
        config: u32,
        mode: u32,
        flowcn: u32,
        control: u32,
        ipdelay: u32,
        baudrate: u32,
        fifocn: u32,
    ) {
        let regs = &*self.registers;
        regs.config.set(config);
        regs.mode.set(mode);
        regs.flowcn.set(flowcn);
        regs.control.set(control);
        regs.ipdelay.set(ipdelay);
        regs.baudrate.set(baudrate);
        regs.fifocn.set(fifocn);
    }

    pub fn write_config(&self, config: u32) {
        self.registers.config.set(config);
    }

    pub fn read_config(&self) -> u32 {
        self.registers.config.get()
    }

    fn config_on(&self, field: FieldValue<u32, CONFIG::Register>) {
        self.registers.config_set.write(field);
    }

    fn config_off(&self, field: FieldValue<u32, CONFIG::Register>) {
        self.registers.config_clr.write(field);
    }

    fn config_select(&self, field: Field<u32, CONFIG::Register>, value: u32) {
        self.registers.config_clr.write(field.val(field.mask));
        self.registers.config_set.write(field.val(value));
    }

    // Frame format

    pub fn enable_start_bit(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RSTRTEN::SET, CONFIG::TSTRTEN::SET));
    }

    pub fn disable_start_bit(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RSTRTEN::SET, CONFIG::TSTRTEN::SET));
    }

    pub fn enable_parity_bit(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RPAREN::SET, CONFIG::TPAREN::SET));
    }

    pub fn disable_parity_bit(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RPAREN::SET, CONFIG::TPAREN::SET));
    }

    pub fn enable_stop_bit(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RSTPEN::SET, CONFIG::TSTPEN::SET));
    }

    pub fn disable_stop_bit(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RSTPEN::SET, CONFIG::TSTPEN::SET));
    }

    pub fn select_stop_bits(&self, dir: Direction, bits: StopBits) {
        self.config_select(dir.stop_mode(), bits as u32);
    }

    pub fn select_parity(&self, dir: Direction, parity: Parity) {
        self.config_select(dir.parity_mode(), parity as u32);
    }

    /// RDATLN/TDATLN hold the length minus five.
    pub fn select_data_length(&self, dir: Direction, length: DataLength) {
        self.config_select(dir.data_length(), length as u32 - 5);
    }

    /// Smartcard parity response on receive, parity check on transmit.
    pub fn enable_smartcard(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RSCEN::SET, CONFIG::TSCEN::SET));
    }

    pub fn disable_smartcard(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RSCEN::SET, CONFIG::TSCEN::SET));
    }

    pub fn enable_irda_mode(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RIRDAEN::SET, CONFIG::TIRDAEN::SET));
    }

    pub fn disable_irda_mode(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RIRDAEN::SET, CONFIG::TIRDAEN::SET));
    }

    pub fn enable_signal_inversion(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RINVEN::SET, CONFIG::TINVEN::SET));
    }

    pub fn disable_signal_inversion(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RINVEN::SET, CONFIG::TINVEN::SET));
    }

    pub fn select_synchronous_mode(&self, dir: Direction) {
        self.config_on(dir.pick(CONFIG::RSYNCEN::SET, CONFIG::TSYNCEN::SET));
    }

    pub fn select_asynchronous_mode(&self, dir: Direction) {
        self.config_off(dir.pick(CONFIG::RSYNCEN::SET, CONFIG::TSYNCEN::SET));
    }

    // Mode

    pub fn write_mode(&self, mode: u32) {
        self.registers.mode.set(mode);
    }

    pub fn read_mode(&self) -> u32 {
        self.registers.mode.get()
    }

    pub fn enable_stall_in_debug_mode(&self) {
        self.registers.mode_set.write(MODE::DBGMD::Halt);
    }

    pub fn disable_stall_in_debug_mode(&self) {
        self.registers.mode_clr.write(MODE::DBGMD::SET);
    }

    pub fn select_loopback(&self, loopback: Loopback) {
        self.registers.mode_clr.write(MODE::LBMD::Both);
        match loopback {
            Loopback::Disabled => {}
            Loopback::RxOnly => self.registers.mode_set.write(MODE::LBMD::RxOnly),
            Loopback::TxOnly => self.registers.mode_set.write(MODE::LBMD::TxOnly),
            Loopback::Both => self.registers.mode_set.write(MODE::LBMD::Both),
        }
    }

    pub fn enable_master_clock_during_start(&self) {
        self.registers.mode_set.write(MODE::STRTSTCLK::SET);
    }

    pub fn disable_master_clock_during_start(&self) {
        self.registers.mode_clr.write(MODE::STRTSTCLK::SET);
    }

    pub fn enable_master_clock_during_stop(&self) {
        self.registers.mode_set.write(MODE::STPSTCLK::SET);
    }

    pub fn disable_master_clock_during_stop(&self) {
        self.registers.mode_clr.write(MODE::STPSTCLK::SET);
    }

    pub fn enable_master_clock_between_transfers(&self) {
        self.registers.mode_set.write(MODE::ISTCLK::SET);
    }

    pub fn disable_master_clock_between_transfers(&self) {
        self.registers.mode_clr.write(MODE::ISTCLK::SET);
    }

    pub fn enter_half_duplex_mode(&self) {
        self.registers.mode_set.write(MODE::DUPLEXMD::HalfDuplex);
    }

    pub fn enter_full_duplex_mode(&self) {
        self.registers.mode_clr.write(MODE::DUPLEXMD::SET);
    }

    pub fn select_sync_clock_low_during_idle(&self) {
        self.registers.mode_clr.write(MODE::CLKIDLE::SET);
    }

    pub fn select_sync_clock_high_during_idle(&self) {
        self.registers.mode_set.write(MODE::CLKIDLE::IdleHigh);
    }

    pub fn select_clock_edge_falling(&self) {
        self.registers.mode_clr.write(MODE::CLKESEL::SET);
    }

    pub fn select_clock_edge_rising(&self) {
        self.registers.mode_set.write(MODE::CLKESEL::Rising);
    }

    pub fn enable_idle_tristate(&self) {
        self.registers.mode_set.write(MODE::ITSEN::SET);
    }

    pub fn disable_idle_tristate(&self) {
        self.registers.mode_clr.write(MODE::ITSEN::SET);
    }

    pub fn enter_master_mode(&self) {
        self.registers.mode_set.write(MODE::OPMD::Master);
    }

    pub fn enter_slave_mode(&self) {
        self.registers.mode_clr.write(MODE::OPMD::SET);
    }

    // Flow control and pins

    pub fn write_flowcn(&self, flowcn: u32) {
        self.registers.flowcn.set(flowcn);
    }

    pub fn read_flowcn(&self) -> u32 {
        self.registers.flowcn.get()
    }

    pub fn set_rts(&self) {
        self.registers.flowcn_set.write(FLOWCN::RTS::SET);
    }

    pub fn clear_rts(&self) {
        self.registers.flowcn_clr.write(FLOWCN::RTS::SET);
    }

    pub fn read_rts_output(&self) -> bool {
        self.registers.flowcn.is_set(FLOWCN::RTS)
    }

    pub fn read_rx_input(&self) -> bool {
        self.registers.flowcn.is_set(FLOWCN::RX)
    }

    pub fn enable_rts_inversion(&self) {
        self.registers.flowcn_set.write(FLOWCN::RTSINVEN::SET);
    }

    pub fn disable_rts_inversion(&self) {
        self.registers.flowcn_clr.write(FLOWCN::RTSINVEN::SET);
    }

    pub fn select_rts_deassert_on_full(&self) {
        self.registers.flowcn_clr.write(FLOWCN::RTSTH::SET);
    }

    pub fn select_rts_deassert_on_byte_free(&self) {
        self.registers.flowcn_set.write(FLOWCN::RTSTH::OneByteFree);
    }

    pub fn enable_rts(&self) {
        self.registers.flowcn_set.write(FLOWCN::RTSEN::SET);
    }

    pub fn disable_rts(&self) {
        self.registers.flowcn_clr.write(FLOWCN::RTSEN::SET);
    }

    pub fn read_cts_input(&self) -> bool {
        self.registers.flowcn.is_set(FLOWCN::CTS)
    }

    pub fn read_tx_output(&self) -> bool {
        self.registers.flowcn.is_set(FLOWCN::TX)
    }

    pub fn set_tx(&self) {
        self.registers.flowcn_set.write(FLOWCN::TX::SET);
    }

    pub fn clear_tx(&self) {
        self.registers.flowcn_clr.write(FLOWCN::TX::SET);
    }

    pub fn set_sync_clock_high(&self) {
        self.registers.flowcn_set.write(FLOWCN::UCLK::SET);
    }

    pub fn set_sync_clock_low(&self) {
        self.registers.flowcn_clr.write(FLOWCN::UCLK::SET);
    }

    pub fn read_sync_clock(&self) -> bool {
        self.registers.flowcn.is_set(FLOWCN::UCLK)
    }

    pub fn enable_cts_inversion(&self) {
        self.registers.flowcn_set.write(FLOWCN::CTSINVEN::SET);
    }

    pub fn disable_cts_inversion(&self) {
        self.registers.flowcn_clr.write(FLOWCN::CTSINVEN::SET);
    }

    pub fn enable_cts(&self) {
        self.registers.flowcn_set.write(FLOWCN::CTSEN::SET);
    }

    pub fn disable_cts(&self) {
        self.registers.flowcn_clr.write(FLOWCN::CTSEN::SET);
    }

    pub fn select_tx_irda_pulse_width(&self, width: IrdaPulseWidth) {
        self.registers.flowcn_clr.write(FLOWCN::TIRDAPW::SET);
        self.registers
            .flowcn_set
            .write(FLOWCN::TIRDAPW.val(width as u32));
    }

    // Control: receiver

    pub fn write_control(&self, control: u32) {
        self.registers.control.set(control);
    }

    pub fn read_control(&self) -> u32 {
        self.registers.control.get()
    }

    pub fn is_rx_frame_error_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::RFRMERI)
    }

    pub fn clear_rx_frame_error_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::RFRMERI::SET);
    }

    pub fn is_rx_parity_error_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::RPARERI)
    }

    pub fn clear_rx_parity_error_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::RPARERI::SET);
    }

    pub fn is_rx_overrun_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::ROREI)
    }

    pub fn clear_rx_overrun_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::ROREI::SET);
    }

    pub fn is_rx_data_request_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::RDREQI)
    }

    pub fn clear_rx_data_request_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::RDREQI::SET);
    }

    /// Overrun, frame and parity error interrupts share one enable.
    pub fn enable_rx_error_interrupts(&self) {
        self.registers.control_set.write(CONTROL::RERIEN::SET);
    }

    pub fn disable_rx_error_interrupts(&self) {
        self.registers.control_clr.write(CONTROL::RERIEN::SET);
    }

    pub fn is_rx_error_interrupts_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::RERIEN)
    }

    pub fn enable_rx_data_request_interrupt(&self) {
        self.registers.control_set.write(CONTROL::RDREQIEN::SET);
    }

    pub fn disable_rx_data_request_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::RDREQIEN::SET);
    }

    pub fn is_rx_data_request_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::RDREQIEN)
    }

    pub fn select_match_mode(&self, mode: MatchMode) {
        self.registers.control_clr.write(CONTROL::MATMD::SET);
        match mode {
            MatchMode::Off => {}
            MatchMode::StoreByte => self.registers.control_set.write(CONTROL::MATMD::StoreByte),
            MatchMode::GenerateFrameError => {
                self.registers.control_set.write(CONTROL::MATMD::FrameError)
            }
            MatchMode::StoreBit => self.registers.control_set.write(CONTROL::MATMD::StoreBit),
        }
    }

    pub fn enable_rx_autobaud(&self) {
        self.registers.control_set.write(CONTROL::RABDEN::SET);
    }

    pub fn disable_rx_autobaud(&self) {
        self.registers.control_clr.write(CONTROL::RABDEN::SET);
    }

    pub fn is_rx_busy(&self) -> bool {
        self.registers.control.is_set(CONTROL::RBUSYF)
    }

    pub fn set_rx_bit(&self) {
        self.registers.control_set.write(CONTROL::RBIT::SET);
    }

    pub fn clear_rx_bit(&self) {
        self.registers.control_clr.write(CONTROL::RBIT::SET);
    }

    /// Ninth data bit (or match bit) of the last received frame.
    pub fn read_rx_bit(&self) -> bool {
        self.registers.control.is_set(CONTROL::RBIT)
    }

    pub fn enable_rx_one_shot(&self) {
        self.registers.control_set.write(CONTROL::ROSEN::SET);
    }

    pub fn disable_rx_one_shot(&self) {
        self.registers.control_clr.write(CONTROL::ROSEN::SET);
    }

    pub fn enable_rx_inhibit(&self) {
        self.registers.control_set.write(CONTROL::RINH::SET);
    }

    pub fn disable_rx_inhibit(&self) {
        self.registers.control_clr.write(CONTROL::RINH::SET);
    }

    pub fn enable_rx(&self) {
        self.registers.control_set.write(CONTROL::REN::SET);
    }

    pub fn disable_rx(&self) {
        self.registers.control_clr.write(CONTROL::REN::SET);
    }

    // Control: transmitter

    pub fn is_tx_smartcard_parity_error_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::TSCERI)
    }

    pub fn clear_tx_smartcard_parity_error_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TSCERI::SET);
    }

    pub fn is_tx_underrun_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::TUREI)
    }

    pub fn clear_tx_underrun_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TUREI::SET);
    }

    pub fn is_tx_data_request_interrupt_pending(&self) -> bool {
        self.registers.control.is_set(CONTROL::TDREQI)
    }

    pub fn is_tx_complete(&self) -> bool {
        self.registers.control.is_set(CONTROL::TCPTI)
    }

    pub fn clear_tx_complete_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TCPTI::SET);
    }

    pub fn select_tx_complete_threshold_end_of_transmission(&self) {
        self.registers.control_clr.write(CONTROL::TCPTTH::SET);
    }

    pub fn select_tx_complete_threshold_no_more_data(&self) {
        self.registers.control_set.write(CONTROL::TCPTTH::SetOnEmpty);
    }

    /// Underrun and smartcard parity error interrupts share one enable.
    pub fn enable_tx_error_interrupts(&self) {
        self.registers.control_set.write(CONTROL::TERIEN::SET);
    }

    pub fn disable_tx_error_interrupts(&self) {
        self.registers.control_clr.write(CONTROL::TERIEN::SET);
    }

    pub fn is_tx_error_interrupts_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::TERIEN)
    }

    pub fn enable_tx_data_request_interrupt(&self) {
        self.registers.control_set.write(CONTROL::TDREQIEN::SET);
    }

    pub fn disable_tx_data_request_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TDREQIEN::SET);
    }

    pub fn is_tx_data_request_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::TDREQIEN)
    }

    pub fn enable_tx_complete_interrupt(&self) {
        self.registers.control_set.write(CONTROL::TCPTIEN::SET);
    }

    pub fn disable_tx_complete_interrupt(&self) {
        self.registers.control_clr.write(CONTROL::TCPTIEN::SET);
    }

    pub fn is_tx_complete_interrupt_enabled(&self) -> bool {
        self.registers.control.is_set(CONTROL::TCPTIEN)
    }

    pub fn is_tx_busy(&self) -> bool {
        self.registers.control.is_set(CONTROL::TBUSYF)
    }

    pub fn set_tx_bit(&self) {
        self.registers.control_set.write(CONTROL::TBIT::SET);
    }

    pub fn clear_tx_bit(&self) {
        self.registers.control_clr.write(CONTROL::TBIT::SET);
    }

    pub fn read_tx_bit(&self) -> bool {
        self.registers.control.is_set(CONTROL::TBIT)
    }

    pub fn enable_tx_inhibit(&self) {
        self.registers.control_set.write(CONTROL::TINH::SET);
    }

    pub fn disable_tx_inhibit(&self) {
        self.registers.control_clr.write(CONTROL::TINH::SET);
    }

    pub fn enable_tx(&self) {
        self.registers.control_set.write(CONTROL::TEN::SET);
    }

    pub fn disable_tx(&self) {
        self.registers.control_clr.write(CONTROL::TEN::SET);
    }

    // Timing

    pub fn write_ipdelay(&self, ipdelay: u32) {
        self.registers.ipdelay.set(ipdelay);
    }

    pub fn read_ipdelay(&self) -> u32 {
        self.registers.ipdelay.get()
    }

    /// Idle time inserted between transmitted frames, in bit periods.
    pub fn set_inter_packet_delay(&self, delay: u8) {
        self.registers
            .ipdelay
            .modify(IPDELAY::IPDELAY.val(delay as u32));
    }

    pub fn inter_packet_delay(&self) -> u8 {
        self.registers.ipdelay.read(IPDELAY::IPDELAY) as u8
    }

    pub fn write_baudrate(&self, baudrate: u32) {
        self.registers.baudrate.set(baudrate);
    }

    pub fn read_baudrate(&self) -> u32 {
        self.registers.baudrate.get()
    }

    pub fn set_rx_baudrate(&self, rbaud: u16) {
        self.registers
            .baudrate
            .modify(BAUDRATE::RBAUD.val(rbaud as u32));
    }

    pub fn set_tx_baudrate(&self, tbaud: u16) {
        self.registers
            .baudrate
            .modify(BAUDRATE::TBAUD.val(tbaud as u32));
    }

    // FIFOs

    pub fn write_fifocn(&self, fifocn: u32) {
        self.registers.fifocn.set(fifocn);
    }

    pub fn read_fifocn(&self) -> u32 {
        self.registers.fifocn.get()
    }

    pub fn read_rx_fifo_count(&self) -> u32 {
        self.registers.fifocn.read(FIFOCN::RCNT)
    }

    pub fn read_tx_fifo_count(&self) -> u32 {
        self.registers.fifocn.read(FIFOCN::TCNT)
    }

    pub fn select_rx_fifo_threshold(&self, threshold: FifoThreshold) {
        self.registers.fifocn_clr.write(FIFOCN::RFTH::SET);
        match threshold {
            FifoThreshold::One => {}
            FifoThreshold::Two => self.registers.fifocn_set.write(FIFOCN::RFTH::Two),
            FifoThreshold::Four => self.registers.fifocn_set.write(FIFOCN::RFTH::Four),
        }
    }

    /// Number of free FIFO slots that raises a transmit data request.
    pub fn select_tx_fifo_threshold(&self, threshold: FifoThreshold) {
        self.registers.fifocn_clr.write(FIFOCN::TFTH::SET);
        match threshold {
            FifoThreshold::One => {}
            FifoThreshold::Two => self.registers.fifocn_set.write(FIFOCN::TFTH::Two),
            FifoThreshold::Four => self.registers.fifocn_set.write(FIFOCN::TFTH::Four),
        }
    }

    pub fn enable_rx_fifo_dma_request(&self) {
        self.registers.fifocn_set.write(FIFOCN::RDMAEN::SET);
    }

    pub fn disable_rx_fifo_dma_request(&self) {
        self.registers.fifocn_clr.write(FIFOCN::RDMAEN::SET);
    }

    pub fn enable_tx_fifo_dma_request(&self) {
        self.registers.fifocn_set.write(FIFOCN::TDMAEN::SET);
    }

    pub fn disable_tx_fifo_dma_request(&self) {
        self.registers.fifocn_clr.write(FIFOCN::TDMAEN::SET);
    }

    pub fn flush_rx_fifo(&self) {
        self.registers.fifocn_set.write(FIFOCN::RFIFOFL::SET);
    }

    pub fn flush_tx_fifo(&self) {
        self.registers.fifocn_set.write(FIFOCN::TFIFOFL::SET);
    }

    pub fn is_rx_fifo_error_interrupt_pending(&self) -> bool {
        self.registers.fifocn.is_set(FIFOCN::RFERI)
    }

    pub fn clear_rx_fifo_error_interrupt(&self) {
        self.registers.fifocn_clr.write(FIFOCN::RFERI::SET);
    }

    pub fn is_tx_fifo_error_interrupt_pending(&self) -> bool {
        self.registers.fifocn.is_set(FIFOCN::TFERI)
    }

    pub fn clear_tx_fifo_error_interrupt(&self) {
        self.registers.fifocn_clr.write(FIFOCN::TFERI::SET);
    }

    pub fn is_rx_shift_register_full(&self) -> bool {
        self.registers.fifocn.is_set(FIFOCN::RSRFULLF)
    }

    pub fn is_tx_shift_register_full(&self) -> bool {
        self.registers.fifocn.is_set(FIFOCN::TSRFULLF)
    }

    // Data
    //
    // The FIFO pops or pushes one entry per access, sized by the access
    // width, so byte and halfword accesses must not be widened to a word.

    fn data_ptr(&self) -> *mut u32 {
        &self.registers.data as *const ReadWrite<u32> as *mut u32
    }

    pub fn write_data_u32(&self, data: u32) {
        self.registers.data.set(data);
    }

    pub fn write_data_u16(&self, data: u16) {
        // SAFETY: DATA accepts halfword accesses at its base address.
        unsafe { ptr::write_volatile(self.data_ptr() as *mut u16, data) }
    }

    pub fn write_data_u8(&self, data: u8) {
        // SAFETY: DATA accepts byte accesses at its base address.
        unsafe { ptr::write_volatile(self.data_ptr() as *mut u8, data) }
    }

    pub fn read_data_u32(&self) -> u32 {
        self.registers.data.get()
    }

    pub fn read_data_u16(&self) -> u16 {
        // SAFETY: DATA accepts halfword accesses at its base address.
        unsafe { ptr::read_volatile(self.data_ptr() as *const u16) }
    }

    pub fn read_data_u8(&self) -> u8 {
        // SAFETY: DATA accepts byte accesses at its base address.
        unsafe { ptr::read_volatile(self.data_ptr() as *const u8) }
    }

    /// Write a buffer byte by byte while the transmit FIFO has room.
    /// Returns how many bytes were queued.
    pub fn fill_tx_fifo(&self, buf: &[u8]) -> usize {
        let mut sent = 0;
        for &byte in buf {
            if self.read_tx_fifo_count() >= TX_FIFO_DEPTH {
                break;
            }
            self.write_data_u8(byte);
            sent += 1;
        }
        sent
    }

    /// Load both baud dividers with a single write to BAUDRATE.
    pub fn set_baudrate(&self, rbaud: u32, tbaud: u32) -> Result<(), ErrorCode> {
        bounds::fits("usart rx baud divider", rbaud, 16)?;
        bounds::fits("usart tx baud divider", tbaud, 16)?;
        self.registers
            .baudrate
            .write(BAUDRATE::RBAUD.val(rbaud) + BAUDRATE::TBAUD.val(tbaud));
        Ok(())
    }
}

/// Entries in each USART FIFO.
pub const TX_FIFO_DEPTH: u32 = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_regs::FakeRegs;

    const CONFIG_SET: usize = 0x04;
    const CONFIG_CLR: usize = 0x08;
    const MODE_SET: usize = 0x14;
    const MODE_CLR: usize = 0x18;
    const CONTROL_OFF: usize = 0x30;
    const CONTROL_SET: usize = 0x34;
    const CONTROL_CLR: usize = 0x38;
    const FIFOCN_OFF: usize = 0x60;
    const FIFOCN_SET: usize = 0x64;
    const DATA: usize = 0x70;

    #[test]
    fn frame_format_by_direction() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);

        usart.select_data_length(Direction::Rx, DataLength::Eight);
        assert_eq!(fake.word(CONFIG_CLR), 0b111 << 8);
        assert_eq!(fake.word(CONFIG_SET), 3 << 8);

        usart.select_data_length(Direction::Tx, DataLength::NineFixed);
        assert_eq!(fake.word(CONFIG_CLR), 0b111 << 24);
        assert_eq!(fake.word(CONFIG_SET), 5 << 24);

        usart.select_stop_bits(Direction::Tx, StopBits::Two);
        assert_eq!(fake.word(CONFIG_CLR), 0b11 << 19);
        assert_eq!(fake.word(CONFIG_SET), 3 << 19);

        usart.select_parity(Direction::Rx, Parity::Mark);
        assert_eq!(fake.word(CONFIG_SET), 2 << 5);

        usart.select_synchronous_mode(Direction::Tx);
        assert_eq!(fake.word(CONFIG_SET), 1 << 27);
        usart.disable_irda_mode(Direction::Rx);
        assert_eq!(fake.word(CONFIG_CLR), 1 << 13);
    }

    #[test]
    fn mode_selects() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);

        usart.select_loopback(Loopback::TxOnly);
        assert_eq!(fake.word(MODE_CLR), 0b11 << 18);
        assert_eq!(fake.word(MODE_SET), 2 << 18);

        usart.enter_master_mode();
        assert_eq!(fake.word(MODE_SET), 1 << 31);
        usart.disable_stall_in_debug_mode();
        assert_eq!(fake.word(MODE_CLR), 1 << 16);
    }

    #[test]
    fn control_flags() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);

        fake.poke(CONTROL_OFF, (1 << 2) | (1 << 19) | (1 << 27));
        assert!(usart.is_rx_overrun_interrupt_pending());
        assert!(!usart.is_rx_frame_error_interrupt_pending());
        assert!(usart.is_tx_complete());
        assert!(usart.is_tx_busy());
        assert!(!usart.is_rx_busy());

        usart.clear_tx_complete_interrupt();
        assert_eq!(fake.word(CONTROL_CLR), 1 << 19);

        usart.select_match_mode(MatchMode::GenerateFrameError);
        assert_eq!(fake.word(CONTROL_CLR), 0b11 << 8);
        assert_eq!(fake.word(CONTROL_SET), 2 << 8);

        usart.enable_tx();
        assert_eq!(fake.word(CONTROL_SET), 1 << 31);
    }

    #[test]
    fn timing_and_fifos() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);

        usart.set_inter_packet_delay(0x40);
        assert_eq!(usart.read_ipdelay(), 0x40 << 16);

        usart.set_rx_baudrate(0x1111);
        usart.set_tx_baudrate(0x2222);
        assert_eq!(usart.read_baudrate(), 0x2222_1111);
        assert_eq!(usart.set_baudrate(0x1_0000, 0), Err(ErrorCode::INVAL));

        usart.select_tx_fifo_threshold(FifoThreshold::Four);
        assert_eq!(fake.word(FIFOCN_SET), 2 << 20);
        usart.flush_rx_fifo();
        assert_eq!(fake.word(FIFOCN_SET), 1 << 8);

        fake.poke(FIFOCN_OFF, (3 << 16) | 2);
        assert_eq!(usart.read_tx_fifo_count(), 3);
        assert_eq!(usart.read_rx_fifo_count(), 2);
    }

    #[test]
    fn data_access_widths() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);

        fake.poke(DATA, 0xFFFF_FFFF);
        usart.write_data_u8(0x5A);
        assert_eq!(fake.word(DATA), 0xFFFF_FF5A);
        usart.write_data_u16(0x1234);
        assert_eq!(fake.word(DATA), 0xFFFF_1234);
        assert_eq!(usart.read_data_u8(), 0x34);
        assert_eq!(usart.read_data_u16(), 0x1234);
        usart.write_data_u32(0xCAFE_F00D);
        assert_eq!(usart.read_data_u32(), 0xCAFE_F00D);
    }

    #[test]
    fn fill_stops_at_full_fifo() {
        let fake = FakeRegs::<UsartRegisters>::new();
        let usart = Usart::new(fake.regs);
        assert_eq!(usart.fill_tx_fifo(b"hi"), 2);
        fake.poke(FIFOCN_OFF, TX_FIFO_DEPTH << 16);
        assert_eq!(usart.fill_tx_fifo(b"hi"), 0);
    }
}
