// Licensed under the Apache-2.0 license
// Generated by xtask reg-gen. Do not edit.

use bitfield::bitfield;

bitfield! {
    /// GPIO3 IO Pin Configuration
    ///
    /// # Address
    ///
    /// The address of this register is 0x00
    #[derive(Clone, Copy)]
    pub struct Iocfg3(u8);

    /// Analog transfer enable
    ///
    /// # Values
    ///
    /// - 0b: Standard digital pad
    /// - 1b: Pad in analog mode (digital GPIO input and output disabled)
    ///
    /// The default value is 0x00
    pub gpio3_atran, set_gpio3_atran: 7;

    /// Invert output enable
    ///
    /// # Values
    ///
    /// - 0b: Invert output disabled
    /// - 1b: Invert output enable
    ///
    /// The default value is 0x00
    pub gpio3_inv, set_gpio3_inv: 6;

    /// Output selection. Default: PKT_SYNC_RXTX
    pub gpio3_cfg, set_gpio3_cfg: 5, 0;
}

impl Default for Iocfg3 {
    fn default() -> Self {
        Self(0x06)
    }
}

bitfield! {
    /// Sync Word Configuration [31:24]
    ///
    /// # Address
    ///
    /// The address of this register is 0x04
    #[derive(Clone, Copy)]
    pub struct Sync3(u8);

    /// Sync word [31:24]
    pub sync31_24, set_sync31_24: 7, 0;
}

impl Default for Sync3 {
    fn default() -> Self {
        Self(0x93)
    }
}

bitfield! {
    /// Sync Word Detection Configuration Reg. 0
    ///
    /// # Address
    ///
    /// The address of this register is 0x09
    #[derive(Clone, Copy)]
    pub struct SyncCfg0(u8);

    pub sync_cfg0_not_used, _: 7, 6;

    /// Auto clear enable. Auto clear of symbol rate offset estimate when TOC_CFG.TOC_LIMIT != 0 and MDMCFG1.CARRIER_SENSE_GATE = 1
    ///
    /// # Values
    ///
    /// - 0b: Auto clear disabled
    /// - 1b: Auto clear enabled
    ///
    /// The default value is 0x00
    pub auto_clear, set_auto_clear: 5;

    /// Receiver configuration limitation. When this bit is set, RX filter BW must be less than 1500 kHz.
    /// When RX_CONFIG_LIMITATION = 1 the AGC_CFG1.AGC_WIN_SIZE should be incremented by 1
    ///
    /// # Values
    ///
    /// - 0b: Symbol Rate <= RX Filter BW/2
    /// - 1b: Symbol Rate <= RX Filter BW
    ///
    /// The default value is 0x00
    pub rx_config_limitation, set_rx_config_limitation: 4;

    /// PQT gating enable
    ///
    /// # Values
    ///
    /// - 0b: PQT gating disabled
    /// - 1b: PQT gating enabled
    ///
    /// The default value is 0x00
    pub pqt_gating_en, set_pqt_gating_en: 3;

    /// External sync detect can be used in blind mode to make the receiver change modem parameters after a sync word has been detected by the MCU
    pub ext_sync_detect, set_ext_sync_detect: 2;

    /// Strict sync word bit check
    ///
    /// # Values
    ///
    /// - 00b: Strict sync word check level 1
    /// - 01b: Strict sync word check level 2
    /// - 10b: Strict sync word check level 3
    /// - 11b: Strict sync word check disabled
    ///
    /// The default value is 0x03
    pub strict_sync_check, set_strict_sync_check: 1, 0;
}

impl Default for SyncCfg0 {
    fn default() -> Self {
        Self(0x03)
    }
}

bitfield! {
    /// FIFO Configuration
    ///
    /// # Address
    ///
    /// The address of this register is 0x1D
    #[derive(Clone, Copy)]
    pub struct FifoCfg(u8);

    /// Automatically flushes the last packet received in the RX FIFO if a CRC error occurred
    pub crc_autoflush, set_crc_autoflush: 7;

    /// Threshold value for the RX and TX FIFO
    pub fifo_thr, set_fifo_thr: 6, 0;
}

impl Default for FifoCfg {
    fn default() -> Self {
        Self(0x80)
    }
}

bitfield! {
    /// MARC State
    ///
    /// # Address
    ///
    /// The address of this register is 0x2F73
    #[derive(Clone, Copy)]
    pub struct Marcstate(u8);

    pub marcstate_not_used, _: 7;

    /// MARC 2 pin state value
    ///
    /// # Values
    ///
    /// - 00b: SETTLING
    /// - 01b: TX
    /// - 10b: IDLE
    /// - 11b: RX
    ///
    /// The default value is 0x02
    pub marc_2pin_state, _: 6, 5;

    pub marc_state, _: 4, 0;
}

impl Default for Marcstate {
    fn default() -> Self {
        Self(0x41)
    }
}

bitfield! {
    /// Frequency Offset Estimate MSB
    ///
    /// # Address
    ///
    /// The address of this register is 0x2F77
    #[derive(Clone, Copy)]
    pub struct FreqoffEst1(u8);

    /// Frequency offset estimate [15:8] MSB<BR/>
    /// Frequency Offset Estimate = FREOFF_EST*f_xosc/LO Divider/2^18.0 [Hz]. The value is in two's complement format
    pub freqoff_est_15_8, _: 7, 0;
}

impl Default for FreqoffEst1 {
    fn default() -> Self {
        Self(0x00)
    }
}
