//! EAPOL detection and four-way handshake classification
//!
//! WPA2/WPA3 key exchanges travel as EAPOL-Key frames inside 802.11 data
//! frames, behind an LLC/SNAP header. This module detects the encapsulation
//! and classifies which of the four handshake messages a frame carries from
//! the key-information bits.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use serde::Serialize;

use crate::error::{DecodeError, Result};

/// LLC/SNAP encapsulation of EtherType 0x888E (EAPOL)
pub const LLC_SNAP_EAPOL: [u8; 8] = [0xAA, 0xAA, 0x03, 0x00, 0x00, 0x00, 0x88, 0x8E];

/// Offset of the LLC/SNAP header in a non-QoS data frame
const LLC_OFFSET: usize = 24;

/// Offset of the EAPOL payload once the LLC/SNAP header matched
const EAPOL_OFFSET: usize = 32;

/// Minimum data frame length to hold the LLC/SNAP header and the start of
/// the EAPOL payload
pub const MIN_DATA_FRAME_LEN: usize = 40;

const KEY_INFO_INSTALL: u16 = 0x0040;
const KEY_INFO_ACK: u16 = 0x0080;
const KEY_INFO_MIC: u16 = 0x0100;
const KEY_INFO_SECURE: u16 = 0x0200;

/// Decoded key-information bits of an EAPOL-Key frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EapolKeyInfo {
    /// EAPOL packet type byte (3 = Key)
    pub descriptor_type: u8,
    /// Raw 16-bit key-information word
    pub key_info: u16,
    /// ACK bit, set by the authenticator in messages 1 and 3
    pub ack: bool,
    /// MIC bit, set when a message integrity code is present
    pub mic: bool,
    /// Install bit, set in message 3
    pub install: bool,
    /// Secure bit, distinguishes message 4 from message 2
    pub secure: bool,
}

impl EapolKeyInfo {
    /// Decode the fixed head of an EAPOL payload.
    ///
    /// Needs the packet type byte at offset 1 and the big-endian
    /// key-information word at offsets 5..7.
    pub fn parse(eapol: &[u8]) -> Result<Self> {
        if eapol.len() < 7 {
            return Err(DecodeError::too_short(7, eapol.len()));
        }

        let descriptor_type = eapol[1];
        let key_info = BigEndian::read_u16(&eapol[5..7]);

        Ok(Self {
            descriptor_type,
            key_info,
            ack: key_info & KEY_INFO_ACK != 0,
            mic: key_info & KEY_INFO_MIC != 0,
            install: key_info & KEY_INFO_INSTALL != 0,
            secure: key_info & KEY_INFO_SECURE != 0,
        })
    }

    /// Classify which handshake message these bits describe.
    ///
    /// Messages 2 and 4 share every bit except `secure`: message 2 is sent
    /// before the session is secured, message 4 after.
    pub fn message(&self) -> EapolMessage {
        if self.ack && !self.mic {
            EapolMessage::Message1
        } else if self.ack && self.mic && self.install {
            EapolMessage::Message3
        } else if !self.ack && self.mic && !self.secure {
            EapolMessage::Message2
        } else if !self.ack && self.mic && self.secure {
            EapolMessage::Message4
        } else {
            EapolMessage::Unrecognized
        }
    }
}

/// Position of a frame in the four-way handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EapolMessage {
    /// Message 1/4, ANonce from the authenticator
    Message1,
    /// Message 2/4, SNonce from the station
    Message2,
    /// Message 3/4, key install from the authenticator
    Message3,
    /// Message 4/4, final acknowledgment from the station
    Message4,
    /// Key-information bits match no handshake message
    Unrecognized,
}

impl fmt::Display for EapolMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Message1 => "Message 1/4 (ANonce from AP)",
            Self::Message2 => "Message 2/4 (SNonce from STA)",
            Self::Message3 => "Message 3/4",
            Self::Message4 => "Message 4/4",
            Self::Unrecognized => "Unknown EAPOL message",
        };
        write!(f, "{}", name)
    }
}

/// Result of inspecting a data frame for an EAPOL payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EapolStatus {
    /// The data frame carries something other than EAPOL
    NotEapol,
    /// An EAPOL-Key frame with its handshake classification
    Handshake {
        /// Decoded key-information bits
        key: EapolKeyInfo,
        /// Derived handshake message number
        message: EapolMessage,
    },
}

/// Inspect a data frame for an LLC/SNAP-encapsulated EAPOL payload.
///
/// Frames below the 40-byte floor fail with [`DecodeError::TooShort`]; a
/// non-matching LLC/SNAP header yields [`EapolStatus::NotEapol`] with no
/// further decoding.
pub fn classify_data_frame(payload: &[u8]) -> Result<EapolStatus> {
    if payload.len() < MIN_DATA_FRAME_LEN {
        return Err(DecodeError::too_short(MIN_DATA_FRAME_LEN, payload.len()));
    }

    if payload[LLC_OFFSET..LLC_OFFSET + 8] != LLC_SNAP_EAPOL {
        return Ok(EapolStatus::NotEapol);
    }

    let key = EapolKeyInfo::parse(&payload[EAPOL_OFFSET..])?;
    let message = key.message();
    log::trace!(
        "EAPOL key frame: key_info=0x{:04X}, {}",
        key.key_info,
        message
    );

    Ok(EapolStatus::Handshake { key, message })
}
