//! 802.11 frame header classification
//!
//! Decodes the frame-control field of a captured frame into a closed
//! category/subtype pair and extracts the three header address fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};

/// MAC address (6 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Broadcast address (FF:FF:FF:FF:FF:FF)
    pub const BROADCAST: MacAddress = MacAddress([0xFF; 6]);

    /// Zero/null address
    pub const ZERO: MacAddress = MacAddress([0x00; 6]);

    /// Create from bytes
    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Create from slice (must be 6 bytes)
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != 6 {
            return Err(DecodeError::malformed(format!(
                "MAC address needs 6 bytes, got {}",
                slice.len()
            )));
        }
        let mut bytes = [0u8; 6];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// First 3 octets, the organizationally unique identifier
    pub fn oui(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Check if this is the broadcast address
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; 6]
    }

    /// Check if this is a multicast address (bit 0 of first octet set)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Check if this is a locally administered address (bit 1 of first octet set)
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({})", self)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(DecodeError::malformed(format!(
                "expected 6 octets separated by ':', got '{}'",
                s
            )));
        }

        let mut bytes = [0u8; 6];
        for (i, part) in parts.iter().enumerate() {
            bytes[i] = u8::from_str_radix(part, 16)
                .map_err(|_| DecodeError::malformed(format!("invalid hex octet: '{}'", part)))?;
        }

        Ok(Self(bytes))
    }
}

/// 802.11 frame category (2 bits of the frame-control field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameType {
    /// Management frames (beacons, probes, auth, deauth, etc.)
    Management,
    /// Control frames (ACK, RTS, CTS, etc.)
    Control,
    /// Data frames (actual payload, including EAPOL)
    Data,
    /// Reserved type value
    Unknown,
}

impl FrameType {
    /// Classify from the low byte of the frame-control field.
    ///
    /// Classification depends on byte 0 only; the rest of the frame never
    /// changes the category.
    pub fn from_fc0(fc0: u8) -> Self {
        match (fc0 >> 2) & 0x03 {
            0 => Self::Management,
            1 => Self::Control,
            2 => Self::Data,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Management => "Management",
            Self::Control => "Control",
            Self::Data => "Data",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Management frame subtype (4 bits of the frame-control field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameSubtype {
    /// Association Request (subtype 0)
    AssociationRequest,
    /// Association Response (subtype 1)
    AssociationResponse,
    /// Probe Request (subtype 4)
    ProbeRequest,
    /// Probe Response (subtype 5)
    ProbeResponse,
    /// Beacon (subtype 8)
    Beacon,
    /// Authentication (subtype 11)
    Authentication,
    /// Deauthentication (subtype 12)
    Deauthentication,
    /// Any other management subtype
    OtherManagement,
}

impl FrameSubtype {
    /// Classify from the low byte of the frame-control field.
    ///
    /// Only meaningful for management frames.
    pub fn from_fc0(fc0: u8) -> Self {
        match (fc0 >> 4) & 0x0F {
            0 => Self::AssociationRequest,
            1 => Self::AssociationResponse,
            4 => Self::ProbeRequest,
            5 => Self::ProbeResponse,
            8 => Self::Beacon,
            11 => Self::Authentication,
            12 => Self::Deauthentication,
            _ => Self::OtherManagement,
        }
    }
}

impl fmt::Display for FrameSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AssociationRequest => "Association Request",
            Self::AssociationResponse => "Association Response",
            Self::ProbeRequest => "Probe Request",
            Self::ProbeResponse => "Probe Response",
            Self::Beacon => "Beacon",
            Self::Authentication => "Authentication",
            Self::Deauthentication => "Deauthentication",
            Self::OtherManagement => "Management",
        };
        write!(f, "{}", name)
    }
}

/// Parsed 802.11 header: category, subtype, and the three address fields.
///
/// Address layout holds for standard three-address frames only; four-address
/// WDS frames are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    /// Frame category from the frame-control field
    pub frame_type: FrameType,
    /// Management subtype, present for management frames only
    pub subtype: Option<FrameSubtype>,
    /// Address 1 (destination), offset 4
    pub destination: MacAddress,
    /// Address 2 (source), offset 10
    pub source: MacAddress,
    /// Address 3 (BSSID), offset 16
    pub bssid: MacAddress,
}

impl FrameHeader {
    /// Minimum frame length for a full three-address header
    pub const MIN_LEN: usize = 24;

    const DST_OFFSET: usize = 4;
    const SRC_OFFSET: usize = 10;
    const BSSID_OFFSET: usize = 16;

    /// Parse the header of a captured frame.
    ///
    /// Fails with [`DecodeError::TooShort`] below the 24-byte floor; no byte
    /// past `payload.len()` is ever read.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        if payload.len() < Self::MIN_LEN {
            return Err(DecodeError::too_short(Self::MIN_LEN, payload.len()));
        }

        let fc0 = payload[0];
        let frame_type = FrameType::from_fc0(fc0);
        let subtype = match frame_type {
            FrameType::Management => Some(FrameSubtype::from_fc0(fc0)),
            _ => None,
        };

        Ok(Self {
            frame_type,
            subtype,
            destination: MacAddress::from_slice(&payload[Self::DST_OFFSET..Self::DST_OFFSET + 6])?,
            source: MacAddress::from_slice(&payload[Self::SRC_OFFSET..Self::SRC_OFFSET + 6])?,
            bssid: MacAddress::from_slice(&payload[Self::BSSID_OFFSET..Self::BSSID_OFFSET + 6])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_address_parse() {
        let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.0, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_address_display() {
        let mac = MacAddress([0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC]);
        assert_eq!(format!("{}", mac), "12:34:56:78:9A:BC");
    }

    #[test]
    fn test_mac_predicates() {
        assert!(MacAddress::BROADCAST.is_broadcast());
        assert!(MacAddress::BROADCAST.is_multicast());
        let randomized = MacAddress([0x02, 0x00, 0x00, 0x11, 0x22, 0x33]);
        assert!(randomized.is_locally_administered());
        assert!(!randomized.is_multicast());
    }

    #[test]
    fn test_frame_type_mapping() {
        assert_eq!(FrameType::from_fc0(0x80), FrameType::Management);
        assert_eq!(FrameType::from_fc0(0xB4), FrameType::Control);
        assert_eq!(FrameType::from_fc0(0x08), FrameType::Data);
        assert_eq!(FrameType::from_fc0(0x0C), FrameType::Unknown);
    }

    #[test]
    fn test_management_subtype_mapping() {
        assert_eq!(FrameSubtype::from_fc0(0x80), FrameSubtype::Beacon);
        assert_eq!(FrameSubtype::from_fc0(0x40), FrameSubtype::ProbeRequest);
        assert_eq!(FrameSubtype::from_fc0(0x50), FrameSubtype::ProbeResponse);
        assert_eq!(FrameSubtype::from_fc0(0x00), FrameSubtype::AssociationRequest);
        assert_eq!(FrameSubtype::from_fc0(0x10), FrameSubtype::AssociationResponse);
        assert_eq!(FrameSubtype::from_fc0(0xB0), FrameSubtype::Authentication);
        assert_eq!(FrameSubtype::from_fc0(0xC0), FrameSubtype::Deauthentication);
        assert_eq!(FrameSubtype::from_fc0(0x90), FrameSubtype::OtherManagement);
    }

    #[test]
    fn test_classification_ignores_frame_body() {
        // Same byte 0, different bodies: identical classification.
        let mut a = vec![0x80u8; 24];
        let mut b = vec![0x80u8; 64];
        a[1] = 0x00;
        b[1] = 0xFF;
        let ha = FrameHeader::parse(&a).unwrap();
        let hb = FrameHeader::parse(&b).unwrap();
        assert_eq!(ha.frame_type, hb.frame_type);
        assert_eq!(ha.subtype, hb.subtype);
    }

    #[test]
    fn test_header_addresses() {
        let mut frame = vec![0u8; 24];
        frame[0] = 0x80;
        frame[4..10].copy_from_slice(&[0xFF; 6]);
        frame[10..16].copy_from_slice(&[0x98, 0xDE, 0xD0, 0x01, 0x02, 0x03]);
        frame[16..22].copy_from_slice(&[0x98, 0xDE, 0xD0, 0x01, 0x02, 0x03]);

        let header = FrameHeader::parse(&frame).unwrap();
        assert!(header.destination.is_broadcast());
        assert_eq!(header.source.oui(), [0x98, 0xDE, 0xD0]);
        assert_eq!(header.source, header.bssid);
    }

    #[test]
    fn test_short_frame_rejected() {
        let frame = vec![0x80u8; 23];
        let err = FrameHeader::parse(&frame).unwrap_err();
        assert_eq!(err, DecodeError::too_short(24, 23));
    }
}
