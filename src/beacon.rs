//! Beacon fixed-field decoding
//!
//! Beacon and probe-response frames carry 12 bytes of fixed fields after the
//! header: timestamp (8), beacon interval (2), capability information (2).

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::error::{DecodeError, Result};

/// End of the fixed-field region: 24-byte header + 12 fixed bytes
pub const FIXED_FIELDS_END: usize = 36;

const INTERVAL_OFFSET: usize = 32;
const CAPABILITY_OFFSET: usize = 34;

/// Privacy bit of the capability field
const CAPABILITY_PRIVACY: u16 = 0x0010;

/// Beacon interval and capability bits from the fixed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeaconCapability {
    /// Advertised beacon interval in time units
    pub beacon_interval: u16,
    /// Raw capability information word
    pub capabilities: u16,
    /// Privacy bit: the network requires encryption
    pub privacy_enabled: bool,
}

impl BeaconCapability {
    /// Parse the fixed fields of a beacon or probe-response frame.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        if payload.len() < FIXED_FIELDS_END {
            return Err(DecodeError::too_short(FIXED_FIELDS_END, payload.len()));
        }

        let beacon_interval = LittleEndian::read_u16(&payload[INTERVAL_OFFSET..INTERVAL_OFFSET + 2]);
        let capabilities = LittleEndian::read_u16(&payload[CAPABILITY_OFFSET..CAPABILITY_OFFSET + 2]);

        Ok(Self {
            beacon_interval,
            capabilities,
            privacy_enabled: capabilities & CAPABILITY_PRIVACY != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_fields() {
        let mut frame = vec![0u8; 36];
        frame[32] = 0x64; // interval 100, little endian
        frame[33] = 0x00;
        frame[34] = 0x11; // ESS + privacy
        frame[35] = 0x00;

        let caps = BeaconCapability::parse(&frame).unwrap();
        assert_eq!(caps.beacon_interval, 100);
        assert_eq!(caps.capabilities, 0x0011);
        assert!(caps.privacy_enabled);
    }

    #[test]
    fn test_privacy_clear() {
        let mut frame = vec![0u8; 36];
        frame[34] = 0x01;
        let caps = BeaconCapability::parse(&frame).unwrap();
        assert!(!caps.privacy_enabled);
    }

    #[test]
    fn test_short_frame_rejected() {
        let frame = vec![0u8; 35];
        assert_eq!(
            BeaconCapability::parse(&frame).unwrap_err(),
            DecodeError::too_short(36, 35)
        );
    }
}
