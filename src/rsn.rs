//! RSN information element decoding
//!
//! The Robust Security Network element (tag 0x30) advertises the cipher
//! suites and authentication methods a network supports. Suite selectors are
//! decoded structurally: counts first, then a sized walk over each suite
//! list, every step bounds-checked against the element value.

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::elements::{find_element, TAG_RSN};
use crate::error::{DecodeError, Result};

/// Cipher suite selector (last byte of the 00-0F-AC suite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CipherSuite {
    /// Use the group cipher (selector 0)
    UseGroup,
    /// WEP-40 (selector 1)
    Wep40,
    /// TKIP (selector 2)
    Tkip,
    /// CCMP-128, the WPA2 AES mode (selector 4)
    Ccmp128,
    /// WEP-104 (selector 5)
    Wep104,
    /// GCMP-128 (selector 8)
    Gcmp128,
    /// GCMP-256 (selector 9)
    Gcmp256,
    /// CCMP-256 (selector 10)
    Ccmp256,
    /// Any other selector, preserved for reporting
    Unknown(u8),
}

impl CipherSuite {
    /// Map a suite selector byte to its cipher.
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            0 => Self::UseGroup,
            1 => Self::Wep40,
            2 => Self::Tkip,
            4 => Self::Ccmp128,
            5 => Self::Wep104,
            8 => Self::Gcmp128,
            9 => Self::Gcmp256,
            10 => Self::Ccmp256,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UseGroup => write!(f, "Group"),
            Self::Wep40 => write!(f, "WEP-40"),
            Self::Tkip => write!(f, "TKIP"),
            Self::Ccmp128 => write!(f, "CCMP-128 (AES)"),
            Self::Wep104 => write!(f, "WEP-104"),
            Self::Gcmp128 => write!(f, "GCMP-128"),
            Self::Gcmp256 => write!(f, "GCMP-256"),
            Self::Ccmp256 => write!(f, "CCMP-256"),
            Self::Unknown(selector) => write!(f, "Unknown (0x{:02X})", selector),
        }
    }
}

/// Authentication and key management suite selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AkmSuite {
    /// 802.1X / EAP (selector 1)
    Eap,
    /// Pre-shared key, WPA2-PSK (selector 2)
    Psk,
    /// Fast-transition EAP (selector 3)
    FtEap,
    /// Fast-transition PSK (selector 4)
    FtPsk,
    /// EAP with SHA-256 (selector 5)
    EapSha256,
    /// PSK with SHA-256 (selector 6)
    PskSha256,
    /// Simultaneous Authentication of Equals, WPA3 (selector 8)
    Sae,
    /// Fast-transition SAE (selector 9)
    FtSae,
    /// Any other selector, preserved for reporting
    Unknown(u8),
}

impl AkmSuite {
    /// Map a suite selector byte to its AKM.
    pub fn from_selector(selector: u8) -> Self {
        match selector {
            1 => Self::Eap,
            2 => Self::Psk,
            3 => Self::FtEap,
            4 => Self::FtPsk,
            5 => Self::EapSha256,
            6 => Self::PskSha256,
            8 => Self::Sae,
            9 => Self::FtSae,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for AkmSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eap => write!(f, "802.1X (EAP)"),
            Self::Psk => write!(f, "PSK (WPA2-PSK)"),
            Self::FtEap => write!(f, "FT-EAP"),
            Self::FtPsk => write!(f, "FT-PSK"),
            Self::EapSha256 => write!(f, "EAP-SHA256"),
            Self::PskSha256 => write!(f, "PSK-SHA256"),
            Self::Sae => write!(f, "SAE (WPA3)"),
            Self::FtSae => write!(f, "FT-SAE"),
            Self::Unknown(selector) => write!(f, "Unknown (0x{:02X})", selector),
        }
    }
}

/// Decoded RSN element: group cipher plus every advertised pairwise cipher
/// and AKM suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsnInfo {
    /// RSN version field
    pub version: u16,
    /// Group (multicast) cipher suite
    pub group_cipher: CipherSuite,
    /// All advertised pairwise cipher suites
    pub pairwise_ciphers: Vec<CipherSuite>,
    /// All advertised AKM suites
    pub akm_suites: Vec<AkmSuite>,
}

impl RsnInfo {
    /// Decode an RSN element value.
    ///
    /// Layout: version (2, LE) + group suite (OUI + selector, 4) + pairwise
    /// count (2, LE) + pairwise suites (4 each) + AKM count (2, LE) + AKM
    /// suites (4 each). A value shorter than its declared structure fails
    /// with [`DecodeError::Malformed`]; nothing past the value is read.
    pub fn parse(value: &[u8]) -> Result<Self> {
        if value.len() < 6 {
            return Err(DecodeError::malformed(
                "RSN element shorter than version and group suite",
            ));
        }

        let version = LittleEndian::read_u16(&value[0..2]);
        // Suite selector is the 4th byte, after the 3-byte OUI.
        let group_cipher = CipherSuite::from_selector(value[5]);
        let mut pos = 6;

        let pairwise_ciphers = read_suite_list(value, &mut pos, "pairwise cipher")?
            .iter()
            .map(|&s| CipherSuite::from_selector(s))
            .collect();

        let akm_suites = read_suite_list(value, &mut pos, "AKM")?
            .iter()
            .map(|&s| AkmSuite::from_selector(s))
            .collect();

        Ok(Self {
            version,
            group_cipher,
            pairwise_ciphers,
            akm_suites,
        })
    }
}

/// Read a count-prefixed suite list, returning the selector byte of each
/// 4-byte suite.
fn read_suite_list(value: &[u8], pos: &mut usize, what: &str) -> Result<Vec<u8>> {
    if *pos + 2 > value.len() {
        return Err(DecodeError::malformed(format!(
            "RSN element ends before {} count",
            what
        )));
    }
    let count = LittleEndian::read_u16(&value[*pos..*pos + 2]) as usize;
    *pos += 2;

    if *pos + count * 4 > value.len() {
        return Err(DecodeError::malformed(format!(
            "RSN element declares {} {} suites but is too short",
            count, what
        )));
    }

    let mut selectors = Vec::with_capacity(count);
    for _ in 0..count {
        selectors.push(value[*pos + 3]);
        *pos += 4;
    }
    Ok(selectors)
}

/// Find and decode the RSN element of a beacon/probe frame.
///
/// `Ok(None)` means no RSN element is present (an open or WPA1-only
/// network).
pub fn extract_rsn(payload: &[u8]) -> Result<Option<RsnInfo>> {
    match find_element(payload, TAG_RSN)? {
        Some(element) => RsnInfo::parse(element.value).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RSN value advertising WPA2-PSK with CCMP-128.
    fn wpa2_psk_ccmp() -> Vec<u8> {
        vec![
            0x01, 0x00, // version 1
            0x00, 0x0F, 0xAC, 0x04, // group: CCMP-128
            0x01, 0x00, // 1 pairwise cipher
            0x00, 0x0F, 0xAC, 0x04, // CCMP-128
            0x01, 0x00, // 1 AKM
            0x00, 0x0F, 0xAC, 0x02, // PSK
        ]
    }

    #[test]
    fn test_wpa2_psk_ccmp() {
        let info = RsnInfo::parse(&wpa2_psk_ccmp()).unwrap();
        assert_eq!(info.version, 1);
        assert_eq!(info.group_cipher, CipherSuite::Ccmp128);
        assert_eq!(info.pairwise_ciphers, vec![CipherSuite::Ccmp128]);
        assert_eq!(info.akm_suites, vec![AkmSuite::Psk]);
    }

    #[test]
    fn test_all_suites_decoded() {
        // Mixed-mode network: TKIP group, TKIP+CCMP pairwise, PSK+SAE.
        let value = vec![
            0x01, 0x00, //
            0x00, 0x0F, 0xAC, 0x02, // group: TKIP
            0x02, 0x00, // 2 pairwise ciphers
            0x00, 0x0F, 0xAC, 0x02, // TKIP
            0x00, 0x0F, 0xAC, 0x04, // CCMP-128
            0x02, 0x00, // 2 AKMs
            0x00, 0x0F, 0xAC, 0x02, // PSK
            0x00, 0x0F, 0xAC, 0x08, // SAE
        ];
        let info = RsnInfo::parse(&value).unwrap();
        assert_eq!(info.group_cipher, CipherSuite::Tkip);
        assert_eq!(
            info.pairwise_ciphers,
            vec![CipherSuite::Tkip, CipherSuite::Ccmp128]
        );
        assert_eq!(info.akm_suites, vec![AkmSuite::Psk, AkmSuite::Sae]);
    }

    #[test]
    fn test_unknown_selectors_preserved() {
        let mut value = wpa2_psk_ccmp();
        value[5] = 0x0D; // group selector
        value[11] = 0x0E; // pairwise selector
        value[17] = 0x55; // AKM selector
        let info = RsnInfo::parse(&value).unwrap();
        assert_eq!(info.group_cipher, CipherSuite::Unknown(0x0D));
        assert_eq!(info.pairwise_ciphers, vec![CipherSuite::Unknown(0x0E)]);
        assert_eq!(info.akm_suites, vec![AkmSuite::Unknown(0x55)]);
    }

    #[test]
    fn test_declared_count_past_end() {
        let mut value = wpa2_psk_ccmp();
        value[6] = 0x09; // claims 9 pairwise ciphers
        assert!(matches!(
            RsnInfo::parse(&value),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_value_below_minimum() {
        assert!(matches!(
            RsnInfo::parse(&[0x01, 0x00, 0x00]),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_from_frame() {
        let mut frame = vec![0u8; 36];
        frame[0] = 0x80;
        let rsn = wpa2_psk_ccmp();
        frame.push(TAG_RSN);
        frame.push(rsn.len() as u8);
        frame.extend_from_slice(&rsn);

        let info = extract_rsn(&frame).unwrap().unwrap();
        assert_eq!(info.akm_suites, vec![AkmSuite::Psk]);
    }

    #[test]
    fn test_extract_absent() {
        let frame = vec![0u8; 40];
        assert_eq!(extract_rsn(&frame).unwrap(), None);
    }
}
