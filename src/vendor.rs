//! MAC vendor resolution
//!
//! Maps the 3-octet OUI prefix of a MAC address to a manufacturer name via a
//! static prefix table. Unmatched prefixes are echoed back rather than
//! silently dropped.

use std::fmt;

use serde::Serialize;

use crate::frames::MacAddress;

/// Static OUI prefix table, scanned linearly with first match winning.
///
/// Small enough that a linear scan is fine; a keyed map would be the next
/// step if the table ever grows.
static OUI_TABLE: &[([u8; 3], &str)] = &[
    ([0x98, 0xDE, 0xD0], "TP-Link"),
    ([0xF4, 0xF5, 0xD8], "Huawei"),
    ([0xA4, 0x50, 0x46], "Xiaomi"),
    ([0xDC, 0xA6, 0x32], "Samsung"),
    ([0xFC, 0xFC, 0x48], "Apple"),
    ([0xA8, 0x9C, 0xED], "Apple"),
    ([0x3C, 0x5A, 0xB4], "Sony"),
    ([0x04, 0xD6, 0xAA], "Intel"),
    ([0x00, 0x1A, 0x11], "Cisco"),
    ([0x00, 0x17, 0x88], "Netgear"),
];

/// The first 3 octets of a MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OuiPrefix(pub [u8; 3]);

impl fmt::Display for OuiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}:{:02X}:{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

/// Result of a vendor lookup.
///
/// Each lookup returns an owned value; there is no shared scratch state, so
/// concurrent callers never observe each other's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VendorMatch {
    /// Prefix found in the table
    Known(&'static str),
    /// Prefix not in the table, echoed back for display
    Unknown(OuiPrefix),
}

impl VendorMatch {
    /// Vendor name, if the prefix matched
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown(_) => None,
        }
    }

    /// Check if the prefix matched the table
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for VendorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => write!(f, "{}", name),
            Self::Unknown(prefix) => write!(f, "Unknown ({})", prefix),
        }
    }
}

/// Resolve the manufacturer of a MAC address from its OUI prefix.
pub fn lookup_vendor(mac: &MacAddress) -> VendorMatch {
    let oui = mac.oui();
    OUI_TABLE
        .iter()
        .find(|(prefix, _)| *prefix == oui)
        .map(|(_, name)| VendorMatch::Known(name))
        .unwrap_or(VendorMatch::Unknown(OuiPrefix(oui)))
}
