//! # airlens
//!
//! Passive IEEE 802.11 frame decoder and security classifier.
//! Consumes raw link-layer frames captured in promiscuous mode and produces
//! structured records: frame type, per-address vendor identity, advertised
//! network name, RSN cipher/AKM parameters, and WPA2/WPA3 four-way
//! handshake progress.
//!
//! The crate is an analyzer, not a radio driver: capture delivery, channel
//! control, and output rendering to a terminal belong to the caller. Every
//! decode call is pure and bounds-checked; a truncated or malformed frame
//! degrades into a partial report instead of reading out of range.
//!
//! ## Example
//!
//! ```
//! use airlens::{decode, FrameDetail, SsidInfo};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A minimal beacon advertising "TestNet".
//! let mut frame = vec![0u8; 36];
//! frame[0] = 0x80;
//! frame.extend_from_slice(&[0x00, 0x07]);
//! frame.extend_from_slice(b"TestNet");
//!
//! let report = decode(&frame, 6, -40)?;
//! assert_eq!(report.kind(), "Beacon");
//! if let FrameDetail::Beacon(body) = &report.detail {
//!     assert_eq!(body.ssid.value(), Some(&SsidInfo::Named("TestNet".into())));
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod beacon;
pub mod decode;
pub mod eapol;
pub mod elements;
pub mod error;
pub mod frames;
pub mod render;
pub mod rsn;
pub mod vendor;

pub use beacon::BeaconCapability;
pub use decode::{decode, AddressReport, DecodedFrame, FrameDetail, ManagementDetail, RawFrame};
pub use eapol::{EapolKeyInfo, EapolMessage, EapolStatus};
pub use elements::{ElementScanner, InformationElement, SsidInfo};
pub use error::{DecodeError, Decoded, Result};
pub use frames::{FrameHeader, FrameSubtype, FrameType, MacAddress};
pub use render::{hex_dump, render_report};
pub use rsn::{AkmSuite, CipherSuite, RsnInfo};
pub use vendor::{lookup_vendor, OuiPrefix, VendorMatch};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
