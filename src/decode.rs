//! Frame report assembly
//!
//! Ties the header classifier, vendor resolver, element extractors, and
//! EAPOL classifier together into one decoded record per captured frame.
//! Each decode call is a pure function of its input buffer; nothing is
//! retained across frames.

use serde::Serialize;

use crate::beacon::BeaconCapability;
use crate::eapol::{classify_data_frame, EapolStatus};
use crate::elements::{extract_ssid, SsidInfo};
use crate::error::{Decoded, Result};
use crate::frames::{FrameHeader, FrameSubtype, FrameType, MacAddress};
use crate::rsn::{extract_rsn, RsnInfo};
use crate::vendor::{lookup_vendor, VendorMatch};

/// A raw capture buffer with its radio metadata.
///
/// Borrowed by one decode call; the decoder never keeps a reference past
/// the call.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    /// Captured frame bytes, starting at the 802.11 header
    pub payload: &'a [u8],
    /// Channel the frame was captured on
    pub channel: u8,
    /// Received signal strength in dBm
    pub signal_dbm: i8,
}

impl<'a> RawFrame<'a> {
    /// Wrap a capture buffer with its metadata.
    pub fn new(payload: &'a [u8], channel: u8, signal_dbm: i8) -> Self {
        Self {
            payload,
            channel,
            signal_dbm,
        }
    }

    /// Decode this frame into a report.
    pub fn decode(&self) -> Result<DecodedFrame> {
        decode(self.payload, self.channel, self.signal_dbm)
    }
}

/// A MAC address paired with its resolved vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    /// The address itself
    pub mac: MacAddress,
    /// Vendor resolved from the address prefix
    pub vendor: VendorMatch,
}

impl AddressReport {
    fn resolve(mac: MacAddress) -> Self {
        Self {
            mac,
            vendor: lookup_vendor(&mac),
        }
    }
}

/// Sub-decodes of a beacon or probe-response body.
///
/// Each field fails independently: a truncated element list or a malformed
/// RSN element is reported in place while the other fields survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagementDetail {
    /// Advertised network name
    pub ssid: Decoded<SsidInfo>,
    /// Beacon interval and capability bits
    pub capability: Decoded<BeaconCapability>,
    /// RSN cipher/AKM advertisement; `None` when the element is absent
    pub rsn: Decoded<Option<RsnInfo>>,
}

impl ManagementDetail {
    fn decode(payload: &[u8]) -> Self {
        let ssid = extract_ssid(payload);
        let capability = BeaconCapability::parse(payload);
        let rsn = extract_rsn(payload);

        if let Err(err) = &ssid {
            log::trace!("SSID decode failed: {}", err);
        }
        if let Err(err) = &rsn {
            log::trace!("RSN decode failed: {}", err);
        }

        Self {
            ssid: ssid.into(),
            capability: capability.into(),
            rsn: rsn.into(),
        }
    }
}

/// Frame-kind specific payload of a decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FrameDetail {
    /// Beacon body: SSID, capabilities, RSN
    Beacon(ManagementDetail),
    /// Probe-response body, same fixed fields and elements as a beacon
    ProbeResponse(ManagementDetail),
    /// Probe request: a device searching for networks
    ProbeRequest {
        /// SSID the device is probing for
        ssid: Decoded<SsidInfo>,
    },
    /// Data frame, inspected for an EAPOL handshake payload
    Data {
        /// EAPOL classification outcome
        eapol: Decoded<EapolStatus>,
    },
    /// Control frames and management subtypes with no body decoding
    Other,
}

/// One decoded record per captured frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedFrame {
    /// Frame category
    pub frame_type: FrameType,
    /// Management subtype, when the category is management
    pub subtype: Option<FrameSubtype>,
    /// Channel the frame was captured on
    pub channel: u8,
    /// Received signal strength in dBm
    pub signal_dbm: i8,
    /// Captured frame length in bytes
    pub length: usize,
    /// Address 1 with vendor
    pub destination: AddressReport,
    /// Address 2 with vendor
    pub source: AddressReport,
    /// Address 3 with vendor
    pub bssid: AddressReport,
    /// Frame-kind specific body decode
    pub detail: FrameDetail,
}

impl DecodedFrame {
    /// Human-readable frame kind, subtype for management frames and the
    /// category otherwise.
    pub fn kind(&self) -> String {
        match self.subtype {
            Some(subtype) => subtype.to_string(),
            None => self.frame_type.to_string(),
        }
    }
}

/// Decode one captured frame into a report.
///
/// Fails only when the buffer cannot hold a frame header; every body
/// sub-decode degrades into a [`Decoded::Failed`] field instead of
/// rejecting the frame.
pub fn decode(payload: &[u8], channel: u8, signal_dbm: i8) -> Result<DecodedFrame> {
    let header = FrameHeader::parse(payload)?;

    let detail = match (header.frame_type, header.subtype) {
        (FrameType::Management, Some(FrameSubtype::Beacon)) => {
            FrameDetail::Beacon(ManagementDetail::decode(payload))
        }
        (FrameType::Management, Some(FrameSubtype::ProbeResponse)) => {
            FrameDetail::ProbeResponse(ManagementDetail::decode(payload))
        }
        (FrameType::Management, Some(FrameSubtype::ProbeRequest)) => FrameDetail::ProbeRequest {
            ssid: extract_ssid(payload).into(),
        },
        (FrameType::Data, _) => FrameDetail::Data {
            eapol: classify_data_frame(payload).into(),
        },
        _ => FrameDetail::Other,
    };

    Ok(DecodedFrame {
        frame_type: header.frame_type,
        subtype: header.subtype,
        channel,
        signal_dbm,
        length: payload.len(),
        destination: AddressReport::resolve(header.destination),
        source: AddressReport::resolve(header.source),
        bssid: AddressReport::resolve(header.bssid),
        detail,
    })
}
