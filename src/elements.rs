//! Tagged information element scanning
//!
//! Management frames carry a variable-length region of tag/length/value
//! records after their fixed fields. The scanner here walks that region
//! lazily and never reads past the captured buffer; higher-level extractors
//! (SSID, RSN) are built on top of it.

use serde::Serialize;

use crate::error::{DecodeError, Result};

/// SSID element tag
pub const TAG_SSID: u8 = 0x00;

/// Robust Security Network element tag
pub const TAG_RSN: u8 = 0x30;

/// Offset of the first tagged element in beacon and probe frames:
/// 24-byte header plus 12 bytes of fixed fields.
pub const TAGGED_ELEMENTS_OFFSET: usize = 36;

/// One tag/length/value record, borrowing the frame buffer.
///
/// Valid only for the lifetime of the buffer it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationElement<'a> {
    /// Element tag number
    pub tag: u8,
    /// Element value bytes
    pub value: &'a [u8],
}

/// Lazy walker over the tagged element region of a frame.
///
/// Yields elements in order until fewer than two bytes remain. An element
/// whose declared length runs past the buffer yields a single
/// [`DecodeError::Truncated`] and ends the scan; no partial element is ever
/// produced.
#[derive(Debug, Clone)]
pub struct ElementScanner<'a> {
    payload: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> ElementScanner<'a> {
    /// Scan `payload` starting at `start`.
    pub fn new(payload: &'a [u8], start: usize) -> Self {
        Self {
            payload,
            pos: start,
            done: false,
        }
    }

    /// Scan a beacon/probe frame from the end of its fixed fields.
    pub fn from_fixed_fields(payload: &'a [u8]) -> Self {
        Self::new(payload, TAGGED_ELEMENTS_OFFSET)
    }
}

impl<'a> Iterator for ElementScanner<'a> {
    type Item = Result<InformationElement<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Need at least the tag and length bytes.
        if self.pos + 2 > self.payload.len() {
            self.done = true;
            return None;
        }

        let tag = self.payload[self.pos];
        let size = self.payload[self.pos + 1] as usize;
        let end = self.pos + 2 + size;

        if end > self.payload.len() {
            self.done = true;
            return Some(Err(DecodeError::Truncated { offset: self.pos }));
        }

        let element = InformationElement {
            tag,
            value: &self.payload[self.pos + 2..end],
        };
        self.pos = end;
        Some(Ok(element))
    }
}

/// Find the first element with the given tag in a beacon/probe frame.
///
/// `Ok(None)` means the region was walked to its end without a match;
/// `Err(Truncated)` means the scan hit an element running past the buffer
/// before any match.
pub fn find_element(payload: &[u8], tag: u8) -> Result<Option<InformationElement<'_>>> {
    for item in ElementScanner::from_fixed_fields(payload) {
        let element = item?;
        if element.tag == tag {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

/// Advertised network name of a management frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SsidInfo {
    /// Named network; control and non-UTF-8 bytes are replaced, never
    /// echoed raw
    Named(String),
    /// Zero-length SSID element, the network hides its name
    Hidden,
    /// No SSID element present
    Absent,
}

/// Extract the advertised SSID from a beacon/probe frame.
pub fn extract_ssid(payload: &[u8]) -> Result<SsidInfo> {
    match find_element(payload, TAG_SSID)? {
        Some(element) if element.value.is_empty() => Ok(SsidInfo::Hidden),
        Some(element) => Ok(SsidInfo::Named(printable(element.value))),
        None => Ok(SsidInfo::Absent),
    }
}

/// Render raw SSID bytes as a display-safe string.
fn printable(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}
