//! Text rendering of decoded frame reports
//!
//! Pure string construction over [`DecodedFrame`]; the decoder itself never
//! prints. Hex dumps are bounded so a large capture can never produce
//! unbounded output.

use std::fmt::Write;

use crate::decode::{DecodedFrame, FrameDetail, ManagementDetail};
use crate::eapol::EapolStatus;
use crate::elements::SsidInfo;
use crate::error::Decoded;

/// Default cap on hex dump output, in bytes
pub const DEFAULT_DUMP_LIMIT: usize = 256;

/// Render a decoded frame as a multi-line text report.
pub fn render_report(frame: &DecodedFrame) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} | CH={} | RSSI={} | LEN={}",
        frame.kind(),
        frame.channel,
        frame.signal_dbm,
        frame.length
    );
    let _ = writeln!(out, "  SRC: {} ({})", frame.source.mac, frame.source.vendor);
    let _ = writeln!(
        out,
        "  DST: {} ({})",
        frame.destination.mac, frame.destination.vendor
    );
    let _ = writeln!(out, "  BSSID: {} ({})", frame.bssid.mac, frame.bssid.vendor);

    match &frame.detail {
        FrameDetail::Beacon(detail) | FrameDetail::ProbeResponse(detail) => {
            render_management(&mut out, detail);
        }
        FrameDetail::ProbeRequest { ssid } => {
            let _ = writeln!(out, "  Device is searching for networks");
            render_ssid(&mut out, ssid);
        }
        FrameDetail::Data { eapol } => render_eapol(&mut out, eapol),
        FrameDetail::Other => {}
    }

    out
}

fn render_management(out: &mut String, detail: &ManagementDetail) {
    render_ssid(out, &detail.ssid);

    match &detail.capability {
        Decoded::Ok(caps) => {
            let _ = writeln!(out, "    Beacon Interval: {} ms", caps.beacon_interval);
            let _ = writeln!(
                out,
                "    Privacy Enabled: {}",
                if caps.privacy_enabled { "Yes" } else { "No" }
            );
        }
        Decoded::Failed(err) => {
            let _ = writeln!(out, "    Capabilities: <{}>", err);
        }
    }

    match &detail.rsn {
        Decoded::Ok(Some(rsn)) => {
            let _ = writeln!(out, "    Encryption: WPA2/WPA3");
            let _ = writeln!(out, "    Group Cipher: {}", rsn.group_cipher);
            for cipher in &rsn.pairwise_ciphers {
                let _ = writeln!(out, "    Unicast Cipher: {}", cipher);
            }
            for akm in &rsn.akm_suites {
                let _ = writeln!(out, "    AKM: {}", akm);
            }
        }
        Decoded::Ok(None) => {}
        Decoded::Failed(err) => {
            let _ = writeln!(out, "    Encryption: <{}>", err);
        }
    }
}

fn render_ssid(out: &mut String, ssid: &Decoded<SsidInfo>) {
    match ssid {
        Decoded::Ok(SsidInfo::Named(name)) => {
            let _ = writeln!(out, "    SSID: {}", name);
        }
        Decoded::Ok(SsidInfo::Hidden) => {
            let _ = writeln!(out, "    SSID: <hidden>");
        }
        Decoded::Ok(SsidInfo::Absent) => {}
        Decoded::Failed(err) => {
            let _ = writeln!(out, "    SSID: <{}>", err);
        }
    }
}

fn render_eapol(out: &mut String, eapol: &Decoded<EapolStatus>) {
    match eapol {
        Decoded::Ok(EapolStatus::Handshake { key, message }) => {
            let _ = writeln!(out, "  >>> WPA2/WPA3 EAPOL detected");
            let _ = writeln!(out, "    Key Info: 0x{:04X}", key.key_info);
            let _ = writeln!(out, "    ---> {}", message);
        }
        Decoded::Ok(EapolStatus::NotEapol) => {}
        Decoded::Failed(err) => {
            let _ = writeln!(out, "  EAPOL check skipped: {}", err);
        }
    }
}

/// Render a bounded hex dump of a capture buffer, 16 bytes per line.
///
/// At most `limit` bytes are shown; pass [`DEFAULT_DUMP_LIMIT`] unless the
/// caller has its own bound.
pub fn hex_dump(data: &[u8], limit: usize) -> String {
    let shown = data.len().min(limit);
    let mut out = String::with_capacity(shown * 3 + shown / 16 + 2);

    for (i, byte) in data[..shown].iter().enumerate() {
        let _ = write!(out, "{:02X}", byte);
        if (i + 1) % 16 == 0 {
            out.push('\n');
        } else if i + 1 < shown {
            out.push(' ');
        }
    }
    if !out.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    if data.len() > limit {
        let _ = writeln!(out, "... ({} bytes not shown)", data.len() - limit);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::eapol::LLC_SNAP_EAPOL;

    #[test]
    fn test_beacon_report_text() {
        let mut frame = vec![0u8; 36];
        frame[0] = 0x80;
        frame[10..16].copy_from_slice(&[0x98, 0xDE, 0xD0, 0x01, 0x02, 0x03]);
        frame[32] = 0x64;
        frame[34] = 0x10;
        frame.extend_from_slice(&[0x00, 0x03]);
        frame.extend_from_slice(b"abc");

        let decoded = decode(&frame, 6, -42).unwrap();
        let report = render_report(&decoded);

        assert!(report.starts_with("Beacon | CH=6 | RSSI=-42"));
        assert!(report.contains("SRC: 98:DE:D0:01:02:03 (TP-Link)"));
        assert!(report.contains("SSID: abc"));
        assert!(report.contains("Beacon Interval: 100 ms"));
        assert!(report.contains("Privacy Enabled: Yes"));
    }

    #[test]
    fn test_eapol_report_text() {
        let mut frame = vec![0u8; 24];
        frame[0] = 0x08;
        frame.extend_from_slice(&LLC_SNAP_EAPOL);
        frame.extend_from_slice(&[0x02, 0x03, 0x00, 0x5F, 0x02, 0x00, 0x8A, 0x00]);

        let report = render_report(&decode(&frame, 11, -55).unwrap());
        assert!(report.contains(">>> WPA2/WPA3 EAPOL detected"));
        assert!(report.contains("Key Info: 0x008A"));
        assert!(report.contains("Message 1/4"));
    }

    #[test]
    fn test_hex_dump_wraps_lines() {
        let data: Vec<u8> = (0u8..20).collect();
        let dump = hex_dump(&data, DEFAULT_DUMP_LIMIT);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00 01 02"));
        assert!(lines[1].starts_with("10 11"));
    }

    #[test]
    fn test_hex_dump_bounded() {
        let data = vec![0xAB; 1024];
        let dump = hex_dump(&data, 256);
        assert!(dump.contains("(768 bytes not shown)"));
        // 256 shown bytes, 16 per line, plus the truncation note.
        assert_eq!(dump.lines().count(), 17);
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(hex_dump(&[], 256), "");
    }
}
