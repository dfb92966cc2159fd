//! Operator-facing diagnostic toggles and trace formatting.
//!
//! The reassembly core performs no I/O of its own. These toggles mirror the
//! checkboxes an operator flips in the surrounding diagnostic UI; the
//! session layer queries them to decide which optional `log` records to
//! emit around decode and route calls.

use std::fmt::Write as _;

/// Which optional tracing the session layer should emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticToggles {
    /// Log a header summary whenever a new image buffer is created.
    pub print_new_headers: bool,
    /// Log per-line routing progress.
    pub extra_debug_info: bool,
    /// Log a hex dump of every received datagram payload.
    pub print_hex_log: bool,
}

impl DiagnosticToggles {
    /// All tracing disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            print_new_headers: false,
            extra_debug_info: false,
            print_hex_log: false,
        }
    }

    /// All tracing enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            print_new_headers: true,
            extra_debug_info: true,
            print_hex_log: true,
        }
    }
}

/// Format bytes as a hex dump, sixteen bytes per line.
///
/// # Examples
///
/// ```
/// use rasterline::diagnostics::hex_dump;
///
/// assert_eq!(hex_dump(&[0x00, 0xAB, 0x10]), "00 ab 10");
/// ```
#[must_use]
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(if i % 16 == 0 { '\n' } else { ' ' });
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::hex_dump;

    #[test]
    fn hex_dump_wraps_every_sixteen_bytes() {
        let dump = hex_dump(&[0xFF; 17]);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ff ".repeat(15) + "ff");
        assert_eq!(lines[1], "ff");
    }

    #[test]
    fn hex_dump_of_empty_input_is_empty() {
        assert_eq!(hex_dump(&[]), "");
    }
}
