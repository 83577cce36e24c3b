//! Reading keymap files from disk
//!
//! REAPER writes `reaper-kb.ini` as UTF-8, but older installs and hand-edited
//! files may contain Latin-1 bytes. Text that is not valid UTF-8 is decoded
//! as Latin-1, which accepts every byte value.

use std::borrow::Cow;
use std::path::Path;

use super::decoder::{DecodeReport, KeymapDecoder};
use super::error::KeymapError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode file bytes as UTF-8, falling back to Latin-1
///
/// A leading UTF-8 byte order mark is dropped before either decoding.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("Keymap is not valid UTF-8, decoding as Latin-1");
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}

/// Iterate over lines ending in `\n`, `\r\n` or a lone `\r`
///
/// Like [`str::lines`], a final terminator does not produce an empty line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = Some(text);

    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(pos) => {
                let end = if current[pos..].starts_with("\r\n") {
                    pos + 2
                } else {
                    pos + 1
                };
                rest = Some(&current[end..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                (!current.is_empty()).then_some(current)
            }
        }
    })
}

/// Split decoded text into trimmed lines
pub fn split_lines(text: &str) -> Vec<String> {
    lines(text).map(|line| line.trim().to_string()).collect()
}

/// Read a keymap file into trimmed lines
pub fn read_keymap_lines(path: &Path) -> Result<Vec<String>, KeymapError> {
    let bytes = std::fs::read(path).map_err(|source| KeymapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&decode_text(&bytes)))
}

/// Read and decode a keymap file
pub fn load_keymap_file(
    path: &Path,
    decoder: &KeymapDecoder,
) -> Result<DecodeReport, KeymapError> {
    let lines = read_keymap_lines(path)?;
    let report = decoder.decode(&lines)?;

    tracing::info!(
        "Loaded keymap from {} ({} entries)",
        path.display(),
        report.keymap.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = decode_text("KEY 0 65 40 0 # Ä".as_bytes());
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "KEY 0 65 40 0 # Ä");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(b"KEY 0 65 40 0");
        assert_eq!(decode_text(&bytes), "KEY 0 65 40 0");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 alone is invalid UTF-8; in Latin-1 it is 'é'
        let bytes = b"ACT 0 0 \"_x\" \"Caf\xE9\" 1";
        let text = decode_text(bytes);
        assert!(matches!(text, Cow::Owned(_)));
        assert_eq!(text, "ACT 0 0 \"_x\" \"Café\" 1");
    }

    #[test]
    fn test_decode_strips_bom_before_latin1_fallback() {
        let bytes = b"\xEF\xBB\xBFKEY 0 65 40 0 # \xE9";
        let text = decode_text(bytes);
        assert!(matches!(text, Cow::Owned(_)));
        assert_eq!(text, "KEY 0 65 40 0 # é");
    }

    #[test]
    fn test_lines_split_on_lone_carriage_return() {
        let split: Vec<&str> = lines("KEY 0 65 40 0\rKEY 0 66 40 0\r\nKEY 0 67 40 0\n").collect();
        assert_eq!(split, vec!["KEY 0 65 40 0", "KEY 0 66 40 0", "KEY 0 67 40 0"]);
    }

    #[test]
    fn test_lines_keeps_blank_lines() {
        let split: Vec<&str> = lines("a\r\rb\n\nc").collect();
        assert_eq!(split, vec!["a", "", "b", "", "c"]);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines = split_lines("KEY 0 65 40 0\r\n  SCR 4 0 RS1 \"d\" a.lua \r\n\r\n");
        assert_eq!(lines, vec!["KEY 0 65 40 0", "SCR 4 0 RS1 \"d\" a.lua", ""]);
    }
}
