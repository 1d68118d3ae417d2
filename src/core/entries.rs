use base64::Engine;

use crate::utils::error::{BingoError, Result};

/// Splits raw text on line boundaries, one entry per line. Blank lines are
/// kept as empty-string entries; no trimming, deduplication, or case
/// normalization happens here.
pub fn parse_lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_owned).collect()
}

/// Decodes raw bytes as UTF-8 and splits into entries. Undecodable input is a
/// typed parse error rather than a placeholder entry, so callers can surface
/// it per input file.
pub fn parse_bytes(raw: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(raw).map_err(|e| BingoError::ParseError {
        message: format!(
            "file is not valid UTF-8 text ({}); provide a .txt or .csv with one entry per line",
            e
        ),
    })?;
    Ok(parse_lines(text))
}

/// Decodes an uploaded file in `data:<mime>;base64,<payload>` transport
/// encoding and splits it into entries.
pub fn decode_upload(contents: &str) -> Result<Vec<String>> {
    let (_, payload) = contents
        .split_once(',')
        .ok_or_else(|| BingoError::ParseError {
            message: "uploaded contents are missing the data-URI prefix".to_string(),
        })?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| BingoError::ParseError {
            message: format!("uploaded contents are not valid base64: {}", e),
        })?;

    parse_bytes(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_preserves_blank_lines() {
        assert_eq!(parse_lines("A\n\nB"), vec!["A", "", "B"]);
    }

    #[test]
    fn test_parse_lines_ignores_trailing_newline() {
        assert_eq!(parse_lines("A\nB\n"), vec!["A", "B"]);
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let result = parse_bytes(&[0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(BingoError::ParseError { .. })));
    }

    #[test]
    fn test_decode_upload_strips_data_uri_prefix() {
        let payload = base64::engine::general_purpose::STANDARD.encode("raise hand\n\nmute");
        let contents = format!("data:text/plain;base64,{}", payload);

        let entries = decode_upload(&contents).unwrap();
        assert_eq!(entries, vec!["raise hand", "", "mute"]);
    }

    #[test]
    fn test_decode_upload_without_prefix_is_parse_error() {
        let result = decode_upload("bm8gcHJlZml4");
        assert!(matches!(result, Err(BingoError::ParseError { .. })));
    }

    #[test]
    fn test_decode_upload_with_bad_base64_is_parse_error() {
        let result = decode_upload("data:text/plain;base64,not%%base64");
        assert!(matches!(result, Err(BingoError::ParseError { .. })));
    }
}
