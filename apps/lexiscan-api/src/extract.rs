//! Text extraction seam
//!
//! Uploaded bytes become analysis text through a `TextExtractor`. The
//! default treats the upload as plain text; an OCR-backed implementation
//! can be swapped in here without touching the handlers.

use anyhow::Result;

pub trait TextExtractor: Send + Sync {
    fn extract(&self, filename: &str, bytes: &[u8]) -> Result<String>;
}

/// Deterministic default: decode the upload as UTF-8, lossily
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, _filename: &str, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_extractor_decodes_utf8() {
        let extractor = PlainTextExtractor;
        let text = extractor.extract("a.txt", b"Purchase Price: $750,000").unwrap();
        assert_eq!(text, "Purchase Price: $750,000");
    }

    #[test]
    fn plain_extractor_is_lossy_on_invalid_bytes() {
        let extractor = PlainTextExtractor;
        let text = extractor.extract("a.bin", &[0x50, 0xff, 0x51]).unwrap();
        assert!(text.starts_with('P'));
        assert!(text.ends_with('Q'));
    }
}
