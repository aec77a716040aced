use chrono::{DateTime, Utc};

/// Record of a completed content write.
///
/// The persister stamps headers from `time_written`, so the header and the
/// content it references always carry the same timestamp for a version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOutcome {
    /// When the storage layer recorded the write.
    pub time_written: DateTime<Utc>,
    /// Number of content bytes written.
    pub content_size: u64,
    /// BLAKE3 hex digest of the written bytes.
    pub digest: String,
}

impl WriteOutcome {
    /// Record an outcome for `bytes` written at `time_written`.
    pub fn record(bytes: &[u8], time_written: DateTime<Utc>) -> Self {
        Self {
            time_written,
            content_size: bytes.len() as u64,
            digest: content_digest(bytes),
        }
    }
}

/// BLAKE3 hex digest of content bytes.
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(blake3::hash(bytes).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_captures_size_and_digest() {
        let when = Utc::now();
        let outcome = WriteOutcome::record(b"hello", when);
        assert_eq!(outcome.time_written, when);
        assert_eq!(outcome.content_size, 5);
        assert_eq!(outcome.digest, content_digest(b"hello"));
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(content_digest(b"same"), content_digest(b"same"));
        assert_ne!(content_digest(b"one"), content_digest(b"two"));
    }

    #[test]
    fn digest_is_hex_of_32_bytes() {
        assert_eq!(content_digest(b"").len(), 64);
    }
}
