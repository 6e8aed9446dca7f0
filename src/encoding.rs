//! Text decoding for downloaded blob content.
//!
//! The loader decodes blob bytes before CSV parsing. The supported encodings
//! form a closed set; each decodes explicitly rather than through a lossy
//! fallback, so undecodable content surfaces as an error.

use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while resolving an encoding or decoding bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The encoding label does not name a supported encoding.
    #[error("unknown encoding label: '{0}'")]
    UnknownEncoding(String),

    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 { position: usize },
}

/// A supported character encoding for blob content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (the default)
    #[default]
    Utf8,
    /// ISO-8859-1, where every byte maps to the code point of its value
    Latin1,
}

impl Encoding {
    /// Decode blob bytes to text.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|err| {
                DecodeError::InvalidUtf8 {
                    position: err.utf8_error().valid_up_to(),
                }
            }),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Canonical label for this encoding.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = DecodeError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.eq_ignore_ascii_case("utf-8") || label.eq_ignore_ascii_case("utf8") {
            Ok(Encoding::Utf8)
        } else if label.eq_ignore_ascii_case("latin-1")
            || label.eq_ignore_ascii_case("latin1")
            || label.eq_ignore_ascii_case("iso-8859-1")
        {
            Ok(Encoding::Latin1)
        } else {
            Err(DecodeError::UnknownEncoding(label.to_string()))
        }
    }
}
