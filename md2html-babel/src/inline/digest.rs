//! Content hashing for `[[...]]` spans.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How span contents are turned into bytes before hashing.
///
/// The two encodings agree on ASCII.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashEncoding {
    /// One byte per character for U+0000..=U+00FF. Characters above that range have no
    /// single-byte form and contribute their UTF-8 bytes instead.
    #[default]
    Latin1,
    Utf8,
}

impl HashEncoding {
    pub const NAMES: &'static [&'static str] = &["latin1", "utf8"];

    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            HashEncoding::Utf8 => text.as_bytes().to_vec(),
            HashEncoding::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match u8::try_from(ch) {
                        Ok(byte) => bytes.push(byte),
                        Err(_) => {
                            let mut buf = [0u8; 4];
                            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }
                bytes
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HashEncoding::Latin1 => "latin1",
            HashEncoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for HashEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(HashEncoding::Latin1),
            "utf8" | "utf-8" => Ok(HashEncoding::Utf8),
            other => Err(format!(
                "unknown hash encoding '{other}' (expected one of: {})",
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Lowercase hex MD5 digest of `content` under `encoding`. Always 32 characters.
pub fn md5_hex(content: &str, encoding: HashEncoding) -> String {
    hex::encode(Md5::digest(encoding.encode(content)))
}
