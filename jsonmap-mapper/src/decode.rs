//! Text decoding, the one external collaborator of the normalizer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::{DecodeError, DecodeErrorCode};

/// Default maximum nesting depth handed to the decoder.
pub const DEFAULT_DEPTH: usize = 512;

/// Decoder option bits. Opaque to the mapper: they are forwarded to the
/// [`Decoder`] untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodeFlags(u32);

impl DecodeFlags {
    pub const NONE: Self = Self(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl From<u32> for DecodeFlags {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for DecodeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Turns text into a generic value tree.
///
/// Implementations must report failures with their own diagnostic text;
/// the mapper only adds the shape check on top.
pub trait Decoder: Send + Sync {
    fn decode(&self, text: &str, depth: usize, flags: DecodeFlags) -> Result<Value, DecodeError>;
}

/// [`Decoder`] backed by `serde_json`.
///
/// Depth counts container levels: a scalar is depth 0 and every array or
/// object adds one. The limit is checked on the raw text before parsing, so
/// `depth` is the only nesting limit; serde_json's built-in recursion guard
/// is disabled and deep input grows the stack through `serde_stacker`. No
/// flag bits are interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonDecoder;

impl Decoder for SerdeJsonDecoder {
    fn decode(&self, text: &str, depth: usize, _flags: DecodeFlags) -> Result<Value, DecodeError> {
        if nesting_exceeds(text, depth) {
            return Err(DecodeError::new(
                DecodeErrorCode::Depth,
                format!("maximum nesting depth exceeded: more than {depth} levels"),
            ));
        }

        let mut json = serde_json::Deserializer::from_str(text);
        json.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(value)
    }
}

/// Whether container nesting in `text` goes past `limit`. Stops at the first
/// level over the limit. Brackets inside string literals do not count;
/// malformed text is left for the parser to reject.
fn nesting_exceeds(text: &str, limit: usize) -> bool {
    let mut level = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                level += 1;
                if level > limit {
                    return true;
                }
            }
            b']' | b'}' => level = level.saturating_sub(1),
            _ => {}
        }
    }
    false
}
