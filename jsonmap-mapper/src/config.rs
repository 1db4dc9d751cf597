//! Mapper configuration.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_DEPTH, DecodeFlags};

/// Decoder settings applied by the text entry points.
///
/// Every field has a default, so a partial document such as
/// `{"depth": 64}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Maximum container nesting accepted from text input.
    pub depth: usize,
    /// Option bits forwarded to the decoder.
    pub flags: DecodeFlags,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            flags: DecodeFlags::NONE,
        }
    }
}

impl MapperConfig {
    /// Parses a configuration document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: DecodeFlags) -> Self {
        self.flags = flags;
        self
    }
}
