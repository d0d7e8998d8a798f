//! Encoder configuration.

use crate::error::{QueryError, Result};
use std::env;

/// Controls how a finished document is turned into JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Emit indented, multi-line JSON.
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

impl EncoderConfig {
    /// Compact output, identical to `serde_json::to_string`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output with the default indent.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Enable or disable pretty output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Read `ESDSL_PRETTY` and `ESDSL_INDENT`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(v) = env::var("ESDSL_PRETTY") {
            config.pretty = v == "1" || v.eq_ignore_ascii_case("true");
        }

        if let Ok(v) = env::var("ESDSL_INDENT") {
            config.indent = v.trim().parse().map_err(|_| {
                QueryError::Config(format!("ESDSL_INDENT must be a number, got {:?}", v))
            })?;
        }

        Ok(config)
    }

    pub(crate) fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}
