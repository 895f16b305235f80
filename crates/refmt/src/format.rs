//! Format plugin traits.
//!
//! Each format implements one trait per direction it supports. A plugin is
//! a stateless template until [`init`](InputFormat::init) runs; the
//! orchestrator resolves a fresh instance per conversion and initializes it
//! exactly once before any decode or encode call.

use crate::value::Value;

/// A format that can be decoded into [`Value`]s.
pub trait InputFormat {
    /// True if the format decomposes into one record per line.
    /// Constant for the plugin's lifetime.
    fn is_record_oriented(&self) -> bool;

    /// Validate and store format-specific configuration.
    ///
    /// Runs exactly once, before any `decode` call. Formats that take no
    /// configuration reject non-empty argument lists.
    fn init(&mut self, args: &[String]) -> Result<(), InitError>;

    /// Decode one logical unit: the whole payload for document-oriented
    /// formats, one line's bytes (delimiter stripped) for record-oriented
    /// formats.
    fn decode(&self, data: &[u8]) -> Result<Value, DecodeError>;
}

/// A format that can encode [`Value`]s.
pub trait OutputFormat {
    /// True if the format emits one record per line.
    fn is_record_oriented(&self) -> bool;

    /// Validate and store format-specific configuration.
    fn init(&mut self, args: &[String]) -> Result<(), InitError>;

    /// Encode one logical unit, symmetric with
    /// [`InputFormat::decode`]. Encoders accept any [`Value`]; a variant
    /// the format structurally cannot represent is an
    /// [`EncodeError::Unrepresentable`].
    fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError>;
}

/// Errors from plugin initialization.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("expected {expected} argument(s), got {got}")]
    ArgCount { expected: usize, got: usize },

    #[error("invalid argument: {0}")]
    InvalidArg(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from decoding one input unit.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The unit is not well-formed for the format.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The unit is well-formed but produces no value (e.g. a line that
    /// does not match the configured pattern).
    #[error("no match: {0}")]
    NoMatch(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from encoding one output unit.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot represent value: {0}")]
    Unrepresentable(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
