//! Refmt: a pluggable format-transcoding engine.
//!
//! Refmt converts a byte stream from one structured-data format into
//! another. Formats declare whether they are record-oriented (one logical
//! record per line, like JSON Lines) or document-oriented (the whole
//! payload is one unit, like JSON); the orchestrator in [`convert`] picks
//! the transposition strategy that reconciles the two.

mod convert;
mod format;
mod registry;
mod value;

pub use convert::{ConvertError, convert};
pub use format::{DecodeError, EncodeError, InitError, InputFormat, OutputFormat};
pub use registry::{Registry, UnknownFormat};
pub use value::Value;
