//! Built-in format plugins for refmt.
//!
//! Enable formats via feature flags:
//!
//! - `json` (default) - JSON documents via serde_json
//! - `jsonl` (default) - JSON Lines, one value per line
//! - `regex` (default) - pattern extraction: capture groups of a regular
//!   expression become mapping fields (input only)
//!
//! The format name set is closed at build time; adding a format means
//! adding a module here and registering it in [`register_all`].

use refmt::Registry;

#[cfg(any(feature = "json", feature = "jsonl"))]
mod codec;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "jsonl")]
mod jsonl;
#[cfg(feature = "regex")]
mod pattern;

#[cfg(feature = "json")]
pub use json::{JsonInput, JsonOutput};
#[cfg(feature = "jsonl")]
pub use jsonl::{JsonlInput, JsonlOutput};
#[cfg(feature = "regex")]
pub use pattern::RegexInput;

/// Register all enabled formats with the registry.
pub fn register_all(registry: &mut Registry) {
    #[cfg(feature = "json")]
    {
        registry.register_input("json", || Box::new(JsonInput::default()));
        registry.register_output("json", || Box::new(JsonOutput::default()));
    }
    #[cfg(feature = "jsonl")]
    {
        registry.register_input("jsonl", || Box::new(JsonlInput::default()));
        registry.register_output("jsonl", || Box::new(JsonlOutput::default()));
    }
    #[cfg(feature = "regex")]
    {
        registry.register_input("regex", || Box::new(RegexInput::default()));
    }
}
