//! Registry for format plugins.
//!
//! The registry maps format names to plugin factories for both directions.
//! It is populated once at startup and read-only afterwards; resolving a
//! name constructs a fresh, uninitialized plugin instance, so per-call
//! `init` state is never shared between conversions.

use crate::format::{InputFormat, OutputFormat};
use indexmap::IndexMap;

type InputFactory = fn() -> Box<dyn InputFormat>;
type OutputFactory = fn() -> Box<dyn OutputFormat>;

/// Registry of available formats, keyed by case-sensitive name.
#[derive(Clone, Default)]
pub struct Registry {
    inputs: IndexMap<String, InputFactory>,
    outputs: IndexMap<String, OutputFactory>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input format under the given name.
    pub fn register_input(&mut self, name: impl Into<String>, factory: InputFactory) {
        self.inputs.insert(name.into(), factory);
    }

    /// Register an output format under the given name.
    pub fn register_output(&mut self, name: impl Into<String>, factory: OutputFactory) {
        self.outputs.insert(name.into(), factory);
    }

    /// Resolve an input format by name, constructing a fresh instance.
    pub fn resolve_input(&self, name: &str) -> Result<Box<dyn InputFormat>, UnknownFormat> {
        self.inputs
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| UnknownFormat(name.to_string()))
    }

    /// Resolve an output format by name, constructing a fresh instance.
    pub fn resolve_output(&self, name: &str) -> Result<Box<dyn OutputFormat>, UnknownFormat> {
        self.outputs
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| UnknownFormat(name.to_string()))
    }

    /// Names of all registered input formats, in registration order.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().map(|s| s.as_str())
    }

    /// Names of all registered output formats, in registration order.
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(|s| s.as_str())
    }

    /// Check if the registry has no formats in either direction.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

/// A format name that matches no registry entry.
#[derive(Debug, thiserror::Error)]
#[error("unknown format: {0}")]
pub struct UnknownFormat(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{DecodeError, EncodeError, InitError};
    use crate::value::Value;

    struct NullFormat;

    impl InputFormat for NullFormat {
        fn is_record_oriented(&self) -> bool {
            false
        }

        fn init(&mut self, _args: &[String]) -> Result<(), InitError> {
            Ok(())
        }

        fn decode(&self, _data: &[u8]) -> Result<Value, DecodeError> {
            Ok(Value::Null)
        }
    }

    impl OutputFormat for NullFormat {
        fn is_record_oriented(&self) -> bool {
            false
        }

        fn init(&mut self, _args: &[String]) -> Result<(), InitError> {
            Ok(())
        }

        fn encode(&self, _value: &Value) -> Result<Vec<u8>, EncodeError> {
            Ok(Vec::new())
        }
    }

    fn make_test_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register_input("null", || Box::new(NullFormat));
        registry.register_output("null", || Box::new(NullFormat));
        registry
    }

    #[test]
    fn test_resolve_known() {
        let registry = make_test_registry();
        assert!(registry.resolve_input("null").is_ok());
        assert!(registry.resolve_output("null").is_ok());
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = make_test_registry();
        let err = registry.resolve_input("xml").err().unwrap();
        assert_eq!(err.0, "xml");
        assert!(registry.resolve_output("xml").is_err());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = make_test_registry();
        assert!(registry.resolve_input("Null").is_err());
        assert!(registry.resolve_input("NULL").is_err());
    }

    #[test]
    fn test_names() {
        let registry = make_test_registry();
        assert_eq!(registry.input_names().collect::<Vec<_>>(), ["null"]);
        assert_eq!(registry.output_names().collect::<Vec<_>>(), ["null"]);
        assert!(!registry.is_empty());
        assert!(Registry::new().is_empty());
    }
}
