//! Pattern extraction: regex capture groups become mapping fields.
//!
//! Record-oriented, input only. `init` takes exactly one argument, the
//! pattern. Per line, the first match's capture groups form a mapping:
//! named groups under their name, unnamed groups under their 1-based
//! index as a decimal string, groups that did not participate as `Null`.
//! A pattern with no capture groups yields `{"0": <whole match>}`.
//! A line the pattern does not match is a [`DecodeError::NoMatch`], so
//! every output record stays attributable to an input line.

use indexmap::IndexMap;
use refmt::{DecodeError, InitError, InputFormat, Value};
use regex::Regex;

/// Decodes lines by matching them against a configured pattern.
#[derive(Debug, Default)]
pub struct RegexInput {
    pattern: Option<Regex>,
}

impl InputFormat for RegexInput {
    fn is_record_oriented(&self) -> bool {
        true
    }

    fn init(&mut self, args: &[String]) -> Result<(), InitError> {
        let [pattern] = args else {
            return Err(InitError::ArgCount { expected: 1, got: args.len() });
        };
        let regex = Regex::new(pattern).map_err(|e| InitError::InvalidArg(e.to_string()))?;
        self.pattern = Some(regex);
        Ok(())
    }

    fn decode(&self, data: &[u8]) -> Result<Value, DecodeError> {
        let Some(regex) = &self.pattern else {
            return Err(DecodeError::Other("pattern not initialized".into()));
        };
        let line = std::str::from_utf8(data).map_err(|e| DecodeError::Syntax(e.to_string()))?;
        let caps = regex
            .captures(line)
            .ok_or_else(|| DecodeError::NoMatch(format!("line does not match /{regex}/")))?;

        let mut fields = IndexMap::new();
        if regex.captures_len() == 1 {
            // No explicit groups: expose the whole match.
            fields.insert("0".to_string(), Value::from(&caps[0]));
        } else {
            for (idx, name) in regex.capture_names().enumerate().skip(1) {
                let key = name.map_or_else(|| idx.to_string(), str::to_string);
                let value = caps
                    .get(idx)
                    .map_or(Value::Null, |m| Value::from(m.as_str()));
                fields.insert(key, value);
            }
        }
        Ok(Value::Mapping(fields))
    }
}
