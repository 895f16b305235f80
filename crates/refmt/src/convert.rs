//! Conversion orchestrator.
//!
//! [`convert`] resolves an input and an output plugin from the registry,
//! initializes them, and drives one of four strategies chosen by the
//! record/document orientation of the pair:
//!
//! | input | output | strategy |
//! |---|---|---|
//! | record | record | streaming pass-through, one record at a time |
//! | record | document | collect all records into a sequence, emit once |
//! | document | record | decode once, fan the sequence elements out |
//! | document | document | decode once, encode once |
//!
//! The input is consumed in exactly one left-to-right pass. For
//! record-oriented output the orchestrator owns the newline delimiter:
//! encoders produce a bare record and the orchestrator appends `\n`.
//! The streaming strategy is append-only; output flushed for records
//! before a failure is retained, never rolled back.

use crate::format::{DecodeError, EncodeError, InitError, InputFormat, OutputFormat};
use crate::registry::Registry;
use crate::value::Value;
use std::io::{BufRead, BufReader, Read, Write};

/// Errors from a conversion, naming the failing phase.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("unknown input format: {0}")]
    UnknownInputFormat(String),

    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("failed to initialize input format: {0}")]
    InputInit(#[source] InitError),

    #[error("failed to initialize output format: {0}")]
    OutputInit(#[source] InitError),

    #[error("decode failed at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error("failed to decode document: {0}")]
    DecodeDocument(#[source] DecodeError),

    #[error("encode failed at record {record}: {source}")]
    Encode {
        record: usize,
        #[source]
        source: EncodeError,
    },

    #[error("failed to encode document: {0}")]
    EncodeDocument(#[source] EncodeError),

    #[error("document input did not decode to a sequence")]
    ExpectedSequence,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convert `input` to `output`.
///
/// Both plugins are resolved fresh from the registry and initialized with
/// their argument lists, input first; if either step fails the streams are
/// never touched. On success every converted byte has been written (and
/// the writer flushed).
pub fn convert(
    registry: &Registry,
    input_format: &str,
    input_args: &[String],
    output_format: &str,
    output_args: &[String],
    input: impl Read,
    output: impl Write,
) -> Result<(), ConvertError> {
    let mut decoder = registry
        .resolve_input(input_format)
        .map_err(|e| ConvertError::UnknownInputFormat(e.0))?;
    decoder.init(input_args).map_err(ConvertError::InputInit)?;

    let mut encoder = registry
        .resolve_output(output_format)
        .map_err(|e| ConvertError::UnknownOutputFormat(e.0))?;
    encoder.init(output_args).map_err(ConvertError::OutputInit)?;

    match (decoder.is_record_oriented(), encoder.is_record_oriented()) {
        (true, true) => stream_records(&*decoder, &*encoder, input, output),
        (true, false) => collect_then_emit(&*decoder, &*encoder, input, output),
        (false, true) => fan_out(&*decoder, &*encoder, input, output),
        (false, false) => transform(&*decoder, &*encoder, input, output),
    }
}

/// record -> record: decode, encode, and write one line at a time.
/// Memory use is bounded by the longest line.
fn stream_records(
    decoder: &dyn InputFormat,
    encoder: &dyn OutputFormat,
    input: impl Read,
    mut output: impl Write,
) -> Result<(), ConvertError> {
    for_each_line(input, |line_no, line| {
        let value = decoder
            .decode(line)
            .map_err(|source| ConvertError::Decode { line: line_no, source })?;
        let bytes = encoder
            .encode(&value)
            .map_err(|source| ConvertError::Encode { record: line_no, source })?;
        output.write_all(&bytes)?;
        output.write_all(b"\n")?;
        Ok(())
    })?;
    output.flush()?;
    Ok(())
}

/// record -> document: decode every line into a sequence, then emit the
/// whole sequence as one document. Nothing is written until every line
/// has decoded.
fn collect_then_emit(
    decoder: &dyn InputFormat,
    encoder: &dyn OutputFormat,
    input: impl Read,
    mut output: impl Write,
) -> Result<(), ConvertError> {
    let mut records = Vec::new();
    for_each_line(input, |line_no, line| {
        let value = decoder
            .decode(line)
            .map_err(|source| ConvertError::Decode { line: line_no, source })?;
        records.push(value);
        Ok(())
    })?;

    let bytes = encoder
        .encode(&Value::Sequence(records))
        .map_err(ConvertError::EncodeDocument)?;
    output.write_all(&bytes)?;
    output.flush()?;
    Ok(())
}

/// document -> record: decode the whole payload once; the result must be
/// a sequence, whose elements are encoded and written in order.
fn fan_out(
    decoder: &dyn InputFormat,
    encoder: &dyn OutputFormat,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<(), ConvertError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let document = decoder.decode(&data).map_err(ConvertError::DecodeDocument)?;
    let Value::Sequence(records) = document else {
        return Err(ConvertError::ExpectedSequence);
    };

    for (idx, record) in records.iter().enumerate() {
        let bytes = encoder
            .encode(record)
            .map_err(|source| ConvertError::Encode { record: idx + 1, source })?;
        output.write_all(&bytes)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}

/// document -> document: read once, decode once, encode once, write once.
fn transform(
    decoder: &dyn InputFormat,
    encoder: &dyn OutputFormat,
    mut input: impl Read,
    mut output: impl Write,
) -> Result<(), ConvertError> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let value = decoder.decode(&data).map_err(ConvertError::DecodeDocument)?;
    let bytes = encoder.encode(&value).map_err(ConvertError::EncodeDocument)?;
    output.write_all(&bytes)?;
    output.flush()?;
    Ok(())
}

/// Call `f` once per input line with a 1-based line number and the line's
/// bytes, newline and any trailing `\r` stripped. A file-terminating
/// newline produces no extra empty line; the last line may be unterminated.
fn for_each_line(
    input: impl Read,
    mut f: impl FnMut(usize, &[u8]) -> Result<(), ConvertError>,
) -> Result<(), ConvertError> {
    let mut reader = BufReader::new(input);
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;

        let mut line = buf.as_slice();
        if line.last() == Some(&b'\n') {
            line = &line[..line.len() - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
        }
        f(line_no, line)?;
    }
}
