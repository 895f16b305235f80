//! End-to-end conversions through the registry with the built-in formats.

use refmt::{ConvertError, Registry, convert};

fn registry() -> Registry {
    let mut registry = Registry::new();
    refmt_formats::register_all(&mut registry);
    registry
}

fn run(from: &str, from_args: &[&str], to: &str, input: &str) -> Result<String, ConvertError> {
    let from_args: Vec<String> = from_args.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    convert(
        &registry(),
        from,
        &from_args,
        to,
        &[],
        input.as_bytes(),
        &mut out,
    )?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn jsonl_to_json_preserves_line_order() {
    let out = run("jsonl", &[], "json", "{\"a\":1}\n{\"a\":2}\n").unwrap();
    assert_eq!(out, "[{\"a\":1},{\"a\":2}]");
}

#[test]
fn json_to_jsonl_fans_out() {
    let out = run("json", &[], "jsonl", "[1,2,3]").unwrap();
    assert_eq!(out, "1\n2\n3\n");
}

#[test]
fn json_to_jsonl_rejects_non_sequence() {
    let err = run("json", &[], "jsonl", "{\"a\":1}").unwrap_err();
    assert!(matches!(err, ConvertError::ExpectedSequence));
}

#[test]
fn jsonl_to_jsonl_reserializes_each_line() {
    let out = run("jsonl", &[], "jsonl", "{\"x\": 1}\n{\"x\": 2}\n").unwrap();
    assert_eq!(out, "{\"x\":1}\n{\"x\":2}\n");
}

#[test]
fn json_to_json_is_a_round_trip() {
    let canonical = "{\"name\":\"refmt\",\"tags\":[\"a\",\"b\"],\"n\":3}";
    assert_eq!(run("json", &[], "json", canonical).unwrap(), canonical);
}

#[test]
fn unknown_input_format() {
    let err = run("xml", &[], "json", "<a/>").unwrap_err();
    assert!(matches!(err, ConvertError::UnknownInputFormat(name) if name == "xml"));
}

#[test]
fn malformed_line_is_attributed() {
    let err = run("jsonl", &[], "jsonl", "{\"a\":1}\n{oops\n{\"a\":3}\n").unwrap_err();
    let ConvertError::Decode { line, .. } = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(line, 2);
}

#[test]
fn regex_lines_to_json() {
    let input = "alice 32\nbob 41\n";
    let out = run(
        "regex",
        &[r"(?P<name>\w+) (?P<age>\d+)"],
        "json",
        input,
    )
    .unwrap();
    assert_eq!(
        out,
        "[{\"name\":\"alice\",\"age\":\"32\"},{\"name\":\"bob\",\"age\":\"41\"}]"
    );
}

#[test]
fn regex_to_jsonl_streams() {
    let out = run("regex", &[r"(\S+)=(\S+)"], "jsonl", "a=1\nb=2\n").unwrap();
    assert_eq!(out, "{\"1\":\"a\",\"2\":\"1\"}\n{\"1\":\"b\",\"2\":\"2\"}\n");
}

#[test]
fn regex_init_errors_surface_as_input_init() {
    let err = run("regex", &[], "json", "").unwrap_err();
    assert!(matches!(err, ConvertError::InputInit(_)));

    let err = run("regex", &["(unclosed"], "json", "").unwrap_err();
    assert!(matches!(err, ConvertError::InputInit(_)));
}

#[test]
fn json_output_args_surface_as_output_init() {
    let from_args: Vec<String> = Vec::new();
    let to_args = vec!["pretty".to_string()];
    let mut out = Vec::new();
    let err = convert(
        &registry(),
        "json",
        &from_args,
        "json",
        &to_args,
        "[]".as_bytes(),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::OutputInit(_)));
    assert!(out.is_empty());
}

#[test]
fn regex_non_matching_line_aborts() {
    let err = run("regex", &[r"^\d+$"], "jsonl", "1\nnope\n").unwrap_err();
    let ConvertError::Decode { line, .. } = err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(line, 2);
}
