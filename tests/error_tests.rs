use textfmt::{
    args, format, format_to, format_to_n, formatted_size, parse, Error, ErrorKind, Template,
    MAX_COUNT,
};

fn kind(template: &str) -> ErrorKind {
    format(template, &args![1, 2, "s", 1.5]).unwrap_err().kind()
}

#[test]
fn test_bad_format_is_a_type_error() {
    let err = format("Using format: {:s}", &args![10]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(
        err.to_string(),
        "Invalid format for integer argument: invalid type 's'"
    );
}

#[test]
fn test_syntax_errors() {
    for template in ["{", "}", "{0", "{:", "x}y", "{:.}", "{:q}", "{:{}", "{0:{x}"] {
        assert_eq!(kind(template), ErrorKind::Syntax, "template {:?}", template);
    }

    assert_eq!(
        format("abc}", &args![]).unwrap_err(),
        Error::syntax(
            3,
            "unmatched '}' in format string (use '}}' for a literal brace)"
        )
    );
    assert_eq!(
        format("ab{:>5", &args![1]).unwrap_err(),
        Error::syntax(2, "unterminated replacement field")
    );
}

#[test]
fn test_argument_index_errors() {
    assert_eq!(
        format("{} {1}", &args![1, 2]).unwrap_err().kind(),
        ErrorKind::ArgumentIndex
    );
    assert_eq!(
        format("{1} {}", &args![1, 2]).unwrap_err().kind(),
        ErrorKind::ArgumentIndex
    );
    assert_eq!(
        format("{:{1}}", &args![1, 2]).unwrap_err().kind(),
        ErrorKind::ArgumentIndex
    );
    assert_eq!(
        format("{} {} {}", &args![1, 2]).unwrap_err(),
        Error::argument_index(2, 2)
    );
    assert_eq!(
        format("{5}", &args![1]).unwrap_err(),
        Error::argument_index(5, 1)
    );
    assert_eq!(
        format("{missing}", &args![1]).unwrap_err(),
        Error::unknown_argument("missing")
    );
}

#[test]
fn test_type_errors() {
    for template in [
        "{2:d}",
        "{2:+}",
        "{2:#}",
        "{2:05}",
        "{0:.2}",
        "{0:f}",
        "{0:s}",
        "{3:d}",
        "{3:c}",
        "{3:p}",
    ] {
        assert_eq!(kind(template), ErrorKind::Type, "template {:?}", template);
    }

    assert_eq!(kind("{:{2}}"), ErrorKind::Type);
    assert_eq!(
        format("{:{}}", &args![1, -3]).unwrap_err(),
        Error::type_error("integer", "dynamic width must be a non-negative integer")
    );
}

#[test]
fn test_count_limit() {
    assert_eq!(
        format("{:18446744073709551615}", &args![1]).unwrap_err(),
        Error::syntax(2, "number is too big")
    );
    assert_eq!(
        formatted_size("{:300000000}", &args![1]).unwrap_err(),
        Error::syntax(2, "number is too big")
    );
    assert_eq!(
        format("{:.99999999999999999999999f}", &args![1.0])
            .unwrap_err()
            .kind(),
        ErrorKind::Syntax
    );

    assert_eq!(
        format("{:{}}", &args![1, 300_000_000]).unwrap_err(),
        Error::type_error("integer", "dynamic width exceeds 1048576")
    );
    assert_eq!(
        formatted_size("{:.{}f}", &args![1.0, u64::MAX]).unwrap_err(),
        Error::type_error("integer", "dynamic precision exceeds 1048576")
    );

    let widest = format!("{{:{}}}", MAX_COUNT);
    assert_eq!(formatted_size(&widest, &args![1]).unwrap(), MAX_COUNT);
    assert_eq!(
        formatted_size("{:{}}", &args!["x", MAX_COUNT]).unwrap(),
        MAX_COUNT
    );
}

#[test]
fn test_no_partial_output_on_error() {
    let mut out = String::from("kept");
    let result = format_to(&mut out, "{} then {:d}", &args![1, "oops"]);
    assert!(result.is_err());
    assert_eq!(out, "kept");
}

#[test]
fn test_bounded_sink_keeps_valid_prefix_on_error() {
    let mut buf = [0u8; 16];
    let err = format_to_n(&mut buf, "ok {} {:d}", &args![7, "bad"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(&buf[..5], b"ok 7 ");
}

#[test]
fn test_parse_reports_first_error_and_stops() {
    let mut segments = parse("a{0}b{}c");
    assert!(segments.next().unwrap().is_ok());
    assert!(segments.next().unwrap().is_ok());
    assert!(segments.next().unwrap().is_ok());
    assert_eq!(
        segments.next().unwrap().unwrap_err().kind(),
        ErrorKind::ArgumentIndex
    );
    assert!(segments.next().is_none());

    assert_eq!(Template::parse("{:>").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::argument_index(3, 1).to_string(),
        "Argument index 3 is out of range (1 argument(s) supplied)"
    );
    assert_eq!(
        Error::unknown_argument("w").to_string(),
        "No argument named 'w'"
    );
}
