//! Integration tests for parameter lists
//!
//! Tests parsing modes and set behavior.

use embargo_foundation::{ErrorKind, ParamParsing, ParamSet, parse_param_list};

#[test]
fn parses_trimmed_tokens() {
    let parsed = parse_param_list(1, " 30 , 489,529 ", ParamParsing::Strict).unwrap();
    assert_eq!(parsed.ids.iter().collect::<Vec<_>>(), vec![30, 489, 529]);
    assert!(parsed.dropped.is_empty());
}

#[test]
fn empty_tokens_are_skipped() {
    for text in ["", ",", " , ,", "7,,"] {
        let parsed = parse_param_list(1, text, ParamParsing::Strict).unwrap();
        assert!(parsed.ids.len() <= 1);
    }
}

#[test]
fn strict_rejects_bad_token() {
    let err = parse_param_list(42, "1,two,3", ParamParsing::Strict).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedParam {
        entry: 42,
        token: "two".to_string()
    });
}

#[test]
fn lenient_drops_bad_token() {
    let parsed = parse_param_list(42, "1,two,-3,4", ParamParsing::Lenient).unwrap();
    assert_eq!(parsed.ids.iter().collect::<Vec<_>>(), vec![1, 4]);
    assert_eq!(parsed.dropped, vec!["two".to_string(), "-3".to_string()]);
}

#[test]
fn default_mode_is_strict() {
    assert_eq!(ParamParsing::default(), ParamParsing::Strict);
}

#[test]
fn set_display_is_comma_joined() {
    let set: ParamSet = [5, 1, 3].into_iter().collect();
    assert_eq!(set.to_string(), "1,3,5");
}
