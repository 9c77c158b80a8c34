use cjson::{parse, serialize, Member, ParseError, Reset, Value};

#[test]
fn parses_the_three_literals() {
    assert_eq!(parse(b"null").unwrap(), Value::Null);
    assert_eq!(parse(b"true").unwrap(), Value::True);
    assert_eq!(parse(b"false").unwrap(), Value::False);
}

#[test]
fn parses_a_range_of_numbers() {
    let cases: &[(f64, &[u8])] = &[
        (0.0, b"0"),
        (0.0, b"-0"),
        (0.0, b"-0.0"),
        (1.0, b"1"),
        (-1.0, b"-1"),
        (1.5, b"1.5"),
        (-1.5, b"-1.5"),
        (3.1416, b"3.1416"),
        (1E10, b"1E10"),
        (1e10, b"1e10"),
        (1E+10, b"1E+10"),
        (1E-10, b"1E-10"),
        (1.234E+10, b"1.234E+10"),
        (1.234E-10, b"1.234E-10"),
        (0.0, b"1e-10000"),
        (1.0000000000000002, b"1.0000000000000002"),
        (4.9406564584124654e-324, b"4.9406564584124654e-324"),
        (-4.9406564584124654e-324, b"-4.9406564584124654e-324"),
        (2.2250738585072009e-308, b"2.2250738585072009e-308"),
        (2.2250738585072014e-308, b"2.2250738585072014e-308"),
        (1.7976931348623157e+308, b"1.7976931348623157e+308"),
        (-1.7976931348623157e+308, b"-1.7976931348623157e+308"),
    ];
    for (expect, json) in cases {
        let v = parse(json).unwrap();
        assert_eq!(v, Value::Number(*expect), "{:?}", std::str::from_utf8(json));
    }
}

#[test]
fn parses_strings_with_escapes() {
    assert_eq!(parse(br#""""#).unwrap(), Value::string(&b""[..]));
    assert_eq!(parse(br#""Hello""#).unwrap(), Value::string(&b"Hello"[..]));
    assert_eq!(
        parse(br#""Hello\nWorld""#).unwrap(),
        Value::string(&b"Hello\nWorld"[..])
    );
    assert_eq!(
        parse(br#""\" \\ \/ \b \f \n \r \t""#).unwrap(),
        Value::string(&b"\" \\ / \x08 \x0C \n \r \t"[..])
    );
}

#[test]
fn expect_value_on_empty_or_blank_input() {
    assert_eq!(parse(b""), Err(ParseError::ExpectValue));
    assert_eq!(parse(b" "), Err(ParseError::ExpectValue));
}

#[test]
fn invalid_value_on_malformed_literals_and_numbers() {
    for json in [
        "nul", "falss", "?", "+0", "+1", ".123", "1.", "1em", "INF", "inf", "NAN", "nan",
    ] {
        assert_eq!(
            parse(json.as_bytes()),
            Err(ParseError::InvalidValue),
            "{json}"
        );
    }
}

#[test]
fn root_not_singular_on_trailing_garbage() {
    for json in ["true ?", "0123", "0x0", "0x123"] {
        assert_eq!(
            parse(json.as_bytes()),
            Err(ParseError::RootNotSingular),
            "{json}"
        );
    }
}

#[test]
fn number_too_big_on_overflow_to_infinity() {
    assert_eq!(parse(b"1e309"), Err(ParseError::NumberTooBig));
    assert_eq!(parse(b"-1e309"), Err(ParseError::NumberTooBig));
}

#[test]
fn miss_quotation_mark_on_unterminated_strings() {
    assert_eq!(parse(br#"""#), Err(ParseError::MissQuotationMark));
    assert_eq!(parse(br#""abc"#), Err(ParseError::MissQuotationMark));
}

#[test]
fn invalid_string_escape_on_unknown_escape_letters() {
    for json in [r#""\v""#, r#""\'""#, r#""\0""#, r#""\x12""#] {
        assert_eq!(
            parse(json.as_bytes()),
            Err(ParseError::InvalidStringEscape),
            "{json}"
        );
    }
}

#[test]
fn invalid_string_char_on_raw_control_bytes() {
    assert_eq!(parse(b"\"\x01\""), Err(ParseError::InvalidStringChar));
    assert_eq!(parse(b"\"\x1F\""), Err(ParseError::InvalidStringChar));
}

#[test]
fn invalid_unicode_hex_on_short_or_non_hex_escape() {
    assert_eq!(
        parse(br#""\u12""#),
        Err(ParseError::InvalidUnicodeHex)
    );
    assert_eq!(
        parse(br#""\u12zz""#),
        Err(ParseError::InvalidUnicodeHex)
    );
}

#[test]
fn invalid_unicode_surrogate_on_lone_or_mismatched_surrogates() {
    assert_eq!(
        parse(br#""\uD800""#),
        Err(ParseError::InvalidUnicodeSurrogate)
    );
    assert_eq!(
        parse(br#""\uD800\uD800""#),
        Err(ParseError::InvalidUnicodeSurrogate)
    );
    assert_eq!(
        parse(br#""\uDC00""#),
        Err(ParseError::InvalidUnicodeSurrogate)
    );
}

#[test]
fn surrogate_pair_decodes_to_the_correct_utf8() {
    let v = parse("\"\u{1D11E}\"".as_bytes()).unwrap();
    assert_eq!(v, Value::string("𝄞".as_bytes()));
}

#[test]
fn array_error_taxonomy() {
    assert_eq!(
        parse(b"[1, 2"),
        Err(ParseError::MissCommaOrSquareBracket)
    );
    assert_eq!(
        parse(b"[1 2]"),
        Err(ParseError::MissCommaOrSquareBracket)
    );
    assert_eq!(parse(b"[,]"), Err(ParseError::InvalidValue));
}

#[test]
fn object_error_taxonomy() {
    assert_eq!(parse(br#"{1: 2}"#), Err(ParseError::MissKey));
    assert_eq!(parse(br#"{"a" 1}"#), Err(ParseError::MissColon));
    assert_eq!(
        parse(br#"{"a": 1 "b": 2}"#),
        Err(ParseError::MissCommaOrCurlyBracket)
    );
}

#[test]
fn depth_limit_guards_against_unbounded_recursion() {
    let deeply_nested = "[".repeat(10000);
    assert_eq!(
        parse(deeply_nested.as_bytes()),
        Err(ParseError::DepthLimitExceeded)
    );
}

#[test]
fn parses_nested_arrays_and_objects() {
    let json = br#"{
        "Image": {
            "Width": 800,
            "Height": 600,
            "Title": "View from 15th Floor",
            "Thumbnail": {
                "Url": "http://www.example.com/image/481989943",
                "Height": 125,
                "Width": 100
            },
            "Animated": false,
            "IDs": [116, 943, 234, 38793]
        }
    }"#;
    let value = parse(json).unwrap();
    let image = value.find_member(b"Image").unwrap();
    assert_eq!(image.find_member(b"Width"), Some(&Value::Number(800.0)));
    assert_eq!(image.find_member(b"Animated"), Some(&Value::False));
    let ids = image.find_member(b"IDs").unwrap();
    match ids {
        Value::Array(elements) => assert_eq!(elements.len(), 4),
        _ => panic!("expected array"),
    }
}

#[test]
fn duplicate_keys_are_kept_and_first_match_wins_on_lookup() {
    let value = parse(br#"{"a": 1, "a": 2}"#).unwrap();
    match &value {
        Value::Object(members) => assert_eq!(members.len(), 2),
        _ => panic!("expected object"),
    }
    assert_eq!(value.find_member(b"a"), Some(&Value::Number(1.0)));
}

#[test]
fn structural_equality_ignores_object_member_order() {
    let a = parse(br#"{"a": 1, "b": 2}"#).unwrap();
    let b = parse(br#"{"b": 2, "a": 1}"#).unwrap();
    assert!(a.eq_structural(&b));
}

#[test]
fn structural_equality_is_order_sensitive_for_arrays() {
    let a = parse(b"[1, 2]").unwrap();
    let b = parse(b"[2, 1]").unwrap();
    assert!(!a.eq_structural(&b));
}

#[test]
fn serialization_round_trips_through_serde_json_as_an_oracle() {
    let documents = [
        r#"{"a":[1,2,3],"b":"text","c":null,"d":true,"e":false}"#,
        r#"[1,-1.5,3.1416,1e10,-1e-10]"#,
        r#""hello world""#,
        "null",
        "[[1,2],[3,4]]",
    ];
    for json in documents {
        let ours = parse(json.as_bytes()).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&serialize(&ours)).unwrap(), theirs);
    }
}

#[test]
fn serializer_output_always_reparses_to_an_equal_tree() {
    let json = br#"{"a":[1,2,3],"b":{"c":"text with \"quotes\" and a / slash"},"d":[true,false,null]}"#;
    let value = parse(json).unwrap();
    let text = serialize(&value);
    let reparsed = parse(text.as_bytes()).unwrap();
    assert!(value.eq_structural(&reparsed));
}

#[test]
fn serializer_leaves_forward_slash_unescaped() {
    let value = Value::string(&b"a/b/c"[..]);
    assert_eq!(serialize(&value), r#""a/b/c""#);
}

#[test]
fn reset_releases_a_whole_tree_back_to_null() {
    let mut value = parse(br#"{"a": [1, 2, {"b": 3}]}"#).unwrap();
    value.reset();
    assert!(value.is_null());
}

#[test]
fn member_new_builds_a_member_directly() {
    let m = Member::new(b"key".to_vec(), Value::Number(1.0));
    assert_eq!(m.key, b"key");
    assert_eq!(m.value, Value::Number(1.0));
}
