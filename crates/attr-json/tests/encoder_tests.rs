/// Encoder contract tests: attribute value trees → JSON text.
///
/// Covers scalars, sequences, mappings with key renaming, nesting, the
/// skip/rename options and the error policy for unknown and unsupported values.
use attr_json::{to_json_string, to_json_string_with, AttrValue, ConvertError, ConvertOptions};

fn encode(value: &AttrValue) -> String {
    to_json_string(value).expect("encode failed")
}

/// Output must parse with serde_json and equal the expected JSON.
fn assert_parses_to(value: &AttrValue, expected: serde_json::Value) {
    let text = encode(value);
    let parsed: serde_json::Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("output is not valid JSON ({e}): {text}"));
    assert_eq!(parsed, expected, "output: {text}");
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_bool_true() {
    assert_eq!(encode(&AttrValue::Bool(true)), "true");
}

#[test]
fn scenario_integer() {
    assert_eq!(encode(&AttrValue::Int64(42)), "42");
}

#[test]
fn scenario_string() {
    assert_eq!(encode(&AttrValue::from("hello")), r#""hello""#);
}

#[test]
fn scenario_string_list() {
    let list = AttrValue::list([AttrValue::from("a"), AttrValue::from("b")]);
    assert_eq!(encode(&list), r#"["a","b"]"#);
}

#[test]
fn scenario_nested_resource_link() {
    let value = AttrValue::object([(
        "source_ref",
        AttrValue::object([("id", AttrValue::from("abc"))]),
    )]);
    assert_eq!(encode(&value), r#"{"sourceRef":{"id":"abc"}}"#);
}

#[test]
fn scenario_unsupported_field_fails_loudly() {
    let value = AttrValue::object([
        ("name", AttrValue::from("x")),
        ("weird", AttrValue::Unsupported("tuple".into())),
    ]);
    let err = to_json_string(&value).unwrap_err();
    match err {
        ConvertError::Unsupported { path, type_name } => {
            assert_eq!(path.to_string(), "weird");
            assert_eq!(type_name, "tuple");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn bool_false() {
    assert_eq!(encode(&AttrValue::Bool(false)), "false");
}

#[test]
fn negative_and_extreme_integers() {
    assert_eq!(encode(&AttrValue::Int64(-7)), "-7");
    assert_eq!(encode(&AttrValue::Int64(0)), "0");
    assert_eq!(encode(&AttrValue::Int64(i64::MIN)), "-9223372036854775808");
    assert_eq!(encode(&AttrValue::Int64(i64::MAX)), "9223372036854775807");
}

#[test]
fn floats_use_shortest_positional_form() {
    assert_eq!(encode(&AttrValue::Float64(3.14)), "3.14");
    assert_eq!(encode(&AttrValue::Float64(1.0)), "1");
    assert_eq!(encode(&AttrValue::Float64(-0.5)), "-0.5");
    assert_eq!(encode(&AttrValue::Float64(1e21)), "1000000000000000000000");
    assert_eq!(encode(&AttrValue::Float64(2.5e-5)), "0.000025");
}

#[test]
fn non_finite_float_is_an_error() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = to_json_string(&AttrValue::Float64(f)).unwrap_err();
        assert!(matches!(err, ConvertError::NonFiniteFloat { .. }), "{err}");
    }
}

#[test]
fn empty_string() {
    assert_eq!(encode(&AttrValue::from("")), r#""""#);
}

#[test]
fn string_values_are_not_renamed() {
    assert_eq!(encode(&AttrValue::from("snake_case_value")), r#""snake_case_value""#);
}

#[test]
fn strings_with_quotes_and_control_characters_parse_back() {
    let raw = "say \"hi\"\\\n\ttab\u{1}";
    assert_parses_to(&AttrValue::from(raw), serde_json::Value::String(raw.into()));
}

#[test]
fn null_is_json_null() {
    assert_eq!(encode(&AttrValue::Null), "null");
}

#[test]
fn unknown_root_is_an_error() {
    let err = to_json_string(&AttrValue::Unknown).unwrap_err();
    match err {
        ConvertError::UnknownValue { path } => assert!(path.is_root()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_root_is_an_error() {
    let err = to_json_string(&AttrValue::Unsupported("dynamic".into())).unwrap_err();
    assert_eq!(err.to_string(), "value at <root> has unsupported type `dynamic`");
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn empty_list_and_set() {
    assert_eq!(encode(&AttrValue::empty_list()), "[]");
    assert_eq!(encode(&AttrValue::empty_set()), "[]");
}

#[test]
fn list_is_concatenation_of_element_encodings() {
    let items = vec![
        AttrValue::from(1i64),
        AttrValue::from("two"),
        AttrValue::from(true),
        AttrValue::from(4.5),
        AttrValue::Null,
    ];
    let expected = format!(
        "[{}]",
        items.iter().map(encode).collect::<Vec<_>>().join(",")
    );
    assert_eq!(encode(&AttrValue::list(items)), expected);
    assert_eq!(expected, r#"[1,"two",true,4.5,null]"#);
}

#[test]
fn set_keeps_container_order() {
    let set = AttrValue::set(["openid", "profile", "email"].map(AttrValue::from));
    assert_eq!(encode(&set), r#"["openid","profile","email"]"#);
}

#[test]
fn nested_lists() {
    let value = AttrValue::list([
        AttrValue::list([AttrValue::from(1i64), AttrValue::from(2i64)]),
        AttrValue::empty_list(),
    ]);
    assert_eq!(encode(&value), "[[1,2],[]]");
}

#[test]
fn unknown_list_element_reports_index() {
    let value = AttrValue::object([(
        "scopes",
        AttrValue::list([AttrValue::from("a"), AttrValue::Unknown]),
    )]);
    let err = to_json_string(&value).unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "scopes[1]");
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn empty_object_and_map() {
    assert_eq!(encode(&AttrValue::object(Vec::<(String, AttrValue)>::new())), "{}");
    assert_eq!(encode(&AttrValue::empty_map()), "{}");
}

#[test]
fn object_keys_are_camel_cased_in_insertion_order() {
    let value = AttrValue::object([
        ("target_resource_sso", AttrValue::from(true)),
        ("valid_domain", AttrValue::from("example.com")),
        ("id", AttrValue::from("w1")),
    ]);
    assert_eq!(
        encode(&value),
        r#"{"targetResourceSso":true,"validDomain":"example.com","id":"w1"}"#
    );
}

#[test]
fn map_keys_are_camel_cased_by_default() {
    let value = AttrValue::map([("first_key", AttrValue::from(1i64)), ("second", AttrValue::from(2i64))]);
    assert_eq!(encode(&value), r#"{"firstKey":1,"second":2}"#);
}

#[test]
fn map_keys_verbatim_when_renaming_disabled() {
    let value = AttrValue::object([(
        "extended_properties",
        AttrValue::map([("cost_center", AttrValue::from("42"))]),
    )]);
    let options = ConvertOptions::new().rename_map_keys(false);
    assert_eq!(
        to_json_string_with(&value, &options).unwrap(),
        r#"{"extendedProperties":{"cost_center":"42"}}"#
    );
}

#[test]
fn entry_count_matches_mapping_size() {
    let value = AttrValue::object((0..10).map(|i| (format!("attr_{i}"), AttrValue::from(i as i64))));
    let parsed: serde_json::Value = serde_json::from_str(&encode(&value)).unwrap();
    let obj = parsed.as_object().unwrap();
    assert_eq!(obj.len(), 10);
    assert!(obj.keys().all(|k| k.starts_with("attr") && !k.contains('_')));
}

#[test]
fn attributes_renaming_to_the_same_key_are_an_error() {
    let value = AttrValue::object([("a_b", AttrValue::from(1i64)), ("aB", AttrValue::from(2i64))]);
    match to_json_string(&value).unwrap_err() {
        ConvertError::DuplicateKey { path, key } => {
            assert_eq!(path.to_string(), "aB");
            assert_eq!(key, "aB");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn map_keys_colliding_after_rename_are_an_error() {
    let value = AttrValue::object([(
        "extended_properties",
        AttrValue::map([("cost_center", AttrValue::from("42")), ("costCenter", AttrValue::from("7"))]),
    )]);
    let err = to_json_string(&value).unwrap_err();
    assert!(matches!(err, ConvertError::DuplicateKey { .. }), "{err}");
    assert_eq!(err.path().unwrap().to_string(), r#"extended_properties["costCenter"]"#);

    let verbatim = ConvertOptions::new().rename_map_keys(false);
    assert_eq!(
        to_json_string_with(&value, &verbatim).unwrap(),
        r#"{"extendedProperties":{"cost_center":"42","costCenter":"7"}}"#
    );
}

#[test]
fn skipped_entry_does_not_collide() {
    let value = AttrValue::object([("a_b", AttrValue::Null), ("aB", AttrValue::from(2i64))]);
    let options = ConvertOptions::new().skip_undefined_attributes(true);
    assert_eq!(to_json_string_with(&value, &options).unwrap(), r#"{"aB":2}"#);
}

#[test]
fn keys_needing_escapes_are_escaped() {
    let value = AttrValue::map([("say \"hi\"", AttrValue::Null)]);
    assert_parses_to(&value, serde_json::json!({"say \"hi\"": null}));
}

#[test]
fn null_attributes_written_by_default() {
    let value = AttrValue::object([("name", AttrValue::from("x")), ("description", AttrValue::Null)]);
    assert_eq!(encode(&value), r#"{"name":"x","description":null}"#);
}

#[test]
fn unknown_attribute_is_an_error_by_default() {
    let value = AttrValue::object([("id", AttrValue::Unknown)]);
    let err = to_json_string(&value).unwrap_err();
    assert_eq!(err.to_string(), "value at id is unknown and has no JSON representation");
}

// ============================================================================
// Skipping undefined attributes
// ============================================================================

#[test]
fn skip_drops_null_and_unknown_entries() {
    let value = AttrValue::object([
        ("id", AttrValue::Unknown),
        ("name", AttrValue::from("contract")),
        ("description", AttrValue::Null),
        ("core_attributes", AttrValue::empty_set()),
    ]);
    let options = ConvertOptions::new().skip_undefined_attributes(true);
    assert_eq!(
        to_json_string_with(&value, &options).unwrap(),
        r#"{"name":"contract","coreAttributes":[]}"#
    );
}

#[test]
fn skip_leaves_no_dangling_commas() {
    let options = ConvertOptions::new().skip_undefined_attributes(true);
    let leading = AttrValue::object([("a", AttrValue::Null), ("b", AttrValue::from(1i64))]);
    let trailing = AttrValue::object([("a", AttrValue::from(1i64)), ("b", AttrValue::Unknown)]);
    let all = AttrValue::map([("a", AttrValue::Null), ("b", AttrValue::Unknown)]);
    assert_eq!(to_json_string_with(&leading, &options).unwrap(), r#"{"b":1}"#);
    assert_eq!(to_json_string_with(&trailing, &options).unwrap(), r#"{"a":1}"#);
    assert_eq!(to_json_string_with(&all, &options).unwrap(), "{}");
}

#[test]
fn skip_applies_at_every_depth_but_not_to_list_elements() {
    let value = AttrValue::object([(
        "white_list",
        AttrValue::list([
            AttrValue::object([("valid_domain", AttrValue::from("a.com")), ("valid_path", AttrValue::Null)]),
            AttrValue::Null,
        ]),
    )]);
    let options = ConvertOptions::new().skip_undefined_attributes(true);
    assert_eq!(
        to_json_string_with(&value, &options).unwrap(),
        r#"{"whiteList":[{"validDomain":"a.com"},null]}"#
    );
}

#[test]
fn skip_does_not_hide_unknown_list_elements() {
    let value = AttrValue::list([AttrValue::Unknown]);
    let options = ConvertOptions::new().skip_undefined_attributes(true);
    assert!(matches!(
        to_json_string_with(&value, &options),
        Err(ConvertError::UnknownValue { .. })
    ));
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn mapping_list_mapping_nesting() {
    let value = AttrValue::object([(
        "scope_groups",
        AttrValue::set([
            AttrValue::object([
                ("name", AttrValue::from("admin")),
                ("scopes", AttrValue::set([AttrValue::from("read"), AttrValue::from("write")])),
            ]),
            AttrValue::object([
                ("name", AttrValue::from("user")),
                ("scopes", AttrValue::empty_set()),
            ]),
        ]),
    )]);
    assert_eq!(
        encode(&value),
        r#"{"scopeGroups":[{"name":"admin","scopes":["read","write"]},{"name":"user","scopes":[]}]}"#
    );
}

#[test]
fn deep_nesting_error_path() {
    let value = AttrValue::object([(
        "policy",
        AttrValue::object([(
            "root_node",
            AttrValue::object([(
                "children",
                AttrValue::list([AttrValue::map([("x_y", AttrValue::Unsupported("custom".into()))])]),
            )]),
        )]),
    )]);
    let err = to_json_string(&value).unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), r#"policy.root_node.children[0]["x_y"]"#);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let mut value = AttrValue::from("leaf");
    for _ in 0..50 {
        value = AttrValue::object([("child_node", AttrValue::list([value]))]);
    }
    let text = encode(&value);
    assert!(text.starts_with(r#"{"childNode":[{"childNode":["#));
    assert!(text.contains(r#""leaf""#));
    serde_json::from_str::<serde_json::Value>(&text).expect("valid JSON");
}
