//! Property-based tests for field invariants
//!
//! These tests check the acceptance rules over generated text, including
//! characters outside the basic multilingual plane.

use elsyser_client::domain::coercion::coerce_to_text;
use elsyser_client::domain::{
    is_valid_content, is_valid_email, is_valid_name, is_valid_password, is_valid_title, utf16_len,
    FieldKind, FormKind,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Property test generators
pub mod generators {
    use super::*;
    use proptest::string::string_regex;

    /// Text mixing ASCII, Cyrillic and emoji
    pub fn mixed_text() -> impl Strategy<Value = String> {
        string_regex("[a-zA-Zа-яА-Я0-9 😀🎓]{0,70}").unwrap()
    }

    /// JSON values that are not strings
    pub fn non_text_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            (-1e12f64..1e12).prop_map(|n| json!(n)),
            prop::collection::vec("[a-z0-9]{0,8}", 0..4).prop_map(|items| json!(items)),
            Just(json!({"nested": "object"})),
        ]
    }

    /// Form payloads with arbitrary field values
    pub fn payload() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map(
            prop_oneof![
                Just("username".to_string()),
                Just("email".to_string()),
                Just("password".to_string()),
                Just("title".to_string()),
                Just("content".to_string()),
            ],
            prop_oneof![mixed_text().prop_map(Value::String), non_text_value()],
            0..5,
        )
        .prop_map(|fields| fields.into_iter().collect())
    }
}

fn length_range(kind: FieldKind) -> std::ops::RangeInclusive<usize> {
    match kind {
        FieldKind::Name => 3..=30,
        FieldKind::Title => 3..=60,
        FieldKind::Content => 5..=1000,
        FieldKind::Email | FieldKind::Password => unreachable!("not a length rule"),
    }
}

type Rule = Box<dyn Fn(Option<&Value>) -> bool>;

/// Length rules only take real strings
fn strict(rule: fn(&str) -> bool) -> Rule {
    Box::new(move |value: Option<&Value>| value.and_then(Value::as_str).is_some_and(rule))
}

/// Email and password read any value through its browser text
fn coerced(rule: fn(&str) -> bool) -> Rule {
    Box::new(move |value: Option<&Value>| rule(&coerce_to_text(value)))
}

/// Fields each form submits, in the order rejections are reported
fn expected_fields(form: FormKind) -> Vec<(&'static str, Rule)> {
    let username = strict(is_valid_name);
    let email = coerced(is_valid_email);
    let password = coerced(is_valid_password);
    let title = strict(is_valid_title);
    let content = strict(is_valid_content);

    match form {
        FormKind::Login => vec![("username", username), ("password", password)],
        FormKind::Register => vec![
            ("username", username),
            ("email", email),
            ("password", password),
        ],
        FormKind::News => vec![("title", title), ("content", content)],
        FormKind::Comment => vec![("content", content)],
    }
}

proptest! {
    #[test]
    fn prop_length_rules_count_utf16_units(s in generators::mixed_text()) {
        for kind in [FieldKind::Name, FieldKind::Title, FieldKind::Content] {
            prop_assert_eq!(kind.accepts(&s), length_range(kind).contains(&utf16_len(&s)));
        }
    }

    #[test]
    fn prop_length_rules_reject_non_text(value in generators::non_text_value()) {
        for kind in [FieldKind::Name, FieldKind::Title, FieldKind::Content] {
            prop_assert!(!kind.accepts_value(Some(&value)));
        }
    }

    #[test]
    fn prop_coercing_rules_see_browser_text(value in generators::non_text_value()) {
        let text = coerce_to_text(Some(&value));
        for kind in [FieldKind::Email, FieldKind::Password] {
            prop_assert_eq!(kind.accepts_value(Some(&value)), kind.accepts(&text));
        }
    }

    #[test]
    fn prop_check_rejects_exactly_the_failing_fields(fields in generators::payload()) {
        for form in [FormKind::Login, FormKind::Register, FormKind::News, FormKind::Comment] {
            let rejected: Vec<&str> = form.check(&fields).iter().map(|r| r.field).collect();
            let expected: Vec<&str> = expected_fields(form)
                .into_iter()
                .filter(|(name, rule)| !rule(fields.get(*name)))
                .map(|(name, _)| name)
                .collect();
            prop_assert_eq!(rejected, expected);
        }
    }

    #[test]
    fn prop_rules_are_stable_across_calls(s in generators::mixed_text()) {
        for kind in FieldKind::ALL {
            prop_assert_eq!(kind.accepts(&s), kind.accepts(&s));
        }
    }
}
