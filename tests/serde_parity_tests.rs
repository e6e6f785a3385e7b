#![cfg(all(feature = "json", feature = "yaml"))]

//! Serialization parity between `Optional<T>` and `Option<T>`.
//!
//! An `Optional` must encode exactly like the nullable value it stands in
//! for, in every supported format, and decode back to the same state.

use proptest::prelude::*;
use rstest::rstest;
use satchel::codec::{from_json, from_yaml, to_json, to_yaml};
use satchel::containers::{Map, OrderedSet};
use satchel::optional::Optional;
use serde::{Deserialize, Serialize};

// =============================================================================
// Test data types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    #[serde(default)]
    nickname: Optional<String>,
    #[serde(default)]
    age: Optional<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct RawProfile {
    name: String,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    age: Option<u8>,
}

impl From<&Profile> for RawProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            nickname: profile.nickname.to_option(),
            age: profile.age.to_option(),
        }
    }
}

fn ada(nickname: Optional<String>, age: Optional<u8>) -> Profile {
    Profile {
        name: "ada".into(),
        nickname,
        age,
    }
}

// =============================================================================
// Byte parity
// =============================================================================

#[rstest]
#[case::none(None)]
#[case::zero(Some(0))]
#[case::negative(Some(-17))]
fn test_integer_parity(#[case] raw: Option<i64>) {
    let optional = Optional::from(raw);
    assert_eq!(to_json(&optional).unwrap(), to_json(&raw).unwrap());
    assert_eq!(to_yaml(&optional).unwrap(), to_yaml(&raw).unwrap());
}

#[rstest]
fn test_empty_string_is_not_null() {
    let empty = Optional::some(String::new());
    let absent = Optional::<String>::none();

    assert_ne!(empty, absent);
    assert_eq!(to_json(&empty).unwrap(), r#""""#);
    assert_eq!(to_json(&absent).unwrap(), "null");
    assert_ne!(to_yaml(&empty).unwrap(), to_yaml(&absent).unwrap());
}

#[rstest]
#[case::both_absent(ada(Optional::none(), Optional::none()))]
#[case::both_present(ada(Optional::some("al".into()), Optional::some(36)))]
#[case::empty_nickname(ada(Optional::some(String::new()), Optional::none()))]
fn test_struct_field_parity(#[case] profile: Profile) {
    let raw = RawProfile::from(&profile);

    let json = to_json(&profile).unwrap();
    assert_eq!(json, to_json(&raw).unwrap());
    assert_eq!(from_json::<Profile>(&json).unwrap(), profile);

    let yaml = to_yaml(&profile).unwrap();
    assert_eq!(yaml, to_yaml(&raw).unwrap());
    assert_eq!(from_yaml::<Profile>(&yaml).unwrap(), profile);
}

#[rstest]
fn test_nested_sequence_parity() {
    let optional = vec![Optional::some(1), Optional::none(), Optional::some(3)];
    let raw = vec![Some(1), None, Some(3)];

    assert_eq!(to_json(&optional).unwrap(), "[1,null,3]");
    assert_eq!(to_json(&optional).unwrap(), to_json(&raw).unwrap());
    assert_eq!(to_yaml(&optional).unwrap(), to_yaml(&raw).unwrap());
}

#[rstest]
fn test_containers_hold_optionals() {
    let map = Map::from([
        ("present".to_string(), Optional::some(1)),
        ("absent".to_string(), Optional::none()),
    ]);
    let restored: Map<String, Optional<i32>> = from_json(&to_json(&map).unwrap()).unwrap();
    assert_eq!(restored, map);

    let set = OrderedSet::from([Optional::some(2), Optional::none()]);
    let restored: OrderedSet<Optional<i32>> = from_yaml(&to_yaml(&set).unwrap()).unwrap();
    assert_eq!(restored, set);
}

// =============================================================================
// Decoding
// =============================================================================

#[rstest]
#[case::json_null("null", Optional::none())]
#[case::json_value("42", Optional::some(42))]
fn test_json_decoding(#[case] text: &str, #[case] expected: Optional<u16>) {
    assert_eq!(from_json::<Optional<u16>>(text).unwrap(), expected);
}

#[rstest]
#[case::yaml_null("null", Optional::none())]
#[case::yaml_tilde("~", Optional::none())]
#[case::yaml_value("42", Optional::some(42))]
fn test_yaml_decoding(#[case] text: &str, #[case] expected: Optional<u16>) {
    assert_eq!(from_yaml::<Optional<u16>>(text).unwrap(), expected);
}

#[rstest]
fn test_missing_field_is_none() {
    let profile: Profile = from_json(r#"{"name":"ada"}"#).unwrap();
    assert_eq!(profile.nickname, Optional::none());
    assert_eq!(profile.age, Optional::none());
}

#[rstest]
fn test_inner_failure_is_surfaced() {
    let error = from_json::<Profile>(r#"{"name":"ada","age":300}"#).unwrap_err();
    assert!(error.is_deserialize());
    assert!(error.to_string().contains("300"), "{error}");

    let error = from_yaml::<Profile>("name: ada\nage: old\n").unwrap_err();
    assert_eq!(error.format(), "yaml");
}

#[rstest]
#[case::truncated_null("nul")]
#[case::bare_word("none")]
#[case::unterminated("[1")]
fn test_malformed_json_is_never_none(#[case] text: &str) {
    assert!(from_json::<Optional<Vec<i32>>>(text).is_err());
}

// =============================================================================
// Property-based parity
// =============================================================================

proptest! {
    #[test]
    fn prop_json_parity_for_strings(raw in proptest::option::of(".*")) {
        let optional = Optional::from(raw.clone());
        let json = to_json(&optional).unwrap();
        prop_assert_eq!(&json, &to_json(&raw).unwrap());
        prop_assert_eq!(from_json::<Optional<String>>(&json).unwrap(), optional);
    }

    #[test]
    fn prop_yaml_parity_for_integers(raw in proptest::option::of(any::<i64>())) {
        let optional = Optional::from(raw);
        let yaml = to_yaml(&optional).unwrap();
        prop_assert_eq!(&yaml, &to_yaml(&raw).unwrap());
        prop_assert_eq!(from_yaml::<Optional<i64>>(&yaml).unwrap(), optional);
    }

    #[test]
    fn prop_yaml_roundtrip_for_words(raw in proptest::option::of("[a-z]{0,12}")) {
        let optional = Optional::from(raw);
        let yaml = to_yaml(&optional).unwrap();
        prop_assert_eq!(from_yaml::<Optional<String>>(&yaml).unwrap(), optional);
    }
}
