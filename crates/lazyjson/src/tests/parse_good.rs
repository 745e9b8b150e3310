use rstest::rstest;

use crate::{Json, ParserOptions, WriterOptions, parse, parse_with};

#[rstest]
#[case("{}", "{}")]
#[case("[]", "[]")]
#[case("  \n\t{ }  \r\n", "{}")]
#[case("[ ]", "[]")]
#[case(r#"{"a": 1}"#, r#"{"a":1.000000}"#)]
#[case("[1, 2, 3]", "[1.000000,2.000000,3.000000]")]
#[case("[-1.5, 2e2]", "[-1.500000,200.000000]")]
#[case("[true, false, null]", "[true,false,null]")]
#[case(r#"["a", 'b', "it's", 'say "hi"']"#, r#"["a","b","it's","say \"hi\""]"#)]
#[case(r#"{'single': 'quoted'}"#, r#"{"single":"quoted"}"#)]
#[case(r#"{"esc": "a\tb\\c\/d"}"#, "{\"esc\":\"a\tb\\\\c/d\"}")]
#[case(r#"{"n": "line\nbreak"}"#, r#"{"n":"line\nbreak"}"#)]
#[case(r#"{"nested": {"deeper": {"deepest": [1, [2, [3]]]}}}"#, r#"{"nested":{"deeper":{"deepest":[1.000000,[2.000000,[3.000000]]]}}}"#)]
#[case(r#"[{}, [], {"a": []}, [{}]]"#, r#"[{},[],{"a":[]},[{}]]"#)]
#[case("[1,2,]", "[1.000000,2.000000]")]
#[case(r#"{"a":1,}"#, r#"{"a":1.000000}"#)]
#[case(r#"{"k": "v" , "k2" :"v2"}"#, r#"{"k":"v","k2":"v2"}"#)]
#[case("[\"tab\there\"]", "[\"tab\there\"]")]
#[case(r#"{"unicode": "héllo 🌍"}"#, r#"{"unicode":"héllo 🌍"}"#)]
#[case("[1\x0B,\x0B2]", "[1.000000,2.000000]")]
#[case("[1,\x0C2]", "[1.000000,2.000000]")]
#[case("{\x0C\"a\":\x0C[\x0C1\x0C]\x0C}", r#"{"a":[1.000000]}"#)]
fn parse_then_serialize(#[case] src: &str, #[case] expected: &str) {
    let mut doc = parse(src).unwrap();
    assert_eq!(doc.serialize().unwrap(), expected);

    let mut eager = parse_with(src, ParserOptions { eager: true }).unwrap();
    assert_eq!(eager.serialize().unwrap(), expected);
}

#[test]
fn duplicate_keys_overwrite_in_place() {
    let mut doc = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    assert_eq!(doc.serialize().unwrap(), r#"{"a":3.000000,"b":2.000000}"#);
}

#[test]
fn members_keep_insertion_order() {
    let mut doc = parse(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
    let keys: Vec<String> = doc
        .children()
        .unwrap()
        .map(|(k, _)| k.as_key().unwrap().to_string())
        .collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn arrays_keep_position_order_past_ten_elements() {
    let src = "[0,1,2,3,4,5,6,7,8,9,10,11]";
    let mut doc = parse(src).unwrap();
    let values: Vec<f64> = doc.to_vec().unwrap().iter().filter_map(Json::as_f64).collect();
    assert_eq!(values, (0..12).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn spaced_members_only_affect_objects() {
    let mut doc = parse(r#"{"a": [1, 2], "b": {"c": 3, "d": 4}}"#).unwrap();
    assert_eq!(
        doc.serialize_with(WriterOptions { spaced_members: true }).unwrap(),
        r#"{"a":[1.000000,2.000000], "b":{"c":3.000000, "d":4.000000}}"#
    );
}

#[test]
fn parses_scalars_at_every_depth() {
    let mut doc = parse(r#"{"s": "x", "n": 1.25, "t": true, "f": false, "z": null}"#).unwrap();
    assert_eq!(doc.key("s").unwrap().as_str(), Some("x"));
    assert_eq!(doc.key("n").unwrap().as_f64(), Some(1.25));
    assert_eq!(doc.key("t").unwrap().as_bool(), Some(true));
    assert_eq!(doc.key("f").unwrap().as_bool(), Some(false));
    assert!(doc.key("z").unwrap().is_null());
}

#[test]
fn from_str_parses() {
    let mut doc: Json = "[1]".parse().unwrap();
    assert_eq!(doc.serialize().unwrap(), "[1.000000]");
}

#[test]
fn serde_serialization_matches_structure() {
    let doc = parse(r#"{"a": [1, {"b": null}], "c": "d"}"#).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"a":[1.0,{"b":null}],"c":"d"}"#);

    let Json::Object(members) = &doc else {
        panic!("expected an object");
    };
    assert!(!members.get().unwrap()["a"].is_resolved());
}
