use crate::{Array, Json, Lazy, parse};

fn pending_count(value: &Json) -> usize {
    match value {
        Json::Array(Lazy::Pending(_)) | Json::Object(Lazy::Pending(_)) => 1,
        Json::Array(Lazy::Materialized(items)) => items.iter().map(pending_count).sum(),
        Json::Object(Lazy::Materialized(members)) => members.values().map(pending_count).sum(),
        _ => 0,
    }
}

#[test]
fn reading_one_element_resolves_only_that_element() {
    let src = r#"[{"id": 0, "tags": ["a"]}, {"id": 1, "tags": ["b"]}, {"id": 2, "tags": ["c"]}, {"id": 3, "tags": ["d"]}]"#;
    let mut doc = parse(src).unwrap();
    assert_eq!(pending_count(&doc), 4);

    let id = doc.index(2).unwrap().key("id").unwrap().as_f64();
    assert_eq!(id, Some(2.0));

    let Json::Array(Lazy::Materialized(items)) = &doc else {
        panic!("root must be materialized");
    };
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.is_resolved(), i == 2, "element {i}");
    }
    // The `tags` array of element 2 was not read, so it is still pending.
    assert_eq!(pending_count(&doc), 4);
}

#[test]
fn lazy_resolve_builds_once_and_keeps_failures_pending() {
    let mut items: Lazy<Array> = Lazy::Pending("[1,[2]]".into());
    assert_eq!(items.resolve().unwrap().len(), 2);
    assert!(items.is_materialized());
    items.resolve().unwrap().push(Json::Null);
    assert_eq!(items.get().map(Vec::len), Some(3));

    let mut broken: Lazy<Array> = Lazy::Pending("[1 2]".into());
    assert!(broken.resolve().is_err());
    assert_eq!(broken.span(), Some("[1 2]"));
}

#[test]
fn resolution_is_idempotent() {
    let mut doc = parse(r#"{"inner": {"x": [1, 2]}}"#).unwrap();
    let inner = doc.key("inner").unwrap();
    inner.resolve().unwrap();
    let first = inner.clone();
    inner.resolve().unwrap();
    assert_eq!(*inner, first);
    assert!(inner.is_resolved());
}

#[test]
fn pending_span_is_compacted_source() {
    let doc = parse("{ \"a\" : [ 1 , \"two  words\" , { \"b\" : null } ] }").unwrap();
    let Json::Object(Lazy::Materialized(members)) = &doc else {
        panic!("root must be materialized");
    };
    let Json::Array(lazy) = &members["a"] else {
        panic!("expected an array");
    };
    assert_eq!(lazy.span(), Some(r#"[1,"two  words",{"b":null}]"#));
}

#[test]
fn resolve_all_leaves_nothing_pending() {
    let mut doc = parse(r#"{"a": [[[]]], "b": {"c": {"d": {}}}}"#).unwrap();
    doc.resolve_all().unwrap();
    assert_eq!(pending_count(&doc), 0);
}

#[test]
fn serialize_resolves_in_place() {
    let mut doc = parse(r#"[[1], {"a": [2]}]"#).unwrap();
    assert_eq!(pending_count(&doc), 2);
    doc.serialize().unwrap();
    assert_eq!(pending_count(&doc), 0);
}

#[test]
fn assignment_discards_pending_span() {
    let mut doc = parse(r#"{"a": [1, 2, 3]}"#).unwrap();
    let a = doc.key("a").unwrap();
    assert!(!a.is_resolved());
    a.assign("replaced");
    assert_eq!(doc.serialize().unwrap(), r#"{"a":"replaced"}"#);
}
