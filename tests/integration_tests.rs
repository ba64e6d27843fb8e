use jsonptr::{
    EvalError, Resolved, evaluate, evaluate_relative, parse_pointer, parse_relative_pointer,
};
use serde_json::{Value, json};

fn eval(ptr_str: &str, doc: &Value) -> Result<Value, EvalError> {
    let ptr = parse_pointer(ptr_str).unwrap();
    evaluate(&ptr, doc).cloned()
}

fn eval_relative<'a>(start: &str, rel_str: &str, doc: &'a Value) -> Result<Resolved<'a>, EvalError> {
    let start = parse_pointer(start).unwrap();
    let rel = parse_relative_pointer(rel_str).unwrap();
    evaluate_relative(&rel, &start, doc)
}

fn relative_doc() -> Value {
    json!({
        "foo": ["bar", "baz", "biz"],
        "highly": {
            "nested": {
                "objects": true
            }
        }
    })
}

// ============================================================================
// Absolute evaluation
// ============================================================================

#[test]
fn test_root_returns_document() {
    for doc in [json!({ "a": 1 }), json!([1, 2]), json!("s"), json!(3), json!(null)] {
        assert_eq!(eval("", &doc).unwrap(), doc);
    }
}

#[test]
fn test_mixed_walk() {
    let doc = json!({ "foo": ["bar", "baz"] });
    assert_eq!(eval("/foo/0", &doc).unwrap(), json!("bar"));
    assert_eq!(
        eval("/foo/5", &doc).unwrap_err(),
        EvalError::IndexOutOfBounds {
            index: "5".to_string(),
            len: Some(2),
        }
    );
    assert_eq!(
        eval("/missing", &doc).unwrap_err(),
        EvalError::KeyNotFound("missing".to_string())
    );
}

#[test]
fn test_deep_walk() {
    let doc = json!({ "a": [{ "b": [null, { "c": "deep" }] }] });
    assert_eq!(eval("/a/0/b/1/c", &doc).unwrap(), json!("deep"));
    assert_eq!(eval("/a/0/b/0", &doc).unwrap(), Value::Null);
}

#[test]
fn test_array_index_errors() {
    let doc = json!({ "list": [10, 20] });
    let test_cases = vec![
        ("/list/x", EvalError::InvalidArrayIndex("x".to_string())),
        ("/list/-", EvalError::InvalidArrayIndex("-".to_string())),
        ("/list/1.0", EvalError::InvalidArrayIndex("1.0".to_string())),
        ("/list/", EvalError::InvalidArrayIndex(String::new())),
        (
            "/list/2",
            EvalError::IndexOutOfBounds {
                index: "2".to_string(),
                len: Some(2),
            },
        ),
        (
            "/list/002",
            EvalError::IndexOutOfBounds {
                index: "002".to_string(),
                len: Some(2),
            },
        ),
    ];

    for (ptr, expected) in test_cases {
        assert_eq!(eval(ptr, &doc).unwrap_err(), expected, "Failed for {}", ptr);
    }
}

#[test]
fn test_array_index_accepts_sign_and_leading_zeros() {
    let doc = json!({ "list": [10, 20] });
    for ptr in ["/list/1", "/list/01", "/list/+1", "/list/+001"] {
        assert_eq!(eval(ptr, &doc).unwrap(), json!(20), "Failed for {}", ptr);
    }
    assert_eq!(eval("/list/-0", &doc).unwrap(), json!(10));
}

#[test]
fn test_scalars_are_not_containers() {
    let doc = json!({ "s": "str", "n": 1.5, "b": false, "z": null });
    for (ptr, found) in [("/s/0", "string"), ("/n/x", "number"), ("/b/x", "boolean"), ("/z/x", "null")] {
        match eval(ptr, &doc).unwrap_err() {
            EvalError::NotContainer { found: f, .. } => assert_eq!(f, found, "Failed for {}", ptr),
            other => panic!("Expected NotContainer for {}, got {:?}", ptr, other),
        }
    }
}

#[test]
fn test_numeric_keys_on_objects_are_keys() {
    let doc = json!({ "0": "zero", "01": "leading" });
    assert_eq!(eval("/0", &doc).unwrap(), json!("zero"));
    assert_eq!(eval("/01", &doc).unwrap(), json!("leading"));
}

#[test]
fn test_evaluation_borrows_document() {
    let doc = json!({ "foo": ["bar"] });
    let ptr = parse_pointer("/foo/0").unwrap();
    let found = evaluate(&ptr, &doc).unwrap();
    assert!(std::ptr::eq(found, &doc["foo"][0]));
}

// ============================================================================
// Relative evaluation
// ============================================================================

#[test]
fn test_relative_from_array_element() {
    let doc = relative_doc();
    let test_cases = vec![
        ("0", Resolved::Value(&doc["foo"][1])),
        ("1/0", Resolved::Value(&doc["foo"][0])),
        ("0-1", Resolved::Value(&doc["foo"][0])),
        ("2/highly/nested/objects", Resolved::Value(&doc["highly"]["nested"]["objects"])),
        ("0#", Resolved::Index(1)),
        ("0+1#", Resolved::Index(2)),
        ("1#", Resolved::Key("foo".to_string())),
    ];

    for (rel, expected) in test_cases {
        assert_eq!(eval_relative("/foo/1", rel, &doc).unwrap(), expected, "Failed for {}", rel);
    }
}

#[test]
fn test_relative_from_nested_object() {
    let doc = relative_doc();
    let test_cases = vec![
        ("0/objects", Resolved::Value(&doc["highly"]["nested"]["objects"])),
        ("1/nested/objects", Resolved::Value(&doc["highly"]["nested"]["objects"])),
        ("2/foo/0", Resolved::Value(&doc["foo"][0])),
        ("0#", Resolved::Key("nested".to_string())),
        ("1#", Resolved::Key("highly".to_string())),
    ];

    for (rel, expected) in test_cases {
        assert_eq!(
            eval_relative("/highly/nested", rel, &doc).unwrap(),
            expected,
            "Failed for {}",
            rel
        );
    }
}

#[test]
fn test_current_key_result_kinds() {
    let doc = relative_doc();

    let key = eval_relative("/highly/nested", "1#", &doc).unwrap();
    assert_eq!(key.as_key(), Some("highly"));
    assert_eq!(key.as_index(), None);
    assert_eq!(key.to_json(), json!("highly"));

    let index = eval_relative("/foo/2", "0#", &doc).unwrap();
    assert_eq!(index.as_index(), Some(2));
    assert_eq!(index.as_key(), None);
    assert!(index.to_json().is_number());
}

#[test]
fn test_relative_above_root() {
    let doc = relative_doc();
    assert!(matches!(
        eval_relative("/foo/1", "3/foo", &doc),
        Err(EvalError::ReferencesAboveRoot(_))
    ));
    assert!(matches!(
        eval_relative("", "1#", &doc),
        Err(EvalError::ReferencesAboveRoot(_))
    ));
    // Stripping everything and asking for the root's key
    assert!(matches!(
        eval_relative("/foo/1", "2#", &doc),
        Err(EvalError::ReferencesAboveRoot(_))
    ));
}

#[test]
fn test_relative_to_root_returns_document() {
    let doc = relative_doc();
    assert_eq!(
        eval_relative("/foo/1", "2", &doc).unwrap(),
        Resolved::Value(&doc)
    );
}

#[test]
fn test_relative_index_manipulation_errors() {
    let doc = relative_doc();
    assert_eq!(
        eval_relative("/highly/nested", "0+1/x", &doc).unwrap_err(),
        EvalError::NonIntegerKey("nested".to_string())
    );
    assert!(matches!(
        eval_relative("/foo/1", "2+1", &doc),
        Err(EvalError::NonIntegerKey(_))
    ));
    // Negative and past-the-end results only fail once they reach the array
    assert_eq!(
        eval_relative("/foo/1", "0-2", &doc).unwrap_err(),
        EvalError::IndexOutOfBounds {
            index: "-1".to_string(),
            len: Some(3),
        }
    );
    assert_eq!(
        eval_relative("/foo/1", "0+5", &doc).unwrap_err(),
        EvalError::IndexOutOfBounds {
            index: "6".to_string(),
            len: Some(3),
        }
    );
    assert_eq!(eval_relative("/foo/1", "0-2#", &doc).unwrap(), Resolved::Index(-1));
}

#[test]
fn test_relative_on_numeric_object_key() {
    let doc = json!({ "versions": { "1": "one", "2": "two" } });
    assert_eq!(
        eval_relative("/versions/1", "0+1", &doc).unwrap(),
        Resolved::Value(&doc["versions"]["2"])
    );
    assert_eq!(
        eval_relative("/versions/1", "0+1#", &doc).unwrap(),
        Resolved::Key("2".to_string())
    );
}

#[test]
fn test_relative_on_padded_index() {
    let doc = relative_doc();
    assert_eq!(
        eval_relative("/foo/01", "0+1", &doc).unwrap(),
        Resolved::Value(&doc["foo"][2])
    );
    assert_eq!(eval_relative("/foo/+02", "0#", &doc).unwrap(), Resolved::Index(2));
}

#[test]
fn test_current_key_under_root_is_always_a_key() {
    let doc = json!(["a", "b"]);
    assert_eq!(
        eval_relative("/1", "0#", &doc).unwrap(),
        Resolved::Key("1".to_string())
    );
    let doc = json!(42);
    assert_eq!(
        eval_relative("/x/y", "1#", &doc).unwrap(),
        Resolved::Key("x".to_string())
    );
}

#[test]
fn test_current_key_under_array_with_bad_index() {
    let doc = json!({ "list": ["a"] });
    assert_eq!(
        eval_relative("/list/x", "0#", &doc).unwrap_err(),
        EvalError::NonIntegerKey("x".to_string())
    );
}

#[test]
fn test_current_key_under_scalar() {
    let doc = json!({ "s": "str" });
    assert!(matches!(
        eval_relative("/s/x", "0#", &doc),
        Err(EvalError::NotContainer { found: "string", .. })
    ));
}

#[test]
fn test_start_pointer_untouched() {
    let doc = relative_doc();
    let start = parse_pointer("/foo/1").unwrap();
    let before = start.clone();
    for rel in ["0-1", "1/0", "2#", "0+1#"] {
        let rel = parse_relative_pointer(rel).unwrap();
        let _ = evaluate_relative(&rel, &start, &doc);
    }
    assert_eq!(start, before);
}

#[test]
fn test_method_forms() {
    let doc = relative_doc();
    let start: jsonptr::JsonPointer = "/foo/1".parse().unwrap();
    let rel: jsonptr::RelativeJsonPointer = "1/2".parse().unwrap();
    assert_eq!(start.eval(&doc).unwrap(), "baz");
    assert_eq!(rel.eval(&start, &doc).unwrap().as_value(), Some(&json!("biz")));
}
