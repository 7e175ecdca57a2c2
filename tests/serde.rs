#![cfg(feature = "serde")]

use ordtree::{AvlMap, RbMap};

#[test]
fn serializes_in_key_order() {
    let mut map = AvlMap::new();
    for (key, value) in [("b", 2), ("a", 1), ("c", 3)] {
        map.insert(String::from(key), value);
    }

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);
}

#[test]
fn round_trips_through_json() {
    let mut map = RbMap::new();
    for key in 0..100u32 {
        map.insert(key.to_string(), key);
    }

    let json = serde_json::to_string(&map).unwrap();
    let back: RbMap<String, u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[test]
fn deserializes_into_either_discipline() {
    let json = r#"{"b":2,"a":1,"c":3}"#;

    let avl: AvlMap<String, i32> = serde_json::from_str(json).unwrap();
    let rb: RbMap<String, i32> = serde_json::from_str(json).unwrap();

    assert!(avl.iter().eq(rb.iter()));
    assert_eq!(avl.min_entry().map(|e| e.0.as_str()), Some("a"));
    assert_eq!(avl.max_entry().map(|e| e.0.as_str()), Some("c"));
}
