//! Property-based tests for the parse/serialize cycle and the serde bridge.

use papr::{from_str, parse, serialize, to_string, Node};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

/// Lines built from words, colons, quotes, comments and uneven padding.
fn document() -> impl Strategy<Value = String> {
    let line = "[ ]{0,10}[a-z\"#: ]{0,24}";
    prop::collection::vec(line, 0..10).prop_map(|lines| lines.join("\n"))
}

/// Text that may need quoting but never ends a quoted token early.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :#\"\n]{0,16}"
}

fn tree(depth: u32) -> impl Strategy<Value = Node> {
    let leaf = (text(), text()).prop_map(|(key, value)| {
        let mut node = Node::new_key(key);
        node.add_value(value);
        node
    });

    leaf.prop_recursive(depth, 32, 4, |inner| {
        prop_oneof![
            (text(), prop::collection::vec(inner.clone(), 1..4)).prop_map(|(key, fields)| {
                let mut node = Node::new_key(key);
                for field in fields {
                    node.add_node(field);
                }
                node
            }),
            (text(), prop::collection::vec(inner, 2..4)).prop_map(|(key, elements)| {
                let mut node = Node::new_key(key);
                for element in elements {
                    node.add_group().add_node(element);
                }
                node
            }),
        ]
    })
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    name: String,
    count: i64,
    ratio: f64,
    enabled: bool,
    tags: Vec<String>,
    note: Option<String>,
}

prop_compose! {
    fn record()(
        name in text(),
        count in any::<i64>(),
        ratio in -1.0e9f64..1.0e9f64,
        enabled in any::<bool>(),
        tags in prop::collection::vec(text(), 0..4),
        note in proptest::option::of(text()),
    ) -> Record {
        Record { name, count, ratio, enabled, tags, note }
    }
}

proptest! {
    #[test]
    fn prop_reparse_is_stable(input in document()) {
        if let Ok(first) = parse(&input) {
            let rendered = serialize(&first);
            let second = parse(&rendered);
            prop_assert_eq!(second, Ok(first), "rendered:\n{}", rendered);
        }
    }

    #[test]
    fn prop_simplify_is_idempotent(input in document()) {
        if let Ok(root) = parse(&input) {
            prop_assert_eq!(root.simplified(), root);
        }
    }

    #[test]
    fn prop_built_trees_round_trip(fields in prop::collection::vec(tree(3), 0..4)) {
        let mut root = Node::new_root();
        for field in fields {
            root.add_node(field);
        }
        let canonical = root.simplified();
        let rendered = serialize(&canonical);
        prop_assert_eq!(parse(&rendered), Ok(canonical), "rendered:\n{}", rendered);
    }

    #[test]
    fn prop_parse_never_panics(input in "\\PC{0,64}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_record(record in record()) {
        prop_assert!(roundtrip(&record));
    }

    #[test]
    fn prop_string_field(value in text()) {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Field { value: String }
        let field = Field { value };
        prop_assert!(roundtrip(&field));
    }

    #[test]
    fn prop_u64_field(value in any::<u64>()) {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Field { value: u64 }
        let field = Field { value };
        prop_assert!(roundtrip(&field));
    }
}
