use papr::{from_node, from_str, parse, to_node, to_string, Error, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Status {
    Active,
    Suspended { days: u32 },
    Renamed(String),
    Moved(String, String),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Account {
    id: u64,
    status: Status,
    history: Vec<Status>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Meters(f64);

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Route {
    name: String,
    length: Meters,
    stops: (String, String),
    notes: Option<Vec<String>>,
}

#[test]
fn test_enum_variants_round_trip() {
    let account = Account {
        id: 9,
        status: Status::Suspended { days: 3 },
        history: vec![
            Status::Active,
            Status::Renamed("acme: east".to_string()),
            Status::Moved("Oslo".to_string(), "Bergen".to_string()),
        ],
    };

    let text = to_string(&account).unwrap();
    println!("Account papr:\n{}", text);
    assert!(text.starts_with("id: 9\nstatus: Suspended: days: 3\n"));

    let back: Account = from_str(&text).unwrap();
    assert_eq!(back, account);
}

#[test]
fn test_newtype_and_tuple_structs() {
    let route = Route {
        name: "coastal".to_string(),
        length: Meters(1250.5),
        stops: ("Oslo".to_string(), "Bergen".to_string()),
        notes: Some(vec!["scenic".to_string()]),
    };

    let text = to_string(&route).unwrap();
    assert_eq!(
        text,
        "name: coastal\nlength: 1250.5\nstops: Oslo\n     : Bergen\nnotes: scenic\n"
    );
    assert_eq!(from_str::<Route>(&text).unwrap(), route);
}

#[test]
fn test_maps_with_non_string_keys() {
    let mut scores = BTreeMap::new();
    scores.insert(3u16, "bronze".to_string());
    scores.insert(1u16, "gold".to_string());

    let text = to_string(&scores).unwrap();
    assert_eq!(text, "1: gold\n3: bronze\n");
    assert_eq!(from_str::<BTreeMap<u16, String>>(&text).unwrap(), scores);
}

#[test]
fn test_bool_and_char_keys_and_values() {
    let mut flags = BTreeMap::new();
    flags.insert(true, 'y');
    flags.insert(false, 'n');

    let back: BTreeMap<bool, char> = from_str(&to_string(&flags).unwrap()).unwrap();
    assert_eq!(back, flags);
}

#[test]
fn test_unit_values() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Marker;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        marker: Marker,
        nothing: (),
        label: String,
    }

    let holder = Holder {
        marker: Marker,
        nothing: (),
        label: "x".to_string(),
    };
    let text = to_string(&holder).unwrap();
    assert_eq!(text, "marker: \"\"\nnothing: \"\"\nlabel: x\n");
    assert_eq!(from_str::<Holder>(&text).unwrap(), holder);
}

#[test]
fn test_empty_content_inside_some_reads_back_as_none() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Extras {}

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Entry {
        tags: Option<Vec<String>>,
        extras: Option<Extras>,
        aliases: Vec<String>,
        label: String,
    }

    let entry = Entry {
        tags: Some(Vec::new()),
        extras: Some(Extras {}),
        aliases: Vec::new(),
        label: "x".to_string(),
    };
    let text = to_string(&entry).unwrap();
    assert_eq!(text, "tags\nextras\naliases\nlabel: x\n");

    let back: Entry = from_str(&text).unwrap();
    assert_eq!(
        back,
        Entry {
            tags: None,
            extras: None,
            aliases: Vec::new(),
            label: "x".to_string(),
        }
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Slim {
        name: String,
    }

    let slim: Slim = from_str("name: John\nextra: nested: deep\n       more: stuff\n").unwrap();
    assert_eq!(slim.name, "John");
}

#[test]
fn test_missing_field_is_reported() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Needs {
        name: String,
        age: u8,
    }

    let err = from_str::<Needs>("name: John\n").unwrap_err();
    assert_eq!(err, Error::Custom("missing field `age`".to_string()));
}

#[test]
fn test_json_value_from_document() {
    let root = parse(
        "title: Chess\n\
         members: name: John\n\
         \x20        age: 42\n\
         \x20      : name: Jane\n\
         \x20        age: 37\n\
         retired\n",
    )
    .unwrap();

    let json: serde_json::Value = from_node(&root).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Chess",
            "members": [
                { "name": "John", "age": "42" },
                { "name": "Jane", "age": "37" }
            ],
            "retired": null
        })
    );
}

#[test]
fn test_json_value_to_node() {
    let json = serde_json::json!({
        "id": 7,
        "ratio": 0.25,
        "tags": ["a", "b"],
        "owner": { "name": "Ann" }
    });

    let root = to_node(&json).unwrap();
    assert_eq!(root["id"].value(), Some("7"));
    assert_eq!(root["ratio"].value(), Some("0.25"));
    assert_eq!(root["tags"][1].kind(), NodeKind::Group);
    assert_eq!(root["owner"]["name"].value(), Some("Ann"));
}

#[test]
fn test_borrowed_deserialization_from_node() {
    #[derive(Deserialize)]
    struct View<'a> {
        name: &'a str,
        tags: Vec<&'a str>,
    }

    let root = parse("name: John\ntags: a\n    : b\n").unwrap();
    let view: View<'_> = from_node(&root).unwrap();
    assert_eq!(view.name, "John");
    assert_eq!(view.tags, vec!["a", "b"]);
}

#[test]
fn test_unsupported_shapes() {
    assert!(matches!(
        to_string(&vec!["a", "b"]),
        Err(Error::UnsupportedType(_))
    ));
    assert!(matches!(
        to_string(&"scalar"),
        Err(Error::UnsupportedType(_))
    ));

    let mut grid = BTreeMap::new();
    grid.insert("rows", vec![vec![1, 2]]);
    assert!(matches!(to_string(&grid), Err(Error::UnsupportedType(_))));

    let mut keyed = BTreeMap::new();
    keyed.insert(vec![1], "v");
    assert!(matches!(to_string(&keyed), Err(Error::UnsupportedType(_))));
}

#[test]
fn test_sequence_where_scalar_expected() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct One {
        value: String,
    }

    let err = from_str::<One>("value: a\n     : b\n").unwrap_err();
    assert_eq!(err, Error::type_mismatch("string", "an array of 2 elements"));
}
