use papr::{papr, parse, serialize, Node, NodeKind};

#[test]
fn test_papr_macro_empty_document() {
    let root = papr!({});
    assert_eq!(root, Node::new_root());
    assert_eq!(serialize(&root), "");
}

#[test]
fn test_papr_macro_scalars() {
    let root = papr!({
        "int": 42,
        "negative": (-123),
        "float": 3.5,
        "flag": false,
        "text": "hello world",
        "empty": ""
    });

    assert_eq!(root["int"].value(), Some("42"));
    assert_eq!(root["negative"].value(), Some("-123"));
    assert_eq!(root["float"].value(), Some("3.5"));
    assert_eq!(root["flag"].value(), Some("false"));
    assert_eq!(root["text"].value(), Some("hello world"));
    assert_eq!(root["empty"].value(), Some(""));
}

#[test]
fn test_papr_macro_arrays() {
    let root = papr!({
        "numbers": [1, 2, 3],
        "single": ["only"]
    });

    let numbers = &root["numbers"];
    assert_eq!(numbers.len(), 3);
    assert!(numbers.iter().all(|n| n.kind() == NodeKind::Group));
    assert_eq!(numbers[2].value(), Some("3"));

    // One-element arrays lose their group, like parsed ones.
    assert_eq!(root["single"].value(), Some("only"));
}

#[test]
fn test_papr_macro_nested() {
    let root = papr!({
        "club": {
            "title": "Chess",
            "members": [
                { "name": "John", "age": 42 },
                { "name": "Jane", "age": 37 }
            ]
        }
    });

    assert_eq!(root["club"]["title"].value(), Some("Chess"));
    assert_eq!(root["club"]["members"][0]["name"].value(), Some("John"));
    assert_eq!(root["club"]["members"][1]["age"].value(), Some("37"));
}

#[test]
fn test_papr_macro_matches_parsed_document() {
    let built = papr!({
        "owner": { "name": "John", "age": 42 },
        "seasons": ["spring", "summer"],
        "title": "Episode: Pilot",
        "retired": null,
    });

    let parsed = parse(
        "owner: name: John\n\
         \x20      age: 42\n\
         seasons: spring\n\
         \x20      : summer\n\
         title: \"Episode: Pilot\"\n\
         retired\n",
    )
    .unwrap();

    assert_eq!(built, parsed);
    assert_eq!(parse(&serialize(&built)).unwrap(), built);
}

#[test]
fn test_papr_macro_with_variables() {
    let name = "Ada";
    let year = 1815;
    let root = papr!({ "name": name, "born": year });
    assert_eq!(serialize(&root), "name: Ada\nborn: 1815\n");
}
