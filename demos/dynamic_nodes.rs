//! Reading and editing a parsed document without a schema.
//!
//! Run with: cargo run --example dynamic_nodes

use papr::{parse, serialize, Node};
use std::error::Error;

const DOCUMENT: &str = "\
# service settings
host: localhost
port: 8080
features: auth
        : logging
owner: name: Alice
       role: admin
notes: restart the service after
       changing the port
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut root = parse(DOCUMENT)?;

    println!("Top-level keys:");
    for node in &root {
        match node.key() {
            Some(key) => println!("  {} ({} children)", key, node.len()),
            None => println!("  bare value {}", node.text()),
        }
    }

    println!("\nPort: {}", root["port"].value().unwrap_or("unset"));
    println!("Notes: {}", root["notes"].value().unwrap_or(""));

    if let Some(port) = root.find_mut("port") {
        port.update_value("9090");
    }

    if let Some(features) = root.find_mut("features") {
        features.add_group().add_value("metrics");
    }

    if let Some(owner) = root.find_mut("owner") {
        let mut contact = Node::new_key("contact");
        contact.add_value("alice@example.com");
        owner.add_node(contact);
    }

    let removed = root.remove_at(0);
    println!(
        "Removed: {}",
        removed.as_ref().and_then(Node::key).unwrap_or("nothing")
    );

    println!("\nEdited document:\n{}", serialize(&root));

    assert!(root["owner"]["email"].is_invalid());
    Ok(())
}
