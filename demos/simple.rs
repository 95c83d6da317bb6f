//! Basic papr serialization and deserialization.
//!
//! Run with: cargo run --example simple

use papr::{from_str, to_string};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Team {
    name: String,
    motto: Option<String>,
    members: Vec<User>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let team = Team {
        name: "Platform: core".to_string(),
        motto: None,
        members: vec![
            User {
                id: 42,
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
            },
            User {
                id: 43,
                name: "Bob Smith".to_string(),
                email: "bob@example.com".to_string(),
            },
        ],
    };

    let text = to_string(&team)?;
    println!("papr output:\n{}", text);

    let team_back: Team = from_str(&text)?;
    assert_eq!(team, team_back);
    println!("✓ Round-trip successful");

    Ok(())
}
