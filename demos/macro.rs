//! Building documents with the papr! macro.
//!
//! Run with: cargo run --example macro

use papr::{papr, serialize};

fn main() {
    let user = papr!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true
    });

    println!("Object:\n{}", serialize(&user));

    let config = papr!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432,
            "name": "mydb"
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true,
        "banner": "Welcome: please sign in"
    });

    println!("Nested structures:\n{}", serialize(&config));

    let port = config["database"]["port"].value().unwrap_or("none");
    println!("Accessing values:");
    println!("  Database port: {}", port);
    println!("  Features: {}", config["features"].len());
    println!("  Missing: invalid = {}", config["cache"]["size"].is_invalid());
}
