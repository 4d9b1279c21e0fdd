//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```
//!
//! ## Generated Products
//! Each product has:
//! - Unique SKU: `{CATEGORY}-{INDEX:03}`
//! - Name drawn from a small hardware catalog
//! - Deterministic pseudo-random price between 0.99 and 199.99
//! - Deterministic pseudo-random stock between 0 and 250

use std::env;

use stockroom_core::NewProduct;
use stockroom_db::{Database, DbConfig};

/// Product categories for realistic test data
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "PER",
        &[
            "Wireless Mouse",
            "Mechanical Keyboard",
            "USB-C Hub",
            "Webcam 1080p",
            "Headset",
            "Laptop Stand",
            "Monitor Arm",
            "Desk Mat",
        ],
    ),
    (
        "CBL",
        &[
            "HDMI Cable 2m",
            "USB-C Cable 1m",
            "Ethernet Cable 5m",
            "DisplayPort Cable",
            "Lightning Cable",
            "Audio Jack Cable",
        ],
    ),
    (
        "PWR",
        &[
            "Power Strip",
            "65W Charger",
            "Power Bank 10000mAh",
            "AA Batteries 4-Pack",
            "AAA Batteries 4-Pack",
            "Surge Protector",
        ],
    ),
    (
        "STO",
        &[
            "USB Flash Drive 64GB",
            "SD Card 128GB",
            "External SSD 1TB",
            "External HDD 4TB",
            "NVMe Enclosure",
        ],
    ),
];

/// Tiny deterministic generator so seeding is reproducible.
/// Not cryptographic, just enough spread for demo data.
fn pseudo_random(seed: usize) -> i64 {
    let x = (seed as u64).wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    ((x >> 33) & 0x7fff_ffff) as i64
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Seeding {count} products into {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.products();

    let mut inserted = 0usize;
    let mut index = 0usize;

    'outer: loop {
        for (category, names) in CATEGORIES {
            for name in *names {
                if inserted >= count {
                    break 'outer;
                }
                index += 1;

                let sku = format!("{category}-{index:03}");
                let new = NewProduct {
                    // Suffix keeps names unique across repeated passes
                    name: if index <= names.len() * CATEGORIES.len() {
                        (*name).to_string()
                    } else {
                        format!("{name} v{}", index / (names.len() * CATEGORIES.len()) + 1)
                    },
                    sku,
                    price_cents: 99 + pseudo_random(index) % 19_901, // 0.99 ..= 199.99
                    stock: pseudo_random(index * 7 + 3) % 251,       // 0 ..= 250
                };

                match repo.insert(&new).await {
                    Ok(_) => inserted += 1,
                    Err(e) => {
                        // Re-seeding an existing database hits sku collisions
                        eprintln!("skipping {}: {e}", new.sku);
                    }
                }
            }
        }
    }

    let total = repo.count().await?;
    println!("Done. Inserted {inserted} products ({total} total in database).");

    db.close().await;
    Ok(())
}
