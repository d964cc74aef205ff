//! Indexes 9000 keys and times a few lookups.
//!
//! Run with: `cargo run -q --example bulk_keys -p typeahead_core`

use std::time::Instant;
use typeahead_core::CyclicIndex;

const KEY_COUNT: usize = 9000;

fn main() {
    let mut index = CyclicIndex::new();
    let start = Instant::now();

    println!("Indexing {} keys...", KEY_COUNT);

    for i in 0..KEY_COUNT {
        let key = format!("bulk/key-{:05}", i);
        index.add(&key, i);

        if (i + 1) % 1000 == 0 {
            println!("  Progress: {}/{}", i + 1, KEY_COUNT);
        }
    }

    println!(
        "\nIndexed {} distinct keys in {:?}",
        index.len(),
        start.elapsed()
    );

    for query in ["bulk/key-0", "-0042", "key-089", "zzz"] {
        let start = Instant::now();
        let prefix = index.find_prefix(query).len();
        let infix = index.find_infix(query).len();
        let suffix = index.find_suffix(query).len();
        println!(
            "{:>12}: prefix={} infix={} suffix={} ({:?})",
            query,
            prefix,
            infix,
            suffix,
            start.elapsed()
        );
    }
}
