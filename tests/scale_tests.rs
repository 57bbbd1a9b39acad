use indexmap::IndexMap;
use mapsort::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random entries...", count);

    let mut rng = rand::rng();
    let source: IndexMap<u32, u32> = (0..count as u32)
        .map(|k| (k, rng.random_range(0..10_000)))
        .collect();

    println!("Sorting {} entries...", count);
    let start = Instant::now();
    let sorted = sort_by_value(&source, Direction::Ascending);
    let duration = start.elapsed();
    println!("Sorted 1M entries in {:?}", duration);

    assert_eq!(sorted.len(), count);

    let entries: Vec<(&u32, &u32)> = sorted.iter().collect();
    for (i, pair) in entries.windows(2).enumerate() {
        let (ka, va) = pair[0];
        let (kb, vb) = pair[1];
        assert!(va <= vb, "Sort failed at index {}", i);
        if va == vb {
            assert!(ka < kb, "Tie order lost at index {}", i);
        }
    }
}

#[test]
#[ignore]
fn test_sort_distinct_10m() {
    // Every value distinct: one bucket per entry.
    let count = 10_000_000u64;
    let source: IndexMap<u64, u64> = (0..count)
        .map(|k| (k, k.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
        .collect();

    let start = Instant::now();
    let sorted = sort_by_value(&source, Direction::Descending);
    println!("Sorted 10M distinct entries in {:?}", start.elapsed());

    assert_eq!(sorted.len(), count as usize);
    let values: Vec<u64> = sorted.values().copied().collect();
    assert!(values.windows(2).all(|w| w[0] > w[1]));
}
