//! Basic test - just to prove the filter works

use bloomguard::{BloomError, BloomFilter, BloomFilterBuilder, FilterOptions};

#[test]
fn test_basic_add_and_find() {
    let filter = BloomFilter::with_estimate(100, 0.01).unwrap();

    filter.add(b"test-item");

    assert!(
        filter.contains(b"test-item"),
        "Should find the item we just added"
    );
}

#[test]
fn test_foo_bar() {
    let filter = BloomFilter::with_estimate(1000, 0.03).unwrap();
    assert_eq!(filter.bit_count(), 7299);
    assert_eq!(filter.hash_count(), 6);

    assert!(!filter.contains(b"foo"));
    filter.add(b"foo");
    assert!(filter.contains(b"foo"));
    assert!(!filter.contains(b"bar"));
}

#[test]
fn test_batch_operations() {
    let filter = BloomFilter::with_estimate(1000, 0.01).unwrap();

    let items = ["apple", "banana", "cherry"];
    filter.add_batch(items);

    for item in &items {
        assert!(filter.contains(item.as_bytes()), "Should find {}", item);
    }
    assert_eq!(filter.contains_batch(items), vec![true; 3]);
}

#[test]
fn test_no_false_negatives() {
    let filter = BloomFilter::with_estimate(1000, 0.01).unwrap();

    for i in 0..1000u64 {
        filter.add(&i.to_be_bytes());
    }

    for i in 0..1000u64 {
        assert!(filter.contains(&i.to_be_bytes()), "False negative for {}", i);
    }
}

#[test]
fn test_false_positive_rate_near_target() {
    let filter = BloomFilter::with_estimate(10_000, 0.01).unwrap();
    for i in 0..10_000u64 {
        filter.add(format!("member-{}", i).as_bytes());
    }

    let trials = 100_000u64;
    let hits = (0..trials)
        .filter(|i| filter.contains(format!("outsider-{}", i).as_bytes()))
        .count();
    let rate = hits as f64 / trials as f64;

    assert!(rate < 0.02, "observed false positive rate {}", rate);
}

#[test]
fn test_empty_item() {
    let filter = BloomFilter::with_estimate(100, 0.01).unwrap();
    assert!(!filter.contains(b""));
    filter.add(b"");
    assert!(filter.contains(b""));
}

#[test]
fn test_binary_and_long_items() {
    let filter = BloomFilter::with_estimate(100, 0.01).unwrap();
    let binary = [0u8, 255, 0, 1, 254];
    let long = vec![0xabu8; 64 * 1024];

    filter.add(&binary);
    filter.add(&long);

    assert!(filter.contains(&binary));
    assert!(filter.contains(&long));
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        BloomFilter::new(0, 5),
        Err(BloomError::InvalidArgument { name: "m", .. })
    ));
    assert!(matches!(
        BloomFilter::new(1_000_000, 0),
        Err(BloomError::InvalidArgument { name: "k", .. })
    ));
    assert!(matches!(
        BloomFilter::with_estimate(0, 0.3),
        Err(BloomError::InvalidArgument { name: "n", .. })
    ));
    for p in [-1.0, 0.0, 1.0, 2.0, f64::NAN] {
        assert!(matches!(
            BloomFilter::with_estimate(1_000_000, p),
            Err(BloomError::InvalidArgument { name: "p", .. })
        ));
    }
}

#[test]
fn test_tiny_filter_saturates_but_never_forgets() {
    let filter = BloomFilter::new(10, 5).unwrap();
    for i in 0..100u32 {
        filter.add(&i.to_le_bytes());
    }
    for i in 0..100u32 {
        assert!(filter.contains(&i.to_le_bytes()));
    }
    assert!(filter.fill_ratio() > 0.9);
}

#[test]
fn test_builder_and_constructor_agree() {
    let built = BloomFilterBuilder::new()
        .expected_items(5000)
        .false_positive_rate(0.001)
        .build()
        .unwrap();
    let direct = BloomFilter::with_estimate(5000, 0.001).unwrap();

    assert_eq!(built.parameters(), direct.parameters());

    built.add(b"same");
    direct.add(b"same");
    assert_eq!(built.snapshot(), direct.snapshot());
}

#[test]
fn test_closure_hasher() {
    let options = FilterOptions::new().with_hasher(|item: &[u8]| {
        let sum: u64 = item.iter().map(|&b| u64::from(b)).sum();
        (sum, 1u64)
    });
    let filter = BloomFilter::with_options(1000, 3, options).unwrap();

    filter.add(b"ab");
    // Same byte sum, same digest, same bits
    assert!(filter.contains(b"ba"));
    assert_eq!(filter.count_ones(), 3);
}

#[test]
fn test_construction_with_subscriber_installed() {
    // RUST_LOG=bloomguard=debug shows the construction events
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let filter = BloomFilter::with_estimate(1000, 0.01).unwrap();
    filter.add(b"logged");
    assert!(filter.contains(b"logged"));
}
