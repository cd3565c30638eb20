//! Property-based tests for filter invariants.

use bloomguard::core::params::{estimate, FilterParameters};
use bloomguard::hash::{Digest, ProbeGenerator};
use bloomguard::BloomFilter;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_no_false_negatives(
        items in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..200),
    ) {
        let filter = BloomFilter::with_estimate(items.len() as u64, 0.01).unwrap();
        for item in &items {
            filter.add(item);
        }
        for item in &items {
            prop_assert!(filter.contains(item));
        }
    }

    #[test]
    fn prop_add_is_idempotent(item in prop::collection::vec(any::<u8>(), 0..128)) {
        let filter = BloomFilter::new(4096, 6).unwrap();
        filter.add(&item);
        let once = filter.snapshot();
        filter.add(&item);
        prop_assert_eq!(filter.snapshot(), once);
    }

    #[test]
    fn prop_adds_only_grow_bits(
        first in prop::collection::vec(any::<u8>(), 0..32),
        second in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let filter = BloomFilter::new(512, 4).unwrap();
        filter.add(&first);
        let before = filter.count_ones();
        filter.add(&second);
        prop_assert!(filter.count_ones() >= before);
        prop_assert!(filter.contains(&first));
    }

    #[test]
    fn prop_probes_in_range(m in 1u64..1_000_000, k in 1u64..32, a: u64, b: u64) {
        let params = FilterParameters::new(m, k).unwrap();
        let probes: Vec<u64> = ProbeGenerator::new(params)
            .probes(Digest::new(a, b))
            .collect();
        prop_assert_eq!(probes.len() as u64, k);
        prop_assert!(probes.iter().all(|&p| p < m));
    }

    #[test]
    fn prop_probe_formula(m in 1u64..u64::MAX, k in 1u64..16, a: u64, b: u64) {
        let params = FilterParameters::new(m, k).unwrap();
        let probes: Vec<u64> = ProbeGenerator::new(params)
            .probes(Digest::new(a, b))
            .collect();
        for (i, p) in probes.into_iter().enumerate() {
            let expected = (u128::from(a) + i as u128 * u128::from(b)) % u128::from(m);
            prop_assert_eq!(u128::from(p), expected);
        }
    }

    #[test]
    fn prop_estimate_is_positive(n in 1u64..10_000_000, p in 0.0001f64..0.5) {
        let (m, k) = estimate(n, p).unwrap();
        prop_assert!(m >= 1);
        prop_assert!(k >= 1);
    }

    #[test]
    fn prop_lower_rate_never_shrinks(n in 1u64..1_000_000, p in 0.001f64..0.5) {
        let (m_loose, _) = estimate(n, p).unwrap();
        let (m_tight, _) = estimate(n, p / 2.0).unwrap();
        prop_assert!(m_tight >= m_loose);
    }
}
