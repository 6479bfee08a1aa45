//! Property-based tests for synapse
//!
//! These tests verify invariants that must hold for all inputs:
//! - Vector math identities (symmetry, self-similarity, unit norms)
//! - Length mismatches always fail, never truncate
//! - Random generation stays within bounds
//!
//! Run with: cargo test --test property_tests

use proptest::prelude::*;

// ============================================================================
// VECTOR MATH TESTS
// ============================================================================

mod vecmath_tests {
    use super::*;
    use synapse::vecmath::{cosine_similarity, euclidean_distance, normalize, random_vector};

    fn vector(len: usize) -> impl Strategy<Value = Vec<f32>> {
        prop::collection::vec(-1000.0f32..1000.0, len)
    }

    proptest! {
        /// Invariant: cosine similarity is symmetric
        #[test]
        fn cosine_symmetric(a in vector(8), b in vector(8)) {
            let ab = cosine_similarity(&a, &b).unwrap();
            let ba = cosine_similarity(&b, &a).unwrap();
            prop_assert!((ab - ba).abs() < 1e-5);
        }

        /// Invariant: cosine(a, a) is ~1 whenever a has non-zero norm
        #[test]
        fn cosine_self_is_one(a in vector(8)) {
            let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
            prop_assume!(norm > 1e-3);
            let sim = cosine_similarity(&a, &a).unwrap();
            prop_assert!((sim - 1.0).abs() < 1e-3);
        }

        /// Invariant: cosine similarity stays within [-1, 1] (plus epsilon)
        #[test]
        fn cosine_bounded(a in vector(8), b in vector(8)) {
            let sim = cosine_similarity(&a, &b).unwrap();
            prop_assert!((-1.0 - 1e-4..=1.0 + 1e-4).contains(&sim));
        }

        /// Invariant: mismatched lengths are a validation error for both
        /// comparison operations
        #[test]
        fn mismatched_lengths_fail(a in vector(4), b in vector(7)) {
            prop_assert!(cosine_similarity(&a, &b).is_err());
            prop_assert!(euclidean_distance(&a, &b).is_err());
        }

        /// Invariant: distance from a vector to itself is zero
        #[test]
        fn euclidean_self_is_zero(a in vector(8)) {
            prop_assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
        }

        /// Invariant: euclidean distance is symmetric and non-negative
        #[test]
        fn euclidean_symmetric_nonnegative(a in vector(8), b in vector(8)) {
            let ab = euclidean_distance(&a, &b).unwrap();
            let ba = euclidean_distance(&b, &a).unwrap();
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-3);
        }

        /// Invariant: normalized non-zero vectors have unit norm
        #[test]
        fn normalize_unit_norm(a in vector(8)) {
            let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
            prop_assume!(norm > 1e-3);
            let n = normalize(&a);
            let n_norm: f32 = n.iter().map(|x| x * x).sum::<f32>().sqrt();
            prop_assert!((n_norm - 1.0).abs() < 1e-3);
        }

        /// Invariant: normalization preserves length, and zero vectors pass
        /// through unchanged
        #[test]
        fn normalize_preserves_shape(a in vector(8)) {
            let n = normalize(&a);
            prop_assert_eq!(n.len(), a.len());
        }

        /// Invariant: random vectors respect requested length and bounds
        #[test]
        fn random_vector_in_bounds(dims in 1usize..256, lo in -100.0f32..0.0, width in 0.1f32..100.0) {
            let hi = lo + width;
            let v = random_vector(dims, lo, hi);
            prop_assert_eq!(v.len(), dims);
            prop_assert!(v.iter().all(|&x| x >= lo && x < hi));
        }
    }
}

// ============================================================================
// TYPE ROUND-TRIP TESTS
// ============================================================================

mod type_tests {
    use super::*;
    use synapse::types::{MemoryRecord, MemoryType};

    fn memory_type() -> impl Strategy<Value = MemoryType> {
        prop_oneof![
            Just(MemoryType::Episodic),
            Just(MemoryType::Semantic),
            Just(MemoryType::Procedural),
            Just(MemoryType::Emotional),
        ]
    }

    proptest! {
        /// Invariant: memory type serde round-trips through its wire tag
        #[test]
        fn memory_type_serde_round_trip(t in memory_type()) {
            let json = serde_json::to_string(&t).unwrap();
            let back: MemoryType = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(t, back);
        }

        /// Invariant: records round-trip through JSON with strength and
        /// connections intact, including negative strengths
        #[test]
        fn record_serde_round_trip(
            t in memory_type(),
            strength in -100.0f32..100.0,
            connections in prop::collection::vec("[a-z0-9]{1,8}", 0..5),
        ) {
            let mut record = MemoryRecord::new(serde_json::json!({"k": "v"}), t);
            record.strength = strength;
            record.connections = connections.clone();

            let json = serde_json::to_string(&record).unwrap();
            let back: MemoryRecord = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back.memory_type, t);
            prop_assert_eq!(back.strength, strength);
            prop_assert_eq!(back.connections, connections);
        }
    }
}
