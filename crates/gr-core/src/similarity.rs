/// Cosine similarity between two embedding vectors. Range: [-1, 1].
///
/// Vectors of different lengths are compared over their shared prefix:
/// the dot product and both norms all accumulate over the common index
/// range. A zero-norm operand yields 0, not NaN. The result is clamped
/// to [-1, 1] against floating-point drift.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().min(b.len());

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = [1.0, 1.0, 1.0];
        assert_relative_eq!(cosine_similarity(&v, &v), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orthogonal_is_zero() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_antiparallel_is_minus_one() {
        let a = [1.0, 2.0, 3.0];
        let b = [-1.0, -2.0, -3.0];
        assert_relative_eq!(cosine_similarity(&a, &b), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_is_zero() {
        let zero = [0.0, 0.0, 0.0];
        let v = [1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let v = [1.0, 2.0];
        assert_eq!(cosine_similarity(&[], &v), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_shared_prefix_only() {
        // The trailing components of the longer vector must not contribute:
        // over the shared prefix [1] vs [1], similarity is exactly 1.
        let short = [1.0];
        let long = [1.0, 100.0, -7.0];
        assert_relative_eq!(cosine_similarity(&short, &long), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_value() {
        // cos(45°) between [1,0] and [1,1]
        let a = [1.0, 0.0];
        let b = [1.0, 1.0];
        let expected = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(cosine_similarity(&a, &b), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let a = [0.3, -1.2, 4.5, 0.0];
        let b = [2.0, 0.7, -0.4, 1.1];
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    proptest! {
        #[test]
        fn prop_within_range(
            a in prop::collection::vec(-100.0f64..100.0, 0..16),
            b in prop::collection::vec(-100.0f64..100.0, 0..16),
        ) {
            let sim = cosine_similarity(&a, &b);
            prop_assert!((-1.0..=1.0).contains(&sim), "out of range: {sim}");
        }

        #[test]
        fn prop_scale_invariant(
            v in prop::collection::vec(-10.0f64..10.0, 1..8),
            scale in 0.1f64..50.0,
        ) {
            let scaled: Vec<f64> = v.iter().map(|x| x * scale).collect();
            let sim = cosine_similarity(&v, &scaled);
            let direct = cosine_similarity(&v, &v);
            prop_assert!((sim - direct).abs() < 1e-9);
        }
    }
}
