//! Timing side-channel check for `safe_compare`.
//!
//! Welch's t-test over two classes of inputs of equal width: identical
//! values, and values differing in the first byte. An early-exit
//! comparison would finish class B noticeably faster. |t| ≥ 4.5 suggests a
//! leak at >99.999% confidence.
//!
//! The measurement is sensitive to scheduler noise, so the leak check is
//! ignored by default. Run it with `cargo test --release -- --ignored` on
//! a quiet machine.

use std::time::Instant;

use num_bigint::BigUint;
use purse_srp::{safe_compare, NamedGroup};

const SAMPLES: usize = 10_000;
const T_THRESHOLD: f64 = 4.5;

#[inline(never)]
fn black_box_compare(x: &BigUint, y: &BigUint) -> bool {
    std::hint::black_box(safe_compare(std::hint::black_box(x), std::hint::black_box(y)))
}

#[allow(clippy::cast_precision_loss)]
fn welch_t_statistic(a: &[f64], b: &[f64]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return f64::NAN;
    }

    let n_a = a.len() as f64;
    let n_b = b.len() as f64;

    let mean_a: f64 = a.iter().sum::<f64>() / n_a;
    let mean_b: f64 = b.iter().sum::<f64>() / n_b;

    let var_a: f64 = a.iter().map(|x| (x - mean_a).powi(2)).sum::<f64>() / (n_a - 1.0);
    let var_b: f64 = b.iter().map(|x| (x - mean_b).powi(2)).sum::<f64>() / (n_b - 1.0);

    let denominator = (var_a / n_a + var_b / n_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }

    (mean_a - mean_b) / denominator
}

#[test]
#[ignore = "timing-sensitive; run with --ignored on an idle machine"]
fn safe_compare_no_timing_leak() {
    let n = NamedGroup::Rfc5054_2048.parameters().n();
    let reference = n - 12_345u32;
    let same = reference.clone();
    // Same bit length, first byte differs.
    let early = &reference - (BigUint::from(1u8) << (n.bits() - 8));

    for _ in 0..100 {
        black_box_compare(&reference, &same);
        black_box_compare(&reference, &early);
    }

    let mut times_a = Vec::with_capacity(SAMPLES);
    let mut times_b = Vec::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let start = Instant::now();
        let _ = black_box_compare(&reference, &same);
        let elapsed_a = start.elapsed().as_nanos();

        let start = Instant::now();
        let _ = black_box_compare(&reference, &early);
        let elapsed_b = start.elapsed().as_nanos();

        #[allow(clippy::cast_precision_loss)]
        {
            times_a.push(elapsed_a as f64);
            times_b.push(elapsed_b as f64);
        }
    }

    let abs_t = welch_t_statistic(&times_a, &times_b).abs();
    eprintln!("safe_compare timing: |t| = {abs_t:.2} (threshold {T_THRESHOLD})");
    assert!(
        abs_t < T_THRESHOLD,
        "safe_compare timing differs between classes: |t| = {abs_t:.2}"
    );
}

#[test]
fn comparison_classes_are_well_formed() {
    let n = NamedGroup::Rfc5054_2048.parameters().n();
    let reference = n - 12_345u32;
    let early = &reference - (BigUint::from(1u8) << (n.bits() - 8));
    assert_eq!(reference.bits(), early.bits());
    assert_ne!(reference.to_bytes_be()[0], early.to_bytes_be()[0]);
    assert!(safe_compare(&reference, &reference.clone()));
    assert!(!safe_compare(&reference, &early));
}

#[test]
fn welch_t_test_identical_distributions() {
    let a = vec![1.0; 100];
    let b = vec![1.0; 100];
    assert!(welch_t_statistic(&a, &b).abs() < 0.001);
}

#[test]
fn welch_t_test_different_distributions() {
    let a: Vec<f64> = (0..1000).map(|i| 100.0 + f64::from(i % 3)).collect();
    let b: Vec<f64> = (0..1000).map(|i| 200.0 + f64::from(i % 3)).collect();
    assert!(welch_t_statistic(&a, &b).abs() > 100.0);
}
