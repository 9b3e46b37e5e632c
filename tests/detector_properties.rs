//! Property checks for the LSB-pairing detector.
//!
//! Inputs come from a small deterministic generator so failures reproduce.

use stego_witness::detect::thresholds::MAX_ENTROPY_BITS;
use stego_witness::{detect, DetectError, Detector, Histogram, LsbPairingDetector, SuspicionLevel};

struct Lcg(u64);

impl Lcg {
    fn next_u8(&mut self) -> u8 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 56) as u8
    }

    fn samples(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_u8()).collect()
    }
}

fn corpus() -> Vec<Vec<u8>> {
    let mut rng = Lcg(0x5eed);
    let mut inputs: Vec<Vec<u8>> = vec![
        vec![0u8],
        vec![255u8; 17],
        vec![0u8, 255],
        (0..=255u8).collect(),
        (0..256 * 256).map(|i| (i % 256) as u8).collect(),
    ];
    for len in [3usize, 64, 1000, 4096, 65_536] {
        inputs.push(rng.samples(len));
        // Narrow band around mid-gray.
        inputs.push(rng.samples(len).iter().map(|v| 120 + v % 16).collect());
        // Even values only.
        inputs.push(rng.samples(len).iter().map(|v| v & !1).collect());
    }
    inputs
}

#[test]
fn repeated_calls_are_identical() {
    for samples in corpus() {
        let first = detect(&samples).unwrap();
        let second = detect(&samples).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.chi_square_score().to_bits(),
            second.chi_square_score().to_bits()
        );
        assert_eq!(first.entropy().to_bits(), second.entropy().to_bits());
    }
}

#[test]
fn histogram_conserves_sample_count() {
    for samples in corpus() {
        let result = detect(&samples).unwrap();
        assert_eq!(result.histogram().total(), samples.len() as u64);
        assert_eq!(result.histogram().counts().len(), 256);
    }
}

#[test]
fn scores_stay_in_range() {
    for samples in corpus() {
        let result = detect(&samples).unwrap();
        assert!(result.chi_square_score() >= 0.0);
        assert!(result.entropy() >= 0.0);
        assert!(result.entropy() <= MAX_ENTROPY_BITS);
    }
}

#[test]
fn normalized_score_is_bounded_by_occupied_bins() {
    // Each pair contributes at most its own count, so the raw sum never
    // exceeds the sample count.
    for samples in corpus() {
        let hist = Histogram::from_samples(&samples);
        let bound = 1.0 / hist.nonzero_bins() as f64;
        let result = detect(&samples).unwrap();
        assert!(result.chi_square_score() <= bound + 0.0005);
    }
}

#[test]
fn constant_image_is_low() {
    for value in [0u8, 1, 128, 255] {
        let result = detect(&vec![value; 256 * 256]).unwrap();
        assert_eq!(result.chi_square_score(), 0.0);
        assert_eq!(result.entropy(), 0.0);
        assert_eq!(result.suspicion_level(), SuspicionLevel::Low);
        assert_eq!(result.histogram().count(value), 256 * 256);
    }
}

#[test]
fn empty_input_is_rejected() {
    let err = detect(&[]).unwrap_err();
    assert!(matches!(err, DetectError::InvalidInput(_)));
    assert_eq!(err.code(), "INVALID_INPUT");
}

#[test]
fn gradient_image_end_to_end() {
    let samples: Vec<u8> = (0..256 * 256).map(|i| (i % 256) as u8).collect();
    let result = detect(&samples).unwrap();
    assert!(result.histogram().counts().iter().all(|&c| c == 256));
    assert_eq!(result.entropy(), 8.0);
    assert_eq!(result.chi_square_score(), 0.0);
    // Entropy fails both entropy clauses, but a chi-square score under 0.5
    // satisfies Medium by itself.
    assert_eq!(result.suspicion_level(), SuspicionLevel::Medium);
}

#[test]
fn classification_boundaries() {
    assert_eq!(SuspicionLevel::classify(0.0999, 7.2), SuspicionLevel::Low);
    assert_eq!(SuspicionLevel::classify(0.1, 7.2), SuspicionLevel::Medium);
    assert_eq!(SuspicionLevel::classify(0.1, 7.5), SuspicionLevel::Medium);
    assert_eq!(SuspicionLevel::classify(0.0999, 7.3), SuspicionLevel::Medium);
    assert_eq!(SuspicionLevel::classify(0.5, 7.7999), SuspicionLevel::Medium);
    assert_eq!(SuspicionLevel::classify(0.4999, 7.8), SuspicionLevel::Medium);
    assert_eq!(SuspicionLevel::classify(0.5, 7.8), SuspicionLevel::High);
}

#[test]
fn balanced_narrow_histogram_is_low() {
    // 64 occupied bins, equal counts: entropy 6 bits, no pair imbalance.
    let mut counts = [0u64; 256];
    for slot in counts.iter_mut().skip(64).take(64) {
        *slot = 100;
    }
    let result = LsbPairingDetector
        .detect_histogram(Histogram::from_counts(counts))
        .unwrap();
    assert_eq!(result.entropy(), 6.0);
    assert_eq!(result.chi_square_score(), 0.0);
    assert_eq!(result.suspicion_level(), SuspicionLevel::Low);
}

#[test]
fn pair_equalization_moves_both_statistics() {
    // Base image: only multiples of four, so every pair is maximally
    // imbalanced.
    let mut rng = Lcg(42);
    let base: Vec<u8> = rng
        .samples(256 * 256)
        .iter()
        .map(|v| (v % 64) * 4)
        .collect();
    let base_hist = Histogram::from_samples(&base);

    // Embedding equalizes the two members of every pair.
    let mut counts = *base_hist.counts();
    for pair in counts.chunks_exact_mut(2) {
        let n = pair[0] + pair[1];
        pair[0] = n / 2;
        pair[1] = n - n / 2;
    }
    let flattened_hist = Histogram::from_counts(counts);

    let base_result = LsbPairingDetector.detect_histogram(base_hist).unwrap();
    let flattened_result = LsbPairingDetector
        .detect_histogram(flattened_hist)
        .unwrap();

    assert!(base_result.chi_square_score() > flattened_result.chi_square_score());
    assert!(flattened_result.entropy() > base_result.entropy());
}

#[test]
fn shared_detector_across_threads() {
    let detector = LsbPairingDetector::new();
    let detector = &detector;
    let inputs = corpus();
    let expected: Vec<_> = inputs
        .iter()
        .map(|s| detector.detect(s).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|samples| scope.spawn(move || detector.detect(samples).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(expected.iter()) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
