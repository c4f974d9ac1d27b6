use conf_bands::{
    BandCalculator, BandConfig, BandError, ConfidenceBand, DEFAULT_CONFIDENCE, Ensemble,
    IntervalFamily, SpreadEstimator, compute_bands,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use statrs::distribution::{ContinuousCDF, Normal as StatsNormal, StudentsT};

fn noisy_ensemble(f: &[f64], n: usize, sigma: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, sigma).unwrap();
    (0..n)
        .map(|_| f.iter().map(|&y| y + noise.sample(&mut rng)).collect())
        .collect()
}

fn column_std(samples: &[Vec<f64>], i: usize, ddof: usize) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().map(|row| row[i]).sum::<f64>() / n;
    let ss: f64 = samples.iter().map(|row| (row[i] - mean).powi(2)).sum();
    (ss / (n - ddof as f64)).sqrt()
}

fn assert_contains_best_fit(band: &ConfidenceBand, f: &[f64]) {
    for (i, &y) in f.iter().enumerate() {
        assert!(
            band.lower()[i] <= y && y <= band.upper()[i],
            "index {i}: {} <= {y} <= {} violated",
            band.lower()[i],
            band.upper()[i]
        );
        assert!(band.contains(i, y));
    }
}

#[test]
fn band_is_aligned_and_contains_best_fit_in_both_branches() {
    let x: Vec<f64> = (0..25).map(|i| i as f64 * 0.4).collect();
    let f: Vec<f64> = x.iter().map(|&t| 1.5 * t - 0.2 * t * t).collect();

    for (n, seed) in [(8, 1_u64), (30, 2), (31, 3), (200, 4)] {
        let samples = noisy_ensemble(&f, n, 0.3, seed);
        let band = compute_bands(&x, &f, &samples, DEFAULT_CONFIDENCE).unwrap();
        assert_eq!(band.len(), x.len());
        assert_eq!(band.upper().len(), band.lower().len());
        assert_contains_best_fit(&band, &f);
    }
}

#[test]
fn widening_confidence_never_narrows_the_band() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let f = [1.0, 2.0, 0.5, -1.0];

    for (n, seed) in [(12, 10_u64), (64, 11)] {
        let samples = noisy_ensemble(&f, n, 0.2, seed);
        let levels = [0.05, 0.3, 0.5, 0.68, 0.9, 0.95, 0.999];
        let bands: Vec<ConfidenceBand> = levels
            .iter()
            .map(|&c| compute_bands(&x, &f, &samples, c).unwrap())
            .collect();

        for pair in bands.windows(2) {
            for i in 0..x.len() {
                assert!(pair[1].upper()[i] >= pair[0].upper()[i]);
                assert!(pair[1].lower()[i] <= pair[0].lower()[i]);
            }
        }
    }
}

#[test]
fn thirty_realizations_use_student_t_correction() {
    let x = [0.0, 1.0, 2.0];
    let f = [0.0, 1.0, 2.0];
    let samples = noisy_ensemble(&f, 30, 0.5, 42);
    let conf = 0.68;

    let band = compute_bands(&x, &f, &samples, conf).unwrap();
    assert_eq!(
        band.family(),
        IntervalFamily::StudentT {
            degrees_of_freedom: 29
        }
    );
    assert_eq!(band.estimator(), SpreadEstimator::Unbiased);

    let p = 0.5 * (1.0 + conf);
    let t = StudentsT::new(0.0, 1.0, 29.0).unwrap().inverse_cdf(p);
    let z = StatsNormal::new(0.0, 1.0).unwrap().inverse_cdf(p);
    assert!(t > z);

    for i in 0..x.len() {
        let s = column_std(&samples, i, 1);
        let naive_normal = z * s;
        let half = band.upper()[i] - f[i];
        assert!((half - t * s).abs() < 1e-6 * s.max(1.0));
        assert!((half / naive_normal - t / z).abs() < 1e-6);
    }
}

#[test]
fn thirty_one_realizations_use_normal_with_population_spread() {
    let x = [0.0, 1.0, 2.0];
    let f = [0.0, 1.0, 2.0];
    let samples = noisy_ensemble(&f, 31, 0.5, 43);
    let conf = 0.9;

    let band = compute_bands(&x, &f, &samples, conf).unwrap();
    assert_eq!(band.family(), IntervalFamily::Normal);
    assert_eq!(band.estimator(), SpreadEstimator::Population);

    let z = StatsNormal::new(0.0, 1.0).unwrap().inverse_cdf(0.95);
    for i in 0..x.len() {
        let s = column_std(&samples, i, 0);
        assert!((band.upper()[i] - (f[i] + z * s)).abs() < 1e-9);
        assert!((band.lower()[i] - (f[i] - z * s)).abs() < 1e-9);
    }
}

#[test]
fn one_sigma_band_for_large_gaussian_ensemble() {
    let x = [0.0, 1.0, 2.0];
    let f = [0.0, 1.0, 2.0];
    let sigma = 0.05;
    let samples = noisy_ensemble(&f, 50, sigma, 2024);

    let (upper, lower) = compute_bands(&x, &f, &samples, 0.68)
        .unwrap()
        .into_parts();
    for i in 0..x.len() {
        assert!(
            (upper[i] - f[i] - sigma).abs() < 0.4 * sigma,
            "upper[{i}] = {}",
            upper[i]
        );
        assert!(
            (f[i] - lower[i] - sigma).abs() < 0.4 * sigma,
            "lower[{i}] = {}",
            lower[i]
        );
    }
}

#[test]
fn mismatched_best_fit_is_rejected() {
    let samples = vec![vec![0.0, 1.0, 2.0]; 5];
    let err = compute_bands(&[0.0, 1.0, 2.0], &[0.0, 1.0], &samples, 0.68).unwrap_err();
    assert!(matches!(err, BandError::ShapeMismatch(_)));
}

#[test]
fn mismatched_sample_row_is_rejected() {
    let mut samples = vec![vec![0.0, 1.0, 2.0]; 5];
    samples[3].pop();
    let err = compute_bands(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &samples, 0.68).unwrap_err();
    assert!(matches!(err, BandError::ShapeMismatch(_)));

    let ensemble = Ensemble::from_rows(&vec![vec![0.0, 1.0]; 4], 2).unwrap();
    let err = BandCalculator::default()
        .compute(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &ensemble)
        .unwrap_err();
    assert!(matches!(err, BandError::ShapeMismatch(_)));
}

#[test]
fn confidence_outside_open_unit_interval_is_rejected() {
    let x = [0.0, 1.0];
    let samples = noisy_ensemble(&x, 10, 0.1, 7);
    for conf in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
        let err = compute_bands(&x, &x, &samples, conf).unwrap_err();
        assert!(matches!(err, BandError::InvalidParameter(_)), "conf={conf}");
    }
}

#[test]
fn parameter_draws_produce_band_around_model() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let model = |t: f64, p: &[f64]| p[0] + p[1] * t;
    let best = [0.5, 2.0];
    let f: Vec<f64> = x.iter().map(|&t| model(t, &best)).collect();

    let mut rng = StdRng::seed_from_u64(99);
    let intercept = Normal::new(best[0], 0.1).unwrap();
    let slope = Normal::new(best[1], 0.05).unwrap();
    let draws: Vec<[f64; 2]> = (0..100)
        .map(|_| [intercept.sample(&mut rng), slope.sample(&mut rng)])
        .collect();

    let ensemble = Ensemble::from_parameter_draws(&x, &draws, model).unwrap();
    assert_eq!(ensemble.size(), 100);

    let band = BandCalculator::new(BandConfig::with_confidence(0.95))
        .compute(&x, &f, &ensemble)
        .unwrap();
    assert_contains_best_fit(&band, &f);

    // Slope uncertainty makes the band fan out away from the intercept.
    let widths = band.half_widths();
    assert!(widths[9] > widths[0]);
}

#[test]
fn config_and_band_serialize() {
    let config: BandConfig = serde_json::from_str(r#"{"confidence":0.9}"#).unwrap();
    assert_eq!(config.confidence, 0.9);
    assert_eq!(config.small_sample_limit, 30);

    let x = [0.0, 1.0];
    let samples = noisy_ensemble(&x, 5, 0.1, 5);
    let band = compute_bands(&x, &x, &samples, 0.68).unwrap();
    let json = serde_json::to_string(&band).unwrap();
    assert!(json.contains(r#""family":"student_t""#), "{json}");
    assert!(json.contains(r#""degrees_of_freedom":4"#), "{json}");

    let back: ConfidenceBand = serde_json::from_str(&json).unwrap();
    assert_eq!(back.family(), band.family());
    assert_eq!(back.estimator(), band.estimator());
    assert_eq!(back.len(), band.len());
}
