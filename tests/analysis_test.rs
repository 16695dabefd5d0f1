mod test_signals;

use contractile::{AnalysisConfig, FilteredSignal, analyze};
use test_signals::generate_twitch_waveform;

fn config() -> AnalysisConfig {
    AnalysisConfig {
        round_to_int: false,
        ..AnalysisConfig::default()
    }
}

#[test]
fn test_analyze_regular_train() {
    let (time, value) = generate_twitch_waveform(&[50; 8], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();

    let analysis = analyze(&signal, &config()).unwrap();

    assert_eq!(analysis.extrema.peaks.len(), 8);
    assert_eq!(analysis.extrema.valleys.len(), 7);
    // Both edge twitches are dropped.
    assert_eq!(analysis.per_twitch.len(), 6);
    assert_eq!(analysis.twitches.len(), 6);

    for (&peak_time, metrics) in &analysis.per_twitch {
        assert!(analysis.extrema.peaks.iter().any(|&p| time[p] == peak_time));

        // A 50-sample cycle at 1000 cms per sample is a 50_000 cms period.
        assert!((metrics.period - 50_000.0).abs() < 1e-9);
        assert!((metrics.frequency - 2.0).abs() < 1e-9);
        assert!((metrics.amplitude - 100.0).abs() < 1.0);
        assert!(metrics.auc > 0.0);

        // Wider thresholds sit lower on the twitch.
        let w10 = metrics.widths[&10].duration;
        let w50 = metrics.widths[&50].duration;
        let w90 = metrics.widths[&90].duration;
        assert!(w10 <= w50);
        assert!(w50 <= w90);
        assert!(metrics.contraction_velocity > 0.0);
        assert!(metrics.relaxation_velocity > 0.0);
    }

    // A perfectly regular train has zero irregularity on interior twitches
    // and undefined irregularity at both ends.
    let irregularities: Vec<f64> = analysis
        .per_twitch
        .values()
        .map(|m| m.interval_irregularity)
        .collect();
    assert!(irregularities.first().unwrap().is_nan());
    assert!(irregularities.last().unwrap().is_nan());
    for &irr in &irregularities[1..irregularities.len() - 1] {
        assert!((irr - 0.0).abs() < 1e-9);
    }

    let agg = &analysis.aggregate;
    assert_eq!(agg.period.n, 6);
    assert!((agg.period.mean.unwrap() - 50_000.0).abs() < 1e-9);
    assert!(agg.period.std_dev.unwrap().abs() < 1e-9);
    assert_eq!(agg.widths[&50].n, 6);
    assert_eq!(agg.interval_irregularity.n, 6);
    assert!((agg.interval_irregularity.mean.unwrap() - 0.0).abs() < 1e-9);
}

#[test]
fn test_analyze_uneven_train_irregularity() {
    let (time, value) = generate_twitch_waveform(&[50, 60, 70, 50, 50], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();

    let analysis = analyze(&signal, &config()).unwrap();
    assert_eq!(analysis.per_twitch.len(), 3);

    let irregularities: Vec<f64> = analysis
        .per_twitch
        .values()
        .map(|m| m.interval_irregularity)
        .collect();
    assert!(irregularities[0].is_nan());
    // Middle twitch (peak at sample 145): 65_000 cms before, 60_000 after.
    assert!((irregularities[1] - 5_000.0).abs() < 1e-9);
    assert!(irregularities[2].is_nan());

    let agg = &analysis.aggregate.interval_irregularity;
    assert_eq!(agg.n, 3);
    assert!(agg.mean.is_none());
    assert!(agg.std_dev.is_none());
}

#[test]
fn test_analyze_inverted_polarity_matches_upright() {
    let (time, up) = generate_twitch_waveform(&[50; 6], 100.0, 0.0, true);
    let (_, down) = generate_twitch_waveform(&[50; 6], 100.0, 0.0, false);

    let up_signal = FilteredSignal::new(&time, &up).unwrap();
    let down_signal = FilteredSignal::new(&time, &down).unwrap();

    let up_analysis = analyze(&up_signal, &config()).unwrap();
    let down_analysis = analyze(
        &down_signal,
        &AnalysisConfig {
            twitches_point_up: false,
            ..config()
        },
    )
    .unwrap();

    assert_eq!(up_analysis.extrema.peaks, down_analysis.extrema.peaks);
    assert_eq!(up_analysis.extrema.valleys, down_analysis.extrema.valleys);
    assert_eq!(up_analysis.per_twitch.len(), down_analysis.per_twitch.len());

    for (up_metrics, down_metrics) in up_analysis
        .per_twitch
        .values()
        .zip(down_analysis.per_twitch.values())
    {
        assert!((up_metrics.period - down_metrics.period).abs() < 1e-9);
        assert!((up_metrics.amplitude - down_metrics.amplitude).abs() < 1e-9);
        assert!((up_metrics.auc - down_metrics.auc).abs() < 1e-6);
    }
}

#[test]
fn test_analyze_rounding_mode() {
    let (time, value) = generate_twitch_waveform(&[50; 6], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();

    let rounded = analyze(
        &signal,
        &AnalysisConfig {
            round_to_int: true,
            ..config()
        },
    )
    .unwrap();
    let exact = analyze(&signal, &config()).unwrap();

    for (rounded_metrics, exact_metrics) in
        rounded.per_twitch.values().zip(exact.per_twitch.values())
    {
        assert_eq!(rounded_metrics.period, rounded_metrics.period.trunc());
        assert_eq!(rounded_metrics.amplitude, rounded_metrics.amplitude.trunc());
        assert_eq!(rounded_metrics.auc, rounded_metrics.auc.trunc());
        for measurement in rounded_metrics.widths.values() {
            assert_eq!(measurement.duration, measurement.duration.trunc());
        }
        // Frequency is never rounded; velocities come from the rounded
        // crossing coordinates but are not themselves forced to integers.
        assert!(
            (rounded_metrics.frequency - exact_metrics.frequency).abs() < 1e-12
        );
        let rel = (rounded_metrics.contraction_velocity - exact_metrics.contraction_velocity)
            .abs()
            / exact_metrics.contraction_velocity;
        assert!(rel < 0.05);
        let rel = (rounded_metrics.relaxation_velocity - exact_metrics.relaxation_velocity)
            .abs()
            / exact_metrics.relaxation_velocity;
        assert!(rel < 0.05);
    }
}

#[test]
fn test_relaxed_floors_with_only_boundary_peaks() {
    // Two bumps give two peaks and one valley; both peaks are boundary
    // peaks, so floors low enough to admit the recording leave nothing to
    // analyze. The call must still complete with empty results.
    let (time, value) = generate_twitch_waveform(&[50, 50], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();

    let analysis = analyze(
        &signal,
        &AnalysisConfig {
            min_peaks: 2,
            min_valleys: 1,
            ..config()
        },
    )
    .unwrap();

    assert_eq!(analysis.extrema.peaks, vec![25, 75]);
    assert_eq!(analysis.extrema.valleys, vec![50]);
    assert!(analysis.twitches.is_empty());
    assert!(analysis.per_twitch.is_empty());
    assert_eq!(analysis.aggregate.period.n, 0);
    assert_eq!(analysis.aggregate.period.mean, None);
}

#[test]
fn test_short_signals_fail_validation_not_panic() {
    for n in [0usize, 1] {
        let time: Vec<i64> = (0..n as i64).map(|i| i * 1000).collect();
        let value = vec![0.0; n];
        let signal = FilteredSignal::new(&time, &value).unwrap();

        let err = analyze(&signal, &config()).unwrap_err();
        assert!(matches!(
            err,
            contractile::TwitchError::InsufficientExtremaDetected { detected: 0, .. }
        ));
    }
}

#[test]
fn test_analysis_serializes_to_json() {
    let (time, value) = generate_twitch_waveform(&[50; 6], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();

    let analysis = analyze(&signal, &config()).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert!(json["extrema"]["peaks"].is_array());
    assert!(json["twitches"].is_object());
    assert!(json["per_twitch"].is_object());
    assert!(json["aggregate"]["period"]["mean"].is_number());
    assert_eq!(
        json["aggregate"]["period"]["n"].as_u64().unwrap(),
        analysis.per_twitch.len() as u64
    );
    // Undefined statistics are omitted rather than emitted as null.
    let (time, value) = generate_twitch_waveform(&[50, 60, 70, 50, 50], 100.0, 0.0, true);
    let signal = FilteredSignal::new(&time, &value).unwrap();
    let sparse = serde_json::to_value(&analyze(&signal, &config()).unwrap()).unwrap();
    let irregularity = &sparse["aggregate"]["interval_irregularity"];
    assert_eq!(irregularity["n"].as_u64().unwrap(), 3);
    assert!(irregularity.get("mean").is_none());
}
