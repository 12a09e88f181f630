//! End-to-end sweep tests over the public API

use std::sync::atomic::AtomicBool;

use crchunt_core::{
    merge, reference_samples, sweep, write_report, Crc32, KnownSample, ReportFormat, ScoreKey,
    SearchParams, DEFAULT_POLYNOMIAL,
};

// Samples planted so the standard polynomial with (init all-ones, xorout)
// scores both of them; everything nearby scores nothing.
fn planted_samples() -> Vec<KnownSample> {
    let crc = Crc32::new(DEFAULT_POLYNOMIAL);
    let lootbox = crc.compute(b"lootbox", u32::MAX, true);
    let unlock = crc.compute(b"unlock", u32::MAX, true);
    vec![
        KnownSample::new(lootbox, "lootbox").unwrap(),
        KnownSample::new(unlock, "unlock").unwrap(),
    ]
}

#[test]
fn sweep_recovers_planted_parameters() {
    let samples = planted_samples();
    let cancel = AtomicBool::new(false);

    let outcome = sweep(
        &samples,
        (DEFAULT_POLYNOMIAL - 50)..=(DEFAULT_POLYNOMIAL + 50),
        &cancel,
        |_| {},
    );

    let key = ScoreKey {
        polynomial: DEFAULT_POLYNOMIAL,
        params: SearchParams { xorout: true, init: u32::MAX },
    };
    assert_eq!(outcome.scores.get(&key), Some(&2));
    assert!(outcome.resume_at.is_none());
    assert_eq!(outcome.tested, 101);
}

#[test]
fn any_split_point_merges_to_the_full_result() {
    let samples = planted_samples();
    let cancel = AtomicBool::new(false);
    let lo = DEFAULT_POLYNOMIAL - 20;
    let hi = DEFAULT_POLYNOMIAL + 20;

    let full = sweep(&samples, lo..=hi, &cancel, |_| {}).scores;

    for split in [lo + 1, DEFAULT_POLYNOMIAL, DEFAULT_POLYNOMIAL + 1, hi] {
        let mut merged = sweep(&samples, lo..=(split - 1), &cancel, |_| {}).scores;
        merge(&mut merged, sweep(&samples, split..=hi, &cancel, |_| {}).scores);
        assert_eq!(merged, full, "split at {split:08X} diverged");
    }
}

#[test]
fn reference_samples_sweep_writes_report() {
    let samples = reference_samples().unwrap();
    let cancel = AtomicBool::new(false);

    // A short slice of the full space; the reference checksums are not
    // expected to resolve this early, the report just has to land on disk.
    let outcome = sweep(&samples, 0..=255, &cancel, |_| {});

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crc.txt");
    write_report(&path, &outcome.scores, ReportFormat::Text).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    assert_eq!(body.lines().count(), outcome.scores.len());
    for line in body.lines() {
        let (key, count) = line.split_once(": ").unwrap();
        let fields: Vec<&str> = key.split(' ').collect();
        assert_eq!(fields.len(), 3);
        assert!(u32::from_str_radix(fields[0], 16).is_ok());
        assert!(fields[1] == "true" || fields[1] == "false");
        assert!(fields[2] == "0" || fields[2] == "4294967295");
        let count: usize = count.parse().unwrap();
        assert!(count >= 1 && count <= samples.len());
    }
}
