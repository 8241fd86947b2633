//! Harness integration tests: runner, sweep, search, and test-case loading
//! working together against the real engines.

use std::time::Duration;

use matbench_harness::{
    average_time, find_max_size, read_test, run_once, series_run, BenchOptions,
    CancellationToken, HarnessError, Method, NoOpObserver, SearchOptions, SweepOptions, TestPair,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn read_test_then_run_every_method() {
    let mut input = "2\n1 2\n3 4\n5 6\n7 8\n".as_bytes();
    let pair = read_test(&mut input).unwrap();
    let opts = BenchOptions::default();
    for method in Method::ALL {
        let elapsed = run_once(&pair, method, &opts).unwrap();
        // A 2x2 product at nanosecond resolution can round to zero; the
        // measurement just has to come back.
        let _ = elapsed;
    }
}

#[test]
fn averaging_uses_fresh_operands_per_repetition() {
    let mut rng = StdRng::seed_from_u64(1234);
    let elapsed = average_time(24, 3, Method::StrassenCutoff, &BenchOptions::default(), &mut rng)
        .unwrap();
    assert!(elapsed > Duration::ZERO);
}

#[test]
fn search_returns_the_first_size_over_the_ceiling() {
    let opts = SearchOptions {
        start: 8,
        step: 8,
        // Generous enough that n=8 stays under it on any machine, tiny
        // enough that the search ends quickly.
        ceiling: Duration::from_micros(1),
        cutoff: 0,
    };
    let mut rng = StdRng::seed_from_u64(2);
    let cancel = CancellationToken::new();
    let outcome = find_max_size(
        Method::StrassenCutoff,
        &opts,
        &mut rng,
        &cancel,
        &NoOpObserver::new(),
    )
    .unwrap();
    assert!(outcome.size >= 8);
    assert_eq!(outcome.size % 8, 0);
    assert!(outcome.elapsed > opts.ceiling);
}

#[test]
fn sweep_collects_every_selected_method() {
    let opts = SweepOptions {
        start: 16,
        step: 16,
        ceiling: Duration::ZERO,
        repetitions: 1,
        cutoff: 0,
        methods: vec![Method::Naive, Method::StrassenPureFlat],
    };
    let mut rng = StdRng::seed_from_u64(3);
    let cancel = CancellationToken::new();
    let table = series_run(&opts, &mut rng, &cancel, &NoOpObserver::new()).unwrap();

    assert_eq!(table.len(), 1);
    assert!(table.time(16, Method::Naive).is_some());
    assert!(table.time(16, Method::StrassenPureFlat).is_some());
    assert!(table.time(16, Method::StrassenPure).is_none());
}

#[test]
fn sweep_rows_arrive_sorted() {
    // Two methods, both stopping at their first point, still share one row.
    let opts = SweepOptions {
        start: 16,
        step: 16,
        ceiling: Duration::ZERO,
        repetitions: 1,
        cutoff: 0,
        methods: Method::ALL.to_vec(),
    };
    let mut rng = StdRng::seed_from_u64(4);
    let cancel = CancellationToken::new();
    let table = series_run(&opts, &mut rng, &cancel, &NoOpObserver::new()).unwrap();
    let sizes: Vec<usize> = table.rows().map(|row| row.size()).collect();
    let mut sorted = sizes.clone();
    sorted.sort_unstable();
    assert_eq!(sizes, sorted);
}

#[test]
fn cancellation_stops_a_sweep() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let mut rng = StdRng::seed_from_u64(5);
    let result = series_run(
        &SweepOptions::default(),
        &mut rng,
        &cancel,
        &NoOpObserver::new(),
    );
    assert!(matches!(result, Err(HarnessError::Cancelled)));
}

#[test]
fn generated_pairs_are_square_and_sized() {
    let mut rng = StdRng::seed_from_u64(6);
    let pair = TestPair::random(12, &mut rng);
    assert_eq!(pair.size(), 12);
    assert_eq!(pair.a.rows(), pair.a.cols());
    assert_eq!(pair.b.rows(), pair.b.cols());
}
