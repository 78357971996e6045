use volley_stats::{RequestOutcome, ResultSet, RunSummary, StatsError};

fn completed_run() -> ResultSet {
    let outcomes = vec![
        RequestOutcome::new(200, 3.4),
        RequestOutcome::new(500, 6.1),
        RequestOutcome::new(200, 1.04),
        RequestOutcome::new(201, 0.9),
        RequestOutcome::new(299, 2.2),
        RequestOutcome::new(0, 4.0),
    ];
    ResultSet::new(12.5, outcomes)
}

#[test]
fn summary_matches_individual_queries() {
    let results = completed_run();
    let summary = results.summary().unwrap();

    assert_eq!(summary.successful_requests, results.successful_requests());
    assert_eq!(summary.slowest, results.slowest().unwrap());
    assert_eq!(summary.fastest, results.fastest().unwrap());
    assert_eq!(summary.average_time, results.average_time().unwrap());
    assert_eq!(
        summary.requests_total_time,
        results.requests_total_time().unwrap()
    );
    assert_eq!(
        summary.requests_per_minute,
        results.requests_per_minute().unwrap()
    );
    assert_eq!(
        summary.requests_per_second,
        results.requests_per_second().unwrap()
    );
}

#[test]
fn report_for_a_small_run() {
    // Dyadic latencies so every expected value is exact.
    let outcomes = vec![
        RequestOutcome::new(200, 2.25),
        RequestOutcome::new(503, 4.0),
        RequestOutcome::new(204, 0.5),
        RequestOutcome::new(200, 1.25),
    ];
    let results = ResultSet::new(2.0, outcomes);

    let expected = RunSummary {
        successful_requests: 3,
        slowest: 4.0,
        fastest: 0.5,
        average_time: 2.0,
        requests_total_time: 8.0,
        requests_per_minute: 120,
        requests_per_second: 2,
    };
    assert_eq!(results.summary().unwrap(), expected);
}

#[test]
fn summary_surfaces_empty_run() {
    let results = ResultSet::new(10.0, Vec::new());
    assert!(matches!(results.summary(), Err(StatsError::NoRequests)));
}

#[test]
fn summary_surfaces_bad_total_time() {
    let results = ResultSet::new(0.0, vec![RequestOutcome::new(200, 1.0)]);
    assert!(matches!(
        results.summary(),
        Err(StatsError::InvalidTotalTime(_))
    ));
}

#[test]
fn summary_formats_for_logging() {
    let summary = completed_run().summary().unwrap();
    let line = summary.to_string();

    assert!(line.starts_with("ok=3, "));
    assert!(line.contains("slowest=6.100s"));
    assert!(line.contains("rpm=29"));
    assert!(!line.contains('\n'));
}
