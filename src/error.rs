use thiserror::Error;

/// Failure modes of the statistics queries.
///
/// Construction of a [ResultSet](crate::ResultSet) never fails; degenerate
/// input surfaces here, from the first query that depends on it.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The result set holds zero outcomes, so there is no minimum, maximum,
    /// mean, or sum to report.
    #[error("no requests were recorded")]
    NoRequests,

    /// The batch wall-clock time is zero or negative, so throughput is
    /// undefined. Carries the offending value in seconds.
    #[error("total time must be positive, got {0}s")]
    InvalidTotalTime(f64),
}
