#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every statistic for one run, evaluated up front.
///
/// Produced by [ResultSet::summary](crate::ResultSet::summary) so a reporting
/// layer can take the whole picture in one piece. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSummary {
    pub successful_requests: usize,
    pub slowest: f64,
    pub fastest: f64,
    pub average_time: f64,
    pub requests_total_time: f64,
    pub requests_per_minute: u64,
    pub requests_per_second: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ok={}, slowest={:.3}s, fastest={:.3}s, avg={:.3}s, total={:.3}s, rpm={}, rps={}",
            self.successful_requests,
            self.slowest,
            self.fastest,
            self.average_time,
            self.requests_total_time,
            self.requests_per_minute,
            self.requests_per_second,
        )
    }
}
