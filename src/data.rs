use crate::constants::{SUCCESS_STATUS_MAX, SUCCESS_STATUS_MIN};
use crate::error::StatsError;
use crate::stats::RunSummary;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One completed request: its HTTP status code and end-to-end latency.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequestOutcome {
    /// Response status code. Any value is accepted; a runner may record `0`
    /// for requests that failed in transport.
    pub status_code: u16,

    /// Completion time for this request, in seconds. Expected non-negative.
    pub latency: f64,
}

impl RequestOutcome {
    pub fn new(status_code: u16, latency: f64) -> Self {
        Self {
            status_code,
            latency,
        }
    }

    /// Whether the status code falls in
    /// [`SUCCESS_STATUS_MIN`]`..=`[`SUCCESS_STATUS_MAX`].
    pub fn is_success(&self) -> bool {
        (SUCCESS_STATUS_MIN..=SUCCESS_STATUS_MAX).contains(&self.status_code)
    }
}

/// Immutable snapshot of one completed run.
///
/// Holds the wall-clock span of the batch and every outcome, sorted ascending
/// by latency exactly once at construction. Every query below is answered from
/// that sorted view; none of them re-sort or mutate, so a `ResultSet` can be
/// shared freely between readers.
#[derive(Debug, Clone)]
pub struct ResultSet {
    total_time: f64,
    outcomes: Vec<RequestOutcome>,
}

impl ResultSet {
    /// Build a result set from the batch wall-clock time (seconds) and the
    /// recorded outcomes, in any order.
    ///
    /// Never fails: an empty batch or a non-positive total time is stored
    /// as-is and surfaces as a [StatsError] from the queries that depend on
    /// it.
    pub fn new(total_time: f64, mut outcomes: Vec<RequestOutcome>) -> Self {
        if total_time <= 0.0 {
            warn!("Total time is {total_time}s; throughput statistics will be unavailable.");
        }
        outcomes.sort_unstable_by(|a, b| a.latency.total_cmp(&b.latency));
        Self {
            total_time,
            outcomes,
        }
    }

    /// Completion time of the slowest request, in seconds.
    pub fn slowest(&self) -> Result<f64, StatsError> {
        self.outcomes
            .last()
            .map(|outcome| outcome.latency)
            .ok_or(StatsError::NoRequests)
    }

    /// Completion time of the fastest request, in seconds.
    pub fn fastest(&self) -> Result<f64, StatsError> {
        self.outcomes
            .first()
            .map(|outcome| outcome.latency)
            .ok_or(StatsError::NoRequests)
    }

    /// Mean completion time across all requests, in seconds.
    pub fn average_time(&self) -> Result<f64, StatsError> {
        Ok(self.requests_total_time()? / self.outcomes.len() as f64)
    }

    /// Sum of every request's completion time, in seconds.
    ///
    /// Distinct from [total_time](Self::total_time), the wall-clock span of
    /// the batch: requests that overlap in time make this sum the larger of
    /// the two.
    pub fn requests_total_time(&self) -> Result<f64, StatsError> {
        if self.outcomes.is_empty() {
            return Err(StatsError::NoRequests);
        }
        Ok(self.outcomes.iter().map(|outcome| outcome.latency).sum())
    }

    /// Number of outcomes with a status code in `200..=298`.
    pub fn successful_requests(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .count()
    }

    /// Requests completed per minute of wall-clock time, rounded
    /// half-to-even.
    pub fn requests_per_minute(&self) -> Result<u64, StatsError> {
        let total_time = self.checked_total_time()?;
        Ok((60.0 * self.outcomes.len() as f64 / total_time).round_ties_even() as u64)
    }

    /// Requests completed per second of wall-clock time, rounded
    /// half-to-even.
    pub fn requests_per_second(&self) -> Result<u64, StatsError> {
        let total_time = self.checked_total_time()?;
        Ok((self.outcomes.len() as f64 / total_time).round_ties_even() as u64)
    }

    /// Evaluate every statistic at once.
    ///
    /// Latency statistics are evaluated before throughput, so an empty run
    /// reports [StatsError::NoRequests] even when the total time is also bad.
    pub fn summary(&self) -> Result<RunSummary, StatsError> {
        Ok(RunSummary {
            successful_requests: self.successful_requests(),
            slowest: self.slowest()?,
            fastest: self.fastest()?,
            average_time: self.average_time()?,
            requests_total_time: self.requests_total_time()?,
            requests_per_minute: self.requests_per_minute()?,
            requests_per_second: self.requests_per_second()?,
        })
    }

    /// Wall-clock span of the batch, in seconds, exactly as given at
    /// construction.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// All outcomes, sorted ascending by latency.
    pub fn outcomes(&self) -> &[RequestOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn checked_total_time(&self) -> Result<f64, StatsError> {
        if self.total_time > 0.0 {
            Ok(self.total_time)
        } else {
            Err(StatsError::InvalidTotalTime(self.total_time))
        }
    }
}
