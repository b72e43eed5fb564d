use crate::shared::error::OrderError;
use crate::shared::Result;
use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Half-open interval `[start, end)` selecting orders for the shipping batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ShippingWindow {
    /// # Errors
    /// Returns `InvalidShippingWindow` unless `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(OrderError::InvalidShippingWindow {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// The 24 hour window closing at the latest `cutoff` at or before `now`.
    ///
    /// Orders placed after today's cutoff go out with tomorrow's batch.
    pub fn daily(now: DateTime<Utc>, cutoff: NaiveTime) -> Self {
        let todays_cutoff = now.date_naive().and_time(cutoff).and_utc();
        let end = if todays_cutoff <= now {
            todays_cutoff
        } else {
            todays_cutoff - Duration::days(1)
        };

        Self {
            start: end - Duration::days(1),
            end,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}
