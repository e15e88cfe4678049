use chrono::{DateTime, Duration, Utc};

const DEFAULT_REFRESH_SECS: u64 = 600;
const MAX_REFRESH_SECS: u64 = 86_400;
/// Floors so very short refresh intervals do not flap the badge.
const MIN_DEGRADED_MINUTES: i64 = 10;
const MIN_DOWN_MINUTES: i64 = 30;
/// Missed refresh cycles before the data counts as degraded, then down.
const DEGRADED_AFTER_CYCLES: i32 = 2;
const DOWN_AFTER_CYCLES: i32 = 5;
const DOWN_AFTER_FAILURES: u32 = 3;

/// Coarse state of the forecast API as seen by this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHealth {
    Healthy,
    Degraded,
    Down,
}

impl ApiHealth {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "API ok",
            Self::Degraded => "API degraded",
            Self::Down => "API down",
        }
    }
}

/// How old the last good forecast may get, measured in refresh cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthPolicy {
    pub degraded_after: Duration,
    pub down_after: Duration,
    pub down_after_failures: u32,
}

impl Default for HealthPolicy {
    fn default() -> Self {
        Self::for_refresh_interval(DEFAULT_REFRESH_SECS)
    }
}

impl HealthPolicy {
    #[must_use]
    pub fn for_refresh_interval(refresh_secs: u64) -> Self {
        let secs = i64::try_from(refresh_secs.min(MAX_REFRESH_SECS)).unwrap_or(0);
        let interval = Duration::seconds(secs);
        Self {
            degraded_after: (interval * DEGRADED_AFTER_CYCLES)
                .max(Duration::minutes(MIN_DEGRADED_MINUTES)),
            down_after: (interval * DOWN_AFTER_CYCLES).max(Duration::minutes(MIN_DOWN_MINUTES)),
            down_after_failures: DOWN_AFTER_FAILURES,
        }
    }

    /// `since_success` is `None` until the first forecast arrives.
    #[must_use]
    pub fn assess(&self, since_success: Option<Duration>, failures: u32) -> ApiHealth {
        if failures >= self.down_after_failures {
            return ApiHealth::Down;
        }
        match since_success {
            None => ApiHealth::Degraded,
            Some(age) if age > self.down_after => ApiHealth::Down,
            Some(age) if age > self.degraded_after || failures > 0 => ApiHealth::Degraded,
            Some(_) => ApiHealth::Healthy,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub health: ApiHealth,
    pub consecutive_failures: u32,
    pub policy: HealthPolicy,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self::new(HealthPolicy::default())
    }
}

impl RefreshMetadata {
    #[must_use]
    pub fn new(policy: HealthPolicy) -> Self {
        Self {
            last_success: None,
            last_attempt: None,
            health: ApiHealth::Degraded,
            consecutive_failures: 0,
            policy,
        }
    }

    pub fn mark_success(&mut self, now: DateTime<Utc>) {
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.health = ApiHealth::Healthy;
    }

    pub fn mark_failure(&mut self, now: DateTime<Utc>) {
        self.last_attempt = Some(now);
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.refresh(now);
    }

    /// Re-grades health as the last success ages.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        let since_success = self.last_success.map(|at| now - at);
        self.health = self.policy.assess(since_success, self.consecutive_failures);
    }

    #[must_use]
    pub fn age_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_success.map(|ts| (now - ts).num_minutes())
    }
}
