use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Process-wide request budget for one upstream service.
///
/// Every caller of an adapter shares the same gate, so the fixed-window
/// counter and the backoff deadline hold across concurrent requests. A call
/// refused by the gate never reaches the upstream.
pub struct RateLimitGate {
    name: &'static str,
    /// 0 disables the proactive window; backoff still applies
    max_requests: u32,
    window: Duration,
    default_backoff: Duration,
    state: Mutex<GateState>,
}

struct GateState {
    window_start: Instant,
    used: u32,
    blocked_until: Option<Instant>,
}

impl RateLimitGate {
    pub fn new(
        name: &'static str,
        max_requests: u32,
        window: Duration,
        default_backoff: Duration,
    ) -> Self {
        Self {
            name,
            max_requests,
            window,
            default_backoff,
            state: Mutex::new(GateState {
                window_start: Instant::now(),
                used: 0,
                blocked_until: None,
            }),
        }
    }

    /// Gate without a proactive quota, only reactive backoff.
    pub fn unlimited(name: &'static str, default_backoff: Duration) -> Self {
        Self::new(name, 0, Duration::from_secs(60), default_backoff)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reserve one request. `Err(wait)` tells how long until a slot opens.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        let now = Instant::now();
        let mut state = self.lock();

        if let Some(until) = state.blocked_until {
            if now < until {
                return Err(until - now);
            }
            state.blocked_until = None;
        }

        if self.max_requests == 0 {
            return Ok(());
        }

        if now.duration_since(state.window_start) >= self.window {
            state.window_start = now;
            state.used = 0;
        }

        if state.used >= self.max_requests {
            let reset_at = state.window_start + self.window;
            debug!(
                gate = self.name,
                used = state.used,
                "Request window exhausted"
            );
            return Err(reset_at.saturating_duration_since(now));
        }

        state.used += 1;
        Ok(())
    }

    /// Upstream said "too many requests": refuse calls for the larger of the
    /// configured backoff and the upstream's hint.
    pub fn trip(&self, retry_after: Option<Duration>) {
        let backoff = retry_after
            .map(|hint| hint.max(self.default_backoff))
            .unwrap_or(self.default_backoff);
        let until = Instant::now() + backoff;

        let mut state = self.lock();
        let extended = state.blocked_until.map_or(true, |current| until > current);
        if extended {
            state.blocked_until = Some(until);
        }

        warn!(
            gate = self.name,
            backoff_secs = backoff.as_secs(),
            "Upstream rate limit hit, backing off"
        );
    }

    pub fn is_backing_off(&self) -> bool {
        let state = self.lock();
        state
            .blocked_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Requests left in the current window; `u32::MAX` when unlimited.
    pub fn remaining(&self) -> u32 {
        if self.max_requests == 0 {
            return u32::MAX;
        }
        let state = self.lock();
        if Instant::now().duration_since(state.window_start) >= self.window {
            return self.max_requests;
        }
        self.max_requests.saturating_sub(state.used)
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        state.window_start = Instant::now();
        state.used = 0;
        state.blocked_until = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
