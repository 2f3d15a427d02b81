use std::time::Duration;

use tokio::time::Instant;

/// Countdown behind a toast. Hovering pauses it; leaving resumes it.
#[derive(Debug, Clone)]
pub struct ToastTimer {
    duration: Duration,
    consumed: Duration,
    running_since: Option<Instant>,
}

impl ToastTimer {
    pub fn start(duration: Duration) -> Self {
        ToastTimer {
            duration,
            consumed: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.consumed += since.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    pub fn remaining(&self) -> Duration {
        let running = self
            .running_since
            .map(|since| since.elapsed())
            .unwrap_or_default();
        self.duration.saturating_sub(self.consumed + running)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}
