//! Sliding window rate limiting.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use dexscreener_api_client::rate_limit::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(Duration::from_secs(60), 2);
//!
//! assert!(window.try_acquire().is_ok());
//! assert!(window.try_acquire().is_ok());
//! assert!(window.try_acquire().is_err());
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A sliding window rate limiter.
///
/// Tracks request timestamps within a sliding window and enforces a maximum
/// number of requests within that window.
#[derive(Debug)]
pub struct SlidingWindow {
    /// Request timestamps, oldest first
    requests: VecDeque<Instant>,
    /// Window duration
    window: Duration,
    /// Maximum requests per window
    max_requests: u32,
}

impl SlidingWindow {
    /// Create a new sliding window rate limiter.
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            requests: VecDeque::with_capacity(max_requests as usize),
            window,
            max_requests,
        }
    }

    /// Try to acquire a permit.
    ///
    /// Returns `Ok(())` if allowed, `Err(wait_time)` if rate limited.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        self.cleanup_old();

        if (self.requests.len() as u32) < self.max_requests {
            self.requests.push_back(Instant::now());
            Ok(())
        } else {
            // The oldest request frees the next permit.
            let wait_time = self
                .requests
                .front()
                .map(|oldest| self.window.saturating_sub(oldest.elapsed()))
                .unwrap_or(self.window);
            Err(wait_time)
        }
    }

    /// Get the number of remaining permits.
    pub fn remaining(&self) -> u32 {
        let count = self
            .requests
            .iter()
            .filter(|ts| ts.elapsed() < self.window)
            .count() as u32;
        self.max_requests.saturating_sub(count)
    }

    /// Window duration.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Maximum requests per window.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    fn cleanup_old(&mut self) {
        while self
            .requests
            .front()
            .is_some_and(|ts| ts.elapsed() >= self.window)
        {
            self.requests.pop_front();
        }
    }
}
