//! Wall-clock profiling for benchmark runs
//!
//! A [`Profiler`] is an ordinary value owned by the caller; there is no shared
//! process state. [`Profiler::scope`] returns a guard that stops the profiler
//! when dropped, so early returns and `?` still record the elapsed time.
//!
//! ```rust
//! use streetgraph::profile::Profiler;
//!
//! let mut profiler = Profiler::new();
//! {
//!     let _scope = profiler.scope().unwrap();
//!     // work being measured
//! }
//! println!("{}", profiler.statistics("Loaded network"));
//! ```

use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilerError {
    #[error("the profiler is already running")]
    AlreadyRunning,

    #[error("the profiler was not running")]
    NotRunning,
}

#[derive(Debug, Clone, Default)]
pub struct Profiler {
    started: Option<Instant>,
    net: Duration,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn start(&mut self) -> Result<(), ProfilerError> {
        if self.started.is_some() {
            return Err(ProfilerError::AlreadyRunning);
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Stop and record the time since `start`
    pub fn stop(&mut self) -> Result<Duration, ProfilerError> {
        let started = self.started.take().ok_or(ProfilerError::NotRunning)?;
        self.net = started.elapsed();
        Ok(self.net)
    }

    /// Zero the recorded time; a running profiler restarts its clock
    pub fn reset(&mut self) {
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
        self.net = Duration::ZERO;
    }

    /// Time recorded by the last `stop`
    pub fn net_time(&self) -> Duration {
        self.net
    }

    /// Start the profiler and stop it when the returned guard drops
    pub fn scope(&mut self) -> Result<ProfileScope<'_>, ProfilerError> {
        self.start()?;
        Ok(ProfileScope { profiler: self })
    }

    pub fn statistics(&self, description: &str) -> String {
        format!("{} in {} ms.", description, self.net.as_millis())
    }
}

/// Guard returned by [`Profiler::scope`]
#[derive(Debug)]
pub struct ProfileScope<'a> {
    profiler: &'a mut Profiler,
}

impl Drop for ProfileScope<'_> {
    fn drop(&mut self) {
        let _ = self.profiler.stop();
    }
}
