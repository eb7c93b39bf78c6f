//! Gesture timing instrumentation.
//!
//! Drag moves run once per pointer event, so they have to stay well under a
//! frame. The macros here time those hot paths when the `profiling` feature
//! is enabled and compile to nothing otherwise. Timings land in per-scope
//! `StepStats`, readable with `step_stats`.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! regionkit = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use regionkit::profile_scope;
//!
//! fn drag_move() {
//!     profile_scope!("drag_move");
//!     // ...
//! }
//! ```

use crate::constants::GESTURE_STEP_BUDGET_MS;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;

/// Number of samples kept per step statistic
const STATS_SAMPLE_COUNT: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Timings recorded by `ScopedTimer`s, keyed by scope name
static STEP_STATS: Lazy<Mutex<HashMap<&'static str, StepStats>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Time a scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Time the current function.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!($crate::function_name!());
    };
}

#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Strip the trailing "::f"
        &name[..name.len() - 3]
    }};
}

pub use function_name;
pub use profile_function;
pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Step Statistics
// ============================================================================

/// Rolling timing statistics for one kind of gesture step.
#[derive(Debug, Clone)]
pub struct StepStats {
    samples: VecDeque<f64>,
    count: u64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for StepStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(STATS_SAMPLE_COUNT),
            count: 0,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl StepStats {
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= STATS_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn max(&self) -> f64 {
        self.max_ms
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of retained samples over the per-step budget.
    pub fn over_budget(&self) -> usize {
        self.samples
            .iter()
            .filter(|ms| **ms > GESTURE_STEP_BUDGET_MS)
            .count()
    }
}

/// Add one timing sample for `name`.
pub fn record_step(name: &'static str, ms: f64) {
    STEP_STATS.lock().entry(name).or_default().record(ms);
}

/// Snapshot of the statistics recorded for `name`, e.g. `"anchor_drag_move"`.
pub fn step_stats(name: &str) -> Option<StepStats> {
    STEP_STATS.lock().get(name).cloned()
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Records its lifetime on drop while profiling is enabled, and warns when it
/// exceeds the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer using the per-step gesture budget.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, GESTURE_STEP_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if is_profiling_enabled() {
            record_step(self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
