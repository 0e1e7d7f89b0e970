//! Terminal progress for the load, enrich and write phases.
//!
//! Interactive runs get indicatif bars and spinners. With `--log-only` the
//! bars are hidden and the enrich phase reports through `tracing` instead, so
//! unattended runs leave a readable log.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

const BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})";
const SPINNER_TEMPLATE: &str = "{msg} {spinner} [{elapsed_precise}]";

/// Set once from `--log-only` before any phase starts.
pub static LOG_ONLY: AtomicBool = AtomicBool::new(false);

pub fn set_log_only(value: bool) {
    LOG_ONLY.store(value, Ordering::Relaxed);
}

pub fn is_log_only() -> bool {
    LOG_ONLY.load(Ordering::Relaxed)
}

/// Run time for the end-of-run summary: seconds under a minute, then minutes.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}

fn hide_if_log_only(pb: &ProgressBar) -> bool {
    if is_log_only() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
        true
    } else {
        false
    }
}

/// Bar for a phase with a known record count.
pub fn create_progress_bar(len: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if !hide_if_log_only(&pb) {
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("=> "));
        }
    }
    pb.set_message(msg.to_string());
    pb
}

/// Spinner for phases without a count: loading tables, writing outputs.
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if !hide_if_log_only(&pb) {
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
    }
    pb.set_message(msg.to_string());
    pb
}

/// In log-only mode, log `current` when it hits an `interval` multiple or the end.
pub fn log_progress(phase: &str, current: u64, total: u64, interval: u64) {
    if !is_log_only() || total == 0 || interval == 0 {
        return;
    }
    if current % interval == 0 || current == total {
        let pct = 100.0 * current as f64 / total as f64;
        tracing::info!(phase, current, total, "{:.1}%", pct);
    }
}

/// Progress for a phase whose items finish on many rayon workers at once.
///
/// Each finished item gets its own completion index, so every interval
/// multiple is logged exactly once.
pub struct ParallelProgress {
    bar: ProgressBar,
    done: AtomicU64,
    total: u64,
    phase: &'static str,
    interval: u64,
}

impl ParallelProgress {
    pub fn new(phase: &'static str, msg: &str, total: u64, interval: u64) -> Self {
        Self {
            bar: create_progress_bar(total, msg),
            done: AtomicU64::new(0),
            total,
            phase,
            interval,
        }
    }

    /// Record one finished item and return its 1-based completion index.
    pub fn tick(&self) -> u64 {
        let current = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.inc(1);
        log_progress(self.phase, current, self.total, self.interval);
        current
    }

    pub fn finish(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
    }

    #[test]
    fn test_progress_bar_tracks_position() {
        let pb = create_progress_bar(3, "test");
        pb.inc(2);
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(3));
        pb.finish_and_clear();
    }

    #[test]
    fn test_parallel_ticks_are_unique() {
        let progress = ParallelProgress::new("enrich", "test", 2_000, 100);
        let mut seen: Vec<u64> = (0..2_000).into_par_iter().map(|_| progress.tick()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=2_000).collect::<Vec<u64>>());
        assert_eq!(progress.bar.position(), 2_000);
        progress.finish("done".to_string());
    }
}
