// Copyright @yucwang 2026

use crate::math::constants::Float;

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

pub trait ProgressDisplay: Sync {
    fn update(&self, fraction: Float);
}

pub struct NullProgress;

impl ProgressDisplay for NullProgress {
    fn update(&self, _fraction: Float) {}
}

pub struct ConsoleProgress {
    bar: ProgressBar,
    total_rows: u64,
}

impl ConsoleProgress {
    pub fn new(total_rows: usize) -> Self {
        let bar = ProgressBar::new(total_rows as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self {
            bar: bar,
            total_rows: total_rows as u64,
        }
    }
}

impl ProgressDisplay for ConsoleProgress {
    fn update(&self, fraction: Float) {
        let pos = (fraction * self.total_rows as Float).round() as u64;
        self.bar.set_position(pos.min(self.total_rows));
        if fraction >= 1.0 {
            self.bar.finish_and_clear();
        }
    }
}

pub struct ProgressTracker<'a> {
    rows_done: Mutex<usize>,
    total_rows: usize,
    display: &'a dyn ProgressDisplay,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(total_rows: usize, display: &'a dyn ProgressDisplay) -> Self {
        debug_assert!(total_rows > 0);
        Self {
            rows_done: Mutex::new(0),
            total_rows: total_rows,
            display: display,
        }
    }

    pub fn report_row_done(&self) {
        // The display call stays under the lock; fractions reach it in order.
        let mut rows_done = self.rows_done.lock().expect("progress lock poisoned");
        *rows_done += 1;
        self.display
            .update(*rows_done as Float / self.total_rows as Float);
    }

    pub fn rows_done(&self) -> usize {
        *self.rows_done.lock().expect("progress lock poisoned")
    }

    pub fn finish(&self) {
        self.display.update(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    struct RecordingDisplay {
        fractions: Arc<Mutex<Vec<Float>>>,
    }

    impl ProgressDisplay for RecordingDisplay {
        fn update(&self, fraction: Float) {
            self.fractions.lock().unwrap().push(fraction);
        }
    }

    #[test]
    fn test_tracker_reports_each_row_and_finish() {
        let fractions = Arc::new(Mutex::new(Vec::new()));
        let display = RecordingDisplay {
            fractions: Arc::clone(&fractions),
        };
        let tracker = ProgressTracker::new(4, &display);
        for _ in 0..4 {
            tracker.report_row_done();
        }
        tracker.finish();

        let seen = fractions.lock().unwrap();
        assert_eq!(*seen, vec![0.25, 0.5, 0.75, 1.0, 1.0]);
        assert_eq!(tracker.rows_done(), 4);
    }

    #[test]
    fn test_tracker_is_monotonic_under_threads() {
        let fractions = Arc::new(Mutex::new(Vec::new()));
        let display = RecordingDisplay {
            fractions: Arc::clone(&fractions),
        };
        let total_rows = 48;
        let tracker = ProgressTracker::new(total_rows, &display);

        thread::scope(|scope| {
            for _ in 0..6 {
                let tracker = &tracker;
                scope.spawn(move || {
                    for _ in 0..8 {
                        tracker.report_row_done();
                    }
                });
            }
        });
        tracker.finish();

        assert_eq!(tracker.rows_done(), total_rows);
        let seen = fractions.lock().unwrap();
        assert_eq!(seen.len(), total_rows + 1);
        for pair in seen.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(*seen.last().unwrap(), 1.0);
    }
}
