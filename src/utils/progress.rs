use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";
const COUNT_TEMPLATE: &str = "{spinner} {msg:20} {wide_bar} {pos:>4}/{len}";

/// Standalone per-item progress bar for single-phase batches.
pub fn count_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(count_style());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub trait ProgressExt {
    fn add_count_bar(&self, len: u64) -> ProgressBar;
    fn add_message_bar(&self) -> ProgressBar;
}

impl ProgressExt for MultiProgress {
    fn add_count_bar(&self, len: u64) -> ProgressBar {
        let pb = self.add(ProgressBar::new(len));
        pb.set_style(count_style());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    fn add_message_bar(&self) -> ProgressBar {
        let pb = self.add(ProgressBar::no_length());
        pb.set_style(ProgressStyle::with_template(MESSAGE_TEMPLATE).unwrap());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

fn count_style() -> ProgressStyle {
    ProgressStyle::with_template(COUNT_TEMPLATE)
        .unwrap()
        .progress_chars("#>-")
}
