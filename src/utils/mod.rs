mod progress;

pub use progress::{count_bar, ProgressExt};
