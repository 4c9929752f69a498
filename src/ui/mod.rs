//! Console output

mod progress;

pub use progress::ProgressLog;
