mod machine;
mod pointer;
#[cfg(test)]
mod tests;

pub use machine::{DEFAULT_TOUCH_TOLERANCE, StrokeInput, StrokeOutcome, StrokeState};
