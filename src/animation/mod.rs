pub mod counter;
pub mod easing;

// Re-export commonly used types for convenience
pub use counter::CounterRun;
pub use easing::{EasingOption, RATE};
