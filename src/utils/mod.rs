//! Utility helpers including math extensions and logging.

pub mod logging;
pub mod math;

pub use logging::{ScopedTimer, warn_if_frame_budget_exceeded};
pub use math::*;
