//! Small shared utilities.

/// Diagnostics sinks (log output, window title).
pub mod diag;
/// Frame timing with FPS smoothing.
pub mod frame_timing;

pub use diag::{Diagnostics, LogDiagnostics, TitleDiagnostics};
pub use frame_timing::FrameTiming;
