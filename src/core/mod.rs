// core/mod.rs

// Declares and exposes the estimation and perception submodules, keeping
// the geometric primitives (pose, obstacle filtering) separate from the
// planning layer in navigation/.

/// Pose value type and the random-walk pose estimator.
pub mod localization;
/// Proximity-based obstacle filtering.
pub mod perception;

// Re-export key types for a unified API
pub use localization::{Pose, PoseEstimator};
pub use perception::ObstacleDetector;
