//! Zephyr navigation core
//!
//! This library provides a minimal autonomous-navigation control loop:
//! pose estimation, proximity-based obstacle filtering, greedy waypoint
//! planning with local avoidance, and a controller sequencing the three.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Pose estimation and obstacle perception primitives.
pub mod core;
/// Path planning and the navigation controller.
pub mod navigation;

// Re-export commonly used items for easier access
pub use crate::core::{ObstacleDetector, Pose, PoseEstimator};
pub use navigation::{NavigationController, Path, PathPlanner, Point};

/// Configuration for the navigation loop.
///
/// Distances are in arbitrary units, angles in radians. `detection_range`
/// and `step_size` must be strictly positive; construction of the owning
/// components fails otherwise.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NavConfig {
    /// Maximum distance at which an obstacle counts as nearby (strict).
    pub detection_range: f64,
    /// Per-iteration advance distance of the planner; also its
    /// collision-proximity threshold.
    pub step_size: f64,
    /// Seed for the pose estimator's random walk.
    pub seed: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            detection_range: 5.0,
            step_size: 1.0,
            seed: 0,
        }
    }
}

impl NavConfig {
    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file = std::fs::File::open(path)?;
        let config: NavConfig = serde_yaml::from_reader(file)?;
        Ok(config)
    }
}

/// Navigation error types
#[derive(Debug)]
pub enum NavError {
    /// Invalid configuration value supplied at construction
    Config(String),
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NavError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for NavError {}
