// navigation/mod.rs

// Declares the planning layer: the greedy waypoint planner and the
// controller that sequences estimation, detection, and planning.

/// Controller sequencing a single navigation request.
pub mod controller;
/// Greedy waypoint planner with local avoidance.
pub mod planner;

// Re-export key types for a unified API
pub use controller::NavigationController;
pub use planner::{Path, PathPlanner};

/// 2-D point used for obstacle positions, goals, and waypoints.
pub type Point = nalgebra::Point2<f64>;
