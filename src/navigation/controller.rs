// navigation/controller.rs

// Sequences one navigation request: update the pose estimate, filter the
// obstacle set down to nearby ones, plan a path to the goal. Pure
// orchestration; all geometry lives in the owned components.

// Dependencies
use log::info;
use nalgebra::Point2;

use crate::core::{ObstacleDetector, Pose, PoseEstimator};
use crate::navigation::planner::{Path, PathPlanner};
use crate::{NavConfig, NavError};

/// High-level controller coordinating pose estimation, obstacle
/// detection, and path planning.
///
/// Each [`navigate_to`](NavigationController::navigate_to) call is
/// independent except for the evolving pose held by the estimator.
pub struct NavigationController {
    estimator: PoseEstimator,
    detector: ObstacleDetector,
    planner: PathPlanner,
}

impl NavigationController {
    /// Creates a controller from the given configuration.
    ///
    /// Fails if `detection_range` or `step_size` is not strictly positive.
    pub fn new(config: &NavConfig) -> Result<Self, NavError> {
        Ok(NavigationController {
            estimator: PoseEstimator::new(config.seed),
            detector: ObstacleDetector::new(config.detection_range)?,
            planner: PathPlanner::new(config.step_size)?,
        })
    }

    /// Plans a path to `goal` from the freshly updated pose estimate,
    /// considering only obstacles within detection range.
    pub fn navigate_to(&mut self, goal: Point2<f64>, obstacles: &[Point2<f64>]) -> Path {
        let pose = self.estimator.update();
        let nearby = self.detector.detect(&pose, obstacles);
        let path = self.planner.plan(&pose, goal, &nearby);
        info!(
            "Planned {} waypoints to ({:.2}, {:.2}) around {} nearby obstacles",
            path.len(),
            goal.x,
            goal.y,
            nearby.len()
        );
        path
    }

    /// Returns the current pose estimate without advancing it.
    pub fn pose(&self) -> Pose {
        self.estimator.pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_detection_range() {
        let config = NavConfig {
            detection_range: 0.0,
            ..NavConfig::default()
        };
        assert!(NavigationController::new(&config).is_err());
    }

    #[test]
    fn rejects_non_positive_step_size() {
        let config = NavConfig {
            step_size: -1.0,
            ..NavConfig::default()
        };
        assert!(NavigationController::new(&config).is_err());
    }

    #[test]
    fn navigate_to_always_reaches_the_goal_point() {
        let mut controller = NavigationController::new(&NavConfig::default()).unwrap();
        let goal = Point2::new(10.0, 10.0);
        for _ in 0..5 {
            let path = controller.navigate_to(goal, &[]);
            assert_eq!(*path.last().unwrap(), goal);
        }
    }
}
