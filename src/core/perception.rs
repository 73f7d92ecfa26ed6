// core/perception.rs

// Filters a caller-supplied obstacle set down to those within detection
// range of a pose. Stateless apart from the configured range; obstacle
// sets are read-only per call and never retained.

// Dependencies
use log::debug;
use nalgebra::Point2;

use super::localization::Pose;
use crate::NavError;

/// Proximity filter for obstacle positions.
pub struct ObstacleDetector {
    detection_range: f64,
}

impl ObstacleDetector {
    /// Creates a detector with the given range.
    ///
    /// The range must be strictly positive and finite; anything else is a
    /// configuration error rejected here rather than discovered mid-run.
    pub fn new(detection_range: f64) -> Result<Self, NavError> {
        if !detection_range.is_finite() || detection_range <= 0.0 {
            return Err(NavError::Config(format!(
                "detection_range must be positive, got {}",
                detection_range
            )));
        }
        Ok(ObstacleDetector { detection_range })
    }

    /// Returns the configured detection range.
    pub fn detection_range(&self) -> f64 {
        self.detection_range
    }

    /// Returns the obstacles whose Euclidean distance to the pose is
    /// strictly less than the detection range.
    ///
    /// The filter is stable: survivors keep their relative input order,
    /// and an obstacle exactly on the range boundary is excluded.
    pub fn detect(&self, pose: &Pose, obstacles: &[Point2<f64>]) -> Vec<Point2<f64>> {
        let nearby: Vec<Point2<f64>> = obstacles
            .iter()
            .copied()
            .filter(|ob| f64::hypot(ob.x - pose.x, ob.y - pose.y) < self.detection_range)
            .collect();
        debug!(
            "Detected {} of {} obstacles within range {}",
            nearby.len(),
            obstacles.len(),
            self.detection_range
        );
        nearby
    }
}
