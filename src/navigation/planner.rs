// navigation/planner.rs

// Plans a waypoint path to a goal using a greedy algorithm: step straight
// toward the goal, sidestepping perpendicular when the next step would
// land within step_size of an obstacle. A more capable planner (A*, RRT)
// would replace this module wholesale; the surrounding loop only relies
// on the contract that the returned path ends exactly at the goal.

// Dependencies
use log::debug;
use nalgebra::Point2;

use crate::core::localization::Pose;
use crate::NavError;

/// A planned route: waypoints in traversal order, ending at the goal.
pub type Path = Vec<Point2<f64>>;

/// Greedy waypoint planner with single-step local avoidance.
pub struct PathPlanner {
    step_size: f64,
}

impl PathPlanner {
    /// Creates a planner with the given step size.
    ///
    /// The step size doubles as the collision-proximity threshold; it must
    /// be strictly positive and finite or construction fails.
    pub fn new(step_size: f64) -> Result<Self, NavError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(NavError::Config(format!(
                "step_size must be positive, got {}",
                step_size
            )));
        }
        Ok(PathPlanner { step_size })
    }

    /// Returns the configured step size.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Generates waypoints from `start` to `goal`, avoiding `obstacles`.
    ///
    /// Walks in `step_size` increments along the straight line to the
    /// goal. When any obstacle lies strictly within `step_size` of the
    /// next position, that position is replaced by a single 90° sidestep
    /// of the step vector. The sidestep is not re-checked against
    /// obstacles and is not guaranteed to make progress, so a pathological
    /// obstacle cluster can keep the loop from terminating; callers
    /// needing a time budget must enforce it externally. The returned
    /// path always ends with the exact `goal` point and is never empty.
    pub fn plan(&self, start: &Pose, goal: Point2<f64>, obstacles: &[Point2<f64>]) -> Path {
        let mut path = Path::new();
        let mut current = Point2::new(start.x, start.y);

        while f64::hypot(goal.x - current.x, goal.y - current.y) > self.step_size {
            let direction = goal - current;
            let length = f64::hypot(direction.x, direction.y);
            if length == 0.0 {
                // current coincides with the goal; avoid dividing by zero
                break;
            }
            let step = direction * (self.step_size / length);
            let mut next = current + step;

            let collision = obstacles
                .iter()
                .any(|ob| f64::hypot(ob.x - next.x, ob.y - next.y) < self.step_size);
            if collision {
                // sidestep perpendicular to the direction vector
                next = Point2::new(current.x - step.y, current.y + step.x);
                debug!(
                    "Sidestepping to ({:.3}, {:.3}) to avoid obstacle",
                    next.x, next.y
                );
            }

            path.push(next);
            current = next;
        }

        path.push(goal);
        path
    }
}
