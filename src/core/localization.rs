// core/localization.rs

// Maintains the vehicle's estimated 2-D pose (position + heading). The
// estimator is a placeholder random-walk model standing in for real
// multi-sensor fusion; what matters contractually is determinism under a
// fixed seed and the yaw normalization invariant.

// Dependencies
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// A 2-D position and heading.
///
/// `yaw` is held in `[0, 2π)` radians after construction and after every
/// update; positions are in arbitrary distance units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Heading (radians, normalized to `[0, 2π)`)
    pub yaw: f64,
}

impl Pose {
    /// Creates a pose, normalizing `yaw` into `[0, 2π)`.
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Pose {
            x,
            y,
            yaw: yaw.rem_euclid(TAU),
        }
    }

    /// Returns a new pose offset by `(dx, dy, dyaw)` with the resulting
    /// yaw wrapped back into `[0, 2π)`.
    ///
    /// This is the pure state-transition function behind
    /// [`PoseEstimator::update`]; the estimator only supplies the offsets.
    pub fn perturbed(&self, dx: f64, dy: f64, dyaw: f64) -> Pose {
        Pose::new(self.x + dx, self.y + dy, self.yaw + dyaw)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::new(0.0, 0.0, 0.0)
    }
}

/// Pose estimator producing successive pose estimates from a seeded
/// random walk.
///
/// In a real system this would fuse IMU, GPS, and LiDAR data; here each
/// update draws independent uniform offsets, `dx, dy` on `[-0.5, 0.5]` and
/// `dyaw` on `[-π/10, π/10]`. The generator is owned by the estimator, so
/// two estimators built with the same seed produce identical pose
/// sequences.
pub struct PoseEstimator {
    pose: Pose,
    rng: StdRng,
}

impl PoseEstimator {
    /// Creates an estimator at the zero pose with the given PRNG seed.
    pub fn new(seed: u64) -> Self {
        PoseEstimator {
            pose: Pose::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advances the estimate by one random-walk step and returns the new
    /// pose. Always succeeds.
    pub fn update(&mut self) -> Pose {
        let dx = self.rng.gen_range(-0.5..=0.5);
        let dy = self.rng.gen_range(-0.5..=0.5);
        let dyaw = self.rng.gen_range(-PI / 10.0..=PI / 10.0);
        self.pose = self.pose.perturbed(dx, dy, dyaw);
        trace!(
            "Updated pose: x={:.3}, y={:.3}, yaw={:.3}",
            self.pose.x,
            self.pose.y,
            self.pose.yaw
        );
        self.pose
    }

    /// Returns the current pose estimate.
    pub fn pose(&self) -> Pose {
        self.pose
    }
}
