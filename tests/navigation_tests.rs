// tests/navigation_tests.rs
// Integration tests exercising the public navigation API end to end.

use rstest::rstest;
use zephyr_nav::{NavConfig, NavigationController, PathPlanner, Point, Pose, PoseEstimator};

#[test]
fn full_loop_reaches_goal_through_obstacle_field() {
    let mut controller = NavigationController::new(&NavConfig::default()).unwrap();
    let goal = Point::new(10.0, 10.0);
    let obstacles = [
        Point::new(2.0, 2.0),
        Point::new(4.0, 5.0),
        Point::new(7.0, 7.0),
        Point::new(-1.0, 3.0),
    ];
    let path = controller.navigate_to(goal, &obstacles);
    assert!(!path.is_empty());
    assert_eq!(*path.last().unwrap(), goal);
}

#[test]
fn controllers_with_equal_seeds_plan_identical_paths() {
    let config = NavConfig {
        seed: 99,
        ..NavConfig::default()
    };
    let mut a = NavigationController::new(&config).unwrap();
    let mut b = NavigationController::new(&config).unwrap();
    let goal = Point::new(-6.0, 4.0);
    let obstacles = [Point::new(-2.0, 1.0), Point::new(-4.0, 3.0)];
    for _ in 0..3 {
        assert_eq!(
            a.navigate_to(goal, &obstacles),
            b.navigate_to(goal, &obstacles)
        );
    }
}

#[test]
fn pose_evolves_between_navigation_requests() {
    let mut controller = NavigationController::new(&NavConfig::default()).unwrap();
    let goal = Point::new(3.0, 3.0);
    controller.navigate_to(goal, &[]);
    let first = controller.pose();
    controller.navigate_to(goal, &[]);
    let second = controller.pose();
    assert_ne!(first, second);
}

#[rstest]
#[case(0.0, 1.0)]
#[case(-3.0, 1.0)]
#[case(5.0, 0.0)]
#[case(5.0, -0.25)]
fn invalid_configuration_is_rejected_at_construction(
    #[case] detection_range: f64,
    #[case] step_size: f64,
) {
    let config = NavConfig {
        detection_range,
        step_size,
        seed: 0,
    };
    assert!(NavigationController::new(&config).is_err());
}

#[test]
fn seeded_estimators_replay_identical_triples() {
    let mut a = PoseEstimator::new(1234);
    let mut b = PoseEstimator::new(1234);
    for _ in 0..3 {
        let pa = a.update();
        let pb = b.update();
        assert_eq!((pa.x, pa.y, pa.yaw), (pb.x, pb.y, pb.yaw));
    }
}

#[test]
fn planner_handles_start_equal_to_goal() {
    let planner = PathPlanner::new(1.0).unwrap();
    let goal = Point::new(0.0, 0.0);
    let path = planner.plan(&Pose::default(), goal, &[]);
    assert_eq!(path, vec![goal]);
}

#[test]
fn planner_sidesteps_then_still_terminates_at_goal() {
    let planner = PathPlanner::new(1.0).unwrap();
    let goal = Point::new(10.0, 0.0);
    // single obstacle directly on the straight-line route
    let obstacles = [Point::new(1.0, 0.0)];
    let path = planner.plan(&Pose::default(), goal, &obstacles);
    assert_eq!(path[0], Point::new(0.0, 1.0));
    assert_eq!(*path.last().unwrap(), goal);
}
