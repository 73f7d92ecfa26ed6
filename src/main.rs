// src/main.rs
// Demo driver for the Zephyr navigation core: seeds random obstacles and
// runs a few navigation ticks, logging the pose estimate and planned path.

use log::info;
use rand::Rng;
use std::error::Error;
use zephyr_nav::{NavConfig, NavigationController, Point};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Zephyr navigation demo...");

    // Load configuration from a YAML file if one is given, defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => NavConfig::from_yaml_file(&path)?,
        None => NavConfig::default(),
    };
    let mut controller = NavigationController::new(&config)?;

    // Scatter random obstacles around the field
    let mut rng = rand::thread_rng();
    let obstacles: Vec<Point> = (0..10)
        .map(|_| Point::new(rng.gen_range(-5.0..15.0), rng.gen_range(-5.0..15.0)))
        .collect();
    let goal = Point::new(10.0, 10.0);

    // Run a handful of navigation ticks toward the fixed goal
    for step in 1..=5 {
        let path = controller.navigate_to(goal, &obstacles);
        let pose = controller.pose();
        info!("Step {}:", step);
        info!(
            "  pose: x={:.2}, y={:.2}, yaw={:.2}",
            pose.x, pose.y, pose.yaw
        );
        let preview: Vec<String> = path
            .iter()
            .take(3)
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .collect();
        info!(
            "  path: {} waypoints, starting {} ...",
            path.len(),
            preview.join(" ")
        );
    }

    info!("Zephyr demo completed");
    Ok(())
}
