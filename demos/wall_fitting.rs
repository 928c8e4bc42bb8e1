//! Example: Fitting the dominant wall in a synthetic inverse-depth map
//!
//! Builds a frame showing a slanted wall with a floor strip and some invalid
//! pixels, then runs the plane detector on it.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's diagnostics.

use depth_plane::samplers::UniformRandomSampler;
use depth_plane::{find_plane_with_sampler, CameraIntrinsics, PlaneDetectorSettings};
use rand::Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Wall Fitting Example ===\n");

    let (width, height) = (160usize, 120usize);
    let intrinsics = CameraIntrinsics::new(150.0, 150.0, 80.0, 60.0);

    // Wall: inverse depth affine in the column index (a plane in 3D).
    // Floor: the bottom 20 rows, closer and varying with the row instead.
    // Holes: ~5% of pixels without a depth estimate.
    let mut rng = rand::thread_rng();
    let mut depth = vec![0.0_f32; width * height];
    for v in 0..height {
        for u in 0..width {
            let value = if v >= height - 20 {
                0.6 + 0.02 * (v - (height - 20)) as f32
            } else {
                0.25 + 0.001 * u as f32 + rng.gen_range(-0.0005..0.0005)
            };
            depth[v * width + u] = if rng.gen_bool(0.05) { 0.0 } else { value };
        }
    }

    let settings = PlaneDetectorSettings::from_json_str(
        r#"{
            "point_cloud": { "vertical_axis": "up" },
            "ransac": { "distance_threshold": 0.02, "min_inliers": 2000, "max_iterations": 200 }
        }"#,
    )?;
    println!("Settings: {:#?}\n", settings);

    let mut sampler = UniformRandomSampler::from_seed(42);
    let result =
        find_plane_with_sampler(&depth, width, height, &intrinsics, &settings, &mut sampler)?;

    println!("Point cloud: {} points", result.point_count);
    println!(
        "Iterations: {} ({} skipped as degenerate)",
        result.iterations, result.skipped_iterations
    );

    match result.plane {
        Some(wall) => {
            let p = wall.plane;
            println!(
                "\nPlane: {:.4}x + {:.4}y + {:.4}z + {:.4} = 0",
                p.a, p.b, p.c, p.d
            );
            println!(
                "  Inliers: {} ({:.1}% of cloud)",
                wall.inlier_count,
                100.0 * wall.inlier_count as f64 / result.point_count as f64
            );
            let kind = if p.b.abs() < 0.3 { "vertical (wall)" } else { "not vertical" };
            println!("  Orientation: {}", kind);
        }
        None => println!("\nNo plane found: {:?}", result.empty_reason),
    }

    Ok(())
}
