use spheretrace_engine::scene::{Sphere, Vec3};

/// Sphere layout for the demo loop at `time_ms` since start.
///
/// Three spheres, one per reference material, drifting on sinusoids.
pub fn frame_spheres(time_ms: f32) -> Vec<Sphere> {
    vec![
        Sphere::new(
            Vec3::new(-4.5, 0.5, -5.5),
            0.75 + 0.25 * (time_ms * 0.0009).sin(),
            0,
        ),
        Sphere::new(Vec3::new(2.2, (time_ms * 0.001).sin(), -4.0), 0.75, 1),
        Sphere::new(
            Vec3::new(
                0.3 + 3.0 * (time_ms * 0.000_25).sin(),
                (time_ms * 0.0011).sin(),
                -9.0,
            ),
            1.0,
            2,
        ),
    ]
}
