use super::Vec3;

/// Integrator settings uploaded to binding slot 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    /// Number of secondary bounces per sample. Zero means primary hits only.
    pub bounces: u32,

    /// Jittered samples averaged per pixel per frame. Zero is encoded as one.
    pub samples_per_frame: u32,

    /// RNG seed mixed into the per-pixel hash.
    pub seed: f32,
}

impl Settings {
    /// Returns a copy whose seed is resolved from `mode`.
    ///
    /// `elapsed_secs` is only consulted in [`SeedMode::Auto`].
    pub fn with_seed_mode(self, mode: SeedMode, elapsed_secs: f32) -> Self {
        Self { seed: mode.resolve(elapsed_secs), ..self }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bounces: 8,
            samples_per_frame: 4,
            seed: 1.112,
        }
    }
}

/// How the producer of a [`super::SceneState`] picks `Settings::seed`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum SeedMode {
    /// Seed follows elapsed wall-clock time so noise changes every frame.
    #[default]
    Auto,
    /// Seed is pinned to a user-chosen value.
    Fixed(f32),
}

impl SeedMode {
    #[inline]
    pub fn resolve(self, elapsed_secs: f32) -> f32 {
        match self {
            SeedMode::Auto => elapsed_secs,
            SeedMode::Fixed(seed) => seed,
        }
    }
}

/// Single point light.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    #[inline]
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_seed_tracks_elapsed_time() {
        let s = Settings::default().with_seed_mode(SeedMode::Auto, 12.5);
        assert_eq!(s.seed, 12.5);
        assert_eq!(s.bounces, 8);
        assert_eq!(s.samples_per_frame, 4);
    }

    #[test]
    fn fixed_seed_ignores_elapsed_time() {
        let s = Settings::default().with_seed_mode(SeedMode::Fixed(3.0), 99.0);
        assert_eq!(s.seed, 3.0);
    }
}
