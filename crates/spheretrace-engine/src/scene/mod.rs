//! Scene model.
//!
//! Semantic CPU-side types consumed by the layout encoder:
//! - settings, light, sky color, materials, spheres
//! - `SceneState` aggregates them into one immutable per-frame value
//! - `Dimensions` is the live drawable size, supplied separately each frame
//!
//! Materials are referenced by position in `SceneState::materials`; there are
//! no material handles.

mod color;
mod dimensions;
mod material;
mod settings;
mod sphere;
mod state;
mod vec3;

pub use color::{ColorRgb, ParseColorError};
pub use dimensions::Dimensions;
pub use material::Material;
pub use settings::{Light, SeedMode, Settings};
pub use sphere::Sphere;
pub use state::SceneState;
pub use vec3::Vec3;
