//! Scene assembly for Orbis: the planet mesh, its particle atmosphere and the
//! starfield, advanced by an explicit frame tick.
//!
//! The free functions in [`evaluate`] are the stateless entry points a renderer
//! calls per vertex or per particle. [`Scene`] caches everything that only
//! changes with the parameters.

pub mod clock;
pub mod evaluate;
mod scene;

pub use clock::{ATMOSPHERE_ROTATION_PER_TICK, FrameClock};
pub use evaluate::{evaluate_vertex, generate_particles, shade_particle};
pub use scene::{FrameOutput, Scene, SceneUpdate};
