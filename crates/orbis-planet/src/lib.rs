//! Planet surface: terrain displacement, bump-mapped normals, layered coloring,
//! and per-vertex evaluation of a sphere mesh.

mod mesh;
mod palette;
mod params;
mod surface;

pub use mesh::{PlanetMesh, PlanetVertex, SphereMesh, evaluate_mesh};
pub use palette::ColorLayers;
pub use params::{BumpParams, PlanetParams};
pub use surface::{SurfaceSample, SurfaceShader, bitangent, specular_falloff};
