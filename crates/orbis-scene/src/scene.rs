use glam::{DQuat, DVec3};
use orbis_atmosphere::{AtmosphereCloud, AtmosphereShader, ParticleBuffers};
use orbis_config::{Config, ConfigError, ParameterSet};
use orbis_planet::{PlanetMesh, SphereMesh, SurfaceShader, evaluate_mesh};
use orbis_space::{StarPoint, StarVertex, StarfieldGenerator};

use crate::clock::FrameClock;

/// A planet with its atmosphere and starfield, ready to be drawn.
pub struct Scene {
    params: ParameterSet,
    sphere: SphereMesh,
    surface: SurfaceShader,
    planet: PlanetMesh,
    cloud: AtmosphereCloud,
    atmosphere: AtmosphereShader,
    stars: Vec<StarPoint>,
    lit_from: DVec3,
}

/// Everything that changes from one frame to the next.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// Seconds since the scene started.
    pub elapsed: f64,
    /// Atmosphere rotation about the planet's Y axis, in radians.
    pub atmosphere_rotation: f64,
    /// RGBA for each particle, index-aligned with [`Scene::particles`].
    pub particle_colors: Vec<[f32; 4]>,
    /// Translation applied to the starfield so it stays centered on the camera.
    pub star_offset: DVec3,
}

impl FrameOutput {
    pub fn atmosphere_orientation(&self) -> DQuat {
        DQuat::from_rotation_y(self.atmosphere_rotation)
    }

    /// Mean particle alpha; 0 for an empty cloud.
    pub fn mean_alpha(&self) -> f64 {
        if self.particle_colors.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.particle_colors.iter().map(|c| c[3] as f64).sum();
        sum / self.particle_colors.len() as f64
    }
}

/// What [`Scene::update_params`] had to rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneUpdate {
    pub planet_rebuilt: bool,
    pub particles_regenerated: bool,
}

impl Scene {
    /// Validate the configuration and build every scene element.
    ///
    /// The planet is lit for a camera at `(0, 0, camera_distance)`.
    pub fn build(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = config.params;

        let scene_config = &config.scene;
        let _span = tracing::info_span!("scene_build", seed = scene_config.seed).entered();

        let segments = scene_config.mesh_segments;
        let sphere = SphereMesh::uv_sphere(segments, segments);
        let surface = SurfaceShader::new(params.planet);
        let camera = DVec3::new(0.0, 0.0, scene_config.camera_distance);
        let planet = evaluate_mesh(&surface, &sphere, camera);

        let cloud = AtmosphereCloud::new(&params.atmosphere, scene_config.seed);
        let atmosphere = atmosphere_shader(&params);

        let stars = StarfieldGenerator::new(scene_config.seed, scene_config.star_count).generate();

        let (lowest, highest) = planet.height_range();
        tracing::info!(
            vertices = planet.samples.len(),
            triangles = sphere.triangle_count(),
            lowest,
            highest,
            particles = cloud.buffers().len(),
            stars = stars.len(),
            "scene built"
        );

        Ok(Self {
            params,
            sphere,
            surface,
            planet,
            cloud,
            atmosphere,
            stars,
            lit_from: camera,
        })
    }

    /// Per-frame state for `clock` seen from `camera_position`.
    pub fn frame(&self, clock: &FrameClock, camera_position: DVec3) -> FrameOutput {
        FrameOutput {
            elapsed: clock.elapsed,
            atmosphere_rotation: clock.rotation,
            particle_colors: self
                .atmosphere
                .shade_all(&self.cloud.buffers().positions, clock.elapsed),
            star_offset: StarfieldGenerator::offset_for_camera(camera_position),
        }
    }

    /// Re-shade the planet for a new camera position. Specular highlights
    /// depend on the viewer; geometry does not change.
    pub fn relight(&mut self, camera_position: DVec3) {
        if camera_position == self.lit_from {
            return;
        }
        self.planet = evaluate_mesh(&self.surface, &self.sphere, camera_position);
        self.lit_from = camera_position;
    }

    /// Swap in new parameters, rebuilding only what they affect.
    ///
    /// Invalid parameters leave the scene untouched.
    pub fn update_params(&mut self, params: ParameterSet) -> Result<SceneUpdate, ConfigError> {
        params.validate()?;

        let mut update = SceneUpdate::default();
        if params.planet != self.params.planet {
            self.surface = SurfaceShader::new(params.planet);
            self.planet = evaluate_mesh(&self.surface, &self.sphere, self.lit_from);
            update.planet_rebuilt = true;
            tracing::info!("planet surface rebuilt");
        }

        update.particles_regenerated = self.cloud.sync(&params.atmosphere);
        self.atmosphere = atmosphere_shader(&params);
        self.params = params;

        Ok(update)
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn planet(&self) -> &PlanetMesh {
        &self.planet
    }

    pub fn particles(&self) -> &ParticleBuffers {
        self.cloud.buffers()
    }

    pub fn stars(&self) -> &[StarPoint] {
        &self.stars
    }

    pub fn star_vertices(&self) -> Vec<StarVertex> {
        self.stars.iter().map(StarVertex::from).collect()
    }
}

fn atmosphere_shader(params: &ParameterSet) -> AtmosphereShader {
    AtmosphereShader::new(params.atmosphere, params.planet.lighting.light_direction)
}
