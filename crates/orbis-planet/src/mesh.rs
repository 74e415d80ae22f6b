//! Sphere mesh generation and per-vertex surface evaluation.
//!
//! [`SphereMesh`] is the undisplaced unit UV sphere the renderer draws.
//! [`evaluate_mesh`] runs the [`SurfaceShader`] on every vertex in parallel and
//! packs the results into [`PlanetVertex`] buffers ready for upload.

use std::f64::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};
use noise::NoiseFn;
use rayon::prelude::*;

use crate::surface::{SurfaceSample, SurfaceShader, bitangent};

/// Unit UV sphere with per-vertex normals, UVs and tangents.
#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub positions: Vec<DVec3>,
    pub normals: Vec<DVec3>,
    pub uvs: Vec<DVec2>,
    /// Unit tangents pointing along increasing longitude (`u`).
    pub tangents: Vec<DVec3>,
    /// Triangle list, counter-clockwise when viewed from outside.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Largest segment count per axis; keeps every index within `u32`.
    pub const MAX_SEGMENTS: u32 = 4096;

    /// Build a unit sphere with `width_segments` around the equator and
    /// `height_segments` from pole to pole.
    ///
    /// Segment counts are clamped to what still closes a sphere (3 around,
    /// 2 pole to pole) and to [`Self::MAX_SEGMENTS`].
    pub fn uv_sphere(width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.clamp(3, Self::MAX_SEGMENTS);
        let height_segments = height_segments.clamp(2, Self::MAX_SEGMENTS);
        let row_len = width_segments + 1;
        let vertex_count = row_len as usize * (height_segments as usize + 1);

        let mut mesh = SphereMesh {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            tangents: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(width_segments as usize * height_segments as usize * 6),
        };

        for iy in 0..=height_segments {
            let v = iy as f64 / height_segments as f64;
            let theta = v * PI;
            for ix in 0..=width_segments {
                let u = ix as f64 / width_segments as f64;
                let phi = u * TAU;

                let position = DVec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                mesh.positions.push(position);
                mesh.normals.push(position.normalize_or_zero());
                mesh.uvs.push(DVec2::new(u, 1.0 - v));
                // d(position)/d(phi) with the sin(theta) factor dropped, so the
                // tangent stays defined at the poles.
                mesh.tangents.push(DVec3::new(phi.sin(), 0.0, phi.cos()));
            }
        }

        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = iy * row_len + ix + 1;
                let b = iy * row_len + ix;
                let c = (iy + 1) * row_len + ix;
                let d = (iy + 1) * row_len + ix + 1;

                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != height_segments - 1 {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Packed vertex for GPU upload: 40 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PlanetVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl From<&SurfaceSample> for PlanetVertex {
    fn from(s: &SurfaceSample) -> Self {
        Self {
            position: s.position.as_vec3().to_array(),
            normal: s.normal.as_vec3().to_array(),
            color: s.color.map(|c| c as f32),
        }
    }
}

/// A displaced and shaded planet mesh.
#[derive(Clone, Debug, Default)]
pub struct PlanetMesh {
    pub samples: Vec<SurfaceSample>,
    pub indices: Vec<u32>,
}

impl PlanetMesh {
    /// Packed vertex buffer in mesh order.
    pub fn vertices(&self) -> Vec<PlanetVertex> {
        self.samples.iter().map(PlanetVertex::from).collect()
    }

    /// Lowest and highest terrain elevation on the mesh.
    pub fn height_range(&self) -> (f64, f64) {
        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.height), hi.max(s.height))
            })
    }
}

/// Shade every vertex of `sphere` in parallel.
pub fn evaluate_mesh<N>(
    shader: &SurfaceShader<N>,
    sphere: &SphereMesh,
    camera_position: DVec3,
) -> PlanetMesh
where
    N: NoiseFn<f64, 3> + Sync,
{
    let samples: Vec<SurfaceSample> = (0..sphere.vertex_count())
        .into_par_iter()
        .map(|i| {
            let direction = sphere.positions[i];
            let tangent = sphere.tangents[i];
            let bitangent = bitangent(sphere.normals[i], tangent);
            shader.shade(direction, tangent, bitangent, camera_position)
        })
        .collect();

    tracing::debug!(
        vertices = samples.len(),
        triangles = sphere.triangle_count(),
        "evaluated planet mesh"
    );

    PlanetMesh {
        samples,
        indices: sphere.indices.clone(),
    }
}
