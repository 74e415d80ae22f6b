//! Planet surface configuration.

use orbis_lighting::LightingParams;
use orbis_terrain::TerrainParams;
use serde::{Deserialize, Serialize};

use crate::ColorLayers;

/// Finite-difference bump mapping controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BumpParams {
    /// Blend between the geometric normal (0) and the bump normal (1).
    pub strength: f64,
    /// Step along the tangent and bitangent used for the neighbor samples.
    pub offset: f64,
}

impl Default for BumpParams {
    fn default() -> Self {
        Self {
            strength: 1.0,
            offset: 0.001,
        }
    }
}

/// Everything needed to displace and shade the planet surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetParams {
    /// Base radius of the undisplaced sphere.
    pub radius: f64,
    pub terrain: TerrainParams,
    pub colors: ColorLayers,
    pub lighting: LightingParams,
    pub bump: BumpParams,
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self {
            radius: 20.0,
            terrain: TerrainParams::default(),
            colors: ColorLayers::default(),
            lighting: LightingParams::default(),
            bump: BumpParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let params: PlanetParams =
            ron::from_str("(radius: 5.0, bump: (strength: 0.25))").unwrap();
        assert_eq!(params.radius, 5.0);
        assert_eq!(params.bump.strength, 0.25);
        assert_eq!(params.bump.offset, BumpParams::default().offset);
        assert_eq!(params.terrain, TerrainParams::default());
    }
}
