//! Background space rendering data: the static starfield around the planet.

pub mod starfield;

pub use starfield::{
    STAR_OPACITY, STARFIELD_RADIUS, StarPoint, StarVertex, StarfieldGenerator, star_palette,
};
