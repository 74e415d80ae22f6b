//! Caller-owned animation state.

/// Radians the atmosphere turns about the planet's Y axis on every tick.
pub const ATMOSPHERE_ROTATION_PER_TICK: f64 = 0.0002;

/// Animation clock passed by value into [`crate::Scene::frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    /// Seconds since the scene started.
    pub elapsed: f64,
    /// Accumulated atmosphere rotation in radians.
    pub rotation: f64,
    /// Number of ticks so far.
    pub frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clock one tick of `dt` seconds later.
    ///
    /// Rotation advances per tick, not per second, so it is independent of
    /// `dt`.
    #[must_use]
    pub fn advance(self, dt: f64) -> Self {
        Self {
            elapsed: self.elapsed + dt,
            rotation: self.rotation + ATMOSPHERE_ROTATION_PER_TICK,
            frame: self.frame + 1,
        }
    }
}
