use crate::error::{Error, Result};

/// One color from the fixed particle palette.
///
/// The palette is enumerated and closed; uniform sampling over it is a
/// [`RandomSource`](crate::core::random::RandomSource) capability rather
/// than something this type does itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

impl Color {
    /// Every color a particle can carry, in palette order.
    pub const PALETTE: [Color; 8] = [
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
    ];
}

/// Behavioral category of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Linear drift only.
    Streamer,
    /// Drift plus gravity.
    Ballistic,
    /// Drift plus gravity; breaks into streamers when its lifetime expires.
    Firework,
}

/// One simulated point entity.
///
/// Fields:
/// - `x`, `y`: position
/// - `dx`, `dy`: velocity, applied once per tick
/// - `lifetime`: remaining ticks, decremented each tick
/// - `color`: palette color used when the particle is drawn
/// - `kind`: behavioral category driving the per-tick transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity per tick.
    pub dx: f64,
    /// Vertical velocity per tick.
    pub dy: f64,
    /// Remaining ticks.
    pub lifetime: i32,
    /// Draw color.
    pub color: Color,
    /// Behavioral category.
    pub kind: ParticleKind,
}

impl Particle {
    /// Create a new particle after validating that every coordinate and
    /// velocity component is finite.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if any of `x`, `y`, `dx`, `dy` is NaN or
    ///   infinite. Out-of-bounds but finite values are fine here; bounds
    ///   acceptance belongs to `ParticleSystem::append` alone.
    pub fn new(
        x: f64,
        y: f64,
        dx: f64,
        dy: f64,
        lifetime: i32,
        color: Color,
        kind: ParticleKind,
    ) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidParam("position must be finite".into()));
        }
        if !dx.is_finite() || !dy.is_finite() {
            return Err(Error::InvalidParam("velocity must be finite".into()));
        }
        Ok(Self {
            x,
            y,
            dx,
            dy,
            lifetime,
            color,
            kind,
        })
    }
}

impl Default for Particle {
    /// A motionless white streamer at the origin with zero lifetime.
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            lifetime: 0,
            color: Color::White,
            kind: ParticleKind::Streamer,
        }
    }
}
