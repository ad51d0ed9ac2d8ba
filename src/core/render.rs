use crate::core::particle::Color;

/// Sink for the draw calls produced by `ParticleSystem::render`.
///
/// Receives one call per live particle per render pass, in sequence order.
/// There is no return value and no failure channel.
pub trait Renderer {
    /// Draw one particle at `(x, y)` in `color`.
    fn draw(&mut self, x: f64, y: f64, color: Color);
}
