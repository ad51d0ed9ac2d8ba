//! sparksim: a particle effects simulation core.
//!
//! The crate centers on [`ParticleSystem`], an ordered collection of
//! [`Particle`] records over a bounded scene. Clients append particles,
//! call [`ParticleSystem::advance`] once per simulated tick to run the
//! physics (drift, gravity, lifetime decay, firework explosions), and call
//! [`ParticleSystem::render`] to emit one draw call per live particle in
//! insertion order.
//!
//! Randomness and drawing are injected capabilities ([`RandomSource`],
//! [`Renderer`]), so the engine itself is deterministic given a scripted
//! source and has no I/O of its own.
//!
//! ```
//! use sparksim::{Color, Particle, ParticleKind, ParticleSystem, SeededRandom};
//!
//! let mut system = ParticleSystem::default();
//! let mut random = SeededRandom::new(Some(7));
//! let rocket = Particle {
//!     x: 400.0,
//!     y: 500.0,
//!     dx: 0.0,
//!     dy: -9.0,
//!     lifetime: 8,
//!     color: Color::Red,
//!     kind: ParticleKind::Firework,
//! };
//! system.append(rocket);
//! for _ in 0..9 {
//!     system.advance(&mut random);
//! }
//! // The rocket has burst into its debris by now.
//! assert!(system.len() > 1);
//! ```

pub mod core;
pub mod error;

pub use crate::core::{
    Color, Particle, ParticleKind, ParticleSystem, RandomSource, Renderer, SeededRandom,
};
pub use crate::core::system::{SCENE_HEIGHT, SCENE_WIDTH};
pub use crate::error::{Error, Result};
