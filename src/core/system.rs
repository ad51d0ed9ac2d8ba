use crate::core::particle::{Particle, ParticleKind};
use crate::core::random::RandomSource;
use crate::core::render::Renderer;
use crate::error::{Error, Result};
use log::{debug, trace};

/// Default scene width for `ParticleSystem::default`.
pub const SCENE_WIDTH: f64 = 800.0;
/// Default scene height for `ParticleSystem::default`.
pub const SCENE_HEIGHT: f64 = 600.0;

/// Number of streamers a firework breaks into.
const DEBRIS_COUNT: usize = 50;
/// Inclusive range for each debris velocity component.
const DEBRIS_VELOCITY: (i32, i32) = (-3, 3);
/// Inclusive range for debris lifetimes.
const DEBRIS_LIFETIME: (i32, i32) = (2, 10);

/// A doubly-linked node in the slot arena.
#[derive(Debug, Clone, Copy)]
struct Node {
    particle: Particle,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One arena slot: a live node, or a link in the free list.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Occupied(Node),
    Free { next_free: Option<usize> },
}

/// Ordered collection of particles with per-tick transition logic.
///
/// Storage is a slot arena holding a doubly-linked sequence: `append` links
/// at the tail in O(1), unlinking re-wires the neighbors in O(1) given the
/// slot index, and the size counter is maintained incrementally rather than
/// recomputed. Slots freed by removal are recycled through an explicit free
/// list. Slot indices never leave this module, so no handle to a removed
/// node can survive outside it.
///
/// Particles live inside the half-open scene rectangle
/// `[0, width) x [0, height)`: appends outside it are silently dropped and
/// a particle that leaves it is removed on the tick that moved it out.
#[derive(Debug)]
pub struct ParticleSystem {
    slots: Vec<Slot>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
    width: f64,
    height: f64,
}

impl ParticleSystem {
    /// Create an empty system over a `width` by `height` scene.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if either dimension is non-finite or not
    ///   strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidParam(
                "scene width must be finite and > 0".into(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidParam(
                "scene height must be finite and > 0".into(),
            ));
        }
        Ok(Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
            width,
            height,
        })
    }

    /// Number of live particles. O(1), no side effects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no particles are live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Scene width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Scene height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Append a particle at the tail of the sequence.
    ///
    /// A particle with `lifetime < 0` or a position outside the scene is
    /// silently dropped with no state change; that is the defined behavior
    /// of this path, not an error.
    pub fn append(&mut self, particle: Particle) {
        if particle.lifetime < 0 || !self.in_bounds(particle.x, particle.y) {
            trace!(
                "append rejected: pos=({}, {}) lifetime={}",
                particle.x,
                particle.y,
                particle.lifetime
            );
            return;
        }
        let idx = self.alloc(Node {
            particle,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.node_mut(t).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Draw every live particle, head to tail, in sequence order.
    ///
    /// Pure side effect on the renderer; particles are not mutated.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let mut cur = self.head;
        while let Some(idx) = cur {
            let node = self.node(idx);
            renderer.draw(node.particle.x, node.particle.y, node.particle.color);
            cur = node.next;
        }
    }

    /// Iterate over live particles in sequence order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            system: self,
            cur: self.head,
        }
    }

    /// Apply one simulation tick to every particle present at entry.
    ///
    /// Each such particle is visited exactly once, in sequence order, even
    /// when earlier particles are removed mid-pass. Particles appended
    /// during the pass (firework debris) are not visited; they become
    /// eligible on the next call.
    ///
    /// Per kind: streamers drift by their velocity; ballistics and fireworks
    /// drift and then gain `dy += 1` of gravity. Every particle loses one
    /// tick of lifetime. A firework whose lifetime has dropped below zero
    /// explodes into 50 streamers and is removed unconditionally; any other
    /// particle is removed when its lifetime has dropped below zero or its
    /// position left the scene.
    pub fn advance(&mut self, random: &mut dyn RandomSource) {
        // Debris appended during this pass lands past `last`, possibly in a
        // recycled slot, and must stay unvisited until the next call.
        let last = self.tail;
        let mut cur = self.head;
        while let Some(idx) = cur {
            let at_last = Some(idx) == last;
            // Capture the successor before this node can be unlinked.
            let next = self.node(idx).next;

            {
                let p = &mut self.node_mut(idx).particle;
                p.x += p.dx;
                p.y += p.dy;
                match p.kind {
                    ParticleKind::Streamer => {}
                    ParticleKind::Ballistic | ParticleKind::Firework => p.dy += 1.0,
                }
                p.lifetime -= 1;
            }

            let p = self.node(idx).particle;
            if p.kind == ParticleKind::Firework && p.lifetime < 0 {
                // Explosion removal takes precedence; the generic predicate
                // is not re-checked on this node.
                self.explode(&p, random);
                self.unlink(idx);
            } else if p.lifetime < 0 || !self.in_bounds(p.x, p.y) {
                self.unlink(idx);
            }

            if at_last {
                break;
            }
            cur = next;
        }
    }

    /// Remove every particle.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    // ============ Internal helpers ============

    /// Half-open containment test against the scene rectangle.
    fn in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width && y >= 0.0 && y < self.height
    }

    /// Spawn the debris of an exploding firework at its pre-removal
    /// position: one shared random color, velocity components uniform in
    /// `DEBRIS_VELOCITY`, lifetimes uniform in `DEBRIS_LIFETIME`. Each piece
    /// goes through the normal accept-checked `append`, so a firework
    /// exploding at the scene edge may shed some debris out of bounds.
    fn explode(&mut self, source: &Particle, random: &mut dyn RandomSource) {
        let color = random.random_color();
        debug!(
            "firework exploding at ({}, {}) into {} streamers",
            source.x, source.y, DEBRIS_COUNT
        );
        for _ in 0..DEBRIS_COUNT {
            let particle = Particle {
                x: source.x,
                y: source.y,
                dx: f64::from(random.uniform_int(DEBRIS_VELOCITY.0, DEBRIS_VELOCITY.1)),
                dy: f64::from(random.uniform_int(DEBRIS_VELOCITY.0, DEBRIS_VELOCITY.1)),
                lifetime: random.uniform_int(DEBRIS_LIFETIME.0, DEBRIS_LIFETIME.1),
                color,
                kind: ParticleKind::Streamer,
            };
            self.append(particle);
        }
    }

    /// Unlink the node at `idx`, re-wiring head/tail/neighbors in O(1), and
    /// push the slot onto the free list.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.slots[idx] = Slot::Free {
            next_free: self.free_head,
        };
        self.free_head = Some(idx);
        self.len -= 1;
    }

    /// Place a node in a recycled slot if one is free, else grow the arena.
    fn alloc(&mut self, node: Node) -> usize {
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Free { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("live link points at a free slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("live link points at a free slot"),
        }
    }
}

impl Default for ParticleSystem {
    /// An empty system over the default `SCENE_WIDTH` x `SCENE_HEIGHT` scene.
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }
}

/// Forward iterator over live particles in sequence order.
#[derive(Debug)]
pub struct Iter<'a> {
    system: &'a ParticleSystem,
    cur: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Particle;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        let node = self.system.node(idx);
        self.cur = node.next;
        Some(&node.particle)
    }
}
