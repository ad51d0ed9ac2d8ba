use sparksim::{Color, Particle, ParticleKind, ParticleSystem, SeededRandom};
use std::time::Instant;

/// Appending a large number of particles must be linear in count and
/// counting must not scan. Generous wall-clock bounds keep this meaningful
/// on slow machines while still catching quadratic behavior.
#[test]
fn append_and_count_scale_linearly() {
    let mut system = ParticleSystem::default();
    let count = 100_000usize;

    let started = Instant::now();
    for i in 0..count {
        let p = Particle {
            x: (i % 800) as f64,
            y: (i % 600) as f64,
            dx: 0.0,
            dy: 0.0,
            lifetime: 1_000_000,
            color: Color::White,
            kind: ParticleKind::Streamer,
        };
        system.append(p);
    }
    assert!(
        started.elapsed().as_secs_f64() < 5.0,
        "appending {count} particles took too long"
    );
    assert_eq!(system.len(), count);

    let started = Instant::now();
    for _ in 0..count {
        assert_eq!(system.len(), count);
    }
    assert!(
        started.elapsed().as_secs_f64() < 1.0,
        "len() queries took too long; counting must be O(1)"
    );
}

/// One tick over a large population completes and keeps the size counter
/// exact while motionless in-bounds particles all survive.
#[test]
fn advance_handles_large_population() {
    let mut system = ParticleSystem::default();
    let mut random = SeededRandom::new(Some(77));
    let count = 50_000usize;

    for i in 0..count {
        let p = Particle {
            x: 1.0 + (i % 700) as f64,
            y: 1.0 + (i % 500) as f64,
            dx: 0.0,
            dy: 0.0,
            lifetime: 10,
            color: Color::Cyan,
            kind: ParticleKind::Streamer,
        };
        system.append(p);
    }

    let started = Instant::now();
    system.advance(&mut random);
    assert!(
        started.elapsed().as_secs_f64() < 2.0,
        "one tick over {count} particles took too long"
    );
    assert_eq!(system.len(), count);
}

/// Repeated firework volleys churn the arena through many allocate/free
/// cycles without corrupting order or the size counter.
#[test]
fn firework_volleys_churn_storage() {
    let mut system = ParticleSystem::default();
    let mut random = SeededRandom::new(Some(78));

    for volley in 0..20 {
        let p = Particle {
            x: 100.0 + volley as f64,
            y: 300.0,
            dx: 0.0,
            dy: 0.0,
            lifetime: 0,
            color: Color::Red,
            kind: ParticleKind::Firework,
        };
        system.append(p);
        for _ in 0..15 {
            system.advance(&mut random);
        }
        assert!(
            system.is_empty(),
            "volley {volley}: debris should fully decay within 15 ticks"
        );
    }
}
