//! Particle spawning.
//!
//! The particle count is derived from surface area at a fixed density, so
//! a resized surface gets a freshly sized population rather than stretched
//! survivors. Attribute ranges come from the [`EngineConfig`].

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::EngineConfig;
use crate::particle::Particle;
use crate::visuals::Rgba;

/// Number of particles for a surface of the given size.
///
/// `floor(area / density)`, at least 1 on any non-empty surface, capped by
/// `cfg.max_count` when set. A zero-area surface yields zero particles.
pub fn particle_count(width: f32, height: f32, cfg: &EngineConfig) -> usize {
    let area = width * height;
    if area <= 0.0 {
        return 0;
    }
    let count = ((area / cfg.density) as usize).max(1);
    match cfg.max_count {
        Some(max) => count.min(max),
        None => count,
    }
}

/// Produce a fresh particle population for a surface of the given size.
pub fn spawn(cfg: &EngineConfig, width: f32, height: f32, rng: &mut SmallRng) -> Vec<Particle> {
    let count = particle_count(width, height, cfg);
    (0..count).map(|_| spawn_one(cfg, width, height, rng)).collect()
}

fn spawn_one(cfg: &EngineConfig, width: f32, height: f32, rng: &mut SmallRng) -> Particle {
    let velocity = if cfg.max_speed > 0.0 {
        Vec2::new(
            rng.gen_range(-cfg.max_speed..cfg.max_speed),
            rng.gen_range(-cfg.max_speed..cfg.max_speed),
        )
    } else {
        Vec2::ZERO
    };

    let radius = if cfg.radius.end > cfg.radius.start {
        rng.gen_range(cfg.radius.start..cfg.radius.end)
    } else {
        cfg.radius.start
    };

    let color = if cfg.palette.is_empty() {
        Rgba::WHITE
    } else {
        cfg.palette[rng.gen_range(0..cfg.palette.len())]
    };

    Particle {
        position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
        velocity,
        radius,
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_count_follows_density() {
        let cfg = EngineConfig::drift();
        // 300 * 300 / 9000 = 10
        assert_eq!(particle_count(300.0, 300.0, &cfg), 10);
        // floor, not round
        assert_eq!(particle_count(300.0, 329.0, &cfg), 10);
    }

    #[test]
    fn test_count_clamps() {
        let cfg = EngineConfig::drift();
        // Tiny but non-empty surface still gets one particle
        assert_eq!(particle_count(10.0, 10.0, &cfg), 1);
        // Zero-area surface gets none
        assert_eq!(particle_count(0.0, 600.0, &cfg), 0);
        assert_eq!(particle_count(0.0, 0.0, &cfg), 0);
        // Large surface hits the drift cap
        assert_eq!(particle_count(1920.0, 1080.0, &cfg), 100);
    }

    #[test]
    fn test_mesh_count_is_uncapped() {
        let cfg = EngineConfig::mesh();
        assert_eq!(particle_count(1920.0, 1080.0, &cfg), 230);
    }

    #[test]
    fn test_spawn_attributes_in_range() {
        let cfg = EngineConfig::drift();
        let mut rng = rng();
        let particles = spawn(&cfg, 640.0, 480.0, &mut rng);
        assert_eq!(particles.len(), particle_count(640.0, 480.0, &cfg));

        for p in &particles {
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.velocity.x.abs() < cfg.max_speed);
            assert!(p.velocity.y.abs() < cfg.max_speed);
            assert!(p.radius >= cfg.radius.start && p.radius < cfg.radius.end);
            assert!(cfg.palette.contains(&p.color));
        }
    }

    #[test]
    fn test_spawn_zero_area_is_empty() {
        let cfg = EngineConfig::mesh();
        let mut rng = rng();
        assert!(spawn(&cfg, 0.0, 480.0, &mut rng).is_empty());
    }

    #[test]
    fn test_spawn_uses_whole_palette() {
        let cfg = EngineConfig::drift();
        let mut rng = rng();
        let particles = spawn(&cfg, 3000.0, 3000.0, &mut rng);
        for color in &cfg.palette {
            assert!(particles.iter().any(|p| p.color == *color));
        }
    }
}
