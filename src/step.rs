//! The per-frame motion step.
//!
//! Each tick advances every particle by its drift velocity, reflects it off
//! the surface edges, and (for variants with a [`PointerForce`]) pushes it
//! away from the pointer.
//!
//! Reflection is soft: the velocity component is negated but the position
//! is NOT clamped back inside the surface, so a particle can sit a fraction
//! of a pixel outside for one frame before its reversed drift carries it
//! back in. The overshoot is part of the engine's look and the renderer
//! tolerates it.
//!
//! [`PointerForce`]: crate::config::PointerForce

use crate::config::EngineConfig;
use crate::state::SimState;

/// Advance every particle by one frame.
pub fn step(state: &mut SimState, cfg: &EngineConfig) {
    let (width, height) = (state.width, state.height);
    let pointer = state.pointer;

    for p in &mut state.particles {
        p.position += p.velocity;

        if p.position.x < 0.0 || p.position.x > width {
            p.velocity.x = -p.velocity.x;
        }
        if p.position.y < 0.0 || p.position.y > height {
            p.velocity.y = -p.velocity.y;
        }

        if let Some(force) = &cfg.pointer_force {
            let away = p.position - pointer;
            let dist = away.length();
            if dist > 0.0 && dist < force.radius {
                let falloff = 1.0 - dist / force.radius;
                // Transient displacement only; drift velocity is untouched.
                p.position += away / dist * (falloff * force.strength);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::visuals::Rgba;
    use glam::Vec2;

    fn particle(position: Vec2, velocity: Vec2) -> Particle {
        Particle {
            position,
            velocity,
            radius: 1.0,
            color: Rgba::WHITE,
        }
    }

    fn state_with(particles: Vec<Particle>, width: f32, height: f32) -> SimState {
        let mut state = SimState::new();
        state.particles = particles;
        state.width = width;
        state.height = height;
        state
    }

    #[test]
    fn test_drift_advances_position() {
        let cfg = EngineConfig::mesh();
        let mut state = state_with(
            vec![particle(Vec2::new(50.0, 50.0), Vec2::new(0.2, -0.1))],
            100.0,
            100.0,
        );
        step(&mut state, &cfg);
        assert_eq!(state.particles[0].position, Vec2::new(50.2, 49.9));
        assert_eq!(state.particles[0].velocity, Vec2::new(0.2, -0.1));
    }

    #[test]
    fn test_reflection_negates_velocity_without_clamping() {
        let cfg = EngineConfig::mesh();
        let mut state = state_with(
            vec![particle(Vec2::new(99.9, 50.0), Vec2::new(0.25, 0.0))],
            100.0,
            100.0,
        );
        step(&mut state, &cfg);
        let p = &state.particles[0];
        // One-frame overshoot: position is briefly outside the bound
        assert!((p.position.x - 100.15).abs() < 1e-4);
        assert_eq!(p.velocity.x, -0.25);

        // The next step brings it back inside
        step(&mut state, &cfg);
        assert!(state.particles[0].position.x < 100.0);
    }

    #[test]
    fn test_positions_stay_within_overshoot_tolerance() {
        use rand::{rngs::SmallRng, SeedableRng};

        let cfg = EngineConfig::mesh();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut state = SimState::new();
        state.rebuild(&cfg, 300.0, 200.0, &mut rng);

        let eps = cfg.max_speed;
        for _ in 0..10_000 {
            step(&mut state, &cfg);
            for p in &state.particles {
                assert!(p.position.x >= -eps && p.position.x <= 300.0 + eps);
                assert!(p.position.y >= -eps && p.position.y <= 200.0 + eps);
            }
        }
    }

    #[test]
    fn test_pointer_repels_within_radius() {
        let cfg = EngineConfig::drift();
        let force = cfg.pointer_force.unwrap();
        let mut state = state_with(
            vec![particle(Vec2::new(200.0, 100.0), Vec2::ZERO)],
            400.0,
            400.0,
        );
        state.pointer = Vec2::new(100.0, 100.0);

        step(&mut state, &cfg);
        let p = &state.particles[0];
        // d = 100, falloff = 1 - 100/150 = 1/3, displacement = 1 px away
        let expected = 200.0 + force.strength * (1.0 - 100.0 / force.radius);
        assert!((p.position.x - expected).abs() < 1e-4);
        assert_eq!(p.position.y, 100.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_beyond_radius_is_inert() {
        let cfg = EngineConfig::drift();
        let mut state = state_with(
            vec![particle(Vec2::new(300.0, 100.0), Vec2::ZERO)],
            400.0,
            400.0,
        );
        // Distance 200 > interaction radius 150
        state.pointer = Vec2::new(100.0, 100.0);

        step(&mut state, &cfg);
        assert_eq!(state.particles[0].position, Vec2::new(300.0, 100.0));
    }

    #[test]
    fn test_offscreen_pointer_never_repels() {
        let cfg = EngineConfig::drift();
        let mut state = state_with(
            vec![particle(Vec2::new(5.0, 5.0), Vec2::ZERO)],
            400.0,
            400.0,
        );
        step(&mut state, &cfg);
        assert_eq!(state.particles[0].position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_mesh_pointer_never_moves_particles() {
        let cfg = EngineConfig::mesh();
        let mut state = state_with(
            vec![particle(Vec2::new(101.0, 100.0), Vec2::ZERO)],
            400.0,
            400.0,
        );
        state.pointer = Vec2::new(100.0, 100.0);

        step(&mut state, &cfg);
        assert_eq!(state.particles[0].position, Vec2::new(101.0, 100.0));
    }
}
