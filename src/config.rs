//! Engine configuration and the built-in backdrop presets.
//!
//! An [`EngineConfig`] fully describes one backdrop variant: how densely
//! particles spawn, how they look, whether the pointer pushes them around,
//! and which proximity links the renderer draws. The two presets mirror the
//! production variants this engine ships with:
//!
//! - [`EngineConfig::drift`] - multicolor translucent dust that drifts
//!   slowly and is repelled by the pointer. No links.
//! - [`EngineConfig::mesh`] - a network of cyan nodes joined by faint
//!   indigo links, with bright links to the pointer. No repulsion.

use std::ops::Range;

use crate::visuals::{LinkStyle, Rgba, AMBER, CYAN, INDIGO};

/// Surface area, in square pixels, that yields one particle.
pub const PIXELS_PER_PARTICLE: f32 = 9000.0;

/// A transient repulsion applied to particles near the pointer.
///
/// Within `radius`, a particle is displaced directly away from the pointer
/// by `strength * (1 - d / radius)` pixels. The displacement is applied to
/// position only; drift velocity is untouched, so the push fades as soon as
/// the pointer moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerForce {
    /// Interaction radius in pixels.
    pub radius: f32,
    /// Displacement in pixels at distance zero.
    pub strength: f32,
}

/// Full description of one backdrop variant.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Square pixels of surface area per particle.
    pub density: f32,
    /// Hard cap on the particle count, if any.
    pub max_count: Option<usize>,
    /// Spawn range for particle radii, in pixels.
    pub radius: Range<f32>,
    /// Spawn bound for each velocity component, in pixels per frame.
    /// Components are drawn uniformly from `-max_speed..max_speed`.
    pub max_speed: f32,
    /// Colors assigned to particles by uniform random pick.
    pub palette: Vec<Rgba>,
    /// Pointer repulsion, if this variant reacts to the pointer.
    pub pointer_force: Option<PointerForce>,
    /// Peer links between nearby particles, if drawn.
    pub links: Option<LinkStyle>,
    /// Links from particles to the pointer, if drawn.
    pub pointer_links: Option<LinkStyle>,
}

impl EngineConfig {
    /// Drifting translucent dust with pointer repulsion.
    pub fn drift() -> Self {
        Self {
            density: PIXELS_PER_PARTICLE,
            max_count: Some(100),
            radius: 0.5..2.5,
            max_speed: 0.5,
            palette: vec![
                INDIGO.with_alpha(0.5),
                CYAN.with_alpha(0.5),
                AMBER.with_alpha(0.3),
            ],
            pointer_force: Some(PointerForce {
                radius: 150.0,
                strength: 3.0,
            }),
            links: None,
            pointer_links: None,
        }
    }

    /// A linked particle network that highlights the pointer.
    pub fn mesh() -> Self {
        Self {
            density: PIXELS_PER_PARTICLE,
            max_count: None,
            radius: 0.5..2.0,
            max_speed: 0.25,
            palette: vec![CYAN],
            pointer_force: None,
            links: Some(LinkStyle {
                distance: 100.0,
                color: INDIGO,
                width: 0.5,
                max_alpha: 0.5,
            }),
            pointer_links: Some(LinkStyle {
                distance: 150.0,
                color: CYAN,
                width: 1.0,
                max_alpha: 1.0,
            }),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::drift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_has_repulsion_no_links() {
        let cfg = EngineConfig::drift();
        assert!(cfg.pointer_force.is_some());
        assert!(cfg.links.is_none());
        assert!(cfg.pointer_links.is_none());
        assert_eq!(cfg.max_count, Some(100));
    }

    #[test]
    fn test_mesh_has_links_no_repulsion() {
        let cfg = EngineConfig::mesh();
        assert!(cfg.pointer_force.is_none());
        let links = cfg.links.unwrap();
        assert_eq!(links.distance, 100.0);
        assert_eq!(links.max_alpha, 0.5);
        let pointer_links = cfg.pointer_links.unwrap();
        assert_eq!(pointer_links.distance, 150.0);
        assert_eq!(pointer_links.max_alpha, 1.0);
    }
}
