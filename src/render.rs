//! The per-frame draw pass.
//!
//! [`draw`] is a pure function of the simulation state: it clears the
//! canvas, paints every particle as a filled disk, then (for variants that
//! want them) the peer links between nearby particles and the links to the
//! pointer. That order is a contract - links are drawn after disks so they
//! never occlude the particle bodies, and pointer links land on top of
//! ambient peer links.
//!
//! The peer-link pass compares every unordered pair of particles, an O(n²)
//! walk. Populations stay in the tens at the shipped density, so the
//! simple pass beats maintaining a spatial index; `benches/link_pass.rs`
//! tracks the cost curve.

use glam::Vec2;

use crate::config::EngineConfig;
use crate::state::SimState;
use crate::visuals::{LinkStyle, Rgba};

/// The drawing surface capability a backdrop paints into.
///
/// One implementor per host: [`Recorder`] for headless capture and tests,
/// and the crate's GPU canvas for windows. Link opacity is carried in the
/// alpha channel of `color`.
pub trait Canvas {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Draw a filled disk.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Draw a stroked line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// Opacity of a link whose endpoints are `dist` apart.
///
/// Fades linearly from `style.max_alpha` at distance zero to exactly zero
/// at `style.distance`, and stays zero beyond it.
fn link_alpha(dist: f32, style: &LinkStyle) -> f32 {
    if dist >= style.distance {
        0.0
    } else {
        (1.0 - dist / style.distance) * style.max_alpha
    }
}

/// Emit one frame of draw commands for the current state.
pub fn draw(state: &SimState, cfg: &EngineConfig, canvas: &mut impl Canvas) {
    canvas.clear();

    for p in &state.particles {
        canvas.fill_circle(p.position, p.radius, p.color);
    }

    if let Some(links) = &cfg.links {
        for i in 0..state.particles.len() {
            for j in i + 1..state.particles.len() {
                let a = state.particles[i].position;
                let b = state.particles[j].position;
                let alpha = link_alpha(a.distance(b), links);
                if alpha > 0.0 {
                    canvas.stroke_line(a, b, links.color.with_alpha(alpha), links.width);
                }
            }
        }
    }

    if let Some(links) = &cfg.pointer_links {
        for p in &state.particles {
            let alpha = link_alpha(p.position.distance(state.pointer), links);
            if alpha > 0.0 {
                canvas.stroke_line(
                    p.position,
                    state.pointer,
                    links.color.with_alpha(alpha),
                    links.width,
                );
            }
        }
    }
}

/// One recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Disk {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
}

/// A [`Canvas`] that records the command stream instead of painting.
///
/// The headless backend: frames become inspectable [`DrawOp`] sequences.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for Recorder {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Disk {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }
}
