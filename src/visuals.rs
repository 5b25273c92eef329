//! Visual configuration for backdrop rendering.
//!
//! This module provides the color and link-style types that control how a
//! backdrop looks, separate from the motion rules that control how its
//! particles move.
//!
//! # Usage
//!
//! ```ignore
//! Backdrop::mesh()
//!     .with_links(LinkStyle {
//!         distance: 120.0,
//!         color: visuals::INDIGO,
//!         width: 0.5,
//!         max_alpha: 0.4,
//!     })
//!     .run()?;
//! ```

/// An RGBA color with components in `0.0..=1.0`.
///
/// The alpha channel doubles as draw opacity: link alphas computed by the
/// renderer ride in `a`, and the GPU canvas blends with it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components in `0.0..=1.0`.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channel values, fully opaque.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// The same color with its alpha replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Components as an array, for vertex upload.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Brand indigo (99, 102, 241).
pub const INDIGO: Rgba = Rgba::new(0.388, 0.4, 0.945, 1.0);

/// Brand cyan (34, 211, 238).
pub const CYAN: Rgba = Rgba::new(0.133, 0.827, 0.933, 1.0);

/// Brand amber (251, 191, 36).
pub const AMBER: Rgba = Rgba::new(0.984, 0.749, 0.141, 1.0);

/// Appearance of proximity links drawn by the renderer.
///
/// A link's opacity is `(1 - d / distance) * max_alpha` for endpoints at
/// distance `d`, and exactly zero at or beyond `distance`. Peer links
/// between particles typically dampen with `max_alpha: 0.5`; links to the
/// pointer use `max_alpha: 1.0` so the interactive link stands out.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStyle {
    /// Links appear below this distance in pixels.
    pub distance: f32,
    /// Base link color; the computed opacity replaces its alpha.
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f32,
    /// Opacity at distance zero.
    pub max_alpha: f32,
}
