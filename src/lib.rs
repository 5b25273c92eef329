//! # Plexus
//!
//! Animated particle-network backdrops with a simple, declarative API.
//!
//! Plexus runs small 2D particle simulations meant to sit behind real
//! content: slowly drifting points that react to the pointer and,
//! optionally, link up into a living network. It handles the window, GPU
//! canvas and frame loop so a backdrop is one call:
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::prelude::*;
//!
//! fn main() -> Result<(), RunError> {
//!     Backdrop::mesh()
//!         .with_title("Network")
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Variants
//!
//! A backdrop's look and behavior is an [`EngineConfig`]. Two presets ship:
//!
//! | Preset | Particles | Pointer | Links |
//! |--------|-----------|---------|-------|
//! | [`Backdrop::drift`] | multicolor translucent dust, capped at 100 | repels nearby particles | none |
//! | [`Backdrop::mesh`] | cyan nodes, density-derived count | highlighted with bright links | faint peer links below 100 px |
//!
//! Everything in a preset can be overridden with `with_*` builder calls.
//!
//! ### Population
//!
//! The particle count follows surface area at one particle per 9000 px²,
//! so the effect has the same visual weight at any window size. Every
//! resize discards the population and spawns a fresh one.
//!
//! ### Driving it yourself
//!
//! [`Backdrop::run`] is a convenience. The pieces underneath are public
//! and host-agnostic: a [`Driver`] owns the simulation lifecycle and
//! consumes resize/pointer events, and any [`render::Canvas`] implementor
//! can receive the frames - [`render::Recorder`] captures them as plain
//! [`render::DrawOp`] values for headless use.
//!
//! ```ignore
//! let mut driver = Driver::new(EngineConfig::mesh());
//! driver.start(640.0, 360.0);
//! driver.handle_pointer(Vec2::new(320.0, 180.0));
//!
//! let mut frame = Recorder::new();
//! driver.tick(&mut frame);   // frame.ops now holds the draw commands
//! driver.stop();
//! ```

mod backdrop;
pub mod config;
mod driver;
pub mod error;
mod particle;
pub mod render;
mod shader;
pub mod spawn;
pub mod state;
pub mod step;
pub mod time;
pub mod visuals;
mod window;

pub use backdrop::Backdrop;
pub use config::{EngineConfig, PointerForce, PIXELS_PER_PARTICLE};
pub use driver::{Driver, Phase};
pub use error::{GpuError, RunError};
pub use glam::Vec2;
pub use particle::Particle;
pub use render::{Canvas, DrawOp, Recorder};
pub use state::{SimState, OFFSCREEN};
pub use visuals::{LinkStyle, Rgba};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::config::{EngineConfig, PointerForce};
    pub use crate::driver::{Driver, Phase};
    pub use crate::error::RunError;
    pub use crate::render::{Canvas, DrawOp, Recorder};
    pub use crate::time::Time;
    pub use crate::visuals::{LinkStyle, Rgba};
    pub use crate::Vec2;
}
