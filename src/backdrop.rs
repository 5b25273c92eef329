//! Backdrop builder and runner.

use winit::event_loop::{ControlFlow, EventLoop};

use crate::config::{EngineConfig, PointerForce};
use crate::driver::Driver;
use crate::error::RunError;
use crate::visuals::{LinkStyle, Rgba};
use crate::window::App;

/// A backdrop builder.
///
/// Start from a preset, override what you need with method chaining, then
/// call `.run()` to open a window and animate until it closes.
///
/// # Example
///
/// ```ignore
/// use plexus::prelude::*;
///
/// fn main() -> Result<(), RunError> {
///     Backdrop::mesh()
///         .with_title("Network")
///         .with_window_size(1280, 240)
///         .run()
/// }
/// ```
pub struct Backdrop {
    config: EngineConfig,
    title: String,
    window_size: (u32, u32),
    clear_color: Rgba,
}

impl Backdrop {
    /// A backdrop running the given variant.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            title: "Plexus".to_string(),
            window_size: (1280, 720),
            clear_color: Rgba::new(0.02, 0.02, 0.05, 1.0),
        }
    }

    /// The drifting-dust preset. See [`EngineConfig::drift`].
    pub fn drift() -> Self {
        Self::new(EngineConfig::drift())
    }

    /// The linked-network preset. See [`EngineConfig::mesh`].
    pub fn mesh() -> Self {
        Self::new(EngineConfig::mesh())
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the background clear color.
    pub fn with_clear_color(mut self, color: Rgba) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the surface area, in square pixels, that yields one particle.
    pub fn with_density(mut self, density: f32) -> Self {
        self.config.density = density;
        self
    }

    /// Cap the particle count, or lift the cap with `None`.
    pub fn with_max_count(mut self, max_count: Option<usize>) -> Self {
        self.config.max_count = max_count;
        self
    }

    /// Set the colors particles spawn with.
    pub fn with_palette(mut self, palette: Vec<Rgba>) -> Self {
        self.config.palette = palette;
        self
    }

    /// Set or remove the pointer repulsion.
    pub fn with_pointer_force(mut self, force: Option<PointerForce>) -> Self {
        self.config.pointer_force = force;
        self
    }

    /// Set or remove peer links between nearby particles.
    pub fn with_links(mut self, links: Option<LinkStyle>) -> Self {
        self.config.links = links;
        self
    }

    /// Set or remove links from particles to the pointer.
    pub fn with_pointer_links(mut self, links: Option<LinkStyle>) -> Self {
        self.config.pointer_links = links;
        self
    }

    /// Open the window and animate. Blocks until the window is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let driver = Driver::new(self.config);
        let mut app = App::new(driver, self.title, self.window_size, self.clear_color);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::drift()
    }
}
