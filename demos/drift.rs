//! # Drifting Dust
//!
//! The full-window backdrop: translucent multicolor particles drifting
//! slowly, pushed aside when the pointer gets within 150 px.
//!
//! ## What This Demonstrates
//!
//! - `Backdrop::drift()` - the capped, repulsion-enabled preset
//! - Pointer repulsion as a transient position push (drift resumes as
//!   soon as the pointer leaves)
//!
//! ## Try This
//!
//! - Sweep the pointer through a cluster and watch it re-form
//! - Resize the window: the population respawns at the same density
//!
//! Run with: `cargo run --example drift`

use plexus::prelude::*;

fn main() {
    let result = Backdrop::drift()
        .with_title("Plexus - Drift")
        .with_window_size(1280, 720)
        .run();

    if let Err(e) = result {
        eprintln!("Backdrop error: {e}");
    }
}
