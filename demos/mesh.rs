//! # Particle Mesh
//!
//! The strip backdrop: a network of cyan nodes joined by faint indigo
//! links wherever two nodes come within 100 px, with bright cyan links
//! from the pointer to everything within 150 px.
//!
//! ## What This Demonstrates
//!
//! - `Backdrop::mesh()` - the linked-network preset
//! - Distance-faded peer links (the O(n²) pass at its intended scale)
//! - Pointer links at full intensity, drawn above the ambient mesh
//!
//! ## Try This
//!
//! - Hold the pointer still and watch nodes drift in and out of reach
//! - `.with_links(...)` with a larger `distance` for a denser web
//!
//! Run with: `cargo run --example mesh`

use plexus::prelude::*;

fn main() {
    let result = Backdrop::mesh()
        .with_title("Plexus - Mesh")
        .with_window_size(1280, 260)
        .run();

    if let Err(e) = result {
        eprintln!("Backdrop error: {e}");
    }
}
