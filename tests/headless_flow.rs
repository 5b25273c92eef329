//! End-to-end flow through the public API, against the recording canvas.
//!
//! Mirrors how a host drives a backdrop: start, pointer and resize events
//! between ticks, stop. No window or GPU involved.

use plexus::prelude::*;

#[test]
fn test_mesh_session_produces_expected_frames() {
    let mut driver = Driver::seeded(EngineConfig::mesh(), 99);
    driver.start(300.0, 300.0);
    assert_eq!(driver.state().particles.len(), 10);

    let mut frame = Recorder::new();
    driver.tick(&mut frame);
    assert!(matches!(frame.ops[0], DrawOp::Clear));
    let disks = frame
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Disk { .. }))
        .count();
    assert_eq!(disks, 10);

    // Park the pointer on a particle: its pointer link is guaranteed
    let pointer = driver.state().particles[0].position;
    driver.handle_pointer(pointer);
    let mut frame = Recorder::new();
    driver.tick(&mut frame);
    let pointer_links = frame
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { to, .. } if *to == pointer))
        .count();
    assert!(pointer_links > 0, "no pointer links at the pointer position");

    // Growing the surface regrows the population
    driver.handle_resize(600.0, 300.0);
    assert_eq!(driver.state().particles.len(), 20);

    driver.stop();
    let mut frame = Recorder::new();
    driver.tick(&mut frame);
    assert!(frame.ops.is_empty());
}

#[test]
fn test_immediate_shutdown_has_no_side_effects() {
    let mut driver = Driver::new(EngineConfig::drift());
    driver.start(800.0, 600.0);
    driver.stop();

    let mut frame = Recorder::new();
    driver.tick(&mut frame);
    assert!(frame.ops.is_empty());
    assert_eq!(driver.phase(), Phase::Stopped);
}

#[test]
fn test_zero_area_surface_degrades_to_empty_frames() {
    let mut driver = Driver::seeded(EngineConfig::drift(), 1);
    driver.start(0.0, 0.0);
    assert!(driver.state().particles.is_empty());

    let mut frame = Recorder::new();
    driver.tick(&mut frame);
    // An empty but valid frame: just the clear
    assert_eq!(frame.ops.len(), 1);
    assert!(matches!(frame.ops[0], DrawOp::Clear));
}
