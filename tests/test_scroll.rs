//! Tests for the project list scroll controller.
//!
//! Tests cover:
//! - Axis selection at and around the 1024 breakpoint
//! - Offset direction and magnitude on both axes

mod common;

use common::{Axis, Direction, ScrollController};

#[test]
fn test_axis_from_viewport_width() {
    assert_eq!(ScrollController::from_viewport_width(1920.0).axis(), Axis::Vertical);
    assert_eq!(ScrollController::from_viewport_width(1024.0).axis(), Axis::Vertical);
    assert_eq!(ScrollController::from_viewport_width(1023.0).axis(), Axis::Horizontal);
    assert_eq!(ScrollController::from_viewport_width(375.0).axis(), Axis::Horizontal);
}

#[test]
fn test_vertical_offsets() {
    let controller = ScrollController::new(Axis::Vertical);

    let previous = controller.delta(Direction::Previous);
    assert_eq!((previous.x, previous.y), (0.0, -200.0));

    let next = controller.delta(Direction::Next);
    assert_eq!((next.x, next.y), (0.0, 200.0));
}

#[test]
fn test_horizontal_offsets() {
    let controller = ScrollController::new(Axis::Horizontal);

    let previous = controller.delta(Direction::Previous);
    assert_eq!((previous.x, previous.y), (-200.0, 0.0));

    let next = controller.delta(Direction::Next);
    assert_eq!((next.x, next.y), (200.0, 0.0));
}

#[test]
fn test_axis_fixed_after_construction() {
    // The axis is read once at construction; later clicks reuse it.
    let controller = ScrollController::from_viewport_width(800.0);
    for _ in 0..3 {
        assert_eq!(controller.delta(Direction::Next).y, 0.0);
    }
}
