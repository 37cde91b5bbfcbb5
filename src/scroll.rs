/// Viewport width at which the project list switches to the desktop
/// (vertical) layout.
pub const DESKTOP_BREAKPOINT: f32 = 1024.0;
/// Distance of one scroll step, in layout units.
pub const SCROLL_STEP: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Smooth-scroll offset to apply to the project list container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    pub x: f32,
    pub y: f32,
}

/// Drives the two directional controls of the project list. The axis is
/// decided once from the viewport width at construction and is not
/// re-evaluated per click.
#[derive(Debug, Clone, Copy)]
pub struct ScrollController {
    axis: Axis,
}

impl ScrollController {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    /// Vertical above the desktop breakpoint, horizontal below it.
    pub fn from_viewport_width(width: f32) -> Self {
        let axis = if width >= DESKTOP_BREAKPOINT {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        Self::new(axis)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Offset of one step in the requested direction along the chosen
    /// axis. Clamping at the ends is left to the scroll container.
    pub fn delta(&self, direction: Direction) -> ScrollDelta {
        let amount = match direction {
            Direction::Previous => -SCROLL_STEP,
            Direction::Next => SCROLL_STEP,
        };
        match self.axis {
            Axis::Horizontal => ScrollDelta { x: amount, y: 0.0 },
            Axis::Vertical => ScrollDelta { x: 0.0, y: amount },
        }
    }
}
