//! Tooltip placement next to the pointer, flipped to stay inside the viewport.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use crate::consts::TOOLTIP_OFFSET_PX;

/// Pointer position in page coordinates (`pageX` / `pageY`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible window area plus the current vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

/// Final `left` / `top` for the tooltip, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

/// Place the tooltip below-right of the pointer, flipping each axis
/// independently when it would overflow.
///
/// The horizontal bound is the viewport width; the vertical bound is the
/// viewport height shifted by the scroll offset, so a page scrolled down still
/// flips against what is actually visible.
#[must_use]
pub fn place_tooltip(pointer: Pointer, tooltip: Size, viewport: Viewport) -> Placement {
    let mut left = pointer.x + TOOLTIP_OFFSET_PX;
    let mut top = pointer.y + TOOLTIP_OFFSET_PX;

    if left + tooltip.width > viewport.width {
        left = pointer.x - tooltip.width - TOOLTIP_OFFSET_PX;
    }
    if top + tooltip.height > viewport.height + viewport.scroll_y {
        top = pointer.y - tooltip.height - TOOLTIP_OFFSET_PX;
    }

    Placement { left, top }
}
