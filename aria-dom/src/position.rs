//! Default placement functions for floating elements.
//!
//! All functions take measured rects in the same coordinate space as the
//! viewport and return the rect the popup should be drawn at.

use crate::layout::Rect;

/// Gap between a tooltip and its trigger.
pub const TOOLTIP_OFFSET: f32 = 8.0;

/// Centered above the trigger, flipped below when the top would be clipped.
///
/// The result is clamped horizontally into the viewport. When the tooltip is
/// wider than the viewport it is aligned to the viewport's left edge.
pub fn position_tooltip_default(trigger: Rect, tooltip: Rect, viewport: Rect) -> Rect {
    let (center_x, _) = trigger.center();
    let mut x = center_x - tooltip.width / 2.0;
    if x + tooltip.width > viewport.right() {
        x = viewport.right() - tooltip.width;
    }
    if x < viewport.left() {
        x = viewport.left();
    }

    let above = trigger.top() - TOOLTIP_OFFSET - tooltip.height;
    let y = if above < viewport.top() {
        trigger.bottom() + TOOLTIP_OFFSET
    } else {
        above
    };

    tooltip.at(x, y)
}

/// Below the target and left-aligned with it.
///
/// Right-aligned with the target when the right edge would be clipped, and
/// moved above the target when the bottom would be clipped and there is room
/// above.
pub fn position_popover_default(target: Rect, popover: Rect, viewport: Rect) -> Rect {
    let x = if target.left() + popover.width > viewport.right() {
        target.right() - popover.width
    } else {
        target.left()
    };

    let below = target.bottom();
    let above = target.top() - popover.height;
    let y = if below + popover.height > viewport.bottom() && above >= viewport.top() {
        above
    } else {
        below
    };

    popover.at(x, y)
}
