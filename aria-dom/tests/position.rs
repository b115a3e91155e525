use aria_dom::{position_popover_default, position_tooltip_default, Rect, TOOLTIP_OFFSET};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

// ============================================================================
// Tooltip placement
// ============================================================================

#[test]
fn test_tooltip_centered_above() {
    let trigger = Rect::new(100.0, 200.0, 80.0, 20.0);
    let tooltip = Rect::from_size(40.0, 16.0);

    let placed = position_tooltip_default(trigger, tooltip, VIEWPORT);

    assert_eq!(placed.x, 120.0);
    assert_eq!(placed.y, 200.0 - TOOLTIP_OFFSET - 16.0);
    assert_eq!(placed.width, 40.0);
    assert_eq!(placed.height, 16.0);
}

#[test]
fn test_tooltip_flips_below_when_clipped_at_top() {
    let trigger = Rect::new(100.0, 4.0, 80.0, 20.0);
    let tooltip = Rect::from_size(40.0, 16.0);

    let placed = position_tooltip_default(trigger, tooltip, VIEWPORT);

    assert_eq!(placed.y, 24.0 + TOOLTIP_OFFSET);
}

#[test]
fn test_tooltip_clamped_to_right_edge() {
    let trigger = Rect::new(780.0, 300.0, 20.0, 20.0);
    let tooltip = Rect::from_size(100.0, 16.0);

    let placed = position_tooltip_default(trigger, tooltip, VIEWPORT);

    assert_eq!(placed.right(), 800.0);
}

#[test]
fn test_tooltip_clamped_to_left_edge() {
    let trigger = Rect::new(0.0, 300.0, 10.0, 20.0);
    let tooltip = Rect::from_size(100.0, 16.0);

    let placed = position_tooltip_default(trigger, tooltip, VIEWPORT);

    assert_eq!(placed.x, 0.0);
}

// ============================================================================
// Popover placement
// ============================================================================

#[test]
fn test_popover_below_left_aligned() {
    let button = Rect::new(50.0, 100.0, 120.0, 30.0);
    let list = Rect::from_size(200.0, 150.0);

    let placed = position_popover_default(button, list, VIEWPORT);

    assert_eq!(placed.x, 50.0);
    assert_eq!(placed.y, 130.0);
}

#[test]
fn test_popover_right_aligned_when_clipped_right() {
    let button = Rect::new(700.0, 100.0, 80.0, 30.0);
    let list = Rect::from_size(200.0, 150.0);

    let placed = position_popover_default(button, list, VIEWPORT);

    assert_eq!(placed.right(), button.right());
}

#[test]
fn test_popover_flips_above_when_clipped_bottom() {
    let button = Rect::new(50.0, 500.0, 120.0, 30.0);
    let list = Rect::from_size(200.0, 150.0);

    let placed = position_popover_default(button, list, VIEWPORT);

    assert_eq!(placed.bottom(), 500.0);
}

#[test]
fn test_popover_stays_below_when_no_room_above() {
    let viewport = Rect::new(0.0, 0.0, 800.0, 200.0);
    let button = Rect::new(50.0, 100.0, 120.0, 30.0);
    let list = Rect::from_size(200.0, 150.0);

    let placed = position_popover_default(button, list, viewport);

    assert_eq!(placed.y, 130.0);
}

// ============================================================================
// Rect
// ============================================================================

#[test]
fn test_rect_contains_is_half_open() {
    let rect = Rect::new(10.0, 10.0, 20.0, 10.0);

    assert!(rect.contains(10.0, 10.0));
    assert!(rect.contains(29.9, 19.9));
    assert!(!rect.contains(30.0, 15.0));
    assert!(!rect.contains(15.0, 20.0));
}

#[test]
fn test_rect_is_empty() {
    assert!(Rect::from_size(0.0, 10.0).is_empty());
    assert!(Rect::new(5.0, 5.0, 10.0, -1.0).is_empty());
    assert!(!Rect::from_size(1.0, 1.0).is_empty());
}
