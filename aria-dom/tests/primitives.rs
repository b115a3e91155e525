use std::time::{Duration, Instant};

use aria_dom::{
    make_id, string_hash, AriaAttributes, FocusState, FocusTarget, Key, Modifiers, MouseButton,
    Timer,
};

// ============================================================================
// Timer
// ============================================================================

#[test]
fn test_timer_fires_once_at_deadline() {
    let start = Instant::now();
    let mut timer = Timer::new();
    timer.schedule(start, Duration::from_millis(100));

    assert!(!timer.fire(start + Duration::from_millis(99)));
    assert!(timer.fire(start + Duration::from_millis(100)));
    assert!(!timer.fire(start + Duration::from_millis(200)));
    assert!(!timer.is_pending());
}

#[test]
fn test_timer_cancel() {
    let start = Instant::now();
    let mut timer = Timer::new();
    timer.schedule(start, Duration::from_millis(10));

    assert!(timer.cancel());
    assert!(!timer.cancel());
    assert!(!timer.fire(start + Duration::from_secs(1)));
}

#[test]
fn test_timer_reschedule_replaces_deadline() {
    let start = Instant::now();
    let mut timer = Timer::new();
    timer.schedule(start, Duration::from_millis(10));
    timer.schedule(start, Duration::from_millis(50));

    assert_eq!(timer.deadline(), Some(start + Duration::from_millis(50)));
    assert!(!timer.fire(start + Duration::from_millis(20)));
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_apply_target() {
    let mut focus = FocusState::new();
    let target = FocusTarget::new("menu-button--1");

    assert!(focus.apply(&target));
    assert!(!focus.apply(&target));
    assert!(focus.is_focused("menu-button--1"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Attributes and ids
// ============================================================================

#[test]
fn test_aria_attributes_replace_in_place() {
    let attrs = AriaAttributes::new()
        .role("menu")
        .flag("aria-expanded", false)
        .set("id", "x")
        .flag("aria-expanded", true);

    let pairs: Vec<_> = attrs.iter().collect();
    assert_eq!(
        pairs,
        vec![("role", "menu"), ("aria-expanded", "true"), ("id", "x")]
    );
}

#[test]
fn test_aria_attributes_optional() {
    let attrs = AriaAttributes::new()
        .set_opt("aria-activedescendant", None::<String>)
        .flag_if("aria-disabled", false)
        .flag_if("data-selected", true);

    assert!(!attrs.contains("aria-activedescendant"));
    assert!(!attrs.contains("aria-disabled"));
    assert_eq!(attrs.get("data-selected"), Some("true"));
}

#[test]
fn test_make_id_skips_empty_parts() {
    assert_eq!(make_id(["tooltip", "3"]), "tooltip--3");
    assert_eq!(make_id(["menu", "", "7"]), "menu--7");
}

#[test]
fn test_string_hash_is_stable() {
    assert_eq!(string_hash(""), 0);
    assert_eq!(string_hash("a"), 97);
    assert_eq!(string_hash("ab"), 97 * 31 + 98);
    assert_eq!(string_hash("Apple"), string_hash("Apple"));
    assert_ne!(string_hash("Apple"), string_hash("apple"));
}

#[test]
fn test_key_helpers() {
    assert!(Key::Enter.is_activation());
    assert!(Key::SPACE.is_activation());
    assert_eq!(Key::Char('b').printable(), Some('b'));
    assert_eq!(Key::SPACE.printable(), None);
    assert_eq!(Key::Down.printable(), None);
}

#[test]
fn test_key_from_dom_name() {
    assert_eq!(Key::from_name("ArrowDown", false), Key::Down);
    assert_eq!(Key::from_name("Esc", false), Key::Escape);
    assert_eq!(Key::from_name("Tab", true), Key::BackTab);
    assert_eq!(Key::from_name(" ", false), Key::SPACE);
    assert_eq!(Key::from_name("é", false), Key::Char('é'));
    assert_eq!(Key::from_name("F5", false), Key::Other);
}

#[test]
fn test_crossterm_conversions() {
    use crossterm::event::{KeyCode, KeyModifiers};

    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::F(2)), Key::Other);

    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl && mods.shift && !mods.alt);
    assert!(mods.is_chord());
    assert!(!Modifiers::NONE.is_chord());
}

#[test]
fn test_mouse_button_from_dom() {
    assert_eq!(MouseButton::from_dom(0), Some(MouseButton::Left));
    assert_eq!(MouseButton::from_dom(2), Some(MouseButton::Right));
    assert_eq!(MouseButton::from_dom(4), None);
}
