use aria_kit::prelude::*;

fn fruit() -> Combobox {
    fruit_with(ComboboxConfig::new("Fruit"))
}

fn fruit_with(config: ComboboxConfig) -> Combobox {
    let combobox = Combobox::new(config).unwrap();
    combobox.set_options(["Apple", "Apricot", "Banana"]);
    combobox
}

fn press(combobox: &Combobox, key: Key) -> EventOutcome<ComboboxEffect> {
    combobox.on_input_key(key, Modifiers::NONE)
}

// =============================================================================
// Typing
// =============================================================================

#[test]
fn test_typing_opens_and_highlights_prefix_match() {
    let combobox = fruit();

    let outcome = combobox.on_input_change("Ap");

    assert_eq!(outcome.effects, vec![ComboboxEffect::Opened]);
    assert!(combobox.is_list_open());
    assert_eq!(combobox.filtered_options(), vec!["Apple", "Apricot"]);
    assert_eq!(combobox.highlighted().as_deref(), Some("Apple"));
    assert_eq!(combobox.input_value(), "Ap");
}

#[test]
fn test_navigation_wraps_within_matches() {
    let combobox = fruit();
    combobox.on_input_change("Ap");

    press(&combobox, Key::Down);
    assert_eq!(combobox.highlighted().as_deref(), Some("Apricot"));
    assert_eq!(combobox.input_value(), "Apricot");
    assert_eq!(combobox.typed_value(), "Ap");

    press(&combobox, Key::Down);
    assert_eq!(combobox.highlighted().as_deref(), Some("Apple"));

    press(&combobox, Key::Up);
    assert_eq!(combobox.highlighted().as_deref(), Some("Apricot"));
}

#[test]
fn test_home_and_end() {
    let combobox = fruit();
    combobox.on_input_change("a");

    press(&combobox, Key::End);
    assert_eq!(combobox.highlighted().as_deref(), Some("Banana"));
    press(&combobox, Key::Home);
    assert_eq!(combobox.highlighted().as_deref(), Some("Apple"));
}

#[test]
fn test_substring_match_without_prefix_highlight() {
    let combobox = fruit();

    combobox.on_input_change("nan");

    assert_eq!(combobox.filtered_options(), vec!["Banana"]);
    assert!(combobox.is_list_open());
    assert_eq!(combobox.highlighted(), None);
}

#[test]
fn test_no_matches_keeps_list_closed() {
    let combobox = fruit();

    let outcome = combobox.on_input_change("xyz");

    assert!(outcome.effects.is_empty());
    assert!(!combobox.is_list_open());
    assert_eq!(combobox.highlighted(), None);
    assert!(!press(&combobox, Key::Down).is_handled());
}

#[test]
fn test_matches_vanishing_closes_list() {
    let combobox = fruit();
    combobox.on_input_change("Ap");

    let outcome = combobox.on_input_change("Apx");

    assert_eq!(outcome.effects, vec![ComboboxEffect::Closed]);
    assert!(!combobox.is_list_open());
}

#[test]
fn test_clearing_input_closes_list() {
    let combobox = fruit();
    combobox.on_input_change("Ap");

    combobox.on_input_change("");

    assert!(!combobox.is_list_open());
    assert_eq!(combobox.highlighted(), None);
}

#[test]
fn test_without_autocomplete_input_is_left_alone() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").autocomplete(false));
    combobox.on_input_change("Ap");
    assert_eq!(combobox.highlighted(), None);

    press(&combobox, Key::Down);

    assert_eq!(combobox.highlighted().as_deref(), Some("Apple"));
    assert_eq!(combobox.input_value(), "Ap");
}

#[test]
fn test_up_from_no_highlight_goes_to_last() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").autocomplete(false));
    combobox.on_input_change("a");

    press(&combobox, Key::Up);

    assert_eq!(combobox.highlighted().as_deref(), Some("Banana"));
}

// =============================================================================
// Committing and reverting
// =============================================================================

#[test]
fn test_enter_commits_highlighted() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").on_select("pick_fruit"));
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);

    let outcome = press(&combobox, Key::Enter);

    assert_eq!(
        outcome.effects,
        vec![
            ComboboxEffect::Select {
                value: "Apricot".to_string(),
                handler: Some(HandlerId::new("pick_fruit")),
            },
            ComboboxEffect::Closed,
        ]
    );
    assert_eq!(combobox.input_value(), "Apricot");
    assert_eq!(combobox.typed_value(), "Apricot");
    assert!(!combobox.is_list_open());
}

#[test]
fn test_enter_without_highlight_is_ignored() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").autocomplete(false));
    combobox.on_input_change("Ap");

    let outcome = press(&combobox, Key::Enter);

    assert_eq!(outcome.result, EventResult::Ignored);
    assert!(combobox.is_list_open());
}

#[test]
fn test_escape_restores_typed_text() {
    let combobox = fruit();
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);

    let outcome = press(&combobox, Key::Escape);

    assert_eq!(outcome.effects, vec![ComboboxEffect::Closed]);
    assert_eq!(combobox.input_value(), "Ap");
    assert_eq!(combobox.highlighted(), None);
    assert!(!combobox.is_list_open());
}

#[test]
fn test_blur_reverts_like_escape() {
    let combobox = fruit();
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);

    assert!(combobox.on_blur(true).effects.is_empty());
    assert!(combobox.is_list_open());

    let outcome = combobox.on_blur(false);
    assert_eq!(outcome.result, EventResult::Ignored);
    assert_eq!(outcome.effects, vec![ComboboxEffect::Closed]);
    assert_eq!(combobox.input_value(), "Ap");
}

#[test]
fn test_option_click_commits_and_refocuses_input() {
    let combobox = fruit();
    combobox.on_input_change("a");

    let outcome = combobox.on_option_click("Banana");

    assert_eq!(
        outcome.effects,
        vec![
            ComboboxEffect::Select {
                value: "Banana".to_string(),
                handler: None,
            },
            ComboboxEffect::Closed,
            ComboboxEffect::Focus(FocusTarget::new(combobox.input_id())),
        ]
    );
    assert_eq!(combobox.input_value(), "Banana");
}

#[test]
fn test_click_on_unlisted_option_ignored() {
    let combobox = fruit();
    combobox.on_input_change("Ap");

    assert!(!combobox.on_option_click("Banana").is_handled());
    assert!(combobox.is_list_open());
}

// =============================================================================
// Opening behaviour
// =============================================================================

#[test]
fn test_arrow_opens_closed_list() {
    let combobox = fruit();

    let outcome = press(&combobox, Key::Down);

    assert_eq!(outcome.effects, vec![ComboboxEffect::Opened]);
    assert_eq!(combobox.filtered_options().len(), 3);
    assert_eq!(combobox.highlighted(), None);
}

#[test]
fn test_persist_selection_highlights_current_value() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").persist_selection(true));
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);
    press(&combobox, Key::Enter);

    press(&combobox, Key::Down);

    assert!(combobox.is_list_open());
    assert_eq!(combobox.highlighted().as_deref(), Some("Apricot"));
    assert!(combobox.state().persist_selection);
}

#[test]
fn test_open_on_focus() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").open_on_focus(true));

    let outcome = combobox.on_focus();

    assert_eq!(outcome.effects, vec![ComboboxEffect::Opened]);
    assert!(combobox.is_list_open());
}

#[test]
fn test_focus_without_options_stays_closed() {
    let combobox = Combobox::new(ComboboxConfig::new("Fruit").open_on_focus(true)).unwrap();

    combobox.on_focus();

    assert!(!combobox.is_list_open());
}

#[test]
fn test_focus_does_not_open_by_default() {
    let combobox = fruit();
    combobox.on_focus();
    assert!(!combobox.is_list_open());
}

#[test]
fn test_select_on_first_click_only() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").select_on_click(true));
    combobox.on_focus();

    let first = combobox.on_click();
    assert_eq!(first.effects, vec![ComboboxEffect::SelectInputText]);

    let second = combobox.on_click();
    assert!(second.effects.is_empty());

    combobox.on_blur(false);
    combobox.on_focus();
    assert_eq!(
        combobox.on_click().effects,
        vec![ComboboxEffect::SelectInputText]
    );
}

#[test]
fn test_click_without_select_on_click() {
    let combobox = fruit();
    combobox.on_focus();
    assert!(combobox.on_click().effects.is_empty());
}

#[test]
fn test_button_toggles_and_refocuses() {
    let combobox = fruit();
    let focus = ComboboxEffect::Focus(FocusTarget::new(combobox.input_id()));

    let opened = combobox.on_button_click();
    assert_eq!(opened.effects, vec![ComboboxEffect::Opened, focus.clone()]);

    let closed = combobox.on_button_click();
    assert_eq!(closed.effects, vec![ComboboxEffect::Closed, focus]);
    assert!(!combobox.is_list_open());
}

// =============================================================================
// Options and filtering
// =============================================================================

#[test]
fn test_set_options_drops_stale_highlight() {
    let combobox = fruit();
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);

    combobox.set_options(["Apple", "Banana"]);

    assert_eq!(combobox.highlighted(), None);
    assert_eq!(combobox.filtered_options(), vec!["Apple"]);
    assert!(combobox.is_list_open());
}

#[test]
fn test_options_vanishing_during_navigation_restore_typed_text() {
    let combobox = fruit();
    combobox.on_input_change("Ap");
    press(&combobox, Key::Down);
    assert_eq!(combobox.input_value(), "Apricot");

    let effects = combobox.set_options(["Banana"]);

    assert_eq!(effects, vec![ComboboxEffect::Closed]);
    assert!(!combobox.is_list_open());
    assert_eq!(combobox.highlighted(), None);
    assert_eq!(combobox.input_value(), "Ap");

    press(&combobox, Key::Escape);
    assert_eq!(combobox.input_value(), "Ap");
    assert_eq!(combobox.typed_value(), "Ap");
}

#[test]
fn test_set_options_empty_closes() {
    let combobox = fruit();
    combobox.on_input_change("Ap");

    let effects = combobox.set_options(Vec::<String>::new());

    assert_eq!(effects, vec![ComboboxEffect::Closed]);
    assert!(!combobox.is_list_open());
}

#[test]
fn test_prefix_filter() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").filter(FilterMode::Prefix));

    combobox.on_input_change("an");

    assert!(combobox.filtered_options().is_empty());
    combobox.on_input_change("b");
    assert_eq!(combobox.filtered_options(), vec!["Banana"]);
}

#[test]
fn test_no_filter_lists_everything() {
    let combobox = fruit_with(ComboboxConfig::new("Fruit").filter(FilterMode::None));

    combobox.on_input_change("zzz");

    assert_eq!(combobox.filtered_options().len(), 3);
    assert!(combobox.is_list_open());
    assert_eq!(combobox.highlighted(), None);
}

#[test]
fn test_fuzzy_filter_orders_by_score() {
    let combobox = Combobox::new(ComboboxConfig::new("Command").filter(FilterMode::Fuzzy)).unwrap();
    combobox.set_options(["Toggle Sidebar", "Open File", "Close Folder"]);

    combobox.on_input_change("opf");

    let listed = combobox.filtered_options();
    assert_eq!(listed.first().map(String::as_str), Some("Open File"));
    assert!(!listed.iter().any(|v| v == "Toggle Sidebar"));
}

#[test]
fn test_option_segments_use_typed_text() {
    let combobox = fruit();
    combobox.on_input_change("ap");
    press(&combobox, Key::Down);

    let segments = combobox.option_segments("Apricot");

    assert_eq!(
        segments,
        vec![
            Segment { text: "Ap", is_match: true },
            Segment { text: "ricot", is_match: false },
        ]
    );
}

// =============================================================================
// Attributes and configuration
// =============================================================================

#[test]
fn test_aria_attributes() {
    let combobox = fruit();

    let root = combobox.combobox_attributes().aria();
    assert_eq!(root.get("role"), Some("combobox"));
    assert_eq!(root.get("aria-haspopup"), Some("listbox"));
    assert_eq!(root.get("aria-owns"), Some(combobox.list_id().as_str()));
    assert_eq!(root.get("aria-expanded"), Some("false"));

    let input = combobox.input_attributes().aria();
    assert_eq!(input.get("aria-autocomplete"), Some("both"));
    assert_eq!(input.get("aria-label"), Some("Fruit"));
    assert_eq!(input.get("aria-activedescendant"), None);

    combobox.on_input_change("Ap");

    let apple = combobox.option_attributes("Apple");
    let input = combobox.input_attributes().aria();
    assert_eq!(input.get("aria-activedescendant"), Some(apple.id.as_str()));
    assert_eq!(input.get("aria-controls"), Some(combobox.list_id().as_str()));
    assert_eq!(apple.aria().get("aria-selected"), Some("true"));
    assert_eq!(
        combobox.option_attributes("Apricot").aria().get("aria-selected"),
        Some("false")
    );
    assert_eq!(combobox.combobox_attributes().aria().get("aria-expanded"), Some("true"));
    assert_eq!(combobox.listbox_attributes().aria().get("role"), Some("listbox"));
}

#[test]
fn test_option_ids_are_stable() {
    let combobox = fruit();

    let first = combobox.option_attributes("Apple").id;
    combobox.set_options(["Banana", "Apple"]);

    assert_eq!(combobox.option_attributes("Apple").id, first);
    assert_ne!(combobox.option_attributes("Banana").id, first);
}

#[test]
fn test_list_autocomplete_attribute() {
    let combobox = fruit_with(ComboboxConfig::labelled_by("fruit-label").autocomplete(false));

    let input = combobox.input_attributes().aria();

    assert_eq!(input.get("aria-autocomplete"), Some("list"));
    assert_eq!(input.get("aria-labelledby"), Some("fruit-label"));
    assert!(!combobox.state().autocomplete);
}

#[test]
fn test_events_mark_dirty() {
    let combobox = fruit();
    combobox.clear_dirty();
    assert!(!combobox.is_dirty());

    combobox.on_input_change("Ap");
    assert!(combobox.is_dirty());

    combobox.clear_dirty();
    press(&combobox, Key::Left);
    combobox.on_input_key(Key::Down, Modifiers::ctrl());
    assert!(!combobox.is_dirty());

    combobox.set_options(["Apple"]);
    assert!(combobox.is_dirty());
}

#[test]
fn test_accessible_name_required() {
    let err = Combobox::new(ComboboxConfig::default()).unwrap_err();
    assert_eq!(err, ConfigError::MissingAccessibleName { widget: "Combobox" });

    assert!(Combobox::new(ComboboxConfig::new(" ")).is_err());
}
