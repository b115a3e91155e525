//! Drive a menu button from the terminal.
//!
//! Down/Up/Enter/Escape/letters are forwarded to the menu; `q` quits.
//! Transitions are logged to `menu_demo.log`.

use std::io::{self, Write};

use aria_kit::logging::init_file_logger;
use aria_kit::prelude::*;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_file_logger("menu_demo.log", LevelFilter::Debug)?;

    let menu = MenuButton::new(MenuConfig::new("Actions"))?;
    menu.set_items(vec![
        MenuItem::new("Download").on_select("download"),
        MenuItem::new("Copy").on_select("copy"),
        MenuItem::new("Delete").disabled(true),
        MenuItem::link("Docs", MenuLink::new("https://example.com/docs")),
    ])?;
    let mut focus = FocusState::new();
    focus.focus(&menu.button_id());

    terminal::enable_raw_mode()?;
    let result = run(&menu, &mut focus);
    terminal::disable_raw_mode()?;
    result
}

fn run(menu: &MenuButton, focus: &mut FocusState) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();
    write!(stdout, "[{}] focus the button and press Down\r\n", menu.label())?;
    stdout.flush()?;
    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }
        let key: Key = key_event.code.into();
        let modifiers: Modifiers = key_event.modifiers.into();
        if key == Key::Char('q') && !menu.is_open() {
            return Ok(());
        }

        let outcome = if focus.is_focused(&menu.list_id()) {
            menu.on_list_key(key, modifiers)
        } else {
            menu.on_button_key(key, modifiers)
        };
        for effect in &outcome.effects {
            match effect {
                MenuEffect::Focus(target) => {
                    focus.apply(target);
                }
                MenuEffect::Select { handler, .. } => {
                    write!(stdout, "selected {:?}\r\n", handler)?;
                }
                MenuEffect::Navigate { href } => write!(stdout, "navigate {}\r\n", href)?,
                MenuEffect::Opened | MenuEffect::Closed => {}
            }
        }

        let state = menu.state();
        let active = state
            .selection_index
            .and_then(|i| menu.items().get(i).map(|item| item.label.clone()));
        write!(
            stdout,
            "open={} active={:?} aria-expanded={:?}\r\n",
            state.is_open,
            active,
            menu.button_attributes().aria().get("aria-expanded"),
        )?;
        stdout.flush()?;
    }
}
