//! Tagfield Web - WebAssembly version of the tag-input field
//!
//! Renders through Ratzilla's DOM backend. Tags survive reloads via
//! localStorage and can be downloaded as JSON.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::Terminal;
use ratzilla::{
    event::{KeyCode, KeyEvent},
    DomBackend, WebRenderer,
};
use wasm_bindgen::prelude::*;

use tagfield_core::{sample_suggestions, App, FieldConfig, Key, KeyPress};

pub mod io;
mod ui;

const STORAGE_KEY: &str = "tagfield-tags";
const EXPORT_FILE: &str = "tagfield-tags.json";

/// Initialize the Tagfield web application
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let tags = match io::load_tags(STORAGE_KEY) {
        Ok(tags) => tags,
        Err(e) => {
            web_sys::console::warn_1(&e);
            Vec::new()
        }
    };

    let mut app = App::new(&FieldConfig::default(), tags, sample_suggestions());
    app.set_status("Type a country and press Enter. Ctrl+S downloads the tags.");

    // Wrap in Rc<RefCell> for shared state
    let app_state = Rc::new(RefCell::new(app));

    // Create terminal with DOM backend
    let backend = DomBackend::new()
        .map_err(|e| JsValue::from_str(&format!("Failed to create backend: {:?}", e)))?;
    let mut terminal = Terminal::new(backend)
        .map_err(|e| JsValue::from_str(&format!("Failed to create terminal: {:?}", e)))?;

    terminal.on_key_event({
        let app_state_cloned = app_state.clone();
        move |event| {
            let mut app = app_state_cloned.borrow_mut();
            app.clear_status();

            if event.ctrl && matches!(event.code, KeyCode::Char('s')) {
                export(&mut app);
                return;
            }

            let before = app.tags.tags().len();
            app.handle_key(key_press(&event));

            // Reorders can't happen without a mouse, so the count is enough
            if app.tags.tags().len() != before {
                if let Err(e) = io::save_tags(STORAGE_KEY, app.tags.tags()) {
                    web_sys::console::warn_1(&e);
                }
            }
        }
    });

    // Draw loop
    terminal.draw_web(move |frame| {
        let app = app_state.borrow();
        ui::draw(frame, &app);
    });

    web_sys::console::log_1(&"Tagfield WASM initialized".into());

    Ok(())
}

fn export(app: &mut App) {
    match tagfield_core::to_json(app.tags.tags()) {
        Ok(json) => match io::download_json(EXPORT_FILE, &json) {
            Ok(()) => app.set_status(&format!("Exported to {}", EXPORT_FILE)),
            Err(e) => app.set_status(&format!("Export failed: {:?}", e)),
        },
        Err(e) => app.set_status(&format!("Serialization failed: {}", e)),
    }
}

fn key_press(event: &KeyEvent) -> KeyPress {
    let key = match event.code {
        KeyCode::Char(_) if event.ctrl || event.alt => return KeyPress::new(Key::Other),
        KeyCode::Char(c) => return KeyPress::new(Key::Char(c)),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    };
    KeyPress {
        key,
        shift: event.shift,
    }
}
