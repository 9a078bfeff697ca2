//! Tagfield CLI - tag-input field in the terminal

mod io;
mod logging;
mod ui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use tagfield_core::{sample_suggestions, App, Autocomplete, Key, KeyPress};

#[derive(Parser, Debug)]
#[command(name = "tagfield")]
#[command(about = "Build a list of tags with autocomplete, paste and drag-to-reorder", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/tagfield/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suggestions: a JSON array, or one per line
    #[arg(short, long)]
    suggestions: Option<PathBuf>,

    /// Initial tags as a JSON array
    #[arg(short, long)]
    tags: Option<PathBuf>,

    /// Show the tags without allowing edits
    #[arg(long)]
    read_only: bool,

    /// Replace typed text with a matching suggestion
    #[arg(long, value_enum)]
    autocomplete: Option<AutocompleteArg>,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AutocompleteArg {
    Off,
    SingleMatch,
    AnyMatch,
}

impl From<AutocompleteArg> for Autocomplete {
    fn from(arg: AutocompleteArg) -> Self {
        match arg {
            AutocompleteArg::Off => Autocomplete::Off,
            AutocompleteArg::SingleMatch => Autocomplete::SingleMatch,
            AutocompleteArg::AnyMatch => Autocomplete::AnyMatch,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = io::load_config(cli.config.as_deref())?;
    if cli.read_only {
        config.read_only = true;
    }
    if let Some(autocomplete) = cli.autocomplete {
        config.autocomplete = autocomplete.into();
    }

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let _log_guard = logging::init(&config.logging)?;

    let suggestions = match &cli.suggestions {
        Some(path) => io::load_suggestions(path)?,
        None => sample_suggestions(),
    };
    let tags = match &cli.tags {
        Some(path) => io::load_tags(path)?,
        None => Vec::new(),
    };
    info!(tags = tags.len(), suggestions = suggestions.len(), "starting");

    // Create app
    let mut app = App::new(&config, tags, suggestions);
    app.set_status("Type and press Enter to add a tag. Ctrl+Q to finish.");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    println!("{}", tagfield_core::to_json(app.tags.tags())?);
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Paste(text) => {
                app.clear_status();
                app.handle_paste(&text);
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            Event::FocusLost => app.blur(),
            _ => {}
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.running = false;
        return;
    }

    // Clear status on any key
    app.clear_status();
    app.handle_key(key_press(&key));
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.mouse_down(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.mouse_up(mouse.column, mouse.row),
        MouseEventKind::Moved => app.mouse_moved(mouse.column, mouse.row),
        _ => {}
    }
}

/// Shift only matters for non-character keys; a shifted character
/// already arrives as its own glyph. Ctrl/Alt chords are never text.
fn key_press(event: &KeyEvent) -> KeyPress {
    let chord = event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    let key = match event.code {
        KeyCode::Char(_) if chord => return KeyPress::new(Key::Other),
        KeyCode::Char(c) => return KeyPress::new(Key::Char(c)),
        KeyCode::BackTab => return KeyPress::shifted(Key::Tab),
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
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_translation() {
        let shifted_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(key_press(&shifted_enter), KeyPress::shifted(Key::Enter));

        let capital = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_press(&capital), KeyPress::new(Key::Char('A')));

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key_press(&back_tab), KeyPress::shifted(Key::Tab));
    }

    #[test]
    fn test_chords_are_not_typed() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(key_press(&ctrl_a), KeyPress::new(Key::Other));

        let alt_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT);
        assert_eq!(key_press(&alt_b), KeyPress::new(Key::Other));

        let mut app = App::new(&Default::default(), Vec::new(), sample_suggestions());
        handle_key(&mut app, ctrl_a);
        assert_eq!(app.field.query(), "");
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["tagfield", "--read-only", "--autocomplete", "single-match"]);
        assert!(cli.read_only);
        assert!(matches!(cli.autocomplete, Some(AutocompleteArg::SingleMatch)));
    }
}
