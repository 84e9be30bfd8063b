//! Terminal UI example using crossterm and ratatui.
//!
//! A small code text area: every key goes through textarea_keys first, and the
//! demo only falls back to plain editing when the engine leaves the key alone.
//! Run with: cargo run --example tui_crossterm [language]
//!
//! Set TEXTAREA_KEYS_LOG=<file> to write the engine's trace output to a file.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ropey::Rope;
use std::{cell::OnceCell, env, fs::File, io, sync::Mutex};
use textarea_keys::{
    Engine, InputState, KeyCode, KeyEvent, Modifiers, SelectionDirection, TextSurface,
    apply_action, width::visible_width_from_left,
};
use tracing_subscriber::EnvFilter;
use unicode_segmentation::UnicodeSegmentation;

const SAMPLE: &str = "fn main() {\n    let greeting = \"hello\";\n    println!(\"{greeting}\");\n}\n";

/// Text area backed by ropey, with an anchor/head selection like a browser input.
/// The flat text the engine snapshots is rebuilt lazily after edits.
struct RopeArea {
    rope: Rope,
    flat: OnceCell<String>,
    anchor: usize,
    head: usize,
}

impl RopeArea {
    fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            flat: OnceCell::new(),
            anchor: 0,
            head: 0,
        }
    }

    fn range(&self) -> (usize, usize) {
        (self.anchor.min(self.head), self.anchor.max(self.head))
    }

    fn move_head(&mut self, to: usize, extend: bool) {
        self.head = to;
        if !extend {
            self.anchor = to;
        }
    }

    fn prev_boundary(&self, at: usize) -> usize {
        self.value()[..at]
            .graphemes(true)
            .next_back()
            .map_or(0, |g| at - g.len())
    }

    fn next_boundary(&self, at: usize) -> usize {
        self.value()[at..]
            .graphemes(true)
            .next()
            .map_or(at, |g| at + g.len())
    }

    /// Byte offset on line `line` at the same char column as `from`.
    fn vertical(&self, from: usize, line: usize) -> usize {
        let char_idx = self.rope.byte_to_char(from);
        let col = char_idx - self.rope.line_to_char(self.rope.char_to_line(char_idx));
        let target = self.rope.line(line);
        let len = target.len_chars() - usize::from(target.chars().last() == Some('\n'));
        self.rope
            .char_to_byte(self.rope.line_to_char(line) + col.min(len))
    }

    fn insert(&mut self, text: &str) {
        let (start, end) = self.range();
        self.replace_range(start, end, text);
        self.move_head(start + text.len(), false);
    }

    /// Plain editing and caret movement for keys the engine did not take.
    fn fallback(&mut self, key: CKeyEvent) {
        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        let (start, end) = self.range();
        match key.code {
            CKeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c.encode_utf8(&mut [0; 4]))
            }
            CKeyCode::Enter => self.insert("\n"),
            CKeyCode::Tab => self.insert("\t"),
            CKeyCode::Backspace if start != end => self.insert(""),
            CKeyCode::Backspace => {
                let from = self.prev_boundary(start);
                self.replace_range(from, start, "");
                self.move_head(from, false);
            }
            CKeyCode::Delete if start != end => self.insert(""),
            CKeyCode::Delete => {
                let to = self.next_boundary(start);
                self.replace_range(start, to, "");
            }
            CKeyCode::Left if start != end && !extend => self.move_head(start, false),
            CKeyCode::Right if start != end && !extend => self.move_head(end, false),
            CKeyCode::Left => self.move_head(self.prev_boundary(self.head), extend),
            CKeyCode::Right => self.move_head(self.next_boundary(self.head), extend),
            CKeyCode::Up | CKeyCode::Down => {
                let line = self.rope.byte_to_line(self.head);
                let target = match key.code {
                    CKeyCode::Up => line.checked_sub(1),
                    _ => Some(line + 1).filter(|&l| l < self.rope.len_lines()),
                };
                if let Some(target) = target {
                    self.move_head(self.vertical(self.head, target), extend);
                }
            }
            CKeyCode::Home => {
                let line = self.rope.byte_to_line(self.head);
                self.move_head(self.rope.line_to_byte(line), extend);
            }
            CKeyCode::End => {
                let line = self.rope.byte_to_line(self.head);
                let next = self.rope.line_to_byte(line) + self.rope.line(line).len_bytes();
                let end = if next > 0 && self.rope.byte(next - 1) == b'\n' {
                    next - 1
                } else {
                    next
                };
                self.move_head(end, extend);
            }
            _ => {}
        }
    }
}

impl TextSurface for RopeArea {
    fn value(&self) -> &str {
        self.flat.get_or_init(|| self.rope.to_string())
    }

    fn selection(&self) -> (usize, usize, SelectionDirection) {
        let (start, end) = self.range();
        let direction = if self.head < self.anchor {
            SelectionDirection::Backward
        } else {
            SelectionDirection::Forward
        };
        (start, end, direction)
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let start = self.rope.byte_to_char(start);
        let end = self.rope.byte_to_char(end);
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        self.flat.take();
    }

    fn set_selection(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        (self.anchor, self.head) = match direction {
            SelectionDirection::Backward => (end, start),
            _ => (start, end),
        };
    }
}

struct App {
    engine: Engine,
    area: RopeArea,
    message: String,
}

impl App {
    fn new(language: &str) -> Self {
        Self {
            engine: Engine::builder().language(language).build(),
            area: RopeArea::new(SAMPLE),
            message: format!("language: {language}  |  Ctrl+/ comment  Alt+Shift+A block  Esc quit"),
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        let handled = convert_crossterm_event(event).is_some_and(|key| {
            let state = InputState::capture(&self.area);
            let action = self.engine.handle_key(&state, key);
            apply_action(&mut self.area, &action)
        });
        if !handled {
            self.area.fallback(event);
        }
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }
    if event.modifiers.contains(KeyModifiers::SUPER) {
        mods |= Modifiers::META;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Tab => KeyCode::Tab,
        // terminals report Shift+Tab as its own key
        CKeyCode::BackTab => {
            mods |= Modifiers::SHIFT;
            KeyCode::Tab
        }
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Esc => KeyCode::Esc,
        _ => return None,
    };
    Some(KeyEvent::new(code, mods))
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(f.size());

    let tab_size = app.engine.indent_options().tab_size;
    let (start, end) = app.area.range();
    let selected = Style::default().bg(Color::Blue);

    // Expand tabs so the terminal columns match the engine's visual columns
    let mut lines = vec![];
    let mut line_start = 0;
    for raw in app.area.value().split('\n') {
        let mut spans = vec![];
        let mut column = 0;
        let mut offset = line_start;
        for g in raw.graphemes(true) {
            let end_of_g = offset - line_start + g.len();
            let (next, _) = visible_width_from_left(raw, end_of_g, tab_size, Some(0));
            let shown = match g {
                "\t" => " ".repeat(next - column),
                _ => g.to_string(),
            };
            let style = if (start..end).contains(&offset) {
                selected
            } else {
                Style::default()
            };
            spans.push(Span::styled(shown, style));
            column = next;
            offset += g.len();
        }
        lines.push(Line::from(spans));
        line_start += raw.len() + 1;
    }

    let text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("textarea_keys demo"),
    );
    f.render_widget(text, chunks[0]);

    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    let head = app.area.head;
    let (column, _) = visible_width_from_left(app.area.value(), head, tab_size, None);
    let line = app.area.rope.byte_to_line(head);
    f.set_cursor(
        chunks[0].x + 1 + column as u16,
        chunks[0].y + 1 + line as u16,
    );
}

fn init_logging() -> io::Result<()> {
    let Ok(path) = env::var("TEXTAREA_KEYS_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("textarea_keys=trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), io::Error> {
    init_logging()?;
    let language = env::args().nth(1).unwrap_or_else(|| "rust".to_string());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&language);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == CKeyCode::Esc
                || (key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                break;
            }

            app.handle_crossterm_event(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
