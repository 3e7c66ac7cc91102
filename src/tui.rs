//! TUI (Terminal User Interface) module for Boggle Solver
//!
//! Shows the current board beside the words found on it, using Ratatui.
//!
//! # States
//! - `Searching`: a board is being generated and solved
//! - `Showing`: a solved board is on screen; `N`/`ENTER` asks for a new one,
//!   arrow keys scroll the word list, `ESC`/`Q` quits

use crate::game_state::{GameInterface, Round, UserAction};
use crate::search::score_word;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const CELL_WIDTH: u16 = 4;
const BOARD_PADDING: u16 = 4;
const MIN_BOARD_PANEL_WIDTH: u16 = 20;
const SCROLL_PAGE: u16 = 10;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const CELL_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Searching,
    Showing,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: Option<&'a Round>,
    state: TuiState,
    scroll: u16,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime; dropping it restores the screen.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: Option<Round>,
    state: TuiState,
    scroll: u16,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            round: None,
            state: TuiState::Searching,
            scroll: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Starting".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: self.round.as_ref(),
            state: self.state,
            scroll: self.scroll,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Board and words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let board_width = ctx.round.map_or(MIN_BOARD_PANEL_WIDTH, |round| {
            Self::board_panel_width(round.grid.width())
        });
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(board_width), Constraint::Min(20)])
            .split(rows[1]);

        Self::render_title(f, rows[0]);
        Self::render_board(f, middle[0], ctx.round);
        Self::render_words(f, middle[1], ctx);
        Self::render_status(f, rows[2], ctx.status);
        Self::render_instructions(f, rows[3], ctx.state);
    }

    fn board_panel_width(columns: usize) -> u16 {
        u16::try_from(columns)
            .unwrap_or(u16::MAX)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(BOARD_PADDING)
            .max(MIN_BOARD_PANEL_WIDTH)
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("BOGGLE SOLVER")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    /// Screen row for a board row, or `None` once it falls below `inner`.
    fn board_row_y(inner: Rect, row_index: usize) -> Option<u16> {
        let offset = u16::try_from(row_index).ok()?.saturating_mul(ROW_SPACING);
        let y = inner.y.saturating_add(offset);
        (y < inner.bottom()).then_some(y)
    }

    fn render_board(f: &mut Frame, area: Rect, round: Option<&Round>) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(round) = round else {
            return;
        };
        for (row_index, row) in round.grid.rows().enumerate() {
            let Some(y) = Self::board_row_y(inner, row_index) else {
                break;
            };
            let mut spans = vec![Span::raw(" ")];
            for letter in row.chars() {
                spans.push(Span::styled(format!(" {letter} "), CELL_STYLE));
                spans.push(Span::raw(" "));
            }
            Self::render_line(f, inner, y, spans);
        }
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_words(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(round) = ctx.round
            && !round.words.is_empty()
        {
            lines.push(Line::from(vec![Span::styled(
                format!(
                    "{} words, {} points",
                    round.words.len(),
                    round.score()
                ),
                SUCCESS_STYLE,
            )]));
            for word in &round.words {
                lines.push(Line::from(format!("  {word:<16} {}", score_word(word))));
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.message, HEADER_STYLE)]));
        }
        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Words").borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .scroll((ctx.scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::Searching => "Searching the board...",
            TuiState::Showing => "N/ENTER: New board | UP/DOWN/PGUP/PGDN: Scroll words | ESC/Q: Quit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.handle_key(key)),
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        if key.modifiers.contains(event::KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('c')
        {
            return Some(UserAction::Exit);
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            KeyCode::Enter | KeyCode::Char('n' | 'N') => Some(UserAction::NewBoard),
            KeyCode::Down => {
                self.scroll_by(1);
                None
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_by(SCROLL_PAGE);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(SCROLL_PAGE);
                None
            }
            KeyCode::Char(c) => {
                self.error_message = format!("'{c}' does nothing here");
                None
            }
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scroll_by(&mut self, lines: u16) {
        let max = self
            .round
            .as_ref()
            .map_or(0, |r| r.words.len().min(u16::MAX as usize) as u16);
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }
}

impl GameInterface for TuiInterface {
    fn display_searching_message(&mut self, attempt: usize) {
        self.state = TuiState::Searching;
        self.status = if attempt > 1 {
            format!("No words on the last board, generating another (attempt {attempt})")
        } else {
            "Searching...".to_string()
        };
        self.draw_or_log();
    }

    fn display_round(&mut self, round: &Round) {
        self.round = Some(round.clone());
        self.state = TuiState::Showing;
        self.scroll = 0;
        self.message.clear();
        self.status = if round.complete {
            format!("Found {} words", round.words.len())
        } else {
            format!("Time limit reached - found {} words", round.words.len())
        };
        self.draw_or_log();
    }

    fn display_no_words_message(&mut self, attempts: usize) {
        self.message = format!("No words found after {attempts} board(s).");
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
