//! Interactive terminal front end
//!
//! Drawing and event handling are split from the terminal lifecycle so both
//! can run against any writer and synthetic events.

use std::io::Write;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, event, execute, queue};
use rand::Rng;

use crate::input::command::Command;
use crate::input::gesture::DragTracker;
use crate::input::keyboard::{KEY_HELP, map_key};
use crate::io::configuration::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, TERMINAL_CELL_ASPECT};
use crate::io::error::{Result, WithOperation};
use crate::render::board::BoardView;
use crate::render::layout::TerminalLayout;
use crate::render::palette::{BOARD_COLOR, FALLBACK_TILE_COLOR, LIGHT_TEXT_COLOR, hex_to_rgb};
use crate::session::game::{GameSession, SizeChange};

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events
    Continue,
    /// Leave the game
    Quit,
}

fn color(hex: &str) -> Color {
    let [r, g, b] = hex_to_rgb(hex);
    Color::Rgb { r, g, b }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Game session bound to a terminal-sized viewport
pub struct TerminalApp<R> {
    session: GameSession<R>,
    drag: DragTracker,
    columns: u16,
    rows: u16,
}

impl<R: Rng> TerminalApp<R> {
    /// Wrap a session for a terminal of `columns` x `rows`
    pub const fn new(session: GameSession<R>, drag: DragTracker, columns: u16, rows: u16) -> Self {
        Self {
            session,
            drag,
            columns,
            rows,
        }
    }

    /// The wrapped session
    pub const fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// Consume the app, returning the session
    pub fn into_session(self) -> GameSession<R> {
        self.session
    }

    /// React to one terminal event
    ///
    /// # Errors
    ///
    /// Returns an error if a restart or size switch cannot build a board
    pub fn handle_event(&mut self, event: &Event) -> Result<Flow> {
        let command = match event {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => self.track_mouse(mouse),
            Event::Resize(columns, rows) => {
                self.columns = *columns;
                self.rows = *rows;
                None
            }
            _ => None,
        };

        match command {
            Some(command) => self.apply(command),
            None => Ok(Flow::Continue),
        }
    }

    /// Apply a normalized command to the session
    ///
    /// # Errors
    ///
    /// Returns an error if a restart or size switch cannot build a board
    pub fn apply(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Move(direction) => {
                let report = self.session.apply_move(direction);
                tracing::debug!(%direction, moved = report.moved, points = report.points, "move");
            }
            Command::NewGame => self.session.restart()?,
            Command::ConfirmRestart => {
                let _ = self.session.confirm_restart()?;
            }
            Command::Resize(delta) => {
                if let Some(change) = self.session.step_size(delta)? {
                    let resumed = change == SizeChange::Restored;
                    tracing::debug!(size = self.session.board_size(), resumed, "size changed");
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn track_mouse(&mut self, mouse: &MouseEvent) -> Option<Command> {
        // Rows are stretched so a drag of equal on-screen length weighs the same on both axes
        let x = f64::from(mouse.column);
        let y = f64::from(mouse.row) * f64::from(TERMINAL_CELL_ASPECT);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag.press(x, y);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag.release(x, y).map(Command::Move),
            _ => None,
        }
    }

    /// Draw the full screen
    ///
    /// Returns the board layout, or `None` when the terminal is too small.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<Option<TerminalLayout>> {
        let view = BoardView::from_grid(self.session.grid());
        let layout = TerminalLayout::fit(view.size, self.columns, self.rows, view.widest_label());

        queue!(
            out,
            ResetColor,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .with_operation("clear screen")?;

        let Some(layout) = layout else {
            queue!(
                out,
                Print(format!(
                    "Terminal too small for a {0}x{0} board. Enlarge it or press - / q.",
                    view.size
                ))
            )
            .with_operation("draw notice")?;
            out.flush().with_operation("flush")?;
            return Ok(None);
        };

        self.draw_header(out)?;
        Self::draw_board(out, &view, &layout)?;

        let footer_row = layout.origin_y + to_u16(layout.board_rows(view.size)) + 1;
        queue!(out, cursor::MoveTo(0, footer_row), Print(KEY_HELP)).with_operation("draw help")?;

        if self.session.overlay().is_visible() {
            self.draw_overlay(out, &view, &layout)?;
        }

        queue!(out, ResetColor).with_operation("reset colors")?;
        out.flush().with_operation("flush")?;
        Ok(Some(layout))
    }

    fn draw_header<W: Write>(&self, out: &mut W) -> Result<()> {
        let size = self.session.board_size();
        queue!(
            out,
            cursor::MoveTo(0, 0),
            Print("tilemerge"),
            cursor::MoveTo(0, 1),
            Print(format!(
                "Board: {size}x{size}  [-/+] {MIN_BOARD_SIZE}..{MAX_BOARD_SIZE}"
            )),
            cursor::MoveTo(0, 2),
            Print(format!("Score: {}", self.session.score()))
        )
        .with_operation("draw header")
    }

    fn draw_board<W: Write>(out: &mut W, view: &BoardView, layout: &TerminalLayout) -> Result<()> {
        let width = layout.board_columns(view.size);
        let background = " ".repeat(width);
        queue!(out, SetBackgroundColor(color(BOARD_COLOR))).with_operation("draw board")?;
        for line in 0..layout.board_rows(view.size) {
            queue!(
                out,
                cursor::MoveTo(layout.origin_x, layout.origin_y + to_u16(line)),
                Print(&background)
            )
            .with_operation("draw board")?;
        }

        let tile_width = usize::from(layout.tile_width);
        let blank = " ".repeat(tile_width);
        for tile in &view.tiles {
            let left = layout.origin_x + 1 + to_u16(tile.col) * (layout.tile_width + 1);
            let top = layout.origin_y + 1 + to_u16(tile.row) * (layout.tile_height + 1);
            let label_row = top + (layout.tile_height - 1) / 2;

            queue!(out, SetBackgroundColor(color(tile.background))).with_operation("draw tile")?;
            for offset in 0..layout.tile_height {
                let text = match (&tile.label, top + offset == label_row) {
                    (Some(label), true) => format!("{label:^tile_width$}"),
                    _ => blank.clone(),
                };
                queue!(
                    out,
                    SetForegroundColor(color(tile.foreground.unwrap_or(LIGHT_TEXT_COLOR))),
                    cursor::MoveTo(left, top + offset),
                    Print(text)
                )
                .with_operation("draw tile")?;
            }
        }

        queue!(out, ResetColor).with_operation("draw board")
    }

    fn draw_overlay<W: Write>(
        &self,
        out: &mut W,
        view: &BoardView,
        layout: &TerminalLayout,
    ) -> Result<()> {
        let lines = self.session.overlay().lines();
        let inner = lines.iter().map(String::len).max().unwrap_or(0) + 4;
        let height = lines.len() + 2;

        let board_width = layout.board_columns(view.size);
        let board_height = layout.board_rows(view.size);
        let left = layout.origin_x + to_u16(board_width.saturating_sub(inner) / 2);
        let top = layout.origin_y + to_u16(board_height.saturating_sub(height) / 2);

        queue!(
            out,
            SetBackgroundColor(color(FALLBACK_TILE_COLOR)),
            SetForegroundColor(color(LIGHT_TEXT_COLOR))
        )
        .with_operation("draw overlay")?;

        for row in 0..height {
            let text = row
                .checked_sub(1)
                .and_then(|index| lines.get(index))
                .map_or_else(|| " ".repeat(inner), |line| format!("{line:^inner$}"));
            queue!(out, cursor::MoveTo(left, top + to_u16(row)), Print(text))
                .with_operation("draw overlay")?;
        }

        Ok(())
    }
}

/// Run the interactive loop on the real terminal until the player quits
///
/// The terminal is restored on every exit path.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or event reads fail
pub fn run<R: Rng>(session: GameSession<R>, drag: DragTracker) -> Result<GameSession<R>> {
    let mut out = std::io::stdout();
    let (columns, rows) = terminal::size().with_operation("query terminal size")?;

    terminal::enable_raw_mode().with_operation("enable raw mode")?;
    let setup = execute!(
        out,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        cursor::Hide
    )
    .with_operation("enter alternate screen");

    let mut app = TerminalApp::new(session, drag, columns, rows);
    let result = setup.and_then(|()| event_loop(&mut app, &mut out));

    let restore = execute!(
        out,
        ResetColor,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .with_operation("leave alternate screen");
    let raw = terminal::disable_raw_mode().with_operation("disable raw mode");

    result?;
    restore?;
    raw?;
    Ok(app.into_session())
}

fn event_loop<R: Rng, W: Write>(app: &mut TerminalApp<R>, out: &mut W) -> Result<()> {
    loop {
        let _ = app.draw(out)?;
        let event = event::read().with_operation("read event")?;
        if app.handle_event(&event)? == Flow::Quit {
            return Ok(());
        }
    }
}
