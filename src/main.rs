//! Terminal frontend for the toroidal Game of Life engine.
//!
//! This is the rendering collaborator the engine is specified against: it
//! owns the current [`Board`] snapshot, feeds user commands into the pure
//! mutators, and paints whatever board comes back. Built on `ratatui` and
//! `crossterm`, with a statistics side panel backed by `sysinfo`.
//!
//! ## Controls
//!
//! * Space: play/pause
//! * Enter: step one generation (when paused)
//! * Mouse left-click: toggle a cell
//! * `r`: random seed, `c`: clear
//! * `1`/`2`/`3`: Small/Medium/Large preset
//! * `+`/`-`: speed up/down, `v`: switch rule variant
//! * `q`: quit

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::{error::Error, io};

use sysinfo::{System, SystemExt};
use toroidal_life::{Board, LifeError, Playback, SizePreset, Speed};

/// Running totals the pure engine does not keep for us.
#[derive(Debug)]
struct Stats {
    /// Cells born since the frontend started
    cells_created: u64,
    /// Cells that died since the frontend started
    cells_destroyed: u64,
}

impl Stats {
    fn new() -> Self {
        Stats {
            cells_created: 0,
            cells_destroyed: 0,
        }
    }

    /// Tallies births and deaths between two consecutive board snapshots.
    fn record(&mut self, before: &Board, after: &Board) {
        for (old, new) in before.iter_cells().zip(after.iter_cells()) {
            match (old.alive, new.alive) {
                (false, true) => self.cells_created += 1,
                (true, false) => self.cells_destroyed += 1,
                _ => {}
            }
        }
    }
}

/// Frontend state: the current board snapshot plus presentation bookkeeping.
struct App {
    board: Board,
    playback: Playback,
    stats: Stats,
    sys: System,
    /// Where the grid panel was last drawn, for mouse hit-testing
    grid_area: Rect,
}

impl App {
    fn new() -> Result<App, LifeError> {
        let board = Board::new(SizePreset::Small)?;
        let playback = Playback::new(board.speed());
        Ok(App {
            board,
            playback,
            stats: Stats::new(),
            sys: System::new_all(),
            grid_area: Rect::default(),
        })
    }

    /// Advances one generation and updates the running statistics.
    fn step(&mut self) {
        let next = self.board.advance();
        self.stats.record(&self.board, &next);
        self.board = next;
        self.sys.refresh_memory();
    }

    fn toggle_playing(&mut self) {
        self.board = if self.board.is_playing() {
            self.board.pause()
        } else {
            self.board.play()
        };
    }

    fn change_speed(&mut self, speed: Speed) {
        self.board = self.board.set_speed(speed);
        self.playback.set_speed(speed);
    }

    fn seed(&mut self) {
        self.board = self.board.seed_random(&mut rand::thread_rng());
    }

    /// Resets the grid to all-dead at its current size.
    fn clear(&mut self) -> Result<(), LifeError> {
        self.board = match self.board.preset() {
            SizePreset::Custom => self.board.resize_custom(
                self.board.width(),
                self.board.height(),
                self.board.scale(),
            )?,
            preset => self.board.resize(preset)?,
        };
        Ok(())
    }

    fn resize(&mut self, preset: SizePreset) -> Result<(), LifeError> {
        self.board = self.board.resize(preset)?;
        Ok(())
    }

    /// Toggles the cell under a terminal mouse position, if any. Clicks on
    /// the border or outside the grid are ignored.
    fn click(&mut self, column: u16, row: u16) {
        let inside = column > self.grid_area.x
            && row > self.grid_area.y
            && column < self.grid_area.x + self.grid_area.width.saturating_sub(1)
            && row < self.grid_area.y + self.grid_area.height.saturating_sub(1);
        if !inside {
            return;
        }

        let x = usize::from(column - self.grid_area.x - 1);
        let y = usize::from(row - self.grid_area.y - 1);
        if let Ok(toggled) = self.board.toggle(x, y) {
            self.board = toggled;
        }
    }
}

/// Draws the grid panel: one character per cell, row-major, with the glyph
/// darkening as the cell ages.
fn draw_grid(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(format!(
        "Toroidal Life [Space: Play/Pause | Enter: Step | Click: Toggle | q: Quit] {}",
        if app.board.is_playing() { "▶" } else { "⏸" }
    ));

    let mut cells = String::new();
    for cell in app.board.iter_cells() {
        cells.push(match (cell.alive, cell.age) {
            (false, _) => ' ',
            (true, 1) => '·',
            (true, 2..=4) => '•',
            (true, _) => '●',
        });
        if cell.x + 1 == app.board.cols() {
            cells.push('\n');
        }
    }

    let paragraph = Paragraph::new(cells)
        .style(Style::default().fg(Color::White))
        .block(block);

    f.render_widget(paragraph, area);
}

/// Draws the statistics panel.
fn draw_stats(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let memory_used = app.sys.used_memory() / 1024; // Convert to KB
    let memory_total = app.sys.total_memory() / 1024;
    let oldest = app
        .board
        .iter_cells()
        .map(|cell| cell.age)
        .max()
        .unwrap_or(0);

    let stats_text = format!(
        "Statistics:\n\
        Generation: {}\n\
        Population: {}\n\
        Cells Created: {}\n\
        Cells Destroyed: {}\n\
        Oldest Cell: {} gen\n\
        Grid: {}x{} ({})\n\
        Speed: {} [+/-]\n\
        Rule: {} [v]\n\
        Memory Usage: {}KB/{:.2}MB\n\
        Status: {}\n\
        \n\
        r: Seed | c: Clear\n\
        1/2/3: Resize",
        app.board.counter(),
        app.board.population(),
        app.stats.cells_created,
        app.stats.cells_destroyed,
        oldest,
        app.board.cols(),
        app.board.rows(),
        app.board.preset().as_str(),
        app.board.speed().as_str(),
        app.board.rule().as_str(),
        memory_used,
        memory_total as f64 / 1024.0,
        if app.board.is_playing() {
            "Running"
        } else {
            "Paused"
        }
    );

    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: true });

    f.render_widget(stats_widget, area);
}

/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit.
///
/// # Errors
///
/// Returns an error if terminal manipulation fails or the initial board
/// cannot be constructed.
fn main() -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new()?;

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(75), Constraint::Percentage(25)].as_ref())
                .split(f.size());

            app.grid_area = chunks[0];
            draw_grid(f, &app, chunks[0]);
            draw_stats(f, &app, chunks[1]);
        })?;

        let timeout = app.playback.poll_timeout(app.board.is_playing());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char(' ') => app.toggle_playing(),
                    KeyCode::Enter => {
                        if !app.board.is_playing() {
                            app.step();
                        }
                    }
                    KeyCode::Char('r') => app.seed(),
                    KeyCode::Char('c') => app.clear()?,
                    KeyCode::Char('1') => app.resize(SizePreset::Small)?,
                    KeyCode::Char('2') => app.resize(SizePreset::Medium)?,
                    KeyCode::Char('3') => app.resize(SizePreset::Large)?,
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        app.change_speed(app.board.speed().faster())
                    }
                    KeyCode::Char('-') => app.change_speed(app.board.speed().slower()),
                    KeyCode::Char('v') => {
                        app.board = app.board.set_rule(app.board.rule().toggled())
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => app.click(column, row),
                _ => {}
            }
        }

        if app.playback.tick_due(app.board.is_playing()) {
            app.step();
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
