//! Main TUI application state and logic

use crate::code::{listing_for, synced_line, Listing};
use crate::playback::{PlaybackController, PlaybackMode, SPEED_MAX_MS, SPEED_MIN_MS};
use crate::runner::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Code,
    State,
    Narration,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Code => FocusedPane::State,
            FocusedPane::State => FocusedPane::Narration,
            FocusedPane::Narration => FocusedPane::Code,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback controller holding the generated sequence
    pub controller: PlaybackController,

    /// The configured algorithm (fixes the pseudocode listing)
    pub algorithm: Algorithm,

    /// The pseudocode listing shown in the code pane
    listing: &'static Listing,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub code_scroll: usize,
    pub state_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app around a controller that already generated a sequence
    pub fn new(controller: PlaybackController, algorithm: Algorithm) -> Self {
        App {
            controller,
            algorithm,
            listing: listing_for(&algorithm),
            focused_pane: FocusedPane::Code,
            code_scroll: 0,
            state_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Fire the auto-advance tick when it is due
            let was_playing = self.controller.mode() == PlaybackMode::Playing;
            if self.controller.poll(Instant::now()) {
                self.status_message = String::from("Playing...");
            }
            if was_playing && self.controller.mode() == PlaybackMode::Complete {
                self.status_message = String::from("Playback complete");
            }

            // Use poll with timeout so the tick schedule keeps running
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Code pane on the left, state over narration on the right,
        // status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(columns[1]);

        let step = self.controller.current_step();
        let highlighted = step.and_then(|s| synced_line(s, self.listing));

        super::panes::render_code_pane(
            frame,
            columns[0],
            self.listing,
            highlighted,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );
        super::panes::render_state_pane(
            frame,
            right_rows[0],
            step,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );
        super::panes::render_narration_pane(
            frame,
            right_rows[1],
            step,
            self.focused_pane == FocusedPane::Narration,
        );
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.controller.position(),
            self.controller.mode(),
            self.controller.speed_ms(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.controller.step_back();
                self.status_message = String::from("Stepped back");
            }
            KeyCode::Right => {
                self.controller.step();
                self.status_message = String::from("Stepped forward");
            }
            KeyCode::Char(' ') => {
                // Toggle play/pause (with 200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    match self.controller.mode() {
                        PlaybackMode::Playing => {
                            self.controller.pause();
                            self.status_message = String::from("Paused");
                        }
                        PlaybackMode::Ready | PlaybackMode::Paused => {
                            self.controller.play(Instant::now());
                            self.status_message = String::from("Playing...");
                        }
                        _ => {}
                    }
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = String::from("Reset to start");
            }
            KeyCode::Enter => {
                self.controller.jump_to_end();
                self.status_message = String::from("Jumped to end");
            }
            KeyCode::Backspace => {
                self.controller.reset();
                self.status_message = String::from("Jumped to start");
            }
            KeyCode::Char('-') => {
                let slower = (self.controller.speed_ms() + 100).min(SPEED_MAX_MS);
                self.controller.set_speed(slower);
                self.status_message = format!("Speed: {}ms per step", slower);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let faster = self.controller.speed_ms().saturating_sub(100).max(SPEED_MIN_MS);
                self.controller.set_speed(faster);
                self.status_message = format!("Speed: {}ms per step", faster);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Narration => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Code => {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Narration => {}
            },
            _ => {}
        }
    }
}
