use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

/// Terminal cell coordinates, as opposed to game pixels.
pub type Cell = (u16, u16);

/// Thin crossterm wrapper: raw-mode setup/teardown, a queued drawing
/// surface and a non-blocking key queue. All drawing is batched with
/// `queue!` and pushed out by `flush`.
pub struct TermManager {
    grid_width: u16,
    grid_height: u16,
    stdout: Stdout,
}

impl TermManager {
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        TermManager { grid_width, grid_height, stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error enabling raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        terminal::disable_raw_mode().expect("Error disabling raw mode.");
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Drains every key event queued up since the last call, without
    /// blocking the game loop.
    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    pub fn begin_frame(&mut self) {
        queue!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn print_cell(&mut self, pos: Cell, ch: char, color: Color) {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(ch)
        )
        .expect("Error drawing cell.");
    }

    pub fn print_text(&mut self, pos: Cell, text: &str, color: Color) {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetForegroundColor(color),
            style::Print(text)
        )
        .expect("Error drawing text.");
    }

    /// Prints `lines` centered on the grid, over whatever frame is
    /// currently on screen.
    pub fn show_message(&mut self, lines: &[&str], color: Color) {
        let msg_height = lines.len() as u16;
        let center = (self.grid_width / 2, self.grid_height / 2);
        let top = center.1.saturating_sub(msg_height / 2);

        for (i, line) in lines.iter().enumerate() {
            let x = center.0.saturating_sub(line.len() as u16 / 2);
            self.print_text((x, top + i as u16), line, color);
        }

        self.flush();
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }
}
