use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::state::App;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Raw mode delivers Ctrl+C as a key press instead of SIGINT.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('n') if self.paused => {
                self.step();
            }
            KeyCode::Char('l') => self.show_labels = !self.show_labels,
            KeyCode::Left => self.driver.camera_mut().orbit(-1.0, 0.0),
            KeyCode::Right => self.driver.camera_mut().orbit(1.0, 0.0),
            KeyCode::Up => self.driver.camera_mut().orbit(0.0, -1.0),
            KeyCode::Down => self.driver.camera_mut().orbit(0.0, 1.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.driver.camera_mut().zoom(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.driver.camera_mut().zoom(-1),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.driver.camera_mut().zoom(1),
            MouseEventKind::ScrollDown => self.driver.camera_mut().zoom(-1),
            _ => {}
        }
    }
}
