#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{Receiver, Sender, channel};
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    use crate::app::App;
    use crate::config::Config;
    use crate::submission::{SubmissionRequest, SubmissionResponse};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn wheel(down: bool) -> MouseEvent {
        MouseEvent {
            kind: if down {
                MouseEventKind::ScrollDown
            } else {
                MouseEventKind::ScrollUp
            },
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// App with no worker running
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App wired to in-memory channels standing in for the worker
    ///
    /// Returns the receiving end of requests and the sending end of responses.
    pub fn app_with_channels() -> (App, Receiver<SubmissionRequest>, Sender<SubmissionResponse>) {
        let mut app = test_app();
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        app.submission.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Tick until `done` holds or `timeout_ms` elapses
    pub fn tick_until(app: &mut App, timeout_ms: u64, done: impl Fn(&App) -> bool) -> bool {
        let start = Instant::now();
        let timeout = Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            app.tick();
            if done(app) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }
}
