//! Input modes switched on around the TUI session
//!
//! ratatui::init only covers raw mode and the alternate screen. Mouse capture
//! feeds clicks to the form and bracketed paste turns a paste into one
//! `Event::Paste` instead of a burst of key presses.

use std::io::{self, Write};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

pub fn enable_input_modes<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnableMouseCapture, EnableBracketedPaste)
}

pub fn disable_input_modes<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableBracketedPaste, DisableMouseCapture)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASTE_ON: &str = "\x1b[?2004h";
    const PASTE_OFF: &str = "\x1b[?2004l";

    #[test]
    fn test_enable_turns_on_bracketed_paste() {
        let mut out = Vec::new();
        enable_input_modes(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(PASTE_ON), "{:?}", written);
    }

    #[test]
    fn test_disable_turns_off_bracketed_paste() {
        let mut out = Vec::new();
        disable_input_modes(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(PASTE_OFF), "{:?}", written);
    }
}
