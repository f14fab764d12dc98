//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Full redraw per frame, cursor-addressed row by row. Board frames are tiny,
//! so there is no diffing.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("write to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Tone> = None;
    for row in 0..frame.height() {
        out.queue(cursor::MoveTo(0, row))?;
        for glyph in frame.row(row) {
            if current != Some(glyph.tone) {
                apply_tone_into(out, glyph.tone)?;
                current = Some(glyph.tone);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_color(tone)))?;
    if matches!(tone, Tone::Label | Tone::Alert | Tone::Active) {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if tone == Tone::Empty {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::Rgb { r: 200, g: 200, b: 200 },
        Tone::Border => Color::Rgb { r: 160, g: 160, b: 170 },
        Tone::Empty => Color::Rgb { r: 90, g: 90, b: 100 },
        Tone::Active => Color::Rgb { r: 80, g: 220, b: 220 },
        Tone::Locked => Color::Rgb { r: 240, g: 220, b: 80 },
        Tone::Label => Color::Rgb { r: 220, g: 220, b: 220 },
        Tone::Alert => Color::Rgb { r: 230, g: 70, b: 70 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_glyph() {
        let mut frame = Frame::new(3, 2);
        frame.put_str(0, 0, "ab", Tone::Plain);
        frame.put_str(0, 1, "[]", Tone::Active);

        let mut out = Vec::new();
        encode_frame_into(&frame, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab"));
        assert!(text.contains("[]"));
    }

    #[test]
    fn tones_map_to_distinct_piece_colors() {
        assert_ne!(tone_color(Tone::Active), tone_color(Tone::Locked));
        assert_ne!(tone_color(Tone::Empty), tone_color(Tone::Locked));
    }
}
