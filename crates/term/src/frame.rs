//! Character frame produced by the board view.

/// Colour class of a glyph; the renderer picks the actual colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Border,
    Empty,
    Active,
    Locked,
    Label,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            tone: Tone::Plain,
        }
    }
}

/// Fixed-size grid of glyphs, row 0 at the top of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Glyph> {
        self.idx(col, row).map(|i| self.glyphs[i])
    }

    /// Write one glyph; writes outside the frame are dropped
    pub fn put(&mut self, col: u16, row: u16, ch: char, tone: Tone) {
        if let Some(i) = self.idx(col, row) {
            self.glyphs[i] = Glyph { ch, tone };
        }
    }

    /// Write a string left to right, clipped at the right edge
    pub fn put_str(&mut self, col: u16, row: u16, s: &str, tone: Tone) {
        for (i, ch) in s.chars().enumerate() {
            let Some(c) = col.checked_add(i as u16) else {
                break;
            };
            self.put(c, row, ch, tone);
        }
    }

    /// Glyphs of one screen row
    pub fn row(&self, row: u16) -> &[Glyph] {
        let start = row as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Plain-text rows with trailing spaces trimmed
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|r| {
                let s: String = self.row(r).iter().map(|g| g.ch).collect();
                s.trim_end().to_string()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_edge() {
        let mut frame = Frame::new(4, 1);
        frame.put_str(2, 0, "abc", Tone::Label);
        assert_eq!(frame.lines(), vec!["  ab".to_string()]);
        assert_eq!(frame.get(3, 0).map(|g| g.tone), Some(Tone::Label));
    }

    #[test]
    fn out_of_range_put_is_dropped() {
        let mut frame = Frame::new(2, 2);
        frame.put(5, 5, 'x', Tone::Plain);
        assert_eq!(frame, Frame::new(2, 2));
    }
}
