//! `LineIndex` maps flat `TextSize` offsets into `(Line, Column)`
//! representation.

use std::iter;

use text_size::{TextRange, TextSize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the beginning of each line, zero-based
    pub newlines: Vec<TextSize>,
    /// Length of the entire source text
    pub len: TextSize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineCol {
    /// Zero-based
    pub line: u32,
    /// Zero-based utf8 offset
    pub col: u32,
}

/// Represent a line inside a file.
/// The backing number is 0 based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(u32);

impl Line {
    /// The line number as presented to users.
    pub fn one_based(self) -> u32 {
        self.0 + 1
    }
}

impl From<usize> for Line {
    #[inline]
    fn from(raw: usize) -> Line {
        // more lines than u32::MAX imply a text larger than TextSize can address
        Line(raw as u32)
    }
}

impl From<Line> for usize {
    #[inline]
    fn from(line: Line) -> usize {
        line.0 as usize
    }
}

impl LineIndex {
    pub fn new(text: &str) -> LineIndex {
        let newlines = iter::once(TextSize::from(0))
            .chain(text.match_indices('\n').map(|(pos, _)| TextSize::from(pos as u32 + 1)))
            .collect();
        LineIndex { newlines, len: TextSize::of(text) }
    }

    pub fn line_count(&self) -> usize {
        self.newlines.len()
    }

    pub fn line(&self, offset: TextSize) -> Line {
        let line = self.newlines.partition_point(|&it| it <= offset) - 1;
        Line(line as u32)
    }

    pub fn line_range(&self, line: Line) -> Option<TextRange> {
        let line: usize = line.into();
        let start = *self.newlines.get(line)?;
        let end = self.newlines.get(line + 1).copied().unwrap_or(self.len);
        Some(TextRange::new(start, end))
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.newlines.partition_point(|&it| it <= offset) - 1;
        let line_start_offset = self.newlines[line];
        let col = offset - line_start_offset;
        LineCol { line: line as u32, col: col.into() }
    }

    pub fn offset(&self, line_col: LineCol) -> TextSize {
        self.newlines[line_col.line as usize] + TextSize::from(line_col.col)
    }
}
