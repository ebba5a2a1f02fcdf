//! Box-drawing grid renderer for the cheat sheet.
//!
//! Each grid cell shows two lines, a name and a key sequence. Column widths
//! are computed per column from the content, so a long label only widens its
//! own column.
//!
//! ```text
//! ┌──────────────────┬─────────┐
//! │ Split vertical   │ Copy    │
//! │ C-x 3            │ A-w     │
//! ├──────────────────┼─────────┤
//! │                  │ Mark    │
//! │                  │ C-SPC   │
//! └──────────────────┴─────────┘
//! ```

use std::fmt::Write as _;

/// Code fence wrapped around the rendered grid.
const FENCE: &str = "```";

/// Horizontal border fill.
const HORIZONTAL: char = '─';
/// Vertical cell separator. Never the ASCII `|`, which would be read as a
/// Markdown table.
const VERTICAL: char = '│';

/// Shown in place of an ASCII `|` inside a cell.
const PIPE_SUBSTITUTE: char = '¦';

/// Left, junction and right glyphs of one border line.
#[derive(Debug, Clone, Copy)]
struct BorderGlyphs {
    left: char,
    junction: char,
    right: char,
}

const TOP: BorderGlyphs = BorderGlyphs {
    left: '┌',
    junction: '┬',
    right: '┐',
};
const MIDDLE: BorderGlyphs = BorderGlyphs {
    left: '├',
    junction: '┼',
    right: '┤',
};
const BOTTOM: BorderGlyphs = BorderGlyphs {
    left: '└',
    junction: '┴',
    right: '┘',
};

/// Rendered form of one grid position. Both fields empty means unoccupied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayCell {
    /// Display name (first line)
    pub name: String,
    /// Key sequence (second line)
    pub sequence: String,
}

impl DisplayCell {
    /// Creates a cell from a name and a sequence.
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    /// Returns true if the cell shows nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.sequence.is_empty()
    }

    /// Character width of the wider of the two lines.
    fn content_width(&self) -> usize {
        self.name.chars().count().max(self.sequence.chars().count())
    }
}

impl From<(String, String)> for DisplayCell {
    fn from((name, sequence): (String, String)) -> Self {
        Self { name, sequence }
    }
}

/// Rows of display cells.
pub type Grid = Vec<Vec<DisplayCell>>;

/// Creates an all-empty grid.
#[must_use]
pub fn empty_grid(rows: usize, cols: usize) -> Grid {
    vec![vec![DisplayCell::default(); cols]; rows]
}

/// Computes the width of every column: the widest name or sequence in the
/// column plus one space of padding on each side.
///
/// Rows shorter than the widest row count as empty cells.
pub fn column_widths(grid: &[Vec<DisplayCell>]) -> Vec<usize> {
    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);

    (0..cols)
        .map(|col| {
            let content = grid
                .iter()
                .filter_map(|row| row.get(col))
                .map(DisplayCell::content_width)
                .max()
                .unwrap_or(0);
            content + 2
        })
        .collect()
}

/// Renders a grid as a fenced block of box-drawing text.
///
/// The block holds a top border, a name line and a sequence line per row,
/// a separator between rows, and a bottom border. An empty grid renders as
/// an empty fence.
pub fn render_grid(grid: &[Vec<DisplayCell>]) -> String {
    let widths = column_widths(grid);
    let mut lines = Vec::with_capacity(grid.len() * 3 + 1);

    if !grid.is_empty() && !widths.is_empty() {
        lines.push(border_line(&widths, TOP));

        for (row_idx, row) in grid.iter().enumerate() {
            lines.push(content_line(row, &widths, |cell| cell.name.as_str()));
            lines.push(content_line(row, &widths, |cell| cell.sequence.as_str()));

            if row_idx + 1 < grid.len() {
                lines.push(border_line(&widths, MIDDLE));
            }
        }

        lines.push(border_line(&widths, BOTTOM));
    }

    let mut output = String::new();
    output.push_str(FENCE);
    output.push('\n');
    for line in &lines {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str(FENCE);
    output
}

/// Replaces characters that would break the grid: ASCII pipes become `¦`
/// and control characters such as line breaks become spaces.
///
/// The mapping is one char to one char, so widths stay valid.
fn cell_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '|' => PIPE_SUBSTITUTE,
            c if c.is_control() => ' ',
            c => c,
        })
        .collect()
}

fn border_line(widths: &[usize], glyphs: BorderGlyphs) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|&width| HORIZONTAL.to_string().repeat(width))
        .collect();

    format!(
        "{}{}{}",
        glyphs.left,
        segments.join(&glyphs.junction.to_string()),
        glyphs.right
    )
}

fn content_line(
    row: &[DisplayCell],
    widths: &[usize],
    text: impl Fn(&DisplayCell) -> &str,
) -> String {
    let mut line = String::new();
    line.push(VERTICAL);

    for (col, &width) in widths.iter().enumerate() {
        let value = row.get(col).map_or("", |cell| text(cell));
        let _ = write!(line, " {:<pad$}", cell_text(value), pad = width - 1);
        line.push(VERTICAL);
    }

    line
}
