//! Engine-independent document model.
//!
//! The template builder produces a `CvDocument` made of these plain-data
//! blocks; a `DocumentEngine` (see `crate::render`) turns it into bytes.
//! Sizes follow Word conventions: font sizes in half-points, spacing and
//! widths in twentieths of a point (dxa), images in pixels.

/// A complete single-section document.
#[derive(Debug, Clone, Default)]
pub struct CvDocument {
    pub header: Vec<Paragraph>,
    pub footer: Vec<Paragraph>,
    pub body: Vec<Block>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraphs and inline content
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub inlines: Vec<Inline>,
    pub align: Align,
    /// Line spacing in 240ths of a line (276 ≈ 1.15).
    pub line: Option<u32>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    /// Rendered as a first-level bullet item.
    pub bullet: bool,
    /// Left tab stop position (dxa).
    pub tab_stop: Option<u32>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty paragraph, used for vertical spacing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_run(run: TextRun) -> Self {
        Self::new().push(Inline::Text(run))
    }

    pub fn push(mut self, inline: Inline) -> Self {
        self.inlines.push(inline);
        self
    }

    pub fn run(self, run: TextRun) -> Self {
        self.push(Inline::Text(run))
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }

    pub fn bullet(mut self) -> Self {
        self.bullet = true;
        self
    }

    pub fn tab_stop(mut self, pos: u32) -> Self {
        self.tab_stop = Some(pos);
        self
    }

    /// Concatenated text of all text runs (tabs become `\t`).
    #[cfg(test)]
    pub fn text(&self) -> String {
        self.inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Text(run) => Some(run.text.as_str()),
                Inline::Tab => Some("\t"),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum Inline {
    Text(TextRun),
    Tab,
    Image(ImageRun),
    /// Current page number field.
    PageNumber(RunStyle),
    /// Total page count field.
    TotalPages(RunStyle),
}

/// Character formatting shared by text runs and field runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStyle {
    /// Half-points.
    pub size: Option<u32>,
    pub bold: bool,
    /// Hex RGB without leading `#`.
    pub color: Option<String>,
    pub font: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TextRun {
    pub text: String,
    pub style: RunStyle,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.style.size = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.style.font = Some(font.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

#[derive(Debug, Clone)]
pub struct ImageRun {
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Whole percent (0–100).
    Percent(u32),
    Dxa(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Center,
}

/// Single-line border drawn on all four sides of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    /// Eighths of a point.
    pub size: u32,
    pub color: String,
}

/// Cell padding in dxa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
    pub width: Option<Width>,
    pub valign: VAlign,
    /// Background fill, hex RGB.
    pub shading: Option<String>,
    /// `None` means borderless.
    pub border: Option<Border>,
    /// Overrides the table padding on the non-zero sides.
    pub padding: Option<Margins>,
}

impl Cell {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            ..Self::default()
        }
    }

    pub fn width(mut self, width: Width) -> Self {
        self.width = Some(width);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn shading(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn padding(mut self, padding: Margins) -> Self {
        self.padding = Some(padding);
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table without outer or inner grid lines; only `Cell::border` draws.
#[derive(Debug, Clone)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
    pub width: Width,
    pub cell_margins: Option<Margins>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>, width: Width) -> Self {
        Self {
            rows,
            width,
            cell_margins: None,
        }
    }

    pub fn cell_margins(mut self, margins: Margins) -> Self {
        self.cell_margins = Some(margins);
        self
    }

    #[cfg(test)]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_joins_runs_and_tabs() {
        let p = Paragraph::new()
            .run(TextRun::new("Label:").bold())
            .push(Inline::Tab)
            .run(TextRun::new("value"));
        assert_eq!(p.text(), "Label:\tvalue");
    }

    #[test]
    fn test_paragraph_text_skips_fields() {
        let p = Paragraph::new()
            .run(TextRun::new("Seite "))
            .push(Inline::PageNumber(RunStyle::default()));
        assert_eq!(p.text(), "Seite ");
    }

    #[test]
    fn test_cell_text_joins_paragraphs_by_line() {
        let cell = Cell::new(vec![
            Paragraph::with_run(TextRun::new("a")),
            Paragraph::with_run(TextRun::new("b")),
        ]);
        assert_eq!(cell.text(), "a\nb");
    }
}
