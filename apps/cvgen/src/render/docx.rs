//! `.docx` rendering backed by the `docx-rs` crate.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BorderType, CellMargins, Docx, FieldCharType, Footer, Header,
    IndentLevel, InstrNUMPAGES, InstrPAGE, InstrText, Level, LevelJc, LevelText, LineSpacing,
    NumberFormat, Numbering, NumberingId, Pic, Run, RunFonts, Shading, SpecialIndentType, Start,
    Tab, TabValueType, TableCell, TableCellBorder, TableCellBorderPosition, TableCellMargins,
    TableRow, VAlignType, WidthType,
};
use tracing::debug;

use crate::document::{
    Align, Block, Cell, CvDocument, ImageFormat, ImageRun, Inline, Margins, Paragraph, RunStyle,
    Table, VAlign, Width,
};
use crate::render::{DocumentEngine, RenderError};
use crate::template::TemplateStyle;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Numbering definition shared by every bullet paragraph.
const BULLET_NUMBERING_ID: usize = 1;
const EMU_PER_PX: u32 = 9525;

/// Renders documents as Office Open XML word-processing packages.
#[derive(Debug, Clone)]
pub struct DocxEngine {
    font_family: String,
    default_size: u32,
    default_line: u32,
}

impl DocxEngine {
    /// Takes the document-wide defaults (font, size, line spacing) from the style.
    pub fn new(style: &TemplateStyle) -> Self {
        Self {
            font_family: style.font_family.clone(),
            default_size: style.default_size,
            default_line: style.default_line,
        }
    }
}

impl DocumentEngine for DocxEngine {
    fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    fn render(&self, document: &CvDocument) -> Result<Vec<u8>, RenderError> {
        let mut docx = Docx::new()
            .default_fonts(fonts(&self.font_family))
            .default_size(self.default_size as usize)
            .default_line_spacing(LineSpacing::new().line(self.default_line as _))
            .add_abstract_numbering(bullet_definition())
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        if !document.header.is_empty() {
            let header = document.header.iter().try_fold(Header::new(), |h, p| {
                Ok::<_, RenderError>(h.add_paragraph(paragraph(p)?))
            })?;
            docx = docx.header(header);
        }

        if !document.footer.is_empty() {
            let footer = document.footer.iter().try_fold(Footer::new(), |f, p| {
                Ok::<_, RenderError>(f.add_paragraph(paragraph(p)?))
            })?;
            docx = docx.footer(footer);
        }

        for block in &document.body {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(paragraph(p)?),
                Block::Table(t) => docx.add_table(table(t)?),
            };
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| RenderError::Package(e.to_string()))?;

        let bytes = buf.into_inner();
        debug!(bytes = bytes.len(), blocks = document.body.len(), "docx packed");
        Ok(bytes)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block mapping
// ────────────────────────────────────────────────────────────────────────────

fn fonts(family: &str) -> RunFonts {
    RunFonts::new()
        .ascii(family)
        .hi_ansi(family)
        .east_asia(family)
        .cs(family)
}

fn bullet_definition() -> AbstractNumbering {
    AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
    )
}

fn alignment(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        Align::Right => AlignmentType::Right,
    }
}

/// Maps a width onto docx units; percentages are expressed in fiftieths.
fn width(width: Width) -> (usize, WidthType) {
    match width {
        Width::Percent(p) => ((p * 50) as usize, WidthType::Pct),
        Width::Dxa(d) => (d as usize, WidthType::Dxa),
    }
}

fn paragraph(p: &Paragraph) -> Result<docx_rs::Paragraph, RenderError> {
    let mut out = docx_rs::Paragraph::new().align(alignment(p.align));

    if p.line.is_some() || p.space_before.is_some() || p.space_after.is_some() {
        let mut spacing = LineSpacing::new();
        if let Some(line) = p.line {
            spacing = spacing.line(line as _);
        }
        if let Some(before) = p.space_before {
            spacing = spacing.before(before as _);
        }
        if let Some(after) = p.space_after {
            spacing = spacing.after(after as _);
        }
        out = out.line_spacing(spacing);
    }

    if let Some(pos) = p.tab_stop {
        out = out.add_tab(Tab::new().val(TabValueType::Left).pos(pos as _));
    }

    if p.bullet {
        out = out.numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0));
    }

    p.inlines
        .iter()
        .try_fold(out, |out, inline| Ok(out.add_run(run(inline)?)))
}

fn styled_run(style: &RunStyle) -> Run {
    let mut run = Run::new();
    if let Some(size) = style.size {
        run = run.size(size as usize);
    }
    if style.bold {
        run = run.bold();
    }
    if let Some(color) = &style.color {
        run = run.color(color.clone());
    }
    if let Some(font) = &style.font {
        run = run.fonts(fonts(font));
    }
    run
}

fn run(inline: &Inline) -> Result<Run, RenderError> {
    Ok(match inline {
        Inline::Text(text) => styled_run(&text.style).add_text(text.text.clone()),
        Inline::Tab => Run::new().add_tab(),
        Inline::Image(image) => Run::new().add_image(picture(image)?),
        Inline::PageNumber(style) => field_run(style, InstrText::PAGE(InstrPAGE::new())),
        Inline::TotalPages(style) => field_run(style, InstrText::NUMPAGES(InstrNUMPAGES::new())),
    })
}

/// A complex field whose cached result Word refreshes when the page is laid out.
fn field_run(style: &RunStyle, instr: InstrText) -> Run {
    styled_run(style)
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(instr)
        .add_field_char(FieldCharType::Separate, false)
        .add_text("1")
        .add_field_char(FieldCharType::End, false)
}

/// docx-rs writes every picture as a PNG media part, so JPEG photos are
/// transcoded first. The displayed size comes from the template.
fn picture(image: &ImageRun) -> Result<Pic, RenderError> {
    debug!(
        format = ?image.format,
        bytes = image.data.len(),
        "embedding image"
    );
    let png = match image.format {
        ImageFormat::Png => image.data.clone(),
        ImageFormat::Jpeg => transcode_to_png(&image.data)?,
    };
    Ok(Pic::new_with_dimensions(png, image.width_px, image.height_px)
        .size(image.width_px * EMU_PER_PX, image.height_px * EMU_PER_PX))
}

/// Decodes whatever raster format the bytes hold and re-encodes them as PNG.
fn transcode_to_png(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let decoded = image::load_from_memory(data)?;
    let mut png = Cursor::new(Vec::new());
    decoded.write_to(&mut png, image::ImageFormat::Png)?;
    Ok(png.into_inner())
}

fn table(t: &Table) -> Result<docx_rs::Table, RenderError> {
    let rows = t
        .rows
        .iter()
        .map(|row| {
            let cells = row.iter().map(cell).collect::<Result<Vec<_>, RenderError>>()?;
            Ok(TableRow::new(cells))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let (w, unit) = width(t.width);
    let mut out = docx_rs::Table::new(rows).clear_all_border().width(w, unit);

    if let Some(m) = t.cell_margins {
        out = out.margins(TableCellMargins::new().margin(
            m.top as _,
            m.right as _,
            m.bottom as _,
            m.left as _,
        ));
    }
    Ok(out)
}

fn cell(c: &Cell) -> Result<TableCell, RenderError> {
    let mut out = if c.paragraphs.is_empty() {
        // Word refuses cells without a paragraph.
        TableCell::new().add_paragraph(docx_rs::Paragraph::new())
    } else {
        c.paragraphs.iter().try_fold(TableCell::new(), |cell, p| {
            Ok::<_, RenderError>(cell.add_paragraph(paragraph(p)?))
        })?
    };

    out = out.vertical_align(match c.valign {
        VAlign::Top => VAlignType::Top,
        VAlign::Center => VAlignType::Center,
    });

    if let Some(cell_width) = c.width {
        let (w, unit) = width(cell_width);
        out = out.width(w, unit);
    }

    if let Some(fill) = &c.shading {
        out = out.shading(Shading::new().fill(fill.clone()));
    }

    match &c.border {
        Some(border) => {
            for position in [
                TableCellBorderPosition::Top,
                TableCellBorderPosition::Left,
                TableCellBorderPosition::Bottom,
                TableCellBorderPosition::Right,
            ] {
                out = out.set_border(
                    TableCellBorder::new(position)
                        .border_type(BorderType::Single)
                        .size(border.size as usize)
                        .color(border.color.clone()),
                );
            }
        }
        None => out = out.clear_all_border(),
    }

    if let Some(padding) = c.padding {
        out.property = out.property.margins(cell_margins(padding));
    }

    Ok(out)
}

/// Only the non-zero sides are written; the rest fall back to the table padding.
fn cell_margins(padding: Margins) -> CellMargins {
    let mut margins = CellMargins::new();
    if padding.top > 0 {
        margins = margins.margin_top(padding.top as usize, WidthType::Dxa);
    }
    if padding.right > 0 {
        margins = margins.margin_right(padding.right as usize, WidthType::Dxa);
    }
    if padding.bottom > 0 {
        margins = margins.margin_bottom(padding.bottom as usize, WidthType::Dxa);
    }
    if padding.left > 0 {
        margins = margins.margin_left(padding.left as usize, WidthType::Dxa);
    }
    margins
}
