//! Building blocks shared by the section builders.

use crate::document::{Block, Cell, Inline, Margins, Paragraph, Table, TextRun, VAlign, Width};
use crate::template::style::TemplateStyle;

/// Left column of the two-column date/detail tables (dxa).
pub const DATE_COLUMN_DXA: u32 = 3000;
/// Right column of the two-column date/detail tables (dxa).
pub const DETAIL_COLUMN_DXA: u32 = 7000;

/// `count` empty paragraphs.
pub fn vertical_spacer(count: usize) -> Vec<Block> {
    (0..count).map(|_| Paragraph::empty().into()).collect()
}

/// A body-sized text run.
pub fn body_run(style: &TemplateStyle, text: impl Into<String>) -> TextRun {
    TextRun::new(text).size(style.body_size)
}

pub fn body_paragraph(style: &TemplateStyle, text: impl Into<String>) -> Paragraph {
    Paragraph::with_run(body_run(style, text))
}

pub fn bold_paragraph(style: &TemplateStyle, text: impl Into<String>) -> Paragraph {
    Paragraph::with_run(body_run(style, text).bold())
}

pub fn bullet_paragraph(style: &TemplateStyle, text: impl Into<String>) -> Paragraph {
    body_paragraph(style, text).bullet().spacing(30, 30)
}

/// Full-width shaded bar carrying a section title.
pub fn heading_bar(style: &TemplateStyle, title: &str) -> Block {
    let run = TextRun::new(title)
        .font(style.font_family.clone())
        .size(style.body_size)
        .bold()
        .color(style.text_color.clone());

    let cell = Cell::new(vec![Paragraph::with_run(run)])
        .width(Width::Percent(100))
        .shading(style.heading_fill.clone());

    Table::new(vec![vec![cell]], Width::Percent(100))
        .cell_margins(Margins {
            top: 50,
            right: 100,
            bottom: 50,
            left: 150,
        })
        .into()
}

/// `Label:<tab>value` row used in the profile section.
pub fn info_row(style: &TemplateStyle, label: &str, value: Option<&str>) -> Paragraph {
    Paragraph::new()
        .line(style.profile_line)
        .tab_stop(style.info_tab_stop)
        .run(body_run(style, label).bold())
        .push(Inline::Tab)
        .run(body_run(style, value.unwrap_or_default()))
}

/// One row of a date/detail table.
pub fn dated_row(style: &TemplateStyle, date_text: String, details: Vec<Paragraph>) -> Vec<Cell> {
    vec![
        Cell::new(vec![body_paragraph(style, date_text)])
            .width(Width::Dxa(DATE_COLUMN_DXA))
            .valign(VAlign::Top),
        Cell::new(details)
            .width(Width::Dxa(DETAIL_COLUMN_DXA))
            .valign(VAlign::Top),
    ]
}

/// Table width matching the sum of the date/detail columns.
pub fn dated_table(rows: Vec<Vec<Cell>>) -> Table {
    Table::new(rows, Width::Dxa(DATE_COLUMN_DXA + DETAIL_COLUMN_DXA))
}

/// Joins the present, non-empty parts with `", "`.
pub fn join_present(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
