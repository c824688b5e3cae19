//! Qualification profile: photo (or placeholder) next to the personal data.

use crate::document::{
    Align, Block, Border, Cell, ImageRun, Inline, Margins, Paragraph, Table, TextRun, VAlign,
    Width,
};
use crate::models::CvData;
use crate::template::blocks::{info_row, vertical_spacer};
use crate::template::image::{base64_to_bytes, image_format};
use crate::template::style::TemplateStyle;
use crate::template::TemplateError;

pub const PROFILE_TITLE: &str = "QUALIFIKATIONSPROFIL";
pub const NO_IMAGE_TEXT: &str = "No image available.";

/// Gap between the photo column and the personal data, in dxa.
const COLUMN_GAP: u32 = 300;

pub fn profile_section(cv: &CvData, style: &TemplateStyle) -> Result<Vec<Block>, TemplateError> {
    let photo_cell = match cv.photo() {
        Some(uri) => photo_cell(uri, style)?,
        None => placeholder_cell(style),
    };

    let table = Table::new(
        vec![vec![photo_cell, personal_data_cell(cv, style)]],
        Width::Percent(100),
    );

    let mut blocks: Vec<Block> = vec![
        Paragraph::with_run(TextRun::new(PROFILE_TITLE).size(style.title_size)).into(),
        Paragraph::empty().into(),
        table.into(),
    ];
    blocks.extend(vertical_spacer(1));
    Ok(blocks)
}

fn photo_cell(uri: &str, style: &TemplateStyle) -> Result<Cell, TemplateError> {
    let image = ImageRun {
        data: base64_to_bytes(uri)?,
        format: image_format(uri),
        width_px: style.photo_width_px,
        height_px: style.photo_height_px,
    };

    Ok(Cell::new(vec![Paragraph::new().push(Inline::Image(image))])
        .width(Width::Percent(30))
        .valign(VAlign::Center)
        .padding(Margins {
            right: COLUMN_GAP,
            ..Margins::default()
        }))
}

fn placeholder_cell(style: &TemplateStyle) -> Cell {
    let text = TextRun::new(NO_IMAGE_TEXT)
        .size(style.name_size)
        .bold()
        .color(style.placeholder_color.clone());

    Cell::new(vec![Paragraph::with_run(text)
        .line(style.profile_line)
        .align(Align::Center)])
    .width(Width::Percent(30))
    .valign(VAlign::Center)
    .border(Border {
        size: 2,
        color: style.placeholder_color.clone(),
    })
    .padding(Margins {
        right: COLUMN_GAP,
        left: COLUMN_GAP,
        ..Margins::default()
    })
}

fn personal_data_cell(cv: &CvData, style: &TemplateStyle) -> Cell {
    let mut paragraphs = vec![Paragraph::empty(), Paragraph::empty()];
    paragraphs.push(
        Paragraph::with_run(
            TextRun::new(format!("    {}", cv.display_name()))
                .size(style.name_size)
                .bold(),
        )
        .line(style.profile_line),
    );
    paragraphs.push(Paragraph::empty().line(style.profile_line));
    paragraphs.extend([
        info_row(style, "Höchster Abschluss:", cv.highest_degree.as_deref()),
        info_row(style, "Fachrichtung:", cv.specialization.as_deref()),
        info_row(style, "Geburtsdatum:", cv.birthday.as_deref()),
        info_row(style, "Nationalität:", cv.nationality.as_deref()),
    ]);

    Cell::new(paragraphs)
        .width(Width::Percent(70))
        .valign(VAlign::Center)
        .padding(Margins {
            left: COLUMN_GAP,
            ..Margins::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::style::default_template_style;

    const PNG_1X1: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    fn profile_table(blocks: &[Block]) -> &Table {
        blocks
            .iter()
            .find_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .expect("profile section contains a table")
    }

    #[test]
    fn test_missing_image_renders_bordered_placeholder() {
        let style = default_template_style();
        let cv = CvData::default();
        let blocks = profile_section(&cv, &style).unwrap();
        let cell = profile_table(&blocks).cell(0, 0).unwrap();
        assert_eq!(cell.text(), NO_IMAGE_TEXT);
        assert_eq!(cell.border.as_ref().map(|b| b.color.as_str()), Some("7F7F7F"));
    }

    #[test]
    fn test_image_renders_decoded_photo() {
        let style = default_template_style();
        let cv = CvData {
            image: Some(PNG_1X1.to_string()),
            ..CvData::default()
        };
        let blocks = profile_section(&cv, &style).unwrap();
        let cell = profile_table(&blocks).cell(0, 0).unwrap();
        let Some(Inline::Image(image)) = cell.paragraphs[0].inlines.first() else {
            panic!("expected an image run");
        };
        assert_eq!(image.format, crate::document::ImageFormat::Png);
        assert_eq!((image.width_px, image.height_px), (155, 234));
        assert!(cell.border.is_none());
    }

    #[test]
    fn test_cells_padded_towards_the_gap() {
        let style = default_template_style();
        let padding = |cv: &CvData, col: usize| {
            let blocks = profile_section(cv, &style).unwrap();
            profile_table(&blocks).cell(0, col).unwrap().padding
        };

        let with_photo = CvData {
            image: Some(PNG_1X1.to_string()),
            ..CvData::default()
        };
        let photo = padding(&with_photo, 0).unwrap();
        assert_eq!((photo.left, photo.right), (0, COLUMN_GAP));
        let data = padding(&with_photo, 1).unwrap();
        assert_eq!((data.left, data.right), (COLUMN_GAP, 0));

        let placeholder = padding(&CvData::default(), 0).unwrap();
        assert_eq!((placeholder.left, placeholder.right), (COLUMN_GAP, COLUMN_GAP));

        let blocks = profile_section(&with_photo, &style).unwrap();
        assert!(profile_table(&blocks).cell_margins.is_none());
    }

    #[test]
    fn test_malformed_image_fails() {
        let style = default_template_style();
        let cv = CvData {
            image: Some("data:image/png;base64".to_string()),
            ..CvData::default()
        };
        let err = profile_section(&cv, &style).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidDataUri));
    }

    #[test]
    fn test_personal_data_rows() {
        let style = default_template_style();
        let cv: CvData = serde_json::from_value(serde_json::json!({
            "firstName": "Anna",
            "lastName": "Schmidt",
            "highest_degree": "M.Sc.",
            "nationality": "deutsch"
        }))
        .unwrap();
        let blocks = profile_section(&cv, &style).unwrap();
        assert_eq!(
            match &blocks[0] {
                Block::Paragraph(p) => p.text(),
                _ => String::new(),
            },
            PROFILE_TITLE
        );
        let text = profile_table(&blocks).cell(0, 1).unwrap().text();
        assert!(text.contains("    Anna Schmidt"));
        assert!(text.contains("Höchster Abschluss:\tM.Sc."));
        assert!(text.contains("Fachrichtung:\t\n"));
        assert!(text.contains("Nationalität:\tdeutsch"));
    }
}
