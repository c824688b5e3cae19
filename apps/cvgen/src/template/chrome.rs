//! Page header (logo) and footer (contact lines and page counter).

use crate::document::{Align, ImageFormat, ImageRun, Inline, Paragraph, RunStyle, TextRun};
use crate::template::style::TemplateStyle;

pub fn page_header(style: &TemplateStyle) -> Vec<Paragraph> {
    let chrome = &style.chrome;
    match &chrome.logo {
        Some(logo) => vec![Paragraph::new()
            .align(Align::Right)
            .push(Inline::Image(ImageRun {
                data: logo.clone(),
                format: ImageFormat::Png,
                width_px: chrome.logo_width_px,
                height_px: chrome.logo_height_px,
            }))],
        None => Vec::new(),
    }
}

pub fn page_footer(style: &TemplateStyle) -> Vec<Paragraph> {
    let chrome = &style.chrome;
    let small = |text: &str| {
        Paragraph::with_run(
            TextRun::new(text)
                .size(style.small_size)
                .color(style.footer_color.clone()),
        )
    };
    let field_style = RunStyle {
        size: Some(style.small_size),
        color: Some(style.footer_color.clone()),
        ..RunStyle::default()
    };

    let page_counter = small("Seite ")
        .align(Align::Right)
        .push(Inline::PageNumber(field_style.clone()))
        .run(
            TextRun::new(" von ")
                .size(style.small_size)
                .color(style.footer_color.clone()),
        )
        .push(Inline::TotalPages(field_style));

    vec![
        small(&chrome.footer_name),
        small(&chrome.footer_address),
        small(&chrome.footer_contact),
        page_counter,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::style::default_template_style;

    #[test]
    fn test_header_empty_without_logo() {
        let style = default_template_style();
        assert!(page_header(&style).is_empty());
    }

    #[test]
    fn test_header_places_logo_right() {
        let mut style = default_template_style();
        style.chrome.logo = Some(vec![0x89, b'P', b'N', b'G']);
        let header = page_header(&style);
        assert_eq!(header.len(), 1);
        assert_eq!(header[0].align, Align::Right);
        assert!(matches!(
            header[0].inlines.first(),
            Some(Inline::Image(ImageRun { width_px: 52, height_px: 42, .. }))
        ));
    }

    #[test]
    fn test_footer_lines_and_page_fields() {
        let style = default_template_style();
        let footer = page_footer(&style);
        assert_eq!(footer.len(), 4);
        assert!(footer[1].text().starts_with("pmX GmbH"));

        let counter = &footer[3];
        assert_eq!(counter.align, Align::Right);
        assert_eq!(counter.text(), "Seite  von ");
        assert!(matches!(counter.inlines[1], Inline::PageNumber(_)));
        assert!(matches!(counter.inlines[3], Inline::TotalPages(_)));
    }
}
