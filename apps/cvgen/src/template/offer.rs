//! Offer details: fixed contractual boilerplate and the data protection notice.

use crate::document::{Align, Block, Cell, Paragraph, Table, TextRun, Width};
use crate::template::blocks::{body_paragraph, bold_paragraph, heading_bar, vertical_spacer};
use crate::template::style::TemplateStyle;

pub const OFFER_TITLE: &str = "ANGEBOTSDETAILS";

pub const OFFER_TERMS: [(&str, &str); 5] = [
    ("Vertragsart:", "Arbeitnehmerüberlassung"),
    ("Verfügbarkeit:", "ab sofort"),
    ("Voraussichtliche Dauer:", "Über den gewünschten Zeitraum"),
    ("Kaufmännische Daten:", "Über den gewünschten Zeitraum"),
    ("Referenznummer:", ""),
];

pub const DATA_PROTECTION_NOTICE: &str = "Bitte beachten Sie, dass Sie nach den geltenden \
datenschutzrechtlichen Bestimmungen grundsätzlich dazu verpflichtet sind, personenbezogene \
Daten zu löschen, wenn der Zweck der Verarbeitung entfallen ist.";

pub fn offer_section(style: &TemplateStyle) -> Vec<Block> {
    let rows = OFFER_TERMS
        .iter()
        .map(|(label, value)| {
            vec![
                Cell::new(vec![bold_paragraph(style, *label)]),
                Cell::new(vec![body_paragraph(style, *value)]),
            ]
        })
        .collect();

    let notice = Paragraph::with_run(
        TextRun::new(DATA_PROTECTION_NOTICE)
            .size(style.small_size)
            .color(style.notice_color.clone()),
    )
    .align(Align::Center);

    let mut blocks = vec![heading_bar(style, OFFER_TITLE)];
    blocks.extend(vertical_spacer(1));
    blocks.push(Table::new(rows, Width::Percent(100)).into());
    blocks.extend(vertical_spacer(1));
    blocks.push(notice.into());
    blocks
}
