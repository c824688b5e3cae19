//! Professional experience: one dated block per position.

use crate::document::{Block, Paragraph};
use crate::models::{Experience, Position};
use crate::template::blocks::{
    body_run, bold_paragraph, body_paragraph, bullet_paragraph, dated_row, dated_table,
    heading_bar, non_empty, vertical_spacer,
};
use crate::template::dates::format_date_range;
use crate::template::style::TemplateStyle;

pub const EXPERIENCE_TITLE: &str = "BERUFLICHER WERDEGANG / PROJEKTKOMPETENZ";

pub fn experience_section(experience: &[Experience], style: &TemplateStyle) -> Vec<Block> {
    let mut blocks = vec![heading_bar(style, EXPERIENCE_TITLE)];
    blocks.extend(vertical_spacer(1));

    for entry in experience {
        for position in entry.positions() {
            blocks.push(position_block(entry.job_title(), position, style));
            blocks.extend(vertical_spacer(1));
        }
    }

    blocks
}

/// Date column on the left; title, employer line, project and bullets on the right.
pub fn position_block(job_title: Option<&str>, position: &Position, style: &TemplateStyle) -> Block {
    let mut employer_line =
        Paragraph::with_run(body_run(style, position.employer.as_deref().unwrap_or_default()).bold());
    if let Some(location) = non_empty(position.location.as_deref()) {
        employer_line = employer_line.run(body_run(style, format!(", {location}")));
    }
    if let Some(contract) = non_empty(position.contract_type.as_deref()) {
        employer_line = employer_line.run(body_run(style, format!(" ({contract})")));
    }

    let mut details = vec![
        bold_paragraph(style, job_title.unwrap_or_default()),
        employer_line,
        body_paragraph(style, position.project.as_deref().unwrap_or_default()),
    ];
    details.extend(
        position
            .job_description
            .iter()
            .map(|line| bullet_paragraph(style, line.as_str())),
    );

    let date_text = format_date_range(position.start_date.as_deref(), position.end_date.as_deref());
    dated_table(vec![dated_row(style, date_text, details)]).into()
}
