//! Education, training and certifications, merged into one dated table.

use crate::document::{Block, Cell, Paragraph};
use crate::models::{Certification, CvData, Education, Training};
use crate::template::blocks::{
    bold_paragraph, body_paragraph, bullet_paragraph, dated_row, dated_table, heading_bar,
    join_present, non_empty, vertical_spacer,
};
use crate::template::dates::{format_date_range, format_optional_range};
use crate::template::style::TemplateStyle;

pub const EDUCATION_TITLE: &str = "AUSBILDUNG";

pub fn education_section(cv: &CvData, style: &TemplateStyle) -> Vec<Block> {
    let rows: Vec<Vec<Cell>> = cv
        .education
        .iter()
        .map(|edu| education_row(edu, style))
        .chain(cv.training.iter().map(|t| training_row(t, style)))
        .chain(cv.certifications.iter().map(|c| certification_row(c, style)))
        .collect();

    let mut blocks = vec![heading_bar(style, EDUCATION_TITLE)];
    blocks.extend(vertical_spacer(1));
    // Word rejects tables without rows.
    if !rows.is_empty() {
        blocks.push(dated_table(rows).into());
        blocks.extend(vertical_spacer(1));
    }
    blocks
}

fn education_row(edu: &Education, style: &TemplateStyle) -> Vec<Cell> {
    let mut details: Vec<Paragraph> = Vec::new();

    let degree = join_present(&[edu.degree.as_deref(), edu.major.as_deref()]);
    if !degree.is_empty() {
        details.push(bold_paragraph(style, degree));
    }

    let place = join_present(&[edu.institution.as_deref(), edu.location.as_deref()]);
    if !place.is_empty() {
        details.push(body_paragraph(style, place));
    }

    if let Some(thesis) = non_empty(edu.thesis.as_deref()) {
        details.push(body_paragraph(style, format!("Thema der Thesis: \"{thesis}\"")));
    }

    if let Some(focus) = non_empty(edu.specialization.as_deref()) {
        details.push(body_paragraph(style, format!("Vertiefungsrichtungen: {focus}")));
    }

    details.extend(edu.details.iter().map(|d| bullet_paragraph(style, d.as_str())));

    let date_text = format_date_range(edu.start_date.as_deref(), edu.end_date.as_deref());
    dated_row(style, date_text, details)
}

fn training_row(training: &Training, style: &TemplateStyle) -> Vec<Cell> {
    let mut details = vec![bold_paragraph(
        style,
        training.name.as_deref().unwrap_or_default(),
    )];
    if let Some(text) = non_empty(training.details.as_deref()) {
        details.push(body_paragraph(style, text));
    }

    let date_text =
        format_optional_range(training.start_date.as_deref(), training.end_date.as_deref());
    dated_row(style, date_text, details)
}

fn certification_row(cert: &Certification, style: &TemplateStyle) -> Vec<Cell> {
    let mut details = vec![bold_paragraph(style, cert.name.as_deref().unwrap_or_default())];
    if let Some(issuer) = non_empty(cert.issuer.as_deref()) {
        details.push(body_paragraph(style, issuer));
    }

    let date_text = format_optional_range(cert.issued_date.as_deref(), cert.expiry_date.as_deref());
    dated_row(style, date_text, details)
}
