// CV template: maps a `CvData` record onto the document block model.
// Pure and synchronous; the caller decides where it runs.

pub mod blocks;
pub mod chrome;
pub mod dates;
pub mod education;
pub mod experience;
pub mod image;
pub mod offer;
pub mod profile;
pub mod skills;
pub mod style;

pub use style::{default_template_style, PageChrome, TemplateStyle};

use thiserror::Error;
use tracing::debug;

use crate::document::CvDocument;
use crate::models::CvData;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid data URI: missing base64 part")]
    InvalidDataUri,

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Assembles the full document: profile, skills, experience, education,
/// offer details, wrapped in the standard page header and footer.
pub fn build_document(cv: &CvData, style: &TemplateStyle) -> Result<CvDocument, TemplateError> {
    let mut body = profile::profile_section(cv, style)?;
    body.extend(skills::skills_section(&cv.skills, style));
    body.extend(experience::experience_section(&cv.experience, style));
    body.extend(education::education_section(cv, style));
    body.extend(offer::offer_section(style));

    debug!(
        blocks = body.len(),
        experience = cv.experience.len(),
        education = cv.education.len(),
        "CV template assembled"
    );

    Ok(CvDocument {
        header: chrome::page_header(style),
        footer: chrome::page_footer(style),
        body,
    })
}
