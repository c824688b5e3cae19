//! Visual constants for the CV template.
//!
//! Passed explicitly into every section builder so each builder can be
//! exercised in isolation with a known style.

/// Fonts, sizes and colors shared by all sections.
///
/// Sizes are half-points (22 = 11pt), line values are 240ths of a line.
#[derive(Debug, Clone)]
pub struct TemplateStyle {
    pub font_family: String,
    /// Document default run size.
    pub default_size: u32,
    /// Document default line spacing.
    pub default_line: u32,
    /// Size of all body text inside sections.
    pub body_size: u32,
    pub title_size: u32,
    pub name_size: u32,
    /// Footer lines and the data protection notice.
    pub small_size: u32,
    pub text_color: String,
    /// Fill of the section heading bars.
    pub heading_fill: String,
    pub footer_color: String,
    pub notice_color: String,
    /// Border and text color of the missing-photo placeholder.
    pub placeholder_color: String,
    /// Line spacing of profile rows.
    pub profile_line: u32,
    /// Line spacing of skills rows.
    pub skills_line: u32,
    /// Tab stop separating profile labels from values (dxa).
    pub info_tab_stop: u32,
    pub photo_width_px: u32,
    pub photo_height_px: u32,
    pub chrome: PageChrome,
}

/// Page header and footer content.
#[derive(Debug, Clone)]
pub struct PageChrome {
    /// PNG placed right-aligned in the page header.
    pub logo: Option<Vec<u8>>,
    pub logo_width_px: u32,
    pub logo_height_px: u32,
    pub footer_name: String,
    pub footer_address: String,
    pub footer_contact: String,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            logo: None,
            logo_width_px: 52,
            logo_height_px: 42,
            footer_name: "{logged user name}".to_string(),
            footer_address: "pmX GmbH | Kegelenstr. 3 | 70372 Stuttgart ".to_string(),
            footer_contact: "{logged user email} | {logged user phone nr}".to_string(),
        }
    }
}

/// Returns the house style: Franklin Gothic Book, 11pt body text, olive
/// heading bars.
pub fn default_template_style() -> TemplateStyle {
    TemplateStyle {
        font_family: "Franklin Gothic Book".to_string(),
        default_size: 20,
        default_line: 276,
        body_size: 22,
        title_size: 40,
        name_size: 28,
        small_size: 16,
        text_color: "000000".to_string(),
        heading_fill: "a0a727".to_string(),
        footer_color: "666666".to_string(),
        notice_color: "444444".to_string(),
        placeholder_color: "7F7F7F".to_string(),
        profile_line: 420,
        skills_line: 360,
        info_tab_stop: 2150,
        photo_width_px: 155,
        photo_height_px: 234,
        chrome: PageChrome::default(),
    }
}

impl Default for TemplateStyle {
    fn default() -> Self {
        default_template_style()
    }
}
