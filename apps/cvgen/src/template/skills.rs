//! Skills table: one row per category.

use crate::document::{Block, Cell, Paragraph, Table, Width};
use crate::models::Skills;
use crate::template::blocks::{body_run, heading_bar, vertical_spacer};
use crate::template::style::TemplateStyle;

pub const SKILLS_TITLE: &str = "METHODEN- / SYSTEMKOMPETENZ / SPRACHKENNTNISSE";

/// Category label and the skills listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: Vec<String>,
}

/// Groups the skills into displayed categories. `other_skills` is folded into
/// the first category as a single synthetic entry.
pub fn skill_categories(skills: &Skills) -> Vec<SkillCategory> {
    let mut technical = skills.fachkenntnisse.clone();
    if !skills.other_skills.is_empty() {
        technical.push(format!("Other skills: {}", skills.other_skills.join(", ")));
    }

    vec![
        SkillCategory {
            name: "Fachkenntnisse",
            skills: technical,
        },
        SkillCategory {
            name: "Sprachkenntnisse",
            skills: skills.sprachkenntnisse.clone(),
        },
    ]
}

pub fn skills_section(skills: &Skills, style: &TemplateStyle) -> Vec<Block> {
    let rows = skill_categories(skills)
        .into_iter()
        .map(|category| {
            let label = Paragraph::with_run(body_run(style, category.name).bold())
                .line(style.skills_line);
            let listed = Paragraph::with_run(body_run(style, category.skills.join(", ")))
                .line(style.skills_line);
            vec![
                Cell::new(vec![label]).width(Width::Percent(40)),
                Cell::new(vec![listed]).width(Width::Percent(60)),
            ]
        })
        .collect();

    let mut blocks = vec![heading_bar(style, SKILLS_TITLE)];
    blocks.extend(vertical_spacer(1));
    blocks.push(Table::new(rows, Width::Percent(100)).into());
    blocks.extend(vertical_spacer(1));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::style::default_template_style;

    fn skills(fach: &[&str], sprach: &[&str], other: &[&str]) -> Skills {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        Skills {
            fachkenntnisse: owned(fach),
            sprachkenntnisse: owned(sprach),
            other_skills: owned(other),
        }
    }

    #[test]
    fn test_other_skills_appended_to_first_category() {
        let categories = skill_categories(&skills(&["Rust", "SQL"], &["Deutsch"], &["Git", "Jira"]));
        assert_eq!(categories[0].name, "Fachkenntnisse");
        assert_eq!(
            categories[0].skills,
            vec!["Rust", "SQL", "Other skills: Git, Jira"]
        );
        assert_eq!(categories[1].skills, vec!["Deutsch"]);
    }

    #[test]
    fn test_no_other_skills_line_when_empty() {
        let categories = skill_categories(&skills(&["Rust"], &[], &[]));
        assert_eq!(categories[0].skills, vec!["Rust"]);
    }

    #[test]
    fn test_section_layout() {
        let style = default_template_style();
        let blocks = skills_section(&skills(&["Rust", "SQL"], &["Englisch"], &[]), &style);
        assert_eq!(blocks.len(), 4);
        let Block::Table(table) = &blocks[2] else {
            panic!("third block must be the skills table");
        };
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, 0).unwrap().text(), "Fachkenntnisse");
        assert_eq!(table.cell(0, 1).unwrap().text(), "Rust, SQL");
        assert_eq!(table.cell(1, 1).unwrap().text(), "Englisch");
        assert_eq!(table.cell(1, 0).unwrap().width, Some(Width::Percent(40)));
    }

    #[test]
    fn test_empty_skills_still_render_both_rows() {
        let style = default_template_style();
        let blocks = skills_section(&Skills::default(), &style);
        let Block::Table(table) = &blocks[2] else {
            panic!("third block must be the skills table");
        };
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, 1).unwrap().text(), "");
    }
}
