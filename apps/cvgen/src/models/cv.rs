//! Input records for a single CV generation request.
//!
//! Every field is optional at the JSON boundary: the client is a form-driven
//! frontend that omits whatever the applicant left blank, so missing values
//! default instead of failing deserialization.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Top-level record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CvData {
    #[serde(rename = "firstName", deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub highest_degree: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub specialization: Option<String>,
    // Contact details are accepted but not printed on the CV.
    #[allow(dead_code)]
    #[serde(deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[allow(dead_code)]
    #[serde(deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub birthday: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub nationality: Option<String>,
    /// Photo as a `data:image/...;base64,` URI.
    #[serde(deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    #[serde(deserialize_with = "null_as_default")]
    pub training: Vec<Training>,
}

impl CvData {
    /// Photo data URI, treating a blank string as "no photo".
    pub fn photo(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    /// "First Last" as printed in the profile header.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Collections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient_text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub major: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub thesis: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub specialization: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Not printed; the certification row shows name and issuer only.
    #[allow(dead_code)]
    #[serde(deserialize_with = "lenient_text")]
    pub details: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub issued_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Training {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub details: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
}

/// The three skill buckets. Field names are the German category labels the
/// frontend sends verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(rename = "Fachkenntnisse", deserialize_with = "null_as_default")]
    pub fachkenntnisse: Vec<String>,
    #[serde(rename = "Sprachkenntnisse", deserialize_with = "null_as_default")]
    pub sprachkenntnisse: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub other_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Experience: normalized at the deserialization boundary
// ────────────────────────────────────────────────────────────────────────────

/// One concrete engagement (employer, dates, bullets).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(deserialize_with = "lenient_text")]
    pub employer: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub project: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub job_description: Vec<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub end_date: Option<String>,
    #[serde(rename = "contractType", deserialize_with = "lenient_text")]
    pub contract_type: Option<String>,
}

/// A work-experience entry.
///
/// The wire format is a single object that either describes one position or
/// carries an `experiences` array of positions sharing the outer `job_title`.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "ExperienceRecord")]
pub enum Experience {
    Single {
        job_title: Option<String>,
        position: Position,
    },
    Grouped {
        job_title: Option<String>,
        positions: Vec<Position>,
    },
}

impl Experience {
    pub fn job_title(&self) -> Option<&str> {
        match self {
            Experience::Single { job_title, .. } | Experience::Grouped { job_title, .. } => {
                job_title.as_deref()
            }
        }
    }

    /// Positions to render, in input order.
    pub fn positions(&self) -> &[Position] {
        match self {
            Experience::Single { position, .. } => std::slice::from_ref(position),
            Experience::Grouped { positions, .. } => positions,
        }
    }
}

/// Raw wire shape of an experience entry before classification.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExperienceRecord {
    #[serde(deserialize_with = "lenient_text")]
    job_title: Option<String>,
    #[serde(deserialize_with = "array_or_none")]
    experiences: Option<Vec<Position>>,
    #[serde(flatten)]
    position: Position,
}

impl From<ExperienceRecord> for Experience {
    fn from(record: ExperienceRecord) -> Self {
        match record.experiences {
            Some(positions) => Experience::Grouped {
                job_title: record.job_title,
                positions,
            },
            None => Experience::Single {
                job_title: record.job_title,
                position: record.position,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field helpers
// ────────────────────────────────────────────────────────────────────────────

/// Accepts any JSON scalar as text. `null` and absent fields become `None`;
/// arrays and objects are rejected.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a text value, found {other}"
        ))),
    }
}

/// Only a JSON array marks an entry as grouped; any other value is ignored.
fn array_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Position>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => Vec::<Position>::deserialize(items)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
