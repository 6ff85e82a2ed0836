use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Scored feedback for one reviewed call, as returned by the language model.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackReport {
    #[serde(default = "default_advisor_name")]
    pub advisor_name: String,
    #[serde(default)]
    pub date_iso: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub name: String,
    pub rating: Rating,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    NeedsWork,
    Okay,
    Good,
    Great,
}

fn default_advisor_name() -> String {
    "Unknown Advisor".to_string()
}

impl Rating {
    pub const OPTIONS: [Rating; 4] = [Rating::NeedsWork, Rating::Okay, Rating::Good, Rating::Great];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::NeedsWork => "Needs Work",
            Rating::Okay => "Okay",
            Rating::Good => "Good",
            Rating::Great => "Great",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "needs work" => Some(Rating::NeedsWork),
            "okay" => Some(Rating::Okay),
            "good" => Some(Rating::Good),
            "great" => Some(Rating::Great),
            _ => None,
        }
    }

    /// Contribution of one section to the overall score, in percent.
    pub fn score_bonus(&self) -> u32 {
        match self {
            Rating::NeedsWork => 0,
            Rating::Okay => 5,
            Rating::Good => 10,
            Rating::Great => 15,
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Rating::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown rating: {}", value)))
    }
}

impl FeedbackReport {
    pub const BASE_SCORE: u32 = 55;

    /// Parses the model's JSON reply, tolerating a surrounding code fence.
    pub fn from_model_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(strip_code_fence(raw.trim()))
    }

    /// Base 55%, each section adds its rating bonus, capped at 100%.
    pub fn overall_score(&self) -> u32 {
        let bonus: u32 = self.sections.iter().map(|s| s.rating.score_bonus()).sum();
        (Self::BASE_SCORE + bonus).min(100)
    }

    /// The model's date when it parses, otherwise today.
    pub fn report_date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.date_iso, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive())
    }

    pub fn document_filename(&self) -> String {
        let advisor = slugify(&self.advisor_name);
        let advisor = if advisor.is_empty() {
            "advisor".to_string()
        } else {
            advisor
        };
        format!("fix_my_call_{}_{}.docx", advisor, self.report_date())
    }
}

fn strip_code_fence(text: &str) -> &str {
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_separator = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    slug.trim_end_matches('_').to_string()
}
