use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
    /// Percentage of all words, rounded to two decimals.
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensityResult {
    pub keywords: Vec<KeywordEntry>,
    pub total_words: usize,
}

/// Reading-ease bands, from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadabilityLabel {
    #[serde(rename = "Very Easy (5th grade)")]
    VeryEasy,
    #[serde(rename = "Easy (6th grade)")]
    Easy,
    #[serde(rename = "Fairly Easy (7th grade)")]
    FairlyEasy,
    #[serde(rename = "Standard (8th-9th grade)")]
    Standard,
    #[serde(rename = "Fairly Difficult (10th-12th grade)")]
    FairlyDifficult,
    #[serde(rename = "Difficult (College)")]
    Difficult,
    #[serde(rename = "Very Difficult (Professional)")]
    VeryDifficult,
}

impl ReadabilityLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy (5th grade)",
            Self::Easy => "Easy (6th grade)",
            Self::FairlyEasy => "Fairly Easy (7th grade)",
            Self::Standard => "Standard (8th-9th grade)",
            Self::FairlyDifficult => "Fairly Difficult (10th-12th grade)",
            Self::Difficult => "Difficult (College)",
            Self::VeryDifficult => "Very Difficult (Professional)",
        }
    }
}

impl std::fmt::Display for ReadabilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Flesch Reading Ease, clamped to 0..=100.
    pub score: u8,
    pub label: ReadabilityLabel,
    /// Flesch-Kincaid grade, floored at 0, one decimal.
    pub grade_level: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub complex_words: usize,
    pub avg_sentence_length: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorEntry {
    pub text: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferrerEntry {
    pub domain: String,
    pub authority: u32,
    pub dofollow_count: u32,
    pub nofollow_count: u32,
}

/// Fabricated link-profile metrics. Not real backlink data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinkData {
    pub domain_authority: u32,
    pub page_authority: u32,
    pub total_backlinks: u32,
    pub referring_domains: u32,
    pub dofollow_ratio: u32,
    pub spam_score: u32,
    pub top_anchors: Vec<AnchorEntry>,
    pub top_referrers: Vec<ReferrerEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub label: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl AuditIssue {
    pub fn new(kind: IssueKind, label: &str, details: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.to_string(),
            details: details.into(),
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = Some(recommendation.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditDetails {
    pub meta_title: bool,
    pub meta_desc: bool,
    pub h1_count: usize,
    pub img_alt_missing: usize,
    pub internal_links: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAuditResult {
    pub score: i32,
    /// Simulated, in seconds.
    pub load_time: f64,
    pub issues: Vec<AuditIssue>,
    pub details: AuditDetails,
}

impl SeoAuditResult {
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagReport {
    pub tags: MetaTags,
    pub title_length: usize,
    pub description_length: usize,
    pub title_too_long: bool,
    pub description_too_long: bool,
    pub snippet: String,
}
