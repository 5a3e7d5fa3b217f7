//! On-page SEO audit over raw markup.
//!
//! The markup is never parsed into a DOM. A [`MarkupScan`] pulls the few
//! facts the rules need out of the text with patterns, so broken or non-HTML
//! input simply yields "missing" facts. Each [`AuditRule`] then turns those
//! facts into at most one issue and a score penalty.

use crate::core::load_time::SimulatedLoadTime;
use crate::domain::model::{AuditDetails, AuditIssue, IssueKind, SeoAuditResult};
use crate::domain::ports::LoadTimeSource;
use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[^>]*>([^<]+)</title>").unwrap());
static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*name=["']description["'][^>]*content=["']([^"']*)["'][^>]*>"#)
        .unwrap()
});
static H1_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>").unwrap());
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").unwrap());
static ANCHOR_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<a[^>]*>").unwrap());
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)href=["']([^"']*)["']"#).unwrap());
static EXTERNAL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:http|https|mailto|tel):").unwrap());
static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:\w+:)?//").unwrap());

pub const STARTING_SCORE: i32 = 100;

const TITLE_MIN_CHARS: usize = 30;
const TITLE_MAX_CHARS: usize = 60;
const DESCRIPTION_MIN_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 160;
const SLOW_LOAD_SECONDS: f64 = 2.0;

/// Facts extracted from one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupScan<'a> {
    /// Text of the first non-empty `<title>`.
    pub title: Option<&'a str>,
    /// `content` of the first description meta tag, possibly empty.
    pub meta_description: Option<&'a str>,
    pub h1_count: usize,
    pub img_count: usize,
    pub img_alt_missing: usize,
    pub internal_links: usize,
}

impl<'a> MarkupScan<'a> {
    pub fn scan(html: &'a str) -> Self {
        let title = TITLE
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        let meta_description = META_DESCRIPTION
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        let mut img_count = 0;
        let mut img_alt_missing = 0;
        for img in IMG_TAG.find_iter(html) {
            img_count += 1;
            if !img.as_str().contains("alt=") {
                img_alt_missing += 1;
            }
        }

        let internal_links = ANCHOR_TAG
            .find_iter(html)
            .filter(|tag| {
                HREF.captures_iter(tag.as_str())
                    .any(|caps| !EXTERNAL_SCHEME.is_match(&caps[1]))
            })
            .count();

        Self {
            title,
            meta_description,
            h1_count: H1_TAG.find_iter(html).count(),
            img_count,
            img_alt_missing,
            internal_links,
        }
    }

    pub fn details(&self) -> AuditDetails {
        AuditDetails {
            meta_title: self.title.is_some(),
            meta_desc: self.meta_description.is_some(),
            h1_count: self.h1_count,
            img_alt_missing: self.img_alt_missing,
            internal_links: self.internal_links,
        }
    }
}

/// What the rules look at: the scanned markup plus the simulated timing.
#[derive(Debug, Clone)]
pub struct PageFacts<'a> {
    pub markup: MarkupScan<'a>,
    pub load_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub issue: AuditIssue,
    pub penalty: i32,
}

impl RuleOutcome {
    fn pass(issue: AuditIssue) -> Self {
        Self { issue, penalty: 0 }
    }

    fn fail(issue: AuditIssue, penalty: i32) -> Self {
        Self { issue, penalty }
    }
}

pub trait AuditRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// `None` when the rule has nothing to report for this page.
    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome>;
}

pub struct TitleRule;

impl AuditRule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome> {
        let Some(title) = page.markup.title else {
            return Some(RuleOutcome::fail(
                AuditIssue::new(IssueKind::Error, "Missing Title", "No <title> tag found.")
                    .with_recommendation(
                        "Add a <title> tag within the <head> section of your HTML.",
                    ),
                20,
            ));
        };

        let len = title.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
            return Some(RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Warning,
                    "Title Length",
                    format!("Title is {} chars. Optimal is 30-60.", len),
                )
                .with_recommendation("Shorten or lengthen your title tag to ensure it displays fully in search results without being cut off."),
                5,
            ));
        }

        Some(RuleOutcome::pass(AuditIssue::new(
            IssueKind::Success,
            "Title Tag",
            "Perfect length.",
        )))
    }
}

pub struct MetaDescriptionRule;

impl AuditRule for MetaDescriptionRule {
    fn name(&self) -> &'static str {
        "meta-description"
    }

    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome> {
        // an empty content attribute counts as missing
        let description = page.markup.meta_description.filter(|d| !d.is_empty());
        let Some(description) = description else {
            return Some(RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Error,
                    "Missing Meta Description",
                    "No meta description found.",
                )
                .with_recommendation("Add a <meta name='description'> tag to summarize your page for search engines and improve CTR."),
                20,
            ));
        };

        let len = description.chars().count();
        if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
            return Some(RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Warning,
                    "Meta Description Length",
                    format!("Description is {} chars. Optimal is 120-160.", len),
                )
                .with_recommendation(
                    "Adjust description length. Too short fails to engage; too long gets truncated.",
                ),
                5,
            ));
        }

        Some(RuleOutcome::pass(AuditIssue::new(
            IssueKind::Success,
            "Meta Description",
            "Perfect length.",
        )))
    }
}

pub struct HeadingRule;

impl AuditRule for HeadingRule {
    fn name(&self) -> &'static str {
        "h1"
    }

    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome> {
        let outcome = match page.markup.h1_count {
            0 => RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Error,
                    "Missing H1",
                    "No H1 tag found. Each page needs one main heading.",
                )
                .with_recommendation(
                    "Add exactly one <h1> tag that describes the main topic of the page.",
                ),
                15,
            ),
            1 => RuleOutcome::pass(AuditIssue::new(
                IssueKind::Success,
                "H1 Tag",
                "One H1 tag found.",
            )),
            count => RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Warning,
                    "Multiple H1s",
                    format!("Found {} H1 tags. Use only one per page.", count),
                )
                .with_recommendation(
                    "Use only one <h1> tag for the main title, and use <h2>-<h6> for subsections.",
                ),
                10,
            ),
        };
        Some(outcome)
    }
}

pub struct ImageAltRule;

impl AuditRule for ImageAltRule {
    fn name(&self) -> &'static str {
        "image-alt"
    }

    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome> {
        let missing = page.markup.img_alt_missing;
        if missing > 0 {
            return Some(RuleOutcome::fail(
                AuditIssue::new(
                    IssueKind::Warning,
                    "Missing Alt Text",
                    format!("{} images are missing alt text.", missing),
                )
                .with_recommendation("Add descriptive 'alt' attributes to all <img> tags to improve accessibility and image SEO."),
                missing as i32 * 2,
            ));
        }

        if page.markup.img_count == 0 {
            return None;
        }

        Some(RuleOutcome::pass(AuditIssue::new(
            IssueKind::Success,
            "Image Alt Text",
            "All images have alt text.",
        )))
    }
}

pub struct PageSpeedRule;

impl AuditRule for PageSpeedRule {
    fn name(&self) -> &'static str {
        "page-speed"
    }

    fn evaluate(&self, page: &PageFacts<'_>) -> Option<RuleOutcome> {
        if page.load_time <= SLOW_LOAD_SECONDS {
            return None;
        }

        Some(RuleOutcome::fail(
            AuditIssue::new(
                IssueKind::Warning,
                "Page Speed",
                format!("Estimated load time {}s is slow.", page.load_time),
            )
            .with_recommendation("Optimize images, minify CSS/JS files, and leverage browser caching to reduce load time."),
            10,
        ))
    }
}

/// Rules in the order their issues are reported.
pub fn default_rules() -> Vec<Box<dyn AuditRule>> {
    vec![
        Box::new(TitleRule),
        Box::new(MetaDescriptionRule),
        Box::new(HeadingRule),
        Box::new(ImageAltRule),
        Box::new(PageSpeedRule),
    ]
}

pub struct SeoAuditor {
    rules: Vec<Box<dyn AuditRule>>,
}

impl Default for SeoAuditor {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl SeoAuditor {
    pub fn new(rules: Vec<Box<dyn AuditRule>>) -> Self {
        Self { rules }
    }

    pub fn audit(&self, html: &str, load_time: &dyn LoadTimeSource) -> SeoAuditResult {
        let page = PageFacts {
            markup: MarkupScan::scan(html),
            load_time: load_time.sample_seconds(),
        };

        let mut score = STARTING_SCORE;
        let mut issues = Vec::new();
        for rule in &self.rules {
            if let Some(outcome) = rule.evaluate(&page) {
                tracing::trace!(
                    rule = rule.name(),
                    kind = ?outcome.issue.kind,
                    penalty = outcome.penalty,
                    "audit rule fired"
                );
                score -= outcome.penalty;
                issues.push(outcome.issue);
            }
        }

        SeoAuditResult {
            score: score.max(0),
            load_time: page.load_time,
            issues,
            details: page.markup.details(),
        }
    }
}

pub fn analyze_seo_html(html: &str) -> SeoAuditResult {
    analyze_seo_html_with(html, &SimulatedLoadTime)
}

pub fn analyze_seo_html_with(html: &str, load_time: &dyn LoadTimeSource) -> SeoAuditResult {
    SeoAuditor::default().audit(html, load_time)
}

/// Demo page standing in for a fetched URL; nothing is downloaded.
pub fn simulated_page_for_url(url: &str) -> String {
    let host = URL_SCHEME.replace(url, "");
    format!(
        r#"
<html>
    <head>
        <title>{host} - Official Site</title>
        <meta name="description" content="Welcome to the official website. We provide excellent services for our customers worldwide.">
    </head>
    <body>
        <h1>Welcome to {url}</h1>
        <img src="logo.png" alt="Company Logo">
        <img src="hero.jpg">
        <p>Some content here.</p>
    </body>
</html>
"#
    )
}
