//! Plain-text reports for terminal output.

use crate::domain::model::{
    BacklinkData, IssueKind, KeywordDensityResult, MetaTagReport, ReadabilityResult,
    SeoAuditResult,
};
use std::fmt::Write;

pub fn keyword_report(result: &KeywordDensityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total words: {}", result.total_words);
    if result.keywords.is_empty() {
        let _ = writeln!(out, "No significant keywords found.");
        return out;
    }

    let _ = writeln!(out, "{:<24} {:>6} {:>9}", "Keyword", "Count", "Density");
    for entry in &result.keywords {
        let _ = writeln!(
            out,
            "{:<24} {:>6} {:>8.2}%",
            entry.word, entry.count, entry.density
        );
    }
    out
}

pub fn readability_report(result: &ReadabilityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reading ease: {}/100 ({})", result.score, result.label);
    let _ = writeln!(out, "Grade level: {:.1}", result.grade_level);
    let _ = writeln!(
        out,
        "Words: {}  Sentences: {}  Complex words: {}  Avg sentence length: {:.1}",
        result.word_count, result.sentence_count, result.complex_words, result.avg_sentence_length
    );
    for tip in &result.recommendations {
        let _ = writeln!(out, "- {}", tip);
    }
    out
}

pub fn backlink_report(domain: &str, data: &BacklinkData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Backlink profile for {} (demo data)", domain);
    let _ = writeln!(
        out,
        "Domain authority: {}  Page authority: {}  Spam score: {}%",
        data.domain_authority, data.page_authority, data.spam_score
    );
    let _ = writeln!(
        out,
        "Backlinks: {}  Referring domains: {}  Dofollow: {}%",
        data.total_backlinks, data.referring_domains, data.dofollow_ratio
    );
    let _ = writeln!(out, "Top anchors:");
    for anchor in &data.top_anchors {
        let _ = writeln!(out, "  {:<28} {:>3}%", anchor.text, anchor.percent);
    }
    let _ = writeln!(out, "Top referrers:");
    for referrer in &data.top_referrers {
        let _ = writeln!(
            out,
            "  {:<20} DA {:>2}  dofollow {:>3}  nofollow {:>3}",
            referrer.domain, referrer.authority, referrer.dofollow_count, referrer.nofollow_count
        );
    }
    out
}

pub fn audit_report(result: &SeoAuditResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SEO score: {}/100", result.score);
    let _ = writeln!(out, "Estimated load time: {:.2}s", result.load_time);
    for issue in &result.issues {
        let marker = match issue.kind {
            IssueKind::Error => "✗",
            IssueKind::Warning => "!",
            IssueKind::Success => "✓",
        };
        let _ = writeln!(out, "{} {}: {}", marker, issue.label, issue.details);
        if let Some(recommendation) = &issue.recommendation {
            let _ = writeln!(out, "    → {}", recommendation);
        }
    }
    let details = &result.details;
    let _ = writeln!(
        out,
        "Title: {}  Description: {}  H1s: {}  Images without alt: {}  Internal links: {}",
        yes_no(details.meta_title),
        yes_no(details.meta_desc),
        details.h1_count,
        details.img_alt_missing,
        details.internal_links
    );
    out
}

pub fn meta_report(report: &MetaTagReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.snippet);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Title: {}/60{}",
        report.title_length,
        if report.title_too_long { " (too long)" } else { "" }
    );
    let _ = writeln!(
        out,
        "Description: {}/160{}",
        report.description_length,
        if report.description_too_long { " (too long)" } else { "" }
    );
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
