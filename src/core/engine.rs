use crate::core::backlinks::generate_mock_backlink_data;
use crate::core::keyword_density::analyze_keyword_density;
use crate::core::load_time::SimulatedLoadTime;
use crate::core::meta_tags::build_meta_tag_report;
use crate::core::readability::analyze_readability;
use crate::core::seo_audit::{simulated_page_for_url, SeoAuditor};
use crate::domain::model::{
    BacklinkData, KeywordDensityResult, MetaTagReport, MetaTags, ReadabilityResult,
    SeoAuditResult,
};
use crate::domain::ports::{LoadTimeSource, SuggestionService, SuggestionTask};

/// Entry point for hosts: every analyzer plus the advisory suggestion call.
/// The analyzers never touch the suggestion service.
pub struct AnalysisEngine<S: SuggestionService> {
    suggestions: S,
    load_time: Box<dyn LoadTimeSource>,
    auditor: SeoAuditor,
}

impl<S: SuggestionService> AnalysisEngine<S> {
    pub fn new(suggestions: S) -> Self {
        Self {
            suggestions,
            load_time: Box::new(SimulatedLoadTime),
            auditor: SeoAuditor::default(),
        }
    }

    pub fn with_load_time(mut self, load_time: impl LoadTimeSource + 'static) -> Self {
        self.load_time = Box::new(load_time);
        self
    }

    pub fn keyword_density(&self, text: &str) -> KeywordDensityResult {
        let result = analyze_keyword_density(text);
        tracing::info!(
            "🔑 Keyword density: {} words, {} keywords",
            result.total_words,
            result.keywords.len()
        );
        result
    }

    pub fn readability(&self, text: &str) -> ReadabilityResult {
        let result = analyze_readability(text);
        tracing::info!(
            "📖 Readability: score {} ({}), grade {}",
            result.score,
            result.label,
            result.grade_level
        );
        result
    }

    pub fn backlinks(&self, domain: &str) -> BacklinkData {
        let data = generate_mock_backlink_data(domain);
        tracing::info!(
            "🔗 Mock backlink profile for {}: DA {}, {} backlinks",
            domain,
            data.domain_authority,
            data.total_backlinks
        );
        data
    }

    pub fn audit_html(&self, html: &str) -> SeoAuditResult {
        tracing::debug!("Auditing {} bytes of markup", html.len());
        let result = self.auditor.audit(html, self.load_time.as_ref());
        tracing::info!(
            "🩺 SEO audit: score {}, {} issues",
            result.score,
            result.issues.len()
        );
        result
    }

    /// Audits the demo page synthesized for `url`; nothing is fetched.
    pub fn audit_url(&self, url: &str) -> SeoAuditResult {
        tracing::debug!("Simulating page for {}", url);
        self.audit_html(&simulated_page_for_url(url))
    }

    pub fn meta_tags(&self, tags: &MetaTags) -> MetaTagReport {
        let report = build_meta_tag_report(tags);
        if report.title_too_long || report.description_too_long {
            tracing::warn!(
                "Meta tags exceed limits (title {} chars, description {} chars)",
                report.title_length,
                report.description_length
            );
        }
        report
    }

    pub async fn suggest(&self, content: &str, task: SuggestionTask) -> String {
        tracing::debug!("Requesting {:?} suggestions", task);
        self.suggestions.suggest(content, task).await
    }

    pub async fn suggest_meta(&self, tags: &MetaTags) -> String {
        self.suggest(&tags.suggestion_prompt(), SuggestionTask::Meta)
            .await
    }
}
