use crate::domain::model::{MetaTagReport, MetaTags};

pub const TITLE_LIMIT: usize = 60;
pub const DESCRIPTION_LIMIT: usize = 160;

impl MetaTags {
    /// Open Graph title/description fall back to the page title/description.
    pub fn resolved(&self) -> MetaTags {
        let mut tags = self.clone();
        if tags.og_title.is_empty() {
            tags.og_title = tags.title.clone();
        }
        if tags.og_description.is_empty() {
            tags.og_description = tags.description.clone();
        }
        tags
    }

    /// Content handed to the suggestion service for the `meta` task.
    pub fn suggestion_prompt(&self) -> String {
        format!("Title: {}\nDesc: {}", self.title, self.description)
    }
}

pub fn render_meta_tags(tags: &MetaTags) -> String {
    format!(
        r#"<!-- SEO Meta Tags -->
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">

<!-- Open Graph / Facebook -->
<meta property="og:type" content="website">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{og_description}">
<meta property="og:image" content="{og_image}">

<!-- Twitter -->
<meta property="twitter:card" content="summary_large_image">
<meta property="twitter:title" content="{og_title}">
<meta property="twitter:description" content="{og_description}">
<meta property="twitter:image" content="{og_image}">"#,
        title = tags.title,
        description = tags.description,
        keywords = tags.keywords,
        og_title = tags.og_title,
        og_description = tags.og_description,
        og_image = tags.og_image,
    )
}

pub fn build_meta_tag_report(tags: &MetaTags) -> MetaTagReport {
    let tags = tags.resolved();
    let title_length = tags.title.chars().count();
    let description_length = tags.description.chars().count();

    MetaTagReport {
        snippet: render_meta_tags(&tags),
        title_length,
        description_length,
        title_too_long: title_length > TITLE_LIMIT,
        description_too_long: description_length > DESCRIPTION_LIMIT,
        tags,
    }
}
