//! Result rendering for the terminal and the web page.
//!
//! The terminal gets the analysis text exactly as the service returned it.
//! The web page renders it as Markdown, with any raw HTML in the reply
//! demoted to escaped text so model output is displayed, never executed.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::domain::{AnalysisResult, DomainError};

pub const SUCCESS_INDICATOR: &str = "✅ Analysis Complete!";
pub const FAILURE_INDICATOR: &str = "❌ Error:";
pub const WARNING_INDICATOR: &str = "⚠️";
pub const PENDING_MESSAGE: &str = "🔄 Analyzing your query...";

pub fn render_text(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Success { text } => format!("{SUCCESS_INDICATOR}\n\n{text}"),
        AnalysisResult::Failure { message } => format!("{FAILURE_INDICATOR} {message}"),
    }
}

/// Hint shown for a submission rejected before dispatch.
pub fn validation_hint(error: &DomainError) -> String {
    match error {
        DomainError::MissingQuery => "Please enter a SQL query to analyze!".to_string(),
        DomainError::MissingCredential => "Please enter your Groq API key!".to_string(),
        other => other.to_string(),
    }
}

pub fn render_validation_text(error: &DomainError) -> String {
    format!("{WARNING_INDICATOR} {}", validation_hint(error))
}

pub fn render_html(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Success { text } => format!(
            "<div class=\"banner success\">{}</div>\n<div class=\"analysis\">{}</div>",
            SUCCESS_INDICATOR,
            render_markdown(text)
        ),
        AnalysisResult::Failure { message } => format!(
            "<div class=\"banner error\">{} {}</div>",
            FAILURE_INDICATOR,
            escape_html(message)
        ),
    }
}

/// Markdown to HTML. Raw HTML blocks and inline tags come through as text.
pub fn render_markdown(markdown: &str) -> String {
    let mut md_options = Options::empty();
    md_options.insert(Options::ENABLE_TABLES);
    md_options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, md_options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}

pub fn render_validation_html(error: &DomainError) -> String {
    format!(
        "<div class=\"banner warning\">{} {}</div>",
        WARNING_INDICATOR,
        escape_html(&validation_hint(error))
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
