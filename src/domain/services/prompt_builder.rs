/// Opening instruction placed before the user's query.
const PROMPT_HEADER: &str = "You are a SQL expert. Analyze this query:";

/// Sections the model is asked to produce, in order.
pub const ANALYSIS_SECTIONS: [&str; 4] = [
    "Plain English Explanation",
    "Key Operations",
    "Performance Analysis",
    "Optimization Suggestions",
];

const PROMPT_FOOTER: &str = "Be clear and actionable.";

/// Build the analysis prompt for `query_text`.
///
/// The query is inserted verbatim: no trimming, escaping or sanitizing. Same
/// input, same bytes out.
pub fn build_prompt(query_text: &str) -> String {
    let mut prompt = String::with_capacity(query_text.len() + 256);
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str("\n\n");
    prompt.push_str(query_text);
    prompt.push_str("\n\nProvide:\n");
    for (i, section) in ANALYSIS_SECTIONS.iter().enumerate() {
        prompt.push_str(&format!("{}. **{}**\n", i + 1, section));
    }
    prompt.push('\n');
    prompt.push_str(PROMPT_FOOTER);
    prompt
}
