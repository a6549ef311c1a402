use crate::connector::render::{
    escape_html, render_html, render_validation_html, PENDING_MESSAGE,
};
use crate::domain::{AnalysisResult, DomainError};

/// What the output region shows for one render pass.
#[derive(Debug)]
pub enum PageState {
    /// Nothing submitted yet.
    Idle,
    /// Rejected locally; no request was sent.
    Invalid(DomainError),
    Done(AnalysisResult),
}

const PLACEHOLDER_QUERY: &str = "SELECT u.name, COUNT(o.id) as orders
FROM users u
LEFT JOIN orders o ON u.id = o.user_id
GROUP BY u.id
HAVING COUNT(o.id) > 5";

const SIMPLE_EXAMPLE: &str = "SELECT name, email
FROM customers
WHERE status = 'active'";

const COMPLEX_EXAMPLE: &str = "SELECT
    c.customer_name,
    COUNT(o.order_id) as total_orders,
    SUM(o.amount) as total_spent
FROM customers c
LEFT JOIN orders o ON c.id = o.customer_id
WHERE o.created_at >= '2024-01-01'
GROUP BY c.id, c.customer_name
HAVING COUNT(o.order_id) > 5
ORDER BY total_spent DESC
LIMIT 10";

const IDLE_HINT: &str = "👈 Enter your SQL query and click 'Analyze Query' to get started!";

const STYLE: &str = r#"<style>
  body { margin: 0; font-family: system-ui, sans-serif; color: #262730; display: flex; }
  aside { width: 18rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
  main { flex: 1; padding: 1.5rem 2.5rem; }
  .columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
  textarea { width: 100%; height: 300px; font-family: monospace; box-sizing: border-box; }
  input[type=password] { width: 100%; box-sizing: border-box; }
  button { width: 100%; padding: .6rem; margin-top: .8rem; background: #ff4b4b; color: #fff; border: 0; border-radius: .4rem; font-size: 1rem; cursor: pointer; }
  button:disabled { background: #f7a1a1; cursor: wait; }
  .banner { padding: .8rem 1rem; border-radius: .4rem; margin-bottom: 1rem; }
  .info { background: #e8f1fb; color: #0c4a8a; }
  .success { background: #e6f6ea; color: #17692f; }
  .warning { background: #fff8e1; color: #8a6100; }
  .error { background: #fdecea; color: #9b1c1c; }
  .analysis { overflow-wrap: anywhere; line-height: 1.5; }
  .analysis pre { background: #f6f8fa; padding: .8rem; border-radius: .4rem; overflow-x: auto; }
  .help { font-size: .8rem; color: #6b6f7b; }
  pre.sql { background: #f6f8fa; padding: .8rem; border-radius: .4rem; }
  [hidden] { display: none; }
</style>"#;

/// Disables the button while a request is pending and keeps the API key in
/// this browser tab's session storage, so the server never echoes it back.
const SCRIPT: &str = r#"<script>
  (function () {
    var form = document.getElementById("analyze-form");
    var key = document.getElementById("api_key");
    var saved = sessionStorage.getItem("api_key");
    if (saved && !key.value) { key.value = saved; }
    form.addEventListener("submit", function () {
      sessionStorage.setItem("api_key", key.value);
      var button = document.getElementById("analyze-button");
      button.disabled = true;
      document.getElementById("pending").hidden = false;
    });
  })();
</script>"#;

/// Render the whole page for one request.
///
/// `query` is echoed back into the textarea. The API key is never written
/// into the page.
pub fn render_page(query: &str, state: &PageState, model: &str) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>SQL Query Explainer</title>\n");
    html.push_str(STYLE);
    html.push_str("\n</head>\n<body>\n");

    html.push_str(
        "<aside>\n<h2>⚙️ Settings</h2>\n\
<label for=\"api_key\">Groq API Key:</label>\n\
<input type=\"password\" id=\"api_key\" name=\"api_key\" form=\"analyze-form\" autocomplete=\"off\">\n\
<p class=\"help\">Get your free API key from console.groq.com</p>\n<hr>\n",
    );
    html.push_str(&format!(
        "<h3>About</h3>\n<p class=\"help\">Model: {}</p>\n</aside>\n",
        escape_html(model)
    ));

    html.push_str("<main>\n<h1>🔍 AI-Powered SQL Query Explainer</h1>\n");
    html.push_str(
        "<p>Paste any SQL query and get instant AI analysis with explanations, \
performance insights, and optimization tips.</p>\n",
    );

    html.push_str("<div class=\"columns\">\n<section>\n<h3>📝 Your SQL Query</h3>\n");
    html.push_str("<form id=\"analyze-form\" method=\"post\" action=\"/analyze\">\n");
    html.push_str("<label for=\"query\">Paste your SQL query here:</label>\n");
    html.push_str(&format!(
        "<textarea id=\"query\" name=\"query\" placeholder=\"{}\">\n{}</textarea>\n",
        escape_html(PLACEHOLDER_QUERY),
        escape_html(query)
    ));
    html.push_str(
        "<button type=\"submit\" id=\"analyze-button\">🚀 Analyze Query</button>\n</form>\n</section>\n",
    );

    html.push_str("<section>\n<h3>🤖 AI Analysis</h3>\n");
    html.push_str(&format!(
        "<div id=\"pending\" class=\"banner info\" hidden>{PENDING_MESSAGE}</div>\n"
    ));
    html.push_str(&render_output(state));
    html.push_str("\n</section>\n</div>\n");

    html.push_str("<hr>\n<details>\n<summary>📚 See Example Queries</summary>\n");
    html.push_str(&format!(
        "<h4>Simple Query</h4>\n<pre class=\"sql\">{}</pre>\n",
        escape_html(SIMPLE_EXAMPLE)
    ));
    html.push_str(&format!(
        "<h4>Complex Query</h4>\n<pre class=\"sql\">{}</pre>\n",
        escape_html(COMPLEX_EXAMPLE)
    ));
    html.push_str("</details>\n<hr>\n");
    html.push_str(
        "<p><strong>💡 Pro Tip:</strong> For best results, paste complete SQL queries \
including SELECT, FROM, WHERE, etc.</p>\n</main>\n",
    );

    html.push_str(SCRIPT);
    html.push_str("\n</body>\n</html>\n");
    html
}

fn render_output(state: &PageState) -> String {
    match state {
        PageState::Idle => format!("<div class=\"banner info\">{}</div>", escape_html(IDLE_HINT)),
        PageState::Invalid(error) => render_validation_html(error),
        PageState::Done(result) => render_html(result),
    }
}
