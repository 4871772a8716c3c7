//! Console trace of request/response pairs

use colored::Colorize;
use serde_json::Value;

use super::Method;

/// Render one answered exchange
///
/// `raw` is the body text when it was not JSON; it is shown verbatim instead
/// of the message wrapper.
pub fn format_exchange(
    method: Method,
    path: &str,
    status: u16,
    data: &Value,
    raw: Option<&str>,
) -> String {
    let status_text = status.to_string();
    let status_text = match status {
        200..=299 => status_text.green(),
        400..=499 => status_text.yellow(),
        500..=599 => status_text.red(),
        _ => status_text.normal(),
    };

    let body = match raw {
        Some(text) => text.to_string(),
        None => serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()),
    };

    format!(
        "\n📡 {} {}\nStatus: {}\nResponse: {}",
        method.as_str().bold(),
        path,
        status_text,
        body
    )
}

/// Render a request that never got an answer
pub fn format_transport_error(method: Method, path: &str, error: &str) -> String {
    format!(
        "{} {}",
        format!("❌ Error in {} {}:", method, path).red(),
        error
    )
}

/// Render a phase banner
pub fn format_banner(emoji: &str, title: &str) -> String {
    format!(
        "\n{} {}\n{}",
        emoji,
        format!("TESTING {} ENDPOINTS", title).bold(),
        "=".repeat(50)
    )
}
