//! Shared HTML building blocks for the dashboard panels.

/// Scrollable container every panel body sits in.
pub fn scrollable(inner: &str, max_height: u32) -> String {
    format!(
        r#"<div style="max-height:{max_height}px;overflow:auto;padding:8px;border:1px solid #ddd;background:#fafafa;">{inner}</div>"#
    )
}

/// Table wrapped in a scrollable container of the given height.
///
/// Cell values are inserted verbatim, so pre-built anchor markup
/// renders as clickable links. Callers shape, sort and escape before
/// the rows get here; nothing is paginated or filtered at render time.
pub fn table_panel(headers: &[&str], rows: &[Vec<String>], max_height: u32) -> String {
    let head: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
    let body: String = rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(|cell| format!("<td>{cell}</td>")).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();
    let table = format!("<table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>");
    scrollable(&table, max_height)
}

pub fn anchor(href: &str, label: &str) -> String {
    format!(r#"<a href="{href}" target="_blank">{label}</a>"#)
}

pub fn warning_block(message: &str) -> String {
    format!(
        r#"<div style="padding:8px;border:1px solid #f0c36d;background:#fff8e1;color:#8a6d3b;">{message}</div>"#
    )
}

pub fn error_block(message: &str) -> String {
    format!(
        r#"<div style="padding:8px;border:1px solid #e57373;background:#fdecea;color:#b71c1c;">{message}</div>"#
    )
}

pub fn info_block(message: &str) -> String {
    format!(
        r#"<div style="padding:8px;border:1px solid #90caf9;background:#e3f2fd;color:#0d47a1;">{message}</div>"#
    )
}

/// Fixed-height "No data" slot for panels that are not wired up yet.
pub fn placeholder_block(height: u32) -> String {
    format!(
        r#"<div style="height:{height}px;width:100%;border:1px solid #ddd;background:#fafafa;display:flex;align-items:center;justify-content:center;"><span style="color:#888;">No data</span></div>"#
    )
}

/// Minimal escaping for user-typed text. Table cells stay verbatim by
/// contract; this is only for content that never carries markup.
pub fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_panel_keeps_anchor_markup_unescaped() {
        let rows = vec![vec![
            "01 Jan 2025".to_string(),
            anchor("https://example.com", "Example"),
            "summary".to_string(),
        ]];
        let html = table_panel(&["Date", "Title/Source", "One-line Summary"], &rows, 800);
        assert!(html.contains(r#"<a href="https://example.com" target="_blank">Example</a>"#));
        assert!(html.contains("<th>Title/Source</th>"));
        assert!(html.contains("max-height:800px"));
    }

    #[test]
    fn test_escape_text_neutralizes_markup() {
        assert_eq!(escape_text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }
}
