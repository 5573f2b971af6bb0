//! Full-page assembly. Every panel arrives as its own `Result`; a
//! failed panel renders as an inline error in its slot and never
//! blocks a sibling.

use uuid::Uuid;

use crate::errors::PanelError;
use crate::models::ChatMessage;
use crate::render::html::{error_block, escape_text, info_block, placeholder_block};

/// Scroll height shared by the PDF and table panels.
pub const PANEL_MAX_HEIGHT: u32 = 800;

pub const BI_EMBED_WIDTH: u32 = 1000;
pub const BI_EMBED_HEIGHT: u32 = 900;

pub fn panel_or_error(result: Result<String, PanelError>) -> String {
    match result {
        Ok(body) => body,
        Err(error) => error_block(&error.to_string()),
    }
}

pub struct DashboardView {
    pub briefing_pdf: Result<String, PanelError>,
    pub presentation_pdf: Result<String, PanelError>,
    pub engagement_pdf: Result<String, PanelError>,
    /// The headlines panel degrades internally, so it is always a table.
    pub news_table: String,
    pub bi_embed_url: String,
    pub positions_title: String,
    pub positions_panel: Result<String, PanelError>,
    pub session: Uuid,
    pub transcript_tail: Vec<ChatMessage>,
}

fn chat_panel(session: Uuid, transcript_tail: &[ChatMessage]) -> String {
    let history: String = transcript_tail
        .iter()
        .map(|entry| {
            format!(
                "<p><strong>{}:</strong> {}</p>",
                entry.sender,
                escape_text(&entry.text)
            )
        })
        .collect();
    format!(
        r#"{info}
<form method="post" action="/chat">
  <input type="hidden" name="session" value="{session}"/>
  <input type="text" name="message" placeholder="Ask a question or give a command:"/>
  <button type="submit">Send</button>
</form>
<div>{history}</div>
<p style="color:#888;font-size:smaller;">To connect this chatbot to a model or an automation flow, add the integration in place of the placeholder response.</p>"#,
        info = info_block("Chatbot: Query the data or direct automation below."),
    )
}

pub fn dashboard_page(view: DashboardView) -> String {
    let bi_note = info_block(
        "Embedded Power BI dashboard below. You may need to be logged in to Power BI in your browser for it to display.",
    );
    let salesforce_note = info_block("Salesforce data will appear here. [Placeholder]");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Investment Team Briefing Dashboard</title>
<style>
body {{ font-family: sans-serif; margin: 24px; }}
.row {{ display: flex; gap: 16px; margin-bottom: 24px; }}
.col {{ flex: 1; min-width: 0; }}
.col-wide {{ flex: 2; min-width: 0; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ddd; padding: 4px 8px; text-align: left; }}
</style>
</head>
<body>
<h1>Investment Team Briefing Dashboard</h1>
<div class="row">
  <div class="col"><h2>Meeting Briefing</h2>{briefing}</div>
  <div class="col"><h2>Presentation materials</h2>{presentation}</div>
</div>
<div class="row">
  <div class="col"><h2>Recent Engagements</h2>{engagement}</div>
  <div class="col"><h2>In the headlines</h2>{news}</div>
</div>
<hr/>
<h2>Competitor Data</h2>
<div class="row">
  <div class="col-wide">{bi_note}<iframe src="{bi_url}" width="{bi_width}" height="{bi_height}" frameborder="0"></iframe></div>
  <div class="col">{chat}</div>
</div>
<div class="row">
  <div class="col"><h2>{positions_title}</h2>{positions}</div>
  <div class="col"><h2>Salesforce Data (TBC)</h2>{salesforce_note}{salesforce}</div>
</div>
</body>
</html>"#,
        briefing = panel_or_error(view.briefing_pdf),
        presentation = panel_or_error(view.presentation_pdf),
        engagement = panel_or_error(view.engagement_pdf),
        news = view.news_table,
        bi_note = bi_note,
        bi_url = view.bi_embed_url,
        bi_width = BI_EMBED_WIDTH,
        bi_height = BI_EMBED_HEIGHT,
        chat = chat_panel(view.session, &view.transcript_tail),
        positions_title = view.positions_title,
        positions = panel_or_error(view.positions_panel),
        salesforce_note = salesforce_note,
        salesforce = placeholder_block(PANEL_MAX_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatSender, ChatMessage};

    fn view() -> DashboardView {
        DashboardView {
            briefing_pdf: Ok("<div>briefing</div>".to_string()),
            presentation_pdf: Err(PanelError::Pdf("no such file".to_string())),
            engagement_pdf: Ok("<div>engagement</div>".to_string()),
            news_table: "<table></table>".to_string(),
            bi_embed_url: "https://app.powerbi.com/reportEmbed?reportId=r&autoAuth=true&ctid=t"
                .to_string(),
            positions_title: "Jasmine Data: Top 10 Positions".to_string(),
            positions_panel: Ok("<table>positions</table>".to_string()),
            session: Uuid::nil(),
            transcript_tail: vec![ChatMessage {
                sender: ChatSender::You,
                text: "hello <script>".to_string(),
            }],
        }
    }

    #[test]
    fn test_failed_panel_shows_inline_error_without_blocking_siblings() {
        let html = dashboard_page(view());
        assert!(html.contains("Could not render PDF: no such file"));
        assert!(html.contains("<div>briefing</div>"));
        assert!(html.contains("<div>engagement</div>"));
        assert!(html.contains("<table>positions</table>"));
    }

    #[test]
    fn test_chat_panel_escapes_user_text_and_carries_session() {
        let html = dashboard_page(view());
        assert!(html.contains("hello &lt;script&gt;"));
        assert!(html.contains(&format!(r#"name="session" value="{}""#, Uuid::nil())));
    }

    #[test]
    fn test_bi_iframe_points_at_embed_url() {
        let html = dashboard_page(view());
        assert!(html.contains(r#"<iframe src="https://app.powerbi.com/reportEmbed?reportId=r"#));
    }
}
