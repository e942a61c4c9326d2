//! Rendering of responses to Telegram-compatible HTML.
//!
//! Telegram HTML supports only a small subset: `<b>`, `<i>`, `<code>`, `<pre>`, `<a href="...">`.

use crate::response::{HelpPayload, ProblemPayload, Response};

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a response. `None` for [`Response::Ignored`].
pub fn render_html(response: &Response) -> Option<String> {
    match response {
        Response::Problem(p) => Some(render_problem(p)),
        Response::Info(i) => Some(escape_html(&i.summary())),
        Response::Help(h) => Some(render_help(h)),
        Response::Message(m) => Some(escape_html(m)),
        Response::Ignored => None,
    }
}

fn render_problem(p: &ProblemPayload) -> String {
    let mut out = String::new();
    if let Some(headline) = &p.headline {
        out.push_str(&format!("<b>{}</b>\n", escape_html(headline)));
    }
    out.push_str(&format!(
        "<a href=\"{}\"><b>{}</b></a>\n{}\n\nFeel free to click the title for more info!",
        escape_html(&p.url),
        escape_html(&p.title),
        escape_html(&p.description()),
    ));
    out
}

fn render_help(h: &HelpPayload) -> String {
    let lines = h
        .entries
        .iter()
        .map(|(usage, desc)| format!("<code>{}</code> - {}", escape_html(usage), escape_html(desc)))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("<b>{}</b>\n\n{lines}", escape_html(&h.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;
    use crate::response::{self, InfoPayload};

    #[test]
    fn escapes_html() {
        assert_eq!(escape_html("<a&b>\""), "&lt;a&amp;b&gt;&quot;");
    }

    #[test]
    fn renders_problem_as_link() {
        let html = render_html(&Response::Problem(ProblemPayload {
            headline: None,
            id: 1,
            title: "Two <Sum>".to_string(),
            url: "https://leetcode.com/problems/two-sum/".to_string(),
            difficulty: Difficulty::Easy,
            tier_phrase: "unlocked/free",
        }))
        .unwrap();
        assert!(html.starts_with(
            "<a href=\"https://leetcode.com/problems/two-sum/\"><b>Two &lt;Sum&gt;</b></a>"
        ));
        assert!(html.contains("Easy difficulty unlocked/free problem."));
    }

    #[test]
    fn renders_headline_first() {
        let html = render_html(&Response::Problem(ProblemPayload {
            headline: Some("Problem of the Day".to_string()),
            id: 1,
            title: "Two Sum".to_string(),
            url: "u".to_string(),
            difficulty: Difficulty::Hard,
            tier_phrase: "locked/paid",
        }))
        .unwrap();
        assert!(html.starts_with("<b>Problem of the Day</b>\n<a href=\"u\">"));
    }

    #[test]
    fn renders_info_help_and_messages() {
        let info = render_html(&Response::Info(InfoPayload {
            total_count: 3,
            free: 2,
            paid: 1,
        }))
        .unwrap();
        assert!(info.contains("total of 3 problems"));

        let help = render_html(&response::help("?")).unwrap();
        assert!(help.starts_with("<b>Usage:</b>"));
        assert!(help.contains("<code>?problem &lt;easy | medium | hard&gt;</code>"));

        let msg = render_html(&Response::Message("a < b".to_string())).unwrap();
        assert_eq!(msg, "a &lt; b");

        assert_eq!(render_html(&Response::Ignored), None);
    }
}
