//! Markdown Rendering
//!
//! Renders learning card bodies with pulldown-cmark, plus:
//! - Highlight syntax: %g%recycle me%g%
//! - Raw HTML in the source is shown as text, never injected

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Highlight codes and their CSS classes
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("g", "hl-green"),  // eco / good practice
    ("r", "hl-red"),    // hazard
    ("y", "hl-yellow"), // caution
];

/// Parse markdown with extensions enabled
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    for event in parser {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Text(text) if contains_highlight(&text) => events.extend(process_highlights(&text)),
            other => events.push(other),
        }
    }
    events
}

fn contains_highlight(text: &str) -> bool {
    HIGHLIGHTS.iter().any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on the earliest highlight marker pair, repeatedly
fn process_highlights(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text.to_string();

    while !remaining.is_empty() {
        let earliest = HIGHLIGHTS
            .iter()
            .filter_map(|(code, class)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *class))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, class)) = earliest else {
            events.push(Event::Text(CowStr::from(remaining)));
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        remaining = remaining[pos + pattern.len()..].to_string();
        if let Some(end_pos) = remaining.find(&pattern) {
            events.push(Event::Html(CowStr::from(format!("<span class=\"{}\">", class))));
            if end_pos > 0 {
                events.push(Event::Text(CowStr::from(remaining[..end_pos].to_string())));
            }
            events.push(Event::Html(CowStr::from("</span>")));
            remaining = remaining[end_pos + pattern.len()..].to_string();
        } else {
            events.push(Event::Text(CowStr::from(pattern)));
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("Hello **world**\n\n- a\n- b");
        assert!(html.contains("<strong>world</strong>"));
        assert!(html.contains("<li>a</li>"));
    }

    #[test]
    fn test_highlight_markers() {
        let html = parse_markdown_inline("Use %g%drop-off points%g% not %r%bins%r%");
        assert_eq!(
            html,
            "Use <span class=\"hl-green\">drop-off points</span> not <span class=\"hl-red\">bins</span>"
        );
    }

    #[test]
    fn test_unclosed_marker_is_literal() {
        assert_eq!(parse_markdown_inline("50%g% off"), "50%g% off");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
