//! HTML rendering with comrak.
//!
//! The renderer is a collaborator of the pipeline, not part of it: it gets
//! the normalized text unmodified, whatever the validator reported.

use comrak::{Options, markdown_to_html};

/// Render normalized markdown to an HTML fragment.
pub fn render_html(text: &str) -> String {
    let _scope = crate::perf::scope("render.html");
    let mut options = Options::default();
    configure_options(&mut options);
    markdown_to_html(text, &options)
}

/// Render normalized markdown as a standalone HTML page.
pub fn render_page(text: &str, title: &str) -> String {
    let body = render_html(text);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="generator" content="markprep">
<title>{title}</title>
</head>
<body>
<article class="markdown-body">
{body}</article>
</body>
</html>
"#,
        title = html_escape(title),
    )
}

fn configure_options(options: &mut Options) {
    // GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    options.extension.header_ids = Some(String::new());

    // Single newlines become <br>, raw HTML passes through
    options.render.hardbreaks = true;
    options.render.unsafe_ = true;
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table() {
        let html = render_html("| a | b |\n| - | - |\n| 1 | 2 |");
        assert!(html.contains("<table>"), "{html}");
        assert!(html.contains("<td>1</td>"), "{html}");
    }

    #[test]
    fn test_single_newline_renders_as_break() {
        let html = render_html("line1\nline2");
        assert!(html.contains("<br />"), "{html}");
    }

    #[test]
    fn test_headings_get_ids() {
        let html = render_html("# Hello World");
        assert!(html.contains(r#"id="hello-world""#), "{html}");
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_html("<div class=\"note\">hi</div>");
        assert!(html.contains("<div class=\"note\">hi</div>"), "{html}");
    }

    #[test]
    fn test_strikethrough() {
        assert!(render_html("~~gone~~").contains("<del>gone</del>"));
    }

    #[test]
    fn test_page_wraps_fragment_and_escapes_title() {
        let page = render_page("# Hi", "a <b> & c");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a &lt;b&gt; &amp; c</title>"));
        assert!(page.contains("Hi</h1>"), "{page}");
    }
}
