//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::config::HighlightConfig;

/// Markdown renderer with syntax highlighting.
///
/// Holds only immutable syntax and theme tables, so one value can be
/// shared by every load of a build.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Option<Theme>,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &HighlightConfig) -> Self {
        let theme = if config.enable {
            let mut theme_set = ThemeSet::load_defaults();
            let fallback = theme_set.themes.keys().next().cloned();
            match theme_set.themes.remove(&config.theme) {
                Some(theme) => Some(theme),
                None => {
                    tracing::warn!(
                        "Unknown highlight theme '{}', using the first bundled theme",
                        config.theme
                    );
                    fallback.and_then(|name| theme_set.themes.remove(&name))
                }
            }
        } else {
            None
        };

        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            line_numbers: config.line_number,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<Option<String>> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some(lang);
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block.take().flatten();
                    let rendered = self.highlight_code(&code_block_content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(rendered)));
                }
                Event::Text(text) if code_block.is_some() => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight a code block, or escape it when the language is unknown
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let Some(lang) = lang else {
            return format!("<pre><code>{}</code></pre>\n", html_escape(code));
        };

        let highlighted = self.theme.as_ref().and_then(|theme| {
            let syntax = self.find_syntax(lang)?;
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        match highlighted {
            Some(highlighted) if self.line_numbers => {
                self.add_line_numbers(&highlighted, code.lines().count(), lang)
            }
            Some(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ) + "\n",
            None => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>\n",
                html_escape(lang),
                html_escape(code)
            ),
        }
    }

    fn find_syntax(&self, lang: &str) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .filter(|syntax| syntax.name != "Plain Text")
    }

    /// Add a line-number gutter next to highlighted code
    fn add_line_numbers(&self, highlighted: &str, line_count: usize, lang: &str) -> String {
        let gutter = (1..=line_count)
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
            html_escape(lang),
            gutter,
            highlighted
        ) + "\n"
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple HTML escaping
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

    fn plain_renderer() -> MarkdownRenderer {
        MarkdownRenderer::with_options(&HighlightConfig {
            line_number: false,
            ..HighlightConfig::default()
        })
    }

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_highlighted_code_block() {
        let renderer = plain_renderer();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<figure class="highlight rust">"#));
        assert!(html.contains("<span"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_render_line_numbers() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nlet a = 1;\nlet b = 2;\n```");
        assert!(html.contains(r#"<span class="line-number">1</span>"#));
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_unknown_language_is_escaped() {
        let renderer = plain_renderer();
        let html = renderer.render("```no-such-lang\n<b>&</b>\n```");
        assert!(html.contains(r#"<code class="language-no-such-lang">"#));
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_untagged_fence_is_escaped() {
        let renderer = plain_renderer();
        let html = renderer.render("```\nx < y\n```\n\nafter");
        assert!(html.contains("<pre><code>x &lt; y\n</code></pre>"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_highlight_disabled() {
        let renderer = MarkdownRenderer::with_options(&HighlightConfig {
            enable: false,
            ..HighlightConfig::default()
        });
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<code class="language-rust">fn main() {}"#));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = MarkdownRenderer::new();
        let markdown = "# Title\n\n```python\nprint('hi')\n```\n\n![alt](/a.png) text";
        assert_eq!(renderer.render(markdown), renderer.render(markdown));
    }
}
