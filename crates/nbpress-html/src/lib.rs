//! # nbpress-html
//!
//! Full-fidelity HTML rendering for notebook models.
//!
//! This is the terminal renderer of the HTML conversion path: it receives
//! the parsed notebook model unmodified and produces a complete, styled,
//! self-contained HTML document. Markdown cells are rendered with a full
//! `CommonMark` parser (unlike the restricted dialect the PDF path uses),
//! code cells keep their execution-count prompts, and outputs render
//! their `text/plain` representation.

use jupyter_protocol::media::MediaType;
use nbpress_core::{escape_text, Cell, HtmlEngine, Notebook, Output, Result};
use pulldown_cmark::{html, Options, Parser};
use std::fmt::Write;

// Notebook-like chrome; kept self-contained so the document needs no
// external assets.
const STYLESHEET: &str = r#"body { font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; background-color: #fff; color: #1a1a1a; }
.notebook { max-width: 860px; margin: 0 auto; padding: 40px 20px; line-height: 1.6; }
.cell { margin-bottom: 18px; }
.input-prompt, .output-prompt { font-family: monospace; font-size: 12px; color: #303f9f; margin-bottom: 2px; }
.output-prompt { color: #d84315; }
.code-cell pre { margin: 0; padding: 10px; background-color: #f7f7f7; border: 1px solid #cfcfcf; border-radius: 3px; white-space: pre-wrap; word-wrap: break-word; }
.code-cell code { font-family: monospace; font-size: 13px; }
.output { padding: 6px 10px; border-left: 3px solid #ccc; background-color: #fafafa; }
.output pre { margin: 0; white-space: pre-wrap; word-wrap: break-word; font-size: 13px; }
.markdown-cell h1, .markdown-cell h2, .markdown-cell h3 { color: #222; }
.markdown-cell code { background-color: #f0f0f0; padding: 2px 5px; border-radius: 3px; }
.markdown-cell table { border-collapse: collapse; }
.markdown-cell th, .markdown-cell td { border: 1px solid #cfcfcf; padding: 4px 10px; }"#;

/// Classic notebook-style HTML renderer
///
/// # Examples
///
/// ```
/// use nbpress_core::{HtmlEngine, Notebook};
/// use nbpress_html::ClassicHtmlEngine;
///
/// let engine = ClassicHtmlEngine::new();
/// let bytes = engine.render(&Notebook::default())?;
/// assert!(String::from_utf8(bytes)?.starts_with("<!DOCTYPE html>"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClassicHtmlEngine {
    options: Options,
}

impl ClassicHtmlEngine {
    /// Create an engine with tables and strikethrough enabled
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }

    fn render_markdown_cell(&self, out: &mut String, source: &str) {
        out.push_str("<div class=\"cell markdown-cell\">\n");
        let parser = Parser::new_ext(source, self.options);
        html::push_html(out, parser);
        out.push_str("</div>\n");
    }

    fn render_code_cell(
        out: &mut String,
        source: &str,
        execution_count: Option<i32>,
        outputs: &[Output],
        language: &str,
    ) {
        out.push_str("<div class=\"cell code-cell\">\n");
        match execution_count {
            Some(count) => {
                let _ = write!(out, "<div class=\"input-prompt\">In&nbsp;[{count}]:</div>\n");
            }
            None => out.push_str("<div class=\"input-prompt\">In&nbsp;[&nbsp;]:</div>\n"),
        }
        let _ = write!(
            out,
            "<pre><code class=\"language-{language}\">{}</code></pre>\n",
            escape_text(source)
        );
        for output in outputs {
            Self::render_output(out, output);
        }
        out.push_str("</div>\n");
    }

    fn render_output(out: &mut String, output: &Output) {
        let text = match output {
            Output::Stream { text } => Some(escape_text(text)),
            Output::Rich { data } => data.content.iter().find_map(|media| match media {
                MediaType::Plain(text) => Some(escape_text(text)),
                _ => None,
            }),
            Output::Unsupported { .. } => None,
        };
        if let Some(text) = text {
            let _ = write!(out, "<div class=\"output\"><pre>{text}</pre></div>\n");
        }
    }
}

impl Default for ClassicHtmlEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlEngine for ClassicHtmlEngine {
    fn render(&self, notebook: &Notebook) -> Result<Vec<u8>> {
        let title = notebook.title.as_deref().unwrap_or("Notebook");
        let language = notebook.language.as_deref().unwrap_or("python");
        log::debug!("rendering {} cells to html", notebook.cells.len());

        let mut body = String::new();
        for cell in &notebook.cells {
            match cell {
                Cell::Markdown { source } => self.render_markdown_cell(&mut body, source),
                Cell::Code {
                    source,
                    execution_count,
                    outputs,
                } => Self::render_code_cell(&mut body, source, *execution_count, outputs, language),
            }
        }

        let document = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{STYLESHEET}\n</style>\n</head>\n<body>\n<div class=\"notebook\">\n{body}</div>\n</body>\n</html>\n",
            escape_text(title)
        );
        Ok(document.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbpress_core::read_notebook_str;

    fn render_to_string(notebook: &Notebook) -> String {
        let bytes = ClassicHtmlEngine::new()
            .render(notebook)
            .expect("rendering should succeed");
        String::from_utf8(bytes).expect("output should be UTF-8")
    }

    #[test]
    fn test_empty_notebook_is_complete_document() {
        let html = render_to_string(&Notebook::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Notebook</title>"));
        assert!(html.contains("</html>"));
        assert!(!html.contains("class=\"cell"));
    }

    #[test]
    fn test_markdown_cell_uses_full_markdown() {
        let notebook = Notebook {
            cells: vec![Cell::Markdown {
                source: "# Title\n\n- first\n- second".to_string(),
            }],
            ..Default::default()
        };
        let html = render_to_string(&notebook);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>second</li>"));
    }

    #[test]
    fn test_code_cell_is_escaped_with_prompt() {
        let notebook = Notebook {
            cells: vec![Cell::Code {
                source: "x = 1 < 2".to_string(),
                execution_count: Some(3),
                outputs: vec![],
            }],
            language: Some("python".to_string()),
            ..Default::default()
        };
        let html = render_to_string(&notebook);
        assert!(html.contains("In&nbsp;[3]:"));
        assert!(html.contains("language-python"));
        assert!(html.contains("x = 1 &lt; 2"));
    }

    #[test]
    fn test_stream_output_rendered() {
        let notebook = Notebook {
            cells: vec![Cell::Code {
                source: "print('hi')".to_string(),
                execution_count: Some(1),
                outputs: vec![Output::Stream {
                    text: "hi\n".to_string(),
                }],
            }],
            ..Default::default()
        };
        let html = render_to_string(&notebook);
        assert!(html.contains("<div class=\"output\"><pre>hi\n</pre></div>"));
    }

    #[test]
    fn test_unsupported_output_skipped() {
        let notebook = Notebook {
            cells: vec![Cell::Code {
                source: "1 / 0".to_string(),
                execution_count: Some(1),
                outputs: vec![Output::Unsupported {
                    kind: "error".to_string(),
                }],
            }],
            ..Default::default()
        };
        let html = render_to_string(&notebook);
        assert!(!html.contains("class=\"output\""));
    }

    #[test]
    fn test_rich_output_renders_plain_text() {
        let notebook_json = r#"{
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {},
            "cells": [
                {
                    "id": "cell-1",
                    "cell_type": "code",
                    "metadata": {},
                    "execution_count": 1,
                    "source": ["2 + 2"],
                    "outputs": [
                        {
                            "output_type": "execute_result",
                            "execution_count": 1,
                            "data": {
                                "text/plain": "4"
                            },
                            "metadata": {}
                        }
                    ]
                }
            ]
        }"#;
        let notebook = read_notebook_str(notebook_json).expect("notebook should parse");
        let html = render_to_string(&notebook);
        assert!(html.contains("<div class=\"output\"><pre>4</pre></div>"));
    }

    #[test]
    fn test_title_from_metadata_is_escaped() {
        let notebook = Notebook {
            title: Some("Q1 <draft>".to_string()),
            ..Default::default()
        };
        let html = render_to_string(&notebook);
        assert!(html.contains("<title>Q1 &lt;draft&gt;</title>"));
    }
}
