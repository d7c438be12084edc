//! Document assembler: ordered cells to a flat styled fragment sequence
//!
//! The assembler walks the cell sequence once and dispatches each cell to
//! the inline markup translator or the output normalizer. It performs no
//! reordering, deduplication or truncation; fragment order equals cell
//! order, and output fragments follow their code fragment in execution
//! order.

use crate::escape::escape_text;
use crate::normalize::normalize_output;
use crate::notebook::{Cell, Notebook};
use crate::translate::translate_markdown;

/// Origin of a rendered fragment, used purely for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Translated narrative cell
    MarkdownBlock,
    /// Preformatted, escaped source code
    CodeBlock,
    /// Normalized output text
    OutputBlock,
}

/// One styled block of the assembled document
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Origin tag
    pub kind: FragmentKind,
    /// Rendered markup for this block
    pub markup: String,
}

/// The simplified markup document consumed by the PDF path
///
/// Immutable once produced; serialized exactly once via
/// [`AssembledDocument::to_markup`].
#[derive(Debug, Clone, Default)]
pub struct AssembledDocument {
    fragments: Vec<Fragment>,
}

// Fixed shell around the fragment stream. The stylesheet is deliberately
// simple: the PDF rasterizer only has to cope with a restricted markup
// subset.
const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
.cell { margin-bottom: 20px; padding: 10px; }
.code-cell { background-color: #f5f5f5; border: 1px solid #ddd; border-radius: 4px; }
.code-cell pre { margin: 0; white-space: pre-wrap; word-wrap: break-word; font-family: monospace; font-size: 12px; }
.markdown-cell { }
.output { background-color: #fafafa; border-left: 3px solid #ccc; padding: 10px; margin-top: 10px; }
.output pre { margin: 0; white-space: pre-wrap; word-wrap: break-word; }
h1, h2, h3, h4, h5, h6 { color: #333; }
code { background-color: #f0f0f0; padding: 2px 5px; border-radius: 3px; }
</style>
</head>
<body>
"#;

const DOCUMENT_FOOT: &str = "</body></html>";

impl AssembledDocument {
    /// Rendered fragments in document order
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Serialize the document into complete markup, shell included
    ///
    /// An empty notebook serializes to the bare shell; that is a valid
    /// document, not an error.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut markup =
            String::with_capacity(DOCUMENT_HEAD.len() + DOCUMENT_FOOT.len() + self.body_len());
        markup.push_str(DOCUMENT_HEAD);
        for fragment in &self.fragments {
            markup.push_str(&fragment.markup);
            markup.push('\n');
        }
        markup.push_str(DOCUMENT_FOOT);
        markup
    }

    fn body_len(&self) -> usize {
        self.fragments.iter().map(|f| f.markup.len() + 1).sum()
    }
}

/// Assemble the full cell sequence into the simplified document
#[must_use]
pub fn assemble(notebook: &Notebook) -> AssembledDocument {
    let mut fragments = Vec::new();

    for cell in &notebook.cells {
        match cell {
            Cell::Markdown { source } => {
                fragments.push(Fragment {
                    kind: FragmentKind::MarkdownBlock,
                    markup: format!(
                        "<div class=\"cell markdown-cell\">{}</div>",
                        translate_markdown(source)
                    ),
                });
            }
            Cell::Code {
                source, outputs, ..
            } => {
                fragments.push(Fragment {
                    kind: FragmentKind::CodeBlock,
                    markup: format!(
                        "<div class=\"cell code-cell\"><pre>{}</pre></div>",
                        escape_text(source)
                    ),
                });
                for output in outputs {
                    if let Some(text) = normalize_output(output) {
                        fragments.push(Fragment {
                            kind: FragmentKind::OutputBlock,
                            markup: format!("<div class=\"output\"><pre>{text}</pre></div>"),
                        });
                    }
                }
            }
        }
    }

    log::debug!(
        "assembled {} fragments from {} cells",
        fragments.len(),
        notebook.cells.len()
    );
    AssembledDocument { fragments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::Output;
    use crate::reader::read_notebook_str;

    fn markdown_cell(source: &str) -> Cell {
        Cell::Markdown {
            source: source.to_string(),
        }
    }

    fn code_cell(source: &str, outputs: Vec<Output>) -> Cell {
        Cell::Code {
            source: source.to_string(),
            execution_count: None,
            outputs,
        }
    }

    #[test]
    fn test_empty_notebook_yields_bare_shell() {
        let document = assemble(&Notebook::default());
        assert!(document.fragments().is_empty());

        let markup = document.to_markup();
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.ends_with("</body></html>"));
        assert!(!markup.contains("class=\"cell"));
    }

    #[test]
    fn test_fragment_order_follows_cell_order() {
        let notebook = Notebook {
            cells: vec![
                markdown_cell("first"),
                code_cell(
                    "x = 1",
                    vec![
                        Output::Stream {
                            text: "one\n".to_string(),
                        },
                        Output::Stream {
                            text: "two\n".to_string(),
                        },
                    ],
                ),
                markdown_cell("last"),
            ],
            ..Default::default()
        };

        let document = assemble(&notebook);
        let kinds: Vec<FragmentKind> = document.fragments().iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FragmentKind::MarkdownBlock,
                FragmentKind::CodeBlock,
                FragmentKind::OutputBlock,
                FragmentKind::OutputBlock,
                FragmentKind::MarkdownBlock,
            ]
        );
        assert!(document.fragments()[2].markup.contains("one"));
        assert!(document.fragments()[3].markup.contains("two"));
    }

    #[test]
    fn test_code_source_is_escaped_not_translated() {
        let notebook = Notebook {
            cells: vec![code_cell("# not a header <tag>", vec![])],
            ..Default::default()
        };

        let document = assemble(&notebook);
        let markup = &document.fragments()[0].markup;
        assert!(markup.contains("# not a header &lt;tag&gt;"));
        assert!(!markup.contains("<h1>"));
    }

    #[test]
    fn test_unsupported_output_yields_no_fragment() {
        let notebook = Notebook {
            cells: vec![code_cell(
                "raise ValueError",
                vec![Output::Unsupported {
                    kind: "error".to_string(),
                }],
            )],
            ..Default::default()
        };

        let document = assemble(&notebook);
        assert_eq!(document.fragments().len(), 1);
        assert_eq!(document.fragments()[0].kind, FragmentKind::CodeBlock);
    }

    #[test]
    fn test_rich_output_without_plain_text_yields_no_fragment() {
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
                    "source": ["plot()"],
                    "outputs": [
                        {
                            "output_type": "display_data",
                            "data": {
                                "image/png": "aGVsbG8="
                            },
                            "metadata": {}
                        }
                    ]
                }
            ]
        }"#;

        let notebook = read_notebook_str(notebook_json).expect("notebook should parse");
        let document = assemble(&notebook);
        assert_eq!(document.fragments().len(), 1);
        assert_eq!(document.fragments()[0].kind, FragmentKind::CodeBlock);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let notebook_json = r##"{
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {},
            "cells": [
                {
                    "id": "cell-1",
                    "cell_type": "markdown",
                    "metadata": {},
                    "source": ["# Hi\n", "\n", "This is **bold**."]
                },
                {
                    "id": "cell-2",
                    "cell_type": "code",
                    "metadata": {},
                    "execution_count": 1,
                    "source": ["x = 1 < 2"],
                    "outputs": [
                        {
                            "output_type": "stream",
                            "name": "stdout",
                            "text": ["True\n"]
                        }
                    ]
                }
            ]
        }"##;

        let notebook = read_notebook_str(notebook_json).expect("notebook should parse");
        let document = assemble(&notebook);
        let fragments = document.fragments();
        assert_eq!(fragments.len(), 3);

        assert_eq!(fragments[0].kind, FragmentKind::MarkdownBlock);
        assert!(fragments[0].markup.contains("<h1>Hi</h1>"));
        assert!(fragments[0].markup.contains("<strong>bold</strong>"));

        assert_eq!(fragments[1].kind, FragmentKind::CodeBlock);
        assert!(fragments[1].markup.contains("x = 1 &lt; 2"));

        assert_eq!(fragments[2].kind, FragmentKind::OutputBlock);
        assert!(fragments[2].markup.contains("True"));
    }
}
