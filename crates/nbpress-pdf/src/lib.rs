//! # nbpress-pdf
//!
//! Markup-to-PDF rasterizer for nbpress assembled documents.
//!
//! This is the terminal renderer of the PDF conversion path. It consumes
//! the assembler's serialized markup (a restricted tag set: headings,
//! paragraphs and preformatted cell/output blocks), flattens it into
//! styled text blocks, and lays those out onto A4 pages with the PDF
//! built-in fonts. Inline emphasis is flattened to plain text; PDF output
//! trades typographic fidelity for simplicity by design of the markup it
//! is handed.

use nbpress_core::{PdfEngine, Result};
use once_cell::sync::Lazy;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use scraper::{ElementRef, Html, Selector};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body > div").expect("cell selector is valid"));

/// Visual class of one flattened text block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStyle {
    /// Heading level 1 to 6
    Heading(u8),
    /// Narrative paragraph text
    Body,
    /// Code or output text; spacing is significant
    Preformatted,
}

impl BlockStyle {
    fn font_size(self) -> f32 {
        match self {
            Self::Heading(1) => 20.0,
            Self::Heading(2) => 17.0,
            Self::Heading(3) => 15.0,
            Self::Heading(4) => 13.5,
            Self::Heading(5) => 12.5,
            Self::Heading(_) => 11.5,
            Self::Body => 11.0,
            Self::Preformatted => 9.5,
        }
    }

    fn line_height_mm(self) -> f32 {
        self.font_size() * 1.35 * PT_TO_MM
    }

    fn spacing_after_mm(self) -> f32 {
        match self {
            Self::Heading(_) => 2.0,
            Self::Body => 2.5,
            Self::Preformatted => 3.5,
        }
    }

    // Approximate advance width per character, as a fraction of the font
    // size. Courier is fixed at 0.6; 0.52 over-estimates Helvetica enough
    // to keep wrapped lines inside the text area.
    fn char_width_factor(self) -> f32 {
        match self {
            Self::Preformatted => 0.6,
            Self::Heading(_) | Self::Body => 0.52,
        }
    }

    fn max_chars_per_line(self) -> usize {
        let usable_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let char_mm = self.font_size() * self.char_width_factor() * PT_TO_MM;
        ((usable_mm / char_mm).floor() as usize).max(8)
    }
}

/// One paragraph-level run of text carrying a single style
#[derive(Debug, Clone, PartialEq, Eq)]
struct TextBlock {
    style: BlockStyle,
    text: String,
}

/// PDF rasterizer for the assembler's restricted markup
///
/// # Examples
///
/// ```
/// use nbpress_core::PdfEngine;
/// use nbpress_pdf::MarkupPdfEngine;
///
/// let engine = MarkupPdfEngine::new();
/// let bytes = engine.render("<html><body></body></html>")?;
/// assert!(bytes.starts_with(b"%PDF"));
/// # Ok::<(), nbpress_core::NbpressError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPdfEngine;

impl MarkupPdfEngine {
    /// Create a new rasterizer instance
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PdfEngine for MarkupPdfEngine {
    fn render(&self, markup: &str) -> Result<Vec<u8>> {
        let blocks = extract_blocks(markup);
        log::debug!("rasterizing {} text blocks", blocks.len());
        render_blocks(&blocks)
    }
}

/// Flatten the restricted markup into styled text blocks, in order
fn extract_blocks(markup: &str) -> Vec<TextBlock> {
    let dom = Html::parse_document(markup);
    let mut blocks = Vec::new();

    for element in dom.select(&CELL_SELECTOR) {
        let class = element.value().attr("class").unwrap_or("");
        if class.contains("code-cell") || class.contains("output") {
            let text: String = element.text().collect();
            blocks.push(TextBlock {
                style: BlockStyle::Preformatted,
                text: text.trim_end_matches('\n').to_string(),
            });
        } else {
            collect_markdown_blocks(&element, &mut blocks);
        }
    }

    blocks
}

fn collect_markdown_blocks(cell: &ElementRef<'_>, blocks: &mut Vec<TextBlock>) {
    for child in cell.children() {
        if let Some(element) = ElementRef::wrap(child) {
            let style = match element.value().name() {
                "h1" => BlockStyle::Heading(1),
                "h2" => BlockStyle::Heading(2),
                "h3" => BlockStyle::Heading(3),
                "h4" => BlockStyle::Heading(4),
                "h5" => BlockStyle::Heading(5),
                "h6" => BlockStyle::Heading(6),
                _ => BlockStyle::Body,
            };
            let text: String = element.text().collect();
            let text = text.trim();
            if !text.is_empty() {
                blocks.push(TextBlock {
                    style,
                    text: text.to_string(),
                });
            }
        } else if let Some(text) = child.value().as_text() {
            // Loose text directly under the cell container
            let text = text.trim();
            if !text.is_empty() {
                blocks.push(TextBlock {
                    style: BlockStyle::Body,
                    text: text.to_string(),
                });
            }
        }
    }
}

fn render_blocks(blocks: &[TextBlock]) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Converted notebook",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| nbpress_core::NbpressError::RendererError(format!("font load failed: {e}")))?;
    let heading_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| nbpress_core::NbpressError::RendererError(format!("font load failed: {e}")))?;
    let mono_font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| nbpress_core::NbpressError::RendererError(format!("font load failed: {e}")))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;

    for block in blocks {
        let font = match block.style {
            BlockStyle::Heading(_) => &heading_font,
            BlockStyle::Body => &body_font,
            BlockStyle::Preformatted => &mono_font,
        };
        let line_height = block.style.line_height_mm();

        for line in wrap_lines(&block.text, block.style) {
            if cursor_mm - line_height < MARGIN_MM {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                layer = doc.get_page(page).get_layer(layer_index);
                cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            cursor_mm -= line_height;
            layer.use_text(line, block.style.font_size(), Mm(MARGIN_MM), Mm(cursor_mm), font);
        }
        cursor_mm -= block.style.spacing_after_mm();
    }

    doc.save_to_bytes()
        .map_err(|e| nbpress_core::NbpressError::RendererError(format!("pdf generation failed: {e}")))
}

/// Wrap one block's text to the page width
///
/// Body and heading text wraps greedily on spaces; preformatted text is
/// hard-broken so indentation survives.
fn wrap_lines(text: &str, style: BlockStyle) -> Vec<String> {
    let max_chars = style.max_chars_per_line();
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        match style {
            BlockStyle::Preformatted => wrap_hard(raw, max_chars, &mut lines),
            BlockStyle::Heading(_) | BlockStyle::Body => wrap_words(raw, max_chars, &mut lines),
        }
    }
    lines
}

fn wrap_hard(raw: &str, max_chars: usize, lines: &mut Vec<String>) {
    let chars: Vec<char> = raw.chars().collect();
    if chars.is_empty() {
        lines.push(String::new());
        return;
    }
    for chunk in chars.chunks(max_chars) {
        lines.push(chunk.iter().collect());
    }
}

fn wrap_words(raw: &str, max_chars: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in raw.split(' ') {
        let mut word = word.to_string();
        let mut word_len = word.chars().count();

        // Hard-break words that cannot fit on any line
        while word_len > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let head: String = word.chars().take(max_chars).collect();
            let tail: String = word.chars().skip(max_chars).collect();
            lines.push(head);
            word = tail;
            word_len = word.chars().count();
        }

        let sep = usize::from(current_len > 0);
        if current_len + sep + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(&word);
            current_len = word_len;
        } else {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(&word);
            current_len += sep + word_len;
        }
    }

    lines.push(current);
}
