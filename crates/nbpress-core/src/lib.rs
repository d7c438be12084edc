//! # nbpress-core
//!
//! Notebook-to-markup conversion pipeline for nbpress.
//!
//! This crate parses Jupyter notebooks (nbformat 4.x) into an ordered cell
//! model and deterministically projects it into styled markup, cell by
//! cell:
//! - Markdown cells pass through a restricted inline markup translator
//! - Code cells are escaped verbatim, never markup-translated
//! - Outputs are normalized to one textual representation each, or dropped
//!
//! The two terminal renderers (full-fidelity HTML, markup-to-PDF) sit
//! behind the [`HtmlEngine`] and [`PdfEngine`] traits; production
//! implementations live in the `nbpress-html` and `nbpress-pdf` crates.
//!
//! ## Example
//!
//! ```
//! use nbpress_core::{assemble, read_notebook_str};
//!
//! let notebook = read_notebook_str(r##"{
//!     "nbformat": 4,
//!     "nbformat_minor": 5,
//!     "metadata": {},
//!     "cells": [
//!         {
//!             "id": "cell-1",
//!             "cell_type": "markdown",
//!             "metadata": {},
//!             "source": ["# Hello"]
//!         }
//!     ]
//! }"##)?;
//!
//! let document = assemble(&notebook);
//! assert!(document.to_markup().contains("<h1>Hello</h1>"));
//! # Ok::<(), nbpress_core::NbpressError>(())
//! ```

/// Document assembler producing the simplified fragment sequence
pub mod assemble;
/// Conversion facade over reader, assembler and engines
pub mod converter;
/// Format engine contracts
pub mod engine;
/// Error types for conversion operations
pub mod error;
/// Markup escaping for code and output text
pub mod escape;
/// Output normalizer
pub mod normalize;
/// In-memory cell model
pub mod notebook;
/// Notebook byte/JSON reader
pub mod reader;
/// Inline markup translator for narrative cells
pub mod translate;

pub use assemble::{assemble, AssembledDocument, Fragment, FragmentKind};
pub use converter::{output_filename, NotebookConverter, OutputFormat};
pub use engine::{HtmlEngine, PdfEngine};
pub use error::{NbpressError, Result};
pub use escape::escape_text;
pub use normalize::normalize_output;
pub use notebook::{Cell, Notebook, Output};
pub use reader::{read_notebook, read_notebook_file, read_notebook_str};
pub use translate::translate_markdown;
