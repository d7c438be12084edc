//! Cell model reader: notebook bytes to the in-memory cell sequence
//!
//! Schema parsing is delegated to the `nbformat` crate (nbformat 4.x JSON);
//! this module only projects the parsed shape into the crate's own model.
//! Raw cells carry nothing renderable in either output format and are
//! dropped here; error outputs are retained as [`Output::Unsupported`] so
//! downstream stages skip them through an explicit match arm.

use crate::error::{NbpressError, Result};
use crate::notebook::{Cell, Notebook, Output};
use nbformat::v4::{Cell as RawCell, Notebook as RawNotebook, Output as RawOutput};
use std::path::Path;

/// Parse a notebook from raw uploaded bytes
///
/// # Errors
///
/// Returns [`NbpressError::InvalidInput`] if the bytes are not UTF-8 or do
/// not decode as the nbformat 4.x schema.
pub fn read_notebook(data: &[u8]) -> Result<Notebook> {
    let content = std::str::from_utf8(data)
        .map_err(|e| NbpressError::InvalidInput(format!("notebook is not valid UTF-8: {e}")))?;
    read_notebook_str(content)
}

/// Parse a notebook from a JSON string
///
/// # Errors
///
/// Returns [`NbpressError::InvalidInput`] if the JSON is malformed or does
/// not match the nbformat 4.x schema.
pub fn read_notebook_str(content: &str) -> Result<Notebook> {
    let raw: RawNotebook = serde_json::from_str(content)
        .map_err(|e| NbpressError::InvalidInput(format!("failed to parse notebook JSON: {e}")))?;

    let title = raw
        .metadata
        .additional
        .get("title")
        .and_then(|v| v.as_str())
        .map(String::from);
    let language = raw.metadata.language_info.as_ref().map(|li| li.name.clone());

    let cells: Vec<Cell> = raw.cells.iter().filter_map(convert_cell).collect();
    log::debug!("read notebook with {} cells", cells.len());

    Ok(Notebook {
        cells,
        title,
        language,
    })
}

/// Parse a notebook from a file path
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content does not
/// decode as a notebook.
pub fn read_notebook_file<P: AsRef<Path>>(path: P) -> Result<Notebook> {
    let data = std::fs::read(path)?;
    read_notebook(&data)
}

fn convert_cell(cell: &RawCell) -> Option<Cell> {
    match cell {
        RawCell::Markdown { source, .. } => Some(Cell::Markdown {
            source: source.join(""),
        }),
        RawCell::Code {
            source,
            execution_count,
            outputs,
            ..
        } => Some(Cell::Code {
            source: source.join(""),
            execution_count: *execution_count,
            outputs: outputs.iter().map(convert_output).collect(),
        }),
        // Raw cells have no rendering in either output format
        RawCell::Raw { .. } => None,
    }
}

fn convert_output(output: &RawOutput) -> Output {
    match output {
        RawOutput::Stream { text, .. } => Output::Stream {
            text: text.0.clone(),
        },
        RawOutput::DisplayData(display_data) => Output::Rich {
            data: display_data.data.clone(),
        },
        RawOutput::ExecuteResult(execute_result) => Output::Rich {
            data: execute_result.data.clone(),
        },
        RawOutput::Error(_) => Output::Unsupported {
            kind: "error".to_string(),
        },
    }
}
