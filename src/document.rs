use crate::foundation::error::{LottieGradeError, LottieGradeResult};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

/// Output formatting for [`write_path`] and [`to_string`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Two-space indented JSON.
    #[default]
    Pretty,
    /// Single-line JSON without whitespace.
    Compact,
}

/// Decode a JSON document from a reader. Object key order is kept as encountered.
pub fn read_reader<R: std::io::Read>(r: R) -> LottieGradeResult<Value> {
    serde_json::from_reader(r).map_err(|e| LottieGradeError::parse(format!("decode JSON: {e}")))
}

/// Decode a JSON document from a file on disk.
#[tracing::instrument]
pub fn read_path(path: &Path) -> LottieGradeResult<Value> {
    let f = File::open(path).map_err(|e| LottieGradeError::io(path, e))?;
    read_reader(BufReader::new(f)).map_err(|e| match e {
        LottieGradeError::Parse(msg) => {
            LottieGradeError::parse(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Encode a document into a writer.
pub fn write_writer<W: std::io::Write>(w: W, doc: &Value, layout: Layout) -> LottieGradeResult<()> {
    let res = match layout {
        Layout::Pretty => serde_json::to_writer_pretty(w, doc),
        Layout::Compact => serde_json::to_writer(w, doc),
    };
    res.map_err(|e| LottieGradeError::serde(format!("encode JSON: {e}")))
}

/// Encode a document into a string.
pub fn to_string(doc: &Value, layout: Layout) -> LottieGradeResult<String> {
    let res = match layout {
        Layout::Pretty => serde_json::to_string_pretty(doc),
        Layout::Compact => serde_json::to_string(doc),
    };
    res.map_err(|e| LottieGradeError::serde(format!("encode JSON: {e}")))
}

/// Encode a document to a file, creating parent directories as needed.
#[tracing::instrument(skip(doc))]
pub fn write_path(path: &Path, doc: &Value, layout: Layout) -> LottieGradeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LottieGradeError::io(parent, e))?;
    }

    let f = File::create(path).map_err(|e| LottieGradeError::io(path, e))?;
    let mut w = BufWriter::new(f);
    write_writer(&mut w, doc, layout)?;
    w.write_all(b"\n")
        .and_then(|()| w.flush())
        .map_err(|e| LottieGradeError::io(path, e))?;

    tracing::debug!(path = %path.display(), "wrote document");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/document/document.rs"]
mod tests;
