use std::path::PathBuf;

/// Convenience result type used across lottie-grade.
pub type LottieGradeResult<T> = Result<T, LottieGradeError>;

/// Errors raised by the document and configuration layers.
///
/// Grading itself never fails; unrecognized color shapes are left untouched.
#[derive(thiserror::Error, Debug)]
pub enum LottieGradeError {
    /// Opening, reading or writing a file failed.
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Input bytes are not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// Encoding the document back to JSON failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A grading preset could not be interpreted.
    #[error("config error: {0}")]
    Config(String),
}

impl LottieGradeError {
    /// Build a [`LottieGradeError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`LottieGradeError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`LottieGradeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LottieGradeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
