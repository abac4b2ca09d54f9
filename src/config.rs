use crate::foundation::error::{LottieGradeError, LottieGradeResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parameters of the color grade applied to every color field.
///
/// No ranges are enforced. Values outside the recommended ranges extrapolate, and the final
/// contrast and brightness stages clamp every channel into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradeConfig {
    /// Contrast multiplier pivoting around mid-gray; `1.0` is neutral, negative inverts.
    pub contrast: f64,
    /// Additive offset per channel; `[-1, 1]` recommended.
    pub brightness: f64,
    /// Blend factor between luma and the color; `0.0` is grayscale, `1.0` unchanged.
    pub saturation: f64,
    /// Hue rotation in degrees, wrapped modulo 360; `0.0` skips the hue stage.
    pub hue_deg: f64,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            brightness: 0.0,
            saturation: 1.0,
            hue_deg: 0.0,
        }
    }
}

impl GradeConfig {
    /// True when every parameter sits at its neutral value.
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a preset from a JSON reader. Missing fields keep their neutral defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> LottieGradeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LottieGradeError::config(format!("parse grade preset JSON: {e}")))
    }

    /// Parse a preset from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LottieGradeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| LottieGradeError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
