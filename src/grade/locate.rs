use crate::config::GradeConfig;
use crate::grade::adjust::adjust;
use rayon::prelude::*;
use serde_json::{Map, Number, Value};
use std::ops::{Add, AddAssign};

/// Keys whose `{"k": ...}` value holds a fill, stroke, solid-layer or text line color.
const DIRECT_COLOR_KEYS: [&str; 4] = ["c", "fc", "sc", "lc"];
/// Key whose `{"k": {"k": [...]}}` value holds a flat gradient stop array.
const GRADIENT_KEY: &str = "g";
/// Animated property value, shared by direct colors and gradients.
const VALUE_KEY: &str = "k";
/// Keyframe endpoints that hold an RGBA value.
const KEYFRAME_ENDPOINTS: [&str; 2] = ["s", "e"];

/// Counts of color values rewritten by a grading pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GradeStats {
    /// Static RGBA values under a direct color key.
    pub static_colors: usize,
    /// Keyframe `s`/`e` endpoints under a direct color key.
    pub keyframe_colors: usize,
    /// `[offset, r, g, b]` groups inside gradient stop arrays.
    pub gradient_stops: usize,
}

impl GradeStats {
    /// Total number of triplets adjusted.
    pub fn total(&self) -> usize {
        self.static_colors + self.keyframe_colors + self.gradient_stops
    }
}

impl Add for GradeStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            static_colors: self.static_colors + rhs.static_colors,
            keyframe_colors: self.keyframe_colors + rhs.keyframe_colors,
            gradient_stops: self.gradient_stops + rhs.gradient_stops,
        }
    }
}

impl AddAssign for GradeStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Encoding of the `"k"` value under a direct color key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColorShape {
    /// `[r, g, b]` or `[r, g, b, a, ...]`.
    Static,
    /// `[{"s": rgba, "e": rgba, ...}, ...]`.
    Keyframed,
    Unrecognized,
}

fn classify(k: &Value) -> ColorShape {
    match k.as_array() {
        Some(items) if items.len() >= 3 && items[0].is_number() => ColorShape::Static,
        Some(items) if items.first().is_some_and(Value::is_object) => ColorShape::Keyframed,
        _ => ColorShape::Unrecognized,
    }
}

/// Grade three numeric channel slots in place.
///
/// Returns false and leaves the slots untouched unless all three are numbers.
fn adjust_channels(slots: &mut [Value], cfg: &GradeConfig) -> bool {
    let [r, g, b] = slots else {
        return false;
    };
    let (Some(rv), Some(gv), Some(bv)) = (r.as_f64(), g.as_f64(), b.as_f64()) else {
        return false;
    };

    let (ro, go, bo) = adjust(rv, gv, bv, cfg);
    write_channel(r, ro);
    write_channel(g, go);
    write_channel(b, bo);
    true
}

fn write_channel(slot: &mut Value, x: f64) {
    // Clamped output is always finite; keep the input if that ever stops holding.
    if let Some(n) = Number::from_f64(x) {
        *slot = Value::Number(n);
    }
}

/// Grade an RGBA array in place. Alpha and any trailing elements pass through.
fn adjust_rgba(value: &mut Value, cfg: &GradeConfig) -> bool {
    match value.as_array_mut() {
        Some(items) if items.len() >= 3 => adjust_channels(&mut items[..3], cfg),
        _ => false,
    }
}

/// Grade every complete `[offset, r, g, b]` group; a trailing partial group is left as-is.
fn adjust_gradient(stops: &mut [Value], cfg: &GradeConfig) -> usize {
    let mut adjusted = 0;
    for start in (0..stops.len().saturating_sub(3)).step_by(4) {
        if adjust_channels(&mut stops[start + 1..start + 4], cfg) {
            adjusted += 1;
        }
    }
    adjusted
}

fn grade_color_field(field: &mut Map<String, Value>, cfg: &GradeConfig, stats: &mut GradeStats) {
    let Some(k) = field.get_mut(VALUE_KEY) else {
        return;
    };

    match classify(k) {
        ColorShape::Static => {
            if adjust_rgba(k, cfg) {
                stats.static_colors += 1;
            }
        }
        ColorShape::Keyframed => {
            let Some(frames) = k.as_array_mut() else {
                return;
            };
            for frame in frames.iter_mut().filter_map(Value::as_object_mut) {
                for endpoint in KEYFRAME_ENDPOINTS {
                    if let Some(rgba) = frame.get_mut(endpoint)
                        && adjust_rgba(rgba, cfg)
                    {
                        stats.keyframe_colors += 1;
                    }
                }
            }
        }
        ColorShape::Unrecognized => {}
    }
}

fn grade_gradient_field(field: &mut Map<String, Value>, cfg: &GradeConfig, stats: &mut GradeStats) {
    let stops = field
        .get_mut(VALUE_KEY)
        .and_then(Value::as_object_mut)
        .and_then(|inner| inner.get_mut(VALUE_KEY))
        .and_then(Value::as_array_mut);
    if let Some(stops) = stops {
        stats.gradient_stops += adjust_gradient(stops, cfg);
    }
}

fn visit_entry(key: &str, val: &mut Value, cfg: &GradeConfig, stats: &mut GradeStats) {
    if let Value::Object(field) = val {
        if DIRECT_COLOR_KEYS.contains(&key) {
            grade_color_field(field, cfg, stats);
            return;
        }
        if key == GRADIENT_KEY {
            grade_gradient_field(field, cfg, stats);
            return;
        }
    }
    walk(val, cfg, stats);
}

fn walk(node: &mut Value, cfg: &GradeConfig, stats: &mut GradeStats) {
    match node {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                visit_entry(key, val, cfg, stats);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                walk(item, cfg, stats);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

/// Grade every recognized color field under `node`, depth-first, in place.
///
/// Keys are never added, removed or reordered; only numeric color channels are overwritten.
/// Shapes that don't match a known color encoding are walked through or skipped, never rejected.
pub fn grade_value(node: &mut Value, cfg: &GradeConfig) -> GradeStats {
    let mut stats = GradeStats::default();
    walk(node, cfg, &mut stats);
    stats
}

/// Grade a whole document and log what changed.
#[tracing::instrument(skip(doc))]
pub fn grade_document(doc: &mut Value, cfg: &GradeConfig) -> GradeStats {
    let stats = grade_value(doc, cfg);
    tracing::debug!(
        static_colors = stats.static_colors,
        keyframe_colors = stats.keyframe_colors,
        gradient_stops = stats.gradient_stops,
        "graded document"
    );
    stats
}

fn par_grade_items(items: &mut [Value], cfg: &GradeConfig) -> GradeStats {
    items
        .par_iter_mut()
        .map(|item| grade_value(item, cfg))
        .reduce(GradeStats::default, |a, b| a + b)
}

/// Parallel variant of [`grade_document`].
///
/// Elements of the root array, or of arrays held directly by root keys (`layers`, `assets`),
/// are graded on the rayon pool. Those subtrees are disjoint, so the result equals the
/// sequential walk.
#[tracing::instrument(skip(doc))]
pub fn grade_document_par(doc: &mut Value, cfg: &GradeConfig) -> GradeStats {
    let stats = match doc {
        Value::Object(map) => map
            .iter_mut()
            .map(|(key, val)| {
                if let Value::Array(items) = val {
                    return par_grade_items(items, cfg);
                }
                let mut stats = GradeStats::default();
                visit_entry(key, val, cfg, &mut stats);
                stats
            })
            .fold(GradeStats::default(), |a, b| a + b),
        Value::Array(items) => par_grade_items(items, cfg),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            GradeStats::default()
        }
    };
    tracing::debug!(
        static_colors = stats.static_colors,
        keyframe_colors = stats.keyframe_colors,
        gradient_stops = stats.gradient_stops,
        "graded document (parallel)"
    );
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/grade/locate.rs"]
mod tests;
