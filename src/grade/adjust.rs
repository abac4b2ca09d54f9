use crate::config::GradeConfig;

/// Perceptual luma weights used as the saturation anchor.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Clamp into `[0, 1]` as `max(0, min(1, x))`.
///
/// A NaN input resolves to `1.0`: `f64::min` returns the non-NaN operand.
pub fn clamp01(x: f64) -> f64 {
    x.min(1.0).max(0.0)
}

/// Weighted grayscale value of an RGB triplet.
pub fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b
}

/// Convert RGB to hue/saturation/value, all three in `[0, 1]` for in-gamut input.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    if min == max {
        return (0.0, 0.0, v);
    }

    let chroma = max - min;
    let s = chroma / max;
    let rc = (max - r) / chroma;
    let gc = (max - g) / chroma;
    let bc = (max - b) / chroma;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Convert hue/saturation/value back to RGB. `h` is a fraction of a full turn.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn rotate_hue(r: f64, g: f64, b: f64, hue_deg: f64) -> (f64, f64, f64) {
    let (h, s, v) = rgb_to_hsv(r, g, b);
    let h = (h + hue_deg / 360.0).rem_euclid(1.0);
    hsv_to_rgb(h, s, v)
}

/// Grade one RGB triplet.
///
/// Stages run in a fixed order, each consuming the previous output:
///
/// 1. hue rotation (skipped when `hue_deg == 0.0` exactly)
/// 2. saturation blend around luma, unclamped
/// 3. contrast around mid-gray, clamped
/// 4. brightness offset, clamped
pub fn adjust(r: f64, g: f64, b: f64, cfg: &GradeConfig) -> (f64, f64, f64) {
    let (r, g, b) = if cfg.hue_deg != 0.0 {
        rotate_hue(r, g, b, cfg.hue_deg)
    } else {
        (r, g, b)
    };

    let gray = luma(r, g, b);
    let saturate = |c: f64| gray + (c - gray) * cfg.saturation;
    let contrast = |c: f64| clamp01(0.5 + cfg.contrast * (c - 0.5));
    let brightness = |c: f64| clamp01(c + cfg.brightness);
    let stage = |c: f64| brightness(contrast(saturate(c)));

    (stage(r), stage(g), stage(b))
}

/// Array form of [`adjust`].
pub fn adjust_rgb(rgb: [f64; 3], cfg: &GradeConfig) -> [f64; 3] {
    let (r, g, b) = adjust(rgb[0], rgb[1], rgb[2], cfg);
    [r, g, b]
}

#[cfg(test)]
#[path = "../../tests/unit/grade/adjust.rs"]
mod tests;
