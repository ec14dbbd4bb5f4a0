//! Deterministic per-identity colors.
//!
//! Identities walk around the hue wheel in steps of [`DEFAULT_HUE_STEP`].
//! Every full turn of the wheel lowers the brightness by a fifth, cycling
//! through four bands, so ids whose hues land close together after wrapping
//! still differ in value.

/// Hue distance between two neighboring identities.
pub const DEFAULT_HUE_STEP: f64 = 0.41;

/// RGB color for `tag` with every channel in `[0, 1]`.
pub fn unique_color_float(tag: u64, hue_step: f64) -> [f64; 3] {
    let position = tag as f64 * hue_step;
    let hue = position.fract();
    let band = (position.floor() as u64) % 4;
    let value = 1.0 - band as f64 / 5.0;
    hsv_to_rgb(hue, 1.0, value)
}

/// RGB color for `tag` with every channel in `[0, 255]`.
pub fn unique_color_u8(tag: u64, hue_step: f64) -> [u8; 3] {
    unique_color_float(tag, hue_step).map(quantize)
}

/// Scale a `[0, 1]` channel to 8 bits, truncating the fraction.
#[inline]
pub fn quantize(channel: f64) -> u8 {
    (255.0 * channel) as u8
}

/// Standard HSV to RGB transform, all components in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
