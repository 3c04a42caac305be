use plotters::style::RGBColor;

// Viridis anchor colors at evenly spaced stops.
const STOPS: [[f64; 3]; 5] = [
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [33.0, 145.0, 140.0],
    [94.0, 201.0, 98.0],
    [253.0, 231.0, 37.0],
];

/// Maps a normalized value in [0, 1] onto the viridis ramp by linear
/// interpolation between the anchor stops. Out-of-range input is clamped.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let scaled = t * (STOPS.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(STOPS.len() - 2);
    let frac = scaled - lo as f64;

    let channel = |i: usize| {
        let v = STOPS[lo][i] + (STOPS[lo + 1][i] - STOPS[lo][i]) * frac;
        v.round().clamp(0.0, 255.0) as u8
    };
    RGBColor(channel(0), channel(1), channel(2))
}

/// Normalizes `value` into [0, 1] over [min, max]. A degenerate range maps
/// everything to the low end of the ramp.
pub fn normalized(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
