pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Reduces `v` into `[0, 1)`.
pub fn normalize_fraction(v: f64) -> f64 {
    let frac = v - v.floor();
    // v - floor(v) rounds to exactly 1.0 for tiny negative v
    if frac < 0.0 {
        frac + 1.0
    } else if frac >= 1.0 {
        0.0
    } else {
        frac
    }
}
