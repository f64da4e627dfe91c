use lunar_phases::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── DegToRad ──

#[test]
fn test_deg_to_rad_known_values() {
    assert_approx!(deg_to_rad(0.0), 0.0, 1e-12);
    assert_approx!(deg_to_rad(90.0), std::f64::consts::FRAC_PI_2, 1e-12);
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
    assert_approx!(deg_to_rad(-360.0), -2.0 * std::f64::consts::PI, 1e-12);
}

#[test]
fn test_rad_to_deg_inverts_deg_to_rad() {
    for deg in [-720.0, -45.5, 0.0, 1.0, 201.5643, 385.81693528] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-9);
    }
}

// ── NormalizeFraction ──

#[test]
fn test_normalize_fraction_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (0.25, 0.25),
        (1.0, 0.0),
        (1.75, 0.75),
        (12.5, 0.5),
        (-0.25, 0.75),
        (-1.0, 0.0),
        (-3.6, 0.4),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_fraction(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_fraction_range() {
    let mut v = -50.0;
    while v < 50.0 {
        let n = normalize_fraction(v);
        assert!((0.0..1.0).contains(&n), "v={}: {}", v, n);
        v += 0.173;
    }
}

#[test]
fn test_normalize_fraction_tiny_negative() {
    let n = normalize_fraction(-1e-20);
    assert!((0.0..1.0).contains(&n), "got {}", n);
}
