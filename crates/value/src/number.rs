//! Number to text conversion matching the store's client convention.
//!
//! Numbers are written the way a JavaScript `Number#toString` prints them:
//! integral values carry no fraction, magnitudes outside `[1e-6, 1e21)` use
//! exponent notation with an explicit sign (`1e+21`, `1.5e-7`), and `-0`
//! prints as `0`.

/// Formats a finite `f64`. Returns `None` for NaN and infinities.
pub fn format_f64(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    if n == 0.0 {
        return Some("0".to_string());
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return Some(format!("{n}"));
    }
    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => {
            Some(format!("{mantissa}e+{power}"))
        }
        _ => Some(exp),
    }
}

/// Digits after the decimal point in the printed form of `n`, excluding any exponent.
pub fn fraction_digits(n: f64) -> usize {
    let Some(text) = format_f64(n) else {
        return 0;
    };
    let mantissa = text.split('e').next().unwrap_or_default();
    match mantissa.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}
