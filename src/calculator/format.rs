//! Fitting the display value onto a fixed-width screen.
//!
//! Short values are shown as typed. Long values are re-rendered: large
//! magnitudes in exponential notation, everything else with a fractional
//! precision that shrinks as the integer part grows.

use serde::{Deserialize, Serialize};

/// Values at or above this magnitude switch to exponential notation.
const EXPONENT_THRESHOLD: f64 = 1e12;

/// Upper bound on fractional digits in fixed notation.
const MAX_FIXED_PRECISION: usize = 100;

/// Enough fractional digits to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Parameters of the display formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Longest display (in characters) shown unchanged.
    pub max_width: usize,
    /// Fractional digits of the mantissa in exponential notation.
    pub exponent_digits: usize,
    /// Fractional digits for a value in `[1, 10)`. One digit fewer per
    /// additional integer digit, one more per leading fractional zero.
    pub fixed_precision: i32,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_width: 12,
            exponent_digits: 5,
            fixed_precision: 8,
        }
    }
}

impl DisplayFormat {
    /// Format a display string for the screen.
    pub fn format(&self, text: &str) -> String {
        if text.chars().count() <= self.max_width {
            return text.to_string();
        }

        let value = match text.parse::<f64>() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(display = text, %err, "cannot format display, showing it as is");
                return text.to_string();
            }
        };

        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let text = if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            };
            return text.to_string();
        }

        if value.abs() >= EXPONENT_THRESHOLD {
            return to_exponential(value, self.exponent_digits);
        }

        // log10 is undefined at zero; treat zero like a value in [1, 10).
        let magnitude = if value == 0.0 {
            0
        } else {
            value.abs().log10().floor() as i32
        };
        to_fixed(value, self.precision_for_magnitude(magnitude))
    }

    /// Fractional digits for a value whose integer part has `magnitude + 1`
    /// digits, kept within `0..=MAX_FIXED_PRECISION`.
    fn precision_for_magnitude(&self, magnitude: i32) -> usize {
        let precision = self.fixed_precision.saturating_sub(magnitude);
        usize::try_from(precision)
            .unwrap_or(0)
            .min(MAX_FIXED_PRECISION)
    }
}

/// Format a display string with the default parameters (12 characters wide).
pub fn format_display(text: &str) -> String {
    DisplayFormat::default().format(text)
}

/// Exact decimal expansion of `|value|`, split into integer and fractional
/// digits. Every finite `f64` has at most 1074 fractional digits.
fn exact_digits(value: f64) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    match exact.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (exact, String::new()),
    }
}

/// Add one unit in the last place, growing the number on overflow (`99` → `100`).
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(d)));
}

/// Fixed notation with `precision` fractional digits, ties rounded away
/// from zero. Negative values keep their sign even when they round to zero;
/// negative zero does not.
fn to_fixed(value: f64, precision: usize) -> String {
    let (int_part, frac_part) = exact_digits(value);
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain((0..precision).map(|i| frac.get(i).copied().unwrap_or(b'0')))
        .collect();
    if frac.get(precision).is_some_and(|&d| d >= b'5') {
        increment(&mut digits);
    }

    let int_len = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &digits[..int_len]);
    if precision > 0 {
        out.push('.');
        push_digits(&mut out, &digits[int_len..]);
    }
    out
}

/// Exponential notation with `digits` fractional mantissa digits and a signed
/// exponent (`1.23457e+12`, `-4.00000e-3`), ties rounded away from zero.
fn to_exponential(value: f64, digits: usize) -> String {
    let (int_part, frac_part) = exact_digits(value);
    let all: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();

    let (mantissa, exponent) = match all.iter().position(|&d| d != b'0') {
        Some(first) => {
            let significant = &all[first..];
            let mut mantissa: Vec<u8> = (0..=digits)
                .map(|i| significant.get(i).copied().unwrap_or(b'0'))
                .collect();
            let mut exponent = int_part.len() as i64 - 1 - first as i64;
            if significant.get(digits + 1).is_some_and(|&d| d >= b'5') {
                increment(&mut mantissa);
                if mantissa.len() > digits + 1 {
                    mantissa.pop();
                    exponent += 1;
                }
            }
            (mantissa, exponent)
        }
        None => (vec![b'0'; digits + 1], 0),
    };

    let mut out = String::with_capacity(digits + 8);
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &mantissa[..1]);
    if digits > 0 {
        out.push('.');
        push_digits(&mut out, &mantissa[1..]);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.abs().to_string());
    out
}
