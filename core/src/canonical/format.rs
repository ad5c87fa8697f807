//! canonical/format.rs
//! Shortest round-trip decimal rendering for floats and complex numbers.
//!
//! Output follows the general ("%g") style with minimal digits:
//! - plain notation when the decimal exponent lies in `[-4, 6)`,
//! - otherwise `d.ddde±XX` with at least two exponent digits,
//! - `NaN`, `+Inf` and `-Inf` for non-finite values.

use crate::canonical::types::Complex;
use crate::constants::{FLOAT_EXP_LOWER, FLOAT_EXP_UPPER};

pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf".into() } else { "-Inf".into() };
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.234567e6".
    let sci = format!("{:e}", v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let (neg, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if neg {
        out.push('-');
    }

    if exp < FLOAT_EXP_LOWER || exp >= FLOAT_EXP_UPPER {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        let abs = exp.unsigned_abs();
        if abs < 10 {
            out.push('0');
        }
        out.push_str(&abs.to_string());
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}

/// `(re±imi)`; the imaginary part always carries an explicit sign.
pub fn format_complex(c: Complex) -> String {
    let re = format_float(c.re);
    let mut im = format_float(c.im);
    if !im.starts_with('+') && !im.starts_with('-') {
        im.insert(0, '+');
    }
    format!("({}{}i)", re, im)
}
