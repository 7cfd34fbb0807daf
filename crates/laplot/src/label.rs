//! Human-readable labels for linear equations.

/// Format `c1 x_1 + c2 x_2 + ... = b` from a coefficient slice.
///
/// Zero-coefficient terms are skipped, unit coefficients are written
/// without their magnitude, and signs become ` + ` / ` - ` separators after
/// the first term. An all-zero coefficient vector formats as `0 = b`.
///
/// ```
/// use laplot::format_equation;
///
/// assert_eq!(format_equation(&[1.0, -1.0], 0.0), "x_1 - x_2 = 0");
/// assert_eq!(format_equation(&[2.0, 0.0, 3.0], 7.0), "2 x_1 + 3 x_3 = 7");
/// assert_eq!(format_equation(&[0.0, 0.0], 5.0), "0 = 5");
/// ```
pub fn format_equation(coeffs: &[f64], rhs: f64) -> String {
    let mut label = String::new();
    for (i, &c) in coeffs.iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        if label.is_empty() {
            if c < 0.0 {
                label.push('-');
            }
        } else if c < 0.0 {
            label.push_str(" - ");
        } else {
            label.push_str(" + ");
        }
        let mag = c.abs();
        if mag != 1.0 {
            label.push_str(&format!("{} ", mag));
        }
        label.push_str(&format!("x_{}", i + 1));
    }
    if label.is_empty() {
        format!("0 = {}", rhs)
    } else {
        format!("{} = {}", label, rhs)
    }
}

/// Wrap a formatted equation in `$...$` for TeX-aware renderers.
pub fn math_label(coeffs: &[f64], rhs: f64) -> String {
    format!("${}$", format_equation(coeffs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_coefficients() {
        assert_eq!(format_equation(&[0.0, 0.0], 5.0), "0 = 5");
    }

    #[test]
    fn test_unit_coefficients() {
        assert_eq!(format_equation(&[1.0, -1.0], 0.0), "x_1 - x_2 = 0");
    }

    #[test]
    fn test_skips_interior_zero_term() {
        assert_eq!(format_equation(&[2.0, 0.0, 3.0], 7.0), "2 x_1 + 3 x_3 = 7");
    }

    #[test]
    fn test_leading_negative() {
        assert_eq!(format_equation(&[-1.0, 2.0], 1.0), "-x_1 + 2 x_2 = 1");
        assert_eq!(format_equation(&[-3.0, -1.0], -2.0), "-3 x_1 - x_2 = -2");
    }

    #[test]
    fn test_skips_leading_zeros() {
        assert_eq!(format_equation(&[0.0, 0.0, 4.0], 8.0), "4 x_3 = 8");
    }

    #[test]
    fn test_fractional_coefficient() {
        assert_eq!(format_equation(&[0.5, 1.0], 2.5), "0.5 x_1 + x_2 = 2.5");
    }

    #[test]
    fn test_math_label() {
        assert_eq!(math_label(&[1.0, 1.0], 2.0), "$x_1 + x_2 = 2$");
    }
}
