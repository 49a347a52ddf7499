use super::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => write!(f, "{s}"),
            Value::Function(closure) => write!(f, "[Function: {}]", closure.name()),
            Value::Builtin(builtin) => write!(f, "[Function: {}]", builtin.name()),
        }
    }
}

/// Format a number the way the host runtime prints it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // `{:e}` gives "1e21" / "1.5e-7"; the host writes an explicit sign.
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    // Display on f64 already omits a zero fraction and picks the shortest
    // round-tripping digits.
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractional_numbers_use_shortest_form() {
        assert_eq!(format_number(12.7), "12.7");
        assert_eq!(format_number(2.0 * 3.142 * 10.0), "62.839999999999996");
        assert_eq!(format_number(-0.10000000000000003), "-0.10000000000000003");
    }

    #[test]
    fn special_and_extreme_numbers() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn values_display_naturally() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::str("a b").to_string(), "a b");
        assert_eq!(Value::Nil.to_string(), "undefined");
    }
}
