// Rust guideline compliant 2026-10-18

//! `printf`-style substitution for console text.
//!
//! Console messages are written as format strings with positional
//! arguments (`"Copied %d files to %s"`). The arguments are dynamically
//! typed, so conversions follow the usual `printf` coercions: a string
//! formatted with `%d` is read up to its first non-digit, a float formatted
//! with `%s` prints its shortest representation, and so on.

use crate::error::FormatError;
use std::fmt;

/// A single substitution argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Text argument.
    Str(String),
    /// Integer argument.
    Int(i64),
    /// Floating point argument.
    Float(f64),
    /// Boolean argument (`true` prints as `1`, `false` as the empty string).
    Bool(bool),
}

impl Arg {
    fn as_int(&self) -> i64 {
        match self {
            Arg::Int(value) => *value,
            Arg::Float(value) => *value as i64,
            Arg::Bool(value) => i64::from(*value),
            Arg::Str(value) => leading_number(value)
                .and_then(|number| number.parse::<f64>().ok())
                .map(|number| number as i64)
                .unwrap_or(0),
        }
    }

    fn as_float(&self) -> f64 {
        match self {
            Arg::Int(value) => *value as f64,
            Arg::Float(value) => *value,
            Arg::Bool(value) => f64::from(u8::from(*value)),
            Arg::Str(value) => leading_number(value)
                .and_then(|number| number.parse::<f64>().ok())
                .unwrap_or(0.0),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(value) => f.write_str(value),
            Arg::Int(value) => write!(f, "{}", value),
            Arg::Float(value) => write!(f, "{}", value),
            Arg::Bool(true) => f.write_str("1"),
            Arg::Bool(false) => Ok(()),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(i64::from(value))
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Int(i64::from(value))
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        Arg::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

/// Builds an argument list from heterogeneous values.
///
/// ```
/// let args = t3c_console::args!["files", 3];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Arg>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($value)),+]
    };
}

/// Returns the numeric prefix of a string (`"12abc"` yields `"12"`).
fn leading_number(value: &str) -> Option<&str> {
    let trimmed = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if seen_digit {
        Some(trimmed[..end].trim_end_matches('.'))
    } else {
        None
    }
}

/// Widest padding accepted in a specifier.
pub const MAX_WIDTH: usize = i32::MAX as usize;

/// Float precision is capped at this many digits.
pub const MAX_FLOAT_PRECISION: usize = 53;

#[derive(Debug, Default)]
struct Directive {
    position: Option<usize>,
    left: bool,
    plus: bool,
    pad: Option<char>,
    width: usize,
    precision: Option<usize>,
}

/// Substitutes `args` into `format`.
///
/// Supported conversions are `%%`, `%s`, `%d`, `%u`, `%f`, `%F`, `%e`,
/// `%E`, `%x`, `%X`, `%o`, `%b` and `%c`, with optional argument position
/// (`%2$s`), flags (`-`, `+`, ` `, `0`, `'c`), width and precision.
///
/// # Errors
///
/// Returns an error if the format references a missing argument, uses an
/// unknown conversion, ends inside a specifier, or asks for a width beyond
/// [`MAX_WIDTH`]. Float precision above [`MAX_FLOAT_PRECISION`] is
/// truncated to it.
pub fn sprintf(format: &str, args: &[Arg]) -> Result<String, FormatError> {
    let chars: Vec<char> = format.chars().collect();
    let mut output = String::with_capacity(format.len());
    let mut next_arg = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;
        if ch != '%' {
            output.push(ch);
            continue;
        }
        if chars.get(i) == Some(&'%') {
            output.push('%');
            i += 1;
            continue;
        }

        let (directive, conversion, consumed) = parse_directive(&chars[i..])?;
        i += consumed;

        let index = match directive.position {
            Some(position) => position - 1,
            None => {
                next_arg += 1;
                next_arg - 1
            }
        };
        let arg = args.get(index).ok_or(FormatError::MissingArgument {
            position: index + 1,
            given: args.len(),
        })?;

        let rendered = convert(arg, conversion, &directive)?;
        output.push_str(&pad(rendered, &directive, is_numeric(conversion)));
    }

    Ok(output)
}

fn parse_directive(chars: &[char]) -> Result<(Directive, char, usize), FormatError> {
    let mut directive = Directive::default();
    let mut i = 0usize;

    let digits_end = chars.iter().take_while(|c| c.is_ascii_digit()).count();
    if digits_end > 0 && chars.get(digits_end) == Some(&'$') {
        let position: usize = chars[..digits_end]
            .iter()
            .collect::<String>()
            .parse()
            .unwrap_or(0);
        if position == 0 {
            return Err(FormatError::UnknownConversion('$'));
        }
        directive.position = Some(position);
        i = digits_end + 1;
    }

    loop {
        match chars.get(i) {
            Some('-') => directive.left = true,
            Some('+') => directive.plus = true,
            Some(' ') => directive.pad = Some(' '),
            Some('0') => directive.pad = Some('0'),
            Some('\'') => {
                i += 1;
                directive.pad = Some(*chars.get(i).ok_or(FormatError::Incomplete)?);
            }
            _ => break,
        }
        i += 1;
    }

    let mut width = 0usize;
    while let Some(digit) = chars.get(i).and_then(|c| c.to_digit(10)) {
        width = width.saturating_mul(10).saturating_add(digit as usize);
        i += 1;
    }
    if width > MAX_WIDTH {
        return Err(FormatError::WidthTooLarge {
            width,
            max: MAX_WIDTH,
        });
    }
    directive.width = width;

    if chars.get(i) == Some(&'.') {
        i += 1;
        let mut precision = 0usize;
        while let Some(digit) = chars.get(i).and_then(|c| c.to_digit(10)) {
            precision = precision.saturating_mul(10).saturating_add(digit as usize);
            i += 1;
        }
        directive.precision = Some(precision);
    }

    let conversion = *chars.get(i).ok_or(FormatError::Incomplete)?;
    Ok((directive, conversion, i + 1))
}

fn convert(arg: &Arg, conversion: char, directive: &Directive) -> Result<String, FormatError> {
    let signed = |value: String, negative: bool| {
        if directive.plus && !negative {
            format!("+{}", value)
        } else {
            value
        }
    };

    let float_precision = directive
        .precision
        .unwrap_or(6)
        .min(MAX_FLOAT_PRECISION);

    let rendered = match conversion {
        's' => {
            let text = arg.to_string();
            match directive.precision {
                Some(limit) => text.chars().take(limit).collect(),
                None => text,
            }
        }
        'd' => {
            let value = arg.as_int();
            signed(value.to_string(), value < 0)
        }
        'u' => (arg.as_int() as u64).to_string(),
        'f' | 'F' => {
            let value = arg.as_float();
            signed(format!("{:.*}", float_precision, value), value < 0.0)
        }
        'e' | 'E' => {
            let value = arg.as_float();
            let text = exponent(value, float_precision);
            let text = if conversion == 'E' {
                text.to_uppercase()
            } else {
                text
            };
            signed(text, value < 0.0)
        }
        'x' => format!("{:x}", arg.as_int()),
        'X' => format!("{:X}", arg.as_int()),
        'o' => format!("{:o}", arg.as_int()),
        'b' => format!("{:b}", arg.as_int()),
        'c' => u32::try_from(arg.as_int())
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default(),
        other => return Err(FormatError::UnknownConversion(other)),
    };

    Ok(rendered)
}

/// Formats `value` as `d.dddddde+N`.
fn exponent(value: f64, precision: usize) -> String {
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
        None => text,
    }
}

fn is_numeric(conversion: char) -> bool {
    matches!(conversion, 'd' | 'u' | 'f' | 'F' | 'e' | 'E')
}

fn pad(value: String, directive: &Directive, numeric: bool) -> String {
    let len = value.chars().count();
    if len >= directive.width {
        return value;
    }

    let fill_char = directive.pad.unwrap_or(' ');
    let fill: String = std::iter::repeat(fill_char).take(directive.width - len).collect();

    if directive.left {
        return format!("{}{}", value, fill);
    }

    if numeric && fill_char == '0' && (value.starts_with('-') || value.starts_with('+')) {
        let (sign, digits) = value.split_at(1);
        return format!("{}{}{}", sign, fill, digits);
    }

    format!("{}{}", fill, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sprintf("no placeholders", &[]).unwrap(), "no placeholders");
    }

    #[test]
    fn test_string_and_integer_substitution() {
        let out = sprintf("Copied %d files to %s", &crate::args![3, "public/"]).unwrap();
        assert_eq!(out, "Copied 3 files to public/");
    }

    #[test]
    fn test_percent_escape() {
        assert_eq!(sprintf("100%%", &[]).unwrap(), "100%");
    }

    #[test]
    fn test_positional_arguments() {
        let out = sprintf("%2$s %1$s", &crate::args!["world", "hello"]).unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn test_width_and_padding() {
        assert_eq!(sprintf("[%5s]", &crate::args!["ab"]).unwrap(), "[   ab]");
        assert_eq!(sprintf("[%-5s]", &crate::args!["ab"]).unwrap(), "[ab   ]");
        assert_eq!(sprintf("[%05d]", &crate::args![-42]).unwrap(), "[-0042]");
        assert_eq!(sprintf("[%'*6s]", &crate::args!["ab"]).unwrap(), "[****ab]");
    }

    #[test]
    fn test_float_precision() {
        assert_eq!(sprintf("%.2f", &crate::args![3.14159]).unwrap(), "3.14");
        assert_eq!(sprintf("%f", &crate::args![1.5]).unwrap(), "1.500000");
        assert_eq!(sprintf("%.1e", &crate::args![1500.0]).unwrap(), "1.5e+3");
    }

    #[test]
    fn test_string_coerced_to_integer() {
        assert_eq!(sprintf("%d", &crate::args!["12abc"]).unwrap(), "12");
        assert_eq!(sprintf("%d", &crate::args!["abc"]).unwrap(), "0");
    }

    #[test]
    fn test_hex_and_char() {
        assert_eq!(sprintf("%x %X %c", &crate::args![255, 255, 65]).unwrap(), "ff FF A");
    }

    #[test]
    fn test_missing_argument_is_error() {
        let err = sprintf("%s and %s", &crate::args!["one"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                position: 2,
                given: 1
            }
        );
    }

    #[test]
    fn test_unknown_conversion_is_error() {
        let err = sprintf("%y", &crate::args![1]).unwrap_err();
        assert_eq!(err, FormatError::UnknownConversion('y'));
    }

    #[test]
    fn test_trailing_percent_is_incomplete() {
        assert_eq!(sprintf("50%", &crate::args![1]).unwrap_err(), FormatError::Incomplete);
    }

    #[test]
    fn test_float_precision_is_capped() {
        let out = sprintf("%.70000f", &crate::args![1.5]).unwrap();
        assert_eq!(out, format!("1.5{}", "0".repeat(52)));
        let out = sprintf("%.99999999999999999999e", &crate::args![2.0]).unwrap();
        assert!(out.starts_with("2.000"));
        assert_eq!(out.len(), "2.".len() + 53 + "e+0".len());
    }

    #[test]
    fn test_string_precision_is_not_capped() {
        let long = "x".repeat(80);
        assert_eq!(sprintf("%.70s", &crate::args![long.as_str()]).unwrap().len(), 70);
    }

    #[test]
    fn test_oversized_width_is_error() {
        let err = sprintf("%99999999999999999999999s", &crate::args!["x"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::WidthTooLarge {
                width: usize::MAX,
                max: MAX_WIDTH
            }
        );
        assert!(matches!(
            sprintf("%2147483648d", &crate::args![1]),
            Err(FormatError::WidthTooLarge { .. })
        ));
    }
}
