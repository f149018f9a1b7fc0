// Rust guideline compliant 2026-10-18

//! Markup-driven styling for console output.
//!
//! Text may carry inline style tags such as `<info>done</info>` or
//! `<fg=red;options=bold>failed</>`. The [`StyleFormatter`] translates those
//! tags into color changes on a [`termcolor::WriteColor`] stream. Streams
//! without color support simply receive the text with the tags removed.
//! A literal `<` is written as `\<`.

use std::collections::HashMap;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Registry of named styles and the tag interpreter.
#[derive(Debug, Clone)]
pub struct StyleFormatter {
    styles: HashMap<String, ColorSpec>,
}

impl Default for StyleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn spec(fg: Option<Color>, bg: Option<Color>) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(fg).set_bg(bg);
    spec
}

impl StyleFormatter {
    /// Creates a formatter with the base styles (`info`, `comment`,
    /// `question`, `error`) and the console styles (`b`, `i`, `u`, `em`,
    /// `strike`, `success`, `warning`, `ins`, `del`, `code`).
    pub fn new() -> Self {
        let mut formatter = Self {
            styles: HashMap::new(),
        };

        formatter.set_style("info", spec(Some(Color::Green), None));
        formatter.set_style("comment", spec(Some(Color::Yellow), None));
        formatter.set_style("question", spec(Some(Color::Black), Some(Color::Cyan)));
        formatter.set_style("error", spec(Some(Color::White), Some(Color::Red)));

        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        let mut underline = ColorSpec::new();
        underline.set_underline(true);
        let mut emphasis = ColorSpec::new();
        emphasis.set_intense(true).set_bold(true);
        let mut conceal = ColorSpec::new();
        conceal.set_dimmed(true);

        formatter.set_style("b", bold.clone());
        formatter.set_style("i", spec(Some(Color::Black), Some(Color::White)));
        formatter.set_style("u", underline);
        formatter.set_style("em", emphasis);
        formatter.set_style("strike", conceal);
        formatter.set_style("success", spec(Some(Color::Green), None));
        formatter.set_style("warning", spec(Some(Color::Black), Some(Color::Yellow)));
        formatter.set_style("ins", spec(Some(Color::Green), None));
        formatter.set_style("del", spec(Some(Color::Red), None));
        formatter.set_style("code", bold);

        formatter
    }

    /// Registers or replaces a named style.
    pub fn set_style(&mut self, name: &str, style: ColorSpec) {
        self.styles.insert(name.to_lowercase(), style);
    }

    /// Returns whether a named style is registered.
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_lowercase())
    }

    /// Resolves a tag body into a style: a registered name or an inline
    /// `fg=..;bg=..;options=..` definition.
    fn resolve(&self, tag: &str) -> Option<ColorSpec> {
        if let Some(style) = self.styles.get(tag) {
            return Some(style.clone());
        }
        parse_inline(tag)
    }

    /// Writes `text` to `out`, applying style tags.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_styled<W: WriteColor + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut stack: Vec<ColorSpec> = Vec::new();
        let mut pending = String::new();
        let mut rest = text;

        while let Some(pos) = rest.find(&['<', '\\'][..]) {
            pending.push_str(&rest[..pos]);
            rest = &rest[pos..];

            if let Some(after) = rest.strip_prefix("\\<") {
                pending.push('<');
                rest = after;
                continue;
            }
            if rest.starts_with('\\') {
                pending.push('\\');
                rest = &rest[1..];
                continue;
            }

            match self.parse_tag(rest) {
                Some((Tag::Open(style), len)) => {
                    flush(out, &mut pending)?;
                    out.set_color(&style)?;
                    stack.push(style);
                    rest = &rest[len..];
                }
                Some((Tag::Close, len)) if !stack.is_empty() => {
                    flush(out, &mut pending)?;
                    stack.pop();
                    match stack.last() {
                        Some(style) => out.set_color(style)?,
                        None => out.reset()?,
                    }
                    rest = &rest[len..];
                }
                _ => {
                    pending.push('<');
                    rest = &rest[1..];
                }
            }
        }

        pending.push_str(rest);
        flush(out, &mut pending)?;
        if !stack.is_empty() {
            out.reset()?;
        }
        Ok(())
    }

    /// Returns `text` with all recognised style tags removed and escapes
    /// resolved.
    pub fn strip(&self, text: &str) -> String {
        let mut buffer = termcolor::NoColor::new(Vec::new());
        // Writing into memory cannot fail.
        let _ = self.write_styled(&mut buffer, text);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Resolves markup in `text` into ANSI escape sequences.
    pub fn to_ansi(&self, text: &str) -> String {
        let mut buffer = termcolor::Ansi::new(Vec::new());
        // Writing into memory cannot fail.
        let _ = self.write_styled(&mut buffer, text);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    fn parse_tag(&self, input: &str) -> Option<(Tag, usize)> {
        let end = input.find('>')?;
        let body = &input[1..end];
        let len = end + 1;

        if body == "/" {
            return Some((Tag::Close, len));
        }

        let (closing, name) = match body.strip_prefix('/') {
            Some(name) => (true, name),
            None => (false, body),
        };
        if !is_tag_name(name) {
            return None;
        }

        let name = name.to_lowercase();
        let style = self.resolve(&name)?;
        if closing {
            Some((Tag::Close, len))
        } else {
            Some((Tag::Open(style), len))
        }
    }
}

enum Tag {
    Open(ColorSpec),
    Close,
}

fn flush<W: WriteColor + ?Sized>(out: &mut W, pending: &mut String) -> io::Result<()> {
    if !pending.is_empty() {
        out.write_all(pending.as_bytes())?;
        pending.clear();
    }
    Ok(())
}

fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | ';' | ',' | '#' | '-'))
}

fn parse_inline(definition: &str) -> Option<ColorSpec> {
    if !definition.contains('=') {
        return None;
    }

    let mut style = ColorSpec::new();
    for part in definition.split(';') {
        let (key, value) = part.split_once('=')?;
        match key.trim() {
            "fg" => {
                style.set_fg(Some(parse_color(value.trim())?));
            }
            "bg" => {
                style.set_bg(Some(parse_color(value.trim())?));
            }
            "options" => {
                for option in value.split(',') {
                    match option.trim() {
                        "bold" => {
                            style.set_bold(true);
                        }
                        "underscore" => {
                            style.set_underline(true);
                        }
                        "reverse" => {
                            style.set_intense(true).set_bold(true);
                        }
                        "conceal" => {
                            style.set_dimmed(true);
                        }
                        "blink" => {}
                        _ => return None,
                    }
                }
            }
            _ => return None,
        }
    }
    Some(style)
}

fn parse_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Color::Rgb(r, g, b)
        }
        _ => return None,
    };
    Some(color)
}
