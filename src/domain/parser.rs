//! Lenient numeric parsing for form input.
//!
//! Form fields are re-read on every keystroke, so half-typed text is the
//! normal case rather than the exception. Both parsers read the longest
//! numeric prefix of the input and ignore whatever follows it:
//!
//! ```text
//! Decimal  ::= Whitespace* Sign? ( Digits ( "." Digits? )? | "." Digits ) Exponent?
//! Integer  ::= Whitespace* Sign? Digits
//! Exponent ::= ( "e" | "E" ) Sign? Digits
//! Sign     ::= "+" | "-"
//! ```
//!
//! Input with no numeric prefix yields `None`.

/// Character scanner over a single field's text.
struct NumberScanner {
    input: Vec<char>,
    position: usize,
    current_char: Option<char>,
}

impl NumberScanner {
    fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current_char = chars.first().copied();

        Self {
            input: chars,
            position: 0,
            current_char,
        }
    }

    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes an optional sign, pushing it onto `out`.
    fn read_sign(&mut self, out: &mut String) {
        if let Some(ch @ ('+' | '-')) = self.current_char {
            out.push(ch);
            self.advance();
        }
    }

    /// Consumes a run of ASCII digits and returns how many were read.
    fn read_digits(&mut self, out: &mut String) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() {
                out.push(ch);
                self.advance();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    /// Consumes an exponent only when at least one digit follows the marker.
    fn read_exponent(&mut self, out: &mut String) {
        if !matches!(self.current_char, Some('e' | 'E')) {
            return;
        }
        let digit_at = match self.peek(1) {
            Some('+' | '-') => 2,
            _ => 1,
        };
        if !self.peek(digit_at).is_some_and(|ch| ch.is_ascii_digit()) {
            return;
        }

        out.push('e');
        self.advance();
        self.read_sign(out);
        self.read_digits(out);
    }

    fn read_decimal(&mut self) -> Option<String> {
        let mut text = String::new();
        self.skip_whitespace();
        self.read_sign(&mut text);

        let mut digits = self.read_digits(&mut text);
        if self.current_char == Some('.') {
            text.push('.');
            self.advance();
            digits += self.read_digits(&mut text);
        }
        if digits == 0 {
            return None;
        }

        self.read_exponent(&mut text);
        Some(text)
    }

    fn read_integer(&mut self) -> Option<String> {
        let mut text = String::new();
        self.skip_whitespace();
        self.read_sign(&mut text);
        if self.read_digits(&mut text) == 0 {
            return None;
        }
        Some(text)
    }
}

/// Parses the leading decimal number of `input`.
///
/// Returns `None` when there is no numeric prefix or when the value does not
/// fit in a finite `f64`.
///
/// # Examples
///
/// ```
/// use tipsplit::domain::parse_decimal_prefix;
///
/// assert_eq!(parse_decimal_prefix("12.5"), Some(12.5));
/// assert_eq!(parse_decimal_prefix("  42abc"), Some(42.0));
/// assert_eq!(parse_decimal_prefix("abc"), None);
/// ```
pub fn parse_decimal_prefix(input: &str) -> Option<f64> {
    let text = NumberScanner::new(input).read_decimal()?;
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the leading integer of `input`, ignoring any fractional part.
///
/// Returns `None` when there is no numeric prefix or the value overflows `i64`.
///
/// # Examples
///
/// ```
/// use tipsplit::domain::parse_integer_prefix;
///
/// assert_eq!(parse_integer_prefix("4"), Some(4));
/// assert_eq!(parse_integer_prefix("2.7"), Some(2));
/// assert_eq!(parse_integer_prefix("-3"), Some(-3));
/// assert_eq!(parse_integer_prefix(""), None);
/// ```
pub fn parse_integer_prefix(input: &str) -> Option<i64> {
    let text = NumberScanner::new(input).read_integer()?;
    text.parse::<i64>().ok()
}
