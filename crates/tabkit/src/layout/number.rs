//! Number patterns such as `#,###.##`.
//!
//! A pattern is an optional literal prefix, a digit body and an optional
//! literal suffix. Inside the body a `,` turns on thousands grouping and the
//! number of `#`/`0` placeholders after the `.` sets the fixed decimal count.
//!
//! | pattern     | 1234567.891    |
//! |-------------|----------------|
//! | `#`         | `1234568`      |
//! | `#,###`     | `1,234,568`    |
//! | `#,###.##`  | `1,234,567.89` |
//! | `$#,###.00` | `$1,234,567.89`|
//! | `#.# %`     | `1234567.9 %`  |

/// A parsed number pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberPattern {
    prefix: String,
    suffix: String,
    grouping: bool,
    decimals: usize,
}

impl NumberPattern {
    /// Parses a pattern. Never fails: a pattern without placeholders is
    /// treated as a prefix over a plain number.
    pub fn parse(pattern: &str) -> Self {
        let is_body = |c: char| matches!(c, '#' | '0' | ',' | '.');
        // The body starts at a placeholder so a prefix like "Rs. " stays literal
        let Some(start) = pattern.find(|c: char| matches!(c, '#' | '0')) else {
            return NumberPattern {
                prefix: pattern.to_string(),
                ..NumberPattern::default()
            };
        };
        let end = pattern[start..]
            .find(|c: char| !is_body(c))
            .map_or(pattern.len(), |i| start + i);
        let body = &pattern[start..end];

        let (int_part, frac_part) = match body.find('.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, ""),
        };

        NumberPattern {
            prefix: pattern[..start].to_string(),
            suffix: pattern[end..].to_string(),
            grouping: int_part.contains(','),
            decimals: frac_part.chars().filter(|c| matches!(c, '#' | '0')).count(),
        }
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn grouping(&self) -> bool {
        self.grouping
    }

    pub fn format_float(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}{}", self.prefix, value, self.suffix);
        }
        let fixed = format!("{:.*}", self.decimals, value.abs());
        // Rounding can turn a tiny negative into zero; don't print "-0.00"
        let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let (int_part, frac_part) = match fixed.find('.') {
            Some(dot) => (&fixed[..dot], Some(&fixed[dot + 1..])),
            None => (fixed.as_str(), None),
        };
        self.assemble(negative, int_part, frac_part)
    }

    pub fn format_int(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let zeros = "0".repeat(self.decimals);
        let frac_part = (self.decimals > 0).then_some(zeros.as_str());
        self.assemble(value < 0, &digits, frac_part)
    }

    fn assemble(&self, negative: bool, int_part: &str, frac_part: Option<&str>) -> String {
        let mut out = String::with_capacity(self.prefix.len() + int_part.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&self.prefix);
        if self.grouping {
            out.push_str(&group_thousands(int_part));
        } else {
            out.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Inserts `,` between every group of three digits, counting from the right.
pub(crate) fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + len / 3);
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }
    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(',');
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }
    out
}
