//! Numeric display formatting.
//!
//! Grouped numbers are only shown once rendering has stabilized; the first
//! render carries the raw value so a pre-rendered page and its interactive
//! re-render agree.

/// Which pass of a two-phase render is producing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPhase {
    /// First pass: raw numbers.
    #[default]
    Initial,
    /// Environment is interactive: grouped numbers.
    Stabilized,
}

impl RenderPhase {
    /// Render a raw numeric string for this phase.
    pub fn display(self, raw: &str) -> String {
        match self {
            Self::Initial => raw.to_string(),
            Self::Stabilized => group_thousands(raw),
        }
    }

    pub fn display_u64(self, value: u64) -> String {
        self.display(&value.to_string())
    }

    pub fn display_f64(self, value: f64) -> String {
        self.display(&raw_f64(value))
    }
}

/// Shortest round-trip representation, without a trailing `.0`.
pub fn raw_f64(value: f64) -> String {
    value.to_string()
}

/// Insert `,` between every three digits of the integer part.
///
/// A leading sign and any fractional part are left as they are.
pub fn group_thousands(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push_str(frac_part);
    grouped
}
