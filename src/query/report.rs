//! Plain-text report rendering.
//!
//! Reports are a summary-metrics section followed by per-record detail
//! blocks with a fixed field order. Rendering is a pure function of the
//! computed values — the same filtered set always produces the same
//! bytes. Conditional fields are emitted only when the record carries
//! them.

use std::fmt::Display;

/// Accumulates one rendered report.
#[derive(Default)]
pub struct Report {
    out: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold report title: `**Title**` followed by a blank line.
    pub fn title(&mut self, text: impl Display) -> &mut Self {
        self.out.push_str(&format!("**{text}**\n\n"));
        self
    }

    /// Bold section heading: `**Heading:**`.
    pub fn heading(&mut self, text: impl Display) -> &mut Self {
        self.out.push_str(&format!("**{text}:**\n"));
        self
    }

    /// Top-level bullet: `• Label: value`.
    pub fn metric(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.out.push_str(&format!("• {label}: {value}\n"));
        self
    }

    /// Bullet introducing a record: `• **text**`.
    pub fn entry(&mut self, text: impl Display) -> &mut Self {
        self.out.push_str(&format!("• **{text}**\n"));
        self
    }

    /// Indented detail line under an entry: `  Label: value`.
    pub fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        self.out.push_str(&format!("  {label}: {value}\n"));
        self
    }

    /// Detail line emitted only when the value is present.
    pub fn field_if<T: Display>(&mut self, label: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.field(label, value);
        }
        self
    }

    /// Raw line, rendered verbatim plus a newline.
    pub fn line(&mut self, text: impl Display) -> &mut Self {
        self.out.push_str(&format!("{text}\n"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Format an integer with thousands separators: 1234567 → "1,234,567".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with thousands separators: 500000 → "$500,000".
pub fn money(n: u64) -> String {
    format!("${}", thousands(n))
}
