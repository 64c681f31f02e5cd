//! CSV options

/// Options for writing CSV.
///
/// These are the two formatting defaults of a CSV export. An exporter keeps
/// one instance and merges per-call overrides into it with
/// [`CsvWriteOptions::merge_overrides`], so an override stays in effect for
/// later calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: String,
    /// Text appended after every row (default: CRLF)
    pub line_terminator: String,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            line_terminator: LineTerminator::Crlf.as_str().to_string(),
        }
    }
}

impl CsvWriteOptions {
    /// Set the delimiter
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the line terminator
    pub fn with_line_terminator<S: Into<String>>(mut self, line_terminator: S) -> Self {
        self.line_terminator = line_terminator.into();
        self
    }

    /// Replace the defaults with any non-empty override.
    ///
    /// `None` and empty strings leave the current value untouched.
    pub fn merge_overrides(&mut self, delimiter: Option<&str>, line_terminator: Option<&str>) {
        if let Some(d) = delimiter.filter(|d| !d.is_empty()) {
            self.delimiter = d.to_string();
        }
        if let Some(t) = line_terminator.filter(|t| !t.is_empty()) {
            self.line_terminator = t.to_string();
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    Lf,
    /// Windows-style (CRLF)
    Crlf,
    /// Mac classic (CR)
    Cr,
}

impl LineTerminator {
    /// The terminator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::Crlf => "\r\n",
            LineTerminator::Cr => "\r",
        }
    }
}

impl From<LineTerminator> for String {
    fn from(t: LineTerminator) -> Self {
        t.as_str().to_string()
    }
}
