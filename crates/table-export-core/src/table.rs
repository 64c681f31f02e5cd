//! Table snapshot: rows of cells plus the table's literal inner markup

use quick_xml::escape::escape;

/// A single table cell.
///
/// Holds the raw text content of the cell (all descendant text, as a DOM
/// `textContent` would return it). [`Cell::text`] gives the trimmed form that
/// serializers use.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    content: String,
}

impl Cell {
    /// Create a cell from its raw text content
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Trimmed text content.
    ///
    /// Trims the whitespace set of the web platform's `String.prototype.trim`:
    /// Unicode whitespace plus U+FEFF, but not U+0085.
    pub fn text(&self) -> &str {
        self.content.trim_matches(is_trimmed_whitespace)
    }

    /// Raw text content, untrimmed
    pub fn raw_text(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Self {
        Cell::new(content)
    }
}

impl From<String> for Cell {
    fn from(content: String) -> Self {
        Cell::new(content)
    }
}

fn is_trimmed_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// An ordered sequence of cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from cells
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cells in document order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append a cell
    pub fn push<C: Into<Cell>>(&mut self, cell: C) {
        self.cells.push(cell.into());
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A snapshot of a tabular source.
///
/// The CSV path reads [`Table::rows`]; the Excel path reads
/// [`Table::inner_markup`]. The two are never mixed, so a table parsed from
/// HTML keeps any rich content of its cells in the Excel output while CSV gets
/// plain text only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    id: Option<String>,
    rows: Vec<Row>,
    inner_markup: String,
}

impl Table {
    /// Create a table from rows and the literal inner markup it was read from
    pub fn new<S: Into<String>>(rows: Vec<Row>, inner_markup: S) -> Self {
        Self {
            id: None,
            rows,
            inner_markup: inner_markup.into(),
        }
    }

    /// Create an empty table (no rows, no markup)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a table from plain cell values.
    ///
    /// The inner markup is synthesized as a `<tbody>` of `<tr>`/`<td>`
    /// elements with the cell text escaped.
    ///
    /// ```rust
    /// use table_export_core::Table;
    ///
    /// let table = Table::from_rows([["a", "b"], ["c", "d"]]);
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.rows()[1].cells()[0].text(), "c");
    /// ```
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let rows: Vec<Row> = rows.into_iter().map(|r| r.into_iter().collect()).collect();
        let inner_markup = synthesize_markup(&rows);
        Self {
            id: None,
            rows,
            inner_markup,
        }
    }

    /// Set the element id
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Element id, if the table has one
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Rows in document order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Literal inner markup of the table element
    pub fn inner_markup(&self) -> &str {
        &self.inner_markup
    }
}

fn synthesize_markup(rows: &[Row]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut markup = String::from("<tbody>");
    for row in rows {
        markup.push_str("<tr>");
        for cell in row.cells() {
            markup.push_str("<td>");
            markup.push_str(&escape(cell.raw_text()));
            markup.push_str("</td>");
        }
        markup.push_str("</tr>");
    }
    markup.push_str("</tbody>");
    markup
}
