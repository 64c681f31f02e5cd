//! HTML documents holding tables, looked up by element id

use once_cell::sync::Lazy;
use scraper::{ElementRef as HtmlElement, Html, Selector};

use crate::element::ElementLookup;
use crate::table::{Cell, Row, Table};

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("static table selector is valid"));

/// A set of tables, addressable by their element id.
///
/// Built either by parsing HTML text with [`Document::parse`] or by adding
/// [`Table`] snapshots directly.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tables: Vec<Table>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse HTML text and snapshot every `<table>` element it contains.
    ///
    /// Tables nested inside other tables are snapshotted too; their rows
    /// belong to the nested table only.
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        let tables: Vec<Table> = html.select(&TABLE_SELECTOR).map(snapshot_table).collect();
        log::debug!("parsed {} table(s) from HTML", tables.len());
        Self { tables }
    }

    /// Add a table, builder style
    pub fn with_table(mut self, table: Table) -> Self {
        self.add_table(table);
        self
    }

    /// Add a table
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// All tables in document order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// First table whose id equals `id`
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id() == Some(id))
    }
}

impl<'d> ElementLookup for &'d Document {
    type Handle = &'d Table;

    fn element_by_id(&self, id: &str) -> Option<&'d Table> {
        Document::table(self, id)
    }
}

fn snapshot_table(table: HtmlElement<'_>) -> Table {
    let rows = table_rows(table)
        .into_iter()
        .map(|tr| {
            child_elements(tr)
                .filter(|c| matches!(c.value().name(), "td" | "th"))
                .map(|c| Cell::new(c.text().collect::<String>()))
                .collect::<Row>()
        })
        .collect();

    let snapshot = Table::new(rows, table.inner_html());
    match table.value().attr("id") {
        Some(id) => snapshot.with_id(id),
        None => snapshot,
    }
}

/// Rows in `HTMLTableElement.rows` order: header rows, then body rows and
/// bare `<tr>` children in tree order, then footer rows.
fn table_rows(table: HtmlElement<'_>) -> Vec<HtmlElement<'_>> {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut foot = Vec::new();

    for child in child_elements(table) {
        match child.value().name() {
            "tr" => body.push(child),
            "thead" => head.extend(section_rows(child)),
            "tbody" => body.extend(section_rows(child)),
            "tfoot" => foot.extend(section_rows(child)),
            _ => {}
        }
    }

    head.extend(body);
    head.extend(foot);
    head
}

fn section_rows(section: HtmlElement<'_>) -> impl Iterator<Item = HtmlElement<'_>> {
    child_elements(section).filter(|e| e.value().name() == "tr")
}

fn child_elements(element: HtmlElement<'_>) -> impl Iterator<Item = HtmlElement<'_>> {
    element.children().filter_map(HtmlElement::wrap)
}
