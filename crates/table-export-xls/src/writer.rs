//! Excel HTML workbook writer

use quick_xml::escape::escape;
use table_export_core::Table;

use crate::template::{render, EXCEL_TEMPLATE};

/// Worksheet name used when the caller gives an empty one
pub const DEFAULT_WORKSHEET_NAME: &str = "Worksheet";

/// Serializer producing legacy Excel HTML workbooks
pub struct XlsWriter;

impl XlsWriter {
    /// The markup the workbook body carries: the table's literal inner
    /// markup, not markup rebuilt from cell text
    pub fn table_markup(table: &Table) -> &str {
        table.inner_markup()
    }

    /// Render the workbook document for a table.
    ///
    /// An empty `worksheet_name` becomes [`DEFAULT_WORKSHEET_NAME`]. The name
    /// is XML-escaped; the table markup is inserted verbatim.
    pub fn to_string(table: &Table, worksheet_name: &str) -> String {
        let worksheet = if worksheet_name.is_empty() {
            DEFAULT_WORKSHEET_NAME
        } else {
            worksheet_name
        };
        log::debug!(
            "rendering worksheet '{}' ({} bytes of table markup)",
            worksheet,
            table.inner_markup().len()
        );

        render(EXCEL_TEMPLATE, |key| match key {
            "worksheet" => Some(escape(worksheet).into_owned()),
            "table" => Some(Self::table_markup(table).to_string()),
            _ => None,
        })
        .into_owned()
    }
}
