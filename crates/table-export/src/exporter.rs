//! CSV and Excel exports composed into single calls

use table_export_core::{Document, ElementRef, Result, Table};
use table_export_csv::{CsvWriteOptions, CsvWriter};
use table_export_download::{
    encode_base64, select_sink, DownloadHost, DownloadMechanism, DownloadRequest, DownloadSink,
    CSV_MIME_TYPE, EXCEL_MIME_TYPE,
};
use table_export_xls::XlsWriter;

/// Exports tables and hands the files to a download sink.
///
/// The exporter owns the CSV formatting defaults. A non-empty delimiter or
/// line terminator passed to [`Exporter::to_csv`] replaces the default and
/// stays in effect for later calls on the same exporter.
pub struct Exporter {
    sink: Box<dyn DownloadSink>,
    csv_options: CsvWriteOptions,
}

impl Exporter {
    /// Create an exporter for a host, picking the best download mechanism
    /// the host offers
    pub fn new<H: DownloadHost + 'static>(host: H) -> Self {
        Self::with_sink(select_sink(host))
    }

    /// Create an exporter delivering through a specific sink
    pub fn with_sink(sink: Box<dyn DownloadSink>) -> Self {
        Self {
            sink,
            csv_options: CsvWriteOptions::default(),
        }
    }

    /// Replace the CSV defaults
    pub fn with_options(mut self, options: CsvWriteOptions) -> Self {
        self.csv_options = options;
        self
    }

    /// Current CSV defaults
    pub fn options(&self) -> &CsvWriteOptions {
        &self.csv_options
    }

    /// Merge per-call overrides into the CSV defaults.
    ///
    /// Only non-empty values replace a default.
    pub fn merge_csv_overrides(&mut self, delimiter: Option<&str>, line_terminator: Option<&str>) {
        self.csv_options.merge_overrides(delimiter, line_terminator);
    }

    /// Download mechanism in use
    pub fn mechanism(&self) -> DownloadMechanism {
        self.sink.mechanism()
    }

    /// Export a table as `<file_name>.csv`.
    ///
    /// Overrides are merged into the defaults before the table is looked up,
    /// so they persist even when the lookup fails.
    pub fn to_csv<'a, T>(
        &mut self,
        file_name: &str,
        document: &'a Document,
        table: T,
        delimiter: Option<&str>,
        line_terminator: Option<&str>,
    ) -> Result<()>
    where
        T: Into<ElementRef<'a, &'a Table>>,
    {
        self.merge_csv_overrides(delimiter, line_terminator);
        let table: ElementRef<'a, &'a Table> = table.into();
        let table = table.resolve(document)?;
        self.write_csv(file_name, table)
    }

    /// [`Exporter::to_csv`] for an already resolved table
    pub fn export_csv(
        &mut self,
        file_name: &str,
        table: &Table,
        delimiter: Option<&str>,
        line_terminator: Option<&str>,
    ) -> Result<()> {
        self.merge_csv_overrides(delimiter, line_terminator);
        self.write_csv(file_name, table)
    }

    /// Export a table as `<file_name>.xls`, a one-sheet HTML workbook.
    ///
    /// An empty worksheet name becomes `"Worksheet"`.
    pub fn to_excel<'a, T>(
        &self,
        file_name: &str,
        worksheet_name: &str,
        document: &'a Document,
        table: T,
    ) -> Result<()>
    where
        T: Into<ElementRef<'a, &'a Table>>,
    {
        let table: ElementRef<'a, &'a Table> = table.into();
        let table = table.resolve(document)?;
        self.export_excel(file_name, worksheet_name, table)
    }

    /// [`Exporter::to_excel`] for an already resolved table
    pub fn export_excel(&self, file_name: &str, worksheet_name: &str, table: &Table) -> Result<()> {
        let workbook = XlsWriter::to_string(table, worksheet_name);
        let file_name = format!("{file_name}.xls");
        log::debug!("exporting '{}' ({} rows)", file_name, table.row_count());

        let request = DownloadRequest::new(file_name, encode_base64(&workbook), EXCEL_MIME_TYPE);
        self.sink.deliver(&request)
    }

    fn write_csv(&self, file_name: &str, table: &Table) -> Result<()> {
        let document = CsvWriter::to_document(table, &self.csv_options);
        let file_name = format!("{file_name}.csv");
        log::debug!(
            "exporting '{}' ({} rows, {} bytes)",
            file_name,
            table.row_count(),
            document.len()
        );

        let request = DownloadRequest::new(file_name, encode_base64(&document), CSV_MIME_TYPE);
        self.sink.deliver(&request)
    }
}
