//! End-to-end tests for CSV and Excel exports (table -> encode -> download)

use std::rc::Rc;

use pretty_assertions::assert_eq;
use table_export::prelude::*;
use table_export::{decode_base64, SavedFile, EXCEL_MIME_TYPE};

const PEOPLE: &str = r#"
<html><body>
  <table id="people">
    <thead><tr><th>Name</th><th>Note</th></tr></thead>
    <tbody>
      <tr><td> Ann </td><td>likes <b>bold</b> text</td></tr>
      <tr><td>Bob</td><td>says "hi", loudly</td></tr>
    </tbody>
  </table>
  <table id="empty"></table>
</body></html>
"#;

fn exporter(mechanism: DownloadMechanism) -> (Exporter, Rc<RecordingHost>) {
    let host = Rc::new(RecordingHost::new(HostCapabilities::preferring(mechanism)));
    (Exporter::new(Rc::clone(&host)), host)
}

fn text(file: &SavedFile) -> String {
    String::from_utf8(file.bytes.clone()).unwrap()
}

#[test]
fn test_csv_scenario() {
    let (mut exporter, host) = exporter(DownloadMechanism::NativeSave);
    let table = Table::from_rows([["a", "b"], ["c,d", "e\"f"]]);

    exporter
        .to_csv("scenario", &Document::new(), &table, None, None)
        .unwrap();

    let files = host.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "scenario.csv");
    assert_eq!(files[0].mime_type, "application/csv");
    assert_eq!(text(&files[0]), "\u{FEFF}a,b\r\n\"c,d\",\"e\"\"f\"\r\n");
}

#[test]
fn test_csv_from_parsed_document() {
    let doc = Document::parse(PEOPLE);
    let (mut exporter, host) = exporter(DownloadMechanism::ObjectUrl);

    exporter.to_csv("people", &doc, "people", None, None).unwrap();

    assert_eq!(
        text(&host.files()[0]),
        "\u{FEFF}Name,Note\r\nAnn,likes bold text\r\nBob,\"says \"\"hi\"\", loudly\"\r\n"
    );
}

#[test]
fn test_empty_table_is_byte_order_mark_only() {
    let doc = Document::parse(PEOPLE);
    let (mut exporter, host) = exporter(DownloadMechanism::DataUri);

    exporter.to_csv("empty", &doc, "empty", None, None).unwrap();

    assert_eq!(host.files()[0].bytes, [0xEF, 0xBB, 0xBF]);
}

#[test]
fn test_overrides_persist_as_defaults() {
    let table = Table::from_rows([["a", "b"], ["c", "d"]]);
    let doc = Document::new();
    let (mut exporter, host) = exporter(DownloadMechanism::NativeSave);

    exporter
        .to_csv("first", &doc, &table, Some(";"), Some("\n"))
        .unwrap();
    exporter.to_csv("second", &doc, &table, None, None).unwrap();
    exporter
        .to_csv("third", &doc, &table, Some(""), Some(""))
        .unwrap();

    let files = host.files();
    assert_eq!(text(&files[0]), "\u{FEFF}a;b\nc;d\n");
    assert_eq!(text(&files[1]), "\u{FEFF}a;b\nc;d\n");
    assert_eq!(text(&files[2]), "\u{FEFF}a;b\nc;d\n");
    assert_eq!(exporter.options().delimiter, ";");
}

#[test]
fn test_overrides_persist_after_failed_lookup() {
    let (mut exporter, _host) = exporter(DownloadMechanism::NativeSave);
    let err = exporter
        .to_csv("x", &Document::new(), "missing", Some("\t"), None)
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(exporter.options().delimiter, "\t");
}

#[test]
fn test_missing_table_triggers_no_download() {
    let doc = Document::parse(PEOPLE);
    let (mut exporter, host) = exporter(DownloadMechanism::NativeSave);

    let csv_err = exporter.to_csv("x", &doc, "nope", None, None).unwrap_err();
    let xls_err = exporter.to_excel("x", "Sheet", &doc, "nope").unwrap_err();

    assert!(matches!(csv_err, Error::NotFound(ref id) if id == "nope"));
    assert!(matches!(xls_err, Error::NotFound(_)));
    assert!(host.files().is_empty());
}

#[test]
fn test_excel_default_worksheet_name() {
    let doc = Document::parse(PEOPLE);
    let (exporter, host) = exporter(DownloadMechanism::NativeSave);

    exporter.to_excel("report", "", &doc, "people").unwrap();

    let files = host.files();
    let file = &files[0];
    assert_eq!(file.file_name, "report.xls");
    assert_eq!(file.mime_type, EXCEL_MIME_TYPE);
    assert!(text(file).contains("<x:Name>Worksheet</x:Name>"));
}

#[test]
fn test_excel_keeps_rich_markup() {
    let doc = Document::parse(PEOPLE);
    let (exporter, host) = exporter(DownloadMechanism::DataUri);

    exporter.to_excel("report", "People", &doc, "people").unwrap();

    let body = text(&host.files()[0]);
    assert!(body.contains("<x:Name>People</x:Name>"));
    assert!(body.contains("<td>likes <b>bold</b> text</td>"));
    assert!(body.contains("<thead><tr><th>Name</th><th>Note</th></tr></thead>"));
}

#[test]
fn test_all_mechanisms_save_identical_bytes() {
    let doc = Document::parse(PEOPLE);
    let saved: Vec<Vec<u8>> = [
        DownloadMechanism::NativeSave,
        DownloadMechanism::ObjectUrl,
        DownloadMechanism::DataUri,
    ]
    .into_iter()
    .map(|mechanism| {
        let (mut exporter, host) = exporter(mechanism);
        assert_eq!(exporter.mechanism(), mechanism);
        exporter.to_csv("people", &doc, "people", None, None).unwrap();
        host.take_files().remove(0).bytes
    })
    .collect();

    assert_eq!(saved[0], saved[1]);
    assert_eq!(saved[1], saved[2]);
}

#[test]
fn test_unicode_survives_encoding() {
    let table = Table::from_rows([["Zoë", "\u{1F600}", "日本"]]);
    let (mut exporter, host) = exporter(DownloadMechanism::DataUri);

    exporter.export_csv("unicode", &table, None, None).unwrap();

    assert_eq!(text(&host.files()[0]), "\u{FEFF}Zoë,\u{1F600},日本\r\n");
}

#[test]
fn test_custom_sink_receives_base64_request() {
    use std::cell::RefCell;
    use table_export::DownloadRequest;

    struct Capture(Rc<RefCell<Vec<DownloadRequest>>>);

    impl DownloadSink for Capture {
        fn mechanism(&self) -> DownloadMechanism {
            DownloadMechanism::DataUri
        }

        fn deliver(&self, request: &DownloadRequest) -> Result<()> {
            self.0.borrow_mut().push(request.clone());
            Ok(())
        }
    }

    let captured = Rc::new(RefCell::new(Vec::new()));
    let exporter = Exporter::with_sink(Box::new(Capture(Rc::clone(&captured))));
    exporter
        .export_excel("book", "S", &Table::from_rows([["1"]]))
        .unwrap();

    let captured = captured.borrow();
    let request = &captured[0];
    assert_eq!(request.file_name, "book.xls");
    let decoded = decode_base64(&request.payload_base64).unwrap();
    assert!(decoded.contains("<tbody><tr><td>1</td></tr></tbody>"));
}

#[test]
fn test_version() {
    assert_eq!(table_export::version(), env!("CARGO_PKG_VERSION"));
}
