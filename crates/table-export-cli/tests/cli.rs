//! Tests running the tabex binary against HTML fixtures

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::Command;

const PAGE: &str = r#"<html><body>
<table id="scores"><tr><th>Team</th><th>Points</th></tr><tr><td>Red, Inc</td><td>3</td></tr></table>
<table><tr><td>anonymous</td></tr></table>
</body></html>"#;

fn write_page(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("page.html");
    std::fs::write(&path, PAGE).unwrap();
    path
}

fn tabex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tabex"))
}

#[test]
fn test_csv_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    let status = tabex()
        .arg("csv")
        .arg(&page)
        .args(["--table", "scores", "--line-terminator", "lf"])
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let bytes = std::fs::read(dir.path().join("scores.csv")).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "\u{FEFF}Team,Points\n\"Red, Inc\",3\n"
    );
}

#[test]
fn test_excel_export_with_name_and_mechanism() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    let status = tabex()
        .arg("excel")
        .arg(&page)
        .args(["--table", "scores", "--name", "book", "--worksheet", "Scores"])
        .args(["--mechanism", "data-uri"])
        .arg("--out-dir")
        .arg(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read_to_string(dir.path().join("book.xls")).unwrap();
    assert!(text.contains("<x:Name>Scores</x:Name>"));
    assert!(text.contains("<td>Red, Inc</td>"));
}

#[test]
fn test_missing_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    let output = tabex()
        .arg("csv")
        .arg(&page)
        .args(["--table", "nope"])
        .arg("--out-dir")
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Table not found: nope"));
    assert!(!dir.path().join("nope.csv").exists());
}

#[test]
fn test_tables_lists_ids() {
    let dir = tempfile::tempdir().unwrap();
    let page = write_page(dir.path());

    let output = tabex().arg("tables").arg(&page).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "0\tscores\t2 rows\n1\t-\t1 rows\n"
    );
}
