//! Excel HTML workbook template and placeholder substitution

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// HTML document carrying the Excel XML metadata that makes spreadsheet
/// applications open it as a one-sheet workbook.
///
/// Placeholders: `{worksheet}` (sheet name) and `{table}` (inner markup of
/// the exported table).
pub const EXCEL_TEMPLATE: &str = concat!(
    r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" "#,
    r#"xmlns:x="urn:schemas-microsoft-com:office:excel" "#,
    r#"xmlns="http://www.w3.org/TR/REC-html40">"#,
    r#"<head><meta name=ProgId content=Excel.Sheet> "#,
    r#"<meta name=Generator content="Microsoft Excel 11">"#,
    r#"<meta http-equiv="Content-Type" content="text/html; charset=UTF-8">"#,
    r#"<!--[if gte mso 9]><xml><x:ExcelWorkbook><x:ExcelWorksheets><x:ExcelWorksheet>"#,
    r#"<x:Name>{worksheet}</x:Name>"#,
    r#"<x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions>"#,
    r#"</x:ExcelWorksheet></x:ExcelWorksheets></x:ExcelWorkbook></xml><![endif]-->"#,
    r#"</head><body><table>{table}</table></body></html>"#,
);

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("static placeholder pattern is valid"));

/// Replace `{name}` placeholders in `template`.
///
/// Substitution is a single pass: text produced by `lookup` is never scanned
/// for placeholders again. Placeholders `lookup` does not know are left as
/// they are.
pub fn render<'t, F>(template: &'t str, mut lookup: F) -> Cow<'t, str>
where
    F: FnMut(&str) -> Option<String>,
{
    PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_placeholders() {
        let out = render("<{a}|{b}>", |key| match key {
            "a" => Some("x".to_string()),
            "b" => Some("y".to_string()),
            _ => None,
        });
        assert_eq!(out, "<x|y>");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let out = render("{a} {zzz}", |key| (key == "a").then(|| "1".to_string()));
        assert_eq!(out, "1 {zzz}");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let out = render("{a}{b}", |key| match key {
            "a" => Some("{b}".to_string()),
            "b" => Some("B".to_string()),
            _ => None,
        });
        assert_eq!(out, "{b}B");
    }

    #[test]
    fn test_template_has_both_slots() {
        assert_eq!(EXCEL_TEMPLATE.matches("{worksheet}").count(), 1);
        assert_eq!(EXCEL_TEMPLATE.matches("{table}").count(), 1);
        assert!(EXCEL_TEMPLATE.contains("<!--[if gte mso 9]>"));
    }
}
