//! WebAssembly bindings for table-export
//!
//! Exposes `version`, `toCSV` and `toExcel` to JavaScript. Tables are read
//! from the live document, and files are saved through the best mechanism
//! the browser offers (`navigator.msSaveBlob`, an object URL, or a `data:`
//! URI), probed once on first use.

use std::cell::RefCell;

use js_sys::{Array, Function, JsString, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use table_export::{
    Anchor, BinaryObject, Cell, DownloadHost, ElementLookup, ElementRef, Error as ExportError,
    Exporter, HostCapabilities, Row, Table,
};

// =============================================================================
// DOM bindings
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    type HtmlDocument;

    #[wasm_bindgen(method, js_name = getElementById)]
    fn get_element_by_id(this: &HtmlDocument, id: &str) -> Option<HtmlElement>;

    #[wasm_bindgen(method, js_name = createElement)]
    fn create_element(this: &HtmlDocument, tag: &str) -> HtmlElement;

    #[wasm_bindgen(method, js_name = createEvent)]
    fn create_event(this: &HtmlDocument, interface: &str) -> DomEvent;

    #[wasm_bindgen(method, getter)]
    fn body(this: &HtmlDocument) -> Option<HtmlElement>;

    #[wasm_bindgen(extends = Object)]
    #[derive(Debug, Clone)]
    type HtmlElement;

    #[wasm_bindgen(method, getter)]
    fn id(this: &HtmlElement) -> String;

    #[wasm_bindgen(method, getter, js_name = innerHTML)]
    fn inner_html(this: &HtmlElement) -> JsString;

    #[wasm_bindgen(method, setter, js_name = innerHTML)]
    fn set_inner_html(this: &HtmlElement, html: &str);

    #[wasm_bindgen(method, getter, js_name = textContent)]
    fn text_content(this: &HtmlElement) -> Option<JsString>;

    #[wasm_bindgen(method, getter)]
    fn rows(this: &HtmlElement) -> Option<HtmlCollection>;

    #[wasm_bindgen(method, getter)]
    fn cells(this: &HtmlElement) -> Option<HtmlCollection>;

    #[wasm_bindgen(method, setter)]
    fn set_href(this: &HtmlElement, href: &str);

    #[wasm_bindgen(method, setter)]
    fn set_download(this: &HtmlElement, file_name: &str);

    #[wasm_bindgen(method, js_name = appendChild)]
    fn append_child(this: &HtmlElement, child: &HtmlElement);

    #[wasm_bindgen(method, js_name = removeChild)]
    fn remove_child(this: &HtmlElement, child: &HtmlElement);

    #[wasm_bindgen(method, js_name = dispatchEvent)]
    fn dispatch_event(this: &HtmlElement, event: &DomEvent) -> bool;

    #[wasm_bindgen(extends = Object)]
    type HtmlCollection;

    #[wasm_bindgen(method, getter)]
    fn length(this: &HtmlCollection) -> u32;

    #[wasm_bindgen(method)]
    fn item(this: &HtmlCollection, index: u32) -> Option<HtmlElement>;

    #[wasm_bindgen(extends = Object)]
    type DomEvent;

    #[wasm_bindgen(method, js_name = initEvent)]
    fn init_event(this: &DomEvent, kind: &str, bubbles: bool, cancelable: bool);

    #[wasm_bindgen(extends = Object)]
    type Blob;

    #[wasm_bindgen(constructor, catch)]
    fn new(parts: &Array, options: &Object) -> Result<Blob, JsValue>;

    #[wasm_bindgen(js_namespace = URL, js_name = createObjectURL, catch)]
    fn create_object_url(blob: &Blob) -> Result<String, JsValue>;

    #[wasm_bindgen(js_namespace = URL, js_name = revokeObjectURL)]
    fn revoke_object_url(url: &str);
}

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn checked_arg(value: JsString) -> Result<String, JsError> {
    checked_text(value).map_err(to_js_error)
}

fn checked_opt_arg(value: Option<JsString>) -> Result<Option<String>, JsError> {
    value.map(checked_arg).transpose()
}

fn global_property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn document() -> Result<HtmlDocument, JsError> {
    global_property(&js_sys::global(), "document")
        .map(|d| d.unchecked_into::<HtmlDocument>())
        .ok_or_else(|| JsError::new("No document available in this environment"))
}

// =============================================================================
// Table lookup
// =============================================================================

struct DomLookup<'a>(&'a HtmlDocument);

impl ElementLookup for DomLookup<'_> {
    type Handle = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.0.get_element_by_id(id)
    }
}

fn checked_text(text: JsString) -> Result<String, ExportError> {
    if !text.is_valid_utf16() {
        return Err(ExportError::encoding(
            "text contains an unpaired surrogate",
        ));
    }
    Ok(text.into())
}

/// Resolve a table argument (element id or element) and snapshot the table.
///
/// Values that are DOM nodes are used directly; anything else is taken as an
/// element id.
pub fn resolve_table(table: &JsValue) -> Result<Table, ExportError> {
    let doc = document().map_err(|_| ExportError::not_found("document"))?;
    let lookup = DomLookup(&doc);

    let element = if Reflect::has(table, &JsValue::from_str("nodeType")).unwrap_or(false) {
        ElementRef::Direct(table.clone().unchecked_into::<HtmlElement>()).resolve(lookup)?
    } else {
        let id = lookup_key(table)?;
        ElementRef::Identifier(id.as_str()).resolve(lookup)?
    };

    snapshot(&element)
}

/// The id `getElementById` would look up: strings as-is, anything else
/// through JavaScript's `String()` conversion.
fn lookup_key(value: &JsValue) -> Result<String, ExportError> {
    if value.is_string() {
        return checked_text(value.clone().unchecked_into::<JsString>());
    }

    let key = global_property(&js_sys::global(), "String")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call1(&JsValue::UNDEFINED, value).ok())
        .and_then(|s| s.dyn_into::<JsString>().ok())
        .ok_or_else(|| ExportError::not_found(format!("{value:?}")))?;
    checked_text(key)
}

fn snapshot(element: &HtmlElement) -> Result<Table, ExportError> {
    let id = element.id();
    let rows = element
        .rows()
        .ok_or_else(|| ExportError::not_found(format!("{id} (not a table)")))?;

    let mut snapshot_rows = Vec::with_capacity(rows.length() as usize);
    for tr in (0..rows.length()).filter_map(|i| rows.item(i)) {
        let mut row = Row::default();
        if let Some(cells) = tr.cells() {
            for cell in (0..cells.length()).filter_map(|i| cells.item(i)) {
                let text = cell.text_content().map(checked_text).transpose()?;
                row.push(Cell::new(text.unwrap_or_default()));
            }
        }
        snapshot_rows.push(row);
    }

    let table = Table::new(snapshot_rows, checked_text(element.inner_html())?);
    Ok(if id.is_empty() { table } else { table.with_id(id) })
}

// =============================================================================
// BrowserHost - download primitives of the page
// =============================================================================

/// [`DownloadHost`] backed by the browser page
pub struct BrowserHost {
    document: HtmlDocument,
    navigator: Option<JsValue>,
}

impl BrowserHost {
    fn new(document: HtmlDocument) -> Self {
        Self {
            document,
            navigator: global_property(&js_sys::global(), "navigator"),
        }
    }

    fn ms_save_blob(&self) -> Option<(JsValue, Function)> {
        let navigator = self.navigator.clone()?;
        let save = global_property(&navigator, "msSaveBlob")?;
        save.dyn_into::<Function>().ok().map(|f| (navigator, f))
    }

    fn blob(blob: &BinaryObject) -> Result<Blob, JsValue> {
        let parts: Array = blob
            .parts()
            .iter()
            .map(|part| Uint8Array::from(part.as_slice()))
            .collect();
        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("type"),
            &JsValue::from_str(blob.mime_type()),
        )?;
        Blob::new(&parts, &options)
    }
}

impl DownloadHost for BrowserHost {
    fn capabilities(&self) -> HostCapabilities {
        let object_url = global_property(&js_sys::global(), "URL")
            .and_then(|url| global_property(&url, "createObjectURL"))
            .map_or(false, |f| f.is_function());

        HostCapabilities {
            native_save: self.ms_save_blob().is_some(),
            object_url,
        }
    }

    fn save_blob(&self, blob: &BinaryObject, file_name: &str) {
        let Some((navigator, save)) = self.ms_save_blob() else {
            log::warn!("msSaveBlob disappeared before saving '{file_name}'");
            return;
        };
        let result = Self::blob(blob)
            .and_then(|b| save.call2(&navigator, &b, &JsValue::from_str(file_name)));
        if let Err(e) = result {
            log::warn!("msSaveBlob failed for '{file_name}': {e:?}");
        }
    }

    fn create_object_url(&self, blob: &BinaryObject) -> Option<String> {
        match Self::blob(blob).and_then(|b| create_object_url(&b)) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("createObjectURL failed: {e:?}");
                None
            }
        }
    }

    fn revoke_object_url(&self, url: &str) {
        revoke_object_url(url);
    }

    fn click_anchor(&self, anchor: &Anchor) {
        let Some(body) = self.document.body() else {
            log::warn!("no document body to attach the download anchor to");
            return;
        };

        let a = self.document.create_element("a");
        a.set_inner_html(&anchor.label);
        a.set_download(&anchor.download);
        a.set_href(&anchor.href);
        body.append_child(&a);

        let event = self.document.create_event("MouseEvents");
        event.init_event("click", false, false);
        a.dispatch_event(&event);

        body.remove_child(&a);
    }
}

// =============================================================================
// Exported API
// =============================================================================

thread_local! {
    static EXPORTER: RefCell<Option<Exporter>> = RefCell::new(None);
}

fn with_exporter<R>(f: impl FnOnce(&mut Exporter) -> R) -> Result<R, JsError> {
    let doc = document()?;
    Ok(EXPORTER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let exporter = slot.get_or_insert_with(|| Exporter::new(BrowserHost::new(doc)));
        f(exporter)
    }))
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    table_export::version().to_string()
}

/// Export a table as `<fileName>.csv`.
///
/// A non-empty `delimiter` or `lineTerminator` replaces the default for this
/// and every later call.
#[wasm_bindgen(js_name = toCSV)]
pub fn to_csv(
    file_name: JsString,
    table: JsValue,
    delimiter: Option<JsString>,
    line_terminator: Option<JsString>,
) -> Result<(), JsError> {
    let file_name = checked_arg(file_name)?;
    let delimiter = checked_opt_arg(delimiter)?;
    let line_terminator = checked_opt_arg(line_terminator)?;

    with_exporter(|exporter| -> table_export::Result<()> {
        exporter.merge_csv_overrides(delimiter.as_deref(), line_terminator.as_deref());
        let table = resolve_table(&table)?;
        exporter.export_csv(&file_name, &table, None, None)
    })?
    .map_err(to_js_error)
}

/// Export a table as `<fileName>.xls`
#[wasm_bindgen(js_name = toExcel)]
pub fn to_excel(
    file_name: JsString,
    worksheet_name: Option<JsString>,
    table: JsValue,
) -> Result<(), JsError> {
    let file_name = checked_arg(file_name)?;
    let worksheet_name = checked_opt_arg(worksheet_name)?;

    with_exporter(|exporter| -> table_export::Result<()> {
        let table = resolve_table(&table)?;
        exporter.export_excel(&file_name, worksheet_name.as_deref().unwrap_or(""), &table)
    })?
    .map_err(to_js_error)
}

#[wasm_bindgen(start)]
pub fn init() {}
