//! Export Bindings
//!
//! Rasterizes the off-screen export page with `html2canvas` and turns the
//! image into a PNG download or a single-page A4 PDF via `jsPDF`. Both
//! libraries are loaded by the host page.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use paper_todo_core::view::fit_to_page_width;
use paper_todo_core::{ExportFormat, ViewState};

/// DOM id of the page element that is rasterized
pub const EXPORT_PAGE_ID: &str = "export-page";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = html2canvas)]
    fn html2canvas(node: &web_sys::HtmlElement, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = jspdf, js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = jspdf, js_class = "jsPDF")]
    fn new(orientation: &str, unit: &str, format: &str) -> JsPdf;

    #[wasm_bindgen(method, js_name = addImage)]
    fn add_image(this: &JsPdf, image_data: &str, format: &str, x: f64, y: f64, width: f64, height: f64);

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, file_name: &str);
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("element '{0}' not found")]
    MissingNode(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ExportError {
    fn from(value: JsValue) -> Self {
        ExportError::Js(format!("{:?}", value))
    }
}

#[derive(Serialize)]
struct Html2CanvasOptions {
    scale: f64,
}

/// Rasterize the export page and download the result
pub async fn run_export(format: ExportFormat, view: ViewState, scale: f64) -> Result<(), ExportError> {
    // Let the busy state render the export page first
    gloo_timers::future::TimeoutFuture::new(0).await;

    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| ExportError::MissingNode("document".to_string()))?;
    let page = document
        .get_element_by_id(EXPORT_PAGE_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ExportError::MissingNode(EXPORT_PAGE_ID.to_string()))?;

    let options = serde_wasm_bindgen::to_value(&Html2CanvasOptions { scale }).map_err(|e| ExportError::Js(e.to_string()))?;
    let canvas: web_sys::HtmlCanvasElement = JsFuture::from(html2canvas(&page, &options)).await?.dyn_into()?;
    let image_data = canvas.to_data_url_with_type("image/png")?;
    let file_name = format.file_name(view.view);

    match format {
        ExportFormat::Png => download(&document, &image_data, &file_name)?,
        ExportFormat::Pdf => {
            let orientation = view.orientation;
            let pdf = JsPdf::new(orientation.pdf_code(), "mm", "a4");
            let (page_width, _) = orientation.a4_mm();
            let (width, height) = fit_to_page_width(f64::from(canvas.width()), f64::from(canvas.height()), page_width);
            pdf.add_image(&image_data, "PNG", 0.0, 0.0, width, height);
            pdf.save(&file_name);
        }
    }
    Ok(())
}

fn download(document: &web_sys::Document, href: &str, file_name: &str) -> Result<(), ExportError> {
    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Js("created element is not an anchor".to_string()))?;
    link.set_href(href);
    link.set_download(file_name);
    let body = document.body().ok_or_else(|| ExportError::MissingNode("body".to_string()))?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}
