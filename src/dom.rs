use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// The contact button, when the page has one.
pub fn contact_button(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .query_selector(crate::constants::CONTACT_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Write a border color onto an element's inline style.
pub fn set_border_color(element: &web::HtmlElement, color: &str) {
    let _ = element.style().set_property("border-color", color);
}
