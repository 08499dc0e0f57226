use crate::core::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element that the page must provide.
pub fn require_element<T: JsCast>(document: &web::Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

/// The page may ship its own canvas; otherwise one is appended to `<body>`.
pub fn ensure_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Ok(canvas) = require_element::<web::HtmlCanvasElement>(document, id) {
        return Ok(canvas);
    }
    let el = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_id(id);
    _ = el.set_attribute("style", "display:block;width:100vw;height:100vh");
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

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

pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("style {}={} failed: {:?}", property, value, e);
    }
}
