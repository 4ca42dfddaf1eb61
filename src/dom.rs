use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + 'static,
) {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return;
    };
    // one closure shared by every match
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            let _ = node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

pub fn show(el: &web::HtmlElement) {
    let _ = el.style().set_property("display", "block");
    let _ = el.class_list().add_1("active");
}

pub fn hide(el: &web::HtmlElement) {
    let _ = el.style().set_property("display", "none");
    let _ = el.class_list().remove_1("active");
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    let _ = canvas.style().set_property("cursor", cursor);
}

/// Dispatch a `CustomEvent` named `name` on window.
pub fn dispatch_window_event(name: &str, detail: &wasm_bindgen::JsValue) {
    let Some(window) = web::window() else {
        return;
    };
    let init = web::CustomEventInit::new();
    init.set_detail(detail);
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => {
            let _ = window.dispatch_event(&ev);
        }
        Err(e) => log::error!("[dom] CustomEvent {} error: {:?}", name, e),
    }
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
