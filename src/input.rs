use glam::Vec2;
use web_sys as web;

/// Last pointer position in normalized device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    /// False until the first move; before that nothing is under the pointer.
    pub inside: bool,
}

/// Map a client-space point into NDC of a rect at (`left`, `top`) sized
/// `width` x `height`. Y points up. Degenerate rects map to the centre.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = (x - left) / width;
    let v = (y - top) / height;
    Vec2::new(u * 2.0 - 1.0, -(v * 2.0 - 1.0))
}

#[inline]
pub fn within_ndc(ndc: Vec2) -> bool {
    ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    let w = canvas.width().max(1) as f32;
    let h = canvas.height().max(1) as f32;
    w / h
}
