use knot_core::{distort::reset, input, PointerState, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in surface-local CSS pixels plus the surface size,
/// mapped to NDC via the shared conversion.
#[inline]
pub fn pointer_event_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> PointerState {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    input::pointer_ndc(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Wire pointermove (latest-value pointer state) and pointerleave (reset).
///
/// Handlers run on the same logical thread as the frame callback, interleaved
/// between frames, so `Rc<RefCell<_>>` is all the sharing that is needed.
pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    pointer: Rc<RefCell<PointerState>>,
) {
    // pointermove
    {
        let canvas_move = canvas.clone();
        let pointer_move = pointer.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *pointer_move.borrow_mut() = pointer_event_ndc(&ev, &canvas_move);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave -> flatten the knot; the next frame's distort pass takes
    // over again with the last-known pointer
    {
        let scene_leave = scene.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            reset(&mut scene_leave.borrow_mut().knot);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
