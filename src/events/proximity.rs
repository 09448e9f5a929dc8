use crate::constants::PROXIMITY_RANGE_PX;
use crate::core::proximity;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive the contact button's border emphasis from pointer distance.
///
/// Stateless and independent of the frame loop: the opacity is recomputed
/// from scratch on every mouse move. Pages without the button just skip the
/// wiring.
pub fn wire_button_proximity(document: &web::Document) {
    let button = match dom::contact_button(document) {
        Some(b) => b,
        None => {
            log::warn!("[button] no contact button on this page, proximity effect disabled");
            return;
        }
    };

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = button.get_bounding_client_rect();
        let center_x = (rect.left() + rect.width() * 0.5) as f32;
        let center_y = (rect.top() + rect.height() * 0.5) as f32;
        let opacity = proximity::border_emphasis(
            ev.client_x() as f32,
            ev.client_y() as f32,
            center_x,
            center_y,
            PROXIMITY_RANGE_PX,
        );
        dom::set_border_color(&button, &proximity::border_color_css(opacity));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
