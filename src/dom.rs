use crate::menu::{ClassTarget, ElementLookup};
use wasm_bindgen::JsCast;
use web_sys as web;

impl ClassTarget for web::Element {
    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    #[inline]
    fn add_class(&self, class: &str) {
        _ = self.class_list().add_1(class);
    }

    #[inline]
    fn remove_class(&self, class: &str) {
        _ = self.class_list().remove_1(class);
    }
}

impl ElementLookup for web::Document {
    type Element = web::Element;

    #[inline]
    fn element_by_id(&self, id: &str) -> Option<web::Element> {
        self.get_element_by_id(id)
    }
}

/// Returns `false` when no element with `element_id` exists.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}
