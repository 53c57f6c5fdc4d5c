use crate::{dom, menu};
use web_sys as web;

/// Toggle the mobile menu whenever `button_id` is clicked.
///
/// Returns `false` when the page has no such button.
pub fn wire_menu_button(document: &web::Document, button_id: &str) -> bool {
    let doc = document.clone();
    let wired = dom::add_click_listener(document, button_id, move || {
        menu::on_menu_click(&doc);
    });
    if !wired {
        log::warn!("[menu] no #{} to wire", button_id);
    }
    wired
}
