#![cfg(target_arch = "wasm32")]
use crate::constants::MOBILE_MENU_ID;
use crate::menu::Visibility;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod menu;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mobile-menu starting");

    Ok(())
}

fn document() -> anyhow::Result<web::Document> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))
}

/// Attach the toggle to the click event of `button_id`.
///
/// Use either this or a markup binding such as `onclick="toggleMobileMenu()"`
/// on a given button, never both: each click would toggle twice and the menu
/// would never change.
#[wasm_bindgen(js_name = wireMobileMenuButton)]
pub fn wire_mobile_menu_button(button_id: &str) -> bool {
    match document() {
        Ok(document) => events::wire_menu_button(&document, button_id),
        Err(e) => {
            log::warn!("[menu] {}", e);
            false
        }
    }
}

/// Click handler for the menu button, bindable from markup as
/// `onclick="toggleMobileMenu()"`. Do not also call `wireMobileMenuButton`
/// for the same button.
#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() {
    match document() {
        Ok(document) => {
            menu::on_menu_click(&document);
        }
        Err(e) => log::warn!("[menu] {}", e),
    }
}

#[wasm_bindgen(js_name = showMobileMenu)]
pub fn show_mobile_menu() {
    set_mobile_menu(Visibility::Visible);
}

#[wasm_bindgen(js_name = hideMobileMenu)]
pub fn hide_mobile_menu() {
    set_mobile_menu(Visibility::Hidden);
}

fn set_mobile_menu(state: Visibility) {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            log::warn!("[menu] {}", e);
            return;
        }
    };
    if let Err(e) = menu::set_by_id(&document, MOBILE_MENU_ID, state) {
        log::warn!("[menu] {}", e);
    }
}
