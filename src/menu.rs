use crate::constants::{HIDDEN_CLASS, MOBILE_MENU_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("no element with id #{id} in the document")]
    ElementNotFound { id: String },
}

/// Something carrying a class list, e.g. a DOM element.
///
/// Methods take `&self`: element handles are shared and the underlying
/// document owns the state.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Resolves ids against a document the caller owns.
pub trait ElementLookup {
    type Element: ClassTarget;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

#[inline]
pub fn visibility<E: ClassTarget + ?Sized>(el: &E) -> Visibility {
    if el.has_class(HIDDEN_CLASS) {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

#[inline]
pub fn show<E: ClassTarget + ?Sized>(el: &E) {
    el.remove_class(HIDDEN_CLASS);
}

#[inline]
pub fn hide<E: ClassTarget + ?Sized>(el: &E) {
    el.add_class(HIDDEN_CLASS);
}

/// Flip `el` between shown and hidden; returns the state it ends up in.
pub fn toggle<E: ClassTarget + ?Sized>(el: &E) -> Visibility {
    if visibility(el).is_hidden() {
        show(el);
        Visibility::Visible
    } else {
        hide(el);
        Visibility::Hidden
    }
}

/// Look up `id` and toggle it. A missing element leaves the document untouched.
pub fn toggle_by_id<D: ElementLookup + ?Sized>(
    doc: &D,
    id: &str,
) -> Result<Visibility, MenuError> {
    let el = doc
        .element_by_id(id)
        .ok_or_else(|| MenuError::ElementNotFound { id: id.to_string() })?;
    let next = toggle(&el);
    log::debug!("[menu] #{} -> {:?}", id, next);
    Ok(next)
}

/// Force `id` into `state` regardless of where it started.
pub fn set_by_id<D: ElementLookup + ?Sized>(
    doc: &D,
    id: &str,
    state: Visibility,
) -> Result<(), MenuError> {
    let el = doc
        .element_by_id(id)
        .ok_or_else(|| MenuError::ElementNotFound { id: id.to_string() })?;
    match state {
        Visibility::Visible => show(&el),
        Visibility::Hidden => hide(&el),
    }
    Ok(())
}

#[inline]
pub fn toggle_mobile_menu<D: ElementLookup + ?Sized>(doc: &D) -> Result<Visibility, MenuError> {
    toggle_by_id(doc, MOBILE_MENU_ID)
}

/// Body of every menu click handler: one call is one inversion.
///
/// A missing menu is logged and skipped so the event handler never throws.
pub fn on_menu_click<D: ElementLookup + ?Sized>(doc: &D) -> Option<Visibility> {
    match toggle_mobile_menu(doc) {
        Ok(next) => Some(next),
        Err(e) => {
            log::warn!("[menu] {}", e);
            None
        }
    }
}
