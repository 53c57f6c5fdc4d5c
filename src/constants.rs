/// Page contract shared with the markup and stylesheet.
///
/// The id must match the element rendered by the page template; the class must
/// match the stylesheet rule that hides an element.
// Menu container toggled between shown and hidden
pub const MOBILE_MENU_ID: &str = "mobile-menu";

// Class the stylesheet renders as `display: none`
pub const HIDDEN_CLASS: &str = "hidden";
