//! UI components for the storefront page.

pub mod category_card;
pub mod feature_card;
pub mod firefly_field;
pub mod hero;
pub mod hero_hanger;
pub mod lamp_card;
pub mod section_header;
pub mod site_footer;
