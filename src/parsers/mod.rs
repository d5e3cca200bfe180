pub mod html;
pub mod text;


use scraper::Selector;

/// Product card links on the listing page
pub const PRODUCT_CARD_SELECTOR: &str = "a.product-card__title";

/// Heading holding the product title
pub const PRODUCT_TITLE_SELECTOR: &str = "h1.product__title";

/// Block holding the product description
pub const PRODUCT_DESCRIPTION_SELECTOR: &str = "div.tab__content.rte";

/// Parses a CSS selector, logging and discarding it if invalid
pub(crate) fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            ::log::error!("Invalid selector '{}': {}", css, e);
            None
        }
    }
}
