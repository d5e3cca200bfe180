use crate::parsers::{
    PRODUCT_CARD_SELECTOR, PRODUCT_DESCRIPTION_SELECTOR, PRODUCT_TITLE_SELECTOR, selector, text,
};
use crate::results::ProductDetails;
use scraper::{ElementRef, Html};

/// Elements whose text is code or inert markup rather than page content
const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Extracts the raw `href` of every product card on a listing page
///
/// Cards without an `href`, or with an empty one, are skipped. Order follows
/// the document.
pub fn parse_product_links(html: &str) -> Vec<String> {
    let Some(card_selector) = selector(PRODUCT_CARD_SELECTOR) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let links = doc
        .select(&card_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|s| s.to_string())
        .collect::<Vec<String>>();

    ::log::debug!("HTML parser found {} product cards", links.len());
    if !links.is_empty() {
        ::log::debug!(
            "First few links: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}

/// Extracts title and description from a product page
///
/// A missing element leaves its field as the sentinel.
pub fn parse_product_details(html: &str) -> ProductDetails {
    let doc = Html::parse_document(html);
    let mut details = ProductDetails::unavailable();

    if let Some(title_selector) = selector(PRODUCT_TITLE_SELECTOR) {
        match doc.select(&title_selector).next() {
            Some(title) => details.title = text::inline_text(content_text(title)),
            None => ::log::debug!("No element matched {}", PRODUCT_TITLE_SELECTOR),
        }
    }

    if let Some(description_selector) = selector(PRODUCT_DESCRIPTION_SELECTOR) {
        match doc.select(&description_selector).next() {
            Some(description) => {
                details.description = text::block_text(content_text(description))
            }
            None => ::log::debug!("No element matched {}", PRODUCT_DESCRIPTION_SELECTOR),
        }
    }

    details
}

/// Text nodes under `element`, skipping script, style and template bodies
fn content_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|parent| NON_CONTENT_ELEMENTS.contains(&parent.name()));
        if hidden { None } else { Some(&**text) }
    })
}
