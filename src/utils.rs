use url::Url;

/// Builds the absolute URL of a product from its card `href`
///
/// Relative links are appended to `base_url` verbatim, with no slash
/// handling, so `"https://shop"` + `"/p/1"` gives `"https://shop/p/1"`.
/// Links that are already absolute are returned unchanged.
pub fn absolute_product_url(base_url: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        href.to_string()
    } else {
        format!("{base_url}{href}")
    }
}
