use crate::crawlers::PageFetcher;
use crate::parsers::html;
use crate::results::ProductDetails;

/// Fetches one product page and extracts its title and description
///
/// Never fails: a fetch error is logged and both fields come back as the
/// sentinel, so one bad page does not stop the run.
pub async fn scrape_product_details<F: PageFetcher>(fetcher: &F, url: &str) -> ProductDetails {
    ::log::info!("Scraping details from: {}", url);

    match fetcher.fetch_html(url).await {
        Ok(body) => html::parse_product_details(&body),
        Err(e) if e.is_network() => {
            ::log::error!("Error scraping details from {}: {}", url, e);
            ProductDetails::unavailable()
        }
        Err(e) => {
            ::log::error!("Could not read product page {}: {}", url, e);
            ProductDetails::unavailable()
        }
    }
}
