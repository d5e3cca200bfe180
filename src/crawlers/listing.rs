use crate::config::ScrapeConfig;
use crate::crawlers::PageFetcher;
use crate::parsers::html;
use crate::utils::absolute_product_url;

/// Fetches the listing page and returns the absolute product URLs on it
///
/// A failed fetch is logged and yields an empty list.
pub async fn collect_product_links<F: PageFetcher>(
    fetcher: &F,
    config: &ScrapeConfig,
) -> Vec<String> {
    ::log::info!("Fetching product links from: {}", config.collection_url);

    let links: Vec<String> = match fetcher.fetch_html(&config.collection_url).await {
        Ok(body) => html::parse_product_links(&body)
            .iter()
            .map(|href| absolute_product_url(&config.base_url, href))
            .collect(),
        Err(e) if e.is_network() => {
            ::log::error!("Error fetching the collection page: {}", e);
            Vec::new()
        }
        Err(e) => {
            ::log::error!("Could not read the collection page: {}", e);
            Vec::new()
        }
    };

    ::log::info!("Found {} product links.", links.len());
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawlers::HttpFetcher;
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn config_for(server: &MockServer) -> ScrapeConfig {
        ScrapeConfig {
            collection_url: format!("{}/collections/oahu", server.uri()),
            base_url: server.uri(),
            ..ScrapeConfig::default()
        }
    }

    #[tokio::test]
    async fn test_collects_every_card() {
        let server = MockServer::start().await;
        let listing = r#"<html><body>
            <a class="product-card__title" href="/products/a">A</a>
            <a class="product-card__title" href="/products/b">B</a>
            <a class="product-card__title" href="/products/c">C</a>
        </body></html>"#;
        Mock::given(method("GET"))
            .and(path("/collections/oahu"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let links = collect_product_links(&fetcher, &config).await;

        assert_eq!(
            links,
            vec![
                format!("{}/products/a", server.uri()),
                format!("{}/products/b", server.uri()),
                format!("{}/products/c", server.uri()),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_cards_gives_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections/oahu"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Nothing here</p>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        assert!(
            collect_product_links(&fetcher, &config_for(&server))
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_failed_listing_fetch_gives_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/collections/oahu"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        assert!(
            collect_product_links(&fetcher, &config_for(&server))
                .await
                .is_empty()
        );
    }
}
