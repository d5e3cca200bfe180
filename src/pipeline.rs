use crate::config::ScrapeConfig;
use crate::crawlers::{PageFetcher, listing, product};
use crate::report;
use crate::results::{ProductRecord, RunSummary};

/// Runs collector, extractor and writer in sequence
///
/// Products are visited one at a time in discovery order with a fixed pause
/// after each. Only products with both fields extracted are kept. The report
/// is written only when at least one product was kept; network and write
/// failures are logged and reflected in the summary.
pub async fn run<F: PageFetcher>(fetcher: &F, config: &ScrapeConfig) -> RunSummary {
    let start_time = std::time::Instant::now();
    let links = listing::collect_product_links(fetcher, config).await;

    let delay = config.request_delay();
    let mut records: Vec<ProductRecord> = Vec::with_capacity(links.len());
    for link in &links {
        let details = product::scrape_product_details(fetcher, link).await;
        match details.into_record() {
            Some(record) => records.push(record),
            None => ::log::debug!("Skipping incomplete product: {}", link),
        }

        tokio::time::sleep(delay).await;
    }

    let mut summary = RunSummary {
        links_found: links.len(),
        records_kept: records.len(),
        skipped: links.len() - records.len(),
        output: None,
    };

    if records.is_empty() {
        ::log::warn!("No data was scraped. The output file will not be created.");
    } else {
        match report::write_report(&config.output_path, &config.report_title, &records) {
            Ok(path) => summary.output = Some(path),
            Err(e) => ::log::error!("Error saving file: {}", e),
        }
    }

    ::log::info!(
        "Harvest complete - {} links, {} kept, {} skipped in {:.2} seconds",
        summary.links_found,
        summary.records_kept,
        summary.skipped,
        start_time.elapsed().as_secs_f64()
    );

    summary
}
