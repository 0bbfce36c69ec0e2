use reqwest::blocking::Client;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::models::ProductRecord;
use crate::parser;

/// Fetch the full category listing.
///
/// Two round trips: the listing page reports the category's total item
/// count, and a second request expands the page size to that count so the
/// whole category arrives in one response.
pub fn fetch_listing(config: &Config) -> Result<Vec<ProductRecord>, Error> {
    let client = Client::builder().user_agent(config.user_agent.as_str()).build()?;

    let first_page = get_text(&client, &config.listing_url)?;
    let total = parser::total_item_count(&first_page)?;
    info!(total, "listing reports total item count");

    let full_page = get_text(&client, &config.full_listing_url(total))?;
    let products = parser::parse_products(&full_page, &config.link_prefix)?;
    info!(count = products.len(), "fetched listing");

    Ok(products)
}

fn get_text(client: &Client, url: &str) -> Result<String, Error> {
    Ok(client.get(url).send()?.error_for_status()?.text()?)
}
