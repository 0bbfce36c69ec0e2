use std::path::PathBuf;

/// Immutable run configuration. Everything the fetcher and the stores need
/// is handed in from here; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Category listing page.
    pub listing_url: String,
    /// Prefix for the relative product links on the listing page.
    pub link_prefix: String,
    /// Product-type token the listing's query string expects.
    pub product_type: String,
    pub user_agent: String,
    /// Snapshot of the last observed full listing.
    pub snapshot_path: PathBuf,
    /// Report of new records, rewritten on every compare run.
    pub report_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_url: "https://www2.hm.com/en_in/men/shop-by-product/tshirts-tank-tops.html"
                .to_string(),
            link_prefix: "https://www2.hm.com".to_string(),
            product_type: "men_tshirtstanks".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_0) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/81.0.4044.138 Safari/537.36"
                .to_string(),
            snapshot_path: PathBuf::from("base_products.csv"),
            report_path: PathBuf::from("update.csv"),
        }
    }
}

impl Config {
    /// Listing URL with the page size expanded to `page_size`, so a single
    /// request returns the whole category and pagination never applies.
    pub fn full_listing_url(&self, page_size: u32) -> String {
        format!(
            "{}?product-type={}&sort=stock&image-size=small&image=model&offset=0&page-size={}",
            self.listing_url, self.product_type, page_size
        )
    }
}
