use serde::{Serialize, Deserialize};

/// One scraped listing entry. Identity is exact equality across all three
/// fields, so a record whose price changed counts as a new entry rather
/// than an update to an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl ProductRecord {
    /// Column header row. Keep in sync with the serde renames above.
    pub const HEADER: [&'static str; 3] = ["Product Name", "Price", "Link"];
}
