use scraper::{Html, Selector};

use crate::error::Error;
use crate::models::ProductRecord;

/// Total item count advertised by the listing page, read from the
/// load-more heading's `data-total` attribute.
pub fn total_item_count(html: &str) -> Result<u32, Error> {
    let doc = Html::parse_document(html);
    let heading = Selector::parse("h2.load-more-heading").unwrap();

    let total = doc
        .select(&heading)
        .next()
        .and_then(|e| e.value().attr("data-total"))
        .ok_or_else(|| {
            Error::Extraction("listing page has no h2.load-more-heading[data-total]".to_string())
        })?;

    total
        .trim()
        .parse()
        .map_err(|_| Error::Extraction(format!("item count is not a number: {total:?}")))
}

/// Extract every product on the expanded listing page, in page order.
/// A missing field on any item fails the whole parse; no partial results.
pub fn parse_products(html: &str, link_prefix: &str) -> Result<Vec<ProductRecord>, Error> {
    let doc = Html::parse_document(html);
    let item_sel = Selector::parse("li.product-item").unwrap();
    let name_sel = Selector::parse(".item-details h3 a").unwrap();
    let price_sel = Selector::parse(".item-details strong span").unwrap();
    let link_sel = Selector::parse(".image-container a").unwrap();

    let mut products = Vec::new();
    for (index, item) in doc.select(&item_sel).enumerate() {
        let name = item
            .select(&name_sel)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .ok_or_else(|| missing_field(index, "name"))?;

        // The site renders prices like "Rs. 1,299"; strip the thousands
        // separator so the field matches across runs.
        let price = item
            .select(&price_sel)
            .next()
            .map(|e| e.text().collect::<String>().trim().replace(',', ""))
            .ok_or_else(|| missing_field(index, "price"))?;

        let href = item
            .select(&link_sel)
            .next()
            .and_then(|e| e.value().attr("href"))
            .ok_or_else(|| missing_field(index, "link"))?;

        products.push(ProductRecord {
            name,
            price,
            link: format!("{link_prefix}{href}"),
        });
    }

    Ok(products)
}

fn missing_field(index: usize, field: &str) -> Error {
    Error::Extraction(format!("product item {index}: missing {field} element"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_PAGE: &str = r#"
        <html><body>
        <h2 class="load-more-heading" data-total="164">Showing 36 of 164</h2>
        </body></html>"#;

    fn item(name: &str, price: &str, href: &str) -> String {
        format!(
            r#"<li class="product-item">
                <div class="image-container"><a href="{href}"><img/></a></div>
                <div class="item-details">
                    <h3 class="item-heading"><a class="link" href="{href}">{name}</a></h3>
                    <strong class="item-price"><span class="price regular">{price}</span></strong>
                </div>
            </li>"#
        )
    }

    fn listing(items: &[String]) -> String {
        format!("<html><body><ul class=\"products-listing\">{}</ul></body></html>", items.join(""))
    }

    #[test]
    fn reads_total_item_count() {
        assert_eq!(total_item_count(FIRST_PAGE).unwrap(), 164);
    }

    #[test]
    fn missing_count_heading_is_an_extraction_error() {
        let err = total_item_count("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn non_numeric_count_is_an_extraction_error() {
        let html = r#"<h2 class="load-more-heading" data-total="lots"></h2>"#;
        let err = total_item_count(html).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn parses_products_in_page_order() {
        let html = listing(&[
            item("Regular Fit T-shirt", "Rs. 399", "/en_in/productpage.0685816001.html"),
            item("Slim Fit T-shirt", "Rs. 599", "/en_in/productpage.0685816002.html"),
        ]);

        let products = parse_products(&html, "https://www2.hm.com").unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Regular Fit T-shirt");
        assert_eq!(products[0].price, "Rs. 399");
        assert_eq!(
            products[0].link,
            "https://www2.hm.com/en_in/productpage.0685816001.html"
        );
        assert_eq!(products[1].name, "Slim Fit T-shirt");
    }

    #[test]
    fn strips_thousands_separator_from_price() {
        let html = listing(&[item("Premium Hoodie", "Rs. 1,299", "/en_in/p.html")]);
        let products = parse_products(&html, "").unwrap();
        assert_eq!(products[0].price, "Rs. 1299");
    }

    #[test]
    fn missing_price_fails_the_whole_parse() {
        let broken = r#"<li class="product-item">
            <div class="image-container"><a href="/p.html"></a></div>
            <div class="item-details">
                <h3 class="item-heading"><a class="link" href="/p.html">Shirt</a></h3>
            </div>
        </li>"#;
        let html = listing(&[item("Ok", "Rs. 399", "/ok.html"), broken.to_string()]);

        let err = parse_products(&html, "").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn empty_listing_parses_to_no_products() {
        let products = parse_products("<html><body></body></html>", "").unwrap();
        assert!(products.is_empty());
    }
}
