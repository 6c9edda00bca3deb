//! Product rendering for console output.

use catalog_products::Product;

use crate::config::OutputFormat;

/// One-line rendering of a product.
pub fn product_line(product: &Product, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text_line(product)),
        OutputFormat::Json => Ok(serde_json::to_string(product)?),
    }
}

fn text_line(product: &Product) -> String {
    let id = product
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "ID: {id} | {} | Price: ${:.2} | Stock: {} | Category: {}",
        product.name, product.price, product.stock, product.category
    )
}
