use std::io::Write;

use anyhow::Context;
use rust_decimal_macros::dec;

use catalog_core::{Clock, ProductId};
use catalog_infra::{CatalogService, ProductStore};
use catalog_products::Product;

use crate::config::DemoConfig;
use crate::render::product_line;

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            description: "Laptop de alta gama con procesador Intel i7".to_string(),
            ..Product::new("Laptop Dell XPS 15", dec!(1299.99), 10, "Electrónica")
        },
        Product {
            description: "Mouse inalámbrico ergonómico".to_string(),
            ..Product::new("Mouse Logitech MX Master", dec!(99.99), 25, "Accesorios")
        },
        Product {
            description: "Teclado mecánico con iluminación RGB".to_string(),
            ..Product::new("Teclado Mecánico RGB", dec!(149.99), 15, "Accesorios")
        },
        Product {
            description: "Monitor 4K UHD de 27 pulgadas".to_string(),
            ..Product::new("Monitor Samsung 27\"", dec!(399.99), 8, "Electrónica")
        },
    ]
}

fn write_products<W: Write>(
    out: &mut W,
    products: &[Product],
    config: &DemoConfig,
) -> anyhow::Result<()> {
    for product in products {
        writeln!(out, "{}", product_line(product, config.output)?)?;
    }
    Ok(())
}

/// Run the full catalog walkthrough against `catalog`, writing each step to `out`.
///
/// Create four products, list, filter by category, search by name, update a
/// price, move stock, check availability, delete one, list again.
pub fn run_walkthrough<S, C, W>(
    catalog: &CatalogService<S, C>,
    config: &DemoConfig,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ProductStore,
    C: Clock,
    W: Write,
{
    writeln!(out, "=== PRODUCT CATALOG ===")?;

    writeln!(out, "\n--- 1. Creating products ---")?;
    let mut ids = Vec::new();
    for product in seed_products() {
        let created = catalog
            .create_product(product)
            .context("creating seed product")?;
        ids.push(created.id.context("store did not assign an id")?);
    }
    let [laptop, mouse, keyboard, _monitor]: [ProductId; 4] =
        ids.try_into().map_err(|ids: Vec<ProductId>| {
            anyhow::anyhow!("expected four seeded products, got {}", ids.len())
        })?;
    writeln!(out, "Products created")?;

    writeln!(out, "\n--- 2. All products ---")?;
    write_products(out, &catalog.get_all_products(), config)?;
    writeln!(out, "Total products: {}", catalog.get_total_products())?;

    writeln!(out, "\n--- 3. Category 'Electrónica' ---")?;
    write_products(out, &catalog.get_products_by_category("Electrónica"), config)?;

    writeln!(out, "\n--- 4. Names containing 'Mouse' ---")?;
    write_products(out, &catalog.search_products_by_name("Mouse"), config)?;

    writeln!(out, "\n--- 5. Updating laptop price ---")?;
    let mut changed = catalog
        .get_product_by_id(laptop)
        .context("laptop missing before update")?;
    changed.price = dec!(1199.99);
    let updated = catalog
        .update_product(laptop, changed)
        .context("updating laptop price")?;
    writeln!(out, "Updated: {}", product_line(&updated, config.output)?)?;

    writeln!(out, "\n--- 6. Managing stock ---")?;
    let before = catalog
        .get_product_by_id(mouse)
        .context("mouse missing before stock change")?;
    writeln!(out, "Mouse stock before: {}", before.stock)?;
    let sold = catalog.decrease_stock(mouse, 5).context("selling 5 mice")?;
    writeln!(out, "Mouse stock after selling 5: {}", sold.stock)?;
    let restocked = catalog
        .increase_stock(mouse, 10)
        .context("restocking 10 mice")?;
    writeln!(out, "Mouse stock after adding 10: {}", restocked.stock)?;
    match catalog.decrease_stock(mouse, 100) {
        Ok(_) => anyhow::bail!("selling 100 mice should have been rejected"),
        Err(e) => writeln!(out, "Selling 100 rejected: {e}")?,
    }

    writeln!(out, "\n--- 7. Availability ---")?;
    let product = catalog
        .get_product_by_id(laptop)
        .context("laptop missing")?;
    writeln!(out, "{} available? {}", product.name, product.is_available())?;

    writeln!(out, "\n--- 8. Deleting a product ---")?;
    writeln!(out, "Deleting keyboard (ID: {keyboard})")?;
    let deleted = catalog.delete_product(keyboard);
    writeln!(out, "Deleted: {deleted}")?;
    writeln!(out, "Total products after delete: {}", catalog.get_total_products())?;

    writeln!(out, "\n--- 9. Final listing ---")?;
    write_products(out, &catalog.get_all_products(), config)?;

    writeln!(out, "\n=== END ===")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_infra::InMemoryProductStore;

    use crate::config::OutputFormat;

    fn run(config: DemoConfig) -> (String, CatalogService<InMemoryProductStore>) {
        let catalog = CatalogService::new(InMemoryProductStore::new());
        let mut buf = Vec::new();
        run_walkthrough(&catalog, &config, &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), catalog)
    }

    #[test]
    fn walkthrough_reports_each_step() {
        let (output, catalog) = run(DemoConfig::default());

        assert!(output.contains("Total products: 4"));
        assert!(output.contains("Mouse stock after selling 5: 20"));
        assert!(output.contains("Mouse stock after adding 10: 30"));
        assert!(output.contains("Selling 100 rejected: insufficient stock"));
        assert!(output.contains("Laptop Dell XPS 15 available? true"));
        assert!(output.contains("Deleted: true"));
        assert!(output.contains("Total products after delete: 3"));
        assert!(output.contains("Price: $1199.99"));

        assert_eq!(catalog.get_total_products(), 3);
    }

    #[test]
    fn json_output_renders_objects() {
        let (output, _) = run(DemoConfig {
            output: OutputFormat::Json,
        });

        let objects = output.lines().filter(|l| l.starts_with('{')).count();
        // 4 listed + 2 by category + 1 by name + 3 final.
        assert_eq!(objects, 10);
        assert!(output.contains("Updated: {"));
    }
}
