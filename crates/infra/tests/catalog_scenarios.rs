//! Black-box scenarios against the public catalog API.

use std::sync::Arc;
use std::thread;

use rust_decimal_macros::dec;

use catalog_core::{CatalogError, ProductId};
use catalog_infra::{CatalogService, InMemoryProductStore, ProductStore};
use catalog_products::Product;

fn catalog() -> CatalogService<InMemoryProductStore> {
    CatalogService::new(InMemoryProductStore::new())
}

fn seed(svc: &CatalogService<InMemoryProductStore>) -> Vec<ProductId> {
    let products = [
        Product::new("Laptop Dell XPS 15", dec!(1299.99), 10, "Electrónica"),
        Product::new("Mouse Logitech MX Master", dec!(99.99), 25, "Accesorios"),
        Product::new("Teclado Mecánico RGB", dec!(149.99), 15, "Accesorios"),
        Product::new("Monitor Samsung 27\"", dec!(399.99), 8, "Electrónica"),
    ];
    products
        .into_iter()
        .map(|p| svc.create_product(p).unwrap().id.unwrap())
        .collect()
}

#[test]
fn category_lookup_ignores_case() {
    let svc = catalog();
    seed(&svc);

    let electronics = svc.get_products_by_category("electrónica");

    assert_eq!(electronics.len(), 2);
    assert!(electronics.iter().all(|p| p.category == "Electrónica"));
}

#[test]
fn blank_queries_return_nothing() {
    let svc = catalog();
    seed(&svc);

    assert!(svc.get_products_by_category("").is_empty());
    assert!(svc.search_products_by_name("").is_empty());
    assert_eq!(svc.get_all_products().len(), 4);
}

#[test]
fn name_search_finds_partial_matches() {
    let svc = catalog();
    seed(&svc);

    let found = svc.search_products_by_name("mouse");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Mouse Logitech MX Master");
}

#[test]
fn walkthrough_updates_adjusts_and_deletes() {
    let svc = catalog();
    let ids = seed(&svc);
    let (laptop, mouse, keyboard) = (ids[0], ids[1], ids[2]);

    let mut changed = svc.get_product_by_id(laptop).unwrap();
    changed.price = dec!(1199.99);
    let updated = svc.update_product(laptop, changed).unwrap();
    assert_eq!(updated.price, dec!(1199.99));

    svc.decrease_stock(mouse, 5).unwrap();
    assert_eq!(svc.get_product_by_id(mouse).unwrap().stock, 20);
    svc.increase_stock(mouse, 10).unwrap();
    assert_eq!(svc.get_product_by_id(mouse).unwrap().stock, 30);

    assert!(svc.get_product_by_id(laptop).unwrap().is_available());

    let before = svc.get_total_products();
    assert!(svc.delete_product(keyboard));
    assert_eq!(svc.get_total_products(), before - 1);
    assert_eq!(svc.get_product_by_id(keyboard), None);
    assert!(!svc.store().exists_by_id(keyboard));
}

#[test]
fn failures_are_typed() {
    let svc = catalog();
    let id = svc
        .create_product(Product::new("Mouse", dec!(99.99), 25, "Accesorios"))
        .unwrap()
        .id
        .unwrap();

    assert!(matches!(
        svc.create_product(Product::new("", dec!(1), 1, "x")),
        Err(CatalogError::InvalidProduct(_))
    ));
    assert!(matches!(
        svc.update_product(ProductId::new(99), Product::new("Any", dec!(1), 1, "x")),
        Err(CatalogError::NotFound(_))
    ));
    assert!(matches!(
        svc.decrease_stock(id, 26),
        Err(CatalogError::InsufficientStock { requested: 26, available: 25 })
    ));
    assert!(matches!(
        svc.increase_stock(id, -4),
        Err(CatalogError::InvalidQuantity(-4))
    ));
}

#[test]
fn concurrent_adjustments_do_not_lose_updates() {
    let svc = Arc::new(catalog());
    let id = svc
        .create_product(Product::new("Cable", dec!(5.00), 1_000, "Accesorios"))
        .unwrap()
        .id
        .unwrap();

    let workers: Vec<_> = (0..8)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        svc.increase_stock(id, 3).unwrap();
                    } else {
                        svc.decrease_stock(id, 1).unwrap();
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    // 4 workers * 100 * 3 added, 4 workers * 100 removed.
    assert_eq!(svc.get_product_by_id(id).unwrap().stock, 1_000 + 1_200 - 400);
}

#[test]
fn shared_store_is_visible_across_services() {
    let store = Arc::new(InMemoryProductStore::new());
    let writer = CatalogService::new(Arc::clone(&store));
    let reader = CatalogService::new(Arc::clone(&store));

    let id = writer
        .create_product(Product::new("Monitor", dec!(399.99), 8, "Electrónica"))
        .unwrap()
        .id
        .unwrap();

    assert!(reader.exists(id));
    assert_eq!(store.count(), 1);
}

#[test]
fn services_sharing_a_store_do_not_lose_updates() {
    let store = Arc::new(InMemoryProductStore::new());
    let services = [
        Arc::new(CatalogService::new(Arc::clone(&store))),
        Arc::new(CatalogService::new(Arc::clone(&store))),
    ];
    let id = services[0]
        .create_product(Product::new("Cable", dec!(5.00), 0, "Accesorios"))
        .unwrap()
        .id
        .unwrap();

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let svc = Arc::clone(&services[i % 2]);
            thread::spawn(move || {
                for _ in 0..2_000 {
                    svc.increase_stock(id, 1).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(store.find_by_id(id).unwrap().stock, 8_000);
}

#[test]
fn caller_ids_cannot_exhaust_the_sequence_silently() {
    let svc = catalog();

    let rejected = svc.create_product(Product {
        id: Some(ProductId::new(u64::MAX)),
        ..Product::new("Edge", dec!(1.00), 1, "x")
    });
    assert!(matches!(rejected, Err(CatalogError::InvalidProduct(_))));

    let generated = svc
        .create_product(Product::new("Generated", dec!(1.00), 1, "x"))
        .unwrap();
    assert_eq!(generated.id, Some(ProductId::new(1)));
    assert_eq!(svc.get_total_products(), 1);
}
