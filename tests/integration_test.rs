use inventory_admin::lifecycle::InventorySystem;
use inventory_admin::model::{Product, ProductId, StockFilter};
use inventory_admin::screen::{FormMode, ProductForm, ProductListScreen};
use inventory_admin::store::MemoryStore;
use inventory_admin::validation::Field;

fn twelve() -> Vec<Product> {
    (1..=12)
        .map(|n| {
            let stock = match n {
                4 | 9 => 0,
                n if n % 2 == 0 => 5,
                _ => 40,
            };
            Product::new(format!("product_{n}"), format!("Widget {n}"), "Other", 9.99, stock)
        })
        .collect()
}

/// Full end-to-end test: in-memory store behind the real actor, driven through
/// the screens.
#[tokio::test]
async fn test_full_inventory_system_integration() {
    let system = InventorySystem::in_memory(twelve());

    let mut list = ProductListScreen::new(system.client.clone(), 10);
    assert!(list.refresh().await);
    assert!(!list.is_loading());

    // Page 1 of 2 holds 10, page 2 holds the remaining 2
    let projection = list.state().projection();
    assert_eq!(projection.items.len(), 10);
    assert_eq!(projection.total_pages, 2);
    assert!(list.state_mut().next_page());
    assert_eq!(list.state().projection().items.len(), 2);

    // Filtering resets to page 1
    list.state_mut().set_stock_filter(Some(StockFilter::OutOfStock));
    let projection = list.state().projection();
    assert_eq!(projection.current_page, 1);
    assert_eq!(projection.match_count, 2);
    assert_eq!(projection.total_pages, 1);

    // Confirmed delete removes exactly one record locally and remotely
    list.request_delete(&ProductId::from("product_4")).unwrap();
    assert!(list.confirm_delete().await);
    assert_eq!(list.state().summary().total, 11);
    assert_eq!(list.state().summary().out_of_stock, 1);
    assert!(list.pending_delete().is_none());
    assert_eq!(system.client.list_all().await.unwrap().len(), 11);

    // Create through the form
    let mut form = ProductForm::create(system.client.clone());
    form.set_field(Field::Name, "Gadget");
    form.set_field(Field::Price, "12.5");
    form.set_field(Field::Category, "Electronics");
    form.set_field(Field::Stock, "0");
    let created = form.submit().await.unwrap();
    assert_eq!(created.id.as_str(), "product_13");
    assert!(!form.is_submitting());

    // Edit it, keeping stock at zero
    let mut edit = ProductForm::edit(system.client.clone(), created.id.clone())
        .await
        .unwrap();
    assert_eq!(edit.mode(), &FormMode::Edit(created.id.clone()));
    assert_eq!(edit.draft().stock, "0");
    edit.set_field(Field::Price, "15");
    let updated = edit.submit().await.unwrap();
    assert_eq!(updated.price, 15.0);
    assert_eq!(updated.stock, 0);

    assert!(list.refresh().await);
    assert_eq!(list.state().summary().total, 12);
    assert_eq!(list.state().summary().out_of_stock, 2);

    drop(list);
    drop(form);
    drop(edit);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_demo_store_serves_twelve_products() {
    let system = InventorySystem::start(MemoryStore::demo());
    let products = system.client.list_all().await.unwrap();
    assert_eq!(products.len(), 12);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_clients_are_serialized() {
    let system = InventorySystem::in_memory(Vec::new());

    let mut tasks = Vec::new();
    for n in 0..20 {
        let client = system.client.clone();
        tasks.push(tokio::spawn(async move {
            let mut form = ProductForm::create(client);
            form.set_field(Field::Name, format!("Item {n:02}"));
            form.set_field(Field::Price, "1");
            form.set_field(Field::Category, "Toys");
            form.set_field(Field::Stock, "3");
            form.submit().await.map(|p| p.id)
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    system.shutdown().await.unwrap();
}
