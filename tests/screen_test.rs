//! Screen behavior against scripted store outcomes.

use inventory_admin::error::{InventoryError, RemoteError};
use inventory_admin::framework::mock::{Call, MockStore};
use inventory_admin::model::{Category, Product, ProductFields};
use inventory_admin::screen::{NoticeLevel, ProductForm, ProductListScreen};
use inventory_admin::validation::Field;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("a1", "Trail Shoes", "Sports", 120.0, 8),
        Product::new("a2", "Tent", "Sports", 300.0, 0),
        Product::new("a3", "Compass", "Sports", 25.0, 40),
    ]
}

#[tokio::test]
async fn test_delete_success_removes_record_and_notifies() {
    let mock = MockStore::new();
    mock.expect_list().return_ok(catalog());
    mock.expect_delete("a2").return_ok(());

    let mut screen = ProductListScreen::new(mock.client(), 10);
    assert!(screen.refresh().await);
    screen.request_delete(&"a2".into()).unwrap();
    assert!(screen.confirm_delete().await);

    let ids: Vec<&str> = screen
        .state()
        .records()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["a1", "a3"]);
    assert!(screen.pending_delete().is_none());
    assert!(screen.deleting().is_none());

    let notice = screen.notices.last().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Product \"Tent\" deleted successfully!");
    mock.verify();
}

#[tokio::test]
async fn test_delete_failure_leaves_records_and_keeps_prompt() {
    let mock = MockStore::new();
    mock.expect_list().return_ok(catalog());
    mock.expect_delete("a1").return_err(RemoteError::Service {
        status: 500,
        body: r#"{"message":"Database unavailable"}"#.into(),
    });

    let mut screen = ProductListScreen::new(mock.client(), 10);
    screen.refresh().await;
    screen.request_delete(&"a1".into()).unwrap();
    assert!(!screen.confirm_delete().await);

    assert_eq!(screen.state().records(), catalog().as_slice());
    assert_eq!(screen.pending_delete().map(|p| p.name.as_str()), Some("Trail Shoes"));
    assert!(screen.deleting().is_none());
    assert_eq!(
        screen.notices.last().map(|n| n.message.as_str()),
        Some("Database unavailable")
    );
    mock.verify();
}

#[tokio::test]
async fn test_invalid_form_makes_no_request() {
    let mock = MockStore::new();
    let mut form = ProductForm::create(mock.client());
    form.set_field(Field::Name, "ab");
    form.set_field(Field::Price, "0");
    form.set_field(Field::Category, "Sports");
    form.set_field(Field::Stock, "");

    let result = form.submit().await;
    let Err(InventoryError::Validation(errors)) = result else {
        panic!("expected validation errors, got {result:?}");
    };
    assert_eq!(
        errors.get(Field::Name),
        Some("Product name must be at least 3 characters long")
    );
    assert_eq!(errors.get(Field::Price), Some("Price must be a positive number"));
    assert_eq!(errors.get(Field::Stock), Some("Stock quantity is required"));
    assert_eq!(errors.get(Field::Category), None);
    assert_eq!(form.errors(), &errors);
    assert!(!form.is_submitting());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_submit_sends_normalized_fields_once() {
    let mock = MockStore::new();
    let saved = Product::new("n1", "Headlamp", "Sports", 35.0, 12);
    mock.expect_create().return_ok(saved.clone());

    let mut form = ProductForm::create(mock.client());
    form.set_field(Field::Name, "  Headlamp ");
    form.set_field(Field::Price, "35");
    form.set_field(Field::Category, "Sports");
    form.set_field(Field::Stock, "12");

    assert_eq!(form.submit().await.unwrap(), saved);
    assert_eq!(
        mock.calls(),
        [Call::Create(ProductFields {
            name: "Headlamp".into(),
            price: 35.0,
            category: Category::Sports,
            stock: 12,
        })]
    );
    assert_eq!(
        form.notices.last().map(|n| n.message.as_str()),
        Some("Product added successfully!")
    );
    mock.verify();
}

#[tokio::test]
async fn test_submit_failure_is_recorded_and_flag_reset() {
    let mock = MockStore::new();
    mock.expect_update("a1")
        .return_err(RemoteError::Transport("Request timed out".into()));

    let mut form = ProductForm::from_product(mock.client(), &catalog()[0]);
    let result = form.submit().await;

    assert!(matches!(result, Err(InventoryError::Remote(RemoteError::Transport(_)))));
    assert_eq!(form.submit_error(), Some("Request timed out"));
    assert!(!form.is_submitting());

    form.dismiss_submit_error();
    assert_eq!(form.submit_error(), None);
    mock.verify();
}

#[tokio::test]
async fn test_refresh_replaces_records_and_clamps_page() {
    let mock = MockStore::new();
    let many: Vec<Product> = (1..=30)
        .map(|n| Product::new(format!("x{n}"), format!("Thing {n}"), "Other", 1.0, 20))
        .collect();
    mock.expect_list().return_ok(many);
    mock.expect_list().return_ok(catalog());

    let mut screen = ProductListScreen::new(mock.client(), 10);
    screen.refresh().await;
    assert!(screen.state_mut().go_to_page(3));

    screen.refresh().await;
    assert_eq!(screen.state().pagination().current_page(), 1);
    assert_eq!(screen.state().projection().items.len(), 3);
    mock.verify();
}
