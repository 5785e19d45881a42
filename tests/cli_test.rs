//! The `inventory` binary in `--memory` mode.

use assert_cmd::Command;
use predicates::prelude::*;

fn inventory() -> Command {
    let mut cmd = Command::cargo_bin("inventory").unwrap();
    cmd.env_remove("INVENTORY_API_URL")
        .env_remove("INVENTORY_TIMEOUT_SECS")
        .env_remove("INVENTORY_PAGE_SIZE")
        .env_remove("RUST_LOG")
        .arg("--memory");
    cmd
}

#[test]
fn list_shows_first_page_and_controls() {
    inventory()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "12 products | 10 in stock | 3 low stock | 2 out of stock",
        ))
        .stdout(predicate::str::contains("Showing 1 to 10 of 12 entries"))
        .stdout(predicate::str::contains("[1] 2 Next »"));
}

#[test]
fn list_filters_out_of_stock() {
    inventory()
        .args(["list", "--stock", "out-of-stock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 2 of 2 entries"))
        .stdout(predicate::str::contains("Denim Jacket"))
        .stdout(predicate::str::contains("Cold Brew Coffee"))
        .stdout(predicate::str::contains("Next »").not());
}

#[test]
fn list_second_page_with_small_pages() {
    inventory()
        .args(["list", "--page-size", "5", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 6 to 10 of 12 entries"))
        .stdout(predicate::str::contains("« Prev 1 [2] 3 Next »"));
}

#[test]
fn list_rejects_missing_page_and_bad_size() {
    inventory()
        .args(["list", "--page", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page 3 does not exist"));

    inventory()
        .args(["list", "--page-size", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page size must be one of"));
}

#[test]
fn flags_override_invalid_environment() {
    inventory()
        .env("INVENTORY_PAGE_SIZE", "7")
        .args(["list", "--page-size", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 to 10 of 12 entries"));

    inventory()
        .env("INVENTORY_API_URL", "localhost:5000")
        .args(["--api-url", "http://localhost:5000/api", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Automotive\n"));
}

#[test]
fn memory_mode_ignores_the_api_url() {
    inventory()
        .env("INVENTORY_API_URL", "localhost:5000")
        .arg("categories")
        .assert()
        .success();
}

#[test]
fn invalid_environment_without_override_fails() {
    inventory()
        .env("INVENTORY_PAGE_SIZE", "7")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page size must be one of"));
}

#[test]
fn add_with_invalid_fields_reports_each_field() {
    inventory()
        .args(["add", "--name", "ab", "--price", "-5", "--category", "Gadgets", "--stock", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "name: Product name must be at least 3 characters long",
        ))
        .stderr(predicate::str::contains("price: Price must be a positive number"))
        .stderr(predicate::str::contains("category: Please select a valid category"));
}

#[test]
fn add_prints_the_saved_product() {
    inventory()
        .args([
            "add", "--name", "Desk Fan", "--price", "1299.5", "--category", "Electronics", "--stock", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added successfully!"))
        .stdout(predicate::str::contains("ID:        product_13"))
        .stdout(predicate::str::contains("$1,299.50"))
        .stdout(predicate::str::contains("4 (Low Stock)"));
}

#[test]
fn delete_with_yes_skips_prompt() {
    inventory()
        .args(["delete", "product_3", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Product \"Denim Jacket\" deleted successfully!",
        ));
}

#[test]
fn delete_declined_at_prompt() {
    inventory()
        .args(["delete", "product_3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete \"Denim Jacket\"? This action cannot be undone.",
        ))
        .stdout(predicate::str::contains("Cancelled."));
}

#[test]
fn show_unknown_product_fails() {
    inventory()
        .args(["show", "product_99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: product_99"));
}

#[test]
fn categories_are_sorted_and_distinct() {
    inventory()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Automotive\nBooks\nClothing\n"));
}
