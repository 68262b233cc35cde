use chrono::NaiveDate;
use khata::store::{Store, StoreError};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date is valid")
}

#[test]
fn test_registration_length_rule() {
    let mut store = Store::seeded();

    // anything other than exactly 8 characters must not create an account
    for bad in ["", "123", "1234567", "123456789", "abc"] {
        assert!(store.accounts.register("a@b.com", bad).is_err());
        assert!(!store.accounts.contains("a@b.com"));
    }

    store.accounts.register("a@b.com", "12345678").unwrap();
    assert!(store.accounts.contains("a@b.com"));
    assert_eq!(store.accounts.len(), 1);
}

#[test]
fn test_failed_reregistration_keeps_original_password() {
    let mut store = Store::seeded();
    store.accounts.register("a@b.com", "12345678").unwrap();

    // the scenario from the ledger's contract: a rejected re-registration
    // leaves the original credentials working
    store.accounts.register("a@b.com", "123").unwrap_err();
    assert_eq!(store.accounts.authenticate("a@b.com", "12345678"), Ok(()));
}

#[test]
fn test_valid_reregistration_overwrites() {
    let mut store = Store::seeded();
    store.accounts.register("a@b.com", "12345678").unwrap();
    store.accounts.register("a@b.com", "abcdefgh").unwrap();

    assert_eq!(store.accounts.authenticate("a@b.com", "abcdefgh"), Ok(()));
    assert_eq!(
        store.accounts.authenticate("a@b.com", "12345678"),
        Err(StoreError::InvalidCredentials)
    );
}

#[test]
fn test_sell_scenario_glass_bottle() {
    let mut store = Store::seeded();

    // sell 30 of 100: succeeds, stock drops to 70
    assert_eq!(store.inventory.sell("Glass Bottle", 30), Ok(70));

    // sell 80 more: rejected outright, stock stays 70
    let err = store.inventory.sell("Glass Bottle", 80).unwrap_err();
    assert_eq!(
        err,
        StoreError::InsufficientStock {
            name: "Glass Bottle".to_string(),
            requested: 80,
            available: 70,
        }
    );
    assert_eq!(store.inventory.find_by_name("Glass Bottle").unwrap().stock, 70);
}

#[test]
fn test_sell_unknown_product_is_not_found() {
    let mut store = Store::seeded();
    assert_eq!(
        store.inventory.sell("Copper Pot", 1),
        Err(StoreError::UnknownProduct {
            name: "Copper Pot".to_string()
        })
    );
}

#[test]
fn test_add_due_scenario_amit() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due(
            "Amit",
            "9999999999",
            "Glass Bottle",
            5,
            20.0,
            date("2024-01-01"),
        )
        .unwrap();

    let amit = store.customers.get("Amit").unwrap();
    assert_eq!(amit.phone, "9999999999");
    assert_eq!(amit.dues.len(), 1);
    assert_eq!(store.customers.total_for("Amit"), Ok(100.0));
}

#[test]
fn test_customer_created_once_across_many_dues() {
    let mut store = Store::seeded();
    for i in 0..5 {
        store
            .customers
            .add_due(
                "Amit",
                "0000000000",
                "Tin Box",
                i + 1,
                30.0,
                date("2024-02-01"),
            )
            .unwrap();
    }
    assert_eq!(store.customers.customers().len(), 1);
    assert_eq!(store.customers.get("Amit").unwrap().dues.len(), 5);
}

#[test]
fn test_rate_snapshot_survives_price_change() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due("Amit", "9", "Glass Bottle", 5, 20.0, date("2024-01-01"))
        .unwrap();

    // reprice the product after the due was recorded
    let rate = store.inventory.find_by_name("Glass Bottle").unwrap().rate;
    assert_eq!(rate, 20.0);
    store.inventory.add("Glass Bottle", 10, 55.0).unwrap();

    // the recorded due still carries the old rate
    assert_eq!(store.customers.total_for("Amit"), Ok(100.0));
    let entry = &store.customers.get("Amit").unwrap().dues[0];
    assert_eq!(entry.rate, 20.0);
}

#[test]
fn test_due_reference_stays_by_name() {
    // dues reference products by name only; no integrity is enforced
    let mut store = Store::new();
    store
        .customers
        .add_due("Amit", "9", "Discontinued Jar", 2, 15.0, date("2024-01-01"))
        .unwrap();
    assert!(store.inventory.find_by_name("Discontinued Jar").is_none());
    assert_eq!(store.customers.total_for("Amit"), Ok(30.0));
}

#[test]
fn test_remove_entry_adjusts_total_exactly() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due("Sita", "8", "Glass Bottle", 3, 20.0, date("2024-01-01"))
        .unwrap();
    store
        .customers
        .add_due("Sita", "8", "Tin Box", 4, 30.0, date("2024-01-02"))
        .unwrap();
    assert_eq!(store.customers.total_for("Sita"), Ok(180.0));

    let removed = store.customers.remove_entry("Sita", 1).unwrap();
    assert_eq!(removed.subtotal(), 120.0);
    assert_eq!(store.customers.total_for("Sita"), Ok(60.0));
}

#[test]
fn test_remove_entry_out_of_range_changes_nothing() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due("Sita", "8", "Tin Box", 1, 30.0, date("2024-01-01"))
        .unwrap();

    assert_eq!(
        store.customers.remove_entry("Sita", 5),
        Err(StoreError::DueIndexOutOfRange { index: 5, len: 1 })
    );
    assert_eq!(store.customers.total_for("Sita"), Ok(30.0));

    assert!(matches!(
        store.customers.remove_entry("Nobody", 0),
        Err(StoreError::UnknownCustomer { .. })
    ));
}

#[test]
fn test_summary_grand_total() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due("Amit", "1", "Glass Bottle", 5, 20.0, date("2024-01-01"))
        .unwrap();
    store
        .customers
        .add_due("Sita", "2", "Tin Box", 2, 30.0, date("2024-01-02"))
        .unwrap();
    store
        .customers
        .add_due("Amit", "1", "Tin Box", 1, 30.0, date("2024-01-03"))
        .unwrap();

    let summary = store.customers.summary();
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].name, "Amit");
    assert_eq!(summary.rows[0].total, 130.0);
    assert_eq!(summary.rows[1].name, "Sita");
    assert_eq!(summary.rows[1].total, 60.0);
    assert_eq!(summary.grand_total, 190.0);

    // clearing a customer drops their rows from the summary
    store.customers.clear("Amit").unwrap();
    let summary = store.customers.summary();
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.grand_total, 60.0);
}

#[test]
fn test_customer_search_is_case_insensitive() {
    let mut store = Store::seeded();
    store
        .customers
        .add_due("Amit Sharma", "1", "Tin Box", 1, 30.0, date("2024-01-01"))
        .unwrap();
    store
        .customers
        .add_due("Binod", "2", "Tin Box", 1, 30.0, date("2024-01-01"))
        .unwrap();

    let hits = store.customers.search("amit");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Amit Sharma");
    assert_eq!(store.customers.search("").len(), 2);
}
