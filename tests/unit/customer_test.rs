//! Tests for the customer's cart, removal and checkout

use pcshop::core::CartError;
use pcshop::core::models::{
    BuildRequest, Catalog, Computer, Customer, ItemKind, Money, Part, PartSpec, RemovalPolicy,
};

use crate::common::fixture_catalog;

fn build<'c>(catalog: &'c Catalog, id: &str) -> Computer<'c> {
    let request = BuildRequest {
        id: id.to_string(),
        motherboard: "MB_01".to_string(),
        rams: vec!["RAM_01".to_string(), "RAM_01".to_string()],
        cpu: "CPU_01".to_string(),
        psu: "PSU_01".to_string(),
        storage: "STORAGE_01".to_string(),
        ..BuildRequest::default()
    };
    Computer::assemble(catalog, &request).unwrap()
}

fn ids(customer: &Customer<'_>) -> Vec<String> {
    customer.cart().iter().map(|item| item.id().to_string()).collect()
}

// =============================================================================
// ADDING
// =============================================================================

#[test]
fn test_new_customer_has_empty_cart() {
    let customer = Customer::new("Ada", Money::from_dollars(1000));
    assert_eq!(customer.name(), "Ada");
    assert!(customer.is_empty());
    assert_eq!(customer.total(), Money::ZERO);
    assert_eq!(customer.budget(), Money::from_dollars(1000));
}

#[test]
fn test_add_part_updates_total() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    let part = customer.add_part(&catalog, "CPU_01").unwrap();
    assert_eq!(part.id, "CPU_01");
    customer.add_part(&catalog, "CPU_01").unwrap();
    assert_eq!(customer.total(), Money::from_dollars(400));
    assert_eq!(ids(&customer), vec!["CPU_01", "CPU_01"]);
}

#[test]
fn test_add_unknown_part() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    assert_eq!(
        customer.add_part(&catalog, "CPU_99").unwrap_err(),
        CartError::PartNotFound("CPU_99".to_string())
    );
    assert!(customer.is_empty());
}

#[test]
fn test_add_computer() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_computer(build(&catalog, "PC1")).unwrap();
    assert_eq!(customer.total(), Money::from_dollars(495));
    assert_eq!(customer.cart()[0].kind(), ItemKind::Computer);
}

#[test]
fn test_add_rejects_total_overflow() {
    let catalog = Catalog::from_parts(vec![Part::new(
        "BIG",
        "Very Expensive Disk",
        Money::from_cents(i64::MAX / 2 + 1),
        PartSpec::Storage { capacity: 1 },
    )])
    .unwrap();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "BIG").unwrap();

    assert_eq!(
        customer.add_part(&catalog, "BIG").unwrap_err(),
        CartError::TotalOverflow("BIG".to_string())
    );
    assert_eq!(ids(&customer), vec!["BIG"]);
    assert_eq!(customer.total(), Money::from_cents(i64::MAX / 2 + 1));
}

// =============================================================================
// REMOVING
// =============================================================================

#[test]
fn test_remove_first_occurrence_only() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "RAM_01").unwrap();
    customer.add_part(&catalog, "GPU_01").unwrap();
    customer.add_part(&catalog, "RAM_01").unwrap();

    let removed = customer.remove(&catalog, None, "RAM_01").unwrap();
    assert_eq!(removed.id(), "RAM_01");
    assert_eq!(ids(&customer), vec!["GPU_01", "RAM_01"]);
    assert_eq!(customer.total(), Money::from_dollars(195));
}

#[test]
fn test_remove_part_not_in_cart() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    assert_eq!(
        customer.remove(&catalog, None, "GPU_01").unwrap_err(),
        CartError::NotInCart("GPU_01".to_string())
    );
}

#[test]
fn test_remove_invalid_id() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    let err = customer.remove(&catalog, None, "BOGUS").unwrap_err();
    assert_eq!(err, CartError::InvalidId("BOGUS".to_string()));
    assert_eq!(err.to_string(), "BOGUS is not a valid part ID.");
}

#[test]
fn test_remove_computer_from_cart() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "GPU_01").unwrap();
    customer.add_computer(build(&catalog, "PC1")).unwrap();
    customer.add_computer(build(&catalog, "PC2")).unwrap();

    customer.remove(&catalog, None, "PC1").unwrap();
    assert_eq!(ids(&customer), vec!["GPU_01", "PC2"]);
    assert_eq!(customer.total(), Money::from_dollars(655));
}

#[test]
fn test_current_computer_not_in_cart() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    let current = build(&catalog, "PC1");
    customer.add_computer(current.clone()).unwrap();
    customer.remove(&catalog, Some(&current), "PC1").unwrap();

    assert_eq!(
        customer.remove(&catalog, Some(&current), "PC1").unwrap_err(),
        CartError::NotInCart("PC1".to_string())
    );
}

#[test]
fn test_remove_many_fail_fast_keeps_earlier_removals() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "RAM_01").unwrap();
    customer.add_part(&catalog, "GPU_01").unwrap();

    let removal = customer.remove_many(
        &catalog,
        None,
        &["RAM_01", "CPU_01", "GPU_01"],
        RemovalPolicy::FailFast,
    );
    assert_eq!(removal.removed.len(), 1);
    assert_eq!(removal.failure, Some(CartError::NotInCart("CPU_01".to_string())));
    assert_eq!(ids(&customer), vec!["GPU_01"]);
    assert_eq!(customer.total(), Money::from_dollars(160));
}

#[test]
fn test_remove_many_all_or_nothing_rolls_back() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "RAM_01").unwrap();
    customer.add_part(&catalog, "GPU_01").unwrap();

    let removal = customer.remove_many(
        &catalog,
        None,
        &["RAM_01", "NOPE"],
        RemovalPolicy::AllOrNothing,
    );
    assert!(removal.removed.is_empty());
    assert_eq!(removal.failure, Some(CartError::InvalidId("NOPE".to_string())));
    assert_eq!(ids(&customer), vec!["RAM_01", "GPU_01"]);
    assert_eq!(customer.total(), Money::from_dollars(195));
}

#[test]
fn test_remove_many_all_or_nothing_commits() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "RAM_01").unwrap();
    customer.add_part(&catalog, "GPU_01").unwrap();

    let removal =
        customer.remove_many(&catalog, None, &["GPU_01", "RAM_01"], RemovalPolicy::AllOrNothing);
    assert!(removal.failure.is_none());
    assert_eq!(removal.removed.len(), 2);
    assert!(customer.is_empty());
    assert_eq!(customer.total(), Money::ZERO);
}

#[test]
fn test_removal_policy_parsing() {
    assert_eq!("fail-fast".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::FailFast);
    assert_eq!("All_Or_Nothing".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::AllOrNothing);
    assert_eq!("atomic".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::AllOrNothing);
    assert!("sometimes".parse::<RemovalPolicy>().is_err());
    assert_eq!(RemovalPolicy::default(), RemovalPolicy::FailFast);
}

// =============================================================================
// CHECKOUT
// =============================================================================

#[test]
fn test_checkout_debits_budget_and_empties_cart() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "CPU_01").unwrap();
    customer.add_computer(build(&catalog, "PC1")).unwrap();

    let receipt = customer.checkout().unwrap();
    assert_eq!(receipt.customer, "Ada");
    assert_eq!(receipt.total, Money::from_dollars(695));
    assert_eq!(receipt.remaining_budget, Money::from_dollars(305));
    assert_eq!(receipt.items.len(), 2);
    assert_eq!(receipt.items[1].kind, ItemKind::Computer);
    assert!(!receipt.placed_at.is_empty());

    assert!(customer.is_empty());
    assert_eq!(customer.total(), Money::ZERO);
    assert_eq!(customer.budget(), Money::from_dollars(305));
}

#[test]
fn test_checkout_exact_budget() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(200));
    customer.add_part(&catalog, "CPU_01").unwrap();
    let receipt = customer.checkout().unwrap();
    assert_eq!(receipt.remaining_budget, Money::ZERO);
}

#[test]
fn test_checkout_empty_cart() {
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    assert_eq!(customer.checkout().unwrap_err(), CartError::EmptyCart);
    assert_eq!(customer.budget(), Money::from_dollars(1000));
}

#[test]
fn test_checkout_over_budget_changes_nothing() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(100));
    customer.add_part(&catalog, "GPU_01").unwrap();

    let err = customer.checkout().unwrap_err();
    assert_eq!(
        err,
        CartError::OverBudget {
            total: Money::from_dollars(160),
            budget: Money::from_dollars(100),
        }
    );
    assert_eq!(ids(&customer), vec!["GPU_01"]);
    assert_eq!(customer.budget(), Money::from_dollars(100));
}

#[test]
fn test_set_budget_then_checkout() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(100));
    customer.add_part(&catalog, "GPU_01").unwrap();
    customer.set_budget(Money::from_dollars(500));
    assert_eq!(customer.checkout().unwrap().remaining_budget, Money::from_dollars(340));
}

#[test]
fn test_negative_budget_accepted() {
    let mut customer = Customer::new("Ada", Money::from_dollars(10));
    customer.set_budget(Money::from_dollars(-5));
    assert!(customer.budget().is_negative());
}

#[test]
fn test_cart_view_snapshot() {
    let catalog = fixture_catalog();
    let mut customer = Customer::new("Ada", Money::from_dollars(1000));
    customer.add_part(&catalog, "RAM_02").unwrap();
    let view = customer.cart_view();
    assert_eq!(view.customer, "Ada");
    assert_eq!(view.items[0].id, "RAM_02");
    assert_eq!(view.items[0].price, Money::from_dollars(60));
    assert_eq!(view.total, Money::from_dollars(60));
}
