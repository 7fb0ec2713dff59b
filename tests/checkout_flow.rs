//! End-to-end flow: catalog -> cart -> discount -> order.

use storekit::prelude::*;

fn sample_catalog() -> (SharedProduct, SharedProduct, SharedProduct) {
    (
        Product::new("P01", "Book", 10.0, 5).into_shared(),
        Product::electronics("E01", "Laptop", 1200.0, 2, 24).into_shared(),
        Product::clothing("C01", "T-Shirt", 20.0, 3, "L").into_shared(),
    )
}

#[test]
fn storefront_walkthrough() {
    let (book, laptop, shirt) = sample_catalog();

    let mut inventory = InventoryList::new();
    inventory.add(book.clone());
    inventory.add(laptop.clone());
    inventory.add(shirt.clone());

    let listing = inventory.display_all();
    assert_eq!(listing.lines().count(), 3);
    assert!(listing.contains("Electronics [E01] Laptop - $1200.00 | Stock: 2 | Warranty: 24 months"));

    let mut cart = Cart::new();
    cart.add_item(&book).unwrap();
    cart.add_item(&laptop).unwrap();
    cart.add_item(&shirt).unwrap();
    cart.add_item(&laptop).unwrap();
    // Laptop stock is drained now; the third add is refused.
    assert!(cart.add_item(&laptop).is_err());

    assert_eq!(cart.line_count(), 3);
    assert_eq!(cart.item_count(), 4);
    assert!((cart.total() - 2430.0).abs() < 1e-9);
    assert_eq!(laptop.borrow().stock, 0);

    // Stock decrements made through the cart are visible in the catalog.
    assert_eq!(inventory.get(1).unwrap().borrow().stock, 0);

    cart.apply_discount(0.1);
    assert!((cart.total() - 2187.0).abs() < 1e-9);

    // Items with equal ids are the same item; different ids are not.
    assert_ne!(*book.borrow(), *laptop.borrow());

    let order = Order::new("O001", &cart);
    let shown = order.describe();
    assert!(shown.starts_with("=== Order O001 ==="));
    assert!(shown.contains("2x Electronics [E01] Laptop"));
    assert!(shown.contains("Total: $2187.00"));
}

#[test]
fn repeat_add_discount_and_snapshot() {
    let item = Product::new("A", "Widget", 10.0, 5).into_shared();
    let mut cart = Cart::new();

    cart.add_item(&item).unwrap();
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].quantity, 1);
    assert!((cart.total() - 10.0).abs() < 1e-9);
    assert_eq!(item.borrow().stock, 4);

    cart.add_item(&item).unwrap();
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].quantity, 2);
    assert!((cart.total() - 20.0).abs() < 1e-9);
    assert_eq!(item.borrow().stock, 3);

    cart.apply_discount(0.1);
    assert!((cart.total() - 18.0).abs() < 1e-9);

    let order = Order::new("O1", &cart);
    cart.add_item(&item).unwrap();

    assert_eq!(order.cart().lines()[0].quantity, 2);
    assert!((order.cart().total() - 18.0).abs() < 1e-9);
    assert!(order.describe().contains("Total: $18.00"));
}

#[test]
fn out_of_stock_item_never_enters_a_cart() {
    let gone = Product::new("B", "Ghost", 10.0, 0).into_shared();
    let mut cart = Cart::new();

    let result = cart.add_item(&gone);
    assert!(matches!(result, Err(StoreError::OutOfStock { .. })));
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
    assert_eq!(gone.borrow().stock, 0);
    assert_eq!(cart.describe(), "=== Cart Contents ===\nTotal: $0.00");
}
