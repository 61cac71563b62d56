//! Catalog service integration tests: listing, creation, and the three
//! deletion policies.

#![allow(clippy::unwrap_used)]

use galleria_core::{ProductDeletePolicy, Role};
use galleria_integration_tests::TestContext;
use galleria_server::services::{CatalogError, OrderError};

#[tokio::test]
async fn add_then_list_round_trip() {
    let ctx = TestContext::new().await;
    let catalog = ctx.catalog();

    catalog
        .add_product("Widget", "Tools", 9.99, Some(""))
        .await
        .unwrap();

    let products = catalog.list_products().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Widget");
    assert_eq!(products[0].category, "Tools");
    assert!((products[0].price.as_f64() - 9.99).abs() < f64::EPSILON);
}

#[tokio::test]
async fn duplicate_product_name_is_rejected() {
    let ctx = TestContext::new().await;
    let catalog = ctx.catalog();

    catalog
        .add_product("Widget", "Tools", 9.99, None)
        .await
        .unwrap();

    let second = catalog.add_product("Widget", "Hardware", 5.00, None).await;
    assert!(matches!(second, Err(CatalogError::DuplicateName)));

    assert_eq!(catalog.list_products().await.unwrap().len(), 1);
}

#[tokio::test]
async fn negative_price_is_rejected_before_insert() {
    let ctx = TestContext::new().await;
    let catalog = ctx.catalog();

    let result = catalog.add_product("Gadget", "Tools", -1.0, None).await;
    assert!(matches!(result, Err(CatalogError::InvalidPrice(_))));

    // No row was created.
    assert!(catalog.list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_succeeds_once_then_not_found() {
    let ctx = TestContext::new().await;
    let catalog = ctx.catalog();

    catalog
        .add_product("Widget", "Tools", 9.99, None)
        .await
        .unwrap();

    catalog.delete_product("Widget").await.unwrap();
    assert!(catalog.list_products().await.unwrap().is_empty());

    let again = catalog.delete_product("Widget").await;
    assert!(matches!(again, Err(CatalogError::NotFound)));
}

#[tokio::test]
async fn delete_unknown_product_is_not_found() {
    let ctx = TestContext::new().await;

    let result = ctx.catalog().delete_product("Nonexistent").await;
    assert!(matches!(result, Err(CatalogError::NotFound)));
}

/// Seed one buyer, one product, and one purchase referencing both.
async fn seed_purchase(ctx: &TestContext) {
    let buyer = ctx
        .accounts()
        .register("buyer", "long enough pw", Role::User, "Buyer", None, None)
        .await
        .unwrap();
    let product = ctx
        .catalog()
        .add_product("Widget", "Tools", 9.99, None)
        .await
        .unwrap();
    ctx.orders()
        .create_purchase(buyer.id, product.id, "Completed", "123 Main St")
        .await
        .unwrap();
}

#[tokio::test]
async fn orphan_policy_leaves_purchases_behind() {
    let ctx = TestContext::with_delete_policy(ProductDeletePolicy::Orphan).await;
    seed_purchase(&ctx).await;

    ctx.catalog().delete_product("Widget").await.unwrap();

    // The purchase row survives, still pointing at the vanished product.
    let purchases = ctx.orders().list_purchases().await.unwrap();
    assert_eq!(purchases.len(), 1);

    // And a new purchase of the deleted product is refused.
    let result = ctx
        .orders()
        .create_purchase(
            purchases[0].buyer_id,
            purchases[0].product_id,
            "Completed",
            "123 Main St",
        )
        .await;
    assert!(matches!(result, Err(OrderError::ProductNotFound)));
}

#[tokio::test]
async fn restrict_policy_refuses_referenced_product() {
    let ctx = TestContext::with_delete_policy(ProductDeletePolicy::Restrict).await;
    seed_purchase(&ctx).await;

    let result = ctx.catalog().delete_product("Widget").await;
    assert!(matches!(result, Err(CatalogError::InUse)));

    // Product is still there.
    assert_eq!(ctx.catalog().list_products().await.unwrap().len(), 1);

    // An unreferenced product deletes fine under the same policy.
    ctx.catalog()
        .add_product("Gadget", "Tools", 1.50, None)
        .await
        .unwrap();
    ctx.catalog().delete_product("Gadget").await.unwrap();
}

#[tokio::test]
async fn cascade_policy_removes_referencing_purchases() {
    let ctx = TestContext::with_delete_policy(ProductDeletePolicy::Cascade).await;
    seed_purchase(&ctx).await;

    ctx.catalog().delete_product("Widget").await.unwrap();

    assert!(ctx.catalog().list_products().await.unwrap().is_empty());
    assert!(ctx.orders().list_purchases().await.unwrap().is_empty());
}
