//! Order service integration tests: referential checks and listing order.

#![allow(clippy::unwrap_used)]

use galleria_core::{AccountId, ProductId, Role};
use galleria_integration_tests::TestContext;
use galleria_server::services::OrderError;

#[tokio::test]
async fn purchase_of_existing_refs_gets_server_timestamp() {
    let ctx = TestContext::new().await;

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

    let purchase = ctx
        .orders()
        .create_purchase(buyer.id, product.id, "Completed", "123 Main St")
        .await
        .unwrap();

    assert_eq!(purchase.buyer_id, buyer.id);
    assert_eq!(purchase.product_id, product.id);
    assert_eq!(purchase.payment_status, "Completed");
    assert_eq!(purchase.buyer_address, "123 Main St");
    assert!(!purchase.purchase_time.to_rfc3339().is_empty());
}

#[tokio::test]
async fn purchase_with_unknown_product_is_refused() {
    let ctx = TestContext::new().await;

    let buyer = ctx
        .accounts()
        .register("buyer", "long enough pw", Role::User, "Buyer", None, None)
        .await
        .unwrap();

    let result = ctx
        .orders()
        .create_purchase(buyer.id, ProductId::new(999), "Completed", "123 Main St")
        .await;
    assert!(matches!(result, Err(OrderError::ProductNotFound)));

    // Nothing was written.
    assert!(ctx.orders().list_purchases().await.unwrap().is_empty());
}

#[tokio::test]
async fn purchase_with_unknown_buyer_is_refused() {
    let ctx = TestContext::new().await;

    let product = ctx
        .catalog()
        .add_product("Widget", "Tools", 9.99, None)
        .await
        .unwrap();

    let result = ctx
        .orders()
        .create_purchase(AccountId::new(999), product.id, "Completed", "123 Main St")
        .await;
    assert!(matches!(result, Err(OrderError::BuyerNotFound)));
}

#[tokio::test]
async fn listing_is_ordered_by_id() {
    let ctx = TestContext::new().await;

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

    for street in ["1 First St", "2 Second St", "3 Third St"] {
        ctx.orders()
            .create_purchase(buyer.id, product.id, "Completed", street)
            .await
            .unwrap();
    }

    let purchases = ctx.orders().list_purchases().await.unwrap();
    assert_eq!(purchases.len(), 3);

    let mut ids: Vec<_> = purchases.iter().map(|p| p.id).collect();
    let listed = ids.clone();
    ids.sort();
    assert_eq!(listed, ids);

    let streets: Vec<_> = purchases.iter().map(|p| p.buyer_address.as_str()).collect();
    assert_eq!(streets, ["1 First St", "2 Second St", "3 Third St"]);
}

#[tokio::test]
async fn purchase_address_may_differ_from_account_address() {
    let ctx = TestContext::new().await;

    let buyer = ctx
        .accounts()
        .register(
            "buyer",
            "long enough pw",
            Role::User,
            "Buyer",
            Some("home address"),
            None,
        )
        .await
        .unwrap();
    let product = ctx
        .catalog()
        .add_product("Widget", "Tools", 9.99, None)
        .await
        .unwrap();

    let purchase = ctx
        .orders()
        .create_purchase(buyer.id, product.id, "Completed", "office address")
        .await
        .unwrap();

    assert_eq!(purchase.buyer_address, "office address");
    assert_eq!(buyer.address.as_deref(), Some("home address"));
}
