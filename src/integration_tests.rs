#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::app_system::{ShopConfig, ShopSystem};
    use crate::checkout::CheckoutError;
    use crate::clients::CatalogClient;
    use crate::domain::{CartAction, OrderStatus, PageRequest, Product, ProductForm, SessionId, UserId};
    use crate::error::ErrorKind;
    use crate::order_actor::OrderStoreError;

    async fn product(catalog: &CatalogClient, name: &str, price: &str) -> Product {
        let form = ProductForm { name: name.into(), price: price.into(), ..Default::default() };
        catalog.create_product(form).await.unwrap()
    }

    fn shopper() -> UserId {
        ShopConfig::default().default_user_id()
    }

    #[tokio::test]
    async fn test_add_then_subtract_to_empty() {
        let system = ShopSystem::new(&ShopConfig::default());
        let session = SessionId::shared();
        let a = product(&system.catalog_client, "A", "9.99").await;

        system.cart_client.add_item(session.clone(), a.id).await.unwrap();
        let view = system.cart_client.add_item(session.clone(), a.id).await.unwrap();
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.total, Decimal::new(1998, 2));

        let view = system
            .cart_client
            .update_item(session.clone(), a.id, CartAction::Subtract)
            .await
            .unwrap();
        assert_eq!(view.lines[0].quantity, 1);
        assert_eq!(view.total, Decimal::new(999, 2));
        assert!(!view.refresh);

        let view = system
            .cart_client
            .update_item(session.clone(), a.id, CartAction::Subtract)
            .await
            .unwrap();
        assert!(view.lines.is_empty());
        assert_eq!(view.total, Decimal::ZERO);
        assert!(view.refresh);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_checkout_persists_order_and_resets_cart() {
        let system = ShopSystem::new(&ShopConfig::default());
        let session = SessionId::shared();
        let a = product(&system.catalog_client, "A", "5.00").await;
        let b = product(&system.catalog_client, "B", "3.00").await;

        system.cart_client.add_item(session.clone(), a.id).await.unwrap();
        system.cart_client.add_item(session.clone(), b.id).await.unwrap();

        let receipt = system.cart_client.place_order(session.clone(), shopper()).await.unwrap();
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total, Decimal::new(800, 2));
        assert_eq!(system.cart_client.get_total(session.clone()).await.unwrap(), Decimal::ZERO);

        let order = system
            .order_client
            .get_order_with_products(receipt.order_id, &system.catalog_client)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Ordered);
        assert_eq!(order.user_id, shopper());
        assert_eq!(order.total, Decimal::new(800, 2));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_id, a.id);
        assert_eq!(order.items[0].cost, Decimal::new(500, 2));
        assert_eq!(order.items[0].product.as_ref().map(|p| p.name.as_str()), Some("A"));
        assert_eq!(order.items[1].product_id, b.id);
        assert_eq!(order.items[1].quantity, 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_checkout_writes_nothing() {
        let system = ShopSystem::new(&ShopConfig::default());

        let err = system.cart_client.place_order(SessionId::shared(), shopper()).await.unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
        assert_eq!(err.kind(), ErrorKind::Redirect);
        assert_eq!(system.order_client.count_orders().await.unwrap(), 0);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_keeps_item_after_product_deleted() {
        let system = ShopSystem::new(&ShopConfig::default());
        let session = SessionId::shared();
        let a = product(&system.catalog_client, "A", "2.50").await;

        system.cart_client.add_item(session.clone(), a.id).await.unwrap();
        let receipt = system.cart_client.place_order(session, shopper()).await.unwrap();
        system.catalog_client.delete_product(a.id).await.unwrap();

        let order = system
            .order_client
            .get_order_with_products(receipt.order_id, &system.catalog_client)
            .await
            .unwrap();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product, None);
        assert_eq!(order.total, Decimal::new(250, 2));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_admin_status_updates() {
        let system = ShopSystem::new(&ShopConfig::default());
        let session = SessionId::shared();
        let a = product(&system.catalog_client, "A", "1.00").await;
        system.cart_client.add_item(session.clone(), a.id).await.unwrap();
        let receipt = system.cart_client.place_order(session, shopper()).await.unwrap();
        let orders = &system.order_client;

        orders.update_status_from_form(receipt.order_id, "delivered").await.unwrap();
        orders.update_status_from_form(receipt.order_id, "pending").await.unwrap();
        let order = orders.get_order(receipt.order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let err = orders.update_status_from_form(receipt.order_id, "lost").await.unwrap_err();
        assert!(matches!(err, OrderStoreError::InvalidStatus(_)));
        assert_eq!(err.kind(), ErrorKind::Validation);

        let page = orders.order_page(PageRequest::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, OrderStatus::Pending);
        assert_eq!(page.items[0].total, Decimal::new(100, 2));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_serialised() {
        let system = ShopSystem::new(&ShopConfig::default());
        let a = product(&system.catalog_client, "A", "1.00").await;

        let mut tasks = Vec::new();
        for _ in 0..20 {
            let cart = system.cart_client.clone();
            tasks.push(tokio::spawn(async move { cart.add_item(SessionId::shared(), a.id).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let view = system.cart_client.snapshot(SessionId::shared()).await.unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 20);
        assert_eq!(view.total, Decimal::new(2000, 2));

        system.shutdown().await.unwrap();
    }
}
