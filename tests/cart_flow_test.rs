use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;
use storefront::cart::{CartError, CartView, CurrencyLabels};
use storefront::checkout::RecordingNavigator;
use storefront::framework::mock::{create_mock_transport, empty_response, expect_request, json_response, MockTransport};
use storefront::framework::FrameworkError;
use storefront::lifecycle::Storefront;
use storefront::notify::NotificationKind;

fn cart(quantity: u32, total: f64) -> Value {
    json!({
        "items": [{
            "_id": "item_1",
            "product": { "title": "Steam Wallet", "imageUrl": "https://cdn.example.com/steam.png" },
            "subProductName": "$10 Card",
            "price": 10.0,
            "quantity": quantity
        }],
        "total": total
    })
}

fn storefront(mock: &MockTransport) -> (Storefront, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let storefront = Storefront::with_transport(mock.transport(), CurrencyLabels::default(), navigator.clone());
    (storefront, navigator)
}

/// A successful quantity update is followed by exactly one refetch, and the view shows
/// the server's numbers from that refetch.
#[tokio::test]
async fn test_update_quantity_refetches_once() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(1, 10.0));
    mock.expect(Method::PATCH, "/api/cart/items/item_1").return_status(200);
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(3, 30.0));

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();

    cart_page.fetch_cart().await.unwrap();
    cart_page.update_quantity("item_1", 3).await.unwrap();

    assert_eq!(mock.count(&Method::GET, "/api/cart"), 2);
    assert_eq!(mock.count(&Method::PATCH, "/api/cart/items/item_1"), 1);
    assert_eq!(mock.requests()[1].body, Some(json!({ "quantity": 3 })));

    let snapshot = cart_page.snapshot();
    assert_eq!(snapshot.cart.unwrap().total, 30.0);
    assert_eq!(storefront.badge.count(), 3);

    let toast = toasts.try_recv().unwrap();
    assert_eq!(toast.kind, NotificationKind::Success);
    assert_eq!(toast.description, "Cart updated successfully");
    mock.verify();
}

/// One item, quantity 3, price 10: the line shows `$30.00` and the summary `৳30.00`.
#[tokio::test]
async fn test_currency_labels_passed_through() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(3, 30.0));

    let (storefront, _) = storefront(&mock);
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();

    match cart_page.view() {
        CartView::Items { lines, summary } => {
            assert_eq!(lines[0].line_total, "$30.00");
            assert_eq!(summary.total, "৳30.00");
        }
        other => panic!("expected items, got {other:?}"),
    }
}

#[tokio::test]
async fn test_increment_and_decrement_use_current_quantity() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(2, 20.0));
    mock.expect(Method::PATCH, "/api/cart/items/item_1").return_status(200);
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(3, 30.0));
    mock.expect(Method::PATCH, "/api/cart/items/item_1").return_status(200);
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(2, 20.0));

    let (storefront, _) = storefront(&mock);
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();

    cart_page.increment("item_1").await.unwrap();
    cart_page.decrement("item_1").await.unwrap();

    let bodies: Vec<_> = mock
        .requests()
        .into_iter()
        .filter(|r| r.method == Method::PATCH)
        .map(|r| r.body)
        .collect();
    assert_eq!(
        bodies,
        vec![Some(json!({ "quantity": 3 })), Some(json!({ "quantity": 2 }))]
    );
    mock.verify();
}

/// At quantity 1 the decrement control sends nothing.
#[tokio::test]
async fn test_decrement_blocked_at_one() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(1, 10.0));

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();

    assert!(!cart_page.view().line("item_1").unwrap().can_decrement);
    assert_eq!(
        cart_page.decrement("item_1").await,
        Err(CartError::DecrementBlocked("item_1".into()))
    );

    assert_eq!(mock.requests().len(), 1);
    assert!(toasts.try_recv().is_err());
    mock.verify();
}

#[tokio::test]
async fn test_remove_last_item_shows_empty_cart() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(2, 20.0));
    mock.expect(Method::DELETE, "/api/cart/items/item_1").return_status(204);
    mock.expect(Method::GET, "/api/cart").return_json(200, json!({ "items": [], "total": 0 }));

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();
    assert_eq!(storefront.badge.count(), 2);

    cart_page.remove_item("item_1").await.unwrap();

    assert_eq!(cart_page.view(), CartView::Empty);
    assert_eq!(storefront.badge.count(), 0);
    assert_eq!(toasts.try_recv().unwrap().description, "Item removed from cart");
    mock.verify();
}

/// A missing cart is the empty state, not an error.
#[tokio::test]
async fn test_cart_not_found_is_empty_without_error() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_status(404);

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();

    cart_page.fetch_cart().await.unwrap();

    assert_eq!(cart_page.view(), CartView::Empty);
    assert!(toasts.try_recv().is_err());
}

#[tokio::test]
async fn test_failed_update_keeps_quantity() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(2, 20.0));
    mock.expect(Method::PATCH, "/api/cart/items/item_1").return_status(500);
    mock.expect(Method::DELETE, "/api/cart/items/item_1")
        .return_err(FrameworkError::Transport("connection refused".into()));

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();

    assert!(cart_page.update_quantity("item_1", 5).await.is_err());
    assert!(cart_page.remove_item("item_1").await.is_err());

    assert_eq!(cart_page.view().line("item_1").unwrap().quantity, 2);
    assert_eq!(mock.count(&Method::GET, "/api/cart"), 1);

    let first = toasts.try_recv().unwrap();
    assert!(first.is_error());
    assert_eq!(first.description, "Failed to update cart");
    assert_eq!(toasts.try_recv().unwrap().description, "Failed to remove item from cart");
    mock.verify();
}

/// The mutation went through, so it still reports success even though the refetch failed.
#[tokio::test]
async fn test_failed_refetch_after_update() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(2, 20.0));
    mock.expect(Method::PATCH, "/api/cart/items/item_1").return_status(200);
    mock.expect(Method::GET, "/api/cart").return_status(502);

    let (storefront, _) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();
    cart_page.fetch_cart().await.unwrap();

    cart_page.update_quantity("item_1", 4).await.unwrap();

    assert_eq!(cart_page.view().line("item_1").unwrap().quantity, 2);
    assert_eq!(toasts.try_recv().unwrap().description, "Failed to load cart");
    assert_eq!(toasts.try_recv().unwrap().description, "Cart updated successfully");
    mock.verify();
}

#[tokio::test]
async fn test_checkout_navigates_to_payment_url() {
    let mock = MockTransport::new();
    mock.expect(Method::POST, "/api/checkout").return_json(
        200,
        json!({
            "paymentId": "TR0011abc",
            "bkashURL": "https://sandbox.payment.bkash.com/?paymentId=TR0011abc&hash=x"
        }),
    );

    let (storefront, navigator) = storefront(&mock);
    let session = storefront.cart_page().checkout().await.unwrap();

    assert_eq!(session.payment_id, "TR0011abc");
    assert_eq!(
        navigator.visited(),
        vec!["https://sandbox.payment.bkash.com/?paymentId=TR0011abc&hash=x"]
    );
    mock.verify();
}

#[tokio::test]
async fn test_failed_checkout_navigates_nowhere() {
    let mock = MockTransport::new();
    mock.expect(Method::POST, "/api/checkout").return_status(500);
    mock.expect(Method::POST, "/api/checkout")
        .return_json(200, json!({ "paymentId": "TR1", "bkashURL": "" }));

    let (storefront, navigator) = storefront(&mock);
    let mut toasts = storefront.notifications.subscribe();
    let cart_page = storefront.cart_page();

    assert!(cart_page.checkout().await.is_err());
    assert!(cart_page.checkout().await.is_err());

    assert!(navigator.visited().is_empty());
    for _ in 0..2 {
        assert_eq!(toasts.try_recv().unwrap().description, "Failed to process checkout");
    }
    mock.verify();
}

/// Two updates in flight: the first update's refetch settles last and overwrites the
/// second update's result.
#[tokio::test]
async fn test_last_settled_refetch_wins() {
    let (transport, mut server) = create_mock_transport(10);
    let storefront = Storefront::with_transport(
        Arc::new(transport),
        CurrencyLabels::default(),
        Arc::new(RecordingNavigator::new()),
    );
    let cart_page = storefront.cart_page();

    let first_vm = cart_page.clone();
    let first = tokio::spawn(async move { first_vm.update_quantity("item_1", 2).await });

    let (patch, reply) = expect_request(&mut server).await.unwrap();
    assert_eq!(patch.body, Some(json!({ "quantity": 2 })));
    reply.send(Ok(empty_response(200))).unwrap();

    // Hold the first refetch.
    let (refetch, held_reply) = expect_request(&mut server).await.unwrap();
    assert_eq!(refetch.path(), "/api/cart");

    let second_vm = cart_page.clone();
    let second = tokio::spawn(async move { second_vm.update_quantity("item_1", 5).await });

    let (patch, reply) = expect_request(&mut server).await.unwrap();
    assert_eq!(patch.body, Some(json!({ "quantity": 5 })));
    reply.send(Ok(empty_response(200))).unwrap();
    let (_, reply) = expect_request(&mut server).await.unwrap();
    reply.send(Ok(json_response(200, cart(5, 50.0)))).unwrap();
    second.await.unwrap().unwrap();
    assert_eq!(cart_page.view().line("item_1").unwrap().quantity, 5);

    held_reply.send(Ok(json_response(200, cart(2, 20.0)))).unwrap();
    first.await.unwrap().unwrap();

    assert_eq!(cart_page.view().line("item_1").unwrap().quantity, 2);
    assert_eq!(storefront.badge.count(), 2);
}

#[tokio::test]
async fn test_state_changes_are_observable() {
    let mock = MockTransport::new();
    mock.expect(Method::GET, "/api/cart").return_json(200, cart(3, 30.0));

    let (storefront, _) = storefront(&mock);
    let cart_page = storefront.cart_page();
    let mut state = cart_page.subscribe();
    let mut badge = storefront.badge.subscribe();
    assert!(state.borrow_and_update().loading);

    cart_page.fetch_cart().await.unwrap();

    assert!(state.has_changed().unwrap());
    assert!(!state.borrow_and_update().loading);
    assert!(badge.has_changed().unwrap());
    assert_eq!(*badge.borrow_and_update(), 3);
}
