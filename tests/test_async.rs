//! Async wrapper tests. Only built with `--features async`.

#![cfg(feature = "async")]

mod common;

use common::{medicines_body, MockTransport};
use medicine_inventory_client::models::FormSubmission;
use medicine_inventory_client::ui::MedicinesContainer;
use medicine_inventory_client::{AsyncInventoryClient, Endpoint, InventoryError, Presenter};
use serde_json::json;

#[tokio::test]
async fn list_and_render() {
    let transport = MockTransport::new();
    transport.reply(200, medicines_body(&[("Aspirin", 1.0), ("Ibuprofen", 2.0)]));
    let client = AsyncInventoryClient::new(common::client(transport));

    let records = client.list_medicines().await.unwrap();
    let mut presenter = Presenter::new(Some(MedicinesContainer::new()));
    presenter.render(&records);

    assert_eq!(presenter.snapshot().len(), 2);
    assert!(presenter.html().unwrap().contains("<h3>Ibuprofen</h3>"));
}

#[tokio::test]
async fn failures_propagate() {
    let transport = MockTransport::new();
    transport.reply(200, json!({"error": "not found"}));
    let client = AsyncInventoryClient::new(common::client(transport));

    let err = client
        .update(FormSubmission::priced("Ghost", "1"))
        .await
        .unwrap_err();
    assert!(matches!(err, InventoryError::Application(_)));
}

#[tokio::test]
async fn concurrent_fetches_both_complete() {
    let transport = MockTransport::new();
    transport
        .reply(200, medicines_body(&[("A", 1.0)]))
        .reply(200, medicines_body(&[("B", 1.0)]));
    let client = AsyncInventoryClient::new(common::client(transport));

    let (first, second) = tokio::join!(client.list_medicines(), client.list_medicines());
    let mut names: Vec<String> = first
        .unwrap()
        .into_iter()
        .chain(second.unwrap())
        .map(|r| r.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["A", "B"]);

    let count = client
        .run(|c| Ok(c.transport().count_for(Endpoint::Medicines)))
        .await
        .unwrap();
    assert_eq!(count, 2);
}
