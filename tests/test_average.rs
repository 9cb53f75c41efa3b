//! Average-price controller tests.

mod common;

use common::{page, transport_of, watch_status, MockTransport};
use medicine_inventory_client::controllers::average::{
    average_text, AverageController, AverageOutcome, FAILURE_MESSAGE, NO_DATA_MESSAGE,
    PENDING_MESSAGE,
};
use medicine_inventory_client::ui::{StatusRegion, StatusTone};
use medicine_inventory_client::{Endpoint, InventoryError, InventoryPage, Method, PageMounts};
use serde_json::json;

#[test]
fn numeric_average_is_formatted_with_count() {
    let transport = MockTransport::new();
    transport.reply(200, json!({"average_price": 12.5, "count": 4}));
    let mut page = page(transport);

    let outcome = page.trigger_average();
    assert!(outcome.is_success());

    let result = page.average_result().unwrap();
    assert_eq!(result.text(), "Average price: £12.50 (based on 4 medicines)");
    assert_eq!(result.tone(), StatusTone::Success);

    let requests = transport_of(&page).requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].endpoint, Endpoint::AveragePrice);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].form, None);
}

#[test]
fn null_average_shows_service_message() {
    let transport = MockTransport::new();
    transport.reply(200, json!({"average_price": null, "message": "no data"}));
    let mut page = page(transport);

    let outcome = page.trigger_average();
    assert!(!outcome.is_success());
    assert!(matches!(outcome, AverageOutcome::NoData(ref m) if m == "no data"));

    let result = page.average_result().unwrap();
    assert_eq!(result.text(), "no data");
    assert_eq!(result.tone(), StatusTone::Error);
    assert!(!result.text().contains('£'));
}

#[test]
fn loose_count_still_shows_the_average() {
    let transport = MockTransport::new();
    transport
        .reply(200, json!({"average_price": 12.5, "count": 4.0}))
        .reply(200, json!({"average_price": 12.5, "count": null}));
    let mut page = page(transport);

    assert!(page.trigger_average().is_success());
    assert_eq!(
        page.average_result().unwrap().text(),
        "Average price: £12.50 (based on 4 medicines)"
    );

    assert!(page.trigger_average().is_success());
    assert_eq!(
        page.average_result().unwrap().text(),
        "Average price: £12.50 (based on 0 medicines)"
    );
    assert_eq!(page.average_result().unwrap().tone(), StatusTone::Success);
}

#[test]
fn non_string_message_is_shown_as_text() {
    let transport = MockTransport::new();
    transport.reply(200, json!({"average_price": null, "message": 5}));
    let mut page = page(transport);

    assert!(matches!(page.trigger_average(), AverageOutcome::NoData(ref m) if m == "5"));
    assert_eq!(page.average_result().unwrap().text(), "5");
    assert_eq!(page.average_result().unwrap().tone(), StatusTone::Error);
}

#[test]
fn pending_text_is_shown_while_average_is_computed() {
    let transport = MockTransport::new();
    let result = StatusRegion::new();
    let seen = watch_status(&transport, Endpoint::AveragePrice, &result);
    transport.reply(200, json!({"average_price": 3.0, "count": 1}));
    let mut page = InventoryPage::new(
        common::client(transport),
        PageMounts {
            average_result: Some(result.clone()),
            ..PageMounts::all()
        },
    );

    assert!(page.trigger_average().is_success());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(PENDING_MESSAGE.to_string(), StatusTone::Neutral)]
    );
    assert_eq!(result.text(), "Average price: £3.00 (based on 1 medicines)");
}

#[test]
fn null_average_without_message_uses_fallback() {
    for body in [
        json!({"average_price": null, "count": 0}),
        json!({"average_price": null, "message": ""}),
    ] {
        let transport = MockTransport::new();
        transport.reply(200, body);
        let mut page = page(transport);

        assert!(matches!(page.trigger_average(), AverageOutcome::NoData(_)));
        assert_eq!(page.average_result().unwrap().text(), NO_DATA_MESSAGE);
    }
}

#[test]
fn failures_show_generic_message() {
    let transport = MockTransport::new();
    transport
        .reply(500, json!({"average_price": 1.0, "count": 1}))
        .reply_raw(200, "<html></html>")
        .reply(200, json!({"count": 2}))
        .fail_connection();
    let mut page = page(transport);

    assert!(matches!(
        page.trigger_average(),
        AverageOutcome::Failed(InventoryError::Status(500))
    ));
    assert_eq!(page.average_result().unwrap().text(), FAILURE_MESSAGE);

    for _ in 0..3 {
        assert!(matches!(page.trigger_average(), AverageOutcome::Failed(_)));
        assert_eq!(page.average_result().unwrap().text(), FAILURE_MESSAGE);
        assert_eq!(page.average_result().unwrap().tone(), StatusTone::Error);
    }
    // One attempt per trigger, never a retry.
    assert_eq!(transport_of(&page).request_count(), 4);
}

#[test]
fn absent_trigger_is_a_no_op() {
    let transport = MockTransport::new();
    let mut page = InventoryPage::new(common::client(transport), PageMounts::none());

    assert!(matches!(page.trigger_average(), AverageOutcome::Unmounted));
    assert_eq!(transport_of(&page).request_count(), 0);
}

#[test]
fn controller_works_without_result_region() {
    let transport = MockTransport::new();
    transport.reply(200, json!({"average_price": 2.0, "count": 1}));
    let client = common::client(transport);
    let mut controller = AverageController::new(None);

    assert!(controller.trigger(&client).is_success());
    assert!(controller.result().is_none());
}

#[test]
fn result_region_starts_empty() {
    let controller = AverageController::new(Some(StatusRegion::new()));
    assert_eq!(controller.result().unwrap().text(), "");
    assert_eq!(controller.result().unwrap().tone(), StatusTone::Neutral);
}

#[test]
fn average_text_format() {
    assert_eq!(average_text(3.0, 1), "Average price: £3.00 (based on 1 medicines)");
}
