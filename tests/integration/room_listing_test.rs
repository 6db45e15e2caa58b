//! Integration tests for room listings and accommodation detail pricing
//!
//! Listings are priced for an explicit business date; the same catalog gives
//! discounted prices inside a festival window and list prices outside it.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use studentstay::accommodations::{PricingService, RoomStatus};

#[test]
fn test_listings_inside_festival_window() {
    let pricing = PricingService::default();
    let catalog = vec![
        TestDataFactory::discounted_accommodation(1, 2),
        TestDataFactory::accommodation(2, dec!(480.00), 1),
    ];

    let listings = pricing
        .room_listings(&catalog, TestDataFactory::date(2025, 12, 24))
        .unwrap();

    assert_eq!(listings.len(), 3);

    let discounted: Vec<_> = listings.iter().filter(|l| l.accommodation_id == 1).collect();
    assert_eq!(discounted.len(), 2);
    for listing in discounted {
        assert_eq!(listing.original_price, dec!(650.00));
        assert_eq!(listing.final_price, dec!(585.00));
        assert_eq!(listing.discount_percent, dec!(10));
        assert_eq!(listing.festival_name.as_deref(), Some("Christmas"));
        assert_eq!(listing.status, RoomStatus::Available);
    }

    let plain = listings.iter().find(|l| l.accommodation_id == 2).unwrap();
    assert_eq!(plain.final_price, dec!(480.00));
    assert_eq!(plain.discount_percent, Decimal::ZERO);
    assert_eq!(plain.festival_name, None);
}

#[test]
fn test_listings_after_festival_window() {
    let pricing = PricingService::default();
    let catalog = vec![TestDataFactory::discounted_accommodation(1, 1)];

    let listings = pricing
        .room_listings(&catalog, TestDataFactory::date(2026, 1, 1))
        .unwrap();

    assert_eq!(listings[0].final_price, dec!(650.00));
    assert_eq!(listings[0].discount_percent, Decimal::ZERO);
    // the room list still names the linked festival
    assert_eq!(listings[0].festival_name.as_deref(), Some("Christmas"));
}

#[test]
fn test_summary_reports_availability() {
    let pricing = PricingService::default();
    let mut acc = TestDataFactory::discounted_accommodation(1, 1);
    acc.rooms[0].status = RoomStatus::Booked;

    let summary = pricing
        .accommodation_summary(&acc, TestDataFactory::date(2025, 12, 20))
        .unwrap();

    assert!(!summary.has_available_rooms);
    assert_eq!(summary.room_count, 1);
    assert_eq!(summary.discount_amount, dec!(65.00));
    assert_eq!(summary.final_price, dec!(585.00));
    assert_eq!(summary.festival_name.as_deref(), Some("Christmas"));
}

#[test]
fn test_listings_serialize_money_as_strings() {
    let pricing = PricingService::default();
    let catalog = vec![TestDataFactory::discounted_accommodation(1, 1)];

    let listings = pricing
        .room_listings(&catalog, TestDataFactory::date(2025, 12, 24))
        .unwrap();
    let json = serde_json::to_value(&listings).unwrap();

    assert_eq!(json[0]["final_price"], "585.00");
    assert_eq!(json[0]["status"], "Available");
}
