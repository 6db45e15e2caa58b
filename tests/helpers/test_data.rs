// Test Data Factory
//
// Builds accommodations, discounts and students with fixed dates so tests
// never depend on the wall clock.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use studentstay::accommodations::{Accommodation, Room};
use studentstay::bookings::Student;
use studentstay::discounts::FestivalDiscount;

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    /// 20 Dec 2025 to 31 Dec 2025, inclusive
    pub fn christmas(percentage: Decimal) -> FestivalDiscount {
        FestivalDiscount::new(
            "Christmas",
            percentage,
            Self::date(2025, 12, 20),
            Self::date(2025, 12, 31),
        )
    }

    /// Accommodation with `room_count` available rooms numbered 101, 102, ...
    pub fn accommodation(id: i64, price: Decimal, room_count: i64) -> Accommodation {
        let rooms = (1..=room_count)
            .map(|n| Room::new(id * 100 + n, format!("{}", 100 + n)))
            .collect();

        Accommodation::new(id, format!("Residence {}", id), "Dublin", price)
            .expect("valid test accommodation")
            .with_rooms(rooms)
    }

    pub fn discounted_accommodation(id: i64, room_count: i64) -> Accommodation {
        Self::accommodation(id, dec!(650.00), room_count).with_discount(Self::christmas(dec!(10)))
    }

    pub fn student(id: i64) -> Student {
        Student::new(id, format!("student{}", id)).with_email(format!("student{}@example.ie", id))
    }
}
