// Validity window and active toggle behavior
//
// A discount applies only when its toggle is on and the evaluation date lies
// inside the inclusive window. Definitions with an inverted window, a
// negative percentage or a percentage above 100 are rejected up front.

use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;
use studentstay::core::AppError;
use studentstay::discounts::models::parse_percentage;
use studentstay::discounts::{DiscountCalculator, DiscountDefinition, FestivalDiscount};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_window_boundaries() {
    let calc = DiscountCalculator::new();
    let start = date(2025, 12, 20);
    let end = date(2025, 12, 31);
    let def = DiscountDefinition::new("Christmas", dec!(10), start, end, true).unwrap();

    let cases = [
        (start - Duration::days(1), false),
        (start, true),
        (date(2025, 12, 25), true),
        (end, true),
        (end + Duration::days(1), false),
    ];

    for (today, expected) in cases {
        assert_eq!(calc.is_active(&def, today), expected, "on {}", today);

        let final_price = calc.apply_discount(&def, dec!(100.00), today).unwrap();
        let expected_price = if expected { dec!(90.00) } else { dec!(100.00) };
        assert_eq!(final_price, expected_price, "on {}", today);
    }
}

#[test]
fn test_toggle_off_inside_window() {
    let calc = DiscountCalculator::new();
    let def =
        DiscountDefinition::new("Paused", dec!(25), date(2025, 1, 1), date(2025, 12, 31), false)
            .unwrap();

    for month in 1..=12 {
        let today = date(2025, month, 15);
        assert!(!calc.is_active(&def, today));
        assert_eq!(calc.apply_discount(&def, dec!(480), today).unwrap(), dec!(480.00));
        assert_eq!(calc.get_discount_amount(&def, dec!(480), today).unwrap(), dec!(0.00));
    }
}

#[test]
fn test_leap_day_window() {
    let calc = DiscountCalculator::new();
    let leap = date(2028, 2, 29);
    let def = DiscountDefinition::new("Leap", dec!(29), leap, leap, true).unwrap();

    assert!(calc.is_active(&def, leap));
    assert!(!calc.is_active(&def, date(2028, 2, 28)));
    assert!(!calc.is_active(&def, date(2028, 3, 1)));
}

#[test]
fn test_inverted_window_rejected_at_construction() {
    let result =
        DiscountDefinition::new("Backwards", dec!(10), date(2025, 12, 31), date(2025, 12, 20), true);
    assert!(matches!(result, Err(AppError::InvalidDateRange(_))));

    let record = FestivalDiscount::new("Backwards", dec!(10), date(2025, 12, 31), date(2025, 12, 20));
    assert!(matches!(record.to_definition(), Err(AppError::InvalidDateRange(_))));
}

#[test]
fn test_percentage_bounds_rejected_at_construction() {
    for bad in [dec!(-0.01), dec!(-100), dec!(100.01), dec!(250)] {
        let result =
            DiscountDefinition::new("Bad", bad, date(2025, 1, 1), date(2025, 1, 31), true);
        assert!(
            matches!(result, Err(AppError::InvalidPercentage(_))),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_non_numeric_percentage_rejected() {
    assert!(matches!(parse_percentage("ten"), Err(AppError::InvalidPercentage(_))));
    assert!(matches!(parse_percentage(""), Err(AppError::InvalidPercentage(_))));
    assert_eq!(parse_percentage("10.00").unwrap(), dec!(10.00));
}
