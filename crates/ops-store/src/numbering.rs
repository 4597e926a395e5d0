//! 補貨單編號與交期推算

use chrono::{Duration, NaiveDateTime};
use ops_core::{RestockingOrderItem, SkuCatalog};

/// 補貨單號前綴
pub const ORDER_NUMBER_PREFIX: &str = "RST";

/// 補貨單號：RST-<YYYYMMDD>-<至少四位的流水號>
pub fn order_number(submitted_at: NaiveDateTime, sequence: usize) -> String {
    format!(
        "{}-{}-{:04}",
        ORDER_NUMBER_PREFIX,
        submitted_at.format("%Y%m%d"),
        sequence
    )
}

/// 補貨單提前期：明細中最長的料號提前期，無明細時用參數表預設值
pub fn lead_time_days(items: &[RestockingOrderItem], catalog: &SkuCatalog) -> u32 {
    items
        .iter()
        .map(|item| catalog.lead_time_days(&item.sku))
        .max()
        .unwrap_or(catalog.fallback().lead_time_days)
}

/// 預計到貨時間（日曆天）
pub fn estimated_delivery(submitted_at: NaiveDateTime, lead_time_days: u32) -> NaiveDateTime {
    submitted_at
        .checked_add_signed(Duration::days(i64::from(lead_time_days)))
        .unwrap_or(NaiveDateTime::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn item(sku: &str) -> RestockingOrderItem {
        RestockingOrderItem {
            sku: sku.to_string(),
            name: format!("{sku} item"),
            quantity: 1,
            unit_cost: Decimal::ONE,
            category: "General".to_string(),
        }
    }

    #[rstest]
    #[case(1, "RST-20251015-0001")]
    #[case(42, "RST-20251015-0042")]
    #[case(12345, "RST-20251015-12345")]
    fn test_order_number(#[case] sequence: usize, #[case] expected: &str) {
        assert_eq!(order_number(at(2025, 10, 15), sequence), expected);
    }

    #[test]
    fn test_lead_time_is_max_over_items() {
        let catalog = SkuCatalog::factory_default();

        // FLT-405 = 5 天, MTR-304 = 21 天, GSK-203 = 7 天
        let items = vec![item("FLT-405"), item("MTR-304"), item("GSK-203")];
        assert_eq!(lead_time_days(&items, &catalog), 21);
    }

    #[test]
    fn test_lead_time_defaults() {
        let catalog = SkuCatalog::factory_default();

        assert_eq!(lead_time_days(&[], &catalog), 14);
        assert_eq!(lead_time_days(&[item("UNKNOWN")], &catalog), 14);
        assert_eq!(lead_time_days(&[item("FLT-405"), item("UNKNOWN")], &catalog), 14);
    }

    #[test]
    fn test_estimated_delivery_crosses_month() {
        let delivery = estimated_delivery(at(2025, 10, 25), 10);
        assert_eq!(delivery, at(2025, 11, 4));
    }
}
