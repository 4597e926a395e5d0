//! 多維度篩選（倉庫 / 分類 / 狀態）

use ops_core::{InventoryItem, Order};
use serde::{Deserialize, Serialize};

/// 不限制的哨兵值
pub const ALL: &str = "all";

/// 可被篩選的紀錄；缺少的欄位回傳空字串
pub trait Filterable {
    fn warehouse(&self) -> &str;

    fn category(&self) -> &str;

    fn status(&self) -> &str {
        ""
    }
}

impl Filterable for InventoryItem {
    fn warehouse(&self) -> &str {
        &self.warehouse
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Filterable for Order {
    fn warehouse(&self) -> &str {
        self.warehouse.as_deref().unwrap_or("")
    }

    fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    fn status(&self) -> &str {
        &self.status
    }
}

/// 紀錄篩選條件
///
/// 每個條件為 None、空字串或 "all" 時不限制。倉庫比對區分大小寫，
/// 分類與狀態不區分。各條件互相獨立，套用順序不影響結果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub warehouse: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl RecordFilter {
    /// 創建不限制的篩選條件
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse(mut self, warehouse: impl Into<String>) -> Self {
        self.warehouse = Some(warehouse.into());
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// 去除狀態條件（庫存只依倉庫與分類篩選）
    pub fn without_status(&self) -> Self {
        Self {
            status: None,
            ..self.clone()
        }
    }

    /// 是否完全不限制
    pub fn is_unrestricted(&self) -> bool {
        restriction(&self.warehouse).is_none()
            && restriction(&self.category).is_none()
            && restriction(&self.status).is_none()
    }

    /// 檢查單筆紀錄是否符合所有條件
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        if let Some(warehouse) = restriction(&self.warehouse) {
            if record.warehouse() != warehouse {
                return false;
            }
        }

        if let Some(category) = restriction(&self.category) {
            if !eq_ignore_case(record.category(), category) {
                return false;
            }
        }

        if let Some(status) = restriction(&self.status) {
            if !eq_ignore_case(record.status(), status) {
                return false;
            }
        }

        true
    }

    /// 套用篩選，保留原始順序
    pub fn apply<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Filterable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if self.is_unrestricted() {
            return records.into_iter().collect();
        }

        records.into_iter().filter(|r| self.matches(*r)).collect()
    }
}

fn restriction(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != ALL)
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn order(id: &str, warehouse: Option<&str>, category: Option<&str>, status: &str) -> Order {
        let mut order = Order::new(
            id.to_string(),
            format!("ORD-{id}"),
            status.to_string(),
            "2025-03-01".to_string(),
            Decimal::from(10),
        );
        order.warehouse = warehouse.map(str::to_string);
        order.category = category.map(str::to_string);
        order
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            order("1", Some("San Francisco"), Some("Sensors"), "Delivered"),
            order("2", Some("Tokyo"), Some("sensors"), "Processing"),
            order("3", Some("London"), Some("Motors & Drives"), "Backordered"),
            order("4", None, None, "Processing"),
            order("5", Some("san francisco"), Some("Sensors"), "delivered"),
        ]
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.clone()).collect()
    }

    #[rstest]
    #[case(RecordFilter::new(), vec!["1", "2", "3", "4", "5"])]
    #[case(RecordFilter::new().with_warehouse("all"), vec!["1", "2", "3", "4", "5"])]
    #[case(RecordFilter::new().with_warehouse(""), vec!["1", "2", "3", "4", "5"])]
    #[case(RecordFilter::new().with_warehouse("San Francisco"), vec!["1"])]
    #[case(RecordFilter::new().with_category("SENSORS"), vec!["1", "2", "5"])]
    #[case(RecordFilter::new().with_status("delivered"), vec!["1", "5"])]
    #[case(RecordFilter::new().with_category("sensors").with_status("Processing"), vec!["2"])]
    #[case(RecordFilter::new().with_category("Filtration"), vec![])]
    fn test_filter_orders(#[case] filter: RecordFilter, #[case] expected: Vec<&str>) {
        let orders = sample_orders();
        assert_eq!(ids(&filter.apply(&orders)), expected);
    }

    #[test]
    fn test_missing_fields_never_match_concrete_filter() {
        let orders = sample_orders();

        let by_warehouse = RecordFilter::new().with_warehouse("Tokyo").apply(&orders);
        assert!(by_warehouse.iter().all(|o| o.id != "4"));

        let by_category = RecordFilter::new().with_category("Sensors").apply(&orders);
        assert!(by_category.iter().all(|o| o.id != "4"));
    }

    #[test]
    fn test_inventory_has_no_status() {
        let item = InventoryItem::new("1".to_string(), "A".to_string(), 1, 1, Decimal::ONE)
            .with_warehouse("Tokyo".to_string());
        let items = vec![item];

        assert_eq!(RecordFilter::new().with_warehouse("Tokyo").apply(&items).len(), 1);
        assert_eq!(RecordFilter::new().with_status("Processing").apply(&items).len(), 0);
        assert_eq!(RecordFilter::new().with_status("all").apply(&items).len(), 1);
    }

    #[test]
    fn test_without_status_keeps_other_conditions() {
        let filter = RecordFilter::new()
            .with_warehouse("Tokyo")
            .with_category("Sensors")
            .with_status("Delivered")
            .without_status();

        assert_eq!(filter.warehouse.as_deref(), Some("Tokyo"));
        assert_eq!(filter.category.as_deref(), Some("Sensors"));
        assert_eq!(filter.status, None);
    }

    #[test]
    fn test_unrestricted() {
        assert!(RecordFilter::new().is_unrestricted());
        assert!(RecordFilter::new().with_status("all").is_unrestricted());
        assert!(!RecordFilter::new().with_category("Sensors").is_unrestricted());
    }

    fn warehouse_value() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(vec!["all", "Tokyo", "London", "tokyo", ""]))
            .prop_map(|v| v.map(str::to_string))
    }

    fn category_value() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(vec!["all", "Sensors", "SENSORS", "Filtration"]))
            .prop_map(|v| v.map(str::to_string))
    }

    fn status_value() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(vec!["all", "Delivered", "processing"]))
            .prop_map(|v| v.map(str::to_string))
    }

    fn arb_filter() -> impl Strategy<Value = RecordFilter> {
        (warehouse_value(), category_value(), status_value()).prop_map(
            |(warehouse, category, status)| RecordFilter {
                warehouse,
                category,
                status,
            },
        )
    }

    fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
        prop::collection::vec(
            (
                prop::option::of(prop::sample::select(vec!["Tokyo", "London", "tokyo"])),
                prop::option::of(prop::sample::select(vec!["Sensors", "sensors", "Filtration"])),
                prop::sample::select(vec!["Delivered", "Processing", "Shipped"]),
            ),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (w, c, s))| order(&i.to_string(), w, c, s))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filters_commute(orders in arb_orders(), f1 in arb_filter(), f2 in arb_filter()) {
            let a = f2.apply(f1.apply(&orders));
            let b = f1.apply(f2.apply(&orders));
            prop_assert_eq!(ids(&a), ids(&b));
        }

        #[test]
        fn prop_filter_is_ordered_subsequence(orders in arb_orders(), f in arb_filter()) {
            let filtered = f.apply(&orders);
            let mut cursor = orders.iter();
            for kept in filtered {
                prop_assert!(cursor.any(|o| std::ptr::eq(o, kept)));
            }
        }
    }
}
