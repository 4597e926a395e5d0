//! # Factory Ops Calculation Engine
//!
//! 篩選、時間區間、彙總統計與補貨建議

pub mod aggregation;
pub mod filter;
pub mod period;
pub mod recommendation;

// Re-export 主要類型
pub use aggregation::{
    AggregationCalculator, DashboardSummary, MonthlyTrend, QuarterlyPerformance,
};
pub use filter::{Filterable, RecordFilter};
pub use period::{Dated, Period, PeriodResolver, QuarterCalendar};
pub use recommendation::{total_estimated_cost, RecommendationEngine};

use serde::{Deserialize, Serialize};

/// 訂單查詢條件：紀錄篩選 + 時間區間 token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(flatten)]
    pub filter: RecordFilter,

    /// 月份（YYYY-MM）或季度（Qn-YYYY）token
    #[serde(default)]
    pub month: Option<String>,
}

impl OrderQuery {
    /// 創建不限制的查詢
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置紀錄篩選
    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 建構器模式：設置時間區間
    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// 先套用紀錄篩選，再套用時間區間
    pub fn apply<'a, T, I>(&self, records: I, resolver: &PeriodResolver) -> Vec<&'a T>
    where
        T: Filterable + Dated + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let filtered = self.filter.apply(records);
        resolver.filter(filtered, self.month.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_core::Order;
    use rust_decimal::Decimal;

    fn order(id: &str, warehouse: &str, status: &str, date: &str) -> Order {
        Order::new(
            id.to_string(),
            format!("ORD-{id}"),
            status.to_string(),
            date.to_string(),
            Decimal::ONE,
        )
        .with_warehouse(warehouse.to_string())
    }

    #[test]
    fn test_order_query_combines_filter_and_period() {
        let orders = vec![
            order("1", "Tokyo", "Delivered", "2025-02-10"),
            order("2", "Tokyo", "Delivered", "2025-05-10"),
            order("3", "London", "Delivered", "2025-02-11"),
            order("4", "Tokyo", "Processing", "2025-03-01"),
        ];

        let query = OrderQuery::new()
            .with_filter(RecordFilter::new().with_warehouse("Tokyo").with_status("delivered"))
            .with_month("Q1-2025");

        let result = query.apply(&orders, &PeriodResolver::default());
        let ids: Vec<_> = result.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_default_query_is_unrestricted() {
        let orders = vec![
            order("1", "Tokyo", "Delivered", ""),
            order("2", "", "", "2030-01-01"),
        ];
        let resolver = PeriodResolver::default();

        assert_eq!(OrderQuery::default().apply(&orders, &resolver).len(), 2);
    }

    #[test]
    fn test_query_deserializes_flat() {
        let query: OrderQuery =
            serde_json::from_str(r#"{"warehouse": "Tokyo", "month": "2025-03"}"#).unwrap();

        assert_eq!(query.filter.warehouse.as_deref(), Some("Tokyo"));
        assert_eq!(query.filter.category, None);
        assert_eq!(query.month.as_deref(), Some("2025-03"));
    }
}
