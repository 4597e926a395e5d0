//! 彙總統計（儀表板 / 季度 / 月趨勢）

use ops_core::{InventoryItem, Order};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::period::{month_key, PeriodResolver};

/// 儀表板摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// 庫存總值（四捨五入至小數兩位）
    pub total_inventory_value: Decimal,
    /// 低庫存品項數
    pub low_stock_items: usize,
    /// 未結訂單數（Processing / Backordered）
    pub pending_orders: usize,
    /// 待交品項總數（不受篩選影響）
    pub total_backlog_items: usize,
    /// 訂單總額（不捨入）
    pub total_orders_value: Decimal,
}

/// 季度績效
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyPerformance {
    pub quarter: String,
    pub total_orders: u32,
    pub total_revenue: Decimal,
    pub delivered_orders: u32,
    /// 平均訂單金額（小數兩位）
    pub avg_order_value: Decimal,
    /// 交貨率百分比（小數一位）
    pub fulfillment_rate: Decimal,
}

/// 月趨勢
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub order_count: u32,
    pub revenue: Decimal,
    pub delivered_count: u32,
}

/// 時間桶累計值
#[derive(Debug, Clone, Default)]
struct Bucket {
    count: u32,
    revenue: Decimal,
    delivered: u32,
}

impl Bucket {
    fn add(&mut self, order: &Order) {
        self.count += 1;
        self.revenue += order.total_value;
        if order.is_delivered() {
            self.delivered += 1;
        }
    }
}

/// 彙總計算器
///
/// 輸入皆為已篩選的集合，各報表只走訪一次。
pub struct AggregationCalculator;

impl AggregationCalculator {
    /// 計算儀表板摘要
    pub fn dashboard_summary<'a, 'b, I, O>(
        inventory: I,
        orders: O,
        total_backlog_items: usize,
    ) -> DashboardSummary
    where
        I: IntoIterator<Item = &'a InventoryItem>,
        O: IntoIterator<Item = &'b Order>,
    {
        let mut inventory_value = Decimal::ZERO;
        let mut low_stock_items = 0;
        for item in inventory {
            inventory_value += item.stock_value();
            if item.is_low_stock() {
                low_stock_items += 1;
            }
        }

        let mut total_orders_value = Decimal::ZERO;
        let mut pending_orders = 0;
        for order in orders {
            total_orders_value += order.total_value;
            if order.is_pending() {
                pending_orders += 1;
            }
        }

        DashboardSummary {
            total_inventory_value: inventory_value.round_dp(2),
            low_stock_items,
            pending_orders,
            total_backlog_items,
            total_orders_value,
        }
    }

    /// 計算季度績效，依季度標籤排序
    ///
    /// 不屬於季度表任何季度的訂單直接略過。
    pub fn quarterly_report<'a, I>(
        orders: I,
        resolver: &PeriodResolver,
    ) -> Vec<QuarterlyPerformance>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();
        let mut skipped = 0usize;

        for order in orders {
            match resolver.quarter_of(&order.order_date) {
                Some(quarter) => buckets.entry(quarter.to_string()).or_default().add(order),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("季度報表略過 {} 筆不在季度表內的訂單", skipped);
        }

        buckets
            .into_iter()
            .map(|(quarter, bucket)| {
                let total = Decimal::from(bucket.count);
                QuarterlyPerformance {
                    quarter,
                    total_orders: bucket.count,
                    total_revenue: bucket.revenue,
                    delivered_orders: bucket.delivered,
                    avg_order_value: (bucket.revenue / total).round_dp(2),
                    fulfillment_rate: (Decimal::from(bucket.delivered) * Decimal::ONE_HUNDRED
                        / total)
                        .round_dp(1),
                }
            })
            .collect()
    }

    /// 計算月趨勢，依月份鍵排序
    ///
    /// 下單日期為空的訂單不列入。
    pub fn monthly_trends<'a, I>(orders: I) -> Vec<MonthlyTrend>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut buckets: BTreeMap<String, Bucket> = BTreeMap::new();

        for order in orders {
            if let Some(month) = month_key(&order.order_date) {
                buckets.entry(month.to_string()).or_default().add(order);
            }
        }

        buckets
            .into_iter()
            .map(|(month, bucket)| MonthlyTrend {
                month,
                order_count: bucket.count,
                revenue: bucket.revenue,
                delivered_count: bucket.delivered,
            })
            .collect()
    }
}
