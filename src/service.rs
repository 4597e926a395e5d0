//! 庫存營運服務門面
//!
//! 查詢類操作只讀取資料集快照；唯一的寫入是補貨單提交，由
//! [`RestockingOrderStore`] 內部的鎖保證一致性，因此服務本身可跨執行緒共用。

use std::sync::Arc;

use ops_calc::{
    total_estimated_cost, AggregationCalculator, DashboardSummary, MonthlyTrend, OrderQuery,
    PeriodResolver, QuarterlyPerformance, RecommendationEngine, RecordFilter,
};
use ops_core::{
    BacklogItem, CreateRestockingOrder, Dataset, DemandForecast, InventoryItem, OpsError, Order,
    PurchaseOrder, RestockingOrder, RestockingRecommendation, Result, SkuCatalog,
};
use ops_store::RestockingOrderStore;
use serde::Serialize;

use crate::settings::Settings;

/// 對外 API 版本（與 HTTP 介面的版本號一致，不隨 crate 版本變動）
pub const API_VERSION: &str = "1.0.0";

/// 服務基本資訊
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

/// 庫存營運服務
pub struct InventoryService {
    dataset: Dataset,
    resolver: PeriodResolver,
    recommender: RecommendationEngine,
    store: RestockingOrderStore,
}

impl InventoryService {
    /// 使用指定料號表與預設季度表（2025）建立服務
    pub fn new(dataset: Dataset, catalog: SkuCatalog) -> Self {
        Self::with_resolver(dataset, catalog, PeriodResolver::default())
    }

    /// 依設定建立服務（料號表覆寫、報表年度）
    pub fn from_settings(dataset: Dataset, settings: &Settings) -> Self {
        Self::with_resolver(dataset, settings.sku_catalog(), settings.period_resolver())
    }

    pub fn with_resolver(dataset: Dataset, catalog: SkuCatalog, resolver: PeriodResolver) -> Self {
        let catalog = Arc::new(catalog);

        tracing::info!(
            "庫存營運服務啟動: 庫存 {} 筆，訂單 {} 筆，預測 {} 筆，料號參數 {} 筆",
            dataset.inventory.len(),
            dataset.orders.len(),
            dataset.demand_forecasts.len(),
            catalog.len()
        );

        Self {
            dataset,
            resolver,
            recommender: RecommendationEngine::new(Arc::clone(&catalog)),
            store: RestockingOrderStore::new(catalog),
        }
    }

    pub fn root_info(&self) -> ServiceInfo {
        ServiceInfo {
            message: "Factory Inventory Management System API".to_string(),
            version: API_VERSION.to_string(),
        }
    }

    /// 篩選庫存（只看倉庫與分類，狀態條件不適用於庫存）
    pub fn inventory(&self, filter: &RecordFilter) -> Vec<InventoryItem> {
        filter
            .without_status()
            .apply(&self.dataset.inventory)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn inventory_item(&self, id: &str) -> Result<InventoryItem> {
        self.dataset
            .inventory
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| OpsError::InventoryItemNotFound(id.to_string()))
    }

    /// 依倉庫、分類、狀態與時間區間篩選訂單
    pub fn orders(&self, query: &OrderQuery) -> Vec<Order> {
        query
            .apply(&self.dataset.orders, &self.resolver)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn order(&self, id: &str) -> Result<Order> {
        self.dataset
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or_else(|| OpsError::OrderNotFound(id.to_string()))
    }

    pub fn demand_forecasts(&self) -> &[DemandForecast] {
        &self.dataset.demand_forecasts
    }

    /// 待交品項，附上是否已有採購單
    pub fn backlog(&self) -> Vec<BacklogItem> {
        self.dataset
            .backlog
            .iter()
            .cloned()
            .map(|item| item.with_purchase_orders(&self.dataset.purchase_orders))
            .collect()
    }

    /// 指向某待交品項的採購單
    pub fn purchase_orders_for(&self, backlog_item_id: &str) -> Vec<PurchaseOrder> {
        self.dataset
            .purchase_orders
            .iter()
            .filter(|po| po.backlog_item_id == backlog_item_id)
            .cloned()
            .collect()
    }

    /// 儀表板摘要
    ///
    /// 訂單套用完整查詢，庫存只套用倉庫與分類；待交品項數不受篩選影響。
    pub fn dashboard_summary(&self, query: &OrderQuery) -> DashboardSummary {
        let inventory = query.filter.without_status().apply(&self.dataset.inventory);
        let orders = query.apply(&self.dataset.orders, &self.resolver);

        tracing::debug!(
            "儀表板摘要: 庫存 {} 筆，訂單 {} 筆",
            inventory.len(),
            orders.len()
        );

        AggregationCalculator::dashboard_summary(inventory, orders, self.dataset.backlog.len())
    }

    /// 季度績效；預設查詢即為全部訂單
    pub fn quarterly_report(&self, query: &OrderQuery) -> Vec<QuarterlyPerformance> {
        let orders = query.apply(&self.dataset.orders, &self.resolver);
        AggregationCalculator::quarterly_report(orders, &self.resolver)
    }

    /// 月趨勢；預設查詢即為全部訂單
    pub fn monthly_trends(&self, query: &OrderQuery) -> Vec<MonthlyTrend> {
        let orders = query.apply(&self.dataset.orders, &self.resolver);
        AggregationCalculator::monthly_trends(orders)
    }

    pub fn spending_summary(&self) -> &serde_json::Value {
        &self.dataset.spending.summary
    }

    pub fn monthly_spending(&self) -> &serde_json::Value {
        &self.dataset.spending.monthly
    }

    pub fn category_spending(&self) -> &serde_json::Value {
        &self.dataset.spending.categories
    }

    pub fn recent_transactions(&self) -> &serde_json::Value {
        &self.dataset.spending.transactions
    }

    /// 依需求預測產生補貨建議
    pub fn restocking_recommendations(&self) -> Vec<RestockingRecommendation> {
        let recommendations = self.recommender.recommend(&self.dataset.demand_forecasts);

        tracing::info!(
            "補貨建議 {} 筆，預估總成本 {}",
            recommendations.len(),
            total_estimated_cost(&recommendations)
        );

        recommendations
    }

    /// 提交補貨單
    pub fn submit_restocking_order(&self, request: CreateRestockingOrder) -> RestockingOrder {
        self.store.submit(request)
    }

    /// 依提交順序列出補貨單
    pub fn restocking_orders(&self) -> Vec<RestockingOrder> {
        self.store.list()
    }

    /// 料號參數表
    pub fn catalog(&self) -> &SkuCatalog {
        self.recommender.catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_send_sync() {
        assert_send_sync::<InventoryService>();
    }

    #[test]
    fn test_root_info() {
        let service = InventoryService::new(Dataset::default(), SkuCatalog::factory_default());
        let info = service.root_info();

        assert_eq!(info.message, "Factory Inventory Management System API");
        assert_eq!(info.version, "1.0.0");
    }

    #[test]
    fn test_inventory_ignores_status_condition() {
        let dataset = Dataset::default().with_inventory(vec![InventoryItem::new(
            "1".to_string(),
            "WDG-001".to_string(),
            5,
            10,
            Decimal::ONE,
        )
        .with_warehouse("Tokyo".to_string())]);
        let service = InventoryService::new(dataset, SkuCatalog::factory_default());

        let filter = RecordFilter::new()
            .with_warehouse("Tokyo")
            .with_status("Delivered");
        assert_eq!(service.inventory(&filter).len(), 1);
    }

    #[test]
    fn test_from_settings_uses_reporting_year() {
        let settings = Settings::from_toml_str("[reporting]\nyear = 2024\n").unwrap();
        let dataset = Dataset::default().with_orders(vec![Order::new(
            "1".to_string(),
            "ORD-1".to_string(),
            "Delivered".to_string(),
            "2024-02-01".to_string(),
            Decimal::from(10),
        )]);

        let service = InventoryService::from_settings(dataset, &settings);
        let report = service.quarterly_report(&OrderQuery::default());

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].quarter, "Q1-2024");
    }
}
