//! # Factory Ops
//!
//! 工廠庫存營運分析：篩選與時間區間、儀表板與季度/月度報表、
//! 需求缺口補貨建議、補貨單提交。
//!
//! ```no_run
//! use factory_ops::{Dataset, InventoryService, OrderQuery, Settings};
//!
//! let settings = Settings::load(None).unwrap();
//! factory_ops::telemetry::init_tracing(&settings.logging);
//!
//! let dataset = Dataset::from_path("data/dataset.json").unwrap();
//! let service = InventoryService::from_settings(dataset, &settings);
//! let summary = service.dashboard_summary(&OrderQuery::default());
//! println!("庫存總值: {}", summary.total_inventory_value);
//! ```

pub mod service;
pub mod settings;
pub mod telemetry;

pub use ops_calc::{
    total_estimated_cost, DashboardSummary, MonthlyTrend, OrderQuery, PeriodResolver,
    QuarterlyPerformance, RecordFilter,
};
pub use ops_core::{
    BacklogItem, CreateRestockingOrder, Dataset, DemandForecast, InventoryItem, OpsError, Order,
    PurchaseOrder, RestockingOrder, RestockingOrderItem, RestockingRecommendation, SkuCatalog,
    SkuMeta, SpendingSnapshot,
};
pub use service::{InventoryService, ServiceInfo, API_VERSION};
pub use settings::{LogFormat, LoggingSettings, Settings, SettingsError};
