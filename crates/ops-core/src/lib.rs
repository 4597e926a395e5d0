//! # Factory Ops Core
//!
//! 核心資料模型與類型定義

pub mod backlog;
pub mod config;
pub mod dataset;
pub mod demand;
pub mod inventory;
pub mod order;
pub mod restocking;

// Re-export 主要類型
pub use backlog::{BacklogItem, PurchaseOrder};
pub use config::{SkuCatalog, SkuMeta};
pub use dataset::{Dataset, SpendingSnapshot};
pub use demand::DemandForecast;
pub use inventory::InventoryItem;
pub use order::{Order, OrderStatus};
pub use restocking::{
    CreateRestockingOrder, RestockingOrder, RestockingOrderItem, RestockingRecommendation,
};

/// 營運分析錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("找不到庫存品項: {0}")]
    InventoryItemNotFound(String),

    #[error("找不到訂單: {0}")]
    OrderNotFound(String),

    #[error("資料集解析錯誤: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("讀取資料集失敗: {0}")]
    Io(#[from] std::io::Error),
}

impl OpsError {
    /// 是否為查無資料（對外應回報為 not found）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OpsError::InventoryItemNotFound(_) | OpsError::OrderNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;
