//! 種子資料集

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::backlog::{BacklogItem, PurchaseOrder};
use crate::demand::DemandForecast;
use crate::inventory::InventoryItem;
use crate::order::Order;

/// 預先計算好的支出資料，原樣轉交
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendingSnapshot {
    #[serde(default)]
    pub summary: serde_json::Value,

    #[serde(default)]
    pub monthly: serde_json::Value,

    #[serde(default)]
    pub categories: serde_json::Value,

    #[serde(default)]
    pub transactions: serde_json::Value,
}

/// 分析服務的唯讀資料快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,

    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub demand_forecasts: Vec<DemandForecast>,

    #[serde(default)]
    pub backlog: Vec<BacklogItem>,

    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,

    #[serde(default)]
    pub spending: SpendingSnapshot,
}

impl Dataset {
    /// 從 JSON 字串載入
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從 JSON 檔案載入
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 建構器模式：設置庫存
    pub fn with_inventory(mut self, inventory: Vec<InventoryItem>) -> Self {
        self.inventory = inventory;
        self
    }

    /// 建構器模式：設置訂單
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    /// 建構器模式：設置需求預測
    pub fn with_demand_forecasts(mut self, demand_forecasts: Vec<DemandForecast>) -> Self {
        self.demand_forecasts = demand_forecasts;
        self
    }

    /// 建構器模式：設置待交品項
    pub fn with_backlog(mut self, backlog: Vec<BacklogItem>) -> Self {
        self.backlog = backlog;
        self
    }

    /// 建構器模式：設置採購單
    pub fn with_purchase_orders(mut self, purchase_orders: Vec<PurchaseOrder>) -> Self {
        self.purchase_orders = purchase_orders;
        self
    }

    /// 建構器模式：設置支出資料
    pub fn with_spending(mut self, spending: SpendingSnapshot) -> Self {
        self.spending = spending;
        self
    }
}
