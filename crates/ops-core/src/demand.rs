//! 需求預測模型

use serde::{Deserialize, Serialize};

/// 需求預測（預測值由外部提供，本系統不計算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandForecast {
    /// 預測ID
    pub id: String,

    /// 料號
    pub item_sku: String,

    /// 品名
    #[serde(default)]
    pub item_name: String,

    /// 目前需求
    pub current_demand: u32,

    /// 預測需求
    pub forecasted_demand: u32,

    /// 趨勢標籤（increasing / stable / decreasing）
    #[serde(default)]
    pub trend: String,

    /// 期間標籤
    #[serde(default)]
    pub period: String,
}

impl DemandForecast {
    /// 創建新的需求預測
    pub fn new(id: String, item_sku: String, current_demand: u32, forecasted_demand: u32) -> Self {
        Self {
            id,
            item_sku,
            item_name: String::new(),
            current_demand,
            forecasted_demand,
            trend: String::new(),
            period: String::new(),
        }
    }

    /// 建構器模式：設置品名
    pub fn with_item_name(mut self, item_name: String) -> Self {
        self.item_name = item_name;
        self
    }

    /// 需求缺口（預測 - 目前），可能為負
    pub fn demand_gap(&self) -> i64 {
        i64::from(self.forecasted_demand) - i64::from(self.current_demand)
    }

    /// 是否需要補貨（缺口 > 0）
    pub fn needs_restock(&self) -> bool {
        self.demand_gap() > 0
    }
}
