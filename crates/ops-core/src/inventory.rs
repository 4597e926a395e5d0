//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存品項（倉庫中某 SKU 的現況）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 品項ID
    pub id: String,

    /// 料號
    pub sku: String,

    /// 品名
    #[serde(default)]
    pub name: String,

    /// 分類
    #[serde(default)]
    pub category: String,

    /// 倉庫
    #[serde(default)]
    pub warehouse: String,

    /// 現有庫存
    pub quantity_on_hand: u32,

    /// 再訂購點
    pub reorder_point: u32,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 儲位
    #[serde(default)]
    pub location: String,

    /// 最後更新時間
    #[serde(default)]
    pub last_updated: String,
}

impl InventoryItem {
    /// 創建新的庫存品項
    pub fn new(
        id: String,
        sku: String,
        quantity_on_hand: u32,
        reorder_point: u32,
        unit_cost: Decimal,
    ) -> Self {
        Self {
            id,
            sku,
            name: String::new(),
            category: String::new(),
            warehouse: String::new(),
            quantity_on_hand,
            reorder_point,
            unit_cost,
            location: String::new(),
            last_updated: String::new(),
        }
    }

    /// 建構器模式：設置品名
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse(mut self, warehouse: String) -> Self {
        self.warehouse = warehouse;
        self
    }

    /// 檢查是否低庫存（現有庫存 <= 再訂購點）
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand <= self.reorder_point
    }

    /// 庫存價值（現有庫存 × 單位成本）
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity_on_hand) * self.unit_cost
    }
}
