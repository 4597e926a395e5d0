//! 待交訂單（Backlog）與採購單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 待交品項：尚未滿足、等待庫存或採購單的訂單明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    /// 品項ID
    pub id: String,

    /// 來源訂單ID
    pub order_id: String,

    /// 料號
    pub item_sku: String,

    /// 品名
    #[serde(default)]
    pub item_name: String,

    /// 需求數量
    pub quantity_needed: u32,

    /// 可用數量
    pub quantity_available: u32,

    /// 延遲天數
    #[serde(default)]
    pub days_delayed: u32,

    /// 優先級（high / medium / low）
    #[serde(default)]
    pub priority: String,

    /// 是否已有採購單（由採購單關聯推導）
    #[serde(default)]
    pub has_purchase_order: bool,
}

impl BacklogItem {
    /// 短缺數量
    pub fn shortage(&self) -> u32 {
        self.quantity_needed.saturating_sub(self.quantity_available)
    }

    /// 依採購單清單推導 `has_purchase_order`
    pub fn with_purchase_orders(mut self, purchase_orders: &[PurchaseOrder]) -> Self {
        self.has_purchase_order = purchase_orders
            .iter()
            .any(|po| po.backlog_item_id == self.id);
        self
    }
}

/// 採購單（種子資料，本系統不建立）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 採購單ID
    pub id: String,

    /// 對應的待交品項ID
    pub backlog_item_id: String,

    /// 供應商
    pub supplier_name: String,

    /// 採購數量
    pub quantity: u32,

    /// 單位成本
    pub unit_cost: Decimal,

    /// 預計到貨日
    #[serde(default)]
    pub expected_delivery_date: String,

    /// 狀態
    #[serde(default)]
    pub status: String,

    /// 建立日期
    #[serde(default)]
    pub created_date: String,

    /// 備註
    #[serde(default)]
    pub notes: Option<String>,
}

impl PurchaseOrder {
    /// 採購總額
    pub fn total_cost(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_cost
    }
}
