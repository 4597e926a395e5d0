//! 客戶訂單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 已知的訂單狀態
///
/// 訂單上的狀態是開放詞彙（字串），此列舉只涵蓋統計時需要辨識的值，
/// 比對採完全相符（區分大小寫）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 處理中
    Processing,
    /// 缺貨待補
    Backordered,
    /// 已出貨
    Shipped,
    /// 已交貨
    Delivered,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    /// 狀態字串
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Backordered => "Backordered",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// 解析狀態字串，未知值回傳 None
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "Processing" => Some(OrderStatus::Processing),
            "Backordered" => Some(OrderStatus::Backordered),
            "Shipped" => Some(OrderStatus::Shipped),
            "Delivered" => Some(OrderStatus::Delivered),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// 是否為未結訂單（處理中或缺貨待補）
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Processing | OrderStatus::Backordered)
    }
}

/// 客戶訂單（種子資料，核心只讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: String,

    /// 訂單編號
    pub order_number: String,

    /// 客戶
    #[serde(default)]
    pub customer: String,

    /// 明細（不透明的鍵值對）
    #[serde(default)]
    pub items: Vec<serde_json::Map<String, serde_json::Value>>,

    /// 狀態
    #[serde(default)]
    pub status: String,

    /// 下單日期（ISO 日期或日期時間，可能為空）
    #[serde(default)]
    pub order_date: String,

    /// 預計交期
    #[serde(default)]
    pub expected_delivery: String,

    /// 實際交期
    #[serde(default)]
    pub actual_delivery: Option<String>,

    /// 訂單總額
    pub total_value: Decimal,

    /// 出貨倉庫（篩選用）
    #[serde(default)]
    pub warehouse: Option<String>,

    /// 分類（篩選用）
    #[serde(default)]
    pub category: Option<String>,
}

impl Order {
    /// 創建新的訂單
    pub fn new(
        id: String,
        order_number: String,
        status: String,
        order_date: String,
        total_value: Decimal,
    ) -> Self {
        Self {
            id,
            order_number,
            customer: String::new(),
            items: Vec::new(),
            status,
            order_date,
            expected_delivery: String::new(),
            actual_delivery: None,
            total_value,
            warehouse: None,
            category: None,
        }
    }

    /// 建構器模式：設置客戶
    pub fn with_customer(mut self, customer: String) -> Self {
        self.customer = customer;
        self
    }

    /// 建構器模式：設置倉庫
    pub fn with_warehouse(mut self, warehouse: String) -> Self {
        self.warehouse = Some(warehouse);
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    /// 已知狀態；開放詞彙中的其他值回傳 None
    pub fn status_kind(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }

    /// 是否為未結訂單
    pub fn is_pending(&self) -> bool {
        self.status_kind().is_some_and(|s| s.is_pending())
    }

    /// 是否已交貨
    pub fn is_delivered(&self) -> bool {
        self.status_kind() == Some(OrderStatus::Delivered)
    }
}
