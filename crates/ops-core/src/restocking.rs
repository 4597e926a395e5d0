//! 補貨建議與補貨單模型

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SkuMeta;
use crate::demand::DemandForecast;

/// 補貨建議（由需求缺口推導，不儲存）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockingRecommendation {
    /// 來源預測ID
    pub id: String,

    /// 料號
    pub item_sku: String,

    /// 品名
    pub item_name: String,

    /// 分類（來自料號參數表）
    pub category: String,

    /// 目前需求
    pub current_demand: u32,

    /// 預測需求
    pub forecasted_demand: u32,

    /// 需求缺口（恆 > 0）
    pub demand_gap: u32,

    /// 單位成本（來自料號參數表）
    pub unit_cost: Decimal,

    /// 建議補貨數量
    pub recommended_quantity: u32,

    /// 預估成本（缺口 × 單位成本，四捨五入至小數兩位）
    pub estimated_cost: Decimal,

    /// 提前期（天）
    pub lead_time_days: u32,
}

impl RestockingRecommendation {
    /// 由預測與料號參數建立建議；缺口 <= 0 時回傳 None
    pub fn from_forecast(forecast: &DemandForecast, meta: &SkuMeta) -> Option<Self> {
        let gap = u32::try_from(forecast.demand_gap()).ok().filter(|g| *g > 0)?;

        Some(Self {
            id: forecast.id.clone(),
            item_sku: forecast.item_sku.clone(),
            item_name: forecast.item_name.clone(),
            category: meta.category.clone(),
            current_demand: forecast.current_demand,
            forecasted_demand: forecast.forecasted_demand,
            demand_gap: gap,
            unit_cost: meta.unit_cost,
            recommended_quantity: gap,
            estimated_cost: (Decimal::from(gap) * meta.unit_cost).round_dp(2),
            lead_time_days: meta.lead_time_days,
        })
    }

    /// 轉為補貨單明細（採用建議數量）
    pub fn to_order_item(&self) -> RestockingOrderItem {
        RestockingOrderItem {
            sku: self.item_sku.clone(),
            name: self.item_name.clone(),
            quantity: self.recommended_quantity,
            unit_cost: self.unit_cost,
            category: self.category.clone(),
        }
    }
}

/// 補貨單明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockingOrderItem {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_cost: Decimal,
    pub category: String,
}

impl RestockingOrderItem {
    /// 明細小計
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_cost
    }
}

/// 補貨單提交請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRestockingOrder {
    /// 明細
    pub items: Vec<RestockingOrderItem>,

    /// 呼叫端提供的總成本（不重新計算）
    pub total_cost: Decimal,

    /// 備註
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateRestockingOrder {
    /// 由接受的補貨建議建立請求，總成本為各建議預估成本之和
    pub fn from_recommendations(recommendations: &[RestockingRecommendation]) -> Self {
        Self {
            items: recommendations
                .iter()
                .map(RestockingRecommendation::to_order_item)
                .collect(),
            total_cost: recommendations.iter().map(|r| r.estimated_cost).sum(),
            notes: None,
        }
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// 已提交的補貨單（由補貨單儲存建立，建立後不可變）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockingOrder {
    /// 流水號ID（1 起算）
    pub id: String,

    /// 單號：RST-<YYYYMMDD>-<四位流水號>
    pub order_number: String,

    /// 明細
    pub items: Vec<RestockingOrderItem>,

    /// 狀態（固定為 Submitted）
    pub status: String,

    /// 提交時間
    pub submitted_at: NaiveDateTime,

    /// 預計到貨時間
    pub estimated_delivery: NaiveDateTime,

    /// 總成本
    pub total_cost: Decimal,

    /// 提前期（明細中最長者）
    pub lead_time_days: u32,

    /// 備註
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RestockingOrder {
    /// 補貨單建立時的固定狀態
    pub const SUBMITTED: &'static str = "Submitted";
}
