//! 料號補貨參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一料號的補貨參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuMeta {
    /// 單位成本
    pub unit_cost: Decimal,

    /// 分類
    pub category: String,

    /// 提前期（天）
    pub lead_time_days: u32,
}

impl SkuMeta {
    /// 創建新的料號參數
    pub fn new(unit_cost: Decimal, category: String, lead_time_days: u32) -> Self {
        Self {
            unit_cost,
            category,
            lead_time_days,
        }
    }

    /// 未知料號使用的預設參數：單價 50.00、分類 General、提前期 14 天
    pub fn fallback() -> Self {
        Self::new(Decimal::new(5000, 2), "General".to_string(), 14)
    }
}

impl Default for SkuMeta {
    fn default() -> Self {
        Self::fallback()
    }
}

/// 料號參數表（SKU → 單價/分類/提前期）
///
/// 由外部注入推薦引擎與補貨單儲存，查無料號時回傳 `fallback`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuCatalog {
    entries: HashMap<String, SkuMeta>,
    fallback: SkuMeta,
}

impl SkuCatalog {
    /// 創建空的參數表
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: SkuMeta::fallback(),
        }
    }

    /// 工廠預設參數表
    pub fn factory_default() -> Self {
        let table = [
            ("WDG-001", 4500, "Industrial Parts", 14),
            ("BRG-102", 2850, "Mechanical Components", 10),
            ("GSK-203", 1275, "Sealing & Gaskets", 7),
            ("MTR-304", 38000, "Motors & Drives", 21),
            ("FLT-405", 899, "Filtration", 5),
            ("VLV-506", 6500, "Valves & Fittings", 14),
            ("PSU-501", 1899, "Power Supplies", 7),
            ("SNR-420", 8950, "Sensors", 10),
            ("CTL-330", 12500, "Controllers", 12),
        ];

        table
            .into_iter()
            .fold(Self::new(), |catalog, (sku, cents, category, lead_time)| {
                catalog.with_sku(
                    sku.to_string(),
                    SkuMeta::new(Decimal::new(cents, 2), category.to_string(), lead_time),
                )
            })
    }

    /// 建構器模式：加入或覆寫料號
    pub fn with_sku(mut self, sku: String, meta: SkuMeta) -> Self {
        self.entries.insert(sku, meta);
        self
    }

    /// 建構器模式：設置預設參數
    pub fn with_fallback(mut self, fallback: SkuMeta) -> Self {
        self.fallback = fallback;
        self
    }

    /// 加入或覆寫料號
    pub fn insert(&mut self, sku: String, meta: SkuMeta) {
        self.entries.insert(sku, meta);
    }

    /// 查詢料號參數，查無時回傳預設參數
    pub fn lookup(&self, sku: &str) -> &SkuMeta {
        self.entries.get(sku).unwrap_or(&self.fallback)
    }

    /// 是否有此料號
    pub fn contains(&self, sku: &str) -> bool {
        self.entries.contains_key(sku)
    }

    /// 料號提前期（天）
    pub fn lead_time_days(&self, sku: &str) -> u32 {
        self.lookup(sku).lead_time_days
    }

    pub fn fallback(&self) -> &SkuMeta {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkuCatalog {
    fn default() -> Self {
        Self::factory_default()
    }
}
