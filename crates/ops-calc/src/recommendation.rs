//! 補貨建議

use ops_core::{DemandForecast, RestockingRecommendation, SkuCatalog};
use rust_decimal::Decimal;
use std::sync::Arc;

/// 補貨建議引擎
///
/// 逐筆預測計算需求缺口，缺口 > 0 者依料號參數表補上單價、分類與提前期，
/// 最後依缺口由大到小排序（穩定排序，同缺口保留預測原始順序）。
pub struct RecommendationEngine {
    /// 料號參數表
    catalog: Arc<SkuCatalog>,
}

impl RecommendationEngine {
    /// 創建新的建議引擎
    pub fn new(catalog: Arc<SkuCatalog>) -> Self {
        Self { catalog }
    }

    /// 產生排序後的補貨建議
    pub fn recommend(&self, forecasts: &[DemandForecast]) -> Vec<RestockingRecommendation> {
        let mut recommendations: Vec<_> = forecasts
            .iter()
            .filter_map(|forecast| {
                let meta = self.catalog.lookup(&forecast.item_sku);
                if !self.catalog.contains(&forecast.item_sku) {
                    tracing::debug!("料號 {} 不在參數表中，使用預設參數", forecast.item_sku);
                }
                RestockingRecommendation::from_forecast(forecast, meta)
            })
            .collect();

        recommendations.sort_by(|a, b| b.demand_gap.cmp(&a.demand_gap));

        tracing::debug!(
            "補貨建議: 預測 {} 筆，建議 {} 筆",
            forecasts.len(),
            recommendations.len()
        );

        recommendations
    }

    /// 獲取料號參數表引用
    pub fn catalog(&self) -> &SkuCatalog {
        &self.catalog
    }
}

/// 建議清單的預估總成本
pub fn total_estimated_cost(recommendations: &[RestockingRecommendation]) -> Decimal {
    recommendations.iter().map(|r| r.estimated_cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_core::SkuMeta;

    fn forecast(id: &str, sku: &str, current: u32, forecasted: u32) -> DemandForecast {
        DemandForecast::new(id.to_string(), sku.to_string(), current, forecasted)
            .with_item_name(format!("{sku} item"))
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Arc::new(SkuCatalog::factory_default()))
    }

    #[test]
    fn test_only_positive_gaps_are_recommended() {
        let forecasts = vec![
            forecast("1", "WDG-001", 100, 150),
            forecast("2", "BRG-102", 80, 80),
            forecast("3", "GSK-203", 90, 60),
            forecast("4", "MTR-304", 10, 12),
        ];

        let recs = engine().recommend(&forecasts);

        assert_eq!(recs.len(), 2);
        for rec in &recs {
            let source = forecasts.iter().find(|f| f.id == rec.id).unwrap();
            assert_eq!(i64::from(rec.demand_gap), source.demand_gap());
            assert!(rec.demand_gap > 0);
            assert_eq!(rec.recommended_quantity, rec.demand_gap);
        }
    }

    #[test]
    fn test_sorted_by_gap_descending_and_stable() {
        let forecasts = vec![
            forecast("1", "FLT-405", 10, 15),
            forecast("2", "CTL-330", 10, 40),
            forecast("3", "PSU-501", 0, 5),
            forecast("4", "VLV-506", 0, 30),
        ];

        let recs = engine().recommend(&forecasts);
        let order: Vec<_> = recs.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(order, vec!["2", "4", "1", "3"]);
        assert!(recs.windows(2).all(|w| w[0].demand_gap >= w[1].demand_gap));
    }

    #[test]
    fn test_metadata_enrichment() {
        let recs = engine().recommend(&[forecast("1", "MTR-304", 20, 25)]);

        assert_eq!(recs[0].category, "Motors & Drives");
        assert_eq!(recs[0].unit_cost, Decimal::from(380));
        assert_eq!(recs[0].lead_time_days, 21);
        assert_eq!(recs[0].estimated_cost, Decimal::from(1900));
    }

    #[test]
    fn test_unknown_sku_uses_default_metadata() {
        let recs = engine().recommend(&[forecast("9", "ZZZ-000", 1, 4)]);

        assert_eq!(recs[0].category, "General");
        assert_eq!(recs[0].unit_cost, Decimal::new(5000, 2));
        assert_eq!(recs[0].lead_time_days, 14);
        assert_eq!(recs[0].estimated_cost, Decimal::from(150));
    }

    #[test]
    fn test_injected_catalog() {
        let catalog = SkuCatalog::new().with_sku(
            "WDG-001".to_string(),
            SkuMeta::new(Decimal::new(125, 2), "Test Parts".to_string(), 2),
        );
        let engine = RecommendationEngine::new(Arc::new(catalog));

        let recs = engine.recommend(&[forecast("1", "WDG-001", 0, 3)]);

        assert_eq!(recs[0].category, "Test Parts");
        assert_eq!(recs[0].estimated_cost, Decimal::new(375, 2));
        assert_eq!(total_estimated_cost(&recs), Decimal::new(375, 2));
    }

    #[test]
    fn test_no_forecasts() {
        assert!(engine().recommend(&[]).is_empty());
        assert_eq!(total_estimated_cost(&[]), Decimal::ZERO);
    }
}
