//! 補貨流程示例：儀表板 → 補貨建議 → 提交補貨單

use factory_ops::{
    total_estimated_cost, CreateRestockingOrder, Dataset, DemandForecast, InventoryItem,
    InventoryService, Order, OrderQuery, RecordFilter, Settings,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(None)?;
    factory_ops::telemetry::init_tracing(&settings.logging);

    println!("=== 補貨流程示例 ===\n");

    // 庫存
    let inventory = vec![
        InventoryItem::new("1".to_string(), "WDG-001".to_string(), 120, 150, Decimal::new(250, 2))
            .with_name("Industrial Widget".to_string())
            .with_category("Components".to_string())
            .with_warehouse("San Francisco".to_string()),
        InventoryItem::new("2".to_string(), "MTR-304".to_string(), 40, 20, Decimal::from(380))
            .with_name("Servo Motor".to_string())
            .with_category("Motors & Drives".to_string())
            .with_warehouse("Tokyo".to_string()),
    ];

    // 訂單
    let orders = vec![
        Order::new(
            "1".to_string(),
            "ORD-2025-0001".to_string(),
            "Delivered".to_string(),
            "2025-01-15T10:00:00".to_string(),
            Decimal::from(1200),
        )
        .with_warehouse("San Francisco".to_string()),
        Order::new(
            "2".to_string(),
            "ORD-2025-0002".to_string(),
            "Processing".to_string(),
            "2025-04-03T09:30:00".to_string(),
            Decimal::from(800),
        )
        .with_warehouse("Tokyo".to_string()),
    ];

    // 需求預測
    let forecasts = vec![
        DemandForecast::new("1".to_string(), "WDG-001".to_string(), 300, 420)
            .with_item_name("Industrial Widget".to_string()),
        DemandForecast::new("2".to_string(), "MTR-304".to_string(), 50, 65)
            .with_item_name("Servo Motor".to_string()),
        DemandForecast::new("3".to_string(), "GSK-203".to_string(), 90, 70)
            .with_item_name("Gasket Set".to_string()),
    ];

    let dataset = Dataset::default()
        .with_inventory(inventory)
        .with_orders(orders)
        .with_demand_forecasts(forecasts);
    let service = InventoryService::from_settings(dataset, &settings);

    let summary = service.dashboard_summary(&OrderQuery::default());
    println!("儀表板:");
    println!("  - 庫存總值: {}", summary.total_inventory_value);
    println!("  - 低庫存品項: {}", summary.low_stock_items);
    println!("  - 待處理訂單: {}", summary.pending_orders);

    let tokyo = OrderQuery::new().with_filter(RecordFilter::new().with_warehouse("Tokyo"));
    for quarter in service.quarterly_report(&tokyo) {
        println!(
            "  - Tokyo {}: {} 筆，營收 {}",
            quarter.quarter, quarter.total_orders, quarter.total_revenue
        );
    }

    let recommendations = service.restocking_recommendations();
    println!("\n補貨建議:");
    for rec in &recommendations {
        println!(
            "  - {} 缺口 {}，預估成本 {}，提前期 {} 天",
            rec.item_sku, rec.demand_gap, rec.estimated_cost, rec.lead_time_days
        );
    }

    println!("  合計預估成本: {}", total_estimated_cost(&recommendations));

    let request = CreateRestockingOrder::from_recommendations(&recommendations)
        .with_notes("季度補貨".to_string());
    let order = service.submit_restocking_order(request);

    println!("\n已提交補貨單:");
    println!("  - 單號: {}", order.order_number);
    println!("  - 總成本: {}", order.total_cost);
    println!("  - 預計到貨: {}", order.estimated_delivery);

    Ok(())
}
