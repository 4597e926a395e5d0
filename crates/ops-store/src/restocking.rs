//! 補貨單儲存

use chrono::{Local, NaiveDateTime};
use ops_core::{CreateRestockingOrder, RestockingOrder, SkuCatalog};
use parking_lot::Mutex;
use std::sync::Arc;

use crate::numbering;

/// 記憶體內的補貨單儲存（只允許附加）
///
/// 「讀取長度、計算流水號、附加」在同一把鎖內完成，並行提交時流水號
/// 仍唯一且連續。已提交的補貨單不會被修改或刪除。
pub struct RestockingOrderStore {
    /// 料號參數表（計算提前期）
    catalog: Arc<SkuCatalog>,

    /// 依提交順序排列的補貨單
    orders: Mutex<Vec<RestockingOrder>>,
}

impl RestockingOrderStore {
    /// 創建空的儲存
    pub fn new(catalog: Arc<SkuCatalog>) -> Self {
        Self {
            catalog,
            orders: Mutex::new(Vec::new()),
        }
    }

    /// 以目前本地時間提交補貨單
    ///
    /// 時間在鎖內讀取，流水號越大的補貨單提交時間與單號日期不會更早。
    pub fn submit(&self, request: CreateRestockingOrder) -> RestockingOrder {
        let lead_time_days = numbering::lead_time_days(&request.items, &self.catalog);

        let mut orders = self.orders.lock();
        let submitted_at = Local::now().naive_local();
        let order = append(&mut orders, request, submitted_at, lead_time_days);
        drop(orders);

        log_submitted(&order);
        order
    }

    /// 以指定時間提交補貨單
    pub fn submit_at(
        &self,
        request: CreateRestockingOrder,
        submitted_at: NaiveDateTime,
    ) -> RestockingOrder {
        let lead_time_days = numbering::lead_time_days(&request.items, &self.catalog);

        let order = append(&mut self.orders.lock(), request, submitted_at, lead_time_days);

        log_submitted(&order);
        order
    }

    /// 依提交順序列出所有補貨單
    pub fn list(&self) -> Vec<RestockingOrder> {
        self.orders.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

/// 在持有鎖的情況下配號並附加
fn append(
    orders: &mut Vec<RestockingOrder>,
    request: CreateRestockingOrder,
    submitted_at: NaiveDateTime,
    lead_time_days: u32,
) -> RestockingOrder {
    let sequence = orders.len() + 1;

    let order = RestockingOrder {
        id: sequence.to_string(),
        order_number: numbering::order_number(submitted_at, sequence),
        items: request.items,
        status: RestockingOrder::SUBMITTED.to_string(),
        submitted_at,
        estimated_delivery: numbering::estimated_delivery(submitted_at, lead_time_days),
        total_cost: request.total_cost,
        lead_time_days,
        notes: request.notes,
    };
    orders.push(order.clone());
    order
}

fn log_submitted(order: &RestockingOrder) {
    tracing::info!(
        "補貨單已提交: {} (明細 {} 筆，提前期 {} 天)",
        order.order_number,
        order.items.len(),
        order.lead_time_days
    );
}
