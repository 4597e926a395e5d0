//! # Factory Ops Store
//!
//! 補貨單儲存與編號

pub mod numbering;
pub mod restocking;

// Re-export 主要類型
pub use restocking::RestockingOrderStore;
