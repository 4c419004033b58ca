//! 하드웨어 카탈로그와 보유 장비 인벤토리 모듈 모음.

pub mod catalog;
pub mod inventory;

pub use catalog::{catalog, find_entry, CatalogEntry};
pub use inventory::{aggregate_ips, edge_tier_multiplier, DeviceRow};
