use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;

/// 보유 장비 한 줄. 카탈로그에서 추가한 뒤 수량이나 스펙을 직접 고칠 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRow {
    pub id: String,
    pub vendor: String,
    pub label: String,
    /// 단위 장비당 추론 처리량 [inferences/s]
    pub ips: f64,
    /// 지연 티어 라벨
    pub latency_tier: String,
    pub quantity: u32,
}

impl DeviceRow {
    pub fn from_catalog(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            vendor: entry.vendor.to_string(),
            label: entry.label.to_string(),
            ips: entry.ips,
            latency_tier: entry.latency_tier.to_string(),
            quantity: 1,
        }
    }
}

/// 인벤토리 전체의 합산 추론 처리량 [IPS].
pub fn aggregate_ips(devices: &[DeviceRow]) -> f64 {
    devices.iter().map(|d| d.ips * d.quantity as f64).sum()
}

/// 지연 티어 라벨 한 줄의 단가 점수.
/// "25"를 포함하면 1.15, "50"을 포함하면 1.05, 그 외(모르는 라벨 포함)는 1.00이다.
fn tier_score(tier: &str) -> f64 {
    if tier.contains("25") {
        1.15
    } else if tier.contains("50") {
        1.05
    } else {
        1.00
    }
}

/// 엣지 티어 단가 배수. 행별 점수의 산술 평균이며 수량으로 가중하지 않는다.
/// 빈 인벤토리는 분모를 1로 고정하므로 배수가 0이 된다.
pub fn edge_tier_multiplier(devices: &[DeviceRow]) -> f64 {
    let score: f64 = devices.iter().map(|d| tier_score(&d.latency_tier)).sum();
    score / devices.len().max(1) as f64
}
