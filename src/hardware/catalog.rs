/// 인증 하드웨어 카탈로그. IPS 등급은 공급사 공칭치 기반 참고용이며
/// 실제 장비 제어나 텔레메트리와는 무관한 정적 데이터다.

#[derive(Debug)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub vendor: &'static str,
    pub label: &'static str,
    /// 추론 처리량 등급 [inferences/s]
    pub ips: f64,
    /// 지연 티어 라벨 (예: "<25ms", "25–50ms", "50–100ms")
    pub latency_tier: &'static str,
}

pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// id 또는 표시 라벨로 카탈로그 항목을 찾는다.
pub fn find_entry(key: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|e| e.id.eq_ignore_ascii_case(key) || e.label.eq_ignore_ascii_case(key))
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "sm-h100x4",
        vendor: "SuperMicro",
        label: "H100 ×4",
        ips: 120.0,
        latency_tier: "<25ms",
    },
    CatalogEntry {
        id: "sm-h200x2",
        vendor: "SuperMicro",
        label: "H200 ×2",
        ips: 95.0,
        latency_tier: "<25ms",
    },
    CatalogEntry {
        id: "sm-l40sx4",
        vendor: "SuperMicro",
        label: "L40S ×4",
        ips: 70.0,
        latency_tier: "25–50ms",
    },
    CatalogEntry {
        id: "sm-adax2",
        vendor: "SuperMicro",
        label: "RTX 6000 Ada ×2",
        ips: 80.0,
        latency_tier: "50–100ms",
    },
    CatalogEntry {
        id: "sm-a10x4",
        vendor: "SuperMicro",
        label: "A10 ×4",
        ips: 45.0,
        latency_tier: "50–100ms",
    },
    CatalogEntry {
        id: "vz-edge1",
        vendor: "Vizrt",
        label: "Vizrt Node – Edge AI",
        ips: 60.0,
        latency_tier: "25–50ms",
    },
    CatalogEntry {
        id: "vz-studio",
        vendor: "Vizrt",
        label: "Vizrt Node – Studio",
        ips: 85.0,
        latency_tier: "50–100ms",
    },
    CatalogEntry {
        id: "dell-precision-7920",
        vendor: "Dell",
        label: "Precision 7920 Rack",
        ips: 60.0,
        latency_tier: "50–100ms",
    },
];
