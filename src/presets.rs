use crate::config::{CostLineItems, SimulationConfig};
use crate::hardware::DeviceRow;

/// 프리셋에 담긴 장비 한 줄. 적용 시 DeviceRow로 변환한다.
#[derive(Debug, Clone, Copy)]
pub struct PresetDevice {
    pub id: &'static str,
    pub vendor: &'static str,
    pub label: &'static str,
    pub ips: f64,
    pub latency_tier: &'static str,
    pub quantity: u32,
}

/// 배치 프리셋. 장비/가동률/콜 수/지방 오프셋/비용만 덮어쓴다.
#[derive(Debug)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub devices: &'static [PresetDevice],
    pub utilization_base: f64,
    pub calls_per_job: f64,
    pub rural_offset: f64,
    pub costs: CostLineItems,
}

pub fn presets() -> &'static [Preset] {
    PRESETS
}

pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id.eq_ignore_ascii_case(id.trim()))
}

/// 프리셋을 설정에 덮어쓴다. 도시·사업자·ESG 등 나머지 필드는 유지한다.
pub fn apply(config: &mut SimulationConfig, preset: &Preset) {
    config.devices = preset
        .devices
        .iter()
        .map(|d| DeviceRow {
            id: d.id.to_string(),
            vendor: d.vendor.to_string(),
            label: d.label.to_string(),
            ips: d.ips,
            latency_tier: d.latency_tier.to_string(),
            quantity: d.quantity,
        })
        .collect();
    config.utilization_base = preset.utilization_base;
    config.calls_per_job = preset.calls_per_job;
    config.rural_offset = preset.rural_offset;
    config.costs = preset.costs.clone();
}

const PRESETS: &[Preset] = &[
    Preset {
        id: "mid_market_tv",
        name: "Mid Market TV — Broadcast",
        desc: "Studio MCR; deterministic 50–100ms; conservative util and pricing (≥3 Vizrt nodes).",
        devices: &[PresetDevice {
            id: "vz-studio",
            vendor: "Vizrt",
            label: "Vizrt Node — Studio",
            ips: 85.0,
            latency_tier: "50–100ms",
            quantity: 3,
        }],
        utilization_base: 0.45,
        calls_per_job: 2.0,
        rural_offset: 0.0,
        costs: CostLineItems {
            energy: 1600.0,
            rent: 900.0,
            staff: 700.0,
            misc: 200.0,
            insurance: 150.0,
            maintenance: 120.0,
            licenses: 250.0,
            legal: 300.0,
            fibre: 180.0,
        },
    },
    Preset {
        id: "sm_edge",
        name: "Supermicro — Edge",
        desc: "Single row, L40S mix; 25–50ms edge tier.",
        devices: &[PresetDevice {
            id: "sm-l40sx4",
            vendor: "SuperMicro",
            label: "L40S ×4",
            ips: 70.0,
            latency_tier: "25–50ms",
            quantity: 1,
        }],
        utilization_base: 0.50,
        calls_per_job: 2.0,
        rural_offset: 0.1,
        costs: CostLineItems {
            energy: 1800.0,
            rent: 1000.0,
            staff: 800.0,
            misc: 200.0,
            insurance: 150.0,
            maintenance: 120.0,
            licenses: 250.0,
            legal: 350.0,
            fibre: 200.0,
        },
    },
    Preset {
        id: "mixed",
        name: "Mixed — Balanced",
        desc: "One Vizrt + one SM row; blended traffic.",
        devices: &[
            PresetDevice {
                id: "vz-studio",
                vendor: "Vizrt",
                label: "Vizrt Node — Studio",
                ips: 85.0,
                latency_tier: "50–100ms",
                quantity: 1,
            },
            PresetDevice {
                id: "sm-a10x4",
                vendor: "SuperMicro",
                label: "A10 ×4",
                ips: 45.0,
                latency_tier: "50–100ms",
                quantity: 1,
            },
        ],
        utilization_base: 0.50,
        calls_per_job: 2.0,
        rural_offset: 0.05,
        costs: CostLineItems {
            energy: 1700.0,
            rent: 900.0,
            staff: 700.0,
            misc: 200.0,
            insurance: 150.0,
            maintenance: 120.0,
            licenses: 250.0,
            legal: 325.0,
            fibre: 190.0,
        },
    },
];
