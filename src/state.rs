use crate::config::SimulationConfig;
use crate::hardware::{catalog, DeviceRow};
use crate::market::providers;
use crate::presets;
use crate::pricing::revenue::{self, RevenueResult};

/// 현재 설정 스냅샷과 거기서 파생된 최신 결과를 함께 보관하는 상태 컨테이너.
/// 모든 변경은 설정 교체 후 동기 재계산으로 이어지며, 결과는 스냅샷보다
/// 오래 살지 않는다. 파일 저장 시점은 호출 측(CLI 루프)의 책임이다.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    result: RevenueResult,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        let result = revenue::calculate(&config);
        Self { config, result }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn result(&self) -> &RevenueResult {
        &self.result
    }

    /// 설정을 클로저로 편집한 뒤 결과를 재계산한다.
    pub fn update(&mut self, edit: impl FnOnce(&mut SimulationConfig)) {
        edit(&mut self.config);
        self.recalculate();
    }

    /// 도시를 바꾼다. 사업자 선택을 새 도시의 첫 항목으로 재설정하고,
    /// 요금 연동이 켜져 있으면 fibre 비용도 새 사업자 요금으로 맞춘다.
    pub fn set_city(&mut self, city: &str) {
        self.config.city = city.trim().to_string();
        let fibre = providers::fibre_providers(&self.config.city);
        let energy = providers::energy_providers(&self.config.city);
        if let Some(first) = fibre.first() {
            self.config.connectivity_provider = first.name.to_string();
            if self.config.link_rate {
                self.config.costs.fibre = first.monthly_rate_usd;
            }
        }
        if let Some(first) = energy.first() {
            self.config.energy_provider = first.name.to_string();
        }
        self.recalculate();
    }

    /// 프리셋을 적용한다. 모르는 id면 false를 돌려주고 아무것도 바꾸지 않는다.
    pub fn apply_preset(&mut self, id: &str) -> bool {
        let Some(preset) = presets::find_preset(id) else {
            return false;
        };
        presets::apply(&mut self.config, preset);
        self.recalculate();
        true
    }

    /// 카탈로그 항목을 인벤토리에 추가한다. 이미 있으면 수량을 1 올린다.
    pub fn add_device(&mut self, catalog_id: &str) -> bool {
        let Some(entry) = catalog::find_entry(catalog_id) else {
            return false;
        };
        if let Some(row) = self.config.devices.iter_mut().find(|d| d.id == entry.id) {
            row.quantity += 1;
        } else {
            self.config.devices.push(DeviceRow::from_catalog(entry));
        }
        self.recalculate();
        true
    }

    /// 장비 수량을 바꾼다. 모르는 id면 false.
    pub fn set_device_quantity(&mut self, device_id: &str, quantity: u32) -> bool {
        let Some(row) = self.config.devices.iter_mut().find(|d| d.id == device_id) else {
            return false;
        };
        row.quantity = quantity;
        self.recalculate();
        true
    }

    /// 장비 행을 제거한다. 모르는 id면 false.
    pub fn remove_device(&mut self, device_id: &str) -> bool {
        let before = self.config.devices.len();
        self.config.devices.retain(|d| d.id != device_id);
        let removed = self.config.devices.len() != before;
        if removed {
            self.recalculate();
        }
        removed
    }

    fn recalculate(&mut self) {
        self.result = revenue::calculate(&self.config);
    }
}
