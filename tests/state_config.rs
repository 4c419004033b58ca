//! 상태 컨테이너와 설정 영속화 회귀 테스트.
use std::fs;
use std::path::PathBuf;

use host_revenue_simulator::config::{self, SimulationConfig};
use host_revenue_simulator::state::Simulator;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("hrs_{}_{}.toml", name, std::process::id()));
    path
}

#[test]
fn config_round_trips_through_toml() {
    let path = temp_path("roundtrip");
    let mut cfg = SimulationConfig::default();
    cfg.city = "London".to_string();
    cfg.esg_enabled = true;
    cfg.rural_offset = 1.5;
    cfg.save(&path).expect("save");

    let loaded = config::load_or_default(&path).expect("load");
    assert_eq!(loaded.city, "London");
    assert!(loaded.esg_enabled);
    assert_eq!(loaded.rural_offset, 1.5);
    assert_eq!(loaded.devices.len(), cfg.devices.len());
    fs::remove_file(&path).ok();
}

#[test]
fn load_or_default_creates_missing_file() {
    let path = temp_path("fresh");
    fs::remove_file(&path).ok();
    let cfg = config::load_or_default(&path).expect("load_or_default");
    assert!(path.exists(), "기본 설정 파일이 만들어져야 한다");
    assert_eq!(cfg.city, "Toronto");
    fs::remove_file(&path).ok();
}

#[test]
fn city_change_reseeds_providers_and_linked_rate() {
    let mut sim = Simulator::new(SimulationConfig::default());
    assert!(sim.config().link_rate);
    sim.set_city("London");
    assert_eq!(sim.config().connectivity_provider, "BT Business 1G");
    assert_eq!(sim.config().energy_provider, "Octopus Energy Biz");
    assert_eq!(sim.config().costs.fibre, 165.0);
    // 결과도 같은 스냅샷에서 바로 재계산되어 있어야 한다.
    assert_eq!(sim.result().fibre_cost, 165.0);
}

#[test]
fn preset_overlays_only_its_fields() {
    let mut sim = Simulator::new(SimulationConfig::default());
    let city_before = sim.config().city.clone();
    assert!(sim.apply_preset("mid_market_tv"));
    assert_eq!(sim.config().devices.len(), 1);
    assert_eq!(sim.config().devices[0].quantity, 3);
    assert_eq!(sim.config().utilization_base, 0.45);
    assert_eq!(sim.config().city, city_before, "프리셋은 도시를 건드리지 않는다");
    assert!(!sim.apply_preset("no-such-preset"));
}

#[test]
fn add_device_increments_existing_row() {
    let mut sim = Simulator::new(SimulationConfig {
        devices: vec![],
        ..SimulationConfig::default()
    });
    assert!(sim.add_device("vz-studio"));
    assert!(sim.add_device("vz-studio"));
    assert_eq!(sim.config().devices.len(), 1);
    assert_eq!(sim.config().devices[0].quantity, 2);
    assert_eq!(sim.result().aggregate_ips, 170.0);

    assert!(sim.remove_device("vz-studio"));
    assert!(sim.config().devices.is_empty());
    assert_eq!(sim.result().aggregate_ips, 0.0);
    assert!(!sim.remove_device("vz-studio"));
    assert!(!sim.add_device("no-such-id"));
}

#[test]
fn result_tracks_latest_snapshot() {
    let mut sim = Simulator::new(SimulationConfig::default());
    let before = sim.result().price_per_call;
    sim.update(|cfg| cfg.base_price_per_call *= 2.0);
    let after = sim.result().price_per_call;
    assert!((after - before * 2.0).abs() < 1e-12);
}

#[test]
fn set_device_quantity_updates_ips() {
    let mut sim = Simulator::new(SimulationConfig::default());
    assert!(sim.set_device_quantity("dell-precision-7920", 5));
    assert_eq!(sim.result().aggregate_ips, 300.0);
    assert!(!sim.set_device_quantity("no-such", 1));
}
