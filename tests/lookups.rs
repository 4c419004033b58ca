//! 정적 룩업 테이블(지방 구간, 엣지 티어, 도시, 사업자, 클라우드 기준가) 회귀 테스트.
use host_revenue_simulator::hardware::{catalog, edge_tier_multiplier, find_entry, DeviceRow};
use host_revenue_simulator::market::{cities, city_price_factor, cloud, providers};
use host_revenue_simulator::pricing::esg;
use host_revenue_simulator::pricing::rural::{
    rural_factor_from_km, rural_offset_from_km, DISTANCE_PRESETS_KM,
};
use host_revenue_simulator::pricing::Scenario;

fn row(tier: &str, quantity: u32) -> DeviceRow {
    DeviceRow {
        id: "r".to_string(),
        vendor: "v".to_string(),
        label: "l".to_string(),
        ips: 10.0,
        latency_tier: tier.to_string(),
        quantity,
    }
}

#[test]
fn rural_step_function_bands() {
    assert_eq!(rural_factor_from_km(0.0), 1.0);
    assert_eq!(rural_factor_from_km(50.0), 1.5);
    assert_eq!(rural_factor_from_km(100.0), 2.0);
    assert_eq!(rural_factor_from_km(120.0), 2.5);
    assert_eq!(rural_factor_from_km(200.0), 2.5);
    assert_eq!(rural_factor_from_km(300.0), 3.0);
    assert_eq!(rural_factor_from_km(500.0), 4.0);
    assert_eq!(rural_factor_from_km(10_000.0), 4.0);
}

#[test]
fn rural_offset_is_factor_minus_one() {
    for km in DISTANCE_PRESETS_KM {
        assert_eq!(rural_offset_from_km(km), rural_factor_from_km(km) - 1.0);
    }
}

#[test]
fn edge_tier_scores_by_label_substring() {
    // "<25ms"와 "25–50ms"는 모두 "25"를 포함하므로 1.15 점이다.
    assert_eq!(edge_tier_multiplier(&[row("<25ms", 1)]), 1.15);
    assert_eq!(edge_tier_multiplier(&[row("25–50ms", 1)]), 1.15);
    assert_eq!(edge_tier_multiplier(&[row("50–100ms", 1)]), 1.05);
    assert_eq!(edge_tier_multiplier(&[row("unknown tier", 1)]), 1.00);
}

#[test]
fn edge_tier_averages_rows_not_quantities() {
    let mixed = [row("<25ms", 1), row("unknown", 99)];
    assert!((edge_tier_multiplier(&mixed) - (1.15 + 1.00) / 2.0).abs() < 1e-12);
    // 수량을 늘려도 행 수가 같으면 배수는 변하지 않는다.
    let heavy = [row("<25ms", 500), row("unknown", 1)];
    assert_eq!(edge_tier_multiplier(&mixed), edge_tier_multiplier(&heavy));
}

#[test]
fn edge_tier_empty_inventory_is_zero() {
    assert_eq!(edge_tier_multiplier(&[]), 0.0);
}

#[test]
fn city_factor_neutral_with_fallback() {
    for city in cities() {
        assert_eq!(city_price_factor(city.name), 1.00);
    }
    assert_eq!(city_price_factor("Gotham"), 1.00);
}

#[test]
fn fibre_rate_find_or_first_or_zero() {
    assert_eq!(providers::selected_fibre_rate("Toronto", "Beanfield 1G"), 150.0);
    // 모르는 사업자 이름은 도시의 첫 사업자로 폴백한다.
    assert_eq!(providers::selected_fibre_rate("Toronto", "no-such"), 180.0);
    assert_eq!(providers::selected_fibre_rate("Gotham", "any"), 0.0);
}

#[test]
fn every_city_has_both_provider_lists() {
    for city in cities() {
        assert!(!providers::fibre_providers(city.name).is_empty(), "{}", city.name);
        assert!(!providers::energy_providers(city.name).is_empty(), "{}", city.name);
    }
}

#[test]
fn cloud_market_average_excludes_average_row() {
    // (0.0006 + 0.0001 + 0.001 + 0.0016 + 0.0006) / 5
    assert!((cloud::market_average_price() - 0.00078).abs() < 1e-12);
    assert!(cloud::find_baseline("aws-bedrock").is_some());
    assert!(cloud::find_baseline("no-such").is_none());
}

#[test]
fn scenario_params_table() {
    let c = Scenario::Conservative.params();
    assert_eq!((c.utilization_multiplier, c.price_multiplier, c.default_calls_per_job), (0.9, 0.95, 2.0));
    let m = Scenario::Median.params();
    assert_eq!((m.utilization_multiplier, m.price_multiplier, m.default_calls_per_job), (1.0, 1.00, 5.0));
    let o = Scenario::Optimistic.params();
    assert_eq!((o.utilization_multiplier, o.price_multiplier, o.default_calls_per_job), (1.1, 1.08, 12.0));
}

#[test]
fn scenario_parse_is_case_insensitive_with_fallback() {
    assert_eq!(Scenario::parse_or_median("optimistic"), Scenario::Optimistic);
    assert_eq!(Scenario::parse_or_median(" Conservative "), Scenario::Conservative);
    assert_eq!(Scenario::parse_or_median("whatever"), Scenario::Median);
}

#[test]
fn catalog_lookup_by_id_or_label() {
    let by_id = find_entry("vz-studio").expect("catalog entry");
    assert_eq!(by_id.ips, 85.0);
    let by_label = find_entry("Vizrt Node – Studio").expect("catalog entry");
    assert_eq!(by_label.id, by_id.id);
    assert!(find_entry("no-such").is_none());
    assert!(!catalog().is_empty());
}

#[test]
fn esg_tier_table_lookup() {
    assert_eq!(esg::find_tier("Gold").map(|t| t.uplift_percent), Some(20.0));
    assert!(esg::find_tier("Platinum").is_none());
    assert_eq!(esg::esg_multiplier(true), 1.10);
    assert_eq!(esg::esg_multiplier(false), 1.0);
}
