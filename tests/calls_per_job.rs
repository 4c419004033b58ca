//! 동적 콜/잡 모델 회귀 테스트.
use host_revenue_simulator::config::{DynamicCallsConfig, SimulationConfig};
use host_revenue_simulator::pricing::calls_per_job::{
    dynamic_calls_per_job, DynamicCallsInput, MAX_CALLS_PER_JOB,
};
use host_revenue_simulator::pricing::calculate;

fn input() -> DynamicCallsInput {
    DynamicCallsInput {
        year: 2025,
        base_calls: 1.5,
        agentic_rate: 0.8,
        growth_rate: 2.0,
        complexity_multiplier: 5.0,
        hybrid_overhead: 1.5,
    }
}

#[test]
fn ceiling_holds_for_extreme_inputs() {
    let calls = dynamic_calls_per_job(&DynamicCallsInput {
        year: 2100,
        growth_rate: 50.0,
        complexity_multiplier: 1000.0,
        ..input()
    });
    assert_eq!(calls, MAX_CALLS_PER_JOB);
}

#[test]
fn base_year_yields_base_plus_overhead() {
    let calls = dynamic_calls_per_job(&input());
    assert!((calls - 3.0).abs() < 1e-12); // 1.5 + 0 + 1.5
}

#[test]
fn years_before_base_are_treated_as_zero_growth() {
    let past = dynamic_calls_per_job(&DynamicCallsInput { year: 2020, ..input() });
    let base = dynamic_calls_per_job(&input());
    assert_eq!(past, base);
}

#[test]
fn agentic_rate_clamped_before_use() {
    // 연도 계수 4, 도입률 0.9 + 4×0.05 = 1.1 → 1.0으로 클램프된 뒤 곱한다.
    let calls = dynamic_calls_per_job(&DynamicCallsInput {
        year: 2027,
        base_calls: 1.0,
        agentic_rate: 0.9,
        growth_rate: 2.0,
        complexity_multiplier: 2.0,
        hybrid_overhead: 0.5,
    });
    assert!((calls - 9.5).abs() < 1e-12); // 1.0 + 1.0×4×2.0 + 0.5
}

#[test]
fn calculator_uses_dynamic_model_when_enabled() {
    let manual = SimulationConfig {
        calls_per_job: 7.0,
        ..SimulationConfig::default()
    };
    let dynamic = SimulationConfig {
        dynamic_calls: DynamicCallsConfig {
            enabled: true,
            ..DynamicCallsConfig::default()
        },
        ..manual.clone()
    };
    let manual_res = calculate(&manual);
    let dynamic_res = calculate(&dynamic);
    assert_eq!(manual_res.calls_per_job, 7.0);
    // 기본 파라미터(2025년)에서는 1.5 + 1.5 = 3.0이다.
    assert!((dynamic_res.calls_per_job - 3.0).abs() < 1e-12);
}
