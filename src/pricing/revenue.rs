use crate::config::{SimulationConfig, SECONDS_IN_MONTH};
use crate::hardware::inventory;
use crate::market::{cities, providers};

use super::calls_per_job::{self, DynamicCallsInput};
use super::esg;

/// 총매출 대비 플랫폼 수수료율. 설정으로 바꿀 수 없는 고정값이다.
pub const PLATFORM_FEE_RATE: f64 = 0.25;

/// 수수료율 불변식 점검에 쓰는 허용 오차.
const FEE_RATIO_EPSILON: f64 = 1e-6;

/// 계산 결과 레코드. 설정이 바뀔 때마다 전량 재계산되는 파생값이며
/// 어떤 필드도 독립적으로 수정하지 않는다.
#[derive(Debug, Clone)]
pub struct RevenueResult {
    /// 시나리오 배수 적용 후 0~1로 클램프한 실효 가동률
    pub effective_utilization: f64,
    /// 인벤토리 합산 추론 처리량 [IPS]
    pub aggregate_ips: f64,
    /// 이번 계산에 실제 적용된 잡당 콜 수
    pub calls_per_job: f64,
    /// 모든 배수가 반영된 콜 단가 [USD/call]
    pub price_per_call: f64,
    /// 월간 추론 콜 수 (반올림)
    pub monthly_calls: f64,
    /// 월 총매출 [USD]
    pub gross_revenue: f64,
    /// 플랫폼 수수료 [USD]
    pub platform_fee: f64,
    /// green_premium이 반영된 에너지 비용 [USD/월]
    pub energy_cost: f64,
    /// 실제 반영된 통신 비용 [USD/월]
    pub fibre_cost: f64,
    /// 월 운영비 합계 [USD]
    pub opex: f64,
    /// 순수익 (Cash Net) [USD/월]
    pub net_revenue: f64,
}

/// 설정 스냅샷에서 월 수익 레코드를 계산한다.
/// 입력을 변경하지 않고 전역 상태도 없는 순수 함수이며,
/// 유한한 입력에 대해 항상 유한한 결과를 돌려준다.
pub fn calculate(config: &SimulationConfig) -> RevenueResult {
    let scenario = config.scenario.params();
    let effective_utilization =
        (config.utilization_base * scenario.utilization_multiplier).clamp(0.0, 1.0);
    let aggregate_ips = inventory::aggregate_ips(&config.devices);

    let calls_per_job = if config.dynamic_calls.enabled {
        calls_per_job::dynamic_calls_per_job(&DynamicCallsInput {
            year: config.dynamic_calls.year,
            base_calls: config.dynamic_calls.base_calls,
            agentic_rate: config.dynamic_calls.agentic_rate,
            growth_rate: config.dynamic_calls.growth_rate,
            complexity_multiplier: config.dynamic_calls.complexity_multiplier,
            hybrid_overhead: config.dynamic_calls.hybrid_overhead,
        })
    } else {
        config.calls_per_job
    };

    let price_per_call = config.base_price_per_call
        * cities::city_price_factor(&config.city)
        * inventory::edge_tier_multiplier(&config.devices)
        * scenario.price_multiplier
        * (1.0 + config.rural_offset)
        * (1.0 + config.green_uplift_percent / 100.0)
        * esg::esg_multiplier(config.esg_enabled);

    let monthly_calls =
        (aggregate_ips * effective_utilization * SECONDS_IN_MONTH * calls_per_job).round();

    let gross_revenue = monthly_calls * price_per_call;
    let platform_fee = gross_revenue * PLATFORM_FEE_RATE;

    let fibre_cost = if config.link_rate {
        providers::selected_fibre_rate(&config.city, &config.connectivity_provider)
    } else {
        config.costs.fibre
    };
    let energy_cost = config.costs.energy * (1.0 + config.green_premium_percent / 100.0);
    let opex = energy_cost
        + config.costs.rent
        + config.costs.staff
        + config.costs.misc
        + config.costs.insurance
        + config.costs.maintenance
        + config.costs.licenses
        + config.costs.legal
        + fibre_cost;

    let net_revenue = gross_revenue - platform_fee - opex;

    RevenueResult {
        effective_utilization,
        aggregate_ips,
        calls_per_job,
        price_per_call,
        monthly_calls,
        gross_revenue,
        platform_fee,
        energy_cost,
        fibre_cost,
        opex,
        net_revenue,
    }
}

/// 결과 점검 보고. 초록/빨강 수준의 단순 신호만 담는다.
#[derive(Debug, Clone, Copy)]
pub struct ValidationReport {
    /// IPS와 잡당 콜 수가 모두 양수인지
    pub inputs_valid: bool,
    pub price_positive: bool,
    /// 수량이 1 이상인 장비가 하나라도 있는지
    pub has_nodes: bool,
    /// 수수료가 총매출의 25%인지
    pub fee_ratio_ok: bool,
}

/// 결과 레코드의 기본 불변식을 점검한다.
/// 총매출이 0이면 수수료율 검사는 0/0을 피하기 위해 수수료 0 여부로 대신한다.
pub fn validate(config: &SimulationConfig, result: &RevenueResult) -> ValidationReport {
    let fee_ratio_ok = if result.gross_revenue == 0.0 {
        result.platform_fee == 0.0
    } else {
        (result.platform_fee / result.gross_revenue - PLATFORM_FEE_RATE).abs() < FEE_RATIO_EPSILON
    };
    ValidationReport {
        inputs_valid: result.aggregate_ips > 0.0 && result.calls_per_job > 0.0,
        price_positive: result.price_per_call > 0.0,
        has_nodes: config.devices.iter().any(|d| d.quantity > 0),
        fee_ratio_ok,
    }
}
