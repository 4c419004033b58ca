use serde::{Deserialize, Serialize};

/// 수익 시나리오. 가동률 배수, 단가 배수, 기본 잡당 콜 수를 함께 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Conservative,
    Median,
    Optimistic,
}

/// 시나리오별 파라미터.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioParams {
    /// 사용자 가동률에 곱하는 배수
    pub utilization_multiplier: f64,
    /// 콜 단가에 곱하는 배수
    pub price_multiplier: f64,
    /// 수동 입력이 없을 때의 기본 잡당 콜 수
    pub default_calls_per_job: f64,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Median,
        Scenario::Optimistic,
    ];

    pub fn params(self) -> ScenarioParams {
        match self {
            Scenario::Conservative => ScenarioParams {
                utilization_multiplier: 0.9,
                price_multiplier: 0.95,
                default_calls_per_job: 2.0,
            },
            Scenario::Median => ScenarioParams {
                utilization_multiplier: 1.0,
                price_multiplier: 1.00,
                default_calls_per_job: 5.0,
            },
            Scenario::Optimistic => ScenarioParams {
                utilization_multiplier: 1.1,
                price_multiplier: 1.08,
                default_calls_per_job: 12.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Conservative => "Conservative",
            Scenario::Median => "Median",
            Scenario::Optimistic => "Optimistic",
        }
    }

    /// 이름 문자열로 시나리오를 찾는다. 모르는 이름은 오류 대신 Median으로 폴백한다.
    pub fn parse_or_median(name: &str) -> Scenario {
        Scenario::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Scenario::Median)
    }
}
