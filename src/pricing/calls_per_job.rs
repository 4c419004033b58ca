/// 잡당 콜 수 상한. 동적 모델이 어떤 입력에서도 넘지 못하는 보수적 한계다.
pub const MAX_CALLS_PER_JOB: f64 = 20.0;

/// 성장 계산의 기준 연도. 이 이전 연도는 성장 계수 0으로 취급한다.
pub const BASE_YEAR: i32 = 2025;

/// 동적 콜/잡 모델 입력.
#[derive(Debug, Clone)]
pub struct DynamicCallsInput {
    /// 시뮬레이션 연도
    pub year: i32,
    /// 기본 잡당 콜 수
    pub base_calls: f64,
    /// 에이전틱 워크로드 도입률 (0~1)
    pub agentic_rate: f64,
    /// 연간 성장 계수
    pub growth_rate: f64,
    /// 작업 복잡도 배수
    pub complexity_multiplier: f64,
    /// 하이브리드 처리 오버헤드 [콜]
    pub hybrid_overhead: f64,
}

/// 연도와 에이전틱 도입률에 따라 커지는 잡당 콜 수를 계산한다.
/// 클램프 순서가 규약이다: 도입률은 사용 전에 1.0으로,
/// 합산 결과는 마지막에 상한 20으로 자른다.
pub fn dynamic_calls_per_job(input: &DynamicCallsInput) -> f64 {
    let year_factor = ((input.year - BASE_YEAR) as f64 * input.growth_rate).max(0.0);
    let adjusted_agentic = (input.agentic_rate + year_factor * 0.05).min(1.0);
    let calls = input.base_calls
        + adjusted_agentic * year_factor * input.complexity_multiplier
        + input.hybrid_overhead;
    calls.min(MAX_CALLS_PER_JOB)
}
