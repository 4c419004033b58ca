/// 클라우드 추론 기준 단가 테이블과 시장 평균 계산을 제공한다.
/// 값은 2025-01 공개 가격표 기준 참고치이며 엣지 단가와의 프리미엄 비교에 쓴다.

#[derive(Debug)]
pub struct CloudBaseline {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// 콜당 단가 [USD/call]
    pub price_per_call: f64,
}

pub const MARKET_AVERAGE_ID: &str = "market-average";

pub fn baselines() -> &'static [CloudBaseline] {
    BASELINES
}

pub fn find_baseline(id: &str) -> Option<&'static CloudBaseline> {
    BASELINES.iter().find(|b| b.id.eq_ignore_ascii_case(id.trim()))
}

/// market-average 항목을 제외한 단순 평균 단가.
pub fn market_average_price() -> f64 {
    let prices: Vec<f64> = BASELINES
        .iter()
        .filter(|b| b.id != MARKET_AVERAGE_ID)
        .map(|b| b.price_per_call)
        .collect();
    if prices.is_empty() {
        return 0.0;
    }
    prices.iter().sum::<f64>() / prices.len() as f64
}

const BASELINES: &[CloudBaseline] = &[
    CloudBaseline {
        id: "aws-bedrock",
        name: "AWS Bedrock",
        description: "Claude 3.5 Sonnet",
        price_per_call: 0.0006,
    },
    CloudBaseline {
        id: "gcp-vertex",
        name: "Google Cloud Vertex AI",
        description: "Gemini 1.5 Pro",
        price_per_call: 0.0001,
    },
    CloudBaseline {
        id: "azure-openai",
        name: "Azure OpenAI",
        description: "GPT-4o",
        price_per_call: 0.001,
    },
    CloudBaseline {
        id: "openai-direct",
        name: "OpenAI API",
        description: "GPT-5 2025",
        price_per_call: 0.0016,
    },
    CloudBaseline {
        id: "anthropic-direct",
        name: "Anthropic API",
        description: "Claude 4 Sonnet",
        price_per_call: 0.0006,
    },
    CloudBaseline {
        id: "market-average",
        name: "Market Average",
        description: "Weighted average across providers",
        price_per_call: 0.00076,
    },
];
