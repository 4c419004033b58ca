/// ESG 준수 플래그가 켜졌을 때 단가에 곱하는 고정 프리미엄 배수.
pub const ESG_PRICE_MULTIPLIER: f64 = 1.10;

/// ESG 인증 등급과 단가 인상률(%).
#[derive(Debug, Clone, Copy)]
pub struct EsgTier {
    pub name: &'static str,
    pub uplift_percent: f64,
}

/// 메뉴 표시용 인증 등급 테이블. 캐노니컬 가격식은 켬/끔 플래그만 사용하며
/// 켜진 경우 Bronze(+10%)에 해당하는 고정 배수를 적용한다.
pub const ESG_TIERS: &[EsgTier] = &[
    EsgTier { name: "None", uplift_percent: 0.0 },
    EsgTier { name: "Bronze", uplift_percent: 10.0 },
    EsgTier { name: "Silver", uplift_percent: 15.0 },
    EsgTier { name: "Gold", uplift_percent: 20.0 },
    EsgTier { name: "Certified", uplift_percent: 15.0 },
];

pub fn find_tier(name: &str) -> Option<&'static EsgTier> {
    ESG_TIERS.iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// 켬/끔 플래그에 해당하는 단가 배수를 돌려준다.
pub fn esg_multiplier(enabled: bool) -> f64 {
    if enabled {
        ESG_PRICE_MULTIPLIER
    } else {
        1.0
    }
}
