/// 지원 도시 테이블. 단가 계수와 기본 콜 단가 시드를 담는다.
#[derive(Debug)]
pub struct CityData {
    pub name: &'static str,
    /// 가격식에 곱하는 도시 계수. 현재 모든 도시가 중립값 1.00이다.
    pub price_factor: f64,
    /// 신규 설정 시드용 기준 콜 단가 [USD/call]
    pub baseline_price_per_call: f64,
}

pub fn cities() -> &'static [CityData] {
    CITIES
}

pub fn find_city(name: &str) -> Option<&'static CityData> {
    CITIES.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// 도시별 단가 계수. 모르는 도시 이름은 오류 대신 중립값 1.00으로 폴백한다.
pub fn city_price_factor(name: &str) -> f64 {
    find_city(name).map(|c| c.price_factor).unwrap_or(1.0)
}

const CITIES: &[CityData] = &[
    CityData { name: "Toronto", price_factor: 1.00, baseline_price_per_call: 0.011 },
    CityData { name: "New York", price_factor: 1.00, baseline_price_per_call: 0.012 },
    CityData { name: "London", price_factor: 1.00, baseline_price_per_call: 0.010 },
    CityData { name: "Sydney", price_factor: 1.00, baseline_price_per_call: 0.014 },
    CityData { name: "Singapore", price_factor: 1.00, baseline_price_per_call: 0.008 },
    CityData { name: "Portland", price_factor: 1.00, baseline_price_per_call: 0.008 },
    CityData { name: "Atlanta", price_factor: 1.00, baseline_price_per_call: 0.008 },
];
