/// 도심에서의 거리 프리셋 [km]. 임의의 음이 아닌 거리도 허용된다.
pub const DISTANCE_PRESETS_KM: [f64; 6] = [0.0, 50.0, 100.0, 200.0, 300.0, 500.0];

/// 거리[km]에 따른 단가 배수 계단 함수.
/// 0=도심, 50km 이내=근교, 이후 구간별로 2.0~4.0배까지 올라간다.
pub fn rural_factor_from_km(km: f64) -> f64 {
    if km <= 0.0 {
        1.0
    } else if km <= 50.0 {
        1.5
    } else if km <= 100.0 {
        2.0
    } else if km <= 200.0 {
        2.5
    } else if km <= 300.0 {
        3.0
    } else {
        4.0
    }
}

/// 설정에는 배수-1 형태의 오프셋으로 저장한다.
/// 가격식에서 (1 + offset)로 일괄 적용하기 위한 표현이다.
pub fn rural_offset_from_km(km: f64) -> f64 {
    rural_factor_from_km(km) - 1.0
}
