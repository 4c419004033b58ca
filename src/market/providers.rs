/// 도시별 비즈니스 통신 사업자. 요금은 1G 전용선 기준 [USD/월].
#[derive(Debug)]
pub struct FibreProvider {
    pub name: &'static str,
    pub monthly_rate_usd: f64,
}

/// 도시별 전력 사업자. green 플래그는 재생에너지/REC 상품 여부다.
#[derive(Debug)]
pub struct EnergyProvider {
    pub name: &'static str,
    pub green: bool,
}

/// 해당 도시의 통신 사업자 목록. 모르는 도시는 빈 목록이다.
pub fn fibre_providers(city: &str) -> &'static [FibreProvider] {
    FIBRE_PROVIDERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city.trim()))
        .map(|(_, providers)| *providers)
        .unwrap_or(&[])
}

/// 해당 도시의 전력 사업자 목록. 모르는 도시는 빈 목록이다.
pub fn energy_providers(city: &str) -> &'static [EnergyProvider] {
    ENERGY_PROVIDERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city.trim()))
        .map(|(_, providers)| *providers)
        .unwrap_or(&[])
}

/// 선택한 통신 사업자의 월 요금.
/// 이름이 목록에 없으면 도시의 첫 사업자, 도시 자체가 없으면 0을 돌려준다.
pub fn selected_fibre_rate(city: &str, provider: &str) -> f64 {
    let providers = fibre_providers(city);
    providers
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(provider.trim()))
        .or_else(|| providers.first())
        .map(|p| p.monthly_rate_usd)
        .unwrap_or(0.0)
}

const FIBRE_PROVIDERS: &[(&str, &[FibreProvider])] = &[
    (
        "Toronto",
        &[
            FibreProvider { name: "Bell Business Fibre 1G", monthly_rate_usd: 180.0 },
            FibreProvider { name: "Rogers Business Fibre 1G", monthly_rate_usd: 200.0 },
            FibreProvider { name: "Beanfield 1G", monthly_rate_usd: 150.0 },
        ],
    ),
    (
        "New York",
        &[
            FibreProvider { name: "Verizon Fios Biz 1G", monthly_rate_usd: 190.0 },
            FibreProvider { name: "Spectrum Biz 1G", monthly_rate_usd: 175.0 },
            FibreProvider { name: "Crown Castle 1G", monthly_rate_usd: 220.0 },
        ],
    ),
    (
        "London",
        &[
            FibreProvider { name: "BT Business 1G", monthly_rate_usd: 165.0 },
            FibreProvider { name: "Virgin Media O2 1G", monthly_rate_usd: 160.0 },
            FibreProvider { name: "CityFibre 1G", monthly_rate_usd: 155.0 },
        ],
    ),
    (
        "Sydney",
        &[
            FibreProvider { name: "Telstra Biz Fibre 1G", monthly_rate_usd: 210.0 },
            FibreProvider { name: "Aussie Broadband Biz 1G", monthly_rate_usd: 190.0 },
            FibreProvider { name: "TPG Biz Fibre 1G", monthly_rate_usd: 185.0 },
        ],
    ),
    (
        "Singapore",
        &[
            FibreProvider { name: "Singtel Biz 1G", monthly_rate_usd: 200.0 },
            FibreProvider { name: "M1 Biz 1G", monthly_rate_usd: 180.0 },
            FibreProvider { name: "StarHub Biz 1G", monthly_rate_usd: 185.0 },
        ],
    ),
    (
        "Portland",
        &[
            FibreProvider { name: "Comcast Biz 1G", monthly_rate_usd: 165.0 },
            FibreProvider { name: "Ziply Fiber Biz 1G", monthly_rate_usd: 150.0 },
            FibreProvider { name: "Lumen/Quantum 1G", monthly_rate_usd: 185.0 },
        ],
    ),
    (
        "Atlanta",
        &[
            FibreProvider { name: "AT&T Biz Fiber 1G", monthly_rate_usd: 170.0 },
            FibreProvider { name: "Comcast Biz 1G", monthly_rate_usd: 165.0 },
            FibreProvider { name: "Google Fiber Biz 1G", monthly_rate_usd: 160.0 },
        ],
    ),
];

const ENERGY_PROVIDERS: &[(&str, &[EnergyProvider])] = &[
    (
        "Toronto",
        &[
            EnergyProvider { name: "Toronto Hydro (regulated)", green: false },
            EnergyProvider { name: "Bullfrog Power (RECs)", green: true },
            EnergyProvider { name: "Hydro One Biz", green: false },
        ],
    ),
    (
        "New York",
        &[
            EnergyProvider { name: "Con Edison Biz", green: false },
            EnergyProvider { name: "Green Mountain Energy", green: true },
        ],
    ),
    (
        "London",
        &[
            EnergyProvider { name: "Octopus Energy Biz", green: true },
            EnergyProvider { name: "British Gas Biz", green: false },
        ],
    ),
    (
        "Sydney",
        &[
            EnergyProvider { name: "AGL Biz", green: false },
            EnergyProvider { name: "Origin Energy Green", green: true },
            EnergyProvider { name: "Simply Energy", green: false },
        ],
    ),
    (
        "Singapore",
        &[
            EnergyProvider { name: "SP Group (regulated)", green: false },
            EnergyProvider { name: "Sembcorp Green", green: true },
        ],
    ),
    (
        "Portland",
        &[
            EnergyProvider { name: "PGE", green: false },
            EnergyProvider { name: "Pacific Power Blue Sky", green: true },
        ],
    ),
    (
        "Atlanta",
        &[
            EnergyProvider { name: "Georgia Power", green: false },
            EnergyProvider { name: "Green-e RECs", green: true },
        ],
    ),
];
