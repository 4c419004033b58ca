use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::hardware::DeviceRow;
use crate::pricing::Scenario;

/// 한 달 길이 [초]. 30일 × 86,400초.
pub const SECONDS_IN_MONTH: f64 = 2_592_000.0;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "simulator.toml";

/// 월 고정 비용 항목 [USD/월].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLineItems {
    pub energy: f64,
    pub rent: f64,
    pub staff: f64,
    pub misc: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub licenses: f64,
    pub legal: f64,
    /// 통신 요금. link_rate가 켜져 있으면 선택한 사업자 요금으로 대체된다.
    pub fibre: f64,
}

impl Default for CostLineItems {
    fn default() -> Self {
        Self {
            energy: 1600.0,
            rent: 900.0,
            staff: 700.0,
            misc: 200.0,
            insurance: 150.0,
            maintenance: 120.0,
            licenses: 250.0,
            legal: 300.0,
            fibre: 180.0,
        }
    }
}

/// 동적 콜/잡 모델 파라미터.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicCallsConfig {
    /// 켜면 수동 calls_per_job 대신 동적 모델을 쓴다.
    pub enabled: bool,
    /// 시뮬레이션 연도
    pub year: i32,
    pub base_calls: f64,
    /// 에이전틱 워크로드 도입률 (0~1)
    pub agentic_rate: f64,
    pub growth_rate: f64,
    pub complexity_multiplier: f64,
    pub hybrid_overhead: f64,
}

impl Default for DynamicCallsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            year: 2025,
            base_calls: 1.5,
            agentic_rate: 0.8,
            growth_rate: 2.0,
            complexity_multiplier: 5.0,
            hybrid_overhead: 1.5,
        }
    }
}

/// 시뮬레이션 설정 스냅샷. 시뮬레이션의 유일한 진실 공급원이며
/// 모든 파생 결과는 이 구조체에서만 계산한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub city: String,
    pub scenario: Scenario,
    /// 지방 프리미엄 오프셋. 배수-1 형태로 저장하며 가격식에서 (1+offset)로 적용한다.
    pub rural_offset: f64,
    /// 사용자 가동률 (0.10~1.00)
    pub utilization_base: f64,
    /// 수동 잡당 콜 수. dynamic_calls가 꺼져 있을 때 쓴다.
    pub calls_per_job: f64,
    /// 기준 콜 단가 [USD/call]
    pub base_price_per_call: f64,
    pub devices: Vec<DeviceRow>,
    pub costs: CostLineItems,
    pub connectivity_provider: String,
    /// 켜면 fibre 비용을 선택한 사업자 요금과 연동한다.
    pub link_rate: bool,
    pub energy_provider: String,
    /// 친환경 전력에 따른 단가 인상률(%)
    pub green_uplift_percent: f64,
    /// 친환경 전력의 에너지 비용 할증률(%)
    pub green_premium_percent: f64,
    pub esg_enabled: bool,
    pub dynamic_calls: DynamicCallsConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            city: "Toronto".to_string(),
            scenario: Scenario::Median,
            rural_offset: 0.0,
            utilization_base: 0.20,
            calls_per_job: 2.0,
            base_price_per_call: 0.008,
            devices: vec![DeviceRow {
                id: "dell-precision-7920".to_string(),
                vendor: "Dell".to_string(),
                label: "Precision 7920 Rack".to_string(),
                ips: 60.0,
                latency_tier: "50–100ms".to_string(),
                quantity: 3,
            }],
            costs: CostLineItems::default(),
            connectivity_provider: "Bell Business Fibre 1G".to_string(),
            link_rate: true,
            energy_provider: "Toronto Hydro (regulated)".to_string(),
            green_uplift_percent: 0.0,
            green_premium_percent: 2.0,
            esg_enabled: false,
            dynamic_calls: DynamicCallsConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 저장한 뒤 돌려준다.
pub fn load_or_default(path: &Path) -> Result<SimulationConfig, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: SimulationConfig = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = SimulationConfig::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &SimulationConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl SimulationConfig {
    /// 설정을 주어진 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
