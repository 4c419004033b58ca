//! 시장 컨텍스트 모듈 모음.
//! 도시 테이블, 도시별 통신/전력 사업자, 클라우드 기준 단가로 구성한다.

pub mod cities;
pub mod cloud;
pub mod providers;

pub use cities::{cities, city_price_factor, find_city, CityData};
pub use cloud::{baselines, find_baseline, market_average_price, CloudBaseline};
pub use providers::{
    energy_providers, fibre_providers, selected_fibre_rate, EnergyProvider, FibreProvider,
};
