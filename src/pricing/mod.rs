//! 단가·수익 관련 계산 모듈 모음.
//! 시나리오 테이블, 지방 프리미엄, ESG 프리미엄, 동적 콜/잡 모델, 수익 계산기로 구성한다.

pub mod calls_per_job;
pub mod esg;
pub mod revenue;
pub mod rural;
pub mod scenario;

pub use revenue::{calculate, validate, RevenueResult, ValidationReport, PLATFORM_FEE_RATE};
pub use scenario::{Scenario, ScenarioParams};
