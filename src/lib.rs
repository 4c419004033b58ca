//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 GUI 확장도 쉽게 한다.

pub mod app;
pub mod config;
pub mod hardware;
pub mod market;
pub mod presets;
pub mod pricing;
pub mod state;
pub mod ui_cli;
