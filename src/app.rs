use std::path::Path;

use crate::state::Simulator;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 설정을 바꾸는 메뉴에서 돌아올 때마다 스냅샷을 파일에 저장한다.
pub fn run(sim: &mut Simulator, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Summary => ui_cli::handle_summary(sim),
            MenuChoice::Deployment => {
                ui_cli::handle_deployment(sim)?;
                sim.config().save(config_path)?;
            }
            MenuChoice::Devices => {
                ui_cli::handle_devices(sim)?;
                sim.config().save(config_path)?;
            }
            MenuChoice::CostsProviders => {
                ui_cli::handle_costs_providers(sim)?;
                sim.config().save(config_path)?;
            }
            MenuChoice::Presets => {
                ui_cli::handle_presets(sim)?;
                sim.config().save(config_path)?;
            }
            MenuChoice::CloudCompare => ui_cli::handle_cloud_compare(sim),
            MenuChoice::Exit => {
                sim.config().save(config_path)?;
                println!("저장 후 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
