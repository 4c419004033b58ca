use std::path::PathBuf;

use clap::Parser;

use host_revenue_simulator::state::Simulator;
use host_revenue_simulator::{app, config, ui_cli};

/// 엣지 호스트 수익 시뮬레이터 CLI.
#[derive(Debug, Parser)]
#[command(name = "host_revenue_simulator", version, about = "엣지 호스트 수익 시뮬레이터")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// 시작 시 적용할 프리셋 id
    #[arg(long)]
    preset: Option<String>,
    /// 대화형 메뉴 없이 요약만 출력하고 종료
    #[arg(long)]
    once: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    let mut sim = Simulator::new(cfg);
    if let Some(preset) = &cli.preset {
        if !sim.apply_preset(preset) {
            eprintln!("모르는 프리셋 id: {preset}");
        }
    }
    if cli.once {
        ui_cli::print_summary(&sim);
        sim.config().save(&cli.config)?;
        return Ok(());
    }
    app::run(&mut sim, &cli.config)?;
    Ok(())
}
