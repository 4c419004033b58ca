use std::io::{self, Write};

use crate::app::AppError;
use crate::hardware::catalog;
use crate::market::{cities, cloud, providers};
use crate::presets;
use crate::pricing::rural;
use crate::pricing::{validate, Scenario};
use crate::state::Simulator;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Summary,
    Deployment,
    Devices,
    CostsProviders,
    Presets,
    CloudCompare,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Host Revenue Simulator ===");
    println!("1) 결과 요약");
    println!("2) 배치 설정 (도시/시나리오/가동률/단가)");
    println!("3) 장비 인벤토리");
    println!("4) 비용 및 사업자");
    println!("5) 프리셋 적용");
    println!("6) 클라우드 단가 비교");
    println!("0) 저장 후 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Summary),
            "2" => return Ok(MenuChoice::Deployment),
            "3" => return Ok(MenuChoice::Devices),
            "4" => return Ok(MenuChoice::CostsProviders),
            "5" => return Ok(MenuChoice::Presets),
            "6" => return Ok(MenuChoice::CloudCompare),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 현재 설정에서 파생된 수익 요약을 출력한다.
pub fn handle_summary(sim: &Simulator) {
    print_summary(sim);
}

/// 요약 출력 본체. --once 모드에서도 그대로 쓴다.
pub fn print_summary(sim: &Simulator) {
    let cfg = sim.config();
    let res = sim.result();
    println!("\n-- 월간 수익 요약 --");
    println!(
        "도시: {}  시나리오: {}  ESG: {}",
        cfg.city,
        cfg.scenario.name(),
        if cfg.esg_enabled { "ON (+10%)" } else { "OFF" }
    );
    println!(
        "합산 IPS: {:.0}  실효 가동률: {:.1}%  잡당 콜 수: {:.2}",
        res.aggregate_ips,
        res.effective_utilization * 100.0,
        res.calls_per_job
    );
    println!("콜 단가: {:.6} USD", res.price_per_call);
    println!("월간 콜 수: {:.0}", res.monthly_calls);
    println!("총매출: {:.2} USD", res.gross_revenue);
    println!("플랫폼 수수료(25%): {:.2} USD", res.platform_fee);
    println!(
        "OPEX 합계: {:.2} USD (에너지 {:.2}, 통신 {:.2})",
        res.opex, res.energy_cost, res.fibre_cost
    );
    println!("순수익(Cash Net): {:.2} USD", res.net_revenue);

    let report = validate(cfg, res);
    println!(
        "점검: 입력 {}  단가 {}  장비 {}  수수료율 {}",
        check_mark(report.inputs_valid),
        check_mark(report.price_positive),
        check_mark(report.has_nodes),
        check_mark(report.fee_ratio_ok)
    );
}

fn check_mark(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "문제"
    }
}

/// 배치 설정(도시, 시나리오, 거리, 가동률, 단가, ESG, 동적 콜 모델)을 편집한다.
pub fn handle_deployment(sim: &mut Simulator) -> Result<(), AppError> {
    println!("\n-- 배치 설정 --");
    println!("1) 도시  2) 시나리오  3) 도심 거리  4) 가동률  5) 기준 단가");
    println!("6) ESG 토글  7) 그린 인상률/할증률  8) 동적 콜/잡 모델");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            println!("지원 도시:");
            for city in cities::cities() {
                println!("  - {} (기준 단가 {:.3} USD)", city.name, city.baseline_price_per_call);
            }
            let name = read_line("도시 이름: ")?;
            sim.set_city(name.trim());
            println!("도시가 {} 로 설정되었습니다.", sim.config().city);
        }
        "2" => {
            println!("시나리오: Conservative / Median / Optimistic");
            let name = read_line("시나리오 이름 (모르는 이름은 Median 처리): ")?;
            let scenario = Scenario::parse_or_median(&name);
            sim.update(|cfg| cfg.scenario = scenario);
            println!("시나리오: {}", scenario.name());
        }
        "3" => {
            println!("거리 프리셋 [km]: 0, 50, 100, 200, 300, 500 (임의 거리도 가능)");
            let km = read_f64_min("도심에서의 거리 [km]: ", 0.0)?;
            let offset = rural::rural_offset_from_km(km);
            sim.update(|cfg| cfg.rural_offset = offset);
            println!("지방 프리미엄 배수: {:.2}", 1.0 + offset);
        }
        "4" => {
            let util = read_f64_min("가동률 (0.10~1.00): ", 0.0)?;
            let util = util.clamp(0.10, 1.00);
            sim.update(|cfg| cfg.utilization_base = util);
        }
        "5" => {
            let price = read_f64_min("기준 콜 단가 [USD]: ", 0.0)?;
            sim.update(|cfg| cfg.base_price_per_call = price);
        }
        "6" => {
            let enabled = !sim.config().esg_enabled;
            sim.update(|cfg| cfg.esg_enabled = enabled);
            println!("ESG 프리미엄: {}", if enabled { "ON (+10%)" } else { "OFF" });
        }
        "7" => {
            let uplift = read_f64_min("그린 단가 인상률 [%]: ", 0.0)?;
            let premium = read_f64_min("그린 에너지 할증률 [%]: ", 0.0)?;
            sim.update(|cfg| {
                cfg.green_uplift_percent = uplift;
                cfg.green_premium_percent = premium;
            });
        }
        "8" => handle_dynamic_calls(sim)?,
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

fn handle_dynamic_calls(sim: &mut Simulator) -> Result<(), AppError> {
    let current = sim.config().dynamic_calls.clone();
    println!(
        "\n동적 콜/잡 모델: {} (연도 {}, 도입률 {:.2})",
        if current.enabled { "ON" } else { "OFF" },
        current.year,
        current.agentic_rate
    );
    println!("1) 켜기/끄기  2) 파라미터 편집  3) 수동 잡당 콜 수");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let enabled = !current.enabled;
            sim.update(|cfg| cfg.dynamic_calls.enabled = enabled);
            println!("동적 모델: {}", if enabled { "ON" } else { "OFF" });
        }
        "2" => {
            let year = read_f64_min("시뮬레이션 연도: ", 0.0)? as i32;
            let base = read_f64_min("기본 콜 수: ", 0.0)?;
            let agentic = read_f64_min("에이전틱 도입률 (0~1): ", 0.0)?;
            let growth = read_f64_min("연간 성장 계수: ", 0.0)?;
            let complexity = read_f64_min("복잡도 배수: ", 0.0)?;
            let hybrid = read_f64_min("하이브리드 오버헤드: ", 0.0)?;
            sim.update(|cfg| {
                cfg.dynamic_calls.year = year;
                cfg.dynamic_calls.base_calls = base;
                cfg.dynamic_calls.agentic_rate = agentic;
                cfg.dynamic_calls.growth_rate = growth;
                cfg.dynamic_calls.complexity_multiplier = complexity;
                cfg.dynamic_calls.hybrid_overhead = hybrid;
            });
        }
        "3" => {
            let calls = read_f64_min("수동 잡당 콜 수: ", 0.0)?;
            sim.update(|cfg| cfg.calls_per_job = calls);
        }
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 장비 인벤토리 메뉴를 처리한다.
pub fn handle_devices(sim: &mut Simulator) -> Result<(), AppError> {
    println!("\n-- 장비 인벤토리 --");
    if sim.config().devices.is_empty() {
        println!("(비어 있음)");
    }
    for row in &sim.config().devices {
        println!(
            "  {}× {} [{}] {:.0} IPS  ({})",
            row.quantity, row.label, row.latency_tier, row.ips, row.id
        );
    }
    println!("1) 카탈로그에서 추가  2) 수량 변경  3) 제거");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            println!("카탈로그:");
            for entry in catalog::catalog() {
                println!(
                    "  {}  {} {} [{}] {:.0} IPS",
                    entry.id, entry.vendor, entry.label, entry.latency_tier, entry.ips
                );
            }
            let id = read_line("추가할 id: ")?;
            if !sim.add_device(id.trim()) {
                println!("카탈로그에 없는 id 입니다.");
            }
        }
        "2" => {
            let id = read_line("장비 id: ")?;
            let qty = read_f64_min("수량: ", 0.0)? as u32;
            if !sim.set_device_quantity(id.trim(), qty) {
                println!("인벤토리에 없는 id 입니다.");
            }
        }
        "3" => {
            let id = read_line("제거할 id: ")?;
            if !sim.remove_device(id.trim()) {
                println!("인벤토리에 없는 id 입니다.");
            }
        }
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 비용 항목과 통신/전력 사업자 메뉴를 처리한다.
pub fn handle_costs_providers(sim: &mut Simulator) -> Result<(), AppError> {
    let costs = sim.config().costs.clone();
    println!("\n-- 비용 및 사업자 [USD/월] --");
    println!(
        "에너지 {:.0}  임대 {:.0}  인건비 {:.0}  기타 {:.0}",
        costs.energy, costs.rent, costs.staff, costs.misc
    );
    println!(
        "보험 {:.0}  유지보수 {:.0}  라이선스 {:.0}  법무 {:.0}  통신 {:.0}",
        costs.insurance, costs.maintenance, costs.licenses, costs.legal, costs.fibre
    );
    println!("1) 비용 항목 편집  2) 통신 사업자 선택  3) 요금 연동 토글  4) 전력 사업자 선택");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => {
            let energy = read_f64_min("에너지: ", 0.0)?;
            let rent = read_f64_min("임대: ", 0.0)?;
            let staff = read_f64_min("인건비: ", 0.0)?;
            let misc = read_f64_min("기타: ", 0.0)?;
            let insurance = read_f64_min("보험: ", 0.0)?;
            let maintenance = read_f64_min("유지보수: ", 0.0)?;
            let licenses = read_f64_min("라이선스: ", 0.0)?;
            let legal = read_f64_min("법무: ", 0.0)?;
            let fibre = read_f64_min("통신: ", 0.0)?;
            sim.update(|cfg| {
                cfg.costs.energy = energy;
                cfg.costs.rent = rent;
                cfg.costs.staff = staff;
                cfg.costs.misc = misc;
                cfg.costs.insurance = insurance;
                cfg.costs.maintenance = maintenance;
                cfg.costs.licenses = licenses;
                cfg.costs.legal = legal;
                cfg.costs.fibre = fibre;
            });
        }
        "2" => {
            let city = sim.config().city.clone();
            for p in providers::fibre_providers(&city) {
                println!("  {}  {:.0} USD/월", p.name, p.monthly_rate_usd);
            }
            let name = read_line("사업자 이름: ")?;
            let name = name.trim().to_string();
            let link_rate = sim.config().link_rate;
            let rate = providers::selected_fibre_rate(&city, &name);
            sim.update(|cfg| {
                cfg.connectivity_provider = name;
                if link_rate {
                    cfg.costs.fibre = rate;
                }
            });
        }
        "3" => {
            let link_rate = !sim.config().link_rate;
            let rate = providers::selected_fibre_rate(
                &sim.config().city,
                &sim.config().connectivity_provider,
            );
            sim.update(|cfg| {
                cfg.link_rate = link_rate;
                if link_rate {
                    cfg.costs.fibre = rate;
                }
            });
            println!("요금 연동: {}", if link_rate { "ON" } else { "OFF" });
        }
        "4" => {
            let city = sim.config().city.clone();
            for p in providers::energy_providers(&city) {
                println!("  {}{}", p.name, if p.green { "  (green)" } else { "" });
            }
            let name = read_line("사업자 이름: ")?;
            let name = name.trim().to_string();
            sim.update(|cfg| cfg.energy_provider = name);
        }
        _ => println!("잘못된 선택입니다."),
    }
    Ok(())
}

/// 프리셋 메뉴를 처리한다.
pub fn handle_presets(sim: &mut Simulator) -> Result<(), AppError> {
    println!("\n-- 프리셋 --");
    for preset in presets::presets() {
        println!("  {}  {}", preset.id, preset.name);
        println!("      {}", preset.desc);
    }
    let id = read_line("적용할 프리셋 id (취소하려면 엔터): ")?;
    if id.trim().is_empty() {
        return Ok(());
    }
    if sim.apply_preset(id.trim()) {
        println!("프리셋이 적용되었습니다.");
    } else {
        println!("모르는 프리셋 id 입니다.");
    }
    Ok(())
}

/// 현재 콜 단가를 클라우드 기준 단가와 비교해 출력한다.
pub fn handle_cloud_compare(sim: &Simulator) {
    let price = sim.result().price_per_call;
    println!("\n-- 클라우드 단가 비교 --");
    println!("현재 엣지 콜 단가: {:.6} USD", price);
    for baseline in cloud::baselines() {
        let ratio = if baseline.price_per_call > 0.0 {
            price / baseline.price_per_call
        } else {
            0.0
        };
        println!(
            "  {:<24} {:.5} USD ({})  엣지 프리미엄 {:.1}×",
            baseline.name, baseline.price_per_call, baseline.description, ratio
        );
    }
    println!("계산된 시장 평균: {:.5} USD", cloud::market_average_price());
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("숫자를 입력하세요."),
        }
    }
}

/// 음수 등 경계 밖 입력은 계산기까지 가기 전에 여기서 클램프한다.
fn read_f64_min(prompt: &str, min: f64) -> Result<f64, AppError> {
    let v = read_f64(prompt)?;
    Ok(v.max(min))
}
