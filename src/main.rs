use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use financing_simulator::{
    app, config,
    currency::CurrencyPreset,
    finance::simulate,
    input::{TextInputs, MAX_MONTHS},
    report::{self, Report},
    ui_cli,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// 일시불 할인 구매와 할부 구매(차액 투자)를 비교한다.
#[derive(Debug, Parser)]
#[command(name = "financing_simulator", version)]
struct Cli {
    /// 총 구매가 (예: "R$ 140.000,00")
    #[arg(long, allow_hyphen_values = true)]
    total: Option<String>,
    /// 할부 계약금
    #[arg(long, allow_hyphen_values = true)]
    down_payment: Option<String>,
    /// 할부 월 이자율 [%] (예: "1,5")
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,
    /// 할부 개월 수
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_MONTHS as i64))]
    months: Option<u32>,
    /// 일시불 할인율 [%]
    #[arg(long, allow_hyphen_values = true)]
    discount: Option<String>,
    /// 기준 연 수익률 [%]
    #[arg(long, allow_hyphen_values = true)]
    annual_yield: Option<String>,
    /// 통화 형식
    #[arg(long, value_enum)]
    currency: Option<CurrencyPreset>,
    /// 언어: auto/pt/en/ko
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// TOML 언어팩 디렉터리
    #[arg(long)]
    locale_dir: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// 메뉴 방식으로 입력받는다
    #[arg(short, long)]
    interactive: bool,
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 수준 (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_tracing(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> anyhow::Result<()> {
    let mut saved = config::load_or_default_at(&cli.config)
        .with_context(|| format!("설정 파일: {}", cli.config.display()))?;
    let overrides = app::Overrides {
        currency: cli.currency,
        locale_dir: cli.locale_dir.clone(),
    };

    if cli.interactive {
        let mut input = io::stdin().lock();
        let mut out = io::stdout().lock();
        app::run(&mut saved, &overrides, &cli.config, &cli.lang, &mut input, &mut out)?;
        return Ok(());
    }

    let cfg = overrides.apply(&saved);
    let tr = app::translator_for(&cfg, &cli.lang);
    let fmt = cfg.currency.format();
    let mut inputs = TextInputs::from_defaults(&cfg.defaults, &fmt);
    if let Some(v) = cli.total {
        inputs.total_price = v;
    }
    if let Some(v) = cli.down_payment {
        inputs.down_payment = v;
    }
    if let Some(v) = cli.rate {
        inputs.financing_rate = v;
    }
    if let Some(v) = cli.months {
        inputs.months = v;
    }
    if let Some(v) = cli.discount {
        inputs.cash_discount = v;
    }
    if let Some(v) = cli.annual_yield {
        inputs.annual_yield = v;
    }

    let sim = inputs.to_simulation_input(&fmt)?;
    info!(lang = tr.language_code(), currency = cfg.currency.code(), "running simulation");
    let comparison = simulate(&sim);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Table => {
            let report = Report::build(&comparison, &fmt, &tr);
            ui_cli::write_report(&mut out, &report, &tr)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &comparison)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => report::write_csv(&comparison, &mut out)?,
    }
    Ok(())
}
