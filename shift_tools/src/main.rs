use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clinical_shift::{
    application::{
        commands::{current_shift_info, shift_table},
        dto::ShiftInfo,
        events::parse_event,
        time::{parse_date, parse_timestamp},
    },
    infrastructure::config_repo::{ConfigRepository, ENV_CONFIG_PATH},
    AppServices,
};

// 引数を構造体として定義します
#[derive(Parser)]
#[command(name = "shift_tools")]
#[command(version = "0.1.0")]
#[command(about = "臨床日と班別の判定を行います", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 指定した時刻 (省略時は現在) の班別を判定します
    Resolve {
        /// 判定する時刻 (例: 2025-03-17T15:00:21)
        #[arg(short, long)]
        at: Option<String>,

        /// 設定ファイル (省略時は組み込みの設定)
        #[arg(short, long, env = ENV_CONFIG_PATH)]
        config: Option<PathBuf>,

        /// JSONで出力する
        #[arg(long)]
        json: bool,
    },
    /// 臨床日を基準とした班別の一覧を表示します
    Table {
        /// 基準日 (例: 2025-03-17)
        #[arg(short, long)]
        date: String,

        #[arg(short, long, env = ENV_CONFIG_PATH)]
        config: Option<PathBuf>,
    },
    /// エディタ・通知チャネルのイベントを解釈して表示します
    Event {
        /// イベント名 (例: saveStatus)
        name: String,

        /// JSONペイロード (省略時は null)
        #[arg(short, long, default_value = "")]
        payload: String,
    },
    /// 設定ファイルを検証します
    Check {
        #[arg(short, long, env = ENV_CONFIG_PATH)]
        config: Option<PathBuf>,
    },
}

fn load_services(config: Option<PathBuf>) -> Result<AppServices> {
    let repo = ConfigRepository::load_or_reference(config.as_ref())
        .context("failed to load shift config")?;
    Ok(AppServices::with_system_clock(repo))
}

fn resolve_command(at: Option<String>, config: Option<PathBuf>, json: bool) -> Result<()> {
    let services = load_services(config)?;
    let at = at
        .map(|s| parse_timestamp(&s).ok_or_else(|| anyhow!("invalid timestamp: {}", s)))
        .transpose()?;

    let info = current_shift_info(&services, at)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    match info {
        ShiftInfo::Found(info) => {
            println!("判定時刻: {}", info.input_time);
            println!("自然日期: {}", info.natural_date_chinese);
            println!("臨床日期: {}", info.clinical_date_chinese);
            println!("當前班別: {}", info.current_shift.full_name);
        }
        ShiftInfo::Undetermined { error } => {
            println!("{}", error);
        }
    }
    Ok(())
}

fn table_command(date: String, config: Option<PathBuf>) -> Result<()> {
    let services = load_services(config)?;
    let date = parse_date(&date).ok_or_else(|| anyhow!("invalid date: {}", date))?;

    let table = shift_table(&services, date)?;
    println!("{} / {}", table.location, table.clinical_date);
    for row in table.rows {
        println!(
            "  [{}] {}\t{} ~ {}{}",
            row.short_label,
            row.long_label,
            row.start,
            row.end,
            if row.is_overnight { " (overnight)" } else { "" }
        );
    }
    Ok(())
}

fn event_command(name: String, payload: String) -> Result<()> {
    let event = parse_event(&name, &payload).context("failed to parse event payload")?;
    println!("{:?}", event);
    Ok(())
}

fn check_command(config: Option<PathBuf>) -> Result<()> {
    let services = load_services(config)?;
    let config = services.config.config();

    println!(
        "ok: {} clinical unit(s), {} shift(s)",
        config.clinical_units.len(),
        config.shifts.len()
    );
    if let Some(unit) = config.active_unit() {
        println!(
            "active unit: {} (day begins {:02}:{:02})",
            unit.location, unit.day_begin_hour, unit.day_begin_offset_minutes
        );
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();

    // パターンマッチで分岐処理
    match args.command {
        Commands::Resolve { at, config, json } => resolve_command(at, config, json),
        Commands::Table { date, config } => table_command(date, config),
        Commands::Event { name, payload } => event_command(name, payload),
        Commands::Check { config } => check_command(config),
    }
}
