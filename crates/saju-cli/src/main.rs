//! 사주 시기 예측 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 2024년 2월 직업운 점수
//! saju score -c config/sample_chart.json -e career -y 2024 -m 2
//!
//! # 2024~2028년 결혼 최적 기간 상위 5개 (연도별 병렬 스캔)
//! saju rank -c config/sample_chart.json -e marriage -f 2024 -t 2028 --top 5 --parallel
//!
//! # 날짜의 사주 간지
//! saju ganji -d 1990-03-10 --hour 14
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saju_core::{init_logging, AppConfig, LogConfig, YearRange};
use saju_timing::RankOptions;
use tracing::debug;

use saju_cli::commands::ganji::{run_ganji, GanjiConfig};
use saju_cli::commands::rank::{run_rank, RankConfig};
use saju_cli::commands::score::{run_score, ScoreConfig};
use saju_cli::commands::{load_chart, parse_date, parse_event, OutputFormat};

#[derive(Parser)]
#[command(name = "saju")]
#[command(about = "사주 이벤트 시기 예측 엔진 CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일
    #[arg(long, global = true, default_value = "config/default.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 월별 시기 점수 조회
    Score {
        /// 명식 JSON 파일
        #[arg(short, long)]
        chart: String,

        /// 이벤트 유형 (marriage, career, investment, move, study, health, relationship)
        #[arg(short, long)]
        event: String,

        /// 연도
        #[arg(short, long)]
        year: i32,

        /// 월 (1~12)
        #[arg(short, long)]
        month: u32,

        /// 대운 조회 나이 (기본: 연도 차이)
        #[arg(long)]
        age: Option<u32>,

        /// 2차 진행 단계 생략
        #[arg(long, default_value = "false")]
        no_progressions: bool,

        /// 절기 단계 생략
        #[arg(long, default_value = "false")]
        no_solar_terms: bool,

        /// 지지 관계를 연지 기준으로 계산
        #[arg(long, default_value = "false")]
        year_branch: bool,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 최적 기간 순위
    Rank {
        /// 명식 JSON 파일
        #[arg(short, long)]
        chart: String,

        /// 이벤트 유형
        #[arg(short, long)]
        event: String,

        /// 시작 연도
        #[arg(short = 'f', long)]
        from: i32,

        /// 종료 연도
        #[arg(short, long)]
        to: i32,

        /// 기간 포함 임계 점수 (기본: 설정 파일)
        #[arg(long)]
        threshold: Option<i32>,

        /// 최대 결과 수 (0 = 무제한, 기본: 설정 파일)
        #[arg(long)]
        top: Option<usize>,

        /// 연도별 병렬 스캔
        #[arg(long, default_value = "false")]
        parallel: bool,

        /// 2차 진행 단계 생략
        #[arg(long, default_value = "false")]
        no_progressions: bool,

        /// 절기 단계 생략
        #[arg(long, default_value = "false")]
        no_solar_terms: bool,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 날짜의 사주 간지 조회
    Ganji {
        /// 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// 시 (0~23)
        #[arg(long)]
        hour: Option<u32>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config))?;
    init_logging(LogConfig::from_config(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    debug!(path = %cli.config, "Config loaded");

    match cli.command {
        Commands::Score {
            chart,
            event,
            year,
            month,
            age,
            no_progressions,
            no_solar_terms,
            year_branch,
            format,
        } => {
            let config_score = ScoreConfig {
                chart: load_chart(&chart)?,
                event: parse_event(&event)?,
                year,
                month,
                age,
                use_progressions: !no_progressions,
                use_solar_terms: !no_solar_terms,
                year_branch,
                format: OutputFormat::parse(&format)?,
            };
            run_score(config_score, config.scoring)?;
        }

        Commands::Rank {
            chart,
            event,
            from,
            to,
            threshold,
            top,
            parallel,
            no_progressions,
            no_solar_terms,
            format,
        } => {
            let mut options = RankOptions::from(&config.ranking);
            if let Some(threshold) = threshold {
                options = options.with_threshold(threshold);
            }
            if let Some(top) = top {
                options = options.with_top_n(top);
            }
            options.score_options.use_progressions = !no_progressions;
            options.score_options.use_solar_terms = !no_solar_terms;

            let rank_config = RankConfig {
                chart: load_chart(&chart)?,
                event: parse_event(&event)?,
                range: YearRange::new(from, to),
                options,
                parallel,
                format: OutputFormat::parse(&format)?,
            };
            run_rank(rank_config, config.scoring).await?;
        }

        Commands::Ganji { date, hour, format } => {
            run_ganji(GanjiConfig {
                date: parse_date(&date)?,
                hour,
                format: OutputFormat::parse(&format)?,
            })?;
        }
    }

    Ok(())
}
