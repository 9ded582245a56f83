//! 명령행 인자 정의와 실행.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::app::{self, AppError};
use crate::category::{Category, UnknownCategory};
use crate::config::{self, Config, DEFAULT_CONFIG_PATH};
use crate::conversion::{self, ConversionError};
use crate::form::{self, FormError};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, Console};
use crate::units::Unit;

#[derive(Parser, Debug)]
#[command(
    name = "metric_converter",
    version,
    about = "Temperature, area and time unit converter"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path of the settings file (language settings also apply to `units`)
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Interface language: auto, en, ko, ...
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,

    /// off, error, warn, info, debug or trace (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one value and print the result sentence
    Convert {
        /// Temperature, Area or Time
        #[arg(long)]
        category: Option<String>,
        /// Source unit, e.g. "Square Feet" or sqft
        #[arg(long)]
        from: Option<String>,
        /// Destination unit, e.g. "Square Meters" or m2
        #[arg(long)]
        to: Option<String>,
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// List the units offered for each conversion type
    Units {
        /// Only this conversion type
        category: Option<String>,
    },
}

impl Cli {
    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }
}

/// 로거를 초기화한다. RUST_LOG가 있으면 플래그보다 우선한다.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// 한 번 실행용 변환. 화면 폼과 같은 순서(빈 입력 → 숫자 → 선택 누락 → 엔진)로 검사한다.
///
/// 카테고리와 단위는 약어를 정식 이름으로 바꾼 뒤 문자열 그대로 엔진에 넘긴다.
pub fn run_convert(
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    value: &str,
) -> Result<String, FormError> {
    let value = form::parse_value(value)?;
    let (Some(category), Some(from), Some(to)) = (category, from, to) else {
        return Err(FormError::MissingSelection);
    };
    let category = Category::parse_alias(category)
        .map(Category::name)
        .unwrap_or(category);
    let from = Unit::parse_alias(from).map(Unit::label).unwrap_or(from);
    let to = Unit::parse_alias(to).map(Unit::label).unwrap_or(to);
    Ok(conversion::convert(category, from, to, value)?)
}

/// `units` 출력. 카테고리를 주면 그 카테고리만.
pub fn run_units(tr: &Translator, category: Option<&str>) -> Result<String, ConversionError> {
    let selected = match category {
        Some(name) => {
            let c = Category::parse_alias(name)
                .ok_or_else(|| UnknownCategory(name.to_string()))?;
            vec![c]
        }
        None => Category::ALL.to_vec(),
    };
    Ok(selected
        .into_iter()
        .map(|c| ui_cli::unit_listing(tr, c))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// 파싱된 인자로 프로그램을 실행한다.
pub fn execute(cli: Cli) -> Result<ExitCode, AppError> {
    match cli.command {
        Some(Command::Convert {
            category,
            from,
            to,
            value,
        }) => {
            let outcome = run_convert(
                category.as_deref(),
                from.as_deref(),
                to.as_deref(),
                value.as_deref().unwrap_or_default(),
            );
            Ok(report(outcome))
        }
        Some(Command::Units { category }) => {
            // 한 번 실행 명령은 설정 파일을 새로 만들지 않는다
            let cfg = config::load_from(&cli.config)?;
            let tr = translator_for(&cli.lang, &cfg);
            Ok(report(run_units(&tr, category.as_deref())))
        }
        None => {
            let mut cfg = config::load_or_default_from(&cli.config)?;
            let tr = translator_for(&cli.lang, &cfg);
            let mut con = Console::stdio();
            app::run(&mut con, &mut cfg, tr)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// 명령행 `--lang` → 설정 → 시스템 순으로 언어를 정하고 설정의 언어팩을 붙인다.
pub fn translator_for(cli_lang: &str, cfg: &Config) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(cfg.language.as_str()));
    log::debug!("interface language: {lang}");
    Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref())
}

fn report<E: std::fmt::Display>(outcome: Result<String, E>) -> ExitCode {
    match outcome {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
