use std::io::{BufRead, Write};

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 표준 입력이 닫힘(EOF)
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 대화형 메뉴의 메인 루프를 실행한다. 입력이 닫히면 종료 메뉴와 같이 처리한다.
pub fn run<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    config: &mut Config,
    mut tr: Translator,
) -> Result<(), AppError> {
    loop {
        match step(con, config, &mut tr) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(AppError::InputClosed) => {
                log::info!("stdin closed; leaving menu");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    config.save()?;
    Ok(())
}

fn step<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    config: &mut Config,
    tr: &mut Translator,
) -> Result<bool, AppError> {
    match ui_cli::main_menu(con, tr)? {
        MenuChoice::Convert => ui_cli::handle_conversion(con, tr, config)?,
        MenuChoice::Units => ui_cli::handle_units(con, tr)?,
        MenuChoice::Settings => {
            if let Some(next) = ui_cli::handle_settings(con, tr, config)? {
                *tr = next;
            }
            config.save()?;
        }
        MenuChoice::Exit => {
            con.say(tr.t(i18n::keys::APP_EXIT))?;
            return Ok(false);
        }
    }
    Ok(true)
}
