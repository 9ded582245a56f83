use std::process::ExitCode;

use clap::Parser;
use metric_converter::cli::{self, Cli};

/// 프로그램의 엔트리 포인트. 로거를 켠 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logging(args.log_filter());
    match cli::execute(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}
