use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::form::ConverterForm;
use crate::i18n::{self, keys, Translator};
use crate::units::Unit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Units,
    Settings,
    Exit,
}

/// 대화형 메뉴의 입출력. 표준 입출력 대신 버퍼를 넣어 세션을 재현할 수 있다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 줄바꿈 문자만 떼어내고 나머지는 그대로 둔다.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        Ok(line.strip_suffix('\r').unwrap_or(line).to_string())
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_UNITS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        con.say(tr.t(key))?;
    }
    loop {
        let sel = con.read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Units),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => con.say(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 변환 메뉴를 처리한다. 화면 상태는 [`ConverterForm`]이 들고, 결과 문장을 그대로 출력한다.
pub fn handle_conversion<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    cfg: &Config,
) -> Result<(), AppError> {
    con.say(tr.t(keys::CONVERT_HEADING))?;
    let mut form = ConverterForm::new();

    con.say(tr.t(keys::CONVERT_CATEGORY_OPTIONS))?;
    con.say(&numbered(&Category::labels()))?;
    let category = loop {
        let prompt = match cfg.default_category {
            Some(default) => format!(
                "{} [{default}] {}",
                tr.t(keys::CONVERT_PROMPT_CATEGORY),
                tr.t(keys::CONVERT_DEFAULT_HINT)
            ),
            None => tr.t(keys::CONVERT_PROMPT_CATEGORY).to_string(),
        };
        let sel = con.read_line(&prompt)?;
        if sel.trim().is_empty() {
            if let Some(default) = cfg.default_category {
                break default;
            }
        }
        if let Some(c) = pick(&Category::ALL, &sel) {
            break c;
        }
        con.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
    };
    form.select_category(category);

    let value = con.read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
    form.set_input(value);

    let from = choose_unit(con, tr, keys::CONVERT_PROMPT_FROM, form.from_choices())?;
    form.select_from(from);
    let to = choose_unit(con, tr, keys::CONVERT_PROMPT_TO, form.to_choices())?;
    form.select_to(to);

    con.say(&format!("{} {}", tr.t(keys::CONVERT_RESULT), form.result_text()))?;
    Ok(())
}

fn choose_unit<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    heading: &str,
    choices: &[Unit],
) -> Result<Unit, AppError> {
    // 선택지가 하나뿐이면 묻지 않는다
    if let [only] = choices {
        con.say(&format!("{} {only}", tr.t(heading)))?;
        return Ok(*only);
    }
    con.say(tr.t(heading))?;
    let labels: Vec<&str> = choices.iter().map(|u| u.label()).collect();
    con.say(&numbered(&labels))?;
    loop {
        let sel = con.read_line(tr.t(keys::PROMPT_SELECT))?;
        if let Some(unit) = pick(choices, &sel) {
            return Ok(unit);
        }
        con.say(tr.t(keys::INVALID_SELECTION_RETRY))?;
    }
}

/// 지원 단위 목록을 출력한다.
pub fn handle_units<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
) -> Result<(), AppError> {
    con.say(tr.t(keys::UNITS_HEADING))?;
    for category in Category::ALL {
        con.say(&unit_listing(tr, category))?;
    }
    Ok(())
}

/// 카테고리 하나의 From/To 목록을 사람이 읽는 형태로 만든다.
pub fn unit_listing(tr: &Translator, category: Category) -> String {
    format!(
        "{category}\n  {}: {}\n  {}: {}",
        tr.t(keys::UNITS_FROM),
        category.from_units().join(", "),
        tr.t(keys::UNITS_TO),
        category.to_units().join(", ")
    )
}

/// 설정 메뉴를 처리한다. 언어를 바꾸면 새 번역기를 돌려준다.
pub fn handle_settings<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    cfg: &mut Config,
) -> Result<Option<Translator>, AppError> {
    con.say(tr.t(keys::SETTINGS_HEADING))?;
    con.say(&format!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    ))?;
    let current = cfg
        .default_category
        .map(Category::name)
        .unwrap_or(tr.t(keys::SETTINGS_NONE));
    con.say(&format!(
        "{} {current}",
        tr.t(keys::SETTINGS_CURRENT_CATEGORY)
    ))?;
    con.say(tr.t(keys::SETTINGS_OPTIONS))?;
    let sel = con.read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let code = con.read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let code = code.trim();
            if code.is_empty() {
                return Ok(None);
            }
            cfg.language = code.to_string();
            let resolved = i18n::resolve_language(code, None);
            let next = Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
            con.say(next.t(keys::SETTINGS_SAVED))?;
            Ok(Some(next))
        }
        "2" => {
            con.say(&numbered(&Category::labels()))?;
            let sel = con.read_line(tr.t(keys::SETTINGS_PROMPT_CATEGORY))?;
            match sel.trim() {
                "" => return Ok(None),
                "0" => cfg.default_category = None,
                other => match pick(&Category::ALL, other) {
                    Some(c) => cfg.default_category = Some(c),
                    None => {
                        con.say(tr.t(keys::SETTINGS_INVALID))?;
                        return Ok(None);
                    }
                },
            }
            con.say(tr.t(keys::SETTINGS_SAVED))?;
            Ok(None)
        }
        _ => {
            con.say(tr.t(keys::SETTINGS_INVALID))?;
            Ok(None)
        }
    }
}

fn numbered(labels: &[&str]) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}) {label}", i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

/// 1부터 시작하는 번호로 목록에서 고른다.
fn pick<T: Copy>(items: &[T], sel: &str) -> Option<T> {
    let n: usize = sel.trim().parse().ok()?;
    n.checked_sub(1).and_then(|i| items.get(i)).copied()
}
