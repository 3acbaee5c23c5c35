use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::currency::CurrencyPreset;
use crate::finance::simulate;
use crate::i18n::{keys, Translator};
use crate::input::{TextInputs, MAX_MONTHS};
use crate::report::Report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    tr: &Translator,
    input: &mut R,
    out: &mut W,
) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== {} ===", tr.t(keys::APP_TITLE))?;
    writeln!(out, "{}", tr.t(keys::MAIN_MENU_SIMULATE))?;
    writeln!(out, "{}", tr.t(keys::MAIN_MENU_SETTINGS))?;
    writeln!(out, "{}", tr.t(keys::MAIN_MENU_EXIT))?;
    loop {
        let sel = match read_line(input, out, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(err) => return Err(err),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simulate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 여섯 개 입력을 차례로 묻고 비교 결과를 출력한다. 엔터는 기본값 유지.
pub fn handle_simulation<R: BufRead, W: Write>(
    tr: &Translator,
    cfg: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let fmt = cfg.currency.format();
    let mut inputs = TextInputs::from_defaults(&cfg.defaults, &fmt);
    writeln!(out, "{}", tr.t(keys::INPUT_KEEP_DEFAULT))?;
    inputs.total_price = read_text(input, out, tr.t(keys::INPUT_TOTAL_PRICE), &inputs.total_price)?;
    inputs.down_payment =
        read_text(input, out, tr.t(keys::INPUT_DOWN_PAYMENT), &inputs.down_payment)?;
    inputs.financing_rate =
        read_text(input, out, tr.t(keys::INPUT_FINANCING_RATE), &inputs.financing_rate)?;
    inputs.months = read_months(tr, input, out, inputs.months)?;
    inputs.cash_discount =
        read_text(input, out, tr.t(keys::INPUT_CASH_DISCOUNT), &inputs.cash_discount)?;
    inputs.annual_yield =
        read_text(input, out, tr.t(keys::INPUT_ANNUAL_YIELD), &inputs.annual_yield)?;

    let sim = inputs.to_simulation_input(&fmt)?;
    let report = Report::build(&simulate(&sim), &fmt, tr);
    write_report(out, &report, tr)?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어와 통화만 바꾼다.
pub fn handle_settings<R: BufRead, W: Write>(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::SETTINGS_HEADING))?;
    writeln!(
        out,
        "{} {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language,
        cfg.currency.code()
    )?;

    writeln!(out, "{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS))?;
    let sel = read_line(input, out, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.language = "pt-br".into(),
        "2" => cfg.language = "en-us".into(),
        "3" => cfg.language = "ko-kr".into(),
        _ => writeln!(out, "{}", tr.t(keys::SETTINGS_INVALID))?,
    }

    writeln!(out, "{}", tr.t(keys::SETTINGS_CURRENCY_OPTIONS))?;
    let sel = read_line(input, out, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.currency = CurrencyPreset::Brl,
        "2" => cfg.currency = CurrencyPreset::Usd,
        "3" => cfg.currency = CurrencyPreset::Eur,
        _ => writeln!(out, "{}", tr.t(keys::SETTINGS_INVALID))?,
    }
    Ok(())
}

/// 비교표와 월별 잔액표를 출력한다.
pub fn write_report<W: Write>(out: &mut W, report: &Report, tr: &Translator) -> io::Result<()> {
    writeln!(out, "\n{}", tr.t(keys::REPORT_COMPARISON_HEADING))?;
    write_table(
        out,
        &[
            tr.t(keys::COLUMN_SCENARIO),
            tr.t(keys::COLUMN_COST_TOTAL),
            tr.t(keys::COLUMN_BALANCE),
        ],
        &[
            vec![
                tr.t(keys::SCENARIO_CASH).to_string(),
                report.cash_total.clone(),
                report.cash_balance.clone(),
            ],
            vec![
                tr.t(keys::SCENARIO_FINANCED).to_string(),
                report.financed_total.clone(),
                report.financed_balance.clone(),
            ],
        ],
    )?;
    writeln!(out, "{} {}", tr.t(keys::RESULT_INSTALLMENT), report.installment)?;
    writeln!(out, "{} {}", tr.t(keys::RESULT_MONTHLY_YIELD), report.monthly_yield)?;
    writeln!(out, "\n{}", report.verdict)?;

    writeln!(out, "\n{}", tr.t(keys::REPORT_MONTHLY_HEADING))?;
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.month.to_string(),
                r.cash_balance.clone(),
                r.financed_balance.clone(),
            ]
        })
        .collect();
    write_table(
        out,
        &[
            tr.t(keys::COLUMN_MONTH),
            tr.t(keys::COLUMN_CASH_BALANCE),
            tr.t(keys::COLUMN_FINANCED_BALANCE),
        ],
        &rows,
    )
}

/// 첫 열은 왼쪽, 나머지는 오른쪽 정렬.
fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    writeln!(out, "{}", format_row(headers, &widths))?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", format_row(&cells, &widths))?;
    }
    Ok(())
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i == 0 {
                format!("{cell:<w$}")
            } else {
                format!("{cell:>w$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`를 돌려준다.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_text<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    current: &str,
) -> Result<String, AppError> {
    let s = read_line(input, out, &format!("{label} [{current}]: "))?;
    let s = s.trim();
    if s.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(s.to_string())
    }
}

fn read_months<R: BufRead, W: Write>(
    tr: &Translator,
    input: &mut R,
    out: &mut W,
    current: u32,
) -> Result<u32, AppError> {
    let current_ok = (1..=MAX_MONTHS).contains(&current);
    loop {
        let s = read_line(input, out, &format!("{} [{current}]: ", tr.t(keys::INPUT_MONTHS)))?;
        let s = s.trim();
        if s.is_empty() && current_ok {
            return Ok(current);
        }
        match s.parse::<u32>() {
            Ok(v) if (1..=MAX_MONTHS).contains(&v) => return Ok(v),
            Ok(_) => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_TERM))?,
            Err(_) => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::SimulationInput;

    #[test]
    fn report_table_lists_every_month() {
        let tr = Translator::new("en-us");
        let fmt = CurrencyPreset::Usd.format();
        let cmp = simulate(&SimulationInput {
            total_price: 12_000.0,
            down_payment: 2_000.0,
            financing_rate: 0.01,
            months: 6,
            cash_discount: 0.05,
            annual_yield: 0.12,
        });
        let report = Report::build(&cmp, &fmt, &tr);
        let mut buf = Vec::new();
        write_report(&mut buf, &report, &tr).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Scenario Comparison"));
        assert!(text.contains("$11,400.00"));
        assert!(text.contains(&report.verdict));
        let month_lines = text
            .lines()
            .skip_while(|l| !l.starts_with("Month |"))
            .skip(2)
            .count();
        assert_eq!(month_lines, 6);
    }

    #[test]
    fn exhausted_input_leaves_the_menu() {
        let tr = Translator::new("en-us");
        let mut out = Vec::new();
        let choice = main_menu(&tr, &mut &b""[..], &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Exit);

        let mut out = Vec::new();
        let choice = main_menu(&tr, &mut &b"x\n"[..], &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Exit);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(tr.t(keys::INVALID_SELECTION_RETRY)).count(), 1);
    }

    #[test]
    fn exhausted_input_aborts_the_form() {
        let tr = Translator::new("en-us");
        let mut out = Vec::new();
        let err = handle_simulation(&tr, &Config::default(), &mut &b"\n\n"[..], &mut out)
            .unwrap_err();
        assert!(
            matches!(&err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof),
            "{err:?}"
        );

        let mut out = Vec::new();
        let err = read_months(&tr, &mut &b"0\nabc\n"[..], &mut out, 36).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn months_outside_range_are_asked_again() {
        let tr = Translator::new("en-us");
        let mut out = Vec::new();
        let months = read_months(&tr, &mut &b"0\n601\n\n"[..], &mut out, 36).unwrap();
        assert_eq!(months, 36);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(tr.t(keys::ERROR_INVALID_TERM)).count(), 2);
    }

    #[test]
    fn blank_answers_keep_the_form_defaults() {
        let tr = Translator::new("en-us");
        let mut cfg = Config::default();
        cfg.currency = CurrencyPreset::Usd;
        let mut out = Vec::new();
        handle_simulation(&tr, &cfg, &mut &b"\n\n\n\n\n\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("$126,000.00"));
        assert!(text.contains(tr.t(keys::VERDICT_CASH)));
    }

    #[test]
    fn table_columns_are_aligned() {
        let mut buf = Vec::new();
        write_table(
            &mut buf,
            &["A", "Value"],
            &[
                vec!["long name".into(), "1".into()],
                vec!["x".into(), "12345678".into()],
            ],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "A         |    Value");
        assert_eq!(lines[1], "----------+---------");
        assert_eq!(lines[2], "long name |        1");
        assert_eq!(lines[3], "x         | 12345678");
    }
}
