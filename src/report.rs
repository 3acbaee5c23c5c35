//! 비교 결과를 화면 표시용 문자열로 바꾼다.

use serde::Serialize;
use std::io::Write;

use crate::currency::{format_currency, format_number, CurrencyFormat};
use crate::finance::{Comparison, Verdict};
use crate::i18n::{keys, Translator};

/// 월별 잔액 표의 한 행.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRow {
    pub month: u32,
    pub cash_balance: String,
    pub financed_balance: String,
}

/// 표시 계층에 넘기는 결과 묶음. 숫자는 모두 형식화되어 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub cash_total: String,
    pub financed_total: String,
    pub cash_balance: String,
    pub financed_balance: String,
    pub installment: String,
    /// 동등 월 수익률 [%], 소수 4자리
    pub monthly_yield: String,
    pub verdict: String,
    pub rows: Vec<MonthRow>,
}

impl Report {
    pub fn build(cmp: &Comparison, fmt: &CurrencyFormat, tr: &Translator) -> Self {
        let verdict_key = match cmp.verdict {
            Verdict::Cash => keys::VERDICT_CASH,
            Verdict::Financing => keys::VERDICT_FINANCING,
        };
        let rows = cmp
            .cash
            .trajectory
            .iter()
            .zip(cmp.financed.trajectory.iter())
            .enumerate()
            .map(|(i, (cash, financed))| MonthRow {
                month: i as u32 + 1,
                cash_balance: format_currency(cash, fmt),
                financed_balance: format_currency(financed, fmt),
            })
            .collect();
        Self {
            cash_total: format_currency(cmp.cash.cost_total, fmt),
            financed_total: format_currency(cmp.financed.cost_total, fmt),
            cash_balance: format_currency(cmp.cash.final_balance, fmt),
            financed_balance: format_currency(cmp.financed.final_balance, fmt),
            installment: format_currency(cmp.installment, fmt),
            monthly_yield: format!("{} %", format_number(cmp.monthly_yield * 100.0, 4, fmt)),
            verdict: tr.t(verdict_key).to_string(),
            rows,
        }
    }
}

#[derive(Serialize)]
struct CsvRow {
    month: u32,
    cash_balance: f64,
    financed_balance: f64,
}

/// 월별 잔액을 CSV로 내보낸다. 값은 반올림하지 않은 원래 숫자다.
pub fn write_csv<W: Write>(cmp: &Comparison, out: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);
    for (i, (cash, financed)) in cmp
        .cash
        .trajectory
        .iter()
        .zip(cmp.financed.trajectory.iter())
        .enumerate()
    {
        wtr.serialize(CsvRow {
            month: i as u32 + 1,
            cash_balance: cash,
            financed_balance: financed,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
