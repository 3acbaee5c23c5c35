use super::{CurrencyFormat, SymbolPosition};

/// 금액을 표시용 문자열로 만든다. 예: `R$ 140.000,00`, `-R$ 1.234,56`, `1.234,56 €`.
///
/// 반올림 결과가 0이면 부호를 붙이지 않는다.
pub fn format_currency(value: f64, fmt: &CurrencyFormat) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (digits, is_zero) = unsigned_digits(value.abs(), fmt.decimals, fmt);
    let sep = if fmt.spaced { " " } else { "" };
    let body = match fmt.position {
        SymbolPosition::Prefix => format!("{}{sep}{digits}", fmt.symbol),
        SymbolPosition::Suffix => format!("{digits}{sep}{}", fmt.symbol),
    };
    if value < 0.0 && !is_zero {
        format!("-{body}")
    } else {
        body
    }
}

/// 기호 없이 구분자만 적용한다. 백분율 입력칸(`10,0`) 표시에 쓴다.
pub fn format_number(value: f64, decimals: usize, fmt: &CurrencyFormat) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (digits, is_zero) = unsigned_digits(value.abs(), decimals, fmt);
    if value < 0.0 && !is_zero {
        format!("-{digits}")
    } else {
        digits
    }
}

/// 백분율 입력칸 표시. 소수는 필요한 자리까지만 남기고 최소 한 자리는 둔다 (`10,0`, `1,25`).
pub fn format_percent(value: f64, fmt: &CurrencyFormat) -> String {
    let mut out = format_number(value, PERCENT_DECIMALS, fmt);
    if out.contains(fmt.decimal_separator) {
        let kept = out.trim_end_matches('0').len();
        out.truncate(kept);
        if out.ends_with(fmt.decimal_separator) {
            out.push('0');
        }
    }
    out
}

const PERCENT_DECIMALS: usize = 6;

fn unsigned_digits(abs: f64, decimals: usize, fmt: &CurrencyFormat) -> (String, bool) {
    let fixed = format!("{abs:.decimals$}");
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut out = group_thousands(int_part, fmt.thousands_separator);
    if let Some(frac) = frac_part {
        out.push(fmt.decimal_separator);
        out.push_str(frac);
    }
    (out, is_zero)
}

fn group_thousands(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
