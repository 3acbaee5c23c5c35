use thiserror::Error;
use tracing::debug;

use super::CurrencyFormat;

/// 금액 문자열 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 기호/공백을 걷어낸 뒤 남은 숫자가 없음
    #[error("입력값이 비어 있습니다")]
    Empty,
    /// 숫자로 해석할 수 없음
    #[error("숫자로 해석할 수 없습니다: {0:?}")]
    Invalid(String),
    /// NaN/무한대
    #[error("유한한 값이 아닙니다: {0:?}")]
    NonFinite(String),
}

/// 통화 기호, 공백, 천 단위 구분자를 제거하고 소수 구분자를 `.`로 바꾼 뒤 해석한다.
///
/// 부호는 기호 앞/뒤 어디에 있어도 된다 (`-R$ 1.234,56`, `R$ -1.234,56`).
pub fn parse_currency(text: &str, fmt: &CurrencyFormat) -> Result<f64, ParseError> {
    let stripped = if fmt.symbol.is_empty() {
        text.to_string()
    } else {
        text.replace(fmt.symbol.as_str(), "")
    };
    let normalized: String = stripped
        .chars()
        .filter(|c| !c.is_whitespace() && *c != fmt.thousands_separator)
        .map(|c| if c == fmt.decimal_separator { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }
    let value: f64 = normalized
        .parse()
        .map_err(|_| ParseError::Invalid(text.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite(text.to_string()));
    }
    Ok(value)
}

/// 입력 수집기의 기본 정책: 해석에 실패하면 "입력 없음"으로 보고 0.0을 쓴다.
pub fn parse_currency_or_zero(text: &str, fmt: &CurrencyFormat) -> f64 {
    match parse_currency(text, fmt) {
        Ok(v) => v,
        Err(err) => {
            debug!(input = text, %err, "parse failed, substituting 0.0");
            0.0
        }
    }
}

/// `"10,0"` 같은 백분율 입력을 분수(0.10)로 바꾼다. 실패 시 0.0.
pub fn parse_percent_or_zero(text: &str, fmt: &CurrencyFormat) -> f64 {
    parse_currency_or_zero(text, fmt) / 100.0
}
