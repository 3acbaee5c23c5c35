//! 화면/CLI에서 받은 문자열 입력을 계산 입력으로 바꾸는 수집기.

use crate::config::DefaultInputs;
use crate::currency::{
    format_currency, format_percent, parse_currency_or_zero, parse_percent_or_zero, CurrencyFormat,
};
use crate::finance::{InputError, SimulationInput};

/// 입력 화면에서 받는 최대 할부 개월 수 (50년).
pub const MAX_MONTHS: u32 = 600;

/// 사용자가 입력한 그대로의 값. 기간만 정수로 받는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputs {
    pub total_price: String,
    pub down_payment: String,
    /// 월 이자율 [%]
    pub financing_rate: String,
    pub months: u32,
    /// 일시불 할인율 [%]
    pub cash_discount: String,
    /// 연 수익률 [%]
    pub annual_yield: String,
}

impl TextInputs {
    /// 설정 기본값을 표시 형식으로 채운다. 금액은 통화 형식, 비율은 입력 정밀도 그대로.
    pub fn from_defaults(defaults: &DefaultInputs, fmt: &CurrencyFormat) -> Self {
        Self {
            total_price: format_currency(defaults.total_price, fmt),
            down_payment: format_currency(defaults.down_payment, fmt),
            financing_rate: format_percent(defaults.financing_rate_percent, fmt),
            months: defaults.months,
            cash_discount: format_percent(defaults.cash_discount_percent, fmt),
            annual_yield: format_percent(defaults.annual_yield_percent, fmt),
        }
    }

    /// 문자열을 해석한다. 해석 불가한 칸은 0으로 본다; 기간은 검증한다.
    pub fn to_simulation_input(&self, fmt: &CurrencyFormat) -> Result<SimulationInput, InputError> {
        let input = SimulationInput {
            total_price: parse_currency_or_zero(&self.total_price, fmt),
            down_payment: parse_currency_or_zero(&self.down_payment, fmt),
            financing_rate: parse_percent_or_zero(&self.financing_rate, fmt),
            months: self.months,
            cash_discount: parse_percent_or_zero(&self.cash_discount, fmt),
            annual_yield: parse_percent_or_zero(&self.annual_yield, fmt),
        };
        input.validate()?;
        Ok(input)
    }
}
