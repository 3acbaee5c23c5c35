//! 통화 문자열 해석/표시 모듈 모음.
//!
//! 프로세스 전역 로케일을 바꾸지 않고, 표시 형식은 항상 [`CurrencyFormat`]
//! 값으로 명시적으로 전달한다.

pub mod format;
pub mod parse;

pub use format::{format_currency, format_number, format_percent};
pub use parse::{parse_currency, parse_currency_or_zero, parse_percent_or_zero, ParseError};

use serde::{Deserialize, Serialize};

/// 기호 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `R$ 1.234,56`, `$1,234.56`
    Prefix,
    /// `1.234,56 €`
    Suffix,
}

/// 통화 표시 형식. 파서와 포매터가 같은 값을 공유한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    /// 기호와 숫자 사이에 공백을 둘지 여부
    pub spaced: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub decimals: usize,
}

/// 설정/CLI에서 고를 수 있는 통화 프리셋.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPreset {
    /// 브라질 헤알 (pt-BR). 기본값.
    #[default]
    Brl,
    /// 미국 달러 (en-US)
    Usd,
    /// 유로 (de-DE 표기)
    Eur,
}

impl CurrencyPreset {
    pub const ALL: [CurrencyPreset; 3] = [CurrencyPreset::Brl, CurrencyPreset::Usd, CurrencyPreset::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyPreset::Brl => "BRL",
            CurrencyPreset::Usd => "USD",
            CurrencyPreset::Eur => "EUR",
        }
    }

    /// 프리셋에 해당하는 표시 형식을 만든다.
    pub fn format(&self) -> CurrencyFormat {
        match self {
            CurrencyPreset::Brl => CurrencyFormat {
                symbol: "R$".into(),
                position: SymbolPosition::Prefix,
                spaced: true,
                thousands_separator: '.',
                decimal_separator: ',',
                decimals: 2,
            },
            CurrencyPreset::Usd => CurrencyFormat {
                symbol: "$".into(),
                position: SymbolPosition::Prefix,
                spaced: false,
                thousands_separator: ',',
                decimal_separator: '.',
                decimals: 2,
            },
            CurrencyPreset::Eur => CurrencyFormat {
                symbol: "€".into(),
                position: SymbolPosition::Suffix,
                spaced: true,
                thousands_separator: '.',
                decimal_separator: ',',
                decimals: 2,
            },
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyPreset::default().format()
    }
}
