//! 일시불(할인) 구매와 할부 구매 + 차액 투자 전략을 비교하는 계산 라이브러리.
//! 계산 로직은 여기 두고 CLI/GUI는 표시만 담당한다.

pub mod app;
pub mod config;
pub mod currency;
pub mod finance;
pub mod i18n;
pub mod input;
pub mod report;
pub mod ui_cli;
