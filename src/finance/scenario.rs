use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::financing::{financing_cost, FinancingInput};
use super::investment::{project_investment, InvestmentInput};
use super::rates::monthly_from_annual;
use super::Trajectory;

/// 비교 시뮬레이션 입력. 비율은 모두 소수(0.10 = 10%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub total_price: f64,
    pub down_payment: f64,
    /// 할부 월 이자율
    pub financing_rate: f64,
    pub months: u32,
    /// 일시불 할인율
    pub cash_discount: f64,
    /// 기준(투자) 연 수익률
    pub annual_yield: f64,
}

/// 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("기간은 1개월 이상이어야 합니다 (입력값: {0})")]
    InvalidTerm(u32),
}

impl SimulationInput {
    /// 계산 전에 입력 경계에서 확인해야 하는 조건. 계약금 > 총액 등은 그대로 계산한다.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.months == 0 {
            return Err(InputError::InvalidTerm(self.months));
        }
        Ok(())
    }
}

/// 어느 쪽이 유리한지.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Cash,
    Financing,
}

/// 시나리오 하나의 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    /// 명목 총지급액(CET)
    pub cost_total: f64,
    pub final_balance: f64,
    pub trajectory: Trajectory,
}

/// 일시불/할부 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// 연 수익률에서 환산한 월 수익률
    pub monthly_yield: f64,
    /// 할인 적용 일시불 가격
    pub cash_price: f64,
    /// 할부 월 납입액
    pub installment: f64,
    pub cash: ScenarioResult,
    pub financed: ScenarioResult,
    pub verdict: Verdict,
}

/// 최종 잔액이 엄격히 클 때만 일시불이 이긴다. 동률이면 할부.
pub fn verdict(cash_final: f64, financed_final: f64) -> Verdict {
    if cash_final > financed_final {
        Verdict::Cash
    } else {
        Verdict::Financing
    }
}

/// 두 시나리오를 계산한다.
///
/// - 일시불: 할인액(총액 - 일시불 가격)을 인출 없이 투자.
/// - 할부: 총액 - 계약금을 투자하고 매월 납입액을 인출.
///
/// 입력은 [`SimulationInput::validate`]를 통과했다고 가정한다.
pub fn simulate(input: &SimulationInput) -> Comparison {
    let monthly_yield = monthly_from_annual(input.annual_yield);

    let cash_price = input.total_price * (1.0 - input.cash_discount);
    let cash_projection = project_investment(InvestmentInput {
        principal: input.total_price - cash_price,
        monthly_rate: monthly_yield,
        months: input.months,
        withdrawal: None,
    });

    let financing = financing_cost(FinancingInput {
        total_price: input.total_price,
        down_payment: input.down_payment,
        monthly_rate: input.financing_rate,
        months: input.months,
    });
    let financed_projection = project_investment(InvestmentInput {
        principal: input.total_price - input.down_payment,
        monthly_rate: monthly_yield,
        months: input.months,
        withdrawal: Some(financing.installment),
    });

    let verdict = verdict(
        cash_projection.final_balance,
        financed_projection.final_balance,
    );
    debug!(
        monthly_yield,
        cash_price,
        installment = financing.installment,
        cash_final = cash_projection.final_balance,
        financed_final = financed_projection.final_balance,
        ?verdict,
        "simulation finished"
    );

    Comparison {
        monthly_yield,
        cash_price,
        installment: financing.installment,
        cash: ScenarioResult {
            cost_total: cash_price,
            final_balance: cash_projection.final_balance,
            trajectory: cash_projection.trajectory,
        },
        financed: ScenarioResult {
            cost_total: financing.total_cost,
            final_balance: financed_projection.final_balance,
            trajectory: financed_projection.trajectory,
        },
        verdict,
    }
}
