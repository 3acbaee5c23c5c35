//! 할부/기회비용 계산 모듈 모음.

pub mod financing;
pub mod investment;
pub mod rates;
pub mod scenario;

pub use financing::{financing_cost, FinancingInput, FinancingResult};
pub use investment::{project_investment, InvestmentInput, Projection};
pub use scenario::{simulate, Comparison, InputError, ScenarioResult, SimulationInput, Verdict};

use serde::Serialize;

/// 월말 잔액의 순서열. 생성 후에는 읽기만 가능하다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory(Vec<f64>);

impl Trajectory {
    pub(crate) fn from_balances(balances: Vec<f64>) -> Self {
        Self(balances)
    }

    pub fn balances(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 마지막 달의 잔액. 기간이 0이면 None.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}
