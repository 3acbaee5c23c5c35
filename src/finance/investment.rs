use super::Trajectory;

/// 투자 잔액 추정 입력.
#[derive(Debug, Clone, Copy)]
pub struct InvestmentInput {
    /// 초기 투자 원금
    pub principal: f64,
    /// 월 수익률(소수)
    pub monthly_rate: f64,
    /// 기간 [개월]
    pub months: u32,
    /// 매월 인출액. None이면 인출 없음.
    pub withdrawal: Option<f64>,
}

/// 투자 잔액 추정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub final_balance: f64,
    pub trajectory: Trajectory,
}

/// 매월 이자를 먼저 붙이고 인출액을 뺀 잔액을 기록한다.
///
/// 인출액은 그 달 이자 계산에 들어가지 않는다. 잔액이 음수가 되어도 그대로 둔다.
pub fn project_investment(input: InvestmentInput) -> Projection {
    let mut balance = input.principal;
    let mut balances = Vec::with_capacity(input.months as usize);
    for _ in 0..input.months {
        balance += balance * input.monthly_rate;
        if let Some(w) = input.withdrawal {
            balance -= w;
        }
        balances.push(balance);
    }
    Projection {
        final_balance: balance,
        trajectory: Trajectory::from_balances(balances),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_months_keeps_principal() {
        let res = project_investment(InvestmentInput {
            principal: 500.0,
            monthly_rate: 0.01,
            months: 0,
            withdrawal: Some(10.0),
        });
        assert_eq!(res.final_balance, 500.0);
        assert!(res.trajectory.is_empty());
    }

    #[test]
    fn growth_applies_before_withdrawal() {
        let res = project_investment(InvestmentInput {
            principal: 0.0,
            monthly_rate: 0.01,
            months: 3,
            withdrawal: Some(100.0),
        });
        let expected = [-100.0, -201.0, -303.01];
        for (got, want) in res.trajectory.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got={got} want={want}");
        }
    }

    #[test]
    fn zero_withdrawal_matches_none() {
        let base = InvestmentInput {
            principal: 1_000.0,
            monthly_rate: 0.005,
            months: 24,
            withdrawal: None,
        };
        let with_zero = InvestmentInput {
            withdrawal: Some(0.0),
            ..base
        };
        assert_eq!(project_investment(base), project_investment(with_zero));
    }

    #[test]
    fn trajectory_ends_at_final_balance() {
        let res = project_investment(InvestmentInput {
            principal: 14_000.0,
            monthly_rate: 0.008,
            months: 36,
            withdrawal: None,
        });
        assert_eq!(res.trajectory.len(), 36);
        assert_eq!(res.trajectory.last(), Some(res.final_balance));
    }
}
