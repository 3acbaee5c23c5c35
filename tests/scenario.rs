//! 일시불/할부 비교 회귀 테스트. 기본 입력값(140.000 / 70.000 / 36개월)을 기준으로 한다.
use financing_simulator::currency::CurrencyPreset;
use financing_simulator::finance::{
    financing::installment, project_investment, rates::monthly_from_annual, simulate,
    InvestmentInput, SimulationInput, Verdict,
};
use financing_simulator::input::TextInputs;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn default_input() -> SimulationInput {
    SimulationInput {
        total_price: 140_000.0,
        down_payment: 70_000.0,
        financing_rate: 0.0,
        months: 36,
        cash_discount: 0.10,
        annual_yield: 0.10,
    }
}

#[test]
fn default_form_end_to_end() {
    let res = simulate(&default_input());
    assert_close("monthly yield", res.monthly_yield, 0.007_974_14, 1e-8);
    assert_close("cash price", res.cash_price, 126_000.0, 1e-6);
    assert_close("cash cost", res.cash.cost_total, 126_000.0, 1e-6);
    assert_close("installment", res.installment, 1_944.44, 0.005);
    // 반올림한 납입액(1.944,44)으로 계산하면 139.999,84
    assert_close("financed cost", res.financed.cost_total, 140_000.0, 0.5);
    assert_close(
        "financed cost vs installments",
        res.financed.cost_total,
        res.installment * 36.0 + 70_000.0,
        1e-9,
    );
    assert_close("cash final", res.cash.final_balance, 18_634.00, 0.01);
    assert_close("financed final", res.financed.final_balance, 12_457.71, 0.01);
    assert_eq!(res.verdict, Verdict::Cash);
    assert_eq!(res.cash.trajectory.len(), 36);
    assert_eq!(res.financed.trajectory.len(), 36);
}

#[test]
fn same_inputs_same_verdict() {
    let a = simulate(&default_input());
    let b = simulate(&default_input());
    assert_eq!(a, b);
}

#[test]
fn text_form_matches_numeric_input() {
    let fmt = CurrencyPreset::Brl.format();
    let inputs = TextInputs {
        total_price: "R$ 140.000,00".into(),
        down_payment: "R$ 70.000,00".into(),
        financing_rate: "0,0".into(),
        months: 36,
        cash_discount: "10,0".into(),
        annual_yield: "10,0".into(),
    };
    let sim = inputs.to_simulation_input(&fmt).unwrap();
    let from_text = simulate(&sim);
    let direct = simulate(&default_input());
    assert_eq!(from_text.verdict, direct.verdict);
    assert_close(
        "financed final",
        from_text.financed.final_balance,
        direct.financed.final_balance,
        1e-6,
    );
}

#[test]
fn expensive_financing_loses() {
    let res = simulate(&SimulationInput {
        financing_rate: 0.02,
        cash_discount: 0.0,
        ..default_input()
    });
    assert_eq!(res.verdict, Verdict::Cash);
    assert!(res.financed.cost_total > 140_000.0);
}

#[test]
fn free_financing_without_discount_wins() {
    // 할인 0이면 일시불 쪽 투자 원금이 0이라 잔액 0, 무이자 할부는 양수로 남는다.
    let res = simulate(&SimulationInput {
        cash_discount: 0.0,
        ..default_input()
    });
    assert_eq!(res.cash.final_balance, 0.0);
    assert!(res.financed.final_balance > 0.0);
    assert_eq!(res.verdict, Verdict::Financing);
}

#[test]
fn installment_converges_to_straight_line() {
    let principal = 70_000.0;
    let n = 36;
    let straight = principal / n as f64;
    let mut prev_gap = f64::INFINITY;
    for rate in [1e-2, 1e-4, 1e-6, 1e-8] {
        let gap = (installment(principal, rate, n) - straight).abs();
        assert!(gap < prev_gap, "rate={rate} gap={gap}");
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3, "gap={prev_gap}");
    assert_eq!(installment(principal, 0.0, n), straight);
}

#[test]
fn zero_growth_keeps_principal_flat() {
    let res = project_investment(InvestmentInput {
        principal: 25_000.0,
        monthly_rate: 0.0,
        months: 24,
        withdrawal: None,
    });
    assert_eq!(res.final_balance, 25_000.0);
    assert!(res.trajectory.iter().all(|b| b == 25_000.0));
}

#[test]
fn withdrawals_from_empty_account_go_negative() {
    let res = project_investment(InvestmentInput {
        principal: 0.0,
        monthly_rate: monthly_from_annual(0.10),
        months: 48,
        withdrawal: Some(500.0),
    });
    let balances = res.trajectory.balances();
    assert!(balances[0] < 0.0);
    for pair in balances.windows(2) {
        assert!(pair[1] < pair[0], "{} !< {}", pair[1], pair[0]);
    }
    assert!(res.final_balance < -500.0 * 48.0);
}
