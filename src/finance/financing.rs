use serde::Serialize;

/// 할부 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct FinancingInput {
    /// 총 구매가
    pub total_price: f64,
    /// 계약금(입금액). 0 ≤ 계약금 ≤ 총액
    pub down_payment: f64,
    /// 월 이자율(소수)
    pub monthly_rate: f64,
    /// 할부 개월 수. 1 이상이어야 한다 (입력 단계에서 검증).
    pub months: u32,
}

/// 할부 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancingResult {
    /// 월 납입액
    pub installment: f64,
    /// 명목 총지급액 = 납입액 × 개월 + 계약금 (현재가치 할인 없음)
    pub total_cost: f64,
}

/// 원리금 균등 상환 월 납입액. 이율 0이면 원금을 개월 수로 나눈다.
pub fn installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    debug_assert!(months > 0, "term must be validated before calling");
    let n = months as f64;
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    if growth.is_infinite() {
        // 기간이 매우 길면 납입액은 이자분(원금 × 이율)에 수렴한다.
        return principal * monthly_rate;
    }
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// 월 납입액과 명목 총지급액(CET)을 계산한다.
pub fn financing_cost(input: FinancingInput) -> FinancingResult {
    let principal = input.total_price - input.down_payment;
    let installment = installment(principal, input.monthly_rate, input.months);
    FinancingResult {
        installment,
        total_cost: installment * input.months as f64 + input.down_payment,
    }
}
