/// 연 수익률을 복리 기준 동등 월 수익률로 바꾼다: `(1 + annual)^(1/12) - 1`.
pub fn monthly_from_annual(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / 12.0) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_a_year() {
        let m = monthly_from_annual(0.10);
        assert!((m - 0.007_974_140_428_903_764).abs() < 1e-12, "m={m}");
        assert!(((1.0 + m).powi(12) - 1.10).abs() < 1e-12);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(monthly_from_annual(0.0), 0.0);
    }
}
