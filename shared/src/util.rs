/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Sum `price × quantity` over a set of priced lines, without rounding.
///
/// Returns `None` when a line or the running total leaves the `Decimal` range.
pub fn line_total<I>(lines: I) -> Option<rust_decimal::Decimal>
where
    I: IntoIterator<Item = (rust_decimal::Decimal, i64)>,
{
    lines
        .into_iter()
        .try_fold(rust_decimal::Decimal::ZERO, |total, (price, quantity)| {
            total.checked_add(price.checked_mul(rust_decimal::Decimal::from(quantity))?)
        })
}
