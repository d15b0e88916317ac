//! Receipt-batch total calculation.
//!
//! The boletas tool multiplies a per-receipt amount by the number of receipts
//! issued. Trivial arithmetic, but it goes through `Decimal` like every other
//! monetary figure so batch totals never pick up float error.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ReceiptsResult;

/// Calculates the total of a batch of equal-amount receipts.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the per-receipt amount is
/// negative.
///
/// # Example
///
/// ```
/// use toolbox_engine::calculation::calculate_receipts_total;
/// use rust_decimal::Decimal;
///
/// let result = calculate_receipts_total(Decimal::new(15_500, 0), 12).unwrap();
/// assert_eq!(result.total, Decimal::new(186_000, 0));
/// ```
pub fn calculate_receipts_total(
    amount_per_receipt: Decimal,
    count: u32,
) -> EngineResult<ReceiptsResult> {
    if amount_per_receipt < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "amount_per_receipt",
            "must not be negative",
        ));
    }

    Ok(ReceiptsResult {
        amount_per_receipt,
        count,
        total: amount_per_receipt * Decimal::from(count),
    })
}
