//! Ledger construction from lease terms

use rust_decimal::Decimal;
use tracing::debug;

use core_kernel::{RentalId, YearMonth};
use domain_rental::{PriceLookup, RentalTerms};

use crate::error::ReceiptError;
use crate::ledger::{Ledger, MonthLedger};
use crate::propagator::recalculate;

/// Builds the receipt ledger of `year` for a rental
///
/// For every month the rent and charges are resolved through `pricing` at
/// that month, or at the lease start month for months before the lease
/// begins. Each month gets one opening payment line; the result is already
/// recalculated.
///
/// `is_rent_changed` and `is_after_rent_period` compare month ordinals only:
/// a lease starting in June flags June as changed and July to December as
/// after the rent period, whatever the ledger year.
///
/// # Errors
///
/// - `InvalidLeaseDate` if the start or end date is not `dd/mm/yyyy`
/// - `PriceNotFound` if a schedule has no entry effective for a month
pub fn build_ledger(
    rental_id: RentalId,
    terms: &RentalTerms,
    month_labels: &[String; 12],
    year: i32,
    pricing: &dyn PriceLookup,
) -> Result<Ledger, ReceiptError> {
    let lease = terms
        .lease_period()
        .map_err(|e| ReceiptError::InvalidLeaseDate(e.to_string()))?;
    let start = lease.start_month();

    let mut prices = [(Decimal::ZERO, Decimal::ZERO); 12];
    for (slot, period) in prices.iter_mut().zip(YearMonth::months_of(year)) {
        let priced_at = period.max(start);
        let rent = pricing.price_at(&terms.rent_schedule, priced_at)?;
        let charges = pricing.price_at(&terms.charges_schedule, priced_at)?;
        *slot = (rent, charges);
    }

    let months = std::array::from_fn(|index| {
        let month = index as u32 + 1;
        let (rent, charges) = prices[index];
        MonthLedger::new(
            month,
            month_labels[index].clone(),
            month == start.month(),
            month > start.month(),
            rent,
            charges,
        )
    });

    debug!(
        rental_id = %rental_id,
        year,
        start_month = start.month(),
        "receipt ledger built"
    );

    recalculate(&Ledger::new(rental_id, year, months))
}
