//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{PropertyId, RentalId, TenantId};
use domain_rental::{LatestEffectivePrice, PriceSchedule, Rental, RentalTerms};
use domain_receipt::{add_payment_line, apply_edit, build_ledger, Ledger, LedgerEdit, ReceiptError};

use crate::fixtures::{date, LabelFixtures};

/// Builder for rental records
pub struct TestRentalBuilder {
    property_id: PropertyId,
    tenant_id: TenantId,
    start: (i32, u32),
    end_date: Option<String>,
    rent: Decimal,
    charges: Decimal,
    deposit: Decimal,
}

impl Default for TestRentalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRentalBuilder {
    /// Creates a builder for a June 2024 lease at 800 + 50
    pub fn new() -> Self {
        Self {
            property_id: PropertyId::new(),
            tenant_id: TenantId::new(),
            start: (2024, 6),
            end_date: None,
            rent: dec!(800),
            charges: dec!(50),
            deposit: Decimal::ZERO,
        }
    }

    pub fn for_property(mut self, id: PropertyId) -> Self {
        self.property_id = id;
        self
    }

    pub fn for_tenant(mut self, id: TenantId) -> Self {
        self.tenant_id = id;
        self
    }

    /// Sets the lease start to the first of `month`
    pub fn starting(mut self, year: i32, month: u32) -> Self {
        self.start = (year, month);
        self
    }

    pub fn ending(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    pub fn with_rent(mut self, rent: Decimal) -> Self {
        self.rent = rent;
        self
    }

    pub fn with_charges(mut self, charges: Decimal) -> Self {
        self.charges = charges;
        self
    }

    pub fn with_deposit(mut self, deposit: Decimal) -> Self {
        self.deposit = deposit;
        self
    }

    pub fn terms(&self) -> RentalTerms {
        let (year, month) = self.start;
        let from = date(year, month, 1);
        let terms = RentalTerms::new(format!("01/{:02}/{}", month, year))
            .with_rent(PriceSchedule::starting(from, self.rent))
            .with_charges(PriceSchedule::starting(from, self.charges));
        match &self.end_date {
            Some(end) => terms.with_end_date(end.clone()),
            None => terms,
        }
    }

    pub fn build(self) -> Rental {
        Rental::new(self.property_id, self.tenant_id, self.terms()).with_deposit(self.deposit)
    }
}

/// Builder for ledgers with edits already applied
///
/// Edits are applied in the order they were added, through the same editor
/// functions the application uses.
pub struct TestLedgerBuilder {
    terms: RentalTerms,
    year: i32,
    steps: Vec<Step>,
}

enum Step {
    AddLine(usize),
    Edit(usize, LedgerEdit),
}

impl TestLedgerBuilder {
    pub fn new(terms: RentalTerms) -> Self {
        Self { terms, year: 2024, steps: Vec::new() }
    }

    pub fn for_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Records a payment on `line` of the month at `month_index`
    pub fn paid(mut self, month_index: usize, line: usize, amount: Decimal) -> Self {
        self.steps.push(Step::Edit(
            month_index,
            LedgerEdit::SetPayment { line, value: amount.to_string() },
        ));
        self
    }

    pub fn with_fees(mut self, month_index: usize, fees: Decimal) -> Self {
        self.steps.push(Step::Edit(month_index, LedgerEdit::SetMiscFees(fees.to_string())));
        self
    }

    pub fn with_extra_line(mut self, month_index: usize) -> Self {
        self.steps.push(Step::AddLine(month_index));
        self
    }

    pub fn try_build(self) -> Result<Ledger, ReceiptError> {
        let labels = LabelFixtures::english();
        let mut ledger = build_ledger(RentalId::new(), &self.terms, &labels, self.year, &LatestEffectivePrice)?;
        for step in self.steps {
            ledger = match step {
                Step::AddLine(month_index) => add_payment_line(&ledger, month_index)?,
                Step::Edit(month_index, edit) => apply_edit(&ledger, month_index, edit)?,
            };
        }
        Ok(ledger)
    }

    /// Builds the ledger, panicking on any rejected step
    pub fn build(self) -> Ledger {
        match self.try_build() {
            Ok(ledger) => ledger,
            Err(err) => panic!("test ledger could not be built: {}", err),
        }
    }
}
