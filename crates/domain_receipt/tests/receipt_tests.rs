//! Tests for domain_receipt
//!
//! Covers ledger construction, balance propagation across months and lines,
//! payment-line editing, the controller and the receipt store.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{PortError, RentalId};
use domain_rental::LatestEffectivePrice;
use domain_receipt::{
    add_payment_line, apply_edit, build_ledger, delete_payment_line, recalculate, Balance,
    EditOutcome, InMemoryReceiptStore, LedgerController, LedgerEdit, MonthRow, Receipt,
    ReceiptError, ReceiptStorePort,
};
use test_utils::{
    amount_strategy, assert_balance, assert_ledger_consistent, assert_months_unchanged_before,
    edit_sequence_strategy, month_index_strategy, negative_amount_strategy, start_month_strategy,
    LabelFixtures, RecordingNotifier, TermsFixtures, TestLedgerBuilder, TestRentalBuilder,
};

fn controller_for(notifier: Arc<RecordingNotifier>) -> LedgerController {
    LedgerController::open(
        RentalId::new(),
        &TermsFixtures::january_2024(),
        2024,
        &LatestEffectivePrice,
        notifier,
        Arc::new(LabelFixtures::translator()),
    )
    .unwrap()
}

// ============================================================================
// Builder Tests
// ============================================================================

mod builder_tests {
    use super::*;

    #[test]
    fn test_june_lease_flags_months_after_start() {
        let ledger = build_ledger(
            RentalId::new(),
            &TermsFixtures::june_2024(),
            &LabelFixtures::english(),
            2024,
            &LatestEffectivePrice,
        )
        .unwrap();

        for month in ledger.months() {
            assert_eq!(month.is_after_rent_period, month.month > 6, "month {}", month.month);
            assert_eq!(month.is_rent_changed, month.month == 6, "month {}", month.month);
            assert_eq!(month.rent, dec!(800));
            assert_eq!(month.charges, dec!(50));
        }
    }

    #[test]
    fn test_june_lease_display_hides_prices_after_start() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::june_2024()).build();
        let rows = MonthRow::from_ledger(&ledger);

        for row in &rows[..6] {
            assert_eq!(row.rent, "800.00");
            assert_eq!(row.charges, "50.00");
        }
        for row in &rows[6..] {
            assert_eq!(row.rent, "0.00");
            assert_eq!(row.charges, "0.00");
        }
        assert_eq!(rows[0].label, "January");
    }

    #[test]
    fn test_rent_increase_applies_from_effective_month() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::with_rent_increase()).build();
        assert_eq!(ledger.months()[7].rent, dec!(800));
        assert_eq!(ledger.months()[8].rent, dec!(850));
        assert_eq!(ledger.months()[11].first_line().total, dec!(900));
    }

    #[test]
    fn test_fresh_ledger_is_consistent() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::june_2024()).build();
        assert_ledger_consistent(&ledger);
        assert_eq!(ledger.closing_balance(), Balance::Unset);
    }

    #[test]
    fn test_ledger_from_rental_record() {
        let rental = TestRentalBuilder::new()
            .starting(2024, 3)
            .ending("28/02/2025")
            .with_rent(dec!(640))
            .with_charges(dec!(35))
            .build();

        let ledger = build_ledger(rental.id, rental.terms(), &LabelFixtures::english(), 2024, &LatestEffectivePrice).unwrap();

        assert_eq!(ledger.rental_id, rental.id);
        assert!(ledger.months()[2].is_rent_changed);
        assert_eq!(ledger.months()[0].first_line().total, dec!(675));
    }

    #[test]
    fn test_ledger_for_later_year_uses_current_price() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::with_rent_increase())
            .for_year(2025)
            .build();
        assert_eq!(ledger.year, 2025);
        assert_eq!(ledger.months()[0].rent, dec!(850));
    }
}

// ============================================================================
// Propagation Tests
// ============================================================================

mod propagation_tests {
    use super::*;

    #[test]
    fn test_full_payment_leaves_zero_balance() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(0, 0, dec!(850))
            .build();

        assert_eq!(ledger.months()[0].first_line().total, dec!(850));
        assert_balance(&ledger, 0, 0, Balance::Computed(dec!(0)));
        assert_eq!(ledger.months()[1].first_line().previous_balance, dec!(0));
        assert_ledger_consistent(&ledger);
    }

    #[test]
    fn test_overpayment_becomes_credit() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(0, 0, dec!(1000))
            .paid(1, 0, dec!(700))
            .build();

        assert_balance(&ledger, 0, 0, Balance::Computed(dec!(-150)));
        assert_eq!(ledger.months()[1].first_line().total, dec!(700));
        assert_balance(&ledger, 1, 0, Balance::Computed(dec!(0)));
    }

    #[test]
    fn test_unpaid_month_carries_nothing() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(1, 0, dec!(850))
            .build();

        assert_balance(&ledger, 0, 0, Balance::Unset);
        assert_eq!(ledger.months()[1].first_line().previous_balance, Decimal::ZERO);
        assert_balance(&ledger, 1, 0, Balance::Computed(dec!(0)));
    }

    #[test]
    fn test_fees_add_to_first_line_total() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .with_fees(4, dec!(35.5))
            .build();
        assert_eq!(ledger.months()[4].first_line().total, dec!(885.5));
    }

    #[test]
    fn test_additional_line_total_is_the_carried_balance() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(2, 0, dec!(730))
            .with_extra_line(2)
            .with_fees(2, dec!(30))
            .build();

        let march = &ledger.months()[2];
        assert_eq!(march.first_line().total, dec!(880));
        assert_balance(&ledger, 2, 0, Balance::Computed(dec!(150)));
        assert_eq!(march.line(1).unwrap().previous_balance, dec!(150));
        assert_eq!(march.line(1).unwrap().total, dec!(150));
        assert_ledger_consistent(&ledger);
    }

    #[test]
    fn test_settling_additional_line_clears_next_month() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(2, 0, dec!(730))
            .with_extra_line(2)
            .with_fees(2, dec!(30))
            .paid(2, 1, dec!(150))
            .build();

        assert_balance(&ledger, 2, 1, Balance::Computed(dec!(0)));
        assert_eq!(ledger.months()[3].first_line().previous_balance, dec!(0));
        assert_eq!(ledger.months()[3].first_line().total, dec!(850));
    }

    #[test]
    fn test_overflowing_amounts_are_rejected_and_ledger_kept() {
        let huge = "79228162514264337593543950335";
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(0, 0, Decimal::MAX)
            .build();

        let payment = LedgerEdit::SetPayment { line: 0, value: huge.to_string() };
        assert_eq!(apply_edit(&ledger, 1, payment), Err(ReceiptError::AmountOutOfRange(2)));

        let fees = LedgerEdit::SetMiscFees(huge.to_string());
        assert_eq!(apply_edit(&ledger, 5, fees), Err(ReceiptError::AmountOutOfRange(6)));
        assert_ledger_consistent(&ledger);
    }
}

// ============================================================================
// Editor Tests
// ============================================================================

mod editor_tests {
    use super::*;

    #[test]
    fn test_added_line_starts_from_month_balance() {
        let before = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(0, 0, dec!(850))
            .paid(1, 0, dec!(850))
            .paid(2, 0, dec!(730))
            .build();

        let after = add_payment_line(&before, 2).unwrap();
        let march = &after.months()[2];

        assert_eq!(march.line_count(), 2);
        let added = march.line(1).unwrap();
        assert!(added.is_additional_line);
        assert_eq!(added.previous_balance, dec!(120));
        assert_eq!(added.total, dec!(120));
        assert!(added.payment.is_none());
        assert_ledger_consistent(&after);

        let restored = delete_payment_line(&after, 2, 1).unwrap();
        assert_eq!(restored.months()[2], before.months()[2]);
        assert_eq!(restored, before);
    }

    #[test]
    fn test_payment_on_added_line_feeds_next_month() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(0, 0, dec!(500))
            .with_extra_line(0)
            .paid(0, 1, dec!(300))
            .build();

        assert_balance(&ledger, 0, 0, Balance::Computed(dec!(350)));
        assert_balance(&ledger, 0, 1, Balance::Computed(dec!(50)));
        assert_eq!(ledger.months()[1].first_line().previous_balance, dec!(50));
        assert_eq!(ledger.months()[1].first_line().total, dec!(900));
    }

    #[test]
    fn test_deleting_first_line_is_a_no_op() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
            .paid(3, 0, dec!(100))
            .build();
        assert_eq!(delete_payment_line(&ledger, 3, 0), Ok(ledger.clone()));
    }

    #[test]
    fn test_deleting_missing_line_is_out_of_range() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
        assert_eq!(
            delete_payment_line(&ledger, 3, 2),
            Err(ReceiptError::LineOutOfRange { month: 3, line: 2 })
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert_eq!(
            LedgerEdit::from_field("bogus", "1", 0),
            Err(ReceiptError::UnknownField("bogus".to_string()))
        );
    }

    #[test]
    fn test_commentary_and_date_do_not_change_amounts() {
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
        let edited = apply_edit(&ledger, 0, LedgerEdit::SetCommentary { line: 0, text: "cheque".into() }).unwrap();
        let edited = apply_edit(&edited, 0, LedgerEdit::SetDate { line: 0, text: "03/01/2024".into() }).unwrap();

        let line = edited.months()[0].first_line();
        assert_eq!(line.commentary, "cheque");
        assert_eq!(line.date, "03/01/2024");
        assert_eq!(line.total, ledger.months()[0].first_line().total);
    }
}

// ============================================================================
// Controller Tests
// ============================================================================

mod controller_tests {
    use super::*;

    #[test]
    fn test_bogus_field_leaves_ledger_identical() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut controller = controller_for(notifier.clone());
        let before = controller.ledger().clone();

        let outcome = controller.set_field(0, "bogus", "12", 0);

        assert_eq!(outcome, EditOutcome::Rejected(ReceiptError::UnknownField("bogus".to_string())));
        assert_eq!(controller.ledger(), &before);
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(notifier.notices()[0].message, "This field cannot be edited");
    }

    #[test]
    fn test_negative_payment_leaves_ledger_identical() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut controller = controller_for(notifier.clone());
        controller.set_field(0, "payment", "850", 0);
        let before = controller.ledger().clone();

        let outcome = controller.set_field(1, "payment", "-1", 0);

        assert_eq!(outcome.rejection(), Some(&ReceiptError::NegativeAmount(dec!(-1))));
        assert_eq!(controller.ledger(), &before);
    }

    #[test]
    fn test_add_and_delete_through_controller() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut controller = controller_for(notifier.clone());

        assert!(controller.add_payment_line(5).is_applied());
        assert_eq!(controller.rows()[5].lines.len(), 2);
        assert!(controller.rows()[5].lines[1].can_delete);

        assert!(controller.delete_payment_line(5, 1).is_applied());
        assert_eq!(controller.rows()[5].lines.len(), 1);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_month_out_of_range_is_reported() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut controller = controller_for(notifier.clone());

        let outcome = controller.add_payment_line(12);

        assert_eq!(outcome, EditOutcome::Rejected(ReceiptError::MonthOutOfRange(12)));
        assert_eq!(notifier.notices()[0].message, "This month does not exist");
    }
}

// ============================================================================
// Receipt Store Tests
// ============================================================================

mod store_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_update_receipt() {
        let store = InMemoryReceiptStore::new();
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
        let mut receipt = store.add_receipt(Receipt::from_ledger(&ledger)).await.unwrap();

        let paid = apply_edit(&ledger, 0, LedgerEdit::SetPayment { line: 0, value: "850".into() }).unwrap();
        receipt.refresh(&paid);
        store.update_receipt(receipt.clone()).await.unwrap();

        let stored = store.find_receipt(ledger.rental_id, 2024).await.unwrap().unwrap();
        assert_eq!(stored.id, receipt.id);
        assert_eq!(stored.months[0].first_line().payment, Some(dec!(850)));
    }

    #[tokio::test]
    async fn test_second_receipt_for_same_year_conflicts() {
        let store = InMemoryReceiptStore::new();
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
        store.add_receipt(Receipt::from_ledger(&ledger)).await.unwrap();

        let result = store.add_receipt(Receipt::from_ledger(&ledger)).await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_receipt_is_not_found() {
        let store = InMemoryReceiptStore::new();
        let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
        let result = store.update_receipt(Receipt::from_ledger(&ledger)).await;
        assert!(result.unwrap_err().is_not_found());
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn recalculate_is_idempotent(edits in edit_sequence_strategy(20)) {
            let mut ledger = TestLedgerBuilder::new(TermsFixtures::january_2024()).build();
            for (month_index, edit) in edits {
                ledger = apply_edit(&ledger, month_index, edit).unwrap();
            }
            prop_assert_eq!(recalculate(&ledger), Ok(ledger.clone()));
            assert_ledger_consistent(&ledger);
        }

        #[test]
        fn payment_edits_only_shift_later_balances(
            first_payments in prop::collection::vec(amount_strategy(), 12),
            extra_payments in prop::collection::vec(amount_strategy(), 12),
            month_index in month_index_strategy(),
            line in 0usize..2,
            amount in amount_strategy(),
        ) {
            let mut builder = TestLedgerBuilder::new(TermsFixtures::june_2024());
            for index in 0..12 {
                builder = builder
                    .paid(index, 0, first_payments[index])
                    .with_extra_line(index)
                    .paid(index, 1, extra_payments[index]);
            }
            let before = builder.build();

            let edit = LedgerEdit::SetPayment { line, value: amount.to_string() };
            let after = apply_edit(&before, month_index, edit).unwrap();

            assert_months_unchanged_before(&before, &after, month_index);
            assert_ledger_consistent(&after);

            let old_payment = before.months()[month_index].line(line).unwrap().payment.unwrap();
            let delta = old_payment - amount;
            for (index, (was, now)) in before.months().iter().zip(after.months()).enumerate() {
                for (line_index, (was_line, now_line)) in was.lines().zip(now.lines()).enumerate() {
                    let shift = now_line.previous_balance - was_line.previous_balance;
                    if index > month_index || (index == month_index && line_index > line) {
                        prop_assert_eq!(shift, delta, "month {} line {}", index, line_index);
                    } else {
                        prop_assert_eq!(shift, Decimal::ZERO, "month {} line {}", index, line_index);
                    }
                }
            }
        }

        #[test]
        fn months_after_start_are_flagged(start in start_month_strategy()) {
            let ledger = TestLedgerBuilder::new(TermsFixtures::starting(2024, start)).build();
            for month in ledger.months() {
                prop_assert_eq!(month.is_after_rent_period, month.month > start);
                prop_assert_eq!(month.is_rent_changed, month.month == start);
            }
        }

        #[test]
        fn first_line_cannot_be_deleted(
            month_index in month_index_strategy(),
            extra_lines in 0usize..3,
        ) {
            let mut builder = TestLedgerBuilder::new(TermsFixtures::january_2024());
            for _ in 0..extra_lines {
                builder = builder.with_extra_line(month_index);
            }
            let ledger = builder.build();

            let after = delete_payment_line(&ledger, month_index, 0).unwrap();
            prop_assert_eq!(after.months()[month_index].line_count(), extra_lines + 1);
            prop_assert_eq!(after, ledger);
        }

        #[test]
        fn negative_payments_are_rejected(
            month_index in month_index_strategy(),
            amount in negative_amount_strategy(),
        ) {
            let ledger = TestLedgerBuilder::new(TermsFixtures::january_2024())
                .paid(0, 0, dec!(850))
                .build();

            let edit = LedgerEdit::SetPayment { line: 0, value: amount.to_string() };
            let result = apply_edit(&ledger, month_index, edit);
            prop_assert_eq!(result, Err(ReceiptError::NegativeAmount(amount)));
        }
    }
}
