// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use backoffice::errors::Error;
use backoffice::models::{Entry, ExpenseCategory, SaleChannel};
use backoffice::vat;
use rust_decimal::Decimal;

#[test]
fn split_reduced_rate_sale() {
    let split = vat::split_gross(Decimal::new(113, 0), Decimal::new(13, 0));
    assert_eq!(format!("{:.2}", split.net), "100.00");
    assert_eq!(format!("{:.2}", split.vat_amount), "13.00");
}

#[test]
fn split_rounds_to_cents() {
    // 10 / 1.24 = 8.0645... -> 8.06, VAT 1.94
    let split = vat::split_gross(Decimal::new(10, 0), Decimal::new(24, 0));
    assert_eq!(split.net, Decimal::new(806, 2));
    assert_eq!(split.vat_amount, Decimal::new(194, 2));
}

#[test]
fn zero_rate_keeps_gross_as_net() {
    let split = vat::split_gross(Decimal::new(4250, 2), Decimal::ZERO);
    assert_eq!(split.net, Decimal::new(4250, 2));
    assert!(split.vat_amount.is_zero());
}

#[test]
fn net_plus_vat_stays_within_a_cent_of_gross() {
    let one_cent = Decimal::new(1, 2);
    for cents in [1_i64, 7, 99, 1_00, 12_34, 113_00, 999_99, 12_345_67] {
        let gross = Decimal::new(cents, 2);
        for rate in 0..=24 {
            let rate = Decimal::from(rate);
            let split = vat::split_gross(gross, rate);
            let expected_net = (gross / (Decimal::ONE + rate / Decimal::ONE_HUNDRED)).round_dp(2);
            assert_eq!(split.net, expected_net, "gross {} rate {}", gross, rate);
            assert!(
                (split.net + split.vat_amount - gross).abs() <= one_cent,
                "gross {} rate {} gave {} + {}",
                gross,
                rate,
                split.net,
                split.vat_amount
            );
        }
    }
}

#[test]
fn default_rate_depends_on_channel() {
    let sale = |channel| Entry::Sale { channel };
    assert_eq!(vat::default_rate(&sale(SaleChannel::DineIn)), Decimal::new(13, 0));
    assert_eq!(vat::default_rate(&sale(SaleChannel::Takeaway)), Decimal::new(13, 0));
    assert_eq!(vat::default_rate(&sale(SaleChannel::Delivery)), Decimal::new(24, 0));

    let expense = Entry::Expense {
        category: ExpenseCategory::CostOfProducts,
        source: "Bakery".into(),
    };
    assert_eq!(vat::default_rate(&expense), Decimal::new(24, 0));
}

#[test]
fn override_must_stay_within_bounds() {
    let entry = Entry::Sale {
        channel: SaleChannel::DineIn,
    };
    assert_eq!(
        vat::resolve_rate(&entry, Some(Decimal::new(6, 0))).unwrap(),
        Decimal::new(6, 0)
    );
    assert_eq!(
        vat::resolve_rate(&entry, Some(Decimal::new(24, 0))).unwrap(),
        Decimal::new(24, 0)
    );
    assert!(matches!(
        vat::resolve_rate(&entry, Some(Decimal::new(25, 0))),
        Err(Error::VatRateOutOfRange(_))
    ));
    assert!(matches!(
        vat::resolve_rate(&entry, Some(Decimal::new(-1, 0))),
        Err(Error::VatRateOutOfRange(_))
    ));
}
