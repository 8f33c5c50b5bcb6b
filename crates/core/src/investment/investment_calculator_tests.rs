// Test cases for the investment scenario calculator.
#[cfg(test)]
mod tests {
    use crate::captable::CapTableRow;
    use crate::constants::OWNERSHIP_SUM_TOLERANCE;
    use crate::errors::{Error, ScenarioError};
    use crate::investment::{dilution_schedule, plan_investment, InvestmentMode};
    use crate::share_classes::ShareClassKind;
    use crate::shareholders::ShareholderRole;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    // --- Helper Functions ---

    fn create_row(id: &str, shares: Decimal, ownership: Decimal) -> CapTableRow {
        CapTableRow {
            shareholder_id: id.to_string(),
            shareholder_name: format!("Holder {}", id),
            role: ShareholderRole::Founder,
            shares,
            ownership_percentage: ownership,
            investment: Decimal::ZERO,
            share_class: "Common".to_string(),
            share_class_kind: ShareClassKind::Common,
            preference_multiplier: None,
            price_per_share: Decimal::ZERO,
        }
    }

    fn tolerance() -> Decimal {
        Decimal::from_str(OWNERSHIP_SUM_TOLERANCE).unwrap()
    }

    // --- Tests ---

    #[test]
    fn test_plan_by_amount() {
        let plan = plan_investment(
            dec!(9000000),
            InvestmentMode::Amount,
            dec!(1000000),
            dec!(10000000),
        )
        .unwrap();

        assert_eq!(plan.investment_amount, dec!(1000000));
        assert_eq!(plan.ownership_percentage, dec!(10));
        assert_eq!(plan.new_shares, dec!(1000000));
        assert_eq!(plan.total_shares_after_round, dec!(10000000));
        assert_eq!(plan.share_price, dec!(1));
        assert_eq!(plan.pre_money_valuation, dec!(9000000));
    }

    #[test]
    fn test_plan_by_percentage() {
        let plan = plan_investment(
            dec!(9000000),
            InvestmentMode::Percentage,
            dec!(10),
            dec!(10000000),
        )
        .unwrap();

        assert_eq!(plan.investment_amount, dec!(1000000));
        assert_eq!(plan.ownership_percentage, dec!(10));
        assert_eq!(plan.new_shares, dec!(1000000));
    }

    #[test]
    fn test_amount_and_percentage_modes_are_inverses() {
        let by_amount = plan_investment(
            dec!(8000000),
            InvestmentMode::Amount,
            dec!(2500000),
            dec!(12500000),
        )
        .unwrap();

        let by_percentage = plan_investment(
            dec!(8000000),
            InvestmentMode::Percentage,
            by_amount.ownership_percentage,
            dec!(12500000),
        )
        .unwrap();

        assert!((by_percentage.investment_amount - dec!(2500000)).abs() <= tolerance());
        assert!((by_percentage.new_shares - by_amount.new_shares).abs() <= tolerance());
    }

    #[test]
    fn test_zero_raise_is_a_no_op_plan() {
        let plan =
            plan_investment(dec!(5000000), InvestmentMode::Amount, dec!(0), dec!(0)).unwrap();
        assert_eq!(plan.new_shares, Decimal::ZERO);
        assert_eq!(plan.ownership_percentage, Decimal::ZERO);
        assert_eq!(plan.share_price, Decimal::ZERO);
        assert_eq!(plan.total_shares_after_round, dec!(5000000));
    }

    #[test]
    fn test_full_buyout_percentage_is_rejected() {
        let err = plan_investment(
            dec!(9000000),
            InvestmentMode::Percentage,
            dec!(100),
            dec!(10000000),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Scenario(ScenarioError::OwnershipOutOfRange(_))
        ));
    }

    #[test]
    fn test_amount_equal_to_valuation_is_rejected() {
        // 10M raised at a 10M post-money is 100% ownership
        let err = plan_investment(
            dec!(9000000),
            InvestmentMode::Amount,
            dec!(10000000),
            dec!(10000000),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Scenario(ScenarioError::OwnershipOutOfRange(_))
        ));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let err = plan_investment(
            dec!(9000000),
            InvestmentMode::Amount,
            dec!(-1),
            dec!(10000000),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Scenario(ScenarioError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_positive_raise_needs_positive_valuation() {
        let err =
            plan_investment(dec!(9000000), InvestmentMode::Amount, dec!(1000000), dec!(0))
                .unwrap_err();
        assert!(matches!(
            err,
            Error::Scenario(ScenarioError::NonPositiveValuation(_))
        ));
    }

    #[test]
    fn test_dilution_is_never_negative() {
        let rows = vec![
            create_row("sh-1", dec!(6000000), dec!(60)),
            create_row("sh-2", dec!(3000000), dec!(30)),
            create_row("sh-3", dec!(1000000), dec!(10)),
        ];
        let plan = plan_investment(
            dec!(10000000),
            InvestmentMode::Percentage,
            dec!(20),
            dec!(25000000),
        )
        .unwrap();

        let schedule = dilution_schedule(&rows, &plan);
        assert_eq!(schedule.len(), 3);
        for row in &schedule {
            assert!(row.dilution >= Decimal::ZERO, "negative dilution for {}", row.shareholder_id);
            assert!(row.new_ownership < row.previous_ownership);
        }
    }

    #[test]
    fn test_post_round_ownership_sums_to_one_hundred() {
        let rows = vec![
            create_row("sh-1", dec!(6000000), dec!(60)),
            create_row("sh-2", dec!(3000000), dec!(30)),
            create_row("sh-3", dec!(1000000), dec!(10)),
        ];
        let plan = plan_investment(
            dec!(10000000),
            InvestmentMode::Amount,
            dec!(3000000),
            dec!(15000000),
        )
        .unwrap();

        let schedule = dilution_schedule(&rows, &plan);
        let existing_total: Decimal = schedule.iter().map(|r| r.new_ownership).sum();
        let total = existing_total + plan.ownership_percentage;
        assert!((total - dec!(100)).abs() <= tolerance());
    }

    #[test]
    fn test_dilution_of_empty_table_is_empty() {
        let plan = plan_investment(
            dec!(0),
            InvestmentMode::Percentage,
            dec!(10),
            dec!(1000000),
        )
        .unwrap();
        // No existing shares: the formula yields zero new shares as well
        assert_eq!(plan.new_shares, Decimal::ZERO);
        assert!(dilution_schedule(&[], &plan).is_empty());
    }

    proptest! {
        /// Planning by amount then re-planning by the derived percentage
        /// reproduces the amount, and vice versa.
        #[test]
        fn prop_modes_are_inverses(
            amount in 1u64..9_000_000,
            post_money in 10_000_000u64..500_000_000,
            current_shares in 1_000u64..100_000_000,
        ) {
            let by_amount = plan_investment(
                Decimal::from(current_shares),
                InvestmentMode::Amount,
                Decimal::from(amount),
                Decimal::from(post_money),
            )
            .unwrap();
            let by_percentage = plan_investment(
                Decimal::from(current_shares),
                InvestmentMode::Percentage,
                by_amount.ownership_percentage,
                Decimal::from(post_money),
            )
            .unwrap();

            prop_assert!(
                (by_percentage.investment_amount - Decimal::from(amount)).abs() <= tolerance()
            );
        }

        /// Any positive issuance dilutes every existing holder, never the
        /// other way around.
        #[test]
        fn prop_dilution_is_non_negative(
            shares in prop::collection::vec(1u64..1_000_000_000, 1..10),
            sold_percentage in 1u64..100,
        ) {
            let total: Decimal = shares.iter().map(|s| Decimal::from(*s)).sum();
            let rows: Vec<_> = shares
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let held = Decimal::from(*s);
                    create_row(&format!("sh-{}", i), held, held / total * dec!(100))
                })
                .collect();
            let plan = plan_investment(
                total,
                InvestmentMode::Percentage,
                Decimal::from(sold_percentage),
                dec!(50000000),
            )
            .unwrap();

            for row in dilution_schedule(&rows, &plan) {
                prop_assert!(row.dilution >= Decimal::ZERO);
            }
        }
    }
}
