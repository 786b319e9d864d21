/// Property-based checks over generated donation and milestone plans
#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::utils::constants::{COIN, CREATOR_BALANCE, DONOR_BALANCE};
    use crate::utils::*;
    use fact_fund::constants::{CREATION_FEE, MAX_MILESTONES, MIN_VOTE_DONATION};
    use fact_fund::testutils::FundFixture;
    use fact_fund::voting::vote_weight;
    use fact_fund::Error;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const DONOR_SLOTS: usize = 4;

    /// One to five milestones of 1..=20 whole coins each.
    fn milestone_amounts() -> impl Strategy<Value = Vec<i128>> {
        prop::collection::vec(1i128..=20, 1..=MAX_MILESTONES as usize)
            .prop_map(|coins| coins.into_iter().map(|c| c * COIN).collect())
    }

    /// Up to twelve donations of 0.1..=50 coins, each from one of a few donors.
    fn donation_plan() -> impl Strategy<Value = Vec<(usize, i128)>> {
        prop::collection::vec((0..DONOR_SLOTS, 1i128..=500), 0..12).prop_map(|plan| {
            plan.into_iter()
                .map(|(slot, tenths)| (slot, tenths * COIN / 10))
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: escrow accounting matches a model of accepted donations,
        /// and an expired milestone never pays out more than was left unraised.
        #[test]
        fn prop_donations_and_refunds_conserve_escrow(
            milestones in milestone_amounts(),
            donations in donation_plan(),
        ) {
            let goal: i128 = milestones.iter().sum();
            let f = FundFixture::new();
            let campaign = open_campaign(&f, &milestones);
            let donors: Vec<_> = (0..DONOR_SLOTS).map(|_| f.account(DONOR_BALANCE)).collect();

            let mut raised = 0i128;
            let mut accepted = 0u64;
            let mut totals: BTreeMap<usize, i128> = BTreeMap::new();
            for (slot, amount) in &donations {
                let result = f
                    .client
                    .try_donate_proposal(&donors[*slot], &campaign.id, amount);
                if raised >= goal {
                    assert_contract_error!(result, Error::GoalAlreadyReached);
                    continue;
                }
                assert_success!(result);
                raised += amount;
                accepted += 1;
                *totals.entry(*slot).or_insert(0) += amount;
            }

            let p = f.client.get_proposal(&campaign.id).unwrap();
            prop_assert_eq!(p.amount_raised, raised);
            prop_assert_eq!(p.no_of_donations, accepted);
            prop_assert_eq!(p.no_of_unique_donors, totals.len() as u64);
            for (slot, total) in &totals {
                prop_assert_eq!(
                    f.client.get_donation(&campaign.id, &donors[*slot]),
                    Some(*total)
                );
            }
            prop_assert_eq!(
                f.client.list_donors(&campaign.id, &0, &10).len() as usize,
                totals.len()
            );
            prop_assert_eq!(f.contract_balance(), CREATION_FEE + raised);

            let expected = if raised >= goal {
                prove(&f, &campaign, "https://proof.example/prop");
                Error::NothingToRefund
            } else {
                Error::ProofNotSubmitted
            };
            expire(&f);
            for (slot, total) in &totals {
                assert_contract_error!(
                    f.client.try_refund_if_inactive(&donors[*slot], &campaign.id),
                    expected
                );
                prop_assert_eq!(
                    f.client.get_donation(&campaign.id, &donors[*slot]),
                    Some(*total)
                );
            }
            prop_assert_eq!(f.contract_balance(), CREATION_FEE + raised);
            prop_assert_eq!(held(&f, &campaign), raised);
        }

        /// Property: a plan is accepted exactly when it has 1..=5 positive
        /// milestones summing to the goal, and a rejected plan charges nothing.
        #[test]
        fn prop_milestone_plans_must_sum_to_goal(
            amounts in prop::collection::vec(-5i128..=50, 0..=7),
            exact_goal in any::<bool>(),
            skew in -3i128..=3,
        ) {
            let sum: i128 = amounts.iter().sum();
            let goal = if exact_goal { sum } else { sum + skew };
            let valid = !amounts.is_empty()
                && amounts.len() <= MAX_MILESTONES as usize
                && amounts.iter().all(|a| *a > 0)
                && goal == sum;

            let f = FundFixture::new();
            let creator = f.account(CREATOR_BALANCE);
            let result = f.client.try_create_proposal(
                &creator,
                &f.text("Prop"),
                &f.text("Generated plan"),
                &f.text("Generated milestone plan"),
                &f.text("Testing"),
                &goal,
                &f.plan(&amounts),
                &CREATION_FEE,
            );
            prop_assert_eq!(result.is_ok(), valid);
            if valid {
                prop_assert_eq!(f.balance(&creator), CREATOR_BALANCE - CREATION_FEE);
                prop_assert_eq!(f.client.get_proposal_count(), 1);
            } else {
                prop_assert_eq!(f.balance(&creator), CREATOR_BALANCE);
                prop_assert_eq!(f.client.get_proposal_count(), 0);
            }
        }
    }

    proptest! {
        /// Property: weight is the floor square root of whole coins, and zero
        /// weight below the voting threshold.
        #[test]
        fn prop_vote_weight_is_floor_sqrt(donated in 0i128..1_000_000 * COIN) {
            if donated < MIN_VOTE_DONATION {
                prop_assert_eq!(vote_weight(donated), Err(Error::InsufficientDonation));
            } else {
                let w = vote_weight(donated).unwrap() as u128;
                let coins = (donated / COIN) as u128;
                prop_assert!(w * w <= coins && coins < (w + 1) * (w + 1));
                assert_in_range!(w, 1, 1_000);
            }
        }

        /// Property: giving more never lowers a donor's weight.
        #[test]
        fn prop_vote_weight_is_monotonic(
            a in MIN_VOTE_DONATION..1_000_000 * COIN,
            b in MIN_VOTE_DONATION..1_000_000 * COIN,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(vote_weight(low).unwrap() <= vote_weight(high).unwrap());
        }
    }
}
