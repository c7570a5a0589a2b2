//! The two billing policies, pinned independently so an integrator can
//! pick whichever matches the intended business rule.

use numera_tariff::{
    applicable_tier, breakdown, cost_for_quantity, BillingPolicy, RateTier,
};

fn residential_tiers() -> Vec<RateTier> {
    vec![
        RateTier::new(0.0, Some(99.0), 0.192553),
        RateTier::new(100.0, Some(199.0), 0.192662),
        RateTier::new(200.0, None, 0.190757),
    ]
}

#[test]
fn test_marginal_cost_of_150_units() {
    // first 99 units at tier 1, remaining 51 at tier 2
    let quote = cost_for_quantity(&residential_tiers(), 150.0, BillingPolicy::Marginal);
    let expected = 99.0 * 0.192553 + 51.0 * 0.192662;
    assert!((quote.cost - expected).abs() < 1e-9);
    assert!(quote.priced);
}

#[test]
fn test_single_bracket_cost_of_150_units() {
    // the whole 150 is billed at tier 2's rate
    let quote = cost_for_quantity(&residential_tiers(), 150.0, BillingPolicy::SingleBracket);
    assert!((quote.cost - 150.0 * 0.192662).abs() < 1e-9);
    assert!(quote.priced);
}

#[test]
fn test_policies_disagree_on_the_same_input() {
    let marginal = cost_for_quantity(&residential_tiers(), 150.0, BillingPolicy::Marginal);
    let single = cost_for_quantity(&residential_tiers(), 150.0, BillingPolicy::SingleBracket);
    assert!((marginal.cost - single.cost).abs() > 1e-3);
}

#[test]
fn test_marginal_spills_into_unbounded_tier() {
    let quote = cost_for_quantity(&residential_tiers(), 500.0, BillingPolicy::Marginal);
    let expected = 99.0 * 0.192553 + 99.0 * 0.192662 + 302.0 * 0.190757;
    assert!((quote.cost - expected).abs() < 1e-9);
    assert!(quote.priced);
}

#[test]
fn test_zero_quantity() {
    let marginal = cost_for_quantity(&residential_tiers(), 0.0, BillingPolicy::Marginal);
    assert_eq!(marginal.cost, 0.0);
    assert!(marginal.priced);

    let single = cost_for_quantity(&residential_tiers(), 0.0, BillingPolicy::SingleBracket);
    assert_eq!(single.cost, 0.0);
    assert!(single.priced);
}

#[test]
fn test_single_bracket_with_no_applicable_tier() {
    // schedule starts at 100: a total of 50 falls in no bracket
    let tiers = vec![RateTier::new(100.0, Some(199.0), 0.2)];
    let quote = cost_for_quantity(&tiers, 50.0, BillingPolicy::SingleBracket);
    assert_eq!(quote.cost, 0.0);
    assert!(!quote.priced);
    assert!(applicable_tier(&tiers, 50.0).is_none());
}

#[test]
fn test_marginal_with_exhausted_schedule() {
    // bounded-only schedule covers 198 units; the rest goes unbilled
    let tiers = vec![
        RateTier::new(0.0, Some(99.0), 0.1),
        RateTier::new(100.0, Some(199.0), 0.2),
    ];
    let quote = cost_for_quantity(&tiers, 500.0, BillingPolicy::Marginal);
    let expected = 99.0 * 0.1 + 99.0 * 0.2;
    assert!((quote.cost - expected).abs() < 1e-9);
    assert!(!quote.priced);
}

#[test]
fn test_empty_table() {
    let marginal = cost_for_quantity(&[], 100.0, BillingPolicy::Marginal);
    assert_eq!(marginal.cost, 0.0);
    assert!(!marginal.priced);

    let single = cost_for_quantity(&[], 100.0, BillingPolicy::SingleBracket);
    assert_eq!(single.cost, 0.0);
    assert!(!single.priced);
}

#[test]
fn test_unsorted_input_is_normalized() {
    let mut tiers = residential_tiers();
    tiers.reverse();
    let sorted = cost_for_quantity(&tiers, 150.0, BillingPolicy::Marginal);
    let reference = cost_for_quantity(&residential_tiers(), 150.0, BillingPolicy::Marginal);
    assert_eq!(sorted.cost, reference.cost);
}

#[test]
fn test_overlapping_tiers_do_not_crash() {
    let tiers = vec![
        RateTier::new(0.0, Some(150.0), 0.1),
        RateTier::new(100.0, Some(250.0), 0.2),
    ];
    let marginal = cost_for_quantity(&tiers, 200.0, BillingPolicy::Marginal);
    // widths are consumed in sorted order: 150 at 0.1, then 50 at 0.2
    assert!((marginal.cost - (150.0 * 0.1 + 50.0 * 0.2)).abs() < 1e-9);

    // containment picks the first sorted match
    let single = cost_for_quantity(&tiers, 120.0, BillingPolicy::SingleBracket);
    assert!((single.cost - 120.0 * 0.1).abs() < 1e-9);
}

#[test]
fn test_gapped_tiers_do_not_strand_quantity_under_marginal() {
    let tiers = vec![
        RateTier::new(0.0, Some(50.0), 0.1),
        RateTier::new(80.0, Some(130.0), 0.2),
    ];
    // widths 50 + 50 cover a quantity of 100 in full
    let quote = cost_for_quantity(&tiers, 100.0, BillingPolicy::Marginal);
    assert!((quote.cost - (50.0 * 0.1 + 50.0 * 0.2)).abs() < 1e-9);
    assert!(quote.priced);
}

#[test]
fn test_gapped_tiers_under_single_bracket() {
    let tiers = vec![
        RateTier::new(0.0, Some(50.0), 0.1),
        RateTier::new(80.0, Some(130.0), 0.2),
    ];
    // 65 falls into the gap: unpriced
    let quote = cost_for_quantity(&tiers, 65.0, BillingPolicy::SingleBracket);
    assert_eq!(quote.cost, 0.0);
    assert!(!quote.priced);
}

#[test]
fn test_breakdown_lines() {
    let lines = breakdown(&residential_tiers(), 150.0, BillingPolicy::Marginal);
    assert_eq!(lines.len(), 2);
    assert!((lines[0].consumed - 99.0).abs() < 1e-9);
    assert!((lines[1].consumed - 51.0).abs() < 1e-9);
    assert!((lines[0].cost - 99.0 * 0.192553).abs() < 1e-9);

    let lines = breakdown(&residential_tiers(), 150.0, BillingPolicy::SingleBracket);
    assert_eq!(lines.len(), 1);
    assert!((lines[0].consumed - 150.0).abs() < 1e-9);
}

#[test]
fn test_tier_json_round_trip() {
    // the unbounded upper bound is a JSON null, as the UI tables store it
    let tiers = residential_tiers();
    let json = serde_json::to_string(&tiers).unwrap();
    assert!(json.contains("\"to\":null"));
    let back: Vec<RateTier> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tiers);
}
