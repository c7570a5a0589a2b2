//! Piecewise cost curves serialized for a graphing host.

use numera_tariff::{normalized, RateTier};

/// The nested conditional expression a graphing host needs to plot the
/// single-bracket cost curve of a rate table:
/// `If[x <= u1, r1*x, If[x <= u2, r2*x, ...]]`.
///
/// Built by folding the sorted tiers from the last one back. The final
/// tier — and any tier with no upper bound, which makes later tiers
/// unreachable — closes the chain as a plain `rate*x`. An empty table has
/// no curve.
pub fn single_rate_curve(tiers: &[RateTier]) -> Option<String> {
    let sorted = normalized(tiers);
    let (last, rest) = sorted.split_last()?;

    let mut curve = format!("{}*x", last.rate);
    for tier in rest.iter().rev() {
        curve = match tier.to {
            Some(upper) => format!("If[x <= {}, {}*x, {}]", upper, tier.rate, curve),
            None => format!("{}*x", tier.rate),
        };
    }
    Some(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tier_curve() {
        let tiers = vec![
            RateTier::new(0.0, Some(99.0), 0.192553),
            RateTier::new(100.0, Some(199.0), 0.192662),
            RateTier::new(200.0, None, 0.190757),
        ];
        assert_eq!(
            single_rate_curve(&tiers).unwrap(),
            "If[x <= 99, 0.192553*x, If[x <= 199, 0.192662*x, 0.190757*x]]"
        );
    }

    #[test]
    fn test_single_tier_curve_is_a_plain_line() {
        let tiers = vec![RateTier::new(0.0, None, 0.5)];
        assert_eq!(single_rate_curve(&tiers).unwrap(), "0.5*x");
    }

    #[test]
    fn test_unbounded_tier_truncates_the_rest() {
        let tiers = vec![
            RateTier::new(0.0, None, 0.1),
            RateTier::new(100.0, Some(199.0), 0.2),
        ];
        assert_eq!(single_rate_curve(&tiers).unwrap(), "0.1*x");
    }

    #[test]
    fn test_empty_table_has_no_curve() {
        assert_eq!(single_rate_curve(&[]), None);
    }

    #[test]
    fn test_curve_sorts_tiers_first() {
        let tiers = vec![
            RateTier::new(100.0, None, 0.2),
            RateTier::new(0.0, Some(99.0), 0.1),
        ];
        assert_eq!(
            single_rate_curve(&tiers).unwrap(),
            "If[x <= 99, 0.1*x, 0.2*x]"
        );
    }
}
