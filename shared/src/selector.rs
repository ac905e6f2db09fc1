use rand::Rng;

use crate::prize::{validate_options, ConfigError, PrizeOption};

/// One uniform draw over the whole probability mass.
pub fn roll_weight<R: Rng + ?Sized>(total_weight: f64, rng: &mut R) -> f64 {
    rng.gen_range(0.0..total_weight)
}

/// Inverse-CDF walk over the list: the first option whose cumulative weight
/// exceeds the roll wins. Deterministic given the roll, O(n).
///
/// Callers must pass a validated list and a roll in `[0, total_weight)`.
pub fn winner_at(options: &[PrizeOption], roll: f64) -> (usize, &PrizeOption) {
    let mut cumulative = 0.0;
    let mut last_weighted = 0;
    for (index, prize) in options.iter().enumerate() {
        if prize.weight > 0.0 {
            last_weighted = index;
        }
        cumulative += prize.weight;
        if roll < cumulative {
            return (index, prize);
        }
    }
    // Reachable only when float rounding pushes the roll past the summed
    // total; settle on the last option that holds any mass.
    (last_weighted, &options[last_weighted])
}

/// Draws exactly one winner with `P(p) = p.weight / total`. Consumes a
/// single random draw and has no other side effect.
pub fn pick<'a, R: Rng + ?Sized>(
    options: &'a [PrizeOption],
    rng: &mut R,
) -> Result<(usize, &'a PrizeOption), ConfigError> {
    let total = validate_options(options)?;
    Ok(winner_at(options, roll_weight(total, rng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn prize(id: &str, weight: f64) -> PrizeOption {
        PrizeOption {
            id: id.to_string(),
            name: id.to_uppercase(),
            weight,
            active: true,
            style: None,
            image: None,
        }
    }

    #[test]
    fn test_roll_lands_in_first_bucket() {
        let options = vec![prize("a", 50.0), prize("b", 50.0)];
        let (index, winner) = winner_at(&options, 25.0);
        assert_eq!(index, 0);
        assert_eq!(winner.id, "a");
    }

    #[test]
    fn test_bucket_boundary_goes_to_next_prize() {
        // Roll equal to a cumulative boundary belongs to the next bucket,
        // keeping each bucket half-open.
        let options = vec![prize("a", 50.0), prize("b", 50.0)];
        let (index, _) = winner_at(&options, 50.0);
        assert_eq!(index, 1);
    }

    #[test]
    fn test_zero_weight_prize_never_wins() {
        let options = vec![prize("dud", 0.0), prize("b", 1.0)];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let (index, _) = pick(&options, &mut rng).unwrap();
            assert_eq!(index, 1);
        }
    }

    #[test]
    fn test_rounding_overflow_falls_back_to_last_weighted() {
        let options = vec![prize("a", 1.0), prize("dud", 0.0)];
        let (index, _) = winner_at(&options, 1.0);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_pick_surfaces_configuration_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick(&[], &mut rng).unwrap_err(), ConfigError::NoPrizes);
        let zeroed = vec![prize("a", 0.0)];
        assert_eq!(
            pick(&zeroed, &mut rng).unwrap_err(),
            ConfigError::NoProbabilityMass
        );
    }

    #[test]
    fn test_pick_rejects_nan_weight_instead_of_panicking() {
        // A NaN weight would make the total NaN and blow up inside the
        // uniform draw; validation has to stop it at the door.
        let mut rng = StdRng::seed_from_u64(0);
        let options = vec![prize("a", 10.0), prize("b", f64::NAN)];
        assert_eq!(
            pick(&options, &mut rng).unwrap_err(),
            ConfigError::NegativeWeight { id: "b".to_string() }
        );
    }

    #[test]
    fn test_distribution_converges_to_weights() {
        let options = vec![prize("a", 10.0), prize("b", 30.0), prize("c", 60.0)];
        let mut rng = StdRng::seed_from_u64(7);
        let draws = 100_000;
        let mut counts = [0u32; 3];
        for _ in 0..draws {
            let (index, _) = pick(&options, &mut rng).unwrap();
            counts[index] += 1;
        }
        let expected = [0.10, 0.30, 0.60];
        for (count, expected) in counts.iter().zip(expected) {
            let frequency = f64::from(*count) / f64::from(draws);
            assert!(
                (frequency - expected).abs() < 0.02,
                "frequency {frequency} drifted from {expected}"
            );
        }
    }
}
