/// Quartic ease-out, `1 - (1 - t)^4`, with `t` clamped to `[0, 1]`.
/// Velocity decreases monotonically, so the wheel decelerates into its
/// final position instead of stopping abruptly.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-0.5), 0.0);
        assert_eq!(ease_out_quart(1.5), 1.0);
    }

    #[test]
    fn test_monotonic_and_decelerating() {
        let mut previous = 0.0;
        let mut previous_step = f64::MAX;
        for i in 1..=100 {
            let eased = ease_out_quart(f64::from(i) / 100.0);
            let step = eased - previous;
            assert!(step >= 0.0);
            assert!(step <= previous_step + 1e-12);
            previous = eased;
            previous_step = step;
        }
    }
}
