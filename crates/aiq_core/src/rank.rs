//! Rank bands and the dashboard bar projection.
//!
//! Pure functions over the score. The band table is fixed and ascending;
//! below the lowest threshold the lowest-tier label still applies, so
//! rank lookup can never fail.

/// Ascending (threshold, label) bands for the AI-Q rank.
pub const RANK_BANDS: &[(u64, &str)] = &[
    (50, "Νεόφυτος"),
    (70, "Αρχάριος Στρατηγός"),
    (90, "Πρακτικός Στρατηγός"),
    (110, "Έμπειρος Διευθυντής"),
    (130, "Ειδικός Σύμβουλος"),
    (150, "Αρχιστράτηγος ΤΝ"),
    (170, "Βιζιονάριος Ηγέτης"),
    (200, "Μάστερ Στρατηγός"),
];

/// Score window rendered by the dashboard bar.
pub const IQ_BAR_MIN: u64 = 50;
pub const IQ_BAR_MAX: u64 = 200;

/// Label of the highest band whose threshold does not exceed `iq`.
pub fn current_rank(iq: u64) -> &'static str {
    let mut rank = RANK_BANDS[0].1;
    for &(threshold, label) in RANK_BANDS {
        if iq >= threshold {
            rank = label;
        }
    }
    rank
}

/// Bar fill percentage: clamp `iq` to `[min, max]`, then normalize
/// linearly to `[0, 100]`.
pub fn bar_percentage(iq: u64, min: u64, max: u64) -> f64 {
    if max <= min {
        return 0.0;
    }
    let clamped = iq.clamp(min, max);
    ((clamped - min) as f64 / (max - min) as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_below_lowest_threshold_is_lowest_tier() {
        assert_eq!(current_rank(0), "Νεόφυτος");
        assert_eq!(current_rank(49), "Νεόφυτος");
    }

    #[test]
    fn test_rank_band_edges() {
        assert_eq!(current_rank(50), "Νεόφυτος");
        assert_eq!(current_rank(69), "Νεόφυτος");
        assert_eq!(current_rank(70), "Αρχάριος Στρατηγός");
        assert_eq!(current_rank(85), "Αρχάριος Στρατηγός");
        assert_eq!(current_rank(90), "Πρακτικός Στρατηγός");
        assert_eq!(current_rank(110), "Έμπειρος Διευθυντής");
        assert_eq!(current_rank(150), "Αρχιστράτηγος ΤΝ");
        assert_eq!(current_rank(199), "Βιζιονάριος Ηγέτης");
        assert_eq!(current_rank(200), "Μάστερ Στρατηγός");
        assert_eq!(current_rank(5000), "Μάστερ Στρατηγός");
    }

    #[test]
    fn test_rank_is_monotonic() {
        let tier = |iq: u64| {
            RANK_BANDS
                .iter()
                .position(|&(_, label)| label == current_rank(iq))
                .unwrap()
        };
        let mut last = tier(0);
        for iq in 0..300 {
            let t = tier(iq);
            assert!(t >= last, "rank dropped at iq={}", iq);
            last = t;
        }
    }

    #[test]
    fn test_bar_percentage_boundaries() {
        assert_eq!(bar_percentage(49, 50, 200), 0.0);
        assert_eq!(bar_percentage(50, 50, 200), 0.0);
        assert_eq!(bar_percentage(125, 50, 200), 50.0);
        assert_eq!(bar_percentage(200, 50, 200), 100.0);
        assert_eq!(bar_percentage(500, 50, 200), 100.0);
    }

    #[test]
    fn test_bar_percentage_degenerate_window() {
        assert_eq!(bar_percentage(80, 100, 100), 0.0);
        assert_eq!(bar_percentage(80, 100, 50), 0.0);
    }
}
