use console::style;

/// Color used for the detection rate, chosen from fixed buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    Blue,
    Green,
    Yellow,
    Red,
    RedBlink,
    /// Outside every bucket; rendered without color.
    Unbucketed,
}

impl ColorTier {
    /// Pick the tier for a detection rate. The rate is truncated to an
    /// integer and checked against the buckets in order; the first match
    /// wins. `[60,80)` and `[60,100)` overlap, so `RedBlink` only covers
    /// `[80,100)`, and exactly 100 falls through to `Unbucketed`.
    pub fn from_rate(rate: f64) -> Self {
        let bucket = rate.trunc() as i64;
        if (0..20).contains(&bucket) {
            ColorTier::Blue
        } else if (20..40).contains(&bucket) {
            ColorTier::Green
        } else if (40..60).contains(&bucket) {
            ColorTier::Yellow
        } else if (60..80).contains(&bucket) {
            ColorTier::Red
        } else if (60..100).contains(&bucket) {
            ColorTier::RedBlink
        } else {
            ColorTier::Unbucketed
        }
    }

    pub fn paint(self, text: &str) -> String {
        match self {
            ColorTier::Blue => style(text).blue().to_string(),
            ColorTier::Green => style(text).green().to_string(),
            ColorTier::Yellow => style(text).yellow().to_string(),
            ColorTier::Red => style(text).red().to_string(),
            ColorTier::RedBlink => style(text).red().blink().to_string(),
            ColorTier::Unbucketed => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_edges() {
        assert_eq!(ColorTier::from_rate(0.0), ColorTier::Blue);
        assert_eq!(ColorTier::from_rate(19.99), ColorTier::Blue);
        assert_eq!(ColorTier::from_rate(20.0), ColorTier::Green);
        assert_eq!(ColorTier::from_rate(39.5), ColorTier::Green);
        assert_eq!(ColorTier::from_rate(40.0), ColorTier::Yellow);
        assert_eq!(ColorTier::from_rate(59.99), ColorTier::Yellow);
    }

    #[test]
    fn test_overlapping_buckets_first_match_wins() {
        // 60..80 is claimed by the plain red bucket before the blink bucket
        assert_eq!(ColorTier::from_rate(60.0), ColorTier::Red);
        assert_eq!(ColorTier::from_rate(79.99), ColorTier::Red);
        // only the part of 60..100 not already taken reaches blink
        assert_eq!(ColorTier::from_rate(80.0), ColorTier::RedBlink);
        assert_eq!(ColorTier::from_rate(99.99), ColorTier::RedBlink);
    }

    #[test]
    fn test_full_detection_is_unbucketed() {
        assert_eq!(ColorTier::from_rate(100.0), ColorTier::Unbucketed);
    }

    #[test]
    fn test_every_rate_gets_exactly_one_tier() {
        let mut seen = std::collections::HashSet::new();
        for hundredths in 0..=10_000u32 {
            let rate = f64::from(hundredths) / 100.0;
            seen.insert(ColorTier::from_rate(rate));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_unbucketed_paint_is_plain() {
        assert_eq!(ColorTier::Unbucketed.paint("100.0"), "100.0");
    }
}
