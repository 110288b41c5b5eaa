//! Tests for median-cut splitting, tie-breaking and bucket means

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use stitchgrid::color::{Channel, Color};
    use stitchgrid::quantize::median_cut::{channel_range, mean_color, median_cut};

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    // Tests empty input falls back to neutral gray
    #[test]
    fn test_empty_samples_give_gray() {
        assert_eq!(median_cut(&[], 5), vec![Color::new(128, 128, 128)]);
    }

    // Tests a single bucket averages everything
    #[test]
    fn test_single_bucket_mean() {
        assert_eq!(median_cut(&[BLACK, WHITE], 1), vec![Color::new(128, 128, 128)]);
    }

    // Tests the lower half comes first after a split
    // Verified by inserting the halves in reverse order
    #[test]
    fn test_split_order() {
        assert_eq!(median_cut(&[WHITE, BLACK], 2), vec![BLACK, WHITE]);
    }

    // Tests uniform input stops splitting early
    // Verified by splitting zero-range buckets
    #[test]
    fn test_uniform_samples_stop_early() {
        let samples = vec![Color::new(40, 50, 60); 32];

        assert_eq!(median_cut(&samples, 4), vec![Color::new(40, 50, 60)]);
    }

    // Tests fewer distinct colors than k yields one color each
    #[test]
    fn test_fewer_distinct_colors_than_k() {
        let samples = [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
            Color::new(255, 0, 0),
        ];

        let colors = median_cut(&samples, 10);

        assert_eq!(colors.len(), 3);
        for expected in [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
        ] {
            assert!(colors.contains(&expected));
        }
    }

    // Tests equal channel ranges split on red first
    // Verified by scanning channels in B, G, R order
    #[test]
    fn test_channel_tie_prefers_red() {
        let samples = [
            Color::new(0, 50, 0),
            Color::new(100, 0, 0),
            Color::new(50, 100, 0),
        ];

        assert_eq!(
            median_cut(&samples, 2),
            vec![Color::new(0, 50, 0), Color::new(75, 50, 0)]
        );
    }

    // Tests equal bucket ranges split the first bucket
    // Verified by using >= when comparing ranges
    #[test]
    fn test_bucket_tie_prefers_first() {
        let samples = [
            Color::new(0, 0, 0),
            Color::new(10, 0, 0),
            Color::new(200, 0, 0),
            Color::new(210, 0, 0),
        ];

        assert_eq!(
            median_cut(&samples, 3),
            vec![
                Color::new(0, 0, 0),
                Color::new(10, 0, 0),
                Color::new(205, 0, 0)
            ]
        );
    }

    // Tests many distinct colors produce exactly k representatives
    #[test]
    fn test_output_capped_at_k() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples: Vec<Color> = (0..500)
            .map(|_| Color::new(rng.random(), rng.random(), rng.random()))
            .collect();

        for k in [1, 2, 5, 16] {
            assert_eq!(median_cut(&samples, k).len(), k);
        }
    }

    // Tests identical input gives identical output
    #[test]
    fn test_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let samples: Vec<Color> = (0..300)
            .map(|_| Color::new(rng.random(), rng.random(), rng.random()))
            .collect();

        assert_eq!(median_cut(&samples, 8), median_cut(&samples, 8));
    }

    // Tests channel range on a mixed bucket
    #[test]
    fn test_channel_range() {
        let bucket = [Color::new(10, 200, 7), Color::new(60, 100, 7)];

        assert_eq!(channel_range(&bucket, Channel::Red), 50);
        assert_eq!(channel_range(&bucket, Channel::Green), 100);
        assert_eq!(channel_range(&bucket, Channel::Blue), 0);
    }

    // Tests mean rounds half up
    // Verified by using truncating division
    #[test]
    fn test_mean_rounding() {
        assert_eq!(
            mean_color(&[Color::new(1, 0, 0), Color::new(2, 0, 0)]),
            Color::new(2, 0, 0)
        );
        assert_eq!(
            mean_color(&[
                Color::new(1, 0, 0),
                Color::new(1, 0, 0),
                Color::new(2, 0, 0)
            ]),
            Color::new(1, 0, 0)
        );
    }
}
