mod common;

mod tests {
    use std::sync::Arc;

    use glyph_morph::{Error, Glyph, MorphCache, MorphKey};

    use super::common::{rendered, test_font};

    #[test]
    fn test_morphed_is_memoized() {
        let mut cache = MorphCache::new(test_font());
        let first = cache.morphed('1', '2', 0.5).unwrap();
        let second = cache.morphed('1', '2', 0.5).unwrap();
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.computations(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&MorphKey::new(Glyph::One, Glyph::Two, 0.5)));

        cache.morphed('2', '1', 0.5).unwrap();
        cache.morphed('1', '2', 0.55).unwrap();
        assert_eq!(cache.computations(), 3);
    }

    #[test]
    fn test_negative_zero_shares_entry() {
        let mut cache = MorphCache::new(test_font());
        cache.morphed('4', '5', 0.0).unwrap();
        cache.morphed('4', '5', -0.0).unwrap();
        assert_eq!(cache.computations(), 1);
        assert_eq!(MorphKey::new(Glyph::Four, Glyph::Five, -0.0).fraction(), 0.0);
    }

    #[test]
    fn test_morphed_unknown_glyph() {
        let mut cache = MorphCache::new(test_font());
        assert_eq!(cache.morphed('1', 'x', 0.5), Err(Error::UnknownGlyph('x')));
        assert_eq!(cache.morphed('?', '1', 0.5), Err(Error::UnknownGlyph('?')));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_morphed_fraction_out_of_range() {
        let mut cache = MorphCache::new(test_font());
        assert!(matches!(
            cache.morphed('1', '2', 2.0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_strings_length_mismatch() {
        let mut cache = MorphCache::new(test_font());
        assert_eq!(
            cache.bitmaps_for_strings("12:30", "12:3", 0.5),
            Err(Error::LengthMismatch)
        );
    }

    #[test]
    fn test_strings_at_endpoints() {
        let mut cache = MorphCache::new(test_font());

        let start: Vec<_> = cache
            .bitmaps_for_strings("12:30", "12:31", 0.0)
            .unwrap()
            .iter()
            .map(|raster| (**raster).clone())
            .collect();
        assert_eq!(start, rendered(cache.table(), "12:30"));

        let end: Vec<_> = cache
            .bitmaps_for_strings("12:30", "12:31", 1.0)
            .unwrap()
            .iter()
            .map(|raster| (**raster).clone())
            .collect();
        assert_eq!(end, rendered(cache.table(), "12:31"));
    }

    #[test]
    fn test_strings_share_repeated_pairs() {
        let mut cache = MorphCache::new(test_font());
        let frames = cache.bitmaps_for_strings("11/11", "12/12", 0.25).unwrap();
        assert_eq!(frames.len(), 5);
        assert!(Arc::ptr_eq(&frames[0], &frames[3]));
        assert!(Arc::ptr_eq(&frames[1], &frames[4]));
        // 1->1, 1->2, /->/
        assert_eq!(cache.computations(), 3);
    }

    #[test]
    fn test_blend_differs_from_endpoints() {
        let mut cache = MorphCache::new(test_font());
        let table = cache.table().clone();
        let halfway = cache.morphed('0', '1', 0.5).unwrap();
        assert_ne!(*halfway, table.get(Glyph::Zero).to_raster());
        assert_ne!(*halfway, table.get(Glyph::One).to_raster());
    }
}
