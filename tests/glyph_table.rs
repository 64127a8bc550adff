mod common;

mod tests {
    use glyph_morph::{Error, Glyph, GlyphTable, Raster};

    use super::common::{FONT, glyph_raster, test_font};

    #[test]
    fn test_glyph_chars() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_char(glyph.as_char()), Some(glyph));
            assert_eq!(Glyph::parse_from_str(glyph.source_name()), Some(glyph));
        }
        assert_eq!(Glyph::from_char('a'), None);
        assert_eq!(Glyph::parse_from_str("comma"), None);
        assert_eq!(Glyph::Colon.source_name(), "colon");
    }

    #[test]
    fn test_load_font() {
        let table = test_font();
        assert_eq!(table.dimensions(), (5, 7));
        assert_eq!(table.get(Glyph::Eight).to_raster(), glyph_raster(Glyph::Eight));
        assert_eq!(table.lookup('/').unwrap().to_raster(), glyph_raster(Glyph::Slash));
    }

    #[test]
    fn test_space_is_blank() {
        let table = test_font();
        let space = table.get(Glyph::Space).to_raster();
        assert_eq!(space.size(), (5, 7));
        assert_eq!(space.count_set(), 0);
    }

    #[test]
    fn test_space_uses_largest_dimensions() {
        let table = GlyphTable::from_rasters(FONT.iter().map(|(glyph, _)| {
            let raster = match glyph {
                Glyph::One => Raster::new(3, 9),
                Glyph::Colon => Raster::new(6, 2),
                _ => glyph_raster(*glyph),
            };
            (*glyph, raster)
        }))
        .unwrap();
        assert_eq!(table.dimensions(), (6, 9));
        assert_eq!(table.get(Glyph::Space).size(), (6, 9));
    }

    #[test]
    fn test_load_failure_is_fatal() {
        let mut requested = Vec::new();
        let mut source = |glyph: Glyph| {
            requested.push(glyph);
            if glyph == Glyph::Three {
                Err("missing")
            } else {
                Ok(glyph_raster(glyph))
            }
        };
        let result = GlyphTable::load(&mut source);
        assert!(matches!(
            result,
            Err(Error::FontLoad {
                glyph: Glyph::Three
            })
        ));
        assert_eq!(
            requested,
            vec![Glyph::Zero, Glyph::One, Glyph::Two, Glyph::Three]
        );
    }

    #[test]
    fn test_missing_raster() {
        let result = GlyphTable::from_rasters(
            FONT.iter()
                .filter(|(glyph, _)| *glyph != Glyph::Slash)
                .map(|(glyph, _)| (*glyph, glyph_raster(*glyph))),
        );
        assert!(matches!(
            result,
            Err(Error::FontLoad {
                glyph: Glyph::Slash
            })
        ));
    }

    #[test]
    fn test_lookup_unknown_glyph() {
        let table = test_font();
        assert!(matches!(table.lookup('x'), Err(Error::UnknownGlyph('x'))));
    }
}
