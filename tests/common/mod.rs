#![allow(dead_code)]

use glyph_morph::{Glyph, GlyphTable, Raster};

/// 5x7 test font, one entry per loadable glyph
pub const FONT: [(Glyph, [&str; 7]); 12] = [
    (
        Glyph::Zero,
        [" ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### "],
    ),
    (
        Glyph::One,
        ["  #  ", " ##  ", "  #  ", "  #  ", "  #  ", "  #  ", " ### "],
    ),
    (
        Glyph::Two,
        [" ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####"],
    ),
    (
        Glyph::Three,
        ["#####", "   # ", "  #  ", "   # ", "    #", "#   #", " ### "],
    ),
    (
        Glyph::Four,
        ["   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # "],
    ),
    (
        Glyph::Five,
        ["#####", "#    ", "#### ", "    #", "    #", "#   #", " ### "],
    ),
    (
        Glyph::Six,
        ["  ## ", " #   ", "#    ", "#### ", "#   #", "#   #", " ### "],
    ),
    (
        Glyph::Seven,
        ["#####", "    #", "   # ", "  #  ", " #   ", " #   ", " #   "],
    ),
    (
        Glyph::Eight,
        [" ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### "],
    ),
    (
        Glyph::Nine,
        [" ### ", "#   #", "#   #", " ####", "    #", "   # ", " ##  "],
    ),
    (
        Glyph::Colon,
        ["     ", "  #  ", "  #  ", "     ", "  #  ", "  #  ", "     "],
    ),
    (
        Glyph::Slash,
        ["    #", "    #", "   # ", "  #  ", " #   ", "#    ", "#    "],
    ),
];

pub fn glyph_raster(glyph: Glyph) -> Raster {
    match FONT.iter().find(|(g, _)| *g == glyph) {
        Some((_, rows)) => Raster::from_ascii(rows).unwrap(),
        None => Raster::new(5, 7),
    }
}

pub fn test_font() -> GlyphTable {
    GlyphTable::from_rasters(FONT.iter().map(|(glyph, _)| (*glyph, glyph_raster(*glyph)))).unwrap()
}

/// Rasters the table holds for every character of `text`
pub fn rendered(table: &GlyphTable, text: &str) -> Vec<Raster> {
    text.chars()
        .map(|c| table.lookup(c).unwrap().to_raster())
        .collect()
}
