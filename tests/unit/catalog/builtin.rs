//! Tests for catalog selection and per-catalog lookup tables

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use gridcollapse::catalog::Catalog;
    use gridcollapse::rules::ruleset::Ruleset;

    // Tests every lookup table covers exactly the catalog's tiles
    // Verified by dropping the last entry of the terrain glyphs
    #[test]
    fn test_tables_match_tile_count() {
        for catalog in [Catalog::Roads, Catalog::Terrain] {
            let count = catalog.tile_count();
            let ruleset = catalog.ruleset().expect("valid ruleset");

            assert_eq!(ruleset.tile_count(), count);
            assert_eq!(catalog.tile_names().len(), count);
            assert_eq!(catalog.glyphs().len(), count);
            assert_eq!(catalog.styles().len(), count);
        }
    }

    // Tests default sizes and command-line names
    // Verified by swapping the default sizes
    #[test]
    fn test_defaults_and_names() {
        assert_eq!(Catalog::Roads.default_size(), (20, 20));
        assert_eq!(Catalog::Terrain.default_size(), (30, 30));
        assert_eq!(Catalog::Terrain.to_string(), "terrain");
        assert_eq!(
            Catalog::from_str("roads", true).expect("known catalog"),
            Catalog::Roads
        );
        assert!(Catalog::from_str("castles", true).is_err());
    }
}
