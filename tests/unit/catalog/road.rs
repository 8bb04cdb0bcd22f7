//! Tests for road tiles and their open-side adjacency

#[cfg(test)]
mod tests {
    use gridcollapse::catalog::road::{RoadTile, road_ruleset};
    use gridcollapse::rules::ruleset::Ruleset;
    use gridcollapse::spatial::direction::Direction;

    fn ids(tiles: &[RoadTile]) -> Vec<usize> {
        tiles.iter().map(|tile| tile.id()).collect()
    }

    // Tests each junction is open on exactly three sides
    // Verified by swapping the masks of Up and Down
    #[test]
    fn test_open_sides() {
        assert_eq!(RoadTile::Blank.open_sides(), 0);
        assert!(RoadTile::Up.is_open(Direction::North));
        assert!(!RoadTile::Up.is_open(Direction::South));
        assert!(!RoadTile::Down.is_open(Direction::North));
        assert!(!RoadTile::Right.is_open(Direction::West));
        assert!(!RoadTile::Left.is_open(Direction::East));
        for tile in &RoadTile::ALL[1..] {
            assert_eq!(tile.open_sides().count_ones(), 3);
        }
    }

    // Tests roads only continue into tiles open on the facing side
    // Verified by checking the same side of the neighbour
    #[test]
    fn test_ruleset_joins_open_sides() {
        let table = road_ruleset().expect("valid ruleset");
        let up = RoadTile::Up.id();

        assert_eq!(
            table.allowed_mask(up, Direction::East).to_vec(),
            ids(&[RoadTile::Up, RoadTile::Down, RoadTile::Left])
        );
        assert_eq!(
            table.allowed_mask(up, Direction::North).to_vec(),
            ids(&[RoadTile::Right, RoadTile::Down, RoadTile::Left])
        );
        assert_eq!(
            table.allowed_mask(up, Direction::South).to_vec(),
            ids(&[RoadTile::Blank, RoadTile::Down])
        );
        assert!(table.is_symmetric());
    }

    // Tests ids, names and glyphs line up with declaration order
    // Verified by reordering ALL
    #[test]
    fn test_lookup_tables() {
        for (id, tile) in RoadTile::ALL.iter().enumerate() {
            assert_eq!(tile.id(), id);
            assert_eq!(RoadTile::from_id(id), Some(*tile));
        }
        assert_eq!(RoadTile::from_id(5), None);
        assert_eq!(RoadTile::Left.name(), "left");
        assert_eq!(RoadTile::Down.glyph(), '┬');
    }

    // Tests blank tiles render as grass and junction sides follow openings
    // Verified by painting every side in the road colour
    #[test]
    fn test_style() {
        let blank = RoadTile::Blank.style();
        let up = RoadTile::Up.style();

        assert!(blank.sides.iter().all(|&side| side == blank.center));
        assert_eq!(up.sides[0], up.center);
        assert_ne!(up.sides[2], up.center);
    }
}
