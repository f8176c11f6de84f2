//! Board layout and pair assignment
//!
//! Tiles are stored row-major. The window is split into `columns + 1` equal
//! columns; the rightmost one is left empty for the score.

use crate::error::GameError;
use crate::surface::ImageId;
use crate::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use sdl2::rect::{Point, Rect};

/// Grid position of a tile as (row, column)
pub type Cell = (usize, usize);

pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    columns: usize,
    tile_width: u32,
    tile_height: u32,
}

impl Board {
    /// Build a board with every content image placed on exactly two random tiles
    pub fn new(
        rows: usize,
        columns: usize,
        surface_size: (u32, u32),
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let pairs = pair_count(rows, columns)?;

        let mut images: Vec<ImageId> = (1..=pairs).map(ImageId).collect();
        images.extend_from_within(..);
        images.shuffle(rng);

        Self::with_images(rows, columns, surface_size, images)
    }

    /// Build a board with content images laid out row-major in the given order
    pub fn with_images(
        rows: usize,
        columns: usize,
        surface_size: (u32, u32),
        images: Vec<ImageId>,
    ) -> Result<Self, GameError> {
        pair_count(rows, columns)?;
        if images.len() != rows * columns {
            return Err(GameError::InvalidBoard { rows, columns });
        }

        let tile_width = surface_size.0 / (columns as u32 + 1);
        let tile_height = surface_size.1 / rows as u32;

        let tiles = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                let (row, column) = (index / columns, index % columns);
                let rect = Rect::new(
                    column as i32 * tile_width as i32,
                    row as i32 * tile_height as i32,
                    tile_width.max(1),
                    tile_height.max(1),
                );
                Tile::new(rect, ImageId::HIDDEN, image)
            })
            .collect();

        Ok(Board {
            tiles,
            rows,
            columns,
            tile_width,
            tile_height,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[allow(dead_code)]
    pub fn get(&self, cell: Cell) -> Option<&Tile> {
        let index = self.index_of(cell)?;
        self.tiles.get(index)
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut Tile> {
        let index = self.index_of(cell)?;
        self.tiles.get_mut(index)
    }

    /// Mutable access to two different tiles at once
    pub fn pair_mut(&mut self, a: Cell, b: Cell) -> Option<(&mut Tile, &mut Tile)> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        if a == b {
            return None;
        }

        if a < b {
            let (left, right) = self.tiles.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.tiles.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Cell whose rectangle contains `point`, found arithmetically
    ///
    /// Gives the same answer as testing every tile's rectangle in row-major
    /// order, since tiles never overlap.
    pub fn tile_at(&self, point: Point) -> Option<Cell> {
        if point.x() < 0 || point.y() < 0 || self.tile_width == 0 || self.tile_height == 0 {
            return None;
        }

        let column = point.x() as usize / self.tile_width as usize;
        let row = point.y() as usize / self.tile_height as usize;

        if row < self.rows && column < self.columns {
            Some((row, column))
        } else {
            None
        }
    }

    pub fn all_discovered(&self) -> bool {
        self.tiles.iter().all(Tile::is_discovered)
    }

    fn index_of(&self, (row, column): Cell) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

/// Number of pairs a `rows` x `columns` board holds
fn pair_count(rows: usize, columns: usize) -> Result<usize, GameError> {
    let count = rows * columns;
    if count == 0 || count % 2 != 0 {
        return Err(GameError::InvalidBoard { rows, columns });
    }
    Ok(count / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn image_counts(board: &Board) -> HashMap<ImageId, usize> {
        let mut counts = HashMap::new();
        for tile in board.tiles() {
            *counts.entry(tile.reveal_image()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_every_image_appears_exactly_twice() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = Board::new(4, 4, (500, 400), &mut rng).unwrap();
            let counts = image_counts(&board);

            assert_eq!(counts.len(), 8);
            assert!(counts.values().all(|&n| n == 2));
            assert!(!counts.contains_key(&ImageId::HIDDEN));
            assert_eq!(board.tiles().count(), counts.len() * 2);
        }
    }

    #[test]
    fn test_rectangular_board_pairs() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(3, 4, (500, 300), &mut rng).unwrap();
        let counts = image_counts(&board);

        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_odd_or_empty_board_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Board::new(3, 3, (500, 400), &mut rng),
            Err(GameError::InvalidBoard { rows: 3, columns: 3 })
        ));
        assert!(Board::new(0, 4, (500, 400), &mut rng).is_err());
    }

    #[test]
    fn test_with_images_rejects_wrong_length() {
        let images = vec![ImageId(1), ImageId(1), ImageId(2)];
        assert!(Board::with_images(2, 2, (300, 200), images).is_err());
    }

    #[test]
    fn test_layout_reserves_score_column() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::new(4, 4, (500, 400), &mut rng).unwrap();

        // 500 / 5 = 100 wide, 400 / 4 = 100 high
        assert_eq!(board.get((0, 0)).unwrap().rect(), Rect::new(0, 0, 100, 100));
        assert_eq!(board.get((1, 2)).unwrap().rect(), Rect::new(200, 100, 100, 100));
        assert_eq!(board.get((3, 3)).unwrap().rect(), Rect::new(300, 300, 100, 100));
        assert!(board.get((4, 0)).is_none());
        assert!(board.get((0, 4)).is_none());
    }

    #[test]
    fn test_tiles_start_hidden() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = Board::new(2, 2, (300, 200), &mut rng).unwrap();

        assert!(board.tiles().all(|t| t.is_hidden() && !t.is_discovered()));
        assert!(!board.all_discovered());
    }

    #[test]
    fn test_tile_at_matches_containment_scan() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::new(4, 4, (503, 401), &mut rng).unwrap();

        for y in (-5..410).step_by(7) {
            for x in (-5..510).step_by(7) {
                let point = Point::new(x, y);
                let scanned = (0..board.rows())
                    .flat_map(|r| (0..board.columns()).map(move |c| (r, c)))
                    .find(|&cell| board.get(cell).unwrap().rect().contains_point(point));

                assert_eq!(board.tile_at(point), scanned, "point {:?}", point);
            }
        }
    }

    #[test]
    fn test_tile_at_score_column_is_none() {
        let board = Board::with_images(
            2,
            2,
            (300, 200),
            vec![ImageId(1), ImageId(2), ImageId(1), ImageId(2)],
        )
        .unwrap();

        assert_eq!(board.tile_at(Point::new(150, 50)), Some((0, 1)));
        assert_eq!(board.tile_at(Point::new(250, 50)), None);
    }

    #[test]
    fn test_pair_mut_returns_both_in_order() {
        let mut board = Board::with_images(
            2,
            2,
            (300, 200),
            vec![ImageId(1), ImageId(2), ImageId(1), ImageId(2)],
        )
        .unwrap();

        let (a, b) = board.pair_mut((1, 1), (0, 0)).unwrap();
        assert_eq!(a.reveal_image(), ImageId(2));
        assert_eq!(b.reveal_image(), ImageId(1));

        assert!(board.pair_mut((0, 0), (0, 0)).is_none());
        assert!(board.pair_mut((0, 0), (2, 0)).is_none());
    }
}
