use crate::game::board::Board;
use crate::models::Position;

/// Orthogonal neighbor offsets. Diagonals never take part in lock
/// consensus.
const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub struct LockResolver;

impl LockResolver {
    /// Recompute the lock state of every tile on the board: a tile is
    /// locked exactly when all of its in-bounds orthogonal neighbors share
    /// its owner. Board edges impose no constraint. Owners never change
    /// here.
    ///
    /// Runs over the whole grid, not just the tiles touched by a move: a
    /// neighbor's new color can flip the lock of a tile nobody played.
    pub fn apply(board: &mut Board) {
        for pos in Board::positions() {
            let locked = Self::neighborhood_agrees(board, pos);
            board.set_locked(pos, locked);
        }
    }

    fn neighborhood_agrees(board: &Board, pos: Position) -> bool {
        // Positions come from the board iterator, so this read always hits
        let Some(owner) = board.owner_at(pos) else {
            return false;
        };

        for (dr, dc) in NEIGHBORS {
            let row = pos.row as isize + dr;
            let col = pos.col as isize + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let neighbor = Position {
                row: row as usize,
                col: col as usize,
            };
            // Off-board neighbors agree by default
            match board.owner_at(neighbor) {
                Some(other) if other != owner => return false,
                _ => {}
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::generator::BoardGenerator;
    use crate::models::{Owner, Side};

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    fn board_with(positions: &[(usize, usize)], side: Side) -> Board {
        let mut board = Board::new(BoardGenerator::easy());
        let moves: Vec<Position> = positions.iter().map(|&(r, c)| pos(r, c)).collect();
        board.recolor(&moves, side).unwrap();
        board
    }

    #[test]
    fn test_uniform_neighborhood_locks() {
        // Blue plus at (2,2) with all four orthogonal neighbors blue
        let mut board = board_with(&[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)], Side::Blue);
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(2, 2)), Some(true));
    }

    #[test]
    fn test_one_disagreeing_neighbor_unlocks() {
        let mut board = board_with(&[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)], Side::Blue);
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(2, 2)), Some(true));

        board.recolor(&[pos(1, 2)], Side::Red).unwrap();
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(2, 2)), Some(false));
    }

    #[test]
    fn test_diagonal_neighbors_do_not_count() {
        let mut board = board_with(&[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)], Side::Blue);
        // All four diagonals to red: irrelevant for (2,2)
        board
            .recolor(
                &[pos(1, 1), pos(1, 3), pos(3, 1), pos(3, 3)],
                Side::Red,
            )
            .unwrap();
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(2, 2)), Some(true));
    }

    #[test]
    fn test_corner_locks_with_two_agreeing_neighbors() {
        // (0,0) only borders (0,1) and (1,0); the board edge agrees for free
        let mut board = board_with(&[(0, 0), (0, 1), (1, 0)], Side::Red);
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(0, 0)), Some(true));
    }

    #[test]
    fn test_neutral_regions_lock_without_effect() {
        // An untouched board is one big agreeing neutral region; the lock
        // flag is set uniformly but protects nothing (see Board::recolor)
        let mut board = Board::new(BoardGenerator::easy());
        LockResolver::apply(&mut board);
        assert!(board.tiles().all(|(_, tile)| tile.locked));
        assert!(board.tiles().all(|(_, tile)| !tile.is_protected()));

        board.recolor(&[pos(2, 2)], Side::Blue).unwrap();
        assert_eq!(board.owner_at(pos(2, 2)), Some(Owner::Blue));
    }

    #[test]
    fn test_owned_tile_next_to_neutral_stays_unlocked() {
        // A mismatch with an empty neighbor keeps the tile contestable
        let mut board = board_with(&[(2, 2)], Side::Blue);
        LockResolver::apply(&mut board);
        assert_eq!(board.is_locked(pos(2, 2)), Some(false));
    }

    #[test]
    fn test_lock_state_is_consistent_across_whole_board() {
        let mut board = board_with(&[(0, 0), (0, 1), (1, 0), (4, 4)], Side::Blue);
        board.recolor(&[pos(4, 3), pos(3, 4)], Side::Red).unwrap();
        LockResolver::apply(&mut board);

        for p in Board::positions() {
            let expected = LockResolver::neighborhood_agrees(&board, p);
            assert_eq!(
                board.is_locked(p),
                Some(expected),
                "lock state inconsistent at ({}, {})",
                p.row,
                p.col
            );
        }
    }
}
