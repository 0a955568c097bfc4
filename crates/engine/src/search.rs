//! search - exhaustive backtracking over (piece, orientation, offset)
//! every unplaced piece is tried at every depth, so a tiling of N pieces
//! is reported once per order the pieces can be placed in (N! times)

use std::convert::Infallible;

use smallvec::SmallVec;
use tetrofit_core::{Board, Mask, OrientationSet};
use tracing::{debug, info, instrument};

use crate::config::SearchConfig;
use crate::sink::{SolutionCollector, SolutionCounter, SolutionSink};
use crate::solution::{Placement, Solution, MAX_PIECES};

/// Counters gathered while walking the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, the root included
    pub nodes: u64,
    /// Offsets accepted by the overlap test
    pub placements: u64,
    /// Offsets rejected by the overlap test
    pub collisions: u64,
    pub solutions: u64,
}

/// Orientation sets for every configured piece, built once up front.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    board: Board,
    pieces: SmallVec<[OrientationSet; MAX_PIECES]>,
}

impl SearchEngine {
    pub fn new(config: &SearchConfig) -> Self {
        let pieces = config
            .pieces
            .iter()
            .take(MAX_PIECES)
            .map(|&piece| OrientationSet::generate(piece, &config.board))
            .collect();
        Self {
            board: config.board,
            pieces,
        }
    }

    /// All seven tetrominoes on the 4x7 board.
    pub fn standard() -> Self {
        Self::new(&SearchConfig::standard())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn orientations(&self) -> &[OrientationSet] {
        &self.pieces
    }

    /// Walk the whole tree, handing every complete tiling to `sink`.
    /// Stops early only if the sink fails.
    #[instrument(skip_all, fields(board = %self.board, pieces = self.pieces.len()))]
    pub fn run<S: SolutionSink>(&self, sink: &mut S) -> Result<SearchStats, S::Error> {
        debug!(
            orientations = ?self.pieces.iter().map(|set| (set.piece().name(), set.len())).collect::<Vec<_>>(),
            "search started"
        );

        let mut walk = Walk {
            engine: self,
            sink,
            placed: 0,
            stack: SmallVec::new(),
            stats: SearchStats::default(),
        };
        walk.descend(0)?;

        let stats = walk.stats;
        info!(
            nodes = stats.nodes,
            placements = stats.placements,
            collisions = stats.collisions,
            solutions = stats.solutions,
            "search complete"
        );
        Ok(stats)
    }

    /// perft-style count, no solution leaves the engine
    pub fn count(&self) -> SearchStats {
        let mut counter = SolutionCounter::default();
        into_ok(self.run(&mut counter))
    }

    /// Every solution, in discovery order.
    pub fn solutions(&self) -> Vec<Solution> {
        let mut collector = SolutionCollector::new();
        into_ok(self.run(&mut collector));
        collector.into_solutions()
    }
}

fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Mutable state of one run. `placed` has bit `slot` set while that piece
/// is on the board; `stack` holds the placements of the current branch.
struct Walk<'a, S> {
    engine: &'a SearchEngine,
    sink: &'a mut S,
    placed: u8,
    stack: SmallVec<[Placement; MAX_PIECES]>,
    stats: SearchStats,
}

impl<S: SolutionSink> Walk<'_, S> {
    fn descend(&mut self, occupied: Mask) -> Result<(), S::Error> {
        self.stats.nodes += 1;

        let engine = self.engine;
        if self.stack.len() == engine.pieces.len() {
            self.stats.solutions += 1;
            return self.sink.accept(&self.stack);
        }

        let board = &engine.board;
        for (slot, set) in engine.pieces.iter().enumerate() {
            let bit = 1u8 << slot;
            if self.placed & bit != 0 {
                continue;
            }
            self.placed |= bit;

            for orientation in set {
                for (x, y) in orientation.offsets(board) {
                    let mask = orientation.shifted(board, x, y);
                    if mask & occupied != 0 {
                        self.stats.collisions += 1;
                        continue;
                    }
                    self.stats.placements += 1;
                    self.stack.push(Placement {
                        piece: set.piece(),
                        mask,
                    });
                    let result = self.descend(occupied | mask);
                    self.stack.pop();
                    result?;
                }
            }

            self.placed &= !bit;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrofit_core::Piece;

    fn engine(width: u8, height: u8, pieces: &[Piece]) -> SearchEngine {
        let board = Board::new(width, height).expect("valid board");
        let config = SearchConfig::new(board, pieces).expect("valid config");
        SearchEngine::new(&config)
    }

    /// Fails on the n-th solution it sees.
    struct FailAfter {
        fail_on: usize,
        seen: usize,
    }

    impl SolutionSink for FailAfter {
        type Error = &'static str;

        fn accept(&mut self, _placements: &[Placement]) -> Result<(), Self::Error> {
            self.seen += 1;
            if self.seen == self.fail_on {
                return Err("stop");
            }
            Ok(())
        }
    }

    #[test]
    fn test_square_fills_square_board() {
        let engine = engine(2, 2, &[Piece::O]);
        let solutions = engine.solutions();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].placements()[0].mask, 0b1111);
    }

    #[test]
    fn test_bar_fills_column_and_row() {
        for (w, h) in [(1, 4), (4, 1)] {
            let stats = engine(w, h, &[Piece::I]).count();
            assert_eq!(stats.solutions, 1, "{w}x{h}");
            assert_eq!(stats.nodes, 2);
        }
    }

    #[test]
    fn test_impossible_pair() {
        let stats = engine(4, 2, &[Piece::I, Piece::O]).count();
        assert_eq!(stats.solutions, 0);
        assert_eq!(stats.nodes, 6);
    }

    #[test]
    fn test_every_placement_is_a_node() {
        let stats = engine(4, 3, &[Piece::I, Piece::L, Piece::J]).count();
        assert_eq!(stats.placements + 1, stats.nodes);
        assert!(stats.collisions > 0);
    }

    #[test]
    fn test_solutions_are_exact_covers() {
        let engine = engine(4, 2, &[Piece::L, Piece::J]);
        let board = *engine.board();
        let solutions = engine.solutions();
        assert_eq!(solutions.len(), 8);
        for solution in &solutions {
            assert!(solution.is_exact_cover(&board));
            assert_eq!(solution.placements().len(), 2);
        }
    }

    #[test]
    fn test_each_piece_placed_once() {
        let engine = engine(4, 3, &[Piece::I, Piece::L, Piece::J]);
        for solution in engine.solutions() {
            let mut pieces: Vec<_> = solution.placements().iter().map(|p| p.piece).collect();
            pieces.sort();
            assert_eq!(pieces, vec![Piece::I, Piece::L, Piece::J]);
        }
    }

    #[test]
    fn test_sink_error_stops_search() {
        let engine = engine(4, 2, &[Piece::L, Piece::J]);
        let mut sink = FailAfter {
            fail_on: 3,
            seen: 0,
        };
        assert_eq!(engine.run(&mut sink), Err("stop"));
        assert_eq!(sink.seen, 3);
    }

    #[test]
    fn test_standard_engine_orientations() {
        let engine = SearchEngine::standard();
        assert_eq!(*engine.board(), Board::STANDARD);
        let counts: Vec<_> = engine.orientations().iter().map(|s| s.len()).collect();
        assert_eq!(counts, vec![2, 1, 4, 4, 8, 8, 4]);
    }
}
