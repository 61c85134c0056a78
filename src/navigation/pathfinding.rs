//! A* pathfinding on the obstruction grid
//!
//! Four-connected moves with unit cost and a Manhattan heuristic. A target
//! is reached by a final bump into it from a required side, so the search
//! solves for the neighboring cell and the approach move is appended.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::board::Board;
use crate::core::config::AnalyzerConfig;
use crate::core::types::{Coord, Direction, Path, Position};
use crate::navigation::obstruction::ObstructionMap;
use crate::rules::{positions_with_property, RuleSet};

/// Node in the A* open set
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathNode {
    coord: Coord,
    g_cost: u32,
    f_cost: u32, // g_cost + heuristic
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a path using A*
///
/// Returns the coordinate chain from `start` to `goal` inclusive, or None if
/// no path exists. The start cell itself is never checked for obstruction.
pub(crate) fn find_path(map: &ObstructionMap, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    if start == goal {
        return Some(vec![start]);
    }

    let (width, height) = (map.width(), map.height());
    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut g_scores: HashMap<Coord, u32> = HashMap::new();

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        coord: start,
        g_cost: 0,
        f_cost: start.distance(&goal),
    });

    while let Some(current) = open_set.pop() {
        if current.coord == goal {
            return Some(reconstruct_path(&came_from, current.coord));
        }

        // Stale entry superseded by a cheaper push
        if g_scores
            .get(&current.coord)
            .is_some_and(|&best| current.g_cost > best)
        {
            continue;
        }

        for neighbor in current.coord.neighbors(width, height) {
            if map.blocked_at(neighbor) {
                continue;
            }

            let tentative_g = current.g_cost + 1;
            let neighbor_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.coord);
                g_scores.insert(neighbor, tentative_g);
                open_set.push(PathNode {
                    coord: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g + neighbor.distance(&goal),
                });
            }
        }
    }

    None // No path found
}

/// Reconstruct path from came_from map
fn reconstruct_path(came_from: &HashMap<Coord, Coord>, mut current: Coord) -> Vec<Coord> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Convert a coordinate chain into moves via consecutive deltas
pub(crate) fn path_to_moves(path: &[Coord]) -> Path {
    path.windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Direction::between(*from, *to),
            _ => None,
        })
        .collect()
}

/// Per-query navigation context
///
/// Holds both obstruction maps and the controlled-entity origins for one
/// board so repeated path queries against the same snapshot share them.
pub struct Navigator {
    /// Word tiles blocked, used for travel
    travel: ObstructionMap,
    /// Word tiles passable, used to test the destination itself
    terrain: ObstructionMap,
    origins: Vec<Coord>,
}

impl Navigator {
    pub fn new(board: &Board, rules: &RuleSet, config: &AnalyzerConfig) -> Self {
        let properties = &config.properties;
        let origins: Vec<Coord> = positions_with_property(rules, board, &properties.you)
            .into_iter()
            .filter_map(Position::to_coord)
            .collect();

        if origins.is_empty() {
            tracing::debug!("No controlled entity on the board");
        }

        Self {
            travel: ObstructionMap::build(rules, board, properties, true),
            terrain: ObstructionMap::build(rules, board, properties, false),
            origins,
        }
    }

    /// Positions of the controlled entity, row-major
    pub fn origins(&self) -> Vec<Position> {
        self.origins.iter().map(|c| c.to_position()).collect()
    }

    pub fn travel_map(&self) -> &ObstructionMap {
        &self.travel
    }

    pub fn terrain_map(&self) -> &ObstructionMap {
        &self.terrain
    }

    /// Shortest move sequence that ends by moving `approach` into `target`
    ///
    /// Empty when the target is blocked by anything other than a word tile,
    /// when the cell the approach starts from is blocked or off the board, or
    /// when no controlled entity can reach it. With several controlled
    /// entities the shortest route wins; ties go to the first in row-major
    /// order.
    pub fn shortest_path(&self, target: Position, approach: Direction) -> Path {
        let Some(target_coord) = target.to_coord() else {
            return Path::new();
        };
        if self.terrain.blocked_at(target_coord) {
            tracing::trace!("Target {} is blocked", target);
            return Path::new();
        }

        let Some(goal) =
            target_coord.step(approach.opposite(), self.travel.width(), self.travel.height())
        else {
            tracing::trace!("No cell to approach {} moving {}", target, approach);
            return Path::new();
        };
        if self.travel.blocked_at(goal) {
            tracing::trace!("Approach cell {} is blocked", goal.to_position());
            return Path::new();
        }

        let best = self
            .origins
            .iter()
            .filter_map(|&origin| find_path(&self.travel, origin, goal))
            .min_by_key(Vec::len);

        match best {
            Some(chain) => {
                let mut moves = path_to_moves(&chain);
                moves.push(approach);
                tracing::trace!(
                    "Path to {} approaching {}: {} moves",
                    target,
                    approach,
                    moves.len()
                );
                moves
            }
            None => Path::new(),
        }
    }

    /// Whether `target` can be reached from any side
    pub fn is_reachable(&self, target: Position) -> bool {
        Direction::ALL
            .into_iter()
            .any(|approach| !self.shortest_path(target, approach).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridParser;
    use crate::rules::RuleExtractor;

    fn open_map(width: usize, height: usize) -> ObstructionMap {
        let board = Board::from_rows(vec![vec![Default::default(); width]; height]);
        ObstructionMap::build(&RuleSet::new(), &board, &Default::default(), true)
    }

    fn navigator(text: &str) -> Navigator {
        let config = AnalyzerConfig::default();
        let board = GridParser::new(&config.format).parse(text).unwrap();
        let rules = RuleExtractor::new(&config).extract(&board);
        Navigator::new(&board, &rules, &config)
    }

    // Row 1 holds the rules, baba starts at (2,2) on a 5x5 board
    const OPEN_BOARD: &str = "\
y/x | 1 | 2 | 3 | 4 | 5 |
---
  1 | text_baba | text_is | text_you |  |  |
  2 |  | baba |  |  |  |
  3 |  |  |  |  |  |
  4 |  |  |  |  |  |
  5 |  |  |  |  |  |
";

    #[test]
    fn test_pathfind_straight_line() {
        let map = open_map(6, 1);
        let path = find_path(&map, Coord::new(0, 0), Coord::new(5, 0)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.first(), Some(&Coord::new(0, 0)));
        assert_eq!(path.last(), Some(&Coord::new(5, 0)));
    }

    #[test]
    fn test_pathfind_same_start_goal() {
        let map = open_map(3, 3);
        let path = find_path(&map, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
        assert_eq!(path, vec![Coord::new(1, 1)]);
    }

    #[test]
    fn test_pathfind_is_shortest() {
        let map = open_map(7, 7);
        let path = find_path(&map, Coord::new(0, 0), Coord::new(4, 6)).unwrap();
        assert_eq!(path.len() as u32, 4 + 6 + 1);
    }

    #[test]
    fn test_path_to_moves() {
        let chain = [
            Coord::new(1, 1),
            Coord::new(2, 1),
            Coord::new(2, 2),
            Coord::new(1, 2),
            Coord::new(1, 1),
        ];
        assert_eq!(
            path_to_moves(&chain),
            vec![Direction::Right, Direction::Down, Direction::Left, Direction::Up]
        );
        assert!(path_to_moves(&chain[..1]).is_empty());
    }

    #[test]
    fn test_final_move_right() {
        let nav = navigator(OPEN_BOARD);
        // Stand at (3,2), then move right into (4,2)
        let path = nav.shortest_path(Position::new(4, 2), Direction::Right);
        assert_eq!(path, vec![Direction::Right, Direction::Right]);
    }

    #[test]
    fn test_final_move_left() {
        let nav = navigator(OPEN_BOARD);
        // Stand at (5,2), then move left into (4,2)
        let path = nav.shortest_path(Position::new(4, 2), Direction::Left);
        assert_eq!(
            path,
            vec![
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Left
            ]
        );
    }

    #[test]
    fn test_adjacent_target_is_single_bump() {
        let nav = navigator(OPEN_BOARD);
        let path = nav.shortest_path(Position::new(3, 2), Direction::Right);
        assert_eq!(path, vec![Direction::Right]);
    }

    #[test]
    fn test_approach_side_off_board() {
        let nav = navigator(OPEN_BOARD);
        // Moving down into row 1 needs a cell in row 0
        assert!(nav.shortest_path(Position::new(4, 1), Direction::Down).is_empty());
        assert!(nav.shortest_path(Position::new(9, 9), Direction::Up).is_empty());
        assert!(nav.shortest_path(Position::new(0, 3), Direction::Up).is_empty());
    }

    #[test]
    fn test_goal_marked_stop_is_unreachable() {
        let text = "\
y/x | 1 | 2 | 3 | 4 | 5 |
---
  1 | text_baba | text_is | text_you |  |  |
  2 |  | baba |  | wall |  |
  3 | text_wall | text_is | text_stop |  |  |
";
        let nav = navigator(text);
        for approach in Direction::ALL {
            assert!(nav.shortest_path(Position::new(4, 2), approach).is_empty());
        }
    }

    #[test]
    fn test_word_tile_target_is_reachable() {
        let nav = navigator(OPEN_BOARD);
        // Push "you" from below
        let path = nav.shortest_path(Position::new(3, 1), Direction::Up);
        assert_eq!(path, vec![Direction::Right, Direction::Up]);
    }

    #[test]
    fn test_route_avoids_word_tiles() {
        let text = "\
y/x | 1 | 2 | 3 |
---
  1 | text_baba | text_is | text_you |
  2 | baba      | text_rock |         |
  3 |           |         |         |
";
        let nav = navigator(text);
        // Detour below the rock tile to (3,3), then move up into (3,2)
        let path = nav.shortest_path(Position::new(3, 2), Direction::Up);
        assert_eq!(
            path,
            vec![Direction::Down, Direction::Right, Direction::Right, Direction::Up]
        );
    }

    #[test]
    fn test_no_controlled_entity() {
        let text = "y/x | 1 | 2 |\n---\n  1 | baba |  |\n";
        let nav = navigator(text);
        assert!(nav.origins().is_empty());
        assert!(nav.shortest_path(Position::new(2, 1), Direction::Right).is_empty());
    }

    #[test]
    fn test_enclosed_target_unreachable() {
        let text = "\
y/x | 1 | 2 | 3 | 4 | 5 |
---
  1 | text_wall | text_is | text_stop |  |  |
  2 | baba | wall |  |  |  |
  3 | wall |  |  |  |  |
  4 | text_baba | text_is | text_you |  |  |
";
        let nav = navigator(text);
        assert!(!nav.is_reachable(Position::new(5, 3)));
    }

    #[test]
    fn test_shortest_origin_wins() {
        let text = "\
y/x | 1 | 2 | 3 | 4 | 5 | 6 |
---
  1 | text_baba | text_is | text_you |  |  |  |
  2 | baba |  |  |  | baba |  |
";
        let nav = navigator(text);
        assert_eq!(nav.origins().len(), 2);
        let path = nav.shortest_path(Position::new(6, 2), Direction::Right);
        assert_eq!(path, vec![Direction::Right]);
    }

    /// Grid with walls (stop) and word tiles, plus both maps built from it
    fn hazard_maps(kinds: &[u8], width: usize) -> (ObstructionMap, ObstructionMap) {
        use crate::board::{Cell, EntityTag};
        use crate::rules::Rule;

        let rows: Vec<Vec<Cell>> = kinds
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|kind| match kind {
                        1 => Cell::new(vec![EntityTag::object("wall")]),
                        2 => Cell::new(vec![EntityTag::word("rock")]),
                        _ => Cell::default(),
                    })
                    .collect()
            })
            .collect();
        let board = Board::from_rows(rows);
        let rules: RuleSet = std::iter::once(Rule::new("wall", "stop")).collect();
        let properties = Default::default();
        (
            ObstructionMap::build(&rules, &board, &properties, true),
            ObstructionMap::build(&rules, &board, &properties, false),
        )
    }

    #[test]
    fn test_word_tile_wall_only_blocks_travel() {
        // A column of word tiles splits the board in the travel map only
        let kinds = [0, 2, 0, 0, 2, 0, 0, 2, 0];
        let (travel, terrain) = hazard_maps(&kinds, 3);
        let (start, goal) = (Coord::new(0, 1), Coord::new(2, 1));
        assert!(find_path(&travel, start, goal).is_none());
        assert_eq!(find_path(&terrain, start, goal).map(|p| p.len()), Some(3));
    }

    proptest::proptest! {
        #[test]
        fn prop_travel_route_implies_terrain_route(
            kinds in proptest::collection::vec(0u8..4, 36),
            start in 0usize..36,
            goal in 0usize..36,
        ) {
            let (travel, terrain) = hazard_maps(&kinds, 6);
            let start = Coord::new(start % 6, start / 6);
            let goal = Coord::new(goal % 6, goal / 6);

            if let Some(route) = find_path(&travel, start, goal) {
                let relaxed = find_path(&terrain, start, goal);
                proptest::prop_assert!(relaxed.is_some());
                proptest::prop_assert!(relaxed.map_or(0, |r| r.len()) <= route.len());
            }
        }
    }
}
