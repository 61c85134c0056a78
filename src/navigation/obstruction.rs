//! Impassability maps derived from the active rules
//!
//! A cell is obstructed when any ordinary object in it is `stop` or `defeat`,
//! or is `hot` while some controlled kind is `melt`. Word tiles obstruct only
//! when the map is built to avoid them.

use ahash::AHashSet;

use crate::board::grid::Grid;
use crate::board::{Board, EntityTag};
use crate::core::config::PropertyNames;
use crate::core::types::{Coord, Position};
use crate::rules::RuleSet;

/// Boolean grid aligned to the board; `true` is impassable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstructionMap {
    cells: Grid<bool>,
}

impl ObstructionMap {
    pub fn build(
        rules: &RuleSet,
        board: &Board,
        properties: &PropertyNames,
        avoid_word_tiles: bool,
    ) -> Self {
        let hazards = HazardKinds::from_rules(rules, properties);
        let cells = board.grid().map(|cell| {
            cell.tags()
                .iter()
                .any(|tag| hazards.blocks(tag, avoid_word_tiles))
        });
        let map = Self { cells };
        tracing::debug!(
            "Built obstruction map ({} blocked, avoid_word_tiles={})",
            map.blocked_count(),
            avoid_word_tiles
        );
        map
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// Whether a 1-based position is impassable. Off-board counts as blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        pos.to_coord().map_or(true, |coord| self.blocked_at(coord))
    }

    pub(crate) fn blocked_at(&self, coord: Coord) -> bool {
        self.cells.get(coord).copied().unwrap_or(true)
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|(_, blocked)| **blocked).count()
    }
}

/// Entity kinds that make a cell impassable under the current rules
struct HazardKinds<'a> {
    kinds: AHashSet<&'a str>,
}

impl<'a> HazardKinds<'a> {
    fn from_rules(rules: &'a RuleSet, properties: &'a PropertyNames) -> Self {
        let mut kinds: AHashSet<&str> = rules
            .subjects_with(&properties.stop)
            .chain(rules.subjects_with(&properties.defeat))
            .collect();

        let controlled_melts = rules
            .subjects_with(&properties.you)
            .any(|you| rules.contains(you, &properties.melt));
        if controlled_melts {
            kinds.extend(rules.subjects_with(&properties.hot));
        }

        Self { kinds }
    }

    fn blocks(&self, tag: &EntityTag, avoid_word_tiles: bool) -> bool {
        if tag.word_tile {
            avoid_word_tiles
        } else {
            self.kinds.contains(tag.name.as_str())
        }
    }
}
