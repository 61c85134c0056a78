//! Obstruction maps, pathfinding, reachability and plan validation

pub mod obstruction;
pub mod pathfinding;
pub mod reachability;
pub mod validation;

pub use obstruction::ObstructionMap;
pub use pathfinding::Navigator;
pub use reachability::{group_by_row, is_entity_reachable, reachable_entities, ReachableEntity};
pub use validation::{
    validate_options, validate_plan, MoveOptions, Plan, ValidatedMoveOptions, ValidatedPlan,
    Waypoint,
};
