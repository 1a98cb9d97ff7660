//! Per-tick systems run by the simulation, in this order:
//! collision (platform landing) then movement (input).

pub mod collision;
pub mod movement;
