//! Action plan construction.

pub mod builder;

pub use builder::{build_action_plan, ActionPlanBuilder, ActionPlanItem};
