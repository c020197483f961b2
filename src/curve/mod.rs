pub(crate) mod control_points;
pub(crate) mod evaluator;
