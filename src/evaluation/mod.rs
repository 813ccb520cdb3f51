//! Route cost evaluation.
//!
//! Full closed-route costs plus the O(1) removal and insertion deltas that
//! keep a tour's running cost current.

mod evaluator;

pub use evaluator::RouteEvaluator;
