//! Progression systems

pub mod curve;
pub mod xp;
pub mod apply;
pub mod summary;
pub mod loader;

pub use curve::{CurveTable, LevelRow, generate_default_curve, MAX_LEVEL};
pub use xp::{calculate_xp, MAX_XP, MIN_XP};
pub use apply::{apply_xp, UserXpState};
pub use summary::{build_summary, LevelSummary};
pub use loader::{CurveCache, CurveSource, CurveSourceError, RonCurveSource};
