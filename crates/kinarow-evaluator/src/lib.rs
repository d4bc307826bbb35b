//! Move evaluation for generalized tic-tac-toe boards.
//!
//! This crate implements a two-level evaluation architecture on top of the
//! line structures from `kinarow-engine`:
//!
//! 1. **Offensive Evaluation** ([`offense`]) - Scores one player's pressure on
//!    every cell: each winning line the player could still complete adds an
//!    exponential weight to the line's unoccupied cells.
//!
//! 2. **Move Selection** ([`selector`]) - Runs the offensive evaluation for
//!    the mover and for the opponent, blends the two weight grids with the
//!    defensiveness factor, and recommends the arg-max cell.
//!
//! # Architecture
//!
//! ```text
//! Move Selection (terminal verdicts + blended arg-max)
//!     ↓ uses
//! Offensive Evaluation (per-cell pressure for one role)
//! ```
//!
//! # Design: One Ply of Pattern Completion
//!
//! There is no game tree. The advisor looks exactly one hypothetical move
//! ahead: the exponential line weights make the highest-scoring cell strongly
//! correlated with an immediate win or block, and that correlation is the
//! entire intelligence of the system.
//!
//! **Advantages:**
//!
//! - Fast and bounded (one pass over the lines per role)
//! - Interpretable (the weight grids can be inspected and are logged at
//!   debug level)
//!
//! **Limitations:**
//!
//! - No multi-move planning (forks are only found when one ply away)
//! - Play is plausible, not optimal
//!
//! Evaluation is a pure function of the precomputed line structures and a
//! board snapshot; repeated calls are independent and may run concurrently
//! against one selector.

pub mod offense;
pub mod selector;
pub mod weight_grid;
