pub use self::{cell::*, config::*, line_set::*, peg::*, slot_index::*};

pub(crate) mod cell;
pub(crate) mod config;
pub(crate) mod line_set;
pub(crate) mod peg;
pub(crate) mod slot_index;
