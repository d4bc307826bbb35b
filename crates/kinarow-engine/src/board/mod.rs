pub use self::{board_state::*, text::*};

pub(crate) mod board_state;
pub(crate) mod text;
