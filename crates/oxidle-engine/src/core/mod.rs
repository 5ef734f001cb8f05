pub use self::{grid::*, verdict::*, word_list::*};

pub(crate) mod grid;
pub(crate) mod verdict;
pub(crate) mod word_list;
