pub mod card;
pub mod list;
pub mod reorder;
pub mod snapshot;

pub use card::Card;
pub use list::List;
pub use reorder::{renumber, shift, Sequenced};
pub use snapshot::BoardSnapshot;
