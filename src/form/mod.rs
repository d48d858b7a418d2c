mod actions;
mod edits;
mod error;
mod history;
mod placement;
mod session;

pub use actions::{CommandOutcome, FormCommand};
pub use edits::{delete_field, delete_row, rename_field};
pub use error::PlacementError;
pub use history::History;
pub use placement::resolve_drop;
pub use session::FormSession;
