mod canonicalize;
mod check;
mod find;
mod hash;
mod name_hash;

pub use canonicalize::cmd_canonicalize;
pub use check::{CheckOptions, cmd_check};
pub use find::cmd_find;
pub use hash::cmd_hash;
pub use name_hash::cmd_name_hash;
