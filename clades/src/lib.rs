pub mod name;
pub mod node;
pub mod who;

pub use name::{CladeName, NameError, NameParser};
pub use node::CladeNode;
pub use who::WhoVariant;
