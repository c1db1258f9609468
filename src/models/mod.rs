pub mod issue;
pub mod project;
pub mod record;

pub use issue::*;
pub use project::*;
pub use record::*;
