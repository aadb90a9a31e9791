mod issue;

pub use issue::{normalize, Issue};
