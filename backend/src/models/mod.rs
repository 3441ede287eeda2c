pub mod field;
pub mod record;
pub mod selection;

pub use field::*;
pub use record::*;
pub use selection::*;
