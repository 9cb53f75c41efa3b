pub mod average;
pub mod form;
pub mod medicine;

pub use average::*;
pub use form::*;
pub use medicine::*;
