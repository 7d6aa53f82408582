pub mod aggregate;
pub mod course;

pub use aggregate::*;
pub use course::*;
