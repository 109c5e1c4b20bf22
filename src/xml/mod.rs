pub mod dom;
pub mod strip;

pub use dom::*;
pub use strip::*;
