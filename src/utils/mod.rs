pub mod random;
pub mod validation;

pub use random::RandomNumbers;
pub use validation::{InputLine, InputValidator};
