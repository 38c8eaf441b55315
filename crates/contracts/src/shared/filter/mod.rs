pub mod condition;
pub mod operator;
pub mod value;

pub use condition::*;
pub use operator::*;
pub use value::*;
