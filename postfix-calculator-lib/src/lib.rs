pub mod interpreter;

pub use interpreter::error::CalculatorError;
pub use interpreter::evaluate;
