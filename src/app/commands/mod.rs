pub mod generate;
pub mod resolve;
