pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod persist;
pub mod reference;
pub mod session;
pub mod timer;
