pub mod responder;
pub mod rules;

pub use responder::respond;
