pub mod errors;
pub mod prices;
pub mod transcript;
