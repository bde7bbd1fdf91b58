pub mod currency;
pub mod errors;
pub mod jwt;
pub mod validation;
