pub mod booking;
pub mod contact_message;
pub mod driver;
pub mod favorite;
pub mod profile;
pub mod setting;
pub mod user;
pub mod vehicle;
