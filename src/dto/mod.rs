pub mod admin_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod contact_dto;
pub mod driver_dto;
pub mod favorite_dto;
pub mod profile_dto;
pub mod response;
pub mod vehicle_dto;
