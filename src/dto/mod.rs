pub mod project_dto;
pub mod registration_dto;
pub mod request_dto;
