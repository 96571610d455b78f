pub mod catalog_service;
pub mod cloudinary_service;
pub mod contact_service;
