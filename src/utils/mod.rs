pub mod error;
pub mod html;
pub mod image;
