pub mod category;
pub mod fallback;
pub mod question;
pub mod quiz;
