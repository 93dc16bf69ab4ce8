pub mod contact;
pub mod content;
pub mod home;
pub mod json_error;
pub mod system;
