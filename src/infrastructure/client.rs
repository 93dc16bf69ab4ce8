pub mod contact_api;
