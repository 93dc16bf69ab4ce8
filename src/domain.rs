pub mod entities;
pub mod rules;
pub mod use_cases;
