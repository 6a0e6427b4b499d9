pub mod compensation;
pub mod employees;
pub mod health;
