pub mod common;
pub mod login;
pub mod signup;
