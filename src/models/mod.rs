pub mod common;
pub mod failure;
pub mod requests;
pub mod responses;
