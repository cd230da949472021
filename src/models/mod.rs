pub mod arn;
pub mod requests;
pub mod responses;
