pub mod archive_client;
pub mod error;
mod response;
