mod credential_service;
mod token_service;

pub use credential_service::*;
pub use token_service::*;
