mod auth_handle;
mod data_handle;

pub use auth_handle::*;
pub use data_handle::*;
