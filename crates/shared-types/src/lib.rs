pub mod error;
pub mod config;

// Session and access control
pub mod access;
pub mod models;

// Sales domain
pub mod display;
pub mod filter;
pub mod listing;
pub mod login;
pub mod order;

pub use error::*;
pub use config::*;

pub use access::*;
pub use models::*;

pub use display::*;
pub use filter::*;
pub use listing::*;
pub use login::*;
pub use order::*;
