pub mod error;
pub mod feature_flags;

// Identity and access
pub mod access;
pub mod auth;
pub mod navigation;
pub mod role;
pub mod session;

// Forms and portal content
pub mod dashboard;
pub mod requests;

pub use error::*;
pub use feature_flags::*;

pub use access::*;
pub use auth::*;
pub use navigation::*;
pub use role::*;
pub use session::*;

pub use dashboard::*;
pub use requests::*;
