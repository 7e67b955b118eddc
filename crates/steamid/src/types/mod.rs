mod account;
mod auth;
mod instance;
mod universe;
mod url;

pub use account::*;
pub use auth::*;
pub use instance::*;
pub use universe::*;
pub use url::*;
