mod comments;
mod health_check;
mod users;

pub use comments::*;
pub use health_check::*;
pub use users::*;
