mod routes;
mod user;

pub use routes::user_routes;
pub use user::*;
