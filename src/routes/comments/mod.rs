mod comment;
mod routes;

pub use comment::*;
pub use routes::comment_routes;
