use crate::routes;
use actix_web::web;

pub fn user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(routes::create_user)));
}
