use crate::routes;
use actix_web::web;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(routes::create_comment))
            .route(web::get().to(routes::get_all_comments)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(routes::get_comment_by_id))
            .route(web::put().to(routes::update_comment))
            .route(web::delete().to(routes::delete_comment)),
    );
}
