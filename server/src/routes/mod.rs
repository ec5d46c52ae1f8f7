use actix_web::{error, web, HttpRequest};

use errors::Error;

pub mod admin;
pub mod games;
pub mod signups;

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    Error::BadRequest(err.to_string()).into()
}

fn path_error(_err: error::PathError, _req: &HttpRequest) -> error::Error {
    Error::NotFound("Not Found".into()).into()
}

async fn not_found() -> Result<web::Json<()>, Error> {
    Err(Error::NotFound("Not Found".into()))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::scope("/api")
                .route("/games/{id}", web::get().to(games::get_game))
                .route("/signup/{game_id}", web::post().to(signups::create))
                .service(
                    web::scope("/admin")
                        .service(
                            web::scope("/games")
                                .route("", web::get().to(admin::list_games))
                                .route("", web::post().to(admin::create_game))
                                .route("/{id}/signups", web::get().to(admin::get_signups)),
                        )
                        .route(
                            "/signups/{id}/payment",
                            web::put().to(admin::update_payment),
                        ),
                ),
        )
        .default_service(web::to(not_found));
}
