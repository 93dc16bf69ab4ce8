use actix_web::web;

use crate::handlers::{home::home, json_error::not_found};

mod contact;
mod content;
mod system;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(contact::config_routes)
            .configure(content::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::route().to(not_found));
}
