use actix_web::web;
use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .service(content::get_site)
            .service(content::list_packages)
            .service(content::list_projects)
            .service(content::get_project)
            .service(content::list_process_steps)
    );
}
