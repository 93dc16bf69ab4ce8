use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    content::{find_project, PROCESS_STEPS, PROJECTS, SERVICES, SITE},
    entities::content::{Project, ProjectFilter},
    errors::AppError,
};

#[get("/site")]
pub async fn get_site() -> impl Responder {
    HttpResponse::Ok().json(&SITE)
}

#[get("/packages")]
pub async fn list_packages() -> impl Responder {
    HttpResponse::Ok().json(&SERVICES)
}

#[get("/projects")]
pub async fn list_projects(filter: web::Query<ProjectFilter>) -> impl Responder {
    let projects: Vec<&Project> = PROJECTS.iter().filter(|p| filter.matches(p)).collect();

    HttpResponse::Ok().json(serde_json::json!({
        "projects": projects,
        "total": projects.len(),
    }))
}

#[get("/projects/{id}")]
pub async fn get_project(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    find_project(&id)
        .map(|project| HttpResponse::Ok().json(project))
        .ok_or_else(|| AppError::NotFound(format!("project '{}'", id)))
}

#[get("/process")]
pub async fn list_process_steps() -> impl Responder {
    HttpResponse::Ok().json(&PROCESS_STEPS)
}
