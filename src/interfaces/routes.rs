use actix_web::web;

use crate::handlers::home::home;

mod auth;
mod contact;
mod json_error;
mod projects;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(contact::config_routes)
            .configure(auth::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
