use actix_web::web;

pub mod alerts;
pub mod auth;
pub mod backend_health;
pub mod contacts;
pub mod registration;
pub mod vitals;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Vitals routes (require authentication)
    cfg.service(
        web::scope("/vitals")
            .wrap(AuthMiddleware)
            .service(vitals::record)
            .service(vitals::simulate)
            .service(vitals::latest)
            .service(vitals::history),
    );
    // Alert routes (require authentication)
    cfg.service(
        web::scope("/alerts")
            .wrap(AuthMiddleware)
            .service(alerts::sos)
            .service(alerts::resolve)
            .service(alerts::list),
    );
    // Emergency contact routes (require authentication)
    cfg.service(
        web::scope("/contacts")
            .wrap(AuthMiddleware)
            .service(contacts::list)
            .service(contacts::add)
            .service(contacts::update)
            .service(contacts::remove),
    );
}
