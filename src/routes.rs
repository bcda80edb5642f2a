use crate::{
    api::{attendance, health},
    config::Config,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(health::health);

    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/attendance")
                // /attendance/dashboard?search=
                .service(
                    web::resource("/dashboard").route(web::get().to(attendance::get_dashboard)),
                )
                // /attendance/employees?search=
                .service(
                    web::resource("/employees").route(web::get().to(attendance::list_employees)),
                )
                // /attendance/trends/{period}?from=&to=
                .service(
                    web::resource("/trends/{period}").route(web::get().to(attendance::get_trends)),
                )
                // /attendance/report
                .service(
                    web::resource("/report").route(web::get().to(attendance::download_report)),
                ),
        ),
    );
}
