//! Server-rendered front for the operational management backend: contracts,
//! schedules, prospecting, BI dashboard, natural-language queries and
//! spreadsheet imports.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod view;

#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub use server::{build_tera, configure, run};

#[cfg(feature = "server")]
mod server {
    use std::collections::HashMap;

    use actix_cors::Cors;
    use actix_files::Files;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::backend::http::HttpBackend;
    use crate::forms::import::upload_config;
    use crate::middleware::RedirectUnauthorized;
    use crate::models::config::ServerConfig;
    use crate::routes::chatbot::ask_question;
    use crate::routes::contracts::{add_contract, delete_contract, show_contracts};
    use crate::routes::dashboard::show_dashboard;
    use crate::routes::import::{show_import, upload_import};
    use crate::routes::main::{health, login, logout, show_login};
    use crate::routes::proposals::{add_proposal, delete_proposal, show_proposals};
    use crate::routes::schedules::{add_schedule, delete_schedule, show_schedules};

    /// Parses every template matched by the `templates_dir` glob and registers
    /// the `script_json` filter.
    pub fn build_tera(templates_dir: &str) -> std::io::Result<Tera> {
        let mut tera = Tera::new(templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
        tera.register_filter("script_json", script_json);
        Ok(tera)
    }

    /// JSON that is safe inside an inline `<script>`: `<`, `>` and `&` are
    /// written as unicode escapes so no value can close the element.
    fn script_json(
        value: &tera::Value,
        _args: &HashMap<String, tera::Value>,
    ) -> tera::Result<tera::Value> {
        let json = serde_json::to_string(value)
            .map_err(|e| tera::Error::msg(format!("Failed to encode JSON: {e}")))?;
        Ok(tera::Value::String(
            json.replace('<', "\\u003c")
                .replace('>', "\\u003e")
                .replace('&', "\\u0026"),
        ))
    }

    /// Registers every page and action. Login, logout and health stay public;
    /// everything else answers a missing session with a redirect to login.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(health)
            .service(show_login)
            .service(login)
            .service(logout)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .app_data(upload_config())
                    .service(show_dashboard)
                    .service(show_contracts)
                    .service(add_contract)
                    .service(delete_contract)
                    .service(show_schedules)
                    .service(add_schedule)
                    .service(delete_schedule)
                    .service(show_proposals)
                    .service(add_proposal)
                    .service(delete_proposal)
                    .service(ask_question)
                    .service(show_import)
                    .service(upload_import),
            );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBackend::new(&server_config.api_url).map_err(|e| {
            std::io::Error::other(format!("Failed to create the backend client: {e}"))
        })?;

        // Keys and stores for sessions and flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key.clone()).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = build_tera(&server_config.templates_dir)?;

        let bind_address = (server_config.address.clone(), server_config.port);

        log::info!(
            "Serving on {}:{} against {}",
            server_config.address,
            server_config.port,
            server_config.api_url
        );

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(false) // set to true in prod
                        .cookie_domain(
                            (!server_config.domain.is_empty()).then(|| server_config.domain.clone()),
                        )
                        .build(),
                )
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &server_config.assets_dir))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(backend.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
