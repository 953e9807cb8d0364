use actix_cors::Cors;
use actix_files::Files;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::auth::JwtAuthenticator;
use crate::i18n::I18n;
use crate::models::config::ServerConfig;
use crate::routes::review::show_review;
use crate::search::http::HttpSearchClient;

pub mod auth;
pub mod domain;
pub mod dto;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod search;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Translation catalogs are loaded once; workers share clones.
    let i18n = I18n::load(&server_config.locales_dir, &server_config.default_locale)
        .map_err(|e| std::io::Error::other(format!("Failed to load locale catalogs: {e}")))?;

    let authenticator = JwtAuthenticator::new(
        server_config.secret.clone(),
        server_config.auth_service_url.clone(),
    );

    let search_client = HttpSearchClient::new(
        &server_config.search_api_url,
        server_config.search_api_key.clone(),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build search client: {e}")))?;

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_review)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(i18n.clone()))
            .app_data(web::Data::new(authenticator.clone()))
            .app_data(web::Data::new(search_client.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
