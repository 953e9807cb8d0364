use actix_session::Session;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::auth::{JwtAuthenticator, SESSION_TOKEN_KEY};
use crate::dto::review::PageRequestContext;
use crate::i18n::I18n;
use crate::models::config::ServerConfig;
use crate::routes::{base_context, redirect, render_template};
use crate::search::http::HttpSearchClient;
use crate::services::review::{PageLoad, load_review_page};

/// First language tag of an `Accept-Language` header value, quality weights
/// stripped.
fn locale_hint(value: &str) -> Option<String> {
    value
        .split(',')
        .next()
        .map(|tag| tag.split(';').next().unwrap_or(tag).trim())
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .map(str::to_string)
}

#[get("/utilities/quick-review")]
pub async fn show_review(
    req: HttpRequest,
    session: Session,
    auth: web::Data<JwtAuthenticator>,
    i18n: web::Data<I18n>,
    search: web::Data<HttpSearchClient>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // The login redirect's return target must survive a cross-origin hop to
    // the auth service, so reconstruct the absolute URL.
    let url = {
        let info = req.connection_info();
        format!("{}://{}{}", info.scheme(), info.host(), req.uri())
    };

    let ctx = PageRequestContext {
        url,
        token: session.get::<String>(SESSION_TOKEN_KEY).unwrap_or_default(),
        locale: req
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(locale_hint),
    };

    match load_review_page(auth.get_ref(), i18n.get_ref(), search.get_ref(), &ctx).await {
        Ok(PageLoad::Redirect(target)) => redirect(&target),
        Ok(PageLoad::Page(data)) => {
            let mut context = base_context(
                &flash_messages,
                "quick-review",
                &server_config.auth_service_url,
            );
            context.insert("title", &data.meta.title);
            context.insert("assets", &data.assets);
            render_template(&tera, "review/index.html", &context)
        }
        Err(e) => {
            log::error!("Failed to load quick-review page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
