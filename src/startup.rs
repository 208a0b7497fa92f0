use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpRequest, HttpServer, web};
use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_actix_web::TracingLogger;

use crate::configuration::{Configuration, DatabaseConfigs, StorageBackend};
use crate::repository::{
    CommentRepository, InMemoryCommentRepository, InMemoryUserRepository,
    PostgresCommentRepository, PostgresUserRepository, UserRepository,
};
use crate::routes::{comment_routes, health_check, user_routes};
use crate::services::{CommentService, CreateUser};
use crate::utils::build_error_response;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let repositories = Repositories::build(&config).await?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let server = run(listener, repositories).context("Failed to run Actix web server")?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        self.server.await.context("Server stopped with an error")
    }
}

/// The storage implementations the services are wired with.
pub struct Repositories {
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub async fn build(config: &Configuration) -> Result<Self, anyhow::Error> {
        match config.application.storage {
            StorageBackend::Postgres => {
                let pool = get_connection_pool(&config.database);
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate the database")?;

                Ok(Self {
                    comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
                    users: Arc::new(PostgresUserRepository::new(pool)),
                })
            }
            StorageBackend::InMemory => Ok(Self::in_memory()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            comments: Arc::new(InMemoryCommentRepository::default()),
            users: Arc::new(InMemoryUserRepository::default()),
        }
    }
}

pub fn get_connection_pool(config: &DatabaseConfigs) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect_lazy_with(config.connect_options())
}

pub fn run(tcp_listener: TcpListener, repositories: Repositories) -> Result<Server, anyhow::Error> {
    let comment_service = web::Data::new(CommentService::new(repositories.comments));
    let create_user = web::Data::new(CreateUser::new(repositories.users));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(configure_routes)
            .app_data(comment_service.clone())
            .app_data(create_user.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

// Malformed bodies and query strings get the same JSON envelope as every other 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err)
}

fn bad_request<E>(err: E) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = build_error_response(StatusCode::BAD_REQUEST, err.to_string());
    InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(web::scope("/comments").configure(comment_routes))
        .service(web::scope("/users").configure(user_routes));
}
