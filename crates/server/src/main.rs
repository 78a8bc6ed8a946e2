// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP server for the duty roster.
//!
//! The dispatcher maps each method+path pair to exactly one handler,
//! extracts form parameters, invokes the authentication gate or the duty
//! assignment engine, and translates the outcome into a redirect, a
//! rendered page, or an error status. The route table is built once at
//! startup and never mutated.
//!
//! Mutating routes do not validate the session cookie before acting;
//! this mirrors the system being reimplemented (see DESIGN.md).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Router,
    extract::{Form, Path, State as AxumState},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use duty_roster_api::{
    AddEmployeeOutcome, ApiError, AuthenticationService, RosterService, expired_session_cookie,
    session_cookie,
};
use duty_roster_domain::Employee;
use duty_roster_persistence::{DutyWithEmployee, Persistence, PersistenceError};

mod render;

use render::Renderer;

/// Duty Roster Server - browser-facing duty-roster manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Directory served under `/static/`
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Directory with override templates (index.html, register.html,
    /// calendar.html). Compiled-in defaults are used when omitted.
    #[arg(long)]
    templates: Option<PathBuf>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer. Handlers lock it for the scope of one
    /// repository operation and release on every exit path.
    persistence: Arc<Mutex<Persistence>>,
    /// Loaded page templates.
    renderer: Arc<Renderer>,
    /// Root directory for static file delivery.
    static_dir: Arc<PathBuf>,
}

/// Credentials form shared by login and registration.
#[derive(Debug, Deserialize)]
struct CredentialsForm {
    /// The login name.
    username: String,
    /// The raw password.
    password: String,
}

/// Form body for POST `/add`.
#[derive(Debug, Deserialize)]
struct AddDutyForm {
    /// The duty date (opaque text).
    date: String,
    /// Optional explicit employee reference. An empty string (the
    /// "random" option of the select) counts as absent.
    employee_id: Option<String>,
}

/// Form body for POST `/add_employee`.
#[derive(Debug, Deserialize)]
struct AddEmployeeForm {
    /// The submitted employee name.
    name: String,
}

/// Form body for the delete routes.
#[derive(Debug, Deserialize)]
struct DeleteForm {
    /// The id of the record to delete.
    id: i64,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DuplicateUsername { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: String::from("Username already exists"),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Persistence(_) => {
                error!(error = %err, "Service error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Builds a 302 Found redirect.
///
/// Constructed by hand because the routes of this system answer with 302
/// where axum's `Redirect` helpers emit 303/307.
fn redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Builds a 302 Found redirect that also sets a cookie.
fn redirect_with_cookie(location: &str, cookie: &str) -> Response {
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, cookie.to_string()),
        ],
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Informational page shown when an employee name is already taken.
///
/// Deliberately a 200-status page, not an error: the browser is bounced
/// back to the calendar after a short pause.
fn duplicate_employee_page(name: &str) -> String {
    format!(
        "<html>\n<head>\n    <meta http-equiv=\"refresh\" content=\"2;url=/calendar\" />\n\
         </head>\n<body>\n    <h1>Employee {name} already exists!</h1>\n</body>\n</html>"
    )
}

/// Client-error page shown when the submitted employee name is blank.
fn blank_name_page() -> String {
    String::from(
        "<html>\n<head>\n    <meta http-equiv=\"refresh\" content=\"2;url=/\" />\n\
         </head>\n<body>\n    <h1>Enter an employee name!</h1>\n</body>\n</html>",
    )
}

/// Handler for GET `/`.
async fn show_index(AxumState(state): AxumState<AppState>) -> Html<String> {
    Html(state.renderer.index().to_string())
}

/// Handler for GET `/login`.
///
/// The landing page carries the login form, so this renders the same
/// template as `/`.
async fn show_login(AxumState(state): AxumState<AppState>) -> Html<String> {
    Html(state.renderer.index().to_string())
}

/// Handler for GET `/register`.
async fn show_register(AxumState(state): AxumState<AppState>) -> Html<String> {
    Html(state.renderer.register().to_string())
}

/// Handler for GET `/calendar`.
///
/// Renders the duty list (date order), the employee list, and the
/// employee select options as substituted fragments.
async fn show_calendar(
    AxumState(state): AxumState<AppState>,
) -> Result<Html<String>, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let duties: Vec<DutyWithEmployee> = persistence.list_duties_joined_by_date()?;
    let employees: Vec<Employee> = persistence.list_employees()?;
    drop(persistence);

    let duties_html: String = duties
        .iter()
        .map(|duty| {
            format!(
                "<li>{} - {}\n\
                 <form action=\"/delete_duty\" method=\"post\" style=\"display:inline;\">\n\
                 <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
                 <button type=\"submit\">Delete</button>\n</form>\n</li>",
                duty.date, duty.employee_name, duty.id
            )
        })
        .collect();

    let employees_html: String = employees
        .iter()
        .map(|employee| {
            format!(
                "<li>{}\n\
                 <form action=\"/delete_employee\" method=\"post\" style=\"display:inline;\">\n\
                 <input type=\"hidden\" name=\"id\" value=\"{}\">\n\
                 <button type=\"submit\">Delete</button>\n</form>\n</li>",
                employee.name, employee.id
            )
        })
        .collect();

    let options_html: String = employees
        .iter()
        .map(|employee| format!("<option value=\"{}\">{}</option>", employee.id, employee.name))
        .collect();

    let page: String = render::substitute(
        state.renderer.calendar(),
        &[
            ("duties", duties_html.as_str()),
            ("employees", employees_html.as_str()),
            ("employees_options", options_html.as_str()),
            ("message", ""),
        ],
    );

    Ok(Html(page))
}

/// Handler for POST `/login`.
///
/// Good credentials set the session cookie and redirect to the calendar;
/// bad credentials redirect back to the login page.
async fn handle_login(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let user =
        AuthenticationService::authenticate(&mut persistence, &form.username, &form.password)?;
    drop(persistence);

    Ok(match user {
        Some(user) => redirect_with_cookie("/calendar", &session_cookie(&user)),
        None => redirect("/login"),
    })
}

/// Handler for POST `/register`.
async fn handle_register(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let result = AuthenticationService::register(&mut persistence, &form.username, &form.password);
    drop(persistence);

    match result {
        Ok(_) => Ok(redirect("/login")),
        Err(err @ ApiError::DuplicateUsername { .. }) => {
            info!(error = %err, "Registration rejected");
            Ok((StatusCode::BAD_REQUEST, "Username already exists").into_response())
        }
        Err(err) => Err(HttpError::from(err)),
    }
}

/// Handler for POST `/add`.
///
/// An explicit `employee_id` wins; otherwise the engine picks a random
/// employee, and silently creates nothing when none exist.
async fn handle_add_duty(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<AddDutyForm>,
) -> Result<Response, HttpError> {
    let employee_id: Option<i64> = match form.employee_id.as_deref().filter(|raw| !raw.is_empty())
    {
        Some(raw) => Some(raw.parse().map_err(|_| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("employee_id must be numeric: {raw}"),
        })?),
        None => None,
    };

    let mut persistence = state.persistence.lock().await;
    RosterService::assign_duty(&mut persistence, &form.date, employee_id)?;
    drop(persistence);

    Ok(redirect("/calendar"))
}

/// Handler for POST `/add_employee`.
async fn handle_add_employee(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<AddEmployeeForm>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    let outcome = RosterService::add_employee(&mut persistence, &form.name);
    drop(persistence);

    match outcome {
        Ok(AddEmployeeOutcome::Created(_)) => Ok(redirect("/calendar")),
        Ok(AddEmployeeOutcome::Duplicate(name)) => {
            Ok((StatusCode::OK, Html(duplicate_employee_page(&name))).into_response())
        }
        Err(ApiError::InvalidInput { .. }) => {
            Ok((StatusCode::BAD_REQUEST, Html(blank_name_page())).into_response())
        }
        Err(err) => Err(HttpError::from(err)),
    }
}

/// Handler for POST `/delete_duty`.
async fn handle_delete_duty(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    RosterService::remove_duty(&mut persistence, form.id)?;
    drop(persistence);

    Ok(redirect("/calendar"))
}

/// Handler for POST `/delete_employee`.
async fn handle_delete_employee(
    AxumState(state): AxumState<AppState>,
    Form(form): Form<DeleteForm>,
) -> Result<Response, HttpError> {
    let mut persistence = state.persistence.lock().await;
    RosterService::remove_employee(&mut persistence, form.id)?;
    drop(persistence);

    Ok(redirect("/calendar"))
}

/// Handler for GET and POST `/logout`.
///
/// Overwrites the session cookie with an already-expired one and sends
/// the browser back to the login page.
async fn handle_logout() -> Response {
    redirect_with_cookie("/login", &expired_session_cookie())
}

/// Handler for GET `/static/{*path}`.
async fn serve_static(
    AxumState(state): AxumState<AppState>,
    Path(path): Path<String>,
) -> Response {
    // Refuse path traversal out of the static root.
    if path.split(['/', '\\']).any(|component| component == "..") {
        return not_found();
    }

    let full_path: PathBuf = state.static_dir.join(&path);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (StatusCode::OK, bytes).into_response(),
        Err(_) => not_found(),
    }
}

/// Fallback for unmatched method+path combinations.
async fn handle_not_found() -> Response {
    not_found()
}

/// Builds the route table.
///
/// A pure mapping from method+path to handler, constructed once at
/// process start and never mutated.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(show_index))
        .route("/login", get(show_login))
        .route("/login", post(handle_login))
        .route("/register", get(show_register))
        .route("/register", post(handle_register))
        .route("/calendar", get(show_calendar))
        .route("/logout", get(handle_logout))
        .route("/logout", post(handle_logout))
        .route("/static/{*path}", get(serve_static))
        .route("/add", post(handle_add_duty))
        .route("/add_employee", post(handle_add_employee))
        .route("/delete_duty", post(handle_delete_duty))
        .route("/delete_employee", post(handle_delete_employee))
        .fallback(handle_not_found)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Duty Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    // Load templates
    let renderer: Renderer = match &args.templates {
        Some(dir) => {
            info!("Loading templates from: {}", dir.display());
            Renderer::from_dir(dir)?
        }
        None => Renderer::builtin(),
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        renderer: Arc::new(renderer),
        static_dir: Arc::new(args.static_dir),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
