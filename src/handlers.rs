use axum::{
    body::Body,
    extract::{Path as AxumPath, State},
    http::{header, Response, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};

use crate::components::{DetailComponent, DetailState, DetailView, ListingComponent};
use crate::components::detail::render_missing;
use crate::errors::FolioError;
use crate::types::{AppState, PageMeta};
use crate::utils::{content_type_for, normalize_path};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/blogs", get(handle_blogs))
        .route("/blogs/", get(handle_blogs))
        .route("/blogs/:slug", get(handle_blog_post))
        .route("/static/*path", get(handle_static))
        .fallback(handle_fallback)
        .with_state(state)
}

/// The blog is the only section served; send visitors there
pub async fn handle_root() -> Redirect {
    Redirect::temporary("/blogs")
}

/// Handle the blog listing
pub async fn handle_blogs(State(state): State<AppState>) -> Result<impl IntoResponse, FolioError> {
    log::info!("Listing request received");
    let start_time = std::time::Instant::now();

    let records = state.store.all();
    let listing = ListingComponent::new(&state.config.site);
    let meta = listing.meta(records);
    let body = listing.render(records);
    let page = state.templates.render_page(meta, body, &state.config.site.name)?;

    log::info!("Listing request completed in {:?}ms", start_time.elapsed().as_millis());
    Ok(Html(page))
}

/// Handle a single blog post
pub async fn handle_blog_post(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
) -> Result<impl IntoResponse, FolioError> {
    log::info!("Post request received: '{}'", slug);

    let normalized = normalize_path(&slug);
    let mut view = DetailView::new(Some(normalized.as_str()).filter(|s| !s.is_empty()));
    let resolved = view.resolve(&state.store);
    let status = match resolved {
        DetailState::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    let (meta, body) = DetailComponent::new(&state.config.site).render(resolved);
    let page = state.templates.render_page(meta, body, &state.config.site.name)?;
    Ok((status, Html(page)))
}

/// Handle static file requests
pub async fn handle_static(
    State(state): State<AppState>,
    AxumPath(path): AxumPath<String>,
) -> Result<impl IntoResponse, FolioError> {
    let normalized = normalize_path(&path);
    if normalized.split('/').any(|seg| seg == ".." || seg.is_empty()) {
        log::warn!("Rejected static path: '{}'", path);
        return Err(FolioError::InvalidPath);
    }

    let requested = state.config.static_dir.join(&normalized);
    if !requested.is_file() {
        log::debug!("Static file not found: {:?}", requested);
        return Err(FolioError::NotFound);
    }

    let bytes = tokio::fs::read(&requested).await?;
    let mut resp = Response::new(Body::from(bytes));
    resp.headers_mut().insert(header::CONTENT_TYPE, header::HeaderValue::from_static(content_type_for(&requested)));
    Ok(resp)
}

/// Any other path gets the site not-found page
pub async fn handle_fallback(State(state): State<AppState>) -> Result<impl IntoResponse, FolioError> {
    let meta = PageMeta {
        title: format!("Page Not Found | {}", state.config.site.name),
        ..PageMeta::default()
    };
    let body = render_missing("Page Not Found", "The page you're looking for doesn't exist.");
    let page = state.templates.render_page(meta, body, &state.config.site.name)?;
    Ok((StatusCode::NOT_FOUND, Html(page)))
}
