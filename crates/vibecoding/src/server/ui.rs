use axum::response::Html;

/// The single-page frontend.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
