use askama::Template;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const GENERIC_ERROR_HEADING: &str = "Error interno";
pub const GENERIC_ERROR_MESSAGE: &str = "Algo salió mal. Intentalo más tarde.";
pub const NOT_FOUND_HEADING: &str = "Página no encontrada";

/// Página mínima de mensaje. Nunca incluye detalles de la falla.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub heading: &'static str,
    pub message: &'static str,
    pub show_home_link: bool,
}

pub fn generic_error_response() -> Response {
    let page = MessageTemplate {
        heading: GENERIC_ERROR_HEADING,
        message: GENERIC_ERROR_MESSAGE,
        show_home_link: false,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
}

pub fn not_found_response() -> Response {
    let page = MessageTemplate {
        heading: NOT_FOUND_HEADING,
        message: "La dirección solicitada no existe.",
        show_home_link: true,
    };
    (StatusCode::NOT_FOUND, page).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[tokio::test]
    async fn test_generic_error_page() {
        let response = generic_error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.starts_with("<h1>Error interno</h1><p>Algo salió mal. Intentalo más tarde.</p>"));
        assert!(!body.contains("href"));
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let response = not_found_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains(NOT_FOUND_HEADING));
        assert!(body.contains("href=\"/\""));
    }
}
