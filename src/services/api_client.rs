// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP con el header
// X-Requested-With que el backend usa para distinguir peticiones AJAX.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::config::CONFIG;

/// Hacer una petición JSON al backend. Sin retry ni backoff: un status de
/// error se devuelve como Err genérico y el caller decide qué hacer.
pub async fn make_request(
    url: &str,
    method: &str,
    body: Option<serde_json::Value>,
) -> Result<serde_json::Value, String> {
    let full_url = if CONFIG.backend_url.is_empty() {
        url.to_string()
    } else {
        format!("{}{}", CONFIG.backend_url, url)
    };

    let request = build_request(&full_url, method, body.as_ref())?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Construir la petición con el header AJAX y, si hay body, el Content-Type
/// JSON que agrega `.json()`. Separado de `make_request` para poder
/// inspeccionar los headers resultantes.
pub fn build_request(
    url: &str,
    method: &str,
    body: Option<&serde_json::Value>,
) -> Result<Request, String> {
    let builder = request_builder(url, method)?.header("X-Requested-With", "XMLHttpRequest");

    match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| format!("Serialization error: {}", e)),
        None => builder
            .build()
            .map_err(|e| format!("Request build error: {}", e)),
    }
}

fn request_builder(url: &str, method: &str) -> Result<RequestBuilder, String> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Request::get(url)),
        "POST" => Ok(Request::post(url)),
        "PUT" => Ok(Request::put(url)),
        "PATCH" => Ok(Request::patch(url)),
        "DELETE" => Ok(Request::delete(url)),
        other => Err(format!("Unsupported HTTP method: {}", other)),
    }
}
