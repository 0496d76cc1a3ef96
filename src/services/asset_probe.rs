// ============================================================================
// ASSET PROBE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sonda de existencia del asset GLB: un HEAD por invocación, sin caché
// entre invocaciones (el parámetro anti-caché fuerza el bypass).
// NO tiene lógica de negocio, solo hace el request HTTP.
// ============================================================================

use crate::config::CONFIG;
use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;

/// Resultado de la sonda de existencia
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// Respuesta 2xx: el asset existe
    Exists,
    /// Respuesta no-2xx (status incluido)
    Missing(u16),
    /// Error de transporte: red caída, DNS, abort por timeout
    Failed(String),
}

/// Derivar la ruta GLB hermana de un asset fuente.
/// Sustitución de extensión .obj -> .glb; idempotente sobre la ruta
/// (una ruta ya .glb pasa sin cambios).
pub fn derive_glb_path(model_path: &str) -> String {
    match model_path.strip_suffix(".obj") {
        Some(stem) => format!("{}.glb", stem),
        None => model_path.to_string(),
    }
}

/// Agregar parámetro anti-caché a una ruta GLB
pub fn cache_busted_url(glb_path: &str, version: u64) -> String {
    format!("{}?v={}", glb_path, version)
}

/// Resolver la URL AR final de un plato: extensión GLB + timestamp anti-caché
pub fn resolve_asset_url(model_path: &str) -> String {
    cache_busted_url(&derive_glb_path(model_path), js_sys::Date::now() as u64)
}

/// Sondear la existencia del asset con un HEAD.
/// Timeout explícito vía AbortController: si la sonda no responde en
/// `timeout_ms`, el fetch se aborta y el resultado es Failed.
pub async fn probe_asset(url: &str, timeout_ms: u32) -> ProbeOutcome {
    log::info!("🔍 [PROBE] HEAD {} (timeout {} ms)", url, timeout_ms);

    let controller = web_sys::AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());

    // El Drop del Timeout cancela el callback si la sonda termina antes
    let _timeout = controller.clone().map(|ctrl| {
        Timeout::new(timeout_ms, move || {
            log::warn!("⏰ [PROBE] Timeout de sonda alcanzado, abortando request");
            ctrl.abort();
        })
    });

    let request = RequestBuilder::new(url)
        .method(Method::HEAD)
        .abort_signal(signal.as_ref());

    match request.send().await {
        Ok(response) if response.ok() => {
            log::info!("✅ [PROBE] Asset disponible ({})", response.status());
            ProbeOutcome::Exists
        }
        Ok(response) => {
            log::warn!("⚠️ [PROBE] Asset no disponible: HTTP {}", response.status());
            ProbeOutcome::Missing(response.status())
        }
        Err(e) => {
            log::warn!("⚠️ [PROBE] Error de red sondeando asset: {}", e);
            ProbeOutcome::Failed(format!("Network error: {}", e))
        }
    }
}

/// Sondear con el timeout configurado globalmente
pub async fn probe_asset_default(url: &str) -> ProbeOutcome {
    probe_asset(url, CONFIG.probe_timeout_ms).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obj_extension_replaced_with_glb() {
        assert_eq!(
            derive_glb_path("/models/pizza/source/Pizza.obj"),
            "/models/pizza/source/Pizza.glb"
        );
    }

    #[test]
    fn test_glb_path_passes_through_unchanged() {
        // Escenario Gourmet Burger: la extensión ya es GLB, no hay sustitución
        assert_eq!(
            derive_glb_path("/models/burger/source/Buger.glb"),
            "/models/burger/source/Buger.glb"
        );
    }

    #[test]
    fn test_derivation_is_idempotent_on_path() {
        let once = derive_glb_path("/models/salad/source/Salad.obj");
        let twice = derive_glb_path(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_obj_in_middle_of_path_untouched() {
        // Solo se sustituye la extensión final, no ".obj" en medio de la ruta
        assert_eq!(
            derive_glb_path("/models/object.objects/Model.obj"),
            "/models/object.objects/Model.glb"
        );
        assert_eq!(
            derive_glb_path("/models/thing.obj.bak"),
            "/models/thing.obj.bak"
        );
    }

    #[test]
    fn test_cache_busted_url_differs_only_in_query() {
        let url = cache_busted_url("/models/burger/source/Buger.glb", 1700000000000);
        assert_eq!(url, "/models/burger/source/Buger.glb?v=1700000000000");
        let (path, query) = url.split_once('?').expect("query presente");
        assert_eq!(path, "/models/burger/source/Buger.glb");
        assert!(query.starts_with("v="));
    }
}
