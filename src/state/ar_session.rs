// ============================================================================
// AR SESSION - Sesión efímera de visualización AR
// ============================================================================
// Máquina de estados: Checking -> Ready | Unavailable, Ready -> Closed.
// Como máximo existe UNA sesión viva a la vez (la posee el ArLauncher).
// ============================================================================

use crate::models::Dish;
use crate::services::asset_probe::ProbeOutcome;

/// Handle opaco de sesión (monotónico). Permite ignorar cierres y
/// resultados de sonda que llegan tarde para sesiones ya reemplazadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle(pub u64);

/// Estado de la sesión AR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArSessionState {
    /// Sonda de existencia del asset en vuelo
    Checking,
    /// El asset GLB no existe o no es alcanzable (terminal, sin overlay)
    Unavailable,
    /// Asset verificado, overlay visible
    Ready,
    /// Overlay cerrado por el usuario (terminal). La sesión se marca Closed
    /// y se suelta en el mismo paso: un slot en None equivale a sesión cerrada.
    Closed,
}

impl ArSessionState {
    /// Transición desde Checking según el resultado de la sonda.
    /// Cualquier fallo (status no-2xx, error de transporte, timeout)
    /// colapsa a Unavailable; no hay reintento automático.
    pub fn after_probe(outcome: &ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Exists => ArSessionState::Ready,
            ProbeOutcome::Missing(_) | ProbeOutcome::Failed(_) => ArSessionState::Unavailable,
        }
    }
}

/// Sesión AR efímera
#[derive(Debug, Clone)]
pub struct ArSession {
    pub handle: SessionHandle,
    pub dish: Dish,
    /// URL GLB derivada de model_path, con parámetro anti-caché
    pub resolved_asset_url: String,
    pub state: ArSessionState,
    /// El script del viewer falló al cargar (el modal muestra un error dedicado)
    pub viewer_load_failed: bool,
}

impl ArSession {
    pub fn new(handle: SessionHandle, dish: Dish, resolved_asset_url: String) -> Self {
        Self {
            handle,
            dish,
            resolved_asset_url,
            state: ArSessionState::Checking,
            viewer_load_failed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish() -> Dish {
        Dish {
            id: 1,
            name: "Gourmet Burger".to_string(),
            model_path: "/models/burger/source/Buger.glb".to_string(),
            image_path: "/models/burger_merged.webp".to_string(),
        }
    }

    #[test]
    fn test_new_session_starts_checking() {
        let session = ArSession::new(
            SessionHandle(1),
            dish(),
            "/models/burger/source/Buger.glb?v=123".to_string(),
        );
        assert_eq!(session.state, ArSessionState::Checking);
        assert!(!session.viewer_load_failed);
    }

    #[test]
    fn test_probe_success_transitions_to_ready() {
        assert_eq!(
            ArSessionState::after_probe(&ProbeOutcome::Exists),
            ArSessionState::Ready
        );
    }

    #[test]
    fn test_probe_404_transitions_to_unavailable() {
        assert_eq!(
            ArSessionState::after_probe(&ProbeOutcome::Missing(404)),
            ArSessionState::Unavailable
        );
    }

    #[test]
    fn test_probe_transport_error_transitions_to_unavailable() {
        // Timeout y error de red se tratan igual que un status no-2xx
        assert_eq!(
            ArSessionState::after_probe(&ProbeOutcome::Failed("Network error".to_string())),
            ArSessionState::Unavailable
        );
    }

    #[test]
    fn test_handles_compare_by_value() {
        assert_eq!(SessionHandle(7), SessionHandle(7));
        assert_ne!(SessionHandle(7), SessionHandle(8));
    }
}
