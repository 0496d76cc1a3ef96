// ============================================================================
// AR LAUNCHER VIEWMODEL - Flujo check-then-display de la sesión AR
// ============================================================================
// Orquesta la máquina de estados de la sesión:
//   Checking -> Ready (sonda 2xx, se abre el overlay)
//   Checking -> Unavailable (no-2xx / error / timeout, alert de remediación)
//   Ready    -> Closed (control de cierre, se retira el overlay)
// Posee como máximo UNA sesión activa: abrir una nueva reemplaza la anterior.
// Single-flight por plato: se ignoran aperturas mientras su sonda está en vuelo.
// ============================================================================

use crate::models::catalog::find_dish;
use crate::services::asset_probe::{probe_asset_default, resolve_asset_url, ProbeOutcome};
use crate::services::viewer_loader::ensure_viewer_loaded;
use crate::state::{AppState, ArSession, ArSessionState, SessionHandle};
use crate::utils::i18n::remediation_message;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// ViewModel del lanzador de sesiones AR
#[derive(Clone)]
pub struct ArLauncher {
    state: AppState,
    next_handle: Rc<Cell<u64>>,
    /// Platos con sonda en vuelo (single-flight)
    probing: Rc<RefCell<HashSet<u32>>>,
}

/// Un resultado de sonda solo se aplica si la sesión actual sigue siendo la
/// que lo originó Y sigue en Checking. Sesiones reemplazadas, cerradas o ya
/// resueltas descartan el resultado.
fn probe_result_applies(session: Option<&ArSession>, handle: SessionHandle) -> bool {
    matches!(session, Some(s) if s.handle == handle && s.state == ArSessionState::Checking)
}

/// Cerrar la sesión actual si el handle corresponde. Devuelve la sesión
/// terminada (estado Closed) o None si el handle es obsoleto.
fn close_session(slot: &mut Option<ArSession>, handle: SessionHandle) -> Option<ArSession> {
    let is_current = slot.as_ref().map(|s| s.handle == handle).unwrap_or(false);
    if !is_current {
        return None;
    }

    // Closed es terminal: la sesión se suelta y el render retira el overlay
    let mut session = slot.take()?;
    session.state = ArSessionState::Closed;
    Some(session)
}

/// Marcar el fallo de carga del viewer sobre la sesión actual, sea cual sea.
/// El script se inserta una sola vez, así que el fallo puede llegar cuando la
/// sesión que lo insertó ya fue reemplazada: el error le pertenece a la viva.
fn mark_viewer_failure(slot: &mut Option<ArSession>) -> bool {
    match slot.as_mut() {
        Some(session) => {
            session.viewer_load_failed = true;
            true
        }
        None => false,
    }
}

impl ArLauncher {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            next_handle: Rc::new(Cell::new(1)),
            probing: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Abrir una sesión AR para un plato: deriva la URL GLB, sondea su
    /// existencia y abre el overlay o muestra el mensaje de remediación.
    pub fn open(&self, dish_id: u32) {
        let dish = match find_dish(dish_id) {
            Some(d) => d.clone(),
            None => {
                log::error!("❌ [AR] Plato desconocido: {}", dish_id);
                return;
            }
        };

        // Single-flight: una sonda en vuelo por plato
        if !self.probing.borrow_mut().insert(dish_id) {
            log::warn!("⚠️ [AR] Sonda ya en vuelo para '{}', ignorando", dish.name);
            return;
        }

        // Como máximo una sesión activa: abrir reemplaza la anterior
        if let Some(previous) = self.state.ar_session.borrow_mut().take() {
            log::info!("🔄 [AR] Sesión anterior ({:?}) reemplazada", previous.handle);
        }

        let handle = SessionHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);

        let resolved_url = resolve_asset_url(&dish.model_path);
        log::info!(
            "🚀 [AR] Abriendo sesión {:?} para '{}': {}",
            handle,
            dish.name,
            resolved_url
        );

        *self.state.ar_session.borrow_mut() =
            Some(ArSession::new(handle, dish, resolved_url.clone()));
        self.state.notify_change();

        let launcher = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = probe_asset_default(&resolved_url).await;
            launcher.probing.borrow_mut().remove(&dish_id);
            launcher.finish_check(handle, outcome);
        });
    }

    /// Cerrar la sesión activa. Handles obsoletos se ignoran.
    pub fn close(&self, handle: SessionHandle) {
        let closed = close_session(&mut self.state.ar_session.borrow_mut(), handle);

        match closed {
            Some(session) => {
                log::info!("👋 [AR] Sesión {:?} cerrada por el usuario", session.handle);
                self.state.notify_change();
            }
            None => {
                log::warn!("⚠️ [AR] close() con handle obsoleto {:?}, ignorando", handle);
            }
        }
    }

    /// Completar la fase Checking con el resultado de la sonda
    fn finish_check(&self, handle: SessionHandle, outcome: ProbeOutcome) {
        // La sesión pudo ser reemplazada o cerrada mientras la sonda volaba
        if !probe_result_applies(self.state.ar_session.borrow().as_ref(), handle) {
            log::info!("ℹ️ [AR] Resultado de sonda descartado para {:?}", handle);
            return;
        }

        if ArSessionState::after_probe(&outcome) == ArSessionState::Ready {
            if let Some(session) = self.state.ar_session.borrow_mut().as_mut() {
                session.state = ArSessionState::Ready;
            }
            log::info!("✅ [AR] Sesión {:?} lista, abriendo overlay", handle);

            // Registrar el viewer antes del primer uso (idempotente)
            let launcher = self.clone();
            if let Err(e) = ensure_viewer_loaded(move || {
                launcher.mark_viewer_load_failed();
            }) {
                log::error!("❌ [AR] Error insertando script del viewer: {:?}", e);
            }
        } else {
            // Unavailable es terminal: no se crea overlay, la sesión termina aquí
            if let Some(session) = self.state.ar_session.borrow_mut().take() {
                log::warn!("🚫 [AR] Asset no disponible para '{}'", session.dish.name);
            }

            let lang = self.state.language.borrow().clone();
            crate::dom::alert(&remediation_message(&lang));
        }

        self.state.notify_change();
    }

    /// Marcar que el script del viewer falló (el modal muestra error dedicado)
    fn mark_viewer_load_failed(&self) {
        let marked = mark_viewer_failure(&mut self.state.ar_session.borrow_mut());
        if marked {
            self.state.notify_change();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dish;

    fn dish() -> Dish {
        Dish {
            id: 1,
            name: "Gourmet Burger".to_string(),
            model_path: "/models/burger/source/Buger.glb".to_string(),
            image_path: "/models/burger_merged.webp".to_string(),
        }
    }

    fn session(handle: u64, state: ArSessionState) -> ArSession {
        let mut s = ArSession::new(
            SessionHandle(handle),
            dish(),
            "/models/burger/source/Buger.glb?v=123".to_string(),
        );
        s.state = state;
        s
    }

    #[test]
    fn test_probe_result_applies_to_matching_checking_session() {
        let slot = Some(session(1, ArSessionState::Checking));
        assert!(probe_result_applies(slot.as_ref(), SessionHandle(1)));
    }

    #[test]
    fn test_probe_result_discarded_for_replaced_handle() {
        // La sesión 1 fue reemplazada por la 2 mientras su sonda volaba
        let slot = Some(session(2, ArSessionState::Checking));
        assert!(!probe_result_applies(slot.as_ref(), SessionHandle(1)));
    }

    #[test]
    fn test_probe_result_discarded_when_session_already_resolved() {
        // Mismo handle pero la sesión ya salió de Checking
        let slot = Some(session(1, ArSessionState::Ready));
        assert!(!probe_result_applies(slot.as_ref(), SessionHandle(1)));
    }

    #[test]
    fn test_probe_result_discarded_when_session_was_closed() {
        let slot: Option<ArSession> = None;
        assert!(!probe_result_applies(slot.as_ref(), SessionHandle(1)));
    }

    #[test]
    fn test_close_marks_session_closed_and_releases_slot() {
        let mut slot = Some(session(3, ArSessionState::Ready));
        let closed = close_session(&mut slot, SessionHandle(3)).expect("cierre aplicado");
        assert_eq!(closed.state, ArSessionState::Closed);
        assert!(slot.is_none());
    }

    #[test]
    fn test_stale_close_is_noop() {
        // close() con un handle de una sesión ya reemplazada no toca la viva
        let mut slot = Some(session(2, ArSessionState::Ready));
        assert!(close_session(&mut slot, SessionHandle(1)).is_none());
        let live = slot.as_ref().expect("sesión viva intacta");
        assert_eq!(live.handle, SessionHandle(2));
        assert_eq!(live.state, ArSessionState::Ready);
    }

    #[test]
    fn test_close_on_empty_slot_is_noop() {
        let mut slot: Option<ArSession> = None;
        assert!(close_session(&mut slot, SessionHandle(1)).is_none());
    }

    #[test]
    fn test_viewer_failure_marks_current_session() {
        // El script lo insertó la sesión 1 (ya cerrada); el fallo llega con
        // la sesión 5 viva y debe marcarla a ella
        let mut slot = Some(session(5, ArSessionState::Ready));
        assert!(mark_viewer_failure(&mut slot));
        assert!(slot.as_ref().expect("sesión viva").viewer_load_failed);
    }

    #[test]
    fn test_viewer_failure_without_session_is_noop() {
        let mut slot: Option<ArSession> = None;
        assert!(!mark_viewer_failure(&mut slot));
    }
}
