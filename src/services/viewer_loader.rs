// ============================================================================
// VIEWER LOADER - Carga lazy e idempotente del custom element <model-viewer>
// ============================================================================
// El script del viewer se inserta en <head> UNA sola vez (flag + chequeo de
// customElements). Si la carga falla, el flag se resetea para que una sesión
// posterior pueda reintentar, y se notifica al caller para que muestre un
// estado de error dedicado en el modal. El callback de error registrado en la
// primera inserción queda vigente: el caller debe aplicar el fallo a la
// sesión viva en ese momento, no a la que insertó el script.
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_to_head, create_element, on_error, set_attribute};
use std::cell::Cell;
use wasm_bindgen::prelude::*;

pub const VIEWER_ELEMENT_TAG: &str = "model-viewer";

// Flag para prevenir múltiples inserciones del script
thread_local! {
    static VIEWER_REQUESTED: Cell<bool> = Cell::new(false);
}

/// Verificar si el custom element ya está registrado en el documento
pub fn viewer_registered() -> bool {
    web_sys::window()
        .map(|win| !win.custom_elements().get(VIEWER_ELEMENT_TAG).is_undefined())
        .unwrap_or(false)
}

/// Asegurar que el viewer esté cargado (idempotente).
/// `on_load_failure` se invoca si el script externo no carga.
pub fn ensure_viewer_loaded<F>(on_load_failure: F) -> Result<(), JsValue>
where
    F: Fn() + 'static,
{
    if viewer_registered() {
        return Ok(());
    }

    let already_requested = VIEWER_REQUESTED.with(|flag| flag.replace(true));
    if already_requested {
        log::info!("ℹ️ [VIEWER] Script del viewer ya solicitado, esperando registro");
        return Ok(());
    }

    log::info!("📦 [VIEWER] Cargando script del viewer: {}", CONFIG.viewer_script_url);

    let script = create_element("script")?;
    set_attribute(&script, "type", "module")?;
    set_attribute(&script, "src", &CONFIG.viewer_script_url)?;

    on_error(&script, move |_e| {
        log::error!("❌ [VIEWER] El script del viewer AR no pudo cargarse");
        // Permitir reintento en una sesión futura
        VIEWER_REQUESTED.with(|flag| flag.set(false));
        on_load_failure();
    })?;

    append_to_head(&script)?;
    Ok(())
}
