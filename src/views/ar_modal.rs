// ============================================================================
// AR MODAL VIEW - Overlay de sesión AR con el viewer embebido (Rust puro)
// ============================================================================

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::services::viewer_loader::VIEWER_ELEMENT_TAG;
use crate::state::{ArSession, SessionHandle};
use crate::utils::i18n::{ar_modal_title, t};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Renderizar el overlay de la sesión AR (solo se invoca con la sesión Ready)
pub fn render_ar_modal(
    session: &ArSession,
    lang: &str,
    on_close: Rc<dyn Fn(SessionHandle)>,
) -> Result<Element, JsValue> {
    let handle = session.handle;

    // Modal container - clase "active" porque solo se renderiza cuando debe verse
    let modal = ElementBuilder::new("div")?
        .id("ar-modal")?
        .class("modal active")
        .build();

    // Overlay (cierra al hacer click)
    let overlay = ElementBuilder::new("div")?.class("modal-overlay").build();
    {
        let on_close_clone = on_close.clone();
        on_click(&overlay, move |_e| {
            on_close_clone(handle);
        })?;
    }
    append_child(&modal, &overlay)?;

    // Modal content (previene cierre al click dentro)
    let content = ElementBuilder::new("div")?.class("modal-content").build();
    {
        on_click(&content, move |e| {
            e.stop_propagation();
        })?;
    }

    // Título con el nombre del plato
    let title = ElementBuilder::new("h3")?
        .text(&ar_modal_title(&session.dish.name, lang))
        .build();
    append_child(&content, &title)?;

    // Instrucciones de uso
    let instructions = ElementBuilder::new("p")?
        .class("ar-instructions")
        .text(&t("ar_instructions", lang))
        .build();
    append_child(&content, &instructions)?;

    if session.viewer_load_failed {
        // Estado de error dedicado: el script del viewer no cargó
        let error = ElementBuilder::new("div")?
            .class("viewer-error")
            .text(&t("viewer_load_failed", lang))
            .build();
        append_child(&content, &error)?;
    } else {
        // Viewer AR embebido, configurado con la URL anti-caché derivada
        let viewer = build_viewer_element(&session.resolved_asset_url)?;
        append_child(&content, &viewer)?;

        // Botón de activación AR - invoca activateAR() del custom element
        let ar_btn = ElementBuilder::new("button")?
            .class("btn-activate-ar")
            .text(&t("activate_ar", lang))
            .build();
        {
            let viewer_clone = viewer.clone();
            on_click(&ar_btn, move |_e| {
                activate_ar(&viewer_clone);
            })?;
        }
        append_child(&content, &ar_btn)?;
    }

    // Botón de cierre
    let close_btn = ElementBuilder::new("button")?
        .class("btn-close")
        .text(&t("close", lang))
        .build();
    {
        let on_close_clone = on_close.clone();
        on_click(&close_btn, move |_e| {
            on_close_clone(handle);
        })?;
    }
    append_child(&content, &close_btn)?;

    append_child(&modal, &content)?;

    Ok(modal)
}

/// Construir el custom element del viewer con los parámetros AR configurados
fn build_viewer_element(asset_url: &str) -> Result<Element, JsValue> {
    let ar = &CONFIG.ar_config;

    ElementBuilder::new(VIEWER_ELEMENT_TAG)?
        .attr("src", asset_url)?
        .attr("ar", "")?
        .attr("ar-modes", &ar.ar_modes)?
        .attr("camera-controls", "")?
        .attr("auto-rotate", "")?
        .attr("ar-scale", &ar.ar_scale)?
        .attr("ar-placement", &ar.ar_placement)?
        .attr("scale", &ar.model_scale)?
        .attr("max-camera-orbit", &ar.max_camera_orbit)?
        .attr("min-camera-orbit", &ar.min_camera_orbit)
        .map(|b| b.build())
}

/// Invocar activateAR() sobre el viewer. El método vive en el custom element
/// externo, así que se accede vía Reflect (no existe binding web-sys).
fn activate_ar(viewer: &Element) {
    let method = match js_sys::Reflect::get(viewer, &JsValue::from_str("activateAR")) {
        Ok(m) => m,
        Err(e) => {
            log::error!("❌ [AR] No se pudo leer activateAR del viewer: {:?}", e);
            return;
        }
    };

    match method.dyn_ref::<js_sys::Function>() {
        Some(func) => {
            if let Err(e) = func.call0(viewer) {
                log::error!("❌ [AR] activateAR() falló: {:?}", e);
            }
        }
        None => {
            // El script del viewer todavía no terminó de registrar el elemento
            log::warn!("⚠️ [AR] activateAR no disponible aún, el viewer sigue cargando");
        }
    }
}
