// ============================================================================
// APP - Aplicación principal
// ============================================================================

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::{AppState, SessionHandle};
use crate::viewmodels::ArLauncher;
use crate::views::render_app;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Aplicación principal
pub struct App {
    state: AppState,
    launcher: ArLauncher,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let launcher = ArLauncher::new(state.clone());

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move || {
            // Usar gloo_timers para batchear múltiples updates
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self {
            state,
            launcher,
            root: Some(root),
        })
    }

    /// Renderizar aplicación (re-render completo a partir del estado)
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let launcher_open = self.launcher.clone();
            let on_view_ar: Rc<dyn Fn(u32)> = Rc::new(move |dish_id| {
                launcher_open.open(dish_id);
            });

            let launcher_close = self.launcher.clone();
            let on_close_ar: Rc<dyn Fn(SessionHandle)> = Rc::new(move |handle| {
                launcher_close.close(handle);
            });

            let state_lang = self.state.clone();
            let on_toggle_language: Rc<dyn Fn()> = Rc::new(move || {
                let next = if state_lang.language.borrow().as_str() == "ES" {
                    "EN"
                } else {
                    "ES"
                };
                state_lang.set_language(next);
            });

            let app_view = render_app(&self.state, on_view_ar, on_close_ar, on_toggle_language)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }
}
