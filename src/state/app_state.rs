// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::ar_session::ArSession;
use std::cell::RefCell;
use std::rc::Rc;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Sesión AR activa (como máximo una; None cuando no hay overlay)
    pub ar_session: Rc<RefCell<Option<ArSession>>>,

    // UI State
    pub language: Rc<RefCell<String>>,

    // Reactivity: Callbacks para notificar cambios (Rc para poder compartir)
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        // Cargar preferencias desde localStorage
        let language = Self::load_string_pref("language", "EN".to_string());

        Self {
            ar_session: Rc::new(RefCell::new(None)),
            language: Rc::new(RefCell::new(language)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_change(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Cambiar idioma y persistir la preferencia
    pub fn set_language(&self, lang: &str) {
        *self.language.borrow_mut() = lang.to_uppercase();
        Self::save_string_pref("language", lang);
        self.notify_change();
    }

    /// Cargar preferencia string desde localStorage
    fn load_string_pref(key: &str, default: String) -> String {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(key) {
                    return value;
                }
            }
        }
        default
    }

    /// Guardar preferencia string en localStorage
    fn save_string_pref(key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("⚠️ [STATE] No se pudo guardar la preferencia {}", key);
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
