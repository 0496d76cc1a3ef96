// ============================================================================
// APP VIEW - Vista raíz de la galería (Rust puro)
// ============================================================================

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::catalog;
use crate::state::{AppState, ArSessionState, SessionHandle};
use crate::utils::i18n::t;
use crate::views::{render_ar_modal, render_gallery};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar la aplicación completa a partir del estado
pub fn render_app(
    state: &AppState,
    on_view_ar: Rc<dyn Fn(u32)>,
    on_close_ar: Rc<dyn Fn(SessionHandle)>,
    on_toggle_language: Rc<dyn Fn()>,
) -> Result<Element, JsValue> {
    let lang = state.language.borrow().clone();

    let container = ElementBuilder::new("div")?.class("app").build();

    // Header
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let title = ElementBuilder::new("h1")?.text(&t("app_title", &lang)).build();
    let subtitle = ElementBuilder::new("p")?.text(&t("app_subtitle", &lang)).build();

    // Toggle de idioma (EN <-> ES)
    let lang_btn = ElementBuilder::new("button")?
        .class("btn-language")
        .text(if lang == "ES" { "EN" } else { "ES" })
        .build();
    {
        let on_toggle = on_toggle_language.clone();
        on_click(&lang_btn, move |_e| {
            on_toggle();
        })?;
    }

    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&header, &lang_btn)?;
    append_child(&container, &header)?;

    // Intro
    let intro = ElementBuilder::new("p")?
        .class("gallery-intro")
        .text(&t("gallery_intro", &lang))
        .build();
    append_child(&container, &intro)?;

    // Galería de platos
    let gallery = render_gallery(catalog(), &lang, on_view_ar)?;
    append_child(&container, &gallery)?;

    // Overlay AR: solo se crea cuando la sesión está Ready
    if let Some(session) = state.ar_session.borrow().as_ref() {
        if session.state == ArSessionState::Ready {
            let modal = render_ar_modal(session, &lang, on_close_ar)?;
            append_child(&container, &modal)?;
        }
    }

    Ok(container)
}
