// ============================================================================
// DISH CARD VIEW - Card de plato con thumbnail y botón "Ver en AR"
// ============================================================================

use crate::dom::{add_class, append_child, on_click, on_error, ElementBuilder};
use crate::models::Dish;
use crate::utils::i18n::t;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar card de plato
pub fn render_dish_card(
    dish: &Dish,
    lang: &str,
    on_view_ar: Rc<dyn Fn(u32)>,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("dish-card")
        .attr("data-dish-id", &dish.id.to_string())?
        .build();

    // Thumbnail con fallback si la imagen no carga
    let thumb = ElementBuilder::new("div")?.class("dish-thumb").build();

    let img = ElementBuilder::new("img")?
        .attr("src", &dish.image_path)?
        .attr("alt", &dish.name)?
        .build();

    {
        let thumb_clone = thumb.clone();
        let dish_name = dish.name.clone();
        on_error(&img, move |_e| {
            log::warn!("⚠️ [CARD] Imagen no disponible para '{}'", dish_name);
            let _ = add_class(&thumb_clone, "image-missing");
        })?;
    }

    let fallback = ElementBuilder::new("div")?
        .class("thumb-fallback")
        .text("🍽️")
        .build();

    append_child(&thumb, &img)?;
    append_child(&thumb, &fallback)?;
    append_child(&card, &thumb)?;

    // Contenido
    let body = ElementBuilder::new("div")?.class("dish-body").build();

    let name = ElementBuilder::new("h3")?.text(&dish.name).build();
    append_child(&body, &name)?;

    // Botón "Ver en AR" - dispara el flujo check-then-display
    let view_btn = ElementBuilder::new("button")?
        .class("btn-view-ar")
        .text(&t("view_in_ar", lang))
        .build();

    {
        let dish_id = dish.id;
        let on_view_ar_clone = on_view_ar.clone();
        on_click(&view_btn, move |e| {
            e.stop_propagation();
            on_view_ar_clone(dish_id);
        })?;
    }

    append_child(&body, &view_btn)?;

    let hint = ElementBuilder::new("p")?
        .class("dish-hint")
        .text(&t("best_on_mobile", lang))
        .build();
    append_child(&body, &hint)?;

    append_child(&card, &body)?;

    Ok(card)
}
