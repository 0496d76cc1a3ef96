// ============================================================================
// GALLERY VIEW - Grilla de platos del catálogo
// ============================================================================

use crate::dom::{append_child, ElementBuilder};
use crate::models::Dish;
use crate::views::render_dish_card;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Renderizar la grilla de cards de platos (en el orden del catálogo)
pub fn render_gallery(
    dishes: &[Dish],
    lang: &str,
    on_view_ar: Rc<dyn Fn(u32)>,
) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("gallery").build();

    for dish in dishes {
        let card = render_dish_card(dish, lang, on_view_ar.clone())?;
        append_child(&grid, &card)?;
    }

    Ok(grid)
}
