pub mod app;
pub mod ar_modal;
pub mod dish_card;
pub mod gallery;

pub use app::render_app;
pub use ar_modal::render_ar_modal;
pub use dish_card::render_dish_card;
pub use gallery::render_gallery;
