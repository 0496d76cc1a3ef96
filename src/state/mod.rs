// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod ar_session;

pub use app_state::*;
pub use ar_session::*;
