// ============================================================================
// DISH MODEL - Plato del catálogo
// ============================================================================

use serde::{Deserialize, Serialize};

/// Plato del catálogo. Inmutable una vez construido el catálogo:
/// no existen operaciones de create/update/delete sobre estos registros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: u32,
    pub name: String,
    /// Ruta al asset 3D fuente (convencionalmente .obj; la sesión AR
    /// resuelve el hermano .glb)
    pub model_path: String,
    /// Ruta a la imagen de preview
    pub image_path: String,
}
