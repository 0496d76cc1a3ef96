// ============================================================================
// CATALOG PROVIDER - Catálogo fijo de platos (solo lectura)
// ============================================================================
// Secuencia ordenada por inserción, embebida como JSON en el binario.
// Sin mutación: el catálogo se parsea una sola vez al primer acceso.
// ============================================================================

use crate::models::dish::Dish;

const CATALOG_JSON: &str = include_str!("catalog.json");

lazy_static::lazy_static! {
    static ref CATALOG: Vec<Dish> = parse_catalog(CATALOG_JSON);
}

/// Obtener la secuencia ordenada de platos del catálogo
pub fn catalog() -> &'static [Dish] {
    CATALOG.as_slice()
}

/// Buscar un plato por id
pub fn find_dish(id: u32) -> Option<&'static Dish> {
    catalog().iter().find(|d| d.id == id)
}

fn parse_catalog(json: &str) -> Vec<Dish> {
    match serde_json::from_str::<Vec<Dish>>(json) {
        Ok(dishes) => dishes,
        Err(e) => {
            // Un catálogo corrupto no es fatal: la galería queda vacía
            log::error!("❌ [CATALOG] Error parseando catálogo embebido: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let dishes = parse_catalog(CATALOG_JSON);
        assert!(!dishes.is_empty());
    }

    #[test]
    fn test_catalog_preserves_insertion_order() {
        let dishes = parse_catalog(CATALOG_JSON);
        let ids: Vec<u32> = dishes.iter().map(|d| d.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        // El JSON embebido está ordenado por id, el parseo no reordena
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_burger_fixture_fields() {
        let dishes = parse_catalog(CATALOG_JSON);
        let burger = dishes.iter().find(|d| d.id == 1).expect("burger presente");
        assert_eq!(burger.name, "Gourmet Burger");
        assert_eq!(burger.model_path, "/models/burger/source/Buger.glb");
        assert_eq!(burger.image_path, "/models/burger_merged.webp");
    }

    #[test]
    fn test_parse_catalog_invalid_json_is_empty() {
        assert!(parse_catalog("{ not json").is_empty());
    }
}
