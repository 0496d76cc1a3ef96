// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================
// Los textos de usuario (incluido el mensaje de remediación AR) son
// plantillas de configuración, no lógica.
// ============================================================================

use crate::config::CONFIG;
use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            // App
            translations.insert("app_title", "🍽️ Galería AR de Comida");
            translations.insert("app_subtitle", "Experimenta la comida en realidad aumentada");
            translations.insert(
                "gallery_intro",
                "Mira estos platos en realidad aumentada usando la cámara de tu dispositivo",
            );

            // Dish card
            translations.insert("view_in_ar", "📱 Ver en AR");
            translations.insert("best_on_mobile", "Mejor experiencia en dispositivos móviles");

            // AR Modal
            translations.insert("ar_title", "{name} en AR");
            translations.insert(
                "ar_instructions",
                "¡Toca el botón AR de abajo para ver el plato en tu espacio!",
            );
            translations.insert("activate_ar", "📱 Activar AR");
            translations.insert("close", "Cerrar");
            translations.insert(
                "viewer_load_failed",
                "El viewer AR no pudo cargarse. Revisa tu conexión y vuelve a intentarlo.",
            );

            // Remediación (asset GLB ausente)
            translations.insert(
                "ar_setup_needed",
                "🔄 ¡Falta configurar AR!\n\nPara usar AR, convierte tu modelo OBJ a formato GLB:\n\n1. Entra a: {converter_url}\n2. Sube tu archivo OBJ\n3. Descárgalo como GLB\n4. Colócalo en {models_base}/\n\n¡Consulta AR_FIX_GUIDE.md para instrucciones detalladas!",
            );
        }
        _ => {
            // App (EN por defecto)
            translations.insert("app_title", "🍽️ AR Food Gallery");
            translations.insert("app_subtitle", "Experience food in augmented reality");
            translations.insert(
                "gallery_intro",
                "View these delicious food items in augmented reality using your device's camera",
            );

            // Dish card
            translations.insert("view_in_ar", "📱 View in AR");
            translations.insert("best_on_mobile", "Best experienced on mobile devices");

            // AR Modal
            translations.insert("ar_title", "{name} in AR");
            translations.insert(
                "ar_instructions",
                "Tap the AR button below to view in your space!",
            );
            translations.insert("activate_ar", "📱 Activate AR");
            translations.insert("close", "Close");
            translations.insert(
                "viewer_load_failed",
                "The AR viewer could not be loaded. Check your connection and try again.",
            );

            // Remediación (asset GLB ausente)
            translations.insert(
                "ar_setup_needed",
                "🔄 AR Setup Needed!\n\nTo use AR, please convert your OBJ model to GLB format:\n\n1. Go to: {converter_url}\n2. Upload your OBJ file\n3. Download as GLB\n4. Place it in {models_base}/\n\nSee AR_FIX_GUIDE.md for detailed instructions!",
            );
        }
    }

    translations
}

/// Traducir una clave al idioma dado (fallback: la clave misma)
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Título del modal AR para un plato
pub fn ar_modal_title(dish_name: &str, lang: &str) -> String {
    t("ar_title", lang).replace("{name}", dish_name)
}

/// Mensaje de remediación cuando el asset GLB no existe.
/// Plantilla de configuración: enlace de conversión y ruta de modelos
/// vienen de CONFIG, no están cableados en la lógica.
pub fn remediation_message(lang: &str) -> String {
    t("ar_setup_needed", lang)
        .replace("{converter_url}", &CONFIG.conversion_guide_url)
        .replace("{models_base}", &CONFIG.models_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", "EN"), "no_such_key");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(t("close", "FR"), "Close");
    }

    #[test]
    fn test_remediation_template_resolved_for_all_languages() {
        for lang in ["EN", "ES"] {
            let msg = remediation_message(lang);
            // La plantilla debe quedar completamente resuelta
            assert!(!msg.contains("{converter_url}"), "lang={}", lang);
            assert!(!msg.contains("{models_base}"), "lang={}", lang);
            assert!(msg.contains(&CONFIG.conversion_guide_url), "lang={}", lang);
            assert!(msg.contains(&CONFIG.models_base), "lang={}", lang);
        }
    }

    #[test]
    fn test_ar_modal_title_inserts_dish_name() {
        assert_eq!(ar_modal_title("Gourmet Burger", "EN"), "Gourmet Burger in AR");
        assert_eq!(ar_modal_title("Gourmet Burger", "ES"), "Gourmet Burger en AR");
    }
}
