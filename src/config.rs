use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub models_base: String,
    pub images_base: String,
    pub viewer_script_url: String,
    pub conversion_guide_url: String,
    pub probe_timeout_ms: u32,
    pub environment: String,
    pub enable_logging: bool,
    pub ar_config: ArConfig,
}

/// Parámetros del viewer AR (atributos del custom element <model-viewer>)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArConfig {
    /// Lista ordenada de backends AR (preferencia: webxr > scene-viewer > quick-look)
    pub ar_modes: String,
    pub ar_scale: String,
    pub ar_placement: String,
    /// Factor de escala fijo del modelo
    pub model_scale: String,
    /// Órbita de cámara: vertical acotada 0°-90°, horizontal libre
    pub max_camera_orbit: String,
    pub min_camera_orbit: String,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            ar_modes: "webxr scene-viewer quick-look".to_string(),
            ar_scale: "fixed".to_string(),
            ar_placement: "floor".to_string(),
            model_scale: "0.001 0.001 0.001".to_string(),
            max_camera_orbit: "auto 90deg auto".to_string(),
            min_camera_orbit: "auto 0deg auto".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            models_base: "/models".to_string(),
            images_base: "/models".to_string(),
            viewer_script_url: "https://unpkg.com/@google/model-viewer/dist/model-viewer.min.js"
                .to_string(),
            conversion_guide_url: "https://products.aspose.app/3d/conversion/obj-to-glb"
                .to_string(),
            probe_timeout_ms: 10_000,
            environment: "development".to_string(),
            enable_logging: true,
            ar_config: ArConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        Self {
            models_base: option_env!("MODELS_BASE")
                .map(|s| s.to_string())
                .unwrap_or(defaults.models_base),
            images_base: option_env!("IMAGES_BASE")
                .map(|s| s.to_string())
                .unwrap_or(defaults.images_base),
            viewer_script_url: option_env!("VIEWER_SCRIPT_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.viewer_script_url),
            conversion_guide_url: option_env!("CONVERSION_GUIDE_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.conversion_guide_url),
            probe_timeout_ms: option_env!("AR_PROBE_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.probe_timeout_ms),
            environment: option_env!("ENVIRONMENT")
                .map(|s| s.to_string())
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            ar_config: ArConfig::default(),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ar_backends_order() {
        // El orden de preferencia de backends AR es fijo
        let config = ArConfig::default();
        assert_eq!(config.ar_modes, "webxr scene-viewer quick-look");
    }

    #[test]
    fn test_default_camera_orbit_bounds() {
        let config = ArConfig::default();
        // Vertical acotada entre 0° y 90°, horizontal sin restricción ("auto")
        assert_eq!(config.min_camera_orbit, "auto 0deg auto");
        assert_eq!(config.max_camera_orbit, "auto 90deg auto");
    }

    #[test]
    fn test_default_probe_timeout() {
        let config = AppConfig::default();
        assert_eq!(config.probe_timeout_ms, 10_000);
    }
}
