//! Zentrale Konfiguration für den Star System Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Multiplikativer Zoom-Schritt (Buttons, Shortcuts, Mausrad).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Kleinster Zoom-Exponent: Zoom-Minimum = `STEP^MIN`.
pub const CAMERA_ZOOM_MIN_EXPONENT: i32 = -23;
/// Größter Zoom-Exponent: Zoom-Maximum = `STEP^MAX`.
pub const CAMERA_ZOOM_MAX_EXPONENT: i32 = 1;
/// Erlaubter Bereich des Zoom-Schritts (Optionen-Dialog und TOML).
pub const CAMERA_ZOOM_STEP_RANGE: std::ops::RangeInclusive<f32> = 1.01..=3.0;
/// Erlaubter Bereich des kleinsten Zoom-Exponenten.
pub const CAMERA_ZOOM_MIN_EXPONENT_RANGE: std::ops::RangeInclusive<i32> = -60..=0;
/// Erlaubter Bereich des größten Zoom-Exponenten.
pub const CAMERA_ZOOM_MAX_EXPONENT_RANGE: std::ops::RangeInclusive<i32> = 0..=20;
/// Rand um den Systemradius beim Einpassen in den Viewport.
pub const CAMERA_FIT_MARGIN: f32 = 1.1;

// ── Gesten ──────────────────────────────────────────────────────────

/// Zeitschwelle (ms), unterhalb der ein Drücken+Loslassen ein Klick ist.
pub const CLICK_TIME_THRESHOLD_MS: f64 = 300.0;
/// Bewegungsschwelle (Pixel), unterhalb der ein Drücken+Loslassen ein Klick ist.
pub const CLICK_MOVE_THRESHOLD_PX: f32 = 10.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Sprite-Radius neuer Planeten in Welteinheiten.
pub const PLANET_RADIUS_DEFAULT: f32 = crate::core::PLANET_RADIUS_DEFAULT;
/// Sprite-Radius der Sprungpunkte in Welteinheiten.
pub const JUMP_POINT_RADIUS_WORLD: f32 = 25.0;
/// Abstand der Gitterlinien in Welteinheiten.
pub const GRID_SPACING_WORLD: f32 = 1000.0;
/// Farbe der Planeten (RGBA).
pub const PLANET_COLOR: [f32; 4] = [0.3, 0.6, 1.0, 1.0];
/// Farbe der Sprungpunkte (RGBA).
pub const JUMP_POINT_COLOR: [f32; 4] = [0.2, 0.9, 0.4, 1.0];
/// Farbe des Selektionsrings (RGBA).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe von Gitter und Systemradius (RGBA).
pub const GRID_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `star_system_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Multiplikativer Zoom-Schritt
    pub camera_zoom_step: f32,
    /// Zoom-Minimum als Exponent des Schritts
    pub camera_zoom_min_exponent: i32,
    /// Zoom-Maximum als Exponent des Schritts
    pub camera_zoom_max_exponent: i32,
    /// Mausrad zoomt (sonst ignoriert)
    pub scroll_zoom_enabled: bool,

    // ── Gesten ──────────────────────────────────────────────────
    /// Klick-/Drag-Zeitschwelle in Millisekunden
    pub click_time_threshold_ms: f64,
    /// Klick-/Drag-Bewegungsschwelle in Pixeln
    pub click_move_threshold_px: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Sprite-Radius neu angelegter Planeten in Welteinheiten
    pub planet_radius_default: f32,
    /// Sprite-Radius der Sprungpunkte in Welteinheiten
    pub jump_point_radius_world: f32,
    /// Gitterabstand in Welteinheiten (0 = kein Gitter)
    pub grid_spacing_world: f32,
    pub planet_color: [f32; 4],
    pub jump_point_color: [f32; 4],
    pub selection_color: [f32; 4],
    pub grid_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_zoom_min_exponent: CAMERA_ZOOM_MIN_EXPONENT,
            camera_zoom_max_exponent: CAMERA_ZOOM_MAX_EXPONENT,
            scroll_zoom_enabled: true,

            click_time_threshold_ms: CLICK_TIME_THRESHOLD_MS,
            click_move_threshold_px: CLICK_MOVE_THRESHOLD_PX,

            planet_radius_default: PLANET_RADIUS_DEFAULT,
            jump_point_radius_world: JUMP_POINT_RADIUS_WORLD,
            grid_spacing_world: GRID_SPACING_WORLD,
            planet_color: PLANET_COLOR,
            jump_point_color: JUMP_POINT_COLOR,
            selection_color: SELECTION_COLOR,
            grid_color: GRID_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("star_system_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("star_system_editor.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Schritt und Exponenten werden auf die Dialog-Bereiche begrenzt, damit
    /// beide Zoom-Grenzen endlich und > 0 bleiben.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !CAMERA_ZOOM_STEP_RANGE.contains(&self.camera_zoom_step) {
            log::warn!(
                "Ungültiger Zoom-Schritt {}, verwende {}",
                self.camera_zoom_step,
                defaults.camera_zoom_step
            );
            self.camera_zoom_step = defaults.camera_zoom_step;
        }
        if self.camera_zoom_min_exponent > self.camera_zoom_max_exponent {
            self.camera_zoom_min_exponent = defaults.camera_zoom_min_exponent;
            self.camera_zoom_max_exponent = defaults.camera_zoom_max_exponent;
        }
        self.camera_zoom_min_exponent = self.camera_zoom_min_exponent.clamp(
            *CAMERA_ZOOM_MIN_EXPONENT_RANGE.start(),
            *CAMERA_ZOOM_MIN_EXPONENT_RANGE.end(),
        );
        self.camera_zoom_max_exponent = self.camera_zoom_max_exponent.clamp(
            *CAMERA_ZOOM_MAX_EXPONENT_RANGE.start(),
            *CAMERA_ZOOM_MAX_EXPONENT_RANGE.end(),
        );
        let (min, max) = self.zoom_bounds();
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            log::warn!("Ungültige Zoom-Grenzen ({}, {}), verwende Standardwerte", min, max);
            self.camera_zoom_step = defaults.camera_zoom_step;
            self.camera_zoom_min_exponent = defaults.camera_zoom_min_exponent;
            self.camera_zoom_max_exponent = defaults.camera_zoom_max_exponent;
        }
        if !is_positive(self.jump_point_radius_world) {
            self.jump_point_radius_world = defaults.jump_point_radius_world;
        }
        if !is_positive(self.planet_radius_default) {
            self.planet_radius_default = defaults.planet_radius_default;
        }
        self
    }

    /// Zoom-Grenzen `(min, max)` aus Schritt und Exponenten.
    pub fn zoom_bounds(&self) -> (f32, f32) {
        crate::core::Camera2D::zoom_bounds(
            self.camera_zoom_step,
            self.camera_zoom_min_exponent,
            self.camera_zoom_max_exponent,
        )
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("star_system_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let opts: EditorOptions = toml::from_str("click_move_threshold_px = 4.0\n")
            .expect("teilweise TOML sollte parsen");
        assert_eq!(opts.click_move_threshold_px, 4.0);
        assert_eq!(opts.camera_zoom_step, CAMERA_ZOOM_STEP);
    }

    #[test]
    fn sanitized_rejects_invalid_zoom_step() {
        let opts = EditorOptions {
            camera_zoom_step: 0.5,
            camera_zoom_min_exponent: 3,
            camera_zoom_max_exponent: -3,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(opts.camera_zoom_step, CAMERA_ZOOM_STEP);
        let (min, max) = opts.zoom_bounds();
        assert!(min < 1.0 && max > 1.0);
    }

    #[test]
    fn sanitized_keeps_zoom_bounds_positive_and_finite() {
        let opts = EditorOptions {
            camera_zoom_min_exponent: -1000,
            camera_zoom_max_exponent: 500,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(opts.camera_zoom_min_exponent, -60);
        assert_eq!(opts.camera_zoom_max_exponent, 20);
        let (min, max) = opts.zoom_bounds();
        assert!(min > 0.0 && min.is_finite());
        assert!(max.is_finite());

        let opts = EditorOptions {
            camera_zoom_step: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(opts.camera_zoom_step, CAMERA_ZOOM_STEP);
    }

    #[test]
    fn sanitized_rejects_nan_radii() {
        let opts = EditorOptions {
            jump_point_radius_world: f32::NAN,
            planet_radius_default: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(opts.jump_point_radius_world, JUMP_POINT_RADIUS_WORLD);
        assert_eq!(opts.planet_radius_default, PLANET_RADIUS_DEFAULT);
    }

    #[test]
    fn repeated_zoom_out_from_extreme_toml_stays_positive() {
        let opts: EditorOptions = toml::from_str("camera_zoom_min_exponent = -1000\n")
            .expect("TOML sollte parsen");
        let opts = opts.sanitized();
        let (min, max) = opts.zoom_bounds();

        let mut camera = crate::core::Camera2D::new();
        camera.pan = glam::Vec2::new(30.0, -10.0);
        for _ in 0..1000 {
            camera.zoom_by_clamped(1.0 / opts.camera_zoom_step, min, max);
        }

        assert!(camera.zoom > 0.0);
        assert!(camera.pan.is_finite());
    }
}
