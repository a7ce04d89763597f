//! Rendering configuration: the type → base color palette and the physics
//! block handed verbatim to the rendering collaborator.

use std::collections::HashMap;

use serde::Serialize;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Base colors per symbol category, plus a fallback for unknown categories.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: HashMap<String, String>,
    pub default_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            ("planet", "#2e1630"),
            ("metal", "#aaaaaa"),
            ("mood", "#00fddb"),
            ("tarot", "#ffcc00"),
            ("symbol", "#cc33ff"),
            ("esoteric_concept", "#33ccff"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            colors,
            default_color: "#ffffff".to_string(),
        }
    }
}

impl Palette {
    /// Add or replace the base color for one category.
    pub fn with_color(mut self, kind: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors.insert(kind.into(), hex.into());
        self
    }

    /// Base color for `kind`, falling back to the default.
    pub fn base_for(&self, kind: &str) -> &str {
        self.colors
            .get(kind)
            .unwrap_or(&self.default_color)
            .as_str()
    }
}

// ─── Layout physics ──────────────────────────────────────────────────────────

/// forceAtlas2Based parameters. Serialized into the collaborator's options
/// block as-is; the numbers are never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceAtlas2 {
    pub gravitational_constant: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
}

/// Physics configuration for the force-directed layout. Static: the same
/// block is attached regardless of graph size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub force_atlas_2_based: ForceAtlas2,
    pub min_velocity: f64,
    pub solver: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            force_atlas_2_based: ForceAtlas2 {
                gravitational_constant: -50.0,
                central_gravity: 0.01,
                spring_length: 100.0,
                spring_constant: 0.08,
            },
            min_velocity: 0.75,
            solver: "forceAtlas2Based".to_string(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_palette_categories() {
        let p = Palette::default();
        assert_eq!(p.base_for("planet"), "#2e1630");
        assert_eq!(p.base_for("metal"), "#aaaaaa");
        assert_eq!(p.base_for("tarot"), "#ffcc00");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_default() {
        let p = Palette::default();
        assert_eq!(p.base_for("no_such_kind"), "#ffffff");
        assert_eq!(p.base_for(""), "#ffffff");
    }

    #[test]
    fn test_with_color_overrides() {
        let p = Palette::default().with_color("planet", "#123456");
        assert_eq!(p.base_for("planet"), "#123456");
    }

    #[test]
    fn test_layout_serializes_with_collaborator_keys() {
        let json = serde_json::to_value(LayoutConfig::default()).unwrap();
        assert_eq!(json["solver"], "forceAtlas2Based");
        assert_eq!(json["minVelocity"], 0.75);
        assert_eq!(json["forceAtlas2Based"]["gravitationalConstant"], -50.0);
        assert_eq!(json["forceAtlas2Based"]["springLength"], 100.0);
    }
}
