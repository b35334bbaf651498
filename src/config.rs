use serde::{Deserialize, Serialize};

pub const DEFAULT_MODULE_WIDTH: u32 = 2;
pub const DEFAULT_QUIET_ZONE_MODULES: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 100;
pub const DEFAULT_WIDE_FACTOR: u32 = 3;
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
pub const DEFAULT_BAR_COLOR: &str = "#0F172A";

const MIN_MODULE_WIDTH: u32 = 1;
const MIN_QUIET_ZONE_MODULES: u32 = 6;
const MIN_HEIGHT: u32 = 24;

/// Upper bounds keep the widest possible symbol (80 Code 128 characters)
/// and its raster comfortably inside `u32`/`i32` pixel coordinates.
pub const MAX_MODULE_WIDTH: u32 = 20;
pub const MAX_QUIET_ZONE_MODULES: u32 = 100;
pub const MAX_HEIGHT: u32 = 2000;
const MIN_WIDE_FACTOR: u32 = 2;
const MAX_WIDE_FACTOR: u32 = 3;

/// Styling knobs supplied by the caller.
///
/// Every field is optional when deserialized; missing keys fall back to the
/// documented defaults. Values outside the usable range are clamped rather
/// than rejected, see [`RenderConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Narrow element width in pixels.
    pub module_width: u32,
    /// Blank margin on each side, measured in narrow modules.
    pub quiet_zone_modules: u32,
    pub height: u32,
    pub background_color: String,
    pub bar_color: String,
    /// Code 39 wide/narrow ratio. Ignored by Code 128.
    pub wide_factor: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_width: DEFAULT_MODULE_WIDTH,
            quiet_zone_modules: DEFAULT_QUIET_ZONE_MODULES,
            height: DEFAULT_HEIGHT,
            background_color: DEFAULT_BACKGROUND.to_string(),
            bar_color: DEFAULT_BAR_COLOR.to_string(),
            wide_factor: DEFAULT_WIDE_FACTOR,
        }
    }
}

impl RenderConfig {
    pub fn with_module_width(mut self, width: u32) -> Self {
        self.module_width = width;
        self
    }

    pub fn with_quiet_zone_modules(mut self, modules: u32) -> Self {
        self.quiet_zone_modules = modules;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_colors<B: Into<String>, F: Into<String>>(mut self, background: B, bar: F) -> Self {
        self.background_color = background.into();
        self.bar_color = bar.into();
        self
    }

    pub fn with_wide_factor(mut self, factor: u32) -> Self {
        self.wide_factor = factor;
        self
    }

    /// Clamp every numeric field into its usable range.
    pub fn resolve(&self) -> ResolvedConfig {
        let module_width = self.module_width.clamp(MIN_MODULE_WIDTH, MAX_MODULE_WIDTH);
        let quiet_zone_modules = self
            .quiet_zone_modules
            .clamp(MIN_QUIET_ZONE_MODULES, MAX_QUIET_ZONE_MODULES);
        ResolvedConfig {
            module_width,
            quiet_zone: module_width * quiet_zone_modules,
            height: self.height.clamp(MIN_HEIGHT, MAX_HEIGHT),
            wide_factor: self.wide_factor.clamp(MIN_WIDE_FACTOR, MAX_WIDE_FACTOR),
            background_color: self.background_color.clone(),
            bar_color: self.bar_color.clone(),
        }
    }
}

/// [`RenderConfig`] after clamping, with the quiet zone expressed in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub module_width: u32,
    pub quiet_zone: u32,
    pub height: u32,
    pub wide_factor: u32,
    pub background_color: String,
    pub bar_color: String,
}

impl ResolvedConfig {
    pub fn wide_width(&self) -> u32 {
        self.module_width * self.wide_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_resolve_to_documented_values() {
        let resolved = RenderConfig::default().resolve();
        assert_eq!(resolved.module_width, 2);
        assert_eq!(resolved.quiet_zone, 20);
        assert_eq!(resolved.height, 100);
        assert_eq!(resolved.wide_width(), 6);
        assert_eq!(resolved.background_color, "#FFFFFF");
        assert_eq!(resolved.bar_color, "#0F172A");
    }

    #[test]
    fn undersized_values_are_raised_to_minimums() {
        let resolved = RenderConfig::default()
            .with_module_width(0)
            .with_quiet_zone_modules(1)
            .with_height(3)
            .with_wide_factor(9)
            .resolve();
        assert_eq!(resolved.module_width, 1);
        assert_eq!(resolved.quiet_zone, 6);
        assert_eq!(resolved.height, 24);
        assert_eq!(resolved.wide_factor, 3);
    }

    #[test]
    fn oversized_values_are_capped() {
        let resolved = RenderConfig::default()
            .with_module_width(500_000_000)
            .with_quiet_zone_modules(u32::MAX)
            .with_height(u32::MAX)
            .resolve();
        assert_eq!(resolved.module_width, MAX_MODULE_WIDTH);
        assert_eq!(resolved.quiet_zone, MAX_MODULE_WIDTH * MAX_QUIET_ZONE_MODULES);
        assert_eq!(resolved.height, MAX_HEIGHT);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r##"{"moduleWidth": 3, "barColor": "#000"}"##).unwrap();
        assert_eq!(cfg.module_width, 3);
        assert_eq!(cfg.bar_color, "#000");
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.background_color, DEFAULT_BACKGROUND);
    }
}
