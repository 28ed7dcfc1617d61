//! Stack configuration.
//!
//! [`StackConfig`] carries every default a [`Stack`](crate::Stack) applies to
//! the rows it creates, plus the animation timings it uses when content does
//! not supply its own. It can be built in code with the `with_*` builders or
//! loaded from TOML:
//!
//! ```
//! use horizon_stack::{Axis, StackConfig};
//!
//! let config = StackConfig::from_toml_str(r##"
//! axis = "horizontal"
//! auto_hide_last_row_separator = false
//!
//! [row_insets]
//! top = 8.0
//! bottom = 8.0
//!
//! [separator]
//! color = "#DDDDDD"
//! thickness = 0.5
//! "##).unwrap();
//!
//! assert_eq!(config.axis, Axis::Horizontal);
//! assert_eq!(config.row_insets.left, 0.0);
//! ```
//!
//! Missing keys fall back to the constants in [`defaults`].

use std::path::Path;
use std::time::Duration;

use horizon_stack_core::logging::targets;
use horizon_stack_core::{Color, EdgeInsets, Size};
use serde::{Deserialize, Serialize};

use crate::content::TransitionInfo;
use crate::error::{StackError, StackResult};
use crate::geometry::Axis;

/// Fallback values used when a configuration omits a field.
pub mod defaults {
    use horizon_stack_core::{Color, EdgeInsets, Size};

    /// Margin around each row's content.
    pub const ROW_INSETS: EdgeInsets = EdgeInsets::new(12.0, 15.0, 12.0, 15.0);
    /// Extra spacing inside the row insets.
    pub const ROW_PADDING: EdgeInsets = EdgeInsets::ZERO;
    /// Row background.
    pub const ROW_BACKGROUND_COLOR: Color = Color::TRANSPARENT;
    /// Row background while highlighted.
    pub const ROW_HIGHLIGHT_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);
    /// Separator color.
    pub const SEPARATOR_COLOR: Color = Color::new(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0, 1.0);
    /// Separator thickness in points.
    pub const SEPARATOR_THICKNESS: f32 = 1.0;
    /// Separator insets. Only the edges parallel to the separator apply.
    pub const SEPARATOR_INSETS: EdgeInsets = EdgeInsets::new(0.0, 15.0, 0.0, 0.0);
    /// Viewport size before the host reports a real one.
    pub const VIEWPORT_SIZE: Size = Size::new(375.0, 667.0);
    /// Row hide/show duration for content without its own timing.
    pub const ROW_TRANSITION_MS: u64 = 250;
    /// Spring damping for content without its own timing. 1.0 does not overshoot.
    pub const ROW_TRANSITION_DAMPING: f32 = 1.0;
    /// Duration of animated layout passes (move, reload, axis change).
    pub const LAYOUT_TRANSITION_MS: u64 = 250;
    /// Duration of animated scrolls.
    pub const SCROLL_ANIMATION_MS: u64 = 300;
    /// Minimum separator thickness.
    pub const MIN_SEPARATOR_THICKNESS: f32 = 0.1;
}

/// Separator defaults applied to new rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Separator color.
    pub color: Color,
    /// Separator thickness in points.
    pub thickness: f32,
    /// Separator insets.
    pub insets: EdgeInsets,
    /// Hide every row's separator.
    pub hidden: bool,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            color: defaults::SEPARATOR_COLOR,
            thickness: defaults::SEPARATOR_THICKNESS,
            insets: defaults::SEPARATOR_INSETS,
            hidden: false,
        }
    }
}

/// Animation timings used when content does not provide its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Row hide/show duration in milliseconds.
    pub row_transition_ms: u64,
    /// Row hide/show spring damping.
    pub row_transition_damping: f32,
    /// Animated layout pass duration in milliseconds.
    pub layout_transition_ms: u64,
    /// Animated scroll duration in milliseconds.
    pub scroll_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            row_transition_ms: defaults::ROW_TRANSITION_MS,
            row_transition_damping: defaults::ROW_TRANSITION_DAMPING,
            layout_transition_ms: defaults::LAYOUT_TRANSITION_MS,
            scroll_ms: defaults::SCROLL_ANIMATION_MS,
        }
    }
}

impl AnimationConfig {
    /// Timing for rows whose content is not animatable.
    pub fn row_transition(&self) -> TransitionInfo {
        TransitionInfo {
            duration: Duration::from_millis(self.row_transition_ms),
            delay: Duration::ZERO,
            spring_damping: self.row_transition_damping,
        }
    }

    /// Duration of animated layout passes.
    pub fn layout_duration(&self) -> Duration {
        Duration::from_millis(self.layout_transition_ms)
    }

    /// Duration of animated scrolls.
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_ms)
    }
}

/// Configuration for a [`Stack`](crate::Stack).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Initial stacking axis.
    pub axis: Axis,
    /// Insets applied to new rows.
    pub row_insets: EdgeInsets,
    /// Padding applied to new rows.
    pub row_padding: EdgeInsets,
    /// Background color of new rows.
    pub row_background_color: Color,
    /// Highlight color of new rows.
    pub row_highlight_color: Color,
    /// Separator defaults.
    pub separator: SeparatorConfig,
    /// Hide the separator of whichever row is currently last.
    pub auto_hide_last_row_separator: bool,
    /// Viewport size until the host reports one.
    pub viewport_size: Size,
    /// Animation timings.
    pub animation: AnimationConfig,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            row_insets: defaults::ROW_INSETS,
            row_padding: defaults::ROW_PADDING,
            row_background_color: defaults::ROW_BACKGROUND_COLOR,
            row_highlight_color: defaults::ROW_HIGHLIGHT_COLOR,
            separator: SeparatorConfig::default(),
            auto_hide_last_row_separator: true,
            viewport_size: defaults::VIEWPORT_SIZE,
            animation: AnimationConfig::default(),
        }
    }
}

impl StackConfig {
    /// Create a configuration with every default.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder Pattern
    // =========================================================================

    /// Set the stacking axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the row insets.
    pub fn with_row_insets(mut self, insets: EdgeInsets) -> Self {
        self.row_insets = insets;
        self
    }

    /// Set the row padding.
    pub fn with_row_padding(mut self, padding: EdgeInsets) -> Self {
        self.row_padding = padding;
        self
    }

    /// Set the row background color.
    pub fn with_row_background_color(mut self, color: Color) -> Self {
        self.row_background_color = color;
        self
    }

    /// Set the row highlight color.
    pub fn with_row_highlight_color(mut self, color: Color) -> Self {
        self.row_highlight_color = color;
        self
    }

    /// Set the separator color.
    pub fn with_separator_color(mut self, color: Color) -> Self {
        self.separator.color = color;
        self
    }

    /// Set the separator thickness.
    pub fn with_separator_thickness(mut self, thickness: f32) -> Self {
        self.separator.thickness = thickness.max(defaults::MIN_SEPARATOR_THICKNESS);
        self
    }

    /// Set the separator insets.
    pub fn with_separator_insets(mut self, insets: EdgeInsets) -> Self {
        self.separator.insets = insets;
        self
    }

    /// Hide every separator.
    pub fn with_hidden_separators(mut self, hidden: bool) -> Self {
        self.separator.hidden = hidden;
        self
    }

    /// Set whether the last row's separator is hidden automatically.
    pub fn with_auto_hide_last_row_separator(mut self, auto_hide: bool) -> Self {
        self.auto_hide_last_row_separator = auto_hide;
        self
    }

    /// Set the initial viewport size.
    pub fn with_viewport_size(mut self, size: Size) -> Self {
        self.viewport_size = size;
        self
    }

    /// Set the animation timings.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    // =========================================================================
    // TOML
    // =========================================================================

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> StackResult<Self> {
        let config: StackConfig = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, axis = ?config.axis, "parsed stack configuration");
        Ok(config)
    }

    /// Read a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> StackResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StackError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading stack configuration");
        Self::from_toml_str(&text)
    }

    /// Encode the configuration as TOML text.
    pub fn to_toml_string(&self) -> StackResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> StackResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| StackError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the layout cannot honor.
    pub fn validate(&self) -> StackResult<()> {
        let non_negative = |field: &'static str, insets: &EdgeInsets| {
            let values = [insets.top, insets.left, insets.bottom, insets.right];
            if values.iter().all(|v| v.is_finite() && *v >= 0.0) {
                Ok(())
            } else {
                Err(StackError::InvalidValue {
                    field,
                    reason: format!("insets must be finite and non-negative, got {insets:?}"),
                })
            }
        };
        non_negative("row_insets", &self.row_insets)?;
        non_negative("row_padding", &self.row_padding)?;
        non_negative("separator.insets", &self.separator.insets)?;

        if !self.separator.thickness.is_finite()
            || self.separator.thickness < defaults::MIN_SEPARATOR_THICKNESS
        {
            return Err(StackError::InvalidValue {
                field: "separator.thickness",
                reason: format!(
                    "must be at least {}, got {}",
                    defaults::MIN_SEPARATOR_THICKNESS,
                    self.separator.thickness
                ),
            });
        }
        let damping = self.animation.row_transition_damping;
        if damping.is_nan() || damping <= 0.0 {
            return Err(StackError::InvalidValue {
                field: "animation.row_transition_damping",
                reason: format!("must be positive, got {damping}"),
            });
        }
        Ok(())
    }
}
