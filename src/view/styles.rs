//! Board styling configuration.
//!
//! Purple theme for the board chrome, with a plain fallback when colors are
//! disabled. Highlights keep their modifiers without color so focus stays
//! visible under `NO_COLOR`.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on or off regardless of environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BoardStyles =====

/// Styles for every element of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStyles {
    /// Title line and block titles.
    pub title: Style,
    /// Unfocused block borders.
    pub border: Style,
    /// Border of the focused pane and the modal.
    pub border_focused: Style,
    /// Text area placeholder.
    pub placeholder: Style,
    /// `[ Generate Barcodes ]` button.
    pub generate_button: Style,
    /// `[ Clear Data ]` button.
    pub clear_button: Style,
    /// "Barcode Data:" and "Number:" labels.
    pub card_label: Style,
    /// Border of the highlighted card.
    pub card_highlighted: Style,
    /// Barcode bars.
    pub bars: Style,
    /// Inline encoding failures.
    pub error: Style,
    /// Inactive page buttons.
    pub page_button: Style,
    /// Current page button.
    pub page_active: Style,
    /// Modal background.
    pub modal: Style,
    /// Modal `[ Close ]` button.
    pub close_button: Style,
    /// Status bar text.
    pub status: Style,
    /// Key names in the status bar and help.
    pub key_hint: Style,
}

impl BoardStyles {
    /// Create styles with the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Magenta),
                border: Style::default().fg(Color::Gray),
                border_focused: Style::default().fg(Color::Magenta),
                placeholder: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                generate_button: bold.fg(Color::Black).bg(Color::White),
                clear_button: bold.fg(Color::White).bg(Color::Red),
                card_label: bold,
                card_highlighted: bold.fg(Color::Magenta),
                bars: Style::default().fg(Color::Black).bg(Color::White),
                error: Style::default().fg(Color::Red),
                page_button: Style::default().fg(Color::Gray),
                page_active: bold.fg(Color::White).bg(Color::Magenta),
                modal: Style::default(),
                close_button: bold.fg(Color::White).bg(Color::Magenta),
                status: Style::default().fg(Color::Gray),
                key_hint: bold.fg(Color::Yellow),
            }
        } else {
            let reversed = Style::default().add_modifier(Modifier::REVERSED);
            Self {
                title: bold,
                border: Style::default(),
                border_focused: bold,
                placeholder: Style::default().add_modifier(Modifier::DIM),
                generate_button: reversed,
                clear_button: reversed,
                card_label: bold,
                card_highlighted: bold,
                bars: Style::default(),
                error: Style::default(),
                page_button: Style::default(),
                page_active: reversed.add_modifier(Modifier::BOLD),
                modal: Style::default(),
                close_button: reversed,
                status: Style::default(),
                key_hint: bold,
            }
        }
    }
}

// ===== Tests =====
