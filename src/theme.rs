//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes, and
//! `StyleMap` resolves role names to concrete styles. The dark-mode toggle
//! switches the variant at runtime and rebuilds the map, so every widget
//! that resolves styles through it re-renders in the new scheme.
//!
//! Presentation details for content live here too: glyphs are keyed by
//! `Category` so the data records in `content` stay view-free.

use crate::content::Category;
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants. `Dark` is the persisted "dark mode" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Variant for a persisted dark-mode flag.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Whether this variant is the dark scheme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// The other variant: Dark <-> Light.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Category Presentation
// ============================================================================

/// Display glyph for a post category.
///
/// Kept out of the `BlogPost` records so the data model has no view-layer
/// dependency; the card renderer looks glyphs up here.
pub fn category_glyph(category: Category) -> &'static str {
    match category {
        Category::Health => "♥",
        Category::Nutrition => "✿",
        Category::Wellness => "❀",
        Category::History => "◷",
    }
}

/// Accent color for a post category, shared by both palettes.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Health => Color::Magenta,
        Category::Nutrition => Color::Green,
        Category::Wellness => Color::Cyan,
        Category::History => Color::Blue,
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Sidebar --
    pub sidebar_link: Style,
    pub sidebar_link_selected: Style,
    pub sidebar_link_active: Style,
    pub sidebar_brand: Style,

    // -- Post cards --
    pub post_title: Style,
    pub post_selected: Style,
    pub post_excerpt: Style,
    pub post_meta: Style,
    pub post_saved: Style,

    // -- Featured card --
    pub featured_title: Style,
    pub featured_blurb: Style,
    pub featured_border: Style,

    // -- FAQ accordion --
    pub faq_question: Style,
    pub faq_question_selected: Style,
    pub faq_answer: Style,
    pub faq_read_marker: Style,

    // -- Progress --
    pub progress_filled: Style,
    pub progress_empty: Style,
    pub progress_label: Style,

    // -- Chrome --
    pub header_title: Style,
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub search_input: Style,
}

impl ColorPalette {
    /// Dark palette.
    fn dark() -> Self {
        Self {
            sidebar_link: Style::default(),
            sidebar_link_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            sidebar_link_active: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            sidebar_brand: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            post_title: Style::default().add_modifier(Modifier::BOLD),
            post_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            post_excerpt: Style::default(),
            post_meta: Style::default().fg(Color::DarkGray),
            post_saved: Style::default().fg(Color::Yellow),

            featured_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            featured_blurb: Style::default(),
            featured_border: Style::default().fg(Color::Magenta),

            faq_question: Style::default().add_modifier(Modifier::BOLD),
            faq_question_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            faq_answer: Style::default(),
            faq_read_marker: Style::default().fg(Color::Green),

            progress_filled: Style::default().fg(Color::Magenta),
            progress_empty: Style::default().fg(Color::DarkGray),
            progress_label: Style::default().fg(Color::Gray),

            header_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            search_input: Style::default().fg(Color::Yellow),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            sidebar_link: Style::default().fg(Color::Black),
            sidebar_link_selected: Style::default().bg(Color::Blue).fg(Color::White),
            sidebar_link_active: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            sidebar_brand: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            post_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            post_selected: Style::default().bg(Color::Blue).fg(Color::White),
            post_excerpt: Style::default().fg(Color::Black),
            post_meta: Style::default().fg(Color::DarkGray),
            post_saved: Style::default().fg(Color::Magenta),

            featured_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            featured_blurb: Style::default().fg(Color::Black),
            featured_border: Style::default().fg(Color::Magenta),

            faq_question: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            faq_question_selected: Style::default().bg(Color::Blue).fg(Color::White),
            faq_answer: Style::default().fg(Color::Black),
            faq_read_marker: Style::default().fg(Color::Green),

            progress_filled: Style::default().fg(Color::Magenta),
            progress_empty: Style::default().fg(Color::Gray),
            progress_label: Style::default().fg(Color::DarkGray),

            header_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            search_input: Style::default().fg(Color::Magenta),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
///
/// Widgets resolve role names (e.g. `"post_title"`) at render time, so a
/// theme switch only has to rebuild this map.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 24] = [
    "sidebar_link",
    "sidebar_link_selected",
    "sidebar_link_active",
    "sidebar_brand",
    "post_title",
    "post_selected",
    "post_excerpt",
    "post_meta",
    "post_saved",
    "featured_title",
    "featured_blurb",
    "featured_border",
    "faq_question",
    "faq_question_selected",
    "faq_answer",
    "faq_read_marker",
    "progress_filled",
    "progress_empty",
    "progress_label",
    "header_title",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "search_input",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 24] = [
            p.sidebar_link,
            p.sidebar_link_selected,
            p.sidebar_link_active,
            p.sidebar_brand,
            p.post_title,
            p.post_selected,
            p.post_excerpt,
            p.post_meta,
            p.post_saved,
            p.featured_title,
            p.featured_blurb,
            p.featured_border,
            p.faq_question,
            p.faq_question_selected,
            p.faq_answer,
            p.faq_read_marker,
            p.progress_filled,
            p.progress_empty,
            p.progress_label,
            p.header_title,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.search_input,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for
    /// unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_status_bar() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.status_bar,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.post_selected, light.post_selected);
        assert_ne!(dark.status_bar, light.status_bar);
    }

    #[test]
    fn toggled_is_involutive() {
        assert_eq!(ThemeVariant::Dark.toggled(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.toggled(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.toggled().toggled(), ThemeVariant::Dark);
    }

    #[test]
    fn variant_from_dark_flag() {
        assert_eq!(ThemeVariant::from_dark_flag(true), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::from_dark_flag(false), ThemeVariant::Light);
        assert!(ThemeVariant::from_dark_flag(true).is_dark());
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("post_selected"), palette.post_selected);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
        assert_eq!(sm.resolve("search_input"), palette.search_input);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn style_map_has_all_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        for name in ROLE_NAMES {
            assert_ne!(sm.map.get(name), None, "Role '{}' missing", name);
        }
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
    }

    #[test]
    fn every_category_has_a_glyph_and_color() {
        for cat in Category::ALL {
            assert!(!category_glyph(cat).is_empty());
            let _ = category_color(cat);
        }
    }
}
