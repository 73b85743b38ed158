//! Widget style functions shared by every view
//!
//! All functions take the active [`AppTheme`] so light and dark mode share
//! one set of styles.

use crate::theme::AppTheme;
use crate::toast::ToastKind;
use iced::widget::{button, container, pick_list, rule, scrollable, text_input};
use iced::{Border, Color, Shadow, Vector};

/// Scales the RGB channels of `color`, keeping alpha
fn shade(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn soft_shadow(theme: &AppTheme, y: f32, blur: f32) -> Shadow {
    Shadow {
        color: theme.shadow_color,
        offset: Vector::new(0.0, y),
        blur_radius: blur,
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Default::default()
    }
}

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: soft_shadow(theme, 2.0, 3.0),
        ..Default::default()
    }
}

/// Dialog surface; heavier shadow than a card so it lifts off the backdrop
pub fn modal_card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        shadow: Shadow {
            color: theme.shadow_strong,
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..card_container(theme)
    }
}

pub fn table_header_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.fg_primary, 0.04).into()),
        border: rounded(4.0),
        ..Default::default()
    }
}

/// Zebra striping for table rows
pub fn table_row_container(theme: &AppTheme, striped: bool) -> container::Style {
    container::Style {
        background: striped.then(|| theme.bg_hover.into()),
        ..Default::default()
    }
}

pub fn error_banner_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.danger, 0.12).into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color: theme.danger,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

pub fn toast_accent(theme: &AppTheme, kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.danger,
        ToastKind::Info => theme.info,
        ToastKind::Warning => theme.warning,
    }
}

pub fn toast_container(theme: &AppTheme, kind: ToastKind) -> container::Style {
    container::Style {
        background: Some(theme.bg_elevated.into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color: toast_accent(theme, kind),
            width: 1.5,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Solid button in `fill`, used by the primary and danger variants
fn filled_button(theme: &AppTheme, fill: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(fill.into()),
        text_color: theme.fg_on_accent,
        border: rounded(4.0),
        shadow: soft_shadow(theme, 2.0, 3.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(shade(fill, 1.08).into()),
            shadow: soft_shadow(theme, 2.5, 4.0),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(shade(fill, 0.95).into()),
            shadow: soft_shadow(theme, 0.5, 1.5),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(fill, 0.5).into()),
            text_color: with_alpha(theme.fg_on_accent, 0.5),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.accent, status)
}

pub fn danger_button(theme: &AppTheme, status: button::Status) -> button::Style {
    filled_button(theme, theme.danger, status)
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_surface.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: soft_shadow(theme, 2.0, 3.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            shadow: soft_shadow(theme, 2.5, 4.0),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            shadow: soft_shadow(theme, 0.5, 1.5),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(theme.bg_surface, 0.5).into()),
            text_color: theme.fg_muted,
            border: Border {
                color: with_alpha(theme.border, 0.3),
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Active => base,
    }
}

/// Borderless button for column headers and row actions
pub fn ghost_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: theme.fg_secondary,
        border: rounded(4.0),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(theme.bg_hover.into()),
            text_color: theme.fg_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(theme.bg_active.into()),
            text_color: theme.fg_primary,
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

/// Numbered page button; the current page is drawn in the accent color
pub fn page_button(theme: &AppTheme, current: bool, status: button::Status) -> button::Style {
    if current {
        primary_button(theme, status)
    } else {
        secondary_button(theme, status)
    }
}

/// Text input styling with theme-aware colors
pub fn themed_text_input(theme: &AppTheme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: theme.fg_muted,
        placeholder: theme.fg_muted,
        value: theme.fg_primary,
        selection: with_alpha(theme.accent, 0.4),
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            icon: theme.fg_secondary,
            ..base
        },
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                ..base.border
            },
            icon: theme.accent,
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            background: with_alpha(theme.bg_elevated, 0.5).into(),
            border: Border {
                color: with_alpha(theme.border, 0.3),
                ..base.border
            },
            value: theme.fg_muted,
            ..base
        },
    }
}

/// Form input whose border turns red while its field has an error
pub fn validated_text_input(
    theme: &AppTheme,
    status: text_input::Status,
    has_error: bool,
) -> text_input::Style {
    let style = themed_text_input(theme, status);
    if has_error {
        text_input::Style {
            border: Border {
                color: theme.danger,
                ..style.border
            },
            ..style
        }
    } else {
        style
    }
}

/// Pick list (dropdown) styling with theme-aware colors
pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        background: theme.bg_elevated.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        handle_color: theme.fg_secondary,
        placeholder_color: theme.fg_muted,
        text_color: theme.fg_primary,
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                ..base.border
            },
            handle_color: theme.fg_primary,
            ..base
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            border: Border {
                color: theme.accent,
                width: 2.0,
                ..base.border
            },
            handle_color: theme.accent,
            ..base
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: soft_shadow(theme, 4.0, 8.0),
        text_color: theme.fg_primary,
        selected_background: theme.bg_hover.into(),
        selected_text_color: theme.fg_primary,
    }
}

/// Semi-transparent modal backdrop that works with both light and dark themes
pub fn modal_backdrop(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.bg_base, 0.85).into()),
        ..Default::default()
    }
}

pub fn themed_horizontal_rule(theme: &AppTheme) -> rule::Style {
    rule::Style {
        color: theme.divider,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Themed scrollable with visible scrollbars
pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Active { .. } => theme.fg_muted,
        scrollable::Status::Hovered {
            is_horizontal_scrollbar_hovered,
            is_vertical_scrollbar_hovered,
            ..
        } => {
            if is_horizontal_scrollbar_hovered || is_vertical_scrollbar_hovered {
                theme.fg_secondary
            } else {
                theme.fg_muted
            }
        }
        scrollable::Status::Dragged { .. } => theme.accent,
    };

    let rail = scrollable::Rail {
        background: Some(theme.bg_elevated.into()),
        border: rounded(4.0),
        scroller: scrollable::Scroller {
            background: scroller_color.into(),
            border: rounded(4.0),
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: theme.bg_surface.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: soft_shadow(theme, 2.0, 4.0),
            icon: theme.fg_primary,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeChoice;

    #[test]
    fn test_shade_clamps_and_keeps_alpha() {
        let c = shade(Color::from_rgba(0.9, 0.5, 0.1, 0.4), 2.0);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 1.0).abs() < f32::EPSILON);
        assert!((c.a - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validated_input_marks_errors() {
        let theme = ThemeChoice::Light.to_theme();
        let style = validated_text_input(&theme, text_input::Status::Active, true);
        assert_eq!(style.border.color, theme.danger);
        let style = validated_text_input(&theme, text_input::Status::Active, false);
        assert_eq!(style.border.color, theme.border);
    }

    #[test]
    fn test_current_page_uses_accent() {
        let theme = ThemeChoice::Dark.to_theme();
        let style = page_button(&theme, true, button::Status::Active);
        assert_eq!(style.background, Some(theme.accent.into()));
    }
}
