//! UI rendering module for Postboard
//!
//! Split into logical submodules for maintainability.

// Widget IDs for state preservation
pub const TABLE_SCROLLABLE_ID: &str = "post-table";

mod confirmation;
mod pagination;
mod post_form;
mod table;
mod toasts;
mod toolbar;

use crate::app::ui_components::{error_banner_container, main_container, modal_backdrop, secondary_button};
use crate::app::{Message, State};
use iced::widget::{Space, button, center, column, container, opaque, row, stack, text};
use iced::{Alignment, Element, Length, alignment};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;

    let header = row![
        column![
            text("Postboard").size(24).font(state.font_regular),
            text(format!("{} posts loaded", state.store.posts().len()))
                .size(12)
                .font(state.font_regular)
                .color(theme.fg_muted),
        ]
        .spacing(2),
        Space::new().width(Length::Fill),
        if state.store.is_loading() {
            text("Loading…")
                .size(13)
                .font(state.font_regular)
                .color(theme.info)
        } else {
            text("")
        },
    ]
    .align_y(Alignment::Center);

    let mut content = column![header, toolbar::view_toolbar(state)].spacing(16);
    if let Some(banner) = view_error_banner(state) {
        content = content.push(banner);
    }
    let content = content
        .push(table::view_table(state))
        .push(pagination::view_pagination(state))
        .padding(24)
        .max_width(1200);

    let base = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(move |_| main_container(theme));

    // Dialog layer: delete confirmation wins over the form, they never coexist
    // IMPORTANT: Always use stack! to keep widget tree structure consistent (preserves scroll state)
    let overlay: Option<Element<'_, Message>> = if let Some(id) = state.deleting_id {
        Some(confirmation::view_delete_confirmation(
            state.store.find(id),
            theme,
            state.font_regular,
        ))
    } else {
        state.post_form.as_ref().map(|form| post_form::view_post_form(state, form))
    };

    let with_overlay: Element<'_, Message> = if let Some(dialog) = overlay {
        stack![
            base,
            opaque(center(dialog).style(move |_| modal_backdrop(theme)))
        ]
        .into()
    } else {
        stack![base, Space::new()].into()
    };

    // Toast layer (free-floating at top-right, above the dialog backdrop)
    if state.toasts.is_empty() {
        stack![with_overlay, Space::new()].into()
    } else {
        stack![
            with_overlay,
            container(toasts::view_toasts(&state.toasts, theme, state.font_regular))
                .width(Length::Fill)
                .height(Length::Shrink)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
        ]
        .into()
    }
}

/// Failed-load banner with retry
fn view_error_banner(state: &State) -> Option<Element<'_, Message>> {
    let error = state.last_error.as_ref()?;
    let theme = &state.theme;
    let font = state.font_regular;

    let mut details = column![text(&error.user_message).size(14).font(font).color(theme.danger)]
        .spacing(4);
    for suggestion in &error.suggestions {
        details = details.push(
            text(format!("• {suggestion}"))
                .size(12)
                .font(font)
                .color(theme.fg_secondary),
        );
    }

    Some(
        container(
            row![
                details,
                Space::new().width(Length::Fill),
                button(text("Retry").size(13).font(font))
                    .on_press(Message::LoadPosts)
                    .padding([6, 14])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text("Dismiss").size(13).font(font))
                    .on_press(Message::DismissError)
                    .padding([6, 14])
                    .style(move |_, status| secondary_button(theme, status)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        )
        .padding(12)
        .width(Length::Fill)
        .style(move |_| error_banner_container(theme))
        .into(),
    )
}
