//! Delete confirmation dialog

use crate::app::Message;
use crate::app::ui_components::{danger_button, modal_card_container, secondary_button};
use crate::core::post::Post;
use crate::theme::AppTheme;
use crate::utils::truncate_string;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};

pub fn view_delete_confirmation<'a>(
    post: Option<&'a Post>,
    theme: &'a AppTheme,
    font: iced::Font,
) -> Element<'a, Message> {
    let subject = post.map_or_else(
        || "this post".to_string(),
        |p| format!("\"{}\"", truncate_string(&p.title, 50)),
    );

    container(
        column![
            text("Delete Post").size(20).font(font).color(theme.danger),
            text(format!("Are you sure you want to delete {subject}?"))
                .size(14)
                .font(font),
            text("This action cannot be undone.")
                .size(13)
                .font(font)
                .color(theme.fg_muted),
            row![
                button(text("Cancel").size(14).font(font))
                    .on_press(Message::CancelDelete)
                    .padding([10, 20])
                    .style(move |_, status| secondary_button(theme, status)),
                button(text("Delete").size(14).font(font))
                    .on_press(Message::ConfirmDelete)
                    .padding([10, 24])
                    .style(move |_, status| danger_button(theme, status)),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .padding(28)
        .width(Length::Fixed(440.0)),
    )
    .style(move |_| modal_card_container(theme))
    .into()
}
