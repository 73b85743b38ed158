//! Toast stack rendered in the top-right corner

use crate::app::Message;
use crate::app::ui_components::{ghost_button, toast_accent, toast_container};
use crate::theme::AppTheme;
use crate::toast::ToastQueue;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

pub fn view_toasts<'a>(
    toasts: &'a ToastQueue,
    theme: &'a AppTheme,
    font: iced::Font,
) -> Element<'a, Message> {
    column(toasts.visible().map(|toast| {
        let kind = toast.kind;
        container(
            row![
                text(kind.icon())
                    .size(16)
                    .font(font)
                    .color(toast_accent(theme, kind)),
                text(&toast.message)
                    .size(13)
                    .font(font)
                    .width(Length::Fill),
                button(text("✕").size(12).font(font))
                    .on_press(Message::DismissToast(toast.id))
                    .padding([2, 6])
                    .style(move |_, status| ghost_button(theme, status)),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .padding([10, 14])
        .width(Length::Fixed(340.0))
        .style(move |_| toast_container(theme, kind))
        .into()
    }))
    .spacing(8)
    .padding(16)
    .into()
}
