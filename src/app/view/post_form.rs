//! Create/edit post dialog

use crate::app::forms::PostForm;
use crate::app::ui_components::{
    modal_card_container, primary_button, secondary_button, themed_pick_list,
    themed_pick_list_menu, validated_text_input,
};
use crate::app::{Message, State};
use crate::theme::AppTheme;
use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Element, Length};

/// Field label with its error line underneath (blank when valid)
fn field<'a>(
    label: &'a str,
    input: impl Into<Element<'a, Message>>,
    error: Option<String>,
    theme: &'a AppTheme,
    font: iced::Font,
) -> Element<'a, Message> {
    let input: Element<'a, Message> = input.into();
    column![
        text(label).size(13).font(font).color(theme.fg_secondary),
        input,
        text(error.unwrap_or_default())
            .size(12)
            .font(font)
            .color(theme.danger),
    ]
    .spacing(4)
    .into()
}

pub fn view_post_form<'a>(state: &'a State, form: &'a PostForm) -> Element<'a, Message> {
    let theme = &state.theme;
    let font = state.font_regular;
    let errors = form.visible_errors();
    let title_invalid = errors.title.is_some();
    let body_invalid = errors.body.is_some();

    let title_input = text_input("At least 3 characters", &form.title)
        .on_input(Message::FormTitleChanged)
        .padding(10)
        .size(14)
        .font(font)
        .style(move |_, status| validated_text_input(theme, status, title_invalid));

    let body_input = text_input("At least 10 characters", &form.body)
        .on_input(Message::FormBodyChanged)
        .padding(10)
        .size(14)
        .font(font)
        .style(move |_, status| validated_text_input(theme, status, body_invalid));

    let options = state.user_options();
    let selected = options
        .iter()
        .find(|option| Some(option.id) == form.user_id)
        .cloned();
    let user_input = pick_list(options, selected, Message::FormUserSelected)
        .placeholder("Select a user")
        .padding(10)
        .font(font)
        .width(Length::Fill)
        .style(move |_, status| themed_pick_list(theme, status))
        .menu_style(move |_| themed_pick_list_menu(theme));

    let submit_label = match (form.submitting, form.is_editing()) {
        (true, _) => "Saving...",
        (false, true) => "Save Changes",
        (false, false) => "Create Post",
    };

    let actions = row![
        button(text("Cancel").size(14).font(font))
            .on_press(Message::CancelForm)
            .padding([10, 20])
            .style(move |_, status| secondary_button(theme, status)),
        button(text(submit_label).size(14).font(font))
            .on_press_maybe((!form.submitting).then_some(Message::SubmitForm))
            .padding([10, 24])
            .style(move |_, status| primary_button(theme, status)),
    ]
    .spacing(12);

    container(
        column![
            text(form.heading()).size(20).font(font),
            field("Title", title_input, errors.title, theme, font),
            field("Body", body_input, errors.body, theme, font),
            field("Author", user_input, errors.user_id, theme, font),
            text("Enter to save, Esc to cancel")
                .size(11)
                .font(font)
                .color(theme.fg_muted),
            actions,
        ]
        .spacing(12)
        .padding(28)
        .width(Length::Fixed(520.0)),
    )
    .style(move |_| modal_card_container(theme))
    .into()
}
