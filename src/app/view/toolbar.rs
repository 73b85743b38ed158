//! Search box, author filter and global actions

use crate::app::ui_components::{
    ghost_button, primary_button, secondary_button, themed_pick_list, themed_pick_list_menu,
    themed_text_input,
};
use crate::app::{Message, State, UserFilter};
use iced::widget::{Space, button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn view_toolbar(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let font = state.font_regular;

    let search = text_input("Search title or body...", &state.search_input)
        .on_input(Message::SearchChanged)
        .padding(10)
        .size(14)
        .font(font)
        .width(Length::FillPortion(3))
        .style(move |_, status| themed_text_input(theme, status));

    let clear_search = button(text("✕").size(13).font(font))
        .on_press_maybe((!state.search_input.is_empty()).then_some(Message::ClearSearch))
        .padding([8, 10])
        .style(move |_, status| ghost_button(theme, status));

    let selected_user = UserFilter::from_user_id(state.store.filters().active_user_id());
    let user_filter = pick_list(
        UserFilter::options(),
        Some(selected_user),
        Message::UserFilterChanged,
    )
    .padding(10)
    .font(font)
    .width(Length::Fixed(160.0))
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    let new_post = button(text("+ New Post").size(14).font(font))
        .on_press_maybe((!state.has_modal()).then_some(Message::NewPostClicked))
        .padding([10, 18])
        .style(move |_, status| primary_button(theme, status));

    let theme_toggle = button(text(state.current_theme.toggle_label()).size(14).font(font))
        .on_press(Message::ThemeToggled)
        .padding([10, 14])
        .style(move |_, status| secondary_button(theme, status));

    row![
        search,
        clear_search,
        user_filter,
        Space::new().width(Length::Fill),
        new_post,
        theme_toggle,
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
