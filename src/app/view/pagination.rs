//! Pagination bar: page strip, page-size picker and range summary

use crate::app::ui_components::{
    page_button, secondary_button, themed_pick_list, themed_pick_list_menu,
};
use crate::app::{Message, State};
use crate::core::pagination::{PAGE_SIZE_OPTIONS, PageSlot, visible_pages};
use iced::widget::{Space, button, pick_list, row, text};
use iced::{Alignment, Element, Length};

pub fn view_pagination(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let font = state.font_regular;
    let info = state.store.page_info();

    let nav = |label: &'static str, target: usize, enabled: bool| {
        button(text(label).size(13).font(font))
            .on_press_maybe(enabled.then_some(Message::PageSelected(target)))
            .padding([6, 10])
            .style(move |_, status| secondary_button(theme, status))
    };

    let mut strip = row![
        nav("«", 1, info.has_prev),
        nav("‹", info.page.saturating_sub(1), info.has_prev),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    for slot in visible_pages(info.page, info.total_pages) {
        strip = match slot {
            PageSlot::Page(page) => {
                let current = page == info.page;
                strip.push(
                    button(text(page.to_string()).size(13).font(font))
                        .on_press_maybe((!current).then_some(Message::PageSelected(page)))
                        .padding([6, 10])
                        .style(move |_, status| page_button(theme, current, status)),
                )
            }
            PageSlot::Ellipsis => {
                strip.push(text("…").size(13).font(font).color(theme.fg_muted))
            }
        };
    }

    let strip = strip
        .push(nav("›", info.page + 1, info.has_next))
        .push(nav("»", info.total_pages, info.has_next));

    let page_size = pick_list(
        PAGE_SIZE_OPTIONS,
        Some(state.store.limit()),
        Message::PageSizeChanged,
    )
    .padding([6, 10])
    .font(font)
    .style(move |_, status| themed_pick_list(theme, status))
    .menu_style(move |_| themed_pick_list_menu(theme));

    row![
        text(info.summary())
            .size(13)
            .font(font)
            .color(theme.fg_secondary),
        Space::new().width(Length::Fill),
        strip,
        Space::new().width(Length::Fixed(16.0)),
        text("Per page").size(13).font(font).color(theme.fg_secondary),
        page_size,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
