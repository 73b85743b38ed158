//! Post table with sortable headers and per-row actions

use crate::app::ui_components::{
    card_container, danger_button, ghost_button, secondary_button, table_header_container,
    table_row_container, themed_horizontal_rule, themed_scrollable,
};
use crate::app::{Message, State};
use crate::core::post::Post;
use crate::core::query::{SortColumn, SortDirection, SortSpec};
use crate::utils::{single_line, truncate_string};
use iced::widget::{Id, button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length};

const TITLE_CHARS: usize = 60;
const BODY_CHARS: usize = 90;

fn column_width(column: SortColumn) -> Length {
    match column {
        SortColumn::Id => Length::Fixed(64.0),
        SortColumn::UserId => Length::Fixed(150.0),
        SortColumn::Title => Length::FillPortion(3),
        SortColumn::Body => Length::FillPortion(5),
    }
}

const ACTIONS_WIDTH: f32 = 150.0;

/// "Title ▲" on the active column, plain name elsewhere
fn header_label(column: SortColumn, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.column == column => {
            let arrow = match spec.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            format!("{column} {arrow}")
        }
        _ => column.to_string(),
    }
}

fn view_header(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let font = state.font_regular;
    let sort = state.store.sort();

    let mut header = row![].spacing(8).align_y(Alignment::Center);
    for column in SortColumn::ALL {
        header = header.push(
            button(text(header_label(column, sort)).size(13).font(font))
                .on_press(Message::SortClicked(column))
                .padding([6, 8])
                .width(column_width(column))
                .style(move |_, status| ghost_button(theme, status)),
        );
    }
    header = header.push(
        text("Actions")
            .size(13)
            .font(font)
            .color(theme.fg_secondary)
            .width(Length::Fixed(ACTIONS_WIDTH)),
    );

    container(header)
        .padding([4, 8])
        .width(Length::Fill)
        .style(move |_| table_header_container(theme))
        .into()
}

fn view_row<'a>(state: &'a State, post: &'a Post, striped: bool) -> Element<'a, Message> {
    let theme = &state.theme;
    let font = state.font_regular;
    let busy = state.store.is_loading();

    let cells = row![
        text(post.id.to_string())
            .size(13)
            .font(state.font_mono)
            .color(theme.fg_secondary)
            .width(column_width(SortColumn::Id)),
        text(state.user_label(post.user_id))
            .size(13)
            .font(font)
            .width(column_width(SortColumn::UserId)),
        text(truncate_string(&single_line(&post.title), TITLE_CHARS))
            .size(13)
            .font(font)
            .width(column_width(SortColumn::Title)),
        text(truncate_string(&single_line(&post.body), BODY_CHARS))
            .size(13)
            .font(font)
            .color(theme.fg_secondary)
            .width(column_width(SortColumn::Body)),
        row![
            button(text("Edit").size(12).font(font))
                .on_press_maybe((!busy).then_some(Message::EditPostClicked(post.id)))
                .padding([4, 12])
                .style(move |_, status| secondary_button(theme, status)),
            button(text("Delete").size(12).font(font))
                .on_press_maybe((!busy).then_some(Message::DeletePostRequested(post.id)))
                .padding([4, 12])
                .style(move |_, status| danger_button(theme, status)),
        ]
        .spacing(6)
        .width(Length::Fixed(ACTIONS_WIDTH)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(cells)
        .padding([8, 16])
        .width(Length::Fill)
        .style(move |_| table_row_container(theme, striped))
        .into()
}

fn view_empty(state: &State) -> Element<'_, Message> {
    let message = if state.store.is_loading() && state.store.posts().is_empty() {
        "Loading posts..."
    } else if state.store.posts().is_empty() {
        "No posts yet."
    } else {
        "No posts match the current filters."
    };

    container(
        text(message)
            .size(14)
            .font(state.font_regular)
            .color(state.theme.fg_muted),
    )
    .padding(40)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

pub fn view_table(state: &State) -> Element<'_, Message> {
    let theme = &state.theme;
    let page = state.store.visible_page();

    let body: Element<'_, Message> = if page.is_empty() {
        view_empty(state)
    } else {
        let rows = column(
            page.iter()
                .enumerate()
                .map(|(index, post)| view_row(state, post, index % 2 == 1)),
        );
        scrollable(rows)
            .id(Id::new(super::TABLE_SCROLLABLE_ID))
            .height(Length::Fill)
            .style(move |_, status| themed_scrollable(theme, status))
            .into()
    };

    container(
        column![
            view_header(state),
            rule::horizontal(1).style(move |_| themed_horizontal_rule(theme)),
            body,
        ]
        .spacing(4),
    )
    .padding(8)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| card_container(theme))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_label_marks_active_column() {
        let sort = Some(SortSpec::desc(SortColumn::Title));
        assert_eq!(header_label(SortColumn::Title, sort), "Title ▼");
        assert_eq!(header_label(SortColumn::Body, sort), "Body");
        assert_eq!(header_label(SortColumn::Id, None), "ID");
    }
}
