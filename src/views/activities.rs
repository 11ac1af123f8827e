use iced::font::Style as FontStyle;
use iced::widget::{
    button, column, container, mouse_area, pick_list, row, scrollable, space, text, text_input, Text,
};
use iced::{mouse, Element, Font, Length};

use activity_browser::filter::SortKey;
use activity_browser::render::{Card, LOAD_FAILED, NO_PARTICIPANTS};

use crate::app::{Browser, CategoryChoice, LoadState, Message};

const ITALIC: Font = Font {
    style: FontStyle::Italic,
    ..Font::DEFAULT
};

impl Browser {
    pub(crate) fn view_activities(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let title = text("Available Activities")
            .size(colors.title_text)
            .color(colors.heading);

        let refresh = button(text("Refresh").size(colors.small_text))
            .on_press(Message::Refresh)
            .style(button::secondary);

        let title_row = row![title, space::horizontal(), refresh];

        // Filter bar: search (debounced), category, sort
        let search = text_input("Search activities...", &self.search_input)
            .on_input(Message::SearchInput)
            .size(colors.body_text)
            .width(Length::FillPortion(3));

        let category = pick_list(
            CategoryChoice::ALL,
            Some(self.category_choice()),
            Message::CategoryPicked,
        )
        .text_size(colors.body_text)
        .width(Length::FillPortion(2));

        let sort = pick_list(SortKey::ALL, Some(self.filter.sort), Message::SortPicked)
            .text_size(colors.body_text)
            .width(Length::FillPortion(2));

        let filter_row = row![search, category, sort].spacing(8);

        let list: Element<'_, Message> = match self.load_state {
            LoadState::Loading if self.catalog.is_empty() => text(format!(
                "{} Loading activities...",
                self.spinner.current()
            ))
            .size(colors.body_text)
            .color(colors.muted)
            .into(),
            LoadState::Failed => text(LOAD_FAILED)
                .size(colors.body_text)
                .color(colors.error)
                .into(),
            _ if self.rendered.cards.is_empty() => {
                text("No activities match the current filters.")
                    .size(colors.body_text)
                    .color(colors.muted)
                    .into()
            }
            _ => {
                let mut cards = column![].spacing(10);
                for card in &self.rendered.cards {
                    cards = cards.push(self.view_card(card));
                }
                scrollable(cards).height(Length::Fill).into()
            }
        };

        column![title_row, filter_row, list]
            .spacing(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_card<'a>(&'a self, card: &'a Card) -> Element<'a, Message> {
        let colors = &self.colors;

        let label =
            |s: &'static str| -> Text<'a> { text(s).size(colors.body_text).color(colors.muted) };

        let mut body = column![
            text(&card.name)
                .size(colors.heading_text)
                .color(colors.heading),
            text(&card.description)
                .size(colors.body_text)
                .color(colors.text),
            row![
                label("Schedule: "),
                text(&card.schedule).size(colors.body_text).color(colors.text),
            ],
            row![
                label("Availability: "),
                text(card.availability())
                    .size(colors.body_text)
                    .color(colors.text),
            ],
        ]
        .spacing(4);

        if card.participants.is_empty() {
            body = body.push(
                text(NO_PARTICIPANTS)
                    .size(colors.small_text)
                    .color(colors.muted)
                    .font(ITALIC),
            );
        } else {
            let mut list = column![label("Participants:")].spacing(2);
            for participant in &card.participants {
                let remove = mouse_area(
                    text("\u{2715}")
                        .size(colors.small_text)
                        .color(colors.error),
                )
                .on_press(Message::Unregister(participant.clone()))
                .interaction(mouse::Interaction::Pointer);

                list = list.push(row![
                    text(format!("\u{2022} {}", participant.email))
                        .size(colors.small_text)
                        .color(colors.text),
                    space::horizontal(),
                    remove,
                ]);
            }
            body = body.push(list);
        }

        container(body)
            .padding(12)
            .width(Length::Fill)
            .style(colors.card_style())
            .into()
    }
}
