mod activities;
mod signup;

use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::app::{Browser, Message};

const PANEL_PADDING: u16 = 16;

impl Browser {
    /// Two panels side by side with a status footer.
    pub(crate) fn view_page(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let activities = container(self.view_activities())
            .padding(PANEL_PADDING)
            .width(Length::FillPortion(3))
            .height(Length::Fill)
            .style(colors.panel_style());

        let signup = container(self.view_signup())
            .padding(PANEL_PADDING)
            .width(Length::FillPortion(2))
            .height(Length::Fill)
            .style(colors.panel_style());

        let footer = text(format!(
            "v{} ({}) \u{00b7} {}",
            env!("ACTIVITY_BROWSER_VERSION"),
            env!("ACTIVITY_BROWSER_COMMIT"),
            self.api.base_url()
        ))
        .size(colors.small_text)
        .color(colors.muted);

        let body = row![activities, signup]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill);

        container(column![body, footer].spacing(8))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
