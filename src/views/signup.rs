use iced::widget::{button, column, container, pick_list, space, text, text_input};
use iced::{Element, Length};

use crate::app::{Browser, Message};

impl Browser {
    pub(crate) fn view_signup(&self) -> Element<'_, Message> {
        let colors = &self.colors;

        let title = text("Sign Up for an Activity")
            .size(colors.title_text)
            .color(colors.heading);

        let email = text_input("your-email@mergington.edu", &self.email)
            .on_input(Message::EmailInput)
            .on_submit(Message::Submit)
            .size(colors.body_text);

        // the placeholder option doubles as "nothing picked"
        let picker = pick_list(
            self.rendered.options.as_slice(),
            self.selected.clone(),
            Message::ActivityPicked,
        )
        .placeholder(activity_browser::render::SELECT_PLACEHOLDER)
        .text_size(colors.body_text)
        .width(Length::Fill);

        let submit = button(text("Sign Up").size(colors.body_text))
            .on_press(Message::Submit)
            .style(button::primary);

        let mut form = column![
            title,
            text("Student Email").size(colors.small_text).color(colors.muted),
            email,
            text("Activity").size(colors.small_text).color(colors.muted),
            picker,
            submit,
        ]
        .spacing(8)
        .width(Length::Fill);

        form = form.push(space::Space::new().height(8));

        if let (Some(kind), Some(message)) = (self.notice.kind(), self.notice.text()) {
            form = form.push(
                container(text(message).size(colors.body_text))
                    .padding(10)
                    .width(Length::Fill)
                    .style(colors.notice_style(kind)),
            );
        }

        form.into()
    }
}
