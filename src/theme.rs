use iced::{Background, Border, Color};

use activity_browser::config::ThemePreference;
use activity_browser::notice::NoticeKind;

/// All colors and font sizes used by the browser window.
pub struct ThemeColors {
    pub is_dark: bool,
    // Text
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub success: Color,
    pub error: Color,
    // Backgrounds
    pub page_bg: Color,
    pub panel_bg: Color,
    pub card_bg: Color,
    pub success_bg: Color,
    pub error_bg: Color,
    // Font sizes (logical pixels)
    /// Panel titles
    pub title_text: f32,
    /// Card headings
    pub heading_text: f32,
    /// Card body, form fields
    pub body_text: f32,
    /// Participants, footer
    pub small_text: f32,
}

impl ThemeColors {
    /// Dark theme: light text on a near-black page.
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            text: Color::from_rgba(1.0, 1.0, 1.0, 0.85),
            muted: Color::from_rgba(1.0, 1.0, 1.0, 0.45),
            heading: Color::from_rgb(0.55, 0.75, 1.0),
            success: Color::from_rgb(0.45, 0.85, 0.5),
            error: Color::from_rgb(0.95, 0.4, 0.4),
            page_bg: Color::from_rgb(0.05, 0.05, 0.08),
            panel_bg: Color::from_rgb(0.08, 0.08, 0.12),
            card_bg: Color::from_rgb(0.12, 0.12, 0.18),
            success_bg: Color::from_rgba(0.2, 0.5, 0.25, 0.35),
            error_bg: Color::from_rgba(0.6, 0.15, 0.15, 0.35),
            title_text: 22.0,
            heading_text: 17.0,
            body_text: 14.0,
            small_text: 12.0,
        }
    }

    /// Light theme: dark text on pale panels.
    pub fn light() -> Self {
        Self {
            is_dark: false,
            text: Color::from_rgba(0.08, 0.08, 0.08, 0.9),
            muted: Color::from_rgba(0.35, 0.35, 0.35, 0.8),
            heading: Color::from_rgb(0.1, 0.25, 0.55),
            success: Color::from_rgb(0.1, 0.45, 0.15),
            error: Color::from_rgb(0.7, 0.1, 0.1),
            page_bg: Color::from_rgb(0.95, 0.95, 0.97),
            panel_bg: Color::WHITE,
            card_bg: Color::from_rgb(0.97, 0.97, 0.99),
            success_bg: Color::from_rgb(0.87, 0.96, 0.88),
            error_bg: Color::from_rgb(0.99, 0.88, 0.88),
            title_text: 22.0,
            heading_text: 17.0,
            body_text: 14.0,
            small_text: 12.0,
        }
    }

    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    pub fn panel_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.panel_bg;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn card_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.card_bg;
        let edge = self.muted;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: Color { a: 0.25, ..edge },
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    pub fn notice_style(
        &self,
        kind: NoticeKind,
    ) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let (bg, fg) = match kind {
            NoticeKind::Success => (self.success_bg, self.success),
            NoticeKind::Error => (self.error_bg, self.error),
        };
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(bg)),
            text_color: Some(fg),
            border: Border {
                color: fg,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
}

pub fn resolve(preference: ThemePreference) -> ThemeColors {
    match preference {
        ThemePreference::Dark => ThemeColors::dark(),
        ThemePreference::Light => ThemeColors::light(),
    }
}
