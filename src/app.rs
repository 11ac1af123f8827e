use std::fmt;
use std::time::Duration;

use iced::{Element, Subscription, Task};

use activity_browser::api::{Action, ActionOutcome, ApiClient};
use activity_browser::catalog::{Catalog, Category};
use activity_browser::config::Config;
use activity_browser::debounce::{Debouncer, SEARCH_DEBOUNCE};
use activity_browser::filter::{Filter, SortKey};
use activity_browser::notice::{Notice, NoticeKind, NOTICE_TIMEOUT, SIGNUP_INCOMPLETE};
use activity_browser::render::{render, ActivityOption, Participant, RenderedView};

use crate::loader::Spinner;
use crate::theme::{self, ThemeColors};

const SPINNER_TICK: Duration = Duration::from_millis(80);

// --- Browser State ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Category picker entry; `All` disables the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryChoice {
    All,
    Only(Category),
}

impl CategoryChoice {
    pub(crate) const ALL: [CategoryChoice; 5] = [
        CategoryChoice::All,
        CategoryChoice::Only(Category::Club),
        CategoryChoice::Only(Category::Team),
        CategoryChoice::Only(Category::Class),
        CategoryChoice::Only(Category::Other),
    ];

    fn from_filter(category: Option<Category>) -> Self {
        category.map_or(CategoryChoice::All, CategoryChoice::Only)
    }

    fn into_filter(self) -> Option<Category> {
        match self {
            CategoryChoice::All => None,
            CategoryChoice::Only(c) => Some(c),
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::All => f.write_str("All categories"),
            CategoryChoice::Only(c) => write!(f, "{c}"),
        }
    }
}

pub(crate) struct Browser {
    pub(crate) api: ApiClient,
    pub(crate) catalog: Catalog,
    pub(crate) load_state: LoadState,
    pub(crate) spinner: Spinner,
    pub(crate) search_input: String,
    pub(crate) search: Debouncer<String>,
    pub(crate) filter: Filter,
    pub(crate) rendered: RenderedView,
    pub(crate) email: String,
    pub(crate) selected: Option<ActivityOption>,
    pub(crate) notice: Notice,
    pub(crate) colors: ThemeColors,
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    CatalogLoaded(Result<Catalog, String>),
    Refresh,
    SearchInput(String),
    SearchSettled(u64),
    CategoryPicked(CategoryChoice),
    SortPicked(SortKey),
    EmailInput(String),
    ActivityPicked(ActivityOption),
    Submit,
    Unregister(Participant),
    ActionFinished(Action, Result<ActionOutcome, String>),
    NoticeExpired(u64),
    Tick,
}

pub(crate) fn run(config: Config, api: ApiClient) -> iced::Result {
    tracing::info!(
        "v{} ({}) starting against {}",
        env!("ACTIVITY_BROWSER_VERSION"),
        env!("ACTIVITY_BROWSER_COMMIT"),
        api.base_url()
    );

    iced::application(
        move || Browser::new(&config, api.clone()),
        Browser::update,
        Browser::view,
    )
    .title(Browser::title)
    .theme(Browser::theme)
    .style(Browser::style)
    .subscription(Browser::subscription)
    .window_size((1040.0, 760.0))
    .run()
}

impl Browser {
    pub(crate) fn new(config: &Config, api: ApiClient) -> (Self, Task<Message>) {
        let browser = Self {
            api,
            catalog: Catalog::default(),
            load_state: LoadState::Loading,
            spinner: Spinner::new(),
            search_input: String::new(),
            search: Debouncer::default(),
            filter: Filter::default(),
            rendered: RenderedView::default(),
            email: String::new(),
            selected: None,
            notice: Notice::default(),
            colors: theme::resolve(config.theme),
        };
        let task = browser.fetch_catalog();
        (browser, task)
    }

    fn title(&self) -> String {
        String::from("Mergington High School Activities")
    }

    pub(crate) fn category_choice(&self) -> CategoryChoice {
        CategoryChoice::from_filter(self.filter.category)
    }

    fn fetch_catalog(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_catalog().await.map_err(|e| e.to_string()) },
            Message::CatalogLoaded,
        )
    }

    fn perform(&self, action: Action, activity: String, email: String) -> Task<Message> {
        tracing::info!("{action:?} {email} -> {activity}");
        let api = self.api.clone();
        Task::perform(
            async move {
                api.perform(action, &activity, &email)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::ActionFinished(action, result),
        )
    }

    /// Show a notice and schedule its dismissal.
    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> Task<Message> {
        let token = self.notice.show(kind, text);
        let (delay, expired) = notice_expiry(token);
        after(delay, expired)
    }

    /// Recompute cards and picker options from the catalog and filter.
    fn rerender(&mut self) {
        self.rendered = render(&self.catalog, &self.filter);
        // keep the picked activity only while it is still offered
        if let Some(selected) = &self.selected {
            if !self.rendered.options.contains(selected) {
                self.selected = None;
            }
        }
    }

    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                tracing::info!("catalog loaded ({} activities)", catalog.len());
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
                self.rerender();
                Task::none()
            }
            Message::CatalogLoaded(Err(e)) => {
                tracing::error!("error fetching activities: {e}");
                self.load_state = LoadState::Failed;
                Task::none()
            }
            Message::Refresh => {
                if self.load_state == LoadState::Failed {
                    self.load_state = LoadState::Loading;
                }
                self.fetch_catalog()
            }
            Message::SearchInput(value) => {
                self.search_input = value.clone();
                let token = self.search.input(value);
                after(SEARCH_DEBOUNCE, Message::SearchSettled(token))
            }
            Message::SearchSettled(token) => {
                if let Some(search) = self.search.settle(token) {
                    tracing::debug!("search -> {search:?}");
                    self.filter.search = search;
                    self.rerender();
                }
                Task::none()
            }
            Message::CategoryPicked(choice) => {
                self.filter.category = choice.into_filter();
                self.rerender();
                Task::none()
            }
            Message::SortPicked(sort) => {
                self.filter.sort = sort;
                self.rerender();
                Task::none()
            }
            Message::EmailInput(value) => {
                self.email = value;
                Task::none()
            }
            Message::ActivityPicked(option) => {
                self.selected = if option.is_placeholder() {
                    None
                } else {
                    Some(option)
                };
                Task::none()
            }
            Message::Submit => {
                let email = self.email.trim().to_string();
                let activity = self.selected.as_ref().map(|o| o.value.clone());
                match activity {
                    Some(activity) if !email.is_empty() => {
                        self.perform(Action::Signup, activity, email)
                    }
                    _ => self.notify(NoticeKind::Error, SIGNUP_INCOMPLETE),
                }
            }
            Message::Unregister(participant) => {
                self.perform(Action::Unregister, participant.activity, participant.email)
            }
            Message::ActionFinished(action, Ok(ActionOutcome::Accepted(message))) => {
                if action == Action::Signup {
                    self.email.clear();
                    self.selected = None;
                }
                let dismiss = self.notify(NoticeKind::Success, message);
                Task::batch([dismiss, self.fetch_catalog()])
            }
            Message::ActionFinished(action, Ok(ActionOutcome::Rejected(detail))) => {
                tracing::info!("{action:?} rejected: {detail}");
                self.notify(NoticeKind::Error, detail)
            }
            Message::ActionFinished(action, Err(e)) => {
                tracing::error!("error during {action:?}: {e}");
                self.notify(NoticeKind::Error, action.failure_message())
            }
            Message::NoticeExpired(token) => {
                self.notice.expire(token);
                Task::none()
            }
            Message::Tick => {
                self.spinner.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.view_page()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.load_state == LoadState::Loading {
            iced::time::every(SPINNER_TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> iced::Theme {
        self.colors.iced_theme()
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.colors.page_bg,
            text_color: self.colors.text,
        }
    }
}

/// Deliver `message` once `delay` has elapsed.
/// Timer that hides the notice shown under `token`.
fn notice_expiry(token: u64) -> (Duration, Message) {
    (NOTICE_TIMEOUT, Message::NoticeExpired(token))
}

fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| message.clone(),
    )
}
