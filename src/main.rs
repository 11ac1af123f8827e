mod app;
mod loader;
mod theme;
mod views;

use activity_browser::api::ApiClient;
use activity_browser::config;

fn main() -> iced::Result {
    activity_browser::init_tracing();

    let config = config::load();
    let api = match ApiClient::new(&config.base_url) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("cannot start: {e}");
            std::process::exit(1);
        }
    };

    app::run(config, api)
}
