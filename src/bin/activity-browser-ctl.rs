use std::process;

use activity_browser::api::{Action, ActionOutcome, ApiClient};
use activity_browser::catalog::Category;
use activity_browser::config;
use activity_browser::filter::{Filter, SortKey};
use activity_browser::render::{render, LOAD_FAILED, NO_PARTICIPANTS};
use activity_browser::util::clip_words;

const DESCRIPTION_CHARS: usize = 72;

#[tokio::main]
async fn main() {
    activity_browser::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
        process::exit(1);
    };

    let config = config::load();
    let api = match ApiClient::new(&config.base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let code = match (command.as_str(), &args[1..]) {
        ("list", rest) => match parse_filter(rest) {
            Some(filter) => list(&api, &filter).await,
            None => {
                usage();
                1
            }
        },
        ("signup", [activity, email]) => act(&api, Action::Signup, activity, email).await,
        ("unregister", [activity, email]) => {
            act(&api, Action::Unregister, activity, email).await
        }
        _ => {
            eprintln!("unknown command: {}", args.join(" "));
            usage();
            1
        }
    };
    process::exit(code);
}

/// `--search TEXT`, `--category LABEL`, `--sort name|time`, in any order.
fn parse_filter(args: &[String]) -> Option<Filter> {
    let mut filter = Filter::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next()?;
        match flag.as_str() {
            "--search" => filter.search = value.clone(),
            "--category" => filter.category = Some(Category::from_label(value)?),
            "--sort" => filter.sort = SortKey::from_value(value),
            _ => return None,
        }
    }
    Some(filter)
}

async fn list(api: &ApiClient, filter: &Filter) -> i32 {
    let catalog = match api.fetch_catalog().await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("error fetching activities: {e}");
            eprintln!("{LOAD_FAILED}");
            return 1;
        }
    };

    let view = render(&catalog, filter);
    if view.cards.is_empty() {
        println!("no activities match");
    }
    for card in &view.cards {
        println!(
            "{} \u{00b7} {} \u{00b7} {}",
            card.name,
            card.availability(),
            card.schedule
        );
        println!("    {}", clip_words(&card.description, DESCRIPTION_CHARS));
        if card.participants.is_empty() {
            println!("    ({NO_PARTICIPANTS})");
        }
        for p in &card.participants {
            println!("    - {}", p.email);
        }
    }
    0
}

async fn act(api: &ApiClient, action: Action, activity: &str, email: &str) -> i32 {
    match api.perform(action, activity, email).await {
        Ok(ActionOutcome::Accepted(message)) => {
            println!("{message}");
            0
        }
        Ok(ActionOutcome::Rejected(detail)) => {
            eprintln!("{detail}");
            1
        }
        Err(e) => {
            tracing::error!("error during {action:?}: {e}");
            eprintln!("{}", action.failure_message());
            1
        }
    }
}

fn usage() {
    eprintln!("usage: activity-browser-ctl <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  list [--search TEXT] [--category Club|Team|Class|Other] [--sort name|time]");
    eprintln!("                              print activities as cards");
    eprintln!("  signup <activity> <email>   sign a student up");
    eprintln!("  unregister <activity> <email>");
    eprintln!("                              remove a student from an activity");
    eprintln!();
    eprintln!("server: {} or ~/.config/activity-browser/config.md", config::ENV_BASE_URL);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_filter_defaults() {
        assert_eq!(parse_filter(&[]), Some(Filter::default()));
    }

    #[test]
    fn parse_filter_all_flags() {
        let f = parse_filter(&args(&["--sort", "time", "--search", "chess", "--category", "Club"]))
            .unwrap();
        assert_eq!(f.search, "chess");
        assert_eq!(f.category, Some(Category::Club));
        assert_eq!(f.sort, SortKey::Time);
    }

    #[test]
    fn parse_filter_rejects_bad_input() {
        assert_eq!(parse_filter(&args(&["--category", "club"])), None);
        assert_eq!(parse_filter(&args(&["--search"])), None);
        assert_eq!(parse_filter(&args(&["--colour", "red"])), None);
    }
}
