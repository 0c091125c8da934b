use console_core::markup::render_page;
use console_core::{update, AppState, Effect, Msg, ToastKind, TOAST_DURATION};

fn submit_crawl(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::CrawlInputChanged(input.to_string()));
    update(state, Msg::CrawlSubmitted)
}

fn scheduled_toast(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleToastExpiry { toast_id, after } => {
                assert_eq!(*after, TOAST_DURATION);
                Some(*toast_id)
            }
            _ => None,
        })
        .expect("toast expiry scheduled")
}

#[test]
fn second_toast_replaces_first() {
    let (state, first) = submit_crawl(AppState::new(), "");
    let (state, second) = submit_crawl(state, "http://a.com");
    assert_ne!(scheduled_toast(&first), scheduled_toast(&second));

    let toast = state.view().toast.expect("toast");
    assert_eq!(toast.message, "Starting crawl process...");
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.icon_class, "fas fa-info-circle");

    let html = render_page(&state.view());
    assert!(html.contains("Starting crawl process..."));
    assert!(!html.contains("Please enter at least one URL"));
}

#[test]
fn expiry_of_replaced_toast_leaves_current_visible() {
    let (state, first) = submit_crawl(AppState::new(), "");
    let (state, second) = submit_crawl(state, "http://a.com");

    let (state, _) = update(
        state,
        Msg::ToastExpired {
            toast_id: scheduled_toast(&first),
        },
    );
    assert!(state.view().toast.is_some());

    let (state, _) = update(
        state,
        Msg::ToastExpired {
            toast_id: scheduled_toast(&second),
        },
    );
    assert_eq!(state.view().toast, None);
    assert!(!render_page(&state.view()).contains("id=\"toast\""));
}
