use console_core::{
    AppViewModel, DomainListView, Field, ResultsView, SearchResult, StatsView, ToastKind,
    ToastView, DOMAINS_FAILED_TEXT, NO_DOMAINS_TEXT, NO_RESULTS_TEXT,
};

use super::constants::*;

/// Renders the view as terminal lines, top to bottom.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![String::new(), "== Search Console ==".to_string()];

    if let Some(toast) = &view.toast {
        lines.push(format_toast(toast));
    }

    if view.loading {
        lines.push("Searching...".to_string());
    }
    if let Some(results) = &view.results {
        lines.extend(format_results(results));
    }
    if view.no_results {
        lines.push(NO_RESULTS_TEXT.to_string());
    }

    if view.admin_open {
        lines.push("-- Admin --".to_string());
        lines.extend(format_stats(&view.stats));
        lines.push(format_domains(&view.domains));
        if !view.domain_input.is_empty() {
            lines.push(format!("Domain input: {}", view.domain_input));
        }
        if !view.crawl_input.is_empty() {
            lines.push("Crawl input:".to_string());
            lines.extend(view.crawl_input.lines().map(|line| format!("  {line}")));
        }
    }

    lines
}

pub fn prompt(view: &AppViewModel) -> &'static str {
    match view.focus {
        Some(Field::SearchInput) => PROMPT_SEARCH,
        Some(Field::DomainInput) => PROMPT_DOMAIN,
        Some(Field::CrawlInput) => PROMPT_CRAWL,
        None => PROMPT_IDLE,
    }
}

fn format_toast(toast: &ToastView) -> String {
    let tag = match toast.kind {
        ToastKind::Info => "[info]",
        ToastKind::Success => "[ok]",
        ToastKind::Error => "[error]",
    };
    format!("{tag} {}", toast.message)
}

fn format_results(results: &ResultsView) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", results.title, results.count_label)];
    for (index, item) in results.items.iter().enumerate() {
        lines.extend(format_result(index + 1, item));
    }
    lines
}

fn format_result(number: usize, result: &SearchResult) -> Vec<String> {
    let meta = match &result.last_updated {
        Some(updated) => format!("{} | {}", result.domain, updated),
        None => result.domain.clone(),
    };
    vec![
        format!("{number:>2}. {}", result.title),
        format!("    {}", result.url),
        format!("    {}", result.description),
        format!("    {meta}"),
    ]
}

fn format_stats(stats: &StatsView) -> Vec<String> {
    let mut lines = vec![format!(
        "Pages: {}  Domains: {}",
        stats.total_pages, stats.total_domains
    )];
    lines.extend(
        stats
            .pages_per_domain
            .iter()
            .map(|(domain, count)| format!("  {domain}: {count}")),
    );
    lines
}

fn format_domains(domains: &DomainListView) -> String {
    match domains {
        DomainListView::NotLoaded => "Domains: loading...".to_string(),
        DomainListView::Empty => NO_DOMAINS_TEXT.to_string(),
        DomainListView::Failed => DOMAINS_FAILED_TEXT.to_string(),
        DomainListView::Tags(tags) => format!("Domains: {}", tags.join(", ")),
    }
}
