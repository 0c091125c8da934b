//! HTML rendering of the view model.
//!
//! Every piece of text that originates outside this module goes through
//! [`escape_html`] before it is placed in markup.

use std::fmt::Write;

use crate::view_model::{
    AppViewModel, DomainListView, ResultsView, StatsView, ToastView, DOMAINS_FAILED_TEXT,
    NO_DOMAINS_TEXT, NO_RESULTS_TEXT,
};
use crate::SearchResult;

/// Escapes text for use in element content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_page(view: &AppViewModel) -> String {
    let mut html = String::new();
    html.push_str("<main class=\"search-console\">\n");
    let _ = writeln!(
        html,
        "<input id=\"searchInput\" type=\"search\" value=\"{}\">",
        escape_html(&view.search_input)
    );
    html.push_str(&render_loading(view.loading));
    html.push_str(&render_results(view.results.as_ref()));
    html.push_str(&render_no_results(view.no_results));
    html.push_str(&render_admin(view));
    if let Some(toast) = &view.toast {
        html.push_str(&render_toast(toast));
    }
    html.push_str("</main>\n");
    html
}

fn render_loading(loading: bool) -> String {
    format!(
        "<div id=\"loadingIndicator\" class=\"{}\">Searching...</div>\n",
        hidden_unless(loading)
    )
}

fn render_no_results(visible: bool) -> String {
    format!(
        "<div id=\"noResults\" class=\"{}\">{}</div>\n",
        hidden_unless(visible),
        NO_RESULTS_TEXT
    )
}

pub fn render_results(results: Option<&ResultsView>) -> String {
    let Some(results) = results else {
        return "<section id=\"searchResults\" class=\"hidden\"></section>\n".to_string();
    };

    let mut html = String::from("<section id=\"searchResults\">\n");
    let _ = writeln!(
        html,
        "<h2 id=\"resultsTitle\">{}</h2>\n<span id=\"resultsCount\">{}</span>",
        escape_html(&results.title),
        escape_html(&results.count_label)
    );
    html.push_str("<div id=\"resultsList\">\n");
    for (index, item) in results.items.iter().enumerate() {
        html.push_str(&render_result(index, item));
    }
    html.push_str("</div>\n</section>\n");
    html
}

/// Renders one hit. `data-index` lets the platform map clicks back to `Msg::ResultClicked`.
pub fn render_result(index: usize, result: &SearchResult) -> String {
    let url = escape_html(&result.url);
    let mut html = format!("<div class=\"result-item\" data-index=\"{index}\">\n");
    let _ = writeln!(
        html,
        "<a href=\"{url}\" target=\"_blank\" class=\"result-title\">{}</a>",
        escape_html(&result.title)
    );
    let _ = writeln!(html, "<div class=\"result-url\">{url}</div>");
    let _ = writeln!(
        html,
        "<div class=\"result-description\">{}</div>",
        escape_html(&result.description)
    );
    html.push_str("<div class=\"result-meta\">");
    let _ = write!(
        html,
        "<span><i class=\"fas fa-globe\"></i> {}</span>",
        escape_html(&result.domain)
    );
    if let Some(updated) = &result.last_updated {
        let _ = write!(
            html,
            "<span><i class=\"fas fa-clock\"></i> {}</span>",
            escape_html(updated)
        );
    }
    html.push_str("</div>\n</div>\n");
    html
}

fn render_admin(view: &AppViewModel) -> String {
    let mut html = format!(
        "<div id=\"adminModal\" class=\"modal {}\">\n<div class=\"modal-content\">\n",
        hidden_unless(view.admin_open)
    );
    html.push_str(&render_stats(&view.stats));
    let _ = writeln!(
        html,
        "<input id=\"domainInput\" value=\"{}\">",
        escape_html(&view.domain_input)
    );
    html.push_str(&render_domains(&view.domains));
    let _ = writeln!(
        html,
        "<textarea id=\"urlsInput\">{}</textarea>",
        escape_html(&view.crawl_input)
    );
    html.push_str("</div>\n</div>\n");
    html
}

pub fn render_domains(domains: &DomainListView) -> String {
    let inner = match domains {
        DomainListView::NotLoaded => String::new(),
        DomainListView::Empty => format!("<p class=\"text-muted\">{NO_DOMAINS_TEXT}</p>"),
        DomainListView::Failed => format!("<p class=\"error\">{DOMAINS_FAILED_TEXT}</p>"),
        DomainListView::Tags(tags) => tags
            .iter()
            .map(|domain| format!("<span class=\"domain-tag\">{}</span>", escape_html(domain)))
            .collect(),
    };
    format!("<div id=\"domainsList\">{inner}</div>\n")
}

fn render_stats(stats: &StatsView) -> String {
    let mut html = format!(
        "<div class=\"stats\"><span id=\"totalPages\">{}</span> <span id=\"totalDomains\">{}</span>",
        escape_html(&stats.total_pages),
        escape_html(&stats.total_domains)
    );
    if !stats.pages_per_domain.is_empty() {
        html.push_str("<ul class=\"pages-per-domain\">");
        for (domain, count) in &stats.pages_per_domain {
            let _ = write!(html, "<li>{}: {count}</li>", escape_html(domain));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>\n");
    html
}

pub fn render_toast(toast: &ToastView) -> String {
    format!(
        "<div id=\"toast\" class=\"toast {} show\"><i class=\"toast-icon {}\"></i><span class=\"toast-message\">{}</span></div>\n",
        toast.kind.css_class(),
        toast.icon_class,
        escape_html(&toast.message)
    )
}

fn hidden_unless(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_domain_list_shows_placeholder() {
        let html = render_domains(&DomainListView::Empty);
        assert!(html.contains(NO_DOMAINS_TEXT));
        assert!(!html.contains("domain-tag"));
    }

    #[test]
    fn failed_domain_list_shows_inline_error() {
        let html = render_domains(&DomainListView::Failed);
        assert!(html.contains("class=\"error\""));
        assert!(html.contains(DOMAINS_FAILED_TEXT));
    }
}
