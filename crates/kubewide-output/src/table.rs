//! kubectl-style listings: no borders, whitespace-aligned columns and a
//! `*` marker on the active row.

use jiff::Timestamp;
use kubewide_core::{ClusterContext, NamespaceSummary};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::themes::Theme;
use tabled::settings::{Modify, Padding, Style};

use crate::age::format_age;

const COLUMN_GAP: usize = 3;

fn marked(name: &str, current: bool) -> String {
    format!("{} {name}", if current { '*' } else { ' ' })
}

/// Renders rows as aligned text. Trailing padding is stripped from every line.
pub fn render(headers: Option<&[&str]>, rows: &[Vec<String>]) -> String {
    if rows.is_empty() && headers.is_none() {
        return String::new();
    }

    let mut builder = Builder::default();
    if let Some(headers) = headers {
        builder.push_record(headers.iter().map(|h| h.to_string()));
    }
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    let mut theme = Theme::from_style(Style::empty());
    theme.remove_horizontal_lines();
    table.with(theme);
    table.with(Modify::new(Columns::new(..)).with(Padding::new(0, COLUMN_GAP, 0, 0)));

    table.to_string().lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

pub fn context_headers(wide: bool) -> Vec<&'static str> {
    if wide {
        vec!["  CONTEXT", "NAMESPACE"]
    } else {
        vec!["  CONTEXT"]
    }
}

pub fn context_rows(contexts: &[ClusterContext], current: Option<&str>, wide: bool) -> Vec<Vec<String>> {
    contexts
        .iter()
        .map(|ctx| {
            let name = marked(&ctx.name, current == Some(ctx.name.as_str()));
            if wide {
                vec![name, ctx.namespace.clone()]
            } else {
                vec![name]
            }
        })
        .collect()
}

pub fn render_contexts(contexts: &[ClusterContext], current: Option<&str>, wide: bool, no_headers: bool) -> String {
    let headers = context_headers(wide);
    let headers = (!no_headers).then_some(headers.as_slice());
    render(headers, &context_rows(contexts, current, wide))
}

pub const NAMESPACE_HEADERS: [&str; 3] = ["  NAME", "STATUS", "AGE"];

/// `current_namespace` comes from the current context; `None` marks nothing.
pub fn namespace_rows(
    namespaces: &[NamespaceSummary],
    current_namespace: Option<&str>,
    now: Timestamp,
) -> Vec<Vec<String>> {
    namespaces
        .iter()
        .map(|ns| {
            vec![
                marked(&ns.name, current_namespace == Some(ns.name.as_str())),
                ns.status.clone(),
                format_age(ns.age_at(now)),
            ]
        })
        .collect()
}

pub fn render_namespaces(
    namespaces: &[NamespaceSummary],
    current_namespace: Option<&str>,
    now: Timestamp,
    no_headers: bool,
) -> String {
    let headers = (!no_headers).then_some(&NAMESPACE_HEADERS[..]);
    render(headers, &namespace_rows(namespaces, current_namespace, now))
}
