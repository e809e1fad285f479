//! Dashboard statistic tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    value: u32,
    #[prop(optional, into)] tone: Option<String>,
) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("stat-card stat-card--{tone}"),
        None => "stat-card".to_owned(),
    };
    view! {
        <div class=class>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
