//! Leptos application: catalog feed with live category filtering.

use leptos::*;

use storefront_catalog::{Catalog, CatalogItem};

use crate::api::{self, ActionDetail};

/// Main application component.
///
/// The catalog is fetched once and cached in the resource; filtering derives
/// a fresh view from that cache on every keystroke and never mutates or
/// re-fetches it.
#[component]
pub fn App() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());

    let catalog = create_local_resource(|| (), |_| async move { api::fetch_items().await });

    view! {
        <div class="app">
            <header>
                <h1>"Storefront"</h1>
                <input
                    type="search"
                    id="search-bar"
                    placeholder="Filter by category..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </header>

            <main id="item-feed">
                {move || match catalog.get() {
                    None => view! { <p>"Loading..."</p> }.into_view(),
                    Some(Err(_)) => {
                        view! { <p class="error">"Error loading item data."</p> }.into_view()
                    }
                    Some(Ok(full)) => {
                        let filtered = full.filter_by_category(&query.get());
                        view! { <ItemFeed catalog=filtered/> }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

/// All groups of one (possibly filtered) catalog.
#[component]
fn ItemFeed(catalog: Catalog) -> impl IntoView {
    catalog
        .groups()
        .map(|(category, items)| {
            let category = category.to_string();
            let cards = items
                .iter()
                .cloned()
                .map(|item| {
                    view! { <ItemCard category=category.clone() item/> }
                })
                .collect_view();
            view! {
                <div class="category-block">
                    <h2 class="category-title">{category.clone()}</h2>
                    <div class="items-grid">{cards}</div>
                </div>
            }
        })
        .collect_view()
}

/// One item with its three action buttons.
#[component]
fn ItemCard(category: String, item: CatalogItem) -> impl IntoView {
    let detail = ActionDetail {
        category,
        order_number: item.order_number.clone(),
        product: item.product.clone(),
        brand: item.brand.clone(),
    };

    let log = move |action: &'static str| {
        let detail = detail.clone();
        spawn_local(async move {
            match api::log_action(action, &detail).await {
                Ok(()) => logging::log!("Logged: {} - {}", action, detail.order_number),
                Err(e) => logging::error!("Failed to log action: {}", e),
            }
        });
    };
    let log_cancel = log.clone();
    let log_reorder = log.clone();
    let log_seen = log;

    view! {
        <div class="item">
            <p><strong>"Order #: "</strong>{item.order_number.clone()}</p>
            <p><strong>"Product: "</strong>{item.product.clone()}</p>
            <p><strong>"Brand: "</strong>{item.brand.clone()}</p>
            <div class="item-actions">
                <button class="cancel" on:click=move |_| log_cancel("Cancel")>"Cancel"</button>
                <button class="reorder" on:click=move |_| log_reorder("Reorder")>"Reorder"</button>
                <button class="seen" on:click=move |_| log_seen("Seen")>"Seen"</button>
            </div>
        </div>
    }
}
