//! Desktop dropdown menu (hover-driven, at most one active at a time).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{DropdownId, DropdownItem};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// One navbar dropdown: heading button plus a hover-expanded panel of
/// links. The active dropdown is shared state in [`AppContext`] so
/// hovering another menu collapses this one.
#[component]
pub fn Dropdown(id: DropdownId, items: Vec<DropdownItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_active = Memo::new(move |_| ctx.nav.active_dropdown.get() == Some(id));

    let chevron_class = move || {
        if is_active.get() {
            format!("{} {}", css::chevron, css::chevronOpen)
        } else {
            css::chevron.to_string()
        }
    };

    view! {
        <div
            class=css::dropdown
            on:mouseenter=move |_| ctx.nav.hover_dropdown(Some(id))
            on:mouseleave=move |_| ctx.nav.hover_dropdown(None)
        >
            <button class=css::dropdownButton aria-label=id.label()>
                <span>{id.label()}</span>
                <span class=chevron_class>
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </button>

            <Show when=move || is_active.get()>
                <div class=css::dropdownMenu>
                    {items
                        .clone()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    class=css::dropdownItem
                                    href=item.route.to_hash()
                                    aria-label=item.label
                                >
                                    <span class=css::dropdownSymbol>{item.symbol}</span>
                                    <span class=css::dropdownLabel>{item.label}</span>
                                    <span class=css::dropdownArrow>
                                        <Icon icon=ic::ARROW_RIGHT />
                                    </span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
