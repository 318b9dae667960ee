use leptos::prelude::*;

use crate::sections::{Section, SECTIONS};

use super::scroll;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 w-full bg-black/70 backdrop-blur-sm z-50 border-b border-cyan-400/20">
            <nav class="flex justify-center gap-10 py-4 text-sm uppercase tracking-widest">
                {SECTIONS
                    .into_iter()
                    .map(|section| view! { <NavLink section /> })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn NavLink(section: Section) -> impl IntoView {
    view! {
        <a
            href=section.href()
            on:click=scroll::handle_anchor_click
            class="relative text-gray-400 hover:text-cyan-300 transition-all duration-300 after:content-[''] after:absolute after:w-0 after:h-[2px] after:bg-cyan-400 after:left-0 after:-bottom-1 hover:after:w-full after:transition-all"
        >
            {section.label}
        </a>
    }
}
