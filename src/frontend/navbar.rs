use super::scroll_signal::ScrollContext;
use crate::config::SiteConfig;
use crate::contact::INSTAGRAM_URL;
use crate::logging::{log_event, LogLevel};
use crate::navigation::{NavigationState, Section, SectionBounds};
use crate::scroll::ScrollPosition;
use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

fn measure_sections() -> Vec<(Section, SectionBounds)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((
                section,
                SectionBounds {
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                },
            ))
        })
        .collect()
}

/// Smooth-scrolls to a section. Returns `false` when the section is not on
/// the page.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options.set_inline(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Home => "⌂",
        Section::Videos => "▶",
        Section::Contact => "✉",
    }
}

#[derive(Properties, PartialEq)]
struct NavButtonProps {
    section: Section,
    active: bool,
    on_navigate: Callback<Section>,
}

#[function_component(NavButton)]
fn nav_button(props: &NavButtonProps) -> Html {
    let onclick = {
        let section = props.section;
        props.on_navigate.reform(move |_: MouseEvent| section)
    };

    html! {
        <button
            class={classes!("nav-item", props.active.then_some("is-active"))}
            type="button"
            aria-current={props.active.then_some("true")}
            onclick={onclick}
        >
            <span class="nav-icon" aria-hidden="true">{section_icon(props.section)}</span>
            <span class="nav-label">{props.section.label()}</span>
        </button>
    }
}

#[function_component(FloatingNavbar)]
pub fn floating_navbar() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scroll = use_context::<ScrollContext>();
    let navigation = use_mut_ref(NavigationState::default);
    let active = use_state(|| Section::Home);

    {
        let navigation = navigation.clone();
        let active = active.clone();
        let probe_offset = config.nav_probe_offset;
        use_effect_with(scroll, move |scroll| {
            let subscription = scroll.as_ref().map(|scroll| {
                let update = move |position: ScrollPosition| {
                    let changed = {
                        let mut state = navigation.borrow_mut();
                        state
                            .on_scroll(position.y, probe_offset, measure_sections())
                            .then(|| state.active())
                    };
                    if let Some(section) = changed {
                        active.set(section);
                    }
                };
                if let Some(position) = scroll.latest() {
                    update(position);
                }
                scroll.subscribe(update)
            });

            move || drop(subscription)
        });
    }

    let on_navigate = {
        let navigation = navigation.clone();
        let active = active.clone();
        let log_level = config.log_level;
        Callback::from(move |section: Section| {
            if !scroll_to_section(section) {
                return;
            }

            navigation.borrow_mut().navigate_to(section);
            active.set(section);
            log_event(
                log_level,
                LogLevel::Debug,
                "navigate",
                serde_json::json!({ "section": section.id() }),
            );
        })
    };

    let nav_item = |section: Section| {
        html! {
            <NavButton
                section={section}
                active={*active == section}
                on_navigate={on_navigate.clone()}
            />
        }
    };

    html! {
        <nav class="floating-nav" aria-label="Primary">
            <div class="floating-nav-inner">
                {nav_item(Section::Home)}
                {nav_item(Section::Videos)}
                <a
                    class="nav-item"
                    href={INSTAGRAM_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span class="nav-icon" aria-hidden="true">{"◎"}</span>
                    <span class="nav-label">{"Instagram"}</span>
                    <span class="sr-only">{" (opens in a new tab)"}</span>
                </a>
                {nav_item(Section::Contact)}
            </div>
        </nav>
    }
}
