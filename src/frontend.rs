mod contact_page;
mod floating_icons;
mod loading_screen;
mod navbar;
mod scroll_animation;
mod scroll_signal;
mod video_player;

use crate::catalog::{Catalog, VideoEntry, HERO_BACKDROP_URL};
use crate::config::SiteConfig;
use crate::logging::{log_event, LogLevel};
use crate::navigation::Section;
use crate::reveal::Animation;
use crate::view::{ViewEvent, ViewState};
use contact_page::ContactPage;
use floating_icons::FloatingIcons;
use gloo_net::http::Request;
use loading_screen::LoadingScreen;
use navbar::{scroll_to_section, FloatingNavbar};
use scroll_animation::ScrollAnimation;
use scroll_signal::ScrollProvider;
use std::rc::Rc;
use video_player::VideoPlayer;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

const CATALOG_ENDPOINT: &str = "/api/catalog";
const OWNER_NAME: &str = "Aamir Naqvi";

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Asks the companion server for its catalog. Anything but a well-formed
/// catalog with unique ids yields `None`, so `trunk serve` keeps working
/// with the built-in data.
async fn fetch_catalog() -> Option<Catalog> {
    let response = Request::get(CATALOG_ENDPOINT).send().await.ok()?;

    if !response.ok() {
        return None;
    }

    let catalog = response.json::<Catalog>().await.ok()?;
    catalog.duplicate_id().is_none().then_some(catalog)
}

impl Reducible for ViewState {
    type Action = ViewEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct GridBackdropProps {
    pattern_id: AttrValue,
    #[prop_or(AttrValue::from("rgba(59, 130, 246, 0.15)"))]
    stroke: AttrValue,
}

#[function_component(GridBackdrop)]
fn grid_backdrop(props: &GridBackdropProps) -> Html {
    html! {
        <svg class="grid-backdrop" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            <defs>
                <pattern id={props.pattern_id.clone()} width="20" height="20" patternUnits="userSpaceOnUse">
                    <path d="M 20 0 L 0 0 0 20" fill="none" stroke={props.stroke.clone()} stroke-width="0.3" />
                </pattern>
            </defs>
            <rect width="100%" height="100%" fill={format!("url(#{})", props.pattern_id)} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct GallerySectionProps {
    #[prop_or_default]
    section_id: Option<AttrValue>,
    pattern_id: AttrValue,
    title: AttrValue,
    subtitle: AttrValue,
    entries: Vec<VideoEntry>,
    grid_class: AttrValue,
    stagger_ms: u32,
    #[prop_or_default]
    accent: Classes,
}

#[function_component(GallerySection)]
fn gallery_section(props: &GallerySectionProps) -> Html {
    let stagger_ms = props.stagger_ms;

    html! {
        <section id={props.section_id.clone()} class={classes!("section", "gallery", props.accent.clone())}>
            <GridBackdrop pattern_id={props.pattern_id.clone()} />
            <div class="section-inner">
                <ScrollAnimation animation={Animation::FadeUp} delay={25}>
                    <div class="glass-panel">
                        <ScrollAnimation animation={Animation::FadeUp} delay={50}>
                            <header class="section-heading">
                                <h2>{props.title.clone()}</h2>
                                <p class="muted">{props.subtitle.clone()}</p>
                            </header>
                        </ScrollAnimation>
                        <ScrollAnimation animation={Animation::FadeUp} delay={75}>
                            <div class={classes!("video-grid", props.grid_class.to_string())}>
                                {
                                    for props.entries.iter().enumerate().map(|(index, entry)| html! {
                                        <ScrollAnimation
                                            key={entry.render_key()}
                                            animation={Animation::ScaleIn}
                                            delay={stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))}
                                        >
                                            <VideoPlayer entry={entry.clone()} />
                                        </ScrollAnimation>
                                    })
                                }
                            </div>
                        </ScrollAnimation>
                    </div>
                </ScrollAnimation>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioPageProps {
    catalog: Catalog,
    on_show_contact: Callback<()>,
}

#[function_component(PortfolioPage)]
fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let on_view_work = Callback::from(|_: MouseEvent| {
        scroll_to_section(Section::Videos);
    });
    let on_contact = props.on_show_contact.reform(|_: MouseEvent| ());

    html! {
        <div class="portfolio">
            <FloatingNavbar />

            <section id={Section::Home.id()} class="hero">
                <div class="hero-backdrop" aria-hidden="true">
                    <div
                        class="hero-backdrop-image"
                        style={format!("background-image: url('{HERO_BACKDROP_URL}');")}
                    ></div>
                    <div class="hero-backdrop-overlay"></div>
                </div>
                <GridBackdrop pattern_id="heroGrid" />
                <FloatingIcons />
                <div class="glow-orb orb-right" aria-hidden="true"></div>
                <div class="glow-orb orb-left" aria-hidden="true"></div>

                <div class="hero-content">
                    <ScrollAnimation animation={Animation::FadeUp} delay={50}>
                        <div class="hero-copy">
                            <h1 class="gradient-text">{OWNER_NAME}</h1>
                            <p class="hero-tagline">{"Crafting compelling visual stories through the art of editing"}</p>
                            <div class="hero-actions">
                                <button class="btn btn-primary" type="button" onclick={on_view_work}>{"View Work"}</button>
                                <button class="btn btn-secondary" type="button" onclick={on_contact.clone()}>{"Contact Me"}</button>
                            </div>
                        </div>
                    </ScrollAnimation>

                    <ScrollAnimation animation={Animation::ScaleIn} delay={100}>
                        <div class="glass-panel showreel-panel">
                            <h2>{props.catalog.showreel.title.clone()}</h2>
                            <VideoPlayer
                                key={props.catalog.showreel.render_key()}
                                entry={props.catalog.showreel.clone()}
                                showreel={true}
                            />
                        </div>
                    </ScrollAnimation>
                </div>
            </section>

            <GallerySection
                section_id={Some(AttrValue::from(Section::Videos.id()))}
                pattern_id="portfolioGrid"
                title="Cinematic Projects"
                subtitle="Wide-format content including commercials, music videos, and documentaries"
                entries={props.catalog.landscape.clone()}
                grid_class="grid-landscape"
                stagger_ms={25}
            />

            <GallerySection
                pattern_id="mobileGrid"
                title="Social Media Content"
                subtitle="Vertical content optimized for mobile platforms and social media"
                entries={props.catalog.portrait.clone()}
                grid_class="grid-portrait"
                stagger_ms={12}
                accent={classes!("accent-violet")}
            />

            <section id={Section::Contact.id()} class="section contact-cta">
                <GridBackdrop pattern_id="contactGrid" />
                <div class="section-inner narrow">
                    <ScrollAnimation animation={Animation::ScaleIn} delay={25}>
                        <div class="glass-panel">
                            <ScrollAnimation animation={Animation::FadeUp} delay={50}>
                                <h2>{"Let's Create Something Amazing"}</h2>
                            </ScrollAnimation>
                            <ScrollAnimation animation={Animation::FadeUp} delay={75}>
                                <p class="muted">{"Ready to bring your vision to life? Get in touch to discuss your next project."}</p>
                            </ScrollAnimation>
                            <ScrollAnimation animation={Animation::ScaleIn} delay={100}>
                                <button class="btn btn-cta" type="button" onclick={on_contact}>{"Start a Project"}</button>
                            </ScrollAnimation>
                        </div>
                    </ScrollAnimation>
                </div>
            </section>

            <footer class="site-footer">
                <ScrollAnimation animation={Animation::FadeIn} delay={25}>
                    <p class="muted">{format!("© 2025 {OWNER_NAME} Portfolio. All rights reserved.")}</p>
                </ScrollAnimation>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let log_level = props.config.log_level;
    let view = use_reducer(|| ViewState::Loading);
    let catalog = use_state(Catalog::builtin);

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_catalog().await {
                    Some(remote) => {
                        log_event(
                            log_level,
                            LogLevel::Info,
                            "catalog_source",
                            serde_json::json!({
                                "source": "server",
                                "entries": remote.entries().count(),
                            }),
                        );
                        catalog.set(remote);
                    }
                    None => log_event(
                        log_level,
                        LogLevel::Debug,
                        "catalog_source",
                        serde_json::json!({ "source": "builtin" }),
                    ),
                }
            });
            || ()
        });
    }

    {
        let current = *view;
        use_effect_with(current, move |current| {
            log_event(
                log_level,
                LogLevel::Info,
                "view_active",
                serde_json::json!({ "view": current.as_str() }),
            );
            if *current == ViewState::Contact {
                scroll_to_top();
            }
            || ()
        });
    }

    let dispatcher = view.dispatcher();
    let on_load_complete = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewEvent::LoadComplete))
    };
    let on_show_contact = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewEvent::ShowContact))
    };
    let on_back = Callback::from(move |_: ()| dispatcher.dispatch(ViewEvent::Back));

    let content = match *view {
        ViewState::Loading => html! { <LoadingScreen on_load_complete={on_load_complete} /> },
        ViewState::Contact => html! { <ContactPage on_back={on_back} /> },
        ViewState::Portfolio => html! {
            <ScrollProvider>
                <PortfolioPage catalog={(*catalog).clone()} on_show_contact={on_show_contact} />
            </ScrollProvider>
        },
    };

    html! {
        <ContextProvider<SiteConfig> context={props.config.clone()}>
            {content}
        </ContextProvider<SiteConfig>>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = SiteConfig::from_lookup(|key| root.get_attribute(&format!("data-{key}")));

    log_event(
        config.log_level,
        LogLevel::Debug,
        "site_config",
        serde_json::json!({
            "nav_probe_offset": config.nav_probe_offset,
            "loading_duration_ms": config.loading_duration.as_millis(),
            "reveal_threshold": config.reveal_threshold,
            "contact_email_configured": config.contact_email.is_some(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
