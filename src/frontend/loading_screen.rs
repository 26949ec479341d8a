use crate::config::SiteConfig;
use crate::loading::{LoadingProgress, COMPLETION_HOLD, LOADING_TICK};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_load_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let progress = use_mut_ref(|| LoadingProgress::new(config.loading_duration));
    let percent = use_state(|| 0u8);

    {
        let progress = progress.clone();
        let percent = percent.clone();
        let on_load_complete = props.on_load_complete.clone();
        use_effect_with((), move |_| {
            let mounted = Rc::new(Cell::new(true));

            {
                let mounted = mounted.clone();
                spawn_local(async move {
                    loop {
                        if !mounted.get() {
                            return;
                        }
                        if progress.borrow().is_full() {
                            break;
                        }

                        sleep(LOADING_TICK).await;
                        let value = progress.borrow_mut().advance(LOADING_TICK);
                        if mounted.get() {
                            percent.set(value);
                        }
                    }

                    sleep(COMPLETION_HOLD).await;
                    let completed = progress.borrow_mut().take_completion();
                    if mounted.get() && completed {
                        on_load_complete.emit(());
                    }
                });
            }

            move || mounted.set(false)
        });
    }

    let stage = progress.borrow().stage_label();

    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-brand">
                <span class="loading-mark" aria-hidden="true">{"▶"}</span>
                <h1 class="gradient-text">{"Aamir Naqvi"}</h1>
                <p class="muted">{"Video Editor"}</p>
            </div>
            <div
                class="loading-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={percent.to_string()}
            >
                <div class="loading-bar-fill" style={format!("width: {}%;", *percent)}></div>
            </div>
            <p class="loading-stage muted">{format!("{stage} · {}%", *percent)}</p>
        </div>
    }
}
