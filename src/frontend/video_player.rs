use crate::catalog::VideoEntry;
use crate::playback::{MediaCommand, PlaybackState};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlVideoElement, MouseEvent};
use yew::prelude::*;

pub enum PlaybackAction {
    TogglePlayback,
    ToggleMute,
    Hover(bool),
    MediaPlaying(bool),
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;

        match action {
            PlaybackAction::TogglePlayback => {
                next.toggle_playback();
            }
            PlaybackAction::ToggleMute => {
                next.toggle_mute();
            }
            PlaybackAction::Hover(hovered) => next.set_hovered(hovered),
            PlaybackAction::MediaPlaying(playing) => {
                if !next.sync_from_media(playing) {
                    return self;
                }
            }
        }

        Rc::new(next)
    }
}

/// Mirrors `state` onto the element. A refused `play()` (autoplay policy,
/// broken source) fires no `pause` event, so the rejection is fed back as
/// a stopped media report.
fn apply_to_media(
    video: &HtmlVideoElement,
    state: &PlaybackState,
    dispatcher: UseReducerDispatcher<PlaybackState>,
) {
    video.set_muted(state.is_muted);

    match state.media_command() {
        MediaCommand::Play if video.paused() => match video.play() {
            Ok(promise) => spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    dispatcher.dispatch(PlaybackAction::MediaPlaying(false));
                }
            }),
            Err(_) => dispatcher.dispatch(PlaybackAction::MediaPlaying(false)),
        },
        MediaCommand::Pause if !video.paused() => {
            let _ = video.pause();
        }
        _ => {}
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub entry: VideoEntry,
    #[prop_or_default]
    pub showreel: bool,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let playback = use_reducer(|| PlaybackState::for_player(props.showreel));
    let video_ref = use_node_ref();
    let container_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        let dispatcher = playback.dispatcher();
        let state = *playback;
        use_effect_with((state.is_playing, state.is_muted), move |_| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                apply_to_media(&video, &state, dispatcher);
            }
            || ()
        });
    }

    let on_toggle_playback = {
        let dispatcher = playback.dispatcher();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if video_ref.cast::<HtmlVideoElement>().is_some() {
                dispatcher.dispatch(PlaybackAction::TogglePlayback);
            }
        })
    };

    let on_toggle_mute = {
        let dispatcher = playback.dispatcher();
        let video_ref = video_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if video_ref.cast::<HtmlVideoElement>().is_some() {
                dispatcher.dispatch(PlaybackAction::ToggleMute);
            }
        })
    };

    let on_fullscreen = {
        let container_ref = container_ref.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            if let Some(container) = container_ref.cast::<Element>() {
                let _ = container.request_fullscreen();
            }
        })
    };

    let onmouseenter = {
        let dispatcher = playback.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::Hover(true)))
    };
    let onmouseleave = {
        let dispatcher = playback.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PlaybackAction::Hover(false)))
    };
    let onplay = {
        let dispatcher = playback.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(PlaybackAction::MediaPlaying(true)))
    };
    let onpause = {
        let dispatcher = playback.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(PlaybackAction::MediaPlaying(false)))
    };

    let entry = &props.entry;
    let state = *playback;
    let play_label = if state.is_playing { "Pause" } else { "Play" };
    let mute_label = if state.is_muted { "Unmute" } else { "Mute" };

    html! {
        <div
            ref={container_ref}
            class={classes!("video-player", entry.aspect_ratio.css_class())}
            data-video-id={entry.id.clone()}
            data-aspect-ratio={entry.aspect_ratio.as_str()}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <video
                ref={video_ref}
                class="video-media"
                poster={entry.poster.clone()}
                muted={state.is_muted}
                loop={true}
                playsinline={true}
                preload="metadata"
                onplay={onplay}
                onpause={onpause}
            >
                <source src={entry.src.clone()} type="video/mp4" />
            </video>

            <div
                class={classes!("video-overlay", state.show_overlay.then_some("is-visible"))}
                onclick={on_toggle_playback}
            >
                <button class="glass-button" type="button" aria-label={format!("{play_label} {}", entry.title)}>
                    <span aria-hidden="true">{if state.is_playing { "❚❚" } else { "▶" }}</span>
                </button>
            </div>

            <div class={classes!("video-controls", state.show_controls.then_some("is-visible"))}>
                <h3 class="video-title">{entry.title.clone()}</h3>
                <div class="video-actions">
                    <button
                        class="control-button"
                        type="button"
                        aria-label={mute_label}
                        aria-pressed={state.is_muted.to_string()}
                        onclick={on_toggle_mute}
                    >
                        <span aria-hidden="true">{if state.is_muted { "🔇" } else { "🔊" }}</span>
                    </button>
                    <button
                        class="control-button"
                        type="button"
                        aria-label="Fullscreen"
                        onclick={on_fullscreen}
                    >
                        <span aria-hidden="true">{"⛶"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
