use super::prefers_reduced_motion;
use super::scroll_signal::ScrollContext;
use crate::config::SiteConfig;
use crate::reveal::{intersects_viewport, Animation, Reveal, RevealAction};
use crate::scroll::ScrollSubscription;
use js_sys::Array;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::platform::time::sleep;
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Shared pieces a watcher needs to drive one reveal.
#[derive(Clone)]
struct RevealHandle {
    reveal: Rc<RefCell<Reveal>>,
    visible: UseStateHandle<bool>,
    mounted: Rc<Cell<bool>>,
}

impl RevealHandle {
    fn observe(&self, intersecting: bool) -> RevealAction {
        let action = self.reveal.borrow_mut().observe(intersecting);
        self.apply(action);
        action
    }

    fn apply(&self, action: RevealAction) {
        match action {
            RevealAction::Nothing => {}
            RevealAction::RevealNow => self.visible.set(true),
            RevealAction::RevealAfter(delay) => {
                let handle = self.clone();
                spawn_local(async move {
                    sleep(delay).await;
                    if handle.mounted.get() && handle.reveal.borrow_mut().complete() {
                        handle.visible.set(true);
                    }
                });
            }
        }
    }

    fn reveal_immediately(&self) {
        if self.reveal.borrow_mut().reveal_immediately() {
            self.visible.set(true);
        }
    }
}

/// Watches one element until it has been seen. Dropping the watcher
/// disconnects the observer and cancels any pending reveal.
struct RevealWatcher {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    _scroll: Option<ScrollSubscription>,
    mounted: Rc<Cell<bool>>,
}

impl RevealWatcher {
    fn idle(mounted: Rc<Cell<bool>>) -> Self {
        Self {
            observer: None,
            _callback: None,
            _scroll: None,
            mounted,
        }
    }

    fn start(
        element: Option<Element>,
        handle: RevealHandle,
        threshold: f64,
        scroll: Option<ScrollContext>,
    ) -> Self {
        let mounted = handle.mounted.clone();

        if prefers_reduced_motion() {
            handle.reveal_immediately();
            return Self::idle(mounted);
        }

        let Some(element) = element else {
            handle.reveal_immediately();
            return Self::idle(mounted);
        };

        let callback = {
            let handle = handle.clone();
            ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if handle.observe(entry.is_intersecting()) != RevealAction::Nothing {
                        observer.disconnect();
                        break;
                    }
                }
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                Self {
                    observer: Some(observer),
                    _callback: Some(callback),
                    _scroll: None,
                    mounted,
                }
            }
            Err(_) => Self::start_geometry_fallback(element, handle, scroll),
        }
    }

    /// Compares the element box with the viewport on every scroll tick.
    fn start_geometry_fallback(
        element: Element,
        handle: RevealHandle,
        scroll: Option<ScrollContext>,
    ) -> Self {
        let mounted = handle.mounted.clone();
        let check = {
            let handle = handle.clone();
            move || {
                let viewport_height = window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                let rect = element.get_bounding_client_rect();
                handle.observe(intersects_viewport(rect.top(), rect.bottom(), viewport_height));
            }
        };

        check();
        if handle.reveal.borrow().is_visible() {
            return Self::idle(mounted);
        }

        let Some(scroll) = scroll else {
            handle.reveal_immediately();
            return Self::idle(mounted);
        };

        Self {
            observer: None,
            _callback: None,
            _scroll: Some(scroll.subscribe(move |_| check())),
            mounted,
        }
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.mounted.set(false);
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollAnimationProps {
    pub animation: Animation,
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Html,
}

#[function_component(ScrollAnimation)]
pub fn scroll_animation(props: &ScrollAnimationProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let scroll = use_context::<ScrollContext>();
    let node = use_node_ref();
    let reveal = use_mut_ref(|| Reveal::new(props.animation, props.delay));
    let visible = use_state(|| false);

    {
        let handle = RevealHandle {
            reveal: reveal.clone(),
            visible: visible.clone(),
            mounted: Rc::new(Cell::new(true)),
        };
        let node = node.clone();
        let threshold = config.reveal_threshold;
        use_effect_with((), move |_| {
            let watcher = RevealWatcher::start(node.cast::<Element>(), handle, threshold, scroll);
            move || drop(watcher)
        });
    }

    let animation = reveal.borrow().animation();

    html! {
        <div
            ref={node}
            class={classes!("reveal", animation.class(), (*visible).then_some("is-revealed"), props.class.clone())}
        >
            {props.children.clone()}
        </div>
    }
}
