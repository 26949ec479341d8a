use crate::scroll::{ScrollPosition, ScrollSignal, ScrollSubscription};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

fn current_scroll_position() -> Option<ScrollPosition> {
    let y = window()?.scroll_y().ok()?;
    Some(ScrollPosition { y })
}

/// Feeds the window `scroll` event into a [`ScrollSignal`]. The DOM
/// listener stays attached exactly as long as this value lives.
struct WindowScroll {
    signal: Rc<ScrollSignal>,
    listener: Option<Closure<dyn Fn()>>,
}

impl WindowScroll {
    fn attach() -> Self {
        let signal = Rc::new(ScrollSignal::new());

        let Some(win) = window() else {
            return Self {
                signal,
                listener: None,
            };
        };

        let listener = {
            let signal = Rc::downgrade(&signal);
            Closure::<dyn Fn()>::new(move || {
                let Some(signal) = signal.upgrade() else {
                    return;
                };
                if let Some(position) = current_scroll_position() {
                    signal.publish(position);
                }
            })
        };

        if win
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .is_err()
        {
            return Self {
                signal,
                listener: None,
            };
        }

        if let Some(position) = current_scroll_position() {
            signal.publish(position);
        }

        Self {
            signal,
            listener: Some(listener),
        }
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        let (Some(win), Some(listener)) = (window(), self.listener.as_ref()) else {
            return;
        };
        let _ = win.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct ScrollContext(Rc<WindowScroll>);

impl PartialEq for ScrollContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ScrollContext {
    pub fn subscribe<F>(&self, listener: F) -> ScrollSubscription
    where
        F: Fn(ScrollPosition) + 'static,
    {
        self.0.signal.subscribe(listener)
    }

    pub fn latest(&self) -> Option<ScrollPosition> {
        self.0.signal.latest()
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Html,
}

/// Owns the page's only scroll listener and hands it to descendants.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let context = use_memo((), |_| ScrollContext(Rc::new(WindowScroll::attach())));

    html! {
        <ContextProvider<ScrollContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ScrollContext>>
    }
}
