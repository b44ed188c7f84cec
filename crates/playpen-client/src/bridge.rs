//! Browser glue: event listeners, timers, URL and history.

#[cfg(target_family = "wasm")]
use std::cell::RefCell;
#[cfg(target_family = "wasm")]
use std::rc::Rc;

#[cfg(target_family = "wasm")]
use playpen_core::tasks::TaskCommand;

#[cfg(target_family = "wasm")]
use crate::app::{App, Redraw};
#[cfg(target_family = "wasm")]
use crate::{diag, render};

/// Delay argument for `setTimeout`, saturating at the largest value it accepts.
pub fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Value of `param` in a `?key=value` query string.
#[cfg(target_family = "wasm")]
pub fn url_game(param: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(param)
}

/// Run `event` against the app, redraw, then carry out the timer
/// commands it produced.
#[cfg(target_family = "wasm")]
pub fn dispatch(app: &Rc<RefCell<App>>, event: impl FnOnce(&mut App) -> Redraw) {
    let commands = {
        let mut state = app.borrow_mut();
        let redraw = event(&mut state);
        render::draw(state.session.context(), redraw);
        state.session.drain_task_commands()
    };
    run_task_commands(app, commands);
}

#[cfg(target_family = "wasm")]
fn run_task_commands(app: &Rc<RefCell<App>>, commands: Vec<TaskCommand>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    for command in commands {
        match command {
            TaskCommand::Start { id, delay_ms } => {
                let target = Rc::clone(app);
                let callback = Closure::once_into_js(move || {
                    dispatch(&target, |state| state.timer_fired(id));
                });
                match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref::<js_sys::Function>(),
                    timeout_ms(delay_ms),
                ) {
                    Ok(handle) => {
                        app.borrow_mut().timeouts.insert(id, handle);
                    },
                    Err(e) => diag::console_warn!("setTimeout failed: {e:?}"),
                }
            },
            TaskCommand::Cancel { id } => {
                let handle = app.borrow_mut().timeouts.remove(&id);
                if let Some(handle) = handle {
                    window.clear_timeout_with_handle(handle);
                }
            },
        }
    }
}

/// Keep the back button on the page: push a history entry now and push
/// another whenever one is popped.
#[cfg(target_family = "wasm")]
pub fn guard_history() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    fn push_current() {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
            && let Ok(href) = window.location().href()
        {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href));
        }
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    push_current();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_evt: web_sys::Event| {
        push_current();
    });
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Nearest ancestor of the event target (inclusive) matching `selector`.
#[cfg(target_family = "wasm")]
fn closest(evt: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let target = evt.target()?.dyn_into::<web_sys::Element>().ok()?;
    target.closest(selector).ok().flatten()
}

/// Attach click, hover and touch listeners to the page.
#[cfg(target_family = "wasm")]
pub fn attach_listeners(app: &Rc<RefCell<App>>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(container) = document.get_element_by_id(render::CONTAINER_ID) {
        // Delegated clicks on choice buttons and board tiles
        {
            let app = Rc::clone(app);
            let closure =
                Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
                    if let Some(button) = closest(&evt, ".option")
                        && let Some(value) = button.get_attribute("data-answer")
                    {
                        dispatch(&app, |state| state.choose(&value));
                    } else if let Some(tile) = closest(&evt, ".match-item")
                        && let Some(column) = tile.get_attribute("data-column")
                        && let Some(index) = tile.get_attribute("data-index")
                    {
                        dispatch(&app, |state| state.pick_tile(&column, &index));
                    }
                });
            let _ = container
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // mouseover: name tooltip
        {
            let app = Rc::clone(app);
            let closure =
                Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
                    if let Some(named) = closest(&evt, "[data-name]")
                        && let Some(name) = named.get_attribute("data-name")
                    {
                        let (x, y) = (f64::from(evt.client_x()), f64::from(evt.client_y()));
                        dispatch(&app, |state| state.hover(&name, x, y));
                    }
                });
            let _ = container
                .add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // touchstart: same tooltip, passive so scrolling stays smooth
        {
            let app = Rc::clone(app);
            let closure =
                Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |evt: web_sys::TouchEvent| {
                    let Some(touch) = evt.touches().get(0) else {
                        return;
                    };
                    if let Some(named) = closest(&evt, "[data-name]")
                        && let Some(name) = named.get_attribute("data-name")
                    {
                        let (x, y) = (f64::from(touch.client_x()), f64::from(touch.client_y()));
                        dispatch(&app, |state| state.hover(&name, x, y));
                    }
                });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    if let Some(next) = document.get_element_by_id(render::NEXT_BUTTON_ID) {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_evt| {
            dispatch(&app, App::next);
        });
        let _ = next.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_saturate() {
        assert_eq!(timeout_ms(500), 500);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
    }
}
