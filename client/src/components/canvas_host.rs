//! Bridge component between the Leptos session and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns the raster while this host sizes it to the window,
//! forwards mouse and touch input, mirrors tool changes, clears on reset, and
//! starts a submission whenever Calculate is pressed.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[cfg(feature = "csr")]
use crate::config::ClientConfig;
#[cfg(feature = "csr")]
use crate::util::calculate::spawn_calculation;
#[cfg(feature = "csr")]
use canvas::color::Color;
#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::geom::Point;
#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
fn blit(engine: &RefCell<Option<Engine>>) {
    let mut engine_ref = engine.borrow_mut();
    let Some(engine) = engine_ref.as_mut() else {
        return;
    };
    if let Err(e) = engine.render() {
        log::warn!("canvas blit failed: {e:?}");
    }
}

/// Coalesces blit requests into at most one per animation frame.
///
/// The frame callback is built once at mount and re-registered whenever a
/// blit is requested while none is pending.
#[cfg(feature = "csr")]
struct FrameScheduler {
    engine: Rc<RefCell<Option<Engine>>>,
    pending: Rc<Cell<bool>>,
    on_frame: Closure<dyn FnMut(f64)>,
}

#[cfg(feature = "csr")]
impl FrameScheduler {
    fn new(engine: &Rc<RefCell<Option<Engine>>>) -> Rc<Self> {
        let pending = Rc::new(Cell::new(false));
        let on_frame = {
            let engine = Rc::clone(engine);
            let pending = Rc::clone(&pending);
            Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                pending.set(false);
                blit(&engine);
            })
        };
        Rc::new(Self { engine: Rc::clone(engine), pending, on_frame })
    }

    fn request(&self) {
        if self.pending.replace(true) {
            return;
        }
        let scheduled = web_sys::window().is_some_and(|w| {
            w.request_animation_frame(self.on_frame.as_ref().unchecked_ref())
                .is_ok()
        });
        if !scheduled {
            self.pending.set(false);
            blit(&self.engine);
        }
    }

    fn process(&self, actions: &[Action]) {
        if actions.contains(&Action::RenderNeeded) {
            self.request();
        }
    }
}

/// Window width by the height left below the canvas's own top offset.
#[cfg(feature = "csr")]
fn viewport_size(canvas: &web_sys::HtmlCanvasElement) -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (1, 1);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
        - f64::from(canvas.offset_top());
    (to_px(width), to_px(height))
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(v: f64) -> u32 {
    v.max(0.0).round() as u32
}

#[cfg(feature = "csr")]
fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
fn first_touch(ev: &leptos::ev::TouchEvent) -> Option<Point> {
    ev.touches()
        .get(0)
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
}

/// Full-window drawing surface.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let config = expect_context::<ClientConfig>();
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "csr")]
    let frames = FrameScheduler::new(&engine);
    #[cfg(feature = "csr")]
    let last_clear_seq = RwSignal::new(session.with_untracked(|s| s.clear_seq));
    #[cfg(feature = "csr")]
    let last_calculate_seq = RwSignal::new(session.with_untracked(|s| s.calculate_seq));

    #[cfg(not(feature = "csr"))]
    let _ = session;

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let frames = Rc::clone(&frames);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let (width, height) = viewport_size(&canvas);
            let mut instance = match Engine::new(canvas, width, height) {
                Ok(instance) => instance,
                Err(e) => {
                    log::error!("canvas setup failed: {e:?}");
                    return;
                }
            };
            session.with_untracked(|s| {
                if let Some(color) = Color::parse(&s.color) {
                    instance.set_color(color);
                }
                instance.set_eraser(s.eraser);
            });
            *engine.borrow_mut() = Some(instance);
            frames.request();
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let tool = Memo::new(move |_| session.with(|s| (s.color.clone(), s.eraser)));
        Effect::new(move || {
            let (color, eraser) = tool.get();
            let mut engine_ref = engine.borrow_mut();
            let Some(engine) = engine_ref.as_mut() else {
                return;
            };
            match Color::parse(&color) {
                Some(parsed) => engine.set_color(parsed),
                None => log::warn!("ignoring unparsable pen color {color}"),
            }
            engine.set_eraser(eraser);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let frames = Rc::clone(&frames);
        let clear_seq = Memo::new(move |_| session.with(|s| s.clear_seq));
        Effect::new(move || {
            let seq = clear_seq.get();
            if seq == last_clear_seq.get_untracked() {
                return;
            }
            last_clear_seq.set(seq);
            let actions = match engine.borrow_mut().as_mut() {
                Some(engine) => engine.clear(),
                None => return,
            };
            frames.process(&actions);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let calculate_seq = Memo::new(move |_| session.with(|s| s.calculate_seq));
        Effect::new(move || {
            let seq = calculate_seq.get();
            if seq == last_calculate_seq.get_untracked() {
                return;
            }
            last_calculate_seq.set(seq);
            spawn_calculation(&engine, session, &config);
        });
    }

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |ev: leptos::ev::MouseEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_down(mouse_point(&ev)),
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |ev: leptos::ev::MouseEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_move(mouse_point(&ev)),
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_stop = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_up(),
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(client) = first_touch(&ev) else {
                    return;
                };
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => {
                        let origin = engine.client_origin();
                        engine.on_touch_start(client, origin)
                    }
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(client) = first_touch(&ev) else {
                    return;
                };
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => {
                        let origin = engine.client_origin();
                        engine.on_touch_move(client, origin)
                    }
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_stop = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let frames = Rc::clone(&frames);
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_touch_end(),
                    None => return,
                };
                frames.process(&actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_stop.clone()
            on:mouseout=on_mouse_stop
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_stop.clone()
            on:touchcancel=on_touch_stop
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
