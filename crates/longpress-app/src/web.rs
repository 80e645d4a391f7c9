//! WebAssembly entry point and DOM binding.
//!
//! `mountLongPresser(container, options)` builds the widget's elements once,
//! keeps typed handles to them, and wires the raw mouse/touch listeners to
//! the widget. Pressing starts a `requestAnimationFrame` chain that ticks the
//! widget and redraws until the widget says to stop.

use std::cell::RefCell;
use std::rc::Rc;

use longpress_core::svg::{
    arc_style, base_circle_style, check_style, label_style, overlay_circle_style, overlay_class,
    overlay_radius, view_box, CHECK_GLYPH, ROOT_CLASS, SVG_NS,
};
use longpress_core::geometry::{ring_radius, CENTER};
use longpress_core::{
    Clock, Frame, FrameRequest, LongPresser, MonotonicClock, RawPointerEvent, TickOutcome,
    WidgetConfig, WidgetView,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// Name of the DOM event dispatched on the root element on completion.
const PRESSED_EVENT: &str = "pressed";

/// Initialize panic reporting and logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"LongPress: logger already initialized".into());
    }
    log::info!("LongPress (WASM) loaded");
}

/// Elements of one mounted widget, acquired once at creation.
struct SvgHandles {
    root: HtmlElement,
    bg_circle: Element,
    arc: Element,
    fg_circle: Element,
    check: Element,
}

impl SvgHandles {
    fn build(document: &Document, config: &WidgetConfig, view: &WidgetView) -> Result<Self, JsValue> {
        let root: HtmlElement = document.create_element("div")?.dyn_into()?;
        root.set_class_name(ROOT_CLASS);

        let svg_el = svg_element(document, "svg")?;
        svg_el.set_attribute("viewBox", &view_box())?;
        svg_el.set_attribute("version", "1.1")?;
        root.append_child(&svg_el)?;

        let center = |el: &Element, x: &str, y: &str| -> Result<(), JsValue> {
            el.set_attribute(x, &CENTER.x.to_string())?;
            el.set_attribute(y, &CENTER.y.to_string())
        };

        let bg_circle = svg_element(document, "circle")?;
        center(&bg_circle, "cx", "cy")?;
        bg_circle.set_attribute("r", &ring_radius().to_string())?;

        let arc = svg_element(document, "path")?;
        arc.set_attribute("style", &arc_style(config))?;

        let label = svg_element(document, "text")?;
        center(&label, "x", "y")?;
        label.set_attribute("style", &label_style(config))?;
        label.set_text_content(Some(&config.text));

        let fg_circle = svg_element(document, "circle")?;
        center(&fg_circle, "cx", "cy")?;
        fg_circle.set_attribute("r", &overlay_radius().to_string())?;

        let check = svg_element(document, "text")?;
        center(&check, "x", "y")?;
        check.set_text_content(Some(CHECK_GLYPH));

        for el in [&bg_circle, &arc, &label, &fg_circle, &check] {
            svg_el.append_child(el)?;
        }

        let handles = Self {
            root,
            bg_circle,
            arc,
            fg_circle,
            check,
        };
        handles.draw(config, view)?;
        Ok(handles)
    }

    /// Apply the state-dependent attributes.
    fn draw(&self, config: &WidgetConfig, view: &WidgetView) -> Result<(), JsValue> {
        self.root.style().set_property("cursor", view.cursor.css())?;
        self.bg_circle.set_attribute("style", &base_circle_style(config, view))?;
        self.arc.set_attribute("d", &view.arc.to_string())?;
        self.fg_circle.set_attribute("style", &overlay_circle_style(view))?;
        self.fg_circle.set_attribute("class", overlay_class(view))?;
        self.check.set_attribute("style", &check_style(view))?;
        self.check.set_attribute("class", overlay_class(view))?;
        Ok(())
    }
}

fn svg_element(document: &Document, name: &str) -> Result<Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), name)
}

type Listener = Closure<dyn FnMut(Event)>;
type Shared = Rc<RefCell<Mounted>>;

/// Per-widget state shared by the listeners and the frame chain.
struct Mounted {
    presser: LongPresser,
    clock: MonotonicClock,
    /// None once unmounted; drawing is then skipped.
    handles: Option<SvgHandles>,
    onpressed: Option<js_sys::Function>,
    listeners: Vec<(RawPointerEvent, Listener)>,
}

impl Mounted {
    fn draw(&self) {
        let Some(handles) = &self.handles else {
            return;
        };
        if let Err(e) = handles.draw(self.presser.config(), &self.presser.view()) {
            log::warn!("Failed to draw long presser {}: {:?}", self.presser.id(), e);
        }
    }
}

/// Handle returned to the hosting page.
#[wasm_bindgen]
pub struct LongPressHandle {
    shared: Shared,
}

#[wasm_bindgen]
impl LongPressHandle {
    /// Return a finished widget to idle. Returns false if it wasn't finished.
    pub fn reset(&self) -> bool {
        let mut mounted = self.shared.borrow_mut();
        let reset = mounted.presser.reset();
        if reset {
            mounted.draw();
        }
        reset
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.shared.borrow().presser.is_finished()
    }

    /// Raw press fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.shared.borrow().presser.controller().engine().press_fraction()
    }

    /// Detach listeners, discard press state and remove the widget's elements.
    pub fn unmount(&self) {
        let (listeners, handles) = {
            let mut mounted = self.shared.borrow_mut();
            mounted.presser.cancel();
            (std::mem::take(&mut mounted.listeners), mounted.handles.take())
        };
        let Some(handles) = handles else {
            return;
        };
        for (event, listener) in &listeners {
            let _ = handles
                .root
                .remove_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref());
        }
        handles.root.remove();
        log::debug!("Long presser unmounted");
    }
}

/// Mount a long presser into `container`.
///
/// `options` carries the widget options (`text`, `textColor`,
/// `fgStrokeColor`, `bgStrokeColor`, `bgFillColor`, `duration`) and an
/// optional `onpressed` function.
#[wasm_bindgen(js_name = mountLongPresser)]
pub fn mount_long_presser(container: &HtmlElement, options: JsValue) -> Result<LongPressHandle, JsValue> {
    let config: WidgetConfig = if options.is_undefined() || options.is_null() {
        WidgetConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options.clone())?
    };
    let onpressed = js_sys::Reflect::get(&options, &JsValue::from_str("onpressed"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let presser = LongPresser::new(config);
    let handles = SvgHandles::build(&document, presser.config(), &presser.view())?;
    container.append_child(&handles.root)?;
    let root = handles.root.clone();
    log::info!("Mounted long presser {} ({:?})", presser.id(), presser.config().text);

    let shared: Shared = Rc::new(RefCell::new(Mounted {
        presser,
        clock: MonotonicClock::new(),
        handles: Some(handles),
        onpressed,
        listeners: Vec::new(),
    }));

    let mut listeners = Vec::with_capacity(RawPointerEvent::ALL.len());
    for event in RawPointerEvent::ALL {
        let target = shared.clone();
        let listener = Closure::wrap(Box::new(move |_e: Event| {
            let request = {
                let mut mounted = target.borrow_mut();
                let now = mounted.clock.now_ms();
                mounted.presser.handle_raw(event, now)
            };
            if request == FrameRequest::Schedule {
                animate(target.clone());
            }
        }) as Box<dyn FnMut(Event)>);
        root.add_event_listener_with_callback(event.dom_name(), listener.as_ref().unchecked_ref())?;
        listeners.push((event, listener));
    }
    shared.borrow_mut().listeners = listeners;

    Ok(LongPressHandle { shared })
}

/// Run one frame: tick, redraw, and report completion outside the borrow.
/// An unmounted widget stops its chain without ticking.
fn step(shared: &Shared) -> Frame {
    let (outcome, root, onpressed) = {
        let mut mounted = shared.borrow_mut();
        let Some(root) = mounted.handles.as_ref().map(|h| h.root.clone()) else {
            return Frame::Stop;
        };
        let now = mounted.clock.now_ms();
        let outcome = mounted.presser.tick(now);
        mounted.draw();
        (outcome, root, mounted.onpressed.clone())
    };

    if outcome == TickOutcome::Completed {
        match Event::new(PRESSED_EVENT) {
            Ok(event) => {
                let _ = root.dispatch_event(&event);
            }
            Err(e) => log::warn!("Failed to create {PRESSED_EVENT} event: {e:?}"),
        }
        if let Some(callback) = onpressed {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("onpressed threw: {e:?}");
            }
        }
    }
    outcome.into()
}

/// Animate while the widget's frame chain is alive.
fn animate(shared: Shared) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let scheduler = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        if step(&shared) == Frame::Stop {
            // Drop our own closure to end the chain.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}
