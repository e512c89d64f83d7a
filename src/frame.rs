use crate::constants::{SLOW_TICK, STATS_WINDOW_TICKS};
use crate::model::{FrameInput, FrameStats, ModeState, PointerOffset, VisualMode};
use crate::scene::SceneHandle;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub handle: SceneHandle,
    pub mode: Rc<Cell<ModeState>>,
    pub pointer: Rc<Cell<PointerOffset>>,

    last_mode: VisualMode,
    last_instant: Instant,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(
        handle: SceneHandle,
        mode: Rc<Cell<ModeState>>,
        pointer: Rc<Cell<PointerOffset>>,
    ) -> Self {
        Self {
            handle,
            mode,
            pointer,
            last_mode: VisualMode::Idle,
            last_instant: Instant::now(),
            stats: FrameStats::new(STATS_WINDOW_TICKS, SLOW_TICK),
        }
    }

    pub fn frame(&mut self) {
        let started = Instant::now();
        let interval = started - self.last_instant;
        self.last_instant = started;

        // One snapshot per tick; handlers that fire mid-tick land next tick
        let input = FrameInput {
            mode: self.mode.get(),
            pointer: self.pointer.get(),
        };
        let h = &mut self.handle;
        let mode = h.scene.advance(&input, &mut h.rng);
        if mode != self.last_mode {
            log::info!("[loop] mode {:?} -> {:?}", self.last_mode, mode);
            self.last_mode = mode;
        }

        let (w, hgt) = (h.canvas.width(), h.canvas.height());
        if h.renderer.resize_if_needed(w, hgt) {
            h.camera.set_viewport(w, hgt);
        }
        match h.renderer.render(&h.scene, &h.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[loop] surface lost; reconfiguring");
                h.renderer.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }

        if let Some(report) = self.stats.record(interval, started.elapsed()) {
            log::debug!(
                "[loop] {} ticks, {:.1} fps, worst {:.1} ms",
                report.ticks,
                report.avg_fps,
                report.worst.as_secs_f64() * 1000.0
            );
            if report.slow_ticks > 0 {
                log::warn!(
                    "[loop] {} of {} ticks exceeded {} ms",
                    report.slow_ticks,
                    report.ticks,
                    SLOW_TICK.as_millis()
                );
            }
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame-driven loop with an explicit start/stop lifecycle.
/// The next frame is requested before the current one runs, so a failing
/// tick never ends the loop.
pub struct RenderLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl RenderLoop {
    pub fn new(frame_ctx: FrameContext) -> Self {
        let frame_ctx = Rc::new(RefCell::new(frame_ctx));
        let running = Rc::new(Cell::new(false));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let running_tick = running.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            pending_tick.set(request_frame(&tick_clone));
            match frame_ctx.try_borrow_mut() {
                Ok(mut ctx) => ctx.frame(),
                Err(_) => log::warn!("[loop] frame state busy; skipping tick"),
            }
        }) as Box<dyn FnMut()>));

        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        self.pending.set(request_frame(&self.tick));
        log::info!("[loop] started");
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[loop] stopped");
    }
}
