use crate::dom;
use crate::events;
use crate::model::{Camera, ReactorConfig, ReactorScene, PARTICLE_COUNT};
use crate::render::ReactorRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Everything created once at startup for the 3D view.
pub struct SceneHandle {
    pub canvas: web::HtmlCanvasElement,
    pub renderer: ReactorRenderer,
    pub camera: Camera,
    pub scene: ReactorScene,
    pub rng: StdRng,
}

/// Build the render surface, GPU resources and initial scene state.
/// Returns `None` (after logging) when the container is missing or WebGPU
/// is unavailable; the rest of the page keeps working without 3D.
pub async fn initialize(document: &web::Document, config: &ReactorConfig) -> Option<SceneHandle> {
    let Some(container) = document.get_element_by_id(&config.canvas_container_id) else {
        log::warn!(
            "[scene] #{} not found; skipping 3D setup",
            config.canvas_container_id
        );
        return None;
    };
    let canvas = match dom::create_surface_canvas(document, &container) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[scene] canvas creation failed: {:?}", e);
            return None;
        }
    };
    events::wire_canvas_resize(&canvas);

    let renderer = match ReactorRenderer::new(&canvas, PARTICLE_COUNT).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            return None;
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = ReactorScene::new(&mut rng);
    let mut camera = Camera::reactor_default(1.0);
    camera.set_viewport(canvas.width(), canvas.height());
    log::info!(
        "[scene] ready: particles={} aspect={:.3}",
        scene.particles.len(),
        camera.aspect
    );

    Some(SceneHandle {
        canvas,
        renderer,
        camera,
        scene,
        rng,
    })
}
