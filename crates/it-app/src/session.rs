//! Controller, views and event queue wired together

use anyhow::Result;
use tracing::{debug, info, warn};

use it_core::{DisplayMode, MarkerEventQueue, Nudge, StatusReadout, SyncController, ViewerSettings};
use it_data::{demo::DEMO_SHAPE, synthetic_volume, LoadRequest, LoaderRegistry};
use it_views::{build_views, CrossSectionLayout};

/// Everything that lives as long as the window
pub struct ImageSession {
    controller: SyncController,
    layout: CrossSectionLayout,
    queue: MarkerEventQueue,
    registry: LoaderRegistry,
    keyboard_step: usize,
}

impl ImageSession {
    /// Build the six views and show the synthetic volume
    pub fn new(settings: &ViewerSettings) -> Result<Self> {
        let (mut ports, layout) = build_views(settings.colormap);
        let queue = MarkerEventQueue::new();
        for port in ports.iter_mut() {
            port.on_marker_moved(queue.callback());
        }

        let mut controller = SyncController::new(ports);
        let shape = startup_shape(settings.demo_shape);
        let demo = synthetic_volume(shape, settings.demo_seed);
        controller.load_volume(demo.into_dyn())?;
        info!("Showing synthetic volume {:?}", shape);

        Ok(Self {
            controller,
            layout,
            queue,
            registry: LoaderRegistry::with_defaults(),
            keyboard_step: settings.keyboard_step.max(1),
        })
    }

    /// Feed queued marker drags to the controller, one at a time
    pub fn pump_events(&mut self) -> usize {
        let events = self.queue.drain();
        let moved = events
            .iter()
            .filter(|event| self.controller.on_marker_moved(event.marker, event.value))
            .count();
        if !events.is_empty() {
            debug!("{} marker events, {} moved the cursor", events.len(), moved);
        }
        moved
    }

    pub fn nudge(&mut self, nudge: Nudge) -> bool {
        self.controller.nudge(nudge, self.keyboard_step)
    }

    pub fn autoscale_all(&mut self) {
        self.controller.autoscale_all();
    }

    /// Read the request's file and show it. On error nothing changes.
    pub fn load(&mut self, request: &LoadRequest) -> Result<DisplayMode> {
        let array = self.registry.load(request)?;
        let mode = self.controller.load_volume(array)?;
        Ok(mode)
    }

    pub fn status(&self) -> StatusReadout {
        self.controller.status()
    }

    pub fn controller(&self) -> &SyncController {
        &self.controller
    }

    pub fn layout_mut(&mut self) -> &mut CrossSectionLayout {
        &mut self.layout
    }

    pub fn queue(&self) -> &MarkerEventQueue {
        &self.queue
    }
}

/// The configured synthetic shape, or the default when an extent is zero
fn startup_shape(configured: [usize; 3]) -> [usize; 3] {
    if configured.contains(&0) {
        warn!("Ignoring demo shape {:?}, using {:?}", configured, DEMO_SHAPE);
        return DEMO_SHAPE;
    }
    configured
}
