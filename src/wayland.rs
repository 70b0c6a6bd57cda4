use anyhow::Context;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        wlr_layer::{KeyboardInteractivity, Layer, LayerShell, LayerSurface},
    },
    shm::{Shm, slot::SlotPool},
};
use wayland_client::{QueueHandle, globals::GlobalList, protocol::wl_keyboard::WlKeyboard};

use crate::{HEIGHT, WIDTH, WallClock};

/// Everything the compositor side of the program owns: bound globals, the
/// layer surface the clock draws into, and the shm pool behind it.
pub struct Wayland {
    pub registry_state: RegistryState,
    pub seat_state: SeatState,
    pub output_state: OutputState,
    pub shm: Shm,
    pub pool: SlotPool,
    pub layer: LayerSurface,
    pub keyboard: Option<WlKeyboard>,
}

impl Wayland {
    pub fn new(globals: &GlobalList, qh: &QueueHandle<WallClock>) -> anyhow::Result<Self> {
        let shm = Shm::bind(globals, qh).context("wl_shm not available")?;
        let compositor =
            CompositorState::bind(globals, qh).context("wl_compositor not available")?;
        let layer_shell = LayerShell::bind(globals, qh).context("layer shell not available")?;

        let surface = compositor.create_surface(qh);
        let layer =
            layer_shell.create_layer_surface(qh, surface, Layer::Overlay, Some("wallclock"), None);
        layer.set_keyboard_interactivity(KeyboardInteractivity::OnDemand);
        layer.set_size(WIDTH as u32, HEIGHT as u32);
        layer.commit();

        let pool = SlotPool::new((WIDTH * HEIGHT * 4) as usize, &shm)
            .context("failed to create shm pool")?;

        Ok(Self {
            registry_state: RegistryState::new(globals),
            seat_state: SeatState::new(globals, qh),
            output_state: OutputState::new(globals, qh),
            shm,
            pool,
            layer,
            keyboard: None,
        })
    }
}
