use smithay_client_toolkit::seat::keyboard::Keysym;
use smithay_client_toolkit::shell::WaylandSurface;
use wayland_client::protocol::wl_shm::Format::Argb8888;

use crate::canvas::Canvas;
use crate::clock::ClockState;
use crate::scene;
use crate::theme::Theme;
use crate::wayland::Wayland;
use crate::{HEIGHT, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// `q` or escape quits; every other key is ignored.
pub fn is_quit_key(keysym: Keysym) -> bool {
    keysym == Keysym::Escape || keysym == Keysym::q
}

/// Running → Stopped on a quit key; everything else self-loops, and
/// Stopped is terminal.
pub fn transition(state: RunState, keysym: Keysym) -> RunState {
    match state {
        RunState::Running if is_quit_key(keysym) => RunState::Stopped,
        other => other,
    }
}

pub struct WallClock {
    pub wl: Wayland,
    pub canvas: Canvas,
    pub theme: Theme,
    pub state: RunState,
    pub needs_redraw: bool,
}

impl WallClock {
    pub fn new(wl: Wayland, theme: Theme, canvas: Canvas) -> Self {
        Self {
            wl,
            canvas,
            theme,
            state: RunState::Running,
            needs_redraw: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn stop(&mut self) {
        log::info!("quit requested");
        self.state = RunState::Stopped;
    }

    pub fn handle_key(&mut self, keysym: Keysym) {
        if transition(self.state, keysym) == RunState::Stopped && self.is_running() {
            self.stop();
        }
    }

    /// Samples the wall clock, redraws the scene, and presents the frame.
    pub fn draw(&mut self) {
        let state = ClockState::sample();
        scene::render(&mut self.canvas, &state, self.theme);
        self.present();
    }

    fn present(&mut self) {
        let stride = WIDTH * 4;

        let (buffer, surface) = self
            .wl
            .pool
            .create_buffer(WIDTH, HEIGHT, stride, Argb8888)
            .expect("create buffer");

        surface.copy_from_slice(self.canvas.data());

        let wl_surface = self.wl.layer.wl_surface();
        wl_surface.damage_buffer(0, 0, WIDTH, HEIGHT);
        buffer.attach_to(wl_surface).expect("buffer attach");
        self.wl.layer.commit();
    }
}
