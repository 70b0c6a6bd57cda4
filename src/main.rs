use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use smithay_client_toolkit::reexports::{
    calloop::{
        EventLoop,
        timer::{TimeoutAction, Timer},
    },
    calloop_wayland_source::WaylandSource,
};
use wayland_client::{Connection, globals::registry_queue_init};

use wallclock::{Canvas, HEIGHT, Theme, WIDTH, WallClock, wayland::Wayland};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conn = Connection::connect_to_env().context("wayland display unavailable")?;
    let (globals, event_queue) =
        registry_queue_init(&conn).context("wayland registry init failed")?;
    let qh = event_queue.handle();

    let wl = Wayland::new(&globals, &qh)?;
    let mut app = WallClock::new(wl, Theme::default(), Canvas::new(WIDTH, HEIGHT));

    let mut event_loop: EventLoop<WallClock> =
        EventLoop::try_new().context("failed to initialize event loop")?;
    let loop_handle = event_loop.handle();

    WaylandSource::new(conn, event_queue).insert(loop_handle.clone())?;

    let timer = Timer::from_duration(next_tick());
    loop_handle.insert_source(timer, tick).ok();

    loop {
        event_loop.dispatch(None, &mut app)?;

        // A quit key ends the loop before any further render.
        if !app.is_running() {
            break;
        }

        if app.needs_redraw {
            app.needs_redraw = false;
            app.draw();
        }
    }

    Ok(())
}

fn tick(_: Instant, _: &mut (), app: &mut WallClock) -> TimeoutAction {
    app.needs_redraw = true;
    TimeoutAction::ToDuration(next_tick())
}

/// Time until the next wall-clock second boundary, so the displayed
/// second flips right when it changes.
fn next_tick() -> Duration {
    let ms_in_current_sec = Local::now().timestamp_subsec_millis();
    Duration::from_millis((1000 - ms_in_current_sec) as u64)
}
