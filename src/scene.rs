use crate::canvas::Canvas;
use crate::clock::ClockState;
use crate::geometry::{Angle, Point};
use crate::theme::Theme;

/// Dial center in surface coordinates.
pub const FACE_CENTER: Point = Point { x: 350.0, y: 350.0 };
pub const FACE_RADIUS: f32 = 300.0;
pub const HOUR_RADIUS: f32 = 200.0;

const FACE_REGION: (i32, i32, i32, i32) = (0, 0, 700, 700);
const PANEL: (i32, i32, i32, i32) = (800, 50, 370, 350);

const TICK_OUTER: f32 = 300.0;
const TICK_INNER_MAJOR: f32 = 280.0;
const TICK_INNER_MINOR: f32 = 295.0;

const PANEL_TEXT_X: i32 = 850;
const PANEL_LINE_HEIGHT: i32 = 50;
const FONT_SIZE: f32 = 24.0;

/// Redraws the whole scene from `state`. Geometry is derived purely from
/// the sampled time; nothing persists between frames.
pub fn render(canvas: &mut Canvas, state: &ClockState, theme: Theme) {
    let (fx, fy, fw, fh) = FACE_REGION;
    let (px, py, pw, ph) = PANEL;

    canvas.fill_rect(fx, fy, fw, fh, theme.background);
    canvas.fill_rect(px, py, pw, ph, theme.background);
    canvas.stroke_rect(px, py, pw, ph, theme.frame);

    canvas.stroke_circle(FACE_CENTER, FACE_RADIUS, theme.foreground);
    draw_ticks(canvas, theme);
    draw_hands(canvas, state, theme);
    draw_panel(canvas, state, theme);
}

/// Every fifth tick marks an hour position: longer and accent-colored.
pub fn is_major_tick(index: u32) -> bool {
    index % 5 == 0
}

fn draw_ticks(canvas: &mut Canvas, theme: Theme) {
    for i in 0..60 {
        let angle = Angle::tick(i);
        let (inner, color) = if is_major_tick(i) {
            (TICK_INNER_MAJOR, theme.accent)
        } else {
            (TICK_INNER_MINOR, theme.foreground)
        };
        let from = FACE_CENTER.on_dial(inner, angle);
        let to = FACE_CENTER.on_dial(TICK_OUTER, angle);
        canvas.draw_line(from, to, 2.0, color);
    }
}

fn draw_hands(canvas: &mut Canvas, state: &ClockState, theme: Theme) {
    let hour_tip = FACE_CENTER.on_dial(HOUR_RADIUS, Angle::hour(state.hour, state.minute));
    let minute_tip = FACE_CENTER.on_dial(FACE_RADIUS, Angle::minute(state.minute, state.second));
    let second_tip = FACE_CENTER.on_dial(FACE_RADIUS, Angle::second(state.second));

    canvas.draw_line(FACE_CENTER, hour_tip, 4.0, theme.foreground);
    canvas.draw_line(FACE_CENTER, minute_tip, 3.0, theme.foreground);
    canvas.draw_line(FACE_CENTER, second_tip, 1.5, theme.accent);
}

fn draw_panel(canvas: &mut Canvas, state: &ClockState, theme: Theme) {
    let lines = [
        state.digital(),
        state.date_line(),
        state.weekday_name().to_string(),
        state.dst_label().to_string(),
    ];

    for (i, line) in lines.iter().enumerate() {
        // Baselines at 100/150/200/250, shifted up by the glyph height
        // since text draws from its top-left corner.
        let y = PANEL.1 + PANEL_LINE_HEIGHT * (i as i32 + 1) - FONT_SIZE as i32;
        canvas.draw_text(line, PANEL_TEXT_X, y, FONT_SIZE, theme.foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn three_o_clock() -> ClockState {
        ClockState {
            hour: 3,
            minute: 0,
            second: 0,
            is_dst: false,
            weekday: Weekday::Tue,
            year: 2026,
            month: 3,
            day: 3,
            day_of_year: 62,
        }
    }

    #[test]
    fn accent_ticks_every_five_positions() {
        for i in 0..60 {
            assert_eq!(is_major_tick(i), i % 5 == 0, "tick {i}");
        }
    }

    #[test]
    fn tick_endpoints_stay_on_the_dial_rim() {
        for i in 0..60 {
            let rim = FACE_CENTER.on_dial(TICK_OUTER, Angle::tick(i));
            let dist = FACE_CENTER.distance_to(rim);
            assert!((dist - FACE_RADIUS).abs() < 1e-2, "tick {i} off rim");
        }
    }

    #[test]
    fn three_o_clock_digital_readout() {
        assert_eq!(three_o_clock().digital(), "03:00:00");
    }

    #[test]
    fn three_o_clock_hands_point_up_and_right() {
        let state = three_o_clock();

        let second_tip = FACE_CENTER.on_dial(FACE_RADIUS, Angle::second(state.second));
        assert_eq!(second_tip.as_coords(), (350, 50));

        let minute_tip = FACE_CENTER.on_dial(FACE_RADIUS, Angle::minute(state.minute, state.second));
        assert_eq!(minute_tip.as_coords(), (350, 50));

        let hour_tip = FACE_CENTER.on_dial(HOUR_RADIUS, Angle::hour(state.hour, state.minute));
        let (x, y) = hour_tip.as_coords();
        assert!((x - 550).abs() <= 1 && (y - 350).abs() <= 1);
    }

    fn assert_close_color(actual: crate::theme::Bgra, expected: crate::theme::Bgra) {
        // Blending costs up to a couple of counts per channel
        assert!(
            actual.r().abs_diff(expected.r()) <= 3
                && actual.g().abs_diff(expected.g()) <= 3
                && actual.b().abs_diff(expected.b()) <= 3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn render_paints_accent_on_twelve_o_clock_tick() {
        let mut canvas = Canvas::new(1200, 700);
        let theme = Theme::default();
        render(&mut canvas, &three_o_clock(), theme);

        // Midpoint of the major tick at the top of the dial.
        let probe = FACE_CENTER.on_dial(290.0, Angle::tick(0));
        let (x, y) = probe.as_coords();
        assert_close_color(canvas.pixel_at(x, y).unwrap(), theme.accent);

        // Minor tick at position 1 keeps the foreground color.
        let probe = FACE_CENTER.on_dial(297.0, Angle::tick(1));
        let (x, y) = probe.as_coords();
        assert_close_color(canvas.pixel_at(x, y).unwrap(), theme.foreground);
    }
}
