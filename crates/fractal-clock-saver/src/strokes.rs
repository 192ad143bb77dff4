//! Stroke recording: core strokes (+Y up, `f64`) to engine line commands
//! (top-left origin, `f32`, premultiplied color).

use fractal_clock_core::{Bounds, Stroke};
use fractal_clock_engine::coords::Vec2;
use fractal_clock_engine::paint::Color;
use fractal_clock_engine::scene::{DrawCmd, DrawList, LineCmd};

#[inline]
fn to_screen(p: fractal_clock_core::Vec2, bounds: Bounds) -> Vec2 {
    Vec2::new(p.x as f32, (bounds.height - p.y) as f32)
}

pub(crate) fn line_for(stroke: &Stroke, bounds: Bounds) -> LineCmd {
    let [r, g, b, a] = stroke.rgba();
    LineCmd::new(
        to_screen(stroke.from, bounds),
        to_screen(stroke.to, bounds),
        stroke.width as f32,
        Color::from_straight(r as f32, g as f32, b as f32, a as f32),
    )
}

/// Replaces the contents of `list` with `strokes`, preserving paint order.
/// Returns the number of strokes recorded.
pub(crate) fn record<I>(list: &mut DrawList, strokes: I, bounds: Bounds) -> usize
where
    I: IntoIterator<Item = Stroke>,
{
    list.clear();
    let strokes = strokes.into_iter();
    list.reserve(strokes.size_hint().0);

    let before = list.len();
    for stroke in strokes {
        list.push(DrawCmd::Line(line_for(&stroke, bounds)));
    }
    list.len() - before
}
