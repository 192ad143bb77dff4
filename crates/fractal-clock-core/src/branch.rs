use core::iter::FusedIterator;

use crate::colour::{Colour, ColourRule};
use crate::geom::Vec2;
use crate::rotator::Rotator;

/// Default stroke width in logical pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default recursion budget: 2^10 leaves, 2047 strokes.
pub const DEFAULT_DEPTH: u32 = 10;

/// Largest accepted recursion budget: 2^20 leaves, about two million strokes
/// per frame.
pub const MAX_DEPTH: u32 = 20;

/// A directed line: origin plus displacement.
///
/// Past the root, the displacement's length and direction are the only record
/// of the rotation and scale accumulated along the branch.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Segment {
    pub origin: Vec2,
    pub displacement: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(origin: Vec2, displacement: Vec2) -> Self {
        Self { origin, displacement }
    }

    /// Far endpoint, `origin + displacement`.
    #[inline]
    pub fn end(self) -> Vec2 {
        self.origin + self.displacement
    }

    #[inline]
    pub fn midpoint(self) -> Vec2 {
        self.origin + self.displacement * 0.5
    }
}

/// One drawable line of the tree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub colour: Colour,
    pub opacity: f64,
    pub depth: u32,
    pub width: f64,
}

impl Stroke {
    /// Straight-alpha RGBA.
    #[inline]
    pub fn rgba(&self) -> [f64; 4] {
        let [c0, c1, c2] = self.colour.0;
        [c0, c1, c2, self.opacity]
    }
}

/// `1` at the root, `1/depth` below it.
#[inline]
pub fn opacity_for_depth(depth: u32) -> f64 {
    if depth == 0 { 1.0 } else { 1.0 / f64::from(depth) }
}

#[derive(Debug, Copy, Clone)]
struct Node {
    segment: Segment,
    depth: u32,
    remaining: u32,
    colour: Colour,
}

/// Lazy post-order walk of the fractal tree.
///
/// Each node spawns a second-hand child and a minute-hand child at its far
/// endpoint until the depth budget runs out. Strokes come out back-to-front:
/// a node's whole second subtree, then its minute subtree, then the node.
///
/// The walk uses an explicit stack of at most `2·budget + 1` entries, so the
/// budget is not limited by call-stack depth.
#[derive(Debug, Clone)]
pub struct Branches {
    stack: Vec<(Node, bool)>,
    second: Rotator,
    minute: Rotator,
    rule: ColourRule,
    width: f64,
    left: Option<usize>,
}

impl Branches {
    /// Tree rooted at depth 0.
    pub fn new(
        root: Segment,
        second: Rotator,
        minute: Rotator,
        depth_remaining: u32,
        colour: Colour,
    ) -> Self {
        Self::from_depth(root, second, minute, 0, depth_remaining, colour)
    }

    /// Subtree whose root sits at `depth`.
    pub fn from_depth(
        root: Segment,
        second: Rotator,
        minute: Rotator,
        depth: u32,
        depth_remaining: u32,
        colour: Colour,
    ) -> Self {
        // Larger budgets are refused by settings validation; the stack still grows if needed.
        let mut stack = Vec::with_capacity(2 * depth_remaining.min(MAX_DEPTH) as usize + 1);
        stack.push((
            Node {
                segment: root,
                depth,
                remaining: depth_remaining,
                colour,
            },
            false,
        ));

        Self {
            stack,
            second,
            minute,
            rule: ColourRule::default(),
            width: DEFAULT_STROKE_WIDTH,
            left: stroke_count(depth_remaining),
        }
    }

    pub fn with_colour_rule(mut self, rule: ColourRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    fn stroke(&self, node: &Node) -> Stroke {
        let to = node.segment.end();
        // The root hand pivots at its centre.
        let from = if node.depth == 0 { node.segment.midpoint() } else { node.segment.origin };

        Stroke {
            from,
            to,
            colour: node.colour,
            opacity: opacity_for_depth(node.depth),
            depth: node.depth,
            width: self.width,
        }
    }

    fn expand(&mut self, node: Node) {
        let tip = node.segment.end();
        let d = node.segment.displacement;
        let (second_colour, minute_colour) = self.rule.children(node.colour);

        let child = |rotator: Rotator, colour: Colour| Node {
            segment: Segment::new(tip, rotator.apply(d)),
            depth: node.depth + 1,
            remaining: node.remaining - 1,
            colour,
        };
        let second = child(self.second, second_colour);
        let minute = child(self.minute, minute_colour);

        // LIFO: the second subtree is popped (and fully drawn) first.
        self.stack.push((node, true));
        self.stack.push((minute, false));
        self.stack.push((second, false));
    }
}

impl Iterator for Branches {
    type Item = Stroke;

    fn next(&mut self) -> Option<Stroke> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded || node.remaining == 0 {
                self.left = self.left.map(|n| n.saturating_sub(1));
                return Some(self.stroke(&node));
            }
            self.expand(node);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.left {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Branches {}

/// `2^(budget+1) - 1`, or `None` if that overflows `usize`.
pub fn stroke_count(depth_remaining: u32) -> Option<usize> {
    1usize
        .checked_shl(depth_remaining.checked_add(1)?)
        .filter(|&n| n != 0)
        .map(|n| n - 1)
}

/// Expands the tree under `segment`, handing every stroke to `emit`.
///
/// Equivalent to draining [`Branches::from_depth`] with the default colour rule
/// and stroke width.
pub fn draw_branch<F>(
    segment: Segment,
    second: Rotator,
    minute: Rotator,
    depth: u32,
    depth_remaining: u32,
    colour: Colour,
    mut emit: F,
) where
    F: FnMut(Stroke),
{
    for stroke in Branches::from_depth(segment, second, minute, depth, depth_remaining, colour) {
        emit(stroke);
    }
}
