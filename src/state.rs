//! Drawing session state.
//!
//! [`DrawingState`] is a plain value. Every operation consumes it and returns
//! the next state, so callers can keep old states around, compare them, or
//! feed them to the pipeline from another thread without locking.

use std::collections::VecDeque;

use crate::defaults;
use crate::log::debug;
use crate::path::{Path, StrokeStyle};
use crate::pipeline::{PatternPipeline, RenderedTile};
use crate::types::{Color, Point, SmoothFactor, StrokeWidth};

/// Input events, for callers that drive the state from an event queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Press(Point),
    Drag(Point),
    Release,
    Undo,
    Redo,
    Clear,
    SetColor(Color),
    SetStrokeWidth(StrokeWidth),
    SetSmoothFactor(SmoothFactor),
}

/// Bounded undo/redo stacks of whole path lists.
#[derive(Debug, Clone, PartialEq)]
struct History {
    undo: VecDeque<Vec<Path>>,
    redo: Vec<Vec<Path>>,
    depth: usize,
}

impl History {
    fn with_depth(depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            depth,
        }
    }

    /// Remember `paths` as the state before a new change. Drops the oldest
    /// snapshot past the depth limit, and forgets anything undone.
    fn record(&mut self, paths: &[Path]) {
        self.redo.clear();
        if self.depth == 0 {
            return;
        }
        self.undo.push_back(paths.to_vec());
        while self.undo.len() > self.depth {
            self.undo.pop_front();
        }
    }
}

/// Paths drawn so far, the style for the next stroke, and undo history.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingState {
    paths: Vec<Path>,
    style: StrokeStyle,
    drawing: bool,
    history: History,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingState {
    pub fn new() -> Self {
        Self::with_history_depth(defaults::HISTORY_DEPTH)
    }

    pub fn with_history_depth(depth: usize) -> Self {
        Self {
            paths: Vec::new(),
            style: StrokeStyle::default(),
            drawing: false,
            history: History::with_depth(depth),
        }
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Whether the last path is still under the pointer.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn can_undo(&self) -> bool {
        !self.history.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.history.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.history.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.history.redo.len()
    }

    /// Start a stroke at `at` with the current style baked in.
    ///
    /// A press while a stroke is already open finishes that stroke first.
    pub fn press(self, at: Point) -> Self {
        let mut next = self.release();
        next.history.record(&next.paths);
        next.paths.push(Path::start(at, next.style.clone()));
        next.drawing = true;
        next
    }

    /// Extend the open stroke. Ignored when nothing is being drawn.
    pub fn drag(mut self, to: Point) -> Self {
        if !self.drawing {
            return self;
        }
        if let Some(path) = self.paths.last_mut() {
            path.points.push(to);
        }
        self
    }

    /// Finish the open stroke. A press with no movement stays as a
    /// one-point dot.
    pub fn release(mut self) -> Self {
        self.drawing = false;
        self
    }

    /// Restore the path list from before the last stroke or clear.
    ///
    /// An open stroke is finished first, so undoing mid-stroke removes it.
    pub fn undo(self) -> Self {
        let mut next = self.release();
        let Some(previous) = next.history.undo.pop_back() else {
            debug!("undo: nothing to undo");
            return next;
        };
        let current = std::mem::replace(&mut next.paths, previous);
        next.history.redo.push(current);
        debug!(
            undo = next.history.undo.len(),
            redo = next.history.redo.len(),
            "undo"
        );
        next
    }

    pub fn redo(self) -> Self {
        let mut next = self.release();
        let Some(restored) = next.history.redo.pop() else {
            debug!("redo: nothing to redo");
            return next;
        };
        let current = std::mem::replace(&mut next.paths, restored);
        next.history.undo.push_back(current);
        debug!(
            undo = next.history.undo.len(),
            redo = next.history.redo.len(),
            "redo"
        );
        next
    }

    /// Remove every path. Undoable; a no-op on an empty canvas.
    pub fn clear(self) -> Self {
        let mut next = self.release();
        if next.paths.is_empty() {
            return next;
        }
        next.history.record(&next.paths);
        next.paths.clear();
        next
    }

    // Style changes only affect strokes started afterwards; existing paths,
    // the open one included, keep the style they were started with.

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: StrokeWidth) -> Self {
        self.style.stroke_width = stroke_width;
        self
    }

    pub fn with_smooth_factor(mut self, smooth_factor: SmoothFactor) -> Self {
        self.style.smooth_factor = smooth_factor;
        self
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Press(at) => self.press(at),
            Action::Drag(to) => self.drag(to),
            Action::Release => self.release(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Clear => self.clear(),
            Action::SetColor(color) => self.with_color(color),
            Action::SetStrokeWidth(width) => self.with_stroke_width(width),
            Action::SetSmoothFactor(factor) => self.with_smooth_factor(factor),
        }
    }

    /// Run the current paths through `pipeline`, treating the open stroke as
    /// in progress.
    pub fn render(&self, pipeline: &PatternPipeline) -> RenderedTile {
        pipeline.run(&self.paths, self.drawing)
    }
}
