//! The visit trace seam between the search engine and its observers.
//!
//! The engine reports every settled cell to a [TraceSink], synchronously and
//! in expansion order. Sinks decide what the stream means: drop it
//! ([NoopTrace]), accumulate it ([VisitRecorder]), or draw it
//! ([crate::console::ConsoleTrace]). The search outcome never depends on the
//! sink, so any sink can be swapped for [NoopTrace] without changing the
//! returned path.

use grid_util::point::Point;

/// Synchronous sink for cells settled by the search.
///
/// Called exactly once per settled cell; the engine passes only the
/// incremental cell and leaves accumulating history to the sink. Pacing
/// (frame delays and the like) is a sink concern and must not be relied on
/// by callers of the engine.
pub trait TraceSink {
    fn visit(&mut self, cell: Point);
}

/// Sink that drops every event, for headless and test use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn visit(&mut self, _cell: Point) {}
}

/// Sink that accumulates the full visit history in expansion order.
#[derive(Clone, Debug, Default)]
pub struct VisitRecorder {
    pub visited: Vec<Point>,
}

impl VisitRecorder {
    pub fn new() -> VisitRecorder {
        VisitRecorder::default()
    }
}

impl TraceSink for VisitRecorder {
    fn visit(&mut self, cell: Point) {
        self.visited.push(cell);
    }
}
