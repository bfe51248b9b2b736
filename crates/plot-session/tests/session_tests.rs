//! End-to-end state machine tests against a recording render target.

use field_common::{LoadError, Notification, ScalarGrid, Severity};
use field_math::{GradientPair, Mesh};
use plot_session::{ArrowHandle, PlotSession, RenderTarget, ScaleFactor, VisualizationState};
use test_utils::{write_csv_fixture, write_csv_raw};

/// What the target was asked to draw.
#[derive(Debug, Clone, PartialEq)]
enum Event {
    Clear,
    Surface { cols: usize, rows: usize },
    Extents { x: (f32, f32), y: (f32, f32) },
    Arrows { handle: u64, length: f32 },
    Remove { handle: u64 },
}

/// Records every call; hands out sequential arrow handles.
#[derive(Debug, Default)]
struct RecordingTarget {
    events: Vec<Event>,
    next_handle: u64,
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self) {
        self.events.push(Event::Clear);
    }

    fn render_surface(&mut self, grid: &ScalarGrid, mesh: &Mesh) {
        assert_eq!(grid.width(), mesh.width);
        assert_eq!(grid.height(), mesh.height);
        self.events.push(Event::Surface {
            cols: mesh.width,
            rows: mesh.height,
        });
    }

    fn fix_extents(&mut self, x: (f32, f32), y: (f32, f32)) {
        self.events.push(Event::Extents { x, y });
    }

    fn render_arrows(&mut self, mesh: &Mesh, gradient: &GradientPair, length: f32) -> ArrowHandle {
        assert_eq!(mesh.width, gradient.width);
        assert_eq!(mesh.height, gradient.height);
        let handle = self.next_handle;
        self.next_handle += 1;
        self.events.push(Event::Arrows { handle, length });
        ArrowHandle(handle)
    }

    fn remove_arrows(&mut self, handle: ArrowHandle) {
        self.events.push(Event::Remove { handle: handle.0 });
    }
}

fn fixture_2x3() -> (tempfile::NamedTempFile, String) {
    write_csv_fixture(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
}

#[test]
fn test_full_progression() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    assert_eq!(session.state(), VisualizationState::Empty);
    assert!(!session.controls().plot);

    // Load: Empty -> Loaded, canvas cleared, plot enabled.
    session.load(&mut target, &path).unwrap();
    assert_eq!(session.state(), VisualizationState::Loaded);
    assert!(session.controls().plot);
    assert!(!session.controls().quiver);
    assert_eq!(target.events, vec![Event::Clear]);

    let grid = session.grid().unwrap();
    assert_eq!(grid.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    // Plot: Loaded -> Surfaced, extents pinned, quiver enabled.
    session.render_surface(&mut target);
    assert_eq!(session.state(), VisualizationState::Surfaced);
    assert!(session.controls().quiver);
    assert!(!session.controls().slider);
    assert_eq!(
        &target.events[1..],
        &[
            Event::Surface { cols: 3, rows: 2 },
            Event::Extents {
                x: (0.0, 2.0),
                y: (0.0, 1.0)
            },
        ]
    );

    let mesh = session.mesh().unwrap();
    assert_eq!(mesh.x, vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(mesh.y, vec![0, 0, 0, 1, 1, 1]);

    // Quiver: Surfaced -> Vectored at unit scale, slider enabled.
    session.render_vectors(&mut target);
    assert_eq!(session.state(), VisualizationState::Vectored);
    assert!(session.controls().slider);
    assert_eq!(
        target.events.last(),
        Some(&Event::Arrows {
            handle: 0,
            length: 1.0
        })
    );
    assert_eq!(session.gradient().unwrap().width, 3);

    // Rescale: removes handle 0, draws handle 1 at length 3.
    session.rescale_vectors(&mut target, ScaleFactor::new(3).unwrap());
    assert_eq!(session.state(), VisualizationState::Vectored);
    assert_eq!(session.scale().get(), 3);
    assert_eq!(
        &target.events[4..],
        &[
            Event::Remove { handle: 0 },
            Event::Arrows {
                handle: 1,
                length: 3.0
            },
        ]
    );
}

#[test]
fn test_load_empty_path_stays_empty() {
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    let err = session.load(&mut target, "").unwrap_err();
    assert!(matches!(err, LoadError::EmptyPath));
    assert_eq!(session.state(), VisualizationState::Empty);
    assert!(!session.controls().plot);
    // Nothing touched the canvas.
    assert!(target.events.is_empty());

    let note = Notification::for_load("", &Err(err));
    assert_eq!(note.severity, Severity::Critical);
    assert_eq!(note.message, "No file selected! Try Again.");
}

#[test]
fn test_failed_load_disables_render_actions_but_keeps_data() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    session.render_vectors(&mut target);
    assert_eq!(session.state(), VisualizationState::Vectored);

    // A failed load drops every render gate...
    let err = session.load(&mut target, "missing.csv").unwrap_err();
    assert!(matches!(err, LoadError::ParseFailure { .. }));
    assert_eq!(session.state(), VisualizationState::Empty);
    let controls = session.controls();
    assert!(controls.load);
    assert!(!controls.plot && !controls.quiver && !controls.slider);

    // ...but the previously loaded grid data is unchanged.
    assert_eq!(
        session.grid().unwrap().values(),
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
    );
}

#[test]
fn test_successful_load_resets_derived_state() {
    let (_file1, path1) = fixture_2x3();
    let (_file2, path2) = write_csv_fixture(&[vec![9.0], vec![8.0], vec![7.0]]);
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path1).unwrap();
    session.render_surface(&mut target);
    session.render_vectors(&mut target);

    // Reloading replaces the grid wholesale and drops mesh/gradient/arrows.
    session.load(&mut target, &path2).unwrap();
    assert_eq!(session.state(), VisualizationState::Loaded);
    assert!(session.mesh().is_none());
    assert!(session.gradient().is_none());
    assert_eq!(session.grid().unwrap().height(), 3);
    assert_eq!(target.events.last(), Some(&Event::Clear));
}

#[test]
fn test_render_surface_again_is_idempotent() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    let first: Vec<Event> = target.events[1..].to_vec();

    session.render_surface(&mut target);
    assert_eq!(session.state(), VisualizationState::Surfaced);
    // Same grid, same mesh: the repaint is visually identical.
    assert_eq!(&target.events[3..], first.as_slice());
}

#[test]
fn test_render_surface_from_vectored_keeps_slider_open() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    session.render_vectors(&mut target);

    session.render_surface(&mut target);
    assert_eq!(session.state(), VisualizationState::Vectored);
    assert!(session.controls().slider);
}

#[test]
fn test_render_vectors_again_replaces_geometry() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    session.render_vectors(&mut target);
    session.rescale_vectors(&mut target, ScaleFactor::new(5).unwrap());

    // Re-plotting vectors removes the rescaled geometry and resets to unit
    // length.
    session.render_vectors(&mut target);
    assert_eq!(session.scale().get(), 1);
    assert_eq!(
        &target.events[6..],
        &[
            Event::Remove { handle: 1 },
            Event::Arrows {
                handle: 2,
                length: 1.0
            },
        ]
    );
}

#[test]
fn test_rescale_same_factor_twice_is_stable() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    session.render_vectors(&mut target);

    let gradient_before = session.gradient().unwrap().clone();
    let k = ScaleFactor::new(2).unwrap();
    session.rescale_vectors(&mut target, k);
    session.rescale_vectors(&mut target, k);

    // The gradient is untouched; both rescales drew at the same length.
    assert_eq!(session.gradient().unwrap(), &gradient_before);
    let lengths: Vec<f32> = target
        .events
        .iter()
        .filter_map(|e| match e {
            Event::Arrows { length, .. } => Some(*length),
            _ => None,
        })
        .collect();
    assert_eq!(lengths, vec![1.0, 2.0, 2.0]);
}

#[test]
#[should_panic(expected = "render_surface requires a loaded grid")]
fn test_render_surface_before_load_panics() {
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();
    session.render_surface(&mut target);
}

#[test]
#[should_panic(expected = "render_vectors requires a rendered surface")]
fn test_render_vectors_before_surface_panics() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();
    session.load(&mut target, &path).unwrap();
    session.render_vectors(&mut target);
}

#[test]
#[should_panic(expected = "rescale_vectors requires a rendered vector field")]
fn test_rescale_before_vectors_panics() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();
    session.load(&mut target, &path).unwrap();
    session.render_surface(&mut target);
    session.rescale_vectors(&mut target, ScaleFactor::clamped(2));
}

#[test]
fn test_notification_after_successful_load() {
    let (_file, path) = fixture_2x3();
    let mut target = RecordingTarget::default();
    let mut session = PlotSession::new();

    let result = session.load(&mut target, &path);
    let note = Notification::for_load(&path, &result);
    assert_eq!(note.severity, Severity::Info);
    assert!(note.message.starts_with("Successfully loaded "));
    assert!(note.message.ends_with(".csv."));
}
