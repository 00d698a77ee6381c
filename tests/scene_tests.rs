// Host-side tests for scene input handling and the per-tick controller.

use curve_core::{
    default_control_points, ConfigError, CurveRenderer, FrameGovernor, FrameView, GovernorConfig,
    GovernorEvent, ManualClock, PointerInput, QualityLevel, SceneController, SceneState,
    SpringParams,
};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
struct Drawn {
    level: QualityLevel,
    curve_points: usize,
    tangents: usize,
    first: Vec2,
    last: Vec2,
    pressed: bool,
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Drawn>,
}

impl CurveRenderer for RecordingRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames.push(Drawn {
            level: frame.level,
            curve_points: frame.curve.len(),
            tangents: frame.tangents.len(),
            first: frame.curve[0],
            last: frame.curve[frame.curve.len() - 1],
            pressed: frame.pointer.pressed,
        });
    }
}

fn controller_at(level: QualityLevel) -> SceneController {
    let governor = FrameGovernor::new(GovernorConfig {
        initial_level: level,
        ..GovernorConfig::default()
    })
    .unwrap();
    SceneController::new(SceneState::default(), governor)
}

#[test]
fn new_scene_uses_default_layout_at_rest() {
    let scene = SceneState::default();
    let points = default_control_points();
    assert_eq!(scene.control_points, points);
    assert_eq!(scene.springs[0].position, points[1]);
    assert_eq!(scene.springs[1].position, points[2]);
    assert_eq!(scene.springs[0].target, points[1]);
    assert!(!scene.pointer.pressed);
}

#[test]
fn mouse_move_only_targets_while_pressed() {
    let mut scene = SceneState::default();
    let rest = scene.springs[0].target;

    scene.apply_pointer(PointerInput::MouseMove { x: 10.0, y: 20.0 });
    assert_eq!(scene.pointer.position(), Vec2::new(10.0, 20.0));
    assert_eq!(scene.springs[0].target, rest);

    scene.apply_pointer(PointerInput::MouseDown);
    assert!(scene.pointer.pressed);
    scene.apply_pointer(PointerInput::MouseMove { x: 30.0, y: 40.0 });
    assert_eq!(scene.springs[0].target, Vec2::new(30.0, 40.0));

    scene.apply_pointer(PointerInput::MouseUp);
    scene.apply_pointer(PointerInput::MouseMove { x: 50.0, y: 60.0 });
    assert_eq!(scene.springs[0].target, Vec2::new(30.0, 40.0));

    scene.apply_pointer(PointerInput::MouseDown);
    scene.apply_pointer(PointerInput::MouseLeave);
    assert!(!scene.pointer.pressed);
}

#[test]
fn touch_start_presses_and_touch_move_always_targets() {
    let mut scene = SceneState::default();
    let rest = scene.springs[0].target;

    scene.apply_pointer(PointerInput::TouchStart { x: 5.0, y: 6.0 });
    assert!(scene.pointer.pressed);
    assert_eq!(scene.pointer.position(), Vec2::new(5.0, 6.0));
    assert_eq!(scene.springs[0].target, rest);

    scene.apply_pointer(PointerInput::MouseUp);
    scene.apply_pointer(PointerInput::TouchMove { x: 7.0, y: 8.0 });
    assert_eq!(scene.springs[0].target, Vec2::new(7.0, 8.0));
    // Spring 1 is never driven by input directly.
    assert_eq!(scene.springs[1].target, default_control_points()[2]);
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let mut scene = SceneState::default();
    scene.apply_pointer(PointerInput::MouseDown);
    scene.apply_pointer(PointerInput::MouseMove { x: 1.0, y: 2.0 });
    scene.apply_pointer(PointerInput::MouseMove {
        x: f32::NAN,
        y: 3.0,
    });
    scene.apply_pointer(PointerInput::TouchMove {
        x: 4.0,
        y: f32::INFINITY,
    });
    assert_eq!(scene.pointer.position(), Vec2::new(1.0, 2.0));
    assert_eq!(scene.springs[0].target, Vec2::new(1.0, 2.0));
}

#[test]
fn recalculate_snaps_target_to_pointer() {
    let mut scene = SceneState::default();
    scene.apply_pointer(PointerInput::MouseMove { x: 90.0, y: 80.0 });
    scene.recalculate();
    assert_eq!(scene.springs[0].target, Vec2::new(90.0, 80.0));
}

#[test]
fn step_physics_publishes_springs_as_interior_points() {
    let mut scene = SceneState::default();
    scene.apply_pointer(PointerInput::TouchMove { x: 300.0, y: 400.0 });
    for _ in 0..10 {
        scene.step_physics(1.0 / 60.0);
    }
    assert_eq!(scene.control_points[1], scene.springs[0].position);
    assert_eq!(scene.control_points[2], scene.springs[1].position);
    assert_ne!(scene.control_points[1], default_control_points()[1]);
    // Spring 1's target trails spring 0.
    assert_ne!(scene.springs[1].target, default_control_points()[2]);
    // End points never move.
    assert_eq!(scene.control_points[0], default_control_points()[0]);
    assert_eq!(scene.control_points[3], default_control_points()[3]);
}

#[test]
fn slider_setters_validate_and_apply_to_both_springs() {
    let mut scene = SceneState::default();
    scene.set_stiffness(0.4).unwrap();
    scene.set_damping(0.2).unwrap();
    for s in &scene.springs {
        assert_eq!(s.stiffness, 0.4);
        assert_eq!(s.damping, 0.2);
    }
    assert!(matches!(
        scene.set_stiffness(2.0),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        scene.set_damping(f32::NAN),
        Err(ConfigError::NonFinite { .. })
    ));
    assert_eq!(scene.params(), SpringParams::new(0.4, 0.2).unwrap());
}

#[test]
fn reinitialize_keeps_params_and_pointer() {
    let mut scene = SceneState::new(SpringParams::new(0.5, 0.5).unwrap());
    scene.apply_pointer(PointerInput::TouchStart { x: 1.0, y: 1.0 });
    scene.apply_pointer(PointerInput::TouchMove { x: 250.0, y: 250.0 });
    for _ in 0..30 {
        scene.step_physics(1.0 / 60.0);
    }
    scene.reinitialize();
    assert_eq!(scene.control_points, default_control_points());
    assert_eq!(scene.springs[0].target, default_control_points()[1]);
    assert_eq!(scene.springs[0].stiffness, 0.5);
    assert_eq!(scene.pointer.position(), Vec2::new(250.0, 250.0));
}

#[test]
fn tick_skips_without_touching_physics() {
    let mut controller = SceneController::default();
    let mut clock = ManualClock::new(0.0);
    let mut renderer = RecordingRenderer::default();
    controller
        .scene
        .apply_pointer(PointerInput::TouchMove { x: 0.0, y: 0.0 });

    assert!(!controller.tick(&mut clock, &mut renderer, &mut ()));
    clock.advance(10.0);
    assert!(!controller.tick(&mut clock, &mut renderer, &mut ()));
    assert!(renderer.frames.is_empty());
    assert_eq!(controller.scene.control_points, default_control_points());

    clock.advance(10.0);
    assert!(controller.tick(&mut clock, &mut renderer, &mut ()));
    assert_eq!(renderer.frames.len(), 1);
    assert_ne!(controller.scene.control_points[1], default_control_points()[1]);
}

#[test]
fn frame_view_matches_active_profile() {
    for (level, points, tangents) in [
        (QualityLevel::Low, 51, 1),
        (QualityLevel::Medium, 101, 3),
        (QualityLevel::High, 201, 5),
    ] {
        let mut controller = controller_at(level);
        let mut clock = ManualClock::new(20.0);
        let mut renderer = RecordingRenderer::default();
        assert!(controller.tick(&mut clock, &mut renderer, &mut ()));
        let drawn = &renderer.frames[0];
        assert_eq!(drawn.level, level);
        assert_eq!(drawn.curve_points, points);
        assert_eq!(drawn.tangents, tangents);
        assert_eq!(drawn.first, default_control_points()[0]);
        assert_eq!(drawn.last, default_control_points()[3]);
    }
}

#[test]
fn slow_ticks_lower_quality_through_the_clock() {
    let mut controller = SceneController::default();
    let mut clock = ManualClock::new(0.0);
    // Gate read and completion read of a tick land 20 ms apart.
    clock.advance_per_read_ms = 20.0;
    let mut renderer = RecordingRenderer::default();
    let mut events: Vec<GovernorEvent> = Vec::new();

    for _ in 0..6 {
        clock.advance(17.0);
        assert!(controller.tick(&mut clock, &mut renderer, &mut events));
    }
    assert_eq!(controller.governor.level(), QualityLevel::Medium);
    assert!(events.contains(&GovernorEvent::WarningShown));
    assert!(renderer.frames.iter().all(|f| f.level == QualityLevel::High));

    clock.advance(17.0);
    assert!(controller.tick(&mut clock, &mut renderer, &mut events));
    assert_eq!(renderer.frames.last().map(|f| f.level), Some(QualityLevel::Medium));
}

#[test]
fn controller_reset_restores_layout_and_quality() {
    let mut controller = controller_at(QualityLevel::Low);
    let mut clock = ManualClock::new(0.0);
    let mut renderer = RecordingRenderer::default();
    controller
        .scene
        .apply_pointer(PointerInput::TouchStart { x: 10.0, y: 10.0 });
    controller
        .scene
        .apply_pointer(PointerInput::TouchMove { x: 600.0, y: 10.0 });
    for _ in 0..20 {
        clock.advance(17.0);
        controller.tick(&mut clock, &mut renderer, &mut ());
    }
    assert_ne!(controller.scene.control_points, default_control_points());

    controller.reset();
    assert_eq!(controller.scene.control_points, default_control_points());
    assert_eq!(controller.governor.level(), QualityLevel::High);
    assert_eq!(controller.governor.slow_frame_score(), 0.0);
    assert_eq!(controller.governor.fast_frame_score(), 0.0);
    assert!(controller.scene.pointer.pressed);
}

/// Clock shared with a renderer so the renderer can spend simulated time.
#[derive(Clone, Default)]
struct SharedClock(Rc<Cell<f64>>);

impl SharedClock {
    fn spend(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl curve_core::Clock for SharedClock {
    fn now_ms(&mut self) -> f64 {
        self.0.get()
    }
}

/// Renderer that costs `draw_ms` of work inside `render`.
struct TimedRenderer {
    clock: SharedClock,
    draw_ms: f64,
}

impl CurveRenderer for TimedRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {
        self.clock.spend(self.draw_ms);
    }
}

/// Run ticks at 60 Hz; `present_ms` is spent after each tick returns.
fn run_frames(draw_ms: f64, present_ms: f64) -> (QualityLevel, Vec<GovernorEvent>) {
    let mut controller = SceneController::default();
    let mut clock = SharedClock::default();
    let mut renderer = TimedRenderer {
        clock: clock.clone(),
        draw_ms,
    };
    let mut events: Vec<GovernorEvent> = Vec::new();
    let frame = 1000.0 / 60.0;
    for k in 1..=300 {
        let start = k as f64 * frame + 0.5;
        if clock.0.get() < start {
            clock.0.set(start);
        }
        if controller.tick(&mut clock, &mut renderer, &mut events) {
            clock.spend(present_ms);
        }
    }
    (controller.governor.level(), events)
}

#[test]
fn time_spent_after_tick_is_not_frame_cost() {
    // Cheap draw followed by a vsync-length wait in presentation.
    let (level, events) = run_frames(2.0, 16.0);
    assert_eq!(level, QualityLevel::High);
    assert!(!events.contains(&GovernorEvent::WarningShown));
}

#[test]
fn time_spent_inside_render_is_frame_cost() {
    let (level, events) = run_frames(20.0, 0.0);
    assert_eq!(level, QualityLevel::Low);
    assert!(events.contains(&GovernorEvent::WarningShown));
}
