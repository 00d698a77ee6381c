use curve_core::{
    GovernorEvent, GovernorObserver, InstantClock, PointerInput, SceneController,
};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::Key,
    window::WindowBuilder,
};

mod constants;
mod draw;
mod gpu;
mod keys;

use constants::{PARAM_NUDGE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Governor telemetry routed to the log and the window title.
#[derive(Default)]
struct LogTelemetry {
    pending_title: Option<String>,
}

impl GovernorObserver for LogTelemetry {
    fn on_event(&mut self, event: &GovernorEvent) {
        match *event {
            GovernorEvent::Telemetry { fps, band, level } => {
                log::debug!("[telemetry] {} fps ({:?}), quality {}", fps, band, level);
                self.pending_title = Some(format!("springcurve | {} FPS | Quality: {}", fps, level));
            }
            GovernorEvent::QualityChanged { from, to } => {
                log::info!("[telemetry] quality {} -> {}", from, to);
            }
            GovernorEvent::WarningShown => log::warn!("[telemetry] quality lowered to maintain 60 FPS"),
            GovernorEvent::WarningHidden => log::info!("[telemetry] frame rate recovered"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("springcurve (native)")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window))?;
    let mut controller = SceneController::default();
    let mut clock = InstantClock::new();
    let mut telemetry = LogTelemetry::default();
    log::info!("[native] R reset, [ ] stiffness, - = damping");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                controller.scene.apply_pointer(PointerInput::MouseMove {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }
            WindowEvent::CursorLeft { .. } => {
                controller.scene.apply_pointer(PointerInput::MouseLeave);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let input = match state {
                    ElementState::Pressed => PointerInput::MouseDown,
                    ElementState::Released => PointerInput::MouseUp,
                };
                controller.scene.apply_pointer(input);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(ref text),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if let Some(action) = keys::key_action(text.as_str(), PARAM_NUDGE) {
                    keys::apply_key_action(&mut controller, action);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            controller.tick(&mut clock, &mut gpu, &mut telemetry);
            if let Some(title) = telemetry.pending_title.take() {
                gpu.window.set_title(&title);
            }
            // Outside the measured tick: the acquire may wait for vsync.
            match gpu.present() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    gpu.resize(gpu.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] surface error: {:?}", e),
            }
            gpu.window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
