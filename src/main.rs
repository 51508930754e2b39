use raw_window_handle::HasDisplayHandle;
use vk_bootstrap::{capabilities, Config, Context, Vulkan};
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Vulkan")
        .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let window_extensions = capabilities::window_extensions(window.display_handle()?.as_raw())?;
    let context = Context::new(Vulkan::load()?, &Config::default(), &window_extensions)?;
    log::info!(
        "ready on {} (graphics queue family {})",
        context.device.physical_device.name,
        context.device.queue().queue_family.index
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        }
        | Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(KeyCode::Escape),
                            ..
                        },
                    ..
                },
            ..
        } => {
            elwt.exit();
        }
        _ => (),
    })?;

    drop(context);
    Ok(())
}
