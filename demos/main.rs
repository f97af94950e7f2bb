// Minimal host: wires a `Chipset` to a window so the rasterizer output can
// be eyeballed while developing. Not part of the core library — this is a
// throwaway harness, not a reference host implementation.

use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use vip_core::constants::{Eye, SCREEN_HEIGHT, SCREEN_WIDTH};
use vip_core::host::{ClipRect, CpuLine, EyeSurface, HostCpu};
use vip_core::{Chipset, ChipsetConfig};

struct PixelsSurface<'a> {
    pixels: &'a mut Pixels,
}

impl EyeSurface for PixelsSurface<'_> {
    fn set_pixel(&mut self, x: i32, y: i32, palette_index: u8) {
        if x < 0 || y < 0 || x as usize >= SCREEN_WIDTH || y as usize >= SCREEN_HEIGHT {
            return;
        }
        let idx = (y as usize * SCREEN_WIDTH + x as usize) * 4;
        let gray = match palette_index & 0b11 {
            0 => 0,
            1 => 85,
            2 => 170,
            _ => 255,
        };
        let frame = self.pixels.frame_mut();
        frame[idx..idx + 4].copy_from_slice(&[gray, gray, gray, 0xFF]);
    }

    fn fill(&mut self, palette_index: u8, clip: ClipRect) {
        for y in clip.y0..clip.y1 {
            for x in clip.x0..clip.x1 {
                self.set_pixel(x, y, palette_index);
            }
        }
    }
}

struct NullCpu;
impl HostCpu for NullCpu {
    fn set_interrupt_line(&mut self, _line: CpuLine, _asserted: bool) {}
    fn cycles_now(&self) -> u64 {
        0
    }
    fn pc(&self) -> u32 {
        0
    }
}

struct App {
    window: Option<Window>,
    pixels: Option<Pixels>,
    chipset: Chipset,
    scanline: u16,
}

impl App {
    fn new() -> Self {
        App {
            window: None,
            pixels: None,
            chipset: Chipset::new(ChipsetConfig::default()),
            scanline: 0,
        }
    }

    fn advance_frame(&mut self) {
        let mut cpu = NullCpu;
        for _ in 0..264 {
            self.chipset.scanline_tick(self.scanline, &mut cpu);
            self.scanline = (self.scanline + 1) % 264;
        }

        if let Some(pixels) = &mut self.pixels {
            let mut surface = PixelsSurface { pixels };
            self.chipset.render_eye(Eye::Left, &mut surface);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attrs = Window::default_attributes()
            .with_title("VIP demo")
            .with_inner_size(winit::dpi::LogicalSize::new(SCREEN_WIDTH as f64 * 2.0, SCREEN_HEIGHT as f64 * 2.0));
        let window = event_loop.create_window(attrs).expect("create window");

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface_texture).expect("create pixels surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                self.advance_frame();
                if let Some(pixels) = &self.pixels {
                    let _ = pixels.render();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().expect("create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("run event loop");
}
