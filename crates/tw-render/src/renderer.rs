// ABOUTME: Frame assembly for the tile workspace.
// ABOUTME: Turns a scene into quads and paints them in a single pass.

use std::sync::Arc;
use winit::window::Window;

use tw_core::config::Palette;
use tw_core::ContentTable;
use tw_layout::Step;

use crate::gpu::GpuState;
use crate::quad_pipeline::{Quad, QuadPipeline};
use crate::Scene;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),

    #[error("Failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("Failed to acquire device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("No suitable GPU adapter found")]
    NoAdapter,
}

pub struct Renderer {
    gpu: GpuState,
    quad_pipeline: QuadPipeline,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let gpu = GpuState::new(window).await?;
        let quad_pipeline = QuadPipeline::new(&gpu.device, gpu.config.format);

        Ok(Self { gpu, quad_pipeline })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn window_size(&self) -> (f32, f32) {
        (self.gpu.size.0 as f32, self.gpu.size.1 as f32)
    }

    /// Paint one frame: pane cards, then separator bars on top. The
    /// separator addressed by `active` (the one being dragged) gets the
    /// highlight color. Panes whose content id is absent from the table
    /// draw nothing; the background shows through.
    pub fn render(
        &mut self,
        scene: &Scene,
        table: &dyn ContentTable,
        palette: &Palette,
        separator_px: f32,
        active: Option<&[Step]>,
    ) -> Result<(), RenderError> {
        let (win_w, win_h) = self.window_size();

        let mut quads = Vec::with_capacity(scene.panes.len() + scene.separators.len());
        for pane in &scene.panes {
            if let Some(card) = table.get(pane.content) {
                let (x, y, w, h) = pane.rect.to_px(win_w, win_h);
                quads.push(Quad {
                    x,
                    y,
                    w,
                    h,
                    color: card.color.as_array(),
                });
            }
        }
        for sep in &scene.separators {
            let (x, y, w, h) = sep.bar_px(win_w, win_h, separator_px);
            let color = if active == Some(sep.path.as_slice()) {
                palette.separator_active
            } else {
                palette.separator
            };
            quads.push(Quad {
                x,
                y,
                w,
                h,
                color: color.as_array(),
            });
        }

        self.quad_pipeline.update_screen_size(&self.gpu.queue, win_w, win_h);
        self.quad_pipeline.prepare(&self.gpu.queue, &quads);

        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Reconfigure and let the next frame pick it up
                self.gpu.resize(self.gpu.size.0, self.gpu.size.1);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let bg = palette.background;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Tile Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: bg.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.quad_pipeline.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
