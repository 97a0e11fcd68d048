// ABOUTME: Main application entry point.
// ABOUTME: Sets up the window and event loop, wires input to the layout reducer.

mod drag;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::window::{Window, WindowAttributes, WindowId};

use drag::{DragSession, SplitBox};
use tw_core::{Config, ContentCard, ContentId};
use tw_layout::{preset, reduce, Action, LayoutNode, WorkspaceSession};
use tw_render::{Renderer, Scene};

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    config: Config,
    table: HashMap<ContentId, ContentCard>,
    tree: LayoutNode,
    preset_index: usize,
    scene: Scene,
    drag: Option<DragSession>,
    mouse_pos: (f64, f64),
}

impl App {
    fn new() -> Self {
        let config = Config::load_or_default();

        let table: HashMap<ContentId, ContentCard> = config
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| (ContentId(i as u32), card.clone()))
            .collect();

        let (preset_index, tree) = match Self::restore_session() {
            Some(session) => (session.preset, session.root),
            None => {
                let index = config.initial_preset;
                match preset(index) {
                    Ok(tree) => (index, tree),
                    Err(e) => {
                        tracing::warn!("Configured preset rejected ({}), using the first", e);
                        (0, preset(0).unwrap_or_else(|_| LayoutNode::leaf(0)))
                    }
                }
            }
        };
        let scene = Scene::build(&tree);

        Self {
            window: None,
            renderer: None,
            config,
            table,
            tree,
            preset_index,
            scene,
            drag: None,
            mouse_pos: (0.0, 0.0),
        }
    }

    fn restore_session() -> Option<WorkspaceSession> {
        let path = WorkspaceSession::default_path()?;
        match WorkspaceSession::load(&path) {
            Ok(session) => {
                tracing::info!("Restored session from {}", path.display());
                Some(session)
            }
            Err(e) => {
                tracing::debug!("No usable session at {}: {}", path.display(), e);
                None
            }
        }
    }

    fn save_session(&self) {
        let Some(path) = WorkspaceSession::default_path() else {
            tracing::warn!("Could not determine state directory, session not saved");
            return;
        };
        let session = WorkspaceSession::new(self.preset_index, self.tree.clone());
        match session.save(&path) {
            Ok(()) => tracing::info!("Session saved to {}", path.display()),
            Err(e) => tracing::error!("Failed to save session: {}", e),
        }
    }

    /// Run one action through the reducer. On success the scene is rebuilt
    /// and a redraw requested; on failure the tree stays as it was.
    fn apply(&mut self, action: &Action) {
        match reduce(&self.tree, action) {
            Ok(next) => {
                if let Action::SelectPreset(index) = action {
                    self.preset_index = *index;
                    tracing::info!("Selected preset {}", index);
                }
                self.tree = next;
                self.scene = Scene::build(&self.tree);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(e) => tracing::error!("Rejected {:?}: {}", action, e),
        }
    }

    fn begin_drag_at(&mut self, x: f32, y: f32) {
        let (Some(window), Some(renderer)) = (&self.window, &self.renderer) else {
            return;
        };
        let (win_w, win_h) = renderer.window_size();
        let band = self.config.separator_px / 2.0 + self.config.grab_px;

        if let Some(sep) = self.scene.separator_at(x, y, win_w, win_h, band) {
            let bounds = SplitBox::new(sep.split_box_px(win_w, win_h));
            self.drag = Some(DragSession::begin(
                Arc::clone(window),
                sep.axis,
                sep.path.clone(),
                bounds,
            ));
            window.request_redraw();
        }
    }

    fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("Drag finished");
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("tileworks")
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(Arc::clone(&window))) {
            Ok(renderer) => renderer,
            Err(e) => {
                tracing::error!("Failed to create renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        tracing::info!(
            "Window created: {}x{}, {} content cards",
            self.config.window_width,
            self.config.window_height,
            self.table.len()
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Drop any live drag before the window goes away
                self.end_drag();
                self.save_session();
                tracing::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(renderer) = &mut self.renderer else {
                    return;
                };
                let active = self.drag.as_ref().map(|d| d.path().to_vec());
                if let Err(e) = renderer.render(
                    &self.scene,
                    &self.table,
                    &self.config.palette,
                    self.config.separator_px,
                    active.as_deref(),
                ) {
                    tracing::error!("Render failed: {}", e);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_pos = (position.x, position.y);
                let action = self
                    .drag
                    .as_ref()
                    .and_then(|drag| drag.pointer_moved(position.x as f32, position.y as f32));
                if let Some(action) = action {
                    self.apply(&action);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            let (x, y) = (self.mouse_pos.0 as f32, self.mouse_pos.1 as f32);
                            self.begin_drag_at(x, y);
                        }
                        ElementState::Released => {
                            self.end_drag();
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Key::Character(c) = &event.logical_key {
                        if let Some(digit) = c.chars().next().and_then(|c| c.to_digit(10)) {
                            if digit >= 1 {
                                self.apply(&Action::SelectPreset(digit as usize - 1));
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting tileworks");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();

    event_loop.run_app(&mut app)?;

    Ok(())
}
