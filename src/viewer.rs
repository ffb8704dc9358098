//! Event dispatch over one loaded image.
//!
//! [`Viewer`] owns the viewport, image, fit engine and pan controller for a
//! single document. The shell forwards DOM events to [`Viewer::handle`] in
//! dispatch order and applies the returned [`Response`].

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::fit::{FitEngine, FittingType, Placement};
use crate::geometry::Point;
use crate::host::{Effect, Host, ImageElement, Response};
use crate::image::Image;
use crate::input::{Command, Modifiers, command_for_key};
use crate::pan::PanController;
use crate::rotate::{Anchor, preserve_point, rotate};
use crate::units::Dpr;
use crate::viewport::Viewport;
use crate::zoom::ZoomDirection;

/// Something the host page reported. Positions are CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event<'a> {
    /// The document finished parsing and reset the image's default styles.
    ContentLoaded,
    /// The window was resized, possibly by a browser zoom.
    Resize,
    /// The coordinating component set the browser zoom; the window will
    /// settle at `device_pixel_ratio`. Never echoed back as
    /// [`Effect::SyncZoom`], whichever of this and the resulting
    /// [`Event::Resize`] arrives first.
    HostZoomChanged { device_pixel_ratio: f64 },
    Key {
        /// `KeyboardEvent.code`.
        code: &'a str,
        modifiers: Modifiers,
    },
    PointerDown {
        client: Point,
        /// Something else already handled the press.
        default_prevented: bool,
    },
    PointerMove {
        client: Point,
    },
    PointerUp,
    Click,
    /// The user scrolled the window.
    Scrolled {
        x: f64,
        y: f64,
    },
    /// Step the zoom ladder, keeping the point under `anchor` (or the
    /// viewport center) in place.
    Zoom {
        direction: ZoomDirection,
        anchor: Option<Point>,
    },
}

/// Full-window viewer state for one image.
#[derive(Clone, Debug)]
pub struct Viewer {
    config: ViewerConfig,
    viewport: Viewport,
    image: Image,
    fit: FitEngine,
    pan: PanController,
    /// Window scroll offset in device pixels.
    scroll: Point,
    /// Ratio announced by the coordinator that no resize has reached yet.
    announced_zoom: Option<Dpr>,
}

impl Viewer {
    /// Take over `element`, apply the initial fitting and return the effects
    /// that put it on screen.
    pub fn attach(
        element: &impl ImageElement,
        host: &impl Host,
        config: ViewerConfig,
    ) -> Result<(Self, Response)> {
        config.validate()?;
        let fit = FitEngine::new(config.rules(), config.zoom_ladder()?);
        let image = Image::from_element(element)?;
        let viewport = Viewport::measured(host, config.scrollbar);

        let mut viewer = Self {
            config,
            viewport,
            image,
            fit,
            pan: PanController::new(),
            scroll: Point::ORIGIN,
            announced_zoom: None,
        };
        let mut response = Response::default();
        let placement = viewer
            .fit
            .apply_fitting(FittingType::Initial, &viewer.viewport, &mut viewer.image);
        viewer.render(placement, &mut response);

        let natural = viewer.image.natural();
        tracing::debug!(
            width = natural.width,
            height = natural.height,
            fitting = ?placement.fitting,
            "viewer attached"
        );
        Ok((viewer, response))
    }

    /// Process one event.
    pub fn handle(&mut self, event: Event<'_>, host: &impl Host) -> Response {
        let mut response = Response::default();
        match event {
            Event::ContentLoaded => {
                let placement = self.fit.update(&self.viewport, &mut self.image);
                self.render(placement, &mut response);
            }
            Event::Resize => {
                let before = self.viewport.dpr();
                self.remeasure(host, &mut response);
                response.push(Effect::StopPropagation);
                let after = self.viewport.dpr();
                if after != before {
                    if self.announced_zoom.take() == Some(after) {
                        tracing::debug!(dpr = after.get(), "coordinator zoom applied");
                    } else {
                        tracing::debug!(from = before.get(), to = after.get(), "zoom changed");
                        response.push(Effect::SyncZoom {
                            device_pixel_ratio: after.get(),
                        });
                    }
                }
            }
            Event::HostZoomChanged { device_pixel_ratio } => {
                self.remeasure(host, &mut response);
                // Already applied: the resize it caused is either handled or
                // will see no ratio change.
                self.announced_zoom =
                    Dpr::new(device_pixel_ratio).filter(|&dpr| dpr != self.viewport.dpr());
            }
            Event::Key { code, modifiers } => self.on_key(code, modifiers, &mut response),
            Event::PointerDown {
                client,
                default_prevented,
            } => {
                let scroll = self.viewport.dpr().point_to_css(self.scroll);
                self.pan.pointer_down(scroll, client, default_prevented);
            }
            Event::PointerMove { client } => {
                if let Some(target) = self.pan.pointer_move(client) {
                    let target = self.viewport.dpr().point_to_device(target);
                    self.scroll_to(target, &mut response);
                    response.push(Effect::PreventDefault);
                }
            }
            Event::PointerUp => {
                self.pan.pointer_up();
            }
            Event::Click => response.push(Effect::StopPropagation),
            Event::Scrolled { x, y } => {
                self.scroll = self.viewport.dpr().point_to_device(Point::new(x, y));
            }
            Event::Zoom { direction, anchor } => {
                let anchor = match anchor {
                    Some(css) => Anchor::At(self.viewport.dpr().point_to_device(css)),
                    None => Anchor::Center,
                };
                self.preserve(anchor, &mut response, |fit, viewport, image| {
                    fit.step_zoom(direction, viewport, image)
                });
                response.push(Effect::PreventDefault);
            }
        }
        response
    }

    /// Configuration the viewer was attached with.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Window as of the last measurement.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Displayed image state.
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn fit(&self) -> &FitEngine {
        &self.fit
    }

    /// Drag-to-scroll state.
    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    /// Tracked window scroll offset in device pixels.
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    fn on_key(&mut self, code: &str, modifiers: Modifiers, response: &mut Response) {
        match command_for_key(code, modifiers) {
            Some(Command::Fitting(fitting)) => {
                if self.fit.requested() == fitting && self.fit.zoom() == 1.0 {
                    return;
                }
                self.preserve(Anchor::Center, response, |fit, viewport, image| {
                    Some(fit.apply_fitting(fitting, viewport, image))
                });
            }
            Some(Command::Rotate(direction)) => {
                self.preserve(Anchor::Center, response, |fit, viewport, image| {
                    Some(rotate(direction, fit, viewport, image))
                });
            }
            None => {}
        }
    }

    /// Run an explicit change and scroll so the content under `anchor` stays put.
    fn preserve<F>(&mut self, anchor: Anchor, response: &mut Response, change: F)
    where
        F: FnOnce(&mut FitEngine, &Viewport, &mut Image) -> Option<Placement>,
    {
        let Some((placement, scroll)) = preserve_point(
            anchor,
            self.scroll,
            &mut self.fit,
            &self.viewport,
            &mut self.image,
            change,
        ) else {
            return;
        };
        self.render(placement, response);
        self.scroll_to(scroll, response);
    }

    /// Passive re-fit after the window changed. Scroll is only clamped.
    fn remeasure(&mut self, host: &impl Host, response: &mut Response) {
        let css_scroll = self.viewport.dpr().point_to_css(self.scroll);
        self.viewport.measure(host, self.config.scrollbar);
        let placement = self.fit.update(&self.viewport, &mut self.image);
        self.render(placement, response);
        let scroll = self.viewport.dpr().point_to_device(css_scroll);
        self.scroll = self.viewport.clamp_scroll(&self.image, scroll);
    }

    fn render(&mut self, placement: Placement, response: &mut Response) {
        response.push(Effect::Style(self.image.style(self.viewport.dpr())));
        if self.pan.set_enabled(placement.pan) {
            response.push(Effect::Panning(placement.pan));
        }
    }

    fn scroll_to(&mut self, target: Point, response: &mut Response) {
        self.scroll = self.viewport.clamp_scroll(&self.image, target);
        let css = self.viewport.dpr().point_to_css(self.scroll);
        response.push(Effect::ScrollTo { x: css.x, y: css.y });
    }
}
