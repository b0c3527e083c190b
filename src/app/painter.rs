use std::mem;
use std::path::Path;

use image::RgbaImage;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::providers::{
    BRIGHTNESS_RANGE, CONTRAST_RANGE, NumericInputProvider, TextDraft, TextInputProvider,
};
use crate::app::state::{CanvasConfig, Interaction};
use crate::app::tools::Tool;
use crate::brush_engine::{self, Pen, StrokeState};
use crate::canvas::history::{History, HistorySignal, Snapshot};
use crate::canvas::pixel_buffer::PixelBuffer;
use crate::canvas::text_layer::{TextEdit, TextId, TextLayer};
use crate::error::Result;
use crate::ops::adjustments;
use crate::ops::convolution::{self, Kernel};
use crate::ops::flood_fill::flood_fill;
use crate::utils::color::Color;
use crate::utils::exporter;
use crate::utils::fonts::{FixedMetrics, FontDescriptor, FontMetrics, TextRenderer};
use crate::utils::importer;
use crate::utils::vector::Point;

/// Owns the canvas state and turns user intents into edits.
///
/// Every completed edit pushes exactly one history snapshot; intermediate
/// preview frames never do.
pub struct CanvasEngine {
    config: CanvasConfig,
    pixels: PixelBuffer,
    text: TextLayer,
    history: History,

    tool: Tool,
    pen: Pen,
    text_color: Color,
    text_font: FontDescriptor,

    interaction: Interaction,
    selected_text: Option<TextId>,

    metrics: Box<dyn FontMetrics>,
    rng: StdRng,
}

impl CanvasEngine {
    /// Blank canvas using the built-in fixed-advance font metrics.
    pub fn new(config: CanvasConfig) -> Self {
        Self::with_metrics(config, Box::new(FixedMetrics))
    }

    pub fn with_metrics(config: CanvasConfig, metrics: Box<dyn FontMetrics>) -> Self {
        let pixels = PixelBuffer::new(config.width, config.height, config.background);
        let text = TextLayer::new();
        let history = History::new(config.history_depth, Snapshot::capture(&pixels, &text));
        let rng = match config.airbrush_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        log::debug!(
            "canvas created {}x{} (history depth {})",
            pixels.width(),
            pixels.height(),
            history.capacity()
        );
        Self {
            pen: Pen::new(config.pen_color, config.pen_width.max(1)),
            text_color: config.text_color,
            text_font: config.text_font.clone(),
            config,
            pixels,
            text,
            history,
            tool: Tool::default(),
            interaction: Interaction::Idle,
            selected_text: None,
            metrics,
            rng,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn text_layer(&self) -> &TextLayer {
        &self.text
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn selected_text(&self) -> Option<TextId> {
        self.selected_text
    }

    pub fn is_interacting(&self) -> bool {
        !self.interaction.is_idle()
    }

    // ----- settings -----

    /// Switch tools. Ignored while a press-drag interaction is in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.is_interacting() {
            log::warn!("ignoring switch to {} during an interaction", tool.label());
            return;
        }
        self.tool = tool;
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.pen.width = width.max(1);
    }

    /// Style used for the next inserted text.
    pub fn set_text_style(&mut self, color: Color, font: FontDescriptor) {
        self.text_color = color;
        self.text_font = font;
    }

    fn commit(&mut self, what: &str) {
        self.history.push_snapshot(&self.pixels, &self.text);
        log::debug!(
            "committed {what} (undo depth {})",
            self.history.undo_len()
        );
    }

    fn refuse_while_interacting(&self, what: &str) -> bool {
        if self.is_interacting() {
            log::warn!("{what} requested during an interaction; ignored");
            return true;
        }
        false
    }

    // ----- freehand strokes -----

    fn stroke_pen(&self) -> Pen {
        match self.tool {
            Tool::Eraser => Pen::new(self.config.background, self.pen.width),
            _ => self.pen,
        }
    }

    fn spray(&mut self, pos: Point) {
        brush_engine::airbrush(
            &mut self.pixels,
            pos,
            self.pen.color,
            self.pen.width,
            &mut self.rng,
        );
    }

    /// Press with a freehand tool: paints one pen dab at `pos`. The airbrush
    /// only starts spraying once the pointer moves.
    pub fn begin_stroke(&mut self, pos: Point) {
        if !self.tool.is_continuous() || self.refuse_while_interacting("stroke") {
            return;
        }
        let mut stroke = StrokeState::new();
        let pen = self.stroke_pen();
        stroke.add_point(&mut self.pixels, &pen, pos);
        log::debug!("{} stroke started at {:?}", self.tool.label(), pos);
        self.interaction = Interaction::Stroke(stroke);
    }

    /// Drag with a freehand tool: connects from the previous sample, or sprays.
    pub fn continue_stroke(&mut self, pos: Point) {
        if self.tool == Tool::Airbrush {
            if let Interaction::Stroke(stroke) = &mut self.interaction {
                stroke.last_pos = Some(pos);
                self.spray(pos);
            }
            return;
        }
        let pen = self.stroke_pen();
        if let Interaction::Stroke(stroke) = &mut self.interaction {
            stroke.add_point(&mut self.pixels, &pen, pos);
        }
    }

    /// Release: the whole stroke becomes one history entry.
    pub fn end_stroke(&mut self) {
        if let Interaction::Stroke(mut stroke) = mem::replace(&mut self.interaction, Interaction::Idle) {
            stroke.end();
            self.commit("stroke");
        }
    }

    // ----- shapes -----

    /// Press with a shape tool: remember the anchor and the untouched canvas.
    pub fn begin_shape(&mut self, pos: Point) {
        let Some(kind) = self.tool.shape_kind() else {
            return;
        };
        if self.refuse_while_interacting("shape") {
            return;
        }
        self.interaction = Interaction::Shape {
            kind,
            anchor: pos,
            scratch: self.pixels.clone(),
        };
    }

    /// Redraw the preview from the untouched canvas so frames never accumulate.
    pub fn update_shape(&mut self, pos: Point) {
        if let Interaction::Shape {
            kind,
            anchor,
            scratch,
        } = &self.interaction
        {
            self.pixels.clone_from(scratch);
            kind.draw(&mut self.pixels, *anchor, pos, &self.pen);
        }
    }

    pub fn end_shape(&mut self, pos: Point) {
        if let Interaction::Shape {
            kind,
            anchor,
            scratch,
        } = mem::replace(&mut self.interaction, Interaction::Idle)
        {
            self.pixels = scratch;
            kind.draw(&mut self.pixels, anchor, pos, &self.pen);
            self.commit("shape");
        }
    }

    // ----- bucket -----

    /// Flood fill from `pos` with the pen color. Returns whether anything changed.
    pub fn fill_at(&mut self, pos: Point) -> bool {
        if self.refuse_while_interacting("fill") {
            return false;
        }
        if !self.pixels.contains(pos.x, pos.y) {
            log::debug!("fill seed {:?} is off the canvas", pos);
            return false;
        }
        let filled = flood_fill(&mut self.pixels, pos, self.pen.color);
        if filled == 0 {
            return false;
        }
        log::debug!("filled {filled} pixels from {:?}", pos);
        self.commit("fill");
        true
    }

    // ----- text -----

    /// Ask the host for text and place it with its baseline at `pos`.
    /// Cancelling or answering with empty text leaves everything untouched.
    pub fn insert_text_at(
        &mut self,
        pos: Point,
        provider: &mut dyn TextInputProvider,
    ) -> Option<TextId> {
        if self.refuse_while_interacting("text insert") {
            return None;
        }
        let draft = TextDraft {
            text: String::new(),
            font: self.text_font.clone(),
            color: self.text_color,
        };
        let answer = provider.request_text(&draft)?;
        if answer.text.is_empty() {
            return None;
        }
        let id = self.text.insert(
            answer.text,
            pos,
            answer.color,
            answer.font,
            self.metrics.as_ref(),
        );
        self.commit("text insert");
        Some(id)
    }

    /// Hit-test the text layer and make the topmost hit the selection.
    pub fn select_text_at(&mut self, pos: Point) -> Option<TextId> {
        self.selected_text = self.text.hit_test(pos);
        self.selected_text
    }

    /// Press with the text selector: selects and grabs the item under `pos`.
    pub fn begin_drag(&mut self, pos: Point) -> bool {
        if self.refuse_while_interacting("text drag") {
            return false;
        }
        let Some(id) = self.select_text_at(pos) else {
            return false;
        };
        let Some(item) = self.text.get(id) else {
            return false;
        };
        self.interaction = Interaction::Drag {
            id,
            grab: pos - item.pos,
            start: item.pos,
        };
        true
    }

    /// Move the grabbed item live; no history until release.
    pub fn drag_to(&mut self, pos: Point) {
        if let Interaction::Drag { id, grab, .. } = self.interaction {
            self.text.move_to(id, pos - grab);
        }
    }

    /// Release: records one snapshot if the item actually moved.
    pub fn end_drag(&mut self) -> bool {
        let Interaction::Drag { id, start, .. } =
            mem::replace(&mut self.interaction, Interaction::Idle)
        else {
            return false;
        };
        let moved = self.text.get(id).is_some_and(|item| item.pos != start);
        if moved {
            self.commit("text move");
        }
        moved
    }

    /// Edit every property of the selected item at once. All-or-nothing:
    /// cancellation or an empty text answer changes nothing.
    pub fn edit_selected_text(&mut self, provider: &mut dyn TextInputProvider) -> bool {
        if self.refuse_while_interacting("text edit") {
            return false;
        }
        let Some(id) = self.selected_text else {
            return false;
        };
        let Some(item) = self.text.get(id) else {
            return false;
        };
        let draft = TextDraft {
            text: item.text.clone(),
            font: item.font.clone(),
            color: item.color,
        };
        let Some(answer) = provider.request_text(&draft) else {
            return false;
        };
        if answer.text.is_empty() {
            return false;
        }
        let edit = TextEdit {
            text: Some(answer.text),
            font: Some(answer.font),
            color: Some(answer.color),
        };
        if !self.text.edit(id, edit, self.metrics.as_ref()) {
            return false;
        }
        self.commit("text edit");
        true
    }

    /// Double-click: select whatever is under `pos` and open the full edit.
    pub fn edit_text_at(&mut self, pos: Point, provider: &mut dyn TextInputProvider) -> bool {
        if self.select_text_at(pos).is_none() {
            return false;
        }
        self.edit_selected_text(provider)
    }

    // ----- filters -----

    pub fn apply_brightness(&mut self, delta: i32) {
        if self.refuse_while_interacting("brightness") {
            return;
        }
        adjustments::apply_brightness(&mut self.pixels, delta);
        self.commit("brightness");
    }

    pub fn apply_contrast(&mut self, factor: f32) {
        if self.refuse_while_interacting("contrast") {
            return;
        }
        adjustments::apply_contrast(&mut self.pixels, factor);
        self.commit("contrast");
    }

    /// Box blur of `size x size`; see [`Kernel::box_blur`] for how odd and
    /// oversized values are treated.
    pub fn apply_blur(&mut self, size: usize) {
        self.apply_kernel(&Kernel::box_blur(size), "blur");
    }

    /// Box blur with the configured default size.
    pub fn apply_default_blur(&mut self) {
        self.apply_blur(self.config.blur_size);
    }

    pub fn apply_sharpen(&mut self) {
        self.apply_kernel(&Kernel::sharpen(), "sharpen");
    }

    /// Run any convolution kernel over the canvas as one edit.
    pub fn apply_kernel(&mut self, kernel: &Kernel, what: &str) {
        if self.refuse_while_interacting(what) {
            return;
        }
        self.pixels = convolution::convolve(&self.pixels, kernel);
        self.commit(what);
    }

    /// Ask for a brightness delta and apply it. Returns false on cancel.
    pub fn prompt_brightness(&mut self, provider: &mut dyn NumericInputProvider) -> bool {
        let Some(delta) = provider.request_int(&BRIGHTNESS_RANGE) else {
            return false;
        };
        self.apply_brightness(BRIGHTNESS_RANGE.sanitize(delta));
        true
    }

    /// Ask for a contrast factor and apply it. Returns false on cancel.
    pub fn prompt_contrast(&mut self, provider: &mut dyn NumericInputProvider) -> bool {
        let Some(factor) = provider.request_float(&CONTRAST_RANGE) else {
            return false;
        };
        self.apply_contrast(CONTRAST_RANGE.sanitize(factor));
        true
    }

    // ----- history -----

    fn restore(&mut self, snapshot: Snapshot) {
        self.pixels = snapshot.pixels;
        self.text = snapshot.text;
        self.config.width = self.pixels.width();
        self.config.height = self.pixels.height();
        self.selected_text = None;
        self.interaction = Interaction::Idle;
    }

    pub fn undo(&mut self) -> std::result::Result<(), HistorySignal> {
        match self.history.undo() {
            Ok(snapshot) => {
                self.restore(snapshot);
                Ok(())
            }
            Err(signal) => {
                log::info!("{signal}");
                Err(signal)
            }
        }
    }

    pub fn redo(&mut self) -> std::result::Result<(), HistorySignal> {
        match self.history.redo() {
            Ok(snapshot) => {
                self.restore(snapshot);
                Ok(())
            }
            Err(signal) => {
                log::info!("{signal}");
                Err(signal)
            }
        }
    }

    // ----- canvas size and file i/o -----

    /// Resize the canvas, keeping content at the top-left. Sizes below 1 become 1.
    pub fn set_canvas_size(&mut self, width: usize, height: usize) {
        if self.refuse_while_interacting("resize") {
            return;
        }
        self.pixels = self.pixels.resize(width, height);
        self.config.width = self.pixels.width();
        self.config.height = self.pixels.height();
        self.commit("resize");
    }

    /// Decode `path` and fit it onto the canvas. On failure nothing changes.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let decoded = importer::decode_path(path).inspect_err(|e| {
            log::error!("failed to load {}: {e}", path.display());
        })?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        self.import_image(&decoded);
        Ok(())
    }

    /// Same as [`load_image`](Self::load_image) for encoded bytes already in memory.
    pub fn import_image_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let decoded = importer::decode_bytes(bytes).inspect_err(|e| {
            log::error!("failed to decode image bytes: {e}");
        })?;
        self.import_image(&decoded);
        Ok(())
    }

    /// Scale `src` to fit, center it over white and make it the canvas.
    /// The text layer is kept.
    pub fn import_image(&mut self, src: &RgbaImage) {
        if self.refuse_while_interacting("image import") {
            return;
        }
        self.pixels =
            importer::compose_onto_canvas(src, self.pixels.width(), self.pixels.height());
        self.commit("image load");
    }

    /// Flatten text over the pixels and write the result. State is untouched
    /// whether or not the write succeeds.
    pub fn save_image(&self, path: &Path, renderer: &dyn TextRenderer) -> Result<()> {
        exporter::export_canvas(&self.pixels, &self.text, renderer, path)
            .inspect(|_| log::info!("saved {}", path.display()))
            .inspect_err(|e| log::error!("failed to save {}: {e}", path.display()))
    }
}
