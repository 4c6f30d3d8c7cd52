use ft_text::galley::paint_galley;
use ft_text::{
    render_fading_text, resolve_color, BlurLineWidth, EguiLayoutEngine, FadeConfig, GalleyLayout,
    LayoutError, LineLimits, Rendered, TextParams,
};
use egui::{
    pos2, vec2, Align, Color32, FontFamily, Response, Sense, Stroke, TextStyle, Ui, Widget,
    WidgetInfo, WidgetType,
};

/// What [`FadingLabel::show`] produced.
pub struct FadingLabelOutput {
    pub response: Response,
    /// The text did not fit and its last line fades out.
    pub faded: bool,
    /// Layout passes used this frame.
    pub passes: usize,
}

/// A label that fades out the tail of its last line when the text does not
/// fit in `max_lines`, instead of ending it with "…".
///
/// ```no_run
/// # fn show(ui: &mut egui::Ui) -> Result<(), ft_text::ConfigError> {
/// use ft_text::BlurLineWidth;
/// use ft_ui::FadingLabel;
///
/// ui.add(
///     FadingLabel::new("Hello Lorem ipsum dolor sit amet")
///         .max_lines(3)
///         .font_size(16.0)
///         .blur_line_width(BlurLineWidth::new(0.2)?),
/// );
/// # Ok(()) }
/// ```
#[must_use = "You should put this widget in an ui with `ui.add(widget);`"]
pub struct FadingLabel<'a> {
    text: String,
    color: Option<Color32>,
    text_style: Option<TextStyle>,
    font_size: Option<f32>,
    font_family: Option<FontFamily>,
    italics: bool,
    letter_spacing: f32,
    underline: Stroke,
    strikethrough: Stroke,
    align: Align,
    line_height: Option<f32>,
    limits: LineLimits,
    blur_line_width: BlurLineWidth,
    on_layout: Option<Box<dyn FnMut(&GalleyLayout) + 'a>>,
}

impl<'a> FadingLabel<'a> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            text_style: None,
            font_size: None,
            font_family: None,
            italics: false,
            letter_spacing: 0.0,
            underline: Stroke::NONE,
            strikethrough: Stroke::NONE,
            align: Align::LEFT,
            line_height: None,
            limits: LineLimits::default(),
            blur_line_width: BlurLineWidth::default(),
            on_layout: None,
        }
    }

    /// Overrides the text color of the style.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Defaults to [`TextStyle::Body`].
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// egui fonts have no weight, pick a bold face through [`FontFamily::Name`].
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.font_family = Some(family);
        self
    }

    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn underline(mut self, stroke: Stroke) -> Self {
        self.underline = stroke;
        self
    }

    pub fn strikethrough(mut self, stroke: Stroke) -> Self {
        self.strikethrough = stroke;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.limits.max_lines = max_lines;
        self
    }

    pub fn min_lines(mut self, min_lines: usize) -> Self {
        self.limits.min_lines = min_lines;
        self
    }

    pub fn blur_line_width(mut self, blur_line_width: BlurLineWidth) -> Self {
        self.blur_line_width = blur_line_width;
        self
    }

    /// Called with the layout that gets painted, once per frame.
    pub fn on_layout(mut self, on_layout: impl FnMut(&GalleyLayout) + 'a) -> Self {
        self.on_layout = Some(Box::new(on_layout));
        self
    }

    /// Like [`Widget::ui`], but hands layout failures back to the caller.
    pub fn show(self, ui: &mut Ui) -> Result<FadingLabelOutput, LayoutError> {
        let Self {
            text,
            color,
            text_style,
            font_size,
            font_family,
            italics,
            letter_spacing,
            underline,
            strikethrough,
            align,
            line_height,
            limits,
            blur_line_width,
            mut on_layout,
        } = self;

        let mut font_id = text_style.unwrap_or(TextStyle::Body).resolve(ui.style());
        if let Some(size) = font_size {
            font_id.size = size;
        }
        if let Some(family) = font_family {
            font_id.family = family;
        }

        let visuals = ui.visuals();
        let base_color = resolve_color(color, visuals.override_text_color, visuals.text_color());
        let max_width = ui.available_width().max(0.0);
        let row_height = line_height.unwrap_or_else(|| ui.fonts(|fonts| fonts.row_height(&font_id)));

        let params = TextParams {
            font_id,
            letter_spacing,
            line_height,
            italics,
            underline,
            strikethrough,
            align,
            max_width,
        };
        let mut engine = EguiLayoutEngine::new(ui.ctx(), params, base_color);
        let config = FadeConfig::new(base_color)
            .with_blur_line_width(blur_line_width)
            .with_limits(limits);

        let rendered = render_fading_text(&mut engine, &text, config, |layout| {
            if let Some(on_layout) = on_layout.as_mut() {
                on_layout(layout);
            }
        })?;
        let faded = rendered.is_faded();
        let Rendered {
            display,
            layout,
            passes,
            ..
        } = rendered;

        let reserved_lines = limits.min_lines.min(limits.max_lines) as f32;
        let height = layout.size().y.max(reserved_lines * row_height);
        let width = if align != Align::LEFT && max_width.is_finite() {
            max_width
        } else {
            layout.size().x
        };

        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Label, &text));

        if ui.is_rect_visible(rect) {
            let x = match align {
                Align::Min => rect.left(),
                Align::Center => rect.center().x,
                Align::Max => rect.right(),
            };
            paint_galley(ui.painter(), pos2(x, rect.top()), &layout, &display, base_color);
        }

        Ok(FadingLabelOutput {
            response,
            faded,
            passes,
        })
    }
}

impl Widget for FadingLabel<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        match self.show(ui) {
            Ok(output) => output.response,
            Err(err) => {
                tracing::error!("fading label layout failed: {err}");
                ui.colored_label(ui.visuals().error_fg_color, err.to_string())
            }
        }
    }
}
