use crate::core::ApplicationContext;

/// Inner margin of the full-window panel, in points.
const PANEL_MARGIN: i8 = 8;

/// Per-frame UI content.
///
/// Called once per rendered frame, inside a panel covering the whole window.
/// Implementations talk to the rest of the program only through `app`.
pub trait UiContent: 'static {
    fn run(&mut self, ui: &mut egui::Ui, app: &dyn ApplicationContext);
}

impl<F> UiContent for F
where
    F: FnMut(&mut egui::Ui, &dyn ApplicationContext) + 'static,
{
    fn run(&mut self, ui: &mut egui::Ui, app: &dyn ApplicationContext) {
        self(ui, app)
    }
}

/// Lays `content` out in a frameless panel covering the whole viewport.
///
/// The panel paints no background, so the window clear colour shows through.
pub fn show_content(
    ctx: &egui::Context,
    content: &mut dyn UiContent,
    app: &dyn ApplicationContext,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(PANEL_MARGIN)))
        .show(ctx, |ui| content.run(ui, app));
}
