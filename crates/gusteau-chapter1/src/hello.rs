use gusteau_engine::core::ApplicationContext;
use gusteau_engine::device::GraphicsContext;
use gusteau_engine::ui::{UiConfig, UiContent, UiContext};

pub const GREETING: &str = "Hello world";
pub const QUIT_LABEL: &str = "Quit";

/// Chapter 1 content: a greeting and a button that ends the program.
#[derive(Debug, Default)]
pub struct HelloWorld;

impl UiContent for HelloWorld {
    fn run(&mut self, ui: &mut egui::Ui, app: &dyn ApplicationContext) {
        ui.label(GREETING);
        if ui.button(QUIT_LABEL).clicked() {
            app.join_flag().request();
        }
    }
}

/// Window settings for this chapter: a square window cleared to red,
/// redrawn at 24 Hz while idle.
pub fn chapter1_ui_config() -> UiConfig {
    UiConfig::default()
        .title("gusteau")
        .size(1024.0, 1024.0)
        .clear_color(egui::Rgba::from_rgb(1.0, 0.0, 0.0))
        .redraw_rate(24.0)
}

pub fn create_ui_context(graphics: &GraphicsContext) -> UiContext {
    UiContext::new(graphics, chapter1_ui_config(), HelloWorld)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gusteau_engine::core::{JoinFlag, RenderContext, StateContext};
    use gusteau_engine::ui::show_content;

    #[derive(Default)]
    struct TestContext {
        join: JoinFlag,
        state: StateContext,
        render: RenderContext,
    }

    impl ApplicationContext for TestContext {
        fn join_flag(&self) -> &JoinFlag {
            &self.join
        }

        fn state(&self) -> &StateContext {
            &self.state
        }

        fn render(&self) -> &RenderContext {
            &self.render
        }
    }

    fn input(time: f64, events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            time: Some(time),
            events,
            ..Default::default()
        }
    }

    fn frame(
        ctx: &egui::Context,
        content: &mut HelloWorld,
        app: &TestContext,
        raw: egui::RawInput,
    ) -> egui::FullOutput {
        ctx.run(raw, |ctx| show_content(ctx, &mut *content, app))
    }

    fn collect_texts(shape: &egui::Shape, out: &mut Vec<(String, egui::Rect)>) {
        match shape {
            egui::Shape::Text(text) => {
                let rect = text.galley.rect.translate(text.pos.to_vec2());
                out.push((text.galley.text().to_string(), rect));
            }
            egui::Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, out)),
            _ => {}
        }
    }

    fn texts(output: &egui::FullOutput) -> Vec<(String, egui::Rect)> {
        let mut out = Vec::new();
        for clipped in &output.shapes {
            collect_texts(&clipped.shape, &mut out);
        }
        out
    }

    #[test]
    fn chapter_window_is_square_and_red() {
        let cfg = chapter1_ui_config();
        assert_eq!(cfg.title, "gusteau");
        assert_eq!((cfg.initial_size.width, cfg.initial_size.height), (1024.0, 1024.0));
        assert_eq!(cfg.clear_color, egui::Rgba::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(cfg.redraw_rate_hz, 24.0);
    }

    #[test]
    fn shows_greeting_and_quit_button() {
        let ctx = egui::Context::default();
        let app = TestContext::default();
        let mut content = HelloWorld;

        let output = frame(&ctx, &mut content, &app, input(0.0, vec![]));
        let labels: Vec<String> = texts(&output).into_iter().map(|(t, _)| t).collect();

        assert!(labels.iter().any(|t| t == GREETING), "labels: {labels:?}");
        assert!(labels.iter().any(|t| t == QUIT_LABEL), "labels: {labels:?}");
    }

    #[test]
    fn frames_without_input_do_not_join() {
        let ctx = egui::Context::default();
        let app = TestContext::default();
        let mut content = HelloWorld;

        for i in 0..3 {
            frame(&ctx, &mut content, &app, input(f64::from(i) * 0.1, vec![]));
        }
        assert!(!app.join.is_set());
    }

    #[test]
    fn clicking_quit_requests_join() {
        let ctx = egui::Context::default();
        let app = TestContext::default();
        let mut content = HelloWorld;

        let output = frame(&ctx, &mut content, &app, input(0.0, vec![]));
        let (_, quit_rect) = texts(&output)
            .into_iter()
            .find(|(t, _)| t == QUIT_LABEL)
            .expect("quit button drawn");
        let pos = quit_rect.center();

        let press = egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        let release = egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };

        frame(&ctx, &mut content, &app, input(0.1, vec![egui::Event::PointerMoved(pos)]));
        frame(&ctx, &mut content, &app, input(0.2, vec![press]));
        assert!(!app.join.is_set());
        frame(&ctx, &mut content, &app, input(0.3, vec![release]));

        assert!(app.join.is_set());
    }
}
