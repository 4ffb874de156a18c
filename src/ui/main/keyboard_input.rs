use crate::app::KanaPadApp;

impl KanaPadApp {
    pub fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let mut clear = false;
        let mut copy = false;
        let mut bigger = false;
        let mut smaller = false;
        let mut flip = false;

        ctx.input(|i| {
            clear = i.key_pressed(egui::Key::Escape);
            // Platforms deliver Ctrl+C / Cmd+C as a copy event
            copy = i.events.iter().any(|e| matches!(e, egui::Event::Copy));
            bigger = i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals);
            smaller = i.key_pressed(egui::Key::Minus);
            flip = i.key_pressed(egui::Key::F2);
        });

        if clear {
            self.clear_text();
        }
        if copy {
            self.copy_or_report();
        }
        if bigger {
            self.increase_font_size();
        }
        if smaller {
            self.decrease_font_size();
        }
        if flip {
            self.toggle_face_to_face();
        }
    }
}
