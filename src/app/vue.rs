// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Échap = AC (voir app.rs)
// - Pavé 5×4 : AC ( ) ÷ / 7 8 9 × / 4 5 6 − / 1 2 3 + / 0 ⌫ =
// - Menu : choix du moteur + panneau debug

use eframe::egui;

use calculatrice::noyau::Moteur;

use super::etat::AppCalc;

/// Disposition du pavé (ligne par ligne).
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Effacer,
        Touche::Valeur("(", "("),
        Touche::Valeur(")", ")"),
        Touche::Valeur("÷", "/"),
    ],
    [
        Touche::Valeur("7", "7"),
        Touche::Valeur("8", "8"),
        Touche::Valeur("9", "9"),
        Touche::Valeur("×", "*"),
    ],
    [
        Touche::Valeur("4", "4"),
        Touche::Valeur("5", "5"),
        Touche::Valeur("6", "6"),
        Touche::Valeur("−", "-"),
    ],
    [
        Touche::Valeur("1", "1"),
        Touche::Valeur("2", "2"),
        Touche::Valeur("3", "3"),
        Touche::Valeur("+", "+"),
    ],
    [
        Touche::Valeur("0", "0"),
        Touche::Valeur(".", "."),
        Touche::Retour,
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button("☰", |ui| self.ui_menu(ui));
                    });
                });
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                if let Some(lignes) = &self.debug {
                    ui.add_space(8.0);
                    ui.separator();
                    Self::ui_debug(ui, lignes);
                }
            });
    }

    fn ui_menu(&mut self, ui: &mut egui::Ui) {
        ui.label("Moteur :");
        let mut choix = self.moteur;
        for m in Moteur::TOUS {
            ui.radio_value(&mut choix, m, m.libelle());
        }
        if choix != self.moteur {
            self.choisir_moteur(choix);
        }

        ui.separator();

        let mut actif = self.debug.is_some();
        if ui.checkbox(&mut actif, "Afficher les détails debug").changed() {
            self.basculer_debug(actif);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Affichage “à la Android” : expression en haut, résultat en dessous.
        let police = if self.calcule {
            egui::TextStyle::Body
        } else {
            egui::TextStyle::Heading
        };

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("0")
                .horizontal_align(egui::Align::Max)
                .font(police)
                .id_salt("affichage_edit")
                .code_editor(),
        );

        if resp.changed() {
            self.erreur.clear();
        }

        // Si on a cliqué un bouton du pavé, on redonne le focus
        if self.focus_affichage {
            resp.request_focus();
            self.focus_affichage = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.calculer();
        }

        ui.add_space(4.0);

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        } else if self.calcule && !self.resultat.is_empty() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(&self.resultat)
                        .monospace()
                        .size(32.0)
                        .strong(),
                );
            });
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui
            .add_sized([64.0, 48.0], egui::Button::new(touche.libelle()))
            .on_hover_text(touche.aide());

        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Valeur(_, v) => self.appui(v),
            Touche::Effacer => self.effacer(),
            Touche::Retour => self.retour_arriere(),
            Touche::Egal => self.calculer(),
        }
    }

    fn ui_debug(ui: &mut egui::Ui, lignes: &[String]) {
        ui.label(egui::RichText::new("Détails debug").strong());
        if lignes.is_empty() {
            ui.weak("N/A");
        }
        for l in lignes {
            ui.weak(l);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    /// (libellé, texte inséré)
    Valeur(&'static str, &'static str),
    Effacer,
    Retour,
    Egal,
}

impl Touche {
    fn libelle(self) -> &'static str {
        match self {
            Touche::Valeur(l, _) => l,
            Touche::Effacer => "AC",
            Touche::Retour => "⌫",
            Touche::Egal => "=",
        }
    }

    fn aide(self) -> &'static str {
        match self {
            Touche::Valeur(_, v) => v,
            Touche::Effacer => "Remise à zéro totale",
            Touche::Retour => "Efface le dernier caractère",
            Touche::Egal => "Évalue l’expression",
        }
    }
}
