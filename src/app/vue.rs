// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écrans : description (haut), affichage (grand), variable M
// - Pavé : chiffres + les 12 symboles de la table (SYMBOLES) + M / →M / C
// - Démarche : file de jetons + triplet brut de la dernière évaluation

use eframe::egui;

use super::etat::{AppCalc, NOM_VARIABLE};
use crate::noyau::operations::SYMBOLES;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice séquentielle");
                ui.add_space(6.0);

                self.ui_ecrans(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                if !self.erreur.is_empty() {
                    ui.add_space(6.0);
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecrans(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&self.description).monospace().size(16.0));
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(32.0));
                });
            });

        ui.add_space(4.0);
        ui.monospace(&self.affichage_variable);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Pas de précédence : l’ordre de frappe EST l’ordre de calcul.
        const CHIFFRES: [[&str; 3]; 4] = [
            ["7", "8", "9"],
            ["4", "5", "6"],
            ["1", "2", "3"],
            ["0", ".", ""],
        ];

        ui.horizontal_top(|ui| {
            egui::Grid::new("pave_chiffres")
                .num_columns(3)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for ligne in CHIFFRES {
                        for label in ligne {
                            let touche = if label.is_empty() {
                                Touche::Rien
                            } else {
                                Touche::Chiffre
                            };
                            self.bouton_touche(ui, label, touche);
                        }
                        ui.end_row();
                    }
                });

            ui.separator();

            // Opérations : la table elle-même, 4 par ligne.
            egui::Grid::new("pave_operations")
                .num_columns(4)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for ligne in SYMBOLES.chunks(4) {
                        for symbole in ligne {
                            self.bouton_touche(ui, symbole, Touche::Operation);
                        }
                        ui.end_row();
                    }
                });
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_touche(ui, NOM_VARIABLE, Touche::Variable);
            self.bouton_touche(ui, "→M", Touche::EvaluerVariable);
            self.bouton_touche(ui, "C", Touche::ToutEffacer);
        });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        if matches!(touche, Touche::Rien) {
            ui.label("");
            return;
        }

        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre => self.touche_chiffre(label),
            Touche::Operation => self.touche_operation(label),
            Touche::Variable => self.touche_variable(label),
            Touche::EvaluerVariable => self.evaluer_avec_variable(),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::Rien => {}
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let d = self.demarche();
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "Évaluation", "demarche_eval", &d.evaluation);
                Self::champ_demarche(ui, "Sans liaisons", "demarche_brut", &d.sans_liaisons);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre,
    Operation,
    Variable,
    EvaluerVariable,
    ToutEffacer,
    Rien,
}
