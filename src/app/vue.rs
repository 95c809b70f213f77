// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Le visualiseur joue le rôle d’un moteur d’impression :
// - il choisit le format et fournit le drapeau unicode (format Joli)
// - il demande l’évaluation au noyau à la précision choisie
//
// Recalcul seulement quand un paramètre change (a_rafraichir).

use eframe::egui;

use constantes_qpur::noyau::{registre, FormatRendu, SymboleNumerique};

use super::etat::{AppConstantes, Lecture};

impl AppConstantes {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        if self.a_rafraichir {
            self.actualiser();
            self.a_rafraichir = false;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Constantes Q-pur");
                ui.add_space(6.0);

                self.ui_selection(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_rendus(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_lecture(ui);
            });
    }

    fn ui_selection(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for c in registre::toutes() {
                let choisi = self.nom == c.nom();
                if ui.selectable_label(choisi, c.classe()).clicked() && !choisi {
                    self.selectionner(c.nom());
                }
            }
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let mut unicode = self.unicode;
            if ui.checkbox(&mut unicode, "Unicode").changed() {
                self.set_unicode(unicode);
            }

            ui.separator();

            ui.label("Précision :");
            let mut bits = self.bits;
            let resp = ui.add(
                egui::DragValue::new(&mut bits)
                    .speed(1)
                    .range(0..=4096)
                    .suffix(" bits"),
            );
            if resp.changed() {
                self.set_bits(bits);
            }

            ui.separator();

            let mut chiffres = self.chiffres;
            let resp = ui.add(
                egui::DragValue::new(&mut chiffres)
                    .speed(1)
                    .range(1..=200)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(chiffres);
            }

            ui.separator();

            if ui.button("AC").on_hover_text("Remise à zéro totale").clicked() {
                self.reset_total();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_rendus(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("rendus_constante")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (format, texte) in &self.rendus {
                    ui.label(format!("{format} :"));
                    ui.monospace(texte);
                    ui.end_row();
                }
            });
    }

    fn ui_lecture(&mut self, ui: &mut egui::Ui) {
        if !self.lecture_dispo {
            ui.monospace("lecture indisponible");
            return;
        }

        Self::champ_monospace(ui, "mpf", "mpf_out", &self.lecture.triple);
        Self::champ_monospace(ui, "Valeur", "valeur_out", &self.lecture.scientifique);
        Self::champ_monospace(ui, "Propriétés", "proprietes_out", &self.lecture.proprietes);
    }

    fn champ_monospace(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
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

    /// Interroge le noyau, puis dépose rendus + lecture dans l’état UI.
    fn actualiser(&mut self) {
        let c = match registre::get(&self.nom) {
            Ok(c) => c,
            Err(e) => {
                self.rendus.clear();
                self.set_erreur(e.to_string());
                return;
            }
        };

        let rendus = FormatRendu::TOUS
            .iter()
            .map(|&f| (f.libelle().to_string(), c.rendu(f, self.unicode).to_string()))
            .collect();

        match c.eval_mpf(self.bits) {
            Ok(v) => {
                let p = c.proprietes();
                let lecture = Lecture {
                    triple: format!(
                        "({}, {}, {}, {})",
                        v.signe(),
                        v.mantisse(),
                        v.exposant(),
                        v.bits()
                    ),
                    scientifique: v.to_scientifique(self.chiffres as usize),
                    proprietes: format!(
                        "réel={} positif={} négatif={} irrationnel={}",
                        p.is_real, p.is_positive, p.is_negative, p.is_irrational
                    ),
                };
                self.set_resultats(rendus, Some(lecture));
            }
            Err(e) => {
                self.rendus = rendus;
                self.set_erreur(e.to_string());
            }
        }
    }
}
