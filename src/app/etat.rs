//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : traduire les touches en appels au cerveau, puis relire
//! résultat / description / attente après chaque touche.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par `Cerveau::evaluate`).
//! - L’affichage n’est remplacé que si le cerveau a un résultat.
//! - Une saisie illisible efface tout (et l’erreur reste visible).

use tracing::{debug, warn};

use super::erreur::ErreurSaisie;
use crate::noyau::jetons::format_jetons;
use crate::noyau::{texte_nombre, Cerveau, Evaluation, Variables};

/// Seule variable liable depuis le pavé.
pub const NOM_VARIABLE: &str = "M";

const SUFFIXE_EN_ATTENTE: &str = "...";
const SUFFIXE_TERMINE: &str = " =";

/// Texte “vide” (garde la hauteur des labels).
const VIDE: &str = " ";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub evaluation: String,
    // Même file, lue par les accesseurs du cerveau (variables non liées => 0).
    pub sans_liaisons: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub cerveau: Cerveau,

    // --- écrans ---
    pub affichage: String,          // nombre en cours / dernier résultat
    pub description: String,        // expression + "..." ou " ="
    pub affichage_variable: String, // "M = 4.0"
    pub erreur: String,

    // --- liaisons passées à chaque évaluation ---
    pub variables: Variables,

    // L’utilisateur est en train de taper un nombre.
    pub en_saisie: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            cerveau: Cerveau::new(),
            affichage: "0".to_string(),
            description: VIDE.to_string(),
            affichage_variable: VIDE.to_string(),
            erreur: String::new(),
            variables: Variables::new(),
            en_saisie: false,
        }
    }
}

/// Ligne de description : "..." si en attente, " =" sinon.
pub fn texte_description(e: &Evaluation) -> String {
    if e.description.is_empty() {
        VIDE.to_string()
    } else if e.en_attente {
        format!("{}{SUFFIXE_EN_ATTENTE}", e.description)
    } else {
        format!("{}{SUFFIXE_TERMINE}", e.description)
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou point décimal.
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        debug!(chiffre, en_saisie = self.en_saisie, "touche chiffre");
        if self.en_saisie {
            // un seul point par nombre
            if chiffre == "." && self.affichage.contains('.') {
                return;
            }
            self.affichage.push_str(chiffre);
        } else {
            self.affichage = if chiffre == "." {
                "0.".to_string()
            } else {
                chiffre.to_string()
            };
            self.en_saisie = true;
        }
        self.erreur.clear();
    }

    /// Symbole d’opération : valide d’abord le nombre en cours de saisie.
    pub fn touche_operation(&mut self, symbole: &str) {
        debug!(symbole, en_saisie = self.en_saisie, "touche opération");
        self.erreur.clear();

        if self.en_saisie {
            match self.valeur_affichage() {
                Ok(v) => self.cerveau.ajoute_operande(v),
                Err(e) => {
                    warn!(%e, "saisie rejetée, remise à zéro");
                    self.tout_effacer();
                    self.erreur = e.to_string();
                }
            }
            self.en_saisie = false;
        }

        self.cerveau.ajoute_operation(symbole);
        self.rafraichir();
    }

    /// Référence à une variable (le nombre éventuellement en cours est abandonné).
    pub fn touche_variable(&mut self, nom: &str) {
        debug!(nom, "touche variable");
        self.cerveau.ajoute_variable(nom);
        self.affichage = nom.to_string();
        self.en_saisie = false;
        self.erreur.clear();
    }

    /// "→M" : lie M à la valeur affichée puis réévalue.
    pub fn evaluer_avec_variable(&mut self) {
        match self.valeur_affichage() {
            Ok(v) => {
                debug!(valeur = v, "liaison {NOM_VARIABLE}");
                self.variables.insert(NOM_VARIABLE.to_string(), v);
                self.affichage_variable = format!("{NOM_VARIABLE} = {}", texte_nombre(v));
                self.en_saisie = false;
                self.erreur.clear();
                self.rafraichir();
            }
            Err(e) => {
                warn!(%e, "liaison impossible");
                self.erreur = e.to_string();
            }
        }
    }

    /// C : nouveau calcul, liaisons comprises.
    pub fn tout_effacer(&mut self) {
        debug!("touche C");
        self.cerveau.reset();
        self.affichage = VIDE.to_string();
        self.description = VIDE.to_string();
        self.affichage_variable = VIDE.to_string();
        self.variables.clear();
        self.en_saisie = false;
        self.erreur.clear();
    }

    /// ESC = C ; Enter = "=", sauf si un widget a le focus
    /// (un bouton atteint par Tab réagit déjà à Enter : double déclenchement).
    pub fn raccourci_clavier(&mut self, echap: bool, entree: bool, widget_focus: bool) {
        if echap {
            self.tout_effacer();
        } else if entree && !widget_focus {
            self.touche_operation("=");
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn valeur_affichage(&self) -> Result<f64, ErreurSaisie> {
        let s = self.affichage.trim();
        if s.is_empty() {
            return Err(ErreurSaisie::AffichageVide);
        }
        s.parse::<f64>()
            .map_err(|_| ErreurSaisie::NombreInvalide(s.to_string()))
    }

    /// Relit le cerveau (avec les liaisons) et met les écrans à jour.
    fn rafraichir(&mut self) {
        let e = self.cerveau.evaluate(&self.variables);
        if let Some(r) = e.resultat {
            self.affichage = texte_nombre(r);
        }
        self.description = texte_description(&e);
    }

    pub fn demarche(&self) -> Demarche {
        let e = self.cerveau.evaluate(&self.variables);
        Demarche {
            jetons: format_jetons(self.cerveau.jetons()),
            evaluation: format!(
                "résultat={:?} attente={} description={:?}",
                e.resultat, e.en_attente, e.description
            ),
            sans_liaisons: format!(
                "résultat={:?} attente={} description={:?}",
                self.cerveau.resultat(),
                self.cerveau.resultat_en_attente(),
                self.cerveau.description()
            ),
        }
    }
}
