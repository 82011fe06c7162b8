//! Das bearbeitete Sternsystem mit Planeten und Sprungpunkten.

use glam::Vec2;

/// Standard-Sprite-Radius eines Planeten in Welteinheiten.
pub const PLANET_RADIUS_DEFAULT: f32 = 40.0;

/// Dienste, die ein Planet anbietet.
///
/// Alle Dienste außer `land` setzen voraus, dass gelandet werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanetServices {
    pub land: bool,
    pub refuel: bool,
    pub bar: bool,
    pub missions: bool,
    pub commodity: bool,
    pub outfits: bool,
    pub shipyard: bool,
}

impl PlanetServices {
    /// Entfernt alle Dienste, die ohne Landeerlaubnis nicht verfügbar sind.
    pub fn normalized(self) -> Self {
        if self.land {
            self
        } else {
            Self::default()
        }
    }

    /// Gibt `true` zurück, wenn mindestens ein Dienst aktiv ist.
    pub fn any(&self) -> bool {
        self.land
            || self.refuel
            || self.bar
            || self.missions
            || self.commodity
            || self.outfits
            || self.shipyard
    }
}

/// Fraktions-Präsenz, die ein Planet ins System einbringt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanetPresence {
    /// Präsenzwert der Fraktion
    pub value: f32,
    /// Reichweite in Sprüngen
    pub range: u32,
}

/// Ein Planet (oder eine Station) im System.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    /// Position in Welt-Koordinaten
    pub position: Vec2,
    /// Sprite-Radius in Welteinheiten (aus der Grafik abgeleitet)
    pub radius: f32,
    pub population: u64,
    /// Besitzende Fraktion (None = unbewohnt/neutral)
    pub faction: Option<String>,
    pub presence: PlanetPresence,
    pub services: PlanetServices,
    /// Tech-Gruppen in Einfügereihenfolge, ohne Duplikate
    pub tech: Vec<String>,
    pub description: String,
    pub bar_description: String,
    /// Grafik im Weltraum
    pub gfx_space: String,
    /// Grafik der Landeansicht
    pub gfx_exterior: String,
}

impl Planet {
    /// Erstellt einen unbewohnten Planeten ohne Dienste.
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Self {
            name: name.into(),
            position,
            radius: PLANET_RADIUS_DEFAULT,
            population: 0,
            faction: None,
            presence: PlanetPresence::default(),
            services: PlanetServices::default(),
            tech: Vec::new(),
            description: String::new(),
            bar_description: String::new(),
            gfx_space: String::new(),
            gfx_exterior: String::new(),
        }
    }

    /// Bewohnt, sobald Bevölkerung vorhanden ist.
    pub fn is_inhabited(&self) -> bool {
        self.population > 0
    }

    /// Fügt eine Tech-Gruppe hinzu. Gibt `false` zurück, wenn sie bereits existiert.
    pub fn add_tech(&mut self, tech: &str) -> bool {
        let tech = tech.trim();
        if tech.is_empty() || self.tech.iter().any(|t| t == tech) {
            return false;
        }
        self.tech.push(tech.to_string());
        true
    }

    /// Entfernt eine Tech-Gruppe. Gibt `true` zurück, wenn sie vorhanden war.
    pub fn remove_tech(&mut self, tech: &str) -> bool {
        let before = self.tech.len();
        self.tech.retain(|t| t != tech);
        self.tech.len() != before
    }

    /// Übernimmt alle bearbeitbaren Eigenschaften aus `other`, Position und Name bleiben.
    pub fn apply_properties(&mut self, other: &Planet) {
        self.radius = other.radius;
        self.population = other.population;
        self.faction = other
            .faction
            .as_ref()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        self.presence = other.presence;
        self.services = other.services.normalized();
        self.tech.clear();
        for tech in &other.tech {
            self.add_tech(tech);
        }
        self.description = other.description.clone();
        self.bar_description = other.bar_description.clone();
        self.gfx_space = other.gfx_space.clone();
        self.gfx_exterior = other.gfx_exterior.clone();
    }
}

/// Ein Sprungpunkt in ein anderes System.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpPoint {
    /// Name des Zielsystems
    pub target: String,
    /// Position in Welt-Koordinaten
    pub position: Vec2,
    /// Position wird aus der Geometrie des Gegen-Sprungpunkts berechnet
    pub auto_position: bool,
    /// Nur mit Erkundung sichtbar
    pub hidden: bool,
    /// Nur als Ausgang nutzbar
    pub exit_only: bool,
}

impl JumpPoint {
    /// Erstellt einen automatisch positionierten Sprungpunkt.
    pub fn new(target: impl Into<String>, position: Vec2) -> Self {
        Self {
            target: target.into(),
            position,
            auto_position: true,
            hidden: false,
            exit_only: false,
        }
    }

    /// Übernimmt die Flags aus `other`, Position und Ziel bleiben.
    pub fn apply_properties(&mut self, other: &JumpPoint) {
        self.auto_position = other.auto_position;
        self.hidden = other.hidden;
        self.exit_only = other.exit_only;
    }
}

/// Das aktuell bearbeitete Sternsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub name: String,
    /// Systemradius in Welteinheiten
    pub radius: f32,
    pub planets: Vec<Planet>,
    pub jumps: Vec<JumpPoint>,
}

impl StarSystem {
    /// Erstellt ein leeres System.
    pub fn new(name: impl Into<String>, radius: f32) -> Self {
        Self {
            name: name.into(),
            radius,
            planets: Vec::new(),
            jumps: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Planeten zurück
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// Gibt die Anzahl der Sprungpunkte zurück
    pub fn jump_count(&self) -> usize {
        self.jumps.len()
    }

    /// Sucht einen Planeten nach Namen.
    pub fn find_planet(&self, name: &str) -> Option<usize> {
        self.planets.iter().position(|p| p.name == name)
    }

    /// Skaliert alle Positionen und den Systemradius um `factor`.
    pub fn scale(&mut self, factor: f32) {
        self.radius *= factor;
        for planet in &mut self.planets {
            planet.position *= factor;
        }
        for jump in &mut self.jumps {
            jump.position *= factor;
        }
    }

    /// Kleines Beispielsystem für den Editor-Start.
    pub fn demo() -> Self {
        let mut system = Self::new("Delta Polaris", 6000.0);

        let mut station = Planet::new("Polaris Station", Vec2::new(-1200.0, 800.0));
        station.radius = 30.0;
        station.population = 120_000;
        station.faction = Some("Empire".to_string());
        station.presence = PlanetPresence {
            value: 100.0,
            range: 2,
        };
        station.services = PlanetServices {
            land: true,
            refuel: true,
            bar: true,
            missions: true,
            commodity: true,
            outfits: false,
            shipyard: false,
        };
        station.add_tech("Basic Outfits 1");
        system.planets.push(station);

        let mut rock = Planet::new("Delta Polaris IV", Vec2::new(2500.0, -1500.0));
        rock.radius = 90.0;
        system.planets.push(rock);

        system
            .jumps
            .push(JumpPoint::new("Arcturus", Vec2::new(5200.0, 900.0)));
        let mut hidden = JumpPoint::new("Nox", Vec2::new(-4100.0, -3800.0));
        hidden.hidden = true;
        hidden.auto_position = false;
        system.jumps.push(hidden);

        system
    }
}
