//! Fixed strings and vocabularies shared by the engine.
//!
//! The vocabularies feed the pseudonym generator. Their order and length are
//! part of the naming contract: reordering or resizing any of them changes the
//! fantasy name assigned to every URL.

/// Substring every accepted panorama URL must contain.
pub const EMBED_MARKER: &str = "google.com/maps/embed";

/// Prefix identifying a pasted `<iframe>` snippet instead of a bare URL.
pub const IFRAME_PREFIX: &str = "<iframe";

/// Real name assigned to lines that omit one.
pub const DEFAULT_LOCATION_NAME: &str = "Nombre no disponible";

/// Pseudonym returned for an empty URL.
pub const UNNAMED_LOCATION_LABEL: &str = "Ubicación Sin Nombre ❓";

pub const FANTASY_ADJECTIVES: [&str; 35] = [
    "Mágico",
    "Estelar",
    "Antiguo",
    "Secreto",
    "Cósmico",
    "Misterioso",
    "Silencioso",
    "Radiante",
    "Espectacular",
    "Fantástico",
    "Imponente",
    "Celestial",
    "Galáctico",
    "Etereo",
    "Brillante",
    "Oculto",
    "Lejano",
    "Increíble",
    "Sublime",
    "Épico",
    "Inolvidable",
    "Bello",
    "Dulce",
    "Magnífico",
    "Bonito",
    "Majestuoso",
    "Divino",
    "Espléndido",
    "Gran",
    "Hermoso",
    "Maravilloso",
    "Icónico",
    "Precioso",
    "Inmenso",
    "Acogedor",
];

pub const FANTASY_NOUNS: [&str; 32] = [
    "Valle",
    "Bosque",
    "Templo",
    "Jardín",
    "Cerro",
    "Ciudad",
    "Mirador",
    "Puerto",
    "Río",
    "Cráter",
    "Choclo",
    "Enchufe",
    "Celular",
    "Parque",
    "Castillo",
    "Laberinto",
    "Desierto",
    "Glaciar",
    "Lugar",
    "Paisaje",
    "Pantano",
    "Camino",
    "Volcán",
    "Lago",
    "Playa",
    "Montaña",
    "Pueblo",
    "Callejón",
    "Sendero",
    "Árbol",
    "Cielo",
    "Mar",
];

// Emoji decorations; some carry a variation selector and are more than one
// `char` long, so they stay `&str`.
pub const FANTASY_DECORATIONS: [&str; 31] = [
    "✨", "🌌", "🌿", "🏰", "⛰️", "🏙️", "🔭", "🏝️", "🌊", "❄️", "🌋", "✈", "🌽", "🔌", "✉️", "📱",
    "🦄", "🌈", "🔮", "🗺️", "💎", "🔑", "🌵", "🚂", "🎨", "🌳", "🤩", "🤯", "📸", "🌟", "🌎",
];
