//! The 88 modern constellations, in catalog order.
//!
//! The GCVS lays out its data files one constellation after another,
//! alphabetically by Latin nominative name. That ordering is *not* the
//! alphabetical order of the IAU abbreviations: Aquarius (Aqr) precedes
//! Aquila (Aql), Sagitta (Sge) precedes Sagittarius (Sgr). Anything that
//! walks the catalog file must iterate [`ALL_CONSTELLATIONS`] rather than
//! sorting abbreviations.
//!
//! [`Constellation::resolve`] maps user input (an abbreviation or a Latin
//! name, any case) back to a variant, which is how free-form designations
//! like `"R Cyg"` or `"SS Cygnus"` get a search range assigned.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::VarStarError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 88 modern constellations.
///
/// Variants are declared in catalog order; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constellation {
    Andromeda,
    Antlia,
    Apus,
    Aquarius,
    Aquila,
    Ara,
    Aries,
    Auriga,
    Bootes,
    Caelum,
    Camelopardalis,
    Cancer,
    CanesVenatici,
    CanisMajor,
    CanisMinor,
    Capricornus,
    Carina,
    Cassiopeia,
    Centaurus,
    Cepheus,
    Cetus,
    Chamaeleon,
    Circinus,
    Columba,
    ComaBerenices,
    CoronaAustralis,
    CoronaBorealis,
    Corvus,
    Crater,
    Crux,
    Cygnus,
    Delphinus,
    Dorado,
    Draco,
    Equuleus,
    Eridanus,
    Fornax,
    Gemini,
    Grus,
    Hercules,
    Horologium,
    Hydra,
    Hydrus,
    Indus,
    Lacerta,
    Leo,
    LeoMinor,
    Lepus,
    Libra,
    Lupus,
    Lynx,
    Lyra,
    Mensa,
    Microscopium,
    Monoceros,
    Musca,
    Norma,
    Octans,
    Ophiuchus,
    Orion,
    Pavo,
    Pegasus,
    Perseus,
    Phoenix,
    Pictor,
    Pisces,
    PiscisAustrinus,
    Puppis,
    Pyxis,
    Reticulum,
    Sagitta,
    Sagittarius,
    Scorpius,
    Sculptor,
    Scutum,
    Serpens,
    Sextans,
    Taurus,
    Telescopium,
    Triangulum,
    TriangulumAustrale,
    Tucana,
    UrsaMajor,
    UrsaMinor,
    Vela,
    Virgo,
    Volans,
    Vulpecula,
}

/// All 88 constellations, in catalog order.
pub const ALL_CONSTELLATIONS: [Constellation; 88] = [
    Constellation::Andromeda,
    Constellation::Antlia,
    Constellation::Apus,
    Constellation::Aquarius,
    Constellation::Aquila,
    Constellation::Ara,
    Constellation::Aries,
    Constellation::Auriga,
    Constellation::Bootes,
    Constellation::Caelum,
    Constellation::Camelopardalis,
    Constellation::Cancer,
    Constellation::CanesVenatici,
    Constellation::CanisMajor,
    Constellation::CanisMinor,
    Constellation::Capricornus,
    Constellation::Carina,
    Constellation::Cassiopeia,
    Constellation::Centaurus,
    Constellation::Cepheus,
    Constellation::Cetus,
    Constellation::Chamaeleon,
    Constellation::Circinus,
    Constellation::Columba,
    Constellation::ComaBerenices,
    Constellation::CoronaAustralis,
    Constellation::CoronaBorealis,
    Constellation::Corvus,
    Constellation::Crater,
    Constellation::Crux,
    Constellation::Cygnus,
    Constellation::Delphinus,
    Constellation::Dorado,
    Constellation::Draco,
    Constellation::Equuleus,
    Constellation::Eridanus,
    Constellation::Fornax,
    Constellation::Gemini,
    Constellation::Grus,
    Constellation::Hercules,
    Constellation::Horologium,
    Constellation::Hydra,
    Constellation::Hydrus,
    Constellation::Indus,
    Constellation::Lacerta,
    Constellation::Leo,
    Constellation::LeoMinor,
    Constellation::Lepus,
    Constellation::Libra,
    Constellation::Lupus,
    Constellation::Lynx,
    Constellation::Lyra,
    Constellation::Mensa,
    Constellation::Microscopium,
    Constellation::Monoceros,
    Constellation::Musca,
    Constellation::Norma,
    Constellation::Octans,
    Constellation::Ophiuchus,
    Constellation::Orion,
    Constellation::Pavo,
    Constellation::Pegasus,
    Constellation::Perseus,
    Constellation::Phoenix,
    Constellation::Pictor,
    Constellation::Pisces,
    Constellation::PiscisAustrinus,
    Constellation::Puppis,
    Constellation::Pyxis,
    Constellation::Reticulum,
    Constellation::Sagitta,
    Constellation::Sagittarius,
    Constellation::Scorpius,
    Constellation::Sculptor,
    Constellation::Scutum,
    Constellation::Serpens,
    Constellation::Sextans,
    Constellation::Taurus,
    Constellation::Telescopium,
    Constellation::Triangulum,
    Constellation::TriangulumAustrale,
    Constellation::Tucana,
    Constellation::UrsaMajor,
    Constellation::UrsaMinor,
    Constellation::Vela,
    Constellation::Virgo,
    Constellation::Volans,
    Constellation::Vulpecula,
];

/// Lookup keyed by upper-cased abbreviation and Latin name.
static RESOLVE_MAP: Lazy<HashMap<String, Constellation>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(88 * 2);
    for &constellation in &ALL_CONSTELLATIONS {
        map.insert(constellation.abbreviation().to_ascii_uppercase(), constellation);
        map.insert(constellation.latin_name().to_ascii_uppercase(), constellation);
    }
    map
});

impl Constellation {
    /// Returns the IAU three-letter abbreviation (e.g. `"Cyg"`).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Andromeda => "And",
            Self::Antlia => "Ant",
            Self::Apus => "Aps",
            Self::Aquarius => "Aqr",
            Self::Aquila => "Aql",
            Self::Ara => "Ara",
            Self::Aries => "Ari",
            Self::Auriga => "Aur",
            Self::Bootes => "Boo",
            Self::Caelum => "Cae",
            Self::Camelopardalis => "Cam",
            Self::Cancer => "Cnc",
            Self::CanesVenatici => "CVn",
            Self::CanisMajor => "CMa",
            Self::CanisMinor => "CMi",
            Self::Capricornus => "Cap",
            Self::Carina => "Car",
            Self::Cassiopeia => "Cas",
            Self::Centaurus => "Cen",
            Self::Cepheus => "Cep",
            Self::Cetus => "Cet",
            Self::Chamaeleon => "Cha",
            Self::Circinus => "Cir",
            Self::Columba => "Col",
            Self::ComaBerenices => "Com",
            Self::CoronaAustralis => "CrA",
            Self::CoronaBorealis => "CrB",
            Self::Corvus => "Crv",
            Self::Crater => "Crt",
            Self::Crux => "Cru",
            Self::Cygnus => "Cyg",
            Self::Delphinus => "Del",
            Self::Dorado => "Dor",
            Self::Draco => "Dra",
            Self::Equuleus => "Equ",
            Self::Eridanus => "Eri",
            Self::Fornax => "For",
            Self::Gemini => "Gem",
            Self::Grus => "Gru",
            Self::Hercules => "Her",
            Self::Horologium => "Hor",
            Self::Hydra => "Hya",
            Self::Hydrus => "Hyi",
            Self::Indus => "Ind",
            Self::Lacerta => "Lac",
            Self::Leo => "Leo",
            Self::LeoMinor => "LMi",
            Self::Lepus => "Lep",
            Self::Libra => "Lib",
            Self::Lupus => "Lup",
            Self::Lynx => "Lyn",
            Self::Lyra => "Lyr",
            Self::Mensa => "Men",
            Self::Microscopium => "Mic",
            Self::Monoceros => "Mon",
            Self::Musca => "Mus",
            Self::Norma => "Nor",
            Self::Octans => "Oct",
            Self::Ophiuchus => "Oph",
            Self::Orion => "Ori",
            Self::Pavo => "Pav",
            Self::Pegasus => "Peg",
            Self::Perseus => "Per",
            Self::Phoenix => "Phe",
            Self::Pictor => "Pic",
            Self::Pisces => "Psc",
            Self::PiscisAustrinus => "PsA",
            Self::Puppis => "Pup",
            Self::Pyxis => "Pyx",
            Self::Reticulum => "Ret",
            Self::Sagitta => "Sge",
            Self::Sagittarius => "Sgr",
            Self::Scorpius => "Sco",
            Self::Sculptor => "Scl",
            Self::Scutum => "Sct",
            Self::Serpens => "Ser",
            Self::Sextans => "Sex",
            Self::Taurus => "Tau",
            Self::Telescopium => "Tel",
            Self::Triangulum => "Tri",
            Self::TriangulumAustrale => "TrA",
            Self::Tucana => "Tuc",
            Self::UrsaMajor => "UMa",
            Self::UrsaMinor => "UMi",
            Self::Vela => "Vel",
            Self::Virgo => "Vir",
            Self::Volans => "Vol",
            Self::Vulpecula => "Vul",
        }
    }

    /// Returns the Latin nominative name (e.g. `"Cygnus"`).
    pub fn latin_name(self) -> &'static str {
        match self {
            Self::Andromeda => "Andromeda",
            Self::Antlia => "Antlia",
            Self::Apus => "Apus",
            Self::Aquarius => "Aquarius",
            Self::Aquila => "Aquila",
            Self::Ara => "Ara",
            Self::Aries => "Aries",
            Self::Auriga => "Auriga",
            Self::Bootes => "Bootes",
            Self::Caelum => "Caelum",
            Self::Camelopardalis => "Camelopardalis",
            Self::Cancer => "Cancer",
            Self::CanesVenatici => "Canes Venatici",
            Self::CanisMajor => "Canis Major",
            Self::CanisMinor => "Canis Minor",
            Self::Capricornus => "Capricornus",
            Self::Carina => "Carina",
            Self::Cassiopeia => "Cassiopeia",
            Self::Centaurus => "Centaurus",
            Self::Cepheus => "Cepheus",
            Self::Cetus => "Cetus",
            Self::Chamaeleon => "Chamaeleon",
            Self::Circinus => "Circinus",
            Self::Columba => "Columba",
            Self::ComaBerenices => "Coma Berenices",
            Self::CoronaAustralis => "Corona Australis",
            Self::CoronaBorealis => "Corona Borealis",
            Self::Corvus => "Corvus",
            Self::Crater => "Crater",
            Self::Crux => "Crux",
            Self::Cygnus => "Cygnus",
            Self::Delphinus => "Delphinus",
            Self::Dorado => "Dorado",
            Self::Draco => "Draco",
            Self::Equuleus => "Equuleus",
            Self::Eridanus => "Eridanus",
            Self::Fornax => "Fornax",
            Self::Gemini => "Gemini",
            Self::Grus => "Grus",
            Self::Hercules => "Hercules",
            Self::Horologium => "Horologium",
            Self::Hydra => "Hydra",
            Self::Hydrus => "Hydrus",
            Self::Indus => "Indus",
            Self::Lacerta => "Lacerta",
            Self::Leo => "Leo",
            Self::LeoMinor => "Leo Minor",
            Self::Lepus => "Lepus",
            Self::Libra => "Libra",
            Self::Lupus => "Lupus",
            Self::Lynx => "Lynx",
            Self::Lyra => "Lyra",
            Self::Mensa => "Mensa",
            Self::Microscopium => "Microscopium",
            Self::Monoceros => "Monoceros",
            Self::Musca => "Musca",
            Self::Norma => "Norma",
            Self::Octans => "Octans",
            Self::Ophiuchus => "Ophiuchus",
            Self::Orion => "Orion",
            Self::Pavo => "Pavo",
            Self::Pegasus => "Pegasus",
            Self::Perseus => "Perseus",
            Self::Phoenix => "Phoenix",
            Self::Pictor => "Pictor",
            Self::Pisces => "Pisces",
            Self::PiscisAustrinus => "Piscis Austrinus",
            Self::Puppis => "Puppis",
            Self::Pyxis => "Pyxis",
            Self::Reticulum => "Reticulum",
            Self::Sagitta => "Sagitta",
            Self::Sagittarius => "Sagittarius",
            Self::Scorpius => "Scorpius",
            Self::Sculptor => "Sculptor",
            Self::Scutum => "Scutum",
            Self::Serpens => "Serpens",
            Self::Sextans => "Sextans",
            Self::Taurus => "Taurus",
            Self::Telescopium => "Telescopium",
            Self::Triangulum => "Triangulum",
            Self::TriangulumAustrale => "Triangulum Australe",
            Self::Tucana => "Tucana",
            Self::UrsaMajor => "Ursa Major",
            Self::UrsaMinor => "Ursa Minor",
            Self::Vela => "Vela",
            Self::Virgo => "Virgo",
            Self::Volans => "Volans",
            Self::Vulpecula => "Vulpecula",
        }
    }

    /// Resolves an IAU abbreviation or Latin name, case-insensitively.
    ///
    /// Interior whitespace runs are collapsed, so `"ursa  major"` resolves.
    /// Returns `None` for anything that is neither form.
    pub fn resolve(token: &str) -> Option<Constellation> {
        let key = token
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        RESOLVE_MAP.get(&key).copied()
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.latin_name())
    }
}

impl FromStr for Constellation {
    type Err = VarStarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| VarStarError::unknown_constellation(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_88_entries() {
        assert_eq!(ALL_CONSTELLATIONS.len(), 88);
    }

    #[test]
    fn test_abbreviations_unique() {
        let mut seen = std::collections::HashSet::new();
        for constellation in ALL_CONSTELLATIONS {
            assert!(
                seen.insert(constellation.abbreviation()),
                "duplicate abbreviation {}",
                constellation.abbreviation()
            );
        }
    }

    #[test]
    fn test_catalog_order_is_not_abbreviation_order() {
        let aqr = ALL_CONSTELLATIONS
            .iter()
            .position(|c| *c == Constellation::Aquarius)
            .unwrap();
        let aql = ALL_CONSTELLATIONS
            .iter()
            .position(|c| *c == Constellation::Aquila)
            .unwrap();
        assert!(aqr < aql, "Aquarius must precede Aquila in catalog order");
        assert_eq!(ALL_CONSTELLATIONS[0], Constellation::Andromeda);
        assert_eq!(ALL_CONSTELLATIONS[87], Constellation::Vulpecula);
    }

    #[test]
    fn test_resolve_abbreviation() {
        assert_eq!(Constellation::resolve("Cyg"), Some(Constellation::Cygnus));
        assert_eq!(Constellation::resolve("cyg"), Some(Constellation::Cygnus));
        assert_eq!(Constellation::resolve("CYG"), Some(Constellation::Cygnus));
    }

    #[test]
    fn test_resolve_latin_name() {
        assert_eq!(
            Constellation::resolve("Cygnus"),
            Some(Constellation::Cygnus)
        );
        assert_eq!(
            Constellation::resolve("ursa  major"),
            Some(Constellation::UrsaMajor)
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(Constellation::resolve("Xyz"), None);
        assert_eq!(Constellation::resolve(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "Nonexistent".parse::<Constellation>().unwrap_err();
        assert!(err.to_string().contains("Nonexistent"));
    }

    #[test]
    fn test_display_is_latin_name() {
        assert_eq!(Constellation::CanesVenatici.to_string(), "Canes Venatici");
    }
}
